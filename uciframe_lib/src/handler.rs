//! The chess side of the engine.
//!
//! The harness knows nothing about boards, moves or search. It calls into a `Handler` from the
//! compute thread only, one command at a time and in input order, so a handler can keep all of
//! its state in plain fields.
//!
//! For a very basic engine, only `position_from_start`/`position_from_fen` and `go` need an
//! implementation.

use crate::command::SearchParameters;
use crate::writer::OutputWriter;
use std::io;

pub trait Handler: Send {
   /// Reported as `id name <name>` in reply to `uci`.
   fn name(&self) -> String {
      "uciframe".to_string()
   }

   /// Reported as `id author <author>` in reply to `uci`.
   fn author(&self) -> String {
      "Richard McCormack".to_string()
   }

   /// `debug on|off`. The GUI expects no output.
   fn set_debug(&mut self, _enabled: bool) {}

   /// `setoption name <name> value <value>`. The name may contain spaces. The GUI expects no output.
   fn set_option(&mut self, _name: String, _value: String) {}

   /// The next search will be from a different game, or a new position from a test suite.
   fn new_game(&mut self) {}

   /// Finish any pending setup. The harness answers `readyok` once this returns.
   fn is_ready(&mut self) {}

   /// `position fen ...`. `tokens` starts with `fen`, followed by the FEN fields and,
   /// optionally, `moves` and the moves to replay.
   fn position_from_fen(&mut self, _tokens: Vec<String>) {}

   /// `position startpos ...`. `tokens` starts with `startpos`, optionally followed by `moves`
   /// and the moves to replay.
   fn position_from_start(&mut self, _tokens: Vec<String>) {}

   /// Start searching the current position.
   ///
   /// Fields left at zero must not constrain the search. The handler is responsible for
   /// eventually sending `bestmove`, either from here or in response to `stop`. The compute
   /// thread stays inside this call until it returns, so commands queued in the meantime
   /// (including `stop`) are only delivered afterwards.
   fn go(&mut self, _params: &mut SearchParameters, _out: &mut OutputWriter) -> io::Result<()> {
      Ok(())
   }

   /// The opponent played the expected move; keep searching but stop pondering.
   fn ponder_hit(&mut self, _out: &mut OutputWriter) -> io::Result<()> {
      Ok(())
   }

   /// Stop as soon as possible. `bestmove` must still be sent.
   fn stop(&mut self, _out: &mut OutputWriter) -> io::Result<()> {
      Ok(())
   }

   /// Clean up. The compute thread exits after this returns.
   fn quit(&mut self) {}
}
