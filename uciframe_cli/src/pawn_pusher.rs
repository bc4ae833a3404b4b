use fxhash::FxHashMap;
use log::{debug, trace};
use std::io;
use uciframe_lib::command::SearchParameters;
use uciframe_lib::handler::Handler;
use uciframe_lib::writer::{OutputWriter, NULL_MOVE};

const FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Plays black and ignores the board entirely: every black pawn steps forward once, then
/// again, then a third time, then it only has the null move left.
///
/// Mostly meant for testing a GUI connection.
pub struct PawnPusher {
   pub name: String,
   pub author: String,
   moves_played: usize,
   debug: bool,
   options: FxHashMap<String, String>,
}

impl Default for PawnPusher {
   fn default() -> PawnPusher {
      PawnPusher {
         name: "uciframe pawn pusher".into(),
         author: "Richard McCormack".into(),
         moves_played: 0,
         debug: false,
         options: FxHashMap::default(),
      }
   }
}

impl PawnPusher {
   /// (file, from rank, to rank) of the next push, if any pawn push is left.
   fn next_push(&self) -> Option<(char, char, char)> {
      let file = FILES[self.moves_played % 8];
      match self.moves_played / 8 {
         0 => Some((file, '7', '6')),
         1 => Some((file, '6', '5')),
         2 => Some((file, '5', '4')),
         _ => None,
      }
   }
}

impl Handler for PawnPusher {
   fn name(&self) -> String {
      self.name.clone()
   }

   fn author(&self) -> String {
      self.author.clone()
   }

   fn set_debug(&mut self, enabled: bool) {
      self.debug = enabled;
   }

   fn set_option(&mut self, name: String, value: String) {
      debug!("option {} = {}", name, value);
      self.options.insert(name, value);
   }

   fn new_game(&mut self) {
      self.moves_played = 0;
   }

   fn position_from_start(&mut self, tokens: Vec<String>) {
      trace!("position {}", tokens.join(" "));
   }

   fn position_from_fen(&mut self, tokens: Vec<String>) {
      trace!("position {}", tokens.join(" "));
   }

   fn go(&mut self, params: &mut SearchParameters, out: &mut OutputWriter) -> io::Result<()> {
      if self.debug {
         out.send_info_string(&format!(
            "move {} with {} option(s) set, unbounded search: {}",
            self.moves_played + 1,
            self.options.len(),
            params.is_unbounded()
         ))?;
      }
      match self.next_push() {
         Some((file, from, to)) => out.send_move_coords(file, from, file, to)?,
         None => out.send_move(NULL_MOVE)?,
      }
      self.moves_played += 1;
      Ok(())
   }
}

#[cfg(test)]
mod tests {
   use crate::pawn_pusher::*;
   use parking_lot::Mutex;
   use std::io::Write;
   use std::sync::Arc;

   #[derive(Clone, Default)]
   struct Shared(Arc<Mutex<Vec<u8>>>);

   impl Write for Shared {
      fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
         self.0.lock().extend_from_slice(buf);
         Ok(buf.len())
      }

      fn flush(&mut self) -> io::Result<()> {
         Ok(())
      }
   }

   fn best_moves(engine: &mut PawnPusher, count: usize) -> Vec<String> {
      let shared = Shared::default();
      let mut out = OutputWriter::new(Box::new(shared.clone()));
      for _ in 0..count {
         engine.go(&mut SearchParameters::default(), &mut out).unwrap();
      }
      let text = String::from_utf8(shared.0.lock().clone()).unwrap();
      text.lines().map(str::to_string).collect()
   }

   #[test]
   fn pushes_each_pawn_three_times_then_passes() {
      let mut engine = PawnPusher::default();
      let moves = best_moves(&mut engine, 26);
      assert_eq!(moves[0], "bestmove a7a6");
      assert_eq!(moves[7], "bestmove h7h6");
      assert_eq!(moves[8], "bestmove a6a5");
      assert_eq!(moves[16], "bestmove a5a4");
      assert_eq!(moves[23], "bestmove h5h4");
      assert_eq!(moves[24], "bestmove 0000");
      assert_eq!(moves[25], "bestmove 0000");
   }

   #[test]
   fn new_game_starts_over() {
      let mut engine = PawnPusher::default();
      best_moves(&mut engine, 3);
      engine.new_game();
      assert_eq!(best_moves(&mut engine, 1), vec!["bestmove a7a6"]);
   }

   #[test]
   fn debug_mode_adds_info_strings() {
      let mut engine = PawnPusher::default();
      engine.set_option("Hash".into(), "16".into());
      engine.set_debug(true);
      assert_eq!(
         best_moves(&mut engine, 1),
         vec![
            "info string move 1 with 1 option(s) set, unbounded search: true",
            "bestmove a7a6"
         ]
      );
   }
}
