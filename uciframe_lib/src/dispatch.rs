use crate::command::Command;
use crate::diagnostics::{DiagnosticEvent, Diagnostics};
use crate::handler::Handler;
use crate::queue::CommandQueue;
use crate::writer::OutputWriter;
use log::{info, trace};
use std::io;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
   Continue,
   Exit,
}

/// Routes one command to the matching handler operation.
pub fn dispatch(
   command: Command,
   handler: &mut dyn Handler,
   out: &mut OutputWriter,
   diagnostics: &Diagnostics,
) -> io::Result<Flow> {
   trace!("dispatching {}", command.keyword());
   diagnostics.record(DiagnosticEvent::Dispatched {
      command: command.keyword(),
   });
   match command {
      Command::Hello => {
         out.send_hello(&handler.name(), &handler.author())?;
      }
      Command::SetDebug(enabled) => {
         diagnostics.set_debug(enabled);
         handler.set_debug(enabled);
      }
      Command::SetOption { name, value } => {
         handler.set_option(name, value);
      }
      Command::NewGame => {
         handler.new_game();
      }
      Command::IsReady => {
         handler.is_ready();
         out.send_ready()?;
      }
      Command::PositionFromFen(tokens) => {
         handler.position_from_fen(tokens);
      }
      Command::PositionFromStart(tokens) => {
         handler.position_from_start(tokens);
      }
      Command::Go(mut params) => {
         if diagnostics.is_recording() {
            diagnostics.record(DiagnosticEvent::SearchStarted { params: params.clone() });
         }
         handler.go(&mut params, out)?;
      }
      Command::PonderHit => {
         handler.ponder_hit(out)?;
      }
      Command::Stop => {
         handler.stop(out)?;
      }
      Command::Quit => {
         handler.quit();
         return Ok(Flow::Exit);
      }
   }
   Ok(Flow::Continue)
}

/// The compute side: waits on the queue and dispatches until `quit` has been handled.
///
/// The timed wait only gives the loop a chance to look around between commands; a push wakes
/// it immediately.
pub fn run_dispatch_loop(
   queue: &CommandQueue<Command>,
   handler: &mut dyn Handler,
   out: &mut OutputWriter,
   diagnostics: &Diagnostics,
   wait_timeout: Duration,
) -> io::Result<()> {
   loop {
      if !queue.wait_for_item(wait_timeout) {
         continue;
      }
      let command = match queue.pop_value() {
         Some(command) => command,
         None => continue,
      };
      if dispatch(command, handler, out, diagnostics)? == Flow::Exit {
         info!("quit handled, compute thread exiting");
         return Ok(());
      }
   }
}
