use crate::command::Command;
use crate::diagnostics::{DiagnosticEvent, Diagnostics};
use crate::parser::parse_line;
use crate::queue::CommandQueue;
use log::{error, info, warn};
use std::io::{self, BufRead};
use std::sync::atomic::{AtomicBool, Ordering};

/// The input side: reads lines, parses them and queues the results until `quit`.
///
/// A line that is already being read when `quit` gets handled elsewhere is not interrupted;
/// this loop only stops after pushing `quit` itself, or when the input ends. In the latter
/// case (and on a read error) a `quit` is queued so the compute side shuts down too.
///
/// `compute_alive` is cleared by the compute side when it stops for any reason; nothing is
/// read or queued after that.
pub fn run_input_loop<R: BufRead>(
   mut reader: R,
   queue: &CommandQueue<Command>,
   diagnostics: &Diagnostics,
   compute_alive: &AtomicBool,
) -> io::Result<()> {
   let mut line_buf = String::new();
   let mut shutdown = false;
   while !shutdown {
      if !compute_alive.load(Ordering::Acquire) {
         warn!("compute thread stopped, no longer reading input");
         return Ok(());
      }
      line_buf.clear();
      match reader.read_line(&mut line_buf) {
         Ok(0) => {
            info!("input closed, shutting down");
            diagnostics.record(DiagnosticEvent::InputClosed);
            queue.push(Command::Quit);
            return Ok(());
         }
         Ok(_) => {}
         Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            warn!("Skipping input line that is not valid UTF-8");
            continue;
         }
         Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
         Err(e) => {
            error!("Encountered I/O error reading input: {}", e);
            queue.push(Command::Quit);
            return Err(e);
         }
      }
      if !compute_alive.load(Ordering::Acquire) {
         warn!("compute thread stopped, dropping input line");
         return Ok(());
      }
      if let Some(command) = parse_line(&line_buf, diagnostics) {
         shutdown = command == Command::Quit;
         queue.push(command);
      }
   }
   Ok(())
}
