use crate::diagnostics::Diagnostics;
use crate::dispatch::run_dispatch_loop;
use crate::error::HarnessError;
use crate::handler::Handler;
use crate::input::run_input_loop;
use crate::queue::CommandQueue;
use crate::writer::OutputWriter;
use log::info;
use std::io::{self, BufRead};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_millis(10);

pub struct HarnessConfig {
   /// How long the compute thread blocks on the queue before looking around again
   pub wait_timeout: Duration,
   pub diagnostics: Diagnostics,
}

impl Default for HarnessConfig {
   fn default() -> HarnessConfig {
      HarnessConfig {
         wait_timeout: DEFAULT_WAIT_TIMEOUT,
         diagnostics: Diagnostics::disabled(),
      }
   }
}

/// Clears the flag when dropped, which also happens while a panic unwinds the compute thread.
struct AliveGuard(Arc<AtomicBool>);

impl Drop for AliveGuard {
   fn drop(&mut self) {
      self.0.store(false, Ordering::Release);
   }
}

/// Runs a handler behind the UCI protocol: the calling thread reads input, a spawned compute
/// thread dispatches to the handler and writes the replies.
pub struct Harness<H: Handler + 'static> {
   handler: H,
   config: HarnessConfig,
}

impl<H: Handler + 'static> Harness<H> {
   pub fn new(handler: H) -> Harness<H> {
      Harness::with_config(handler, HarnessConfig::default())
   }

   pub fn with_config(handler: H, config: HarnessConfig) -> Harness<H> {
      Harness { handler, config }
   }

   /// Speaks UCI over standard input and output until `quit` (or the end of input).
   pub fn run(self) -> Result<(), HarnessError> {
      let stdin = io::stdin();
      self.run_with(stdin.lock(), OutputWriter::stdout())
   }

   pub fn run_with<R: BufRead>(self, reader: R, out: OutputWriter) -> Result<(), HarnessError> {
      let Harness { mut handler, config } = self;
      let queue = Arc::new(CommandQueue::new());
      let diagnostics = Arc::new(config.diagnostics);
      let wait_timeout = config.wait_timeout;
      let compute_alive = Arc::new(AtomicBool::new(true));

      let compute = {
         let queue = queue.clone();
         let diagnostics = diagnostics.clone();
         let guard = AliveGuard(compute_alive.clone());
         let mut out = out;
         thread::Builder::new().name("compute".into()).spawn(move || {
            let _guard = guard;
            run_dispatch_loop(&queue, &mut handler, &mut out, &diagnostics, wait_timeout)
         })?
      };

      let input_res = run_input_loop(reader, &queue, &diagnostics, &compute_alive);
      let compute_res = compute.join().map_err(|_| HarnessError::ComputePanicked)?;
      info!("compute thread joined");
      input_res?;
      compute_res?;
      Ok(())
   }
}

#[cfg(test)]
mod tests {
   use crate::command::SearchParameters;
   use crate::dispatch::tests::Recorder;
   use crate::harness::*;
   use crate::writer::tests::Captured;
   use std::io::{BufReader, Cursor, Read, Write};

   fn run(handler: Recorder, input: &str) -> (Result<(), HarnessError>, Captured) {
      let captured = Captured::default();
      let res = Harness::new(handler).run_with(Cursor::new(input.to_string()), captured.writer());
      (res, captured)
   }

   #[test]
   fn uci_session() {
      let handler = Recorder::default();
      let (res, captured) = run(
         handler.clone(),
         "uci\nisready\nucinewgame\nposition startpos moves e2e4 e7e5\ngo wtime 300000 btime 300000\nquit\n",
      );
      res.unwrap();
      assert_eq!(
         captured.lines(),
         vec![
            "id name Recorder",
            "id author Tests",
            "uciok",
            "readyok",
            "bestmove e2e4"
         ]
      );
      assert_eq!(
         handler.calls(),
         vec!["isready", "newgame", "start startpos moves e2e4 e7e5", "go depth 0", "quit"]
      );
   }

   #[test]
   fn stop_is_delivered_after_go() {
      let handler = Recorder::default();
      let (res, _) = run(handler.clone(), "go depth 5\nstop\nquit\n");
      res.unwrap();
      assert_eq!(handler.calls(), vec!["go depth 5", "stop", "quit"]);
   }

   #[test]
   fn quit_is_processed_once() {
      let handler = Recorder::default();
      let (res, _) = run(handler.clone(), "quit\nquit\nisready\n");
      res.unwrap();
      assert_eq!(handler.calls(), vec!["quit"]);
   }

   #[test]
   fn end_of_input_shuts_down_cleanly() {
      let handler = Recorder::default();
      let (res, captured) = run(handler.clone(), "garbage\nisready\n");
      res.unwrap();
      assert_eq!(captured.lines(), vec!["readyok"]);
      assert_eq!(handler.calls(), vec!["isready", "quit"]);
   }

   struct Exploding;

   impl Handler for Exploding {
      fn go(&mut self, _params: &mut SearchParameters, _out: &mut OutputWriter) -> io::Result<()> {
         panic!("search blew up");
      }
   }

   /// Sends `head`, then `isready` forever; the input never ends.
   struct NeverEnding {
      head: Cursor<Vec<u8>>,
   }

   impl NeverEnding {
      fn new(head: &str) -> BufReader<NeverEnding> {
         BufReader::new(NeverEnding {
            head: Cursor::new(head.as_bytes().to_vec()),
         })
      }
   }

   impl Read for NeverEnding {
      fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
         let n = self.head.read(buf)?;
         if n > 0 {
            return Ok(n);
         }
         let line = b"isready\n";
         let n = line.len().min(buf.len());
         buf[..n].copy_from_slice(&line[..n]);
         Ok(n)
      }
   }

   #[test]
   fn handler_panic_is_fatal() {
      let captured = Captured::default();
      let res = Harness::new(Exploding).run_with(Cursor::new("go\nquit\n"), captured.writer());
      assert!(matches!(res, Err(HarnessError::ComputePanicked)));
   }

   #[test]
   fn handler_panic_stops_reading_open_input() {
      let captured = Captured::default();
      let reader = NeverEnding::new("go\n");
      let res = Harness::new(Exploding).run_with(reader, captured.writer());
      assert!(matches!(res, Err(HarnessError::ComputePanicked)));
      assert!(captured.lines().is_empty());
   }

   struct BrokenPipe;

   impl Write for BrokenPipe {
      fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
         Err(io::Error::new(io::ErrorKind::BrokenPipe, "gui went away"))
      }

      fn flush(&mut self) -> io::Result<()> {
         Ok(())
      }
   }

   #[test]
   fn write_failure_is_reported_while_input_stays_open() {
      let reader = NeverEnding::new("uci\n");
      let res = Harness::new(Recorder::default()).run_with(reader, OutputWriter::new(Box::new(BrokenPipe)));
      match res {
         Err(HarnessError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
         other => panic!("expected a write error, got {:?}", other),
      }
   }
}
