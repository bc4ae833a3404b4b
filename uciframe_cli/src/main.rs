mod pawn_pusher;

use log::{error, info};
use std::path::PathBuf;
use structopt::StructOpt;
use uciframe_lib::diagnostics::{Diagnostics, FileSink, LogSink};
use uciframe_lib::harness::{Harness, HarnessConfig};

/// A minimal UCI engine that pushes pawns
#[derive(StructOpt, Debug)]
#[structopt(name = "uciframe")]
struct Opt {
   /// Write every diagnostic event to this file, one JSON object per line
   #[structopt(long = "debug-log", parse(from_os_str))]
   debug_log: Option<PathBuf>,
   /// Send diagnostic events to the logger while the GUI has debug mode on
   #[structopt(long = "log-events")]
   log_events: bool,
   /// Engine name reported to the GUI
   #[structopt(long = "name")]
   name: Option<String>,
   /// Engine author reported to the GUI
   #[structopt(long = "author")]
   author: Option<String>,
}

fn main() {
   pretty_env_logger::init();
   let opt = Opt::from_args();

   let diagnostics = if let Some(path) = &opt.debug_log {
      match FileSink::create(path) {
         Ok(sink) => Diagnostics::new(Box::new(sink), true),
         Err(e) => {
            error!("Failed to create debug log {}: {}", path.display(), e);
            std::process::exit(1);
         }
      }
   } else if opt.log_events {
      Diagnostics::new(Box::new(LogSink), false)
   } else {
      Diagnostics::disabled()
   };

   let mut engine = pawn_pusher::PawnPusher::default();
   if let Some(name) = opt.name {
      engine.name = name;
   }
   if let Some(author) = opt.author {
      engine.author = author;
   }

   let config = HarnessConfig {
      diagnostics,
      ..Default::default()
   };
   match Harness::with_config(engine, config).run() {
      Ok(()) => info!("bye"),
      Err(e) => {
         error!("{}", e);
         std::process::exit(1);
      }
   }
}
