use crate::command::SearchParameters;
use log::{debug, warn};
use parking_lot::Mutex;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

/// Something worth recording about the protocol traffic. Never shown to the GUI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DiagnosticEvent {
   LineIgnored { line: String },
   UnknownGoToken { token: String },
   MalformedValue { keyword: String, token: String },
   Dispatched { command: &'static str },
   SearchStarted { params: SearchParameters },
   DebugToggled { enabled: bool },
   InputClosed,
}

pub trait DiagnosticSink: Send + Sync {
   fn record(&self, event: &DiagnosticEvent);
}

pub struct NullSink;

impl DiagnosticSink for NullSink {
   fn record(&self, _event: &DiagnosticEvent) {}
}

/// Forwards events to the `log` facade.
pub struct LogSink;

impl DiagnosticSink for LogSink {
   fn record(&self, event: &DiagnosticEvent) {
      debug!("diagnostic: {:?}", event);
   }
}

/// Writes one JSON object per line, flushed after every event.
pub struct FileSink<W: Write + Send> {
   out: Mutex<W>,
}

impl FileSink<BufWriter<File>> {
   pub fn create<P: AsRef<Path>>(path: P) -> io::Result<FileSink<BufWriter<File>>> {
      Ok(FileSink::new(BufWriter::new(File::create(path)?)))
   }
}

impl<W: Write + Send> FileSink<W> {
   pub fn new(out: W) -> FileSink<W> {
      FileSink { out: Mutex::new(out) }
   }
}

impl<W: Write + Send> DiagnosticSink for FileSink<W> {
   fn record(&self, event: &DiagnosticEvent) {
      let mut out = self.out.lock();
      if let Err(e) = write_event(&mut *out, event) {
         // best effort
         warn!("Failed to write diagnostic event: {}", e);
      }
   }
}

fn write_event<W: Write>(out: &mut W, event: &DiagnosticEvent) -> io::Result<()> {
   serde_json::to_writer(&mut *out, event)?;
   out.write_all(b"\n")?;
   out.flush()
}

/// A sink plus the debug-enabled flag toggled by `debug on|off`.
///
/// Shared by both actors. Events reach the sink when it was configured as always-on,
/// or while debug mode is enabled.
pub struct Diagnostics {
   sink: Box<dyn DiagnosticSink>,
   always: bool,
   debug: AtomicBool,
}

impl Diagnostics {
   pub fn new(sink: Box<dyn DiagnosticSink>, always: bool) -> Diagnostics {
      Diagnostics {
         sink,
         always,
         debug: AtomicBool::new(false),
      }
   }

   pub fn disabled() -> Diagnostics {
      Diagnostics::new(Box::new(NullSink), false)
   }

   pub fn debug_enabled(&self) -> bool {
      self.debug.load(Ordering::Relaxed)
   }

   pub fn set_debug(&self, enabled: bool) {
      self.debug.store(enabled, Ordering::Relaxed);
      self.record(DiagnosticEvent::DebugToggled { enabled });
   }

   /// Whether `record` would reach the sink right now.
   pub fn is_recording(&self) -> bool {
      self.always || self.debug_enabled()
   }

   pub fn record(&self, event: DiagnosticEvent) {
      if self.is_recording() {
         self.sink.record(&event);
      }
   }
}

impl Default for Diagnostics {
   fn default() -> Diagnostics {
      Diagnostics::disabled()
   }
}
