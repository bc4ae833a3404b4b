use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
   #[error("I/O error on the protocol streams: {0}")]
   Io(#[from] io::Error),
   #[error("the compute thread panicked")]
   ComputePanicked,
}
