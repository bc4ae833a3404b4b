pub mod command;
pub mod diagnostics;
pub mod dispatch;
pub mod error;
pub mod handler;
pub mod harness;
pub mod input;
pub mod parser;
pub mod queue;
pub mod writer;
