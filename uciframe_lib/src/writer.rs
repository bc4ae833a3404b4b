use std::io::{self, Write};

pub const UCI_OK: &str = "uciok";
pub const READY_OK: &str = "readyok";
pub const NULL_MOVE: &str = "0000";

/// Protocol replies to the GUI.
///
/// Every message is flushed as soon as it is written. Only the compute thread owns one,
/// so no locking happens here.
pub struct OutputWriter {
   out: Box<dyn Write + Send>,
}

impl OutputWriter {
   pub fn new(out: Box<dyn Write + Send>) -> OutputWriter {
      OutputWriter { out }
   }

   pub fn stdout() -> OutputWriter {
      OutputWriter::new(Box::new(io::stdout()))
   }

   pub fn send_move(&mut self, best_move: &str) -> io::Result<()> {
      self.send_line(&format!("bestmove {}", best_move))
   }

   /// `bestmove` in coordinate form, e.g. `('e', '2', 'e', '4')` for e2e4.
   pub fn send_move_coords(&mut self, from_file: char, from_rank: char, to_file: char, to_rank: char) -> io::Result<()> {
      self.send_line(&format!("bestmove {}{}{}{}", from_file, from_rank, to_file, to_rank))
   }

   pub fn send_move_with_ponder(&mut self, best_move: &str, ponder_move: &str) -> io::Result<()> {
      self.send_line(&format!("bestmove {} ponder {}", best_move, ponder_move))
   }

   pub fn send_hello(&mut self, name: &str, author: &str) -> io::Result<()> {
      self.send_line(&format!("id name {}", name))?;
      self.send_line(&format!("id author {}", author))?;
      self.send_line(UCI_OK)
   }

   pub fn send_ready(&mut self) -> io::Result<()> {
      self.send_line(READY_OK)
   }

   pub fn send_info_string(&mut self, text: &str) -> io::Result<()> {
      self.send_line(&format!("info string {}", text))
   }

   fn send_line(&mut self, line: &str) -> io::Result<()> {
      self.out.write_all(line.as_bytes())?;
      self.out.write_all(b"\n")?;
      self.out.flush()
   }
}
