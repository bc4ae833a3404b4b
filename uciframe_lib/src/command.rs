use serde::Serialize;

// Interface to Engine, one per recognized input line
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
   Hello, // uci
   SetDebug(bool),
   SetOption { name: String, value: String },
   NewGame,
   IsReady,
   PositionFromFen(Vec<String>),   // every token after "position", "fen" marker included
   PositionFromStart(Vec<String>), // every token after "position", "startpos" marker included
   Go(SearchParameters),
   PonderHit,
   Stop,
   Quit,
}

impl Command {
   /// Protocol keyword that produced this command, used for logging and diagnostics.
   pub fn keyword(&self) -> &'static str {
      match self {
         Command::Hello => "uci",
         Command::SetDebug(_) => "debug",
         Command::SetOption { .. } => "setoption",
         Command::NewGame => "ucinewgame",
         Command::IsReady => "isready",
         Command::PositionFromFen(_) => "position fen",
         Command::PositionFromStart(_) => "position startpos",
         Command::Go(_) => "go",
         Command::PonderHit => "ponderhit",
         Command::Stop => "stop",
         Command::Quit => "quit",
      }
   }
}

/// Constraints accompanying a `go` directive.
///
/// Every numeric field uses 0 for "not given", and such a field must not constrain the search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchParameters {
   /// -1 means unbounded unless something else limits the search
   pub duration: i64,
   pub ponder: bool,
   pub white_time_ms: u64,
   pub black_time_ms: u64,
   pub white_inc_ms: u64,
   pub black_inc_ms: u64,
   pub depth: u64,
   pub nodes: u64,
   pub mate_in_n: u64,
   pub moves_to_go: u64,
   pub move_time_ms: u64,
   /// Empty means every move is allowed
   pub restrict_to_moves: Vec<String>,
}

pub const UNBOUNDED_DURATION: i64 = -1;

impl Default for SearchParameters {
   fn default() -> SearchParameters {
      SearchParameters {
         duration: UNBOUNDED_DURATION,
         ponder: false,
         white_time_ms: 0,
         black_time_ms: 0,
         white_inc_ms: 0,
         black_inc_ms: 0,
         depth: 0,
         nodes: 0,
         mate_in_n: 0,
         moves_to_go: 0,
         move_time_ms: 0,
         restrict_to_moves: Vec::new(),
      }
   }
}

impl SearchParameters {
   /// True when nothing on the `go` line limits the search: no depth, node, mate or time limit
   /// and no clock.
   pub fn is_unbounded(&self) -> bool {
      self.duration == UNBOUNDED_DURATION
         && self.depth == 0
         && self.nodes == 0
         && self.mate_in_n == 0
         && self.move_time_ms == 0
         && !self.has_clock()
   }

   pub fn has_clock(&self) -> bool {
      self.white_time_ms != 0 || self.black_time_ms != 0 || self.white_inc_ms != 0 || self.black_inc_ms != 0
   }

   /// Remaining time and increment (in ms) for one side.
   pub fn clock(&self, white_to_move: bool) -> (u64, u64) {
      if white_to_move {
         (self.white_time_ms, self.white_inc_ms)
      } else {
         (self.black_time_ms, self.black_inc_ms)
      }
   }
}

#[cfg(test)]
mod tests {
   use crate::command::*;

   #[test]
   fn defaults_do_not_constrain() {
      let params = SearchParameters::default();
      assert_eq!(params.duration, -1);
      assert!(!params.ponder);
      assert!(params.restrict_to_moves.is_empty());
      assert!(params.is_unbounded());
      assert!(!params.has_clock());
   }

   #[test]
   fn clock_picks_the_right_side() {
      let params = SearchParameters {
         white_time_ms: 1000,
         black_time_ms: 2000,
         white_inc_ms: 10,
         black_inc_ms: 20,
         ..Default::default()
      };
      assert_eq!(params.clock(true), (1000, 10));
      assert_eq!(params.clock(false), (2000, 20));
      assert!(!params.is_unbounded());
   }

   #[test]
   fn depth_limit_is_bounded() {
      let params = SearchParameters {
         depth: 5,
         ..Default::default()
      };
      assert!(!params.is_unbounded());
   }

   #[test]
   fn keywords() {
      assert_eq!(Command::Hello.keyword(), "uci");
      assert_eq!(Command::Go(SearchParameters::default()).keyword(), "go");
      assert_eq!(Command::PositionFromStart(vec!["startpos".into()]).keyword(), "position startpos");
   }
}
