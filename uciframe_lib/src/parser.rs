use crate::command::{Command, SearchParameters, UNBOUNDED_DURATION};
use crate::diagnostics::{DiagnosticEvent, Diagnostics};
use log::debug;
use smallvec::SmallVec;

// Longer keywords sharing a prefix with a shorter one must come first
const KEYWORDS: [(&str, Keyword); 10] = [
   ("ucinewgame", Keyword::NewGame),
   ("uci", Keyword::Hello),
   ("debug", Keyword::Debug),
   ("isready", Keyword::IsReady),
   ("setoption", Keyword::SetOption),
   ("position", Keyword::Position),
   ("ponderhit", Keyword::PonderHit),
   ("stop", Keyword::Stop),
   ("go", Keyword::Go),
   ("quit", Keyword::Quit),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Keyword {
   Hello,
   NewGame,
   Debug,
   IsReady,
   SetOption,
   Position,
   PonderHit,
   Stop,
   Go,
   Quit,
}

/// A line split once into whitespace separated words, walked left to right.
struct Tokens<'a> {
   words: SmallVec<[&'a str; 16]>,
   index: usize,
}

impl<'a> Tokens<'a> {
   fn new(text: &'a str) -> Tokens<'a> {
      Tokens {
         words: text.split_whitespace().collect(),
         index: 0,
      }
   }

   fn next(&mut self) -> Option<&'a str> {
      let word = self.words.get(self.index).copied();
      if word.is_some() {
         self.index += 1;
      }
      word
   }

   fn peek(&self) -> Option<&'a str> {
      self.words.get(self.index).copied()
   }

   fn rest(&mut self) -> &[&'a str] {
      let start = self.index.min(self.words.len());
      self.index = self.words.len();
      &self.words[start..]
   }

   fn last(&self) -> Option<&'a str> {
      self.words.last().copied()
   }
}

/// Turns one input line into at most one command.
///
/// Lines that match no directive, or whose directive lacks a required part, produce `None`.
/// Nothing here is ever an error: GUIs may send tokens this harness does not know about.
pub fn parse_line(line: &str, diagnostics: &Diagnostics) -> Option<Command> {
   let line = line.trim();
   let command = match KEYWORDS.iter().find(|(prefix, _)| line.starts_with(*prefix)) {
      Some(&(prefix, keyword)) => parse_directive(keyword, &line[prefix.len()..], diagnostics),
      None => None,
   };
   if command.is_none() && !line.is_empty() {
      debug!("Ignoring input line '{}'", line);
      diagnostics.record(DiagnosticEvent::LineIgnored { line: line.to_string() });
   }
   command
}

fn parse_directive(keyword: Keyword, rest: &str, diagnostics: &Diagnostics) -> Option<Command> {
   match keyword {
      Keyword::Hello => Some(Command::Hello),
      Keyword::NewGame => Some(Command::NewGame),
      Keyword::Debug => Some(Command::SetDebug(Tokens::new(rest).last() == Some("on"))),
      Keyword::IsReady => Some(Command::IsReady),
      Keyword::SetOption => parse_set_option(Tokens::new(rest)),
      Keyword::Position => parse_position(Tokens::new(rest)),
      Keyword::PonderHit => Some(Command::PonderHit),
      Keyword::Stop => Some(Command::Stop),
      Keyword::Go => Some(Command::Go(parse_go(Tokens::new(rest), diagnostics))),
      Keyword::Quit => Some(Command::Quit),
   }
}

fn parse_set_option(mut tokens: Tokens) -> Option<Command> {
   if tokens.next() != Some("name") {
      return None;
   }
   let mut name_parts: SmallVec<[&str; 4]> = SmallVec::new();
   loop {
      match tokens.next() {
         Some("value") => break,
         Some(word) => name_parts.push(word),
         None => return None,
      }
   }
   if name_parts.is_empty() {
      return None;
   }
   Some(Command::SetOption {
      name: name_parts.join(" "),
      value: tokens.rest().join(" "),
   })
}

fn parse_position(mut tokens: Tokens) -> Option<Command> {
   let marker = tokens.peek()?;
   let words: Vec<String> = tokens.rest().iter().map(|word| word.to_string()).collect();
   match marker {
      "fen" => Some(Command::PositionFromFen(words)),
      "startpos" => Some(Command::PositionFromStart(words)),
      _ => None,
   }
}

fn parse_go(mut tokens: Tokens, diagnostics: &Diagnostics) -> SearchParameters {
   let mut params = SearchParameters::default();
   while let Some(word) = tokens.next() {
      let field = match word {
         "wtime" => &mut params.white_time_ms,
         "btime" => &mut params.black_time_ms,
         "winc" => &mut params.white_inc_ms,
         "binc" => &mut params.black_inc_ms,
         "movestogo" => &mut params.moves_to_go,
         "mate" => &mut params.mate_in_n,
         "movetime" => &mut params.move_time_ms,
         "depth" => &mut params.depth,
         "nodes" => &mut params.nodes,
         "searchmoves" => {
            params.restrict_to_moves = tokens.rest().iter().map(|m| m.to_string()).collect();
            break;
         }
         "ponder" => {
            params.ponder = true;
            continue;
         }
         "infinite" => {
            params.duration = UNBOUNDED_DURATION;
            continue;
         }
         _ => {
            debug!("Skipping unknown go parameter '{}'", word);
            diagnostics.record(DiagnosticEvent::UnknownGoToken { token: word.to_string() });
            continue;
         }
      };
      match tokens.peek().map(|value| (value, parse_count(value))) {
         Some((_, Some(value))) => {
            *field = value;
            tokens.next();
         }
         Some((value, None)) => {
            // leave the token to be looked at as a keyword
            debug!("Expected a number after '{}', got '{}'", word, value);
            diagnostics.record(DiagnosticEvent::MalformedValue {
               keyword: word.to_string(),
               token: value.to_string(),
            });
         }
         None => {
            debug!("Missing value after '{}'", word);
         }
      }
   }
   params
}

/// Reads a non-negative count, clamping negative integers to 0.
fn parse_count(token: &str) -> Option<u64> {
   token
      .parse::<u64>()
      .ok()
      // GUIs can report a negative clock once the flag has fallen
      .or_else(|| token.parse::<i64>().ok().map(|value| value.max(0) as u64))
}
