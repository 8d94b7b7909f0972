//! Escape-sequence scanner for annotation strings.
//!
//! Converts a raw annotation string into a flat token stream, one escape
//! unit at a time. The grammar on the escape marker (default `\`):
//!
//! - `\\` — a literal escape marker
//! - `\(NNNN)` — explicit Hershey glyph number, bypassing the alias table
//! - `\u` / `\d` — superscript / subscript region toggles
//! - `\fn` `\fr` `\fi` `\fs` `\fb` — font switches
//! - `\c12` — colour index switch
//! - `\identifier` — alias-table lookup ("alpha", "Sun", "times", ...)
//!
//! Malformed or unknown escapes are never errors: the scanner re-emits the
//! raw text as literal characters and carries on. Each `Scanner` is
//! independent; no state survives across annotation calls.

use std::collections::VecDeque;
use std::iter::Peekable;
use std::str::Chars;

use crate::config::Config;
use crate::style::FontStyle;
use crate::symbol::{self, SymbolEntry, SymbolKind};

/// One primitive markup token, consumed immediately by the layout engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A plain character to typeset.
    Literal(char),
    /// A Greek letter, as its Latin transliteration.
    Greek(char),
    /// An explicit Hershey vector-glyph number.
    Hershey(u16),
    /// A graph-marker number.
    Marker(u16),
    /// Switch the active font family (unscoped, persists until the next
    /// switch or end of run).
    Font(FontStyle),
    /// Switch the active colour index (unscoped).
    Color(u16),
    SuperscriptBegin,
    SuperscriptEnd,
    SubscriptBegin,
    SubscriptEnd,
    /// Literal substitution text from the alias table.
    Text(&'static str),
}

/// Lazy tokenizer over one annotation string.
pub struct Scanner<'a> {
    chars: Peekable<Chars<'a>>,
    escape: char,
    /// Tokens queued by multi-token productions (degraded escapes).
    pending: VecDeque<Token>,
    superscript_open: bool,
    subscript_open: bool,
}

/// Tokenize an annotation string under the given configuration.
pub fn scan<'a>(input: &'a str, config: &Config) -> Scanner<'a> {
    Scanner::new(input, config)
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str, config: &Config) -> Self {
        Self {
            chars: input.chars().peekable(),
            escape: config.escape,
            pending: VecDeque::new(),
            superscript_open: false,
            subscript_open: false,
        }
    }

    fn scan_escape(&mut self) -> Token {
        match self.chars.peek().copied() {
            // Trailing marker at end of input: keep it visible
            None => Token::Literal(self.escape),
            Some(c) if c == self.escape => {
                self.chars.next();
                Token::Literal(self.escape)
            }
            Some('(') => {
                self.chars.next();
                self.scan_hershey_code()
            }
            Some(c) if c.is_ascii_alphabetic() => self.scan_identifier(),
            // Any other character: the marker stands alone as a literal and
            // the next character is scanned normally
            Some(_) => Token::Literal(self.escape),
        }
    }

    /// `\(NNNN)` — numeric Hershey glyph reference. Non-numeric, empty, or
    /// unterminated content degrades to the raw escape text.
    fn scan_hershey_code(&mut self) -> Token {
        let mut raw = String::new();
        let mut terminated = false;
        while let Some(c) = self.chars.next() {
            if c == ')' {
                terminated = true;
                break;
            }
            raw.push(c);
        }
        if terminated && !raw.is_empty() {
            if let Ok(code) = raw.parse::<u16>() {
                return Token::Hershey(code);
            }
        }
        log::debug!("malformed Hershey escape {}({} treated as literal", self.escape, raw);
        self.pending.push_back(Token::Literal('('));
        self.pending.extend(raw.chars().map(Token::Literal));
        if terminated {
            self.pending.push_back(Token::Literal(')'));
        }
        Token::Literal(self.escape)
    }

    /// Reads the maximal alphabetic run after the marker, checks the
    /// reserved control codes first, then the alias table. Whole-identifier
    /// exact match only; a miss re-emits the escape text verbatim.
    fn scan_identifier(&mut self) -> Token {
        let mut ident = String::new();
        while let Some(&c) = self.chars.peek() {
            if !c.is_ascii_alphabetic() {
                break;
            }
            ident.push(c);
            self.chars.next();
        }

        match ident.as_str() {
            "u" => return self.toggle_superscript(),
            "d" => return self.toggle_subscript(),
            "fn" => return Token::Font(FontStyle::Normal),
            "fr" => return Token::Font(FontStyle::Roman),
            "fi" => return Token::Font(FontStyle::Italic),
            "fs" => return Token::Font(FontStyle::Script),
            "fb" => return Token::Font(FontStyle::Bold),
            "c" => {
                if let Some(token) = self.scan_color_index() {
                    return token;
                }
                // `\c` without digits falls through to the table (and on
                // to literal degradation)
            }
            _ => {}
        }

        match symbol::lookup(&ident) {
            Some(entry) => token_for(entry),
            None => {
                log::debug!("unknown escape {}{ident} treated as literal", self.escape);
                self.pending.extend(ident.chars().map(Token::Literal));
                Token::Literal(self.escape)
            }
        }
    }

    /// Decimal digits after `\c`. Returns `None` when no digit follows.
    fn scan_color_index(&mut self) -> Option<Token> {
        let mut saw_digit = false;
        let mut value: u16 = 0;
        while let Some(&c) = self.chars.peek() {
            match c.to_digit(10) {
                Some(d) => {
                    saw_digit = true;
                    value = value.saturating_mul(10).saturating_add(d as u16);
                    self.chars.next();
                }
                None => break,
            }
        }
        saw_digit.then_some(Token::Color(value))
    }

    /// Region toggles: `\u` closes an open superscript, otherwise closes an
    /// open subscript (the legacy `\d ... \u` pairing), otherwise opens a
    /// superscript. `\d` is the mirror image. One flag per region kind, so
    /// an `End` is always emitted for the nearest open region.
    fn toggle_superscript(&mut self) -> Token {
        if self.superscript_open {
            self.superscript_open = false;
            Token::SuperscriptEnd
        } else if self.subscript_open {
            self.subscript_open = false;
            Token::SubscriptEnd
        } else {
            self.superscript_open = true;
            Token::SuperscriptBegin
        }
    }

    fn toggle_subscript(&mut self) -> Token {
        if self.subscript_open {
            self.subscript_open = false;
            Token::SubscriptEnd
        } else if self.superscript_open {
            self.superscript_open = false;
            Token::SuperscriptEnd
        } else {
            self.subscript_open = true;
            Token::SubscriptBegin
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if let Some(token) = self.pending.pop_front() {
            return Some(token);
        }
        let c = self.chars.next()?;
        if c != self.escape {
            return Some(Token::Literal(c));
        }
        Some(self.scan_escape())
    }
}

fn token_for(entry: &SymbolEntry) -> Token {
    match entry.kind {
        SymbolKind::Greek(t) => Token::Greek(t),
        SymbolKind::Hershey(n) => Token::Hershey(n),
        SymbolKind::Marker(n) => Token::Marker(n),
        SymbolKind::Font(f) => Token::Font(f),
        SymbolKind::Text(s) => Token::Text(s),
    }
}
