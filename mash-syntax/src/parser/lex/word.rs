// This file is part of mash, a shell command language parser.
// Copyright (C) 2026 the mash authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Literal readers of the lexer
//!
//! Each quote context has its own notion of which bytes end a literal run.
//! All readers share the same backslash treatment: an escaped byte is kept
//! raw in the value (unquoting happens later, e.g. when deriving
//! here-document stop bytes), while a backslash-newline pair is a line
//! continuation and disappears from the value entirely.

use super::Token;
use crate::parser::core::Parser;
use crate::source::Pos;

impl Parser<'_> {
    /// Consumes a backslash at the cursor together with the byte it escapes.
    ///
    /// Returns false for a line continuation, which leaves no trace in the
    /// value.
    fn push_escape(&mut self) -> bool {
        match self.byte_at(self.npos + 1) {
            Some(b'\n') => {
                self.npos += 2;
                self.mark_line();
                false
            }
            Some(c) => {
                self.val.push(b'\\');
                self.val.push(c);
                self.npos += 2;
                true
            }
            None => {
                self.val.push(b'\\');
                self.npos += 1;
                true
            }
        }
    }

    /// Reads a literal run at the command level.
    ///
    /// The run ends at whitespace, an operator byte, or the opener of
    /// another word part. A run that ends at an opener produces
    /// [`Token::Lit`], since the word continues; otherwise the literal is a
    /// whole word by itself and produces [`Token::LitWord`].
    pub(crate) fn advance_lit_none(&mut self) {
        let start = self.npos;
        self.val.clear();
        let mut more_parts = false;
        loop {
            match self.cur() {
                None => break,
                Some(b'\\') => {
                    self.push_escape();
                }
                Some(b'\'' | b'"' | b'`' | b'$') => {
                    more_parts = true;
                    break;
                }
                Some(
                    b' ' | b'\t' | b'\r' | b'\n' | b';' | b'&' | b'|' | b'<' | b'>' | b'(' | b')',
                ) => break,
                Some(b) => {
                    self.val.push(b);
                    self.npos += 1;
                }
            }
        }
        self.pos = Pos::at(start);
        self.tok = if more_parts { Token::Lit } else { Token::LitWord };
    }

    /// Reads a literal run inside `"…"`, `$"…"`, or `$'…'`.
    ///
    /// Only the closing quote, backquotes, and `$` are special; newlines are
    /// part of the value.
    pub(crate) fn advance_lit_quotes(&mut self, closer: u8) {
        let start = self.npos;
        self.val.clear();
        loop {
            match self.cur() {
                None => break,
                Some(b'\\') => {
                    self.push_escape();
                }
                Some(b) if b == closer => break,
                Some(b'`' | b'$') => break,
                Some(b'\n') => {
                    self.val.push(b'\n');
                    self.npos += 1;
                    self.mark_line();
                }
                Some(b) => {
                    self.val.push(b);
                    self.npos += 1;
                }
            }
        }
        self.pos = Pos::at(start);
        self.tok = Token::Lit;
    }

    /// Reads a literal run inside `${…}`.
    ///
    /// Whitespace is an ordinary byte here; only the context's closers and
    /// the openers of nested parts end the run.
    pub(crate) fn advance_lit_param(&mut self, stops: &[u8]) {
        let start = self.npos;
        self.val.clear();
        loop {
            match self.cur() {
                None => break,
                Some(b'\\') => {
                    self.push_escape();
                }
                Some(b'$' | b'`' | b'"' | b'\'') => break,
                Some(b) if stops.contains(&b) => break,
                Some(b'\n') => {
                    self.val.push(b'\n');
                    self.npos += 1;
                    self.mark_line();
                }
                Some(b) => {
                    self.val.push(b);
                    self.npos += 1;
                }
            }
        }
        self.pos = Pos::at(start);
        self.tok = Token::Lit;
    }

    /// Reads a literal run inside an arithmetic context.
    pub(crate) fn advance_lit_arithm(&mut self) {
        let start = self.npos;
        self.val.clear();
        loop {
            match self.cur() {
                None => break,
                Some(b'\\') => {
                    self.push_escape();
                }
                Some(
                    b' ' | b'\t' | b'\r' | b'\n' | b'(' | b')' | b';' | b'+' | b'-' | b'*'
                    | b'/' | b'%' | b'<' | b'>' | b'=' | b'!' | b'&' | b'|' | b'^' | b'?' | b':'
                    | b',' | b'$' | b'`' | b'"' | b'\'',
                ) => break,
                Some(b) => {
                    self.val.push(b);
                    self.npos += 1;
                }
            }
        }
        self.pos = Pos::at(start);
        self.tok = Token::Lit;
    }

    /// Reads the raw body of a single-quoted string, starting after the
    /// opening quote and consuming the closing quote.
    ///
    /// Nothing is special inside single quotes; embedded newlines are
    /// recorded in the line registry. Returns `None` at end of input without
    /// a closing quote.
    pub(crate) fn single_quoted_body(&mut self) -> Option<String> {
        self.val.clear();
        loop {
            match self.cur() {
                None => return None,
                Some(b'\'') => {
                    self.npos += 1;
                    return Some(String::from_utf8_lossy(&self.val).into_owned());
                }
                Some(b'\n') => {
                    self.val.push(b'\n');
                    self.npos += 1;
                    self.mark_line();
                }
                Some(b) => {
                    self.val.push(b);
                    self.npos += 1;
                }
            }
        }
    }
}
