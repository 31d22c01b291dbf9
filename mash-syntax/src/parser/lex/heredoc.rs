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

//! Here-document body lexing
//!
//! A body is tokenized under [`QuoteCtx::HdocBody`]: parameter, command,
//! and arithmetic expansions stay active, everything else is literal, and
//! the body ends at the first line that equals the stop bytes. With `<<-`,
//! leading tabs are skipped when matching the stop line; the body text
//! itself keeps its tabs so that every part still points into the source.
//!
//! When the delimiter line is found it is consumed, together with its
//! newline, and the synthetic [`Token::Stopped`] is produced to end the
//! body word. A body that reaches end of input without its delimiter simply
//! ends there.

use super::Token;
use crate::parser::core::Parser;
use crate::source::Pos;

impl Parser<'_> {
    /// Tests if the cursor sits at the start of a line.
    fn at_line_start(&self) -> bool {
        self.npos == 0 || self.src[self.npos - 1] == b'\n'
    }

    /// Tests if the line at the cursor is the delimiter line.
    fn hdoc_line_matches(&self) -> bool {
        let mut i = self.npos;
        if self.hdoc_tabs {
            while self.byte_at(i) == Some(b'\t') {
                i += 1;
            }
        }
        let end = i + self.hdoc_stop.len();
        self.src.len() >= end
            && &self.src[i..end] == self.hdoc_stop.as_slice()
            && (end == self.src.len() || self.src[end] == b'\n')
    }

    /// Consumes the delimiter line and produces [`Token::Stopped`].
    fn finish_hdoc(&mut self) {
        self.pos = Pos::at(self.npos);
        if self.hdoc_tabs {
            while self.cur() == Some(b'\t') {
                self.npos += 1;
            }
        }
        self.npos += self.hdoc_stop.len();
        if self.cur() == Some(b'\n') {
            self.npos += 1;
            self.mark_line();
        }
        self.val.clear();
        self.tok = Token::Stopped;
    }

    /// Tokenization inside a here-document body.
    pub(crate) fn next_hdoc_body(&mut self) {
        if self.at_line_start() && self.hdoc_line_matches() {
            return self.finish_hdoc();
        }
        let Some(b) = self.cur() else {
            return self.set_eof();
        };
        match b {
            b'$' => self.dollar_tok(),
            b'`' => {
                let start = self.npos;
                self.npos += 1;
                self.pos = Pos::at(start);
                self.val.clear();
                self.tok = Token::BckQuote;
            }
            _ => self.advance_lit_hdoc(),
        }
    }

    /// Reads a literal run of a here-document body.
    ///
    /// The run spans lines; after each consumed newline the following line
    /// is checked against the stop bytes so that the delimiter line is left
    /// for [`next_hdoc_body`](Self::next_hdoc_body) to consume.
    fn advance_lit_hdoc(&mut self) {
        let start = self.npos;
        self.val.clear();
        loop {
            match self.cur() {
                None => break,
                Some(b'\\') => match self.byte_at(self.npos + 1) {
                    // escapes protect expansions; the bytes stay raw
                    Some(b'$' | b'`' | b'\\') => {
                        self.val.push(b'\\');
                        self.val.push(self.src[self.npos + 1]);
                        self.npos += 2;
                    }
                    Some(b'\n') => {
                        self.npos += 2;
                        self.mark_line();
                    }
                    _ => {
                        self.val.push(b'\\');
                        self.npos += 1;
                    }
                },
                Some(b'$' | b'`') => break,
                Some(b'\n') => {
                    self.val.push(b'\n');
                    self.npos += 1;
                    self.mark_line();
                    if self.hdoc_line_matches() {
                        break;
                    }
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
}
