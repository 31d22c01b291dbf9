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

//! Syntax parser for pipelines and and-or composition
//!
//! `|` and `|&` compose pipeline elements and bind tighter than `&&` and
//! `||`, which compose whole statements: the right-hand side of an and-or
//! operator is again a full statement, so further redirections and
//! pipelines hang off it. Newlines are permitted after any of the four
//! operators, and a pending here-document line end ([`Token::Stopped`]) is
//! drained and swallowed there.

use super::core::Parser;
use super::lex::Token;
use crate::syntax::{BinaryCmd, Command, Stmt};

impl Parser<'_> {
    /// Parses one full statement: a pipeline, optionally composed with
    /// `&&`/`||`, with its terminator.
    ///
    /// The second return value reports whether a `;` or `&` terminator was
    /// consumed; `read_end` permits consuming a `;`.
    pub(crate) fn get_stmt(&mut self, read_end: bool) -> (Option<Stmt>, bool) {
        let Some(mut s) = self.get_stmt_pipe() else {
            return (None, false);
        };
        if matches!(self.tok, Token::AndAnd | Token::OrOr) && !self.newline {
            let op = self.tok;
            let op_pos = self.pos;
            self.next();
            self.swallow_stopped();
            let (y, end) = self.get_stmt(read_end);
            let Some(y) = y else {
                if !self.has_err() {
                    self.follow_err(op_pos, op.as_str(), "a statement");
                }
                return (Some(s), false);
            };
            s = Stmt {
                position: s.position,
                negated: false,
                background: false,
                assigns: Vec::new(),
                redirs: Vec::new(),
                cmd: Some(Command::Binary(Box::new(BinaryCmd { op, op_pos, x: s, y }))),
            };
            return (Some(s), end);
        }
        if self.tok == Token::And && !self.newline {
            s.background = true;
            self.next();
            return (Some(s), true);
        }
        if read_end && self.tok == Token::Semicolon && !self.newline {
            self.next();
            return (Some(s), true);
        }
        (Some(s), false)
    }

    /// Attaches `|`/`|&` pipeline elements to a parsed statement.
    pub(crate) fn pipe_tail(&mut self, s: Stmt) -> Option<Stmt> {
        if !matches!(self.tok, Token::Or | Token::OrAnd) || self.newline {
            return Some(s);
        }
        let op = self.tok;
        let op_pos = self.pos;
        if op == Token::OrAnd {
            self.posix_check(op_pos);
            if self.has_err() {
                return Some(s);
            }
        }
        self.next();
        self.swallow_stopped();
        let Some(y) = self.get_stmt_pipe() else {
            if !self.has_err() {
                self.follow_err(op_pos, op.as_str(), "a statement");
            }
            return Some(s);
        };
        Some(Stmt {
            position: s.position,
            negated: false,
            background: false,
            assigns: Vec::new(),
            redirs: Vec::new(),
            cmd: Some(Command::Binary(Box::new(BinaryCmd { op, op_pos, x: s, y }))),
        })
    }

    /// Drains pending here-documents when a line ends mid-construct.
    pub(crate) fn swallow_stopped(&mut self) {
        if self.tok == Token::Stopped {
            self.do_heredocs();
            self.next();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::lex::Token;
    use crate::parser::{Mode, parse};
    use crate::syntax::{BinaryCmd, Command};
    use assert_matches::assert_matches;

    fn binary(src: &str) -> BinaryCmd {
        let file = parse(src.as_bytes(), "", Mode::empty()).unwrap();
        let cmd = file.stmts.into_iter().next().unwrap().cmd.unwrap();
        assert_matches!(cmd, Command::Binary(b) => *b)
    }

    #[test]
    fn simple_pipeline() {
        let b = binary("a | b");
        assert_eq!(b.op, Token::Or);
        assert_matches!(b.x.cmd, Some(Command::Call(_)));
        assert_matches!(b.y.cmd, Some(Command::Call(_)));
    }

    #[test]
    fn pipeline_nests_to_the_right() {
        let b = binary("a | b | c");
        assert_eq!(b.op, Token::Or);
        let y = assert_matches!(b.y.cmd, Some(Command::Binary(b)) => *b);
        assert_eq!(y.op, Token::Or);
    }

    #[test]
    fn and_or_composes_statements() {
        let b = binary("a && b");
        assert_eq!(b.op, Token::AndAnd);
        let b = binary("a || b");
        assert_eq!(b.op, Token::OrOr);
    }

    #[test]
    fn pipe_binds_tighter_than_and() {
        let b = binary("a | b && c");
        assert_eq!(b.op, Token::AndAnd);
        let x = assert_matches!(b.x.cmd, Some(Command::Binary(b)) => *b);
        assert_eq!(x.op, Token::Or);
    }

    #[test]
    fn newline_allowed_after_operators() {
        let b = binary("a |\nb");
        assert_eq!(b.op, Token::Or);
        let b = binary("a &&\nb");
        assert_eq!(b.op, Token::AndAnd);
    }

    #[test]
    fn pipe_all_operator() {
        let b = binary("a |& b");
        assert_eq!(b.op, Token::OrAnd);
    }

    #[test]
    fn missing_command_after_pipe() {
        let err = parse(b"a |", "", Mode::empty()).unwrap_err();
        assert_eq!(err.cause.message(), "| must be followed by a statement");
        let err = parse(b"a &&", "", Mode::empty()).unwrap_err();
        assert_eq!(err.cause.message(), "&& must be followed by a statement");
    }

    #[test]
    fn background_statement() {
        let file = parse(b"sleep 1 &", "", Mode::empty()).unwrap();
        assert!(file.stmts[0].background);
    }

    #[test]
    fn negation_applies_to_first_element() {
        let b = binary("! a | b");
        assert!(b.x.negated);
    }
}
