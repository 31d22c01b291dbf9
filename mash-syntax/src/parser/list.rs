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

//! Syntax parser for statement lists
//!
//! A list ends at end of input, at a caller-supplied stop word, at the
//! closer of the current quote context, or, inside a `case` branch, at one
//! of its terminators. Consecutive statements need a `;`, `&`, or newline
//! between them. The [`Token::Stopped`] marker drains pending here-document
//! bodies and counts as a line end.

use super::core::Parser;
use super::error::SyntaxError;
use super::lex::{Keyword, QuoteCtx, Token};
use crate::syntax::Stmt;

impl Parser<'_> {
    /// Parses statements until a terminator for the current context.
    pub(crate) fn stmt_list(&mut self, stops: &[Keyword]) -> Vec<Stmt> {
        let mut stmts = Vec::new();
        let mut got_end = true;
        loop {
            match self.tok {
                Token::Eof => break,
                Token::Stopped => {
                    self.do_heredocs();
                    self.next();
                    got_end = true;
                    continue;
                }
                Token::RightParen if self.quote == QuoteCtx::SubCmd => break,
                Token::BckQuote if self.quote == QuoteCtx::SubCmdBquo => break,
                tok if tok.is_case_end() && self.quote == QuoteCtx::CaseBody => break,
                _ => {}
            }
            if let Some(kw) = self.rsrv_word() {
                if stops.contains(&kw) {
                    break;
                }
            }
            if !got_end && !self.newline {
                self.cur_err(SyntaxError::MissingSeparator);
            }
            if self.has_err() {
                break;
            }
            let (stmt, end) = self.get_stmt(true);
            match stmt {
                Some(stmt) => stmts.push(stmt),
                None => {
                    self.invalid_stmt_start();
                    break;
                }
            }
            got_end = end;
        }
        stmts
    }

    /// Reports the token that failed to start a statement.
    fn invalid_stmt_start(&mut self) {
        if self.has_err() {
            return;
        }
        match self.tok {
            Token::Eof => {}
            tok if tok.is_case_end() => self.cur_err(SyntaxError::CaseOpOutsideCase {
                op: tok.as_str().to_string(),
            }),
            Token::RightParen => self.cur_err(SyntaxError::CloseParenAtStmtStart),
            _ => {
                let op = self.tok_str();
                self.cur_err(SyntaxError::OperatorAtStmtStart { op });
            }
        }
    }
}
