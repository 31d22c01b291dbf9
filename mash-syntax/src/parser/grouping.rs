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

//! Syntax parser for subshells and brace groups
//!
//! `(` is an operator, so a subshell needs no blank after the opener; `{`
//! is only a reserved word, so a block does. A subshell requires at least
//! one statement.

use super::core::Parser;
use super::lex::{Keyword, QuoteCtx, Token};
use crate::syntax::{Block, Command, Subshell};

impl Parser<'_> {
    /// Parses a `(…)` subshell; the current token is the `(`.
    pub(crate) fn subshell(&mut self) -> Command {
        let lparen = self.pos;
        let old = self.quote;
        self.quote = QuoteCtx::SubCmd;
        self.next();
        let stmts = self.stmt_list(&[]);
        if stmts.is_empty() && !self.has_err() {
            self.follow_err(lparen, "(", "a statement list");
        }
        self.quote = old;
        let rparen = self.pos;
        if !self.got(Token::RightParen) {
            self.matching_err(lparen, "(", ")");
        }
        Command::Subshell(Subshell {
            lparen,
            rparen,
            stmts,
        })
    }

    /// Parses a `{ …; }` block; the current token is the `{` word.
    pub(crate) fn block(&mut self) -> Command {
        let lbrace = self.pos;
        self.next();
        let stmts = self.stmt_list(&[Keyword::CloseBrace]);
        let rbrace = self.stmt_end(lbrace, "block", Keyword::CloseBrace);
        Command::Block(Block {
            lbrace,
            rbrace,
            stmts,
        })
    }
}
