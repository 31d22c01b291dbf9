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

//! Syntax parser for `while` and `until` loops

use super::core::Parser;
use super::lex::Keyword;
use crate::syntax::{Command, UntilClause, WhileClause};

impl Parser<'_> {
    /// Parses a `while` loop; the current token is the `while` word.
    pub(crate) fn while_clause(&mut self) -> Command {
        let while_pos = self.pos;
        self.next();
        let cond = self.cond("while", while_pos, Keyword::Do);
        let do_pos = self.follow_rsrv(while_pos, "while <cond>", Keyword::Do);
        let do_stmts = self.stmt_list(&[Keyword::Done]);
        if do_stmts.is_empty() && !self.has_err() {
            self.follow_err(do_pos, "\"do\"", "a statement list");
        }
        let done_pos = self.stmt_end(while_pos, "while", Keyword::Done);
        Command::While(WhileClause {
            while_pos,
            do_pos,
            done_pos,
            cond,
            do_stmts,
        })
    }

    /// Parses an `until` loop; the current token is the `until` word.
    pub(crate) fn until_clause(&mut self) -> Command {
        let until_pos = self.pos;
        self.next();
        let cond = self.cond("until", until_pos, Keyword::Do);
        let do_pos = self.follow_rsrv(until_pos, "until <cond>", Keyword::Do);
        let do_stmts = self.stmt_list(&[Keyword::Done]);
        if do_stmts.is_empty() && !self.has_err() {
            self.follow_err(do_pos, "\"do\"", "a statement list");
        }
        let done_pos = self.stmt_end(until_pos, "until", Keyword::Done);
        Command::Until(UntilClause {
            until_pos,
            do_pos,
            done_pos,
            cond,
            do_stmts,
        })
    }
}
