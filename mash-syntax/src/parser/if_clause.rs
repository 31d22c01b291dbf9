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

//! Syntax parser for the `if` conditional construct
//!
//! Also hosts the shared condition parser: a condition is either a
//! statement list ending at the given stop word, or a C-style `((…))`
//! arithmetic expression. The `((` is recognized from a `(` token whose
//! next raw byte is another `(`; POSIX mode never takes that reading, so a
//! doubled parenthesis stays a nested subshell there.

use super::core::{Mode, Parser};
use super::lex::{Keyword, QuoteCtx, Token};
use crate::source::Pos;
use crate::syntax::{CStyleCond, Command, Cond, Elif, IfClause};

impl Parser<'_> {
    /// Parses the condition of an `if`, `elif`, `while`, or `until`.
    pub(crate) fn cond(&mut self, name: &'static str, kw_pos: Pos, stop: Keyword) -> Cond {
        if self.tok == Token::LeftParen
            && self.cur() == Some(b'(')
            && !self.mode.contains(Mode::POSIX_CONFORMANT)
        {
            let lparen = self.pos;
            self.npos += 1;
            let old = self.quote;
            self.quote = QuoteCtx::Arithm;
            self.next();
            let x = match self.arithm_expr(0, false) {
                Some(x) => x,
                None => {
                    self.quote = old;
                    if !self.has_err() {
                        self.follow_err(lparen, "((", "an expression");
                    }
                    return Cond::Stmts(Vec::new());
                }
            };
            let rparen = self.close_dbl_paren(lparen, "((");
            self.quote = old;
            self.next();
            self.got(Token::Semicolon);
            Cond::CStyle(CStyleCond { lparen, rparen, x })
        } else {
            let stmts = self.stmt_list(std::slice::from_ref(&stop));
            if stmts.is_empty() && !self.has_err() {
                self.follow_err(kw_pos, format!("{name:?}"), "a statement list");
            }
            Cond::Stmts(stmts)
        }
    }

    /// Parses an `if` clause; the current token is the `if` word.
    pub(crate) fn if_clause(&mut self) -> Command {
        let if_pos = self.pos;
        self.next();
        let cond = self.cond("if", if_pos, Keyword::Then);
        let then_pos = self.follow_rsrv(if_pos, "if <cond>", Keyword::Then);
        let then_stmts = self.stmt_list(&[Keyword::Fi, Keyword::Elif, Keyword::Else]);
        if then_stmts.is_empty() && !self.has_err() {
            self.follow_err(then_pos, "\"then\"", "a statement list");
        }
        let mut elifs = Vec::new();
        while self.rsrv_word() == Some(Keyword::Elif) {
            let elif_pos = self.pos;
            self.next();
            let cond = self.cond("elif", elif_pos, Keyword::Then);
            let then_pos = self.follow_rsrv(elif_pos, "elif <cond>", Keyword::Then);
            let then_stmts = self.stmt_list(&[Keyword::Fi, Keyword::Elif, Keyword::Else]);
            if then_stmts.is_empty() && !self.has_err() {
                self.follow_err(then_pos, "\"then\"", "a statement list");
            }
            elifs.push(Elif {
                elif_pos,
                then_pos,
                cond,
                then_stmts,
            });
        }
        let mut else_stmts = Vec::new();
        if let Some(else_pos) = self.got_rsrv_pos(Keyword::Else) {
            else_stmts = self.stmt_list(&[Keyword::Fi]);
            if else_stmts.is_empty() && !self.has_err() {
                self.follow_err(else_pos, "\"else\"", "a statement list");
            }
        }
        let fi_pos = self.stmt_end(if_pos, "if", Keyword::Fi);
        Command::If(IfClause {
            if_pos,
            then_pos,
            fi_pos,
            cond,
            then_stmts,
            elifs,
            else_stmts,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{Mode, parse};
    use crate::syntax::{Command, Cond, IfClause};
    use assert_matches::assert_matches;

    fn if_clause(src: &str) -> IfClause {
        let file = parse(src.as_bytes(), "", Mode::empty()).unwrap();
        let cmd = file.stmts.into_iter().next().unwrap().cmd.unwrap();
        assert_matches!(cmd, Command::If(i) => i)
    }

    #[test]
    fn if_then_fi() {
        let i = if_clause("if true; then echo x; fi");
        let cond = assert_matches!(&i.cond, Cond::Stmts(s) => s);
        assert_eq!(cond.len(), 1);
        assert_matches!(cond[0].cmd.as_ref().unwrap(), Command::Call(c) => {
            assert_eq!(c.args[0].lit(), Some("true"));
        });
        assert_eq!(i.then_stmts.len(), 1);
        assert!(i.elifs.is_empty());
        assert!(i.else_stmts.is_empty());
        assert_eq!(i.fi_pos.offset(), 23);
    }

    #[test]
    fn if_elif_else() {
        let i = if_clause("if a; then b; elif c; then d; elif e; then f; else g; fi");
        assert_eq!(i.elifs.len(), 2);
        assert_eq!(i.else_stmts.len(), 1);
    }

    #[test]
    fn if_across_lines() {
        let i = if_clause("if a\nthen\n  b\n  c\nfi");
        assert_eq!(i.then_stmts.len(), 2);
    }

    #[test]
    fn arithmetic_condition() {
        let i = if_clause("if ((x > 1)); then y; fi");
        assert_matches!(i.cond, Cond::CStyle(_));
    }

    #[test]
    fn missing_then() {
        let err = parse(b"if true; fi", "", Mode::empty()).unwrap_err();
        assert_eq!(err.cause.message(), "if <cond> must be followed by \"then\"");
    }

    #[test]
    fn missing_fi() {
        let err = parse(b"if a; then b;", "", Mode::empty()).unwrap_err();
        assert_eq!(err.cause.message(), "if statement must end with \"fi\"");
        assert_eq!((err.line, err.column), (1, 1));
    }

    #[test]
    fn empty_condition() {
        let err = parse(b"if then b; fi", "", Mode::empty()).unwrap_err();
        assert_eq!(err.cause.message(), "\"if\" must be followed by a statement list");
    }

    #[test]
    fn empty_then_body() {
        let err = parse(b"if a; then fi", "", Mode::empty()).unwrap_err();
        assert_eq!(err.cause.message(), "\"then\" must be followed by a statement list");
    }

    #[test]
    fn posix_mode_keeps_parens_as_subshell() {
        let file = parse(b"if ((a); b); then c; fi", "", Mode::POSIX_CONFORMANT).unwrap();
        let i = assert_matches!(file.stmts.into_iter().next().unwrap().cmd.unwrap(),
            Command::If(i) => i);
        let cond = assert_matches!(&i.cond, Cond::Stmts(s) => s);
        assert_matches!(cond[0].cmd.as_ref().unwrap(), Command::Subshell(_));
    }
}
