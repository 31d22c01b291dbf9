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

//! Syntax parser for `for` loops
//!
//! The loop header is either `name [in word…]`, terminated by `;` or a
//! newline before `do`, or the C-style `((init; cond; post))` where each of
//! the three expressions may be empty.

use super::core::{Mode, Parser};
use super::lex::{Keyword, QuoteCtx, Token};
use crate::source::Pos;
use crate::syntax::{CStyleLoop, Command, ForClause, ForLoop, Lit, WordIter};

impl Parser<'_> {
    /// Parses a `for` loop; the current token is the `for` word.
    pub(crate) fn for_clause(&mut self) -> Command {
        let for_pos = self.pos;
        self.next();
        let iter = self.loop_head(for_pos);
        let left = match &iter {
            ForLoop::Words(w) => format!("for {} [in words]", w.name.value),
            ForLoop::CStyle(_) => "for ((init; cond; post))".to_string(),
        };
        let do_pos = self.follow_rsrv(for_pos, left, Keyword::Do);
        let do_stmts = self.stmt_list(&[Keyword::Done]);
        if do_stmts.is_empty() && !self.has_err() {
            self.follow_err(do_pos, "\"do\"", "a statement list");
        }
        let done_pos = self.stmt_end(for_pos, "for", Keyword::Done);
        Command::For(ForClause {
            for_pos,
            do_pos,
            done_pos,
            iter,
            do_stmts,
        })
    }

    fn loop_head(&mut self, for_pos: Pos) -> ForLoop {
        if self.tok == Token::LeftParen
            && self.cur() == Some(b'(')
            && !self.mode.contains(Mode::POSIX_CONFORMANT)
        {
            return ForLoop::CStyle(self.c_style_loop());
        }
        let name = match self.tok {
            Token::Lit | Token::LitWord => {
                let name = self.take_lit();
                self.next();
                name
            }
            _ => {
                if !self.has_err() {
                    self.follow_err(for_pos, "\"for\"", "a literal");
                }
                Lit {
                    value_pos: self.pos,
                    value_end: self.pos,
                    value: String::new(),
                }
            }
        };
        let mut list = Vec::new();
        if self.got_rsrv(Keyword::In) {
            loop {
                if self.newline {
                    break;
                }
                match self.word() {
                    Some(w) => list.push(w),
                    None => break,
                }
            }
            if !self.got(Token::Semicolon) && !self.newline && !self.has_err() {
                self.follow_err(self.pos, "word list", "\";\"");
            }
        } else {
            self.got(Token::Semicolon);
        }
        ForLoop::Words(WordIter { name, list })
    }

    /// Parses `((init; cond; post))`; the current token is the first `(`.
    fn c_style_loop(&mut self) -> CStyleLoop {
        let lparen = self.pos;
        self.npos += 1;
        let old = self.quote;
        self.quote = QuoteCtx::Arithm;
        self.next();
        let init = self.arithm_expr(0, false);
        if !self.got(Token::Semicolon) && !self.has_err() {
            self.follow_err(self.pos, "expression", "\";\"");
        }
        let cond = self.arithm_expr(0, false);
        if !self.got(Token::Semicolon) && !self.has_err() {
            self.follow_err(self.pos, "expression", "\";\"");
        }
        let post = self.arithm_expr(0, false);
        let rparen = self.close_dbl_paren(lparen, "((");
        self.quote = old;
        self.next();
        self.got(Token::Semicolon);
        CStyleLoop {
            lparen,
            rparen,
            init,
            cond,
            post,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{Mode, parse};
    use crate::syntax::{Command, ForClause, ForLoop};
    use assert_matches::assert_matches;

    fn for_clause(src: &str) -> ForClause {
        let file = parse(src.as_bytes(), "", Mode::empty()).unwrap();
        let cmd = file.stmts.into_iter().next().unwrap().cmd.unwrap();
        assert_matches!(cmd, Command::For(f) => f)
    }

    #[test]
    fn word_iteration() {
        let f = for_clause("for x in a b c; do echo $x; done");
        let iter = assert_matches!(f.iter, ForLoop::Words(w) => w);
        assert_eq!(iter.name.value, "x");
        assert_eq!(iter.list.len(), 3);
        assert_eq!(f.do_stmts.len(), 1);
    }

    #[test]
    fn iteration_over_positional_parameters() {
        let f = for_clause("for arg; do echo \"$arg\"; done");
        let iter = assert_matches!(f.iter, ForLoop::Words(w) => w);
        assert_eq!(iter.name.value, "arg");
        assert!(iter.list.is_empty());
    }

    #[test]
    fn word_list_ends_at_newline() {
        let f = for_clause("for x in a b\ndo :; done");
        let iter = assert_matches!(f.iter, ForLoop::Words(w) => w);
        assert_eq!(iter.list.len(), 2);
    }

    #[test]
    fn c_style_loop() {
        let f = for_clause("for ((i = 0; i < 10; i++)); do echo $i; done");
        let c = assert_matches!(f.iter, ForLoop::CStyle(c) => c);
        assert!(c.init.is_some());
        assert!(c.cond.is_some());
        assert!(c.post.is_some());
    }

    #[test]
    fn c_style_loop_with_empty_expressions() {
        let f = for_clause("for ((;;)); do break; done");
        let c = assert_matches!(f.iter, ForLoop::CStyle(c) => c);
        assert!(c.init.is_none());
        assert!(c.cond.is_none());
        assert!(c.post.is_none());
    }

    #[test]
    fn missing_name() {
        let err = parse(b"for; do :; done", "", Mode::empty()).unwrap_err();
        assert_eq!(err.cause.message(), "\"for\" must be followed by a literal");
    }

    #[test]
    fn missing_do() {
        let err = parse(b"for x in a b\ndone", "", Mode::empty()).unwrap_err();
        assert_eq!(
            err.cause.message(),
            "for x [in words] must be followed by \"do\""
        );
    }

    #[test]
    fn missing_done() {
        let err = parse(b"for x in y; do :", "", Mode::empty()).unwrap_err();
        assert_eq!(err.cause.message(), "for statement must end with \"done\"");
    }
}
