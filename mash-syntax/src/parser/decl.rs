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

//! Syntax parser for declaration-style clauses
//!
//! `declare` and `local` take dash options followed by assignments and bare
//! words; `eval` wraps one whole statement; `let` takes one or more
//! arithmetic expressions in compact mode, where whitespace separates the
//! expressions and the clause ends at the end of the line.

use super::core::Parser;
use super::error::SyntaxError;
use super::lex::{QuoteCtx, Token};
use crate::syntax::{Assign, Command, DeclClause, EvalClause, LetClause, Value};

impl Parser<'_> {
    /// Parses a `declare` or `local` clause; the current token is the
    /// keyword.
    pub(crate) fn decl_clause(&mut self, local: bool) -> Command {
        let position = self.pos;
        self.posix_check(position);
        self.next();
        let mut opts = Vec::new();
        loop {
            if self.newline {
                break;
            }
            if matches!(self.tok, Token::Lit | Token::LitWord)
                && self.val.first() == Some(&b'-')
            {
                match self.word() {
                    Some(w) => opts.push(w),
                    None => break,
                }
            } else {
                break;
            }
        }
        let mut assigns = Vec::new();
        loop {
            if self.newline {
                break;
            }
            if self.peek_assign() {
                let assign = self.get_assign();
                assigns.push(assign);
            } else if self.peek_word_start() {
                match self.word() {
                    Some(w) => assigns.push(Assign {
                        name: None,
                        append: false,
                        value: Some(Value::Scalar(w)),
                    }),
                    None => break,
                }
            } else {
                break;
            }
        }
        Command::Decl(DeclClause {
            position,
            local,
            opts,
            assigns,
        })
    }

    /// Parses an `eval` clause; the current token is the `eval` word.
    pub(crate) fn eval_clause(&mut self) -> Command {
        let eval_pos = self.pos;
        self.next();
        let stmt = if self.newline {
            None
        } else {
            self.get_stmt(false).0.map(Box::new)
        };
        Command::Eval(EvalClause { eval_pos, stmt })
    }

    /// Parses a `let` clause; the current token is the `let` word.
    pub(crate) fn let_clause(&mut self) -> Command {
        let let_pos = self.pos;
        self.posix_check(let_pos);
        let old = self.quote;
        self.quote = QuoteCtx::ArithmLet;
        self.next();
        let mut exprs = Vec::new();
        loop {
            if self.newline || self.let_end() {
                break;
            }
            match self.arithm_expr(0, true) {
                Some(x) => exprs.push(x),
                None => break,
            }
        }
        if exprs.is_empty() {
            if !self.has_err() {
                self.follow_err(let_pos, "\"let\"", "an expression");
            }
        } else if !self.newline && !self.let_end() && !self.has_err() {
            let op = self.tok_str();
            self.cur_err(SyntaxError::InvalidArithmOp { op });
        }
        self.quote = old;
        Command::Let(LetClause { let_pos, exprs })
    }

    /// Tests if the current token terminates a `let` clause.
    fn let_end(&self) -> bool {
        use Token::*;
        matches!(
            self.tok,
            Eof | Stopped
                | Semicolon
                | And
                | AndAnd
                | Or
                | OrOr
                | OrAnd
                | RightParen
                | BckQuote
                | DblSemicolon
                | SemiAnd
                | DblSemiAnd
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::lex::Token;
    use crate::parser::{Mode, parse};
    use crate::syntax::{ArithmExpr, Command, DeclClause, LetClause};
    use assert_matches::assert_matches;

    fn decl(src: &str) -> DeclClause {
        let file = parse(src.as_bytes(), "", Mode::empty()).unwrap();
        let cmd = file.stmts.into_iter().next().unwrap().cmd.unwrap();
        assert_matches!(cmd, Command::Decl(d) => d)
    }

    fn let_clause(src: &str) -> LetClause {
        let file = parse(src.as_bytes(), "", Mode::empty()).unwrap();
        let cmd = file.stmts.into_iter().next().unwrap().cmd.unwrap();
        assert_matches!(cmd, Command::Let(l) => l)
    }

    #[test]
    fn declare_with_options_and_assigns() {
        let d = decl("declare -r -x FOO=1 bar");
        assert!(!d.local);
        assert_eq!(d.opts.len(), 2);
        assert_eq!(d.opts[0].lit(), Some("-r"));
        assert_eq!(d.assigns.len(), 2);
        assert_eq!(d.assigns[0].name.as_ref().unwrap().value, "FOO");
        assert!(d.assigns[1].name.is_none());
    }

    #[test]
    fn local_clause() {
        let d = decl("local x=1");
        assert!(d.local);
        assert_eq!(d.assigns.len(), 1);
    }

    #[test]
    fn eval_wraps_a_statement() {
        let file = parse(b"eval a=1 b", "", Mode::empty()).unwrap();
        let e = assert_matches!(file.stmts.into_iter().next().unwrap().cmd.unwrap(),
            Command::Eval(e) => e);
        let stmt = e.stmt.unwrap();
        assert_eq!(stmt.assigns.len(), 1);
        assert!(stmt.cmd.is_some());
    }

    #[test]
    fn bare_eval() {
        let file = parse(b"eval", "", Mode::empty()).unwrap();
        let e = assert_matches!(file.stmts.into_iter().next().unwrap().cmd.unwrap(),
            Command::Eval(e) => e);
        assert!(e.stmt.is_none());
    }

    #[test]
    fn let_with_compact_expressions() {
        let l = let_clause("let x=1 y+=2");
        assert_eq!(l.exprs.len(), 2);
        let x = assert_matches!(&l.exprs[0], ArithmExpr::Binary(b) => b);
        assert_eq!(x.op, Token::Equal);
        let y = assert_matches!(&l.exprs[1], ArithmExpr::Binary(b) => b);
        assert_eq!(y.op, Token::PlusEqual);
    }

    #[test]
    fn let_spaces_split_expressions() {
        let l = let_clause("let a++ b--");
        assert_eq!(l.exprs.len(), 2);
        assert_matches!(&l.exprs[0], ArithmExpr::Unary(u) => assert!(u.post));
    }

    #[test]
    fn let_requires_an_expression() {
        let err = parse(b"let", "", Mode::empty()).unwrap_err();
        assert_eq!(err.cause.message(), "\"let\" must be followed by an expression");
    }

    #[test]
    fn let_then_next_statement() {
        let file = parse(b"let x=1; echo done", "", Mode::empty()).unwrap();
        assert_eq!(file.stmts.len(), 2);
        let file = parse(b"let x=1\necho done", "", Mode::empty()).unwrap();
        assert_eq!(file.stmts.len(), 2);
    }

    #[test]
    fn posix_mode_rejects_bash_clauses() {
        for src in ["declare -x a", "local a", "let x=1"] {
            let err = parse(src.as_bytes(), "", Mode::POSIX_CONFORMANT).unwrap_err();
            assert_eq!(err.cause.message(), "this feature requires bash", "{src}");
        }
    }
}
