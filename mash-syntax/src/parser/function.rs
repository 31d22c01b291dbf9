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

//! Syntax parser for function definitions
//!
//! Two forms exist: the portable `name () body` and the Bash-style
//! `function name [()] body`. In the portable form the parentheses must
//! open on the same line as the name; the name is validated against the raw
//! source slice it covers, so a quoted would-be name is rejected.

use super::core::{Parser, is_valid_name};
use super::error::SyntaxError;
use super::lex::Token;
use crate::syntax::{Command, FuncDecl, Lit, Node, Stmt, Word};

impl Parser<'_> {
    /// Parses a Bash-style definition; the current token is the `function`
    /// word.
    pub(crate) fn bash_func_decl(&mut self) -> Command {
        let position = self.pos;
        self.posix_check(position);
        self.next();
        let Some(name_word) = self.word() else {
            if !self.has_err() {
                self.follow_err(position, "\"function\"", "a name");
            }
            return self.func_decl_body(position, true, self.placeholder_name());
        };
        let name = self.func_name(&name_word);
        if self.tok == Token::LeftParen && !self.newline {
            let lparen = self.pos;
            self.next();
            if !self.got(Token::RightParen) && !self.has_err() {
                self.follow_err(lparen, format!("{}(", name.value), "\")\"");
            }
        }
        self.func_decl_body(position, true, name)
    }

    /// Parses a portable-form definition; the name word is already read and
    /// the current token is the `(`.
    pub(crate) fn func_decl(&mut self, name_word: Word) -> Command {
        let position = name_word.pos();
        let name = self.func_name(&name_word);
        let lparen = self.pos;
        self.next();
        if !self.got(Token::RightParen) && !self.has_err() {
            self.follow_err(lparen, format!("{}(", name.value), "\")\"");
        }
        self.func_decl_body(position, false, name)
    }

    /// Validates the name against its source slice.
    fn func_name(&mut self, name_word: &Word) -> Lit {
        let slice = self.src_slice(name_word.pos(), name_word.end());
        if !is_valid_name(&slice) && !self.has_err() {
            self.pos_err(
                name_word.pos(),
                SyntaxError::InvalidFuncName {
                    name: slice.clone(),
                },
            );
        }
        Lit {
            value_pos: name_word.pos(),
            value_end: name_word.end(),
            value: slice,
        }
    }

    fn placeholder_name(&self) -> Lit {
        Lit {
            value_pos: self.pos,
            value_end: self.pos,
            value: String::new(),
        }
    }

    /// Parses the body statement, which may sit on the following line.
    fn func_decl_body(&mut self, position: crate::source::Pos, bash_style: bool, name: Lit) -> Command {
        let body = match self.get_stmt(false).0 {
            Some(stmt) => stmt,
            None => {
                if !self.has_err() {
                    self.follow_err(position, format!("{}()", name.value), "a statement");
                }
                Stmt {
                    position: self.pos,
                    negated: false,
                    background: false,
                    assigns: Vec::new(),
                    redirs: Vec::new(),
                    cmd: None,
                }
            }
        };
        Command::FuncDecl(FuncDecl {
            position,
            bash_style,
            name,
            body: Box::new(body),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{Mode, parse};
    use crate::syntax::{Command, FuncDecl};
    use assert_matches::assert_matches;

    fn func(src: &str) -> FuncDecl {
        let file = parse(src.as_bytes(), "", Mode::empty()).unwrap();
        let cmd = file.stmts.into_iter().next().unwrap().cmd.unwrap();
        assert_matches!(cmd, Command::FuncDecl(f) => f)
    }

    #[test]
    fn portable_form_with_body_on_next_line() {
        let f = func("foo()\n{ echo ok; }");
        assert_eq!(f.name.value, "foo");
        assert!(!f.bash_style);
        let block = assert_matches!(f.body.cmd.as_ref().unwrap(), Command::Block(b) => b);
        assert_eq!(block.stmts.len(), 1);
        assert_matches!(block.stmts[0].cmd.as_ref().unwrap(), Command::Call(c) => {
            assert_eq!(c.args[0].lit(), Some("echo"));
            assert_eq!(c.args[1].lit(), Some("ok"));
        });
    }

    #[test]
    fn portable_form_with_space_before_parens() {
        let f = func("foo () { :; }");
        assert_eq!(f.name.value, "foo");
        assert!(!f.bash_style);
    }

    #[test]
    fn bash_style_without_parens() {
        let f = func("function foo { :; }");
        assert_eq!(f.name.value, "foo");
        assert!(f.bash_style);
    }

    #[test]
    fn bash_style_with_parens() {
        let f = func("function foo() { :; }");
        assert!(f.bash_style);
    }

    #[test]
    fn body_may_be_any_statement() {
        let f = func("foo() echo hi");
        assert_matches!(f.body.cmd.as_ref().unwrap(), Command::Call(_));
    }

    #[test]
    fn invalid_name_is_rejected() {
        let err = parse(b"\"foo\"() { :; }", "", Mode::empty()).unwrap_err();
        assert_eq!(err.cause.message(), "invalid func name: \"foo\"");
    }

    #[test]
    fn missing_close_paren() {
        let err = parse(b"foo( { :; }", "", Mode::empty()).unwrap_err();
        assert_eq!(err.cause.message(), "foo( must be followed by \")\"");
    }

    #[test]
    fn missing_body() {
        let err = parse(b"foo()", "", Mode::empty()).unwrap_err();
        assert_eq!(err.cause.message(), "foo() must be followed by a statement");
    }

    #[test]
    fn paren_on_next_line_is_not_a_function() {
        let file = parse(b"foo\n(bar)", "", Mode::empty()).unwrap();
        assert_eq!(file.stmts.len(), 2);
        assert_matches!(file.stmts[0].cmd.as_ref().unwrap(), Command::Call(_));
        assert_matches!(file.stmts[1].cmd.as_ref().unwrap(), Command::Subshell(_));
    }
}
