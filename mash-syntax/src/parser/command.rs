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

//! Syntax parser for single statements
//!
//! A statement is: an optional `!`, a run of assignments and redirections,
//! one command body, and trailing redirections. The body is picked by the
//! current token: a reserved word selects its compound command, `(` a
//! subshell, and any word-starting token a simple command.

use super::core::Parser;
use super::error::SyntaxError;
use super::lex::{Keyword, Token};
use crate::syntax::{Command, Stmt};

impl Parser<'_> {
    /// Parses one statement up to the pipeline level, without `&&`/`||`.
    ///
    /// Returns `None` when the current token cannot begin a statement.
    pub(crate) fn get_stmt_pipe(&mut self) -> Option<Stmt> {
        let mut s = Stmt {
            position: self.pos,
            negated: false,
            background: false,
            assigns: Vec::new(),
            redirs: Vec::new(),
            cmd: None,
        };
        let mut started = false;
        if self.got_rsrv(Keyword::Bang) {
            s.negated = true;
            started = true;
        }
        // a newline after anything consumed here ends the statement
        loop {
            if started && self.newline {
                break;
            }
            if self.peek_assign() {
                let assign = self.get_assign();
                s.assigns.push(assign);
            } else if self.peek_redir() {
                let redir = self.redirect();
                s.redirs.push(redir);
            } else {
                break;
            }
            started = true;
        }
        if !(started && self.newline) {
            s.cmd = self.command_body(&mut s);
        }
        if s.cmd.is_none() && !s.negated && s.assigns.is_empty() && s.redirs.is_empty() {
            return None;
        }
        while !self.newline && self.peek_redir() {
            let redir = self.redirect();
            s.redirs.push(redir);
        }
        self.pipe_tail(s)
    }

    /// Dispatches on the token that begins the command body.
    fn command_body(&mut self, s: &mut Stmt) -> Option<Command> {
        if let Some(kw) = self.rsrv_word() {
            match kw {
                Keyword::If => return Some(self.if_clause()),
                Keyword::While => return Some(self.while_clause()),
                Keyword::Until => return Some(self.until_clause()),
                Keyword::For => return Some(self.for_clause()),
                Keyword::Case => return Some(self.case_clause()),
                Keyword::OpenBrace => return Some(self.block()),
                Keyword::CloseBrace => {
                    self.cur_err(SyntaxError::CloseBraceAtStmtStart);
                    return None;
                }
                Keyword::Function => return Some(self.bash_func_decl()),
                Keyword::Declare => return Some(self.decl_clause(false)),
                Keyword::Local => return Some(self.decl_clause(true)),
                Keyword::Eval => return Some(self.eval_clause()),
                Keyword::Let => return Some(self.let_clause()),
                // the rest are either stop words handled by the caller or
                // ordinary words here
                _ => {}
            }
        }
        match self.tok {
            Token::LeftParen => Some(self.subshell()),
            _ if self.peek_word_start() => self.call_expr(s),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{Mode, parse};
    use crate::syntax::{Command, Node, WordPart};
    use assert_matches::assert_matches;

    #[test]
    fn echo_hi() {
        let file = parse(b"echo hi", "", Mode::empty()).unwrap();
        assert_eq!(file.stmts.len(), 1);
        let stmt = &file.stmts[0];
        assert_eq!(stmt.pos().offset(), 1);
        let call = assert_matches!(stmt.cmd.as_ref().unwrap(), Command::Call(c) => c);
        assert_eq!(call.args.len(), 2);
        assert_matches!(&call.args[0].parts[0], WordPart::Lit(l) => {
            assert_eq!(l.value, "echo");
            assert_eq!(l.value_pos.offset(), 1);
        });
        assert_matches!(&call.args[1].parts[0], WordPart::Lit(l) => {
            assert_eq!(l.value, "hi");
            assert_eq!(l.value_pos.offset(), 6);
        });
    }

    #[test]
    fn negated_statement() {
        let file = parse(b"! true", "", Mode::empty()).unwrap();
        let stmt = &file.stmts[0];
        assert!(stmt.negated);
        assert_eq!(stmt.pos().offset(), 1);
        assert_matches!(stmt.cmd.as_ref().unwrap(), Command::Call(_));
    }

    #[test]
    fn bare_negation() {
        let file = parse(b"!", "", Mode::empty()).unwrap();
        let stmt = &file.stmts[0];
        assert!(stmt.negated);
        assert!(stmt.cmd.is_none());
    }

    #[test]
    fn assignments_only_statement() {
        let file = parse(b"a=1 b=2", "", Mode::empty()).unwrap();
        let stmt = &file.stmts[0];
        assert!(stmt.cmd.is_none());
        assert_eq!(stmt.assigns.len(), 2);
    }

    #[test]
    fn redirect_only_statement() {
        let file = parse(b">out", "", Mode::empty()).unwrap();
        let stmt = &file.stmts[0];
        assert!(stmt.cmd.is_none());
        assert_eq!(stmt.redirs.len(), 1);
    }

    #[test]
    fn assignments_then_command_then_redirect() {
        let file = parse(b"FOO=1 cmd arg >log", "", Mode::empty()).unwrap();
        let stmt = &file.stmts[0];
        assert_eq!(stmt.assigns.len(), 1);
        assert_eq!(stmt.redirs.len(), 1);
        let call = assert_matches!(stmt.cmd.as_ref().unwrap(), Command::Call(c) => c);
        assert_eq!(call.args.len(), 2);
    }

    #[test]
    fn keyword_as_argument_is_a_word() {
        let file = parse(b"echo if done", "", Mode::empty()).unwrap();
        let call = assert_matches!(file.stmts[0].cmd.as_ref().unwrap(), Command::Call(c) => c);
        assert_eq!(call.args.len(), 3);
        assert_eq!(call.args[1].lit(), Some("if"));
    }

    #[test]
    fn open_paren_inside_call_is_an_error() {
        let err = parse(b"echo foo (bar)", "", Mode::empty()).unwrap_err();
        assert_eq!(
            err.cause.message(),
            "a command can only contain words and redirects"
        );
    }
}
