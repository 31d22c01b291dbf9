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

//! Syntax parser for simple commands
//!
//! A literal at statement position whose prefix up to `=` is a valid
//! identifier is an assignment; `+` before the `=` makes it appending. The
//! rest of the literal seeds the value word, which keeps absorbing adjacent
//! parts, or an array literal when a `(` follows the `=` directly. A
//! literal that fails the test is re-read as an ordinary command word.

use super::core::{Parser, is_valid_name};
use super::error::SyntaxError;
use super::lex::Token;
use crate::syntax::{ArrayExpr, Assign, CallExpr, Command, Lit, Stmt, Value, Word, WordPart};

/// Splits an assignment candidate into name length and append flag.
fn assign_split(val: &[u8]) -> Option<(usize, bool)> {
    let eq = val.iter().position(|&b| b == b'=')?;
    let (name_len, append) = if eq > 0 && val[eq - 1] == b'+' {
        (eq - 1, true)
    } else {
        (eq, false)
    };
    let name = std::str::from_utf8(&val[..name_len]).ok()?;
    if is_valid_name(name) {
        Some((name_len, append))
    } else {
        None
    }
}

impl Parser<'_> {
    /// Tests if the current token begins an assignment.
    pub(crate) fn peek_assign(&self) -> bool {
        matches!(self.tok, Token::Lit | Token::LitWord) && assign_split(&self.val).is_some()
    }

    /// Parses one assignment; [`peek_assign`](Self::peek_assign) must hold.
    pub(crate) fn get_assign(&mut self) -> Assign {
        let (name_len, append) = assign_split(&self.val).expect("not an assignment");
        let consumed = name_len + usize::from(append) + 1;
        let name = Lit {
            value_pos: self.pos,
            value_end: self.pos.advance(name_len),
            value: String::from_utf8_lossy(&self.val[..name_len]).into_owned(),
        };
        let value_pos = self.pos.advance(consumed);
        let rest = self.val[consumed..].to_vec();
        let rest_end = self.tok_end;
        self.next();

        if rest.is_empty() && self.tok == Token::LeftParen && !self.spaced && !self.newline {
            let array = self.array_expr();
            return Assign {
                name: Some(name),
                append,
                value: Some(Value::Array(array)),
            };
        }

        let mut parts = Vec::new();
        if !rest.is_empty() {
            parts.push(WordPart::Lit(Lit {
                value_pos,
                value_end: rest_end,
                value: String::from_utf8_lossy(&rest).into_owned(),
            }));
        }
        while !self.spaced && !self.newline {
            match self.word_part() {
                Some(part) => parts.push(part),
                None => break,
            }
        }
        let value = if parts.is_empty() {
            None
        } else {
            Some(Value::Scalar(Word { parts }))
        };
        Assign {
            name: Some(name),
            append,
            value,
        }
    }

    /// Parses an `(elem…)` array literal; the current token is the `(`.
    fn array_expr(&mut self) -> ArrayExpr {
        let lparen = self.pos;
        self.posix_check(lparen);
        self.next();
        let mut list = Vec::new();
        loop {
            match self.tok {
                Token::RightParen | Token::Eof => break,
                _ => match self.word() {
                    Some(w) => list.push(w),
                    None => {
                        self.cur_err(SyntaxError::InvalidArrayElem);
                        break;
                    }
                },
            }
        }
        let rparen = self.pos;
        if !self.got(Token::RightParen) {
            self.matching_err(lparen, "(", ")");
        }
        ArrayExpr {
            lparen,
            rparen,
            list,
        }
    }

    /// Parses a simple command's words and inline redirections.
    pub(crate) fn call_expr(&mut self, s: &mut Stmt) -> Option<Command> {
        let first = self.word()?;
        if self.tok == Token::LeftParen && !self.newline {
            return Some(self.func_decl(first));
        }
        let mut args = vec![first];
        loop {
            if self.newline {
                break;
            }
            if self.peek_redir() {
                let redir = self.redirect();
                s.redirs.push(redir);
            } else if self.peek_word_start() {
                match self.word() {
                    Some(w) => args.push(w),
                    None => break,
                }
            } else if self.tok == Token::LeftParen {
                self.cur_err(SyntaxError::InvalidCommandWord);
                break;
            } else {
                break;
            }
        }
        Some(Command::Call(CallExpr { args }))
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{Mode, parse};
    use crate::syntax::{Assign, Node, Value};
    use assert_matches::assert_matches;

    fn assigns(src: &str) -> Vec<Assign> {
        let file = parse(src.as_bytes(), "", Mode::empty()).unwrap();
        file.stmts.into_iter().next().unwrap().assigns
    }

    #[test]
    fn scalar_append_and_array_assigns() {
        let assigns = assigns("a=1 b+=2 c=(x y)");
        assert_eq!(assigns.len(), 3);

        let a = &assigns[0];
        assert_eq!(a.name.as_ref().unwrap().value, "a");
        assert!(!a.append);
        let value = assert_matches!(a.value.as_ref().unwrap(), Value::Scalar(w) => w);
        assert_eq!(value.lit(), Some("1"));

        let b = &assigns[1];
        assert_eq!(b.name.as_ref().unwrap().value, "b");
        assert!(b.append);
        let value = assert_matches!(b.value.as_ref().unwrap(), Value::Scalar(w) => w);
        assert_eq!(value.lit(), Some("2"));

        let c = &assigns[2];
        assert_eq!(c.name.as_ref().unwrap().value, "c");
        let array = assert_matches!(c.value.as_ref().unwrap(), Value::Array(a) => a);
        assert_eq!(array.list.len(), 2);
        assert_eq!(array.list[0].lit(), Some("x"));
        assert_eq!(array.list[1].lit(), Some("y"));
    }

    #[test]
    fn assign_positions() {
        let assigns = assigns("a=1");
        let a = &assigns[0];
        assert_eq!(a.name.as_ref().unwrap().value_pos.offset(), 1);
        let value = assert_matches!(a.value.as_ref().unwrap(), Value::Scalar(w) => w);
        assert_eq!(value.pos().offset(), 3);
    }

    #[test]
    fn empty_value_assign() {
        let assigns = assigns("a= cmd");
        assert!(assigns[0].value.is_none());
    }

    #[test]
    fn value_word_of_many_parts() {
        let assigns = assigns("a=1\"2\"$x");
        let value = assert_matches!(assigns[0].value.as_ref().unwrap(), Value::Scalar(w) => w);
        assert_eq!(value.parts.len(), 3);
    }

    #[test]
    fn spaced_paren_is_not_an_array() {
        // `a=` ends empty; the spaced `(b)` is a subshell command
        let file = parse(b"a= (b)", "", Mode::empty()).unwrap();
        let stmt = &file.stmts[0];
        assert!(stmt.assigns[0].value.is_none());
        assert_matches!(stmt.cmd.as_ref().unwrap(), crate::syntax::Command::Subshell(_));
    }

    #[test]
    fn invalid_prefix_is_a_word() {
        let file = parse(b"1x=2", "", Mode::empty()).unwrap();
        let stmt = &file.stmts[0];
        assert!(stmt.assigns.is_empty());
        assert!(stmt.cmd.is_some());
    }

    #[test]
    fn equals_in_arguments_is_literal() {
        let file = parse(b"echo a=b", "", Mode::empty()).unwrap();
        let stmt = &file.stmts[0];
        assert!(stmt.assigns.is_empty());
    }

    #[test]
    fn unclosed_array() {
        let err = parse(b"a=(x y", "", Mode::empty()).unwrap_err();
        assert_eq!(err.cause.message(), "reached EOF without matching ( with )");
    }

    #[test]
    fn array_elements_must_be_words() {
        let err = parse(b"a=(x; y)", "", Mode::empty()).unwrap_err();
        assert_eq!(err.cause.message(), "array elements must be words");
    }
}
