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

//! Syntax parser for redirections
//!
//! For `<<` and `<<-` only the delimiter word is read in place, under
//! `stop_newline` and `forbid_nested`; the redirect joins a pending queue
//! and its body is parsed once the logical line is complete. The lexer then
//! reports the end of that line with [`Token::Stopped`], and
//! [`do_heredocs`](Parser::do_heredocs) drains the queue in order.
//!
//! The stop bytes of a delimiter are its unquoted concatenation: literal
//! parts lose their backslashes, single-quoted parts contribute raw bytes,
//! quoted parts contribute the unquoted bytes of their inner parts, and any
//! expansion used in a delimiter contributes its raw source slice.

use super::core::{Parser, PendingHereDoc};
use super::error::SyntaxError;
use super::lex::{QuoteCtx, Token};
use crate::syntax::{HereDoc, Node, Redirect, Word, WordPart};
use std::cell::OnceCell;
use std::rc::Rc;

impl Parser<'_> {
    /// Tests if a redirection starts at the current token: a redirection
    /// operator, or a digit literal directly followed by `<` or `>`.
    pub(crate) fn peek_redir(&self) -> bool {
        self.tok.is_redir_op()
            || (self.lit_digits() && matches!(self.cur(), Some(b'<' | b'>')))
    }

    /// Parses one redirection; [`peek_redir`](Self::peek_redir) must hold.
    pub(crate) fn redirect(&mut self) -> Redirect {
        let n = if self.lit_digits() {
            let lit = self.take_lit();
            self.next();
            Some(lit)
        } else {
            None
        };
        let op = self.tok;
        let op_pos = self.pos;
        if matches!(op, Token::AndGreater | Token::AndGreaterGreater) {
            self.posix_check(op_pos);
        }
        if op.is_hdoc_op() {
            let old = self.quote;
            self.quote = QuoteCtx::HdocWord;
            self.stop_newline = true;
            self.forbid_nested = true;
            self.next();
            let word = match self.word() {
                Some(w) => w,
                None => {
                    if !self.has_err() {
                        if self.tok == Token::Stopped {
                            self.cur_err(SyntaxError::HdocWordOnNewLine);
                        } else {
                            self.follow_err(op_pos, op.as_str(), "a word");
                        }
                    }
                    self.empty_word_at(op_pos)
                }
            };
            self.quote = old;
            self.forbid_nested = false;
            // stop_newline stays set while the body is pending
            let doc = Rc::new(HereDoc {
                content: OnceCell::new(),
            });
            self.heredocs.push(PendingHereDoc {
                delim: word.clone(),
                remove_tabs: op == Token::LessLessDash,
                doc: Rc::clone(&doc),
            });
            Redirect {
                n,
                op,
                op_pos,
                word,
                hdoc: Some(doc),
            }
        } else {
            self.next();
            if (self.newline || self.tok == Token::Stopped) && !self.has_err() {
                self.pos_err(op_pos, SyntaxError::RedirWordOnNewLine);
            }
            let word = match self.word() {
                Some(w) => w,
                None => {
                    if !self.has_err() {
                        self.follow_err(op_pos, op.as_str(), "a word");
                    }
                    self.empty_word_at(op_pos)
                }
            };
            Redirect {
                n,
                op,
                op_pos,
                word,
                hdoc: None,
            }
        }
    }

    /// Reads the bodies of all pending here-documents, in queue order.
    ///
    /// Called when the logical line carrying the operators has ended: at the
    /// [`Token::Stopped`] marker, or at end of input. The current token is
    /// left at the marker; the caller advances past it.
    pub(crate) fn do_heredocs(&mut self) {
        self.stop_newline = false;
        let pending = std::mem::take(&mut self.heredocs);
        for p in pending {
            if self.has_err() {
                break;
            }
            self.buf.clear();
            self.delim_stop_bytes(&p.delim.parts);
            let stop = std::mem::take(&mut self.buf);
            let old_stop = std::mem::replace(&mut self.hdoc_stop, stop);
            let old_tabs = self.hdoc_tabs;
            self.hdoc_tabs = p.remove_tabs;
            if self.cur() == Some(b'\n') {
                self.npos += 1;
                self.mark_line();
            }
            let old = self.quote;
            self.quote = QuoteCtx::HdocBody;
            self.next();
            let mut parts = Vec::new();
            while self.tok != Token::Stopped && self.tok != Token::Eof {
                match self.word_part() {
                    Some(part) => parts.push(part),
                    None => break,
                }
            }
            p.doc
                .content
                .set(Word { parts })
                .expect("here-document body filled twice");
            self.quote = old;
            self.hdoc_tabs = old_tabs;
            self.buf = std::mem::replace(&mut self.hdoc_stop, old_stop);
        }
    }

    /// Appends the unquoted bytes of a delimiter word to the scratch buffer.
    fn delim_stop_bytes(&mut self, parts: &[WordPart]) {
        for part in parts {
            match part {
                WordPart::Lit(l) => {
                    let bytes = l.value.as_bytes();
                    let mut i = 0;
                    while i < bytes.len() {
                        if bytes[i] == b'\\' {
                            if i + 1 < bytes.len() {
                                self.buf.push(bytes[i + 1]);
                            }
                            i += 2;
                        } else {
                            self.buf.push(bytes[i]);
                            i += 1;
                        }
                    }
                }
                WordPart::SglQuoted(s) => self.buf.extend_from_slice(s.value.as_bytes()),
                WordPart::Quoted(q) => self.delim_stop_bytes(&q.parts),
                part => {
                    let (pos, end) = (part.pos().offset() - 1, part.end().offset() - 1);
                    let src = self.src;
                    self.buf.extend_from_slice(&src[pos..end.min(src.len())]);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::lex::Token;
    use crate::parser::{Mode, parse};
    use crate::syntax::{Command, Redirect, WordPart};
    use assert_matches::assert_matches;

    fn first_redirect(src: &str) -> Redirect {
        let file = parse(src.as_bytes(), "", Mode::empty()).unwrap();
        file.stmts.into_iter().next().unwrap().redirs.into_iter().next().unwrap()
    }

    #[test]
    fn output_redirect() {
        let r = first_redirect("echo hi >out.txt");
        assert_eq!(r.op, Token::Greater);
        assert!(r.n.is_none());
        assert_eq!(r.word.lit(), Some("out.txt"));
        assert!(r.hdoc.is_none());
    }

    #[test]
    fn fd_number_redirect() {
        let r = first_redirect("echo hi 2>err");
        assert_eq!(r.op, Token::Greater);
        assert_eq!(r.n.unwrap().value, "2");
    }

    #[test]
    fn spaced_digits_are_a_word() {
        let file = parse(b"echo 2 >err", "", Mode::empty()).unwrap();
        let stmt = &file.stmts[0];
        let call = assert_matches!(stmt.cmd.as_ref().unwrap(), Command::Call(c) => c);
        assert_eq!(call.args.len(), 2);
        assert_eq!(call.args[1].lit(), Some("2"));
        assert_eq!(stmt.redirs.len(), 1);
    }

    #[test]
    fn dup_and_inout_redirects() {
        assert_eq!(first_redirect("a 2>&1").op, Token::GreaterAnd);
        assert_eq!(first_redirect("a <&0").op, Token::LessAnd);
        assert_eq!(first_redirect("a <>f").op, Token::LessGreater);
        assert_eq!(first_redirect("a &>f").op, Token::AndGreater);
        assert_eq!(first_redirect("a &>>f").op, Token::AndGreaterGreater);
        assert_eq!(first_redirect("a <<<word").op, Token::LessLessLess);
    }

    #[test]
    fn redirect_word_must_share_the_line() {
        let err = parse(b"echo >\nout", "", Mode::empty()).unwrap_err();
        assert_eq!(err.cause.message(), "redirect word must be on the same line");
    }

    #[test]
    fn heredoc_body_with_expansion() {
        let file = parse(b"cat <<EOF\nhello $x\nEOF\n", "", Mode::empty()).unwrap();
        let r = &file.stmts[0].redirs[0];
        assert_eq!(r.op, Token::LessLess);
        assert_eq!(r.word.lit(), Some("EOF"));
        let body = r.hdoc.as_ref().unwrap().content.get().unwrap();
        assert_eq!(body.parts.len(), 3);
        assert_matches!(&body.parts[0], WordPart::Lit(l) if l.value == "hello ");
        assert_matches!(&body.parts[1], WordPart::ParamExp(p) => {
            assert!(p.short);
            assert_eq!(p.param.value, "x");
        });
        assert_matches!(&body.parts[2], WordPart::Lit(l) if l.value == "\n");
    }

    #[test]
    fn heredoc_line_continuation_in_body() {
        let file = parse(b"cat <<EOF\na\\\nb\nEOF\n", "", Mode::empty()).unwrap();
        let body = file.stmts[0].redirs[0].hdoc.as_ref().unwrap().content.get().unwrap();
        // the backslash-newline pair disappears from the value
        assert_matches!(&body.parts[0], WordPart::Lit(l) if l.value == "ab\n");
    }

    #[test]
    fn heredoc_empty_body() {
        let file = parse(b"cat <<EOF\nEOF\n", "", Mode::empty()).unwrap();
        let body = file.stmts[0].redirs[0].hdoc.as_ref().unwrap().content.get().unwrap();
        assert!(body.parts.is_empty());
    }

    #[test]
    fn heredoc_dash_strips_tabs_for_matching() {
        let file = parse(b"cat <<-EOF\n\tbody\n\tEOF\n", "", Mode::empty()).unwrap();
        let r = &file.stmts[0].redirs[0];
        assert_eq!(r.op, Token::LessLessDash);
        let body = r.hdoc.as_ref().unwrap().content.get().unwrap();
        // body lines keep their tabs; only delimiter matching ignores them
        assert_matches!(&body.parts[0], WordPart::Lit(l) if l.value == "\tbody\n");
    }

    #[test]
    fn heredoc_quoted_delimiter() {
        let file = parse(b"cat <<'EOF'\n$x\nEOF\n", "", Mode::empty()).unwrap();
        let body = file.stmts[0].redirs[0].hdoc.as_ref().unwrap().content.get().unwrap();
        // the delimiter unquotes to EOF; the body still parses expansions
        assert!(!body.parts.is_empty());
    }

    #[test]
    fn heredoc_adjacent_literals_in_delimiter() {
        // regression: E"O"F concatenates to the stop bytes EOF
        let file = parse(b"cat <<E\"O\"F\nx\nEOF\n", "", Mode::empty()).unwrap();
        let body = file.stmts[0].redirs[0].hdoc.as_ref().unwrap().content.get().unwrap();
        assert_matches!(&body.parts[0], WordPart::Lit(l) if l.value == "x\n");
    }

    #[test]
    fn heredoc_backslash_in_delimiter() {
        let file = parse(b"cat <<\\EOF\n$x\nEOF\n", "", Mode::empty()).unwrap();
        let body = file.stmts[0].redirs[0].hdoc.as_ref().unwrap().content.get().unwrap();
        assert!(!body.parts.is_empty());
    }

    #[test]
    fn two_heredocs_on_one_line() {
        let file = parse(b"cat <<A <<B\none\nA\ntwo\nB\n", "", Mode::empty()).unwrap();
        let redirs = &file.stmts[0].redirs;
        assert_eq!(redirs.len(), 2);
        let a = redirs[0].hdoc.as_ref().unwrap().content.get().unwrap();
        let b = redirs[1].hdoc.as_ref().unwrap().content.get().unwrap();
        assert_matches!(&a.parts[0], WordPart::Lit(l) if l.value == "one\n");
        assert_matches!(&b.parts[0], WordPart::Lit(l) if l.value == "two\n");
    }

    #[test]
    fn heredoc_then_more_statements() {
        let file = parse(b"cat <<EOF\nbody\nEOF\necho after\n", "", Mode::empty()).unwrap();
        assert_eq!(file.stmts.len(), 2);
        let body = file.stmts[0].redirs[0].hdoc.as_ref().unwrap().content.get().unwrap();
        assert_matches!(&body.parts[0], WordPart::Lit(l) if l.value == "body\n");
    }

    #[test]
    fn heredoc_finalizes_at_eof() {
        let file = parse(b"cat <<EOF\nbody", "", Mode::empty()).unwrap();
        let body = file.stmts[0].redirs[0].hdoc.as_ref().unwrap().content.get().unwrap();
        assert_matches!(&body.parts[0], WordPart::Lit(l) if l.value == "body");
    }

    #[test]
    fn heredoc_delimiter_must_share_the_line() {
        let err = parse(b"cat <<\nEOF\n", "", Mode::empty()).unwrap_err();
        assert_eq!(
            err.cause.message(),
            "heredoc stop word must be on the same line"
        );
    }

    #[test]
    fn heredoc_in_pipeline() {
        let file = parse(b"cat <<EOF | wc\nbody\nEOF\n", "", Mode::empty()).unwrap();
        let cmd = file.stmts[0].cmd.as_ref().unwrap();
        let bin = assert_matches!(cmd, Command::Binary(b) => b);
        assert_eq!(bin.op, Token::Or);
        let body = bin.x.redirs[0].hdoc.as_ref().unwrap().content.get().unwrap();
        assert_matches!(&body.parts[0], WordPart::Lit(l) if l.value == "body\n");
    }
}
