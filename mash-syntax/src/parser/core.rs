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

//! Fundamentals for implementing the parser
//!
//! The parser and the lexer run in lock-step over one shared state: the
//! grammar writes the [quote context](super::lex::QuoteCtx) and the
//! `stop_newline`/`forbid_nested` flags into that state before requesting
//! the next token, so tokenization of the following byte depends on what the
//! grammar decided about the current construct. The lexing half of the
//! implementation lives in [`super::lex`]; this module holds the state
//! itself and the helpers shared by all grammar productions.
//!
//! # Error discipline
//!
//! Only the first error of a parse is kept. Recording an error clamps the
//! current token to [`Eof`](Token::Eof), so every production unwinds
//! normally without checking a result at each step; the driver reports the
//! recorded error at the end.

use super::error::{Error, SyntaxError};
use super::lex::{Keyword, QuoteCtx, Token};
use crate::source::{File, Pos, lookup_position};
use crate::syntax::{Comment, HereDoc, Lit, Word};
use std::rc::Rc;

bitflags::bitflags! {
    /// Parser configuration bits
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct Mode: u32 {
        /// Collect [`Comment`] nodes into the resulting [`File`]
        const PARSE_COMMENTS = 1 << 0;
        /// Reject constructs that require Bash
        const POSIX_CONFORMANT = 1 << 1;
    }
}

/// Here-document redirect whose body has not been read yet
#[derive(Debug)]
pub(crate) struct PendingHereDoc {
    /// Delimiter word as written after the operator
    pub(crate) delim: Word,
    /// True for the `<<-` operator
    pub(crate) remove_tabs: bool,
    /// Body cell shared with the redirect in the tree
    pub(crate) doc: Rc<HereDoc>,
}

/// The shell syntax parser
///
/// A parser is good for a single parse of the byte buffer it was constructed
/// over: it either produces a [`File`] or stops at the first error, and
/// afterwards every token request yields `Eof`. The scratch buffer used to
/// derive here-document stop bytes can be recycled across parses through
/// [`parse_with_scratch`](super::parse_with_scratch).
#[derive(Debug)]
pub(crate) struct Parser<'a> {
    pub(crate) mode: Mode,
    pub(crate) src: &'a [u8],
    filename: String,

    /// Index of the next unread byte, counted from zero
    pub(crate) npos: usize,

    // current token
    pub(crate) tok: Token,
    pub(crate) val: Vec<u8>,
    pub(crate) pos: Pos,
    pub(crate) tok_end: Pos,

    // out-of-band signals of the last `next`
    /// Whitespace preceded the current token
    pub(crate) spaced: bool,
    /// A newline was consumed before the current token
    pub(crate) newline: bool,

    // lexer parameters, written by the grammar before each `next`
    pub(crate) quote: QuoteCtx,
    /// Emit [`Token::Stopped`] instead of skipping a newline
    pub(crate) stop_newline: bool,
    /// Reject command substitutions, set inside here-document delimiters
    pub(crate) forbid_nested: bool,

    // here-documents
    pub(crate) heredocs: Vec<PendingHereDoc>,
    /// Stop bytes of the here-document body being read
    pub(crate) hdoc_stop: Vec<u8>,
    /// Strip leading tabs when matching the stop line
    pub(crate) hdoc_tabs: bool,

    /// Line-start registry, 1-based offsets, seeded with 1
    pub(crate) lines: Vec<u32>,
    pub(crate) comments: Vec<Comment>,
    err: Option<Error>,

    /// Scratch buffer for stop-byte derivation; only its capacity outlives a
    /// parse
    pub(crate) buf: Vec<u8>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(src: &'a [u8], name: &str, mode: Mode, buf: Vec<u8>) -> Self {
        Parser {
            mode,
            src,
            filename: name.to_string(),
            npos: 0,
            tok: Token::Stopped,
            val: Vec::new(),
            pos: Pos::at(0),
            tok_end: Pos::at(0),
            spaced: false,
            newline: false,
            quote: QuoteCtx::None,
            stop_newline: false,
            forbid_nested: false,
            heredocs: Vec::new(),
            hdoc_stop: Vec::new(),
            hdoc_tabs: false,
            lines: vec![1],
            comments: Vec::new(),
            err: None,
            buf,
        }
    }

    /// Parses the whole buffer into a file.
    pub(crate) fn run(&mut self) -> Result<File, Error> {
        self.next();
        let stmts = self.stmt_list(&[]);
        if self.err.is_none() && self.tok != Token::Eof {
            // a closer with nothing to close, e.g. a stray backquote context
            self.cur_err(SyntaxError::OperatorAtStmtStart { op: self.tok_str() });
        }
        if !self.heredocs.is_empty() {
            // end of input finalizes bodies that never saw their delimiter
            self.do_heredocs();
        }
        match self.err.take() {
            Some(err) => Err(err),
            None => Ok(File {
                name: std::mem::take(&mut self.filename),
                stmts,
                comments: std::mem::take(&mut self.comments),
                lines: std::mem::take(&mut self.lines),
            }),
        }
    }

    /// Hands the scratch buffer back for reuse.
    pub(crate) fn into_scratch(mut self) -> Vec<u8> {
        self.buf.clear();
        std::mem::take(&mut self.buf)
    }

    /// Takes the recorded error out of the parser, if any.
    pub(crate) fn take_err(&mut self) -> Option<Error> {
        self.err.take()
    }

    // error recording

    /// Records `cause` at `pos` unless an error was already recorded, then
    /// clamps the current token to `Eof`.
    pub(crate) fn pos_err(&mut self, pos: Pos, cause: SyntaxError) {
        if self.err.is_none() {
            let position = lookup_position(&self.lines, pos);
            self.err = Some(Error {
                filename: self.filename.clone(),
                line: position.line,
                column: position.column,
                cause,
            });
        }
        self.tok = Token::Eof;
        self.val.clear();
    }

    pub(crate) fn cur_err(&mut self, cause: SyntaxError) {
        self.pos_err(self.pos, cause)
    }

    pub(crate) fn has_err(&self) -> bool {
        self.err.is_some()
    }

    /// "X must be followed by Y" at `pos`.
    pub(crate) fn follow_err(&mut self, pos: Pos, left: impl Into<String>, right: &str) {
        self.pos_err(
            pos,
            SyntaxError::MustFollow {
                left: left.into(),
                right: right.to_string(),
            },
        );
    }

    /// "reached T without matching L with R" at the opening position.
    pub(crate) fn matching_err(&mut self, pos: Pos, left: &'static str, right: &'static str) {
        let at = self.tok_str();
        self.pos_err(pos, SyntaxError::Unmatched { at, left, right });
    }

    /// "reached T without closing quote Q" at the opening quote.
    pub(crate) fn quote_err(&mut self, pos: Pos, quote: char) {
        let at = self.tok_str();
        self.pos_err(pos, SyntaxError::UnclosedQuote { at, quote });
    }

    /// Rejects a Bash-only construct when in POSIX mode.
    pub(crate) fn posix_check(&mut self, pos: Pos) {
        if self.mode.contains(Mode::POSIX_CONFORMANT) {
            self.pos_err(pos, SyntaxError::BashFeature);
        }
    }

    /// Describes the current token for error messages.
    pub(crate) fn tok_str(&self) -> String {
        match self.tok {
            Token::Lit | Token::LitWord => String::from_utf8_lossy(&self.val).into_owned(),
            tok => tok.as_str().to_string(),
        }
    }

    // token helpers

    /// Consumes the current token if it matches.
    pub(crate) fn got(&mut self, tok: Token) -> bool {
        if self.tok == tok {
            self.next();
            true
        } else {
            false
        }
    }

    /// Returns the reserved word the current token spells, if any.
    pub(crate) fn rsrv_word(&self) -> Option<Keyword> {
        if self.tok != Token::LitWord {
            return None;
        }
        std::str::from_utf8(&self.val).ok()?.parse().ok()
    }

    /// Consumes the current token if it is the given reserved word.
    pub(crate) fn got_rsrv(&mut self, kw: Keyword) -> bool {
        self.got_rsrv_pos(kw).is_some()
    }

    /// Consumes the current token if it is the given reserved word,
    /// returning its position.
    pub(crate) fn got_rsrv_pos(&mut self, kw: Keyword) -> Option<Pos> {
        if self.rsrv_word() == Some(kw) {
            let pos = self.pos;
            self.next();
            Some(pos)
        } else {
            None
        }
    }

    /// Requires the given reserved word, reporting "X must be followed by Y"
    /// against `open_pos` when it is missing.
    pub(crate) fn follow_rsrv(&mut self, open_pos: Pos, left: impl Into<String>, kw: Keyword) -> Pos {
        match self.got_rsrv_pos(kw) {
            Some(pos) => pos,
            None => {
                let right = format!("{:?}", kw.as_str());
                self.pos_err(
                    open_pos,
                    SyntaxError::MustFollow {
                        left: left.into(),
                        right,
                    },
                );
                self.pos
            }
        }
    }

    /// Requires the reserved word that terminates a compound command.
    pub(crate) fn stmt_end(&mut self, start: Pos, name: &'static str, kw: Keyword) -> Pos {
        match self.got_rsrv_pos(kw) {
            Some(pos) => pos,
            None => {
                self.pos_err(
                    start,
                    SyntaxError::StmtEnd {
                        name,
                        want: kw.as_str(),
                    },
                );
                self.pos
            }
        }
    }

    /// Builds a literal from the current token without consuming it.
    pub(crate) fn take_lit(&mut self) -> Lit {
        Lit {
            value_pos: self.pos,
            value_end: self.tok_end,
            value: String::from_utf8_lossy(&self.val).into_owned(),
        }
    }

    /// Tests if the current token is a literal consisting of digits.
    pub(crate) fn lit_digits(&self) -> bool {
        matches!(self.tok, Token::Lit | Token::LitWord)
            && !self.val.is_empty()
            && self.val.iter().all(u8::is_ascii_digit)
    }

    /// Returns the source text covered by a byte span, lossily decoded.
    pub(crate) fn src_slice(&self, pos: Pos, end: Pos) -> String {
        String::from_utf8_lossy(&self.src[pos.offset() - 1..end.offset() - 1]).into_owned()
    }

    pub(crate) fn push_comment(&mut self, hash: Pos, text: &[u8]) {
        if self.mode.contains(Mode::PARSE_COMMENTS) {
            self.comments.push(Comment {
                hash,
                text: String::from_utf8_lossy(text).into_owned(),
            });
        }
    }
}

/// Tests if a byte string is a valid shell identifier.
pub(crate) fn is_valid_name(s: &str) -> bool {
    let mut bytes = s.bytes();
    match bytes.next() {
        Some(b) if b == b'_' || b.is_ascii_alphabetic() => {}
        _ => return false,
    }
    bytes.all(|b| b == b'_' || b.is_ascii_alphanumeric())
}
