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

//! Fundamental building blocks of the lexical analyzer
//!
//! This module holds the cursor primitives and the per-context dispatch of
//! `next`. The context-specific literal readers live in
//! [`word`](super::word), and here-document bodies in
//! [`heredoc`](super::heredoc).

use super::Token;
use crate::parser::core::Parser;
use crate::source::Pos;

/// Quote context of the parser
///
/// The context names the closer that ends the current construct and selects
/// which opener tokens the lexer recognizes. The grammar saves the current
/// context on entry to a nested construct and restores it on exit.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum QuoteCtx {
    /// Top level
    #[default]
    None,
    /// Inside `$(…)`, `<(…)`, `>(…)`, or `(…)`; `)` closes
    SubCmd,
    /// Inside `` `…` ``; a backquote closes
    SubCmdBquo,
    /// Inside `"…"` or `$"…"`; `"` closes
    DblQuotes,
    /// Inside `$'…'`; `'` closes
    SglQuotes,
    /// Reading a here-document delimiter; a newline stops the line
    HdocWord,
    /// Reading a here-document body; the delimiter line closes
    HdocBody,
    /// After `${`, at the parameter or operator position; `}` closes
    ParamName,
    /// Inside `${x[…]}`; `]` closes
    ParamInd,
    /// Reading the pattern of `${x/orig/with}`; `/` or `}` closes
    ParamRepl,
    /// Reading the word of an expansion operator; `}` closes
    ParamExpWord,
    /// Inside `$((…))` or `((…))`; `))` closes
    Arithm,
    /// Reading `let` operands; a blank ends the expression
    ArithmLet,
    /// Inside a `case` branch body; `;;`, `;&`, or `;;&` closes
    CaseBody,
}

impl Parser<'_> {
    /// Returns the byte at the cursor.
    pub(crate) fn cur(&self) -> Option<u8> {
        self.src.get(self.npos).copied()
    }

    /// Returns the byte at the given index.
    pub(crate) fn byte_at(&self, index: usize) -> Option<u8> {
        self.src.get(index).copied()
    }

    /// Records a line start right after a consumed newline.
    pub(crate) fn mark_line(&mut self) {
        self.lines.push(self.npos as u32 + 1);
    }

    pub(crate) fn set_eof(&mut self) {
        self.pos = Pos::at(self.npos);
        self.val.clear();
        self.tok = Token::Eof;
    }

    fn set_op(&mut self, start: usize, tok: Token) {
        self.pos = Pos::at(start);
        self.val.clear();
        self.tok = tok;
    }

    fn one_byte_tok(&mut self, tok: Token) {
        let start = self.npos;
        self.npos += 1;
        self.set_op(start, tok);
    }

    /// Produces the next token under the current quote context.
    ///
    /// After an error the token stays clamped to `Eof` and this function
    /// does nothing.
    pub(crate) fn next(&mut self) {
        if self.tok == Token::Eof {
            return;
        }
        self.spaced = false;
        self.newline = false;
        match self.quote {
            QuoteCtx::HdocBody => self.next_hdoc_body(),
            QuoteCtx::DblQuotes => self.next_in_quotes(b'"'),
            QuoteCtx::SglQuotes => self.next_in_quotes(b'\''),
            QuoteCtx::ParamName => self.next_param_name(),
            QuoteCtx::ParamInd => self.next_param_part(&[b']']),
            QuoteCtx::ParamRepl => self.next_param_repl(),
            QuoteCtx::ParamExpWord => self.next_param_part(&[b'}']),
            QuoteCtx::Arithm | QuoteCtx::ArithmLet => self.next_arithm(),
            _ => self.next_command(),
        }
        self.tok_end = Pos::at(self.npos);
    }

    /// Tokenization at the command level, also used for `case` bodies,
    /// substitutions, and here-document delimiters.
    fn next_command(&mut self) {
        loop {
            let Some(b) = self.cur() else {
                return self.set_eof();
            };
            match b {
                b' ' | b'\t' | b'\r' => {
                    self.spaced = true;
                    self.npos += 1;
                }
                b'\\' if self.byte_at(self.npos + 1) == Some(b'\n') => {
                    self.npos += 2;
                    self.mark_line();
                }
                b'\n' => {
                    if self.stop_newline {
                        self.pos = Pos::at(self.npos);
                        self.val.clear();
                        self.tok = Token::Stopped;
                        return;
                    }
                    self.spaced = true;
                    self.newline = true;
                    self.npos += 1;
                    self.mark_line();
                }
                b'#' if self.at_word_start() => self.comment(),
                _ => break,
            }
        }
        match self.src[self.npos] {
            b'\'' => self.one_byte_tok(Token::SglQuote),
            b'"' => self.one_byte_tok(Token::DblQuote),
            b'`' => self.one_byte_tok(Token::BckQuote),
            b'$' => self.dollar_tok(),
            b @ (b'&' | b'|' | b';' | b'<' | b'>' | b'(' | b')') => self.operator_tok(b),
            _ => self.advance_lit_none(),
        }
    }

    /// Tests if the cursor sits at the start of a word.
    ///
    /// `#` begins a comment only here; anywhere else it is an ordinary
    /// literal byte, as in `foo#bar`.
    fn at_word_start(&self) -> bool {
        match self.npos.checked_sub(1).and_then(|i| self.byte_at(i)) {
            None => true,
            Some(b) => matches!(
                b,
                b' ' | b'\t' | b'\n' | b';' | b'&' | b'|' | b'<' | b'>' | b'(' | b')'
            ),
        }
    }

    /// Skips a comment up to the end of the line, collecting it when the
    /// mode asks for comments.
    fn comment(&mut self) {
        let hash = self.npos;
        self.npos += 1;
        let start = self.npos;
        while let Some(b) = self.cur() {
            if b == b'\n' {
                break;
            }
            self.npos += 1;
        }
        let text = self.src[start..self.npos].to_vec();
        self.push_comment(Pos::at(hash), &text);
    }

    fn operator_tok(&mut self, b: u8) {
        let start = self.npos;
        self.npos += 1;
        let tok = match b {
            b'&' => match self.cur() {
                Some(b'&') => {
                    self.npos += 1;
                    Token::AndAnd
                }
                Some(b'>') => {
                    self.npos += 1;
                    if self.cur() == Some(b'>') {
                        self.npos += 1;
                        Token::AndGreaterGreater
                    } else {
                        Token::AndGreater
                    }
                }
                _ => Token::And,
            },
            b'|' => match self.cur() {
                Some(b'|') => {
                    self.npos += 1;
                    Token::OrOr
                }
                Some(b'&') => {
                    self.npos += 1;
                    Token::OrAnd
                }
                _ => Token::Or,
            },
            b';' => match self.cur() {
                Some(b';') => {
                    self.npos += 1;
                    if self.cur() == Some(b'&') {
                        self.npos += 1;
                        Token::DblSemiAnd
                    } else {
                        Token::DblSemicolon
                    }
                }
                Some(b'&') => {
                    self.npos += 1;
                    Token::SemiAnd
                }
                _ => Token::Semicolon,
            },
            b'<' => match self.cur() {
                Some(b'<') => {
                    self.npos += 1;
                    match self.cur() {
                        Some(b'-') => {
                            self.npos += 1;
                            Token::LessLessDash
                        }
                        Some(b'<') => {
                            self.npos += 1;
                            Token::LessLessLess
                        }
                        _ => Token::LessLess,
                    }
                }
                Some(b'&') => {
                    self.npos += 1;
                    Token::LessAnd
                }
                Some(b'>') => {
                    self.npos += 1;
                    Token::LessGreater
                }
                Some(b'(') => {
                    self.npos += 1;
                    Token::LessParen
                }
                _ => Token::Less,
            },
            b'>' => match self.cur() {
                Some(b'>') => {
                    self.npos += 1;
                    Token::GreaterGreater
                }
                Some(b'&') => {
                    self.npos += 1;
                    Token::GreaterAnd
                }
                Some(b'(') => {
                    self.npos += 1;
                    Token::GreaterParen
                }
                _ => Token::Greater,
            },
            b'(' => Token::LeftParen,
            _ => Token::RightParen,
        };
        self.set_op(start, tok);
    }

    /// Reads the token starting with `$`.
    ///
    /// The byte after the dollar decides the kind; a lone `$` is produced as
    /// [`Token::Dollar`] and resolved by the grammar per the short-parameter
    /// rules.
    pub(crate) fn dollar_tok(&mut self) {
        let start = self.npos;
        self.npos += 1;
        let in_quotes = matches!(
            self.quote,
            QuoteCtx::DblQuotes | QuoteCtx::SglQuotes | QuoteCtx::HdocBody
        );
        let tok = match self.cur() {
            Some(b'\'') if !in_quotes => {
                self.npos += 1;
                Token::DollSglQuote
            }
            Some(b'"') if !in_quotes => {
                self.npos += 1;
                Token::DollDblQuote
            }
            Some(b'{') => {
                self.npos += 1;
                Token::DollBrace
            }
            Some(b'(') => {
                if self.byte_at(self.npos + 1) == Some(b'(') {
                    self.npos += 2;
                    Token::DollDblParen
                } else {
                    self.npos += 1;
                    Token::DollParen
                }
            }
            _ => Token::Dollar,
        };
        self.set_op(start, tok);
    }

    /// Tokenization inside `"…"`, `$"…"`, and `$'…'`.
    fn next_in_quotes(&mut self, closer: u8) {
        let Some(b) = self.cur() else {
            return self.set_eof();
        };
        match b {
            _ if b == closer => self.one_byte_tok(if closer == b'"' {
                Token::DblQuote
            } else {
                Token::SglQuote
            }),
            b'`' => self.one_byte_tok(Token::BckQuote),
            b'$' => self.dollar_tok(),
            _ => self.advance_lit_quotes(closer),
        }
    }

    /// Tokenization at the operator position of `${…}`.
    fn next_param_name(&mut self) {
        let Some(b) = self.cur() else {
            return self.set_eof();
        };
        let start = self.npos;
        match b {
            b'}' => return self.one_byte_tok(Token::RightBrace),
            b'[' => return self.one_byte_tok(Token::LeftBrack),
            b'$' => return self.dollar_tok(),
            b'`' => return self.one_byte_tok(Token::BckQuote),
            b'"' => return self.one_byte_tok(Token::DblQuote),
            b'\'' => return self.one_byte_tok(Token::SglQuote),
            b'#' => {
                self.npos += 1;
                let tok = if self.cur() == Some(b'#') {
                    self.npos += 1;
                    Token::HashHash
                } else {
                    Token::Hash
                };
                self.set_op(start, tok);
            }
            b'%' => {
                self.npos += 1;
                let tok = if self.cur() == Some(b'%') {
                    self.npos += 1;
                    Token::PercentPercent
                } else {
                    Token::Percent
                };
                self.set_op(start, tok);
            }
            b'/' => {
                self.npos += 1;
                let tok = if self.cur() == Some(b'/') {
                    self.npos += 1;
                    Token::SlashSlash
                } else {
                    Token::Slash
                };
                self.set_op(start, tok);
            }
            b':' => {
                self.npos += 1;
                let tok = match self.cur() {
                    Some(b'+') => {
                        self.npos += 1;
                        Token::ColonPlus
                    }
                    Some(b'-') => {
                        self.npos += 1;
                        Token::ColonMinus
                    }
                    Some(b'?') => {
                        self.npos += 1;
                        Token::ColonQuest
                    }
                    Some(b'=') => {
                        self.npos += 1;
                        Token::ColonEqual
                    }
                    _ => Token::Colon,
                };
                self.set_op(start, tok);
            }
            b'+' => self.one_byte_tok(Token::Plus),
            b'-' => self.one_byte_tok(Token::Minus),
            b'?' => self.one_byte_tok(Token::Quest),
            b'=' => self.one_byte_tok(Token::Equal),
            _ => self.advance_lit_param(&[
                b'}', b'[', b'#', b'%', b':', b'+', b'-', b'?', b'=', b'/',
            ]),
        }
    }

    /// Tokenization of the pattern half of `${x/orig/with}`.
    fn next_param_repl(&mut self) {
        let Some(b) = self.cur() else {
            return self.set_eof();
        };
        match b {
            b'/' => self.one_byte_tok(Token::Slash),
            b'}' => self.one_byte_tok(Token::RightBrace),
            b'$' => self.dollar_tok(),
            b'`' => self.one_byte_tok(Token::BckQuote),
            b'"' => self.one_byte_tok(Token::DblQuote),
            b'\'' => self.one_byte_tok(Token::SglQuote),
            _ => self.advance_lit_param(&[b'/', b'}']),
        }
    }

    /// Tokenization of `${x[…]}` subscripts and expansion words.
    fn next_param_part(&mut self, closers: &'static [u8]) {
        let Some(b) = self.cur() else {
            return self.set_eof();
        };
        match b {
            b']' if closers.contains(&b']') => self.one_byte_tok(Token::RightBrack),
            b'}' if closers.contains(&b'}') => self.one_byte_tok(Token::RightBrace),
            b'$' => self.dollar_tok(),
            b'`' => self.one_byte_tok(Token::BckQuote),
            b'"' => self.one_byte_tok(Token::DblQuote),
            b'\'' => self.one_byte_tok(Token::SglQuote),
            _ => self.advance_lit_param(closers),
        }
    }

    /// Tokenization inside `$((…))`, `((…))`, and `let` operands.
    fn next_arithm(&mut self) {
        loop {
            let Some(b) = self.cur() else {
                return self.set_eof();
            };
            match b {
                b' ' | b'\t' | b'\r' => {
                    self.spaced = true;
                    self.npos += 1;
                }
                b'\\' if self.byte_at(self.npos + 1) == Some(b'\n') => {
                    self.npos += 2;
                    self.mark_line();
                }
                b'\n' => {
                    self.spaced = true;
                    if self.quote == QuoteCtx::ArithmLet {
                        // a `let` clause ends at the end of its line
                        self.newline = true;
                    }
                    self.npos += 1;
                    self.mark_line();
                }
                _ => break,
            }
        }
        let start = self.npos;
        let b = self.src[self.npos];
        self.npos += 1;
        let tok = match b {
            b'(' => Token::LeftParen,
            b')' => Token::RightParen,
            b';' => Token::Semicolon,
            b'?' => Token::Quest,
            b':' => Token::Colon,
            b',' => Token::Comma,
            b'+' => match self.cur() {
                Some(b'+') => {
                    self.npos += 1;
                    Token::PlusPlus
                }
                Some(b'=') => {
                    self.npos += 1;
                    Token::PlusEqual
                }
                _ => Token::Plus,
            },
            b'-' => match self.cur() {
                Some(b'-') => {
                    self.npos += 1;
                    Token::MinusMinus
                }
                Some(b'=') => {
                    self.npos += 1;
                    Token::MinusEqual
                }
                _ => Token::Minus,
            },
            b'*' => match self.cur() {
                Some(b'*') => {
                    self.npos += 1;
                    Token::StarStar
                }
                Some(b'=') => {
                    self.npos += 1;
                    Token::StarEqual
                }
                _ => Token::Star,
            },
            b'/' => match self.cur() {
                Some(b'=') => {
                    self.npos += 1;
                    Token::SlashEqual
                }
                _ => Token::Slash,
            },
            b'%' => match self.cur() {
                Some(b'=') => {
                    self.npos += 1;
                    Token::PercentEqual
                }
                _ => Token::Percent,
            },
            b'<' => match self.cur() {
                Some(b'<') => {
                    self.npos += 1;
                    if self.cur() == Some(b'=') {
                        self.npos += 1;
                        Token::LessLessEqual
                    } else {
                        Token::LessLess
                    }
                }
                Some(b'=') => {
                    self.npos += 1;
                    Token::LessEqual
                }
                _ => Token::Less,
            },
            b'>' => match self.cur() {
                Some(b'>') => {
                    self.npos += 1;
                    if self.cur() == Some(b'=') {
                        self.npos += 1;
                        Token::GreaterGreaterEqual
                    } else {
                        Token::GreaterGreater
                    }
                }
                Some(b'=') => {
                    self.npos += 1;
                    Token::GreaterEqual
                }
                _ => Token::Greater,
            },
            b'=' => match self.cur() {
                Some(b'=') => {
                    self.npos += 1;
                    Token::EqualEqual
                }
                _ => Token::Equal,
            },
            b'!' => match self.cur() {
                Some(b'=') => {
                    self.npos += 1;
                    Token::BangEqual
                }
                _ => Token::Bang,
            },
            b'&' => match self.cur() {
                Some(b'&') => {
                    self.npos += 1;
                    Token::AndAnd
                }
                Some(b'=') => {
                    self.npos += 1;
                    Token::AndEqual
                }
                _ => Token::And,
            },
            b'|' => match self.cur() {
                Some(b'|') => {
                    self.npos += 1;
                    Token::OrOr
                }
                Some(b'=') => {
                    self.npos += 1;
                    Token::OrEqual
                }
                _ => Token::Or,
            },
            b'^' => match self.cur() {
                Some(b'=') => {
                    self.npos += 1;
                    Token::CaretEqual
                }
                _ => Token::Caret,
            },
            b'$' => {
                self.npos -= 1;
                return self.dollar_tok();
            }
            b'`' => {
                self.npos -= 1;
                return self.one_byte_tok(Token::BckQuote);
            }
            b'"' => {
                self.npos -= 1;
                return self.one_byte_tok(Token::DblQuote);
            }
            b'\'' => {
                self.npos -= 1;
                return self.one_byte_tok(Token::SglQuote);
            }
            _ => {
                self.npos -= 1;
                return self.advance_lit_arithm();
            }
        };
        self.set_op(start, tok);
    }
}
