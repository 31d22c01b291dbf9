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

//! Syntax parser for words
//!
//! A word is a tight concatenation of parts: as soon as the lexer reports
//! whitespace before the current token, the word is over. Each quoted or
//! expanded part saves the quote context, installs its own, and restores the
//! saved context after the closer, including on error paths.

use super::core::Parser;
use super::error::SyntaxError;
use super::lex::{QuoteCtx, Token};
use crate::source::Pos;
use crate::syntax::{CmdSubst, Lit, ProcSubst, Quoted, SglQuoted, Word, WordPart};

impl Parser<'_> {
    /// Parses one word, returning `None` if no word starts here.
    pub(crate) fn word(&mut self) -> Option<Word> {
        let parts = self.word_parts();
        if parts.is_empty() {
            None
        } else {
            Some(Word { parts })
        }
    }

    /// Collects word parts while they are adjacent.
    pub(crate) fn word_parts(&mut self) -> Vec<WordPart> {
        let mut parts = Vec::new();
        loop {
            if !parts.is_empty() && (self.spaced || self.newline) {
                break;
            }
            match self.word_part() {
                Some(part) => parts.push(part),
                None => break,
            }
        }
        parts
    }

    /// Tests if the current token can start a word.
    pub(crate) fn peek_word_start(&self) -> bool {
        use Token::*;
        match self.tok {
            Lit | LitWord | SglQuote | DblQuote | DollSglQuote | DollDblQuote | Dollar
            | DollBrace | DollParen | DollDblParen | LessParen | GreaterParen => true,
            BckQuote => self.quote != QuoteCtx::SubCmdBquo,
            _ => false,
        }
    }

    /// Parses one word part, returning `None` for any non-part token.
    pub(crate) fn word_part(&mut self) -> Option<WordPart> {
        match self.tok {
            Token::Lit | Token::LitWord => {
                let lit = self.take_lit();
                self.next();
                Some(WordPart::Lit(lit))
            }
            Token::SglQuote => self.sgl_quoted(),
            Token::DblQuote | Token::DollDblQuote | Token::DollSglQuote => self.quoted(),
            Token::Dollar => Some(self.short_param()),
            Token::DollBrace => self.param_exp(),
            Token::DollParen => Some(WordPart::CmdSubst(self.cmd_subst())),
            Token::DollDblParen => self.arithm_exp(),
            Token::BckQuote if self.quote != QuoteCtx::SubCmdBquo => {
                Some(WordPart::CmdSubst(self.backquote_subst()))
            }
            Token::LessParen | Token::GreaterParen => self.proc_subst(),
            _ => None,
        }
    }

    /// Reads a single-quoted string, bypassing the lexer for its raw body.
    fn sgl_quoted(&mut self) -> Option<WordPart> {
        let quote = self.pos;
        match self.single_quoted_body() {
            Some(value) => {
                self.next();
                Some(WordPart::SglQuoted(SglQuoted { quote, value }))
            }
            None => {
                self.set_eof();
                self.quote_err(quote, '\'');
                None
            }
        }
    }

    /// Parses a `"…"`, `$"…"`, or `$'…'` string.
    fn quoted(&mut self) -> Option<WordPart> {
        let quote_pos = self.pos;
        let open = self.tok;
        if open != Token::DblQuote {
            self.posix_check(quote_pos);
            if self.has_err() {
                return None;
            }
        }
        let (ctx, closer, quote_char) = if open == Token::DollSglQuote {
            (QuoteCtx::SglQuotes, Token::SglQuote, '\'')
        } else {
            (QuoteCtx::DblQuotes, Token::DblQuote, '"')
        };
        let old = self.quote;
        self.quote = ctx;
        self.next();
        let mut parts = Vec::new();
        while self.tok != closer && self.tok != Token::Eof {
            match self.word_part() {
                Some(part) => parts.push(part),
                None => break,
            }
        }
        self.quote = old;
        if self.tok == closer {
            self.next();
        } else {
            self.quote_err(quote_pos, quote_char);
        }
        Some(WordPart::Quoted(Quoted {
            quote_pos,
            quote: open,
            parts,
        }))
    }

    /// Resolves a lone `$` by peeking the next raw byte.
    ///
    /// A word-break byte, a quote, or end of input makes the dollar an
    /// ordinary literal; otherwise the following bytes name a parameter.
    fn short_param(&mut self) -> WordPart {
        let dollar = self.pos;
        let part = match self.param_lit(false) {
            Some(param) => WordPart::ParamExp(crate::syntax::ParamExp {
                dollar,
                short: true,
                length: false,
                param,
                index: None,
                repl: None,
                exp: None,
                rbrace: None,
            }),
            None => WordPart::Lit(Lit {
                value_pos: dollar,
                value_end: dollar.advance(1),
                value: "$".to_string(),
            }),
        };
        self.next();
        part
    }

    /// Reads a parameter name at the cursor: a name run, one special
    /// character, or a positional parameter.
    ///
    /// Outside braces a positional parameter is a single digit (`$12` is
    /// `${1}2`); inside braces, `all_digits` reads the whole number.
    pub(crate) fn param_lit(&mut self, all_digits: bool) -> Option<Lit> {
        let start = self.npos;
        match self.cur()? {
            b'0'..=b'9' => {
                self.npos += 1;
                if all_digits {
                    while matches!(self.cur(), Some(c) if c.is_ascii_digit()) {
                        self.npos += 1;
                    }
                }
            }
            b'#' | b'$' | b'?' | b'!' | b'@' | b'*' | b'-' => {
                self.npos += 1;
            }
            b if b == b'_' || b.is_ascii_alphabetic() => {
                while matches!(self.cur(), Some(c) if c == b'_' || c.is_ascii_alphanumeric()) {
                    self.npos += 1;
                }
            }
            _ => return None,
        }
        Some(Lit {
            value_pos: Pos::at(start),
            value_end: Pos::at(self.npos),
            value: String::from_utf8_lossy(&self.src[start..self.npos]).into_owned(),
        })
    }

    /// Parses a `$(…)` command substitution.
    pub(crate) fn cmd_subst(&mut self) -> CmdSubst {
        let left = self.pos;
        if self.forbid_nested {
            self.cur_err(SyntaxError::NestedStmts);
            return CmdSubst {
                left,
                right: left,
                backquotes: false,
                stmts: vec![],
            };
        }
        let old = self.quote;
        self.quote = QuoteCtx::SubCmd;
        self.next();
        let stmts = self.stmt_list(&[]);
        self.quote = old;
        let right = self.pos;
        if !self.got(Token::RightParen) {
            self.matching_err(left, "$(", ")");
        }
        CmdSubst {
            left,
            right,
            backquotes: false,
            stmts,
        }
    }

    /// Parses a backquoted command substitution.
    fn backquote_subst(&mut self) -> CmdSubst {
        let left = self.pos;
        if self.forbid_nested {
            self.cur_err(SyntaxError::NestedStmts);
            return CmdSubst {
                left,
                right: left,
                backquotes: true,
                stmts: vec![],
            };
        }
        let old = self.quote;
        self.quote = QuoteCtx::SubCmdBquo;
        self.next();
        let stmts = self.stmt_list(&[]);
        self.quote = old;
        let right = self.pos;
        if self.tok == Token::BckQuote {
            self.next();
        } else {
            self.quote_err(left, '`');
        }
        CmdSubst {
            left,
            right,
            backquotes: true,
            stmts,
        }
    }

    /// Parses a `<(…)` or `>(…)` process substitution.
    fn proc_subst(&mut self) -> Option<WordPart> {
        let op_pos = self.pos;
        let op = self.tok;
        self.posix_check(op_pos);
        if self.forbid_nested {
            self.cur_err(SyntaxError::NestedStmts);
        }
        if self.has_err() {
            return None;
        }
        let old = self.quote;
        self.quote = QuoteCtx::SubCmd;
        self.next();
        let stmts = self.stmt_list(&[]);
        self.quote = old;
        let rparen = self.pos;
        if !self.got(Token::RightParen) {
            self.matching_err(op_pos, op.as_str(), ")");
        }
        Some(WordPart::ProcSubst(ProcSubst {
            op_pos,
            op,
            rparen,
            stmts,
        }))
    }

    /// Builds a word holding a single empty literal, used to keep error
    /// paths producing spanned nodes.
    pub(crate) fn empty_word_at(&self, pos: Pos) -> Word {
        Word {
            parts: vec![WordPart::Lit(Lit {
                value_pos: pos,
                value_end: pos,
                value: String::new(),
            })],
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{Mode, parse};
    use crate::syntax::{Command, Node, WordPart};
    use assert_matches::assert_matches;

    fn first_call_words(src: &str) -> Vec<crate::syntax::Word> {
        let file = parse(src.as_bytes(), "", Mode::empty()).unwrap();
        match file.stmts.into_iter().next().unwrap().cmd.unwrap() {
            Command::Call(call) => call.args,
            cmd => panic!("not a call: {cmd:?}"),
        }
    }

    #[test]
    fn word_of_adjacent_parts() {
        let words = first_call_words("echo a'b'\"c\"$x");
        assert_eq!(words.len(), 2);
        let parts = &words[1].parts;
        assert_eq!(parts.len(), 4);
        assert_matches!(&parts[0], WordPart::Lit(l) if l.value == "a");
        assert_matches!(&parts[1], WordPart::SglQuoted(q) if q.value == "b");
        assert_matches!(&parts[2], WordPart::Quoted(q) if q.parts.len() == 1);
        assert_matches!(&parts[3], WordPart::ParamExp(p) if p.short && p.param.value == "x");
    }

    #[test]
    fn whitespace_ends_word() {
        let words = first_call_words("echo a b");
        assert_eq!(words.len(), 3);
        assert_eq!(words[1].lit(), Some("a"));
        assert_eq!(words[2].lit(), Some("b"));
    }

    #[test]
    fn single_quotes_are_raw() {
        let words = first_call_words(r"echo 'a \$x'");
        assert_matches!(&words[1].parts[0], WordPart::SglQuoted(q) if q.value == r"a \$x");
    }

    #[test]
    fn dollar_before_break_is_literal() {
        let words = first_call_words("echo $ x");
        assert_matches!(&words[1].parts[0], WordPart::Lit(l) if l.value == "$");
    }

    #[test]
    fn short_param_specials() {
        for (src, name) in [("echo $?", "?"), ("echo $#", "#"), ("echo $$", "$"), ("echo $1", "1")] {
            let words = first_call_words(src);
            assert_matches!(&words[1].parts[0], WordPart::ParamExp(p) => {
                assert!(p.short);
                assert_eq!(p.param.value, name);
            });
        }
    }

    #[test]
    fn short_param_takes_one_digit() {
        let words = first_call_words("echo $12");
        let parts = &words[1].parts;
        assert_eq!(parts.len(), 2);
        assert_matches!(&parts[0], WordPart::ParamExp(p) if p.param.value == "1");
        assert_matches!(&parts[1], WordPart::Lit(l) if l.value == "2");
    }

    #[test]
    fn unterminated_double_quote() {
        let err = parse(b"\"unterminated", "", Mode::empty()).unwrap_err();
        assert_eq!(err.cause.message(), "reached EOF without closing quote \"");
    }

    #[test]
    fn unterminated_single_quote() {
        let err = parse(b"echo 'oops", "", Mode::empty()).unwrap_err();
        assert_eq!(err.cause.message(), "reached EOF without closing quote '");
    }

    #[test]
    fn command_substitution_word() {
        let words = first_call_words("echo $(ls -l)");
        assert_matches!(&words[1].parts[0], WordPart::CmdSubst(c) => {
            assert!(!c.backquotes);
            assert_eq!(c.stmts.len(), 1);
        });
    }

    #[test]
    fn backquote_substitution_word() {
        let words = first_call_words("echo `ls`");
        assert_matches!(&words[1].parts[0], WordPart::CmdSubst(c) => {
            assert!(c.backquotes);
            assert_eq!(c.stmts.len(), 1);
        });
    }

    #[test]
    fn unclosed_command_substitution() {
        let err = parse(b"echo $(ls", "", Mode::empty()).unwrap_err();
        assert_eq!(
            err.cause.message(),
            "reached EOF without matching $( with )"
        );
    }

    #[test]
    fn process_substitution_word() {
        let words = first_call_words("cmp <(a) >(b)");
        assert_matches!(&words[1].parts[0], WordPart::ProcSubst(p) => {
            assert_eq!(p.op, crate::parser::lex::Token::LessParen);
            assert_eq!(p.stmts.len(), 1);
        });
        assert_matches!(&words[2].parts[0], WordPart::ProcSubst(p) => {
            assert_eq!(p.op, crate::parser::lex::Token::GreaterParen);
        });
    }

    #[test]
    fn dollar_quotes() {
        let words = first_call_words("echo $'a' $\"b\"");
        assert_matches!(&words[1].parts[0], WordPart::Quoted(q) => {
            assert_eq!(q.quote, crate::parser::lex::Token::DollSglQuote);
        });
        assert_matches!(&words[2].parts[0], WordPart::Quoted(q) => {
            assert_eq!(q.quote, crate::parser::lex::Token::DollDblQuote);
        });
    }

    #[test]
    fn word_spans_cover_source() {
        let words = first_call_words("echo a'b c'$x");
        let w = &words[1];
        assert_eq!(w.pos().offset(), 6);
        assert_eq!(w.end().offset(), 14);
    }
}
