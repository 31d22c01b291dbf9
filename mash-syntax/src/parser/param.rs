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

//! Syntax parser for braced parameter expansions
//!
//! The grammar after `${` is: an optional `#` for length, the parameter
//! literal, an optional `[word]` subscript, and then either the closing
//! brace, a `/`-replacement, or an expansion operator with its word. The
//! parameter itself is read from raw bytes; everything after it goes through
//! the lexer under the parameter contexts.

use super::core::Parser;
use super::error::SyntaxError;
use super::lex::{QuoteCtx, Token};
use crate::syntax::{Expansion, ParamExp, Replace, Word, WordPart};

impl Parser<'_> {
    /// Parses a `${…}` expansion; the current token is `${`.
    pub(crate) fn param_exp(&mut self) -> Option<WordPart> {
        let dollar = self.pos;
        let mut length = false;
        // `#` means length unless it closes right away, as in `${#}`
        if self.cur() == Some(b'#') && self.byte_at(self.npos + 1) != Some(b'}') {
            self.npos += 1;
            length = true;
        }
        let Some(param) = self.param_lit(true) else {
            self.pos_err(dollar, SyntaxError::MissingParamLit);
            return None;
        };
        let mut pe = ParamExp {
            dollar,
            short: false,
            length,
            param,
            index: None,
            repl: None,
            exp: None,
            rbrace: None,
        };
        let old = self.quote;
        self.quote = QuoteCtx::ParamName;
        self.next();

        if self.tok == Token::LeftBrack {
            let lbrack = self.pos;
            self.quote = QuoteCtx::ParamInd;
            self.next();
            match self.word() {
                Some(w) => pe.index = Some(w),
                None => {
                    self.quote = old;
                    self.follow_err(lbrack, "[", "a word");
                    return Some(WordPart::ParamExp(pe));
                }
            }
            self.quote = QuoteCtx::ParamName;
            if !self.got(Token::RightBrack) {
                self.quote = old;
                self.matching_err(lbrack, "[", "]");
                return Some(WordPart::ParamExp(pe));
            }
        }

        if self.tok == Token::RightBrace {
            pe.rbrace = Some(self.pos);
            self.quote = old;
            self.next();
            return Some(WordPart::ParamExp(pe));
        }

        if pe.length {
            self.quote = old;
            self.pos_err(dollar, SyntaxError::LengthOfComplexParam);
            return Some(WordPart::ParamExp(pe));
        }

        match self.tok {
            Token::Slash | Token::SlashSlash => {
                let all = self.tok == Token::SlashSlash;
                self.quote = QuoteCtx::ParamRepl;
                self.next();
                let orig = self.word().unwrap_or(Word { parts: vec![] });
                let with = if self.tok == Token::Slash {
                    self.quote = QuoteCtx::ParamExpWord;
                    self.next();
                    self.word().unwrap_or(Word { parts: vec![] })
                } else {
                    Word { parts: vec![] }
                };
                pe.repl = Some(Box::new(Replace { all, orig, with }));
            }
            tok if tok.is_expansion_op() => {
                let op = tok;
                self.quote = QuoteCtx::ParamExpWord;
                self.next();
                let word = self.word().unwrap_or(Word { parts: vec![] });
                pe.exp = Some(Box::new(Expansion { op, word }));
            }
            Token::Eof => {
                self.quote = old;
                self.matching_err(dollar, "${", "}");
                return Some(WordPart::ParamExp(pe));
            }
            _ => {
                let op = self.tok_str();
                self.quote = old;
                self.cur_err(SyntaxError::InvalidExpansionOp { op });
                return Some(WordPart::ParamExp(pe));
            }
        }

        self.quote = old;
        if self.tok == Token::RightBrace {
            pe.rbrace = Some(self.pos);
            self.next();
        } else {
            self.matching_err(dollar, "${", "}");
        }
        Some(WordPart::ParamExp(pe))
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::lex::Token;
    use crate::parser::{Mode, parse};
    use crate::syntax::{Command, ParamExp, WordPart};
    use assert_matches::assert_matches;

    fn param(src: &str) -> ParamExp {
        let file = parse(src.as_bytes(), "", Mode::empty()).unwrap();
        let cmd = file.stmts.into_iter().next().unwrap().cmd.unwrap();
        let words = assert_matches!(cmd, Command::Call(c) => c.args);
        assert_matches!(words.into_iter().nth(1).unwrap().parts.into_iter().next().unwrap(),
            WordPart::ParamExp(pe) => pe)
    }

    #[test]
    fn plain_braced_param() {
        let pe = param("echo ${x}");
        assert!(!pe.short);
        assert!(!pe.length);
        assert_eq!(pe.param.value, "x");
        assert_eq!(pe.rbrace.unwrap().offset(), 9);
    }

    #[test]
    fn length_param() {
        let pe = param("echo ${#name}");
        assert!(pe.length);
        assert_eq!(pe.param.value, "name");
    }

    #[test]
    fn hash_param_is_not_length() {
        let pe = param("echo ${#}");
        assert!(!pe.length);
        assert_eq!(pe.param.value, "#");
    }

    #[test]
    fn expansion_operators() {
        for (src, op, word) in [
            ("echo ${x:-def}", Token::ColonMinus, "def"),
            ("echo ${x:=def}", Token::ColonEqual, "def"),
            ("echo ${x:?msg}", Token::ColonQuest, "msg"),
            ("echo ${x:+alt}", Token::ColonPlus, "alt"),
            ("echo ${x-def}", Token::Minus, "def"),
            ("echo ${x#pre}", Token::Hash, "pre"),
            ("echo ${x##pre}", Token::HashHash, "pre"),
            ("echo ${x%suf}", Token::Percent, "suf"),
            ("echo ${x%%suf}", Token::PercentPercent, "suf"),
        ] {
            let pe = param(src);
            let exp = pe.exp.expect(src);
            assert_eq!(exp.op, op, "{src}");
            assert_eq!(exp.word.lit(), Some(word), "{src}");
        }
    }

    #[test]
    fn expansion_word_may_contain_spaces() {
        let pe = param("echo ${x:-a b}");
        assert_eq!(pe.exp.unwrap().word.lit(), Some("a b"));
    }

    #[test]
    fn replace_forms() {
        let pe = param("echo ${x/a/b}");
        let repl = pe.repl.unwrap();
        assert!(!repl.all);
        assert_eq!(repl.orig.lit(), Some("a"));
        assert_eq!(repl.with.lit(), Some("b"));

        let pe = param("echo ${x//a/b}");
        assert!(pe.repl.unwrap().all);

        let pe = param("echo ${x/a}");
        let repl = pe.repl.unwrap();
        assert_eq!(repl.orig.lit(), Some("a"));
        assert!(repl.with.parts.is_empty());
    }

    #[test]
    fn index_param() {
        let pe = param("echo ${a[1]}");
        assert_eq!(pe.param.value, "a");
        assert_eq!(pe.index.unwrap().lit(), Some("1"));
    }

    #[test]
    fn index_with_expansion() {
        let pe = param("echo ${a[i]:-x}");
        assert!(pe.index.is_some());
        assert_eq!(pe.exp.unwrap().op, Token::ColonMinus);
    }

    #[test]
    fn braced_positional_takes_all_digits() {
        let pe = param("echo ${10}");
        assert_eq!(pe.param.value, "10");
    }

    #[test]
    fn missing_param_literal() {
        let err = parse(b"echo ${}", "", Mode::empty()).unwrap_err();
        assert_eq!(err.cause.message(), "parameter expansion requires a literal");
        assert_eq!((err.line, err.column), (1, 6));
    }

    #[test]
    fn length_rejects_operators() {
        let err = parse(b"echo ${#x:-y}", "", Mode::empty()).unwrap_err();
        assert_eq!(
            err.cause.message(),
            "can only get length of a simple parameter"
        );
    }

    #[test]
    fn unclosed_param() {
        let err = parse(b"echo ${x", "", Mode::empty()).unwrap_err();
        assert_eq!(err.cause.message(), "reached EOF without matching ${ with }");
    }

    #[test]
    fn nested_expansion_in_word() {
        let pe = param("echo ${x:-$y}");
        let exp = pe.exp.unwrap();
        assert_matches!(&exp.word.parts[0], WordPart::ParamExp(inner) => {
            assert!(inner.short);
            assert_eq!(inner.param.value, "y");
        });
    }
}
