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

//! Syntax parser for the `case` conditional construct
//!
//! Branch bodies are parsed in the `;;` quote context, so their statement
//! lists end at `;;`, `;&`, or `;;&`. A branch may omit its terminator when
//! `esac` closes it directly.

use super::core::Parser;
use super::error::SyntaxError;
use super::lex::{Keyword, QuoteCtx, Token};
use crate::syntax::{CaseClause, Command, PatternList};

impl Parser<'_> {
    /// Parses a `case` clause; the current token is the `case` word.
    pub(crate) fn case_clause(&mut self) -> Command {
        let case_pos = self.pos;
        self.next();
        let word = match self.word() {
            Some(w) => w,
            None => {
                if !self.has_err() {
                    self.follow_err(case_pos, "\"case\"", "a word");
                }
                self.empty_word_at(case_pos)
            }
        };
        self.follow_rsrv(case_pos, "case x", Keyword::In);
        let old = self.quote;
        self.quote = QuoteCtx::CaseBody;
        let mut list = Vec::new();
        let esac_pos = loop {
            if self.has_err() {
                break self.pos;
            }
            if let Some(pos) = self.got_rsrv_pos(Keyword::Esac) {
                break pos;
            }
            if self.tok == Token::Eof {
                self.pos_err(
                    case_pos,
                    SyntaxError::StmtEnd {
                        name: "case",
                        want: Keyword::Esac.as_str(),
                    },
                );
                break self.pos;
            }
            self.got(Token::LeftParen);
            let mut patterns = Vec::new();
            loop {
                match self.word() {
                    Some(w) => patterns.push(w),
                    None => {
                        self.cur_err(SyntaxError::InvalidCasePattern);
                        break;
                    }
                }
                if self.tok == Token::RightParen {
                    break;
                }
                if !self.got(Token::Or) {
                    self.cur_err(SyntaxError::MissingPatternSep);
                    break;
                }
            }
            if self.has_err() {
                break self.pos;
            }
            self.got(Token::RightParen);
            let stmts = self.stmt_list(&[Keyword::Esac]);
            if self.tok.is_case_end() {
                let op = self.tok;
                let op_pos = self.pos;
                if matches!(op, Token::SemiAnd | Token::DblSemiAnd) {
                    self.posix_check(op_pos);
                }
                self.next();
                list.push(PatternList {
                    patterns,
                    op,
                    op_pos,
                    stmts,
                });
            } else {
                // implicitly closed by esac
                let op_pos = self.pos;
                list.push(PatternList {
                    patterns,
                    op: Token::DblSemicolon,
                    op_pos,
                    stmts,
                });
                match self.got_rsrv_pos(Keyword::Esac) {
                    Some(pos) => break pos,
                    None => {
                        self.pos_err(
                            case_pos,
                            SyntaxError::StmtEnd {
                                name: "case",
                                want: Keyword::Esac.as_str(),
                            },
                        );
                        break self.pos;
                    }
                }
            }
        };
        self.quote = old;
        Command::Case(CaseClause {
            case_pos,
            esac_pos,
            word,
            list,
        })
    }
}
