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

//! Implementation of [`FromStr`] for parsing a fragment of source code

use super::core::Parser;
use super::error::{Error, SyntaxError};
use super::lex::Token;
use super::Mode;
use crate::syntax::Word;
use std::str::FromStr;

/// Converts a string to a word.
///
/// The string must contain exactly one word; anything left over is a
/// [`SyntaxError::RedundantToken`] error.
impl FromStr for Word {
    type Err = Error;
    fn from_str(s: &str) -> Result<Word, Error> {
        let mut parser = Parser::new(s.as_bytes(), "", Mode::empty(), Vec::new());
        parser.next();
        let word = parser.word();
        if let Some(err) = parser.take_err() {
            return Err(err);
        }
        match word {
            Some(word) if parser.tok == Token::Eof => Ok(word),
            _ => Err(Error {
                filename: String::new(),
                line: 1,
                column: 1,
                cause: SyntaxError::RedundantToken,
            }),
        }
    }
}
