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

//! Lexical analysis
//!
//! The lexer is the byte-level half of the parser state: a pure function of
//! the source bytes, the cursor, the [quote context](QuoteCtx), and the
//! `stop_newline`/`forbid_nested` flags. Each call to `next` skips
//! skippable whitespace (updating the `spaced` and `newline` signals and the
//! line-start registry) and produces one token: its kind, its literal value
//! for literal kinds, and its byte position.
//!
//! The grammar writes the quote context before requesting a token and
//! restores it afterwards, including on error paths. When `stop_newline` is
//! set (while here-documents are pending or a here-document delimiter is
//! being read), a newline produces the synthetic [`Stopped`](Token::Stopped)
//! token instead of being skipped, leaving the newline itself unconsumed.

mod core;
mod heredoc;
mod keyword;
mod token;
mod word;

pub use self::keyword::{Keyword, ParseKeywordError};
pub use self::token::Token;

pub(crate) use self::core::QuoteCtx;
