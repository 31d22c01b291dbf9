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

//! Syntax parser for the shell language
//!
//! The entry point is [`parse`]: it consumes a complete byte buffer and
//! produces a [`File`] with the program's syntax tree, or the first
//! [`Error`] with its line and column. Parsing is strictly synchronous and
//! single-pass, except that here-document bodies are read once the logical
//! line carrying their operators is complete.
//!
//! [`parse_with_scratch`] is the pooling variant: the caller keeps a scratch
//! buffer (used to derive here-document stop bytes) alive across parses so
//! its capacity can be reused. No other state survives a parse.

mod core;
mod error;

mod arith;
mod case;
mod command;
mod decl;
mod for_loop;
mod from_str;
mod function;
mod grouping;
mod if_clause;
mod list;
mod param;
mod pipeline;
mod redir;
mod simple_command;
mod while_loop;
mod word;

pub mod lex;

pub use self::core::Mode;
pub use self::error::{Error, SyntaxError};

use crate::source::File;

/// Parses a whole source buffer into a [`File`].
///
/// `name` is used for error display only and may be empty. On failure, only
/// the first error is reported; the partially built tree is discarded.
pub fn parse(src: &[u8], name: &str, mode: Mode) -> Result<File, Error> {
    let mut scratch = Vec::new();
    parse_with_scratch(src, name, mode, &mut scratch)
}

/// Parses like [`parse`], reusing a caller-provided scratch buffer.
///
/// The buffer is cleared, not freed, so a pool of buffers amortizes the
/// here-document bookkeeping across many parses.
pub fn parse_with_scratch(
    src: &[u8],
    name: &str,
    mode: Mode,
    scratch: &mut Vec<u8>,
) -> Result<File, Error> {
    let mut parser = core::Parser::new(src, name, mode, std::mem::take(scratch));
    let result = parser.run();
    *scratch = parser.into_scratch();
    result
}
