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

//! Shell language syntax and parser.
//!
//! This crate parses POSIX and Bash shell scripts into abstract syntax
//! trees. The [`syntax`] module defines the tree types; every node carries
//! 1-based byte positions that a [`File`](source::File) translates into
//! lines and columns on demand. See the [`source`] module for how positions
//! are coded.
//!
//! To parse a whole script, call [`parser::parse`] with the source bytes, a
//! display name, and a [`parser::Mode`]:
//!
//! ```
//! use mash_syntax::parser::{parse, Mode};
//! use mash_syntax::syntax::Command;
//!
//! let file = parse(b"echo hello | wc -c", "demo.sh", Mode::empty()).unwrap();
//! assert_eq!(file.stmts.len(), 1);
//! assert!(matches!(
//!     file.stmts[0].cmd,
//!     Some(Command::Binary(_))
//! ));
//! ```
//!
//! Small fragments can also be parsed through `FromStr`, e.g.
//! `"$HOME/bin".parse::<mash_syntax::syntax::Word>()`.

pub mod parser;
pub mod source;
pub mod syntax;
