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

//! Source positions and parsed files
//!
//! Every node in a syntax tree carries one or more [`Pos`] values, 1-based
//! byte offsets into the source buffer the tree was parsed from. A `Pos` is
//! deliberately just an offset: nodes stay small, and no part of the tree
//! borrows from the source buffer, so the buffer may be dropped as soon as
//! parsing finishes.
//!
//! A [`File`] owns the statements parsed from one buffer together with a
//! registry of line-start offsets. The registry turns any `Pos` back into a
//! human-readable line and column via [`File::position`].

use crate::syntax::{Comment, Stmt};

/// Position of a byte in the parsed source, counted from one.
///
/// A position is valid within `1..=len + 1`, where `len` is the length of the
/// source buffer; `len + 1` denotes the end of input.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Pos(u32);

impl Pos {
    /// Converts a 0-based byte index into a position.
    pub(crate) fn at(index: usize) -> Pos {
        Pos(index as u32 + 1)
    }

    /// Returns the 1-based byte offset of this position.
    #[must_use]
    pub fn offset(self) -> usize {
        self.0 as usize
    }

    /// Returns the position `n` bytes after this one.
    pub(crate) fn advance(self, n: usize) -> Pos {
        Pos(self.0 + n as u32)
    }
}

/// Line and column of a [`Pos`], both counted from one.
///
/// Columns count bytes, not display cells or characters.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// Translates a position using a registry of 1-based line-start offsets.
///
/// The registry must be non-empty, strictly increasing, and start with 1.
pub(crate) fn lookup_position(lines: &[u32], pos: Pos) -> Position {
    let line = lines.partition_point(|&start| start <= pos.0);
    // partition_point is at least 1 because lines[0] == 1 <= pos
    let column = pos.0 as usize - lines[line - 1] as usize + 1;
    Position { line, column }
}

/// Result of parsing a whole source buffer
///
/// A file owns its syntax tree. The source buffer itself is not retained;
/// positions in the tree are resolved against the line registry recorded
/// while parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct File {
    /// Display name of the parsed source, may be empty
    pub name: String,
    /// Top-level statements in source order
    pub stmts: Vec<Stmt>,
    /// Comments in source order, collected only under
    /// [`Mode::PARSE_COMMENTS`](crate::parser::Mode::PARSE_COMMENTS)
    pub comments: Vec<Comment>,
    /// 1-based byte offsets of line starts, strictly increasing, first is 1
    pub(crate) lines: Vec<u32>,
}

impl File {
    /// Translates a position in this file into a line and column.
    #[must_use]
    pub fn position(&self, pos: Pos) -> Position {
        lookup_position(&self.lines, pos)
    }
}
