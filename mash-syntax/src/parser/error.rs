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

//! Definition of errors that happen in the parser
//!
//! Only the first error of a parse is ever reported: recording an error
//! clamps the current token to end-of-input so that the outer grammar
//! productions unwind without producing follow-up messages.

use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Types of syntax errors
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("{}", self.message())]
#[non_exhaustive]
pub enum SyntaxError {
    /// A construct is missing its required continuation.
    MustFollow { left: String, right: String },
    /// A quoted string is missing its closing quote.
    UnclosedQuote { at: String, quote: char },
    /// A paired construct is missing its closing token.
    Unmatched {
        at: String,
        left: &'static str,
        right: &'static str,
    },
    /// A compound command is missing its terminating reserved word.
    StmtEnd {
        name: &'static str,
        want: &'static str,
    },
    /// Consecutive statements lack a separator between them.
    MissingSeparator,
    /// An operator appears where a statement was expected.
    OperatorAtStmtStart { op: String },
    /// A `)` appears without an open subshell.
    CloseParenAtStmtStart,
    /// A case terminator appears outside a `case` clause.
    CaseOpOutsideCase { op: String },
    /// A `}` appears without an open block.
    CloseBraceAtStmtStart,
    /// A token that cannot be part of a simple command appears in one.
    InvalidCommandWord,
    /// The word of a non-here-document redirection sits on the next line.
    RedirWordOnNewLine,
    /// The delimiter of a here-document sits on the next line.
    HdocWordOnNewLine,
    /// A command substitution opens inside a here-document delimiter.
    NestedStmts,
    /// An arithmetic `(` encloses nothing.
    EmptyParenExpr,
    /// A token appears where an arithmetic operator was expected.
    InvalidArithmOp { op: String },
    /// An element of an array literal is not a word.
    InvalidArrayElem,
    /// A pattern of a `case` branch is not a word.
    InvalidCasePattern,
    /// Patterns of a `case` branch are not separated by `|`.
    MissingPatternSep,
    /// `${#x}` is combined with another operator.
    LengthOfComplexParam,
    /// A parameter expansion has no parameter.
    MissingParamLit,
    /// A token inside `${…}` is not an expansion operator.
    InvalidExpansionOp { op: String },
    /// A function name is not a valid identifier.
    InvalidFuncName { name: String },
    /// A Bash-only construct appears in POSIX mode.
    BashFeature,
    /// A token remains after the construct being parsed from a string.
    RedundantToken,
}

impl SyntaxError {
    /// Returns an error message describing the error.
    #[must_use]
    pub fn message(&self) -> Cow<'static, str> {
        use SyntaxError::*;
        match self {
            MustFollow { left, right } => format!("{left} must be followed by {right}").into(),
            UnclosedQuote { at, quote } => {
                format!("reached {at} without closing quote {quote}").into()
            }
            Unmatched { at, left, right } => {
                format!("reached {at} without matching {left} with {right}").into()
            }
            StmtEnd { name, want } => format!("{name} statement must end with {want:?}").into(),
            MissingSeparator => "statements must be separated by & ; or a newline".into(),
            OperatorAtStmtStart { op } => {
                format!("{op} can only immediately follow a statement").into()
            }
            CloseParenAtStmtStart => ") can only be used to close a subshell".into(),
            CaseOpOutsideCase { op } => format!("{op} can only be used in a case clause").into(),
            CloseBraceAtStmtStart => "} can only be used to close a block".into(),
            InvalidCommandWord => "a command can only contain words and redirects".into(),
            RedirWordOnNewLine => "redirect word must be on the same line".into(),
            HdocWordOnNewLine => "heredoc stop word must be on the same line".into(),
            NestedStmts => "nested statements not allowed in this word".into(),
            EmptyParenExpr => "parentheses must enclose an expression".into(),
            InvalidArithmOp { op } => format!("not a valid arithmetic operator: {op}").into(),
            InvalidArrayElem => "array elements must be words".into(),
            InvalidCasePattern => "case patterns must consist of words".into(),
            MissingPatternSep => "case patterns must be separated with |".into(),
            LengthOfComplexParam => "can only get length of a simple parameter".into(),
            MissingParamLit => "parameter expansion requires a literal".into(),
            InvalidExpansionOp { op } => {
                format!("not a valid parameter expansion operator: {op}").into()
            }
            InvalidFuncName { name } => format!("invalid func name: {name}").into(),
            BashFeature => "this feature requires bash".into(),
            RedundantToken => "there is a redundant token".into(),
        }
    }
}

/// Explanation of a failure in parsing
///
/// The display form is `filename:line:column: message`, with the filename
/// part omitted when the parsed source has no name.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub struct Error {
    /// Name of the parsed source, may be empty
    pub filename: String,
    /// Line of the error, counted from one
    pub line: usize,
    /// Byte column of the error, counted from one
    pub column: usize,
    pub cause: SyntaxError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.filename.is_empty() {
            write!(f, "{}:", self.filename)?;
        }
        write!(f, "{}:{}: {}", self.line, self.column, self.cause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_for_error() {
        let error = Error {
            filename: "script.sh".to_string(),
            line: 3,
            column: 9,
            cause: SyntaxError::MissingSeparator,
        };
        assert_eq!(
            error.to_string(),
            "script.sh:3:9: statements must be separated by & ; or a newline"
        );
    }

    #[test]
    fn display_for_error_without_filename() {
        let error = Error {
            filename: String::new(),
            line: 1,
            column: 4,
            cause: SyntaxError::OperatorAtStmtStart {
                op: ";".to_string(),
            },
        };
        assert_eq!(error.to_string(), "1:4: ; can only immediately follow a statement");
    }

    #[test]
    fn message_for_unclosed_quote() {
        let cause = SyntaxError::UnclosedQuote {
            at: "EOF".to_string(),
            quote: '"',
        };
        assert_eq!(cause.message(), "reached EOF without closing quote \"");
    }

    #[test]
    fn message_for_stmt_end() {
        let cause = SyntaxError::StmtEnd {
            name: "if",
            want: "fi",
        };
        assert_eq!(cause.message(), "if statement must end with \"fi\"");
    }
}
