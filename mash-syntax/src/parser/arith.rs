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

//! Syntax parser for arithmetic expressions
//!
//! A precedence-climbing parser over the arithmetic token set. Assignments,
//! the ternary pair `?`/`:`, and `**` associate to the right, everything
//! else to the left; `a ? b : c` is encoded as a `?` operation whose right
//! operand is a `:` operation.
//!
//! In compact mode, used for `let` operands, whitespace terminates the
//! expression: the climb stops as soon as the lexer reports a blank before
//! the current token.
//!
//! The closing `))` of `$((…))` and `((…))` is never produced as one token;
//! it is detected from a `)` token whose next raw byte is another `)`, and
//! consumed by advancing the cursor once past the first.

use super::core::Parser;
use super::error::SyntaxError;
use super::lex::{QuoteCtx, Token};
use crate::source::Pos;
use crate::syntax::{ArithmExp, ArithmExpr, BinaryArithm, ParenArithm, UnaryArithm, WordPart};

/// Binding level and right-associativity of a binary operator.
const fn bin_prec(tok: Token) -> Option<(u8, bool)> {
    use Token::*;
    Some(match tok {
        Comma => (0, false),
        PlusEqual | MinusEqual | StarEqual | SlashEqual | PercentEqual | AndEqual | OrEqual
        | CaretEqual | LessLessEqual | GreaterGreaterEqual => (1, true),
        Equal => (2, true),
        Quest | Colon => (3, true),
        OrOr => (4, false),
        AndAnd | And | Or | Caret => (5, false),
        EqualEqual | BangEqual => (6, false),
        Less | Greater | LessEqual | GreaterEqual => (7, false),
        LessLess | GreaterGreater => (8, false),
        Plus | Minus => (9, false),
        Star | Slash | Percent => (10, false),
        StarStar => (11, true),
        _ => return None,
    })
}

impl Parser<'_> {
    /// Parses a `$((…))` arithmetic expansion; the current token is `$((`.
    pub(crate) fn arithm_exp(&mut self) -> Option<WordPart> {
        let left = self.pos;
        let old = self.quote;
        self.quote = QuoteCtx::Arithm;
        self.next();
        let Some(x) = self.arithm_expr(0, false) else {
            self.quote = old;
            if !self.has_err() {
                self.follow_err(left, "$((", "an expression");
            }
            return None;
        };
        let right = self.close_dbl_paren(left, "$((");
        self.quote = old;
        self.next();
        Some(WordPart::ArithmExp(ArithmExp { left, right, x }))
    }

    /// Consumes the closing `))` of an arithmetic context, returning the
    /// position of its first byte.
    pub(crate) fn close_dbl_paren(&mut self, open: Pos, left: &'static str) -> Pos {
        if self.tok == Token::RightParen && self.cur() == Some(b')') {
            let right = self.pos;
            self.npos += 1;
            right
        } else {
            if !self.has_err() {
                if matches!(self.tok, Token::RightParen | Token::Eof) {
                    self.matching_err(open, left, "))");
                } else {
                    let op = self.tok_str();
                    self.cur_err(SyntaxError::InvalidArithmOp { op });
                }
            }
            self.pos
        }
    }

    /// Parses an expression with operators binding at least as tightly as
    /// `min_lvl`.
    pub(crate) fn arithm_expr(&mut self, min_lvl: u8, compact: bool) -> Option<ArithmExpr> {
        let mut x = self.arithm_expr_base(compact)?;
        loop {
            if compact && self.spaced {
                break;
            }
            let Some((lvl, right_assoc)) = bin_prec(self.tok) else {
                break;
            };
            if lvl < min_lvl {
                break;
            }
            let op = self.tok;
            let op_pos = self.pos;
            self.next();
            let next_min = if right_assoc { lvl } else { lvl + 1 };
            match self.arithm_expr(next_min, compact) {
                Some(y) => {
                    x = ArithmExpr::Binary(Box::new(BinaryArithm { op, op_pos, x, y }));
                }
                None => {
                    if !self.has_err() {
                        self.follow_err(op_pos, op.as_str(), "an expression");
                    }
                    break;
                }
            }
        }
        Some(x)
    }

    /// Parses one operand: a parenthesized expression, a unary operation, or
    /// a word, with optional postfix `++`/`--`.
    fn arithm_expr_base(&mut self, compact: bool) -> Option<ArithmExpr> {
        let mut x = match self.tok {
            Token::LeftParen => {
                let lparen = self.pos;
                self.next();
                let Some(inner) = self.arithm_expr(0, compact) else {
                    if !self.has_err() {
                        self.pos_err(lparen, SyntaxError::EmptyParenExpr);
                    }
                    return None;
                };
                let rparen = self.pos;
                if !self.got(Token::RightParen) {
                    self.matching_err(lparen, "(", ")");
                }
                ArithmExpr::Paren(Box::new(ParenArithm { lparen, rparen, x: inner }))
            }
            Token::PlusPlus | Token::MinusMinus | Token::Bang | Token::Plus | Token::Minus => {
                let op = self.tok;
                let op_pos = self.pos;
                self.next();
                match self.arithm_expr_base(compact) {
                    Some(inner) => ArithmExpr::Unary(Box::new(UnaryArithm {
                        op,
                        op_pos,
                        post: false,
                        x: inner,
                    })),
                    None => {
                        if !self.has_err() {
                            self.follow_err(op_pos, op.as_str(), "an expression");
                        }
                        return None;
                    }
                }
            }
            _ => ArithmExpr::Word(self.word()?),
        };
        if !(compact && self.spaced) && matches!(self.tok, Token::PlusPlus | Token::MinusMinus) {
            x = ArithmExpr::Unary(Box::new(UnaryArithm {
                op: self.tok,
                op_pos: self.pos,
                post: true,
                x,
            }));
            self.next();
        }
        Some(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{Mode, parse};
    use crate::syntax::{Command, Node, Word};
    use assert_matches::assert_matches;

    fn arithm_word(src: &str) -> (Word, usize) {
        let file = parse(src.as_bytes(), "", Mode::empty()).unwrap();
        let cmd = file.stmts.into_iter().next().unwrap().cmd.unwrap();
        let args = assert_matches!(cmd, Command::Call(c) => c.args);
        let n = args.len();
        (args.into_iter().next().unwrap(), n)
    }

    fn arithm_expr(src: &str) -> ArithmExpr {
        let (word, _) = arithm_word(src);
        assert_matches!(word.parts.into_iter().next().unwrap(),
            WordPart::ArithmExp(a) => a.x)
    }

    fn lit_of(x: &ArithmExpr) -> &str {
        assert_matches!(x, ArithmExpr::Word(w) => w.lit().unwrap())
    }

    #[test]
    fn precedence_of_sum_and_product() {
        let x = arithm_expr("$(( 1 + 2 * 3 ))");
        let add = assert_matches!(x, ArithmExpr::Binary(b) => *b);
        assert_eq!(add.op, Token::Plus);
        assert_eq!(lit_of(&add.x), "1");
        let mul = assert_matches!(add.y, ArithmExpr::Binary(b) => *b);
        assert_eq!(mul.op, Token::Star);
        assert_eq!(lit_of(&mul.x), "2");
        assert_eq!(lit_of(&mul.y), "3");
    }

    #[test]
    fn left_associative_subtraction() {
        let x = arithm_expr("$((4 - 2 - 1))");
        let outer = assert_matches!(x, ArithmExpr::Binary(b) => *b);
        assert_eq!(outer.op, Token::Minus);
        assert_eq!(lit_of(&outer.y), "1");
        let inner = assert_matches!(outer.x, ArithmExpr::Binary(b) => *b);
        assert_eq!(lit_of(&inner.x), "4");
        assert_eq!(lit_of(&inner.y), "2");
    }

    #[test]
    fn right_associative_assignment() {
        let x = arithm_expr("$((a = b = 1))");
        let outer = assert_matches!(x, ArithmExpr::Binary(b) => *b);
        assert_eq!(outer.op, Token::Equal);
        assert_eq!(lit_of(&outer.x), "a");
        let inner = assert_matches!(outer.y, ArithmExpr::Binary(b) => *b);
        assert_eq!(inner.op, Token::Equal);
    }

    #[test]
    fn ternary_encoding() {
        let x = arithm_expr("$((a ? b : c))");
        let quest = assert_matches!(x, ArithmExpr::Binary(b) => *b);
        assert_eq!(quest.op, Token::Quest);
        let colon = assert_matches!(quest.y, ArithmExpr::Binary(b) => *b);
        assert_eq!(colon.op, Token::Colon);
        assert_eq!(lit_of(&colon.x), "b");
        assert_eq!(lit_of(&colon.y), "c");
    }

    #[test]
    fn unary_and_postfix() {
        let x = arithm_expr("$((!x))");
        assert_matches!(x, ArithmExpr::Unary(u) => {
            assert_eq!(u.op, Token::Bang);
            assert!(!u.post);
        });

        let x = arithm_expr("$((x++))");
        assert_matches!(x, ArithmExpr::Unary(u) => {
            assert_eq!(u.op, Token::PlusPlus);
            assert!(u.post);
        });
    }

    #[test]
    fn parens_bind_tightest() {
        let x = arithm_expr("$(( (1 + 2) * 3 ))");
        let mul = assert_matches!(x, ArithmExpr::Binary(b) => *b);
        assert_eq!(mul.op, Token::Star);
        assert_matches!(mul.x, ArithmExpr::Paren(_));
    }

    #[test]
    fn parameter_operand() {
        let x = arithm_expr("$((x + 1))");
        let add = assert_matches!(x, ArithmExpr::Binary(b) => *b);
        assert_matches!(add.x, ArithmExpr::Word(w) => {
            assert_eq!(w.lit(), Some("x"));
        });
    }

    #[test]
    fn shift_and_comparison_levels() {
        // 1 << 2 < 3 parses as (1 << 2) < 3
        let x = arithm_expr("$((1 << 2 < 3))");
        let cmp = assert_matches!(x, ArithmExpr::Binary(b) => *b);
        assert_eq!(cmp.op, Token::Less);
        let shl = assert_matches!(cmp.x, ArithmExpr::Binary(b) => *b);
        assert_eq!(shl.op, Token::LessLess);
    }

    #[test]
    fn empty_parens_error() {
        let err = parse(b"echo $(( () ))", "", Mode::empty()).unwrap_err();
        assert_eq!(err.cause.message(), "parentheses must enclose an expression");
    }

    #[test]
    fn operator_without_operand() {
        let err = parse(b"echo $((1 +))", "", Mode::empty()).unwrap_err();
        assert_eq!(err.cause.message(), "+ must be followed by an expression");
    }

    #[test]
    fn stray_token_in_arithm() {
        let err = parse(b"echo $((1 @ 2))", "", Mode::empty()).unwrap_err();
        assert_eq!(err.cause.message(), "not a valid arithmetic operator: @");
    }

    #[test]
    fn unclosed_arithm() {
        let err = parse(b"echo $((1 + 2", "", Mode::empty()).unwrap_err();
        assert_eq!(err.cause.message(), "reached EOF without matching $(( with ))");
    }

    #[test]
    fn arithm_exp_span() {
        let (word, _) = arithm_word("$(( 1 + 2 * 3 ))");
        let part = &word.parts[0];
        assert_eq!(part.pos().offset(), 1);
        assert_eq!(part.end().offset(), 17);
    }
}
