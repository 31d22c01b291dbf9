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

//! Shell command language syntax
//!
//! This module contains the types that represent abstract syntax trees of the
//! shell language.
//!
//! ## Syntactic elements
//!
//! A parsed source buffer is a [`File`](crate::source::File) holding a list of
//! [`Stmt`]s. A statement wraps one [`Command`] together with its negation,
//! assignments, redirections, and background flag. `Command` is a closed sum:
//! a simple command ([`CallExpr`]), the compound commands (subshell, block,
//! `if`, `while`, `until`, `for`, `case`), the declaration-style clauses
//! (`declare`/`local`, `eval`, `let`), function definitions, and binary
//! compositions with `&&`, `||`, `|`, and `|&`.
//!
//! ## Lexical elements
//!
//! The atoms of commands are [`Word`]s: tight concatenations of
//! [`WordPart`]s, where a part is a literal, a quoted string, or one of the
//! expansions. Arithmetic expressions form their own little sum,
//! [`ArithmExpr`].
//!
//! ## Positions
//!
//! Every node exposes its byte span through the [`Node`] trait. Spans are
//! [`Pos`] values resolved against the owning file's line registry; the
//! source buffer itself is never borrowed.

use crate::parser::lex::Token;
use crate::source::Pos;
use std::cell::OnceCell;
use std::rc::Rc;

/// Syntax tree node with a byte span
///
/// For every node, `pos() <= end()`, and both are valid positions in the
/// parsed source. `pos` is the offset of the node's first byte; `end` is one
/// past its last byte.
pub trait Node {
    /// Returns the position of the first byte of this node.
    fn pos(&self) -> Pos;
    /// Returns the position just after the last byte of this node.
    fn end(&self) -> Pos;
}

/// Literal string fragment
///
/// The value is the source text of the fragment with line continuations
/// removed; backslash escapes are kept as written.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Lit {
    pub value_pos: Pos,
    pub value_end: Pos,
    pub value: String,
}

impl Node for Lit {
    fn pos(&self) -> Pos {
        self.value_pos
    }
    fn end(&self) -> Pos {
        self.value_end
    }
}

/// String surrounded by single quotes
///
/// The value is the raw text between the quotes; nothing is special inside
/// single quotes, not even backslashes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SglQuoted {
    /// Position of the opening quote
    pub quote: Pos,
    pub value: String,
}

impl Node for SglQuoted {
    fn pos(&self) -> Pos {
        self.quote
    }
    fn end(&self) -> Pos {
        self.quote.advance(self.value.len() + 2)
    }
}

/// Quoted string that may contain expansions
///
/// Covers `"…"`, `$"…"`, and `$'…'`; the `quote` token tells them apart.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Quoted {
    /// Position of the opening quote token
    pub quote_pos: Pos,
    /// [`DblQuote`](Token::DblQuote), [`DollSglQuote`](Token::DollSglQuote),
    /// or [`DollDblQuote`](Token::DollDblQuote)
    pub quote: Token,
    pub parts: Vec<WordPart>,
}

impl Quoted {
    fn open_len(&self) -> usize {
        match self.quote {
            Token::DollSglQuote | Token::DollDblQuote => 2,
            _ => 1,
        }
    }
}

impl Node for Quoted {
    fn pos(&self) -> Pos {
        self.quote_pos
    }
    fn end(&self) -> Pos {
        match self.parts.last() {
            Some(last) => last.end().advance(1),
            None => self.quote_pos.advance(self.open_len() + 1),
        }
    }
}

/// Parameter expansion, `$x` or `${…}`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParamExp {
    /// Position of the `$`
    pub dollar: Pos,
    /// True for the brace-less form `$x`
    pub short: bool,
    /// True for `${#x}`
    pub length: bool,
    /// Parameter name, or one of the special parameters
    pub param: Lit,
    /// Subscript word of `${x[…]}`
    pub index: Option<Word>,
    /// `${x/orig/with}` replacement
    pub repl: Option<Box<Replace>>,
    /// Suffix operator and word, e.g. `${x:-word}`
    pub exp: Option<Box<Expansion>>,
    /// Position of the closing brace; `None` in the short form
    pub rbrace: Option<Pos>,
}

impl Node for ParamExp {
    fn pos(&self) -> Pos {
        self.dollar
    }
    fn end(&self) -> Pos {
        match self.rbrace {
            Some(rbrace) => rbrace.advance(1),
            None => self.param.end(),
        }
    }
}

/// Pattern replacement inside a parameter expansion
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Replace {
    /// True for `//` (replace all occurrences)
    pub all: bool,
    pub orig: Word,
    pub with: Word,
}

/// Suffix operator of a parameter expansion
///
/// The operator is one of `:-`, `-`, `:=`, `=`, `:?`, `?`, `:+`, `+`, `#`,
/// `##`, `%`, and `%%`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Expansion {
    pub op: Token,
    pub word: Word,
}

/// Command substitution, `$(…)` or `` `…` ``
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CmdSubst {
    /// Position of the `$(` or the opening backquote
    pub left: Pos,
    /// Position of the `)` or the closing backquote
    pub right: Pos,
    pub backquotes: bool,
    pub stmts: Vec<Stmt>,
}

impl Node for CmdSubst {
    fn pos(&self) -> Pos {
        self.left
    }
    fn end(&self) -> Pos {
        self.right.advance(1)
    }
}

/// Arithmetic expansion, `$((…))`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ArithmExp {
    /// Position of the `$((`
    pub left: Pos,
    /// Position of the first byte of the closing `))`
    pub right: Pos,
    pub x: ArithmExpr,
}

impl Node for ArithmExp {
    fn pos(&self) -> Pos {
        self.left
    }
    fn end(&self) -> Pos {
        self.right.advance(2)
    }
}

/// Process substitution, `<(…)` or `>(…)`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProcSubst {
    pub op_pos: Pos,
    /// [`LessParen`](Token::LessParen) or [`GreaterParen`](Token::GreaterParen)
    pub op: Token,
    pub rparen: Pos,
    pub stmts: Vec<Stmt>,
}

impl Node for ProcSubst {
    fn pos(&self) -> Pos {
        self.op_pos
    }
    fn end(&self) -> Pos {
        self.rparen.advance(1)
    }
}

/// Element of a [`Word`]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum WordPart {
    Lit(Lit),
    SglQuoted(SglQuoted),
    Quoted(Quoted),
    ParamExp(ParamExp),
    CmdSubst(CmdSubst),
    ArithmExp(ArithmExp),
    ProcSubst(ProcSubst),
}

impl Node for WordPart {
    fn pos(&self) -> Pos {
        match self {
            WordPart::Lit(x) => x.pos(),
            WordPart::SglQuoted(x) => x.pos(),
            WordPart::Quoted(x) => x.pos(),
            WordPart::ParamExp(x) => x.pos(),
            WordPart::CmdSubst(x) => x.pos(),
            WordPart::ArithmExp(x) => x.pos(),
            WordPart::ProcSubst(x) => x.pos(),
        }
    }
    fn end(&self) -> Pos {
        match self {
            WordPart::Lit(x) => x.end(),
            WordPart::SglQuoted(x) => x.end(),
            WordPart::Quoted(x) => x.end(),
            WordPart::ParamExp(x) => x.end(),
            WordPart::CmdSubst(x) => x.end(),
            WordPart::ArithmExp(x) => x.end(),
            WordPart::ProcSubst(x) => x.end(),
        }
    }
}

/// Token that may involve quotes and expansions
///
/// A word is a sequence of parts with no whitespace between them. Words are
/// non-empty everywhere except where the grammar allows an empty value: a
/// here-document body, the halves of a `${x/orig/with}` replacement, and the
/// word of an expansion operator as in `${x:-}`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Word {
    pub parts: Vec<WordPart>,
}

impl Word {
    /// Returns the literal string value if the word is a single unquoted
    /// literal, or `None` otherwise.
    #[must_use]
    pub fn lit(&self) -> Option<&str> {
        match self.parts.as_slice() {
            [WordPart::Lit(l)] => Some(&l.value),
            _ => None,
        }
    }
}

impl Node for Word {
    fn pos(&self) -> Pos {
        self.parts.first().expect("word has no parts").pos()
    }
    fn end(&self) -> Pos {
        self.parts.last().expect("word has no parts").end()
    }
}

/// Value of an [`Assign`]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    /// Scalar value, a possibly empty word
    Scalar(Word),
    /// Array literal, `(word…)`
    Array(ArrayExpr),
}

/// Assignment word, `name=value` or `name+=value`
///
/// A bare word argument of a declaration clause is stored as an `Assign`
/// without a name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Assign {
    pub name: Option<Lit>,
    /// True for `+=`
    pub append: bool,
    pub value: Option<Value>,
}

impl Node for Assign {
    fn pos(&self) -> Pos {
        match &self.name {
            Some(name) => name.pos(),
            None => match self.value.as_ref().expect("assign without name or value") {
                Value::Scalar(w) => w.pos(),
                Value::Array(a) => a.pos(),
            },
        }
    }
    fn end(&self) -> Pos {
        match &self.value {
            Some(Value::Scalar(w)) => w.end(),
            Some(Value::Array(a)) => a.end(),
            None => self.name.as_ref().expect("assign without name or value").end(),
        }
    }
}

/// Array literal in an assignment value
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ArrayExpr {
    pub lparen: Pos,
    pub rparen: Pos,
    pub list: Vec<Word>,
}

impl Node for ArrayExpr {
    fn pos(&self) -> Pos {
        self.lparen
    }
    fn end(&self) -> Pos {
        self.rparen.advance(1)
    }
}

/// Here-document body
///
/// The body is wrapped in a `OnceCell` because it is parsed after the
/// logical line containing the operator is complete. The parser fills the
/// cell before returning, so accessors may safely unwrap it on a
/// successfully parsed tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HereDoc {
    /// Body word; empty when the delimiter follows the operator line
    /// immediately
    pub content: OnceCell<Word>,
}

/// Redirection
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Redirect {
    /// File descriptor literal preceding the operator, as in `2>err`
    pub n: Option<Lit>,
    pub op: Token,
    pub op_pos: Pos,
    /// Target word; for here-documents, the delimiter word
    pub word: Word,
    /// Body of a `<<` or `<<-` redirection
    pub hdoc: Option<Rc<HereDoc>>,
}

impl Node for Redirect {
    fn pos(&self) -> Pos {
        match &self.n {
            Some(n) => n.pos(),
            None => self.op_pos,
        }
    }
    fn end(&self) -> Pos {
        self.word.end()
    }
}

/// Statement: a command with its modifiers
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Stmt {
    pub position: Pos,
    /// True when the statement is prefixed by `!`
    pub negated: bool,
    /// True when the statement is terminated by `&`
    pub background: bool,
    pub assigns: Vec<Assign>,
    pub redirs: Vec<Redirect>,
    pub cmd: Option<Command>,
}

impl Node for Stmt {
    fn pos(&self) -> Pos {
        self.position
    }
    fn end(&self) -> Pos {
        let mut end = self.position;
        if let Some(a) = self.assigns.last() {
            end = end.max(a.end());
        }
        if let Some(cmd) = &self.cmd {
            end = end.max(cmd.end());
        }
        if let Some(r) = self.redirs.last() {
            end = end.max(r.end());
        }
        end
    }
}

/// Command held by a statement
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Call(CallExpr),
    Subshell(Subshell),
    Block(Block),
    If(IfClause),
    While(WhileClause),
    Until(UntilClause),
    For(ForClause),
    Case(CaseClause),
    Decl(DeclClause),
    Eval(EvalClause),
    Let(LetClause),
    FuncDecl(FuncDecl),
    Binary(Box<BinaryCmd>),
}

impl Node for Command {
    fn pos(&self) -> Pos {
        match self {
            Command::Call(x) => x.pos(),
            Command::Subshell(x) => x.pos(),
            Command::Block(x) => x.pos(),
            Command::If(x) => x.pos(),
            Command::While(x) => x.pos(),
            Command::Until(x) => x.pos(),
            Command::For(x) => x.pos(),
            Command::Case(x) => x.pos(),
            Command::Decl(x) => x.pos(),
            Command::Eval(x) => x.pos(),
            Command::Let(x) => x.pos(),
            Command::FuncDecl(x) => x.pos(),
            Command::Binary(x) => x.pos(),
        }
    }
    fn end(&self) -> Pos {
        match self {
            Command::Call(x) => x.end(),
            Command::Subshell(x) => x.end(),
            Command::Block(x) => x.end(),
            Command::If(x) => x.end(),
            Command::While(x) => x.end(),
            Command::Until(x) => x.end(),
            Command::For(x) => x.end(),
            Command::Case(x) => x.end(),
            Command::Decl(x) => x.end(),
            Command::Eval(x) => x.end(),
            Command::Let(x) => x.end(),
            Command::FuncDecl(x) => x.end(),
            Command::Binary(x) => x.end(),
        }
    }
}

/// Simple command: a command name with its arguments
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CallExpr {
    /// Words of the command, at least one
    pub args: Vec<Word>,
}

impl Node for CallExpr {
    fn pos(&self) -> Pos {
        self.args.first().expect("call without words").pos()
    }
    fn end(&self) -> Pos {
        self.args.last().expect("call without words").end()
    }
}

/// Subshell, `(…)`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Subshell {
    pub lparen: Pos,
    pub rparen: Pos,
    pub stmts: Vec<Stmt>,
}

impl Node for Subshell {
    fn pos(&self) -> Pos {
        self.lparen
    }
    fn end(&self) -> Pos {
        self.rparen.advance(1)
    }
}

/// Brace group, `{ …; }`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Block {
    pub lbrace: Pos,
    pub rbrace: Pos,
    pub stmts: Vec<Stmt>,
}

impl Node for Block {
    fn pos(&self) -> Pos {
        self.lbrace
    }
    fn end(&self) -> Pos {
        self.rbrace.advance(1)
    }
}

/// Condition of an `if`, `while`, or `until` clause
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Cond {
    /// Statement list condition
    Stmts(Vec<Stmt>),
    /// C-style arithmetic condition, `((…))`
    CStyle(CStyleCond),
}

/// Arithmetic condition, `((…))`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CStyleCond {
    pub lparen: Pos,
    /// Position of the first byte of the closing `))`
    pub rparen: Pos,
    pub x: ArithmExpr,
}

/// `if` conditional construct
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IfClause {
    pub if_pos: Pos,
    pub then_pos: Pos,
    pub fi_pos: Pos,
    pub cond: Cond,
    pub then_stmts: Vec<Stmt>,
    pub elifs: Vec<Elif>,
    pub else_stmts: Vec<Stmt>,
}

impl Node for IfClause {
    fn pos(&self) -> Pos {
        self.if_pos
    }
    fn end(&self) -> Pos {
        self.fi_pos.advance(2)
    }
}

/// `elif` branch of an [`IfClause`]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Elif {
    pub elif_pos: Pos,
    pub then_pos: Pos,
    pub cond: Cond,
    pub then_stmts: Vec<Stmt>,
}

/// `while` loop
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WhileClause {
    pub while_pos: Pos,
    pub do_pos: Pos,
    pub done_pos: Pos,
    pub cond: Cond,
    pub do_stmts: Vec<Stmt>,
}

impl Node for WhileClause {
    fn pos(&self) -> Pos {
        self.while_pos
    }
    fn end(&self) -> Pos {
        self.done_pos.advance(4)
    }
}

/// `until` loop
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UntilClause {
    pub until_pos: Pos,
    pub do_pos: Pos,
    pub done_pos: Pos,
    pub cond: Cond,
    pub do_stmts: Vec<Stmt>,
}

impl Node for UntilClause {
    fn pos(&self) -> Pos {
        self.until_pos
    }
    fn end(&self) -> Pos {
        self.done_pos.advance(4)
    }
}

/// Loop header of a [`ForClause`]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ForLoop {
    /// `name [in word…]`
    Words(WordIter),
    /// `((init; cond; post))`
    CStyle(CStyleLoop),
}

/// Word-list loop header
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WordIter {
    pub name: Lit,
    /// Words after `in`; empty when iterating the positional parameters
    pub list: Vec<Word>,
}

/// C-style loop header, `((init; cond; post))`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CStyleLoop {
    pub lparen: Pos,
    /// Position of the first byte of the closing `))`
    pub rparen: Pos,
    pub init: Option<ArithmExpr>,
    pub cond: Option<ArithmExpr>,
    pub post: Option<ArithmExpr>,
}

/// `for` loop
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ForClause {
    pub for_pos: Pos,
    pub do_pos: Pos,
    pub done_pos: Pos,
    pub iter: ForLoop,
    pub do_stmts: Vec<Stmt>,
}

impl Node for ForClause {
    fn pos(&self) -> Pos {
        self.for_pos
    }
    fn end(&self) -> Pos {
        self.done_pos.advance(4)
    }
}

/// `case` conditional construct
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CaseClause {
    pub case_pos: Pos,
    pub esac_pos: Pos,
    pub word: Word,
    pub list: Vec<PatternList>,
}

impl Node for CaseClause {
    fn pos(&self) -> Pos {
        self.case_pos
    }
    fn end(&self) -> Pos {
        self.esac_pos.advance(4)
    }
}

/// One branch of a `case` clause
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatternList {
    /// Patterns separated by `|`, at least one
    pub patterns: Vec<Word>,
    /// [`DblSemicolon`](Token::DblSemicolon), [`SemiAnd`](Token::SemiAnd), or
    /// [`DblSemiAnd`](Token::DblSemiAnd); a branch closed by `esac` records
    /// `DblSemicolon`
    pub op: Token,
    pub op_pos: Pos,
    pub stmts: Vec<Stmt>,
}

/// `declare` or `local` clause
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeclClause {
    pub position: Pos,
    /// True for `local`, false for `declare`
    pub local: bool,
    /// Option words, each starting with `-`
    pub opts: Vec<Word>,
    /// Assignments and bare word arguments
    pub assigns: Vec<Assign>,
}

impl Node for DeclClause {
    fn pos(&self) -> Pos {
        self.position
    }
    fn end(&self) -> Pos {
        match self.assigns.last() {
            Some(a) => a.end(),
            None => match self.opts.last() {
                Some(w) => w.end(),
                None => self.position.advance(if self.local { 5 } else { 7 }),
            },
        }
    }
}

/// `eval` clause
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EvalClause {
    pub eval_pos: Pos,
    pub stmt: Option<Box<Stmt>>,
}

impl Node for EvalClause {
    fn pos(&self) -> Pos {
        self.eval_pos
    }
    fn end(&self) -> Pos {
        match &self.stmt {
            Some(stmt) => stmt.end(),
            None => self.eval_pos.advance(4),
        }
    }
}

/// `let` clause
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LetClause {
    pub let_pos: Pos,
    /// Whitespace-separated arithmetic expressions, at least one
    pub exprs: Vec<ArithmExpr>,
}

impl Node for LetClause {
    fn pos(&self) -> Pos {
        self.let_pos
    }
    fn end(&self) -> Pos {
        match self.exprs.last() {
            Some(x) => x.end(),
            None => self.let_pos.advance(3),
        }
    }
}

/// Function definition
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FuncDecl {
    pub position: Pos,
    /// True when declared with the `function` keyword
    pub bash_style: bool,
    pub name: Lit,
    pub body: Box<Stmt>,
}

impl Node for FuncDecl {
    fn pos(&self) -> Pos {
        self.position
    }
    fn end(&self) -> Pos {
        self.body.end()
    }
}

/// Statements composed with `&&`, `||`, `|`, or `|&`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BinaryCmd {
    pub op: Token,
    pub op_pos: Pos,
    pub x: Stmt,
    pub y: Stmt,
}

impl Node for BinaryCmd {
    fn pos(&self) -> Pos {
        self.x.pos()
    }
    fn end(&self) -> Pos {
        self.y.end()
    }
}

/// Comment, from `#` to the end of the line
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Comment {
    /// Position of the `#`
    pub hash: Pos,
    /// Text after the `#`, without the trailing newline
    pub text: String,
}

impl Node for Comment {
    fn pos(&self) -> Pos {
        self.hash
    }
    fn end(&self) -> Pos {
        self.hash.advance(self.text.len() + 1)
    }
}

/// Arithmetic expression
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ArithmExpr {
    Binary(Box<BinaryArithm>),
    Unary(Box<UnaryArithm>),
    Paren(Box<ParenArithm>),
    Word(Word),
}

impl Node for ArithmExpr {
    fn pos(&self) -> Pos {
        match self {
            ArithmExpr::Binary(x) => x.x.pos(),
            ArithmExpr::Unary(x) => {
                if x.post {
                    x.x.pos()
                } else {
                    x.op_pos
                }
            }
            ArithmExpr::Paren(x) => x.lparen,
            ArithmExpr::Word(w) => w.pos(),
        }
    }
    fn end(&self) -> Pos {
        match self {
            ArithmExpr::Binary(x) => x.y.end(),
            ArithmExpr::Unary(x) => {
                if x.post {
                    x.op_pos.advance(2)
                } else {
                    x.x.end()
                }
            }
            ArithmExpr::Paren(x) => x.rparen.advance(1),
            ArithmExpr::Word(w) => w.end(),
        }
    }
}

/// Binary arithmetic operation
///
/// The ternary `a ? b : c` is encoded as a `?` operation whose right operand
/// is a `:` operation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BinaryArithm {
    pub op: Token,
    pub op_pos: Pos,
    pub x: ArithmExpr,
    pub y: ArithmExpr,
}

/// Unary arithmetic operation
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnaryArithm {
    pub op: Token,
    pub op_pos: Pos,
    /// True for the postfix `x++` and `x--`
    pub post: bool,
    pub x: ArithmExpr,
}

/// Parenthesized arithmetic expression
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParenArithm {
    pub lparen: Pos,
    pub rparen: Pos,
    pub x: ArithmExpr,
}
