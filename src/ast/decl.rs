use crate::ast::expr::Expr;
use crate::ast::span::Span;
use crate::ast::types::TypeRef;
use crate::ast::NodeId;
use crate::interner::Symbol;

/// A declaration whose type may be a `val`/`var` placeholder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Declaration<'ast> {
    LocalVariable(LocalVariable<'ast>),
    Parameter(Parameter<'ast>),
}

/// `T name = init;` inside a block or a `for (...)` init clause.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalVariable<'ast> {
    pub id: NodeId,
    pub span: Span,
    pub name: Symbol,
    pub type_ref: Option<&'ast TypeRef<'ast>>,
    pub initializer: Option<&'ast Expr<'ast>>,
    pub context: LocalContext,
}

/// Where the declaration statement of a local variable sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalContext {
    /// Ordinary statement in a block.
    Block,
    /// Declaration statement that is the init clause of a classic
    /// `for (init; cond; update)` loop.
    ForInit,
}

/// A parameter: a loop variable or anything else that binds one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameter<'ast> {
    pub id: NodeId,
    pub span: Span,
    pub name: Symbol,
    pub type_ref: Option<&'ast TypeRef<'ast>>,
    pub scope: DeclarationScope<'ast>,
}

/// The syntactic construct a parameter belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeclarationScope<'ast> {
    Foreach(&'ast ForeachHeader<'ast>),
    For(&'ast ForHeader),
    Other(ParameterOwner),
}

/// `for (T x : iterated)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForeachHeader<'ast> {
    pub id: NodeId,
    pub span: Span,
    pub iterated: Option<&'ast Expr<'ast>>,
}

/// `for (init; cond; update)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForHeader {
    pub id: NodeId,
    pub span: Span,
}

/// Non-loop constructs that declare parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterOwner {
    Method,
    Lambda,
    Catch,
    Resource,
}

impl<'ast> Declaration<'ast> {
    pub fn id(&self) -> NodeId {
        match self {
            Declaration::LocalVariable(local) => local.id,
            Declaration::Parameter(param) => param.id,
        }
    }

    pub fn name(&self) -> Symbol {
        match self {
            Declaration::LocalVariable(local) => local.name,
            Declaration::Parameter(param) => param.name,
        }
    }

    /// The declared type reference, which is the placeholder for `val`/`var`.
    pub fn type_ref(&self) -> Option<&'ast TypeRef<'ast>> {
        match self {
            Declaration::LocalVariable(local) => local.type_ref,
            Declaration::Parameter(param) => param.type_ref,
        }
    }
}
