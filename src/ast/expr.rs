use crate::ast::span::Span;
use crate::ast::types::TypeRef;
use crate::ast::NodeId;
use crate::interner::Symbol;

/// Expression node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expr<'ast> {
    pub id: NodeId,
    pub span: Span,
    pub kind: ExprKind<'ast>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExprKind<'ast> {
    /// `cond ? then : else`; branches may be missing in broken code.
    Conditional {
        cond: &'ast Expr<'ast>,
        then_branch: Option<&'ast Expr<'ast>>,
        else_branch: Option<&'ast Expr<'ast>>,
    },

    /// `(a, b) -> body` or a method reference.
    Lambda,

    /// Brace-list shorthand `{1, 2, 3}` without `new T[]`.
    ArrayInit(&'ast [&'ast Expr<'ast>]),

    /// `new Foo<...>(...)`. `class` is absent for unresolvable syntax.
    New { class: Option<&'ast TypeRef<'ast>> },

    /// Reference to a variable by name.
    Ident(Symbol),

    Literal(Literal),

    /// Any other expression form (calls, field access, operators, ...).
    /// Its type is whatever the semantic model reports for the node.
    Opaque,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Int(i64),
    Long(i64),
    Double(f64),
    Bool(bool),
    Char(char),
    Str(Symbol),
    Null,
}

impl<'ast> Expr<'ast> {
    pub fn new(id: NodeId, span: Span, kind: ExprKind<'ast>) -> Self {
        Expr { id, span, kind }
    }

    /// A construction with diamond type arguments: `new Foo<>()`.
    pub fn is_diamond_new(&self) -> bool {
        match self.kind {
            ExprKind::New { class: Some(class) } => class.is_diamond(),
            _ => false,
        }
    }
}
