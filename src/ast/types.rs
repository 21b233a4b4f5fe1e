use crate::ast::span::Span;
use crate::ast::NodeId;
use crate::interner::Symbol;

/// A type as written in source: `Map<String, Integer>`, `val`, `int[]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeRef<'ast> {
    pub id: NodeId,
    pub span: Span,
    /// Name as written, possibly unqualified.
    pub name: Symbol,
    pub args: &'ast [TypeArg<'ast>],
    /// Number of trailing `[]`.
    pub dims: u8,
}

/// One entry of a type argument list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypeArg<'ast> {
    Type(&'ast TypeRef<'ast>),
    /// The empty `<>` of a diamond construction.
    Diamond,
}

impl<'ast> TypeRef<'ast> {
    /// A reference without type arguments or array dimensions.
    pub fn simple(id: NodeId, span: Span, name: Symbol) -> Self {
        TypeRef { id, span, name, args: &[], dims: 0 }
    }

    /// `Foo<>`: exactly one argument, and it is the diamond marker.
    pub fn is_diamond(&self) -> bool {
        matches!(self.args, [TypeArg::Diamond])
    }
}
