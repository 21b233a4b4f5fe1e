//! Syntax tree snapshot consumed by the inference core.
//!
//! The tree is owned by the host (usually through an [`Arena`](crate::arena::Arena));
//! nothing in this crate mutates it. Children are held as `&'ast` references,
//! parents are not linked, so callers pass the owning declaration explicitly.

pub mod span;
pub mod types;
pub mod expr;
pub mod decl;

pub use span::{SourcePos, Span};
pub use types::{TypeArg, TypeRef};
pub use expr::{Expr, ExprKind, Literal};
pub use decl::{Declaration, DeclarationScope, ForHeader, ForeachHeader, LocalContext, LocalVariable, Parameter, ParameterOwner};

/// Identity of a syntax node within one tree snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
