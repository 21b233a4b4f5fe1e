use crate::ast::{Expr, NodeId, TypeRef};
use crate::interner::Symbol;
use crate::typechecker::types::Type;
use crate::valvar::guard::RecursionGuard;

/// Semantic queries the inference core needs from its host.
///
/// Every core entry point takes the model explicitly. Implementations are
/// read-only views over one consistent tree snapshot.
pub trait SemanticModel {
    /// Fully-qualified name the reference resolves to, if it resolves.
    fn qualified_name(&self, type_ref: &TypeRef<'_>) -> Option<Symbol>;

    /// Static type of an expression.
    ///
    /// Computing it may require the inferred type of a `val`/`var`
    /// declaration; implementations must then call
    /// [`resolve_inferred_type_in`](crate::valvar::resolve_inferred_type_in)
    /// with the `guard` they were given, never a fresh one.
    fn static_type(&self, expr: &Expr<'_>, guard: &mut RecursionGuard) -> Option<Type>;

    /// Whether a value of type `from` can be used where `to` is expected.
    fn is_assignable(&self, from: &Type, to: &Type) -> bool;

    /// Raw form of `ty`.
    fn erasure(&self, ty: &Type) -> Type;

    /// Element type produced by iterating `iterated` in a foreach header.
    fn iterable_element_type(&self, iterated: &Expr<'_>, guard: &mut RecursionGuard) -> Option<Type>;

    /// The universal top type visible from the given node.
    fn top_type(&self, context: NodeId) -> Type;
}
