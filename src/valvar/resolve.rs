//! What a `val`/`var` placeholder stands for.

use crate::ast::{Declaration, DeclarationScope, Expr, ExprKind, ForeachHeader};
use crate::typechecker::model::SemanticModel;
use crate::typechecker::types::Type;
use crate::valvar::classify::classify;
use crate::valvar::guard::RecursionGuard;

/// Resolve the type a `val`/`var` declaration should be treated as.
///
/// Returns `None` when the declaration is not an active placeholder site
/// (not `val`/`var`, or a parameter outside a foreach header); the caller
/// keeps the declared type. Otherwise always returns a type, falling back
/// to the model's top type when nothing better is known.
pub fn resolve_inferred_type<M: SemanticModel + ?Sized>(model: &M, decl: &Declaration<'_>) -> Option<Type> {
    let mut guard = RecursionGuard::new();
    resolve_inferred_type_in(model, decl, &mut guard)
}

/// Re-entrant form of [`resolve_inferred_type`] for use inside a model's
/// own type queries.
pub fn resolve_inferred_type_in<M: SemanticModel + ?Sized>(
    model: &M,
    decl: &Declaration<'_>,
    guard: &mut RecursionGuard,
) -> Option<Type> {
    let kind = classify(model, decl.type_ref());
    if !kind.is_placeholder() {
        return None;
    }

    let resolved = match decl {
        Declaration::LocalVariable(local) => local
            .initializer
            .and_then(|init| resolve_initializer(model, init, guard)),
        Declaration::Parameter(param) => match param.scope {
            DeclarationScope::Foreach(header) => resolve_foreach_element(model, header, guard),
            DeclarationScope::For(_) | DeclarationScope::Other(_) => return None,
        },
    };

    match resolved {
        Some(ty) => {
            log::debug!("{} {} resolved to {}", kind, decl.id(), ty);
            Some(ty)
        }
        None => {
            let top = model.top_type(decl.id());
            log::debug!("{} {} unresolved, falling back to {}", kind, decl.id(), top);
            Some(top)
        }
    }
}

fn resolve_initializer<M: SemanticModel + ?Sized>(
    model: &M,
    init: &Expr<'_>,
    guard: &mut RecursionGuard,
) -> Option<Type> {
    let resolved = match init.kind {
        ExprKind::ArrayInit(_) => return None,
        ExprKind::Conditional { then_branch, else_branch, .. } => guard
            .run(init.id, |guard| {
                let then_ty = then_branch.and_then(|e| guarded_type(model, e, guard));
                let else_ty = else_branch.and_then(|e| guarded_type(model, e, guard));
                unify_branch_types(model, then_ty, else_ty)
            })
            .flatten(),
        _ => guarded_type(model, init, guard),
    };

    // `new Foo<>()` must not leak the not-yet-inferred arguments.
    if init.is_diamond_new() {
        return resolved.map(|ty| {
            let erased = model.erasure(&ty);
            log::debug!("diamond construction {}: erased {} to {}", init.id, ty, erased);
            erased
        });
    }
    resolved
}

fn guarded_type<M: SemanticModel + ?Sized>(model: &M, expr: &Expr<'_>, guard: &mut RecursionGuard) -> Option<Type> {
    guard.run(expr.id, |guard| model.static_type(expr, guard)).flatten()
}

/// Combine the branch types of a conditional expression.
///
/// The branch that can receive the other one wins. When neither direction
/// holds the `then` branch is kept.
pub fn unify_branch_types<M: SemanticModel + ?Sized>(
    model: &M,
    then_ty: Option<Type>,
    else_ty: Option<Type>,
) -> Option<Type> {
    match (then_ty, else_ty) {
        (None, else_ty) => else_ty,
        (then_ty, None) => then_ty,
        (Some(then_ty), Some(else_ty)) => {
            if model.is_assignable(&else_ty, &then_ty) {
                Some(then_ty)
            } else if model.is_assignable(&then_ty, &else_ty) {
                Some(else_ty)
            } else {
                Some(then_ty)
            }
        }
    }
}

fn resolve_foreach_element<M: SemanticModel + ?Sized>(
    model: &M,
    header: &ForeachHeader<'_>,
    guard: &mut RecursionGuard,
) -> Option<Type> {
    let iterated = header.iterated?;
    guard
        .run(iterated.id, |guard| model.iterable_element_type(iterated, guard))
        .flatten()
}
