//! Where `val` and `var` may legally appear.

use crate::ast::{Declaration, DeclarationScope, ExprKind, LocalContext, LocalVariable, Parameter};
use crate::diagnostics::{Diagnostic, DiagnosticSink, Problem};
use crate::typechecker::model::SemanticModel;
use crate::valvar::classify::{classify, PlaceholderKind};

/// Check a local variable declaration. Reports at most one problem.
pub fn validate_local_variable<M, S>(model: &M, local: &LocalVariable<'_>, sink: &mut S)
where
    M: SemanticModel + ?Sized,
    S: DiagnosticSink + ?Sized,
{
    let kind = classify(model, local.type_ref);
    if !kind.is_placeholder() {
        return;
    }

    let problem = match local.initializer.map(|init| init.kind) {
        None => Some(Problem::MissingInitializer { kind }),
        Some(ExprKind::ArrayInit(_)) => Some(Problem::ArrayInitializer { kind }),
        Some(ExprKind::Lambda) => Some(Problem::LambdaInitializer { kind }),
        Some(_) if kind == PlaceholderKind::Val && local.context == LocalContext::ForInit => {
            Some(Problem::ValInOldStyleFor)
        }
        Some(_) => None,
    };

    if let Some(problem) = problem {
        log::debug!("{} local {}: {}", kind, local.id, problem.code());
        sink.report(Diagnostic::error(local.id, local.span, problem));
    }
}

/// Check a parameter declaration. Reports at most one problem.
pub fn validate_parameter<M, S>(model: &M, param: &Parameter<'_>, sink: &mut S)
where
    M: SemanticModel + ?Sized,
    S: DiagnosticSink + ?Sized,
{
    let kind = classify(model, param.type_ref);
    let in_foreach = matches!(param.scope, DeclarationScope::Foreach(_));
    let in_for = matches!(param.scope, DeclarationScope::For(_));

    let problem = match kind {
        PlaceholderKind::Val if !in_foreach => Problem::ValParameter,
        PlaceholderKind::Var if !(in_foreach || in_for) => Problem::VarParameter,
        _ => return,
    };

    log::debug!("{} parameter {}: {}", kind, param.id, problem.code());
    sink.report(Diagnostic::error(param.id, param.span, problem));
}

pub fn validate_declaration<M, S>(model: &M, decl: &Declaration<'_>, sink: &mut S)
where
    M: SemanticModel + ?Sized,
    S: DiagnosticSink + ?Sized,
{
    match decl {
        Declaration::LocalVariable(local) => validate_local_variable(model, local, sink),
        Declaration::Parameter(param) => validate_parameter(model, param, sink),
    }
}

/// Validate each declaration independently; problems on one never stop the rest.
pub fn validate_all<'a, 'ast: 'a, M, S, I>(model: &M, decls: I, sink: &mut S)
where
    M: SemanticModel + ?Sized,
    S: DiagnosticSink + ?Sized,
    I: IntoIterator<Item = &'a Declaration<'ast>>,
{
    for decl in decls {
        validate_declaration(model, decl, sink);
    }
}
