//! Type inference and usage validation for `val` and `var`.
//!
//! A declaration whose type is one of the placeholder names asks for its
//! type to be inferred:
//! 1. `valvar::classify` recognises the placeholder by qualified name
//! 2. `valvar::placement` reports placeholders used where they cannot work
//! 3. `valvar::resolve` computes the concrete type from the initializer or
//!    the iterated collection
//!
//! Syntax trees and semantic queries come from the host through
//! [`ast`] and [`SemanticModel`].

pub mod arena;
pub mod ast;
pub mod diagnostics;
pub mod interner;
pub mod settings;
pub mod typechecker;
pub mod valvar;

// Re-export main types
pub use diagnostics::{Diagnostic, DiagnosticSink, Problem, Severity};
pub use settings::is_feature_enabled;
pub use typechecker::{SemanticModel, Type};
pub use valvar::{
    classify, resolve_inferred_type, validate_local_variable, validate_parameter, PlaceholderKind,
    RecursionGuard,
};
