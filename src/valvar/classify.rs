use std::fmt;

use crate::ast::{LocalVariable, TypeRef};
use crate::interner::{self, Symbol};
use crate::typechecker::model::SemanticModel;

pub const VAL_FQN: &str = "lombok.val";
pub const VAR_FQN: &str = "lombok.var";
pub const VAR_EXPERIMENTAL_FQN: &str = "lombok.experimental.var";

/// Which placeholder, if any, a declared type denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderKind {
    None,
    Val,
    Var,
}

impl PlaceholderKind {
    pub fn is_placeholder(self) -> bool {
        !matches!(self, PlaceholderKind::None)
    }

    pub fn keyword(self) -> &'static str {
        match self {
            PlaceholderKind::None => "none",
            PlaceholderKind::Val => "val",
            PlaceholderKind::Var => "var",
        }
    }
}

impl fmt::Display for PlaceholderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Classify an already-resolved qualified name.
pub fn classify_name(qualified_name: Option<&str>) -> PlaceholderKind {
    match qualified_name {
        Some(VAL_FQN) => PlaceholderKind::Val,
        Some(VAR_FQN) | Some(VAR_EXPERIMENTAL_FQN) => PlaceholderKind::Var,
        _ => PlaceholderKind::None,
    }
}

pub fn classify_symbol(qualified_name: Option<Symbol>) -> PlaceholderKind {
    match qualified_name.and_then(interner::resolve) {
        Some(name) => classify_name(Some(name.as_str())),
        None => PlaceholderKind::None,
    }
}

/// Classify a declared type reference by the name it resolves to.
pub fn classify<M: SemanticModel + ?Sized>(model: &M, type_ref: Option<&TypeRef<'_>>) -> PlaceholderKind {
    classify_symbol(type_ref.and_then(|t| model.qualified_name(t)))
}

/// A `val` local that has something to infer from.
pub fn is_val<M: SemanticModel + ?Sized>(model: &M, local: &LocalVariable<'_>) -> bool {
    local.initializer.is_some() && classify(model, local.type_ref) == PlaceholderKind::Val
}

/// A `val` or `var` local that has something to infer from.
pub fn is_val_or_var<M: SemanticModel + ?Sized>(model: &M, local: &LocalVariable<'_>) -> bool {
    local.initializer.is_some() && classify(model, local.type_ref).is_placeholder()
}
