//! Inference and placement rules for the `val` and `var` placeholders.
//!
//! [`classify`] decides which placeholder a declared type denotes, the
//! [`placement`] rules report illegal uses, and [`resolve`] computes the
//! concrete type a placeholder stands for. Type queries that can loop back
//! into resolution run under a [`RecursionGuard`].

pub mod classify;
pub mod guard;
pub mod placement;
pub mod resolve;

pub use classify::{classify, classify_name, classify_symbol, is_val, is_val_or_var, PlaceholderKind};
pub use guard::RecursionGuard;
pub use placement::{validate_all, validate_declaration, validate_local_variable, validate_parameter};
pub use resolve::{resolve_inferred_type, resolve_inferred_type_in, unify_branch_types};
