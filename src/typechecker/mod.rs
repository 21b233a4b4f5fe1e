//! Semantic side of the core: resolved types and the queries the host answers.

pub mod types;
pub mod model;
pub mod table;

pub use model::SemanticModel;
pub use table::TableModel;
pub use types::{Primitive, Type};
