use thiserror::Error;

use crate::valvar::classify::PlaceholderKind;

/// Problems reported against `val`/`var` declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Problem {
    #[error("'{kind}' on a local variable requires an initializer expression")]
    MissingInitializer { kind: PlaceholderKind },

    #[error("'{kind}' is not compatible with array initializer expressions. Use the full form (new int[] {{ ... }} instead of just {{ ... }})")]
    ArrayInitializer { kind: PlaceholderKind },

    #[error("'{kind}' is not allowed with lambda expressions.")]
    LambdaInitializer { kind: PlaceholderKind },

    #[error("'val' is not allowed in old-style for loops")]
    ValInOldStyleFor,

    #[error("'val' works only on local variables and on foreach loops")]
    ValParameter,

    #[error("'var' works only on local variables and on for/foreach loops")]
    VarParameter,
}

/// The three families of user-facing problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProblemCategory {
    MissingInitializer,
    UnsupportedInitializer,
    IllegalPlacement,
}

impl Problem {
    pub fn code(&self) -> String {
        match self {
            Problem::MissingInitializer { .. } => "MissingInitializer".into(),
            Problem::ArrayInitializer { .. } => "UnsupportedInitializer.ArrayInitializer".into(),
            Problem::LambdaInitializer { .. } => "UnsupportedInitializer.Lambda".into(),
            Problem::ValInOldStyleFor => "IllegalPlacement.OldStyleFor".into(),
            Problem::ValParameter => "IllegalPlacement.ValParameter".into(),
            Problem::VarParameter => "IllegalPlacement.VarParameter".into(),
        }
    }

    pub fn category(&self) -> ProblemCategory {
        match self {
            Problem::MissingInitializer { .. } => ProblemCategory::MissingInitializer,
            Problem::ArrayInitializer { .. } | Problem::LambdaInitializer { .. } => {
                ProblemCategory::UnsupportedInitializer
            }
            Problem::ValInOldStyleFor | Problem::ValParameter | Problem::VarParameter => {
                ProblemCategory::IllegalPlacement
            }
        }
    }
}
