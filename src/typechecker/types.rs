use std::fmt;

use crate::interner::{self, Symbol};

/// Primitive (non-reference) types of the host language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
}

impl Primitive {
    pub fn name(self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Byte => "byte",
            Primitive::Short => "short",
            Primitive::Char => "char",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Double => "double",
        }
    }

    pub fn from_name(name: &str) -> Option<Primitive> {
        Some(match name {
            "boolean" => Primitive::Boolean,
            "byte" => Primitive::Byte,
            "short" => Primitive::Short,
            "char" => Primitive::Char,
            "int" => Primitive::Int,
            "long" => Primitive::Long,
            "float" => Primitive::Float,
            "double" => Primitive::Double,
            _ => return None,
        })
    }
}

/// A resolved semantic type.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Primitive(Primitive),

    /// Class or interface by qualified name, with type arguments.
    /// An empty `args` is the raw (or non-generic) form.
    Class { name: Symbol, args: Vec<Type> },

    Array(Box<Type>),

    /// Type parameter, e.g. the `T` of `Foo<T>` before it is inferred.
    Var(Symbol),

    /// Type of the `null` literal.
    Null,
}

impl Type {
    pub fn int() -> Type {
        Type::Primitive(Primitive::Int)
    }

    pub fn double() -> Type {
        Type::Primitive(Primitive::Double)
    }

    pub fn boolean() -> Type {
        Type::Primitive(Primitive::Boolean)
    }

    pub fn class(name: &str) -> Type {
        Type::Class { name: interner::intern(name), args: Vec::new() }
    }

    pub fn generic(name: &str, args: Vec<Type>) -> Type {
        Type::Class { name: interner::intern(name), args }
    }

    pub fn array(elem: Type) -> Type {
        Type::Array(Box::new(elem))
    }

    pub fn var(name: &str) -> Type {
        Type::Var(interner::intern(name))
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Type::Primitive(_))
    }

    /// Strip type arguments down to the raw form. Array component types are
    /// erased too; type variables are left for the model to map to a bound.
    pub fn erasure(&self) -> Type {
        match self {
            Type::Class { name, .. } => Type::Class { name: *name, args: Vec::new() },
            Type::Array(elem) => Type::Array(Box::new(elem.erasure())),
            other => other.clone(),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Primitive(p) => write!(f, "{}", p.name()),
            Type::Class { name, args } => {
                write!(f, "{}", interner::resolve(*name).unwrap_or_default())?;
                if !args.is_empty() {
                    write!(f, "<")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", arg)?;
                    }
                    write!(f, ">")?;
                }
                Ok(())
            }
            Type::Array(elem) => write!(f, "{}[]", elem),
            Type::Var(sym) => write!(f, "{}", interner::resolve(*sym).unwrap_or_default()),
            Type::Null => write!(f, "null"),
        }
    }
}
