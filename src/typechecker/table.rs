//! Table-driven [`SemanticModel`].
//!
//! Class declarations, imports and expression types are registered up front.
//! Good enough for hosts that only need the inference core and for tests;
//! it knows nothing about overloads, generic methods or captures.

use std::collections::{HashMap, HashSet};

use crate::ast::{Declaration, Expr, ExprKind, Literal, NodeId, TypeArg, TypeRef};
use crate::interner::{self, Symbol};
use crate::typechecker::model::SemanticModel;
use crate::typechecker::types::{Primitive, Type};
use crate::valvar::classify::classify;
use crate::valvar::guard::RecursionGuard;
use crate::valvar::resolve::{resolve_inferred_type_in, unify_branch_types};

const OBJECT: &str = "java.lang.Object";
const ITERABLE: &str = "java.lang.Iterable";

#[derive(Debug, Clone, Default)]
struct ClassInfo {
    params: Vec<Symbol>,
    /// Direct supertypes, written in terms of `params`.
    supertypes: Vec<Type>,
}

pub struct TableModel<'ast> {
    top: Symbol,
    imports: HashMap<Symbol, Symbol>,
    classes: HashMap<Symbol, ClassInfo>,
    expr_types: HashMap<NodeId, Type>,
    assignable: Vec<(Type, Type)>,
    locals: HashMap<Symbol, &'ast Declaration<'ast>>,
}

impl<'ast> TableModel<'ast> {
    /// Empty model whose only known class is the top type.
    pub fn new() -> Self {
        let top = interner::intern(OBJECT);
        let mut classes = HashMap::new();
        classes.insert(top, ClassInfo::default());
        TableModel {
            top,
            imports: HashMap::new(),
            classes,
            expr_types: HashMap::new(),
            assignable: Vec::new(),
            locals: HashMap::new(),
        }
    }

    /// Model preloaded with `java.lang` boxes and the core collection types,
    /// with `java.lang` names imported.
    pub fn with_jdk_basics() -> Self {
        let mut model = TableModel::new();
        let object = Type::class(OBJECT);
        let number = Type::class("java.lang.Number");
        model.declare_class("java.lang.Number", &[], vec![object.clone()]);
        model.declare_class("java.lang.String", &[], vec![object.clone()]);
        for boxed in ["java.lang.Integer", "java.lang.Long", "java.lang.Short", "java.lang.Byte", "java.lang.Float", "java.lang.Double"] {
            model.declare_class(boxed, &[], vec![number.clone()]);
        }
        model.declare_class("java.lang.Boolean", &[], vec![object.clone()]);
        model.declare_class("java.lang.Character", &[], vec![object.clone()]);
        model.declare_class(ITERABLE, &["T"], vec![object.clone()]);
        model.declare_class("java.util.Collection", &["E"], vec![Type::generic(ITERABLE, vec![Type::var("E")])]);
        model.declare_class("java.util.List", &["E"], vec![Type::generic("java.util.Collection", vec![Type::var("E")])]);
        model.declare_class("java.util.ArrayList", &["E"], vec![Type::generic("java.util.List", vec![Type::var("E")])]);
        model.declare_class("java.util.Map", &["K", "V"], vec![object]);
        model.declare_class(
            "java.util.HashMap",
            &["K", "V"],
            vec![Type::generic("java.util.Map", vec![Type::var("K"), Type::var("V")])],
        );
        let java_lang: Vec<String> = model
            .classes
            .keys()
            .filter_map(|name| interner::resolve(*name))
            .filter(|name| name.starts_with("java.lang."))
            .collect();
        for qualified in java_lang {
            let simple = qualified.rsplit('.').next().unwrap_or(&qualified).to_string();
            model.import(&simple, &qualified);
        }
        model
    }

    /// Make `simple` resolve to `qualified`, like an import statement.
    pub fn import(&mut self, simple: &str, qualified: &str) {
        self.imports.insert(interner::intern(simple), interner::intern(qualified));
    }

    pub fn declare_class(&mut self, qualified: &str, params: &[&str], supertypes: Vec<Type>) {
        let info = ClassInfo {
            params: params.iter().map(|p| interner::intern(p)).collect(),
            supertypes,
        };
        self.classes.insert(interner::intern(qualified), info);
    }

    /// Fix the static type reported for an expression node.
    pub fn set_expr_type(&mut self, expr: NodeId, ty: Type) {
        self.expr_types.insert(expr, ty);
    }

    /// Treat `from` as assignable to `to` on top of the built-in rules.
    pub fn assume_assignable(&mut self, from: Type, to: Type) {
        self.assignable.push((from, to));
    }

    /// Bind a variable name so identifiers referring to it can be typed.
    pub fn bind_local(&mut self, decl: &'ast Declaration<'ast>) {
        self.locals.insert(decl.name(), decl);
    }

    /// The type a written type reference denotes.
    pub fn declared_type(&self, type_ref: &TypeRef<'_>) -> Option<Type> {
        let base = match interner::resolve(type_ref.name).as_deref().and_then(Primitive::from_name) {
            Some(p) => Type::Primitive(p),
            None => {
                let name = self.qualified_name(type_ref)?;
                let args = type_ref
                    .args
                    .iter()
                    .filter_map(|arg| match arg {
                        TypeArg::Type(t) => self.declared_type(t),
                        TypeArg::Diamond => None,
                    })
                    .collect();
                Type::Class { name, args }
            }
        };
        Some((0..type_ref.dims).fold(base, |ty, _| Type::array(ty)))
    }

    fn variable_type(&self, decl: &Declaration<'_>, guard: &mut RecursionGuard) -> Option<Type> {
        if classify(self, decl.type_ref()).is_placeholder() {
            resolve_inferred_type_in(self, decl, guard)
        } else {
            decl.type_ref().and_then(|t| self.declared_type(t))
        }
    }

    fn branch_type(&self, branch: &Expr<'_>, guard: &mut RecursionGuard) -> Option<Type> {
        guard.run(branch.id, |guard| self.static_type(branch, guard)).flatten()
    }

    fn construction_type(&self, class: &TypeRef<'_>) -> Option<Type> {
        let name = self.qualified_name(class)?;
        if class.is_diamond() {
            let params = self.classes.get(&name).map(|c| c.params.clone()).unwrap_or_default();
            return Some(Type::Class { name, args: params.into_iter().map(Type::Var).collect() });
        }
        self.declared_type(class)
    }

    /// View `ty` as an instance of class `target`, substituting arguments
    /// along the supertype chain. Raw types stay raw.
    fn as_super(&self, ty: &Type, target: Symbol, visited: &mut HashSet<Symbol>) -> Option<Type> {
        let Type::Class { name, args } = ty else {
            return None;
        };
        if *name == target {
            return Some(ty.clone());
        }
        if !visited.insert(*name) {
            return None;
        }
        let info = self.classes.get(name)?;
        for sup in &info.supertypes {
            let sup = if args.is_empty() { sup.erasure() } else { substitute(sup, &info.params, args) };
            if let Some(found) = self.as_super(&sup, target, visited) {
                return Some(found);
            }
        }
        None
    }

    fn is_subtype(&self, from: &Type, to: &Type) -> bool {
        let Type::Class { name: target, args: to_args } = to else {
            return false;
        };
        if *target == self.top {
            return true;
        }
        match self.as_super(from, *target, &mut HashSet::new()) {
            Some(Type::Class { args, .. }) => to_args.is_empty() || args.is_empty() || args == *to_args,
            _ => false,
        }
    }
}

impl Default for TableModel<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl SemanticModel for TableModel<'_> {
    fn qualified_name(&self, type_ref: &TypeRef<'_>) -> Option<Symbol> {
        if let Some(qualified) = self.imports.get(&type_ref.name) {
            return Some(*qualified);
        }
        let written = interner::resolve(type_ref.name)?;
        if written.contains('.') || self.classes.contains_key(&type_ref.name) {
            Some(type_ref.name)
        } else {
            None
        }
    }

    fn static_type(&self, expr: &Expr<'_>, guard: &mut RecursionGuard) -> Option<Type> {
        if let Some(ty) = self.expr_types.get(&expr.id) {
            return Some(ty.clone());
        }
        match expr.kind {
            ExprKind::Literal(lit) => Some(match lit {
                Literal::Int(_) => Type::int(),
                Literal::Long(_) => Type::Primitive(Primitive::Long),
                Literal::Double(_) => Type::double(),
                Literal::Bool(_) => Type::boolean(),
                Literal::Char(_) => Type::Primitive(Primitive::Char),
                Literal::Str(_) => Type::class("java.lang.String"),
                Literal::Null => Type::Null,
            }),
            ExprKind::Ident(name) => {
                let decl = self.locals.get(&name)?;
                self.variable_type(decl, guard)
            }
            ExprKind::New { class: Some(class) } => self.construction_type(class),
            ExprKind::Conditional { then_branch, else_branch, .. } => {
                let then_ty = then_branch.and_then(|e| self.branch_type(e, guard));
                let else_ty = else_branch.and_then(|e| self.branch_type(e, guard));
                unify_branch_types(self, then_ty, else_ty)
            }
            ExprKind::New { class: None }
            | ExprKind::Lambda
            | ExprKind::ArrayInit(_)
            | ExprKind::Opaque => None,
        }
    }

    fn is_assignable(&self, from: &Type, to: &Type) -> bool {
        if from == to || self.assignable.iter().any(|(f, t)| f == from && t == to) {
            return true;
        }
        match (from, to) {
            (Type::Null, to) => !to.is_primitive(),
            (Type::Primitive(a), Type::Primitive(b)) => widens(*a, *b),
            (Type::Primitive(p), to) => self.is_subtype(&Type::class(box_name(*p)), to),
            (Type::Class { name, .. }, Type::Primitive(p)) => interner::resolve(*name)
                .as_deref()
                .and_then(unbox)
                .is_some_and(|unboxed| unboxed == *p || widens(unboxed, *p)),
            (Type::Array(a), Type::Array(b)) => {
                if a.is_primitive() || b.is_primitive() {
                    a == b
                } else {
                    self.is_assignable(a, b)
                }
            }
            (_, Type::Class { name, .. }) if *name == self.top => true,
            (Type::Class { .. }, Type::Class { .. }) => self.is_subtype(from, to),
            _ => false,
        }
    }

    fn erasure(&self, ty: &Type) -> Type {
        match ty {
            Type::Var(_) => Type::Class { name: self.top, args: Vec::new() },
            Type::Array(elem) => Type::array(self.erasure(elem)),
            other => other.erasure(),
        }
    }

    fn iterable_element_type(&self, iterated: &Expr<'_>, guard: &mut RecursionGuard) -> Option<Type> {
        match self.static_type(iterated, guard)? {
            Type::Array(elem) => Some(*elem),
            ty @ Type::Class { .. } => {
                let iterable = self.as_super(&ty, interner::intern(ITERABLE), &mut HashSet::new())?;
                match iterable {
                    Type::Class { mut args, .. } if !args.is_empty() => Some(args.swap_remove(0)),
                    _ => Some(Type::Class { name: self.top, args: Vec::new() }),
                }
            }
            _ => None,
        }
    }

    fn top_type(&self, _context: NodeId) -> Type {
        Type::Class { name: self.top, args: Vec::new() }
    }
}

fn substitute(ty: &Type, params: &[Symbol], args: &[Type]) -> Type {
    match ty {
        Type::Var(v) => params
            .iter()
            .position(|p| p == v)
            .and_then(|i| args.get(i).cloned())
            .unwrap_or_else(|| ty.clone()),
        Type::Class { name, args: inner } => Type::Class {
            name: *name,
            args: inner.iter().map(|a| substitute(a, params, args)).collect(),
        },
        Type::Array(elem) => Type::array(substitute(elem, params, args)),
        other => other.clone(),
    }
}

fn widens(from: Primitive, to: Primitive) -> bool {
    use Primitive::*;
    matches!(
        (from, to),
        (Byte, Short | Int | Long | Float | Double)
            | (Short, Int | Long | Float | Double)
            | (Char, Int | Long | Float | Double)
            | (Int, Long | Float | Double)
            | (Long, Float | Double)
            | (Float, Double)
    )
}

fn box_name(p: Primitive) -> &'static str {
    match p {
        Primitive::Boolean => "java.lang.Boolean",
        Primitive::Byte => "java.lang.Byte",
        Primitive::Short => "java.lang.Short",
        Primitive::Char => "java.lang.Character",
        Primitive::Int => "java.lang.Integer",
        Primitive::Long => "java.lang.Long",
        Primitive::Float => "java.lang.Float",
        Primitive::Double => "java.lang.Double",
    }
}

fn unbox(name: &str) -> Option<Primitive> {
    Some(match name {
        "java.lang.Boolean" => Primitive::Boolean,
        "java.lang.Byte" => Primitive::Byte,
        "java.lang.Short" => Primitive::Short,
        "java.lang.Character" => Primitive::Char,
        "java.lang.Integer" => Primitive::Int,
        "java.lang.Long" => Primitive::Long,
        "java.lang.Float" => Primitive::Float,
        "java.lang.Double" => Primitive::Double,
        _ => return None,
    })
}
