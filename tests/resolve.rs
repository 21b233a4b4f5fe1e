//! Resolving the concrete type behind `val` and `var`.

mod common;

use common::{model, Tree};
use valvar_infer::arena::Arena;
use valvar_infer::ast::ParameterOwner;
use valvar_infer::typechecker::{TableModel, Type};
use valvar_infer::valvar::{is_val, is_val_or_var, resolve_inferred_type, unify_branch_types};
use valvar_infer::ast::Declaration;

fn object() -> Type {
    Type::class("java.lang.Object")
}

fn string() -> Type {
    Type::class("java.lang.String")
}

fn resolved(model: &TableModel<'_>, decl: &Declaration<'_>) -> Type {
    resolve_inferred_type(model, decl).unwrap_or_else(|| panic!("no type for {:?}", decl))
}

// ===== Entry rule =====

#[test]
fn explicit_declarations_keep_their_type() {
    let arena = Arena::new();
    let t = Tree::new(&arena);
    let model = model();
    let decl = t.local("n", t.ty("int"), Some(t.int(1)));
    assert_eq!(resolve_inferred_type(&model, decl), None);
}

#[test]
fn non_foreach_parameters_are_not_resolved() {
    let arena = Arena::new();
    let t = Tree::new(&arena);
    let model = model();
    assert_eq!(resolve_inferred_type(&model, t.for_param("i", t.ty("var"))), None);
    assert_eq!(
        resolve_inferred_type(&model, t.owned_param("p", t.ty("val"), ParameterOwner::Method)),
        None
    );
}

// ===== Local variables =====

#[test]
fn literal_initializers() {
    let arena = Arena::new();
    let t = Tree::new(&arena);
    let model = model();
    assert_eq!(resolved(&model, t.local("a", t.ty("val"), Some(t.int(1)))), Type::int());
    assert_eq!(resolved(&model, t.local("b", t.ty("var"), Some(t.string("s")))), string());
    assert_eq!(
        resolved(&model, t.local("c", t.ty("lombok.experimental.var"), Some(t.double(1.5)))),
        Type::double()
    );
}

#[test]
fn initializer_type_comes_from_the_model() {
    let arena = Arena::new();
    let t = Tree::new(&arena);
    let mut model = model();
    let call = t.opaque();
    let list = Type::generic("java.util.List", vec![string()]);
    model.set_expr_type(call.id, list.clone());
    assert_eq!(resolved(&model, t.local("xs", t.ty("val"), Some(call))), list);
}

#[test]
fn unresolvable_initializers_fall_back_to_object() {
    let arena = Arena::new();
    let t = Tree::new(&arena);
    let model = model();
    let decls = [
        t.local("a", t.ty("val"), None),
        t.local("b", t.ty("val"), Some(t.array_init(&[t.int(1)]))),
        t.local("c", t.ty("var"), Some(t.lambda())),
        t.local("d", t.ty("val"), Some(t.opaque())),
    ];
    for decl in decls {
        assert_eq!(resolved(&model, decl), object());
    }
}

#[test]
fn resolution_is_idempotent() {
    let arena = Arena::new();
    let t = Tree::new(&arena);
    let model = model();
    let decl = t.local("s", t.ty("val"), Some(t.conditional(Some(t.null()), Some(t.string("x")))));
    let first = resolve_inferred_type(&model, decl);
    let second = resolve_inferred_type(&model, decl);
    assert_eq!(first, Some(string()));
    assert_eq!(first, second);
}

// ===== Conditional initializers =====

#[test]
fn conditional_picks_the_wider_branch() {
    let arena = Arena::new();
    let t = Tree::new(&arena);
    let mut model = model();
    let integer = Type::class("java.lang.Integer");
    let double = Type::class("java.lang.Double");
    model.assume_assignable(integer.clone(), double.clone());

    let (a, b) = (t.opaque(), t.opaque());
    model.set_expr_type(a.id, integer.clone());
    model.set_expr_type(b.id, double.clone());
    let forward = t.local("x", t.ty("val"), Some(t.conditional(Some(a), Some(b))));
    let backward = t.local("y", t.ty("val"), Some(t.conditional(Some(b), Some(a))));

    assert_eq!(resolved(&model, forward), double);
    assert_eq!(resolved(&model, backward), double);
}

#[test]
fn conditional_with_primitive_widening() {
    let arena = Arena::new();
    let t = Tree::new(&arena);
    let model = model();
    let decl = t.local("n", t.ty("var"), Some(t.conditional(Some(t.int(1)), Some(t.double(2.0)))));
    assert_eq!(resolved(&model, decl), Type::double());
}

#[test]
fn conditional_prefers_then_when_unrelated() {
    let arena = Arena::new();
    let t = Tree::new(&arena);
    let mut model = model();
    let other = t.opaque();
    model.set_expr_type(other.id, Type::class("java.lang.Integer"));
    let decl = t.local("x", t.ty("val"), Some(t.conditional(Some(t.string("s")), Some(other))));
    assert_eq!(resolved(&model, decl), string());
}

#[test]
fn conditional_with_one_typed_branch() {
    let arena = Arena::new();
    let t = Tree::new(&arena);
    let model = model();
    let then_only = t.local("a", t.ty("val"), Some(t.conditional(Some(t.string("s")), Some(t.opaque()))));
    let else_only = t.local("b", t.ty("val"), Some(t.conditional(None, Some(t.int(3)))));
    assert_eq!(resolved(&model, then_only), string());
    assert_eq!(resolved(&model, else_only), Type::int());
}

#[test]
fn conditional_without_typed_branches_falls_back_to_object() {
    let arena = Arena::new();
    let t = Tree::new(&arena);
    let model = model();
    let untyped = t.local("a", t.ty("val"), Some(t.conditional(Some(t.opaque()), Some(t.opaque()))));
    let missing = t.local("b", t.ty("var"), Some(t.conditional(None, None)));
    assert_eq!(resolved(&model, untyped), object());
    assert_eq!(resolved(&model, missing), object());
}

#[test]
fn nested_conditional_in_branch_is_typed() {
    let arena = Arena::new();
    let t = Tree::new(&arena);
    let model = model();
    let inner = t.conditional(Some(t.string("a")), Some(t.string("b")));
    let decl = t.local("x", t.ty("val"), Some(t.conditional(Some(inner), Some(t.null()))));
    assert_eq!(resolved(&model, decl), string());
}

#[test]
fn unify_branch_types_tie_break() {
    let model = model();
    let number = Type::class("java.lang.Number");
    let integer = Type::class("java.lang.Integer");
    assert_eq!(unify_branch_types(&model, None, None), None);
    assert_eq!(unify_branch_types(&model, Some(integer.clone()), None), Some(integer.clone()));
    assert_eq!(
        unify_branch_types(&model, Some(integer.clone()), Some(number.clone())),
        Some(number.clone())
    );
    assert_eq!(
        unify_branch_types(&model, Some(number.clone()), Some(integer)),
        Some(number.clone())
    );
    assert_eq!(unify_branch_types(&model, Some(number.clone()), Some(number.clone())), Some(number));
}

// ===== Diamond constructions =====

#[test]
fn diamond_construction_is_erased() {
    let arena = Arena::new();
    let t = Tree::new(&arena);
    let mut model = model();
    model.declare_class("com.example.Foo", &["T"], vec![object()]);
    model.import("Foo", "com.example.Foo");

    let decl = t.local("x", t.ty("val"), Some(t.new_object(t.diamond("Foo"))));
    assert_eq!(resolved(&model, decl), Type::class("com.example.Foo"));
}

#[test]
fn explicit_type_arguments_are_kept() {
    let arena = Arena::new();
    let t = Tree::new(&arena);
    let model = model();
    let class = t.ty_args("java.util.ArrayList", &[t.ty("String")]);
    let decl = t.local("xs", t.ty("var"), Some(t.new_object(class)));
    assert_eq!(resolved(&model, decl), Type::generic("java.util.ArrayList", vec![string()]));
}

#[test]
fn diamond_on_unknown_class_falls_back_to_object() {
    let arena = Arena::new();
    let t = Tree::new(&arena);
    let model = model();
    let decl = t.local("x", t.ty("val"), Some(t.new_object(t.diamond("Missing"))));
    assert_eq!(resolved(&model, decl), object());
}

// ===== Foreach parameters =====

#[test]
fn foreach_over_generic_collection() {
    let arena = Arena::new();
    let t = Tree::new(&arena);
    let mut model = model();
    let names = t.opaque();
    model.set_expr_type(names.id, Type::generic("java.util.ArrayList", vec![string()]));
    let decl = t.foreach_param("name", t.ty("val"), Some(names));
    assert_eq!(resolved(&model, decl), string());
}

#[test]
fn foreach_over_array() {
    let arena = Arena::new();
    let t = Tree::new(&arena);
    let mut model = model();
    let numbers = t.opaque();
    model.set_expr_type(numbers.id, Type::array(Type::int()));
    let decl = t.foreach_param("n", t.ty("var"), Some(numbers));
    assert_eq!(resolved(&model, decl), Type::int());
}

#[test]
fn foreach_over_local_variable() {
    let arena = Arena::new();
    let t = Tree::new(&arena);
    let mut model = model();
    let list = t.local(
        "list",
        t.ty_args("java.util.List", &[t.ty("Integer")]),
        Some(t.opaque()),
    );
    model.bind_local(list);
    let decl = t.foreach_param("n", t.ty("val"), Some(t.ident("list")));
    assert_eq!(resolved(&model, decl), Type::class("java.lang.Integer"));
}

#[test]
fn foreach_over_conditional() {
    let arena = Arena::new();
    let t = Tree::new(&arena);
    let mut model = model();
    let (xs, ys) = (t.opaque(), t.opaque());
    let list = Type::generic("java.util.List", vec![string()]);
    model.set_expr_type(xs.id, list.clone());
    model.set_expr_type(ys.id, list);
    let decl = t.foreach_param("e", t.ty("val"), Some(t.conditional(Some(xs), Some(ys))));
    assert_eq!(resolved(&model, decl), string());
}

#[test]
fn foreach_falls_back_to_object() {
    let arena = Arena::new();
    let t = Tree::new(&arena);
    let mut model = model();
    let raw = t.opaque();
    model.set_expr_type(raw.id, Type::class("java.util.List"));
    let decls = [
        t.foreach_param("a", t.ty("val"), Some(raw)),
        t.foreach_param("b", t.ty("val"), None),
        t.foreach_param("c", t.ty("val"), Some(t.opaque())),
        t.foreach_param("d", t.ty("val"), Some(t.string("not iterable"))),
    ];
    for decl in decls {
        assert_eq!(resolved(&model, decl), object());
    }
}

// ===== Helpers =====

#[test]
fn is_val_requires_an_initializer() {
    let arena = Arena::new();
    let t = Tree::new(&arena);
    let model = model();
    let cases = [
        (t.local("a", t.ty("val"), Some(t.int(1))), true, true),
        (t.local("b", t.ty("val"), None), false, false),
        (t.local("c", t.ty("var"), Some(t.int(1))), false, true),
        (t.local("d", t.ty("int"), Some(t.int(1))), false, false),
    ];
    for (decl, val, val_or_var) in cases {
        let Declaration::LocalVariable(local) = decl else {
            panic!("expected a local variable");
        };
        assert_eq!(is_val(&model, local), val);
        assert_eq!(is_val_or_var(&model, local), val_or_var);
    }
}
