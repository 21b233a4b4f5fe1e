//! Tree builders shared by the integration tests.

#![allow(dead_code)]

use std::cell::Cell;

use valvar_infer::arena::Arena;
use valvar_infer::ast::{
    Declaration, DeclarationScope, Expr, ExprKind, ForHeader, ForeachHeader, Literal, LocalContext,
    LocalVariable, NodeId, Parameter, ParameterOwner, Span, TypeArg, TypeRef,
};
use valvar_infer::interner;
use valvar_infer::typechecker::TableModel;

/// Allocates nodes into an arena, numbering them as it goes.
pub struct Tree<'a> {
    arena: &'a Arena,
    next: Cell<u32>,
}

impl<'a> Tree<'a> {
    pub fn new(arena: &'a Arena) -> Self {
        Tree { arena, next: Cell::new(1) }
    }

    fn id(&self) -> NodeId {
        let id = self.next.get();
        self.next.set(id + 1);
        NodeId(id)
    }

    fn span(&self, id: NodeId) -> Span {
        Span::new(id.0 as usize * 10, id.0 as usize * 10 + 5)
    }

    // ===== Types =====

    pub fn ty(&self, name: &str) -> &'a TypeRef<'a> {
        let id = self.id();
        self.arena.alloc(TypeRef::simple(id, self.span(id), interner::intern(name)))
    }

    pub fn ty_args(&self, name: &str, args: &[&'a TypeRef<'a>]) -> &'a TypeRef<'a> {
        let id = self.id();
        let args = self.arena.alloc_iter(args.iter().map(|t| TypeArg::Type(*t)));
        self.arena.alloc(TypeRef { id, span: self.span(id), name: interner::intern(name), args, dims: 0 })
    }

    pub fn diamond(&self, name: &str) -> &'a TypeRef<'a> {
        let id = self.id();
        let args = self.arena.alloc_slice(&[TypeArg::Diamond]);
        self.arena.alloc(TypeRef { id, span: self.span(id), name: interner::intern(name), args, dims: 0 })
    }

    // ===== Expressions =====

    pub fn expr(&self, kind: ExprKind<'a>) -> &'a Expr<'a> {
        let id = self.id();
        self.arena.alloc(Expr::new(id, self.span(id), kind))
    }

    pub fn opaque(&self) -> &'a Expr<'a> {
        self.expr(ExprKind::Opaque)
    }

    pub fn int(&self, value: i64) -> &'a Expr<'a> {
        self.expr(ExprKind::Literal(Literal::Int(value)))
    }

    pub fn double(&self, value: f64) -> &'a Expr<'a> {
        self.expr(ExprKind::Literal(Literal::Double(value)))
    }

    pub fn string(&self, value: &str) -> &'a Expr<'a> {
        self.expr(ExprKind::Literal(Literal::Str(interner::intern(value))))
    }

    pub fn null(&self) -> &'a Expr<'a> {
        self.expr(ExprKind::Literal(Literal::Null))
    }

    pub fn ident(&self, name: &str) -> &'a Expr<'a> {
        self.expr(ExprKind::Ident(interner::intern(name)))
    }

    pub fn lambda(&self) -> &'a Expr<'a> {
        self.expr(ExprKind::Lambda)
    }

    pub fn array_init(&self, elems: &[&'a Expr<'a>]) -> &'a Expr<'a> {
        let elems = self.arena.alloc_slice(elems);
        self.expr(ExprKind::ArrayInit(elems))
    }

    pub fn conditional(&self, then_branch: Option<&'a Expr<'a>>, else_branch: Option<&'a Expr<'a>>) -> &'a Expr<'a> {
        let cond = self.expr(ExprKind::Literal(Literal::Bool(true)));
        self.expr(ExprKind::Conditional { cond, then_branch, else_branch })
    }

    pub fn new_object(&self, class: &'a TypeRef<'a>) -> &'a Expr<'a> {
        self.expr(ExprKind::New { class: Some(class) })
    }

    // ===== Declarations =====

    pub fn local(&self, name: &str, ty: &'a TypeRef<'a>, init: Option<&'a Expr<'a>>) -> &'a Declaration<'a> {
        self.local_in(LocalContext::Block, name, ty, init)
    }

    pub fn for_init_local(&self, name: &str, ty: &'a TypeRef<'a>, init: Option<&'a Expr<'a>>) -> &'a Declaration<'a> {
        self.local_in(LocalContext::ForInit, name, ty, init)
    }

    fn local_in(
        &self,
        context: LocalContext,
        name: &str,
        ty: &'a TypeRef<'a>,
        init: Option<&'a Expr<'a>>,
    ) -> &'a Declaration<'a> {
        let id = self.id();
        self.arena.alloc(Declaration::LocalVariable(LocalVariable {
            id,
            span: self.span(id),
            name: interner::intern(name),
            type_ref: Some(ty),
            initializer: init,
            context,
        }))
    }

    pub fn foreach_param(&self, name: &str, ty: &'a TypeRef<'a>, iterated: Option<&'a Expr<'a>>) -> &'a Declaration<'a> {
        let id = self.id();
        let header = self.arena.alloc(ForeachHeader { id, span: self.span(id), iterated });
        self.param(name, ty, DeclarationScope::Foreach(header))
    }

    pub fn for_param(&self, name: &str, ty: &'a TypeRef<'a>) -> &'a Declaration<'a> {
        let id = self.id();
        let header = self.arena.alloc(ForHeader { id, span: self.span(id) });
        self.param(name, ty, DeclarationScope::For(header))
    }

    pub fn owned_param(&self, name: &str, ty: &'a TypeRef<'a>, owner: ParameterOwner) -> &'a Declaration<'a> {
        self.param(name, ty, DeclarationScope::Other(owner))
    }

    fn param(&self, name: &str, ty: &'a TypeRef<'a>, scope: DeclarationScope<'a>) -> &'a Declaration<'a> {
        let id = self.id();
        self.arena.alloc(Declaration::Parameter(Parameter {
            id,
            span: self.span(id),
            name: interner::intern(name),
            type_ref: Some(ty),
            scope,
        }))
    }
}

/// JDK basics plus the placeholder imports a source file would carry.
pub fn model<'a>() -> TableModel<'a> {
    let mut model = TableModel::with_jdk_basics();
    model.import("val", "lombok.val");
    model.import("var", "lombok.var");
    model
}
