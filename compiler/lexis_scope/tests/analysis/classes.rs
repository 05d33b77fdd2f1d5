//! Classes: the double name binding, heritage, and member scopes.

use lexis_ir::ast::{MethodKind, VarKind};
use lexis_ir::{AstBuilder, StringInterner};
use lexis_scope::{DefinitionKind, Namespace, ScopeKind};
use pretty_assertions::assert_eq;

use crate::common::script;

#[test]
fn declaration_binds_outside_and_inside() {
    // class A { m() { A; } }
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let id = b.ident("A");
    let key = b.ident("m");
    let a_use = b.ident("A");
    let method = b.method(key, MethodKind::Method, b.func(None, [], [b.expr_stmt(a_use)]));
    let class = b.class_decl(b.class(Some(id), None, [method]));
    let a = script(b, vec![class]);

    let outer = a.global_var("A");
    let class_scope = a.scopes.acquire_id(class, false).unwrap();
    let inner = a.var_in(class_scope, "A");
    assert_ne!(outer, inner);
    assert_eq!(a.variable(outer).namespace(), Namespace::all());
    assert_eq!(a.variable(inner).defs()[0].kind, DefinitionKind::ClassName);
    assert_eq!(a.reference_at(a_use).resolved(), Some(inner));
    assert!(a.scopes.is_strict(class_scope));
    assert!(!a.scopes.is_strict(a.scopes.global_scope_id()));
    assert_eq!(a.scopes.declared_variables(class), &[outer, inner]);
}

#[test]
fn inner_class_name_follows_the_outer_binding() {
    // class C {} C; class D {}
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let c = b.class_decl(b.class(Some(b.ident("C")), None, []));
    let c_use = b.expr_stmt(b.ident("C"));
    let d = b.class_decl(b.class(Some(b.ident("D")), None, []));
    let a = script(b, vec![c, c_use, d]);

    let c_inner = a.var_in(a.scopes.acquire_id(c, false).unwrap(), "C");
    let d_inner = a.var_in(a.scopes.acquire_id(d, false).unwrap(), "D");
    assert_eq!(a.reads_of(c_inner), 0);
    assert_eq!(a.scopes.unused_variables(), vec![a.global_var("D"), d_inner]);
}

#[test]
fn expression_name_is_only_visible_inside() {
    // const C = class D {};
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let c = b.ident("C");
    let d = b.ident("D");
    let class = b.class_expr(b.class(Some(d), None, []));
    let decl = b.var_decl(VarKind::Const, c, Some(class));
    let a = script(b, vec![decl]);

    let class_scope = a.only_scope(ScopeKind::Class);
    assert_eq!(a.names_in(a.scopes.global_scope_id()), vec!["C"]);
    assert_eq!(a.names_in(class_scope), vec!["D"]);
}

#[test]
fn heritage_is_read_from_the_class_scope() {
    // class A {} class B extends A {}
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let first = b.class_decl(b.class(Some(b.ident("A")), None, []));
    let b_id = b.ident("B");
    let super_class = b.ident("A");
    let second = b.class_decl(b.class(Some(b_id), Some(super_class), []));
    let a = script(b, vec![first, second]);

    let reference = a.reference_at(super_class);
    assert_eq!(reference.resolved(), Some(a.global_var("A")));
    assert_eq!(reference.from(), a.scopes.acquire_id(second, false).unwrap());
    assert!(reference.early().is_none());
}

#[test]
fn field_initializers_get_their_own_variable_scope() {
    // class A { x = 1; y = z; }
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let id = b.ident("A");
    let x = b.class_property(b.ident("x"), Some(b.num(1.0)));
    let y_key = b.ident("y");
    let z = b.ident("z");
    let y = b.class_property(y_key, Some(z));
    let class = b.class_decl(b.class(Some(id), None, [x, y]));
    let a = script(b, vec![class]);

    let fields = a.scopes_of(ScopeKind::ClassFieldInitializer);
    assert_eq!(fields.len(), 2);
    let field = a.scopes.acquire_id(z, false).unwrap();
    assert_eq!(field, fields[1]);
    assert_eq!(a.scope(field).variable_scope(), field);
    assert_eq!(a.reference_at(z).from(), field);
    assert!(a.references_at(y_key).is_empty());
    assert_eq!(a.unresolved(), vec!["z"]);
}

#[test]
fn static_blocks_hold_their_own_vars() {
    // class A { static { var v; } }
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let id = b.ident("A");
    let block = b.static_block([b.var_decl(VarKind::Var, b.ident("v"), None)]);
    let class = b.class_decl(b.class(Some(id), None, [block]));
    let a = script(b, vec![class]);

    let scope = a.scopes.acquire_id(block, false).unwrap();
    assert_eq!(a.scope(scope).kind(), ScopeKind::ClassStaticBlock);
    assert_eq!(a.names_in(scope), vec!["v"]);
    assert_eq!(a.scope(scope).variable_scope(), scope);
    assert!(a.vars_in(a.scopes.global_scope_id(), "v").is_empty());
}

#[test]
fn computed_keys_are_read() {
    // const k = "m"; class A { [k]() {} }
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let decl = b.var_decl(VarKind::Const, b.ident("k"), Some(b.str_lit("m")));
    let id = b.ident("A");
    let key = b.ident("k");
    let value = b.function_expr(b.func(None, [], []));
    let method = b.node(lexis_ir::NodeKind::MethodDefinition {
        key,
        value,
        kind: MethodKind::Method,
        computed: true,
        is_static: false,
        is_abstract: false,
        decorators: lexis_ir::NodeRange::EMPTY,
    });
    let class = b.class_decl(b.class(Some(id), None, [method]));
    let a = script(b, vec![decl, class]);

    assert_eq!(a.reference_at(key).resolved(), Some(a.global_var("k")));
}
