//! The type namespace: aliases, interfaces, type parameters, and the scopes
//! opened by conditional, mapped, and function types.

use lexis_ir::ast::{TsKeyword, VarKind};
use lexis_ir::{AstBuilder, NodeKind, StringInterner};
use lexis_scope::{DefinitionKind, Namespace, ScopeKind};
use pretty_assertions::assert_eq;

use crate::common::{script, type_ref};

#[test]
fn values_and_types_share_a_name_without_clashing() {
    // type T = string; const T = 1; let x: T = T;
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let alias_id = b.ident("T");
    let alias = b.type_alias(alias_id, None, b.keyword(TsKeyword::String));
    let const_decl = b.var_decl(VarKind::Const, b.ident("T"), Some(b.num(1.0)));
    let x = b.ident("x");
    let (t_type, annotation) = type_ref(&b, "T");
    b.annotate(x, annotation);
    let t_value = b.ident("T");
    let let_decl = b.var_decl(VarKind::Let, x, Some(t_value));
    let a = script(b, vec![alias, const_decl, let_decl]);

    let globals = a.vars_in(a.scopes.global_scope_id(), "T");
    assert_eq!(globals.len(), 2);
    let (ty, value) = (globals[0], globals[1]);
    assert_eq!(a.variable(ty).namespace(), Namespace::TYPE);
    assert_eq!(a.variable(value).namespace(), Namespace::VALUE);

    let type_use = a.reference_at(t_type);
    assert!(type_use.is_type_reference());
    assert!(!type_use.is_value_reference());
    assert_eq!(type_use.resolved(), Some(ty));
    assert_eq!(a.reference_at(t_value).resolved(), Some(value));
    assert_eq!(a.scopes.declared_variables(alias), &[ty]);
}

#[test]
fn interfaces_merge_with_classes() {
    // class C {} interface C {}
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let class = b.class_decl(b.class(Some(b.ident("C")), None, []));
    let iface = b.interface(b.ident("C"), None, []);
    let a = script(b, vec![class, iface]);

    let globals = a.vars_in(a.scopes.global_scope_id(), "C");
    assert_eq!(globals.len(), 1);
    let kinds: Vec<_> = a.variable(globals[0]).defs().iter().map(|d| d.kind).collect();
    assert_eq!(kinds, vec![DefinitionKind::ClassName, DefinitionKind::TypeAlias]);
    assert_eq!(a.variable(globals[0]).namespace(), Namespace::all());
}

#[test]
fn type_parameters_open_a_scope() {
    // type Box<T> = T; type Plain = Box;
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let box_id = b.ident("Box");
    let param = b.type_param("T");
    let params = b.type_params([param]);
    let (t_use, body) = type_ref(&b, "T");
    let boxed = b.type_alias(box_id, Some(params), body);
    let plain_id = b.ident("Plain");
    let (box_use, plain_body) = type_ref(&b, "Box");
    let plain = b.type_alias(plain_id, None, plain_body);
    let a = script(b, vec![boxed, plain]);

    let alias_scope = a.only_scope(ScopeKind::TypeAlias);
    assert_eq!(a.scopes.acquire_id(boxed, false), Some(alias_scope));
    assert!(a.scopes.acquire(plain, false).is_none());
    let t = a.var_in(alias_scope, "T");
    assert_eq!(a.variable(t).defs()[0].node, param);
    assert_eq!(a.reference_at(t_use).resolved(), Some(t));
    assert_eq!(a.reference_at(box_use).resolved(), Some(a.global_var("Box")));
}

#[test]
fn typeof_reads_the_value_namespace() {
    // let v = 1; type V = typeof v;
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let decl = b.var_decl(VarKind::Let, b.ident("v"), Some(b.num(1.0)));
    let v_id = b.ident("V");
    let v_use = b.ident("v");
    let query = b.type_query(v_use);
    let alias = b.type_alias(v_id, None, query);
    let a = script(b, vec![decl, alias]);

    let reference = a.reference_at(v_use);
    assert!(reference.is_value_reference());
    assert_eq!(reference.resolved(), Some(a.global_var("v")));
    assert_eq!(a.reads_of(a.global_var("v")), 1);
}

#[test]
fn infer_binds_in_the_true_branch_only() {
    // type U<T> = T extends Array<infer E> ? E : E;
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let u = b.ident("U");
    let params = b.type_params([b.type_param("T")]);
    let (t_use, check_type) = type_ref(&b, "T");
    let array = b.ident("Array");
    let e = b.ident("E");
    let infer_param = b.node(NodeKind::TsTypeParameter {
        name: e,
        constraint: None,
        default: None,
    });
    let infer = b.node(NodeKind::TsInferType {
        type_parameter: infer_param,
    });
    let args = b.type_args([infer]);
    let extends_type = b.node(NodeKind::TsTypeReference {
        type_name: array,
        type_arguments: Some(args),
    });
    let (e_true, true_type) = type_ref(&b, "E");
    let (e_false, false_type) = type_ref(&b, "E");
    let conditional = b.node(NodeKind::TsConditionalType {
        check_type,
        extends_type,
        true_type,
        false_type,
    });
    let alias = b.type_alias(u, Some(params), conditional);
    let a = script(b, vec![alias]);

    let cond = a.scopes.acquire_id(conditional, false).unwrap();
    assert_eq!(a.scope(cond).kind(), ScopeKind::ConditionalType);
    let e_var = a.var_in(cond, "E");
    assert_eq!(a.variable(e_var).defs()[0].node, infer_param);
    assert_eq!(a.reference_at(e_true).resolved(), Some(e_var));
    assert_eq!(a.reference_at(e_false).resolved(), None);
    assert_eq!(
        a.reference_at(t_use).resolved(),
        Some(a.var_in(a.only_scope(ScopeKind::TypeAlias), "T"))
    );
    assert_eq!(a.unresolved(), vec!["Array", "E"]);
}

#[test]
fn mapped_type_key_is_local() {
    // type M = { [K in Keys]: K };
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let m = b.ident("M");
    let key = b.ident("K");
    let (_, constraint) = type_ref(&b, "Keys");
    let (k_use, value) = type_ref(&b, "K");
    let mapped = b.node(NodeKind::TsMappedType {
        key,
        constraint,
        name_type: None,
        type_annotation: Some(value),
    });
    let alias = b.type_alias(m, None, mapped);
    let a = script(b, vec![alias]);

    let scope = a.scopes.acquire_id(mapped, false).unwrap();
    assert_eq!(a.scope(scope).kind(), ScopeKind::MappedType);
    assert_eq!(a.reference_at(k_use).resolved(), Some(a.var_in(scope, "K")));
    assert_eq!(a.unresolved(), vec!["Keys"]);
}

#[test]
fn function_type_parameters_are_values() {
    // type F = (a: A) => typeof a;
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let f = b.ident("F");
    let param = b.ident("a");
    let (_, annotation) = type_ref(&b, "A");
    b.annotate(param, annotation);
    let a_use = b.ident("a");
    let ret = b.type_query(a_use);
    let fn_type = b.function_type([param], ret);
    let alias = b.type_alias(f, None, fn_type);
    let a = script(b, vec![alias]);

    let scope = a.scopes.acquire_id(fn_type, false).unwrap();
    assert_eq!(a.scope(scope).kind(), ScopeKind::FunctionType);
    let param_var = a.var_in(scope, "a");
    assert_eq!(
        a.variable(param_var).defs()[0].kind,
        DefinitionKind::Parameter { rest: false }
    );
    assert_eq!(a.reference_at(a_use).resolved(), Some(param_var));
    assert_eq!(a.unresolved(), vec!["A"]);
}

#[test]
fn annotations_on_parameters_and_returns_are_type_reads() {
    // interface P {} function f(p: P): P { return p; }
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let iface = b.interface(b.ident("P"), None, []);
    let f = b.ident("f");
    let p = b.ident("p");
    let (param_type, annotation) = type_ref(&b, "P");
    b.annotate(p, annotation);
    let (return_type_name, return_type) = type_ref(&b, "P");
    let p_use = b.ident("p");
    let mut func = b.func(Some(f), [p], [b.return_stmt(Some(p_use))]);
    func.return_type = Some(return_type);
    let decl = b.function_decl(func);
    let a = script(b, vec![iface, decl]);

    let p_type = a.global_var("P");
    assert_eq!(a.reference_at(param_type).resolved(), Some(p_type));
    assert_eq!(a.reference_at(return_type_name).resolved(), Some(p_type));
    assert!(a.reference_at(p_use).is_value_reference());
    assert!(a.unresolved().is_empty());
}
