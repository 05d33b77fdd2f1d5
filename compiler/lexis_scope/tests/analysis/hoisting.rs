//! Early-access flags on references that precede their declaration.

use lexis_ir::ast::{TsKeyword, VarKind};
use lexis_ir::{AstBuilder, NodeId, NodeKind, StringInterner};
use lexis_scope::{AnalyzeOptions, EarlyAccess, HoistingPolicy};
use pretty_assertions::assert_eq;

use crate::common::{analyze_with, script, type_ref};

/// `name; <declaration of name>` under `policy`; returns the flag on the
/// leading use.
fn early_use(
    policy: HoistingPolicy,
    declare: impl FnOnce(&AstBuilder<'_>) -> NodeId,
) -> Option<EarlyAccess> {
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let name = b.ident("x");
    let stmt = b.expr_stmt(name);
    let decl = declare(&b);
    let options = AnalyzeOptions::default().with_hoisting(policy);
    let a = analyze_with(b, vec![stmt, decl], &options);
    let reference = a.reference_at(name);
    assert!(reference.resolved().is_some(), "leading use should still resolve");
    reference.early()
}

fn var_x(b: &AstBuilder<'_>) -> NodeId {
    b.var_decl(VarKind::Var, b.ident("x"), None)
}

fn let_x(b: &AstBuilder<'_>) -> NodeId {
    b.var_decl(VarKind::Let, b.ident("x"), None)
}

fn function_x(b: &AstBuilder<'_>) -> NodeId {
    b.function_decl(b.func(Some(b.ident("x")), [], []))
}

fn class_x(b: &AstBuilder<'_>) -> NodeId {
    b.class_decl(b.class(Some(b.ident("x")), None, []))
}

/// `declare const x: number;`
fn declare_const_x(b: &AstBuilder<'_>) -> NodeId {
    let id = b.ident("x");
    let annotation = b.keyword(TsKeyword::Number);
    b.annotate(id, annotation);
    let declarator = b.declarator(id, None);
    let declarations = b.list([declarator]);
    b.node(NodeKind::VariableDeclaration {
        kind: VarKind::Const,
        declarations,
        declare: true,
    })
}

#[test]
fn default_policy_flags() {
    let policy = HoistingPolicy::default();
    assert_eq!(policy, HoistingPolicy::FunctionsAndTypes);
    assert_eq!(early_use(policy, function_x), None);
    assert_eq!(early_use(policy, var_x), Some(EarlyAccess::BeforeInitialization));
    assert_eq!(early_use(policy, let_x), Some(EarlyAccess::TemporalDeadZone));
    assert_eq!(early_use(policy, class_x), Some(EarlyAccess::TemporalDeadZone));
    assert_eq!(early_use(policy, declare_const_x), None);
}

#[test]
fn functions_policy_flags_ambient_values() {
    let policy = HoistingPolicy::Functions;
    assert_eq!(early_use(policy, function_x), None);
    assert_eq!(
        early_use(policy, declare_const_x),
        Some(EarlyAccess::BeforeTypeDeclaration)
    );
}

#[test]
fn never_policy_flags_functions() {
    let policy = HoistingPolicy::Never;
    assert_eq!(early_use(policy, function_x), Some(EarlyAccess::BeforeInitialization));
    assert_eq!(early_use(policy, let_x), Some(EarlyAccess::TemporalDeadZone));
}

#[test]
fn all_policy_flags_nothing() {
    let policy = HoistingPolicy::All;
    for declare in [var_x, let_x, function_x, class_x, declare_const_x] {
        assert_eq!(early_use(policy, declare), None);
    }
}

#[test]
fn type_use_before_alias() {
    // let v: T; type T = string;
    let build = |policy| {
        let interner = StringInterner::new();
        let b = AstBuilder::new(&interner);
        let v = b.ident("v");
        let (t_use, annotation) = type_ref(&b, "T");
        b.annotate(v, annotation);
        let decl = b.var_decl(VarKind::Let, v, None);
        let alias = b.type_alias(b.ident("T"), None, b.keyword(TsKeyword::String));
        let options = AnalyzeOptions::default().with_hoisting(policy);
        let a = analyze_with(b, vec![decl, alias], &options);
        a.reference_at(t_use).early()
    };
    assert_eq!(build(HoistingPolicy::FunctionsAndTypes), None);
    assert_eq!(
        build(HoistingPolicy::Functions),
        Some(EarlyAccess::BeforeTypeDeclaration)
    );
}

#[test]
fn own_initializer_is_in_the_dead_zone() {
    // const a = a;  let b = 1; b;
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let a_id = b.ident("a");
    let a_use = b.ident("a");
    let a_decl = b.var_decl(VarKind::Const, a_id, Some(a_use));
    let b_decl = b.var_decl(VarKind::Let, b.ident("b"), Some(b.num(1.0)));
    let b_use = b.ident("b");
    let b_stmt = b.expr_stmt(b_use);
    let a = script(b, vec![a_decl, b_decl, b_stmt]);

    assert_eq!(a.reference_at(a_use).early(), Some(EarlyAccess::TemporalDeadZone));
    assert_eq!(a.reference_at(b_use).early(), None);
    // The initializing write itself is not early.
    assert_eq!(a.reference_at(a_id).early(), None);
}

#[test]
fn uses_from_nested_scopes_are_not_flagged() {
    // function g() { x; } let x;
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let g = b.ident("g");
    let x_use = b.ident("x");
    let func = b.function_decl(b.func(Some(g), [], [b.expr_stmt(x_use)]));
    let decl = b.var_decl(VarKind::Let, b.ident("x"), None);
    let a = script(b, vec![func, decl]);

    let reference = a.reference_at(x_use);
    assert_eq!(reference.resolved(), Some(a.global_var("x")));
    assert_eq!(reference.early(), None);
}

#[test]
fn loop_head_source_cannot_read_the_head_binding() {
    // for (const x of x) { x; }
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let x = b.ident("x");
    let left = b.var_decl(VarKind::Const, x, None);
    let source = b.ident("x");
    let body_use = b.ident("x");
    let body = b.block([b.expr_stmt(body_use)]);
    let stmt = b.for_of(left, source, body);
    let a = script(b, vec![stmt]);

    let source_ref = a.reference_at(source);
    assert_eq!(source_ref.resolved(), a.reference_at(body_use).resolved());
    assert_eq!(source_ref.early(), Some(EarlyAccess::TemporalDeadZone));
    assert_eq!(a.reference_at(body_use).early(), None);
    // The per-iteration write is not an early access.
    assert_eq!(a.reference_at(x).early(), None);
}
