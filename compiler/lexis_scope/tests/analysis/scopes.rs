//! Scope tree shape and the query API.

use lexis_ir::ast::VarKind;
use lexis_ir::{AstBuilder, StringInterner};
use lexis_scope::{AnalyzeOptions, DefinitionKind, Namespace, ScopeKind};
use pretty_assertions::assert_eq;

use crate::common::{analyze_with, script};

// =============================================================================
// Tree shape
// =============================================================================

#[test]
fn block_reads_outer_let() {
    // let x = 1; { let y = x; }
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let x = b.ident("x");
    let one = b.num(1.0);
    let decl_x = b.var_decl(VarKind::Let, x, Some(one));
    let y = b.ident("y");
    let x_use = b.ident("x");
    let decl_y = b.var_decl(VarKind::Let, y, Some(x_use));
    let block = b.block([decl_y]);
    let a = script(b, vec![decl_x, block]);

    let global = a.scopes.global_scope_id();
    let block_scope = a.scopes.acquire_id(block, false).unwrap();
    assert_eq!(a.scopes.scopes().len(), 2);
    assert_eq!(a.scope(block_scope).kind(), ScopeKind::Block);
    assert_eq!(a.scope(block_scope).parent(), Some(global));
    assert_eq!(a.scope(global).children(), &[block_scope]);
    assert_eq!(a.scope(global).parent(), None);

    let x_var = a.global_var("x");
    assert_eq!(
        a.variable(x_var).defs()[0].kind,
        DefinitionKind::Variable(VarKind::Let)
    );
    assert_eq!(a.scopes.declared_variables(decl_x), &[x_var]);
    assert_eq!(a.names_in(block_scope), vec!["y"]);

    let write = a.reference_at(x);
    assert!(write.is_write_only());
    assert!(write.init());
    assert_eq!(write.write_expr(), Some(one));

    let read = a.reference_at(x_use);
    assert!(read.is_read_only());
    assert_eq!(read.resolved(), Some(x_var));
    assert_eq!(read.from(), block_scope);
    assert!(a
        .scope(block_scope)
        .through()
        .iter()
        .any(|&r| a.scopes.reference(r).identifier() == x_use));
    assert_eq!(a.variable(x_var).references().len(), 2);
    assert!(a.unresolved().is_empty());
}

#[test]
fn undeclared_names_flow_through_to_global() {
    // function f() { foo(bar); }
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let f = b.ident("f");
    let foo = b.ident("foo");
    let bar = b.ident("bar");
    let call = b.expr_stmt(b.call(foo, [bar]));
    let func = b.function_decl(b.func(Some(f), [], [call]));
    let a = script(b, vec![func]);

    assert_eq!(a.unresolved(), vec!["bar", "foo"]);
    let function = a.only_scope(ScopeKind::Function);
    assert_eq!(a.scope(function).through().len(), 2);
    assert_eq!(a.scope(function).references().len(), 2);
    assert!(a.scope(a.scopes.global_scope_id()).references().is_empty());
}

#[test]
fn var_hoists_out_of_blocks_and_let_stays() {
    // function f() { { var a; let b; } }
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let f = b.ident("f");
    let var_a = b.var_decl(VarKind::Var, b.ident("a"), None);
    let let_b = b.var_decl(VarKind::Let, b.ident("b"), None);
    let block = b.block([var_a, let_b]);
    let func = b.function_decl(b.func(Some(f), [], [block]));
    let a = script(b, vec![func]);

    let function = a.scopes.acquire_id(func, false).unwrap();
    let block_scope = a.scopes.acquire_id(block, false).unwrap();
    assert_eq!(a.names_in(function), vec!["arguments", "a"]);
    assert_eq!(a.names_in(block_scope), vec!["b"]);
    assert_eq!(a.scope(block_scope).variable_scope(), function);
    assert_eq!(a.names_in(a.scopes.global_scope_id()), vec!["f"]);
}

#[test]
fn for_let_gets_a_head_scope() {
    // for (let i = 0; ; ) { i; }  for (var j = 0; ; ) {}
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let i = b.ident("i");
    let init = b.var_decl(VarKind::Let, i, Some(b.num(0.0)));
    let i_use = b.ident("i");
    let body = b.block([b.expr_stmt(i_use)]);
    let for_let = b.for_stmt(Some(init), None, None, body);
    let init_var = b.var_decl(VarKind::Var, b.ident("j"), Some(b.num(0.0)));
    let for_var = b.for_stmt(Some(init_var), None, None, b.block([]));
    let a = script(b, vec![for_let, for_var]);

    let head = a.scopes.acquire_id(for_let, false).unwrap();
    assert_eq!(a.scope(head).kind(), ScopeKind::For);
    assert_eq!(a.names_in(head), vec!["i"]);
    assert_eq!(a.reference_at(i_use).resolved(), Some(a.var_in(head, "i")));
    assert!(a.scopes.acquire(for_var, false).is_none());
    assert_eq!(a.names_in(a.scopes.global_scope_id()), vec!["j"]);
    assert_eq!(a.scopes_of(ScopeKind::For).len(), 1);
}

#[test]
fn for_of_writes_each_iteration_binding() {
    // for (const [k, v] of entries) {}
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let k = b.ident("k");
    let v = b.ident("v");
    let pattern = b.array_pattern([k, v]);
    let left = b.var_decl(VarKind::Const, pattern, None);
    let entries = b.ident("entries");
    let stmt = b.for_of(left, entries, b.block([]));
    let a = script(b, vec![stmt]);

    let head = a.only_scope(ScopeKind::For);
    assert_eq!(a.names_in(head), vec!["k", "v"]);
    let write = a.reference_at(k);
    assert!(write.is_write());
    assert_eq!(write.write_expr(), Some(entries));
    assert_eq!(a.reference_at(entries).from(), head);
    assert_eq!(a.unresolved(), vec!["entries"]);
}

#[test]
fn catch_switch_and_with_scopes() {
    // let a; try {} catch (e) { e; } switch (a) { case 1: let c; } with (o) { a; }
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let decl_a = b.var_decl(VarKind::Let, b.ident("a"), None);
    let try_block = b.block([]);
    let e = b.ident("e");
    let e_use = b.ident("e");
    let handler = b.block([b.expr_stmt(e_use)]);
    let try_stmt = b.try_catch(try_block, Some(e), handler);
    let disc = b.ident("a");
    let case = b.case(Some(b.num(1.0)), [b.var_decl(VarKind::Let, b.ident("c"), None)]);
    let switch = b.switch(disc, [case]);
    let object = b.ident("o");
    let a_in_with = b.ident("a");
    let with = b.with_stmt(object, b.block([b.expr_stmt(a_in_with)]));
    let a = script(b, vec![decl_a, try_stmt, switch, with]);

    let catch = a.only_scope(ScopeKind::Catch);
    let e_var = a.var_in(catch, "e");
    assert_eq!(a.variable(e_var).defs()[0].kind, DefinitionKind::CatchClause);
    assert_eq!(a.reference_at(e_use).resolved(), Some(e_var));

    let switch_scope = a.scopes.acquire_id(switch, false).unwrap();
    assert_eq!(a.names_in(switch_scope), vec!["c"]);
    let a_var = a.global_var("a");
    assert_eq!(a.reference_at(disc).from(), a.scopes.global_scope_id());
    assert_eq!(a.reference_at(disc).resolved(), Some(a_var));

    // Nothing binds in `with`; the enclosing declaration still resolves.
    let with_scope = a.scopes.acquire_id(with, false).unwrap();
    assert_eq!(a.scope(with_scope).kind(), ScopeKind::With);
    assert!(a.scope(with_scope).variables().is_empty());
    assert_eq!(a.reference_at(a_in_with).resolved(), Some(a_var));
    assert_eq!(a.unresolved(), vec!["o"]);
}

#[test]
fn destructuring_declares_every_target() {
    // const { a, b: [c], ...rest } = obj;
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let shorthand = b.shorthand("a");
    let key = b.ident("b");
    let c = b.ident("c");
    let nested = b.prop(key, b.array_pattern([c]));
    let rest = b.rest(b.ident("rest"));
    let pattern = b.object_pattern([shorthand, nested, rest]);
    let obj = b.ident("obj");
    let decl = b.var_decl(VarKind::Const, pattern, Some(obj));
    let a = script(b, vec![decl]);

    let names: Vec<_> = a
        .scopes
        .declared_variables(decl)
        .iter()
        .map(|&v| a.scopes.name_of(v))
        .collect();
    assert_eq!(names, vec!["a", "c", "rest"]);
    assert!(a.references_at(key).is_empty());
    let write = a.reference_at(c);
    assert_eq!(write.write_expr(), Some(obj));
    assert!(write.init());
}

// =============================================================================
// Query API
// =============================================================================

#[test]
fn innermost_scope_and_resolve_name() {
    // let x; { function g() { x; } }
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let decl = b.var_decl(VarKind::Let, b.ident("x"), None);
    let g = b.ident("g");
    let x_use = b.ident("x");
    let func = b.function_decl(b.func(Some(g), [], [b.expr_stmt(x_use)]));
    let block = b.block([func]);
    let a = script(b, vec![decl, block]);

    let function = a.scopes.acquire_id(func, false).unwrap();
    let block_scope = a.scopes.acquire_id(block, false).unwrap();
    assert_eq!(a.scopes.innermost_scope(&a.ast, x_use), function);
    assert_eq!(a.scopes.innermost_scope(&a.ast, decl), a.scopes.global_scope_id());

    let x_var = a.global_var("x");
    assert_eq!(a.scopes.resolve_name(function, "x", Namespace::VALUE), Some(x_var));
    assert_eq!(a.scopes.resolve_name(function, "x", Namespace::TYPE), None);
    assert_eq!(
        a.scopes.resolve_name(block_scope, "g", Namespace::VALUE),
        Some(a.var_in(block_scope, "g"))
    );
    assert_eq!(a.scopes.resolve_name(a.scopes.global_scope_id(), "g", Namespace::VALUE), None);
    assert_eq!(a.scopes.resolve_name(function, "nope", Namespace::VALUE), None);
}

#[test]
fn unused_variables_ignore_writes_and_synthesized_names() {
    // let used = 1; let unused = 2; used; function f() {} f();
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let used = b.var_decl(VarKind::Let, b.ident("used"), Some(b.num(1.0)));
    let unused = b.var_decl(VarKind::Let, b.ident("unused"), Some(b.num(2.0)));
    let read = b.expr_stmt(b.ident("used"));
    let func = b.function_decl(b.func(Some(b.ident("f")), [], []));
    let call = b.expr_stmt(b.call(b.ident("f"), []));
    let a = script(b, vec![used, unused, read, func, call]);

    let names: Vec<_> = a
        .scopes
        .unused_variables()
        .into_iter()
        .map(|v| a.scopes.name_of(v))
        .collect();
    assert_eq!(names, vec!["unused"]);
    assert_eq!(a.reads_of(a.global_var("used")), 1);
}

#[test]
fn implied_strict_marks_the_global_scope() {
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let stmt = b.expr_stmt(b.assign(b.ident("x"), b.num(1.0)));
    let options = AnalyzeOptions::default().with_implied_strict(true);
    let a = analyze_with(b, vec![stmt], &options);

    assert!(a.scopes.is_strict(a.scopes.global_scope_id()));
    assert!(a.scope(a.scopes.global_scope_id()).implicit().is_empty());
    assert_eq!(a.unresolved(), vec!["x"]);
}

#[test]
fn use_strict_prologue_marks_the_script() {
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let directive = b.directive("use strict");
    let block = b.block([]);
    let a = script(b, vec![directive, block]);

    assert!(a.scopes.is_strict(a.scopes.global_scope_id()));
    assert!(a.scopes.acquire(block, false).unwrap().is_strict());
}
