//! Functions: parameters, `arguments`, overloads, and implicit globals.

use lexis_ir::ast::{AssignOp, MethodKind, UpdateOp, VarKind};
use lexis_ir::{AstBuilder, StringInterner};
use lexis_scope::{AnalyzeOptions, DefinitionKind, ScopeKind, VariableOrigin};
use pretty_assertions::assert_eq;

use crate::common::{analyze_with, module, script};

#[test]
fn declaration_binds_outside_parameters_inside() {
    // function f(a) { return a; }
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let f = b.ident("f");
    let param = b.ident("a");
    let a_use = b.ident("a");
    let func = b.function_decl(b.func(Some(f), [param], [b.return_stmt(Some(a_use))]));
    let a = script(b, vec![func]);

    let f_var = a.global_var("f");
    assert_eq!(a.variable(f_var).defs()[0].kind, DefinitionKind::FunctionName);
    assert_eq!(a.variable(f_var).defs()[0].node, func);

    let function = a.scopes.acquire_id(func, false).unwrap();
    assert_eq!(a.names_in(function), vec!["arguments", "a"]);
    let a_var = a.var_in(function, "a");
    assert_eq!(
        a.variable(a_var).defs()[0].kind,
        DefinitionKind::Parameter { rest: false }
    );
    assert_eq!(a.reference_at(a_use).resolved(), Some(a_var));
    assert!(a.scopes.declared_variables(func).contains(&a_var));
    assert!(a.scopes.declared_variables(func).contains(&f_var));
}

#[test]
fn named_expression_gets_its_own_name_scope() {
    // const g = function h() { h; };
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let g = b.ident("g");
    let h = b.ident("h");
    let h_use = b.ident("h");
    let expr = b.function_expr(b.func(Some(h), [], [b.expr_stmt(h_use)]));
    let decl = b.var_decl(VarKind::Const, g, Some(expr));
    let a = script(b, vec![decl]);

    let all = a.scopes.acquire_all(expr);
    assert_eq!(all.len(), 2);
    assert_eq!(a.scope(all[0]).kind(), ScopeKind::FunctionExpressionName);
    assert_eq!(a.scope(all[1]).kind(), ScopeKind::Function);
    assert_eq!(a.scopes.acquire_id(expr, false), Some(all[1]));
    assert_eq!(a.scopes.acquire_id(expr, true), Some(all[1]));

    let h_var = a.var_in(all[0], "h");
    assert_eq!(a.reference_at(h_use).resolved(), Some(h_var));
    assert!(a.vars_in(a.scopes.global_scope_id(), "h").is_empty());
}

#[test]
fn arrows_have_no_arguments() {
    // const f = () => arguments;
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let f = b.ident("f");
    let body = b.ident("arguments");
    let arrow = b.arrow_expr([], body);
    let decl = b.var_decl(VarKind::Const, f, Some(arrow));
    let a = script(b, vec![decl]);

    let function = a.scopes.acquire_id(arrow, false).unwrap();
    assert!(a.scope(function).variables().is_empty());
    assert_eq!(a.unresolved(), vec!["arguments"]);
}

#[test]
fn arguments_is_a_synthesized_variable() {
    // function f() { arguments; }
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let f = b.ident("f");
    let use_ = b.ident("arguments");
    let func = b.function_decl(b.func(Some(f), [], [b.expr_stmt(use_)]));
    let a = script(b, vec![func]);

    let function = a.scopes.acquire_id(func, false).unwrap();
    let arguments = a.var_in(function, "arguments");
    let variable = a.variable(arguments);
    assert_eq!(variable.origin(), &VariableOrigin::ImplicitArguments);
    assert!(variable.is_implicit());
    assert!(variable.defs().is_empty());
    assert_eq!(a.reference_at(use_).resolved(), Some(arguments));
    assert!(!a.scopes.unused_variables().contains(&arguments));
}

#[test]
fn defaults_cannot_see_body_declarations() {
    // function f(a = b, c = a) { var b; }
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let f = b.ident("f");
    let a_param = b.ident("a");
    let b_use = b.ident("b");
    let first = b.default_value(a_param, b_use);
    let c_param = b.ident("c");
    let a_use = b.ident("a");
    let second = b.default_value(c_param, a_use);
    let var_b = b.var_decl(VarKind::Var, b.ident("b"), None);
    let func = b.function_decl(b.func(Some(f), [first, second], [var_b]));
    let a = script(b, vec![func]);

    let function = a.scopes.acquire_id(func, false).unwrap();
    assert_eq!(a.reference_at(b_use).resolved(), None);
    assert_eq!(a.reference_at(a_use).resolved(), Some(a.var_in(function, "a")));
    assert_eq!(a.unresolved(), vec!["b"]);

    // The default is a write to the parameter it guards.
    let write = a.reference_at(c_param);
    assert!(write.is_write_only());
    assert_eq!(write.write_expr(), Some(a_use));
}

#[test]
fn rest_parameters_are_marked() {
    // function f(first, ...rest) {}
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let f = b.ident("f");
    let first = b.ident("first");
    let rest = b.rest(b.ident("rest"));
    let func = b.function_decl(b.func(Some(f), [first, rest], []));
    let a = script(b, vec![func]);

    let function = a.scopes.acquire_id(func, false).unwrap();
    let kind = |name: &str| a.variable(a.var_in(function, name)).defs()[0].kind;
    assert_eq!(kind("first"), DefinitionKind::Parameter { rest: false });
    assert_eq!(kind("rest"), DefinitionKind::Parameter { rest: true });
}

#[test]
fn overloads_merge_into_one_variable() {
    // function over(a); function over(a); function over(a) { arguments; }
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let first = b.declare_function(b.signature_func(Some(b.ident("over")), [b.ident("a")]));
    let second = b.declare_function(b.signature_func(Some(b.ident("over")), [b.ident("a")]));
    let body = b.expr_stmt(b.ident("arguments"));
    let implementation =
        b.function_decl(b.func(Some(b.ident("over")), [b.ident("a")], [body]));
    let a = script(b, vec![first, second, implementation]);

    let over = a.global_var("over");
    let defs = a.variable(over).defs();
    assert_eq!(defs.len(), 3);
    assert!(defs.iter().all(|d| d.kind == DefinitionKind::FunctionName && !d.ambient));
    assert_eq!(a.vars_in(a.scopes.global_scope_id(), "over").len(), 1);

    let functions = a.scopes_of(ScopeKind::Function);
    assert_eq!(functions.len(), 3);
    let arguments_refs: Vec<_> = functions
        .iter()
        .map(|&scope| a.variable(a.var_in(scope, "arguments")).references().len())
        .collect();
    assert_eq!(arguments_refs, vec![0, 0, 1]);
}

#[test]
fn methods_are_functions() {
    // class K { constructor(p) {} }
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let class_id = b.ident("K");
    let key = b.ident("constructor");
    let p = b.ident("p");
    let ctor = b.method(key, MethodKind::Constructor, b.func(None, [p], []));
    let class = b.class_decl(b.class(Some(class_id), None, [ctor]));
    let a = script(b, vec![class]);

    let function = a.only_scope(ScopeKind::Function);
    assert_eq!(a.names_in(function), vec!["arguments", "p"]);
    assert!(a.scopes.is_strict(function));
    assert!(a.references_at(key).is_empty());
}

// =============================================================================
// Writes and implicit globals
// =============================================================================

#[test]
fn sloppy_assignment_creates_an_implicit_global() {
    // function f() { leaked = 1; leaked = 2; }
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let f = b.ident("f");
    let first = b.ident("leaked");
    let assign_1 = b.assign(first, b.num(1.0));
    let second = b.ident("leaked");
    let assign_2 = b.assign(second, b.num(2.0));
    let func = b.function_decl(b.func(
        Some(f),
        [],
        [b.expr_stmt(assign_1), b.expr_stmt(assign_2)],
    ));
    let a = script(b, vec![func]);

    let global = a.scope(a.scopes.global_scope_id());
    assert_eq!(global.implicit().len(), 1);
    let leaked = global.implicit()[0];
    let variable = a.variable(leaked);
    assert_eq!(variable.text(), "leaked");
    assert_eq!(variable.defs().len(), 2);
    assert_eq!(variable.defs()[0].kind, DefinitionKind::ImplicitGlobal);
    assert_eq!(variable.defs()[0].node, assign_1);
    assert!(!global.variables().contains(&leaked));
    assert_eq!(a.scopes.declared_variables(assign_2), &[leaked]);

    let reference = a.reference_at(first);
    assert!(reference.maybe_implicit_global());
    assert_eq!(reference.resolved(), None);
    assert_eq!(a.unresolved(), vec!["leaked", "leaked"]);
    assert!(!a.scopes.unused_variables().contains(&leaked));
}

#[test]
fn strict_code_and_modules_create_no_implicit_globals() {
    let strict = {
        // function f() { "use strict"; x = 1; }
        let interner = StringInterner::new();
        let b = AstBuilder::new(&interner);
        let f = b.ident("f");
        let directive = b.directive("use strict");
        let target = b.ident("x");
        let assign = b.expr_stmt(b.assign(target, b.num(1.0)));
        let func = b.function_decl(b.func(Some(f), [], [directive, assign]));
        let a = script(b, vec![func]);
        assert!(!a.reference_at(target).maybe_implicit_global());
        a.scope(a.scopes.global_scope_id()).implicit().len()
    };
    let in_module = {
        // x = 1;
        let interner = StringInterner::new();
        let b = AstBuilder::new(&interner);
        let assign = b.expr_stmt(b.assign(b.ident("x"), b.num(1.0)));
        let a = module(b, vec![assign]);
        assert!(a.scopes.is_module());
        a.scope(a.scopes.global_scope_id()).implicit().len()
    };
    assert_eq!((strict, in_module), (0, 0));
}

#[test]
fn assignment_to_a_declared_name_is_not_implicit() {
    // var x; x = 1;
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let decl = b.var_decl(VarKind::Var, b.ident("x"), None);
    let target = b.ident("x");
    let one = b.num(1.0);
    let assign = b.expr_stmt(b.assign(target, one));
    let a = script(b, vec![decl, assign]);

    let reference = a.reference_at(target);
    assert_eq!(reference.resolved(), Some(a.global_var("x")));
    assert!(!reference.init());
    assert_eq!(reference.write_expr(), Some(one));
    assert!(a.scope(a.scopes.global_scope_id()).implicit().is_empty());
}

#[test]
fn compound_assignment_and_update_read_and_write() {
    // let n = 0; n += 1; n++;
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let decl = b.var_decl(VarKind::Let, b.ident("n"), Some(b.num(0.0)));
    let compound = b.ident("n");
    let add = b.expr_stmt(b.assign_op(AssignOp::AddAssign, compound, b.num(1.0)));
    let updated = b.ident("n");
    let update = b.expr_stmt(b.update(UpdateOp::Increment, updated));
    let a = script(b, vec![decl, add, update]);

    assert!(a.reference_at(compound).is_read_write());
    assert!(a.reference_at(updated).is_read_write());
    assert_eq!(a.reads_of(a.global_var("n")), 2);
}

#[test]
fn destructuring_assignment_writes_each_target() {
    // let p, q; [p, { q }] = pair;
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let p_decl = b.declarator(b.ident("p"), None);
    let q_decl = b.declarator(b.ident("q"), None);
    let decl = b.var_decls(VarKind::Let, [p_decl, q_decl]);
    let p = b.ident("p");
    let q_prop = b.shorthand("q");
    let pattern = b.array_pattern([p, b.object_pattern([q_prop])]);
    let pair = b.ident("pair");
    let assign = b.expr_stmt(b.assign(pattern, pair));
    let a = script(b, vec![decl, assign]);

    let write = a.reference_at(p);
    assert!(write.is_write_only());
    assert_eq!(write.resolved(), Some(a.global_var("p")));
    assert_eq!(write.write_expr(), Some(pair));
    assert_eq!(a.variable(a.global_var("q")).references().len(), 1);
    assert_eq!(a.unresolved(), vec!["pair"]);
}

#[test]
fn global_return_wraps_the_program_in_a_function() {
    // var x; return;  (CommonJS)
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let decl = b.var_decl(VarKind::Var, b.ident("x"), None);
    let ret = b.return_stmt(None);
    let options = AnalyzeOptions::default().with_global_return(true);
    let a = analyze_with(b, vec![decl, ret], &options);

    let root = a.ast.root();
    let function = a.scopes.acquire_id(root, true).unwrap();
    assert_eq!(a.scope(function).kind(), ScopeKind::Function);
    assert_eq!(a.scopes.acquire_id(root, false), Some(a.scopes.global_scope_id()));
    assert_eq!(a.names_in(function), vec!["arguments", "x"]);
    assert!(a.scope(a.scopes.global_scope_id()).variables().is_empty());
}
