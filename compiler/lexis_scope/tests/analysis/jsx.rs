//! JSX tag references and the implicit factory/fragment references.

use lexis_ir::ast::{ModuleItemKind, VarKind};
use lexis_ir::{AstBuilder, NodeKind, StringInterner};
use lexis_scope::{AmbientSeed, AnalyzeError, AnalyzeOptions, ScopeKind, VariableOrigin};
use pretty_assertions::assert_eq;

use crate::common::{analyze_with, try_analyze};

fn jsx_module() -> AnalyzeOptions {
    AnalyzeOptions::module().with_jsx(true)
}

#[test]
fn jsx_must_be_enabled() {
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let element = b.jsx_element(b.jsx_ident("div"), [], []);
    let stmt = b.expr_stmt(element);
    let result = try_analyze(b, vec![stmt], &AnalyzeOptions::module(), &AmbientSeed::empty());

    assert!(matches!(result, Err(AnalyzeError::JsxDisabled { node }) if node == element));
}

#[test]
fn components_are_read_and_intrinsics_are_not() {
    // import React from "react"; const Foo = 1; <div />; <Foo />; <Foo />;
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let import = b.import([b.import_default("React")], "react", ModuleItemKind::Value);
    let decl = b.var_decl(VarKind::Const, b.ident("Foo"), Some(b.num(1.0)));
    let div = b.jsx_ident("div");
    let intrinsic = b.expr_stmt(b.jsx_element(div, [], []));
    let foo = b.jsx_ident("Foo");
    let first = b.expr_stmt(b.jsx_element(foo, [], []));
    let second = b.expr_stmt(b.jsx_element(b.jsx_ident("Foo"), [], []));
    let a = analyze_with(b, vec![import, decl, intrinsic, first, second], &jsx_module());

    let module_scope = a.only_scope(ScopeKind::Module);
    assert!(a.references_at(div).is_empty());
    let foo_var = a.var_in(module_scope, "Foo");
    assert_eq!(a.reference_at(foo).resolved(), Some(foo_var));
    assert_eq!(a.reads_of(foo_var), 2);

    // One factory reference for the whole program, at the import.
    let react = a.var_in(module_scope, "React");
    assert_eq!(a.reads_of(react), 1);
    let factory = a.scopes.reference(a.variable(react).references()[0]);
    assert_eq!(factory.identifier(), a.variable(react).identifiers()[0]);
    assert!(a.scopes.unused_variables().is_empty());
}

#[test]
fn undeclared_pragma_becomes_implicit_global() {
    // <div />; <span />
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let first = b.expr_stmt(b.jsx_element(b.jsx_ident("div"), [], []));
    let second = b.expr_stmt(b.jsx_element(b.jsx_ident("span"), [], []));
    let a = analyze_with(b, vec![first, second], &jsx_module());

    assert!(a.scopes.references().is_empty());
    assert!(a.unresolved().is_empty());
    let implicit = a.scope(a.scopes.global_scope_id()).implicit();
    assert_eq!(implicit.len(), 1);
    let react = a.variable(implicit[0]);
    assert_eq!(react.text(), "React");
    assert_eq!(react.origin(), &VariableOrigin::ImplicitJsx);
    assert!(react.defs().is_empty());
    assert!(a.scopes.unused_variables().is_empty());
}

#[test]
fn fragments_reference_the_fragment_name() {
    // import { h, Fragment } from "preact"; <></>;
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let h = b.import_specifier("h", None);
    let fragment = b.import_specifier("Fragment", None);
    let import = b.import([h, fragment], "preact", ModuleItemKind::Value);
    let stmt = b.expr_stmt(b.jsx_fragment([]));
    let options = jsx_module()
        .with_jsx_pragma(Some("h"))
        .with_jsx_fragment_name(Some("Fragment"));
    let a = analyze_with(b, vec![import, stmt], &options);

    let module_scope = a.only_scope(ScopeKind::Module);
    assert_eq!(a.reads_of(a.var_in(module_scope, "h")), 1);
    assert_eq!(a.reads_of(a.var_in(module_scope, "Fragment")), 1);
}

#[test]
fn member_tags_read_their_root_object() {
    // const ui = {}; <ui.Button attr={value} />;
    let interner = StringInterner::new();
    let b = AstBuilder::new(&interner);
    let decl = b.var_decl(VarKind::Const, b.ident("ui"), Some(b.object([])));
    let object = b.jsx_ident("ui");
    let property = b.jsx_ident("Button");
    let name = b.node(NodeKind::JsxMemberExpression { object, property });
    let attr_name = b.jsx_ident("attr");
    let value = b.ident("value");
    let container = b.node(NodeKind::JsxExpressionContainer {
        expression: Some(value),
    });
    let attr = b.node(NodeKind::JsxAttribute {
        name: attr_name,
        value: Some(container),
    });
    let stmt = b.expr_stmt(b.jsx_element(name, [attr], []));
    let a = analyze_with(b, vec![decl, stmt], &jsx_module());

    let module_scope = a.only_scope(ScopeKind::Module);
    assert_eq!(a.reference_at(object).resolved(), Some(a.var_in(module_scope, "ui")));
    assert!(a.references_at(property).is_empty());
    assert!(a.references_at(attr_name).is_empty());
    assert_eq!(a.unresolved(), vec!["value"]);
}
