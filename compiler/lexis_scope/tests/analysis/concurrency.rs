//! Many analyses in parallel against one interner and one ambient seed.

use std::sync::Arc;

use lexis_ir::ast::VarKind;
use lexis_ir::{AstBuilder, SharedInterner};
use lexis_lib::DEFAULT_LIB;
use lexis_scope::{analyze, AmbientSeed, AnalyzeOptions, ScopeManager};
use pretty_assertions::assert_eq;
use rayon::prelude::*;

use crate::common::{try_analyze, Analysis, Summary};

/// Program `i`: `const local_i = new Promise(f); Array; missing_i;`
fn analyze_nth<'i>(interner: &'i SharedInterner, seed: &AmbientSeed, i: usize) -> Analysis<'i> {
    let b = AstBuilder::new(interner);
    let local = format!("local_{i}");
    let promise = b.ident("Promise");
    let executor = b.ident("f");
    let init = b.new_expr(promise, [executor]);
    let decl = b.var_decl(VarKind::Const, b.ident(&local), Some(init));
    let array = b.expr_stmt(b.ident("Array"));
    let missing = b.expr_stmt(b.ident(&format!("missing_{i}")));
    try_analyze(b, vec![decl, array, missing], &AnalyzeOptions::default(), seed)
        .expect("analysis failed")
}

fn summarize(interner: &SharedInterner, seed: &AmbientSeed, i: usize) -> (Summary, Vec<&'static str>) {
    let a = analyze_nth(interner, seed, i);

    let global = a.scopes.global_scope_id();
    for name in ["Promise", "Array"] {
        let var = a.var_in(global, name);
        assert!(a.variable(var).is_ambient(), "{name} should be ambient");
        assert_eq!(a.reads_of(var), 1, "{name}");
    }
    (a.summary(), a.unresolved())
}

#[test]
fn parallel_analyses_match_sequential_ones() {
    let interner = SharedInterner::new();
    let seed = Arc::new(AmbientSeed::new(&[DEFAULT_LIB]));

    let sequential: Vec<_> = (0..64).map(|i| summarize(&interner, &seed, i)).collect();
    let parallel: Vec<_> = (0..64)
        .into_par_iter()
        .map(|i| summarize(&interner, &seed, i))
        .collect();

    assert_eq!(sequential.len(), parallel.len());
    for (i, (seq, par)) in sequential.iter().zip(&parallel).enumerate() {
        assert_eq!(seq, par, "program {i}");
        let missing = format!("missing_{i}");
        assert_eq!(par.1, vec!["f", missing.as_str()]);
    }
}

#[test]
fn results_can_cross_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ScopeManager>();
    assert_send_sync::<AmbientSeed>();

    let interner = SharedInterner::new();
    let seed = AmbientSeed::new(&[DEFAULT_LIB]);
    let managers: Vec<ScopeManager> = (0..8)
        .into_par_iter()
        .map(|i| {
            let b = AstBuilder::new(&interner);
            let stmt = b.expr_stmt(b.ident(&format!("g{i}")));
            let root = b.program([stmt]);
            let ast = b.finish(root);
            analyze(&ast, &interner, &AnalyzeOptions::default(), &seed).expect("analysis failed")
        })
        .collect();

    for (i, manager) in managers.iter().enumerate() {
        let unresolved: Vec<_> = manager
            .unresolved_references()
            .map(|r| interner.lookup(manager.reference(r).name()))
            .collect();
        assert_eq!(unresolved, vec![format!("g{i}").as_str()]);
        assert_eq!(manager.ambient_libs(), seed.libs());
    }
}
