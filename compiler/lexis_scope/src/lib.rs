//! Lexis Scope - scope and binding analysis
//!
//! Given a parsed program ([`lexis_ir::Ast`]), build the tree of lexical
//! scopes, a [`Variable`] for every declared name, and a [`Reference`] for
//! every identifier use, bound to the variable it refers to.
//!
//! # Namespaces
//!
//! TypeScript keeps runtime values and compile-time types apart: `type Foo`
//! and `const Foo` can share a scope without shadowing each other. Every
//! definition and reference carries a [`Namespace`]; a scope holds at most
//! one variable per name and namespace, and a reference only binds to a
//! variable in its own namespace.
//!
//! # Pipeline
//!
//! 1. Seed the global scope from an [`AmbientSeed`] (the `lib` globals).
//! 2. Walk the AST once, opening a scope per scope-introducing node and
//!    recording declarations and references as they appear.
//! 3. Resolve each scope's references as it closes; leftovers flow outward
//!    and end in the global scope's `through` list.
//!
//! The result is an immutable [`ScopeManager`].
//!
//! ```text
//! let seed = AmbientSeed::new(&options.lib);   // build once, share via Arc
//! let scopes = analyze(&ast, &interner, &options, &seed)?;
//! for id in scopes.unused_variables() { ... }
//! ```

mod builder;
mod error;
mod hoisting;
mod ids;
mod manager;
mod options;
mod reference;
mod resolve;
mod scope;
mod seed;
mod tracing_setup;
mod variable;

use lexis_ir::{Ast, StringInterner};
use tracing::debug;

pub use error::AnalyzeError;
pub use hoisting::{early_access, visibility, HoistingPolicy, Visibility};
pub use ids::{ReferenceId, ScopeId, VariableId};
pub use lexis_lib::{LibName, LibNameError};
pub use manager::ScopeManager;
pub use options::{AnalyzeOptions, SourceType};
pub use reference::{EarlyAccess, Reference, ReferenceFlags};
pub use scope::{Scope, ScopeKind};
pub use seed::{AmbientEntry, AmbientSeed};
pub use tracing_setup::init_tracing;
pub use variable::{Definition, DefinitionKind, Namespace, Variable, VariableOrigin};

/// Analyze one program against a prepared ambient seed.
///
/// `interner` must be the interner the AST's names were created with.
/// `options.lib` is not consulted; the seed decides which globals exist.
///
/// # Errors
///
/// Returns an [`AnalyzeError`] for input the builder cannot interpret: a
/// root that is not a `Program`, a node of the wrong kind in a constrained
/// position, an import in a script, or JSX while JSX is disabled.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(nodes = ast.len(), module = options.is_module(), globals = seed.len())
)]
pub fn analyze(
    ast: &Ast,
    interner: &StringInterner,
    options: &AnalyzeOptions,
    seed: &AmbientSeed,
) -> Result<ScopeManager, AnalyzeError> {
    let manager = builder::Builder::new(ast, interner, options)?.build(seed)?;
    debug!(
        scopes = manager.scopes().len(),
        variables = manager.variables().len(),
        references = manager.references().len(),
        through = manager.global_scope().through().len(),
        "analysis complete"
    );
    Ok(manager)
}

/// Analyze one program, seeding globals from `options.lib`.
///
/// Builds a fresh [`AmbientSeed`] on every call; callers analyzing many
/// programs should build the seed once and use [`analyze`].
///
/// # Errors
///
/// See [`analyze`].
pub fn analyze_program(
    ast: &Ast,
    interner: &StringInterner,
    options: &AnalyzeOptions,
) -> Result<ScopeManager, AnalyzeError> {
    let seed = AmbientSeed::new(&options.lib);
    analyze(ast, interner, options, &seed)
}
