//! Visibility of bindings before their declaration point.
//!
//! The resolver always binds a reference to the innermost matching
//! variable. This module only decides whether that binding was usable at
//! the reference's position, so it can be flagged with an [`EarlyAccess`].

use lexis_ir::ast::VarKind;

use crate::{Definition, DefinitionKind, EarlyAccess, Namespace};

/// How far declarations hoist.
///
/// `FunctionsAndTypes` is the conservative default: functions and
/// type-level declarations are usable anywhere in their scope, everything
/// else follows runtime order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum HoistingPolicy {
    /// Only function declarations hoist; types follow value rules.
    Functions,
    #[default]
    FunctionsAndTypes,
    /// Every declaration is visible from the start of its scope.
    All,
    /// Nothing is visible before its declaration.
    Never,
}

/// Where in its scope a binding becomes visible.
///
/// Ordered from least to most permissive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Visibility {
    /// Temporal dead zone until the declaration.
    NeverBeforeDeclaration,
    /// The binding exists from the start but holds no value yet.
    FromDeclaration,
    FromScopeStart,
}

/// Declarations that exist only at compile time.
fn is_type_level(def: &Definition) -> bool {
    def.ambient || matches!(def.kind, DefinitionKind::TypeAlias)
}

fn type_rule(policy: HoistingPolicy) -> Visibility {
    match policy {
        HoistingPolicy::FunctionsAndTypes | HoistingPolicy::All => Visibility::FromScopeStart,
        HoistingPolicy::Functions | HoistingPolicy::Never => Visibility::NeverBeforeDeclaration,
    }
}

/// Visibility of one definition for a reference in `namespace`.
pub fn visibility(def: &Definition, namespace: Namespace, policy: HoistingPolicy) -> Visibility {
    match def.kind {
        DefinitionKind::ImportBinding
        | DefinitionKind::Parameter { .. }
        | DefinitionKind::CatchClause
        | DefinitionKind::EnumMember
        | DefinitionKind::ImplicitGlobal => return Visibility::FromScopeStart,
        _ => {}
    }
    if !namespace.is_value() || is_type_level(def) {
        return type_rule(policy);
    }
    match (def.kind, policy) {
        (_, HoistingPolicy::All) => Visibility::FromScopeStart,
        (DefinitionKind::FunctionName, HoistingPolicy::Never) => Visibility::FromDeclaration,
        (DefinitionKind::FunctionName, _) => Visibility::FromScopeStart,
        (DefinitionKind::Variable(VarKind::Var) | DefinitionKind::NamespaceName, _) => {
            Visibility::FromDeclaration
        }
        _ => Visibility::NeverBeforeDeclaration,
    }
}

/// Flag for a reference in `namespace` that precedes every definition in
/// `defs`. The most permissive definition decides; `None` means the early
/// use is fine.
pub fn early_access(
    defs: &[Definition],
    namespace: Namespace,
    policy: HoistingPolicy,
) -> Option<EarlyAccess> {
    let (visibility, type_level) = defs
        .iter()
        .map(|def| {
            (
                visibility(def, namespace, policy),
                !namespace.is_value() || is_type_level(def),
            )
        })
        .max_by_key(|&(visibility, _)| visibility)?;
    match visibility {
        Visibility::FromScopeStart => None,
        Visibility::FromDeclaration => Some(EarlyAccess::BeforeInitialization),
        Visibility::NeverBeforeDeclaration if type_level => {
            Some(EarlyAccess::BeforeTypeDeclaration)
        }
        Visibility::NeverBeforeDeclaration => Some(EarlyAccess::TemporalDeadZone),
    }
}
