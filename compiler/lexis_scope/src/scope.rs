//! Lexical scopes and their symbol tables.

use lexis_ir::{Name, NodeId};
use rustc_hash::FxHashMap;

use crate::{Namespace, ReferenceId, ScopeId, VariableId};

/// Construct that introduced a scope.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    Global,
    Module,
    Function,
    /// Holds the self-name of a named function expression.
    FunctionExpressionName,
    Block,
    Switch,
    Catch,
    /// Head of a `for`/`for-in`/`for-of` with a block-scoped declaration.
    For,
    Class,
    ClassFieldInitializer,
    ClassStaticBlock,
    Enum,
    ConditionalType,
    /// Type parameters of a type alias or interface.
    TypeAlias,
    MappedType,
    /// Signatures, function types, and constructor types.
    FunctionType,
    /// Namespace / module body.
    DeclarationNamespace,
    With,
}

impl ScopeKind {
    /// `var` declarations inside bind here.
    pub const fn is_variable_scope(self) -> bool {
        matches!(
            self,
            ScopeKind::Global
                | ScopeKind::Module
                | ScopeKind::Function
                | ScopeKind::ClassFieldInitializer
                | ScopeKind::ClassStaticBlock
                | ScopeKind::DeclarationNamespace
        )
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ScopeKind::Global => "global",
            ScopeKind::Module => "module",
            ScopeKind::Function => "function",
            ScopeKind::FunctionExpressionName => "function-expression-name",
            ScopeKind::Block => "block",
            ScopeKind::Switch => "switch",
            ScopeKind::Catch => "catch",
            ScopeKind::For => "for",
            ScopeKind::Class => "class",
            ScopeKind::ClassFieldInitializer => "class-field-initializer",
            ScopeKind::ClassStaticBlock => "class-static-block",
            ScopeKind::Enum => "enum",
            ScopeKind::ConditionalType => "conditional-type",
            ScopeKind::TypeAlias => "type",
            ScopeKind::MappedType => "mapped-type",
            ScopeKind::FunctionType => "function-type",
            ScopeKind::DeclarationNamespace => "ts-module",
            ScopeKind::With => "with",
        }
    }
}

impl std::fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-name symbol table entry: at most one variable per namespace.
///
/// A dual variable occupies both slots.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Slots {
    pub(crate) value: Option<VariableId>,
    pub(crate) type_: Option<VariableId>,
}

impl Slots {
    /// Variable satisfying `namespace`; the value slot wins for dual lookups.
    pub(crate) fn get(self, namespace: Namespace) -> Option<VariableId> {
        let value = if namespace.is_value() { self.value } else { None };
        value.or(if namespace.is_type() { self.type_ } else { None })
    }

    /// Parts of `namespace` whose slot is empty or already holds `var`.
    pub(crate) fn claimable(self, namespace: Namespace, var: VariableId) -> Namespace {
        let mut claim = Namespace::empty();
        if namespace.is_value() && (self.value.is_none() || self.value == Some(var)) {
            claim |= Namespace::VALUE;
        }
        if namespace.is_type() && (self.type_.is_none() || self.type_ == Some(var)) {
            claim |= Namespace::TYPE;
        }
        claim
    }

    /// Put `var` into every empty slot `namespace` covers.
    pub(crate) fn fill(&mut self, namespace: Namespace, var: VariableId) {
        if namespace.is_value() && self.value.is_none() {
            self.value = Some(var);
        }
        if namespace.is_type() && self.type_.is_none() {
            self.type_ = Some(var);
        }
    }
}

/// One lexical region.
#[derive(Clone, Debug)]
pub struct Scope {
    pub(crate) kind: ScopeKind,
    pub(crate) block: NodeId,
    pub(crate) parent: Option<ScopeId>,
    pub(crate) children: Vec<ScopeId>,
    pub(crate) symbols: FxHashMap<Name, Slots>,
    pub(crate) variables: Vec<VariableId>,
    pub(crate) references: Vec<ReferenceId>,
    pub(crate) through: Vec<ReferenceId>,
    pub(crate) implicit: Vec<VariableId>,
    pub(crate) variable_scope: ScopeId,
    pub(crate) is_strict: bool,
}

impl Scope {
    pub(crate) fn new(
        kind: ScopeKind,
        block: NodeId,
        parent: Option<ScopeId>,
        variable_scope: ScopeId,
        is_strict: bool,
    ) -> Self {
        Scope {
            kind,
            block,
            parent,
            children: Vec::new(),
            symbols: FxHashMap::default(),
            variables: Vec::new(),
            references: Vec::new(),
            through: Vec::new(),
            implicit: Vec::new(),
            variable_scope,
            is_strict,
        }
    }

    #[inline]
    pub fn kind(&self) -> ScopeKind {
        self.kind
    }

    /// Node that introduced the scope.
    #[inline]
    pub fn block(&self) -> NodeId {
        self.block
    }

    /// Lexically enclosing scope; `None` only for the global scope.
    #[inline]
    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    /// Child scopes in creation order.
    #[inline]
    pub fn children(&self) -> &[ScopeId] {
        &self.children
    }

    /// Variables declared directly here, in declaration order.
    #[inline]
    pub fn variables(&self) -> &[VariableId] {
        &self.variables
    }

    /// References occurring directly in this scope.
    #[inline]
    pub fn references(&self) -> &[ReferenceId] {
        &self.references
    }

    /// References that did not resolve here (own and from nested scopes).
    #[inline]
    pub fn through(&self) -> &[ReferenceId] {
        &self.through
    }

    /// Implicit globals created by sloppy-mode assignments. Global scope only.
    #[inline]
    pub fn implicit(&self) -> &[VariableId] {
        &self.implicit
    }

    /// Nearest enclosing scope that `var` declarations bind in.
    #[inline]
    pub fn variable_scope(&self) -> ScopeId {
        self.variable_scope
    }

    #[inline]
    pub fn is_strict(&self) -> bool {
        self.is_strict
    }

    /// Variable declared directly in this scope under `name` that is
    /// visible in `namespace`. Dual lookups prefer the value variable.
    pub fn lookup(&self, name: Name, namespace: Namespace) -> Option<VariableId> {
        self.symbols.get(&name).and_then(|slots| slots.get(namespace))
    }

    /// Names declared in this scope.
    pub fn names(&self) -> impl Iterator<Item = Name> + '_ {
        self.symbols.keys().copied()
    }
}
