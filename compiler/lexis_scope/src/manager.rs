//! The finished analysis and its query API.

use lexis_ir::{Name, NodeId};
use lexis_lib::LibName;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{
    AnalyzeOptions, DefinitionKind, Namespace, Reference, ReferenceId, Scope, ScopeId, ScopeKind,
    Variable, VariableId, VariableOrigin,
};

/// Scope tree, variables, and references of one program.
///
/// Immutable once returned by `analyze`; every accessor takes `&self` and
/// the whole structure is `Send + Sync`.
///
/// # Index Spaces
///
/// - `scopes`: indexed by [`ScopeId`], in creation (pre-order) order
/// - `variables`: indexed by [`VariableId`], in declaration order
/// - `references`: indexed by [`ReferenceId`], in walk order
#[derive(Clone, Debug)]
pub struct ScopeManager {
    pub(crate) scopes: Vec<Scope>,
    pub(crate) variables: Vec<Variable>,
    pub(crate) references: Vec<Reference>,
    /// Scopes introduced by a node, outermost first.
    pub(crate) node_scopes: FxHashMap<NodeId, SmallVec<[ScopeId; 2]>>,
    /// Variables declared by a node (definition node or declaration parent).
    pub(crate) declared: FxHashMap<NodeId, SmallVec<[VariableId; 2]>>,
    /// Text of every variable name, for string-keyed lookups.
    pub(crate) names: FxHashMap<&'static str, Name>,
    pub(crate) options: AnalyzeOptions,
    pub(crate) ambient_libs: Vec<LibName>,
}

impl ScopeManager {
    /// All scopes in creation order; the global scope is first.
    #[inline]
    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    #[inline]
    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.index()]
    }

    #[inline]
    pub fn global_scope_id(&self) -> ScopeId {
        ScopeId::new(0)
    }

    #[inline]
    pub fn global_scope(&self) -> &Scope {
        self.scope(self.global_scope_id())
    }

    /// Ids of all scopes in creation order.
    pub fn scope_ids(&self) -> impl Iterator<Item = ScopeId> + '_ {
        (0..self.scopes.len()).map(ScopeId::next_in)
    }

    #[inline]
    pub fn variable(&self, id: VariableId) -> &Variable {
        &self.variables[id.index()]
    }

    /// Every variable, including ambient, `arguments`, and implicit globals.
    #[inline]
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    #[inline]
    pub fn reference(&self, id: ReferenceId) -> &Reference {
        &self.references[id.index()]
    }

    #[inline]
    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    /// Options the analysis ran with.
    #[inline]
    pub fn options(&self) -> &AnalyzeOptions {
        &self.options
    }

    /// Libraries whose globals were seeded, in load order.
    #[inline]
    pub fn ambient_libs(&self) -> &[LibName] {
        &self.ambient_libs
    }

    #[inline]
    pub fn is_module(&self) -> bool {
        self.options.is_module()
    }

    #[inline]
    pub fn is_strict(&self, scope: ScopeId) -> bool {
        self.scope(scope).is_strict
    }

    /// Scope introduced by `node`.
    ///
    /// When a node introduces several scopes (a program with a module scope,
    /// a named function expression), function-expression-name scopes are
    /// skipped and `inner` selects the innermost remaining one.
    pub fn acquire(&self, node: NodeId, inner: bool) -> Option<&Scope> {
        self.acquire_id(node, inner).map(|id| self.scope(id))
    }

    pub fn acquire_id(&self, node: NodeId, inner: bool) -> Option<ScopeId> {
        let scopes = self.node_scopes.get(&node)?;
        if let [only] = scopes.as_slice() {
            return Some(*only);
        }
        let keep = |id: &&ScopeId| self.scope(**id).kind != ScopeKind::FunctionExpressionName;
        if inner {
            scopes.iter().rev().find(keep).copied()
        } else {
            scopes.iter().find(keep).copied()
        }
    }

    /// Every scope introduced by `node`, outermost first.
    pub fn acquire_all(&self, node: NodeId) -> &[ScopeId] {
        self.node_scopes.get(&node).map_or(&[], |scopes| scopes.as_slice())
    }

    /// Variables declared by `node`: a declarator, function, class,
    /// parameter owner, import specifier, or the enclosing declaration.
    pub fn declared_variables(&self, node: NodeId) -> &[VariableId] {
        self.declared.get(&node).map_or(&[], |vars| vars.as_slice())
    }

    /// Name text of a variable.
    #[inline]
    pub fn name_of(&self, variable: VariableId) -> &'static str {
        self.variable(variable).text
    }

    /// Resolve `name` from `scope` outwards the way a reference in
    /// `namespace` would, ignoring hoisting.
    pub fn resolve_name(
        &self,
        scope: ScopeId,
        name: &str,
        namespace: Namespace,
    ) -> Option<VariableId> {
        let name = *self.names.get(name)?;
        let mut current = Some(scope);
        while let Some(id) = current {
            let scope = self.scope(id);
            if let Some(var) = scope.lookup(name, namespace) {
                return Some(var);
            }
            current = scope.parent;
        }
        None
    }

    /// References that resolved to nothing, in the order they reached the
    /// global scope.
    pub fn unresolved_references(&self) -> impl Iterator<Item = ReferenceId> + '_ {
        self.global_scope()
            .through
            .iter()
            .copied()
            .filter(|&id| self.reference(id).resolved.is_none())
    }

    /// Program-declared variables that are never read.
    ///
    /// Ambient globals, `arguments`, and implicit globals are excluded.
    pub fn unused_variables(&self) -> Vec<VariableId> {
        self.scopes
            .iter()
            .flat_map(|scope| scope.variables.iter().copied())
            .filter(|&id| {
                matches!(self.variable(id).origin, VariableOrigin::Declared) && !self.is_used(id)
            })
            .collect()
    }

    /// A variable counts as read when a read bound to it, or when a read that
    /// would also have matched it bound to a twin instead: the same-named
    /// variable holding the other namespace slot, or the outer binding of a
    /// class name.
    fn is_used(&self, id: VariableId) -> bool {
        let var = self.variable(id);
        let read_as_var = |other: VariableId| {
            self.variable(other).references.iter().any(|&r| {
                let r = self.reference(r);
                r.is_read() && r.namespace.intersects(var.namespace)
            })
        };
        if read_as_var(id) {
            return true;
        }
        let scope = self.scope(var.scope);
        let sibling_read = scope.symbols.get(&var.name).is_some_and(|slots| {
            [slots.value, slots.type_]
                .into_iter()
                .flatten()
                .any(|other| other != id && read_as_var(other))
        });
        if sibling_read {
            return true;
        }
        match (scope.kind, var.defs.first()) {
            (ScopeKind::Class, Some(def)) if def.kind == DefinitionKind::ClassName => {
                self.declared_variables(def.node).iter().any(|&other| {
                    self.variable(other).scope != var.scope && read_as_var(other)
                })
            }
            _ => false,
        }
    }

    /// Innermost scope whose block is `node` or one of its ancestors.
    pub fn innermost_scope(&self, ast: &lexis_ir::Ast, node: NodeId) -> ScopeId {
        let mut current = Some(node);
        while let Some(id) = current {
            if let Some(scope) = self.acquire_id(id, true) {
                return scope;
            }
            current = ast.parent(id);
        }
        self.global_scope_id()
    }
}
