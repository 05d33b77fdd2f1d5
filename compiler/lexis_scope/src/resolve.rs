//! Reference resolution, run as each scope closes.
//!
//! A closing scope tries to bind every reference still pending in it. What
//! it cannot bind goes to its `through` list and on to the parent's pending
//! list, so by the time the global scope closes, everything left is global
//! or undeclared.

use lexis_ir::{Name, NodeId, NodeKind, Span};
use tracing::trace;

use crate::builder::Builder;
use crate::{
    hoisting, AnalyzeError, Definition, DefinitionKind, EarlyAccess, Namespace, ReferenceId,
    ScopeId, ScopeKind, Variable, VariableId, VariableOrigin,
};

impl Builder<'_> {
    /// Pop the innermost scope and resolve what was referenced in it.
    pub(crate) fn close_scope(&mut self) -> Result<(), AnalyzeError> {
        let Some(frame) = self.stack.pop() else {
            return Ok(());
        };
        let scope = frame.scope;
        let pending = frame.left.len();
        match self.scopes[scope.index()].kind {
            ScopeKind::Global => self.close_global(frame.left)?,
            // Names inside `with` may be properties of the object; nothing
            // binds here.
            ScopeKind::With => {
                for reference in frame.left {
                    self.delegate(scope, reference);
                }
            }
            _ => {
                for reference in frame.left {
                    if !self.try_resolve(scope, reference)? {
                        self.delegate(scope, reference);
                    }
                }
            }
        }
        trace!(
            ?scope,
            kind = %self.scopes[scope.index()].kind,
            pending,
            through = self.scopes[scope.index()].through.len(),
            "close scope"
        );
        Ok(())
    }

    fn delegate(&mut self, scope: ScopeId, reference: ReferenceId) {
        self.scopes[scope.index()].through.push(reference);
        if let Some(parent) = self.stack.last_mut() {
            parent.left.push(reference);
        }
    }

    fn try_resolve(&mut self, scope: ScopeId, reference: ReferenceId) -> Result<bool, AnalyzeError> {
        let (name, namespace) = {
            let r = &self.references[reference.index()];
            (r.name, r.namespace)
        };
        let Some(var) = self.scopes[scope.index()].lookup(name, namespace) else {
            return Ok(false);
        };
        if !self.is_valid_resolution(scope, reference, var)? {
            return Ok(false);
        }
        let early = self.early_access(reference, var);
        let r = &mut self.references[reference.index()];
        r.resolved = Some(var);
        r.early = early;
        self.variables[var.index()].references.push(reference);
        trace!(?reference, ?var, ?early, "resolved");
        Ok(true)
    }

    /// A reference in a parameter list cannot see a variable declared only
    /// in the function body.
    fn is_valid_resolution(
        &self,
        scope: ScopeId,
        reference: ReferenceId,
        var: VariableId,
    ) -> Result<bool, AnalyzeError> {
        let scope_data = &self.scopes[scope.index()];
        if scope_data.kind != ScopeKind::Function {
            return Ok(true);
        }
        let Some(body) = self
            .kind(scope_data.block)?
            .as_function()
            .and_then(|func| func.body)
        else {
            return Ok(true);
        };
        let body_start = self.ast.span(body).start;
        let variable = &self.variables[var.index()];
        let in_params = self.start_of(self.references[reference.index()].identifier) < body_start;
        let body_only = !variable.defs.is_empty()
            && variable
                .defs
                .iter()
                .all(|def| self.start_of(def.name) >= body_start);
        Ok(!(variable.scope == scope && in_params && body_only))
    }

    #[inline]
    fn start_of(&self, node: NodeId) -> u32 {
        self.ast.span(node).start
    }

    /// Forward-reference flag for a reference just bound to `var`.
    fn early_access(&self, reference: ReferenceId, var: VariableId) -> Option<EarlyAccess> {
        let r = &self.references[reference.index()];
        let variable = &self.variables[var.index()];
        if r.from != variable.scope {
            return None;
        }
        let at = self.start_of(r.identifier);
        let first = variable.defs.iter().map(|def| self.start_of(def.name)).min()?;
        if at < first {
            return hoisting::early_access(&variable.defs, r.namespace, self.options.hoisting);
        }
        let identifier = self.ast.span(r.identifier);
        let in_own_initializer = r.namespace.is_value()
            && variable.defs.iter().any(|def| {
                matches!(def.kind, DefinitionKind::Variable(kind) if !kind.is_var())
                    && !def.ambient
                    && def.name != r.identifier
                    && (self.ast.span(def.node).contains_span(identifier)
                        || self.in_loop_head_source(def, identifier))
            });
        in_own_initializer.then_some(EarlyAccess::TemporalDeadZone)
    }

    /// `identifier` lies in the iterated expression of the for-in/for-of
    /// loop whose head declares `def`.
    fn in_loop_head_source(&self, def: &Definition, identifier: Span) -> bool {
        let Some(declaration) = def.parent else {
            return false;
        };
        let Some(stmt) = self.ast.parent(declaration) else {
            return false;
        };
        match self.ast.get(stmt) {
            Some(
                NodeKind::ForInStatement { left, right, .. }
                | NodeKind::ForOfStatement { left, right, .. },
            ) if *left == declaration => self.ast.span(*right).contains_span(identifier),
            _ => false,
        }
    }

    /// Global scope: bind statically, then turn sloppy-mode writes to
    /// undeclared names into implicit globals.
    fn close_global(&mut self, left: Vec<ReferenceId>) -> Result<(), AnalyzeError> {
        let global = ScopeId::new(0);
        for reference in left {
            if self.try_resolve(global, reference)? {
                continue;
            }
            self.scopes[global.index()].through.push(reference);
            let r = &self.references[reference.index()];
            let (name, identifier) = (r.name, r.identifier);
            let Some(assignment) = r.implicit_global else {
                continue;
            };
            if !self.scopes[global.index()].symbols.contains_key(&name) {
                let def = Definition::new(DefinitionKind::ImplicitGlobal, identifier, assignment);
                self.define_implicit(def, name);
            }
        }
        Ok(())
    }

    fn implicit_global(&self, name: Name) -> Option<VariableId> {
        self.scopes[0]
            .implicit
            .iter()
            .copied()
            .find(|var| self.variables[var.index()].name == name)
    }

    fn define_implicit(&mut self, def: Definition, name: Name) {
        let global = ScopeId::new(0);
        let node = def.node;
        let var = match self.implicit_global(name) {
            Some(var) => {
                let variable = &mut self.variables[var.index()];
                variable.origin = VariableOrigin::Declared;
                variable.push_def(def);
                var
            }
            None => {
                let id = VariableId::next_in(self.variables.len());
                let text = self.interner.lookup(name);
                let mut variable =
                    Variable::new(name, text, global, def.namespace, VariableOrigin::Declared);
                variable.push_def(def);
                self.variables.push(variable);
                self.names.insert(text, name);
                self.scopes[global.index()].implicit.push(id);
                id
            }
        };
        self.index_declared(var, node);
    }

    /// Implicit global for a JSX factory or fragment name found in no
    /// enclosing scope.
    pub(crate) fn define_implicit_jsx(&mut self, name: Name) {
        if self.implicit_global(name).is_some() {
            return;
        }
        let global = ScopeId::new(0);
        let id = VariableId::next_in(self.variables.len());
        let text = self.interner.lookup(name);
        self.variables.push(Variable::new(
            name,
            text,
            global,
            Namespace::VALUE,
            VariableOrigin::ImplicitJsx,
        ));
        self.names.insert(text, name);
        self.scopes[global.index()].implicit.push(id);
        trace!(var = ?id, name = text, "implicit jsx global");
    }
}
