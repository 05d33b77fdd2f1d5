//! AST walk that builds the scope tree.
//!
//! One recursive pass. Scope-introducing nodes push a [`Frame`]; each frame
//! collects the references made while it is open, and closing the frame
//! resolves them (see `resolve.rs`). Declarations are recorded the moment
//! they are met, so by the time a scope closes every name it declares is in
//! its symbol table.
//!
//! The visitor is split by construct family:
//! - `mod.rs`: scope stack, statements, expressions
//! - `patterns.rs`: destructuring targets and assignments
//! - `functions.rs` / `classes.rs`: callable and class bodies
//! - `modules.rs`: imports, exports, namespaces, enums
//! - `types.rs`: type positions
//! - `jsx.rs`: JSX elements and the implicit factory reference

mod classes;
mod functions;
mod jsx;
mod modules;
mod patterns;
mod types;

use lexis_ir::ast::{ModuleItemKind, NodeKind};
use lexis_ir::{Ast, Name, NodeId, NodeRange, StringInterner};
use lexis_stack::ensure_sufficient_stack;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::trace;

use crate::{
    AmbientSeed, AnalyzeError, AnalyzeOptions, Definition, Namespace, Reference, ReferenceFlags,
    ReferenceId, Scope, ScopeId, ScopeKind, ScopeManager, Variable, VariableId, VariableOrigin,
};

/// An open scope and the references still waiting to be resolved in it.
pub(crate) struct Frame {
    pub(crate) scope: ScopeId,
    pub(crate) left: Vec<ReferenceId>,
}

/// How a reference touches its identifier.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Access {
    flags: ReferenceFlags,
    namespace: Namespace,
    init: bool,
    write_expr: Option<NodeId>,
    implicit_global: Option<NodeId>,
}

impl Access {
    pub(crate) const fn read(namespace: Namespace) -> Self {
        Access {
            flags: ReferenceFlags::READ,
            namespace,
            init: false,
            write_expr: None,
            implicit_global: None,
        }
    }

    pub(crate) const fn write(
        write_expr: Option<NodeId>,
        init: bool,
        implicit_global: Option<NodeId>,
    ) -> Self {
        Access {
            flags: ReferenceFlags::WRITE,
            namespace: Namespace::VALUE,
            init,
            write_expr,
            implicit_global,
        }
    }

    pub(crate) const fn read_write(write_expr: Option<NodeId>) -> Self {
        Access {
            flags: ReferenceFlags::all(),
            namespace: Namespace::VALUE,
            init: false,
            write_expr,
            implicit_global: None,
        }
    }
}

pub(crate) struct Builder<'a> {
    pub(crate) ast: &'a Ast,
    pub(crate) interner: &'a StringInterner,
    pub(crate) options: &'a AnalyzeOptions,
    pub(crate) scopes: Vec<Scope>,
    pub(crate) variables: Vec<Variable>,
    pub(crate) references: Vec<Reference>,
    pub(crate) node_scopes: FxHashMap<NodeId, SmallVec<[ScopeId; 2]>>,
    pub(crate) declared: FxHashMap<NodeId, SmallVec<[VariableId; 2]>>,
    pub(crate) names: FxHashMap<&'static str, Name>,
    pub(crate) stack: Vec<Frame>,
    /// Nesting depth of `declare` contexts (`declare namespace`, `declare global`).
    ambient_depth: u32,
    arguments: Name,
    jsx: jsx::JsxState,
}

impl<'a> Builder<'a> {
    pub(crate) fn new(
        ast: &'a Ast,
        interner: &'a StringInterner,
        options: &'a AnalyzeOptions,
    ) -> Result<Self, AnalyzeError> {
        Ok(Builder {
            ast,
            interner,
            options,
            scopes: Vec::new(),
            variables: Vec::new(),
            references: Vec::new(),
            node_scopes: FxHashMap::default(),
            declared: FxHashMap::default(),
            names: FxHashMap::default(),
            stack: Vec::new(),
            ambient_depth: 0,
            arguments: interner.try_intern("arguments")?,
            jsx: jsx::JsxState::new(interner, options)?,
        })
    }

    /// Walk the program and hand over the finished tree.
    pub(crate) fn build(mut self, seed: &AmbientSeed) -> Result<ScopeManager, AnalyzeError> {
        let root = self.ast.root();
        let NodeKind::Program { body } = *self.kind(root)? else {
            return Err(AnalyzeError::RootNotProgram {
                node: root,
                found: self.kind(root)?.type_name(),
            });
        };

        let prologue_strict = self.has_use_strict(body)?;
        let global_strict =
            !self.options.global_return && !self.options.is_module() && prologue_strict;
        self.open_with(ScopeKind::Global, root, global_strict);
        self.seed_globals(seed)?;
        if self.options.global_return {
            self.open_with(ScopeKind::Function, root, prologue_strict);
            self.define_arguments();
        }
        if self.options.is_module() {
            self.open(ScopeKind::Module, root)?;
        }
        if self.options.implied_strict {
            let current = self.current();
            self.scopes[current.index()].is_strict = true;
        }

        self.visit_list(body)?;
        while !self.stack.is_empty() {
            self.close_scope()?;
        }

        Ok(ScopeManager {
            scopes: self.scopes,
            variables: self.variables,
            references: self.references,
            node_scopes: self.node_scopes,
            declared: self.declared,
            names: self.names,
            options: self.options.clone(),
            ambient_libs: seed.libs().to_vec(),
        })
    }

    // Node access

    pub(crate) fn kind(&self, node: NodeId) -> Result<&'a NodeKind, AnalyzeError> {
        self.ast.get(node).ok_or(AnalyzeError::NodeOutOfRange { node })
    }

    #[inline]
    pub(crate) fn list(&self, range: NodeRange) -> &'a [NodeId] {
        self.ast.list(range)
    }

    fn unexpected(&self, node: NodeId, context: &'static str) -> AnalyzeError {
        match self.ast.get(node) {
            Some(kind) => AnalyzeError::UnexpectedNode {
                node,
                found: kind.type_name(),
                context,
            },
            None => AnalyzeError::NodeOutOfRange { node },
        }
    }

    /// Name bound by a declaring node: an identifier, or a string literal
    /// for quoted enum members.
    fn binding_name(&self, node: NodeId) -> Result<Name, AnalyzeError> {
        match self.kind(node)? {
            NodeKind::Identifier { name, .. } | NodeKind::JsxIdentifier { name } => Ok(*name),
            NodeKind::Literal(lexis_ir::ast::Literal::String(name)) => Ok(*name),
            _ => Err(self.unexpected(node, "binding name")),
        }
    }

    /// Whether a statement list starts with a `"use strict"` directive.
    pub(crate) fn has_use_strict(&self, body: NodeRange) -> Result<bool, AnalyzeError> {
        for &stmt in self.list(body) {
            let NodeKind::ExpressionStatement {
                directive: Some(directive),
                ..
            } = *self.kind(stmt)?
            else {
                break;
            };
            if self.interner.lookup(directive) == "use strict" {
                return Ok(true);
            }
        }
        Ok(false)
    }

    // Scope stack

    #[inline]
    pub(crate) fn current(&self) -> ScopeId {
        self.stack.last().map_or(ScopeId::new(0), |frame| frame.scope)
    }

    #[inline]
    pub(crate) fn current_scope(&self) -> &Scope {
        &self.scopes[self.current().index()]
    }

    pub(crate) fn in_ambient_context(&self) -> bool {
        self.ambient_depth > 0
    }

    /// Open a scope whose strictness follows from its parent and its kind.
    pub(crate) fn open(&mut self, kind: ScopeKind, block: NodeId) -> Result<ScopeId, AnalyzeError> {
        let inherited = self.stack.last().is_some_and(|f| self.scopes[f.scope.index()].is_strict);
        let strict = inherited
            || match kind {
                ScopeKind::Module | ScopeKind::Class => true,
                ScopeKind::Function => match self.kind(block)?.as_function() {
                    Some(func) => self.function_body_is_strict(func)?,
                    None => false,
                },
                _ => false,
            };
        Ok(self.open_with(kind, block, strict))
    }

    fn function_body_is_strict(&self, func: &lexis_ir::ast::Function) -> Result<bool, AnalyzeError> {
        match func.body {
            Some(body) => match *self.kind(body)? {
                NodeKind::BlockStatement { body } => self.has_use_strict(body),
                _ => Ok(false),
            },
            None => Ok(false),
        }
    }

    fn open_with(&mut self, kind: ScopeKind, block: NodeId, is_strict: bool) -> ScopeId {
        let id = ScopeId::next_in(self.scopes.len());
        let parent = self.stack.last().map(|frame| frame.scope);
        let variable_scope = if kind.is_variable_scope() {
            id
        } else {
            parent.map_or(id, |p| self.scopes[p.index()].variable_scope)
        };
        self.scopes
            .push(Scope::new(kind, block, parent, variable_scope, is_strict));
        if let Some(parent) = parent {
            self.scopes[parent.index()].children.push(id);
        }
        self.node_scopes.entry(block).or_default().push(id);
        self.stack.push(Frame {
            scope: id,
            left: Vec::new(),
        });
        trace!(scope = ?id, %kind, ?block, is_strict, "open scope");
        id
    }

    /// Close every open scope whose block is `node`.
    pub(crate) fn close(&mut self, node: NodeId) -> Result<(), AnalyzeError> {
        while self.stack.len() > 1 && self.current_scope().block == node {
            self.close_scope()?;
        }
        Ok(())
    }

    // Declarations

    /// Record `def` in `scope`, merging with a same-named variable whose
    /// namespaces overlap.
    pub(crate) fn define(&mut self, scope: ScopeId, def: Definition) -> Result<VariableId, AnalyzeError> {
        let name = self.binding_name(def.name)?;
        let (node, parent) = (def.node, def.parent);
        let slots = self.scopes[scope.index()].symbols.entry(name).or_default();
        let var = match slots.get(def.namespace) {
            Some(existing) => {
                let claim = slots.claimable(def.namespace, existing);
                self.variables[existing.index()].merge_def(def, claim);
                existing
            }
            None => {
                let id = VariableId::next_in(self.variables.len());
                let text = self.interner.lookup(name);
                let mut var = Variable::new(name, text, scope, Namespace::empty(), VariableOrigin::Declared);
                var.push_def(def);
                self.variables.push(var);
                self.names.insert(text, name);
                self.scopes[scope.index()].variables.push(id);
                id
            }
        };
        let namespace = self.variables[var.index()].namespace;
        self.scopes[scope.index()]
            .symbols
            .entry(name)
            .or_default()
            .fill(namespace, var);
        self.index_declared(var, node);
        if let Some(parent) = parent {
            self.index_declared(var, parent);
        }
        trace!(?var, name = self.interner.lookup(name), ?scope, "define");
        Ok(var)
    }

    /// Define in the current scope.
    pub(crate) fn define_here(&mut self, def: Definition) -> Result<VariableId, AnalyzeError> {
        self.define(self.current(), def)
    }

    pub(crate) fn index_declared(&mut self, var: VariableId, node: NodeId) {
        let vars = self.declared.entry(node).or_default();
        if !vars.contains(&var) {
            vars.push(var);
        }
    }

    /// `arguments` of the function scope just opened.
    pub(crate) fn define_arguments(&mut self) {
        let scope = self.current();
        let name = self.arguments;
        let id = VariableId::next_in(self.variables.len());
        let text = self.interner.lookup(name);
        self.variables.push(Variable::new(
            name,
            text,
            scope,
            Namespace::VALUE,
            VariableOrigin::ImplicitArguments,
        ));
        self.names.insert(text, name);
        let scope = &mut self.scopes[scope.index()];
        scope.variables.push(id);
        scope.symbols.entry(name).or_default().fill(Namespace::VALUE, id);
    }

    /// Add the seed's globals to the global scope. Entries already present
    /// as ambient variables are augmented in place.
    pub(crate) fn seed_globals(&mut self, seed: &AmbientSeed) -> Result<(), AnalyzeError> {
        let global = ScopeId::new(0);
        for entry in seed.entries() {
            let name = self.interner.try_intern(entry.name())?;
            let existing = self.scopes[global.index()]
                .lookup(name, entry.namespace())
                .filter(|&var| self.variables[var.index()].is_ambient());
            let var = match existing {
                Some(var) => {
                    let variable = &mut self.variables[var.index()];
                    variable.namespace |= entry.namespace();
                    if let VariableOrigin::Ambient { libs } = &mut variable.origin {
                        for lib in entry.libs() {
                            if !libs.contains(lib) {
                                libs.push(*lib);
                            }
                        }
                    }
                    var
                }
                None => {
                    let id = VariableId::next_in(self.variables.len());
                    let text = self.interner.lookup(name);
                    self.variables.push(Variable::new(
                        name,
                        text,
                        global,
                        entry.namespace(),
                        VariableOrigin::Ambient {
                            libs: entry.libs().iter().copied().collect(),
                        },
                    ));
                    self.names.insert(text, name);
                    self.scopes[global.index()].variables.push(id);
                    id
                }
            };
            let namespace = self.variables[var.index()].namespace;
            self.scopes[global.index()]
                .symbols
                .entry(name)
                .or_default()
                .fill(namespace, var);
        }
        trace!(entries = seed.len(), "seeded globals");
        Ok(())
    }

    // References

    /// Record a use of `identifier` in the current scope.
    pub(crate) fn reference(&mut self, identifier: NodeId, access: Access) -> Result<ReferenceId, AnalyzeError> {
        let scope = self.current();
        self.reference_in(scope, identifier, access)
    }

    pub(crate) fn read(&mut self, identifier: NodeId, namespace: Namespace) -> Result<ReferenceId, AnalyzeError> {
        self.reference(identifier, Access::read(namespace))
    }

    /// Record a use attributed to an enclosing open scope.
    pub(crate) fn reference_in(
        &mut self,
        scope: ScopeId,
        identifier: NodeId,
        access: Access,
    ) -> Result<ReferenceId, AnalyzeError> {
        let Some(name) = self.ast.identifier_name(identifier) else {
            return Err(self.unexpected(identifier, "reference"));
        };
        let id = ReferenceId::next_in(self.references.len());
        self.references.push(Reference {
            identifier,
            name,
            from: scope,
            resolved: None,
            flags: access.flags,
            namespace: access.namespace,
            init: access.init,
            write_expr: access.write_expr,
            implicit_global: access.implicit_global,
            early: None,
        });
        self.scopes[scope.index()].references.push(id);
        if let Some(frame) = self.stack.iter_mut().rev().find(|f| f.scope == scope) {
            frame.left.push(id);
        }
        Ok(id)
    }

    // Statements and expressions

    pub(crate) fn visit_list(&mut self, range: NodeRange) -> Result<(), AnalyzeError> {
        for &node in self.list(range) {
            self.visit(node)?;
        }
        Ok(())
    }

    pub(crate) fn visit_opt(&mut self, node: Option<NodeId>) -> Result<(), AnalyzeError> {
        match node {
            Some(node) => self.visit(node),
            None => Ok(()),
        }
    }

    fn visit_children(&mut self, node: NodeId) -> Result<(), AnalyzeError> {
        for child in self.ast.children(node) {
            self.visit(child)?;
        }
        Ok(())
    }

    /// Visit a node in value position.
    pub(crate) fn visit(&mut self, node: NodeId) -> Result<(), AnalyzeError> {
        ensure_sufficient_stack(|| self.visit_inner(node))
    }

    fn visit_inner(&mut self, node: NodeId) -> Result<(), AnalyzeError> {
        let kind = self.kind(node)?;
        if kind.is_jsx() {
            return self.visit_jsx(node, kind);
        }
        if types::is_type_node(kind) {
            return self.visit_type(node);
        }
        match kind {
            NodeKind::Program { .. } => Err(self.unexpected(node, "nested program")),
            NodeKind::Identifier {
                type_annotation, ..
            } => {
                self.read(node, Namespace::VALUE)?;
                self.visit_type_opt(*type_annotation)
            }
            NodeKind::PrivateIdentifier { .. }
            | NodeKind::Literal(_)
            | NodeKind::EmptyStatement
            | NodeKind::DebuggerStatement
            | NodeKind::BreakStatement { .. }
            | NodeKind::ContinueStatement { .. }
            | NodeKind::ThisExpression
            | NodeKind::Super
            | NodeKind::Elision
            | NodeKind::MetaProperty { .. }
            | NodeKind::TsNamespaceExportDeclaration { .. }
            | NodeKind::TsExternalModuleReference { .. }
            | NodeKind::ExportAllDeclaration { .. } => Ok(()),

            NodeKind::BlockStatement { body } => {
                self.open(ScopeKind::Block, node)?;
                self.visit_list(*body)?;
                self.close(node)
            }
            NodeKind::LabeledStatement { body, .. } => self.visit(*body),
            NodeKind::ForStatement {
                init,
                test,
                update,
                body,
            } => {
                if let Some(init) = *init {
                    self.open_for_scope(node, init)?;
                }
                self.visit_opt(*init)?;
                self.visit_opt(*test)?;
                self.visit_opt(*update)?;
                self.visit(*body)?;
                self.close(node)
            }
            NodeKind::ForInStatement { left, right, body }
            | NodeKind::ForOfStatement {
                left, right, body, ..
            } => self.visit_for_in(node, *left, *right, *body),
            NodeKind::SwitchStatement {
                discriminant,
                cases,
            } => {
                self.visit(*discriminant)?;
                self.open(ScopeKind::Switch, node)?;
                self.visit_list(*cases)?;
                self.close(node)
            }
            NodeKind::CatchClause { param, body } => {
                self.open(ScopeKind::Catch, node)?;
                if let Some(param) = *param {
                    let pattern = self.collect_pattern(param)?;
                    for target in &pattern.targets {
                        self.define_here(Definition::new(
                            crate::DefinitionKind::CatchClause,
                            target.identifier,
                            node,
                        ))?;
                        self.reference_defaults(target, None, true)?;
                    }
                    self.visit_pattern_extras(&pattern)?;
                }
                self.visit(*body)?;
                self.close(node)
            }
            NodeKind::WithStatement { object, body } => {
                self.visit(*object)?;
                self.open(ScopeKind::With, node)?;
                self.visit(*body)?;
                self.close(node)
            }
            NodeKind::VariableDeclaration { .. } => self.visit_variable_declaration(node),
            NodeKind::VariableDeclarator { .. } => {
                Err(self.unexpected(node, "statement position"))
            }

            NodeKind::FunctionDeclaration(func)
            | NodeKind::FunctionExpression(func)
            | NodeKind::ArrowFunctionExpression(func)
            | NodeKind::TsDeclareFunction(func)
            | NodeKind::TsEmptyBodyFunctionExpression(func) => self.visit_function(node, func),
            NodeKind::ClassDeclaration(class) | NodeKind::ClassExpression(class) => {
                self.visit_class(node, class)
            }
            NodeKind::ClassBody { body } => self.visit_class_members(*body),
            NodeKind::MethodDefinition { .. }
            | NodeKind::PropertyDefinition { .. }
            | NodeKind::AccessorProperty { .. }
            | NodeKind::StaticBlock { .. }
            | NodeKind::TsIndexSignature { .. } => self.visit_class_member(node),

            NodeKind::ImportDeclaration { .. } => self.visit_import(node),
            NodeKind::ImportSpecifier { .. }
            | NodeKind::ImportDefaultSpecifier { .. }
            | NodeKind::ImportNamespaceSpecifier { .. }
            | NodeKind::ExportSpecifier { .. } => Err(self.unexpected(node, "statement position")),
            NodeKind::ExportNamedDeclaration { .. } => self.visit_export_named(node),
            NodeKind::ExportDefaultDeclaration { declaration } => {
                self.visit_export_default(*declaration)
            }
            NodeKind::TsExportAssignment { expression } => self.visit_export_default(*expression),
            NodeKind::TsImportEqualsDeclaration { .. } => self.visit_import_equals(node),

            NodeKind::Property {
                key,
                value,
                computed,
                ..
            } => {
                if *computed {
                    self.visit(*key)?;
                }
                self.visit(*value)
            }
            NodeKind::UpdateExpression { argument, .. } => {
                if matches!(self.kind(*argument)?, NodeKind::Identifier { .. }) {
                    self.reference(*argument, Access::read_write(None))?;
                    Ok(())
                } else {
                    self.visit(*argument)
                }
            }
            NodeKind::AssignmentExpression { .. } => self.visit_assignment(node),
            NodeKind::CallExpression {
                callee,
                arguments,
                type_arguments,
                ..
            }
            | NodeKind::NewExpression {
                callee,
                arguments,
                type_arguments,
            } => {
                self.visit(*callee)?;
                self.visit_type_opt(*type_arguments)?;
                self.visit_list(*arguments)
            }
            NodeKind::TaggedTemplateExpression {
                tag,
                quasi,
                type_arguments,
            } => {
                self.visit(*tag)?;
                self.visit_type_opt(*type_arguments)?;
                self.visit(*quasi)
            }
            NodeKind::MemberExpression {
                object,
                property,
                computed,
                ..
            } => {
                self.visit(*object)?;
                if *computed {
                    self.visit(*property)?;
                }
                Ok(())
            }
            NodeKind::TsAsExpression {
                expression,
                type_annotation,
            }
            | NodeKind::TsSatisfiesExpression {
                expression,
                type_annotation,
            }
            | NodeKind::TsTypeAssertion {
                type_annotation,
                expression,
            } => {
                self.visit(*expression)?;
                self.visit_type(*type_annotation)
            }
            NodeKind::TsInstantiationExpression {
                expression,
                type_arguments,
            } => {
                self.visit(*expression)?;
                self.visit_type(*type_arguments)
            }
            NodeKind::ObjectPattern { .. }
            | NodeKind::ArrayPattern { .. }
            | NodeKind::RestElement { .. }
            | NodeKind::AssignmentPattern { .. }
            | NodeKind::TsParameterProperty { .. } => Err(self.unexpected(node, "expression position")),
            NodeKind::Decorator { expression } => self.visit(*expression),

            NodeKind::TsTypeAliasDeclaration { .. } | NodeKind::TsInterfaceDeclaration { .. } => {
                self.visit_type_declaration(node)
            }
            NodeKind::TsEnumDeclaration { .. } => self.visit_enum(node),
            NodeKind::TsEnumMember { .. } => Err(self.unexpected(node, "statement position")),
            NodeKind::TsModuleDeclaration { .. } => self.visit_module_declaration(node),
            NodeKind::TsModuleBlock { body } => self.visit_list(*body),

            _ => self.visit_children(node),
        }
    }

    /// `for (let ...; ...)` and friends get a scope for the head bindings.
    fn open_for_scope(&mut self, node: NodeId, head: NodeId) -> Result<(), AnalyzeError> {
        if let NodeKind::VariableDeclaration { kind, .. } = self.kind(head)? {
            if !kind.is_var() {
                self.open(ScopeKind::For, node)?;
            }
        }
        Ok(())
    }

    fn visit_for_in(
        &mut self,
        node: NodeId,
        left: NodeId,
        right: NodeId,
        body: NodeId,
    ) -> Result<(), AnalyzeError> {
        self.open_for_scope(node, left)?;
        if let NodeKind::VariableDeclaration { declarations, .. } = *self.kind(left)? {
            self.visit_variable_declaration(left)?;
            if let Some(&declarator) = self.list(declarations).first() {
                let NodeKind::VariableDeclarator { id, .. } = *self.kind(declarator)? else {
                    return Err(self.unexpected(declarator, "for-in head"));
                };
                let pattern = self.collect_pattern(id)?;
                for target in &pattern.targets {
                    self.reference(target.identifier, Access::write(Some(right), true, None))?;
                }
            }
        } else {
            self.visit_assignment_target(node, left, Some(right))?;
        }
        self.visit(right)?;
        self.visit(body)?;
        self.close(node)
    }

    fn visit_variable_declaration(&mut self, node: NodeId) -> Result<(), AnalyzeError> {
        let NodeKind::VariableDeclaration {
            kind,
            declarations,
            declare,
        } = *self.kind(node)?
        else {
            return Err(self.unexpected(node, "variable declaration"));
        };
        let target_scope = if kind.is_var() {
            self.current_scope().variable_scope
        } else {
            self.current()
        };
        let ambient = declare || self.in_ambient_context();
        for &declarator in self.list(declarations) {
            let NodeKind::VariableDeclarator { id, init } = *self.kind(declarator)? else {
                return Err(self.unexpected(declarator, "variable declaration"));
            };
            let pattern = self.collect_pattern(id)?;
            for target in &pattern.targets {
                let def = Definition::new(
                    crate::DefinitionKind::Variable(kind),
                    target.identifier,
                    declarator,
                )
                .with_parent(node)
                .with_ambient(ambient);
                self.define(target_scope, def)?;
                self.reference_defaults(target, None, true)?;
                if let Some(init) = init {
                    self.reference(target.identifier, Access::write(Some(init), true, None))?;
                }
            }
            self.visit_pattern_extras(&pattern)?;
            self.visit_opt(init)?;
        }
        Ok(())
    }

    /// Enter a `declare` context for the duration of `f`.
    pub(crate) fn with_ambient<R>(
        &mut self,
        ambient: bool,
        f: impl FnOnce(&mut Self) -> Result<R, AnalyzeError>,
    ) -> Result<R, AnalyzeError> {
        if ambient {
            self.ambient_depth += 1;
        }
        let result = f(self);
        if ambient {
            self.ambient_depth -= 1;
        }
        result
    }

    /// Namespace an import or export specifier binds or references.
    pub(crate) fn item_namespace(declaration: ModuleItemKind, specifier: ModuleItemKind) -> Namespace {
        if declaration.is_type() || specifier.is_type() {
            Namespace::TYPE
        } else {
            Namespace::all()
        }
    }
}
