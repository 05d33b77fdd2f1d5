//! Variables and the definitions that declare them.

use bitflags::bitflags;
use lexis_ir::ast::VarKind;
use lexis_ir::{Name, NodeId};
use lexis_lib::LibName;
use smallvec::SmallVec;

use crate::{ReferenceId, ScopeId};

bitflags! {
    /// Identifier spaces a declaration binds or a reference looks in.
    ///
    /// A runtime value and a compile-time type may share a name without
    /// shadowing each other; `Namespace::all()` is "both".
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct Namespace: u8 {
        const VALUE = 1 << 0;
        const TYPE = 1 << 1;
    }
}

impl Namespace {
    #[inline]
    pub const fn is_value(self) -> bool {
        self.contains(Namespace::VALUE)
    }

    #[inline]
    pub const fn is_type(self) -> bool {
        self.contains(Namespace::TYPE)
    }
}

/// What kind of construct declared a name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DefinitionKind {
    Parameter { rest: bool },
    Variable(VarKind),
    FunctionName,
    ClassName,
    CatchClause,
    ImportBinding,
    /// Type alias, interface, type parameter, `infer` parameter, mapped-type key.
    TypeAlias,
    EnumName,
    EnumMember,
    NamespaceName,
    /// Assignment to an undeclared name in sloppy script code.
    ImplicitGlobal,
}

impl DefinitionKind {
    /// Namespaces this kind binds when nothing else narrows it.
    pub const fn default_namespace(self) -> Namespace {
        match self {
            DefinitionKind::Parameter { .. }
            | DefinitionKind::Variable(_)
            | DefinitionKind::FunctionName
            | DefinitionKind::CatchClause
            | DefinitionKind::ImplicitGlobal => Namespace::VALUE,
            DefinitionKind::TypeAlias => Namespace::TYPE,
            DefinitionKind::ClassName
            | DefinitionKind::ImportBinding
            | DefinitionKind::EnumName
            | DefinitionKind::EnumMember
            | DefinitionKind::NamespaceName => Namespace::all(),
        }
    }
}

/// One declaring occurrence of a name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Definition {
    pub kind: DefinitionKind,
    /// The identifier (or string literal, for quoted enum members) bound.
    pub name: NodeId,
    /// The declaring construct: declarator, function, class, specifier, ...
    pub node: NodeId,
    /// Enclosing declaration statement, e.g. the `VariableDeclaration` of a
    /// declarator or the `ImportDeclaration` of a specifier.
    pub parent: Option<NodeId>,
    pub namespace: Namespace,
    /// Declared with `declare` or inside an ambient context.
    pub ambient: bool,
}

impl Definition {
    pub fn new(kind: DefinitionKind, name: NodeId, node: NodeId) -> Self {
        Definition {
            kind,
            name,
            node,
            parent: None,
            namespace: kind.default_namespace(),
            ambient: false,
        }
    }

    #[must_use]
    pub fn with_parent(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }

    #[must_use]
    pub fn with_namespace(mut self, namespace: Namespace) -> Self {
        self.namespace = namespace;
        self
    }

    #[must_use]
    pub fn with_ambient(mut self, ambient: bool) -> Self {
        self.ambient = ambient;
        self
    }
}

/// Where a variable came from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum VariableOrigin {
    /// Written in the analyzed program.
    Declared,
    /// `arguments` of a non-arrow function.
    ImplicitArguments,
    /// Seeded from the ambient libraries listed.
    Ambient { libs: SmallVec<[LibName; 4]> },
    /// JSX factory or fragment name that nothing declares.
    ImplicitJsx,
}

/// The identity of one name within one scope.
#[derive(Clone, Debug)]
pub struct Variable {
    pub(crate) name: Name,
    pub(crate) text: &'static str,
    pub(crate) scope: ScopeId,
    pub(crate) identifiers: Vec<NodeId>,
    pub(crate) defs: Vec<Definition>,
    pub(crate) references: Vec<ReferenceId>,
    pub(crate) namespace: Namespace,
    pub(crate) origin: VariableOrigin,
}

impl Variable {
    pub(crate) fn new(
        name: Name,
        text: &'static str,
        scope: ScopeId,
        namespace: Namespace,
        origin: VariableOrigin,
    ) -> Self {
        Variable {
            name,
            text,
            scope,
            identifiers: Vec::new(),
            defs: Vec::new(),
            references: Vec::new(),
            namespace,
            origin,
        }
    }

    #[inline]
    pub fn name(&self) -> Name {
        self.name
    }

    /// Name text.
    #[inline]
    pub fn text(&self) -> &'static str {
        self.text
    }

    /// Owning scope.
    #[inline]
    pub fn scope(&self) -> ScopeId {
        self.scope
    }

    /// Declaring identifiers, parallel to [`Variable::defs`].
    #[inline]
    pub fn identifiers(&self) -> &[NodeId] {
        &self.identifiers
    }

    /// Definitions in declaration order.
    #[inline]
    pub fn defs(&self) -> &[Definition] {
        &self.defs
    }

    /// References resolved to this variable, in resolution order.
    #[inline]
    pub fn references(&self) -> &[ReferenceId] {
        &self.references
    }

    #[inline]
    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    #[inline]
    pub fn origin(&self) -> &VariableOrigin {
        &self.origin
    }

    #[inline]
    pub fn is_value_variable(&self) -> bool {
        self.namespace.is_value()
    }

    #[inline]
    pub fn is_type_variable(&self) -> bool {
        self.namespace.is_type()
    }

    /// Seeded from an ambient library rather than declared by the program.
    #[inline]
    pub fn is_ambient(&self) -> bool {
        matches!(self.origin, VariableOrigin::Ambient { .. })
    }

    /// Synthesized (`arguments` or ambient) rather than declared.
    #[inline]
    pub fn is_implicit(&self) -> bool {
        !matches!(self.origin, VariableOrigin::Declared)
    }

    pub(crate) fn push_def(&mut self, def: Definition) {
        let claim = def.namespace;
        self.merge_def(def, claim);
    }

    /// Add `def`, widening the variable only into `claim`.
    pub(crate) fn merge_def(&mut self, def: Definition, claim: Namespace) {
        self.namespace |= def.namespace & claim;
        self.identifiers.push(def.name);
        self.defs.push(def);
    }
}
