//! Identifier uses.

use bitflags::bitflags;
use lexis_ir::{Name, NodeId};

use crate::{Namespace, ScopeId, VariableId};

bitflags! {
    /// Read/write access of a reference; read-write sets both.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct ReferenceFlags: u8 {
        const READ = 1 << 0;
        const WRITE = 1 << 1;
    }
}

/// Why a resolved reference occurs before its binding is usable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EarlyAccess {
    /// The binding exists but holds no value yet (`var`, namespaces).
    BeforeInitialization,
    /// Block-scoped binding used inside its temporal dead zone.
    TemporalDeadZone,
    /// Type-level declaration used above it under a strict hoisting policy.
    BeforeTypeDeclaration,
}

/// One identifier occurrence that is a use rather than a declaration.
#[derive(Clone, Debug)]
pub struct Reference {
    pub(crate) identifier: NodeId,
    pub(crate) name: Name,
    pub(crate) from: ScopeId,
    pub(crate) resolved: Option<VariableId>,
    pub(crate) flags: ReferenceFlags,
    pub(crate) namespace: Namespace,
    pub(crate) init: bool,
    pub(crate) write_expr: Option<NodeId>,
    /// Assignment node when this write may create an implicit global.
    pub(crate) implicit_global: Option<NodeId>,
    pub(crate) early: Option<EarlyAccess>,
}

impl Reference {
    /// The identifier node.
    #[inline]
    pub fn identifier(&self) -> NodeId {
        self.identifier
    }

    #[inline]
    pub fn name(&self) -> Name {
        self.name
    }

    /// Scope the reference occurs in.
    #[inline]
    pub fn from(&self) -> ScopeId {
        self.from
    }

    /// Variable the reference resolved to; `None` when global/unresolved.
    #[inline]
    pub fn resolved(&self) -> Option<VariableId> {
        self.resolved
    }

    #[inline]
    pub fn flags(&self) -> ReferenceFlags {
        self.flags
    }

    #[inline]
    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    /// The write is the binding's own initializer (declarator init, parameter default).
    #[inline]
    pub fn init(&self) -> bool {
        self.init
    }

    /// Expression written to the identifier, if any.
    #[inline]
    pub fn write_expr(&self) -> Option<NodeId> {
        self.write_expr
    }

    /// Sloppy-mode write that creates an implicit global when unresolved.
    #[inline]
    pub fn maybe_implicit_global(&self) -> bool {
        self.implicit_global.is_some()
    }

    /// Forward-reference flag.
    #[inline]
    pub fn early(&self) -> Option<EarlyAccess> {
        self.early
    }

    #[inline]
    pub fn is_read(&self) -> bool {
        self.flags.contains(ReferenceFlags::READ)
    }

    #[inline]
    pub fn is_write(&self) -> bool {
        self.flags.contains(ReferenceFlags::WRITE)
    }

    #[inline]
    pub fn is_read_only(&self) -> bool {
        self.flags == ReferenceFlags::READ
    }

    #[inline]
    pub fn is_write_only(&self) -> bool {
        self.flags == ReferenceFlags::WRITE
    }

    #[inline]
    pub fn is_read_write(&self) -> bool {
        self.flags == ReferenceFlags::all()
    }

    #[inline]
    pub fn is_value_reference(&self) -> bool {
        self.namespace.is_value()
    }

    #[inline]
    pub fn is_type_reference(&self) -> bool {
        self.namespace.is_type()
    }
}
