//! Flat AST for TypeScript-family programs.
//!
//! The front end hands over one [`Ast`]: an arena of [`NodeKind`]s with
//! parallel span and parent arrays and a flattened list store. Children are
//! referenced by [`NodeId`] or [`NodeRange`]; absent children are `None`.
//!
//! The node set follows the ESTree / TS-ESTree shapes closely enough that a
//! front end can lower into it one node at a time. Only the distinctions the
//! scope analysis observes are kept (e.g. assignment operators are kept,
//! template quasis are not).
//!
//! # Design
//!
//! - **Flatten everything**: no `Box<Node>`, children are `NodeId(u32)`
//! - **Intern everything**: identifier text is a [`Name`]
//! - **Parent links** are computed once by [`AstBuilder::finish`]

mod build;
mod children;
mod kind;

pub use build::AstBuilder;
pub use kind::{
    Accessibility, AssignOp, BinaryOp, Class, Function, Literal, LogicalOp, MethodKind,
    ModuleDeclKind, ModuleItemKind, NodeKind, PropertyKind, Signature, TsKeyword, TypeOperator,
    UnaryOp, UpdateOp, VarKind,
};

use smallvec::SmallVec;

use crate::{NodeId, NodeRange, Span};

/// Children of one node, in source order.
pub type Children = SmallVec<[NodeId; 8]>;

/// Immutable, fully linked program tree.
///
/// # Index Spaces
///
/// - `kinds`/`spans`/`parents`: parallel arrays indexed by [`NodeId`]
/// - `lists`: flat `Vec<NodeId>` indexed by [`NodeRange`]
#[derive(Clone, Debug)]
pub struct Ast {
    kinds: Vec<NodeKind>,
    spans: Vec<Span>,
    parents: Vec<Option<NodeId>>,
    lists: Vec<NodeId>,
    root: NodeId,
}

impl Ast {
    /// The root node, normally a `Program`.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes in the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Node kind, or `None` if the id does not belong to this arena.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&NodeKind> {
        self.kinds.get(id.index())
    }

    /// Node kind.
    ///
    /// # Panics
    /// Panics if `id` was not allocated in this arena. Use [`Ast::get`] for
    /// ids of unknown provenance.
    #[inline]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.kinds[id.index()]
    }

    /// Source span of a node.
    #[inline]
    pub fn span(&self, id: NodeId) -> Span {
        self.spans.get(id.index()).copied().unwrap_or(Span::DUMMY)
    }

    /// Enclosing node, `None` for the root.
    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents.get(id.index()).copied().flatten()
    }

    /// Resolve a range into the list store.
    #[inline]
    pub fn list(&self, range: NodeRange) -> &[NodeId] {
        self.lists.get(range.as_range()).unwrap_or(&[])
    }

    /// Children of a node, in source order.
    pub fn children(&self, id: NodeId) -> Children {
        let mut out = Children::new();
        if let Some(kind) = self.get(id) {
            kind.for_each_child(&self.lists, &mut |child| out.push(child));
        }
        out
    }

    /// Identifier text of an `Identifier`/`JsxIdentifier`/`PrivateIdentifier` node.
    pub fn identifier_name(&self, id: NodeId) -> Option<crate::Name> {
        match self.get(id)? {
            NodeKind::Identifier { name, .. }
            | NodeKind::JsxIdentifier { name }
            | NodeKind::PrivateIdentifier { name } => Some(*name),
            _ => None,
        }
    }

    /// All node ids in allocation order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.kinds.len()).map(|i| {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "arena length is bounded by u32 at allocation"
            )]
            let raw = i as u32;
            NodeId::new(raw)
        })
    }
}
