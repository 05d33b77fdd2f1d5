//! Lexis IR - input contract for the scope analysis
//!
//! This crate holds the data the parsing front end hands to `lexis_scope`:
//! - Spans for source locations
//! - Names for interned identifiers
//! - The flat AST arena (`Ast`, `NodeKind`, `NodeId`)
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifier text becomes `Name(u32)`
//! - **Flatten Everything**: no `Box<Node>`, children are `NodeId(u32)` indices
//!   or `NodeRange`s into a shared list store
//! - **Identity by index**: the scope analysis keys every side table by `NodeId`
//!
//! Literals that contain floats store them as u64 bits for Hash compatibility.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod interner;
mod name;
mod node_id;
mod span;

pub use ast::{Ast, AstBuilder, Children, NodeKind};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use node_id::{NodeId, NodeRange};
pub use span::{Span, SpanError};
