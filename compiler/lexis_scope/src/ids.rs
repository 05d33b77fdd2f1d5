//! Arena handles for scopes, variables, and references.

/// Defines a `u32` index newtype with `new`/`index`/`raw` and a compact `Debug`.
macro_rules! define_id {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => { $(
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub const fn new(index: u32) -> Self {
                Self(index)
            }

            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }

            /// Handle for the next slot of an arena of length `len`.
            #[inline]
            pub(crate) fn next_in(len: usize) -> Self {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "arenas are bounded by the u32 node arena they are built from"
                )]
                let raw = len as u32;
                Self(raw)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    )* };
}

define_id!(
    /// Index into `ScopeManager::scopes`.
    ScopeId,
    /// Index into the variable arena.
    VariableId,
    /// Index into the reference arena.
    ReferenceId,
);

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{ReferenceId, ScopeId, VariableId};
    lexis_ir::static_assert_size!(ScopeId, 4);
    lexis_ir::static_assert_size!(VariableId, 4);
    lexis_ir::static_assert_size!(ReferenceId, 4);
}
