//! Sharded string interner for identifier names.
//!
//! Front ends intern every identifier while building the AST; the scope
//! builder interns the handful of names it synthesizes (`arguments`, the JSX
//! pragma, ambient library globals). Several analyses may run on different
//! threads against one interner, so each shard sits behind its own `RwLock`.

use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHasher};

use super::Name;

/// A shard has no local index left for a new name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternError {
    pub shard: usize,
    pub len: usize,
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "interner shard {} is full at {} names (limit {})",
            self.shard,
            self.len,
            Name::MAX_LOCAL
        )
    }
}

impl std::error::Error for InternError {}

#[derive(Default)]
struct Shard {
    locals: FxHashMap<&'static str, u32>,
    texts: Vec<&'static str>,
}

impl Shard {
    /// Store `text`, returning its local index.
    fn insert(&mut self, shard: usize, text: &str) -> Result<u32, InternError> {
        let len = self.texts.len();
        let local = u32::try_from(len)
            .ok()
            .filter(|&local| local <= Name::MAX_LOCAL)
            .ok_or(InternError { shard, len })?;
        let text: &'static str = Box::leak(text.into());
        self.texts.push(text);
        self.locals.insert(text, local);
        Ok(local)
    }
}

/// Sharded string interner.
///
/// Interned strings are leaked, so lookups hand out `&'static str` without
/// holding a lock.
pub struct StringInterner {
    shards: [RwLock<Shard>; Name::NUM_SHARDS],
    count: AtomicUsize,
}

/// Names every analysis needs, interned up front.
const WELL_KNOWN: &[&str] = &[
    "arguments",
    "this",
    "eval",
    "undefined",
    "constructor",
    "default",
    "React",
    "use strict",
];

/// Shard of `text`. The empty string always lives at shard 0, local 0.
#[expect(
    clippy::cast_possible_truncation,
    reason = "reduced modulo NUM_SHARDS first"
)]
fn shard_of(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    let mut hasher = FxHasher::default();
    text.hash(&mut hasher);
    (hasher.finish() % Name::NUM_SHARDS as u64) as usize
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "shard is below NUM_SHARDS (16)"
)]
fn name_at(shard: usize, local: u32) -> Name {
    Name::new(shard as u32, local)
}

impl StringInterner {
    /// Create an interner holding the empty string and well-known JS names.
    pub fn new() -> Self {
        let interner = StringInterner {
            shards: std::array::from_fn(|_| RwLock::new(Shard::default())),
            count: AtomicUsize::new(0),
        };
        for text in std::iter::once("").chain(WELL_KNOWN.iter().copied()) {
            interner.intern(text);
        }
        interner
    }

    /// Intern a string, or report shard exhaustion.
    pub fn try_intern(&self, text: &str) -> Result<Name, InternError> {
        if let Some(name) = self.get(text) {
            return Ok(name);
        }
        let shard = shard_of(text);
        let mut guard = self.shards[shard].write();
        // Another thread may have inserted it between the two locks.
        let local = match guard.locals.get(text) {
            Some(&local) => local,
            None => {
                let local = guard.insert(shard, text)?;
                self.count.fetch_add(1, Ordering::Relaxed);
                local
            }
        };
        Ok(name_at(shard, local))
    }

    /// Intern a string.
    ///
    /// # Panics
    /// Panics if a shard holds more than `Name::MAX_LOCAL` names.
    #[inline]
    pub fn intern(&self, text: &str) -> Name {
        self.try_intern(text).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Text of an interned name.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.shards[name.shard()].read().texts[name.local()]
    }

    /// Name of `text` if it was interned before.
    pub fn get(&self, text: &str) -> Option<Name> {
        let shard = shard_of(text);
        let local = *self.shards[shard].read().locals.get(text)?;
        Some(name_at(shard, local))
    }

    /// Number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }

    /// Only the empty string is interned.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        StringInterner::new()
    }
}

impl std::fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StringInterner")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

/// Interner shared between a front end and concurrent analyses.
#[derive(Clone, Debug, Default)]
pub struct SharedInterner(Arc<StringInterner>);

impl SharedInterner {
    pub fn new() -> Self {
        SharedInterner::default()
    }
}

impl std::ops::Deref for SharedInterner {
    type Target = StringInterner;

    fn deref(&self) -> &StringInterner {
        &self.0
    }
}
