//! Ambient globals seeded into the global scope before the walk.
//!
//! Building a seed flattens a `lib` setting into one name-keyed table. The
//! result is identical for every program analyzed under the same setting,
//! so callers build it once, wrap it in an `Arc`, and hand it to every
//! analysis.

use lexis_lib::{load_order, AmbientKind, LibName};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::Namespace;

/// One ambient global.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AmbientEntry {
    name: String,
    namespace: Namespace,
    /// Libraries that declare it, in load order. Empty for custom globals.
    libs: SmallVec<[LibName; 4]>,
}

impl AmbientEntry {
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    #[inline]
    pub fn libs(&self) -> &[LibName] {
        &self.libs
    }
}

fn namespace_of(kind: AmbientKind) -> Namespace {
    let mut namespace = Namespace::empty();
    namespace.set(Namespace::VALUE, kind.is_value());
    namespace.set(Namespace::TYPE, kind.is_type());
    namespace
}

/// Immutable table of ambient globals.
///
/// Entries are ordered by library load order, then by name within each
/// library. A name declared by several libraries is one entry whose
/// namespace and library list are the union of all of them.
#[derive(Clone, Debug, Default)]
pub struct AmbientSeed {
    libs: Vec<LibName>,
    entries: Vec<AmbientEntry>,
    index: FxHashMap<String, usize>,
}

impl AmbientSeed {
    /// Seed for a `lib` setting, dependencies included.
    pub fn new(roots: &[LibName]) -> Self {
        let mut seed = AmbientSeed::default();
        seed.extend_libs(roots);
        seed
    }

    /// Seed with no globals at all.
    pub fn empty() -> Self {
        AmbientSeed::default()
    }

    /// Add the libraries in `roots` (and their dependencies) not yet loaded.
    pub fn extend_libs(&mut self, roots: &[LibName]) {
        for lib in load_order(roots) {
            if self.libs.contains(&lib) {
                continue;
            }
            self.libs.push(lib);
            let mut own: Vec<_> = lib.definition().variables.to_vec();
            own.sort_by_key(|&(name, _)| name);
            for (name, kind) in own {
                self.insert(name, namespace_of(kind), Some(lib));
            }
        }
    }

    /// Add caller-defined globals (host environment, test frameworks).
    #[must_use]
    pub fn with_globals<'a>(
        mut self,
        globals: impl IntoIterator<Item = (&'a str, Namespace)>,
    ) -> Self {
        for (name, namespace) in globals {
            self.insert(name, namespace, None);
        }
        self
    }

    /// Merge another seed's entries into this one.
    #[must_use]
    pub fn union(mut self, other: &AmbientSeed) -> Self {
        for lib in &other.libs {
            if !self.libs.contains(lib) {
                self.libs.push(*lib);
            }
        }
        for entry in &other.entries {
            let slot = self.slot(&entry.name);
            let merged = &mut self.entries[slot];
            merged.namespace |= entry.namespace;
            for lib in &entry.libs {
                if !merged.libs.contains(lib) {
                    merged.libs.push(*lib);
                }
            }
        }
        self
    }

    fn slot(&mut self, name: &str) -> usize {
        if let Some(&slot) = self.index.get(name) {
            return slot;
        }
        let slot = self.entries.len();
        self.entries.push(AmbientEntry {
            name: name.to_owned(),
            namespace: Namespace::empty(),
            libs: SmallVec::new(),
        });
        self.index.insert(name.to_owned(), slot);
        slot
    }

    fn insert(&mut self, name: &str, namespace: Namespace, lib: Option<LibName>) {
        let slot = self.slot(name);
        let entry = &mut self.entries[slot];
        entry.namespace |= namespace;
        if let Some(lib) = lib {
            if !entry.libs.contains(&lib) {
                entry.libs.push(lib);
            }
        }
    }

    /// Loaded libraries in load order.
    #[inline]
    pub fn libs(&self) -> &[LibName] {
        &self.libs
    }

    #[inline]
    pub fn entries(&self) -> &[AmbientEntry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&AmbientEntry> {
        self.index.get(name).map(|&slot| &self.entries[slot])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
