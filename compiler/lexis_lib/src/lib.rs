//! Lexis Lib - ambient library catalogue
//!
//! The globals that a TypeScript `lib` setting makes visible before any user
//! code runs: `Array`, `Promise`, `PropertyKey`, `document`, and so on. Each
//! library names the libraries it builds on and the globals it declares,
//! tagged with the namespaces they occupy.
//!
//! The catalogue is static data. Turning a `lib` list into bindings is the
//! scope analysis' job (`lexis_scope::AmbientSeed`); this crate only answers
//! "what does `es2018` contain" and "in which order do its parts load".

mod data;
mod name;

use rustc_hash::FxHashSet;

pub use name::{LibName, LibNameError};

/// Library loaded when no `lib` is configured.
pub const DEFAULT_LIB: LibName = LibName::Es2018;

/// Namespaces an ambient global occupies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AmbientKind {
    /// Interface or type alias only (`PropertyKey`, `Partial`).
    Type,
    /// Runtime value only (`NaN`, `Reflect`).
    Value,
    /// Both (`Array`, `Map`).
    TypeValue,
}

impl AmbientKind {
    #[inline]
    pub const fn is_type(self) -> bool {
        matches!(self, AmbientKind::Type | AmbientKind::TypeValue)
    }

    #[inline]
    pub const fn is_value(self) -> bool {
        matches!(self, AmbientKind::Value | AmbientKind::TypeValue)
    }
}

/// Contents of one library.
#[derive(Debug)]
pub struct LibDefinition {
    /// Libraries this one references; loaded first.
    pub libs: &'static [LibName],
    /// Globals declared directly by this library, in declaration order.
    pub variables: &'static [(&'static str, AmbientKind)],
}

impl LibName {
    /// Static contents of this library.
    pub fn definition(self) -> &'static LibDefinition {
        match self {
            LibName::Lib => &data::LIB,
            LibName::Es5 => &data::ES5,
            LibName::Es2015 => &data::ES2015,
            LibName::Es2015Collection => &data::ES2015_COLLECTION,
            LibName::Es2015Core => &data::ES2015_CORE,
            LibName::Es2015Generator => &data::ES2015_GENERATOR,
            LibName::Es2015Iterable => &data::ES2015_ITERABLE,
            LibName::Es2015Promise => &data::ES2015_PROMISE,
            LibName::Es2015Proxy => &data::ES2015_PROXY,
            LibName::Es2015Reflect => &data::ES2015_REFLECT,
            LibName::Es2015Symbol => &data::ES2015_SYMBOL,
            LibName::Es2015SymbolWellknown => &data::ES2015_SYMBOL_WELLKNOWN,
            LibName::Es2016 => &data::ES2016,
            LibName::Es2016ArrayInclude => &data::ES2016_ARRAY_INCLUDE,
            LibName::Es2016Intl => &data::ES2016_INTL,
            LibName::Es2017 => &data::ES2017,
            LibName::Es2017Date => &data::ES2017_DATE,
            LibName::Es2017Intl => &data::ES2017_INTL,
            LibName::Es2017Object => &data::ES2017_OBJECT,
            LibName::Es2017Sharedmemory => &data::ES2017_SHAREDMEMORY,
            LibName::Es2017String => &data::ES2017_STRING,
            LibName::Es2017Typedarrays => &data::ES2017_TYPEDARRAYS,
            LibName::Es2018 => &data::ES2018,
            LibName::Es2018Asyncgenerator => &data::ES2018_ASYNCGENERATOR,
            LibName::Es2018Asynciterable => &data::ES2018_ASYNCITERABLE,
            LibName::Es2018Intl => &data::ES2018_INTL,
            LibName::Es2018Promise => &data::ES2018_PROMISE,
            LibName::Es2018Regexp => &data::ES2018_REGEXP,
            LibName::Es2019 => &data::ES2019,
            LibName::Es2019Array => &data::ES2019_ARRAY,
            LibName::Es2019Intl => &data::ES2019_INTL,
            LibName::Es2019Object => &data::ES2019_OBJECT,
            LibName::Es2019String => &data::ES2019_STRING,
            LibName::Es2019Symbol => &data::ES2019_SYMBOL,
            LibName::Es2019Full => &data::ES2019_FULL,
            LibName::Es2020 => &data::ES2020,
            LibName::Es2020Bigint => &data::ES2020_BIGINT,
            LibName::Es2020Date => &data::ES2020_DATE,
            LibName::Es2020Intl => &data::ES2020_INTL,
            LibName::Es2020Number => &data::ES2020_NUMBER,
            LibName::Es2020Promise => &data::ES2020_PROMISE,
            LibName::Es2020Sharedmemory => &data::ES2020_SHAREDMEMORY,
            LibName::Es2020String => &data::ES2020_STRING,
            LibName::Es2020SymbolWellknown => &data::ES2020_SYMBOL_WELLKNOWN,
            LibName::Es2021 => &data::ES2021,
            LibName::Es2021Intl => &data::ES2021_INTL,
            LibName::Es2021Promise => &data::ES2021_PROMISE,
            LibName::Es2021String => &data::ES2021_STRING,
            LibName::Es2021Weakref => &data::ES2021_WEAKREF,
            LibName::Es2022 => &data::ES2022,
            LibName::Es2022Array => &data::ES2022_ARRAY,
            LibName::Es2022Error => &data::ES2022_ERROR,
            LibName::Es2022Intl => &data::ES2022_INTL,
            LibName::Es2022Object => &data::ES2022_OBJECT,
            LibName::Es2022Regexp => &data::ES2022_REGEXP,
            LibName::Es2022String => &data::ES2022_STRING,
            LibName::Es2023 => &data::ES2023,
            LibName::Es2023Array => &data::ES2023_ARRAY,
            LibName::Es2023Collection => &data::ES2023_COLLECTION,
            LibName::Esnext => &data::ESNEXT,
            LibName::EsnextDecorators => &data::ESNEXT_DECORATORS,
            LibName::Decorators => &data::DECORATORS,
            LibName::DecoratorsLegacy => &data::DECORATORS_LEGACY,
            LibName::Dom => &data::DOM,
            LibName::DomIterable => &data::DOM_ITERABLE,
            LibName::DomAsynciterable => &data::DOM_ASYNCITERABLE,
            LibName::WebworkerImportscripts => &data::WEBWORKER_IMPORTSCRIPTS,
            LibName::Scripthost => &data::SCRIPTHOST,
        }
    }
}

/// Expand a `lib` setting into load order.
///
/// Referenced libraries come before the library that references them, and
/// every library appears once, at its first position.
pub fn load_order(roots: &[LibName]) -> Vec<LibName> {
    fn visit(lib: LibName, seen: &mut FxHashSet<LibName>, out: &mut Vec<LibName>) {
        if !seen.insert(lib) {
            return;
        }
        for &dep in lib.definition().libs {
            visit(dep, seen, out);
        }
        out.push(lib);
    }

    let mut seen = FxHashSet::default();
    let mut out = Vec::new();
    for &root in roots {
        visit(root, &mut seen, &mut out);
    }
    out
}
