//! Library names as written in `compilerOptions.lib`.

use std::fmt;
use std::str::FromStr;

/// Error when a library name is not in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibNameError {
    pub name: String,
}

impl fmt::Display for LibNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown library `{}`", self.name)
    }
}

impl std::error::Error for LibNameError {}

/// Defines `LibName` with its canonical spelling, plus `ALL` and parsing.
macro_rules! define_lib_names {
    ($($variant:ident => $text:literal),* $(,)?) => {
        /// One ambient library.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum LibName {
            $($variant,)*
        }

        impl LibName {
            /// Every library in the catalogue, in declaration order.
            pub const ALL: &'static [LibName] = &[$(LibName::$variant,)*];

            /// Canonical lowercase name (`es2015.collection`).
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(LibName::$variant => $text,)*
                }
            }

            fn from_canonical(text: &str) -> Option<LibName> {
                match text {
                    $($text => Some(LibName::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

define_lib_names! {
    Lib => "lib",
    Es5 => "es5",
    Es2015 => "es2015",
    Es2015Collection => "es2015.collection",
    Es2015Core => "es2015.core",
    Es2015Generator => "es2015.generator",
    Es2015Iterable => "es2015.iterable",
    Es2015Promise => "es2015.promise",
    Es2015Proxy => "es2015.proxy",
    Es2015Reflect => "es2015.reflect",
    Es2015Symbol => "es2015.symbol",
    Es2015SymbolWellknown => "es2015.symbol.wellknown",
    Es2016 => "es2016",
    Es2016ArrayInclude => "es2016.array.include",
    Es2016Intl => "es2016.intl",
    Es2017 => "es2017",
    Es2017Date => "es2017.date",
    Es2017Intl => "es2017.intl",
    Es2017Object => "es2017.object",
    Es2017Sharedmemory => "es2017.sharedmemory",
    Es2017String => "es2017.string",
    Es2017Typedarrays => "es2017.typedarrays",
    Es2018 => "es2018",
    Es2018Asyncgenerator => "es2018.asyncgenerator",
    Es2018Asynciterable => "es2018.asynciterable",
    Es2018Intl => "es2018.intl",
    Es2018Promise => "es2018.promise",
    Es2018Regexp => "es2018.regexp",
    Es2019 => "es2019",
    Es2019Array => "es2019.array",
    Es2019Intl => "es2019.intl",
    Es2019Object => "es2019.object",
    Es2019String => "es2019.string",
    Es2019Symbol => "es2019.symbol",
    Es2019Full => "es2019.full",
    Es2020 => "es2020",
    Es2020Bigint => "es2020.bigint",
    Es2020Date => "es2020.date",
    Es2020Intl => "es2020.intl",
    Es2020Number => "es2020.number",
    Es2020Promise => "es2020.promise",
    Es2020Sharedmemory => "es2020.sharedmemory",
    Es2020String => "es2020.string",
    Es2020SymbolWellknown => "es2020.symbol.wellknown",
    Es2021 => "es2021",
    Es2021Intl => "es2021.intl",
    Es2021Promise => "es2021.promise",
    Es2021String => "es2021.string",
    Es2021Weakref => "es2021.weakref",
    Es2022 => "es2022",
    Es2022Array => "es2022.array",
    Es2022Error => "es2022.error",
    Es2022Intl => "es2022.intl",
    Es2022Object => "es2022.object",
    Es2022Regexp => "es2022.regexp",
    Es2022String => "es2022.string",
    Es2023 => "es2023",
    Es2023Array => "es2023.array",
    Es2023Collection => "es2023.collection",
    Esnext => "esnext",
    EsnextDecorators => "esnext.decorators",
    Decorators => "decorators",
    DecoratorsLegacy => "decorators.legacy",
    Dom => "dom",
    DomIterable => "dom.iterable",
    DomAsynciterable => "dom.asynciterable",
    WebworkerImportscripts => "webworker.importscripts",
    Scripthost => "scripthost",
}

impl FromStr for LibName {
    type Err = LibNameError;

    /// Parses case-insensitively, accepting the `es6`/`es7` aliases and a
    /// `lib.` prefix / `.d.ts` suffix as written in reference directives.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let bare = lower
            .strip_suffix(".d.ts")
            .unwrap_or(&lower)
            .trim_start_matches("lib.");
        let bare = if bare.is_empty() { "lib" } else { bare };
        let canonical = match bare {
            "es6" => "es2015",
            "es7" => "es2016",
            other => other,
        };
        LibName::from_canonical(canonical).ok_or_else(|| LibNameError {
            name: s.to_owned(),
        })
    }
}

impl TryFrom<String> for LibName {
    type Error = LibNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LibName> for &'static str {
    fn from(lib: LibName) -> Self {
        lib.as_str()
    }
}

impl fmt::Display for LibName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for LibName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LibName {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        LibName::try_from(text).map_err(serde::de::Error::custom)
    }
}
