//! Analysis configuration.

use lexis_lib::{LibName, DEFAULT_LIB};

use crate::HoistingPolicy;

/// How the program is loaded.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SourceType {
    #[default]
    Script,
    /// ES module: strict, top-level bindings live in a module scope.
    Module,
}

/// Options for one analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct AnalyzeOptions {
    pub source_type: SourceType,
    /// Ambient libraries seeded into the global scope by `analyze_program`.
    pub lib: Vec<LibName>,
    /// Accept JSX nodes.
    pub jsx: bool,
    /// Identifier JSX elements compile to a call on; `None` disables the
    /// implicit reference.
    pub jsx_pragma: Option<String>,
    /// Identifier JSX fragments compile to; `None` disables the implicit
    /// reference.
    pub jsx_fragment_name: Option<String>,
    /// Allow `return` at the top level of a script (CommonJS wrappers).
    pub global_return: bool,
    /// Treat the program as strict even without a `"use strict"` prologue.
    pub implied_strict: bool,
    pub hoisting: HoistingPolicy,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        AnalyzeOptions {
            source_type: SourceType::Script,
            lib: vec![DEFAULT_LIB],
            jsx: false,
            jsx_pragma: Some("React".to_owned()),
            jsx_fragment_name: None,
            global_return: false,
            implied_strict: false,
            hoisting: HoistingPolicy::default(),
        }
    }
}

impl AnalyzeOptions {
    /// Default options for an ES module.
    pub fn module() -> Self {
        AnalyzeOptions::default().with_source_type(SourceType::Module)
    }

    #[must_use]
    pub fn with_source_type(mut self, source_type: SourceType) -> Self {
        self.source_type = source_type;
        self
    }

    #[must_use]
    pub fn with_lib(mut self, lib: impl Into<Vec<LibName>>) -> Self {
        self.lib = lib.into();
        self
    }

    #[must_use]
    pub fn with_jsx(mut self, jsx: bool) -> Self {
        self.jsx = jsx;
        self
    }

    #[must_use]
    pub fn with_jsx_pragma(mut self, pragma: Option<&str>) -> Self {
        self.jsx_pragma = pragma.map(str::to_owned);
        self
    }

    #[must_use]
    pub fn with_jsx_fragment_name(mut self, name: Option<&str>) -> Self {
        self.jsx_fragment_name = name.map(str::to_owned);
        self
    }

    #[must_use]
    pub fn with_global_return(mut self, global_return: bool) -> Self {
        self.global_return = global_return;
        self
    }

    #[must_use]
    pub fn with_implied_strict(mut self, implied_strict: bool) -> Self {
        self.implied_strict = implied_strict;
        self
    }

    #[must_use]
    pub fn with_hoisting(mut self, hoisting: HoistingPolicy) -> Self {
        self.hoisting = hoisting;
        self
    }

    #[inline]
    pub fn is_module(&self) -> bool {
        self.source_type == SourceType::Module
    }
}
