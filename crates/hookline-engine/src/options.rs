//! Class definition options
//!
//! Options control how strictly a class definition is checked when it is
//! built. They can be constructed in code or loaded from TOML:
//!
//! ```toml
//! defer_handler_check = false
//! strict_declaration_order = true
//! ```

use serde::Deserialize;

use crate::error::OptionsError;

/// Options applied to a [`ClassBuilder`](crate::ClassBuilder)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassOptions {
    /// Skip resolving named handlers and guards at build time. Unresolved
    /// names then fail at dispatch with `NoMethodError`.
    pub defer_handler_check: bool,

    /// Require every advised operation to be defined before advice is
    /// registered for it, as the `*_defined` registrations do.
    pub strict_declaration_order: bool,
}

impl ClassOptions {
    /// Parse options from a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self, OptionsError> {
        Ok(toml::from_str(source)?)
    }

    /// Builder-style setter for `defer_handler_check`
    pub fn defer_handler_check(mut self, defer: bool) -> Self {
        self.defer_handler_check = defer;
        self
    }

    /// Builder-style setter for `strict_declaration_order`
    pub fn strict_declaration_order(mut self, strict: bool) -> Self {
        self.strict_declaration_order = strict;
        self
    }
}
