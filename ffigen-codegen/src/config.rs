//! Generator configuration.

/// Default suffix for by-pointer wrapper symbols.
pub const DEFAULT_WRAPPER_SUFFIX: &str = "_cwrap";

/// Default prefix for managed binding names.
pub const DEFAULT_MANAGED_PREFIX: &str = "_";

/// Settings shared by both generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Suffix appended to a function name to form its wrapper symbol.
    pub wrapper_suffix: String,
    /// Prefix of every `const` the managed generator emits.
    pub managed_prefix: String,
    /// Header the generated code should include, if any.
    pub include: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            wrapper_suffix: DEFAULT_WRAPPER_SUFFIX.to_string(),
            managed_prefix: DEFAULT_MANAGED_PREFIX.to_string(),
            include: None,
        }
    }
}

impl GeneratorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the wrapper suffix.
    #[must_use]
    pub fn wrapper_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.wrapper_suffix = suffix.into();
        self
    }

    /// Sets the managed binding prefix.
    #[must_use]
    pub fn managed_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.managed_prefix = prefix.into();
        self
    }

    /// Sets the header to include.
    #[must_use]
    pub fn include(mut self, header: impl Into<String>) -> Self {
        self.include = Some(header.into());
        self
    }

    /// Returns the wrapper symbol for a native function.
    #[must_use]
    pub fn wrapper_name(&self, function: &str) -> String {
        format!("{}{}", function, self.wrapper_suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.wrapper_suffix, "_cwrap");
        assert_eq!(config.managed_prefix, "_");
        assert!(config.include.is_none());
        assert_eq!(config.wrapper_name("add"), "add_cwrap");
    }

    #[test]
    fn test_builder_overrides() {
        let config = GeneratorConfig::new()
            .wrapper_suffix("_byref")
            .managed_prefix("ffi_")
            .include("point.h");

        assert_eq!(config.wrapper_name("add"), "add_byref");
        assert_eq!(config.managed_prefix, "ffi_");
        assert_eq!(config.include.as_deref(), Some("point.h"));
    }
}
