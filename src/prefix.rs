//! Prefix Module for the Naming Core
//!
//! Port of prefix.js to Rust.
//! Derives namespaced registration identifiers from the prefix the
//! embedding application configures at bootstrap.

use serde::{Deserialize, Serialize};
use std::sync::RwLock;

#[cfg(feature = "napi")]
use napi_derive::napi;

// ═══════════════════════════════════════════════════════════════════════════════
// NAMING CONFIG
// ═══════════════════════════════════════════════════════════════════════════════

/// Naming configuration for one library build.
///
/// "No prefix" is the explicit `None` state. `set_prefix` normalizes the
/// empty string to `None`, so an unset and an empty prefix behave
/// identically: both pass logical names through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamingConfig {
    prefix: Option<String>,
}

impl NamingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: &str) -> Self {
        let mut config = Self::new();
        config.set_prefix(prefix);
        config
    }

    /// Overwrite the current prefix. Last writer wins; names already
    /// derived are never revisited.
    pub fn set_prefix(&mut self, prefix: &str) {
        self.prefix = if prefix.is_empty() {
            None
        } else {
            Some(prefix.to_string())
        };
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Dot-joined module identifier: prefix `my` + name `scroll` gives
    /// `my.scroll`. Case-preserving on both sides.
    pub fn prefixed_module_name(&self, name: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}.{}", prefix, name),
            None => name.to_string(),
        }
    }

    /// camelCase directive identifier: prefix `my` + name `scroll` gives
    /// `myScroll`. Only the first character of `name` is uppercased, the
    /// rest is untouched.
    pub fn prefixed_name(&self, name: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, capitalize_first(name)),
            None => name.to_string(),
        }
    }
}

/// Uppercase the first character only. An empty input stays empty.
fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// PROCESS-WIDE CONFIG
// ═══════════════════════════════════════════════════════════════════════════════

lazy_static::lazy_static! {
    static ref PROCESS_CONFIG: RwLock<NamingConfig> = RwLock::new(NamingConfig::new());
}

/// Set the process-wide prefix. Expected to run once at bootstrap, before
/// any derivation; a later call silently overwrites and affects subsequent
/// derivations only.
pub fn set_prefix(prefix: &str) {
    PROCESS_CONFIG
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .set_prefix(prefix);
}

/// Module identifier for `name` under the process-wide prefix.
pub fn prefixed_module_name(name: &str) -> String {
    PROCESS_CONFIG
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .prefixed_module_name(name)
}

/// Directive identifier for `name` under the process-wide prefix.
pub fn prefixed_name(name: &str) -> String {
    PROCESS_CONFIG
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .prefixed_name(name)
}

/// Snapshot of the process-wide config, for manifest building.
pub fn process_config() -> NamingConfig {
    PROCESS_CONFIG
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

// ═══════════════════════════════════════════════════════════════════════════════
// NAPI EXPORTS
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(feature = "napi")]
#[napi]
pub fn set_prefix_native(prefix: String) {
    set_prefix(&prefix);
}

#[cfg(feature = "napi")]
#[napi]
pub fn prefixed_module_name_native(name: String) -> String {
    prefixed_module_name(&name)
}

#[cfg(feature = "napi")]
#[napi]
pub fn prefixed_name_native(name: String) -> String {
    prefixed_name(&name)
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("scroll"), "Scroll");
        assert_eq!(capitalize_first("s"), "S");
        assert_eq!(capitalize_first(""), ""); // No first character, no panic
        assert_eq!(capitalize_first("alreadyCamel"), "AlreadyCamel");
        assert_eq!(capitalize_first("9grid"), "9grid"); // Digits have no uppercase form
    }

    #[test]
    fn test_module_name_is_case_preserving() {
        let config = NamingConfig::with_prefix("My");
        assert_eq!(config.prefixed_module_name("ScrollBar"), "My.ScrollBar");
    }

    #[test]
    fn test_directive_name_leaves_tail_untouched() {
        let config = NamingConfig::with_prefix("my");
        assert_eq!(config.prefixed_name("scrollViewport"), "myScrollViewport");
    }

    #[test]
    fn test_empty_prefix_normalizes_to_none() {
        let mut config = NamingConfig::with_prefix("my");
        config.set_prefix("");
        assert_eq!(config.prefix(), None);
    }

    #[test]
    fn test_reconfiguration_affects_later_derivations_only() {
        let mut config = NamingConfig::with_prefix("my");
        let before = config.prefixed_name("scroll");
        config.set_prefix("ui2");
        assert_eq!(before, "myScroll");
        assert_eq!(config.prefixed_name("scroll"), "ui2Scroll");
    }

    // The process-wide config is shared across the test binary, so every
    // write-then-read sequence lives in this one test.
    #[test]
    fn test_process_wide_prefix_last_writer_wins() {
        set_prefix("my");
        assert_eq!(prefixed_module_name("scroll"), "my.scroll");
        assert_eq!(prefixed_name("scroll"), "myScroll");

        set_prefix("ui2");
        assert_eq!(prefixed_module_name("grid"), "ui2.grid");
        assert_eq!(prefixed_name("grid"), "ui2Grid");
        assert_eq!(process_config(), NamingConfig::with_prefix("ui2"));
    }
}
