//! Registration Manifest Module for the Naming Core
//!
//! Derives the full set of registered identifiers for a library build:
//! one dotted module name plus one camelCase directive name per logical
//! component. The bundler-side registration code consumes the manifest
//! when it wires the library into the host framework's namespace.

use serde::{Deserialize, Serialize};

#[cfg(feature = "napi")]
use napi_derive::napi;

use crate::prefix::NamingConfig;

// ═══════════════════════════════════════════════════════════════════════════════
// MANIFEST TYPES
// ═══════════════════════════════════════════════════════════════════════════════

/// Identifiers under which one logical component is registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "napi", napi(object))]
#[serde(rename_all = "camelCase")]
pub struct RegisteredNames {
    pub logical_name: String,
    pub module_name: String,
    pub directive_name: String,
}

/// Registration plan for a whole library build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "napi", napi(object))]
#[serde(rename_all = "camelCase")]
pub struct RegistrationManifest {
    pub prefix: Option<String>,
    pub components: Vec<RegisteredNames>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// MANIFEST BUILDING
// ═══════════════════════════════════════════════════════════════════════════════

pub fn resolve_names(config: &NamingConfig, logical_name: &str) -> RegisteredNames {
    RegisteredNames {
        logical_name: logical_name.to_string(),
        module_name: config.prefixed_module_name(logical_name),
        directive_name: config.prefixed_name(logical_name),
    }
}

/// Input order is preserved. No dedup and no validation, same as the
/// underlying derivations.
pub fn build_manifest(config: &NamingConfig, logical_names: &[String]) -> RegistrationManifest {
    RegistrationManifest {
        prefix: config.prefix().map(|p| p.to_string()),
        components: logical_names
            .iter()
            .map(|name| resolve_names(config, name))
            .collect(),
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// NAPI EXPORTS
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(feature = "napi")]
#[napi]
pub fn registration_manifest_native(
    logical_names: Vec<String>,
) -> napi::Result<serde_json::Value> {
    let manifest = build_manifest(&crate::prefix::process_config(), &logical_names);
    serde_json::to_value(manifest).map_err(|e| napi::Error::from_reason(e.to_string()))
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════
