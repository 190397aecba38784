//! # Naming Core Ground Truth
//!
//! ## Naming Invariants
//!
//! 1. **Single Prefix**: one optional, process-wide prefix, configured by the
//!    embedding application at bootstrap before any name is derived.
//!
//! 2. **Falsy Equivalence**: an empty prefix and no prefix behave identically.
//!    Both pass logical names through unchanged.
//!
//! 3. **Module Names**: dot-joined and case-preserving.
//!    Prefix `my` + name `scroll` registers as `my.scroll`.
//!
//! 4. **Directive Names**: prefix concatenated with the name, first character
//!    of the name uppercased, rest untouched.
//!    Prefix `my` + name `scroll` registers as `myScroll`.
//!
//! 5. **Purity**: every derivation is a pure function of (current prefix,
//!    input name). Re-setting the prefix affects later derivations only;
//!    identifiers already handed out are never rewritten.
//!
//! 6. **Totality**: no validation and no failure paths. Any input string in,
//!    a string out.

#[cfg(feature = "napi")]
use napi_derive::napi;

mod prefix;
mod registry;


// Internal Rust-to-Rust API (for the bundler plugin)
pub use prefix::{prefixed_module_name, prefixed_name, process_config, set_prefix, NamingConfig};
pub use registry::{build_manifest, resolve_names, RegisteredNames, RegistrationManifest};

#[cfg(feature = "napi")]
pub use prefix::{prefixed_module_name_native, prefixed_name_native, set_prefix_native};

#[cfg(feature = "napi")]
pub use registry::registration_manifest_native;

#[cfg(feature = "napi")]
#[napi]
pub fn naming_bridge() -> String {
    "Naming Native Bridge Connected".to_string()
}
