//! Boundary traits for facilities the emitter consumes but never
//! implements: name mangling, USR generation, and primitive type mapping.
//!
//! All three live in the surrounding compiler. The emitter takes them as
//! `&dyn` arguments at the call sites that need them, so a test can stub
//! any of them with a closure-sized struct.

use crate::decl::TypeDeclRef;

/// Produces stable mangled names usable as debugger-visible symbols.
pub trait ManglingOracle {
    /// Mangled spelling of the declared interface type, or an empty string
    /// when no mangled name is available. Must be deterministic for
    /// identical input.
    fn mangle_type_for_debugger(&self, decl: &TypeDeclRef) -> String;
}

/// Produces Unified Symbol Resolutions for cross-referencing tooling.
pub trait UsrOracle {
    /// USR for the declaration, or an empty string when none exists.
    fn usr(&self, decl: &TypeDeclRef) -> String;
}

/// A known mapping from a semantic type to a primitive C type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownCTypeInfo {
    /// The C spelling, e.g. `ptrdiff_t` or `void *`.
    pub name: String,
    /// Whether the C spelling is a pointer type that takes a nullability
    /// qualifier.
    pub can_be_nullable: bool,
}

/// Maps semantic types to known primitive C counterparts.
pub trait TypeMapping {
    /// The known primitive mapping for the type, if one exists. Call sites
    /// that print a known C type assert presence; absence there is a
    /// contract violation.
    fn known_c_type_info(&self, decl: &TypeDeclRef) -> Option<KnownCTypeInfo>;
}
