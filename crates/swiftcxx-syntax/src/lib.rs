//! C and C++ declaration synthesis for Swift compatibility headers.
//!
//! `swiftcxx-syntax` turns references into an already-type-checked semantic
//! model into C/C++ declaration text: escaped identifiers, namespace
//! qualification relative to a module context, template headers with
//! dual-mode generic constraints, nullability and calling-convention
//! annotations, runtime metadata accessor declarations, and scoped
//! structural regions with guaranteed open/close pairing.
//!
//! # Architecture
//!
//! ```text
//! Semantic model          Printer responsibilities          Output
//! ──────────────      ───────────────────────────────      ────────
//! ModuleRef        ─┐  identifiers / qualification    ┐
//! TypeDeclRef      ─┼─ templates / generic constraints ┼─> one shared
//! GenericSignature ─┤  nullability / ABI attributes    │   String sink
//! GenericRequirement┤  metadata access sequences       │
//!                  ─┘  scoped regions (wraps the rest) ┘
//! ```
//!
//! There is no intermediate AST for the generated text: the orchestrator
//! walks its declaration tree and sequences printer calls, and the text
//! accumulates in the sink in call order. Name mangling, USR generation and
//! primitive type mapping stay in the surrounding compiler, behind the
//! traits in [`oracle`].
//!
//! # Example
//!
//! ```
//! use swiftcxx_syntax::decl::{ModuleRef, TypeDeclRef};
//! use swiftcxx_syntax::printer::{CxxPrinter, NamespaceTrivia};
//!
//! let module = ModuleRef::new(1, "M");
//! let client = ModuleRef::new(2, "Client");
//! let foo = TypeDeclRef::new("Foo", Some(module.clone()));
//!
//! let mut out = String::new();
//! let mut printer = CxxPrinter::new(&mut out);
//! printer.print_namespace("M", NamespaceTrivia::AttributeSwiftPrivate, Some(&module), |p| {
//!     p.print_nominal_type_reference(&foo, &client);
//! });
//! assert!(out.contains("namespace M __attribute__((swift_private))"));
//! ```
//!
//! # Error model
//!
//! Malformed input from the semantic model (a compound name where a simple
//! one is required, an unsupported requirement kind, a missing known-type
//! mapping) is a contract violation and panics with the violated
//! precondition; the caller discards the whole output stream. Missing
//! optional data (no nullability, empty mangled name, empty USR) is a
//! defined omission, never an error. The one invariant reachable from
//! caller-built values, generic parameter position uniqueness, is validated
//! with a `Result` at construction instead.

pub mod decl;
pub mod keywords;
pub mod oracle;
pub mod printer;

pub use decl::{
    DeclName, ForeignTypeRef, GenericParam, GenericRequirement, GenericSignature, ModuleId,
    ModuleRef, Nullability, NullabilityPrintKind, SignatureError, TypeDeclRef,
};
pub use keywords::is_cxx_keyword;
pub use oracle::{KnownCTypeInfo, ManglingOracle, TypeMapping, UsrOracle};
pub use printer::{
    CxxPrinter, LeadingTrivia, NamespaceTrivia, cxx_impl_namespace_name,
    cxx_opaque_storage_class_name, cxx_swift_namespace_name,
};
