//! The declaration printer.
//!
//! [`CxxPrinter`] owns nothing but a borrowed output sink; every operation
//! is a plain synchronous write of already-decided text. There is no AST for
//! the generated code: callers sequence printer calls in emission order and
//! the text accumulates in the sink.
//!
//! This module holds the core printer plus the identifier, qualification,
//! nullability and attribute operations. Template/generic printing lives in
//! [`generics`], runtime metadata access in [`metadata`], and scoped
//! structural regions in [`scope`].

mod generics;
mod metadata;
mod scope;

pub use generics::LeadingTrivia;
pub use scope::NamespaceTrivia;

use std::fmt::{self, Write};

use crate::decl::{ForeignTypeRef, ModuleRef, Nullability, NullabilityPrintKind, TypeDeclRef};
use crate::keywords::is_cxx_keyword;
use crate::oracle::{ManglingOracle, TypeMapping, UsrOracle};

/// Name of the C++ namespace that holds the language support library.
pub fn cxx_swift_namespace_name() -> &'static str {
    "swift"
}

/// Name of the implementation-detail namespace inside the support library.
pub fn cxx_impl_namespace_name() -> &'static str {
    "_impl"
}

/// Name of the opaque storage class used for resilient value types.
pub fn cxx_opaque_storage_class_name() -> &'static str {
    "OpaqueStorage"
}

/// Prints C/C++ declaration text into a borrowed string sink.
pub struct CxxPrinter<'a> {
    out: &'a mut String,
}

impl fmt::Write for CxxPrinter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.out.push_str(s);
        Ok(())
    }
}

impl<'a> CxxPrinter<'a> {
    pub fn new(out: &'a mut String) -> Self {
        Self { out }
    }

    /// Write `name`, escaping it with a trailing underscore when it
    /// collides with a C/C++ keyword.
    pub fn print_identifier(&mut self, name: &str) {
        self.out.push_str(name);
        if is_cxx_keyword(name) {
            self.out.push('_');
        }
    }

    /// Write the escaped base name of a declaration.
    ///
    /// The name must be simple; compound names are resolved upstream and
    /// passing one here is a contract violation.
    pub fn print_base_name(&mut self, decl: &TypeDeclRef) {
        assert!(
            decl.name.is_simple(),
            "compound name where a simple name is required"
        );
        self.print_identifier(decl.name.base());
    }

    /// Write the escaped display name of a module.
    pub fn print_module_name(&mut self, module: &ModuleRef) {
        self.print_identifier(&module.name);
    }

    /// Write the module name as a C symbol prefix (`Name_`).
    pub fn print_module_name_c_prefix(&mut self, module: &ModuleRef) {
        let _ = write!(self.out, "{}_", module.name);
    }

    /// Write a `Mod::` namespace qualifier when the referenced module is
    /// not the current context. Identity is compared, not display names.
    pub fn print_module_namespace_qualifiers_if_needed(
        &mut self,
        referenced: &ModuleRef,
        current: &ModuleRef,
    ) {
        if referenced.id == current.id {
            return;
        }
        self.print_module_name(referenced);
        self.out.push_str("::");
    }

    /// Write a reference to a foreign (target-language-native) type:
    /// namespace path, name, and template arguments when present.
    pub fn print_foreign_type_reference(&mut self, foreign: &ForeignTypeRef) {
        for segment in &foreign.namespace_path {
            let _ = write!(self.out, "{}::", segment);
        }
        self.out.push_str(&foreign.name);
        if !foreign.template_args.is_empty() {
            self.out.push('<');
            let mut first = true;
            for arg in &foreign.template_args {
                if !first {
                    self.out.push_str(", ");
                }
                first = false;
                self.out.push_str(arg);
            }
            self.out.push('>');
        }
    }

    /// Write a full reference to a nominal type from the given module
    /// context: foreign name when one exists, otherwise qualifiers, base
    /// name, and generic argument list.
    pub fn print_nominal_type_reference(
        &mut self,
        decl: &TypeDeclRef,
        module_context: &ModuleRef,
    ) {
        if let Some(foreign) = &decl.foreign {
            self.print_foreign_type_reference(foreign);
            return;
        }
        if let Some(module) = &decl.module {
            self.print_module_namespace_qualifiers_if_needed(module, module_context);
        }
        self.print_base_name(decl);
        if let Some(generics) = decl.generics.as_ref().filter(|g| !g.is_empty()) {
            self.print_generic_signature_params(generics);
        }
    }

    /// Write a nominal type reference followed by `::`.
    pub fn print_nominal_type_qualifier(
        &mut self,
        decl: &TypeDeclRef,
        module_context: &ModuleRef,
    ) {
        self.print_nominal_type_reference(decl, module_context);
        self.out.push_str("::");
    }

    /// Write the primary C++ spelling of a type: module qualifiers and base
    /// name, without a generic argument list.
    pub fn print_primary_cxx_type_name(&mut self, decl: &TypeDeclRef, module_context: &ModuleRef) {
        if let Some(module) = &decl.module {
            self.print_module_namespace_qualifiers_if_needed(module, module_context);
        }
        self.print_base_name(decl);
    }

    /// Write the `swift::_impl::` qualifier for support-library internals.
    pub fn print_swift_impl_qualifier(&mut self) {
        let _ = write!(
            self.out,
            "{}::{}::",
            cxx_swift_namespace_name(),
            cxx_impl_namespace_name()
        );
    }

    /// Write the attribute sequence that marks a thunk as always-inlined.
    pub fn print_inline_for_thunk(&mut self) {
        self.out.push_str("inline __attribute__((always_inline)) ");
    }

    /// Write a nullability annotation, or nothing when `kind` is absent.
    ///
    /// `After` placement writes one leading space and no trailing space;
    /// every other placement writes the token followed by one trailing
    /// space. That asymmetry is what keeps both placements syntactically
    /// valid in the surrounding declaration.
    pub fn print_nullability(
        &mut self,
        kind: Option<Nullability>,
        print_kind: NullabilityPrintKind,
    ) {
        let Some(kind) = kind else {
            return;
        };

        match print_kind {
            NullabilityPrintKind::ContextSensitive => {
                self.out.push_str(match kind {
                    Nullability::NonNull => "nonnull",
                    Nullability::Nullable => "nullable",
                    Nullability::Unspecified => "null_unspecified",
                });
            }
            NullabilityPrintKind::Before | NullabilityPrintKind::After => {
                if print_kind == NullabilityPrintKind::After {
                    self.out.push(' ');
                }
                self.out.push_str(match kind {
                    Nullability::NonNull => "_Nonnull",
                    Nullability::Nullable => "_Nullable",
                    Nullability::Unspecified => "_Null_unspecified",
                });
            }
        }

        if print_kind != NullabilityPrintKind::After {
            self.out.push(' ');
        }
    }

    /// Write the known primitive C spelling for a type.
    ///
    /// The type mapping must have an entry; absence is a contract
    /// violation.
    pub fn print_known_c_type(&mut self, decl: &TypeDeclRef, type_mapping: &dyn TypeMapping) {
        let info = type_mapping
            .known_c_type_info(decl)
            .expect("not a known primitive type");
        self.out.push_str(&info.name);
        if info.can_be_nullable {
            self.out.push_str(" _Null_unspecified");
        }
    }

    /// Write the symbol attribute for a module: ` SWIFT_SYMBOL_MODULE("M")`.
    pub fn print_symbol_module_attribute(&mut self, module: &ModuleRef) {
        self.out.push_str(" SWIFT_SYMBOL_MODULE(\"");
        self.print_module_name(module);
        self.out.push_str("\")");
    }

    /// Write the USR symbol attribute for a declaration, or nothing when
    /// the oracle has no USR for it.
    pub fn print_symbol_usr_attribute(&mut self, decl: &TypeDeclRef, usr_oracle: &dyn UsrOracle) {
        let usr = usr_oracle.usr(decl);
        if usr.is_empty() {
            return;
        }
        let _ = write!(self.out, " SWIFT_SYMBOL(\"{}\")", usr);
    }

    /// Write the debugger-visible mangled-name members for a type, inside a
    /// C++17-extension diagnostic suppression. Nothing is emitted inside
    /// the block when the mangler has no name for the type.
    pub fn print_swift_mangled_name_for_debugger(
        &mut self,
        decl: &TypeDeclRef,
        mangler: &dyn ManglingOracle,
    ) {
        let mangled_name = mangler.mangle_type_for_debugger(decl);
        self.print_ignored_cxx17_extension_diagnostic_block(|printer| {
            if !mangled_name.is_empty() {
                let _ = write!(printer.out, "  typedef char {};\n", mangled_name);
                let _ = write!(
                    printer.out,
                    "  static inline constexpr {} $__swift_mangled_name = 0;\n",
                    mangled_name
                );
            }
        });
    }
}
