//! Runtime type-metadata access sequences.
//!
//! The lowest-level text this engine produces: calls into generated
//! metadata accessor functions, the forward declarations for those
//! functions, and the pointer arithmetic that reaches a type's value
//! witness table from its metadata handle. The witness-table load is
//! emitted twice under a platform guard so one header serves both
//! pointer-authentication and plain platforms without regeneration.

use std::fmt::Write;

use swiftcxx_abi::pointer_auth::VALUE_WITNESS_TABLE_DISCRIMINATOR;
use swiftcxx_abi::{METADATA_REQUEST_COMPLETE, NUM_DIRECT_GENERIC_METADATA_ACCESS_ARGS};

use super::{CxxPrinter, LeadingTrivia};
use crate::decl::{GenericRequirement, TypeDeclRef};

impl CxxPrinter<'_> {
    /// Write a call to a type-metadata access function: the blank
    /// metadata-request sentinel first, then one instantiation expression
    /// per generic requirement.
    pub fn print_type_metadata_access_function_call(
        &mut self,
        name: &str,
        requirements: &[GenericRequirement],
    ) {
        let _ = write!(self.out, "{}({}", name, METADATA_REQUEST_COMPLETE);
        self.print_generic_requirements_instantiations(requirements, LeadingTrivia::Comma);
        self.out.push(')');
    }

    /// Write the statement sequence that loads a type's value witness table
    /// pointer out of its metadata.
    ///
    /// The table pointer sits one pointer width before the metadata
    /// address. Both platform paths are emitted under an `__arm64e__`
    /// guard: the pointer-authentication path authenticates the load with
    /// the process-independent data key and a discriminator blended from
    /// the storage address, the other path dereferences directly.
    pub fn print_value_witness_table_access_sequence(
        &mut self,
        metadata_variable: &str,
        vw_table_variable: &str,
        indent: usize,
    ) {
        let pad = " ".repeat(indent);
        let _ = write!(self.out, "{}auto *vwTableAddr = reinterpret_cast<", pad);
        self.print_swift_impl_qualifier();
        let _ = write!(
            self.out,
            "ValueWitnessTable **>({}._0) - 1;\n",
            metadata_variable
        );
        self.out.push_str("#ifdef __arm64e__\n");
        let _ = write!(
            self.out,
            "{}auto *{} = reinterpret_cast<",
            pad, vw_table_variable
        );
        self.print_swift_impl_qualifier();
        let _ = write!(
            self.out,
            "ValueWitnessTable *>(ptrauth_auth_data(reinterpret_cast<void *>(*vwTableAddr), ptrauth_key_process_independent_data, ptrauth_blend_discriminator(vwTableAddr, {})));\n",
            VALUE_WITNESS_TABLE_DISCRIMINATOR
        );
        self.out.push_str("#else\n");
        let _ = write!(
            self.out,
            "{}auto *{} = *vwTableAddr;\n",
            pad, vw_table_variable
        );
        self.out.push_str("#endif\n");
    }

    /// Write the annotated forward declaration of a type-metadata access
    /// function: one metadata-request parameter, then one opaque non-null
    /// pointer per generic requirement.
    ///
    /// The underlying calling-convention thunk takes at most
    /// [`NUM_DIRECT_GENERIC_METADATA_ACCESS_ARGS`] direct requirement
    /// arguments, so a non-empty requirement list is preceded by a
    /// `static_assert` that re-checks the bound at the consumer's compile
    /// time. Parameter names are not printed yet; the declaration is
    /// parameter-name-free by design.
    pub fn print_c_type_metadata_type_function(
        &mut self,
        decl: &TypeDeclRef,
        type_metadata_func_name: &str,
        generic_requirements: &[GenericRequirement],
    ) {
        tracing::trace!(
            name = type_metadata_func_name,
            requirements = generic_requirements.len(),
            "emitting type metadata accessor declaration"
        );
        if !generic_requirements.is_empty() {
            let _ = write!(
                self.out,
                "static_assert({} <= {}, \"unsupported generic requirement list for metadata func\");\n",
                generic_requirements.len(),
                NUM_DIRECT_GENERIC_METADATA_ACCESS_ARGS
            );
        }
        let _ = write!(
            self.out,
            "// Type metadata accessor for {}\n",
            decl.name.base()
        );
        self.out.push_str("SWIFT_EXTERN ");
        self.print_swift_impl_qualifier();
        let _ = write!(self.out, "MetadataResponseTy {}(", type_metadata_func_name);
        self.print_swift_impl_qualifier();
        self.out.push_str("MetadataRequestTy");
        if !generic_requirements.is_empty() {
            self.out.push_str(", ");
        }
        let mut first = true;
        for _ in generic_requirements {
            if !first {
                self.out.push_str(", ");
            }
            first = false;
            self.out.push_str("void * _Nonnull");
        }
        self.out.push_str(") SWIFT_NOEXCEPT SWIFT_CALL;\n\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::GenericParam;

    fn print_to_string(f: impl FnOnce(&mut CxxPrinter)) -> String {
        let mut out = String::new();
        f(&mut CxxPrinter::new(&mut out));
        out
    }

    fn metadata_reqs(count: usize) -> Vec<GenericRequirement> {
        (0..count)
            .map(|i| GenericRequirement::Metadata(GenericParam::new(0, i as u32)))
            .collect()
    }

    #[test]
    fn access_call_passes_blank_request_sentinel() {
        let out = print_to_string(|p| p.print_type_metadata_access_function_call("$s4main3FooVMa", &[]));
        assert_eq!(out, "$s4main3FooVMa(0)");
    }

    #[test]
    fn access_call_appends_requirement_instantiations() {
        let reqs = metadata_reqs(2);
        let out =
            print_to_string(|p| p.print_type_metadata_access_function_call("getFooMetadata", &reqs));
        assert_eq!(
            out,
            "getFooMetadata(0, swift::TypeMetadataTrait<T_0_0>::getTypeMetadata(), \
             swift::TypeMetadataTrait<T_0_1>::getTypeMetadata())"
        );
    }

    #[test]
    fn witness_table_sequence_emits_both_platform_paths() {
        let out = print_to_string(|p| p.print_value_witness_table_access_sequence("metadata", "vwTable", 2));
        assert_eq!(
            out,
            "  auto *vwTableAddr = reinterpret_cast<swift::_impl::ValueWitnessTable **>(metadata._0) - 1;\n\
             #ifdef __arm64e__\n  \
             auto *vwTable = reinterpret_cast<swift::_impl::ValueWitnessTable *>(ptrauth_auth_data(reinterpret_cast<void *>(*vwTableAddr), ptrauth_key_process_independent_data, ptrauth_blend_discriminator(vwTableAddr, 11839)));\n\
             #else\n  \
             auto *vwTable = *vwTableAddr;\n\
             #endif\n"
        );
    }

    #[test]
    fn accessor_declaration_for_non_generic_type() {
        let decl = TypeDeclRef::new("Foo", None);
        let out = print_to_string(|p| {
            p.print_c_type_metadata_type_function(&decl, "$s4main3FooVMa", &[])
        });
        assert_eq!(
            out,
            "// Type metadata accessor for Foo\n\
             SWIFT_EXTERN swift::_impl::MetadataResponseTy $s4main3FooVMa(swift::_impl::MetadataRequestTy) SWIFT_NOEXCEPT SWIFT_CALL;\n\n"
        );
    }

    #[test]
    fn accessor_declaration_takes_one_opaque_pointer_per_requirement() {
        let decl = TypeDeclRef::new("Pair", None);
        let reqs = metadata_reqs(2);
        let out = print_to_string(|p| {
            p.print_c_type_metadata_type_function(&decl, "$s4main4PairVMa", &reqs)
        });
        assert!(out.contains(
            "$s4main4PairVMa(swift::_impl::MetadataRequestTy, void * _Nonnull, void * _Nonnull)"
        ));
        assert!(out.starts_with(
            "static_assert(2 <= 3, \"unsupported generic requirement list for metadata func\");\n"
        ));
    }

    #[test]
    fn over_long_requirement_list_emits_failing_bound_check() {
        let decl = TypeDeclRef::new("Big", None);
        let reqs = metadata_reqs(5);
        let out = print_to_string(|p| {
            p.print_c_type_metadata_type_function(&decl, "$s4main3BigVMa", &reqs)
        });
        // The generated text itself carries the arity check; 5 <= 3 fails
        // at the consumer's compile time.
        assert!(out.contains("static_assert(5 <= 3"));
    }
}
