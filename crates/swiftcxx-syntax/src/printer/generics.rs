//! Template headers, constraint regions and requirement instantiations.
//!
//! Generic structure crosses two generics models here: the source language's
//! depth/index-addressed parameters become C++ template parameters named
//! `T_{depth}_{index}`, declared only for the innermost context (outer
//! parameters are already in scope through the lexical nesting of the
//! surrounding emitted regions).
//!
//! Constraint emission is dual-mode so one generated header serves both
//! dialects: a `requires` conjunction under `__cpp_concepts`, and a
//! `static_assert` per parameter under the negated guard.

use std::fmt::Write;

use super::CxxPrinter;
use crate::decl::{GenericParam, GenericRequirement, GenericSignature, TypeDeclRef};

/// Whether a printed list is preceded by a separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadingTrivia {
    None,
    Comma,
}

impl CxxPrinter<'_> {
    /// Write the deterministic C++ spelling of a generic parameter:
    /// `T_{depth}_{index}`. Two calls for the same position always agree.
    pub fn print_generic_type_param_name(&mut self, param: &GenericParam) {
        let _ = write!(self.out, "T_{}_{}", param.depth, param.index);
    }

    /// Write a template header for the signature's innermost parameters,
    /// followed by the concepts-mode constraint region.
    ///
    /// A signature with no innermost parameters still yields valid syntax:
    /// `template<>` with no constraint region at all, since a `requires`
    /// clause cannot hold an empty conjunction.
    pub fn print_generic_signature(&mut self, signature: &GenericSignature) {
        self.out.push_str("template<");
        let mut first = true;
        for param in signature.innermost_params() {
            if !first {
                self.out.push_str(", ");
            }
            first = false;
            self.out.push_str("class ");
            self.print_generic_type_param_name(param);
        }
        self.out.push_str(">\n");

        if signature.innermost_params().next().is_none() {
            return;
        }
        self.out.push_str("#ifdef __cpp_concepts\n");
        self.out.push_str("requires ");
        let mut first = true;
        for param in signature.innermost_params() {
            if !first {
                self.out.push_str(" && ");
            }
            first = false;
            self.out.push_str("swift::isUsableInGenericContext<");
            self.print_generic_type_param_name(param);
            self.out.push('>');
        }
        self.out.push_str("\n#endif // __cpp_concepts\n");
    }

    /// Write the fallback-mode constraint region: one `static_assert` per
    /// innermost parameter under `#ifndef __cpp_concepts`. Nothing is
    /// written for a signature with no innermost parameters.
    pub fn print_generic_signature_inner_static_asserts(&mut self, signature: &GenericSignature) {
        if signature.innermost_params().next().is_none() {
            return;
        }
        self.out.push_str("#ifndef __cpp_concepts\n");
        let mut first = true;
        for param in signature.innermost_params() {
            if !first {
                self.out.push('\n');
            }
            first = false;
            self.out
                .push_str("static_assert(swift::isUsableInGenericContext<");
            self.print_generic_type_param_name(param);
            self.out
                .push_str(">, \"type cannot be used in a Swift generic context\");");
        }
        self.out.push_str("\n#endif // __cpp_concepts\n");
    }

    /// Write the generic argument list `<T_…, …>` for the signature's
    /// innermost parameters.
    pub fn print_generic_signature_params(&mut self, signature: &GenericSignature) {
        self.out.push('<');
        let mut first = true;
        for param in signature.innermost_params() {
            if !first {
                self.out.push_str(", ");
            }
            first = false;
            self.print_generic_type_param_name(param);
        }
        self.out.push('>');
    }

    /// Write the template specifiers required to declare a member of the
    /// type outside its own definition. Returns `true` when the type is not
    /// generic and nothing was printed.
    pub fn print_nominal_type_outside_member_decl_template_specifiers(
        &mut self,
        decl: &TypeDeclRef,
    ) -> bool {
        let Some(signature) = decl.generics.as_ref().filter(|g| !g.is_empty()) else {
            return true;
        };
        self.print_generic_signature(signature);
        false
    }

    /// Write the fallback static asserts for an outside-of-type member
    /// definition. Returns `true` when the type is not generic and nothing
    /// was printed.
    pub fn print_nominal_type_outside_member_decl_inner_static_asserts(
        &mut self,
        decl: &TypeDeclRef,
    ) -> bool {
        let Some(signature) = decl.generics.as_ref().filter(|g| !g.is_empty()) else {
            return true;
        };
        self.print_generic_signature_inner_static_asserts(signature);
        false
    }

    /// Write the runtime instantiation expression for one generic
    /// requirement.
    ///
    /// Only metadata requirements are supported; receiving any other kind
    /// is a contract violation.
    pub fn print_generic_requirement_instantiation(&mut self, requirement: &GenericRequirement) {
        assert!(
            requirement.is_metadata(),
            "witness table requirements are not supported yet"
        );
        self.out.push_str("swift::TypeMetadataTrait<");
        self.print_generic_type_param_name(&requirement.param());
        self.out.push_str(">::getTypeMetadata()");
    }

    /// Write the comma-joined instantiation expressions for a requirement
    /// list, optionally preceded by a `, ` separator when the list is
    /// non-empty.
    pub fn print_generic_requirements_instantiations(
        &mut self,
        requirements: &[GenericRequirement],
        leading_trivia: LeadingTrivia,
    ) {
        if leading_trivia == LeadingTrivia::Comma && !requirements.is_empty() {
            self.out.push_str(", ");
        }
        let mut first = true;
        for requirement in requirements {
            if !first {
                self.out.push_str(", ");
            }
            first = false;
            self.print_generic_requirement_instantiation(requirement);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn print_to_string(f: impl FnOnce(&mut CxxPrinter)) -> String {
        let mut out = String::new();
        f(&mut CxxPrinter::new(&mut out));
        out
    }

    fn signature(params: &[(u32, u32)]) -> GenericSignature {
        GenericSignature::new(
            params
                .iter()
                .map(|&(depth, index)| GenericParam::new(depth, index))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn param_names_are_distinct_and_stable() {
        let positions = [(0, 0), (0, 1), (1, 0), (1, 1)];
        let mut names = Vec::new();
        for (depth, index) in positions {
            let param = GenericParam::new(depth, index);
            let first = print_to_string(|p| p.print_generic_type_param_name(&param));
            let second = print_to_string(|p| p.print_generic_type_param_name(&param));
            assert_eq!(first, second);
            names.push(first);
        }
        names.sort();
        names.dedup();
        assert_eq!(names.len(), positions.len());
    }

    #[test]
    fn signature_header_declares_innermost_params_with_constraints() {
        let sig = signature(&[(0, 0), (0, 1)]);
        let out = print_to_string(|p| p.print_generic_signature(&sig));
        assert_eq!(
            out,
            "template<class T_0_0, class T_0_1>\n\
             #ifdef __cpp_concepts\n\
             requires swift::isUsableInGenericContext<T_0_0> && swift::isUsableInGenericContext<T_0_1>\n\
             #endif // __cpp_concepts\n"
        );
    }

    #[test]
    fn signature_header_skips_outer_params() {
        let sig = signature(&[(0, 0), (1, 0)]);
        let out = print_to_string(|p| p.print_generic_signature(&sig));
        assert!(out.starts_with("template<class T_1_0>\n"));
        assert!(!out.contains("T_0_0"));
    }

    #[test]
    fn empty_signature_header_is_still_valid_syntax() {
        let sig = signature(&[]);
        let out = print_to_string(|p| p.print_generic_signature(&sig));
        assert_eq!(out, "template<>\n");
    }

    #[test]
    fn inner_static_asserts_are_newline_joined() {
        let sig = signature(&[(0, 0), (0, 1)]);
        let out = print_to_string(|p| p.print_generic_signature_inner_static_asserts(&sig));
        assert_eq!(
            out,
            "#ifndef __cpp_concepts\n\
             static_assert(swift::isUsableInGenericContext<T_0_0>, \"type cannot be used in a Swift generic context\");\n\
             static_assert(swift::isUsableInGenericContext<T_0_1>, \"type cannot be used in a Swift generic context\");\n\
             #endif // __cpp_concepts\n"
        );
    }

    #[test]
    fn inner_static_asserts_skip_empty_signatures() {
        let sig = signature(&[]);
        let out = print_to_string(|p| p.print_generic_signature_inner_static_asserts(&sig));
        assert_eq!(out, "");
    }

    #[test]
    fn requirement_instantiation_spells_metadata_lookup() {
        let req = GenericRequirement::Metadata(GenericParam::new(0, 0));
        let out = print_to_string(|p| p.print_generic_requirement_instantiation(&req));
        assert_eq!(out, "swift::TypeMetadataTrait<T_0_0>::getTypeMetadata()");
    }

    #[test]
    #[should_panic(expected = "witness table requirements are not supported yet")]
    fn non_metadata_requirements_are_rejected() {
        let req = GenericRequirement::WitnessTable(GenericParam::new(0, 0));
        print_to_string(|p| p.print_generic_requirement_instantiation(&req));
    }

    #[test]
    fn requirement_list_leading_comma_only_when_nonempty() {
        let reqs = [
            GenericRequirement::Metadata(GenericParam::new(0, 0)),
            GenericRequirement::Metadata(GenericParam::new(0, 1)),
        ];
        let out = print_to_string(|p| {
            p.print_generic_requirements_instantiations(&reqs, LeadingTrivia::Comma)
        });
        assert_eq!(
            out,
            ", swift::TypeMetadataTrait<T_0_0>::getTypeMetadata(), \
             swift::TypeMetadataTrait<T_0_1>::getTypeMetadata()"
        );
        let empty = print_to_string(|p| {
            p.print_generic_requirements_instantiations(&[], LeadingTrivia::Comma)
        });
        assert_eq!(empty, "");
    }

    #[test]
    fn outside_member_decl_helpers_are_noops_for_non_generic_types() {
        let decl = TypeDeclRef::new("Foo", None);
        let mut out = String::new();
        let mut printer = CxxPrinter::new(&mut out);
        assert!(printer.print_nominal_type_outside_member_decl_template_specifiers(&decl));
        assert!(printer.print_nominal_type_outside_member_decl_inner_static_asserts(&decl));
        assert_eq!(out, "");
    }
}
