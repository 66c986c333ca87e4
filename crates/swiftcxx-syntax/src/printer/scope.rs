//! Scoped structural regions.
//!
//! Every helper here is a strict open / invoke-body / close sequence: the
//! open text is written, the body closure runs exactly once against the
//! same printer, and the close text follows. Bodies return `()` so no
//! early return can skip a close, and regions nest to any depth because
//! each nested call is itself a complete sequence. A panic inside a body
//! aborts generation outright, at which point the caller discards the
//! whole stream.

use std::fmt::Write;

use super::CxxPrinter;
use crate::decl::ModuleRef;

/// Extra trivia attached to an emitted namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamespaceTrivia {
    None,
    /// Attach the platform attribute that hides the namespace from the
    /// source language's own importer.
    AttributeSwiftPrivate,
}

impl CxxPrinter<'_> {
    /// Write a namespace region with a dynamically printed name.
    ///
    /// When a module is supplied its symbol attribute is attached to the
    /// namespace; the name printer is invoked twice, once for the opening
    /// line and once for the closing comment.
    pub fn print_namespace_with(
        &mut self,
        name_printer: impl Fn(&mut CxxPrinter),
        trivia: NamespaceTrivia,
        module: Option<&ModuleRef>,
        body: impl FnOnce(&mut CxxPrinter),
    ) {
        tracing::trace!("emitting namespace region");
        self.out.push_str("namespace ");
        name_printer(self);
        if trivia == NamespaceTrivia::AttributeSwiftPrivate {
            self.out.push_str(" __attribute__((swift_private))");
        }
        if let Some(module) = module {
            self.print_symbol_module_attribute(module);
        }
        self.out.push_str(" {\n\n");
        body(self);
        self.out.push_str("\n} // namespace ");
        name_printer(self);
        self.out.push_str("\n\n");
    }

    /// Write a namespace region with a fixed name.
    pub fn print_namespace(
        &mut self,
        name: &str,
        trivia: NamespaceTrivia,
        module: Option<&ModuleRef>,
        body: impl FnOnce(&mut CxxPrinter),
    ) {
        self.print_namespace_with(|p| p.out.push_str(name), trivia, module, body);
    }

    /// Write an `extern "C"` region, guarded so the same text is valid in
    /// plain C translation units.
    pub fn print_extern_c(&mut self, body: impl FnOnce(&mut CxxPrinter)) {
        self.out.push_str("#ifdef __cplusplus\n");
        self.out.push_str("extern \"C\" {\n");
        self.out.push_str("#endif\n\n");
        body(self);
        self.out.push_str("\n#ifdef __cplusplus\n");
        self.out.push_str("}\n");
        self.out.push_str("#endif\n");
    }

    /// Write a region only compiled under Objective-C.
    pub fn print_objc_block(&mut self, body: impl FnOnce(&mut CxxPrinter)) {
        self.out.push_str("#if defined(__OBJC__)\n");
        body(self);
        self.out.push_str("\n#endif\n");
    }

    /// Write a region with one warning suppressed via a push/pop pragma
    /// pair.
    pub fn print_ignored_diagnostic_block(
        &mut self,
        diag_name: &str,
        body: impl FnOnce(&mut CxxPrinter),
    ) {
        self.out.push_str("#pragma clang diagnostic push\n");
        let _ = write!(
            self.out,
            "#pragma clang diagnostic ignored \"-W{}\"\n",
            diag_name
        );
        body(self);
        self.out.push_str("#pragma clang diagnostic pop\n");
    }

    /// Write a region with the C++17-extension warning suppressed, for
    /// constructs the generator uses regardless of the consumer's standard
    /// mode.
    pub fn print_ignored_cxx17_extension_diagnostic_block(
        &mut self,
        body: impl FnOnce(&mut CxxPrinter),
    ) {
        self.print_ignored_diagnostic_block("c++17-extensions", body);
    }

    /// Write the include sequence that locates an interop support header
    /// next to the consuming compiler's resource directory, with three
    /// fallback locations tried in order.
    pub fn print_include_for_shim_header(&mut self, header_name: &str) {
        self.out.push_str(
            "// Look for the C++ interop support header relative to clang's resource dir:\n",
        );
        self.out.push_str(
            "//  '<toolchain>/usr/lib/clang/<version>/include/../../../swift/swiftToCxx'.\n",
        );
        let _ = write!(
            self.out,
            "#if __has_include(<../../../swift/swiftToCxx/{}>)\n",
            header_name
        );
        let _ = write!(
            self.out,
            "#include <../../../swift/swiftToCxx/{}>\n",
            header_name
        );
        let _ = write!(
            self.out,
            "#elif __has_include(<../../../../../lib/swift/swiftToCxx/{}>)\n",
            header_name
        );
        self.out.push_str(
            "//  '<toolchain>/usr/local/lib/clang/<version>/include/../../../../../lib/swift/swiftToCxx'.\n",
        );
        let _ = write!(
            self.out,
            "#include <../../../../../lib/swift/swiftToCxx/{}>\n",
            header_name
        );
        self.out.push_str(
            "// Alternatively, allow user to find the header using additional include path into '<toolchain>/lib/swift'.\n",
        );
        let _ = write!(
            self.out,
            "#elif __has_include(<swiftToCxx/{}>)\n",
            header_name
        );
        let _ = write!(self.out, "#include <swiftToCxx/{}>\n", header_name);
        self.out.push_str("#endif\n");
    }

    /// Write a `#define` for a feature macro.
    pub fn print_define(&mut self, macro_name: &str) {
        let _ = write!(self.out, "#define {}\n", macro_name);
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

    #[test]
    fn namespace_region_balances_with_empty_body() {
        let out = print_to_string(|p| p.print_namespace("M", NamespaceTrivia::None, None, |_| {}));
        assert_eq!(out, "namespace M {\n\n\n} // namespace M\n\n");
    }

    #[test]
    fn namespace_region_attaches_trivia_and_module_attribute() {
        let module = ModuleRef::new(1, "M");
        let out = print_to_string(|p| {
            p.print_namespace(
                "M",
                NamespaceTrivia::AttributeSwiftPrivate,
                Some(&module),
                |p| p.out.push_str("void f();\n"),
            )
        });
        assert_eq!(
            out,
            "namespace M __attribute__((swift_private)) SWIFT_SYMBOL_MODULE(\"M\") {\n\n\
             void f();\n\
             \n} // namespace M\n\n"
        );
    }

    #[test]
    fn regions_nest_and_each_close_appears_once() {
        let out = print_to_string(|p| {
            p.print_namespace("outer", NamespaceTrivia::None, None, |p| {
                p.print_extern_c(|p| {
                    p.print_objc_block(|p| p.out.push_str("id x;"));
                });
            })
        });
        assert_eq!(out.matches("namespace outer").count(), 2);
        assert_eq!(out.matches("extern \"C\" {").count(), 1);
        assert_eq!(out.matches("#if defined(__OBJC__)").count(), 1);
        // Two from the extern "C" guards, one from the Objective-C guard.
        assert_eq!(out.matches("#endif").count(), 3);
        assert!(out.contains("id x;"));
        assert!(out.ends_with("} // namespace outer\n\n"));
    }

    #[test]
    fn extern_c_region_is_exactly_guarded() {
        let out = print_to_string(|p| p.print_extern_c(|p| p.out.push_str("void f(void);\n")));
        assert_eq!(
            out,
            "#ifdef __cplusplus\n\
             extern \"C\" {\n\
             #endif\n\n\
             void f(void);\n\
             \n#ifdef __cplusplus\n\
             }\n\
             #endif\n"
        );
    }

    #[test]
    fn diagnostic_block_pushes_and_pops_around_body() {
        let out = print_to_string(|p| {
            p.print_ignored_diagnostic_block("deprecated-declarations", |p| {
                p.out.push_str("void old();\n")
            })
        });
        assert_eq!(
            out,
            "#pragma clang diagnostic push\n\
             #pragma clang diagnostic ignored \"-Wdeprecated-declarations\"\n\
             void old();\n\
             #pragma clang diagnostic pop\n"
        );
    }

    #[test]
    fn shim_header_include_lists_three_fallbacks_in_order() {
        let out = print_to_string(|p| p.print_include_for_shim_header("swiftToCxx.h"));
        let first = out.find("#if __has_include(<../../../swift/swiftToCxx/swiftToCxx.h>)");
        let second =
            out.find("#elif __has_include(<../../../../../lib/swift/swiftToCxx/swiftToCxx.h>)");
        let third = out.find("#elif __has_include(<swiftToCxx/swiftToCxx.h>)");
        assert!(first.unwrap() < second.unwrap());
        assert!(second.unwrap() < third.unwrap());
        assert!(out.ends_with("#endif\n"));
    }

    #[test]
    fn define_emits_single_directive() {
        let out = print_to_string(|p| p.print_define("SWIFT_CXX_INTEROP"));
        assert_eq!(out, "#define SWIFT_CXX_INTEROP\n");
    }
}
