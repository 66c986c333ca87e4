//! Reserved-word test for the target surface language.
//!
//! The set covers C and C++ keywords plus the C++ operator keywords, since
//! generated headers must stay valid under every standard mode a consumer
//! might compile them in. Built once on first use and read-only afterwards,
//! so concurrent printers from a parallelized compilation pipeline can all
//! query it without synchronization.

use std::collections::HashSet;
use std::sync::OnceLock;

static CXX_KEYWORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// C and C++ keywords and operator keywords, per the token definitions of
/// the target compiler.
const KEYWORD_TABLE: &[&str] = &[
    // C keywords
    "auto",
    "break",
    "case",
    "char",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extern",
    "float",
    "for",
    "goto",
    "if",
    "inline",
    "int",
    "long",
    "register",
    "restrict",
    "return",
    "short",
    "signed",
    "sizeof",
    "static",
    "struct",
    "switch",
    "typedef",
    "union",
    "unsigned",
    "void",
    "volatile",
    "while",
    "_Alignas",
    "_Alignof",
    "_Atomic",
    "_Bool",
    "_Complex",
    "_Generic",
    "_Imaginary",
    "_Noreturn",
    "_Static_assert",
    "_Thread_local",
    // C++ keywords
    "alignas",
    "alignof",
    "asm",
    "bool",
    "catch",
    "char8_t",
    "char16_t",
    "char32_t",
    "class",
    "concept",
    "consteval",
    "constexpr",
    "constinit",
    "const_cast",
    "co_await",
    "co_return",
    "co_yield",
    "decltype",
    "delete",
    "dynamic_cast",
    "explicit",
    "export",
    "false",
    "friend",
    "mutable",
    "namespace",
    "new",
    "noexcept",
    "nullptr",
    "operator",
    "private",
    "protected",
    "public",
    "reinterpret_cast",
    "requires",
    "static_assert",
    "static_cast",
    "template",
    "this",
    "thread_local",
    "throw",
    "true",
    "try",
    "typeid",
    "typename",
    "using",
    "virtual",
    "wchar_t",
    // C++ operator keywords
    "and",
    "and_eq",
    "bitand",
    "bitor",
    "compl",
    "not",
    "not_eq",
    "or",
    "or_eq",
    "xor",
    "xor_eq",
];

/// Whether `name` collides with a C/C++ keyword or operator keyword.
pub fn is_cxx_keyword(name: &str) -> bool {
    let keywords = CXX_KEYWORDS.get_or_init(|| KEYWORD_TABLE.iter().copied().collect());
    keywords.contains(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_recognized() {
        assert!(is_cxx_keyword("class"));
        assert!(is_cxx_keyword("template"));
        assert!(is_cxx_keyword("restrict"));
        assert!(is_cxx_keyword("xor_eq"));
        assert!(is_cxx_keyword("_Static_assert"));
    }

    #[test]
    fn non_keywords_pass_through() {
        assert!(!is_cxx_keyword("Foo"));
        assert!(!is_cxx_keyword(""));
        assert!(!is_cxx_keyword("classy"));
        assert!(!is_cxx_keyword("Class"));
    }
}
