//! Semantic view model.
//!
//! Lightweight references into the compiler's semantic model, constructed by
//! the orchestrator per emission request and discarded afterwards. The
//! printers only ever read them; type checking, generic-signature
//! computation and name resolution all happened before these values were
//! built.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque identity of a module in the semantic model.
///
/// Qualification decisions compare identities, never display names: two
/// distinct modules may coincidentally share a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleId(pub u64);

/// A reference to a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRef {
    pub id: ModuleId,
    /// Display name, used for namespace and symbol spellings.
    pub name: String,
}

impl ModuleRef {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: ModuleId(id),
            name: name.into(),
        }
    }
}

/// A declaration name.
///
/// Compound names (argument-labelled function names) are resolved to simple
/// spellings upstream; printers that require a simple name treat a compound
/// one as a contract violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclName {
    Simple(String),
    Compound {
        base: String,
        argument_labels: Vec<String>,
    },
}

impl DeclName {
    pub fn is_simple(&self) -> bool {
        matches!(self, DeclName::Simple(_))
    }

    /// The base spelling, without argument labels.
    pub fn base(&self) -> &str {
        match self {
            DeclName::Simple(name) => name,
            DeclName::Compound { base, .. } => base,
        }
    }
}

/// A target-language-native counterpart declaration.
///
/// When a type reference carries one of these, printing defers entirely to
/// the foreign naming scheme; the two schemes are never mixed for one
/// reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignTypeRef {
    /// Enclosing namespace path, outermost first.
    pub namespace_path: Vec<String>,
    /// The foreign type name. Always a plain identifier.
    pub name: String,
    /// Pre-rendered template arguments for a template specialization;
    /// empty for non-template types.
    pub template_args: Vec<String>,
}

/// A generic type parameter, identified by its (depth, index) position
/// within nested generic contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenericParam {
    pub depth: u32,
    pub index: u32,
}

impl GenericParam {
    pub fn new(depth: u32, index: u32) -> Self {
        Self { depth, index }
    }
}

/// Error constructing a [`GenericSignature`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("duplicate generic parameter at depth {depth}, index {index}")]
    DuplicateParam { depth: u32, index: u32 },
}

/// A canonicalized generic signature: an ordered sequence of parameters
/// with unique (depth, index) positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericSignature {
    params: Vec<GenericParam>,
}

impl GenericSignature {
    /// Build a signature, validating that no two parameters share a
    /// (depth, index) position.
    pub fn new(params: Vec<GenericParam>) -> Result<Self, SignatureError> {
        let mut seen = std::collections::HashSet::new();
        for param in &params {
            if !seen.insert((param.depth, param.index)) {
                return Err(SignatureError::DuplicateParam {
                    depth: param.depth,
                    index: param.index,
                });
            }
        }
        Ok(Self { params })
    }

    /// All parameters, in signature order.
    pub fn params(&self) -> &[GenericParam] {
        &self.params
    }

    /// Only the parameters of the innermost (deepest) generic context.
    ///
    /// Outer parameters are assumed already captured by the lexical nesting
    /// of the surrounding emitted scope and are never re-declared.
    pub fn innermost_params(&self) -> impl Iterator<Item = &GenericParam> {
        let max_depth = self.params.iter().map(|p| p.depth).max();
        self.params
            .iter()
            .filter(move |p| Some(p.depth) == max_depth)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// A constraint on a generic parameter that must be instantiated at a
/// metadata-accessor call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenericRequirement {
    /// Runtime type metadata must be obtainable for the parameter.
    /// The only requirement kind the emitter supports.
    Metadata(GenericParam),
    /// A protocol witness table requirement. Recognized so the semantic
    /// model can represent it, but printing one is a contract violation.
    WitnessTable(GenericParam),
}

impl GenericRequirement {
    pub fn is_metadata(&self) -> bool {
        matches!(self, GenericRequirement::Metadata(_))
    }

    pub fn param(&self) -> GenericParam {
        match self {
            GenericRequirement::Metadata(p) | GenericRequirement::WitnessTable(p) => *p,
        }
    }
}

/// A reference to a nominal type declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDeclRef {
    pub name: DeclName,
    /// Originating module; `None` for declarations with no module context.
    pub module: Option<ModuleRef>,
    pub generics: Option<GenericSignature>,
    /// Foreign counterpart; when present, naming defers to it entirely.
    pub foreign: Option<ForeignTypeRef>,
}

impl TypeDeclRef {
    pub fn new(name: impl Into<String>, module: Option<ModuleRef>) -> Self {
        Self {
            name: DeclName::Simple(name.into()),
            module,
            generics: None,
            foreign: None,
        }
    }

    pub fn with_generics(mut self, generics: GenericSignature) -> Self {
        self.generics = Some(generics);
        self
    }

    pub fn with_foreign(mut self, foreign: ForeignTypeRef) -> Self {
        self.foreign = Some(foreign);
        self
    }

    pub fn is_generic(&self) -> bool {
        self.generics.as_ref().is_some_and(|g| !g.is_empty())
    }
}

/// Nullability of a pointer position in the generated declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nullability {
    NonNull,
    Nullable,
    /// Implicitly unwrapped / unspecified.
    Unspecified,
}

/// How a nullability annotation is spelled at its grammar position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NullabilityPrintKind {
    /// Bare context-sensitive keyword (`nonnull`), for positions the
    /// grammar already disambiguates.
    ContextSensitive,
    /// Underscored qualifier written before the position it modifies.
    Before,
    /// Underscored qualifier written after the position it modifies.
    After,
}
