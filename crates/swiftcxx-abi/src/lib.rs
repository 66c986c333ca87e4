//! ABI constants shared between the C++ header emitter and the Swift runtime
//! calling convention.
//!
//! These values are contractual: the emitter writes them into generated
//! headers, and the runtime thunks they describe were compiled against the
//! same numbers. Changing one side without the other breaks every consumer
//! at link time or, worse, at run time. Keeping them in a leaf crate means
//! both the generator and any future checker tooling name the same constant
//! instead of repeating a magic number.

/// Maximum number of generic requirements a type-metadata access function
/// can receive as direct arguments.
///
/// The runtime calling-convention thunk behind the generated accessor has a
/// fixed arity; the emitter writes a consumer-side `static_assert` against
/// this bound so an over-long requirement list fails at the consumer's
/// compile time rather than corrupting the call.
pub const NUM_DIRECT_GENERIC_METADATA_ACCESS_ARGS: usize = 3;

/// The "complete metadata, no special request" sentinel passed as the first
/// argument of every metadata access function call.
pub const METADATA_REQUEST_COMPLETE: u64 = 0;

/// Pointer-authentication discriminators for runtime data structures.
///
/// On pointer-authentication platforms these are blended with the storage
/// address to sign and authenticate loads of the corresponding pointer.
pub mod pointer_auth {
    /// Discriminator for value witness table pointers (0x2e3f).
    pub const VALUE_WITNESS_TABLE_DISCRIMINATOR: u16 = 0x2e3f;
}
