/// Classification of a lookup failure.
///
/// Used by the public lookup facade to decide whether a failure degrades to a
/// default value or must be surfaced to the caller.
///
/// # Behavior Summary
///
/// | Class | Degrade to default? | Remark on the result? | Surface to caller? |
/// |-------|---------------------|-----------------------|--------------------|
/// | `NotFound` | Yes | Yes ("not found") | No |
/// | `Malformed` | Yes | Yes (describes the input problem) | No |
/// | `Fatal` | Yes, for every later call | Yes | Yes, via `initialized()` |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FailureClass {
    /// The input was well formed but no table row matched it.
    /// This is an expected outcome for retired or unmapped symbols.
    NotFound,

    /// The input could not be parsed (wrong length, null, bad symbol set).
    /// The caller still receives a usable default.
    Malformed,

    /// A lookup table could not be loaded.
    ///
    /// Only raised while constructing the lookup tables. A resolver built
    /// without its tables reports `initialized() == false` and answers every
    /// call with its documented default.
    Fatal,
}
