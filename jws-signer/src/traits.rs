/// Common contracts for signature algorithm families
use crate::algorithm::Algorithm;
use crate::error::Result;

/// Produces signatures under one key and one bound algorithm.
///
/// Implementations are immutable after construction, so a single
/// instance may be shared across threads without locking. `sign`
/// only fails on primitive-level errors; key problems were already
/// rejected by the constructor.
pub trait Signer: Send + Sync {
    /// The algorithm this signer was constructed for.
    fn algorithm(&self) -> Algorithm;

    /// Sign payload bytes, returning raw signature bytes.
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>>;
}

/// Checks signatures under one key and one bound algorithm.
///
/// `verify` returns `Ok(())` if and only if the signature is valid
/// for the data under the bound key and algorithm. Malformed or
/// wrong-length signature bytes are rejected the same way as
/// semantically invalid ones.
pub trait Verifier: Send + Sync {
    /// The algorithm this verifier was constructed for.
    fn algorithm(&self) -> Algorithm;

    /// Verify signature bytes against payload bytes.
    fn verify(&self, data: &[u8], signature: &[u8]) -> Result<()>;
}
