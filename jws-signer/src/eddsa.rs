//! EdDSA signature family (Ed25519)
//!
//! Single variant, no strength parameter: the curve fixes the hash.
//! Keys are the caller's [`ed25519_dalek`] key objects, so the
//! concrete type is the validation; `VerifyingKey` parsing already
//! rejected invalid curve points. Signatures are always 64 bytes and
//! wrong-length input fails immediately.

use ed25519_dalek::{Signature, Signer as _, SigningKey, Verifier as _, VerifyingKey};

use crate::algorithm::Algorithm;
use crate::error::{JwsError, Result};
use crate::traits::{Signer, Verifier};

/// Ed25519 signer over a caller-supplied private key.
#[derive(Clone)]
pub struct Ed25519Signer {
    key: SigningKey,
}

/// Ed25519 verifier over a caller-supplied public key.
#[derive(Clone)]
pub struct Ed25519Verifier {
    key: VerifyingKey,
}

impl Ed25519Signer {
    /// Create an EdDSA signer. The key type carries its own validity,
    /// so construction cannot fail.
    pub fn new(key: SigningKey) -> Self {
        tracing::debug!("Created Ed25519Signer: alg={}", Algorithm::EdDSA);
        Self { key }
    }
}

impl Ed25519Verifier {
    /// Create an EdDSA verifier. The key type carries its own
    /// validity, so construction cannot fail.
    pub fn new(key: VerifyingKey) -> Self {
        tracing::debug!("Created Ed25519Verifier: alg={}", Algorithm::EdDSA);
        Self { key }
    }
}

impl Signer for Ed25519Signer {
    fn algorithm(&self) -> Algorithm {
        Algorithm::EdDSA
    }

    fn sign(&self, data: &[u8]) -> Result<Vec<u8>> {
        let signature = self.key.sign(data);

        tracing::debug!(
            "Signed message: alg={}, msg_len={} bytes, sig_len=64 bytes",
            Algorithm::EdDSA,
            data.len()
        );

        Ok(signature.to_bytes().to_vec())
    }
}

impl Verifier for Ed25519Verifier {
    fn algorithm(&self) -> Algorithm {
        Algorithm::EdDSA
    }

    fn verify(&self, data: &[u8], signature: &[u8]) -> Result<()> {
        let signature =
            Signature::from_slice(signature).map_err(|_| JwsError::InvalidSignature)?;
        self.key
            .verify(data, &signature)
            .map_err(|_| JwsError::InvalidSignature)
    }
}
