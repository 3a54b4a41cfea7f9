//! RSASSA-PSS signature family (PS256, PS384, PS512)
//!
//! Same key types as the PKCS1-v1_5 family, different padding: PSS
//! draws a fresh salt (salt length = digest length, per JWS) from the
//! process RNG on every call, so two signatures over the same payload
//! differ. Callers must not assume signature bytes are stable.

use rsa::traits::PublicKeyParts;
use rsa::{Pss, RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::algorithm::Algorithm;
use crate::error::{JwsError, Result};
use crate::traits::{Signer, Verifier};

/// RSASSA-PSS signer over a caller-supplied private key.
#[derive(Clone)]
pub struct RsaPssSigner {
    algorithm: Algorithm,
    key: RsaPrivateKey,
}

/// RSASSA-PSS verifier over a caller-supplied public key.
#[derive(Clone)]
pub struct RsaPssVerifier {
    algorithm: Algorithm,
    key: RsaPublicKey,
}

fn check_algorithm(algorithm: Algorithm) -> Result<()> {
    match algorithm {
        Algorithm::PS256 | Algorithm::PS384 | Algorithm::PS512 => Ok(()),
        other => Err(JwsError::UnsupportedAlgorithm(other)),
    }
}

/// Hash the payload and build the matching PSS scheme (MGF1 over the
/// same hash, salt length = digest length).
fn digest_and_padding(algorithm: Algorithm, data: &[u8]) -> Result<(Vec<u8>, Pss)> {
    match algorithm {
        Algorithm::PS256 => Ok((Sha256::digest(data).to_vec(), Pss::new::<Sha256>())),
        Algorithm::PS384 => Ok((Sha384::digest(data).to_vec(), Pss::new::<Sha384>())),
        Algorithm::PS512 => Ok((Sha512::digest(data).to_vec(), Pss::new::<Sha512>())),
        other => Err(JwsError::UnsupportedAlgorithm(other)),
    }
}

impl RsaPssSigner {
    /// Create a PS-family signer bound to one of PS256/PS384/PS512.
    ///
    /// # Errors
    /// - `UnsupportedAlgorithm` if `algorithm` is not a PS variant
    /// - `InvalidKey` if the private key fails its sanity check
    pub fn new(algorithm: Algorithm, key: RsaPrivateKey) -> Result<Self> {
        check_algorithm(algorithm)?;
        key.validate()
            .map_err(|e| JwsError::InvalidKey(format!("RSA private key: {e}")))?;

        tracing::debug!(
            "Created RsaPssSigner: alg={}, modulus_len={} bytes",
            algorithm,
            key.size()
        );

        Ok(Self { algorithm, key })
    }
}

impl RsaPssVerifier {
    /// Create a PS-family verifier bound to one of PS256/PS384/PS512.
    ///
    /// # Errors
    /// - `UnsupportedAlgorithm` if `algorithm` is not a PS variant
    pub fn new(algorithm: Algorithm, key: RsaPublicKey) -> Result<Self> {
        check_algorithm(algorithm)?;

        tracing::debug!(
            "Created RsaPssVerifier: alg={}, modulus_len={} bytes",
            algorithm,
            key.size()
        );

        Ok(Self { algorithm, key })
    }
}

impl Signer for RsaPssSigner {
    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn sign(&self, data: &[u8]) -> Result<Vec<u8>> {
        let (hashed, padding) = digest_and_padding(self.algorithm, data)?;
        let signature = self
            .key
            .sign_with_rng(&mut rand::thread_rng(), padding, &hashed)
            .map_err(|e| JwsError::SigningError(e.to_string()))?;

        tracing::debug!(
            "Signed message: alg={}, msg_len={} bytes, sig_len={} bytes",
            self.algorithm,
            data.len(),
            signature.len()
        );

        Ok(signature)
    }
}

impl Verifier for RsaPssVerifier {
    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn verify(&self, data: &[u8], signature: &[u8]) -> Result<()> {
        if signature.len() != self.key.size() {
            return Err(JwsError::InvalidSignature);
        }

        let (hashed, padding) = digest_and_padding(self.algorithm, data)?;
        self.key
            .verify(padding, &hashed, signature)
            .map_err(|_| JwsError::InvalidSignature)
    }
}
