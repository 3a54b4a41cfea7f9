//! RSASSA-PKCS1-v1_5 signature family (RS256, RS384, RS512)
//!
//! Keys are the caller's [`rsa::RsaPrivateKey`] / [`rsa::RsaPublicKey`]
//! objects. Signatures are modulus-sized big-endian integers and are
//! deterministic. Verification rejects signatures of the wrong length
//! before touching the primitive; both paths surface the same
//! `InvalidSignature` error.

use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::algorithm::Algorithm;
use crate::error::{JwsError, Result};
use crate::traits::{Signer, Verifier};

/// RSASSA-PKCS1-v1_5 signer over a caller-supplied private key.
#[derive(Clone)]
pub struct RsaSigner {
    algorithm: Algorithm,
    key: RsaPrivateKey,
}

/// RSASSA-PKCS1-v1_5 verifier over a caller-supplied public key.
#[derive(Clone)]
pub struct RsaVerifier {
    algorithm: Algorithm,
    key: RsaPublicKey,
}

fn check_algorithm(algorithm: Algorithm) -> Result<()> {
    match algorithm {
        Algorithm::RS256 | Algorithm::RS384 | Algorithm::RS512 => Ok(()),
        other => Err(JwsError::UnsupportedAlgorithm(other)),
    }
}

/// Hash the payload and build the matching padding scheme.
fn digest_and_padding(algorithm: Algorithm, data: &[u8]) -> Result<(Vec<u8>, Pkcs1v15Sign)> {
    match algorithm {
        Algorithm::RS256 => Ok((Sha256::digest(data).to_vec(), Pkcs1v15Sign::new::<Sha256>())),
        Algorithm::RS384 => Ok((Sha384::digest(data).to_vec(), Pkcs1v15Sign::new::<Sha384>())),
        Algorithm::RS512 => Ok((Sha512::digest(data).to_vec(), Pkcs1v15Sign::new::<Sha512>())),
        other => Err(JwsError::UnsupportedAlgorithm(other)),
    }
}

impl RsaSigner {
    /// Create an RS-family signer bound to one of RS256/RS384/RS512.
    ///
    /// The key gets a library-level sanity check (`validate`); modulus
    /// size policy is delegated to the primitive.
    ///
    /// # Errors
    /// - `UnsupportedAlgorithm` if `algorithm` is not an RS variant
    /// - `InvalidKey` if the private key fails its sanity check
    pub fn new(algorithm: Algorithm, key: RsaPrivateKey) -> Result<Self> {
        check_algorithm(algorithm)?;
        key.validate()
            .map_err(|e| JwsError::InvalidKey(format!("RSA private key: {e}")))?;

        tracing::debug!(
            "Created RsaSigner: alg={}, modulus_len={} bytes",
            algorithm,
            key.size()
        );

        Ok(Self { algorithm, key })
    }
}

impl RsaVerifier {
    /// Create an RS-family verifier bound to one of RS256/RS384/RS512.
    ///
    /// # Errors
    /// - `UnsupportedAlgorithm` if `algorithm` is not an RS variant
    pub fn new(algorithm: Algorithm, key: RsaPublicKey) -> Result<Self> {
        check_algorithm(algorithm)?;

        tracing::debug!(
            "Created RsaVerifier: alg={}, modulus_len={} bytes",
            algorithm,
            key.size()
        );

        Ok(Self { algorithm, key })
    }
}

impl Signer for RsaSigner {
    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn sign(&self, data: &[u8]) -> Result<Vec<u8>> {
        let (hashed, padding) = digest_and_padding(self.algorithm, data)?;
        let signature = self
            .key
            .sign(padding, &hashed)
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

impl Verifier for RsaVerifier {
    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn verify(&self, data: &[u8], signature: &[u8]) -> Result<()> {
        // Length gate before the primitive; the error class is the
        // same as a failed verification.
        if signature.len() != self.key.size() {
            return Err(JwsError::InvalidSignature);
        }

        let (hashed, padding) = digest_and_padding(self.algorithm, data)?;
        self.key
            .verify(padding, &hashed, signature)
            .map_err(|_| JwsError::InvalidSignature)
    }
}
