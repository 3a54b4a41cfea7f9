//! HMAC signature family (HS256, HS384, HS512)
//!
//! Symmetric scheme. Signer and verifier share the same secret.
//! Signatures are the raw MAC output (32/48/64 bytes) and are
//! deterministic: the same key and payload always produce identical
//! bytes.
//!
//! Verification recomputes the tag and compares it with
//! [`subtle::ConstantTimeEq`]. A non-constant-time comparison here
//! would leak tag bytes through timing.

use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};
use subtle::ConstantTimeEq;

use crate::algorithm::Algorithm;
use crate::error::{JwsError, Result};
use crate::traits::{Signer, Verifier};

/// HMAC signer over a shared secret.
///
/// # Example
///
/// ```rust
/// use jws_signer::hmac::{HmacSigner, HmacVerifier};
/// use jws_signer::{Algorithm, Signer, Verifier};
///
/// let signer = HmacSigner::new(Algorithm::HS256, b"shared secret").unwrap();
/// let signature = signer.sign(b"payload").unwrap();
///
/// let verifier = HmacVerifier::new(Algorithm::HS256, b"shared secret").unwrap();
/// assert!(verifier.verify(b"payload", &signature).is_ok());
/// ```
#[derive(Clone)]
pub struct HmacSigner {
    algorithm: Algorithm,
    key: Vec<u8>,
}

/// HMAC verifier over a shared secret.
#[derive(Clone)]
pub struct HmacVerifier {
    algorithm: Algorithm,
    key: Vec<u8>,
}

/// Reject algorithms outside the HS family and empty secrets.
///
/// Short keys are accepted: minimum secret length is a caller policy,
/// not enforced here.
fn check_params(algorithm: Algorithm, key: &[u8]) -> Result<()> {
    match algorithm {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => {}
        other => return Err(JwsError::UnsupportedAlgorithm(other)),
    }
    if key.is_empty() {
        return Err(JwsError::InvalidKey("HMAC key must not be empty".to_string()));
    }
    Ok(())
}

fn compute_tag(algorithm: Algorithm, key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    // HMAC accepts any non-empty key length, so new_from_slice cannot
    // fail after construction-time checks.
    match algorithm {
        Algorithm::HS256 => {
            let mut mac = Hmac::<Sha256>::new_from_slice(key)
                .map_err(|e| JwsError::SigningError(e.to_string()))?;
            mac.update(data);
            Ok(mac.finalize().into_bytes().to_vec())
        }
        Algorithm::HS384 => {
            let mut mac = Hmac::<Sha384>::new_from_slice(key)
                .map_err(|e| JwsError::SigningError(e.to_string()))?;
            mac.update(data);
            Ok(mac.finalize().into_bytes().to_vec())
        }
        Algorithm::HS512 => {
            let mut mac = Hmac::<Sha512>::new_from_slice(key)
                .map_err(|e| JwsError::SigningError(e.to_string()))?;
            mac.update(data);
            Ok(mac.finalize().into_bytes().to_vec())
        }
        other => Err(JwsError::UnsupportedAlgorithm(other)),
    }
}

impl HmacSigner {
    /// Create an HMAC signer bound to one of HS256/HS384/HS512.
    ///
    /// # Errors
    /// - `UnsupportedAlgorithm` if `algorithm` is not an HS variant
    /// - `InvalidKey` if the secret is empty
    pub fn new(algorithm: Algorithm, key: &[u8]) -> Result<Self> {
        check_params(algorithm, key)?;

        tracing::debug!(
            "Created HmacSigner: alg={}, key_len={} bytes",
            algorithm,
            key.len()
        );

        Ok(Self {
            algorithm,
            key: key.to_vec(),
        })
    }
}

impl HmacVerifier {
    /// Create an HMAC verifier bound to one of HS256/HS384/HS512.
    ///
    /// # Errors
    /// - `UnsupportedAlgorithm` if `algorithm` is not an HS variant
    /// - `InvalidKey` if the secret is empty
    pub fn new(algorithm: Algorithm, key: &[u8]) -> Result<Self> {
        check_params(algorithm, key)?;

        tracing::debug!(
            "Created HmacVerifier: alg={}, key_len={} bytes",
            algorithm,
            key.len()
        );

        Ok(Self {
            algorithm,
            key: key.to_vec(),
        })
    }
}

impl Signer for HmacSigner {
    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn sign(&self, data: &[u8]) -> Result<Vec<u8>> {
        let tag = compute_tag(self.algorithm, &self.key, data)?;

        tracing::debug!(
            "Signed message: alg={}, msg_len={} bytes, sig_len={} bytes",
            self.algorithm,
            data.len(),
            tag.len()
        );

        Ok(tag)
    }
}

impl Verifier for HmacVerifier {
    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn verify(&self, data: &[u8], signature: &[u8]) -> Result<()> {
        let expected = compute_tag(self.algorithm, &self.key, data)?;

        // ct_eq handles length mismatch without an early return, so a
        // truncated tag takes the same path as a wrong one.
        if bool::from(expected.as_slice().ct_eq(signature)) {
            Ok(())
        } else {
            tracing::debug!("HMAC verification failed: alg={}", self.algorithm);
            Err(JwsError::InvalidSignature)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 4231 test case 2: key "Jefe", data "what do ya want for nothing?"
    const RFC4231_KEY: &[u8] = b"Jefe";
    const RFC4231_DATA: &[u8] = b"what do ya want for nothing?";

    #[test]
    fn test_rfc4231_known_answers() {
        let vectors = [
            (
                Algorithm::HS256,
                "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843",
            ),
            (
                Algorithm::HS384,
                "af45d2e376484031617f78d2b58a6b1b9c7ef464f5a01b47e42ec3736322445e8e2240ca5e69e2c78b3239ecfab21649",
            ),
            (
                Algorithm::HS512,
                "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea2505549758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737",
            ),
        ];

        for (alg, expected_hex) in vectors {
            let signer = HmacSigner::new(alg, RFC4231_KEY).unwrap();
            let tag = signer.sign(RFC4231_DATA).unwrap();
            assert_eq!(hex::encode(&tag), expected_hex, "{alg}");
        }
    }

    #[test]
    fn test_sign_is_deterministic() {
        let signer = HmacSigner::new(Algorithm::HS256, b"secret").unwrap();

        let sig1 = signer.sign(b"message").unwrap();
        let sig2 = signer.sign(b"message").unwrap();
        assert_eq!(sig1, sig2);
    }

    #[test]
    fn test_empty_key_is_rejected() {
        let result = HmacSigner::new(Algorithm::HS256, b"");
        assert!(matches!(result, Err(JwsError::InvalidKey(_))));

        let result = HmacVerifier::new(Algorithm::HS512, b"");
        assert!(matches!(result, Err(JwsError::InvalidKey(_))));
    }

    #[test]
    fn test_wrong_family_is_rejected() {
        let result = HmacSigner::new(Algorithm::RS256, b"secret");
        assert!(matches!(
            result,
            Err(JwsError::UnsupportedAlgorithm(Algorithm::RS256))
        ));
    }

    #[test]
    fn test_algorithm_binding() {
        for alg in [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512] {
            let signer = HmacSigner::new(alg, b"secret").unwrap();
            assert_eq!(signer.algorithm(), alg);

            let verifier = HmacVerifier::new(alg, b"secret").unwrap();
            assert_eq!(verifier.algorithm(), alg);
        }
    }

    #[test]
    fn test_truncated_signature_is_rejected() {
        let signer = HmacSigner::new(Algorithm::HS256, b"secret").unwrap();
        let verifier = HmacVerifier::new(Algorithm::HS256, b"secret").unwrap();

        let signature = signer.sign(b"message").unwrap();
        let result = verifier.verify(b"message", &signature[..signature.len() - 1]);
        assert!(matches!(result, Err(JwsError::InvalidSignature)));

        let result = verifier.verify(b"message", &[]);
        assert!(matches!(result, Err(JwsError::InvalidSignature)));

        // A valid tag with trailing bytes is still the wrong length
        let mut padded = signature.clone();
        padded.push(0x00);
        let result = verifier.verify(b"message", &padded);
        assert!(matches!(result, Err(JwsError::InvalidSignature)));
    }

    #[test]
    fn test_wrong_secret_fails_verification() {
        let signer = HmacSigner::new(Algorithm::HS384, b"secret A").unwrap();
        let verifier = HmacVerifier::new(Algorithm::HS384, b"secret B").unwrap();

        let signature = signer.sign(b"message").unwrap();
        assert!(verifier.verify(b"message", &signature).is_err());
    }
}
