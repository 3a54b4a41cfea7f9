//! ECDSA signature family (ES256, ES384, ES512)
//!
//! Keys are curve-tagged wrappers around the p256/p384/p521 signing
//! and verifying keys, so a curve that does not match the requested
//! algorithm is rejected at construction, never at sign/verify time.
//!
//! Signatures are the JWS fixed-width `r || s` encoding (64, 96 and
//! 132 bytes). Signature parsing rejects wrong-width and out-of-range
//! `r`/`s` values before the curve check runs; both surface as
//! `InvalidSignature`.

use p256::ecdsa::signature::{Signer as _, Verifier as _};

use crate::algorithm::Algorithm;
use crate::error::{JwsError, Result};
use crate::traits::{Signer, Verifier};

/// ECDSA private key, tagged with its curve.
#[derive(Clone)]
pub enum EcdsaPrivateKey {
    P256(p256::ecdsa::SigningKey),
    P384(p384::ecdsa::SigningKey),
    P521(p521::ecdsa::SigningKey),
}

/// ECDSA public key, tagged with its curve.
#[derive(Clone)]
pub enum EcdsaPublicKey {
    P256(p256::ecdsa::VerifyingKey),
    P384(p384::ecdsa::VerifyingKey),
    P521(p521::ecdsa::VerifyingKey),
}

impl EcdsaPrivateKey {
    fn curve_name(&self) -> &'static str {
        match self {
            EcdsaPrivateKey::P256(_) => "P-256",
            EcdsaPrivateKey::P384(_) => "P-384",
            EcdsaPrivateKey::P521(_) => "P-521",
        }
    }
}

impl EcdsaPublicKey {
    fn curve_name(&self) -> &'static str {
        match self {
            EcdsaPublicKey::P256(_) => "P-256",
            EcdsaPublicKey::P384(_) => "P-384",
            EcdsaPublicKey::P521(_) => "P-521",
        }
    }
}

impl From<p256::ecdsa::SigningKey> for EcdsaPrivateKey {
    fn from(key: p256::ecdsa::SigningKey) -> Self {
        EcdsaPrivateKey::P256(key)
    }
}

impl From<p384::ecdsa::SigningKey> for EcdsaPrivateKey {
    fn from(key: p384::ecdsa::SigningKey) -> Self {
        EcdsaPrivateKey::P384(key)
    }
}

impl From<p521::ecdsa::SigningKey> for EcdsaPrivateKey {
    fn from(key: p521::ecdsa::SigningKey) -> Self {
        EcdsaPrivateKey::P521(key)
    }
}

impl From<p256::ecdsa::VerifyingKey> for EcdsaPublicKey {
    fn from(key: p256::ecdsa::VerifyingKey) -> Self {
        EcdsaPublicKey::P256(key)
    }
}

impl From<p384::ecdsa::VerifyingKey> for EcdsaPublicKey {
    fn from(key: p384::ecdsa::VerifyingKey) -> Self {
        EcdsaPublicKey::P384(key)
    }
}

impl From<p521::ecdsa::VerifyingKey> for EcdsaPublicKey {
    fn from(key: p521::ecdsa::VerifyingKey) -> Self {
        EcdsaPublicKey::P521(key)
    }
}

/// Curve each ES variant requires. Hashes follow the JOSE pairing
/// (SHA-256/384/512) via the curves' default digests.
fn expected_curve(algorithm: Algorithm) -> Result<&'static str> {
    match algorithm {
        Algorithm::ES256 => Ok("P-256"),
        Algorithm::ES384 => Ok("P-384"),
        Algorithm::ES512 => Ok("P-521"),
        other => Err(JwsError::UnsupportedAlgorithm(other)),
    }
}

fn check_curve(algorithm: Algorithm, curve: &'static str) -> Result<()> {
    let expected = expected_curve(algorithm)?;
    if curve != expected {
        return Err(JwsError::InvalidKey(format!(
            "algorithm {algorithm} requires a {expected} key, got {curve}"
        )));
    }
    Ok(())
}

/// ECDSA signer over a caller-supplied private key.
#[derive(Clone)]
pub struct EcdsaSigner {
    algorithm: Algorithm,
    key: EcdsaPrivateKey,
}

/// ECDSA verifier over a caller-supplied public key.
#[derive(Clone)]
pub struct EcdsaVerifier {
    algorithm: Algorithm,
    key: EcdsaPublicKey,
}

impl EcdsaSigner {
    /// Create an ES-family signer bound to one of ES256/ES384/ES512.
    ///
    /// # Errors
    /// - `UnsupportedAlgorithm` if `algorithm` is not an ES variant
    /// - `InvalidKey` if the key's curve does not match the algorithm
    pub fn new(algorithm: Algorithm, key: impl Into<EcdsaPrivateKey>) -> Result<Self> {
        let key = key.into();
        check_curve(algorithm, key.curve_name())?;

        tracing::debug!(
            "Created EcdsaSigner: alg={}, curve={}",
            algorithm,
            key.curve_name()
        );

        Ok(Self { algorithm, key })
    }
}

impl EcdsaVerifier {
    /// Create an ES-family verifier bound to one of ES256/ES384/ES512.
    ///
    /// # Errors
    /// - `UnsupportedAlgorithm` if `algorithm` is not an ES variant
    /// - `InvalidKey` if the key's curve does not match the algorithm
    pub fn new(algorithm: Algorithm, key: impl Into<EcdsaPublicKey>) -> Result<Self> {
        let key = key.into();
        check_curve(algorithm, key.curve_name())?;

        tracing::debug!(
            "Created EcdsaVerifier: alg={}, curve={}",
            algorithm,
            key.curve_name()
        );

        Ok(Self { algorithm, key })
    }
}

impl Signer for EcdsaSigner {
    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn sign(&self, data: &[u8]) -> Result<Vec<u8>> {
        let signature = match &self.key {
            EcdsaPrivateKey::P256(key) => {
                let sig: p256::ecdsa::Signature = key.sign(data);
                sig.to_bytes().to_vec()
            }
            EcdsaPrivateKey::P384(key) => {
                let sig: p384::ecdsa::Signature = key.sign(data);
                sig.to_bytes().to_vec()
            }
            EcdsaPrivateKey::P521(key) => {
                let sig: p521::ecdsa::Signature = key.sign(data);
                sig.to_bytes().to_vec()
            }
        };

        tracing::debug!(
            "Signed message: alg={}, msg_len={} bytes, sig_len={} bytes",
            self.algorithm,
            data.len(),
            signature.len()
        );

        Ok(signature)
    }
}

impl Verifier for EcdsaVerifier {
    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn verify(&self, data: &[u8], signature: &[u8]) -> Result<()> {
        match &self.key {
            EcdsaPublicKey::P256(key) => {
                let sig = p256::ecdsa::Signature::from_slice(signature)
                    .map_err(|_| JwsError::InvalidSignature)?;
                key.verify(data, &sig).map_err(|_| JwsError::InvalidSignature)
            }
            EcdsaPublicKey::P384(key) => {
                let sig = p384::ecdsa::Signature::from_slice(signature)
                    .map_err(|_| JwsError::InvalidSignature)?;
                key.verify(data, &sig).map_err(|_| JwsError::InvalidSignature)
            }
            EcdsaPublicKey::P521(key) => {
                let sig = p521::ecdsa::Signature::from_slice(signature)
                    .map_err(|_| JwsError::InvalidSignature)?;
                key.verify(data, &sig).map_err(|_| JwsError::InvalidSignature)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_verify_round_trip_p256() {
        let key = p256::ecdsa::SigningKey::random(&mut rand::thread_rng());
        let public = *key.verifying_key();

        let signer = EcdsaSigner::new(Algorithm::ES256, key).unwrap();
        let verifier = EcdsaVerifier::new(Algorithm::ES256, public).unwrap();

        let signature = signer.sign(b"token signing input").unwrap();
        assert_eq!(signature.len(), 64);
        assert!(verifier.verify(b"token signing input", &signature).is_ok());
    }

    #[test]
    fn test_sign_verify_round_trip_p384() {
        let key = p384::ecdsa::SigningKey::random(&mut rand::thread_rng());
        let public = *key.verifying_key();

        let signer = EcdsaSigner::new(Algorithm::ES384, key).unwrap();
        let verifier = EcdsaVerifier::new(Algorithm::ES384, public).unwrap();

        let signature = signer.sign(b"token signing input").unwrap();
        assert_eq!(signature.len(), 96);
        assert!(verifier.verify(b"token signing input", &signature).is_ok());
    }

    #[test]
    fn test_sign_verify_round_trip_p521() {
        let key = p521::ecdsa::SigningKey::random(&mut rand::thread_rng());
        // p521 0.13 does not expose SigningKey::verifying_key; the
        // documented construction is From<&SigningKey>.
        let public = p521::ecdsa::VerifyingKey::from(&key);

        let signer = EcdsaSigner::new(Algorithm::ES512, key).unwrap();
        let verifier = EcdsaVerifier::new(Algorithm::ES512, public).unwrap();

        let signature = signer.sign(b"token signing input").unwrap();
        assert_eq!(signature.len(), 132);
        assert!(verifier.verify(b"token signing input", &signature).is_ok());

        // Garbage input of any width is rejected, never a panic
        let result = verifier.verify(b"token signing input", &[0xffu8; 132]);
        assert!(matches!(result, Err(JwsError::InvalidSignature)));
        let result = verifier.verify(b"token signing input", &[0xffu8; 7]);
        assert!(matches!(result, Err(JwsError::InvalidSignature)));
    }

    #[test]
    fn test_curve_mismatch_is_rejected() {
        let key = p256::ecdsa::SigningKey::random(&mut rand::thread_rng());
        let public = *key.verifying_key();

        let result = EcdsaSigner::new(Algorithm::ES384, key);
        assert!(matches!(result, Err(JwsError::InvalidKey(_))));

        let result = EcdsaVerifier::new(Algorithm::ES512, public);
        assert!(matches!(result, Err(JwsError::InvalidKey(_))));
    }

    #[test]
    fn test_wrong_family_is_rejected() {
        let key = p256::ecdsa::SigningKey::random(&mut rand::thread_rng());

        let result = EcdsaSigner::new(Algorithm::EdDSA, key);
        assert!(matches!(
            result,
            Err(JwsError::UnsupportedAlgorithm(Algorithm::EdDSA))
        ));
    }

    #[test]
    fn test_malformed_signature_is_rejected() {
        let key = p256::ecdsa::SigningKey::random(&mut rand::thread_rng());
        let verifier = EcdsaVerifier::new(Algorithm::ES256, *key.verifying_key()).unwrap();

        // Wrong width
        let result = verifier.verify(b"message", &[1u8; 63]);
        assert!(matches!(result, Err(JwsError::InvalidSignature)));

        // Correct width, out-of-range scalars (r = s = 0)
        let result = verifier.verify(b"message", &[0u8; 64]);
        assert!(matches!(result, Err(JwsError::InvalidSignature)));
    }

    #[test]
    fn test_wrong_key_fails_verification() {
        let key_a = p256::ecdsa::SigningKey::random(&mut rand::thread_rng());
        let key_b = p256::ecdsa::SigningKey::random(&mut rand::thread_rng());

        let signer = EcdsaSigner::new(Algorithm::ES256, key_a).unwrap();
        let verifier = EcdsaVerifier::new(Algorithm::ES256, *key_b.verifying_key()).unwrap();

        let signature = signer.sign(b"message").unwrap();
        assert!(verifier.verify(b"message", &signature).is_err());
    }
}
