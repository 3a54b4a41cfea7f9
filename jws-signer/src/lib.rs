//! Signature-algorithm abstraction for compact signed tokens (JWS)
//!
//! Provides one signer/verifier pair per algorithm family, behind the
//! common [`Signer`] and [`Verifier`] contracts:
//!
//! - HMAC (HS256, HS384, HS512)
//! - RSASSA-PKCS1-v1_5 (RS256, RS384, RS512)
//! - RSASSA-PSS (PS256, PS384, PS512)
//! - ECDSA (ES256, ES384, ES512)
//! - EdDSA (Ed25519)
//!
//! Keys are validated once, at construction. A constructed instance is
//! immutable and thread-safe, and never fails for key-shape reasons.
//! Token encoding (base64url, header assembly) is the caller's
//! concern. Payloads come in as raw bytes and signatures go out as
//! raw bytes.
//!
//! # Quick Start
//!
//! ```rust
//! use jws_signer::hmac::{HmacSigner, HmacVerifier};
//! use jws_signer::{Algorithm, Signer, Verifier};
//!
//! // Bind a shared secret to an algorithm
//! let signer = HmacSigner::new(Algorithm::HS256, b"shared secret").unwrap();
//!
//! // Sign payload bytes
//! let payload = b"header.claims";
//! let signature = signer.sign(payload).unwrap();
//!
//! // Verify with a matching verifier
//! let verifier = HmacVerifier::new(Algorithm::HS256, b"shared secret").unwrap();
//! assert!(verifier.verify(payload, &signature).is_ok());
//! ```

pub mod algorithm;
pub mod ecdsa;
pub mod eddsa;
pub mod error;
pub mod hmac;
pub mod pss;
pub mod rsa;
pub mod traits;

// Re-export commonly used types
pub use algorithm::Algorithm;
pub use error::{JwsError, Result};
pub use traits::{Signer, Verifier};
