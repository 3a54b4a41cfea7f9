//! Demo: sign and verify a payload with each algorithm family

use jws_signer::ecdsa::{EcdsaSigner, EcdsaVerifier};
use jws_signer::eddsa::{Ed25519Signer, Ed25519Verifier};
use jws_signer::hmac::{HmacSigner, HmacVerifier};
use jws_signer::{Algorithm, Signer, Verifier};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let payload = br#"{"iss":"demo","sub":"example","exp":1699459200}"#;

    // HMAC: shared secret on both sides
    let secret = b"demo shared secret";
    let signer = HmacSigner::new(Algorithm::HS256, secret)?;
    let verifier = HmacVerifier::new(Algorithm::HS256, secret)?;
    let signature = signer.sign(payload)?;
    verifier.verify(payload, &signature)?;
    println!("✓ {}: {} byte signature: {}", signer.algorithm(), signature.len(), hex::encode(&signature));

    // ECDSA: P-256 keypair
    let key = p256::ecdsa::SigningKey::random(&mut rand::thread_rng());
    let public = *key.verifying_key();
    let signer = EcdsaSigner::new(Algorithm::ES256, key)?;
    let verifier = EcdsaVerifier::new(Algorithm::ES256, public)?;
    let signature = signer.sign(payload)?;
    verifier.verify(payload, &signature)?;
    println!("✓ {}: {} byte signature: {}", signer.algorithm(), signature.len(), hex::encode(&signature));

    // EdDSA: Ed25519 keypair
    let key = ed25519_dalek::SigningKey::generate(&mut rand::thread_rng());
    let public = key.verifying_key();
    let signer = Ed25519Signer::new(key);
    let verifier = Ed25519Verifier::new(public);
    let signature = signer.sign(payload)?;
    verifier.verify(payload, &signature)?;
    println!("✓ {}: {} byte signature: {}", signer.algorithm(), signature.len(), hex::encode(&signature));

    // Tampered signatures are rejected
    let mut tampered = signature.clone();
    tampered[0] ^= 0x01;
    assert!(verifier.verify(payload, &tampered).is_err());
    println!("✓ tampered signature rejected");

    Ok(())
}
