//! ECIES Demo
//!
//! Alice encrypts a message for Bob's static public key, Bob decrypts it,
//! and an outsider's attempt is rejected.

use ecies_core::{AgreementKey, PublicKeyHandle, X25519KeyPair, X25519PublicKey, decrypt, encrypt};
use rand::rngs::OsRng;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ecies_demo=info".parse()?)
                .add_directive("ecies_core=debug".parse()?),
        )
        .init();

    let message = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Hello world".to_string());

    let alice = X25519KeyPair::generate(&mut OsRng);
    let bob = X25519KeyPair::generate(&mut OsRng);
    let eve = X25519KeyPair::generate(&mut OsRng);

    // Exchange public keys as raw bytes
    let alice_public = X25519PublicKey::from_bytes(&alice.public_key().to_bytes())?;
    let bob_public = X25519PublicKey::from_bytes(&bob.public_key().to_bytes())?;

    let wire = encrypt(&mut OsRng, &alice, &bob_public, message.as_bytes())?;
    info!(
        "Alice -> Bob: {} plaintext bytes, {} wire bytes",
        message.len(),
        wire.len()
    );

    let plaintext = decrypt(&bob, &alice_public, &wire)?;
    info!("Bob recovered: {:?}", String::from_utf8_lossy(&plaintext));

    match decrypt(&eve, &alice_public, &wire) {
        Ok(_) => anyhow::bail!("outsider decrypted a message not addressed to them"),
        Err(e) => warn!("Eve rejected: {}", e),
    }

    Ok(())
}
