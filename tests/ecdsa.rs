use sha2::{Digest, Sha256};
use triform25519::ecdsa::{ecdsa_pubkey, ecdsa_sign, ecdsa_verify};

/// Scenario E: a fixed secret, a SHA-256 digest of a literal message, and a
/// fixed nonzero nonce must sign and verify, and verification must fail once
/// the digest is perturbed.
#[test]
fn ecdsa_self_check_scenario_e() {
    let mut d = [0u8; 32];
    for (i, byte) in d.iter_mut().enumerate() {
        *byte = (i + 1) as u8;
    }

    let mut k = [0xAAu8; 32];
    // Keep k in a range that the x-only reduction mod n leaves intact.
    k[31] = 0x0a;

    let digest: [u8; 32] = Sha256::digest(b"test").into();

    let public = ecdsa_pubkey(&d);
    let (r, s) = ecdsa_sign(&d, &digest, &k).expect("fixed seed must not trigger rejection");

    assert!(ecdsa_verify(&public, &digest, &r, &s));

    let mut flipped = digest;
    flipped[0] ^= 1;
    assert!(!ecdsa_verify(&public, &flipped, &r, &s));
}

#[test]
fn ecdsa_rejects_flipped_signature_components() {
    let mut d = [0u8; 32];
    d[0] = 9;
    let mut k = [0u8; 32];
    k[0] = 3;
    k[15] = 77;

    let digest: [u8; 32] = Sha256::digest(b"another message").into();

    let public = ecdsa_pubkey(&d);
    let (r, s) = ecdsa_sign(&d, &digest, &k).expect("fixed seed must not trigger rejection");

    let mut bad_r_bytes = r.to_bytes();
    bad_r_bytes[0] ^= 1;
    let bad_r = triform25519::scalar::Scalar::from_bytes_raw(bad_r_bytes);
    assert!(!ecdsa_verify(&public, &digest, &bad_r, &s));

    let mut bad_s_bytes = s.to_bytes();
    bad_s_bytes[0] ^= 1;
    let bad_s = triform25519::scalar::Scalar::from_bytes_raw(bad_s_bytes);
    assert!(!ecdsa_verify(&public, &digest, &r, &bad_s));
}

#[test]
fn different_secrets_give_different_public_keys() {
    let mut d1 = [0u8; 32];
    d1[0] = 1;
    let mut d2 = [0u8; 32];
    d2[0] = 2;

    let p1 = ecdsa_pubkey(&d1);
    let p2 = ecdsa_pubkey(&d2);

    assert!(!p1.wx.eq(&p2.wx) || !p1.wy.eq(&p2.wy));
}
