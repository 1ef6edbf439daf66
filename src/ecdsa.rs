//! ECDSA over Wei25519, using the Ed25519 group order as the scalar
//! modulus.
//!
//! Transcribed from `examples/original_source/src/ecdsa.c`, including the
//! non-standard `rshift(digest, 3)` preprocessing step in place of the
//! usual leftmost-`L_n`-bits truncation — this crate preserves it for
//! bit-compatibility with that source, as the spec's own design notes call
//! out.

use crate::edwards;
use crate::morph;
use crate::scalar::Scalar;
use crate::wei25519::WeiPoint;

/// Right-shifts a little-endian 32-byte integer by `bits` bits in place,
/// carrying between bytes from the most significant end down.
fn rshift(a: &mut [u8; 32], bits: u32) {
    for _ in 0..bits {
        let mut carry = 0u8;
        for byte in a.iter_mut().rev() {
            let next_carry = *byte & 1;
            *byte = (*byte >> 1) | (carry << 7);
            carry = next_carry;
        }
    }
}

/// Derives the Wei25519 public key `(wx, wy) = secret * G` for a secret
/// scalar, via Ed25519 scalar multiplication followed by the Edwards-to-
/// Weierstrass morphism.
pub fn ecdsa_pubkey(secret: &[u8; 32]) -> WeiPoint {
    let k = Scalar::from_bytes_mod_n(secret);
    let p = edwards::scalar_mult(&edwards::base_point(), &k);
    let (ex, ey) = edwards::unproject(&p);
    let (wx, wy) = morph::e2w(ex, ey);

    WeiPoint::new(wx, wy)
}

/// Signs `digest` with secret scalar `d` and per-signature nonce `k`.
///
/// Returns `None` if `k` is zero, or if either of the resulting
/// `r`/`s` components turns out to be zero — per the algorithm, the
/// caller should retry with a fresh `k` in that case.
pub fn ecdsa_sign(d: &[u8; 32], digest: &[u8; 32], k: &[u8; 32]) -> Option<(Scalar, Scalar)> {
    let k = Scalar::from_bytes_mod_n(k);
    if k.eq(&Scalar::ZERO) {
        return None;
    }

    let d = Scalar::from_bytes_mod_n(d);

    let p = edwards::scalar_mult(&edwards::base_point(), &k);
    let (ex, ey) = edwards::unproject(&p);
    let (wx, _wy) = morph::e2w(ex, ey);

    let r = Scalar::from_bytes_mod_n(&wx.to_bytes());
    if r.eq(&Scalar::ZERO) {
        return None;
    }

    let mut z_bytes = *digest;
    rshift(&mut z_bytes, 3);
    let z = Scalar::from_bytes_mod_n(&z_bytes);

    let rd = r.mul(d);
    let z = z.add(rd);

    let k_inv = k.invert();
    let s = k_inv.mul(z);
    if s.eq(&Scalar::ZERO) {
        return None;
    }

    Some((r, s))
}

/// Verifies an ECDSA signature `(r, s)` over `digest` against public key
/// `public`.
///
/// Rejects immediately if `public` is not on the Wei25519 curve (an
/// addition this crate makes over the transcribed source, which never
/// validates the caller-supplied public key).
pub fn ecdsa_verify(public: &WeiPoint, digest: &[u8; 32], r: &Scalar, s: &Scalar) -> bool {
    if !public.is_on_curve() {
        return false;
    }

    let mut z_bytes = *digest;
    rshift(&mut z_bytes, 3);
    let z = Scalar::from_bytes_mod_n(&z_bytes);

    let w = s.invert();
    let u1 = z.mul(w);
    let u2 = r.mul(w);

    let (ex, ey) = morph::w2e(public.wx, public.wy);
    let q = edwards::project(ex, ey);

    let p1 = edwards::scalar_mult(&edwards::base_point(), &u1);
    let p2 = edwards::scalar_mult(&q, &u2);
    let sum = edwards::add(&p1, &p2);

    let (ex, ey) = edwards::unproject(&sum);
    let (wx, _wy) = morph::e2w(ex, ey);

    let wx_mod_n = Scalar::from_bytes_mod_n(&wx.to_bytes());
    wx_mod_n.eq(r)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digest(seed: u8) -> [u8; 32] {
        let mut d = [0u8; 32];
        d[0] = seed;
        d[17] = 0x5a;
        d[31] = 0x11;
        d
    }

    #[test]
    fn sign_then_verify_round_trips() {
        let mut secret = [0u8; 32];
        secret[0] = 7;
        secret[5] = 42;

        let mut nonce = [0u8; 32];
        nonce[0] = 3;
        nonce[10] = 9;

        let e = digest(99);

        let public = ecdsa_pubkey(&secret);
        let (r, s) = ecdsa_sign(&secret, &e, &nonce).expect("nonzero nonce/r/s");

        assert!(ecdsa_verify(&public, &e, &r, &s));
    }

    #[test]
    fn verify_rejects_tampered_digest() {
        let mut secret = [0u8; 32];
        secret[0] = 11;

        let mut nonce = [0u8; 32];
        nonce[0] = 4;
        nonce[20] = 200;

        let e = digest(1);
        let mut tampered = e;
        tampered[0] ^= 1;

        let public = ecdsa_pubkey(&secret);
        let (r, s) = ecdsa_sign(&secret, &e, &nonce).expect("nonzero nonce/r/s");

        assert!(!ecdsa_verify(&public, &tampered, &r, &s));
    }

    #[test]
    fn verify_rejects_off_curve_public_key() {
        let mut secret = [0u8; 32];
        secret[0] = 11;
        let mut nonce = [0u8; 32];
        nonce[0] = 4;

        let e = digest(1);
        let mut public = ecdsa_pubkey(&secret);
        public.wy = public.wy + crate::field::FieldElement::ONE;

        let (r, s) = ecdsa_sign(&secret, &e, &nonce).expect("nonzero nonce/r/s");
        assert!(!ecdsa_verify(&public, &e, &r, &s));
    }

    #[test]
    fn sign_rejects_zero_nonce() {
        let mut secret = [0u8; 32];
        secret[0] = 1;
        let zero = [0u8; 32];
        let e = digest(1);

        assert!(ecdsa_sign(&secret, &e, &zero).is_none());
    }

    #[test]
    fn rshift_divides_little_endian_integer() {
        let mut a = [0u8; 32];
        a[0] = 0b1000_0000;
        a[1] = 0b0000_0001;
        rshift(&mut a, 1);
        assert_eq!(a[0], 0b1100_0000);
        assert_eq!(a[1], 0b0000_0000);
    }
}
