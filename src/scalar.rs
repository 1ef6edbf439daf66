//! Arithmetic modulo `n`, the Ed25519 group order.
//!
//! ECDSA on Wei25519 (L5) uses the Ed25519 group order `n` as its scalar
//! modulus, so this module doubles as the scalar field for both the
//! Ed25519 point-multiplication layer and the ECDSA signature equations.
//!
//! ```text
//! n = 2^252 + 27742317777372353535851937790883648493
//! ```
//!
//! Scalars are stored as 32 little-endian bytes. `reduce` and
//! `from_mul_sum` are the two primitives with a genuine reference-code
//! counterpart (the Ed25519 reference reduction algorithm, radix-2^21,
//! 24 signed limbs); `add`/`sub`/`mul`/`neg`/`invert`/`normalize` are thin
//! compositions built on top of `from_mul_sum`, since `a*b+c mod n` already
//! is the general case all of those specialize.

use crate::field::{load_3, load_4};

/// A residue class modulo `n`, stored as 32 little-endian bytes.
///
/// No invariant is enforced by the type itself: a `Scalar` may carry a
/// value outside `[0, n)` until `normalize` (or any operation that routes
/// through `reduce`) is applied.
#[derive(Clone, Copy)]
pub struct Scalar(pub(crate) [u8; 32]);

impl Scalar {
    /// The additive identity.
    pub const ZERO: Self = Scalar([0u8; 32]);

    /// The multiplicative identity.
    pub const ONE: Self = Scalar([
        1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0,
    ]);

    /// `n - 1`, used to build negation as `from_mul_sum(a, N_MINUS_ONE, 0)`.
    fn n_minus_one() -> Self {
        Scalar(crate::consts::GROUP_ORDER_MINUS_ONE_BYTES)
    }

    /// `n - 2`, the public exponent used by Fermat inversion.
    fn n_minus_two() -> Self {
        Scalar(crate::consts::GROUP_ORDER_MINUS_TWO_BYTES)
    }

    /// Builds a scalar from a raw 32-byte little-endian buffer without
    /// reducing. Callers that need a canonical value should follow up with
    /// `normalize` or use `from_bytes_mod_n`.
    pub fn from_bytes_raw(bytes: [u8; 32]) -> Self {
        Scalar(bytes)
    }

    /// The canonical 32-byte little-endian encoding. Does not normalize;
    /// call `normalize` first if a canonical encoding is required.
    pub fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Reduces a 32-byte little-endian buffer modulo `n`, producing a
    /// canonical scalar in `[0, n)`. This is the `fprime_from_bytes`
    /// operation of the spec: it zero-extends to 64 bytes and routes
    /// through the same reduction used for wide hash outputs.
    pub fn from_bytes_mod_n(bytes: &[u8; 32]) -> Self {
        let mut wide = [0u8; 64];
        wide[..32].copy_from_slice(bytes);
        Self::reduce(wide)
    }

    /// Reduces this scalar into canonical `[0, n)` form.
    pub fn normalize(self) -> Self {
        Self::from_bytes_mod_n(&self.0)
    }

    /// `self + rhs mod n`.
    pub fn add(self, rhs: Self) -> Self {
        Self::from_mul_sum(self, Self::ONE, rhs)
    }

    /// `-self mod n`.
    pub fn neg(self) -> Self {
        Self::from_mul_sum(self, Self::n_minus_one(), Self::ZERO)
    }

    /// `self - rhs mod n`.
    pub fn sub(self, rhs: Self) -> Self {
        self.add(rhs.neg())
    }

    /// `self * rhs mod n`.
    pub fn mul(self, rhs: Self) -> Self {
        Self::from_mul_sum(self, rhs, Self::ZERO)
    }

    /// Multiplicative inverse via Fermat's little theorem (`self^(n-2)`).
    /// The exponent is a public constant, so branching on its bits is not a
    /// constant-time concern; the secret is `self`, which is only ever
    /// consumed by the (data-independent) squaring/multiplying primitive.
    pub fn invert(self) -> Self {
        let exponent = Self::n_minus_two().0;
        let mut result = Self::ONE;

        for i in (0..256).rev() {
            result = result.mul(result);

            let bit = (exponent[i / 8] >> (i % 8)) & 1;
            if bit == 1 {
                result = result.mul(self);
            }
        }

        result
    }

    /// Constant-time equality on normalized encodings.
    pub fn eq(&self, other: &Self) -> bool {
        let a = self.normalize().0;
        let b = other.normalize().0;
        a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
    }

    /// Reduces a 512-bit (64-byte) little-endian integer modulo the
    /// Ed25519 group order `n`.
    ///
    /// Transcribed from the Ed25519 reference reduction algorithm: the
    /// wide input is decomposed into 24 signed 21-bit limbs, the top limbs
    /// are folded back using the identity `2^252 = 2^252 - n` (mod n)'s
    /// reduction coefficients, and the result is carried back down to a
    /// canonical 32-byte encoding.
    pub(crate) fn reduce(wide: [u8; 64]) -> Self {
        let mask = 0x1f_ffffi64;

        let mut s = [
            (load_3(&wide[0..]) as i64) & mask,
            ((load_4(&wide[2..]) >> 5) as i64) & mask,
            ((load_3(&wide[5..]) >> 2) as i64) & mask,
            ((load_4(&wide[7..]) >> 7) as i64) & mask,
            ((load_4(&wide[10..]) >> 4) as i64) & mask,
            ((load_3(&wide[13..]) >> 1) as i64) & mask,
            ((load_4(&wide[15..]) >> 6) as i64) & mask,
            ((load_3(&wide[18..]) >> 3) as i64) & mask,
            (load_3(&wide[21..]) as i64) & mask,
            ((load_4(&wide[23..]) >> 5) as i64) & mask,
            ((load_3(&wide[26..]) >> 2) as i64) & mask,
            ((load_4(&wide[28..]) >> 7) as i64) & mask,
            ((load_4(&wide[31..]) >> 4) as i64) & mask,
            ((load_3(&wide[34..]) >> 1) as i64) & mask,
            ((load_4(&wide[36..]) >> 6) as i64) & mask,
            ((load_3(&wide[39..]) >> 3) as i64) & mask,
            (load_3(&wide[42..]) as i64) & mask,
            ((load_4(&wide[44..]) >> 5) as i64) & mask,
            ((load_3(&wide[47..]) >> 2) as i64) & mask,
            ((load_4(&wide[49..]) >> 7) as i64) & mask,
            ((load_4(&wide[52..]) >> 4) as i64) & mask,
            ((load_3(&wide[55..]) >> 1) as i64) & mask,
            ((load_4(&wide[57..]) >> 6) as i64) & mask,
            (load_4(&wide[60..]) >> 3) as i64,
        ];

        let coeffs = [666643, 470296, 654183, -997805, 136657, -683901];

        for index in (18..=23).rev() {
            for j in 0..6 {
                s[index - 12 + j] += s[index] * coeffs[j];
            }
        }

        for &index in &[6, 8, 10, 12, 14, 16] {
            let carry = (s[index] + (1 << 20)) >> 21;
            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        for &index in &[7, 9, 11, 13, 15] {
            let carry = (s[index] + (1 << 20)) >> 21;
            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        for index in (12..=17).rev() {
            for j in 0..6 {
                s[index - 12 + j] += s[index] * coeffs[j];
            }
        }
        s[12] = 0;

        for &index in &[0, 2, 4, 6, 8, 10] {
            let carry = (s[index] + (1 << 20)) >> 21;
            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        for &index in &[1, 3, 5, 7, 9, 11] {
            let carry = (s[index] + (1 << 20)) >> 21;
            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        let s12 = s[12];
        for (sx, coeff) in s.iter_mut().take(6).zip(coeffs.iter()) {
            *sx = s12 * coeff;
        }
        s[12] = 0;

        for index in 0..11 {
            let carry = s[index] >> 21;
            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        let carry = s[11] >> 21;
        s[12] += carry;
        s[11] -= carry << 21;

        let s12 = s[12];
        for (sx, coeff) in s.iter_mut().take(6).zip(coeffs.iter()) {
            *sx += s12 * coeff;
        }

        for index in 0..11 {
            let carry = s[index] >> 21;
            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        Scalar(Self::pack(&s))
    }

    /// Computes `a * b + c (mod n)`.
    ///
    /// The general case all of `add`/`sub`/`mul`/`neg`/`invert` specialize
    /// to. Transcribed from the Ed25519 reference implementation's scalar
    /// multiply-accumulate: a radix-2^21 schoolbook convolution of `a` and
    /// `b` with `c` folded into the low limbs, followed by the same
    /// reduction tail as `reduce`.
    pub(crate) fn from_mul_sum(a: Scalar, b: Scalar, c: Scalar) -> Self {
        let mask = 0x1f_ffffi64;

        let load = |data: &[u8; 32]| -> [i64; 12] {
            [
                (load_3(&data[0..]) as i64) & mask,
                ((load_4(&data[2..]) >> 5) as i64) & mask,
                ((load_3(&data[5..]) >> 2) as i64) & mask,
                ((load_4(&data[7..]) >> 7) as i64) & mask,
                ((load_4(&data[10..]) >> 4) as i64) & mask,
                ((load_3(&data[13..]) >> 1) as i64) & mask,
                ((load_4(&data[15..]) >> 6) as i64) & mask,
                ((load_3(&data[18..]) >> 3) as i64) & mask,
                (load_3(&data[21..]) as i64) & mask,
                ((load_4(&data[23..]) >> 5) as i64) & mask,
                ((load_3(&data[26..]) >> 2) as i64) & mask,
                (load_4(&data[28..]) >> 7) as i64,
            ]
        };

        let a_limbs = load(&a.0);
        let b_limbs = load(&b.0);
        let c_limbs = load(&c.0);

        let mut s = [0i64; 24];

        for index in 0..12 {
            s[index] = c_limbs[index];
            for j in 0..=index.min(11) {
                if index - j < 12 {
                    s[index] += a_limbs[j] * b_limbs[index - j];
                }
            }
        }

        for index in 12..23 {
            for j in (index - 11)..12 {
                if index - j < 12 {
                    s[index] += a_limbs[j] * b_limbs[index - j];
                }
            }
        }
        s[23] = 0;

        for &index in &[0, 2, 4, 6, 8, 10, 12, 14, 16, 18, 20, 22] {
            let carry = (s[index] + (1 << 20)) >> 21;
            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        for &index in &[1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 21] {
            let carry = (s[index] + (1 << 20)) >> 21;
            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        let coeffs = [666643i64, 470296, 654183, -997805, 136657, -683901];

        for index in (18..=23).rev() {
            for j in 0..6 {
                s[index - 12 + j] += s[index] * coeffs[j];
            }
        }

        for &index in &[6, 8, 10, 12, 14, 16] {
            let carry = (s[index] + (1 << 20)) >> 21;
            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        for &index in &[7, 9, 11, 13, 15] {
            let carry = (s[index] + (1 << 20)) >> 21;
            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        for index in (12..=17).rev() {
            for j in 0..6 {
                s[index - 12 + j] += s[index] * coeffs[j];
            }
        }
        s[12] = 0;

        for &index in &[0, 2, 4, 6, 8, 10] {
            let carry = (s[index] + (1 << 20)) >> 21;
            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        for &index in &[1, 3, 5, 7, 9, 11] {
            let carry = (s[index] + (1 << 20)) >> 21;
            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        let s12 = s[12];
        for (sx, coeff) in s.iter_mut().take(6).zip(coeffs.iter()) {
            *sx += s12 * coeff;
        }
        s[12] = 0;

        for index in 0..11 {
            let carry = s[index] >> 21;
            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        let carry = s[11] >> 21;
        s[12] += carry;
        s[11] -= carry << 21;

        let s12 = s[12];
        for (sx, coeff) in s.iter_mut().take(6).zip(coeffs.iter()) {
            *sx += s12 * coeff;
        }

        for index in 0..11 {
            let carry = s[index] >> 21;
            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        Scalar(Self::pack(&s))
    }

    /// Packs the low 12 reduced 21-bit limbs of a reduction accumulator
    /// into the canonical 32-byte little-endian scalar encoding.
    fn pack(s: &[i64]) -> [u8; 32] {
        [
            s[0] as u8,
            (s[0] >> 8) as u8,
            ((s[0] >> 16) | (s[1] << 5)) as u8,
            (s[1] >> 3) as u8,
            (s[1] >> 11) as u8,
            ((s[1] >> 19) | (s[2] << 2)) as u8,
            (s[2] >> 6) as u8,
            ((s[2] >> 14) | (s[3] << 7)) as u8,
            (s[3] >> 1) as u8,
            (s[3] >> 9) as u8,
            ((s[3] >> 17) | (s[4] << 4)) as u8,
            (s[4] >> 4) as u8,
            (s[4] >> 12) as u8,
            ((s[4] >> 20) | (s[5] << 1)) as u8,
            (s[5] >> 7) as u8,
            ((s[5] >> 15) | (s[6] << 6)) as u8,
            (s[6] >> 2) as u8,
            (s[6] >> 10) as u8,
            ((s[6] >> 18) | (s[7] << 3)) as u8,
            (s[7] >> 5) as u8,
            (s[7] >> 13) as u8,
            s[8] as u8,
            (s[8] >> 8) as u8,
            ((s[8] >> 16) | (s[9] << 5)) as u8,
            (s[9] >> 3) as u8,
            (s[9] >> 11) as u8,
            ((s[9] >> 19) | (s[10] << 2)) as u8,
            (s[10] >> 6) as u8,
            ((s[10] >> 14) | (s[11] << 7)) as u8,
            (s[11] >> 1) as u8,
            (s[11] >> 9) as u8,
            (s[11] >> 17) as u8,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub_round_trip() {
        let a = Scalar::from_bytes_mod_n(&crate::consts::ED_BASE_X_BYTES);
        let b = Scalar::from_bytes_mod_n(&crate::consts::ED_BASE_Y_BYTES);

        let sum = a.add(b);
        let back = sum.sub(b);

        assert!(back.eq(&a));
    }

    #[test]
    fn invert_is_multiplicative_inverse() {
        let a = Scalar::from_bytes_mod_n(&crate::consts::ED_BASE_X_BYTES);
        let inv = a.invert();

        assert!(a.mul(inv).eq(&Scalar::ONE));
    }

    #[test]
    fn normalize_is_idempotent() {
        let a = Scalar::from_bytes_raw([0xff; 32]);
        let once = a.normalize();
        let twice = once.normalize();

        assert!(once.eq(&twice));
    }

    #[test]
    fn zero_has_no_inverse_identity_but_mul_by_zero_is_zero() {
        let a = Scalar::from_bytes_mod_n(&crate::consts::ED_BASE_X_BYTES);
        assert!(a.mul(Scalar::ZERO).eq(&Scalar::ZERO));
    }
}
