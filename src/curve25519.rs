//! Curve25519 (Montgomery form): `B*y^2 = x^3 + A*x^2 + x`, `A = 486662`,
//! `B = 1`, over `Fp`.
//!
//! The only operation this curve needs is x-only scalar multiplication via
//! a projective Montgomery ladder, plus the Okeya-Sakurai extension that
//! recovers the y-coordinate the x-only ladder throws away.
//!
//! Transcribed from `examples/original_source/src/c25519.c` (Daniel
//! Beer's public-domain `c25519`), translated from the C's out-parameter
//! `f25519_*` calls into the `FieldElement` operator style used throughout
//! this crate.

use crate::field::FieldElement;

const CURVE_A: u32 = 486662;

/// Doubles an x-only projective point: `(X1:Z1) -> (X3:Z3) = 2*(X1:Z1)`.
///
/// `dbl-1987-m`: `X3 = (X1^2 - Z1^2)^2`, `Z3 = 4*X1*Z1*(X1^2 + A*X1*Z1 + Z1^2)`.
fn xc_double(x1: FieldElement, z1: FieldElement) -> (FieldElement, FieldElement) {
    let x1sq = x1 * x1;
    let z1sq = z1 * z1;
    let x1z1 = x1 * z1;

    let a = x1sq - z1sq;
    let x3 = a * a;

    let a = x1z1.mul_by_small_constant(CURVE_A);
    let a = x1sq + a;
    let a = z1sq + a;

    let z3 = (x1z1 * a).mul_by_small_constant(4);

    (x3, z3)
}

/// Differential addition: given `(X1:Z1)`, `(X2:Z2)` and their difference
/// `(X3:Z3) = (X1:Z1) - (X2:Z2)`, computes `(X5:Z5) = (X1:Z1) + (X2:Z2)`.
///
/// `dbl-1987-m3` with common-subexpression elimination: `A = X2+Z2`,
/// `B = X2-Z2`, `C = X3+Z3`, `D = X3-Z3`, `DA = D*A`, `CB = C*B`,
/// `X5 = Z1*(DA+CB)^2`, `Z5 = X1*(DA-CB)^2`.
#[allow(clippy::too_many_arguments)]
fn xc_diffadd(
    x1: FieldElement,
    z1: FieldElement,
    x2: FieldElement,
    z2: FieldElement,
    x3: FieldElement,
    z3: FieldElement,
) -> (FieldElement, FieldElement) {
    let a = x2 + z2;
    let b = x3 - z3;
    let da = a * b;

    let b = x2 - z2;
    let a = x3 + z3;
    let cb = a * b;

    let sum = da + cb;
    let x5 = z1 * (sum * sum);

    let diff = da - cb;
    let z5 = x1 * (diff * diff);

    (x5, z5)
}

/// Result of the projective Montgomery ladder: the pair `(m*P, (m-1)*P)`
/// reached after processing every bit of the scalar, still in projective
/// `(X:Z)` form.
pub(crate) struct LadderOutput {
    pub(crate) xm: FieldElement,
    pub(crate) zm: FieldElement,
    pub(crate) xm1: FieldElement,
    pub(crate) zm1: FieldElement,
}

/// Runs the projective Montgomery ladder over `e`, starting from the
/// x-only base point `q`.
///
/// Bit 254 of `e` is assumed to be 1 (the caller performs any standard
/// clamping beforehand). The ladder is unconditional: every iteration runs
/// the same `xc_double` + `xc_diffadd` + constant-time select sequence
/// regardless of the scalar bit, so its running time depends only on the
/// bit width of `e`, never its value.
pub(crate) fn projective_ladder(q: FieldElement, e: &[u8; 32]) -> LadderOutput {
    let one = FieldElement::ONE;
    let zero = FieldElement::ZERO;

    let mut xm = q;
    let mut zm = one;
    let mut xm1 = one;
    let mut zm1 = zero;

    for i in (0..=253).rev() {
        let bit = ((e[i >> 3] >> (i & 7)) & 1) as u32;

        // From P_m and P_(m-1), compute P_(2m-1) and P_(2m).
        let (new_xm1, new_zm1) = xc_diffadd(q, one, xm, zm, xm1, zm1);
        let (new_xm, new_zm) = xc_double(xm, zm);

        // Compute P_(2m+1).
        let (xms, zms) = xc_diffadd(new_xm1, new_zm1, new_xm, new_zm, q, one);

        // bit = 1 --> (P_(2m+1), P_(2m)); bit = 0 --> (P_(2m), P_(2m-1)).
        xm1 = FieldElement::select(new_xm1, new_xm, bit);
        zm1 = FieldElement::select(new_zm1, new_zm, bit);
        xm = FieldElement::select(new_xm, xms, bit);
        zm = FieldElement::select(new_zm, zms, bit);
    }

    LadderOutput { xm, zm, xm1, zm1 }
}

/// Computes `e * q` on Curve25519, x-only.
///
/// `q` and the result are the 32-byte little-endian encodings of the base
/// and resulting x-coordinates, per the spec's external encoding.
pub fn curve25519_scalar_mult(q: &[u8; 32], e: &[u8; 32]) -> [u8; 32] {
    let q = FieldElement::from_bytes(q);
    let out = projective_ladder(q, e);

    (out.xm * out.zm.invert()).normalize().to_bytes()
}

/// Computes `e * P` on Curve25519, recovering the full affine `(x, y)` via
/// Okeya-Sakurai y-recovery instead of just the x-only ladder output.
///
/// `base_xy` is the affine `(x, y)` of `P` encoded as two 32-byte
/// little-endian field elements.
pub fn curve25519_scalar_mult_xy(base_xy: (&[u8; 32], &[u8; 32]), e: &[u8; 32]) -> ([u8; 32], [u8; 32]) {
    let xp = FieldElement::from_bytes(base_xy.0);
    let yp = FieldElement::from_bytes(base_xy.1);

    let out = projective_ladder(xp, e);
    let (xq, yq, zq) = crate::morph::montgomery_recovery(xp, yp, out.xm, out.zm, out.xm1, out.zm1);

    let recip = zq.invert();
    let xr = (xq * recip).normalize();
    let yr = (yq * recip).normalize();

    (xr.to_bytes(), yr.to_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scenario F: the scalar `2^254` (only bit 254 set) is the smallest
    /// value this ladder can represent given the bit-254 convention; the
    /// result must at least be deterministic and distinct from the base
    /// point itself (`m` only ever doubles, it is never 1 after the loop).
    #[test]
    fn ladder_is_deterministic() {
        let q = crate::consts::CURVE25519_BASE_X_BYTES;
        let mut e = [0u8; 32];
        e[31] = 0x40; // bit 254

        let a = curve25519_scalar_mult(&q, &e);
        let b = curve25519_scalar_mult(&q, &e);
        assert_eq!(a, b);
        assert_ne!(a, q);
    }

    #[test]
    fn different_scalars_give_different_points() {
        let q = crate::consts::CURVE25519_BASE_X_BYTES;

        let mut e1 = [0u8; 32];
        e1[31] = 0x40;
        e1[0] = 1;

        let mut e2 = [0u8; 32];
        e2[31] = 0x40;
        e2[0] = 3;

        assert_ne!(curve25519_scalar_mult(&q, &e1), curve25519_scalar_mult(&q, &e2));
    }

    #[test]
    fn smult_xy_x_coordinate_matches_smult() {
        let xp = crate::consts::CURVE25519_BASE_X_BYTES;
        let yp = crate::consts::CURVE25519_BASE_Y_BYTES;

        let mut e = [0u8; 32];
        e[31] = 0x40;
        e[0] = 5;

        let x_only = curve25519_scalar_mult(&xp, &e);
        let (x_xy, _y_xy) = curve25519_scalar_mult_xy((&xp, &yp), &e);

        assert_eq!(x_only, x_xy);
    }
}
