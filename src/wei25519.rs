//! Wei25519 (short Weierstrass form): `wy^2 = wx^3 + a_w*wx + b_w` over `Fp`.
//!
//! This curve is only ever reached via the morphism layer from Curve25519
//! or Ed25519 (see `morph.rs`); this module adds the affine point type and
//! the on-curve check that `ecdsa.rs` needs before trusting caller-supplied
//! public key coordinates.

use crate::field::FieldElement;

fn wei_a() -> FieldElement {
    FieldElement::from_bytes(&crate::consts::WEI_A_BYTES)
}

fn wei_b() -> FieldElement {
    FieldElement::from_bytes(&crate::consts::WEI_B_BYTES)
}

/// An affine point on the Wei25519 curve.
#[derive(Clone, Copy)]
pub struct WeiPoint {
    pub wx: FieldElement,
    pub wy: FieldElement,
}

impl WeiPoint {
    pub fn new(wx: FieldElement, wy: FieldElement) -> Self {
        WeiPoint { wx, wy }
    }

    /// Checks `wy^2 == wx^3 + a_w*wx + b_w`, the membership test that
    /// `ecdsa_verify` runs against a caller-supplied public key before
    /// trusting it.
    pub fn is_on_curve(&self) -> bool {
        let lhs = (self.wy * self.wy).normalize();
        let rhs = (self.wx * self.wx * self.wx + wei_a() * self.wx + wei_b()).normalize();

        lhs.eq(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_point_is_on_curve() {
        let wx = FieldElement::from_bytes(&crate::consts::WEI_BASE_X_BYTES);
        let wy = FieldElement::from_bytes(&crate::consts::WEI_BASE_Y_BYTES);

        assert!(WeiPoint::new(wx, wy).is_on_curve());
    }

    #[test]
    fn arbitrary_point_off_curve_is_rejected() {
        let wx = FieldElement::from_bytes(&crate::consts::WEI_BASE_X_BYTES);
        let wy = FieldElement::from_bytes(&crate::consts::WEI_BASE_Y_BYTES) + FieldElement::ONE;

        assert!(!WeiPoint::new(wx, wy).is_on_curve());
    }
}
