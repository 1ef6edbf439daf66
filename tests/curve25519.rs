use triform25519::consts::{CURVE25519_BASE_X_BYTES, CURVE25519_BASE_Y_BYTES};
use triform25519::curve25519::{curve25519_scalar_mult, curve25519_scalar_mult_xy};
use triform25519::edwards;
use triform25519::field::FieldElement;
use triform25519::morph::{self, CurvePoint};
use triform25519::scalar::Scalar;

fn clamped_scalar(low_byte: u8) -> [u8; 32] {
    let mut e = [0u8; 32];
    e[0] = low_byte;
    e[31] = 0x40; // bit 254, per the ladder's fixed convention
    e
}

/// Scenario F: multiplying by the scalar with only bit 254 set is the
/// smallest representable input under this ladder's convention; the result
/// must be deterministic.
#[test]
fn scenario_f_ladder_edge_case_is_deterministic() {
    let q = CURVE25519_BASE_X_BYTES;
    let e = clamped_scalar(0);

    let a = curve25519_scalar_mult(&q, &e);
    let b = curve25519_scalar_mult(&q, &e);

    assert_eq!(a, b);
}

/// Property 5: Okeya-Sakurai recovery on Curve25519 must agree with mapping
/// the base point to Ed25519, scalar-multiplying there, and mapping back
/// through Weierstrass/Montgomery.
#[test]
fn okeya_sakurai_matches_edwards_cross_check() {
    let xp = CURVE25519_BASE_X_BYTES;
    let yp = CURVE25519_BASE_Y_BYTES;
    let e = clamped_scalar(11);

    let (xr, yr) = curve25519_scalar_mult_xy((&xp, &yp), &e);

    let mx = FieldElement::from_bytes(&xp);
    let my = FieldElement::from_bytes(&yp);

    let (ex0, ey0) = morph::m2e(mx, my);

    let base = edwards::project(ex0, ey0);
    let scalar = Scalar::from_bytes_mod_n(&e);
    let product = edwards::scalar_mult(&base, &scalar);
    let (ex1, ey1) = edwards::unproject(&product);

    let (wx1, wy1) = morph::e2w(ex1, ey1);
    let (mx1, my1) = match morph::w2m(wx1, wy1) {
        CurvePoint::Affine(mx, my) => (mx, my),
        CurvePoint::Infinity => panic!("result is not the identity"),
    };

    assert!(mx1.normalize().eq(&FieldElement::from_bytes(&xr).normalize()));
    assert!(my1.normalize().eq(&FieldElement::from_bytes(&yr).normalize()));
}
