use triform25519::consts::{CURVE25519_BASE_X_BYTES, ED_BASE_X_BYTES, ED_BASE_Y_BYTES, WEI_BASE_X_BYTES, WEI_BASE_Y_BYTES};
use triform25519::field::FieldElement;
use triform25519::morph::{CurvePoint, e2m, e2w, ey2mx, m2e, m2w, w2e, w2m};

fn ed_base() -> (FieldElement, FieldElement) {
    (
        FieldElement::from_bytes(&ED_BASE_X_BYTES),
        FieldElement::from_bytes(&ED_BASE_Y_BYTES),
    )
}

/// Scenario B: ey -> mx applied to the Ed25519 base y yields Curve25519's
/// base x, the integer 9.
#[test]
fn scenario_b_ey2mx_fixed_point() {
    let (_, ey) = ed_base();
    let mx = ey2mx(ey);
    let expected = FieldElement::from_bytes(&CURVE25519_BASE_X_BYTES).normalize();

    assert!(mx.eq(&expected));
}

/// Round trip property 4: every composition of two adjacent maps that
/// returns to the source model is the identity on normalized coordinates.
#[test]
fn full_three_way_round_trip_on_base_point() {
    let (ex, ey) = ed_base();

    let (wx, wy) = e2w(ex, ey);
    let (mx, my) = match w2m(wx, wy) {
        CurvePoint::Affine(mx, my) => (mx, my),
        CurvePoint::Infinity => panic!("base point is not the identity"),
    };
    let (ex2, ey2) = m2e(mx, my);

    assert!(ex2.eq(&ex.normalize()));
    assert!(ey2.eq(&ey.normalize()));
}

/// Round trip property 4: `e2m` followed by `m2e` is the identity on
/// normalized Edwards affine coordinates.
#[test]
fn e2m_m2e_round_trips() {
    let (ex, ey) = ed_base();
    let (mx, my) = e2m(ex, ey);
    let (ex2, ey2) = m2e(mx, my);

    assert!(ex2.eq(&ex.normalize()));
    assert!(ey2.eq(&ey.normalize()));
}

#[test]
fn wei_base_round_trips_through_edwards() {
    let wx = FieldElement::from_bytes(&WEI_BASE_X_BYTES);
    let wy = FieldElement::from_bytes(&WEI_BASE_Y_BYTES);

    let (ex, ey) = w2e(wx, wy);
    let (wx2, wy2) = e2w(ex, ey);

    assert!(wx2.eq(&wx.normalize()));
    assert!(wy2.eq(&wy.normalize()));
}
