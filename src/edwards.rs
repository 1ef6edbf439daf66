//! Ed25519 (twisted Edwards form): `-x^2 + y^2 = 1 + d*x^2*y^2` over `Fp`.
//!
//! Coordinate types and the addition/doubling formulas are kept verbatim
//! from `examples/enzoblain-Cryptal/src/signatures/ed25519/group.rs`
//! (`GeP1`/`GeP2`/`GeP3`/`GeCached`, `GeP1::from_sum`, `GeP2::double`,
//! `GeCached::from_p3`), adapted to this crate's `FieldElement`.
//!
//! **Deliberate simplification vs. the teacher**: the teacher's
//! `from_scalar_mul`/`double_scalar_mul` depend on a precomputed
//! fixed-base table (`super::table::{BASE, BI}`) that `group.rs`
//! references but that does not exist anywhere in the retrieved teacher
//! tree. Rather than fabricate ~30KB of table constants with no grounding
//! source, `scalar_mult` here is a single generic constant-time
//! double-and-add over the extended-coordinate formulas, used uniformly
//! for the base point and arbitrary points alike. This is explicitly
//! licensed by the spec: "Group-law details and the choice between
//! extended-4-coordinate and projective-3-coordinate forms are
//! implementation-free within the constraint that all exported operations
//! behave as the Ed25519 group operation and run in time independent of
//! scalar bits."

use crate::field::FieldElement;
use crate::scalar::Scalar;

/// Intermediate extended-coordinate result of an addition or doubling,
/// `(X : Y : Z : T)`, not kept long-term.
struct GeP1 {
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
    t: FieldElement,
}

impl GeP1 {
    /// `a + b`, `a` in extended coordinates, `b` in cached form.
    fn from_sum(a: &GeP3, b: &GeCached) -> Self {
        let mut x = a.y + a.x;
        let mut y = a.y - a.x;
        let mut z = x * b.yplusx;
        let mut t = b.t2d * a.t;

        y = y * b.yminusx;
        x = a.z * b.z;

        let sumx = x + x;

        x = z - y;
        y = z + y;
        z = sumx + t;
        t = sumx - t;

        Self { x, y, z, t }
    }
}

/// A point on the Edwards curve in projective coordinates `(X : Y : Z)`.
/// Used as an intermediate form during doubling.
struct GeP2 {
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
}

impl GeP2 {
    fn from_gep3(g: &GeP3) -> Self {
        GeP2 {
            x: g.x,
            y: g.y,
            z: g.z,
        }
    }

    /// `2 * self`, via the projective Edwards doubling formula.
    fn double(self) -> GeP1 {
        let mut x = self.x.square();
        let mut z = self.y.square();
        let mut t = self.z.double_square();
        let mut y = self.x + self.y;
        let ysquare = y.square();

        y = z + x;
        z = z - x;
        x = ysquare - y;
        t = t - z;

        GeP1 { x, y, z, t }
    }
}

/// A point on the Edwards25519 curve in extended coordinates, the
/// crate-internal working representation: `x = X/Z`, `y = Y/Z`,
/// `T = X*Y/Z`.
#[derive(Clone, Copy)]
pub struct GeP3 {
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
    t: FieldElement,
}

impl GeP3 {
    /// The neutral element `(0, 1)`.
    pub const ONE: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ONE,
        t: FieldElement::ZERO,
    };

    fn from_gep1(g: &GeP1) -> Self {
        Self {
            x: g.x * g.t,
            y: g.y * g.z,
            z: g.z * g.t,
            t: g.x * g.y,
        }
    }

    fn double(&self) -> GeP1 {
        GeP2::from_gep3(self).double()
    }

    fn conditional_select(a: &GeP3, b: &GeP3, condition: u32) -> GeP3 {
        GeP3 {
            x: FieldElement::select(a.x, b.x, condition),
            y: FieldElement::select(a.y, b.y, condition),
            z: FieldElement::select(a.z, b.z, condition),
            t: FieldElement::select(a.t, b.t, condition),
        }
    }
}

/// Cached representation of an Edwards point, precomputing `y+x`, `y-x`,
/// `z`, `2*d*t` for fast repeated addition.
struct GeCached {
    yplusx: FieldElement,
    yminusx: FieldElement,
    z: FieldElement,
    t2d: FieldElement,
}

impl GeCached {
    fn from_p3(g: &GeP3) -> GeCached {
        GeCached {
            yplusx: g.y + g.x,
            yminusx: g.y - g.x,
            z: g.z,
            t2d: g.t * FieldElement::d2(),
        }
    }
}

/// Lifts an affine point `(ex, ey)` into extended projective coordinates.
pub fn project(ex: FieldElement, ey: FieldElement) -> GeP3 {
    GeP3 {
        x: ex,
        y: ey,
        z: FieldElement::ONE,
        t: ex * ey,
    }
}

/// Recovers the affine `(ex, ey)` of a point, via one field inversion.
pub fn unproject(p: &GeP3) -> (FieldElement, FieldElement) {
    let recip = p.z.invert();
    ((p.x * recip).normalize(), (p.y * recip).normalize())
}

/// `a + b`.
pub fn add(a: &GeP3, b: &GeP3) -> GeP3 {
    GeP3::from_gep1(&GeP1::from_sum(a, &GeCached::from_p3(b)))
}

/// `2 * a`.
pub fn double(a: &GeP3) -> GeP3 {
    GeP3::from_gep1(&a.double())
}

/// Computes `e * p`, constant-time in `e`.
///
/// A textbook double-and-add over the 256 bits of `e`, from the most to
/// the least significant: every iteration unconditionally doubles the
/// accumulator and computes the would-be sum with `p`, then uses a
/// branch-free field-level select (not a data-dependent branch) to decide
/// whether to keep the doubled value or the sum. Running time depends
/// only on the bit width of `e`.
pub fn scalar_mult(p: &GeP3, e: &Scalar) -> GeP3 {
    let bytes = e.to_bytes();
    let mut acc = GeP3::ONE;

    for i in (0..256).rev() {
        acc = double(&acc);

        let bit = ((bytes[i / 8] >> (i % 8)) & 1) as u32;
        let sum = add(&acc, p);
        acc = GeP3::conditional_select(&acc, &sum, bit);
    }

    acc
}

/// The standard Ed25519 base point.
pub fn base_point() -> GeP3 {
    project(
        FieldElement::from_bytes(&crate::consts::ED_BASE_X_BYTES),
        FieldElement::from_bytes(&crate::consts::ED_BASE_Y_BYTES),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_unproject_round_trips() {
        let ex = FieldElement::from_bytes(&crate::consts::ED_BASE_X_BYTES);
        let ey = FieldElement::from_bytes(&crate::consts::ED_BASE_Y_BYTES);

        let p = project(ex, ey);
        let (ex2, ey2) = unproject(&p);

        assert!(ex2.eq(&ex.normalize()));
        assert!(ey2.eq(&ey.normalize()));
    }

    #[test]
    fn scalar_mult_by_one_is_identity_on_base() {
        let base = base_point();
        let result = scalar_mult(&base, &Scalar::ONE);

        let (x1, y1) = unproject(&base);
        let (x2, y2) = unproject(&result);

        assert!(x1.eq(&x2));
        assert!(y1.eq(&y2));
    }

    #[test]
    fn scalar_mult_by_two_is_double() {
        let base = base_point();
        let two = Scalar::ONE.add(Scalar::ONE);

        let by_scalar = scalar_mult(&base, &two);
        let by_double = double(&base);

        let (x1, y1) = unproject(&by_scalar);
        let (x2, y2) = unproject(&by_double);

        assert!(x1.eq(&x2));
        assert!(y1.eq(&y2));
    }

    #[test]
    fn add_is_commutative_on_small_multiples() {
        let base = base_point();
        let two = double(&base);
        let three_a = add(&base, &two);
        let three_b = add(&two, &base);

        let (xa, ya) = unproject(&three_a);
        let (xb, yb) = unproject(&three_b);

        assert!(xa.eq(&xb));
        assert!(ya.eq(&yb));
    }
}
