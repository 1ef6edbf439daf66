//! Elliptic-curve primitives for the Curve25519 / Ed25519 / Wei25519
//! family, and an ECDSA signature scheme built on the Weierstrass model.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. All
//! operations that may see secret data are constant-time: no
//! secret-dependent branches or secret-dependent memory access.
//!
//! # Module overview
//!
//! - `field`
//!   Arithmetic modulo `p = 2^255 - 19`, the field underlying all three
//!   curve models. `FieldElement` is the crate's lowest-level type; every
//!   other module is built from it.
//!
//! - `scalar`
//!   Arithmetic modulo `n`, the Ed25519 group order, used both as the
//!   Ed25519 scalar field and, per this crate's ECDSA construction, as
//!   the Wei25519 signature scalar modulus.
//!
//! - `curve25519`
//!   Curve25519 (Montgomery form). X-only scalar multiplication via a
//!   projective Montgomery ladder, plus an affine variant that recovers
//!   the y-coordinate via Okeya-Sakurai recovery.
//!
//! - `edwards`
//!   Ed25519 (twisted Edwards form). Extended-coordinate point
//!   arithmetic and constant-time scalar multiplication.
//!
//! - `wei25519`
//!   Wei25519 (short Weierstrass form). An affine point type and an
//!   on-curve membership check, used by ECDSA to validate public keys.
//!
//! - `morph`
//!   The birational morphisms connecting the three curve models:
//!   Curve25519 <-> Ed25519 <-> Wei25519.
//!
//! - `ecdsa`
//!   ECDSA signing and verification over Wei25519, using the Ed25519
//!   group order as the scalar modulus.
//!
//! # Design goals
//!
//! - No heap allocations in core primitives
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//! - Constant-time behavior wherever secret data may be involved
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries, but to serve as a small, controlled foundation
//! for applications that already need to speak all three curve models.

pub mod consts;

pub mod curve25519;
pub mod ecdsa;
pub mod edwards;
pub mod field;
pub mod morph;
pub mod scalar;
pub mod wei25519;
