//! Core data structures for silica slab connectivity.
//!
//! - [`types`] – The two atomic species, silicon and oxygen.
//! - [`atom`] – Minimal atom representation with species and Cartesian coordinates.
//! - [`system`] – A loaded slab plus the Si–O bond record shared by detection and correction.
//! - [`ring`] – Validated cyclic rings and the per-edge bridging atoms resolved for them.
//!
//! Geometry ([`Slab`]) is kept apart from connectivity (a plain `Vec<Bond>`),
//! so the [`crate::connect`] pipeline can turn one into the other while the
//! slab stays read-only.
//!
//! [`Slab`]: system::Slab

pub mod atom;
pub mod ring;
pub mod system;
pub mod types;
