//! Struct definitions for [`Point`] and [`Rectangle`].
//!
//! These are the wire-level geometry types of the service: a point is
//! a planar latitude/longitude pair, and a rectangle is two opposite
//! corners of an axis-aligned bounding box.

use serde::{Deserialize, Serialize};

/// A geographic position as a planar latitude/longitude pair.
///
/// No range validation is performed; values outside the valid
/// geographic ranges (for example |latitude| > 90) are carried as-is.
/// Plain `f64` is used on purpose: the containment predicate relies on
/// IEEE comparison semantics, where every comparison against NaN is
/// false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

/// An axis-aligned bounding box described by two opposite corners.
///
/// `lo` and `hi` are NOT guaranteed to be the lower-left and
/// upper-right corners; either corner may carry the larger or smaller
/// coordinate on either axis. Consumers must normalize per axis before
/// comparing (see [`contains`](crate::engine::contains)).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub lo: Point,
    pub hi: Point,
}

impl Point {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Rectangle {
    pub fn new(lo: Point, hi: Point) -> Self {
        Self { lo, hi }
    }
}
