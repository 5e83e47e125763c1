//! The bounding-box query engine.
//!
//! Two pieces: a pure containment predicate over points and
//! rectangles, and a linear scan of the location store that collects
//! the identifiers of all contained points. The scan is intentionally
//! index-free; the dataset is a few thousand entries and a full pass
//! completes without suspension.

use chrono::Utc;

use crate::store::LocationStore;
use crate::trace::TraceContext;
use crate::types::point::{Point, Rectangle};

/// Orders a pair of axis bounds without laundering NaN.
///
/// `f64::min`/`f64::max` return the non-NaN operand, which would turn
/// a rectangle with a NaN bound into a finite one. Picking by `<=`
/// instead keeps the NaN in the result pair, so every later comparison
/// against it is false.
fn axis_bounds(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Tests whether a point lies within a rectangle's normalized bounds.
///
/// The rectangle's corners may arrive in any order; bounds are
/// normalized per axis before comparing. The boundary is inclusive on
/// all four edges, so a degenerate rectangle (`lo == hi`) matches
/// exactly the points equal to that coordinate pair.
///
/// Total over all floating-point inputs. Comparisons involving NaN are
/// false, which excludes NaN-coordinate points from every match and
/// excludes every point when the rectangle itself has a NaN bound. No
/// wraparound handling at the ±180° longitude seam: rectangles are
/// planar, not spherical.
pub fn contains(point: &Point, rect: &Rectangle) -> bool {
    let (left, right) = axis_bounds(rect.lo.longitude, rect.hi.longitude);
    let (bottom, top) = axis_bounds(rect.lo.latitude, rect.hi.latitude);

    point.longitude >= left
        && point.longitude <= right
        && point.latitude >= bottom
        && point.latitude <= top
}

/// Returns the identifiers of all hotels contained in the rectangle.
///
/// Full linear scan of the store; output order is the store's
/// iteration order (dataset source order), not sorted by identifier or
/// distance. No result-size limit. Cannot fail: a rectangle matching
/// nothing yields an empty vector, which is a normal outcome.
///
/// The trace context is reported entered before the scan and exited
/// with a timestamp after it, regardless of outcome. Reporting is
/// best-effort and never affects the result.
pub fn bounded_box(store: &LocationStore, rect: &Rectangle, trace: &TraceContext) -> Vec<i32> {
    trace.entered();

    let hotel_ids = store
        .records()
        .iter()
        .filter(|record| contains(&record.point, rect))
        .map(|record| record.hotel_id)
        .collect();

    trace.exited(Utc::now());
    hotel_ids
}
