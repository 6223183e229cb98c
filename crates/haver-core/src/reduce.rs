//! Reduction walker — folds the parsed `"points"` array into a haversine
//! sum.
//!
//! The walker validates shape rather than defaulting: a point entry that is
//! not an object, or that is missing one of the four coordinate keys, aborts
//! the reduction with a [`ShapeError`] instead of silently contributing a
//! zero coordinate. Keys outside the coordinate set are ignored.

use crate::error::ShapeError;
use crate::haversine::{haversine, EARTH_RADIUS};
use crate::value::Value;

/// Coordinate keys in slot order `[x0, y0, x1, y1]`.
const COORD_KEYS: [&str; 4] = ["x0", "y0", "x1", "y1"];

/// Sum of haversine distances over the document's `"points"` array.
///
/// Accumulation is plain left-to-right floating-point addition in array
/// order, no compensated summation. The walk borrows the tree immutably, so
/// repeated reductions over the same tree yield identical results.
///
/// # Errors
/// Returns a [`ShapeError`] if `"points"` is absent or not an array, if an
/// entry is not an object, or if a coordinate is missing or non-numeric.
pub fn points_sum(root: &Value) -> Result<f64, ShapeError> {
    walk(root).map(|(sum, _)| sum)
}

/// Mean haversine distance over the `"points"` array.
///
/// An empty array yields 0.0 rather than NaN. This is the value the
/// generator independently computed, so the two can be compared to validate
/// a round-trip.
pub fn points_mean(root: &Value) -> Result<f64, ShapeError> {
    let (sum, count) = walk(root)?;
    if count == 0 {
        Ok(0.0)
    } else {
        Ok(sum / count as f64)
    }
}

fn walk(root: &Value) -> Result<(f64, usize), ShapeError> {
    let points = root
        .get("points")
        .ok_or(ShapeError::MissingPoints)?
        .as_array()
        .ok_or(ShapeError::PointsNotArray)?;

    let mut sum = 0.0;
    for (index, entry) in points.iter().enumerate() {
        let point = entry
            .as_object()
            .ok_or(ShapeError::PointNotObject { index })?;

        let mut coords = [0.0f64; 4];
        for (slot, key) in COORD_KEYS.into_iter().enumerate() {
            let field = point
                .get(key)
                .ok_or(ShapeError::MissingCoordinate { index, key })?;
            coords[slot] = field
                .as_f64()
                .ok_or(ShapeError::CoordinateNotNumber { index, key })?;
        }

        sum += haversine(coords[0], coords[1], coords[2], coords[3], EARTH_RADIUS);
    }

    Ok((sum, points.len()))
}
