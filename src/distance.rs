use crate::types::Point;

/// Straight-line distance between two points.
///
/// NaN in either input yields NaN; callers treat that as "no distance".
pub fn euclidean(a: Point, b: Point) -> f64 {
    ((a.x - b.x).powi(2) + (a.z - b.z).powi(2)).sqrt()
}
