//! Great-circle distance on a sphere.

/// Radius used by both the generator and the reduction, in kilometers.
pub const EARTH_RADIUS: f64 = 6372.8;

fn square(x: f64) -> f64 {
    x * x
}

fn deg_to_rad(degrees: f64) -> f64 {
    0.01745329251994329577 * degrees
}

/// Haversine distance between `(x0, y0)` and `(x1, y1)` on a sphere of the
/// given radius. `x` is longitude and `y` latitude, both in degrees.
///
/// Pure and deterministic; the `2·asin(√a)` form is kept so the reduction
/// reproduces the generator's accumulation exactly.
pub fn haversine(x0: f64, y0: f64, x1: f64, y1: f64, radius: f64) -> f64 {
    let d_lat = deg_to_rad(y1 - y0);
    let d_lon = deg_to_rad(x1 - x0);
    let lat1 = deg_to_rad(y0);
    let lat2 = deg_to_rad(y1);

    let a = square((d_lat / 2.0).sin()) + lat1.cos() * lat2.cos() * square((d_lon / 2.0).sin());
    let c = 2.0 * a.sqrt().asin();

    radius * c
}
