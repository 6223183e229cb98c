//! Synthetic point generation and JSON serialization.
//!
//! Produces the document shape the scanner consumes,
//! `{"points": [{"x0": …, "y0": …, "x1": …, "y1": …}, …]}`, comma separated
//! with no trailing comma and plain decimal formatting (`f64` `Display`
//! never emits exponents). The true haversine sum is accumulated on the way
//! out so a round-trip can be validated against it.

use std::fs;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::haversine::{haversine, EARTH_RADIUS};

/// A generated data file plus the sum the generator computed on the way out.
#[derive(Debug)]
pub struct GeneratedSet {
    pub path: PathBuf,
    pub count: u32,
    pub expected_sum: f64,
}

/// Build the RNG for a run; a fixed seed gives a reproducible document.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Serialize `count` uniform random point pairs, returning the document and
/// the independently-accumulated haversine sum.
///
/// Longitudes are drawn from `[-180, 180]` and latitudes from `[-90, 90]`.
pub fn generate_document(count: u32, rng: &mut StdRng) -> (String, f64) {
    let mut doc = String::from("{\"points\": [");
    let mut sum = 0.0;

    for i in 0..count {
        let x0: f64 = rng.random_range(-180.0..=180.0);
        let x1: f64 = rng.random_range(-180.0..=180.0);
        let y0: f64 = rng.random_range(-90.0..=90.0);
        let y1: f64 = rng.random_range(-90.0..=90.0);
        sum += haversine(x0, y0, x1, y1, EARTH_RADIUS);

        if i > 0 {
            doc.push(',');
        }
        doc.push_str(&format!(
            "{{\"x0\": {x0}, \"y0\": {y0}, \"x1\": {x1}, \"y1\": {y1}}}"
        ));
    }
    doc.push_str("]}");

    (doc, sum)
}

/// Generate a data file named `haversine{count}.json` under `dir`, creating
/// the directory if needed.
pub fn generate_file(count: u32, seed: Option<u64>, dir: &Path) -> Result<GeneratedSet> {
    let mut rng = rng_from_seed(seed);
    let (doc, expected_sum) = generate_document(count, &mut rng);

    fs::create_dir_all(dir)?;
    let path = dir.join(format!("haversine{count}.json"));
    fs::write(&path, &doc)?;

    Ok(GeneratedSet {
        path,
        count,
        expected_sum,
    })
}
