//! # haver-core
//!
//! Haversine JSON round-trip harness: generate synthetic coordinate pairs,
//! serialize them to JSON, re-read the bytes through a hand-written scanner
//! and recursive-descent parser, and recover the mean haversine distance
//! from the parsed tree.
//!
//! The pipeline is `bytes → scan → tokens → parse → value tree → reduce →
//! f64`. Every stage is single-pass, single-threaded, and fail-fast:
//! malformed input aborts with a typed error rather than yielding a partial
//! result.
//!
//! ## Quick start
//!
//! ```rust
//! use haver_core::{generator, parser, reduce};
//!
//! let mut rng = generator::rng_from_seed(Some(7));
//! let (doc, expected) = generator::generate_document(16, &mut rng);
//!
//! let root = parser::parse_bytes(doc.as_bytes()).unwrap();
//! let sum = reduce::points_sum(&root).unwrap();
//!
//! assert!((sum - expected).abs() <= expected.abs() * 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`scanner`] — byte buffer → flat token sequence
//! - [`parser`] — token sequence → [`value::Value`] tree
//! - [`value`] — tagged-union value model
//! - [`reduce`] — tree → haversine sum / mean
//! - [`haversine`] — great-circle distance formula
//! - [`generator`] — synthetic point data + JSON serialization
//! - [`profile`] — per-stage wall-clock timing
//! - [`error`] — scan/parse/shape error types

pub mod error;
pub mod generator;
pub mod haversine;
pub mod parser;
pub mod profile;
pub mod reduce;
pub mod scanner;
pub mod value;

pub use error::{HaverError, ParseError, ScanError, ShapeError};
pub use haversine::{haversine, EARTH_RADIUS};
pub use parser::{parse, parse_bytes};
pub use profile::Profiler;
pub use reduce::{points_mean, points_sum};
pub use scanner::{scan, Scanner, Token};
pub use value::Value;
