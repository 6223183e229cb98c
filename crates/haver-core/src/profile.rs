//! Wall-clock profiling for pipeline stages.
//!
//! The profiler is an explicit context value owned by the driver, not
//! ambient global state. Regions are timed through closures, so elapsed
//! time is recorded on every exit path, early returns included. Repeated
//! labels accumulate into a single anchor. Not required for correctness;
//! the CLI enables it behind a flag.

use std::time::{Duration, Instant};

/// One tracked region: accumulated time, hit count, and optional byte
/// volume for throughput reporting.
#[derive(Debug)]
struct Anchor {
    label: &'static str,
    elapsed: Duration,
    hits: u64,
    bytes: u64,
}

/// Append-only set of region timers plus the overall run clock.
#[derive(Debug)]
pub struct Profiler {
    started: Instant,
    anchors: Vec<Anchor>,
}

impl Profiler {
    pub fn new() -> Self {
        Profiler {
            started: Instant::now(),
            anchors: Vec::new(),
        }
    }

    /// Time a region, attributing the elapsed wall time to `label`.
    pub fn record<T>(&mut self, label: &'static str, f: impl FnOnce() -> T) -> T {
        self.record_bytes(label, 0, f)
    }

    /// Like [`Profiler::record`], additionally attributing `bytes` of
    /// processed input to the region so the report can show throughput.
    pub fn record_bytes<T>(&mut self, label: &'static str, bytes: u64, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        let elapsed = start.elapsed();

        let anchor = self.anchor_mut(label);
        anchor.elapsed += elapsed;
        anchor.hits += 1;
        anchor.bytes += bytes;
        out
    }

    fn anchor_mut(&mut self, label: &'static str) -> &mut Anchor {
        let idx = match self.anchors.iter().position(|a| a.label == label) {
            Some(idx) => idx,
            None => {
                self.anchors.push(Anchor {
                    label,
                    elapsed: Duration::ZERO,
                    hits: 0,
                    bytes: 0,
                });
                self.anchors.len() - 1
            }
        };
        &mut self.anchors[idx]
    }

    /// Render the report: total wall time since construction, then each
    /// region's time, share of total, hit count, and throughput where a
    /// byte volume was recorded.
    pub fn report(&self) -> String {
        let total = self.started.elapsed();
        let mut out = String::new();
        out.push_str(&format!(
            "Total time: {:.3}ms\n",
            total.as_secs_f64() * 1000.0
        ));

        for anchor in &self.anchors {
            let percent = if total.is_zero() {
                0.0
            } else {
                100.0 * anchor.elapsed.as_secs_f64() / total.as_secs_f64()
            };
            out.push_str(&format!(
                "  {} [{}]: {:.3}ms ({:.2}%)",
                anchor.label,
                anchor.hits,
                anchor.elapsed.as_secs_f64() * 1000.0,
                percent
            ));
            if anchor.bytes > 0 && !anchor.elapsed.is_zero() {
                let mb_per_s = anchor.bytes as f64 / 1_000_000.0 / anchor.elapsed.as_secs_f64();
                out.push_str(&format!(" {mb_per_s:.1}MB/s"));
            }
            out.push('\n');
        }
        out
    }
}

impl Default for Profiler {
    fn default() -> Self {
        Self::new()
    }
}
