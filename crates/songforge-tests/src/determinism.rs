//! Determinism checks.
//!
//! A generator is run several times and every output is compared byte for
//! byte against the first. On mismatch the first differing offset is
//! reported with a little surrounding context.

use std::fmt;

/// Outcome of a determinism check.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// Size of the reference output in bytes.
    pub output_size: usize,
    /// BLAKE3 hash of the reference output.
    pub hash: String,
    /// First difference found, if any.
    pub diff_info: Option<DiffInfo>,
}

/// The first mismatch between the reference output and a later run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffInfo {
    /// Byte offset of the mismatch.
    pub offset: usize,
    /// Reference byte, if the reference is that long.
    pub expected: Option<u8>,
    /// Byte from the differing run, if that run is that long.
    pub actual: Option<u8>,
    /// Which run (0-indexed) differed.
    pub run_index: usize,
    /// Up to 8 reference bytes before the mismatch.
    pub before: Vec<u8>,
}

fn fmt_byte(byte: Option<u8>) -> String {
    byte.map(|b| format!("0x{:02X}", b))
        .unwrap_or_else(|| "<end>".to_string())
}

impl fmt::Display for DiffInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "difference at byte {}: expected {}, got {} (run {})",
            self.offset,
            fmt_byte(self.expected),
            fmt_byte(self.actual),
            self.run_index
        )?;
        if !self.before.is_empty() {
            write!(f, "\n  preceded by:")?;
            for b in &self.before {
                write!(f, " {:02X}", b)?;
            }
        }
        Ok(())
    }
}

impl DeterminismResult {
    /// Panic with a detailed message if not deterministic.
    pub fn assert_deterministic(&self) {
        if let Some(diff) = &self.diff_info {
            panic!(
                "non-deterministic output\n  runs: {}\n  output size: {} bytes\n  hash: {}\n  {}",
                self.runs, self.output_size, self.hash, diff
            );
        }
    }
}

/// Run `generate_fn` `runs` times and compare every output to the first.
///
/// # Panics
/// Panics if `runs < 2`.
pub fn verify_determinism<F, O>(generate_fn: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> O,
    O: AsRef<[u8]>,
{
    assert!(runs >= 2, "need at least 2 runs to check determinism");

    let reference = generate_fn();
    let reference = reference.as_ref();
    let hash = compute_hash(reference);

    let diff_info = (1..runs).find_map(|run_index| {
        let output = generate_fn();
        first_difference(reference, output.as_ref(), run_index)
    });

    DeterminismResult {
        is_deterministic: diff_info.is_none(),
        runs,
        output_size: reference.len(),
        hash,
        diff_info,
    }
}

fn first_difference(expected: &[u8], actual: &[u8], run_index: usize) -> Option<DiffInfo> {
    let offset = expected
        .iter()
        .zip(actual)
        .position(|(e, a)| e != a)
        .or_else(|| (expected.len() != actual.len()).then(|| expected.len().min(actual.len())))?;

    Some(DiffInfo {
        offset,
        expected: expected.get(offset).copied(),
        actual: actual.get(offset).copied(),
        run_index,
        before: expected[offset.saturating_sub(8)..offset.min(expected.len())].to_vec(),
    })
}

/// True when every hash equals the first.
pub fn verify_hash_determinism(hashes: &[String]) -> bool {
    hashes.windows(2).all(|pair| pair[0] == pair[1])
}

/// Compute BLAKE3 hash of data.
pub fn compute_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Assert that a closure returns the same bytes across `runs` calls.
pub fn assert_deterministic<F>(runs: usize, generate_fn: F)
where
    F: Fn() -> Vec<u8>,
{
    verify_determinism(generate_fn, runs).assert_deterministic();
}
