//! Phase accumulator and the triangle waveform.

/// Tracks oscillator phase in cycles (0.0 to 1.0).
#[derive(Debug, Clone)]
pub struct PhaseAccumulator {
    phase: f64,
    sample_rate: f64,
}

impl PhaseAccumulator {
    pub fn new(sample_rate: f64) -> Self {
        Self {
            phase: 0.0,
            sample_rate,
        }
    }

    /// Returns the current phase, then advances by one sample at `frequency`.
    #[inline]
    pub fn advance(&mut self, frequency: f64) -> f64 {
        let current = self.phase;
        self.phase = (self.phase + frequency / self.sample_rate).fract();
        current
    }
}

/// Triangle wave in [-1, 1] for a phase in cycles; starts at 0 rising.
#[inline]
pub fn triangle(phase: f64) -> f64 {
    let p = phase.rem_euclid(1.0);
    if p < 0.25 {
        4.0 * p
    } else if p < 0.75 {
        2.0 - 4.0 * p
    } else {
        4.0 * p - 4.0
    }
}
