//! ADSR envelope for preview notes.

/// ADSR envelope parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdsrParams {
    /// Attack time in seconds.
    pub attack: f64,
    /// Decay time in seconds.
    pub decay: f64,
    /// Sustain level (0.0 to 1.0).
    pub sustain: f64,
    /// Release time in seconds.
    pub release: f64,
}

impl Default for AdsrParams {
    /// The preview synth voice: quick attack, low sustain, long tail.
    fn default() -> Self {
        Self {
            attack: 0.05,
            decay: 0.1,
            sustain: 0.3,
            release: 0.5,
        }
    }
}

impl AdsrParams {
    /// Creates new ADSR parameters, clamping out-of-range values.
    pub fn new(attack: f64, decay: f64, sustain: f64, release: f64) -> Self {
        Self {
            attack: attack.max(0.0),
            decay: decay.max(0.0),
            sustain: sustain.clamp(0.0, 1.0),
            release: release.max(0.0),
        }
    }
}

/// Envelope generator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeState {
    Attack,
    Decay,
    Sustain,
    Release,
    Idle,
}

/// Per-sample ADSR envelope generator.
#[derive(Debug, Clone)]
pub struct AdsrEnvelope {
    params: AdsrParams,
    dt: f64,
    state: EnvelopeState,
    time: f64,
    level: f64,
    release_level: f64,
}

impl AdsrEnvelope {
    /// Creates a triggered envelope.
    pub fn new(params: AdsrParams, sample_rate: f64) -> Self {
        Self {
            params,
            dt: 1.0 / sample_rate,
            state: EnvelopeState::Attack,
            time: 0.0,
            level: 0.0,
            release_level: 0.0,
        }
    }

    /// Note off: fade from the current level to silence.
    pub fn release(&mut self) {
        if self.state != EnvelopeState::Idle && self.state != EnvelopeState::Release {
            self.release_level = self.level;
            self.state = EnvelopeState::Release;
            self.time = 0.0;
        }
    }

    pub fn state(&self) -> EnvelopeState {
        self.state
    }

    /// Returns true once the release has finished.
    pub fn is_idle(&self) -> bool {
        self.state == EnvelopeState::Idle
    }

    /// Generates the next envelope sample.
    pub fn next_sample(&mut self) -> f64 {
        match self.state {
            EnvelopeState::Attack => {
                if self.params.attack > 0.0 && self.time < self.params.attack {
                    self.level = self.time / self.params.attack;
                    self.time += self.dt;
                } else {
                    self.level = 1.0;
                    self.enter(EnvelopeState::Decay);
                }
            }
            EnvelopeState::Decay => {
                if self.params.decay > 0.0 && self.time < self.params.decay {
                    let progress = self.time / self.params.decay;
                    self.level = 1.0 - progress * (1.0 - self.params.sustain);
                    self.time += self.dt;
                } else {
                    self.level = self.params.sustain;
                    self.enter(EnvelopeState::Sustain);
                }
            }
            EnvelopeState::Sustain => {
                self.level = self.params.sustain;
            }
            EnvelopeState::Release => {
                if self.params.release > 0.0 && self.time < self.params.release {
                    let progress = self.time / self.params.release;
                    self.level = self.release_level * (1.0 - progress);
                    self.time += self.dt;
                } else {
                    self.level = 0.0;
                    self.enter(EnvelopeState::Idle);
                }
            }
            EnvelopeState::Idle => {
                self.level = 0.0;
            }
        }

        self.level
    }

    fn enter(&mut self, state: EnvelopeState) {
        self.state = state;
        self.time = 0.0;
    }
}
