/// Scales values into `0..=target_max` relative to the largest value seen so far.
///
/// The peak is remembered for the whole run, so a bar only ever reaches full
/// width for the busiest moment observed, and later values shrink relative to
/// it. Changing `target_max` rescales future output only.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalizer {
    target_max: u16,
    observed_max: f64,
}

impl Normalizer {
    pub fn new(target_max: u16) -> Self {
        Self {
            target_max,
            observed_max: 0.0,
        }
    }

    pub fn target_max(&self) -> u16 {
        self.target_max
    }

    pub fn observed_max(&self) -> f64 {
        self.observed_max
    }

    pub fn set_target_max(&mut self, target_max: u16) {
        self.target_max = target_max;
    }

    /// Raise the remembered peak to `value` if it is larger.
    pub fn observe(&mut self, value: u64) {
        let value = value as f64;
        if value > self.observed_max {
            self.observed_max = value;
        }
    }

    /// Scale against the peak seen so far without recording `value`.
    pub fn scale(&self, value: u64) -> u16 {
        // Nothing observed yet: no bar.
        if self.observed_max == 0.0 {
            return 0;
        }

        let scaled = (value as f64 / self.observed_max) * f64::from(self.target_max);
        (scaled.floor() as u16).min(self.target_max)
    }

    pub fn observe_and_scale(&mut self, value: u64) -> u16 {
        self.observe(value);
        self.scale(value)
    }
}
