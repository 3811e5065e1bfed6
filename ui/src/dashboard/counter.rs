//! Spring-eased counter for the stat cards.
//!
//! A damped spring advanced in fixed sub-steps of [`SUBSTEP_SECS`]. The
//! integration never lets the value move away from, or past, the current
//! target, so the displayed number walks monotonically toward whatever it
//! was last pointed at.

use crate::config::SpringConfig;

/// Integration step. Small enough that damping never flips velocity sign.
const SUBSTEP_SECS: f64 = 1.0 / 240.0;
/// Longest frame gap simulated at once; longer gaps (hidden tab) are clamped.
const MAX_FRAME_SECS: f64 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct SpringCounter {
    position: f64,
    velocity: f64,
    target: f64,
    spring: SpringConfig,
}

impl SpringCounter {
    pub fn new(initial: f64) -> Self {
        Self::with_config(initial, SpringConfig::default())
    }

    pub fn with_config(initial: f64, spring: SpringConfig) -> Self {
        Self {
            position: initial,
            velocity: 0.0,
            target: initial,
            spring,
        }
    }

    /// Points the spring at a new target, keeping the current position.
    pub fn retarget(&mut self, target: f64) {
        if !target.is_finite() {
            return;
        }
        self.target = target;
        if self.velocity * (self.target - self.position) < 0.0 {
            self.velocity = 0.0;
        }
    }

    /// Advances by `elapsed_ms` and returns the rounded display value.
    pub fn advance(&mut self, elapsed_ms: f64) -> i64 {
        let mut remaining = (elapsed_ms / 1_000.0).clamp(0.0, MAX_FRAME_SECS);
        while remaining > 0.0 && !self.is_settled() {
            let h = remaining.min(SUBSTEP_SECS);
            self.substep(h);
            remaining -= h;
        }
        self.display()
    }

    fn substep(&mut self, h: f64) {
        let SpringConfig {
            stiffness,
            damping,
            mass,
            rest_delta,
            rest_speed,
        } = self.spring;

        let offset = self.position - self.target;
        let accel = (-stiffness * offset - damping * self.velocity) / mass;
        self.velocity += accel * h;

        let toward = self.target - self.position;
        if self.velocity * toward < 0.0 {
            self.velocity = 0.0;
        }

        let next = self.position + self.velocity * h;
        if (self.target - next) * toward <= 0.0 {
            // Would land on or beyond the target.
            self.position = self.target;
            self.velocity = 0.0;
        } else {
            self.position = next;
        }

        if (self.target - self.position).abs() < rest_delta && self.velocity.abs() < rest_speed {
            self.position = self.target;
            self.velocity = 0.0;
        }
    }

    pub fn is_settled(&self) -> bool {
        self.position == self.target && self.velocity == 0.0
    }

    pub fn display(&self) -> i64 {
        self.position.round() as i64
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn target(&self) -> f64 {
        self.target
    }
}

impl Default for SpringCounter {
    fn default() -> Self {
        Self::new(0.0)
    }
}
