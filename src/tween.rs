//! Time-based interpolation of a single value, used for the wrapper and header
//! offsets.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Quintic ease-in-out ("power4" in the usual naming).
    #[default]
    Power4InOut,
}

impl Easing {
    /// Map progress `t` in `[0, 1]` onto eased progress.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power4InOut => {
                if t < 0.5 {
                    16.0 * t.powi(5)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(5) / 2.0
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub value: f64,
    pub finished: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    duration_ms: f64,
    easing: Easing,
    started_at: Option<f64>,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing,
            started_at: None,
        }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    /// Value at `now_ms`. The first sample pins the start time, so a tween
    /// begins on the frame that first observes it.
    pub fn sample(&mut self, now_ms: f64) -> Sample {
        let start = *self.started_at.get_or_insert(now_ms);
        if self.duration_ms <= 0.0 {
            return Sample {
                value: self.to,
                finished: true,
            };
        }
        let t = ((now_ms - start) / self.duration_ms).clamp(0.0, 1.0);
        if t >= 1.0 {
            return Sample {
                value: self.to,
                finished: true,
            };
        }
        Sample {
            value: self.from + (self.to - self.from) * self.easing.apply(t),
            finished: false,
        }
    }
}
