/// An eased interpolation between two scroll offsets over a time window.
///
/// Time is supplied by the caller in milliseconds; the tween holds no clock.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    from: f32,
    to: f32,
    start_ms: u64,
    duration_ms: u64,
    easing: Easing,
}

impl Tween {
    /// A zero duration is treated as one millisecond.
    pub fn new(from: f32, to: f32, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn origin(&self) -> f32 {
        self.from
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// The eased offset at `now_ms`. Lands exactly on `to` once the tween is done.
    pub fn sample(&self, now_ms: u64) -> f32 {
        if self.is_done(now_ms) {
            return self.to;
        }
        let eased = self.easing.apply(self.progress(now_ms));
        (self.from + (self.to - self.from) * eased).max(0.0)
    }

    /// Restarts from the current sample towards a new target.
    pub fn retarget(&mut self, now_ms: u64, to: f32, duration_ms: u64) {
        *self = Self::new(self.sample(now_ms), to, now_ms, duration_ms, self.easing);
    }
}

/// Easing curves over `t` in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    #[default]
    SmoothStep,
    EaseOutQuad,
    EaseInOutCubic,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseOutQuad => t * (2.0 - t),
            Self::EaseInOutCubic if t < 0.5 => 4.0 * t * t * t,
            Self::EaseInOutCubic => {
                let u = 2.0 - 2.0 * t;
                1.0 - u * u * u / 2.0
            }
        }
    }
}
