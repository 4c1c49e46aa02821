//! Committed indicator transition timing

use std::time::Duration;

/// CSS-style cubic bezier timing curve from (0, 0) to (1, 1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl CubicBezier {
    /// Material "standard" curve
    pub const STANDARD: CubicBezier = CubicBezier::new(0.4, 0.0, 0.2, 1.0);

    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn coord(t: f32, p1: f32, p2: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    }

    fn slope(t: f32, p1: f32, p2: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
    }

    /// Parameter `t` where the curve's x equals `x`
    fn solve_t(&self, x: f32) -> f32 {
        // Newton first, usually converges in a few steps
        let mut t = x;
        for _ in 0..8 {
            let err = Self::coord(t, self.x1, self.x2) - x;
            if err.abs() < 1e-6 {
                return t;
            }
            let d = Self::slope(t, self.x1, self.x2);
            if d.abs() < 1e-6 {
                break;
            }
            t -= err / d;
        }

        // Bisection fallback (x is monotone in t for x1, x2 in 0..=1)
        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        t = x;
        for _ in 0..32 {
            let value = Self::coord(t, self.x1, self.x2);
            if (value - x).abs() < 1e-6 {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) * 0.5;
        }
        t
    }

    /// Eased progress for linear progress `x` in 0..=1
    pub fn sample(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        Self::coord(self.solve_t(x), self.y1, self.y2)
    }
}

/// Animated property change
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: Duration,
    pub easing: CubicBezier,
}

impl Transition {
    /// 100ms on the standard curve, used by the committed indicator
    pub const STANDARD: Transition = Transition {
        duration: Duration::from_millis(100),
        easing: CubicBezier::STANDARD,
    };

    /// Eased progress after `elapsed`, saturating at 1.0
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let linear = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.easing.sample(linear)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    /// Value between `from` and `to` after `elapsed`
    pub fn interpolate(&self, from: f32, to: f32, elapsed: Duration) -> f32 {
        from + (to - from) * self.progress(elapsed)
    }
}
