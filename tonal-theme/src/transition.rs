//! Animated switching between color schemes.
//!
//! Every role is interpolated in Oklab along a fast-out-slow-in curve, the
//! way Material animates theme changes.

use std::time::{Duration, Instant};

use tonal_color::SchemeRole;

use crate::theme::ColorScheme;

/// Default duration of a scheme transition.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(150);

/// Cubic-bezier(0.4, 0.0, 0.2, 1.0).
/// Input: linear progress in [0.0, 1.0].
/// Output: eased progress in [0.0, 1.0].
pub fn fast_out_slow_in(progress: f32) -> f32 {
    const X1: f32 = 0.4;
    const Y1: f32 = 0.0;
    const X2: f32 = 0.2;
    const Y2: f32 = 1.0;

    let x = progress.clamp(0.0, 1.0);
    if x == 0.0 || x == 1.0 {
        return x;
    }
    let bezier = |t: f32, p1: f32, p2: f32| {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    };

    // x(t) is monotonic for these control points.
    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    let mut t = x;
    for _ in 0..32 {
        let current = bezier(t, X1, X2);
        if (current - x).abs() < 1e-6 {
            break;
        }
        if current < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    bezier(t, Y1, Y2)
}

/// Interpolates every role of two schemes.
///
/// `fraction` is linear progress; easing is applied here. The appearance of
/// the result is the target's.
pub fn interpolate(from: &ColorScheme, to: &ColorScheme, fraction: f32) -> ColorScheme {
    let eased = fast_out_slow_in(fraction);
    let mut out = *to;
    for role in SchemeRole::ALL {
        *out.get_mut(role) = from.get(role).lerp_oklab(to.get(role), eased);
    }
    out
}

/// Time-driven transition towards a target scheme.
#[derive(Clone, Debug)]
pub struct SchemeTransition {
    from: ColorScheme,
    to: ColorScheme,
    duration: Duration,
    started: Option<Instant>,
}

impl SchemeTransition {
    /// Starts at rest on `scheme`.
    pub fn new(scheme: ColorScheme, duration: Duration) -> Self {
        Self {
            from: scheme,
            to: scheme,
            duration,
            started: None,
        }
    }

    /// The scheme being animated towards.
    pub fn target(&self) -> &ColorScheme {
        &self.to
    }

    /// Starts animating towards `scheme` from whatever is displayed now.
    ///
    /// Retargeting to the current target does not restart the animation.
    pub fn retarget(&mut self, scheme: ColorScheme) {
        self.retarget_at(scheme, Instant::now());
    }

    /// [`retarget`](Self::retarget) with an explicit clock.
    pub fn retarget_at(&mut self, scheme: ColorScheme, now: Instant) {
        if scheme == self.to {
            return;
        }
        self.from = self.current_at(now);
        self.to = scheme;
        self.started = if self.duration.is_zero() {
            None
        } else {
            Some(now)
        };
    }

    /// The scheme at linear progress `fraction` of the running transition.
    pub fn sample(&self, fraction: f32) -> ColorScheme {
        interpolate(&self.from, &self.to, fraction)
    }

    /// The scheme to display now.
    pub fn current(&self) -> ColorScheme {
        self.current_at(Instant::now())
    }

    /// [`current`](Self::current) with an explicit clock.
    pub fn current_at(&self, now: Instant) -> ColorScheme {
        match self.started {
            Some(started) => self.sample(self.fraction_at(started, now)),
            None => self.to,
        }
    }

    /// Whether the transition is still running.
    pub fn is_animating(&self) -> bool {
        self.is_animating_at(Instant::now())
    }

    /// [`is_animating`](Self::is_animating) with an explicit clock.
    pub fn is_animating_at(&self, now: Instant) -> bool {
        self.started
            .is_some_and(|started| self.fraction_at(started, now) < 1.0)
    }

    fn fraction_at(&self, started: Instant, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}
