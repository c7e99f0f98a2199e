//! Transition descriptors and frame interpolation
//!
//! A [`Transition`] says where the bar starts, where it ends, how long the
//! move takes and how it is eased. [`Animation`] drives one against frame
//! timestamps from the host's event loop.

use iced::{Point, Rectangle, Size};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use super::layout::Frame;

/// Timing curve of a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map linear progress in `[0, 1]` onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// Start frame, end frame, duration and easing of one animated re-layout
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub from: Frame,
    pub to: Frame,
    pub duration: Duration,
    pub easing: Easing,
}

impl Transition {
    pub fn new(from: Frame, to: Frame, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
        }
    }

    /// Interpolated frame at linear progress `t`.
    pub fn at(&self, t: f32) -> Frame {
        let t = self.easing.apply(t);
        if t >= 1.0 {
            return self.to;
        }
        let (from, to) = (&self.from, &self.to);

        Frame {
            background: lerp_rect(from.background, to.background, t),
            icon: lerp_rect(from.icon, to.icon, t),
            label: lerp_rect(from.label, to.label, t),
            input: lerp_rect(from.input, to.input, t),
            clear: lerp_rect(from.clear, to.clear, t),
            cancel: match (from.cancel, to.cancel) {
                (Some(a), Some(b)) => Some(lerp_rect(a, b, t)),
                (_, target) => target,
            },
            label_alpha: lerp(from.label_alpha, to.label_alpha, t),
            cancel_alpha: lerp(from.cancel_alpha, to.cancel_alpha, t),
            clear_visible: to.clear_visible,
        }
    }

    /// Apply an immediate visibility change to both ends.
    pub fn set_visibility(&mut self, label_alpha: f32, clear_visible: bool) {
        for frame in [&mut self.from, &mut self.to] {
            frame.label_alpha = label_alpha;
            frame.clear_visible = clear_visible;
        }
    }
}

/// A running transition
#[derive(Debug, Clone)]
pub struct Animation {
    transition: Transition,
    started: Option<Instant>,
    progress: f32,
}

impl Animation {
    /// Starts on the first [`tick`](Self::tick).
    pub fn new(transition: Transition) -> Self {
        Self {
            transition,
            started: None,
            progress: 0.0,
        }
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    pub fn transition_mut(&mut self) -> &mut Transition {
        &mut self.transition
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn frame(&self) -> Frame {
        self.transition.at(self.progress)
    }

    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }

    /// Advance to `now`. Returns true once the end frame is reached.
    pub fn tick(&mut self, now: Instant) -> bool {
        let started = *self.started.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started);

        self.progress = if self.transition.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.transition.duration.as_secs_f32()).min(1.0)
        };
        self.is_finished()
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn lerp_rect(a: Rectangle, b: Rectangle, t: f32) -> Rectangle {
    Rectangle::new(
        Point::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t)),
        Size::new(lerp(a.width, b.width, t), lerp(a.height, b.height, t)),
    )
}
