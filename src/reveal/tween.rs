use std::{fmt::Write, time::Duration};

/// A visual state an element animates between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub scale_y: f64,
    pub opacity: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Self::rest()
    }
}

impl Pose {
    /// Untransformed and fully opaque.
    pub const fn rest() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            scale_y: 1.0,
            opacity: 1.0,
        }
    }

    pub const fn x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    pub const fn y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    pub const fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub const fn scale_y(mut self, scale_y: f64) -> Self {
        self.scale_y = scale_y;
        self
    }

    pub const fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// CSS `transform` value for this pose.
    pub fn transform(&self) -> String {
        let mut parts = Vec::new();
        if self.x != 0.0 || self.y != 0.0 {
            parts.push(format!("translate({}px, {}px)", self.x, self.y));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({})", self.scale));
        }
        if self.scale_y != 1.0 {
            parts.push(format!("scaleY({})", self.scale_y));
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(" ")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    Power2Out,
    Power3Out,
    /// Overshoots the target before settling; the value is the overshoot strength.
    BackOut(f64),
}

impl Easing {
    /// Closest CSS timing function.
    pub fn css(&self) -> String {
        match self {
            Self::Linear => "linear".to_string(),
            Self::Power2Out => "cubic-bezier(0.25, 0.46, 0.45, 0.94)".to_string(),
            Self::Power3Out => "cubic-bezier(0.165, 0.84, 0.44, 1)".to_string(),
            Self::BackOut(overshoot) => {
                let y2 = 1.0 + 0.275 * overshoot / 1.70158;
                format!("cubic-bezier(0.175, 0.885, 0.32, {y2:.3})")
            }
        }
    }
}

/// Initial pose, either shared by every target or alternating by index parity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Start {
    Fixed(Pose),
    Alternating { even: Pose, odd: Pose },
}

impl Start {
    pub fn at(&self, index: usize) -> Pose {
        match *self {
            Self::Fixed(pose) => pose,
            Self::Alternating { even, odd } => {
                if index % 2 == 0 {
                    even
                } else {
                    odd
                }
            }
        }
    }
}

/// Whether a prepared animation is resting, playing forward or reversing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Playback {
    #[default]
    Idle,
    Forward,
    Reverse,
}

impl Playback {
    /// Hover state as playback: untouched, pointer inside, pointer left.
    pub fn hover(hovered: Option<bool>) -> Self {
        match hovered {
            None => Self::Idle,
            Some(true) => Self::Forward,
            Some(false) => Self::Reverse,
        }
    }
}

/// Describes one animation applied to an ordered group of targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: Start,
    pub to: Pose,
    pub duration: Duration,
    pub stagger: Duration,
    pub delay: Duration,
    pub easing: Easing,
    pub origin: Option<&'static str>,
}

impl Tween {
    pub const fn new(from: Pose, to: Pose) -> Self {
        Self {
            from: Start::Fixed(from),
            to,
            duration: Duration::from_secs(1),
            stagger: Duration::ZERO,
            delay: Duration::ZERO,
            easing: Easing::Power3Out,
            origin: None,
        }
    }

    pub const fn alternating(even: Pose, odd: Pose, to: Pose) -> Self {
        let mut tween = Self::new(even, to);
        tween.from = Start::Alternating { even, odd };
        tween
    }

    pub const fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub const fn stagger(mut self, stagger: Duration) -> Self {
        self.stagger = stagger;
        self
    }

    pub const fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub const fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub const fn origin(mut self, origin: &'static str) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Time from the tween's start until its last target settles.
    pub fn span(&self, count: usize) -> Duration {
        self.delay + self.stagger * count.saturating_sub(1) as u32 + self.duration
    }

    /// Delay before target `index` starts moving. Reversal runs the stagger
    /// from the last target back to the first and skips the initial delay.
    pub fn delay_for(&self, index: usize, count: usize, playback: Playback) -> Duration {
        match playback {
            Playback::Idle => Duration::ZERO,
            Playback::Forward => self.delay + self.stagger * index as u32,
            Playback::Reverse => {
                let from_end = count.saturating_sub(index + 1);
                self.stagger * from_end as u32
            }
        }
    }

    pub fn frame(&self, index: usize, count: usize, playback: Playback) -> Frame {
        let pose = match playback {
            Playback::Forward => self.to,
            Playback::Idle | Playback::Reverse => self.from.at(index),
        };
        let transition = match playback {
            Playback::Idle => None,
            Playback::Forward | Playback::Reverse => Some(Transition {
                duration: self.duration,
                delay: self.delay_for(index, count, playback),
                easing: self.easing,
            }),
        };
        Frame {
            pose,
            transition,
            origin: self.origin,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

/// Inline style for one target at one playback state.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub pose: Pose,
    pub transition: Option<Transition>,
    pub origin: Option<&'static str>,
}

impl Frame {
    pub fn to_style(&self) -> String {
        let mut style = format!(
            "transform: {}; opacity: {};",
            self.pose.transform(),
            self.pose.opacity
        );
        match &self.transition {
            None => style.push_str(" transition: none;"),
            Some(t) => {
                let easing = t.easing.css();
                let _ = write!(
                    style,
                    " transition: transform {d}ms {easing} {delay}ms, opacity {d}ms {easing} {delay}ms;",
                    d = t.duration.as_millis(),
                    delay = t.delay.as_millis(),
                );
            }
        }
        if let Some(origin) = self.origin {
            let _ = write!(style, " transform-origin: {origin};");
        }
        style
    }
}
