use std::{str::FromStr, time::Duration};

use thiserror::Error;

use super::{Frame, Playback, Tween};

/// Placement of a step relative to the end of the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Offset {
    #[default]
    AfterPrevious,
    /// `-=<secs>`
    Overlap(Duration),
    /// `+=<secs>`
    Gap(Duration),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid timeline offset: {0:?}")]
pub struct ParseOffsetError(String);

impl FromStr for Offset {
    type Err = ParseOffsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::AfterPrevious);
        }
        let err = || ParseOffsetError(s.to_string());
        let (ctor, secs): (fn(Duration) -> Self, &str) = if let Some(rest) = s.strip_prefix("-=") {
            (Self::Overlap, rest)
        } else if let Some(rest) = s.strip_prefix("+=") {
            (Self::Gap, rest)
        } else {
            return Err(err());
        };
        let secs = secs.parse::<f64>().map_err(|_| err())?;
        if !secs.is_finite() || secs < 0.0 {
            return Err(err());
        }
        Ok(ctor(Duration::from_millis((secs * 1000.0).round() as u64)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub tween: Tween,
    pub count: usize,
    pub start: Duration,
}

/// Tweens played one after another from a single starting point.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Timeline {
    delay: Duration,
    steps: Vec<Step>,
    end: Duration,
}

impl Timeline {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            steps: Vec::new(),
            end: delay,
        }
    }

    /// Appends `tween` over `count` targets. The tween's own delay is replaced
    /// by its computed start time.
    pub fn then(mut self, tween: Tween, count: usize, offset: Offset) -> Self {
        let start = match offset {
            Offset::AfterPrevious => self.end,
            Offset::Overlap(d) => self.end.saturating_sub(d).max(self.delay),
            Offset::Gap(d) => self.end + d,
        };
        let tween = tween.delay(start);
        self.end = self.end.max(tween.span(count));
        self.steps.push(Step {
            tween,
            count,
            start,
        });
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// When the last step settles.
    pub fn end(&self) -> Duration {
        self.end
    }

    pub fn frame(&self, step: usize, index: usize, playback: Playback) -> Option<Frame> {
        self.steps
            .get(step)
            .map(|s| s.tween.frame(index, s.count, playback))
    }
}
