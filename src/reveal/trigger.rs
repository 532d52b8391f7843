use std::str::FromStr;

use thiserror::Error;

use super::Playback;

/// Where a trigger element sits relative to its activation zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZonePosition {
    /// The trigger's top is still below the start line.
    Before,
    Active,
    /// The trigger's bottom has scrolled above the end line.
    After,
}

/// Activation zone expressed as fractions of the viewport height, measured from the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerZone {
    pub start: f64,
    pub end: f64,
}

impl TriggerZone {
    /// Activates when the trigger's top crosses `start` and stays active until
    /// its bottom leaves the top of the viewport.
    pub const fn new(start: f64) -> Self {
        Self { start, end: 0.0 }
    }

    /// Deactivates once the trigger's bottom crosses `end` instead.
    pub const fn until(mut self, end: f64) -> Self {
        self.end = end;
        self
    }

    /// Classifies a bounding box given in viewport coordinates.
    pub fn classify(&self, top: f64, bottom: f64, viewport_height: f64) -> ZonePosition {
        if top > viewport_height * self.start {
            ZonePosition::Before
        } else if bottom < viewport_height * self.end {
            ZonePosition::After
        } else {
            ZonePosition::Active
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    None,
    Play,
    Reverse,
    /// Jump back to the initial pose without animating.
    Reset,
}

impl ToggleAction {
    fn playback(self) -> Option<Playback> {
        match self {
            Self::None => None,
            Self::Play => Some(Playback::Forward),
            Self::Reverse => Some(Playback::Reverse),
            Self::Reset => Some(Playback::Idle),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseToggleError {
    #[error("unknown toggle action: {0:?}")]
    UnknownAction(String),
    #[error("expected 4 toggle actions, got {0}")]
    WrongCount(usize),
}

impl FromStr for ToggleAction {
    type Err = ParseToggleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "play" => Ok(Self::Play),
            "reverse" => Ok(Self::Reverse),
            "reset" => Ok(Self::Reset),
            other => Err(ParseToggleError::UnknownAction(other.to_string())),
        }
    }
}

/// Actions fired on enter, leave, enter-back and leave-back, in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleActions {
    pub on_enter: ToggleAction,
    pub on_leave: ToggleAction,
    pub on_enter_back: ToggleAction,
    pub on_leave_back: ToggleAction,
}

impl ToggleActions {
    /// `play none none reverse`
    pub const PLAY_REVERSE: Self = Self {
        on_enter: ToggleAction::Play,
        on_leave: ToggleAction::None,
        on_enter_back: ToggleAction::None,
        on_leave_back: ToggleAction::Reverse,
    };
}

impl Default for ToggleActions {
    fn default() -> Self {
        Self::PLAY_REVERSE
    }
}

impl FromStr for ToggleActions {
    type Err = ParseToggleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let actions = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<ToggleAction>, _>>()?;
        match actions[..] {
            [on_enter, on_leave, on_enter_back, on_leave_back] => Ok(Self {
                on_enter,
                on_leave,
                on_enter_back,
                on_leave_back,
            }),
            _ => Err(ParseToggleError::WrongCount(actions.len())),
        }
    }
}

/// Tracks one trigger element across scroll updates.
#[derive(Debug, Clone)]
pub struct ScrollTrigger {
    zone: TriggerZone,
    actions: ToggleActions,
    position: Option<ZonePosition>,
}

impl ScrollTrigger {
    pub fn new(zone: TriggerZone, actions: ToggleActions) -> Self {
        Self {
            zone,
            actions,
            position: None,
        }
    }

    pub fn zone(&self) -> TriggerZone {
        self.zone
    }

    pub fn position(&self) -> Option<ZonePosition> {
        self.position
    }

    /// Classifies and advances. A zero-height box or viewport has not been
    /// measured yet and leaves the trigger untouched.
    pub fn observe(&mut self, top: f64, bottom: f64, viewport_height: f64) -> Option<Playback> {
        if viewport_height <= 0.0 || bottom <= top {
            return None;
        }
        let next = self.zone.classify(top, bottom, viewport_height);
        self.advance(next)
    }

    /// Moves to `next` and returns the playback change, if any. A jump across
    /// the whole zone fires both callbacks on the way and the last one that
    /// does something wins.
    pub fn advance(&mut self, next: ZonePosition) -> Option<Playback> {
        use ZonePosition::*;

        let prev = self.position.replace(next).unwrap_or(Before);
        let a = self.actions;
        let fired = match (prev, next) {
            (Before, Active) => [Some(a.on_enter), None],
            (Active, After) => [Some(a.on_leave), None],
            (After, Active) => [Some(a.on_enter_back), None],
            (Active, Before) => [Some(a.on_leave_back), None],
            (Before, After) => [Some(a.on_enter), Some(a.on_leave)],
            (After, Before) => [Some(a.on_enter_back), Some(a.on_leave_back)],
            _ => [None, None],
        };
        fired
            .into_iter()
            .flatten()
            .rev()
            .find_map(ToggleAction::playback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 1000.0;

    #[test]
    fn classify_against_start_and_end_lines() {
        let zone = TriggerZone::new(0.8).until(0.2);
        assert_eq!(zone.classify(900.0, 1500.0, VIEWPORT), ZonePosition::Before);
        assert_eq!(zone.classify(800.0, 1400.0, VIEWPORT), ZonePosition::Active);
        assert_eq!(zone.classify(-400.0, 250.0, VIEWPORT), ZonePosition::Active);
        assert_eq!(zone.classify(-500.0, 150.0, VIEWPORT), ZonePosition::After);
    }

    #[test]
    fn default_end_is_top_of_viewport() {
        let zone = TriggerZone::new(0.8);
        assert_eq!(zone.classify(-500.0, 10.0, VIEWPORT), ZonePosition::Active);
        assert_eq!(zone.classify(-500.0, -1.0, VIEWPORT), ZonePosition::After);
    }

    #[test]
    fn unmeasured_viewport_is_ignored() {
        let mut trigger = ScrollTrigger::new(TriggerZone::new(0.8), ToggleActions::default());
        assert_eq!(trigger.observe(100.0, 900.0, 0.0), None);
        assert_eq!(trigger.position(), None);
    }

    #[test]
    fn unmeasured_box_neither_plays_nor_reverses() {
        for zone in [TriggerZone::new(0.8), TriggerZone::new(0.8).until(0.2)] {
            let mut trigger = ScrollTrigger::new(zone, ToggleActions::default());
            assert_eq!(trigger.observe(0.0, 0.0, VIEWPORT), None, "{zone:?}");
            assert_eq!(trigger.position(), None);
            // below the fold once measured: still waiting to enter
            assert_eq!(trigger.observe(2500.0, 3100.0, VIEWPORT), None, "{zone:?}");
            assert_eq!(trigger.position(), Some(ZonePosition::Before));
            assert_eq!(
                trigger.observe(700.0, 1300.0, VIEWPORT),
                Some(Playback::Forward),
                "{zone:?}"
            );
        }
    }

    #[test]
    fn parse_toggle_actions() {
        assert_eq!(
            "play none none reverse".parse::<ToggleActions>(),
            Ok(ToggleActions::PLAY_REVERSE)
        );
        assert_eq!(
            "play none".parse::<ToggleActions>(),
            Err(ParseToggleError::WrongCount(2))
        );
        assert_eq!(
            "play none none rewind".parse::<ToggleActions>(),
            Err(ParseToggleError::UnknownAction("rewind".to_string()))
        );
    }

    #[test]
    fn enter_plays_and_leave_back_reverses() {
        let mut trigger = ScrollTrigger::new(TriggerZone::new(0.8), ToggleActions::default());
        assert_eq!(trigger.advance(ZonePosition::Before), None);
        assert_eq!(trigger.advance(ZonePosition::Active), Some(Playback::Forward));
        assert_eq!(trigger.advance(ZonePosition::Active), None);
        assert_eq!(trigger.advance(ZonePosition::After), None);
        assert_eq!(trigger.advance(ZonePosition::Active), None);
        assert_eq!(trigger.advance(ZonePosition::Before), Some(Playback::Reverse));
        assert_eq!(trigger.position(), Some(ZonePosition::Before));
    }

    #[test]
    fn already_visible_on_load_plays() {
        let mut trigger = ScrollTrigger::new(TriggerZone::new(0.8), ToggleActions::default());
        assert_eq!(trigger.observe(100.0, 900.0, VIEWPORT), Some(Playback::Forward));
    }

    #[test]
    fn jumps_across_the_zone() {
        let mut trigger = ScrollTrigger::new(TriggerZone::new(0.8), ToggleActions::default());
        assert_eq!(trigger.advance(ZonePosition::After), Some(Playback::Forward));
        assert_eq!(trigger.advance(ZonePosition::Before), Some(Playback::Reverse));
    }

    #[test]
    fn custom_actions_fire_on_leave() {
        let actions = "play reset none none".parse::<ToggleActions>().unwrap();
        let mut trigger = ScrollTrigger::new(TriggerZone::new(0.5), actions);
        assert_eq!(trigger.advance(ZonePosition::Active), Some(Playback::Forward));
        assert_eq!(trigger.advance(ZonePosition::After), Some(Playback::Idle));
        assert_eq!(trigger.advance(ZonePosition::Active), None);
    }
}
