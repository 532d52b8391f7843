//! Scroll-triggered entrance animations.
//!
//! A [`Tween`] describes how an ordered group of targets moves from an
//! initial [`Pose`] to a target pose. Each target is rendered as a [`Frame`]
//! (an inline style with a CSS transition), so playing or reversing is a
//! matter of switching the [`Playback`] state. A [`ScrollTrigger`] decides
//! that state from where its trigger element sits in the viewport, and a
//! [`Timeline`] chains tweens that play once without a trigger.

mod timeline;
mod trigger;
mod tween;

use std::time::Duration;

pub use timeline::{Offset, ParseOffsetError, Step, Timeline};
pub use trigger::{
    ParseToggleError, ScrollTrigger, ToggleAction, ToggleActions, TriggerZone, ZonePosition,
};
pub use tween::{Easing, Frame, Playback, Pose, Start, Transition, Tween};

/// Trigger top at 80% of the viewport, until its bottom passes the top.
pub const ENTER_ZONE: TriggerZone = TriggerZone::new(0.8);
/// Trigger top at 80% of the viewport, until its bottom passes 20%.
pub const SECTION_ZONE: TriggerZone = TriggerZone::new(0.8).until(0.2);
pub const TIMELINE_ZONE: TriggerZone = TriggerZone::new(0.7);

const fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

/// Fades in while rising by `distance` pixels.
pub const fn rise(distance: f64) -> Tween {
    Tween::new(Pose::rest().y(distance).opacity(0.0), Pose::rest())
}

/// Grows from nothing with a slight overshoot.
pub const fn pop() -> Tween {
    Tween::new(Pose::rest().scale(0.0).opacity(0.0), Pose::rest())
        .duration(ms(500))
        .stagger(ms(100))
        .easing(Easing::BackOut(1.7))
}

pub const fn section_content() -> Tween {
    rise(50.0).stagger(ms(200))
}

pub const fn project_cards() -> Tween {
    rise(80.0).duration(ms(800)).stagger(ms(200))
}

/// Even entries come in from the left, odd ones from the right.
pub const fn timeline_items() -> Tween {
    Tween::alternating(
        Pose::rest().x(-100.0).opacity(0.0),
        Pose::rest().x(100.0).opacity(0.0),
        Pose::rest(),
    )
    .duration(ms(800))
    .stagger(ms(300))
}

pub const fn timeline_line() -> Tween {
    Tween::new(Pose::rest().scale_y(0.0), Pose::rest())
        .duration(ms(1500))
        .origin("top center")
}

pub const fn navbar_drop() -> Tween {
    Tween::new(Pose::rest().y(-100.0).opacity(0.0), Pose::rest()).delay(ms(500))
}

/// Hover lift for project cards.
pub const fn card_lift() -> Tween {
    Tween::new(Pose::rest(), Pose::rest().y(-10.0).scale(1.02))
        .duration(ms(300))
        .easing(Easing::Power2Out)
}

pub const fn image_zoom() -> Tween {
    Tween::new(Pose::rest(), Pose::rest().scale(1.1))
        .duration(ms(500))
        .easing(Easing::Power2Out)
}

pub const fn overlay_fade() -> Tween {
    Tween::new(Pose::rest().opacity(0.0), Pose::rest())
        .duration(ms(300))
        .easing(Easing::Power2Out)
}

/// Hero steps, in order.
pub mod hero {
    pub const TITLE_LINES: usize = 0;
    pub const SUBTITLE: usize = 1;
    pub const CTA: usize = 2;
    pub const SCROLL_INDICATOR: usize = 3;
}

/// Two title lines, subtitle, call to action and scroll indicator, one second
/// after mount.
pub fn hero_intro() -> Timeline {
    Timeline::new(ms(1000))
        .then(rise(100.0).stagger(ms(200)), 2, Offset::AfterPrevious)
        .then(rise(30.0).duration(ms(800)), 1, Offset::Overlap(ms(300)))
        .then(rise(30.0).duration(ms(800)), 1, Offset::Overlap(ms(400)))
        .then(
            Tween::new(Pose::rest().opacity(0.0), Pose::rest()),
            1,
            Offset::Overlap(ms(200)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_intro_schedule() {
        let intro = hero_intro();
        let starts = intro
            .steps()
            .iter()
            .map(|s| s.start.as_millis())
            .collect::<Vec<_>>();
        assert_eq!(starts, vec![1000, 1900, 2300, 2900]);
        assert_eq!(intro.end(), ms(3900));

        let second_line = intro.frame(hero::TITLE_LINES, 1, Playback::Forward).unwrap();
        assert_eq!(second_line.transition.unwrap().delay, ms(1200));
        let indicator = intro
            .frame(hero::SCROLL_INDICATOR, 0, Playback::Idle)
            .unwrap();
        assert_eq!(indicator.pose.opacity, 0.0);
        assert_eq!(indicator.pose.transform(), "none");
    }

    #[test]
    fn section_reveal_plays_then_reverses_in_order() {
        let tween = section_content();
        let mut trigger = ScrollTrigger::new(SECTION_ZONE, ToggleActions::default());

        let playback = trigger.observe(900.0, 1600.0, 1000.0);
        assert_eq!(playback, None);

        let playback = trigger.observe(700.0, 1400.0, 1000.0).unwrap();
        let delays = (0..3)
            .map(|i| tween.frame(i, 3, playback).transition.unwrap().delay.as_millis())
            .collect::<Vec<_>>();
        assert_eq!(delays, vec![0, 200, 400]);

        let playback = trigger.observe(850.0, 1550.0, 1000.0).unwrap();
        assert_eq!(playback, Playback::Reverse);
        let delays = (0..3)
            .map(|i| tween.frame(i, 3, playback).transition.unwrap().delay.as_millis())
            .collect::<Vec<_>>();
        assert_eq!(delays, vec![400, 200, 0]);
    }

    #[test]
    fn hover_lift_round_trip() {
        let lift = card_lift();
        assert_eq!(
            lift.frame(0, 1, Playback::Forward).pose.transform(),
            "translate(0px, -10px) scale(1.02)"
        );
        assert_eq!(lift.frame(0, 1, Playback::Reverse).pose, Pose::rest());
    }

    #[test]
    fn scroll_indicator_floats_down_from_rest() {
        let css = include_str!("../input.css");
        let float = css
            .split("@keyframes float")
            .nth(1)
            .and_then(|rest| rest.split("\n}").next())
            .expect("float keyframes");
        assert!(float.contains("translateY(0)"), "{float}");
        assert!(float.contains("translateY(10px)"), "{float}");
        assert!(!float.contains("-10px"), "{float}");
    }

    #[test]
    fn card_hover_tweens_ease_out() {
        for tween in [card_lift(), image_zoom(), overlay_fade()] {
            let style = tween.frame(0, 1, Playback::Forward).to_style();
            assert!(
                style.contains(&Easing::Power2Out.css()),
                "{style}"
            );
        }
    }
}
