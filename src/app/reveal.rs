use leptos::{html, prelude::*};
use leptos_use::{
    use_element_bounding, use_window_size, UseElementBoundingReturn, UseWindowSizeReturn,
};

use crate::reveal::{Playback, ScrollTrigger, ToggleActions, TriggerZone, Tween};

/// Plays forward when `target` enters `zone` and reverses when it leaves back
/// upward. The listeners go away with the owning component.
pub fn use_scroll_trigger(target: NodeRef<html::Div>, zone: TriggerZone) -> Signal<Playback> {
    let UseElementBoundingReturn { top, bottom, .. } = use_element_bounding(target);
    let UseWindowSizeReturn { height, .. } = use_window_size();
    let (playback, set_playback) = signal(Playback::Idle);
    let trigger = StoredValue::new(ScrollTrigger::new(zone, ToggleActions::PLAY_REVERSE));

    Effect::new(move |_| {
        let (top, bottom, height) = (top.get(), bottom.get(), height.get());
        if target.get().is_none() {
            return;
        }
        let mut next = None;
        trigger.update_value(|t| next = t.observe(top, bottom, height));
        if let Some(next) = next {
            set_playback(next);
        }
    });

    playback.into()
}

/// Starts playing on the first frame after mount.
pub fn use_intro() -> Signal<Playback> {
    let (playback, set_playback) = signal(Playback::Idle);
    Effect::new(move |_| {
        request_animation_frame(move || set_playback(Playback::Forward));
    });
    playback.into()
}

/// A tween bound to a playback signal, styling `count` targets.
#[derive(Debug, Clone, Copy)]
pub struct Reveal {
    tween: Tween,
    count: usize,
    playback: Signal<Playback>,
}

impl Reveal {
    pub fn new(tween: Tween, count: usize, playback: Signal<Playback>) -> Self {
        Self {
            tween,
            count,
            playback,
        }
    }

    pub fn style(&self, index: usize) -> impl Fn() -> String + Send + Sync + Clone + 'static {
        let Self {
            tween,
            count,
            playback,
        } = *self;
        move || tween.frame(index, count, playback.get()).to_style()
    }
}

pub fn use_scroll_reveal(
    target: NodeRef<html::Div>,
    zone: TriggerZone,
    tween: Tween,
    count: usize,
) -> Reveal {
    Reveal::new(tween, count, use_scroll_trigger(target, zone))
}
