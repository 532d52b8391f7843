use leptos::prelude::*;

use super::{
    icons::{Icon, IconKind},
    reveal::use_intro,
};
use crate::{
    content::PROFILE,
    nav::anchors,
    reveal::{hero, hero_intro},
};

#[component]
pub fn Hero() -> impl IntoView {
    let intro = StoredValue::new(hero_intro());
    let playback = use_intro();
    let style = move |step: usize, index: usize| {
        move || {
            intro
                .with_value(|t| t.frame(step, index, playback.get()))
                .map(|f| f.to_style())
                .unwrap_or_default()
        }
    };

    view! {
        <section
            id=anchors::HOME
            class="min-h-screen flex items-center justify-center relative section-padding"
        >
            <div class="container-width text-center">
                <div class="space-y-6">
                    <div class="overflow-hidden">
                        <h1
                            class="text-5xl sm:text-6xl lg:text-7xl font-black mb-4"
                            style=style(hero::TITLE_LINES, 0)
                        >
                            <span class="gradient-text">
                                {format!("Hi, I'm {}", PROFILE.short_name)}
                            </span>
                        </h1>
                    </div>
                    <div class="overflow-hidden">
                        <h2
                            class="text-3xl sm:text-4xl lg:text-5xl font-light text-gray-800 dark:text-gray-200"
                            style=style(hero::TITLE_LINES, 1)
                        >
                            {PROFILE.role.clone()}
                        </h2>
                    </div>
                    <p
                        class="text-lg sm:text-xl text-gray-600 dark:text-gray-400 max-w-2xl mx-auto leading-relaxed"
                        style=style(hero::SUBTITLE, 0)
                    >
                        {PROFILE.tagline.clone()}
                    </p>
                    <div
                        class="flex flex-col sm:flex-row gap-4 justify-center items-center pt-8"
                        style=style(hero::CTA, 0)
                    >
                        <a href=format!("#{}", anchors::PROJECTS) class="btn-primary">
                            "View My Work"
                        </a>
                        <a
                            href=format!("#{}", anchors::CONTACT)
                            class="px-6 py-3 rounded-lg border border-gray-300 dark:border-gray-700 text-gray-700 dark:text-gray-300 hover:bg-gray-50 dark:hover:bg-gray-800 transition-all duration-300 font-medium"
                        >
                            "Get In Touch"
                        </a>
                    </div>
                </div>
            </div>

            <div class="absolute bottom-8 left-1/2 -translate-x-1/2">
                <div style=style(hero::SCROLL_INDICATOR, 0)>
                    <div class="flex flex-col items-center space-y-2 animate-float">
                        <span class="text-sm text-gray-500 dark:text-gray-400 font-medium">
                            "Scroll"
                        </span>
                        <Icon
                            kind=IconKind::ChevronDown
                            size=24
                            class="text-gray-500 dark:text-gray-400"
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}
