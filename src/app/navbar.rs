use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::{
    icons::{Icon, IconKind},
    reveal::{use_intro, Reveal},
    theme::Theme,
};
use crate::{
    content::PROFILE,
    nav::{anchors, is_scrolled, NAV_ITEMS},
    reveal::navbar_drop,
};

#[component]
pub fn Navbar() -> impl IntoView {
    let theme = expect_context::<Theme>();
    let (is_open, set_is_open) = signal(false);
    let (_, scroll_y) = use_window_scroll();
    let entrance = Reveal::new(navbar_drop(), 1, use_intro());

    let theme_icon = move |size: u32| {
        view! {
            {move || {
                let kind = if theme.is_dark() { IconKind::Sun } else { IconKind::Moon };
                view! { <Icon kind size /> }
            }}
        }
    };

    view! {
        <nav
            class=move || {
                if is_scrolled(scroll_y.get()) {
                    "fixed top-0 w-full z-50 transition-all duration-300 glass-effect shadow-lg py-4"
                } else {
                    "fixed top-0 w-full z-50 transition-all duration-300 bg-transparent py-6"
                }
            }
            style=entrance.style(0)
        >
            <div class="container-width flex justify-between items-center px-4 sm:px-6">
                <a href=format!("#{}", anchors::HOME) class="text-2xl font-bold gradient-text">
                    {PROFILE.short_name.clone()}
                </a>

                <div class="hidden md:flex items-center space-x-8">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=item.href()
                                    class="text-gray-700 dark:text-gray-300 hover:text-purple-600 dark:hover:text-purple-400 transition-colors duration-300 font-medium"
                                >
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <button
                        on:click=move |_| theme.toggle()
                        class="p-2 rounded-lg bg-gray-200 dark:bg-gray-700 text-gray-700 dark:text-gray-300 hover:bg-gray-300 dark:hover:bg-gray-600 transition-colors duration-300"
                        aria-label="Toggle dark mode"
                    >
                        {theme_icon(20)}
                    </button>
                </div>

                <div class="md:hidden flex items-center space-x-2">
                    <button
                        on:click=move |_| theme.toggle()
                        class="p-2 rounded-lg bg-gray-200 dark:bg-gray-700 text-gray-700 dark:text-gray-300"
                        aria-label="Toggle dark mode"
                    >
                        {theme_icon(18)}
                    </button>
                    <button
                        on:click=move |_| set_is_open.update(|open| *open = !*open)
                        class="p-2 rounded-lg bg-gray-200 dark:bg-gray-700 text-gray-700 dark:text-gray-300"
                        aria-label="Toggle menu"
                        aria-expanded=move || is_open.get().to_string()
                    >
                        {move || {
                            let kind = if is_open.get() { IconKind::Close } else { IconKind::Menu };
                            view! { <Icon kind /> }
                        }}
                    </button>
                </div>

                <Show when=move || is_open.get()>
                    <div class="absolute top-full left-0 w-full glass-effect md:hidden">
                        <div class="flex flex-col space-y-4 p-6">
                            {NAV_ITEMS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <a
                                            href=item.href()
                                            on:click=move |_| set_is_open(false)
                                            class="text-left text-gray-700 dark:text-gray-300 hover:text-purple-600 dark:hover:text-purple-400 transition-colors duration-300 font-medium py-2"
                                        >
                                            {item.label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
