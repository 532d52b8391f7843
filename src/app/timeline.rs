use leptos::{html, prelude::*};

use super::{
    icons::{Icon, IconKind},
    reveal::use_scroll_reveal,
};
use crate::{
    content::{EntryKind, TimelineEntry, TIMELINE},
    nav::anchors,
    reveal::{rise, timeline_items, timeline_line, ENTER_ZONE, TIMELINE_ZONE},
};

#[component]
pub fn Timeline() -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    let timeline_ref = NodeRef::<html::Div>::new();
    let header = use_scroll_reveal(section_ref, ENTER_ZONE, rise(50.0), 1);
    let line = use_scroll_reveal(timeline_ref, TIMELINE_ZONE, timeline_line(), 1);
    let items = use_scroll_reveal(timeline_ref, TIMELINE_ZONE, timeline_items(), TIMELINE.len());

    view! {
        <section id=anchors::TIMELINE class="section-padding">
            <div node_ref=section_ref class="container-width">
                <div class="text-center mb-20" style=header.style(0)>
                    <h2 class="text-4xl sm:text-5xl font-bold text-gray-900 dark:text-white mb-6">
                        "My " <span class="gradient-text">"Journey"</span>
                    </h2>
                    <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">
                        "A timeline of my education and professional experience"
                    </p>
                </div>

                <div node_ref=timeline_ref class="relative max-w-4xl mx-auto">
                    <div class="absolute left-1/2 -translate-x-1/2 w-1 h-full">
                        <div
                            class="w-full h-full bg-gradient-to-b from-purple-500 to-pink-500 rounded-full"
                            style=line.style(0)
                        ></div>
                    </div>

                    <div class="space-y-12">
                        {TIMELINE
                            .iter()
                            .enumerate()
                            .map(|(i, entry)| {
                                view! {
                                    <div class="relative" style=items.style(i)>
                                        <TimelineCard entry=entry.clone() index=i />
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn TimelineCard(entry: TimelineEntry, index: usize) -> impl IntoView {
    let (justify, pad) = if index % 2 == 0 {
        ("justify-start", "pr-8")
    } else {
        ("justify-end", "pl-8")
    };
    let (badge, dot, icon) = match entry.kind {
        EntryKind::Education => (
            "bg-blue-100 dark:bg-blue-900/30 text-blue-600 dark:text-blue-400",
            "bg-blue-500",
            IconKind::GraduationCap,
        ),
        EntryKind::Work => (
            "bg-green-100 dark:bg-green-900/30 text-green-600 dark:text-green-400",
            "bg-green-500",
            IconKind::Briefcase,
        ),
    };

    view! {
        <div class=format!("flex items-center {justify}")>
            <div class=format!("w-full max-w-md {pad}")>
                <div class="bg-white dark:bg-gray-800 p-6 rounded-2xl shadow-lg hover:shadow-xl transition-shadow duration-300 border border-gray-100 dark:border-gray-700">
                    <div class="flex items-center mb-3">
                        <div class=format!("p-2 rounded-lg mr-3 {badge}")>
                            <Icon kind=icon />
                        </div>
                        <span class="text-sm font-medium text-purple-600 dark:text-purple-400">
                            {entry.period}
                        </span>
                    </div>
                    <h3 class="text-xl font-bold text-gray-900 dark:text-white mb-1">
                        {entry.title}
                    </h3>
                    <h4 class="text-lg font-medium text-gray-700 dark:text-gray-300 mb-2">
                        {entry.institution}
                    </h4>
                    <p class="text-sm text-gray-500 dark:text-gray-400 mb-3">
                        "📍 " {entry.location}
                    </p>
                    <p class="text-gray-600 dark:text-gray-400 leading-relaxed">
                        {entry.description}
                    </p>
                </div>
            </div>
        </div>

        <div class="absolute left-1/2 top-0 -translate-x-1/2 -translate-y-1/2">
            <div class=format!(
                "w-4 h-4 rounded-full {dot} border-4 border-white dark:border-gray-900 shadow-lg",
            )></div>
        </div>
    }
}
