use leptos::{html, prelude::*};

use super::reveal::use_scroll_reveal;
use crate::{
    content::PROFILE,
    nav::anchors,
    reveal::{pop, section_content, SECTION_ZONE},
};

#[component]
pub fn About() -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    let skills_ref = NodeRef::<html::Div>::new();
    let content = use_scroll_reveal(section_ref, SECTION_ZONE, section_content(), 3);
    let skills = use_scroll_reveal(skills_ref, SECTION_ZONE, pop(), PROFILE.skills.len());

    view! {
        <section id=anchors::ABOUT class="section-padding bg-gray-50 dark:bg-gray-800/50">
            <div node_ref=section_ref class="container-width">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <div style=content.style(0)>
                        <div class="relative group">
                            <div class="aspect-square rounded-2xl bg-gradient-to-br from-purple-400 to-pink-400 p-1">
                                <div class="w-full h-full rounded-2xl bg-gray-100 dark:bg-gray-900 overflow-hidden">
                                    <img
                                        src=PROFILE.avatar.clone()
                                        alt=format!("{} profile", PROFILE.short_name)
                                        class="w-full h-full object-cover rounded-2xl group-hover:scale-105 transition-transform duration-500"
                                    />
                                </div>
                            </div>
                            <div class="absolute -top-4 -right-4 w-24 h-24 bg-gradient-to-br from-yellow-400 to-orange-400 rounded-full blur-xl opacity-30"></div>
                            <div class="absolute -bottom-4 -left-4 w-32 h-32 bg-gradient-to-br from-blue-400 to-cyan-400 rounded-full blur-xl opacity-30"></div>
                        </div>
                    </div>

                    <div class="space-y-8">
                        <div style=content.style(1)>
                            <h2 class="text-4xl sm:text-5xl font-bold text-gray-900 dark:text-white mb-6">
                                "About " <span class="gradient-text">"Me"</span>
                            </h2>
                            <div class="space-y-4 text-gray-600 dark:text-gray-300 text-lg leading-relaxed">
                                {PROFILE
                                    .about
                                    .iter()
                                    .map(|p| view! { <p>{p.clone()}</p> })
                                    .collect_view()}
                            </div>
                        </div>

                        <div style=content.style(2)>
                            <h3 class="text-2xl font-semibold text-gray-900 dark:text-white mb-6">
                                "Skills & Technologies"
                            </h3>
                            <div node_ref=skills_ref class="grid grid-cols-2 sm:grid-cols-4 gap-3">
                                {PROFILE
                                    .skills
                                    .iter()
                                    .enumerate()
                                    .map(|(i, skill)| {
                                        view! {
                                            <div
                                                class="bg-white dark:bg-gray-700 px-4 py-2 rounded-lg text-center text-sm font-medium text-gray-700 dark:text-gray-300 shadow-sm hover:shadow-md transition-shadow duration-300 border border-gray-200 dark:border-gray-600"
                                                style=skills.style(i)
                                            >
                                                {skill.clone()}
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
