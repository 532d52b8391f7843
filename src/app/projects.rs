use leptos::{html, prelude::*};

use super::{
    icons::{Icon, IconKind},
    reveal::{use_scroll_reveal, Reveal},
};
use crate::{
    content::{Project, PROJECTS},
    nav::anchors,
    reveal::{card_lift, image_zoom, overlay_fade, project_cards, rise, Playback, ENTER_ZONE},
};

#[component]
pub fn Projects() -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    let grid_ref = NodeRef::<html::Div>::new();
    let header = use_scroll_reveal(section_ref, ENTER_ZONE, rise(50.0), 1);
    let cards = use_scroll_reveal(grid_ref, ENTER_ZONE, project_cards(), PROJECTS.len());

    view! {
        <section id=anchors::PROJECTS class="section-padding bg-gray-50 dark:bg-gray-800/50">
            <div node_ref=section_ref class="container-width">
                <div class="text-center mb-20" style=header.style(0)>
                    <h2 class="text-4xl sm:text-5xl font-bold text-gray-900 dark:text-white mb-6">
                        "Featured " <span class="gradient-text">"Projects"</span>
                    </h2>
                    <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">
                        "A collection of projects that showcase my skills and passion for creating amazing web experiences"
                    </p>
                </div>

                <div node_ref=grid_ref class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <div style=cards.style(i)>
                                    <ProjectCard project=project.clone() />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectLink(href: String, icon: IconKind, label: String) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            aria-label=label
            class="p-3 bg-white/90 hover:bg-white rounded-full text-gray-800 hover:scale-110 transition-all duration-300"
        >
            <Icon kind=icon />
        </a>
    }
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let (hovered, set_hovered) = signal(None::<bool>);
    let playback = Signal::derive(move || Playback::hover(hovered.get()));
    let card = Reveal::new(card_lift(), 1, playback);
    let image = Reveal::new(image_zoom(), 1, playback);
    let overlay = Reveal::new(overlay_fade(), 1, playback);

    let Project {
        title,
        description,
        image: image_src,
        technologies,
        live_url,
        source_url,
        ..
    } = project;

    view! {
        <div
            class="bg-white dark:bg-gray-800 rounded-2xl shadow-lg hover:shadow-2xl transition-shadow duration-300 overflow-hidden border border-gray-100 dark:border-gray-700"
            style=card.style(0)
            on:mouseenter=move |_| set_hovered(Some(true))
            on:mouseleave=move |_| set_hovered(Some(false))
        >
            <div class="relative overflow-hidden">
                <img
                    src=image_src
                    alt=title.clone()
                    class="w-full h-48 object-cover"
                    style=image.style(0)
                />
                <div
                    class="absolute inset-0 bg-black/40 flex items-center justify-center space-x-4"
                    style=overlay.style(0)
                >
                    {live_url
                        .map(|href| {
                            view! {
                                <ProjectLink
                                    href=href
                                    icon=IconKind::ExternalLink
                                    label=format!("{title} live demo")
                                />
                            }
                        })}
                    {source_url
                        .map(|href| {
                            view! {
                                <ProjectLink
                                    href=href
                                    icon=IconKind::Github
                                    label=format!("{title} source code")
                                />
                            }
                        })}
                </div>
            </div>

            <div class="p-6">
                <h3 class="text-xl font-bold text-gray-900 dark:text-white mb-3">{title.clone()}</h3>
                <p class="text-gray-600 dark:text-gray-400 mb-4 leading-relaxed">{description}</p>
                <div class="flex flex-wrap gap-2">
                    {technologies
                        .into_iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 bg-gradient-to-r from-purple-100 to-pink-100 dark:from-purple-900/30 dark:to-pink-900/30 text-purple-700 dark:text-purple-300 text-sm font-medium rounded-full">
                                    {tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
