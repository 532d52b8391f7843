use leptos::{either::Either, html, prelude::*};

use super::{
    icons::{Icon, IconKind},
    reveal::use_scroll_reveal,
};
use crate::{
    contact::{ContactForm, Field, SubmitState, SUBMIT_DELAY},
    content::PROFILE,
    nav::anchors,
    reveal::{pop, section_content, ENTER_ZONE},
};

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-white dark:bg-gray-800 border border-gray-300 dark:border-gray-600 rounded-lg focus:ring-2 focus:ring-purple-500 focus:border-transparent text-gray-900 dark:text-white transition-all duration-300";

#[component]
pub fn Contact() -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    let links_ref = NodeRef::<html::Div>::new();
    // header, form, details, footer
    let content = use_scroll_reveal(section_ref, ENTER_ZONE, section_content(), 4);
    let social = use_scroll_reveal(links_ref, ENTER_ZONE, pop(), PROFILE.social.len());
    let form = RwSignal::new(ContactForm::default());

    let value = move |field: Field| move || form.with(|f| f.draft().get(field).to_string());
    let is_sending = move || form.with(ContactForm::is_sending);

    view! {
        <section id=anchors::CONTACT class="section-padding">
            <div node_ref=section_ref class="container-width">
                <div class="text-center mb-20" style=content.style(0)>
                    <h2 class="text-4xl sm:text-5xl font-bold text-gray-900 dark:text-white mb-6">
                        "Let's " <span class="gradient-text">"Connect"</span>
                    </h2>
                    <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">
                        "Have a project in mind or want to collaborate? I'd love to hear from you!"
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-16 items-start">
                    <div style=content.style(1)>
                        <form
                            class="space-y-6"
                            on:submit=move |ev| {
                                ev.prevent_default();
                                let draft = match form.try_update(ContactForm::begin_submit) {
                                    Some(Ok(draft)) => draft,
                                    Some(Err(e)) => {
                                        log::debug!("contact form not sent: {e}");
                                        return;
                                    }
                                    None => return,
                                };
                                set_timeout(
                                    move || {
                                        match serde_json::to_string(&draft) {
                                            Ok(json) => log::info!("contact form submitted: {json}"),
                                            Err(e) => log::warn!("couldn't serialize contact form: {e}"),
                                        }
                                        form.update(|f| f.finish_submit(Ok(())));
                                    },
                                    SUBMIT_DELAY,
                                );
                            }
                        >
                            <div>
                                <label
                                    for="name"
                                    class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2"
                                >
                                    {Field::Name.to_string()}
                                </label>
                                <input
                                    type="text"
                                    id="name"
                                    name="name"
                                    required
                                    class=INPUT_CLASS
                                    placeholder="Your name"
                                    prop:value=value(Field::Name)
                                    on:input=move |ev| {
                                        form.update(|f| f.update(Field::Name, event_target_value(&ev)))
                                    }
                                />
                            </div>
                            <div>
                                <label
                                    for="email"
                                    class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2"
                                >
                                    {Field::Email.to_string()}
                                </label>
                                <input
                                    type="email"
                                    id="email"
                                    name="email"
                                    required
                                    class=INPUT_CLASS
                                    placeholder="your.email@example.com"
                                    prop:value=value(Field::Email)
                                    on:input=move |ev| {
                                        form.update(|f| f.update(Field::Email, event_target_value(&ev)))
                                    }
                                />
                            </div>
                            <div>
                                <label
                                    for="message"
                                    class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2"
                                >
                                    {Field::Message.to_string()}
                                </label>
                                <textarea
                                    id="message"
                                    name="message"
                                    rows="6"
                                    required
                                    class=format!("{INPUT_CLASS} resize-none")
                                    placeholder="Tell me about your project or just say hello!"
                                    prop:value=value(Field::Message)
                                    on:input=move |ev| {
                                        form.update(|f| f.update(Field::Message, event_target_value(&ev)))
                                    }
                                ></textarea>
                            </div>

                            <button
                                type="submit"
                                disabled=is_sending
                                class="w-full btn-primary flex items-center justify-center space-x-2 disabled:opacity-50 disabled:cursor-not-allowed"
                            >
                                {move || {
                                    if is_sending() {
                                        Either::Left(
                                            view! {
                                                <div class="animate-spin rounded-full h-5 w-5 border-b-2 border-white"></div>
                                                <span>"Sending..."</span>
                                            },
                                        )
                                    } else {
                                        Either::Right(
                                            view! {
                                                <Icon kind=IconKind::Send />
                                                <span>"Send Message"</span>
                                            },
                                        )
                                    }
                                }}
                            </button>

                            {move || {
                                form.with(|f| match f.state() {
                                    SubmitState::Sent => {
                                        Some(
                                            view! {
                                                <p
                                                    role="status"
                                                    class="text-center text-green-600 dark:text-green-400 font-medium"
                                                >
                                                    "Message sent successfully!"
                                                </p>
                                            }
                                                .into_any(),
                                        )
                                    }
                                    SubmitState::Failed(reason) => {
                                        let reason = reason.clone();
                                        Some(
                                            view! {
                                                <p
                                                    role="alert"
                                                    class="text-center text-red-600 dark:text-red-400 font-medium"
                                                >
                                                    {reason}
                                                </p>
                                            }
                                                .into_any(),
                                        )
                                    }
                                    SubmitState::Idle | SubmitState::Sending => None,
                                })
                            }}
                        </form>
                    </div>

                    <div class="space-y-8" style=content.style(2)>
                        <div>
                            <h3 class="text-2xl font-semibold text-gray-900 dark:text-white mb-6">
                                "Get in Touch"
                            </h3>
                            <div class="space-y-4 text-gray-600 dark:text-gray-400">
                                <p class="text-lg leading-relaxed">{PROFILE.contact_blurb.clone()}</p>
                                <p>
                                    <strong class="text-gray-900 dark:text-white">"Response time: "</strong>
                                    {PROFILE.response_time.clone()}
                                </p>
                                <p>
                                    <strong class="text-gray-900 dark:text-white">"Location: "</strong>
                                    {PROFILE.location.clone()}
                                </p>
                            </div>
                        </div>

                        <div>
                            <h4 class="text-xl font-semibold text-gray-900 dark:text-white mb-4">
                                "Follow Me"
                            </h4>
                            <div node_ref=links_ref class="flex space-x-4">
                                {PROFILE
                                    .social
                                    .iter()
                                    .enumerate()
                                    .map(|(i, link)| {
                                        view! {
                                            <span class="inline-block" style=social.style(i)>
                                                <a
                                                    href=link.url.clone()
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    aria-label=link.name.clone()
                                                    class="block p-3 bg-gray-100 dark:bg-gray-700 rounded-lg text-gray-600 dark:text-gray-400 hover:text-purple-600 dark:hover:text-purple-400 transition-all duration-300 hover:scale-110 hover:shadow-lg"
                                                >
                                                    <Icon kind=link.icon.into() size=24 />
                                                </a>
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <footer
                class="mt-20 pt-8 border-t border-gray-200 dark:border-gray-700 text-center"
                style=content.style(3)
            >
                <p class="text-gray-600 dark:text-gray-400">
                    {format!("© {} {}. {}", env!("BUILD_YEAR"), PROFILE.name, PROFILE.credit)}
                </p>
            </footer>
        </section>
    }
}
