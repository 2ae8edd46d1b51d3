use gloo_console::error;
use gloo_timers::future::TimeoutFuture;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::data;
use crate::Route;

#[function_component(Speakers)]
pub fn speakers() -> Html {
    let dentists = use_state(data::mock_dentists);
    let event = data::mock_event();

    {
        let dentists = dentists.clone();
        use_effect_with_deps(
            move |_| {
                wasm_bindgen_futures::spawn_local(async move {
                    match api::fetch_dentists().await {
                        Ok(envelope) => {
                            if envelope.success {
                                if let Some(list) = envelope.data.filter(|list| !list.is_empty()) {
                                    dentists.set(list);
                                }
                            }
                        }
                        Err(e) => {
                            error!("Failed to fetch speakers, using bundled data:", e.to_string());
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    // Deep links like /speakers#dr-sarah-mitchell scroll to the profile
    // once the list has rendered.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                if let Ok(hash) = window.location().hash() {
                    let id = hash.trim_start_matches('#').to_string();
                    if !id.is_empty() {
                        wasm_bindgen_futures::spawn_local(async move {
                            TimeoutFuture::new(100).await;
                            if let Some(document) =
                                web_sys::window().and_then(|w| w.document())
                            {
                                if let Some(element) = document.get_element_by_id(&id) {
                                    element.scroll_into_view();
                                }
                            }
                        });
                    }
                }
            }
            || ()
        },
        (),
    );

    html! {
        <div class="speakers-page">
            <div class="page-background"></div>
            <section class="speakers-hero">
                <span class="eyebrow">{"Our Expert Speakers"}</span>
                <h1>{"Meet the World's Top 5 Dentists"}</h1>
                <p>
                    {"Learn from pioneers who have shaped modern dentistry. Each speaker brings \
                      decades of experience and groundbreaking research to our masterclass."}
                </p>
            </section>

            <section class="profiles-section">
                {
                    for dentists.iter().enumerate().map(|(index, dentist)| html! {
                        <article
                            id={dentist.id.clone()}
                            class={classes!("speaker-profile", (index % 2 == 1).then(|| "reverse"))}
                        >
                            <div class="speaker-photo">
                                <img src={dentist.profile_image_url.clone()} alt={dentist.name.clone()} />
                                <div class="photo-badge">
                                    <h2>{&dentist.name}</h2>
                                    <p>{&dentist.credentials}</p>
                                </div>
                                <div class="experience-badge">
                                    <span>{format!("{}+", dentist.years_experience)}</span>
                                    <p>{"Years Exp."}</p>
                                </div>
                            </div>
                            <div class="speaker-details">
                                <span class="specialty-badge">{&dentist.specialty}</span>
                                <p class="institution">{&dentist.institution}</p>
                                <p class="biography">{&dentist.biography}</p>

                                <h4>{"Key Achievements"}</h4>
                                <ul class="achievements">
                                    { for dentist.achievements.iter().map(|achievement| html! {
                                        <li>{achievement}</li>
                                    }) }
                                </ul>

                                <h4>{"Topics in This Masterclass"}</h4>
                                <div class="topic-tags">
                                    { for dentist.topics_covered.iter().map(|topic| html! {
                                        <span class="topic-tag">{topic}</span>
                                    }) }
                                </div>

                                <div class="social-links">
                                    {
                                        if let Some(url) = &dentist.social_links.linkedin {
                                            html! {
                                                <a href={url.clone()} target="_blank" rel="noopener noreferrer">
                                                    {"LinkedIn"}
                                                </a>
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                    {
                                        if let Some(url) = &dentist.social_links.twitter {
                                            html! {
                                                <a href={url.clone()} target="_blank" rel="noopener noreferrer">
                                                    {"Twitter"}
                                                </a>
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                    {
                                        if let Some(url) = &dentist.social_links.research_gate {
                                            html! {
                                                <a href={url.clone()} target="_blank" rel="noopener noreferrer">
                                                    {"ResearchGate"}
                                                </a>
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </div>
                            </div>
                        </article>
                    })
                }
            </section>

            <section class="speakers-cta">
                <h2>{"Learn Directly from These Experts"}</h2>
                <p>
                    {"Don't miss this unique opportunity to learn from 5 world-renowned \
                      dental specialists in one comprehensive masterclass."}
                </p>
                <Link<Route> to={Route::Register} classes="button-primary">
                    {format!("Register for ${}", event.base_price)}
                </Link<Route>>
            </section>

            <style>
                {r#"
                .speakers-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                    position: relative;
                    background: transparent;
                }

                .speakers-hero {
                    text-align: center;
                    padding: 5rem 2rem 3rem;
                }

                .speakers-hero .eyebrow {
                    display: inline-block;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    font-size: 0.85rem;
                    color: #7EB2FF;
                    margin-bottom: 1rem;
                }

                .speakers-hero h1 {
                    font-size: 3.5rem;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .speakers-hero p {
                    font-size: 1.2rem;
                    color: #999;
                    max-width: 640px;
                    margin: 0 auto;
                }

                .profiles-section {
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 2rem;
                }

                .speaker-profile {
                    display: grid;
                    grid-template-columns: 2fr 3fr;
                    gap: 3rem;
                    align-items: start;
                    padding: 3rem 0;
                    border-bottom: 1px solid rgba(30, 144, 255, 0.1);
                    scroll-margin-top: 90px;
                }

                .speaker-profile:last-of-type {
                    border-bottom: none;
                }

                .speaker-profile.reverse {
                    direction: rtl;
                }

                .speaker-profile.reverse > * {
                    direction: ltr;
                }

                .speaker-photo {
                    position: relative;
                }

                .speaker-photo img {
                    width: 100%;
                    aspect-ratio: 4 / 5;
                    object-fit: cover;
                    border-radius: 16px;
                    border: 1px solid rgba(30, 144, 255, 0.2);
                }

                .photo-badge {
                    position: absolute;
                    left: 1rem;
                    right: 1rem;
                    bottom: 1rem;
                    padding: 1rem;
                    border-radius: 12px;
                    background: rgba(15, 15, 15, 0.85);
                    backdrop-filter: blur(10px);
                }

                .photo-badge h2 {
                    font-size: 1.3rem;
                    color: #fff;
                }

                .photo-badge p {
                    color: #999;
                    font-size: 0.9rem;
                }

                .experience-badge {
                    position: absolute;
                    top: 1rem;
                    right: -0.75rem;
                    padding: 0.75rem 1rem;
                    border-radius: 12px;
                    background: #1E90FF;
                    text-align: center;
                }

                .experience-badge span {
                    font-size: 1.3rem;
                    font-weight: bold;
                    color: #fff;
                }

                .experience-badge p {
                    font-size: 0.7rem;
                    color: rgba(255, 255, 255, 0.8);
                }

                .specialty-badge {
                    display: inline-block;
                    padding: 0.5rem 1.25rem;
                    border-radius: 999px;
                    background: rgba(30, 144, 255, 0.1);
                    border: 1px solid rgba(30, 144, 255, 0.3);
                    color: #7EB2FF;
                    font-size: 0.9rem;
                    margin-bottom: 1rem;
                }

                .institution {
                    color: #7EB2FF;
                    margin-bottom: 1rem;
                }

                .biography {
                    color: #999;
                    line-height: 1.7;
                    margin-bottom: 1.5rem;
                }

                .speaker-details h4 {
                    color: #fff;
                    margin-bottom: 0.75rem;
                }

                .achievements {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 1.5rem;
                }

                .achievements li {
                    color: #999;
                    padding-left: 1.25rem;
                    position: relative;
                    margin-bottom: 0.5rem;
                    line-height: 1.5;
                }

                .achievements li::before {
                    content: "";
                    position: absolute;
                    left: 0;
                    top: 0.55em;
                    width: 6px;
                    height: 6px;
                    border-radius: 50%;
                    background: #1E90FF;
                }

                .topic-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-bottom: 1.5rem;
                }

                .topic-tag {
                    font-size: 0.85rem;
                    padding: 0.4rem 0.9rem;
                    border-radius: 8px;
                    border: 1px solid rgba(30, 144, 255, 0.2);
                    background: rgba(26, 26, 26, 0.85);
                    color: #999;
                }

                .social-links {
                    display: flex;
                    gap: 0.75rem;
                }

                .social-links a {
                    padding: 0.4rem 1rem;
                    border-radius: 999px;
                    border: 1px solid rgba(30, 144, 255, 0.2);
                    color: #7EB2FF;
                    font-size: 0.85rem;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }

                .social-links a:hover {
                    border-color: rgba(30, 144, 255, 0.5);
                    color: #fff;
                }

                .speakers-cta {
                    text-align: center;
                    padding: 4rem 2rem 6rem;
                }

                .speakers-cta h2 {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .speakers-cta p {
                    color: #999;
                    max-width: 560px;
                    margin: 0 auto 2rem;
                }

                @media (max-width: 768px) {
                    .speakers-hero {
                        padding: 4rem 1rem 2rem;
                    }

                    .speakers-hero h1 {
                        font-size: 2.5rem;
                    }

                    .speaker-profile,
                    .speaker-profile.reverse {
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                        direction: ltr;
                    }

                    .experience-badge {
                        right: 1rem;
                    }

                    .profiles-section {
                        padding: 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
