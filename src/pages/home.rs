use gloo_console::error;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::data;
use crate::pricing::format_currency;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let event = use_state(data::mock_event);

    {
        let event = event.clone();
        use_effect_with_deps(
            move |_| {
                wasm_bindgen_futures::spawn_local(async move {
                    match api::fetch_upcoming_event().await {
                        Ok(envelope) => {
                            if envelope.success {
                                if let Some(info) = envelope.data {
                                    event.set(info);
                                }
                            }
                        }
                        Err(e) => {
                            error!("Failed to fetch event, using bundled data:", e.to_string());
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    let dentists = data::mock_dentists();
    let reviews = data::mock_reviews();
    let speaker_count = dentists.len();

    html! {
        <div class="home-page">
            <div class="page-background"></div>

            <header class="home-hero">
                <span class="eyebrow">{"Continuing Dental Education"}</span>
                <h1>{&event.name}</h1>
                <p class="hero-date">
                    {format!("{} · {} · {}", event.long_date(), event.time, event.platform)}
                </p>
                <p class="hero-capacity">
                    {format!(
                        "{} of {} seats remaining",
                        event.spots_left(),
                        event.max_capacity
                    )}
                </p>
                <p class="hero-description">{&event.description}</p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Register} classes="button-primary">
                        {format!("Register for {}", format_currency(event.base_price))}
                    </Link<Route>>
                    <Link<Route> to={Route::Speakers} classes="hero-secondary">
                        {"Meet the Speakers"}
                    </Link<Route>>
                </div>
            </header>

            <section class="stats-strip">
                <div class="stat">
                    <span class="stat-value">{event.duration_hours}</span>
                    <span class="stat-label">{"Hours of Training"}</span>
                </div>
                <div class="stat">
                    <span class="stat-value">{speaker_count}</span>
                    <span class="stat-label">{"Expert Speakers"}</span>
                </div>
                <div class="stat">
                    <span class="stat-value">{event.max_capacity}</span>
                    <span class="stat-label">{"Seat Capacity"}</span>
                </div>
                <div class="stat">
                    <span class="stat-value">{"12"}</span>
                    <span class="stat-label">{"CE Credits"}</span>
                </div>
            </section>

            <section class="speakers-preview">
                <h2>{"Learn From the Best"}</h2>
                <p class="section-lead">
                    {"Five of the world's leading clinicians share the techniques that \
                      define modern practice."}
                </p>
                <div class="preview-grid">
                    {
                        for dentists.iter().map(|dentist| html! {
                            <Link<Route> to={Route::Speakers} classes="preview-card">
                                <img
                                    src={dentist.profile_image_url.clone()}
                                    alt={dentist.name.clone()}
                                    loading="lazy"
                                />
                                <h3>{&dentist.name}</h3>
                                <p class="preview-credentials">{&dentist.credentials}</p>
                                <p class="preview-specialty">{&dentist.specialty}</p>
                            </Link<Route>>
                        })
                    }
                </div>
            </section>

            <section class="why-attend">
                <h2>{"Why Attend"}</h2>
                <div class="highlight-grid">
                    <div class="highlight-card">
                        <span class="highlight-icon">{"🦷"}</span>
                        <h3>{"Hands-On Masterclasses"}</h3>
                        <p>
                            {"Live demonstrations of implant placement, microsurgical \
                              endodontics and digital smile design."}
                        </p>
                    </div>
                    <div class="highlight-card">
                        <span class="highlight-icon">{"📜"}</span>
                        <h3>{"12 CE Credits"}</h3>
                        <p>
                            {"ADA CERP recognized credits with a verified certificate \
                              delivered after the event."}
                        </p>
                    </div>
                    <div class="highlight-card">
                        <span class="highlight-icon">{"🤝"}</span>
                        <h3>{"Networking Dinner"}</h3>
                        <p>
                            {"An evening with the speakers and colleagues from around \
                              the world."}
                        </p>
                    </div>
                    <div class="highlight-card">
                        <span class="highlight-icon">{"🧰"}</span>
                        <h3>{"Premium Materials Kit"}</h3>
                        <p>
                            {"Curated instruments and materials so you can apply every \
                              technique back in your practice."}
                        </p>
                    </div>
                </div>
            </section>

            <section class="testimonials">
                <h2>{"What Past Attendees Say"}</h2>
                <div class="testimonial-grid">
                    {
                        for reviews.iter().map(|review| html! {
                            <article class="testimonial-card">
                                <div class="testimonial-rating">
                                    {("★").repeat(review.rating as usize)}
                                </div>
                                <p class="testimonial-text">{&review.review_text}</p>
                                <div class="testimonial-attendee">
                                    <img
                                        src={review.attendee_photo_url.clone()}
                                        alt={review.attendee_name.clone()}
                                        loading="lazy"
                                    />
                                    <div>
                                        <p class="attendee-name">
                                            {&review.attendee_name}
                                            {
                                                if review.verified {
                                                    html! {
                                                        <span class="verified-badge">
                                                            {"✓ Verified"}
                                                        </span>
                                                    }
                                                } else {
                                                    html! {}
                                                }
                                            }
                                        </p>
                                        <p class="attendee-credential">
                                            {&review.attendee_credential}
                                        </p>
                                    </div>
                                </div>
                            </article>
                        })
                    }
                </div>
            </section>

            <section class="home-cta">
                <h2>{"Secure Your Seat"}</h2>
                <p>
                    {format!(
                        "Only {} seats left for {}. Registration closes when the room is full.",
                        event.spots_left(),
                        event.long_date()
                    )}
                </p>
                <Link<Route> to={Route::Register} classes="button-primary">
                    {"Register Now"}
                </Link<Route>>
            </section>

            <style>
                {r#"
                .home-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                    position: relative;
                    background: transparent;
                }

                .home-hero {
                    max-width: 900px;
                    margin: 0 auto;
                    padding: 6rem 2rem 4rem;
                    text-align: center;
                    position: relative;
                    z-index: 1;
                }

                .eyebrow {
                    display: inline-block;
                    padding: 0.35rem 1rem;
                    border: 1px solid rgba(30, 144, 255, 0.3);
                    border-radius: 20px;
                    color: #7EB2FF;
                    font-size: 0.85rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    margin-bottom: 1.5rem;
                }

                .home-hero h1 {
                    font-size: 3.5rem;
                    margin: 0 0 1rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hero-date {
                    color: #7EB2FF;
                    font-size: 1.2rem;
                    margin: 0 0 0.5rem;
                }

                .hero-capacity {
                    color: #4ade80;
                    font-size: 1rem;
                    margin: 0 0 1.5rem;
                }

                .hero-description {
                    color: #999;
                    font-size: 1.1rem;
                    line-height: 1.6;
                    max-width: 640px;
                    margin: 0 auto 2.5rem;
                }

                .hero-actions {
                    display: flex;
                    gap: 1.5rem;
                    justify-content: center;
                    align-items: center;
                    flex-wrap: wrap;
                }

                .hero-secondary {
                    color: #7EB2FF;
                    text-decoration: none;
                    font-size: 1rem;
                    border-bottom: 1px solid rgba(126, 178, 255, 0.3);
                    padding-bottom: 2px;
                    transition: border-color 0.3s;
                }

                .hero-secondary:hover {
                    border-color: #7EB2FF;
                }

                .stats-strip {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 0 2rem 4rem;
                    position: relative;
                    z-index: 1;
                }

                .stat {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(30, 144, 255, 0.15);
                    border-radius: 12px;
                    padding: 1.5rem;
                    text-align: center;
                }

                .stat-value {
                    display: block;
                    font-size: 2.2rem;
                    font-weight: 700;
                    color: #1E90FF;
                }

                .stat-label {
                    display: block;
                    color: #999;
                    font-size: 0.9rem;
                    margin-top: 0.5rem;
                }

                .speakers-preview,
                .why-attend,
                .testimonials {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                    position: relative;
                    z-index: 1;
                }

                .speakers-preview h2,
                .why-attend h2,
                .testimonials h2,
                .home-cta h2 {
                    font-size: 2.2rem;
                    text-align: center;
                    margin: 0 0 1rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .section-lead {
                    text-align: center;
                    color: #999;
                    max-width: 600px;
                    margin: 0 auto 3rem;
                    line-height: 1.6;
                }

                .preview-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 1.5rem;
                }

                .preview-card {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(30, 144, 255, 0.15);
                    border-radius: 12px;
                    padding: 1.5rem;
                    text-align: center;
                    text-decoration: none;
                    transition: transform 0.3s, border-color 0.3s;
                    display: block;
                }

                .preview-card:hover {
                    transform: translateY(-4px);
                    border-color: rgba(30, 144, 255, 0.4);
                }

                .preview-card img {
                    width: 96px;
                    height: 96px;
                    border-radius: 50%;
                    object-fit: cover;
                    border: 2px solid rgba(30, 144, 255, 0.3);
                    margin-bottom: 1rem;
                }

                .preview-card h3 {
                    color: #fff;
                    font-size: 1.05rem;
                    margin: 0 0 0.25rem;
                }

                .preview-credentials {
                    color: #7EB2FF;
                    font-size: 0.8rem;
                    margin: 0 0 0.5rem;
                }

                .preview-specialty {
                    color: #999;
                    font-size: 0.85rem;
                    margin: 0;
                }

                .highlight-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(230px, 1fr));
                    gap: 1.5rem;
                    margin-top: 2rem;
                }

                .highlight-card {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(30, 144, 255, 0.15);
                    border-radius: 12px;
                    padding: 2rem;
                }

                .highlight-icon {
                    font-size: 2rem;
                    display: block;
                    margin-bottom: 1rem;
                }

                .highlight-card h3 {
                    color: #fff;
                    font-size: 1.1rem;
                    margin: 0 0 0.75rem;
                }

                .highlight-card p {
                    color: #999;
                    font-size: 0.95rem;
                    line-height: 1.6;
                    margin: 0;
                }

                .testimonial-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 1.5rem;
                    margin-top: 2rem;
                }

                .testimonial-card {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(30, 144, 255, 0.15);
                    border-radius: 12px;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                }

                .testimonial-rating {
                    color: #ffc857;
                    letter-spacing: 0.2em;
                    margin-bottom: 1rem;
                }

                .testimonial-text {
                    color: #ccc;
                    font-style: italic;
                    line-height: 1.6;
                    flex-grow: 1;
                    margin: 0 0 1.5rem;
                }

                .testimonial-attendee {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .testimonial-attendee img {
                    width: 44px;
                    height: 44px;
                    border-radius: 50%;
                    object-fit: cover;
                }

                .attendee-name {
                    color: #fff;
                    font-size: 0.95rem;
                    font-weight: 600;
                    margin: 0;
                }

                .verified-badge {
                    color: #4ade80;
                    font-size: 0.75rem;
                    margin-left: 0.5rem;
                }

                .attendee-credential {
                    color: #999;
                    font-size: 0.8rem;
                    margin: 0.15rem 0 0;
                }

                .home-cta {
                    max-width: 700px;
                    margin: 0 auto;
                    padding: 4rem 2rem 6rem;
                    text-align: center;
                    position: relative;
                    z-index: 1;
                }

                .home-cta p {
                    color: #999;
                    margin: 0 0 2rem;
                    line-height: 1.6;
                }

                @media (max-width: 768px) {
                    .home-hero {
                        padding: 4rem 1.5rem 3rem;
                    }

                    .home-hero h1 {
                        font-size: 2.4rem;
                    }

                    .stats-strip {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .preview-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </div>
    }
}
