use std::collections::HashMap;

use gloo_console::error;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::data;
use crate::models::{
    AccommodationType, CertificateType, FoodPreference, Profession, RegistrationForm,
};
use crate::pricing::{
    accommodation_price, calculate_pricing, certificate_price, format_currency,
    MATERIALS_KIT_PRICE, NETWORKING_DINNER_PRICE,
};
use crate::registration::steps::{validate_step, Step};
use crate::storage::{self, CheckoutRecord};
use crate::Route;

// Every edit is mirrored into the saved draft so a page refresh keeps
// the attendee's progress.
fn apply(form: &UseStateHandle<RegistrationForm>, next: RegistrationForm) {
    storage::save_draft(&next);
    form.set(next);
}

#[function_component(Register)]
pub fn register() -> Html {
    let step = use_state(|| Step::PersonalInfo);
    let form = use_state(|| storage::load_draft().unwrap_or_default());
    let errors = use_state(HashMap::<&'static str, String>::new);
    let event = use_state(data::mock_event);
    let navigator = use_navigator().unwrap();

    {
        let event = event.clone();
        use_effect_with_deps(
            move |_| {
                wasm_bindgen_futures::spawn_local(async move {
                    match api::fetch_upcoming_event().await {
                        Ok(envelope) => {
                            if envelope.success {
                                if let Some(fetched) = envelope.data {
                                    event.set(fetched);
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

    let breakdown = calculate_pricing(&form, event.base_price);

    let on_next = {
        let step = step.clone();
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let found = validate_step(*step, &form);
            if found.is_empty() {
                errors.set(HashMap::new());
                step.set(step.next());
            } else {
                errors.set(found);
            }
        })
    };

    let on_back = {
        let step = step.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            step.set(step.back());
        })
    };

    let onsubmit = {
        let step = step.clone();
        let form = form.clone();
        let errors = errors.clone();
        let breakdown = breakdown.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !step.is_last() {
                return;
            }
            let found = validate_step(Step::Review, &form);
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            errors.set(HashMap::new());

            let form_data = (*form).clone();
            let local_pricing = breakdown.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let mut checkout = CheckoutRecord {
                    form: form_data.clone(),
                    pricing: local_pricing.clone(),
                    registration_id: None,
                    confirmation_number: None,
                };

                // The flow continues into payment even when the service is
                // unreachable, so the record starts as a local fallback.
                let request = api::CreateRegistrationRequest {
                    form: form_data,
                    pricing: local_pricing,
                };
                match api::create_registration(&request).await {
                    Ok(envelope) if envelope.success => {
                        if let Some(data) = envelope.data {
                            if let Some(pricing) = data.pricing {
                                checkout.pricing = pricing;
                            }
                            checkout.registration_id = Some(data.registration_id);
                            checkout.confirmation_number = Some(data.confirmation_number);
                        }
                    }
                    Ok(envelope) => {
                        error!(
                            "Registration rejected:",
                            envelope
                                .error
                                .unwrap_or_else(|| "Registration failed".to_string())
                        );
                    }
                    Err(e) => {
                        error!("Registration request failed:", e.to_string());
                    }
                }

                storage::clear_draft();
                storage::save_checkout(&checkout);
                navigator.push(&Route::Payment);
            });
        })
    };

    let field_error = |field: &str| -> Html {
        match errors.get(field) {
            Some(message) => html! { <p class="field-error">{message}</p> },
            None => html! {},
        }
    };

    let step_body = match *step {
        Step::PersonalInfo => html! {
            <div class="step-fields">
                <div class="form-field">
                    <label for="full-name">{"Full Name *"}</label>
                    <input
                        id="full-name"
                        type="text"
                        placeholder="Dr. John Smith"
                        value={form.full_name.clone()}
                        oninput={let form = form.clone(); move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            let mut next = (*form).clone();
                            next.full_name = input.value();
                            apply(&form, next);
                        }}
                    />
                    {field_error("full_name")}
                </div>

                <div class="form-field">
                    <label for="email">{"Email Address *"}</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="john@clinic.com"
                        value={form.email.clone()}
                        oninput={let form = form.clone(); move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            let mut next = (*form).clone();
                            next.email = input.value();
                            apply(&form, next);
                        }}
                    />
                    {field_error("email")}
                </div>

                <div class="phone-row">
                    <div class="form-field">
                        <label for="country-code">{"Code"}</label>
                        <select
                            id="country-code"
                            onchange={let form = form.clone(); move |e: Event| {
                                let select: HtmlSelectElement = e.target_unchecked_into();
                                let mut next = (*form).clone();
                                next.country_code = select.value();
                                apply(&form, next);
                            }}
                        >
                            { for data::COUNTRY_CODES.iter().map(|(code, country)| html! {
                                <option value={*code} selected={form.country_code == *code}>
                                    {format!("{} ({})", code, country)}
                                </option>
                            }) }
                        </select>
                        {field_error("country_code")}
                    </div>
                    <div class="form-field phone-field">
                        <label for="phone">{"Phone Number *"}</label>
                        <input
                            id="phone"
                            type="tel"
                            placeholder="555-123-4567"
                            value={form.phone.clone()}
                            oninput={let form = form.clone(); move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                let mut next = (*form).clone();
                                next.phone = input.value();
                                apply(&form, next);
                            }}
                        />
                        {field_error("phone")}
                    </div>
                </div>

                <div class="form-field">
                    <label for="country">{"Country *"}</label>
                    <select
                        id="country"
                        onchange={let form = form.clone(); move |e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            let mut next = (*form).clone();
                            next.country = select.value();
                            apply(&form, next);
                        }}
                    >
                        <option value="" selected={form.country.is_empty()}>{"Select a country"}</option>
                        { for data::COUNTRIES.iter().map(|country| html! {
                            <option value={*country} selected={form.country == *country}>
                                {*country}
                            </option>
                        }) }
                    </select>
                    {field_error("country")}
                </div>

                <div class="field-pair">
                    <div class="form-field">
                        <label for="profession">{"Profession *"}</label>
                        <select
                            id="profession"
                            onchange={let form = form.clone(); move |e: Event| {
                                let select: HtmlSelectElement = e.target_unchecked_into();
                                let mut next = (*form).clone();
                                next.profession = Profession::from_value(&select.value());
                                apply(&form, next);
                            }}
                        >
                            { for Profession::ALL.iter().map(|option| html! {
                                <option value={option.as_str()} selected={form.profession == *option}>
                                    {option.label()}
                                </option>
                            }) }
                        </select>
                    </div>
                    <div class="form-field">
                        <label for="experience">{"Years of Experience"}</label>
                        <input
                            id="experience"
                            type="number"
                            min="0"
                            max="60"
                            placeholder="5"
                            value={form.experience_years.to_string()}
                            oninput={let form = form.clone(); move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                let mut next = (*form).clone();
                                next.experience_years = input.value().parse().unwrap_or(0);
                                apply(&form, next);
                            }}
                        />
                        {field_error("experience_years")}
                    </div>
                </div>

                <div class="form-field">
                    <label for="license">{"License Number (optional)"}</label>
                    <input
                        id="license"
                        type="text"
                        placeholder="DDS-12345"
                        value={form.license_number.clone()}
                        oninput={let form = form.clone(); move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            let mut next = (*form).clone();
                            next.license_number = input.value();
                            apply(&form, next);
                        }}
                    />
                </div>
            </div>
        },

        Step::Preferences => html! {
            <div class="step-fields">
                <div class="form-field">
                    <label>{"Accommodation"}</label>
                    <div class="option-stack">
                        { for AccommodationType::ALL.iter().map(|option| {
                            let selected = form.accommodation_type == *option;
                            let price = accommodation_price(*option);
                            let onchange = {
                                let form = form.clone();
                                let option = *option;
                                move |_: Event| {
                                    let mut next = (*form).clone();
                                    next.accommodation_type = option;
                                    apply(&form, next);
                                }
                            };
                            html! {
                                <label class={classes!("option-card", selected.then(|| "selected"))}>
                                    <div class="option-main">
                                        <input
                                            type="radio"
                                            name="accommodation"
                                            value={option.as_str()}
                                            checked={selected}
                                            onchange={onchange}
                                        />
                                        <div>
                                            <p class="option-label">{option.label()}</p>
                                            <p class="option-desc">{option.description()}</p>
                                        </div>
                                    </div>
                                    <span class={classes!("option-price", (price > 0).then(|| "paid"))}>
                                        {
                                            if price > 0 {
                                                format!("+{}", format_currency(price))
                                            } else {
                                                "Included".to_string()
                                            }
                                        }
                                    </span>
                                </label>
                            }
                        }) }
                    </div>
                </div>

                <div class="form-field">
                    <label>{"Food Preference"}</label>
                    <div class="option-grid">
                        { for FoodPreference::ALL.iter().map(|option| {
                            let selected = form.food_preference == *option;
                            let onchange = {
                                let form = form.clone();
                                let option = *option;
                                move |_: Event| {
                                    let mut next = (*form).clone();
                                    next.food_preference = option;
                                    apply(&form, next);
                                }
                            };
                            html! {
                                <label class={classes!("option-card", selected.then(|| "selected"))}>
                                    <div class="option-main">
                                        <input
                                            type="radio"
                                            name="food"
                                            value={option.as_str()}
                                            checked={selected}
                                            onchange={onchange}
                                        />
                                        <span class="option-label">{option.label()}</span>
                                    </div>
                                    <span class={classes!("option-price", (*option == FoodPreference::None).then(|| "saving"))}>
                                        {
                                            if *option == FoodPreference::None {
                                                "-$50".to_string()
                                            } else {
                                                "Included".to_string()
                                            }
                                        }
                                    </span>
                                </label>
                            }
                        }) }
                    </div>
                </div>

                <div class="form-field">
                    <label for="dietary">{"Dietary Restrictions (optional)"}</label>
                    <textarea
                        id="dietary"
                        rows="3"
                        placeholder="Any allergies or special dietary requirements..."
                        value={form.dietary_restrictions.clone()}
                        oninput={let form = form.clone(); move |e: InputEvent| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            let mut next = (*form).clone();
                            next.dietary_restrictions = input.value();
                            apply(&form, next);
                        }}
                    />
                </div>
            </div>
        },

        Step::Extras => html! {
            <div class="step-fields">
                <div class="form-field">
                    <label>{"Certificate Type"}</label>
                    <div class="option-grid">
                        { for CertificateType::ALL.iter().map(|option| {
                            let selected = form.certificate_type == *option;
                            let price = certificate_price(*option);
                            let onchange = {
                                let form = form.clone();
                                let option = *option;
                                move |_: Event| {
                                    let mut next = (*form).clone();
                                    next.certificate_type = option;
                                    apply(&form, next);
                                }
                            };
                            html! {
                                <label class={classes!("option-card", "centered", selected.then(|| "selected"))}>
                                    <input
                                        type="radio"
                                        name="certificate"
                                        class="hidden-radio"
                                        value={option.as_str()}
                                        checked={selected}
                                        onchange={onchange}
                                    />
                                    <p class="option-label">{option.label()}</p>
                                    <p class="option-desc">{option.description()}</p>
                                    <p class={classes!("option-price", (price > 0).then(|| "paid"))}>
                                        {
                                            if price > 0 {
                                                format!("+{}", format_currency(price))
                                            } else {
                                                "Included".to_string()
                                            }
                                        }
                                    </p>
                                </label>
                            }
                        }) }
                    </div>
                </div>

                <div class="form-field">
                    <label>{"Additional Add-ons"}</label>
                    <div class="option-stack">
                        <label class={classes!("option-card", form.materials_kit.then(|| "selected"))}>
                            <div class="option-main">
                                <input
                                    type="checkbox"
                                    checked={form.materials_kit}
                                    onchange={let form = form.clone(); move |_: Event| {
                                        let mut next = (*form).clone();
                                        next.materials_kit = !next.materials_kit;
                                        apply(&form, next);
                                    }}
                                />
                                <div>
                                    <p class="option-label">{"Workshop Materials Kit"}</p>
                                    <p class="option-desc">{"Physical tools and materials kit delivered to you"}</p>
                                </div>
                            </div>
                            <span class="option-price paid">
                                {format!("+{}", format_currency(MATERIALS_KIT_PRICE))}
                            </span>
                        </label>

                        <label class={classes!("option-card", form.networking_dinner.then(|| "selected"))}>
                            <div class="option-main">
                                <input
                                    type="checkbox"
                                    checked={form.networking_dinner}
                                    onchange={let form = form.clone(); move |_: Event| {
                                        let mut next = (*form).clone();
                                        next.networking_dinner = !next.networking_dinner;
                                        apply(&form, next);
                                    }}
                                />
                                <div>
                                    <p class="option-label">{"Networking Dinner"}</p>
                                    <p class="option-desc">{"Exclusive dinner event with speakers"}</p>
                                </div>
                            </div>
                            <span class="option-price paid">
                                {format!("+{}", format_currency(NETWORKING_DINNER_PRICE))}
                            </span>
                        </label>
                    </div>
                </div>

                <div class="form-field">
                    <label for="promo">{"Promo Code (optional)"}</label>
                    <div class="promo-row">
                        <input
                            id="promo"
                            type="text"
                            placeholder="Enter code"
                            value={form.promo_code.clone()}
                            oninput={let form = form.clone(); move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                let mut next = (*form).clone();
                                next.promo_code = input.value();
                                apply(&form, next);
                            }}
                        />
                        <button type="button" class="promo-apply">{"Apply"}</button>
                    </div>
                </div>
            </div>
        },

        Step::Review => html! {
            <div class="step-fields">
                <div class="review-card">
                    <h3>{"Personal Information"}</h3>
                    <div class="review-grid">
                        <div>
                            <p class="review-label">{"Name"}</p>
                            <p class="review-value">{&form.full_name}</p>
                        </div>
                        <div>
                            <p class="review-label">{"Email"}</p>
                            <p class="review-value">{&form.email}</p>
                        </div>
                        <div>
                            <p class="review-label">{"Phone"}</p>
                            <p class="review-value">{format!("{} {}", form.country_code, form.phone)}</p>
                        </div>
                        <div>
                            <p class="review-label">{"Country"}</p>
                            <p class="review-value">{&form.country}</p>
                        </div>
                    </div>
                </div>

                <div class="review-card">
                    <h3>{"Selected Options"}</h3>
                    <div class="review-lines">
                        <div class="review-line">
                            <span>{"Accommodation"}</span>
                            <span>{form.accommodation_type.label()}</span>
                        </div>
                        <div class="review-line">
                            <span>{"Food"}</span>
                            <span>{form.food_preference.label()}</span>
                        </div>
                        <div class="review-line">
                            <span>{"Certificate"}</span>
                            <span>{form.certificate_type.label()}</span>
                        </div>
                        <div class="review-line">
                            <span>{"Materials Kit"}</span>
                            <span>{if form.materials_kit { "Yes" } else { "No" }}</span>
                        </div>
                        <div class="review-line">
                            <span>{"Networking Dinner"}</span>
                            <span>{if form.networking_dinner { "Yes" } else { "No" }}</span>
                        </div>
                    </div>
                </div>

                <label class={classes!("terms-card", errors.contains_key("agreed_to_terms").then(|| "invalid"))}>
                    <input
                        type="checkbox"
                        checked={form.agreed_to_terms}
                        onchange={let form = form.clone(); move |_: Event| {
                            let mut next = (*form).clone();
                            next.agreed_to_terms = !next.agreed_to_terms;
                            apply(&form, next);
                        }}
                    />
                    <div>
                        <p>
                            {"I agree to the "}
                            <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
                            {" and "}
                            <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                        </p>
                        {field_error("agreed_to_terms")}
                    </div>
                </label>
            </div>
        },
    };

    html! {
        <div class="register-page">
            <div class="page-background"></div>
            <section class="register-hero">
                <span class="eyebrow">{format!("Step {} of 4", step.number())}</span>
                <h1>{step.title()}</h1>
                <p>{"Complete the registration process to secure your spot"}</p>
            </section>

            <div class="progress-steps">
                { for Step::ALL.iter().map(|s| {
                    let reached = step.number() >= s.number();
                    let passed = step.number() > s.number();
                    html! {
                        <>
                            <div class={classes!("step-circle", reached.then(|| "reached"))}>
                                {
                                    if passed {
                                        "✓".to_string()
                                    } else {
                                        s.number().to_string()
                                    }
                                }
                            </div>
                            {
                                if !s.is_last() {
                                    html! {
                                        <div class={classes!("step-bar", passed.then(|| "filled"))}></div>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </>
                    }
                }) }
            </div>
            <div class="progress-titles">
                { for Step::ALL.iter().map(|s| html! {
                    <span class={classes!((step.number() >= s.number()).then(|| "reached"))}>
                        {s.title()}
                    </span>
                }) }
            </div>

            <form onsubmit={onsubmit}>
                <div class="register-layout">
                    <div class="step-panel">
                        { step_body }

                        <div class="wizard-nav">
                            <button
                                type="button"
                                class={classes!("nav-back", step.is_first().then(|| "hidden"))}
                                onclick={on_back}
                            >
                                {"← Back"}
                            </button>
                            {
                                if step.is_last() {
                                    html! {
                                        <button type="submit" class="nav-continue">
                                            {"Proceed to Payment"}
                                        </button>
                                    }
                                } else {
                                    html! {
                                        <button type="button" class="nav-continue" onclick={on_next}>
                                            {"Continue →"}
                                        </button>
                                    }
                                }
                            }
                        </div>
                    </div>

                    <aside class="pricing-sidebar">
                        <h3>{"Order Summary"}</h3>
                        <div class="sidebar-event">
                            <p class="sidebar-event-name">{&event.name}</p>
                            <p class="sidebar-event-date">{event.long_date()}</p>
                        </div>
                        <div class="summary-lines">
                            <div class="summary-line">
                                <span>{"Base Registration"}</span>
                                <span>{format_currency(breakdown.base_price)}</span>
                            </div>
                            {
                                if breakdown.accommodation > 0 {
                                    html! {
                                        <div class="summary-line">
                                            <span>{"Accommodation"}</span>
                                            <span>{format!("+{}", format_currency(breakdown.accommodation))}</span>
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                            {
                                if breakdown.food != 0 {
                                    html! {
                                        <div class="summary-line">
                                            <span>{"Food Option"}</span>
                                            <span class={classes!((breakdown.food < 0).then(|| "saving"))}>
                                                {format_currency(breakdown.food)}
                                            </span>
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                            {
                                if breakdown.certificate > 0 {
                                    html! {
                                        <div class="summary-line">
                                            <span>{"Hard Copy Certificate"}</span>
                                            <span>{format!("+{}", format_currency(breakdown.certificate))}</span>
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                            {
                                if breakdown.materials_kit > 0 {
                                    html! {
                                        <div class="summary-line">
                                            <span>{"Materials Kit"}</span>
                                            <span>{format!("+{}", format_currency(breakdown.materials_kit))}</span>
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                            {
                                if breakdown.networking_dinner > 0 {
                                    html! {
                                        <div class="summary-line">
                                            <span>{"Networking Dinner"}</span>
                                            <span>{format!("+{}", format_currency(breakdown.networking_dinner))}</span>
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                            {
                                if breakdown.discount > 0 {
                                    html! {
                                        <div class="summary-line saving">
                                            <span>{"Promo Discount"}</span>
                                            <span>{format!("-{}", format_currency(breakdown.discount))}</span>
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                        <div class="summary-total">
                            <span>{"Total"}</span>
                            <span class="total-amount">{format_currency(breakdown.total)}</span>
                        </div>
                        <div class="event-facts">
                            <p>{format!("{} hours of live training", event.duration_hours)}</p>
                            <p>{format!("{} spots left", event.spots_left())}</p>
                        </div>
                    </aside>
                </div>
            </form>

            <style>
                {r#"
                .register-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                    position: relative;
                    background: transparent;
                }

                .register-hero {
                    text-align: center;
                    padding: 4rem 2rem 2rem;
                }

                .register-hero .eyebrow {
                    display: inline-block;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    font-size: 0.85rem;
                    color: #7EB2FF;
                    margin-bottom: 1rem;
                }

                .register-hero h1 {
                    font-size: 2.75rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .register-hero p {
                    color: #999;
                }

                .progress-steps {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    max-width: 560px;
                    margin: 2rem auto 0;
                    padding: 0 2rem;
                }

                .step-circle {
                    width: 44px;
                    height: 44px;
                    flex-shrink: 0;
                    border-radius: 50%;
                    border: 1px solid rgba(30, 144, 255, 0.2);
                    background: rgba(26, 26, 26, 0.85);
                    color: #666;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 600;
                    transition: all 0.3s ease;
                }

                .step-circle.reached {
                    background: #1E90FF;
                    border-color: #1E90FF;
                    color: #fff;
                }

                .step-bar {
                    flex: 1;
                    height: 3px;
                    margin: 0 0.5rem;
                    border-radius: 2px;
                    background: rgba(30, 144, 255, 0.15);
                    transition: background 0.3s ease;
                }

                .step-bar.filled {
                    background: #1E90FF;
                }

                .progress-titles {
                    display: flex;
                    justify-content: space-between;
                    max-width: 560px;
                    margin: 0.75rem auto 2rem;
                    padding: 0 2rem;
                }

                .progress-titles span {
                    font-size: 0.8rem;
                    color: #666;
                }

                .progress-titles span.reached {
                    color: #7EB2FF;
                }

                .register-layout {
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 0 2rem 4rem;
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 2rem;
                    align-items: start;
                }

                .step-panel {
                    background: rgba(26, 26, 26, 0.85);
                    backdrop-filter: blur(10px);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 16px;
                    padding: 2rem;
                }

                .form-field {
                    margin-bottom: 1.5rem;
                }

                .form-field > label {
                    display: block;
                    font-size: 0.9rem;
                    color: #fff;
                    margin-bottom: 0.5rem;
                }

                .form-field input[type="text"],
                .form-field input[type="email"],
                .form-field input[type="tel"],
                .form-field input[type="number"],
                .form-field select,
                .form-field textarea {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    border-radius: 8px;
                    border: 1px solid rgba(30, 144, 255, 0.2);
                    background: rgba(15, 15, 15, 0.8);
                    color: #fff;
                    font-size: 1rem;
                    font-family: inherit;
                    box-sizing: border-box;
                }

                .form-field input:focus,
                .form-field select:focus,
                .form-field textarea:focus {
                    outline: none;
                    border-color: rgba(30, 144, 255, 0.5);
                }

                .field-error {
                    color: #ff6b6b;
                    font-size: 0.85rem;
                    margin-top: 0.4rem;
                }

                .phone-row {
                    display: grid;
                    grid-template-columns: 1fr 2fr;
                    gap: 1rem;
                }

                .field-pair {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }

                .option-stack {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .option-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 0.75rem;
                }

                .option-card {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding: 1rem;
                    border-radius: 12px;
                    border: 1px solid rgba(30, 144, 255, 0.15);
                    background: rgba(15, 15, 15, 0.6);
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .option-card:hover {
                    border-color: rgba(30, 144, 255, 0.4);
                }

                .option-card.selected {
                    border-color: #1E90FF;
                    background: rgba(30, 144, 255, 0.08);
                }

                .option-card.centered {
                    flex-direction: column;
                    text-align: center;
                    gap: 0.25rem;
                }

                .option-main {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .option-label {
                    color: #fff;
                    font-weight: 500;
                }

                .option-desc {
                    color: #999;
                    font-size: 0.85rem;
                }

                .option-price {
                    color: #666;
                    font-size: 0.9rem;
                    white-space: nowrap;
                }

                .option-price.paid {
                    color: #7EB2FF;
                    font-weight: 600;
                }

                .option-price.saving,
                .summary-line .saving,
                .summary-line.saving {
                    color: #4ade80;
                }

                .hidden-radio {
                    position: absolute;
                    opacity: 0;
                    pointer-events: none;
                }

                .promo-row {
                    display: flex;
                    gap: 0.75rem;
                }

                .promo-row input {
                    flex: 1;
                }

                .promo-apply {
                    padding: 0 1.5rem;
                    border-radius: 8px;
                    border: 1px solid rgba(30, 144, 255, 0.3);
                    background: transparent;
                    color: #7EB2FF;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .promo-apply:hover {
                    border-color: rgba(30, 144, 255, 0.6);
                }

                .review-card {
                    background: rgba(15, 15, 15, 0.6);
                    border-radius: 12px;
                    padding: 1.5rem;
                    margin-bottom: 1.5rem;
                }

                .review-card h3 {
                    color: #fff;
                    margin-bottom: 1rem;
                }

                .review-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                    font-size: 0.9rem;
                }

                .review-label {
                    color: #666;
                    margin-bottom: 0.25rem;
                }

                .review-value {
                    color: #fff;
                    font-weight: 500;
                }

                .review-lines {
                    font-size: 0.9rem;
                }

                .review-line {
                    display: flex;
                    justify-content: space-between;
                    margin-bottom: 0.5rem;
                }

                .review-line span:first-child {
                    color: #999;
                }

                .review-line span:last-child {
                    color: #fff;
                    font-weight: 500;
                }

                .terms-card {
                    display: flex;
                    gap: 0.75rem;
                    align-items: flex-start;
                    padding: 1rem;
                    border-radius: 12px;
                    border: 1px solid rgba(30, 144, 255, 0.15);
                    cursor: pointer;
                }

                .terms-card.invalid {
                    border-color: rgba(255, 107, 107, 0.5);
                }

                .terms-card input {
                    margin-top: 0.2rem;
                }

                .terms-card p {
                    color: #fff;
                    font-size: 0.9rem;
                }

                .terms-card a {
                    color: #1E90FF;
                    text-decoration: none;
                }

                .terms-card a:hover {
                    text-decoration: underline;
                }

                .wizard-nav {
                    display: flex;
                    justify-content: space-between;
                    margin-top: 2rem;
                }

                .nav-back {
                    padding: 0.85rem 1.75rem;
                    border-radius: 8px;
                    border: 1px solid rgba(30, 144, 255, 0.3);
                    background: transparent;
                    color: #7EB2FF;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .nav-back:hover {
                    border-color: rgba(30, 144, 255, 0.6);
                }

                .nav-back.hidden {
                    visibility: hidden;
                }

                .nav-continue {
                    padding: 0.85rem 1.75rem;
                    border-radius: 8px;
                    border: none;
                    background: #1E90FF;
                    color: #fff;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .nav-continue:hover {
                    background: #7EB2FF;
                }

                .pricing-sidebar {
                    background: rgba(26, 26, 26, 0.85);
                    backdrop-filter: blur(10px);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 16px;
                    padding: 1.5rem;
                    position: sticky;
                    top: 95px;
                }

                .pricing-sidebar h3 {
                    margin-bottom: 1rem;
                    color: #fff;
                }

                .sidebar-event {
                    padding-bottom: 1rem;
                    margin-bottom: 1rem;
                    border-bottom: 1px solid rgba(30, 144, 255, 0.1);
                }

                .sidebar-event-name {
                    color: #fff;
                    font-weight: 600;
                    font-size: 0.95rem;
                }

                .sidebar-event-date {
                    color: #999;
                    font-size: 0.85rem;
                    margin-top: 0.25rem;
                }

                .summary-lines {
                    border-bottom: 1px solid rgba(30, 144, 255, 0.1);
                    padding-bottom: 1rem;
                    margin-bottom: 1rem;
                }

                .summary-line {
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.9rem;
                    color: #999;
                    margin-bottom: 0.6rem;
                }

                .summary-total {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 1.25rem;
                }

                .summary-total span {
                    font-weight: bold;
                }

                .total-amount {
                    font-size: 1.5rem;
                    color: #7EB2FF;
                }

                .event-facts p {
                    color: #999;
                    font-size: 0.85rem;
                    margin-bottom: 0.4rem;
                }

                @media (max-width: 768px) {
                    .register-hero h1 {
                        font-size: 2rem;
                    }

                    .register-layout {
                        grid-template-columns: 1fr;
                        padding: 0 1rem 3rem;
                    }

                    .pricing-sidebar {
                        position: static;
                        order: -1;
                    }

                    .option-grid,
                    .field-pair,
                    .phone-row {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
