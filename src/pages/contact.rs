use std::collections::HashMap;

use gloo_timers::future::TimeoutFuture;
use log::info;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, MouseEvent};
use yew::prelude::*;

use crate::models::is_valid_email;

#[derive(Clone, PartialEq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn name_error(&self) -> Option<String> {
        if self.name.trim().chars().count() < 2 {
            Some("Name must be at least 2 characters".to_string())
        } else {
            None
        }
    }

    pub fn email_error(&self) -> Option<String> {
        if is_valid_email(&self.email) {
            None
        } else {
            Some("Please enter a valid email address".to_string())
        }
    }

    pub fn subject_error(&self) -> Option<String> {
        if self.subject.trim().chars().count() < 5 {
            Some("Subject must be at least 5 characters".to_string())
        } else {
            None
        }
    }

    pub fn message_error(&self) -> Option<String> {
        if self.message.trim().chars().count() < 20 {
            Some("Message must be at least 20 characters".to_string())
        } else {
            None
        }
    }

    pub fn validate(&self) -> HashMap<&'static str, String> {
        let mut errors = HashMap::new();
        if let Some(message) = self.name_error() {
            errors.insert("name", message);
        }
        if let Some(message) = self.email_error() {
            errors.insert("email", message);
        }
        if let Some(message) = self.subject_error() {
            errors.insert("subject", message);
        }
        if let Some(message) = self.message_error() {
            errors.insert("message", message);
        }
        errors
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);
    let errors = use_state(HashMap::<&'static str, String>::new);
    let submitting = use_state(|| false);
    let submitted = use_state(|| false);

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let submitted = submitted.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let found = form.validate();
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            errors.set(HashMap::new());
            submitting.set(true);

            let form = form.clone();
            let submitting = submitting.clone();
            let submitted = submitted.clone();
            wasm_bindgen_futures::spawn_local(async move {
                // There is no messaging backend yet; acknowledge after a
                // short delay so the button state reads naturally.
                TimeoutFuture::new(1_500).await;
                info!("Contact message from {} <{}>", form.name, form.email);
                form.set(ContactForm::default());
                submitting.set(false);
                submitted.set(true);
            });
        })
    };

    let reset_submitted = {
        let submitted = submitted.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            submitted.set(false);
        })
    };

    let field_error = |field: &str| -> Html {
        match errors.get(field) {
            Some(message) => html! { <p class="field-error">{message}</p> },
            None => html! {},
        }
    };

    html! {
        <div class="contact-page">
            <div class="page-background"></div>
            <section class="contact-hero">
                <span class="eyebrow">{"Get in Touch"}</span>
                <h1>{"Contact Us"}</h1>
                <p>
                    {"Have questions about the masterclass? We're here to help. \
                      Reach out and our team will get back to you shortly."}
                </p>
            </section>

            <section class="contact-section">
                <div class="contact-grid">
                    <div class="contact-info">
                        <h3>{"Contact Information"}</h3>
                        <a class="info-row" href="mailto:info@dentalmasters.com">
                            <div>
                                <p class="info-label">{"Email"}</p>
                                <p class="info-value">{"info@dentalmasters.com"}</p>
                            </div>
                        </a>
                        <a class="info-row" href="tel:+1-800-DENTIST">
                            <div>
                                <p class="info-label">{"Phone"}</p>
                                <p class="info-value">{"+1-800-DENTIST"}</p>
                            </div>
                        </a>
                        <div class="info-row">
                            <div>
                                <p class="info-label">{"Address"}</p>
                                <p class="info-value">
                                    {"123 Medical Center Drive"}<br/>
                                    {"Boston, MA 02115"}
                                </p>
                            </div>
                        </div>
                        <div class="info-row">
                            <div>
                                <p class="info-label">{"Office Hours"}</p>
                                <p class="info-value">
                                    {"Mon - Fri: 9:00 AM - 6:00 PM EST"}<br/>
                                    {"Sat: 10:00 AM - 2:00 PM EST"}
                                </p>
                            </div>
                        </div>

                        <div class="chat-card">
                            <h4>{"Live Chat"}</h4>
                            <p>{"Need immediate help? Start a live chat with our support team."}</p>
                            <button class="chat-link">{"Start Chat →"}</button>
                        </div>
                    </div>

                    <div class="contact-form-panel">
                        {
                            if *submitted {
                                html! {
                                    <div class="sent-panel">
                                        <div class="sent-check">{"✓"}</div>
                                        <h3>{"Message Sent!"}</h3>
                                        <p>{"Thank you for reaching out. We'll get back to you within 24 hours."}</p>
                                        <button class="send-another" onclick={reset_submitted}>
                                            {"Send another message"}
                                        </button>
                                    </div>
                                }
                            } else {
                                html! {
                                    <>
                                        <h3>{"Send us a Message"}</h3>
                                        <form onsubmit={onsubmit}>
                                            <div class="form-field">
                                                <label for="name">{"Your Name"}</label>
                                                <input
                                                    id="name"
                                                    type="text"
                                                    placeholder="Dr. John Smith"
                                                    value={form.name.clone()}
                                                    oninput={let form = form.clone(); move |e: InputEvent| {
                                                        let input: HtmlInputElement = e.target_unchecked_into();
                                                        let mut next = (*form).clone();
                                                        next.name = input.value();
                                                        form.set(next);
                                                    }}
                                                />
                                                {field_error("name")}
                                            </div>
                                            <div class="form-field">
                                                <label for="email">{"Email Address"}</label>
                                                <input
                                                    id="email"
                                                    type="email"
                                                    placeholder="john@example.com"
                                                    value={form.email.clone()}
                                                    oninput={let form = form.clone(); move |e: InputEvent| {
                                                        let input: HtmlInputElement = e.target_unchecked_into();
                                                        let mut next = (*form).clone();
                                                        next.email = input.value();
                                                        form.set(next);
                                                    }}
                                                />
                                                {field_error("email")}
                                            </div>
                                            <div class="form-field">
                                                <label for="subject">{"Subject"}</label>
                                                <input
                                                    id="subject"
                                                    type="text"
                                                    placeholder="Question about registration"
                                                    value={form.subject.clone()}
                                                    oninput={let form = form.clone(); move |e: InputEvent| {
                                                        let input: HtmlInputElement = e.target_unchecked_into();
                                                        let mut next = (*form).clone();
                                                        next.subject = input.value();
                                                        form.set(next);
                                                    }}
                                                />
                                                {field_error("subject")}
                                            </div>
                                            <div class="form-field">
                                                <label for="message">{"Message"}</label>
                                                <textarea
                                                    id="message"
                                                    rows="5"
                                                    placeholder="How can we help you?"
                                                    value={form.message.clone()}
                                                    oninput={let form = form.clone(); move |e: InputEvent| {
                                                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                                                        let mut next = (*form).clone();
                                                        next.message = input.value();
                                                        form.set(next);
                                                    }}
                                                />
                                                {field_error("message")}
                                            </div>
                                            <button type="submit" class="submit-button" disabled={*submitting}>
                                                {if *submitting { "Sending..." } else { "Send Message" }}
                                            </button>
                                        </form>
                                    </>
                                }
                            }
                        }
                    </div>
                </div>
            </section>

            <section class="map-placeholder">
                <p>{"Interactive map would be displayed here"}</p>
            </section>

            <style>
                {r#"
                .contact-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                    position: relative;
                    background: transparent;
                }

                .contact-hero {
                    text-align: center;
                    padding: 5rem 2rem 3rem;
                }

                .contact-hero .eyebrow {
                    display: inline-block;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    font-size: 0.85rem;
                    color: #7EB2FF;
                    margin-bottom: 1rem;
                }

                .contact-hero h1 {
                    font-size: 3.5rem;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .contact-hero p {
                    font-size: 1.2rem;
                    color: #999;
                    max-width: 600px;
                    margin: 0 auto;
                }

                .contact-section {
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 2rem;
                }

                .contact-grid {
                    display: grid;
                    grid-template-columns: 2fr 3fr;
                    gap: 3rem;
                    align-items: start;
                }

                .contact-info h3,
                .contact-form-panel h3 {
                    font-size: 1.4rem;
                    margin-bottom: 1.5rem;
                    color: #fff;
                }

                .info-row {
                    display: block;
                    margin-bottom: 1.5rem;
                    text-decoration: none;
                }

                .info-label {
                    color: #fff;
                    font-weight: 600;
                    margin-bottom: 0.25rem;
                }

                .info-value {
                    color: #999;
                    line-height: 1.5;
                    transition: color 0.3s ease;
                }

                a.info-row:hover .info-value {
                    color: #7EB2FF;
                }

                .chat-card {
                    background: rgba(30, 144, 255, 0.05);
                    border: 1px solid rgba(30, 144, 255, 0.2);
                    border-radius: 12px;
                    padding: 1.5rem;
                    margin-top: 2rem;
                }

                .chat-card h4 {
                    color: #fff;
                    margin-bottom: 0.75rem;
                }

                .chat-card p {
                    color: #999;
                    font-size: 0.9rem;
                    margin-bottom: 1rem;
                }

                .chat-link {
                    background: none;
                    border: none;
                    color: #1E90FF;
                    font-size: 0.9rem;
                    cursor: pointer;
                    padding: 0;
                }

                .chat-link:hover {
                    color: #7EB2FF;
                }

                .contact-form-panel {
                    background: rgba(26, 26, 26, 0.85);
                    backdrop-filter: blur(10px);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 16px;
                    padding: 2rem;
                }

                .form-field {
                    margin-bottom: 1.25rem;
                }

                .form-field label {
                    display: block;
                    font-size: 0.9rem;
                    color: #fff;
                    margin-bottom: 0.5rem;
                }

                .form-field input,
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
                .form-field textarea:focus {
                    outline: none;
                    border-color: rgba(30, 144, 255, 0.5);
                }

                .field-error {
                    color: #ff6b6b;
                    font-size: 0.85rem;
                    margin-top: 0.4rem;
                }

                .submit-button {
                    width: 100%;
                    padding: 1rem;
                    border: none;
                    border-radius: 8px;
                    background: #1E90FF;
                    color: #fff;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .submit-button:hover {
                    background: #7EB2FF;
                }

                .submit-button:disabled {
                    opacity: 0.7;
                    cursor: wait;
                }

                .sent-panel {
                    text-align: center;
                    padding: 3rem 1rem;
                }

                .sent-check {
                    width: 72px;
                    height: 72px;
                    margin: 0 auto 1.5rem;
                    border-radius: 50%;
                    background: rgba(30, 144, 255, 0.15);
                    color: #7EB2FF;
                    font-size: 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .sent-panel h3 {
                    margin-bottom: 0.75rem;
                }

                .sent-panel p {
                    color: #999;
                    margin-bottom: 1.5rem;
                }

                .send-another {
                    background: none;
                    border: none;
                    color: #1E90FF;
                    font-size: 1rem;
                    cursor: pointer;
                }

                .send-another:hover {
                    color: #7EB2FF;
                }

                .map-placeholder {
                    margin-top: 4rem;
                    padding: 6rem 2rem;
                    text-align: center;
                    border-top: 1px solid rgba(30, 144, 255, 0.1);
                }

                .map-placeholder p {
                    color: #666;
                }

                @media (max-width: 768px) {
                    .contact-hero {
                        padding: 4rem 1rem 2rem;
                    }

                    .contact-hero h1 {
                        font-size: 2.5rem;
                    }

                    .contact-grid {
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }

                    .contact-section {
                        padding: 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Dr. John Smith".to_string(),
            email: "john@example.com".to_string(),
            subject: "Question about registration".to_string(),
            message: "Could you tell me more about the group discount?".to_string(),
        }
    }

    #[test]
    fn complete_form_passes() {
        assert!(filled().validate().is_empty());
    }

    #[test]
    fn short_fields_are_rejected() {
        let form = ContactForm {
            name: "J".to_string(),
            email: "not-an-email".to_string(),
            subject: "Hi".to_string(),
            message: "Too short".to_string(),
        };
        let errors = form.validate();
        assert_eq!(errors.len(), 4);
        assert_eq!(
            errors.get("name").map(String::as_str),
            Some("Name must be at least 2 characters")
        );
        assert_eq!(
            errors.get("message").map(String::as_str),
            Some("Message must be at least 20 characters")
        );
    }

    #[test]
    fn whitespace_does_not_count_toward_length() {
        let mut form = filled();
        form.subject = "  hi  ".to_string();
        assert!(form.subject_error().is_some());
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = ContactForm::default().validate();
        for field in ["name", "email", "subject", "message"] {
            assert!(errors.contains_key(field), "missing error for {}", field);
        }
    }
}
