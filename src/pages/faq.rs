use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::{HtmlInputElement, MouseEvent};

use crate::Route;

pub struct FaqEntry {
    pub category: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_CATEGORIES: [(&str, &str); 5] = [
    ("registration", "Registration"),
    ("payment", "Payment"),
    ("technical", "Technical"),
    ("certificates", "Certificates"),
    ("refunds", "Refunds"),
];

pub const FAQS: [FaqEntry; 17] = [
    FaqEntry {
        category: "registration",
        question: "How do I register for the training session?",
        answer: "Simply click the \"Register Now\" button on any page and complete the 4-step registration form. You'll receive a confirmation email with your access details immediately after successful payment.",
    },
    FaqEntry {
        category: "registration",
        question: "Can I register multiple attendees from my practice?",
        answer: "Yes! We offer group discounts for 3 or more registrations from the same institution. Contact us at groups@ltdentalacademy.com for special pricing.",
    },
    FaqEntry {
        category: "registration",
        question: "Is early bird pricing available?",
        answer: "Yes, we offer 20% off for registrations made 30 or more days before the event. The discount is automatically applied at checkout.",
    },
    FaqEntry {
        category: "registration",
        question: "Can I change my registration details after signing up?",
        answer: "Yes, you can update your registration details up to 48 hours before the event by logging into your account or contacting our support team.",
    },
    FaqEntry {
        category: "payment",
        question: "What payment methods do you accept?",
        answer: "We accept all major credit cards (Visa, Mastercard, American Express), PayPal, and bank transfers. For institutional purchases, we can also provide invoicing options.",
    },
    FaqEntry {
        category: "payment",
        question: "Is the payment secure?",
        answer: "Absolutely. We use Stripe for payment processing, which is PCI DSS Level 1 certified, the highest level of payment security. Your card details are never stored on our servers.",
    },
    FaqEntry {
        category: "payment",
        question: "Can I pay in installments?",
        answer: "We currently don't offer installment plans. However, we recommend using a credit card that offers payment flexibility if needed.",
    },
    FaqEntry {
        category: "technical",
        question: "Where is the training session held?",
        answer: "This is a live, in-person 12-hour training session. The venue details and full address will be shared via email after your registration is confirmed.",
    },
    FaqEntry {
        category: "technical",
        question: "What should I bring to the training session?",
        answer: "Please bring a notebook for taking notes, your professional ID or registration confirmation, and any questions you have for our expert speakers. All training materials will be provided at the venue.",
    },
    FaqEntry {
        category: "technical",
        question: "Can I watch on multiple devices?",
        answer: "Your registration allows access from one device at a time. If you need to switch devices during the event, simply log in from the new device.",
    },
    FaqEntry {
        category: "technical",
        question: "What if I experience technical difficulties during the event?",
        answer: "Our tech support team will be available throughout the event via live chat. We also provide a technical support hotline number in your confirmation email.",
    },
    FaqEntry {
        category: "certificates",
        question: "Will I receive a certificate of completion?",
        answer: "Yes! All attendees who complete the full 12-hour session receive a digital certificate. You can also opt for a printed, framed certificate for an additional $25.",
    },
    FaqEntry {
        category: "certificates",
        question: "How many CE credits does this course provide?",
        answer: "This masterclass is approved for up to 12 CE credits. Credits are recognized by ADA CERP, AGD PACE, and most state dental boards.",
    },
    FaqEntry {
        category: "certificates",
        question: "When will I receive my certificate?",
        answer: "Digital certificates are emailed within 48 hours of event completion. Printed certificates are shipped within 7-10 business days.",
    },
    FaqEntry {
        category: "refunds",
        question: "What is your refund policy?",
        answer: "We offer a full refund if you cancel 14 or more days before the event. Cancellations within 14 days receive a 50% refund or full credit toward a future event.",
    },
    FaqEntry {
        category: "refunds",
        question: "What if the event is cancelled?",
        answer: "In the unlikely event of cancellation, all registrants will receive a full refund within 5-7 business days.",
    },
    FaqEntry {
        category: "refunds",
        question: "Can I transfer my registration to someone else?",
        answer: "Yes, registration transfers are allowed up to 48 hours before the event at no additional charge. Contact our support team to process the transfer.",
    },
];

// A live search looks across every category; otherwise only the active
// category's entries are shown.
pub fn visible_faqs(active_category: &str, search: &str) -> Vec<&'static FaqEntry> {
    let needle = search.trim().to_lowercase();
    FAQS.iter()
        .filter(|faq| {
            if needle.is_empty() {
                faq.category == active_category
            } else {
                faq.question.to_lowercase().contains(&needle)
                    || faq.answer.to_lowercase().contains(&needle)
            }
        })
        .collect()
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    answer: String,
    is_open: bool,
    on_toggle: Callback<MouseEvent>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button class="faq-question" onclick={props.on_toggle.clone()}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{&props.answer}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let active_category = use_state(|| "registration".to_string());
    let open_index = use_state(|| Some(0usize));
    let search_query = use_state(String::new);

    let on_search = {
        let search_query = search_query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search_query.set(input.value());
        })
    };

    let clear_search = {
        let search_query = search_query.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            search_query.set(String::new());
        })
    };

    let visible = visible_faqs(&active_category, &search_query);
    let searching = !search_query.trim().is_empty();

    html! {
        <div class="faq-page">
            <div class="page-background"></div>
            <section class="faq-hero">
                <span class="eyebrow">{"Help Center"}</span>
                <h1>{"Frequently Asked Questions"}</h1>
                <p>{"Find answers to common questions about registration, payment, technical requirements, and more."}</p>
                <div class="faq-search">
                    <input
                        type="text"
                        placeholder="Search for answers..."
                        value={(*search_query).clone()}
                        oninput={on_search}
                    />
                </div>
            </section>

            <section class="faq-section">
                {
                    if !searching {
                        html! {
                            <div class="category-tabs">
                                {
                                    for FAQ_CATEGORIES.iter().map(|(id, name)| {
                                        let onclick = {
                                            let active_category = active_category.clone();
                                            let open_index = open_index.clone();
                                            let id = id.to_string();
                                            Callback::from(move |e: MouseEvent| {
                                                e.prevent_default();
                                                active_category.set(id.clone());
                                                open_index.set(Some(0));
                                            })
                                        };
                                        html! {
                                            <button
                                                class={classes!("category-tab", (*active_category == *id).then(|| "active"))}
                                                {onclick}
                                            >
                                                {*name}
                                            </button>
                                        }
                                    })
                                }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if visible.is_empty() {
                        html! {
                            <div class="no-results">
                                <p>{format!("No results found for \"{}\"", *search_query)}</p>
                                <button class="clear-search" onclick={clear_search}>{"Clear search"}</button>
                            </div>
                        }
                    } else {
                        html! {
                            <div class="faq-list">
                                {
                                    for visible.iter().enumerate().map(|(index, faq)| {
                                        let on_toggle = {
                                            let open_index = open_index.clone();
                                            Callback::from(move |e: MouseEvent| {
                                                e.prevent_default();
                                                open_index.set(if *open_index == Some(index) {
                                                    None
                                                } else {
                                                    Some(index)
                                                });
                                            })
                                        };
                                        html! {
                                            <FaqItem
                                                question={faq.question.to_string()}
                                                answer={faq.answer.to_string()}
                                                is_open={*open_index == Some(index)}
                                                on_toggle={on_toggle}
                                            />
                                        }
                                    })
                                }
                            </div>
                        }
                    }
                }
            </section>

            <section class="faq-cta">
                <h2>{"Still Have Questions?"}</h2>
                <p>{"Can't find what you're looking for? Our team is here to help."}</p>
                <Link<Route> to={Route::Contact} classes="button-primary">
                    {"Contact Support"}
                </Link<Route>>
            </section>

            <style>
                {r#"
                .faq-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                    position: relative;
                    background: transparent;
                }

                .faq-hero {
                    text-align: center;
                    padding: 5rem 2rem 3rem;
                }

                .faq-hero .eyebrow {
                    display: inline-block;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    font-size: 0.85rem;
                    color: #7EB2FF;
                    margin-bottom: 1rem;
                }

                .faq-hero h1 {
                    font-size: 3.5rem;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .faq-hero p {
                    font-size: 1.2rem;
                    color: #999;
                    max-width: 600px;
                    margin: 0 auto 2rem;
                }

                .faq-search input {
                    width: 100%;
                    max-width: 560px;
                    padding: 1rem 1.5rem;
                    border-radius: 12px;
                    border: 1px solid rgba(30, 144, 255, 0.2);
                    background: rgba(26, 26, 26, 0.85);
                    color: #fff;
                    font-size: 1rem;
                }

                .faq-search input:focus {
                    outline: none;
                    border-color: rgba(30, 144, 255, 0.5);
                }

                .faq-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 2rem;
                }

                .category-tabs {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    justify-content: center;
                    margin-bottom: 2rem;
                }

                .category-tab {
                    padding: 0.5rem 1.25rem;
                    border-radius: 999px;
                    border: 1px solid rgba(30, 144, 255, 0.2);
                    background: rgba(26, 26, 26, 0.85);
                    color: #999;
                    font-size: 0.9rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .category-tab:hover {
                    border-color: rgba(30, 144, 255, 0.4);
                    color: #fff;
                }

                .category-tab.active {
                    background: #1E90FF;
                    border-color: #1E90FF;
                    color: #fff;
                }

                .faq-item {
                    background: rgba(26, 26, 26, 0.85);
                    backdrop-filter: blur(10px);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    transition: all 0.3s ease;
                }

                .faq-item:hover {
                    border-color: rgba(30, 144, 255, 0.3);
                }

                .faq-question {
                    width: 100%;
                    padding: 1.5rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    transition: all 0.3s ease;
                }

                .faq-question:hover {
                    color: #7EB2FF;
                }

                .toggle-icon {
                    font-size: 1.5rem;
                    color: #7EB2FF;
                    transition: transform 0.3s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.5s ease;
                    padding: 0 1.5rem;
                }

                .faq-item.open .faq-answer {
                    max-height: 600px;
                    padding: 0 1.5rem 1.5rem;
                }

                .faq-answer p {
                    color: #999;
                    line-height: 1.6;
                    margin-bottom: 1rem;
                }

                .no-results {
                    text-align: center;
                    padding: 3rem 0;
                }

                .no-results p {
                    color: #999;
                    margin-bottom: 1rem;
                }

                .clear-search {
                    background: none;
                    border: none;
                    color: #1E90FF;
                    font-size: 1rem;
                    cursor: pointer;
                }

                .clear-search:hover {
                    color: #7EB2FF;
                }

                .faq-cta {
                    text-align: center;
                    padding: 4rem 2rem 6rem;
                }

                .faq-cta h2 {
                    font-size: 2rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .faq-cta p {
                    color: #999;
                    margin-bottom: 2rem;
                }

                @media (max-width: 768px) {
                    .faq-hero {
                        padding: 4rem 1rem 2rem;
                    }

                    .faq-hero h1 {
                        font-size: 2.5rem;
                    }

                    .faq-section {
                        padding: 1rem;
                    }

                    .faq-question {
                        font-size: 1rem;
                        padding: 1rem;
                    }

                    .faq-answer {
                        padding: 0 1rem;
                    }

                    .faq-item.open .faq-answer {
                        padding: 0 1rem 1rem;
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

    #[test]
    fn default_category_lists_registration_entries() {
        let visible = visible_faqs("registration", "");
        assert_eq!(visible.len(), 4);
        assert!(visible.iter().all(|faq| faq.category == "registration"));
    }

    #[test]
    fn every_category_has_entries() {
        for (id, _) in FAQ_CATEGORIES {
            assert!(!visible_faqs(id, "").is_empty(), "empty category {}", id);
        }
        let total: usize = FAQ_CATEGORIES
            .iter()
            .map(|(id, _)| visible_faqs(id, "").len())
            .sum();
        assert_eq!(total, FAQS.len());
    }

    #[test]
    fn search_spans_all_categories() {
        let visible = visible_faqs("registration", "refund");
        assert!(visible.iter().any(|faq| faq.category == "refunds"));
        // Matches inside answers count too.
        let visible = visible_faqs("registration", "stripe");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].category, "payment");
    }

    #[test]
    fn search_is_case_insensitive() {
        assert_eq!(
            visible_faqs("registration", "CE CREDITS").len(),
            visible_faqs("registration", "ce credits").len()
        );
    }

    #[test]
    fn unmatched_search_yields_nothing() {
        assert!(visible_faqs("registration", "orthodontic lasers").is_empty());
    }
}
