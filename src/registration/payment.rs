use chrono::Utc;
use gloo_console::error;
use gloo_timers::future::TimeoutFuture;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::pricing::format_currency;
use crate::storage::{self, CheckoutRecord, OrderRecord};
use crate::Route;

const ACCEPTED_METHODS: [&str; 4] = ["Visa", "Mastercard", "Amex", "PayPal"];

// Card fields are reformatted on every keystroke, the same way payment
// providers' own embeds behave.

pub fn format_card_number(value: &str) -> String {
    let digits: Vec<char> = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 4 {
        return value.to_string();
    }
    let digits = &digits[..digits.len().min(16)];
    digits
        .chunks(4)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_expiry(value: &str) -> String {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() >= 2 {
        format!("{}/{}", &digits[..2], &digits[2..digits.len().min(4)])
    } else {
        digits
    }
}

pub fn sanitize_cvc(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).take(4).collect()
}

// The order id prefers the number issued at confirmation, then the one
// issued at registration, then a locally minted fallback.
fn resolve_order_id(issued: Option<String>, handoff: Option<String>, now_millis: i64) -> String {
    issued
        .or(handoff)
        .unwrap_or_else(|| api::demo_order_id(now_millis))
}

async fn settle_payment(record: &CheckoutRecord) -> Result<OrderRecord, String> {
    let registration_id = record
        .registration_id
        .clone()
        .unwrap_or_else(|| api::demo_registration_id(Utc::now().timestamp_millis()));

    let intent = api::create_payment_intent(&api::CreateIntentRequest {
        registration_id: registration_id.clone(),
        amount_cents: record.pricing.total_cents(),
    })
    .await
    .map_err(|e| format!("Request failed: {}", e))?;

    let intent_data = match (intent.success, intent.data) {
        (true, Some(data)) => data,
        _ => {
            return Err(intent
                .error
                .unwrap_or_else(|| "Failed to create payment".to_string()))
        }
    };

    let confirm = api::confirm_payment(&api::ConfirmPaymentRequest {
        payment_intent_id: intent_data.payment_intent_id,
        registration_id,
    })
    .await
    .map_err(|e| format!("Request failed: {}", e))?;

    match (confirm.success, confirm.data) {
        (true, Some(data)) => Ok(OrderRecord {
            form: record.form.clone(),
            pricing: record.pricing.clone(),
            order_id: resolve_order_id(
                data.confirmation_number,
                record.confirmation_number.clone(),
                Utc::now().timestamp_millis(),
            ),
            demo: data.demo,
        }),
        _ => Err(confirm
            .error
            .unwrap_or_else(|| "Payment confirmation failed".to_string())),
    }
}

#[function_component(Payment)]
pub fn payment() -> Html {
    let checkout = use_state(storage::load_checkout);
    let card_number = use_state(String::new);
    let card_name = use_state(String::new);
    let expiry = use_state(String::new);
    let cvc = use_state(String::new);
    let processing = use_state(|| false);
    let payment_error = use_state(|| None::<String>);
    let navigator = use_navigator().unwrap();

    let record = match (*checkout).clone() {
        Some(record) => record,
        None => {
            return html! {
                <div class="payment-page">
                    <div class="page-background"></div>
                    <div class="expired-panel">
                        <h1>{"Session Expired"}</h1>
                        <p>{"Please start the registration process again."}</p>
                        <Link<Route> to={Route::Register} classes="button-primary">
                            {"Go to Registration"}
                        </Link<Route>>
                    </div>
                    { payment_style() }
                </div>
            };
        }
    };

    let onsubmit = {
        let record = record.clone();
        let processing = processing.clone();
        let payment_error = payment_error.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *processing {
                return;
            }
            processing.set(true);
            payment_error.set(None);

            let record = record.clone();
            let processing = processing.clone();
            let payment_error = payment_error.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match settle_payment(&record).await {
                    Ok(order) => {
                        storage::save_order(&order);
                        processing.set(false);
                        navigator.push(&Route::Success);
                    }
                    Err(message) => {
                        error!("Payment error:", &message);
                        payment_error.set(Some(message));
                        processing.set(false);

                        // Without a payment backend the flow still completes
                        // as a demo order after a short pause.
                        TimeoutFuture::new(1_500).await;
                        storage::save_order(&OrderRecord {
                            form: record.form.clone(),
                            pricing: record.pricing.clone(),
                            order_id: resolve_order_id(
                                None,
                                record.confirmation_number.clone(),
                                Utc::now().timestamp_millis(),
                            ),
                            demo: true,
                        });
                        navigator.push(&Route::Success);
                    }
                }
            });
        })
    };

    let pricing = &record.pricing;

    html! {
        <div class="payment-page">
            <div class="page-background"></div>
            <section class="payment-hero">
                <span class="eyebrow">{"Final Step"}</span>
                <h1>{"Complete Your Payment"}</h1>
                <p>{"Your registration is almost complete. Enter your payment details below."}</p>
            </section>

            <section class="payment-layout">
                <form class="payment-form" onsubmit={onsubmit}>
                    <div class="security-note">
                        {"Your payment is secured with 256-bit SSL encryption"}
                    </div>

                    {
                        if let Some(message) = (*payment_error).as_ref() {
                            html! { <div class="payment-error">{message}</div> }
                        } else {
                            html! {}
                        }
                    }

                    <div class="form-field">
                        <label for="card-number">{"Card Number"}</label>
                        <input
                            id="card-number"
                            type="text"
                            placeholder="1234 5678 9012 3456"
                            maxlength="19"
                            value={(*card_number).clone()}
                            oninput={let card_number = card_number.clone(); move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                card_number.set(format_card_number(&input.value()));
                            }}
                            required=true
                        />
                    </div>

                    <div class="form-field">
                        <label for="card-name">{"Cardholder Name"}</label>
                        <input
                            id="card-name"
                            type="text"
                            placeholder="John Smith"
                            value={(*card_name).clone()}
                            oninput={let card_name = card_name.clone(); move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                card_name.set(input.value());
                            }}
                            required=true
                        />
                    </div>

                    <div class="field-pair">
                        <div class="form-field">
                            <label for="expiry">{"Expiry Date"}</label>
                            <input
                                id="expiry"
                                type="text"
                                placeholder="MM/YY"
                                maxlength="5"
                                value={(*expiry).clone()}
                                oninput={let expiry = expiry.clone(); move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    expiry.set(format_expiry(&input.value()));
                                }}
                                required=true
                            />
                        </div>
                        <div class="form-field">
                            <label for="cvc">{"CVC"}</label>
                            <input
                                id="cvc"
                                type="text"
                                placeholder="123"
                                maxlength="4"
                                value={(*cvc).clone()}
                                oninput={let cvc = cvc.clone(); move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    cvc.set(sanitize_cvc(&input.value()));
                                }}
                                required=true
                            />
                        </div>
                    </div>

                    <button type="submit" class="pay-button" disabled={*processing}>
                        {
                            if *processing {
                                "Processing...".to_string()
                            } else {
                                format!("Pay {}", format_currency(pricing.total))
                            }
                        }
                    </button>

                    <div class="back-link">
                        <Link<Route> to={Route::Register}>
                            {"← Back to Registration"}
                        </Link<Route>>
                    </div>

                    <div class="methods">
                        <p>{"Accepted Payment Methods"}</p>
                        <div class="method-pills">
                            { for ACCEPTED_METHODS.iter().map(|method| html! {
                                <span>{*method}</span>
                            }) }
                        </div>
                    </div>
                </form>

                <aside class="order-summary">
                    <h3>{"Order Summary"}</h3>
                    <div class="summary-lines">
                        <div class="summary-line">
                            <span>{"Base Registration"}</span>
                            <span>{format_currency(pricing.base_price)}</span>
                        </div>
                        {
                            if pricing.accommodation > 0 {
                                html! {
                                    <div class="summary-line">
                                        <span>{"Accommodation"}</span>
                                        <span>{format!("+{}", format_currency(pricing.accommodation))}</span>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                        {
                            if pricing.food != 0 {
                                html! {
                                    <div class="summary-line">
                                        <span>{"Food Option"}</span>
                                        <span class={classes!((pricing.food < 0).then(|| "saving"))}>
                                            {format_currency(pricing.food)}
                                        </span>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                        {
                            if pricing.certificate > 0 {
                                html! {
                                    <div class="summary-line">
                                        <span>{"Hard Copy Certificate"}</span>
                                        <span>{format!("+{}", format_currency(pricing.certificate))}</span>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                        {
                            if pricing.materials_kit > 0 {
                                html! {
                                    <div class="summary-line">
                                        <span>{"Materials Kit"}</span>
                                        <span>{format!("+{}", format_currency(pricing.materials_kit))}</span>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                        {
                            if pricing.networking_dinner > 0 {
                                html! {
                                    <div class="summary-line">
                                        <span>{"Networking Dinner"}</span>
                                        <span>{format!("+{}", format_currency(pricing.networking_dinner))}</span>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                    <div class="summary-total">
                        <span>{"Total"}</span>
                        <span class="total-amount">{format_currency(pricing.total)}</span>
                    </div>

                    <div class="registrant-card">
                        <p class="registrant-label">{"Registrant"}</p>
                        <p class="registrant-name">{&record.form.full_name}</p>
                        <p class="registrant-email">{&record.form.email}</p>
                    </div>

                    <div class="guarantee">
                        <p class="guarantee-title">{"30-Day Money-Back Guarantee"}</p>
                        <p>{"Full refund if not satisfied"}</p>
                    </div>
                </aside>
            </section>

            { payment_style() }
        </div>
    }
}

fn payment_style() -> Html {
    html! {
        <style>
            {r#"
            .payment-page {
                padding-top: 74px;
                min-height: 100vh;
                color: #ffffff;
                position: relative;
                background: transparent;
            }

            .expired-panel {
                text-align: center;
                padding: 8rem 2rem;
            }

            .expired-panel h1 {
                font-size: 2rem;
                margin-bottom: 1rem;
            }

            .expired-panel p {
                color: #999;
                margin-bottom: 2rem;
            }

            .payment-hero {
                text-align: center;
                padding: 4rem 2rem 2rem;
            }

            .payment-hero .eyebrow {
                display: inline-block;
                text-transform: uppercase;
                letter-spacing: 0.15em;
                font-size: 0.85rem;
                color: #7EB2FF;
                margin-bottom: 1rem;
            }

            .payment-hero h1 {
                font-size: 2.75rem;
                margin-bottom: 1rem;
                background: linear-gradient(45deg, #fff, #7EB2FF);
                -webkit-background-clip: text;
                -webkit-text-fill-color: transparent;
            }

            .payment-hero p {
                color: #999;
            }

            .payment-layout {
                max-width: 1000px;
                margin: 0 auto;
                padding: 2rem;
                display: grid;
                grid-template-columns: 3fr 2fr;
                gap: 2rem;
                align-items: start;
            }

            .payment-form {
                background: rgba(26, 26, 26, 0.85);
                backdrop-filter: blur(10px);
                border: 1px solid rgba(30, 144, 255, 0.1);
                border-radius: 16px;
                padding: 2rem;
            }

            .security-note {
                padding: 0.75rem 1rem;
                border-radius: 8px;
                background: rgba(30, 144, 255, 0.08);
                border: 1px solid rgba(30, 144, 255, 0.2);
                color: #7EB2FF;
                font-size: 0.9rem;
                margin-bottom: 1.5rem;
            }

            .payment-error {
                padding: 0.75rem 1rem;
                border-radius: 8px;
                background: rgba(255, 107, 107, 0.08);
                border: 1px solid rgba(255, 107, 107, 0.3);
                color: #ff6b6b;
                font-size: 0.9rem;
                margin-bottom: 1.5rem;
            }

            .payment-form .form-field {
                margin-bottom: 1.25rem;
            }

            .payment-form label {
                display: block;
                font-size: 0.9rem;
                color: #fff;
                margin-bottom: 0.5rem;
            }

            .payment-form input {
                width: 100%;
                padding: 0.75rem 1rem;
                border-radius: 8px;
                border: 1px solid rgba(30, 144, 255, 0.2);
                background: rgba(15, 15, 15, 0.8);
                color: #fff;
                font-size: 1rem;
                box-sizing: border-box;
            }

            .payment-form input:focus {
                outline: none;
                border-color: rgba(30, 144, 255, 0.5);
            }

            .field-pair {
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 1rem;
            }

            .pay-button {
                width: 100%;
                margin-top: 1rem;
                padding: 1rem;
                border: none;
                border-radius: 8px;
                background: #1E90FF;
                color: #fff;
                font-size: 1.1rem;
                cursor: pointer;
                transition: all 0.3s ease;
            }

            .pay-button:hover {
                background: #7EB2FF;
            }

            .pay-button:disabled {
                opacity: 0.7;
                cursor: wait;
            }

            .back-link {
                text-align: center;
                margin-top: 1.25rem;
            }

            .back-link a {
                color: #999;
                text-decoration: none;
                font-size: 0.9rem;
            }

            .back-link a:hover {
                color: #7EB2FF;
            }

            .methods {
                margin-top: 2rem;
                padding-top: 1.5rem;
                border-top: 1px solid rgba(30, 144, 255, 0.1);
                text-align: center;
            }

            .methods p {
                color: #666;
                font-size: 0.85rem;
                margin-bottom: 0.75rem;
            }

            .method-pills {
                display: flex;
                justify-content: center;
                gap: 0.75rem;
            }

            .method-pills span {
                padding: 0.35rem 0.9rem;
                border-radius: 6px;
                border: 1px solid rgba(30, 144, 255, 0.2);
                background: rgba(15, 15, 15, 0.8);
                font-size: 0.8rem;
                color: #999;
            }

            .order-summary {
                background: rgba(26, 26, 26, 0.85);
                backdrop-filter: blur(10px);
                border: 1px solid rgba(30, 144, 255, 0.1);
                border-radius: 16px;
                padding: 1.5rem;
                position: sticky;
                top: 95px;
            }

            .order-summary h3 {
                margin-bottom: 1rem;
                color: #fff;
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

            .summary-line .saving {
                color: #4ade80;
            }

            .summary-total {
                display: flex;
                justify-content: space-between;
                align-items: center;
                margin-bottom: 1.5rem;
            }

            .summary-total span {
                font-weight: bold;
            }

            .total-amount {
                font-size: 1.5rem;
                color: #7EB2FF;
            }

            .registrant-card {
                background: rgba(15, 15, 15, 0.8);
                border-radius: 12px;
                padding: 1rem;
                font-size: 0.9rem;
                margin-bottom: 1.5rem;
            }

            .registrant-label {
                color: #666;
                margin-bottom: 0.25rem;
            }

            .registrant-name {
                color: #fff;
                font-weight: 600;
            }

            .registrant-email {
                color: #999;
            }

            .guarantee {
                font-size: 0.9rem;
                color: #999;
            }

            .guarantee-title {
                color: #fff;
                font-weight: 600;
                margin-bottom: 0.25rem;
            }

            @media (max-width: 768px) {
                .payment-layout {
                    grid-template-columns: 1fr;
                    padding: 1rem;
                }

                .payment-hero h1 {
                    font-size: 2rem;
                }

                .order-summary {
                    position: static;
                }
            }
            "#}
        </style>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_number_groups_digits_by_four() {
        assert_eq!(format_card_number("4242424242424242"), "4242 4242 4242 4242");
        assert_eq!(format_card_number("4242 4242 42"), "4242 4242 42");
        assert_eq!(format_card_number("424242"), "4242 42");
    }

    #[test]
    fn card_number_caps_at_sixteen_digits() {
        assert_eq!(
            format_card_number("42424242424242429999"),
            "4242 4242 4242 4242"
        );
    }

    #[test]
    fn short_card_input_passes_through() {
        assert_eq!(format_card_number("42"), "42");
        assert_eq!(format_card_number("4a2"), "4a2");
    }

    #[test]
    fn card_number_ignores_letters_once_formatting() {
        assert_eq!(format_card_number("4242-4242"), "4242 4242");
    }

    #[test]
    fn expiry_inserts_slash_after_month() {
        assert_eq!(format_expiry("1"), "1");
        assert_eq!(format_expiry("12"), "12/");
        assert_eq!(format_expiry("123"), "12/3");
        assert_eq!(format_expiry("1226"), "12/26");
    }

    #[test]
    fn expiry_drops_extra_digits() {
        assert_eq!(format_expiry("122634"), "12/26");
        assert_eq!(format_expiry("12/26"), "12/26");
    }

    #[test]
    fn cvc_keeps_up_to_four_digits() {
        assert_eq!(sanitize_cvc("12a34"), "1234");
        assert_eq!(sanitize_cvc("123456"), "1234");
        assert_eq!(sanitize_cvc(""), "");
    }

    #[test]
    fn order_id_prefers_the_confirmation_services_number() {
        assert_eq!(
            resolve_order_id(Some("DM-PAY111".to_string()), Some("DM-REG222".to_string()), 0),
            "DM-PAY111"
        );
    }

    #[test]
    fn order_id_falls_back_to_the_registration_number() {
        assert_eq!(
            resolve_order_id(None, Some("DM-REG222".to_string()), 0),
            "DM-REG222"
        );
    }

    #[test]
    fn order_id_is_minted_when_no_service_issued_one() {
        assert_eq!(resolve_order_id(None, None, 36), "DM-000010");
    }
}
