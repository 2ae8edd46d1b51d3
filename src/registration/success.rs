use yew::prelude::*;
use yew_router::prelude::*;

use crate::data;
use crate::pricing::format_currency;
use crate::storage::{self, OrderRecord};
use crate::Route;

// Orders minted while the payment service was unreachable never charged
// a card; the attendee needs to know that.
fn demo_note(order: &OrderRecord) -> Option<&'static str> {
    order
        .demo
        .then(|| "Demo order: the payment service was unreachable, so no card was charged.")
}

#[function_component(Success)]
pub fn success() -> Html {
    let order = use_state(storage::load_order);
    let event = data::mock_event();

    let order = match (*order).clone() {
        Some(order) => order,
        None => {
            return html! {
                <div class="success-page">
                    <div class="page-background"></div>
                    <div class="missing-panel">
                        <h1>{"Page Not Found"}</h1>
                        <p>{"This page is only accessible after completing a registration."}</p>
                        <Link<Route> to={Route::Home} classes="button-primary">
                            {"Go to Home"}
                        </Link<Route>>
                    </div>
                    { success_style() }
                </div>
            };
        }
    };

    html! {
        <div class="success-page">
            <div class="page-background"></div>
            <section class="success-hero">
                <div class="success-check">{"✓"}</div>
                <h1>{"Registration Complete!"}</h1>
                <p>{format!("Thank you, {}! Your spot is confirmed.", order.form.first_name())}</p>
            </section>

            <section class="order-card">
                <div class="order-header">
                    <div>
                        <p class="header-label">{"Order Confirmation"}</p>
                        <p class="header-value">{&order.order_id}</p>
                    </div>
                    <div class="header-right">
                        <p class="header-label">{"Amount Paid"}</p>
                        <p class="header-value">{format_currency(order.pricing.total)}</p>
                    </div>
                </div>

                {
                    if let Some(note) = demo_note(&order) {
                        html! { <div class="demo-note">{note}</div> }
                    } else {
                        html! {}
                    }
                }

                <div class="event-details">
                    <h3>{&event.name}</h3>
                    <div class="details-grid">
                        <span>{event.long_date()}</span>
                        <span>{"9:00 AM - 9:00 PM EST"}</span>
                        <span>{format!("Via {}", event.platform)}</span>
                        <span>{&order.form.email}</span>
                    </div>
                </div>

                <div class="next-steps">
                    <h4>{"What's Next?"}</h4>
                    <div class="step-row">
                        <span class="step-number">{"1"}</span>
                        <div>
                            <p class="step-title">{"Check Your Email"}</p>
                            <p class="step-text">
                                {format!("We've sent a confirmation email to {}", order.form.email)}
                            </p>
                        </div>
                    </div>
                    <div class="step-row">
                        <span class="step-number">{"2"}</span>
                        <div>
                            <p class="step-title">{"Add to Calendar"}</p>
                            <p class="step-text">{"Download the calendar invite to never miss the event"}</p>
                        </div>
                    </div>
                    <div class="step-row">
                        <span class="step-number">{"3"}</span>
                        <div>
                            <p class="step-title">{"Join on Event Day"}</p>
                            <p class="step-text">
                                {format!("You'll receive the {} link 24 hours before", event.platform)}
                            </p>
                        </div>
                    </div>
                </div>

                <div class="order-actions">
                    <button class="action-primary">{"Download Receipt"}</button>
                    <button class="action-secondary">{"Add to Calendar"}</button>
                </div>
            </section>

            <div class="home-link">
                <Link<Route> to={Route::Home}>
                    {"Return to Home →"}
                </Link<Route>>
            </div>

            { success_style() }
        </div>
    }
}

fn success_style() -> Html {
    html! {
        <style>
            {r#"
            .success-page {
                padding-top: 74px;
                min-height: 100vh;
                color: #ffffff;
                position: relative;
                background: transparent;
            }

            .missing-panel {
                text-align: center;
                padding: 8rem 2rem;
            }

            .missing-panel h1 {
                font-size: 2rem;
                margin-bottom: 1rem;
            }

            .missing-panel p {
                color: #999;
                margin-bottom: 2rem;
            }

            .success-hero {
                text-align: center;
                padding: 4rem 2rem 2rem;
            }

            .success-check {
                width: 90px;
                height: 90px;
                margin: 0 auto 1.5rem;
                border-radius: 50%;
                background: rgba(30, 144, 255, 0.15);
                border: 1px solid rgba(30, 144, 255, 0.3);
                color: #7EB2FF;
                font-size: 2.5rem;
                display: flex;
                align-items: center;
                justify-content: center;
                animation: pop-in 0.4s ease;
            }

            @keyframes pop-in {
                from {
                    transform: scale(0);
                }
                to {
                    transform: scale(1);
                }
            }

            .success-hero h1 {
                font-size: 2.75rem;
                margin-bottom: 1rem;
                background: linear-gradient(45deg, #fff, #7EB2FF);
                -webkit-background-clip: text;
                -webkit-text-fill-color: transparent;
            }

            .success-hero p {
                font-size: 1.1rem;
                color: #999;
            }

            .order-card {
                max-width: 640px;
                margin: 2rem auto 0;
                background: rgba(26, 26, 26, 0.85);
                backdrop-filter: blur(10px);
                border: 1px solid rgba(30, 144, 255, 0.1);
                border-radius: 16px;
                overflow: hidden;
            }

            .order-header {
                display: flex;
                justify-content: space-between;
                padding: 1.5rem;
                background: linear-gradient(90deg, #1E90FF, #7EB2FF);
            }

            .header-right {
                text-align: right;
            }

            .header-label {
                font-size: 0.85rem;
                color: rgba(255, 255, 255, 0.8);
                margin-bottom: 0.25rem;
            }

            .header-value {
                font-size: 1.25rem;
                font-weight: bold;
                color: #fff;
            }

            .demo-note {
                padding: 0.75rem 1.5rem;
                background: rgba(255, 200, 87, 0.08);
                border-bottom: 1px solid rgba(255, 200, 87, 0.25);
                color: #ffc857;
                font-size: 0.9rem;
            }

            .event-details {
                padding: 1.5rem;
                border-bottom: 1px solid rgba(30, 144, 255, 0.1);
            }

            .event-details h3 {
                margin-bottom: 1rem;
                color: #fff;
            }

            .details-grid {
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 0.75rem;
                font-size: 0.9rem;
                color: #999;
            }

            .next-steps {
                padding: 1.5rem;
            }

            .next-steps h4 {
                margin-bottom: 1rem;
                color: #fff;
            }

            .step-row {
                display: flex;
                gap: 0.75rem;
                margin-bottom: 1rem;
                align-items: flex-start;
            }

            .step-number {
                width: 24px;
                height: 24px;
                flex-shrink: 0;
                border-radius: 50%;
                background: rgba(30, 144, 255, 0.15);
                color: #7EB2FF;
                font-size: 0.8rem;
                font-weight: 600;
                display: flex;
                align-items: center;
                justify-content: center;
            }

            .step-title {
                color: #fff;
                font-weight: 600;
            }

            .step-text {
                color: #999;
                font-size: 0.9rem;
            }

            .order-actions {
                display: flex;
                gap: 1rem;
                padding: 1.5rem;
                background: rgba(15, 15, 15, 0.6);
            }

            .order-actions button {
                flex: 1;
                padding: 0.85rem;
                border-radius: 8px;
                font-size: 0.95rem;
                cursor: pointer;
                transition: all 0.3s ease;
            }

            .action-primary {
                border: none;
                background: #1E90FF;
                color: #fff;
            }

            .action-primary:hover {
                background: #7EB2FF;
            }

            .action-secondary {
                border: 1px solid rgba(30, 144, 255, 0.3);
                background: transparent;
                color: #7EB2FF;
            }

            .action-secondary:hover {
                border-color: rgba(30, 144, 255, 0.6);
            }

            .home-link {
                text-align: center;
                padding: 2rem 0 5rem;
            }

            .home-link a {
                color: #1E90FF;
                text-decoration: none;
            }

            .home-link a:hover {
                color: #7EB2FF;
            }

            @media (max-width: 768px) {
                .success-hero h1 {
                    font-size: 2rem;
                }

                .order-card {
                    margin: 2rem 1rem 0;
                }

                .details-grid {
                    grid-template-columns: 1fr;
                }
            }
            "#}
        </style>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RegistrationForm;
    use crate::pricing::calculate_pricing;

    fn order(demo: bool) -> OrderRecord {
        let form = RegistrationForm::default();
        let pricing = calculate_pricing(&form, 499);
        OrderRecord {
            form,
            pricing,
            order_id: "DM-000001".to_string(),
            demo,
        }
    }

    #[test]
    fn demo_orders_carry_a_note() {
        let note = demo_note(&order(true)).unwrap();
        assert!(note.contains("no card was charged"));
    }

    #[test]
    fn settled_orders_do_not() {
        assert_eq!(demo_note(&order(false)), None);
    }
}
