use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{self, RegistrationRecord};
use crate::models::format_timestamp;
use crate::pricing::format_currency;
use crate::storage;
use crate::Route;

fn paid_count(records: &[RegistrationRecord]) -> usize {
    records.iter().filter(|record| record.paid).count()
}

// Revenue counts only rows whose payment has settled.
fn paid_revenue(records: &[RegistrationRecord]) -> i32 {
    records
        .iter()
        .filter(|record| record.paid)
        .map(|record| record.pricing.total)
        .sum()
}

// The delete button stays locked until the registrant's confirmation
// number is typed back.
fn delete_unlocked(typed: &str, confirmation_number: &str) -> bool {
    !confirmation_number.is_empty() && typed.trim().eq_ignore_ascii_case(confirmation_number)
}

enum LoadOutcome {
    Loaded(Vec<RegistrationRecord>),
    SessionExpired,
    Failed(String),
}

async fn load_registrations(token: &str) -> LoadOutcome {
    match api::fetch_registrations(token).await {
        Ok(envelope) => {
            if envelope.error.as_deref() == Some(api::SESSION_EXPIRED) {
                LoadOutcome::SessionExpired
            } else if envelope.success {
                LoadOutcome::Loaded(envelope.data.unwrap_or_default())
            } else {
                LoadOutcome::Failed(
                    envelope
                        .error
                        .unwrap_or_else(|| "Failed to load registrations".to_string()),
                )
            }
        }
        Err(_) => LoadOutcome::Failed("Failed to load registrations".to_string()),
    }
}

#[derive(Clone, PartialEq)]
struct DeleteModalState {
    show: bool,
    registration_id: Option<String>,
    confirmation_number: Option<String>,
    attendee_name: Option<String>,
    typed: String,
}

impl DeleteModalState {
    fn hidden() -> Self {
        Self {
            show: false,
            registration_id: None,
            confirmation_number: None,
            attendee_name: None,
            typed: String::new(),
        }
    }
}

#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    let registrations = use_state(Vec::<RegistrationRecord>::new);
    let error = use_state(|| None::<String>);
    let selected_id = use_state(|| None::<String>);
    let delete_modal = use_state(DeleteModalState::hidden);
    let navigator = use_navigator().unwrap();

    {
        let registrations = registrations.clone();
        let error = error.clone();
        let navigator = navigator.clone();
        use_effect_with_deps(
            move |_| {
                match storage::load_admin_token() {
                    None => navigator.push(&Route::AdminLogin),
                    Some(token) => {
                        wasm_bindgen_futures::spawn_local(async move {
                            match load_registrations(&token).await {
                                LoadOutcome::Loaded(list) => registrations.set(list),
                                LoadOutcome::SessionExpired => {
                                    storage::clear_admin_token();
                                    navigator.push(&Route::AdminLogin);
                                }
                                LoadOutcome::Failed(message) => error.set(Some(message)),
                            }
                        });
                    }
                }
                || ()
            },
            (),
        );
    }

    let toggle_details = {
        let selected_id = selected_id.clone();
        Callback::from(move |id: String| {
            if selected_id.as_ref() == Some(&id) {
                selected_id.set(None);
            } else {
                selected_id.set(Some(id));
            }
        })
    };

    let mark_paid = {
        let registrations = registrations.clone();
        let error = error.clone();
        let navigator = navigator.clone();
        Callback::from(move |id: String| {
            let registrations = registrations.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let token = match storage::load_admin_token() {
                    Some(token) => token,
                    None => {
                        navigator.push(&Route::AdminLogin);
                        return;
                    }
                };
                match api::confirm_registration(&token, &id).await {
                    Ok(envelope) => {
                        if envelope.error.as_deref() == Some(api::SESSION_EXPIRED) {
                            storage::clear_admin_token();
                            navigator.push(&Route::AdminLogin);
                        } else if envelope.success {
                            // Pull a fresh list so the row reflects the change.
                            match load_registrations(&token).await {
                                LoadOutcome::Loaded(list) => {
                                    registrations.set(list);
                                    error.set(None);
                                }
                                LoadOutcome::SessionExpired => {
                                    storage::clear_admin_token();
                                    navigator.push(&Route::AdminLogin);
                                }
                                LoadOutcome::Failed(message) => error.set(Some(message)),
                            }
                        } else {
                            error.set(Some(envelope.error.unwrap_or_else(|| {
                                "Failed to update registration".to_string()
                            })));
                        }
                    }
                    Err(_) => {
                        error.set(Some("Failed to send request".to_string()));
                    }
                }
            });
        })
    };

    let confirm_delete = {
        let delete_modal = delete_modal.clone();
        let registrations = registrations.clone();
        let selected_id = selected_id.clone();
        let error = error.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            let modal = (*delete_modal).clone();
            let id = match modal.registration_id {
                Some(id) => id,
                None => return,
            };
            let number = modal.confirmation_number.unwrap_or_default();
            if !delete_unlocked(&modal.typed, &number) {
                return;
            }

            let delete_modal = delete_modal.clone();
            let registrations = registrations.clone();
            let selected_id = selected_id.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let token = match storage::load_admin_token() {
                    Some(token) => token,
                    None => {
                        navigator.push(&Route::AdminLogin);
                        return;
                    }
                };
                match api::delete_registration(&token, &id).await {
                    Ok(envelope) => {
                        if envelope.error.as_deref() == Some(api::SESSION_EXPIRED) {
                            storage::clear_admin_token();
                            navigator.push(&Route::AdminLogin);
                        } else if envelope.success {
                            registrations.set(
                                (*registrations)
                                    .clone()
                                    .into_iter()
                                    .filter(|record| record.id != id)
                                    .collect(),
                            );
                            if selected_id.as_ref() == Some(&id) {
                                selected_id.set(None);
                            }
                            delete_modal.set(DeleteModalState::hidden());
                        } else {
                            error.set(Some(envelope.error.unwrap_or_else(|| {
                                "Failed to delete registration".to_string()
                            })));
                        }
                    }
                    Err(_) => {
                        error.set(Some("Failed to send delete request".to_string()));
                    }
                }
            });
        })
    };

    let logout = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            storage::clear_admin_token();
            navigator.push(&Route::Home);
        })
    };

    html! {
        <div class="admin-page">
            <div class="page-background"></div>
            <div class="admin-panel">
                <div class="panel-header">
                    <div>
                        <h1 class="panel-title">{"Registrations"}</h1>
                        <p class="panel-subtitle">{"Master Class in Modern Dentistry 2026"}</p>
                    </div>
                    <button class="logout-button" onclick={logout}>{"Log Out"}</button>
                </div>

                <div class="stat-cards">
                    <div class="stat-card">
                        <span class="stat-number">{registrations.len()}</span>
                        <span class="stat-caption">{"Registrations"}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-number">{paid_count(&registrations)}</span>
                        <span class="stat-caption">{"Paid"}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-number">{format_currency(paid_revenue(&registrations))}</span>
                        <span class="stat-caption">{"Revenue"}</span>
                    </div>
                </div>

                {
                    if let Some(message) = (*error).as_ref() {
                        html! { <div class="admin-error">{message}</div> }
                    } else {
                        html! {}
                    }
                }

                {
                    if registrations.is_empty() {
                        html! { <p class="empty-note">{"No registrations yet."}</p> }
                    } else {
                        html! {
                            <div class="table-container">
                                <table class="registrations-table">
                                    <thead>
                                        <tr>
                                            <th>{"Name"}</th>
                                            <th>{"Email"}</th>
                                            <th>{"Country"}</th>
                                            <th>{"Profession"}</th>
                                            <th>{"Total"}</th>
                                            <th>{"Paid"}</th>
                                            <th>{"Registered"}</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {
                                            for registrations.iter().map(|record| {
                                                let is_selected = selected_id.as_ref() == Some(&record.id);
                                                let row_id = record.id.clone();
                                                let onclick = toggle_details.reform(move |_: MouseEvent| row_id.clone());
                                                let breakdown = &record.pricing;

                                                html! {
                                                    <>
                                                        <tr
                                                            onclick={onclick}
                                                            key={record.id.clone()}
                                                            class={classes!("registration-row", is_selected.then(|| "selected"))}
                                                        >
                                                            <td>{&record.form.full_name}</td>
                                                            <td>{&record.form.email}</td>
                                                            <td>{&record.form.country}</td>
                                                            <td>{record.form.profession.label()}</td>
                                                            <td>{format_currency(record.pricing.total)}</td>
                                                            <td>
                                                                {
                                                                    if record.paid {
                                                                        html! { <span class="paid-badge">{"Paid"}</span> }
                                                                    } else {
                                                                        html! { <span class="unpaid-badge">{"Pending"}</span> }
                                                                    }
                                                                }
                                                            </td>
                                                            <td>{format_timestamp(record.created_at)}</td>
                                                        </tr>
                                                        if is_selected {
                                                            <tr class="details-row">
                                                                <td colspan="7">
                                                                    <div class="registration-details">
                                                                        <div class="detail-grid">
                                                                            <div>
                                                                                <h4>{"Contact"}</h4>
                                                                                <p><strong>{"Confirmation: "}</strong>{&record.confirmation_number}</p>
                                                                                <p><strong>{"Phone: "}</strong>{format!("{} {}", record.form.country_code, record.form.phone)}</p>
                                                                                <p><strong>{"License: "}</strong>{&record.form.license_number}</p>
                                                                                <p><strong>{"Experience: "}</strong>{format!("{} years", record.form.experience_years)}</p>
                                                                            </div>
                                                                            <div>
                                                                                <h4>{"Preferences"}</h4>
                                                                                <p><strong>{"Accommodation: "}</strong>{record.form.accommodation_type.label()}</p>
                                                                                <p><strong>{"Food: "}</strong>{record.form.food_preference.label()}</p>
                                                                                {
                                                                                    if record.form.dietary_restrictions.is_empty() {
                                                                                        html! {}
                                                                                    } else {
                                                                                        html! { <p><strong>{"Dietary: "}</strong>{&record.form.dietary_restrictions}</p> }
                                                                                    }
                                                                                }
                                                                                <p><strong>{"Certificate: "}</strong>{record.form.certificate_type.label()}</p>
                                                                                <p><strong>{"Materials kit: "}</strong>{if record.form.materials_kit { "Yes" } else { "No" }}</p>
                                                                                <p><strong>{"Networking dinner: "}</strong>{if record.form.networking_dinner { "Yes" } else { "No" }}</p>
                                                                            </div>
                                                                            <div>
                                                                                <h4>{"Charges"}</h4>
                                                                                <p><strong>{"Base: "}</strong>{format_currency(breakdown.base_price)}</p>
                                                                                {
                                                                                    if breakdown.accommodation > 0 {
                                                                                        html! { <p><strong>{"Accommodation: "}</strong>{format_currency(breakdown.accommodation)}</p> }
                                                                                    } else {
                                                                                        html! {}
                                                                                    }
                                                                                }
                                                                                {
                                                                                    if breakdown.food != 0 {
                                                                                        html! { <p><strong>{"Food: "}</strong>{format_currency(breakdown.food)}</p> }
                                                                                    } else {
                                                                                        html! {}
                                                                                    }
                                                                                }
                                                                                {
                                                                                    if breakdown.certificate > 0 {
                                                                                        html! { <p><strong>{"Certificate: "}</strong>{format_currency(breakdown.certificate)}</p> }
                                                                                    } else {
                                                                                        html! {}
                                                                                    }
                                                                                }
                                                                                {
                                                                                    if breakdown.materials_kit > 0 {
                                                                                        html! { <p><strong>{"Materials kit: "}</strong>{format_currency(breakdown.materials_kit)}</p> }
                                                                                    } else {
                                                                                        html! {}
                                                                                    }
                                                                                }
                                                                                {
                                                                                    if breakdown.networking_dinner > 0 {
                                                                                        html! { <p><strong>{"Dinner: "}</strong>{format_currency(breakdown.networking_dinner)}</p> }
                                                                                    } else {
                                                                                        html! {}
                                                                                    }
                                                                                }
                                                                                {
                                                                                    if breakdown.discount > 0 {
                                                                                        html! { <p><strong>{"Discount: "}</strong>{format!("-{}", format_currency(breakdown.discount))}</p> }
                                                                                    } else {
                                                                                        html! {}
                                                                                    }
                                                                                }
                                                                                <p><strong>{"Total: "}</strong>{format_currency(breakdown.total)}</p>
                                                                            </div>
                                                                        </div>
                                                                        <div class="detail-actions">
                                                                            <button
                                                                                class="action-button"
                                                                                disabled={record.paid}
                                                                                onclick={{
                                                                                    let mark_paid = mark_paid.clone();
                                                                                    let id = record.id.clone();
                                                                                    Callback::from(move |_: MouseEvent| mark_paid.emit(id.clone()))
                                                                                }}
                                                                            >
                                                                                {if record.paid { "Paid" } else { "Mark as Paid" }}
                                                                            </button>
                                                                            <button
                                                                                class="action-button delete"
                                                                                onclick={{
                                                                                    let delete_modal = delete_modal.clone();
                                                                                    let id = record.id.clone();
                                                                                    let number = record.confirmation_number.clone();
                                                                                    let name = record.form.full_name.clone();
                                                                                    Callback::from(move |_: MouseEvent| {
                                                                                        delete_modal.set(DeleteModalState {
                                                                                            show: true,
                                                                                            registration_id: Some(id.clone()),
                                                                                            confirmation_number: Some(number.clone()),
                                                                                            attendee_name: Some(name.clone()),
                                                                                            typed: String::new(),
                                                                                        });
                                                                                    })
                                                                                }}
                                                                            >
                                                                                {"Delete"}
                                                                            </button>
                                                                        </div>
                                                                    </div>
                                                                </td>
                                                            </tr>
                                                        }
                                                    </>
                                                }
                                            })
                                        }
                                    </tbody>
                                </table>
                            </div>
                        }
                    }
                }

                {
                    if delete_modal.show {
                        let number = delete_modal
                            .confirmation_number
                            .clone()
                            .unwrap_or_default();
                        let unlocked = delete_unlocked(&delete_modal.typed, &number);
                        html! {
                            <div class="modal-overlay">
                                <div class="modal-content">
                                    <h2>{"Confirm Delete"}</h2>
                                    <p>
                                        {format!(
                                            "You are about to delete the registration of {} ({}).",
                                            delete_modal.attendee_name.clone().unwrap_or_default(),
                                            number
                                        )}
                                    </p>
                                    <p class="warning">{"This action cannot be undone!"}</p>
                                    <input
                                        class="modal-input"
                                        type="text"
                                        placeholder={format!("Type {} to confirm", number)}
                                        value={delete_modal.typed.clone()}
                                        oninput={{
                                            let delete_modal = delete_modal.clone();
                                            move |e: InputEvent| {
                                                let input: HtmlInputElement = e.target_unchecked_into();
                                                let mut next = (*delete_modal).clone();
                                                next.typed = input.value();
                                                delete_modal.set(next);
                                            }
                                        }}
                                    />
                                    <div class="modal-buttons">
                                        <button
                                            class="modal-button cancel"
                                            onclick={{
                                                let delete_modal = delete_modal.clone();
                                                Callback::from(move |_: MouseEvent| {
                                                    delete_modal.set(DeleteModalState::hidden());
                                                })
                                            }}
                                        >
                                            {"Cancel"}
                                        </button>
                                        <button
                                            class="modal-button delete"
                                            disabled={!unlocked}
                                            onclick={confirm_delete.clone()}
                                        >
                                            {"Delete"}
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <style>
                {r#"
                .admin-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                    position: relative;
                    background: transparent;
                }

                .admin-panel {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 3rem 2rem 6rem;
                    position: relative;
                    z-index: 1;
                }

                .panel-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    margin-bottom: 2rem;
                }

                .panel-title {
                    font-size: 2rem;
                    margin: 0;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .panel-subtitle {
                    color: #999;
                    margin: 0.25rem 0 0;
                    font-size: 0.9rem;
                }

                .logout-button {
                    background: transparent;
                    border: 1px solid rgba(255, 107, 107, 0.4);
                    border-radius: 8px;
                    color: #ff6b6b;
                    padding: 0.5rem 1.25rem;
                    font-size: 0.9rem;
                    cursor: pointer;
                    transition: background 0.3s;
                }

                .logout-button:hover {
                    background: rgba(255, 107, 107, 0.1);
                }

                .stat-cards {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    margin-bottom: 2rem;
                }

                .stat-card {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(30, 144, 255, 0.15);
                    border-radius: 12px;
                    padding: 1.5rem;
                    text-align: center;
                }

                .stat-number {
                    display: block;
                    font-size: 2rem;
                    font-weight: 700;
                    color: #1E90FF;
                }

                .stat-caption {
                    display: block;
                    color: #999;
                    font-size: 0.85rem;
                    margin-top: 0.5rem;
                }

                .admin-error {
                    background: rgba(255, 107, 107, 0.1);
                    border: 1px solid rgba(255, 107, 107, 0.3);
                    border-radius: 8px;
                    color: #ff6b6b;
                    padding: 0.75rem 1rem;
                    margin-bottom: 1.5rem;
                    font-size: 0.9rem;
                }

                .empty-note {
                    color: #999;
                    text-align: center;
                    padding: 3rem 0;
                }

                .table-container {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(30, 144, 255, 0.15);
                    border-radius: 12px;
                    overflow-x: auto;
                }

                .registrations-table {
                    width: 100%;
                    border-collapse: collapse;
                    font-size: 0.9rem;
                }

                .registrations-table th {
                    text-align: left;
                    color: #7EB2FF;
                    font-weight: 600;
                    padding: 1rem;
                    border-bottom: 1px solid rgba(30, 144, 255, 0.2);
                    white-space: nowrap;
                }

                .registrations-table td {
                    padding: 0.9rem 1rem;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    color: #ccc;
                }

                .registration-row {
                    cursor: pointer;
                    transition: background 0.2s;
                }

                .registration-row:hover {
                    background: rgba(30, 144, 255, 0.05);
                }

                .registration-row.selected {
                    background: rgba(30, 144, 255, 0.1);
                }

                .paid-badge {
                    color: #4ade80;
                    font-weight: 600;
                }

                .unpaid-badge {
                    color: #ffc857;
                }

                .details-row td {
                    background: rgba(15, 15, 15, 0.6);
                }

                .registration-details {
                    padding: 1rem 0.5rem;
                }

                .detail-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    margin-bottom: 1.5rem;
                }

                .detail-grid h4 {
                    color: #7EB2FF;
                    font-size: 0.85rem;
                    text-transform: uppercase;
                    letter-spacing: 0.08em;
                    margin: 0 0 0.75rem;
                }

                .detail-grid p {
                    color: #ccc;
                    font-size: 0.85rem;
                    margin: 0 0 0.4rem;
                }

                .detail-grid strong {
                    color: #999;
                    font-weight: 500;
                }

                .detail-actions {
                    display: flex;
                    gap: 1rem;
                }

                .action-button {
                    background: rgba(30, 144, 255, 0.1);
                    border: 1px solid rgba(30, 144, 255, 0.3);
                    border-radius: 8px;
                    color: #7EB2FF;
                    padding: 0.5rem 1.25rem;
                    font-size: 0.85rem;
                    cursor: pointer;
                    transition: background 0.3s;
                }

                .action-button:hover:not(:disabled) {
                    background: rgba(30, 144, 255, 0.2);
                }

                .action-button:disabled {
                    opacity: 0.5;
                    cursor: default;
                }

                .action-button.delete {
                    border-color: rgba(255, 107, 107, 0.4);
                    background: rgba(255, 107, 107, 0.05);
                    color: #ff6b6b;
                }

                .action-button.delete:hover:not(:disabled) {
                    background: rgba(255, 107, 107, 0.15);
                }

                .modal-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.7);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 100;
                }

                .modal-content {
                    background: #1a1a1a;
                    border: 1px solid rgba(30, 144, 255, 0.2);
                    border-radius: 12px;
                    padding: 2rem;
                    max-width: 420px;
                    width: 90%;
                }

                .modal-content h2 {
                    margin: 0 0 1rem;
                    color: #fff;
                    font-size: 1.3rem;
                }

                .modal-content p {
                    color: #999;
                    font-size: 0.9rem;
                    line-height: 1.5;
                    margin: 0 0 0.75rem;
                }

                .modal-content .warning {
                    color: #ff6b6b;
                }

                .modal-input {
                    width: 100%;
                    padding: 0.7rem 1rem;
                    background: rgba(15, 15, 15, 0.8);
                    border: 1px solid rgba(30, 144, 255, 0.2);
                    border-radius: 8px;
                    color: #fff;
                    font-size: 0.9rem;
                    margin: 0.5rem 0 1.5rem;
                    box-sizing: border-box;
                }

                .modal-input:focus {
                    outline: none;
                    border-color: #1E90FF;
                }

                .modal-buttons {
                    display: flex;
                    justify-content: flex-end;
                    gap: 1rem;
                }

                .modal-button {
                    border-radius: 8px;
                    padding: 0.5rem 1.25rem;
                    font-size: 0.9rem;
                    cursor: pointer;
                }

                .modal-button.cancel {
                    background: transparent;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    color: #ccc;
                }

                .modal-button.delete {
                    background: rgba(255, 107, 107, 0.15);
                    border: 1px solid rgba(255, 107, 107, 0.4);
                    color: #ff6b6b;
                }

                .modal-button.delete:disabled {
                    opacity: 0.4;
                    cursor: default;
                }

                @media (max-width: 768px) {
                    .stat-cards {
                        grid-template-columns: 1fr;
                    }

                    .detail-grid {
                        grid-template-columns: 1fr;
                        gap: 1.25rem;
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
    use crate::models::RegistrationForm;
    use crate::pricing::calculate_pricing;

    fn record(id: &str, paid: bool) -> RegistrationRecord {
        let form = RegistrationForm::default();
        let pricing = calculate_pricing(&form, 499);
        RegistrationRecord {
            id: id.to_string(),
            confirmation_number: format!("DM-{}", id.to_uppercase()),
            form,
            pricing,
            paid,
            created_at: 1_767_225_600,
        }
    }

    #[test]
    fn revenue_counts_only_settled_rows() {
        let records = vec![record("a", true), record("b", false), record("c", true)];
        assert_eq!(paid_count(&records), 2);
        assert_eq!(paid_revenue(&records), 2 * records[0].pricing.total);
    }

    #[test]
    fn delete_stays_locked_until_the_number_matches() {
        assert!(!delete_unlocked("", "DM-9F2K01"));
        assert!(!delete_unlocked("DM-9F2K", "DM-9F2K01"));
        assert!(delete_unlocked(" dm-9f2k01 ", "DM-9F2K01"));
    }
}
