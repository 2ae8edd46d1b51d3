use serde::{Deserialize, Serialize};
use web_sys::{window, Storage};

use crate::models::RegistrationForm;
use crate::pricing::PricingBreakdown;

const DRAFT_KEY: &str = "registration-form";
const CHECKOUT_KEY: &str = "checkout";
const ORDER_KEY: &str = "order";
const ADMIN_TOKEN_KEY: &str = "admin_token";

// Handed from the registration wizard to the payment page. The ids are
// absent when the registration was only recorded locally.
#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct CheckoutRecord {
    pub form: RegistrationForm,
    pub pricing: PricingBreakdown,
    pub registration_id: Option<String>,
    pub confirmation_number: Option<String>,
}

// Handed from the payment page to the confirmation page.
#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct OrderRecord {
    pub form: RegistrationForm,
    pub pricing: PricingBreakdown,
    pub order_id: String,
    pub demo: bool,
}

fn local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok()).flatten()
}

fn session_storage() -> Option<Storage> {
    window().and_then(|w| w.session_storage().ok()).flatten()
}

fn read<T: for<'de> Deserialize<'de>>(storage: Option<Storage>, key: &str) -> Option<T> {
    let raw = storage?.get_item(key).ok()??;
    serde_json::from_str(&raw).ok()
}

fn write<T: Serialize>(storage: Option<Storage>, key: &str, value: &T) {
    if let (Some(storage), Ok(json)) = (storage, serde_json::to_string(value)) {
        let _ = storage.set_item(key, &json);
    }
}

// The draft survives page reloads; it is cleared once the registration
// is submitted.
pub fn save_draft(form: &RegistrationForm) {
    write(local_storage(), DRAFT_KEY, form);
}

pub fn load_draft() -> Option<RegistrationForm> {
    read(local_storage(), DRAFT_KEY)
}

pub fn clear_draft() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(DRAFT_KEY);
    }
}

pub fn save_checkout(record: &CheckoutRecord) {
    write(session_storage(), CHECKOUT_KEY, record);
}

pub fn load_checkout() -> Option<CheckoutRecord> {
    read(session_storage(), CHECKOUT_KEY)
}

pub fn save_order(record: &OrderRecord) {
    write(session_storage(), ORDER_KEY, record);
}

pub fn load_order() -> Option<OrderRecord> {
    read(session_storage(), ORDER_KEY)
}

// The admin session token is a bare string, not JSON.

pub fn save_admin_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(ADMIN_TOKEN_KEY, token);
    }
}

pub fn load_admin_token() -> Option<String> {
    local_storage()?.get_item(ADMIN_TOKEN_KEY).ok()?
}

pub fn clear_admin_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(ADMIN_TOKEN_KEY);
    }
}
