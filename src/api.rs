use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::models::{Dentist, EventInfo, RegistrationForm};
use crate::pricing::PricingBreakdown;

// Every endpoint answers with the same envelope. `data` is present on
// success, `error` carries a human-readable message otherwise.
#[derive(Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct CreateRegistrationRequest {
    pub form: RegistrationForm,
    pub pricing: PricingBreakdown,
}

#[derive(Deserialize, Clone)]
pub struct CreateRegistrationData {
    pub registration_id: String,
    pub confirmation_number: String,
    // The service may reprice the registration server-side.
    #[serde(default)]
    pub pricing: Option<PricingBreakdown>,
}

#[derive(Serialize)]
pub struct CreateIntentRequest {
    pub registration_id: String,
    pub amount_cents: i64,
}

#[derive(Deserialize, Clone)]
pub struct CreateIntentData {
    pub payment_intent_id: String,
}

#[derive(Serialize)]
pub struct ConfirmPaymentRequest {
    pub payment_intent_id: String,
    pub registration_id: String,
}

#[derive(Deserialize, Clone)]
pub struct ConfirmPaymentData {
    #[serde(default)]
    pub confirmation_number: Option<String>,
    #[serde(default)]
    pub demo: bool,
}

pub async fn fetch_upcoming_event() -> Result<ApiEnvelope<EventInfo>, gloo_net::Error> {
    Request::get(&format!("{}/api/events/upcoming", config::get_backend_url()))
        .send()
        .await?
        .json()
        .await
}

pub async fn fetch_dentists() -> Result<ApiEnvelope<Vec<Dentist>>, gloo_net::Error> {
    Request::get(&format!("{}/api/dentists", config::get_backend_url()))
        .send()
        .await?
        .json()
        .await
}

pub async fn create_registration(
    request: &CreateRegistrationRequest,
) -> Result<ApiEnvelope<CreateRegistrationData>, gloo_net::Error> {
    Request::post(&format!("{}/api/registrations", config::get_backend_url()))
        .json(request)?
        .send()
        .await?
        .json()
        .await
}

pub async fn create_payment_intent(
    request: &CreateIntentRequest,
) -> Result<ApiEnvelope<CreateIntentData>, gloo_net::Error> {
    Request::post(&format!("{}/api/payments/intent", config::get_backend_url()))
        .json(request)?
        .send()
        .await?
        .json()
        .await
}

pub async fn confirm_payment(
    request: &ConfirmPaymentRequest,
) -> Result<ApiEnvelope<ConfirmPaymentData>, gloo_net::Error> {
    Request::post(&format!("{}/api/payments/confirm", config::get_backend_url()))
        .json(request)?
        .send()
        .await?
        .json()
        .await
}

// Admin endpoints. A 401 is folded into the envelope as SESSION_EXPIRED
// so callers can drop the stale token and bounce to the login page.

pub const SESSION_EXPIRED: &str = "session expired";

fn expired_session<T>() -> ApiEnvelope<T> {
    ApiEnvelope {
        success: false,
        data: None,
        error: Some(SESSION_EXPIRED.to_string()),
    }
}

#[derive(Serialize)]
pub struct AdminLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, Clone)]
pub struct AdminLoginData {
    pub token: String,
}

#[derive(Deserialize, Clone, PartialEq)]
pub struct RegistrationRecord {
    pub id: String,
    pub confirmation_number: String,
    pub form: RegistrationForm,
    pub pricing: PricingBreakdown,
    pub paid: bool,
    pub created_at: i64, // unix seconds
}

pub async fn admin_login(
    request: &AdminLoginRequest,
) -> Result<ApiEnvelope<AdminLoginData>, gloo_net::Error> {
    Request::post(&format!("{}/api/admin/login", config::get_backend_url()))
        .json(request)?
        .send()
        .await?
        .json()
        .await
}

pub async fn fetch_registrations(
    token: &str,
) -> Result<ApiEnvelope<Vec<RegistrationRecord>>, gloo_net::Error> {
    let response = Request::get(&format!(
        "{}/api/admin/registrations",
        config::get_backend_url()
    ))
    .header("Authorization", &format!("Bearer {}", token))
    .send()
    .await?;
    if response.status() == 401 {
        return Ok(expired_session());
    }
    response.json().await
}

pub async fn confirm_registration(
    token: &str,
    id: &str,
) -> Result<ApiEnvelope<()>, gloo_net::Error> {
    let response = Request::post(&format!(
        "{}/api/admin/registrations/{}/confirm",
        config::get_backend_url(),
        id
    ))
    .header("Authorization", &format!("Bearer {}", token))
    .send()
    .await?;
    if response.status() == 401 {
        return Ok(expired_session());
    }
    response.json().await
}

pub async fn delete_registration(
    token: &str,
    id: &str,
) -> Result<ApiEnvelope<()>, gloo_net::Error> {
    let response = Request::delete(&format!(
        "{}/api/admin/registrations/{}",
        config::get_backend_url(),
        id
    ))
    .header("Authorization", &format!("Bearer {}", token))
    .send()
    .await?;
    if response.status() == 401 {
        return Ok(expired_session());
    }
    response.json().await
}

// Ids minted locally when the flow runs without a reachable backend.

pub fn demo_registration_id(now_millis: i64) -> String {
    format!("demo-{}", now_millis)
}

pub fn demo_order_id(now_millis: i64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let mut value = now_millis.unsigned_abs();
    let mut encoded = String::new();
    while value > 0 {
        encoded.insert(0, DIGITS[(value % 36) as usize] as char);
        value /= 36;
    }
    let tail = if encoded.len() > 6 {
        encoded[encoded.len() - 6..].to_string()
    } else {
        format!("{:0>6}", encoded)
    };
    format!("DM-{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_success_carries_data() {
        let parsed: ApiEnvelope<CreateIntentData> =
            serde_json::from_str(r#"{"success":true,"data":{"payment_intent_id":"pi_123"}}"#)
                .unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.data.unwrap().payment_intent_id, "pi_123");
        assert!(parsed.error.is_none());
    }

    #[test]
    fn envelope_failure_carries_error_only() {
        let parsed: ApiEnvelope<CreateIntentData> =
            serde_json::from_str(r#"{"success":false,"error":"card declined"}"#).unwrap();
        assert!(!parsed.success);
        assert!(parsed.data.is_none());
        assert_eq!(parsed.error.as_deref(), Some("card declined"));
    }

    // Payload types carry no Default impl; an envelope with both optional
    // fields absent must still deserialize.
    #[test]
    fn bare_envelope_parses_for_any_payload() {
        let parsed: ApiEnvelope<EventInfo> = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(!parsed.success);
        assert!(parsed.data.is_none());
        assert!(parsed.error.is_none());
    }

    #[test]
    fn expired_session_is_marked_in_the_envelope() {
        let envelope: ApiEnvelope<Vec<RegistrationRecord>> = expired_session();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.error.as_deref(), Some(SESSION_EXPIRED));
    }

    #[test]
    fn registration_records_parse_with_nested_form_and_pricing() {
        let parsed: RegistrationRecord = serde_json::from_str(
            r#"{
                "id": "reg-41",
                "confirmation_number": "DM-9F2K01",
                "form": {
                    "full_name": "Sarah Mitchell",
                    "email": "sarah@clinic.com",
                    "phone": "5551234567",
                    "country_code": "+1",
                    "country": "United States",
                    "profession": "dentist",
                    "experience_years": 12,
                    "license_number": "",
                    "accommodation_type": "single",
                    "food_preference": "halal",
                    "dietary_restrictions": "",
                    "certificate_type": "hardcopy",
                    "materials_kit": true,
                    "networking_dinner": false,
                    "promo_code": "",
                    "agreed_to_terms": true
                },
                "pricing": {
                    "base_price": 499,
                    "accommodation": 200,
                    "food": 0,
                    "certificate": 25,
                    "materials_kit": 75,
                    "networking_dinner": 0,
                    "discount": 0,
                    "total": 799
                },
                "paid": true,
                "created_at": 1767225600
            }"#,
        )
        .unwrap();
        assert_eq!(parsed.confirmation_number, "DM-9F2K01");
        assert!(parsed.paid);
        assert_eq!(parsed.pricing.total, 799);
        assert_eq!(parsed.form.first_name(), "Sarah");
    }

    #[test]
    fn confirm_data_defaults_to_live_mode() {
        let parsed: ConfirmPaymentData =
            serde_json::from_str(r#"{"confirmation_number":"DM-ABC123"}"#).unwrap();
        assert!(!parsed.demo);
    }

    #[test]
    fn demo_registration_ids_embed_the_clock() {
        assert_eq!(demo_registration_id(1_700_000_000_000), "demo-1700000000000");
    }

    #[test]
    fn demo_order_ids_are_six_base36_chars() {
        assert_eq!(demo_order_id(0), "DM-000000");
        assert_eq!(demo_order_id(35), "DM-00000Z");
        assert_eq!(demo_order_id(36), "DM-000010");
        let id = demo_order_id(1_700_000_000_000);
        assert_eq!(id.len(), 9);
        assert!(id.starts_with("DM-"));
        assert!(id[3..].chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(id, demo_order_id(1_700_000_000_000));
    }
}
