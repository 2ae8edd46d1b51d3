use chrono::{NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Profession {
    Dentist,
    Student,
    Hygienist,
    Other,
}

impl Profession {
    pub const ALL: [Profession; 4] = [
        Profession::Dentist,
        Profession::Student,
        Profession::Hygienist,
        Profession::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Profession::Dentist => "dentist",
            Profession::Student => "student",
            Profession::Hygienist => "hygienist",
            Profession::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Profession::Dentist => "Dentist",
            Profession::Student => "Dental Student",
            Profession::Hygienist => "Dental Hygienist",
            Profession::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "student" => Profession::Student,
            "hygienist" => Profession::Hygienist,
            "other" => Profession::Other,
            _ => Profession::Dentist,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum AccommodationType {
    Single,
    Shared,
    None,
}

impl AccommodationType {
    pub const ALL: [AccommodationType; 3] = [
        AccommodationType::Single,
        AccommodationType::Shared,
        AccommodationType::None,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccommodationType::Single => "single",
            AccommodationType::Shared => "shared",
            AccommodationType::None => "none",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccommodationType::Single => "Single Room",
            AccommodationType::Shared => "Shared Room",
            AccommodationType::None => "No Accommodation",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AccommodationType::Single => "Private room for one person",
            AccommodationType::Shared => "Room shared with another attendee",
            AccommodationType::None => "I'll arrange my own stay",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum FoodPreference {
    Halal,
    Vegetarian,
    Vegan,
    None,
}

impl FoodPreference {
    pub const ALL: [FoodPreference; 4] = [
        FoodPreference::Halal,
        FoodPreference::Vegetarian,
        FoodPreference::Vegan,
        FoodPreference::None,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodPreference::Halal => "halal",
            FoodPreference::Vegetarian => "vegetarian",
            FoodPreference::Vegan => "vegan",
            FoodPreference::None => "none",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FoodPreference::Halal => "Halal",
            FoodPreference::Vegetarian => "Vegetarian",
            FoodPreference::Vegan => "Vegan",
            FoodPreference::None => "No Food",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum CertificateType {
    Digital,
    Hardcopy,
}

impl CertificateType {
    pub const ALL: [CertificateType; 2] = [CertificateType::Digital, CertificateType::Hardcopy];

    pub fn as_str(&self) -> &'static str {
        match self {
            CertificateType::Digital => "digital",
            CertificateType::Hardcopy => "hardcopy",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CertificateType::Digital => "Digital Only",
            CertificateType::Hardcopy => "Hard Copy",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CertificateType::Digital => "PDF certificate",
            CertificateType::Hardcopy => "Printed & framed",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub country_code: String,
    pub country: String,
    pub profession: Profession,
    pub experience_years: u32,
    pub license_number: String,
    pub accommodation_type: AccommodationType,
    pub food_preference: FoodPreference,
    pub dietary_restrictions: String,
    pub certificate_type: CertificateType,
    pub materials_kit: bool,
    pub networking_dinner: bool,
    pub promo_code: String,
    pub agreed_to_terms: bool,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            country_code: "+1".to_string(),
            country: String::new(),
            profession: Profession::Dentist,
            experience_years: 0,
            license_number: String::new(),
            accommodation_type: AccommodationType::None,
            food_preference: FoodPreference::Halal,
            dietary_restrictions: String::new(),
            certificate_type: CertificateType::Digital,
            materials_kit: false,
            networking_dinner: false,
            promo_code: String::new(),
            agreed_to_terms: false,
        }
    }
}

impl RegistrationForm {
    pub fn full_name_error(&self) -> Option<String> {
        if self.full_name.trim().chars().count() < 2 {
            Some("Name must be at least 2 characters".to_string())
        } else {
            None
        }
    }

    pub fn email_error(&self) -> Option<String> {
        if is_valid_email(&self.email) {
            None
        } else {
            Some("Please enter a valid email".to_string())
        }
    }

    pub fn phone_error(&self) -> Option<String> {
        let digits = self.phone.chars().filter(|c| c.is_ascii_digit()).count();
        if digits < 10 {
            Some("Please enter a valid phone number".to_string())
        } else {
            None
        }
    }

    pub fn country_code_error(&self) -> Option<String> {
        if self.country_code.is_empty() {
            Some("Required".to_string())
        } else {
            None
        }
    }

    pub fn country_error(&self) -> Option<String> {
        if self.country.is_empty() {
            Some("Please select your country".to_string())
        } else {
            None
        }
    }

    pub fn experience_error(&self) -> Option<String> {
        if self.experience_years > 60 {
            Some("Please enter valid years of experience".to_string())
        } else {
            None
        }
    }

    pub fn terms_error(&self) -> Option<String> {
        if self.agreed_to_terms {
            None
        } else {
            Some("You must agree to the terms".to_string())
        }
    }

    // First whitespace-separated token, for the greeting on the confirmation page.
    pub fn first_name(&self) -> &str {
        self.full_name
            .split_whitespace()
            .next()
            .unwrap_or(&self.full_name)
    }
}

pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || value.contains(char::is_whitespace) {
        return false;
    }
    let (local, domain) = match value.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.len() >= 2,
        None => false,
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct EventInfo {
    pub id: String,
    pub name: String,
    pub date: String, // ISO yyyy-mm-dd
    pub time: String,
    pub duration_hours: u32,
    pub platform: String,
    pub max_capacity: u32,
    pub current_registrations: u32,
    pub base_price: i32,
    pub status: String,
    pub description: String,
}

impl EventInfo {
    pub fn spots_left(&self) -> u32 {
        self.max_capacity.saturating_sub(self.current_registrations)
    }

    pub fn long_date(&self) -> String {
        format_event_date(&self.date)
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct SocialLinks {
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub research_gate: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct Dentist {
    pub id: String,
    pub name: String,
    pub credentials: String,
    pub specialty: String,
    pub biography: String,
    pub profile_image_url: String,
    pub achievements: Vec<String>,
    pub social_links: SocialLinks,
    pub topics_covered: Vec<String>,
    pub institution: String,
    pub years_experience: u32,
}

#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct Review {
    pub id: String,
    pub attendee_name: String,
    pub attendee_credential: String,
    pub attendee_photo_url: String,
    pub rating: u8,
    pub review_text: String,
    pub event_date: String,
    pub verified: bool,
}

pub fn format_event_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%B %d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

pub fn format_timestamp(timestamp: i64) -> String {
    match Utc.timestamp_opt(timestamp, 0) {
        chrono::offset::LocalResult::Single(dt) => dt.format("%B %d, %Y %H:%M").to_string(),
        _ => "Unknown date".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_matches_initial_selections() {
        let form = RegistrationForm::default();
        assert_eq!(form.country_code, "+1");
        assert_eq!(form.profession, Profession::Dentist);
        assert_eq!(form.accommodation_type, AccommodationType::None);
        assert_eq!(form.food_preference, FoodPreference::Halal);
        assert_eq!(form.certificate_type, CertificateType::Digital);
        assert!(!form.materials_kit);
        assert!(!form.networking_dinner);
        assert!(!form.agreed_to_terms);
    }

    #[test]
    fn full_name_requires_two_chars() {
        let mut form = RegistrationForm::default();
        form.full_name = "A".to_string();
        assert!(form.full_name_error().is_some());
        form.full_name = "  A  ".to_string();
        assert!(form.full_name_error().is_some());
        form.full_name = "Dr. John Smith".to_string();
        assert!(form.full_name_error().is_none());
    }

    #[test]
    fn email_validation_accepts_plausible_addresses() {
        assert!(is_valid_email("john@clinic.com"));
        assert!(is_valid_email("a.b+tag@sub.domain.org"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("john"));
        assert!(!is_valid_email("john@"));
        assert!(!is_valid_email("@clinic.com"));
        assert!(!is_valid_email("john@clinic"));
        assert!(!is_valid_email("john@.com"));
        assert!(!is_valid_email("jo hn@clinic.com"));
        assert!(!is_valid_email("john@@clinic.com"));
    }

    #[test]
    fn phone_needs_ten_digits() {
        let mut form = RegistrationForm::default();
        form.phone = "555-123".to_string();
        assert!(form.phone_error().is_some());
        form.phone = "555-123-4567".to_string();
        assert!(form.phone_error().is_none());
    }

    #[test]
    fn experience_capped_at_sixty() {
        let mut form = RegistrationForm::default();
        form.experience_years = 60;
        assert!(form.experience_error().is_none());
        form.experience_years = 61;
        assert_eq!(
            form.experience_error().as_deref(),
            Some("Please enter valid years of experience")
        );
    }

    #[test]
    fn country_must_be_selected() {
        let mut form = RegistrationForm::default();
        assert_eq!(
            form.country_error().as_deref(),
            Some("Please select your country")
        );
        form.country = "United States".to_string();
        assert!(form.country_error().is_none());
    }

    #[test]
    fn terms_must_be_accepted() {
        let mut form = RegistrationForm::default();
        assert_eq!(
            form.terms_error().as_deref(),
            Some("You must agree to the terms")
        );
        form.agreed_to_terms = true;
        assert!(form.terms_error().is_none());
    }

    #[test]
    fn first_name_splits_on_whitespace() {
        let mut form = RegistrationForm::default();
        form.full_name = "Sarah Mitchell".to_string();
        assert_eq!(form.first_name(), "Sarah");
        form.full_name = "Cher".to_string();
        assert_eq!(form.first_name(), "Cher");
    }

    #[test]
    fn enum_values_round_trip_through_select_strings() {
        for profession in Profession::ALL {
            assert_eq!(Profession::from_value(profession.as_str()), profession);
        }
        assert_eq!(Profession::from_value("garbage"), Profession::Dentist);
    }

    #[test]
    fn event_date_renders_long_form() {
        assert_eq!(format_event_date("2026-02-15"), "February 15, 2026");
        assert_eq!(format_event_date("not-a-date"), "not-a-date");
    }

    #[test]
    fn spots_left_never_underflows() {
        let event = EventInfo {
            id: "e".to_string(),
            name: "Event".to_string(),
            date: "2026-02-15".to_string(),
            time: "09:00".to_string(),
            duration_hours: 12,
            platform: "In-Person".to_string(),
            max_capacity: 500,
            current_registrations: 600,
            base_price: 499,
            status: "upcoming".to_string(),
            description: String::new(),
        };
        assert_eq!(event.spots_left(), 0);
    }
}
