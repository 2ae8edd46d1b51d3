use std::collections::HashMap;

use crate::models::RegistrationForm;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Step {
    PersonalInfo,
    Preferences,
    Extras,
    Review,
}

impl Step {
    pub const ALL: [Step; 4] = [
        Step::PersonalInfo,
        Step::Preferences,
        Step::Extras,
        Step::Review,
    ];

    pub fn number(&self) -> u8 {
        match self {
            Step::PersonalInfo => 1,
            Step::Preferences => 2,
            Step::Extras => 3,
            Step::Review => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::PersonalInfo => "Personal Info",
            Step::Preferences => "Preferences",
            Step::Extras => "Extras",
            Step::Review => "Review",
        }
    }

    pub fn next(&self) -> Step {
        match self {
            Step::PersonalInfo => Step::Preferences,
            Step::Preferences => Step::Extras,
            Step::Extras => Step::Review,
            Step::Review => Step::Review,
        }
    }

    pub fn back(&self) -> Step {
        match self {
            Step::PersonalInfo => Step::PersonalInfo,
            Step::Preferences => Step::PersonalInfo,
            Step::Extras => Step::Preferences,
            Step::Review => Step::Extras,
        }
    }

    pub fn is_first(&self) -> bool {
        *self == Step::PersonalInfo
    }

    pub fn is_last(&self) -> bool {
        *self == Step::Review
    }
}

// Field-level messages for the given step only; an empty map means the
// step passes and forward navigation is allowed. Enum-backed fields are
// valid by construction, so preferences and extras always pass.
pub fn validate_step(step: Step, form: &RegistrationForm) -> HashMap<&'static str, String> {
    let mut errors = HashMap::new();
    match step {
        Step::PersonalInfo => {
            if let Some(message) = form.full_name_error() {
                errors.insert("full_name", message);
            }
            if let Some(message) = form.email_error() {
                errors.insert("email", message);
            }
            if let Some(message) = form.phone_error() {
                errors.insert("phone", message);
            }
            if let Some(message) = form.country_code_error() {
                errors.insert("country_code", message);
            }
            if let Some(message) = form.country_error() {
                errors.insert("country", message);
            }
            if let Some(message) = form.experience_error() {
                errors.insert("experience_years", message);
            }
        }
        Step::Preferences => {}
        Step::Extras => {}
        Step::Review => {
            if let Some(message) = form.terms_error() {
                errors.insert("agreed_to_terms", message);
            }
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_personal_info() -> RegistrationForm {
        let mut form = RegistrationForm::default();
        form.full_name = "Dr. John Smith".to_string();
        form.email = "john@clinic.com".to_string();
        form.phone = "555-123-4567".to_string();
        form.country = "United States".to_string();
        form.experience_years = 5;
        form
    }

    #[test]
    fn steps_are_numbered_in_order() {
        let numbers: Vec<u8> = Step::ALL.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(Step::PersonalInfo.title(), "Personal Info");
        assert_eq!(Step::Review.title(), "Review");
    }

    #[test]
    fn navigation_is_linear_and_saturating() {
        assert_eq!(Step::PersonalInfo.next(), Step::Preferences);
        assert_eq!(Step::Extras.next(), Step::Review);
        assert_eq!(Step::Review.next(), Step::Review);
        assert_eq!(Step::Review.back(), Step::Extras);
        assert_eq!(Step::PersonalInfo.back(), Step::PersonalInfo);
        assert!(Step::PersonalInfo.is_first());
        assert!(Step::Review.is_last());
    }

    #[test]
    fn empty_form_fails_personal_info() {
        let errors = validate_step(Step::PersonalInfo, &RegistrationForm::default());
        assert!(errors.contains_key("full_name"));
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("phone"));
        assert!(errors.contains_key("country"));
        // The dial code defaults to +1, so it never blocks an empty form.
        assert!(!errors.contains_key("country_code"));
    }

    #[test]
    fn complete_personal_info_passes() {
        let errors = validate_step(Step::PersonalInfo, &valid_personal_info());
        assert!(errors.is_empty());
    }

    #[test]
    fn excessive_experience_blocks_step_one() {
        let mut form = valid_personal_info();
        form.experience_years = 61;
        let errors = validate_step(Step::PersonalInfo, &form);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key("experience_years"));
    }

    #[test]
    fn option_steps_always_pass() {
        let form = RegistrationForm::default();
        assert!(validate_step(Step::Preferences, &form).is_empty());
        assert!(validate_step(Step::Extras, &form).is_empty());
    }

    #[test]
    fn review_requires_terms() {
        let mut form = valid_personal_info();
        let errors = validate_step(Step::Review, &form);
        assert_eq!(
            errors.get("agreed_to_terms").map(String::as_str),
            Some("You must agree to the terms")
        );
        form.agreed_to_terms = true;
        assert!(validate_step(Step::Review, &form).is_empty());
    }
}
