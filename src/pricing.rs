use serde::{Deserialize, Serialize};

use crate::models::{AccommodationType, CertificateType, FoodPreference, RegistrationForm};

// Whole USD. Used when the event lookup has not resolved yet.
pub const FALLBACK_BASE_PRICE: i32 = 499;

pub const MATERIALS_KIT_PRICE: i32 = 75;
pub const NETWORKING_DINNER_PRICE: i32 = 100;

pub fn accommodation_price(choice: AccommodationType) -> i32 {
    match choice {
        AccommodationType::Single => 200,
        AccommodationType::Shared => 150,
        AccommodationType::None => 0,
    }
}

// Meals are included in the base price; opting out earns a rebate.
pub fn food_adjustment(choice: FoodPreference) -> i32 {
    match choice {
        FoodPreference::Halal => 0,
        FoodPreference::Vegetarian => 0,
        FoodPreference::Vegan => 0,
        FoodPreference::None => -50,
    }
}

pub fn certificate_price(choice: CertificateType) -> i32 {
    match choice {
        CertificateType::Digital => 0,
        CertificateType::Hardcopy => 25,
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct PricingBreakdown {
    pub base_price: i32,
    pub accommodation: i32,
    pub food: i32,
    pub certificate: i32,
    pub materials_kit: i32,
    pub networking_dinner: i32,
    pub discount: i32,
    pub total: i32,
}

impl PricingBreakdown {
    // The payment API takes amounts in cents.
    pub fn total_cents(&self) -> i64 {
        self.total as i64 * 100
    }
}

pub fn calculate_pricing(form: &RegistrationForm, base_price: i32) -> PricingBreakdown {
    let accommodation = accommodation_price(form.accommodation_type);
    let food = food_adjustment(form.food_preference);
    let certificate = certificate_price(form.certificate_type);
    let materials_kit = if form.materials_kit {
        MATERIALS_KIT_PRICE
    } else {
        0
    };
    let networking_dinner = if form.networking_dinner {
        NETWORKING_DINNER_PRICE
    } else {
        0
    };
    // Promo codes are collected but no discount scheme is active.
    let discount = 0;
    let total =
        base_price + accommodation + food + certificate + materials_kit + networking_dinner
            - discount;

    PricingBreakdown {
        base_price,
        accommodation,
        food,
        certificate,
        materials_kit,
        networking_dinner,
        discount,
        total,
    }
}

pub fn format_currency(amount: i32) -> String {
    if amount < 0 {
        format!("-${}", amount.unsigned_abs())
    } else {
        format!("${}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_form() -> RegistrationForm {
        RegistrationForm::default()
    }

    #[test]
    fn accommodation_table() {
        assert_eq!(accommodation_price(AccommodationType::Single), 200);
        assert_eq!(accommodation_price(AccommodationType::Shared), 150);
        assert_eq!(accommodation_price(AccommodationType::None), 0);
    }

    #[test]
    fn food_table() {
        assert_eq!(food_adjustment(FoodPreference::Halal), 0);
        assert_eq!(food_adjustment(FoodPreference::Vegetarian), 0);
        assert_eq!(food_adjustment(FoodPreference::Vegan), 0);
        assert_eq!(food_adjustment(FoodPreference::None), -50);
    }

    #[test]
    fn certificate_table() {
        assert_eq!(certificate_price(CertificateType::Digital), 0);
        assert_eq!(certificate_price(CertificateType::Hardcopy), 25);
    }

    #[test]
    fn default_selections_cost_the_base_price() {
        let pricing = calculate_pricing(&base_form(), FALLBACK_BASE_PRICE);
        assert_eq!(pricing.base_price, 499);
        assert_eq!(pricing.accommodation, 0);
        assert_eq!(pricing.food, 0);
        assert_eq!(pricing.certificate, 0);
        assert_eq!(pricing.materials_kit, 0);
        assert_eq!(pricing.networking_dinner, 0);
        assert_eq!(pricing.discount, 0);
        assert_eq!(pricing.total, 499);
    }

    #[test]
    fn everything_selected_sums_all_components() {
        let mut form = base_form();
        form.accommodation_type = AccommodationType::Single;
        form.certificate_type = CertificateType::Hardcopy;
        form.materials_kit = true;
        form.networking_dinner = true;
        let pricing = calculate_pricing(&form, FALLBACK_BASE_PRICE);
        assert_eq!(pricing.total, 499 + 200 + 25 + 75 + 100);
    }

    #[test]
    fn opting_out_of_food_reduces_the_total() {
        let mut form = base_form();
        form.food_preference = FoodPreference::None;
        let pricing = calculate_pricing(&form, FALLBACK_BASE_PRICE);
        assert_eq!(pricing.food, -50);
        assert_eq!(pricing.total, 449);
    }

    #[test]
    fn total_equals_sum_of_parts_minus_discount() {
        for accommodation in AccommodationType::ALL {
            for food in FoodPreference::ALL {
                for certificate in CertificateType::ALL {
                    for extras in [(false, false), (true, false), (false, true), (true, true)] {
                        let mut form = base_form();
                        form.accommodation_type = accommodation;
                        form.food_preference = food;
                        form.certificate_type = certificate;
                        form.materials_kit = extras.0;
                        form.networking_dinner = extras.1;
                        let p = calculate_pricing(&form, FALLBACK_BASE_PRICE);
                        assert_eq!(
                            p.total,
                            p.base_price
                                + p.accommodation
                                + p.food
                                + p.certificate
                                + p.materials_kit
                                + p.networking_dinner
                                - p.discount
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn event_base_price_overrides_the_fallback() {
        let pricing = calculate_pricing(&base_form(), 599);
        assert_eq!(pricing.base_price, 599);
        assert_eq!(pricing.total, 599);
    }

    #[test]
    fn payment_amounts_are_cents() {
        let pricing = calculate_pricing(&base_form(), FALLBACK_BASE_PRICE);
        assert_eq!(pricing.total_cents(), 49_900);
    }

    #[test]
    fn currency_formatting() {
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(499), "$499");
        assert_eq!(format_currency(-50), "-$50");
    }
}
