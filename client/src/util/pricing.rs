//! Subscription plans, promo codes and the checkout price calculator.
//!
//! Prices are whole BAM amounts. Yearly billing charges ten months (two
//! months free); a promo code then takes a percentage off the period price.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

/// Billing cadence selected at checkout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl BillingPeriod {
    /// Months charged for one period.
    pub fn charged_months(self) -> u32 {
        match self {
            Self::Monthly => 1,
            Self::Yearly => 10,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "monthly" => Some(Self::Monthly),
            "yearly" => Some(Self::Yearly),
            _ => None,
        }
    }
}

/// Promotion entry in the fixed code table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PromoCode {
    pub code: &'static str,
    pub discount_percent: u32,
    /// Months the discount applies; `None` means for the whole subscription.
    pub duration_months: Option<u32>,
    pub description: &'static str,
}

pub const PROMO_CODES: &[PromoCode] = &[
    PromoCode {
        code: "EARLYBIRD100",
        discount_percent: 100,
        duration_months: Some(6),
        description: "6 mjeseci BESPLATNO",
    },
    PromoCode {
        code: "REFERRAL20",
        discount_percent: 20,
        duration_months: None,
        description: "20% OFF zauvijek",
    },
    PromoCode {
        code: "FRIEND50",
        discount_percent: 50,
        duration_months: Some(3),
        description: "50% OFF 3 mjeseca",
    },
    PromoCode {
        code: "LAUNCH2026",
        discount_percent: 30,
        duration_months: Some(6),
        description: "30% OFF 6 mjeseci",
    },
];

/// Case-insensitive promo lookup. Surrounding whitespace is ignored.
pub fn lookup_promo(code: &str) -> Option<&'static PromoCode> {
    let code = code.trim();
    if code.is_empty() {
        return None;
    }
    PROMO_CODES.iter().find(|p| p.code.eq_ignore_ascii_case(code))
}

/// Final price for one billing period, rounded half-up.
pub fn calculate_price(base_price: u32, period: BillingPeriod, promo_code: Option<&str>) -> u32 {
    let price = u64::from(base_price) * u64::from(period.charged_months());
    let Some(promo) = promo_code.and_then(lookup_promo) else {
        return clamp_u32(price);
    };
    let kept_percent = u64::from(100 - promo.discount_percent.min(100));
    clamp_u32((price * kept_percent + 50) / 100)
}

fn clamp_u32(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Subscription plan offered at registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub monthly_price: u32,
    pub features: &'static [&'static str],
}

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Starter",
        monthly_price: 15,
        features: &["Osnovna evidencija", "Do 50 prihoda/mj", "Fakture", "Email podrška"],
    },
    Plan {
        name: "Professional",
        monthly_price: 29,
        features: &["Email inbox AI", "Neograničeno", "Uplatnice", "Prioritet"],
    },
    Plan {
        name: "Business",
        monthly_price: 49,
        features: &["API pristup", "Bilans", "Custom izvještaji", "Multi korisnici"],
    },
    Plan {
        name: "Enterprise",
        monthly_price: 99,
        features: &["Dedicated podrška", "Integracije", "SLA", "White label"],
    },
];

pub const DEFAULT_PLAN: &str = "Professional";

/// Look up a plan by name, falling back to [`DEFAULT_PLAN`].
pub fn plan_by_name(name: &str) -> &'static Plan {
    PLANS
        .iter()
        .find(|p| p.name == name)
        .or_else(|| PLANS.iter().find(|p| p.name == DEFAULT_PLAN))
        .unwrap_or(&PLANS[0])
}
