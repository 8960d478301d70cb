use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Plan a visitor says they are interested in. Serialized with the same
/// identifiers the form's `<select>` uses.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PlanPreference {
    Free,
    Pro,
    ProPlus,
    Elite,
    NotDecided,
}

impl PlanPreference {
    pub const ALL: [PlanPreference; 5] = [
        PlanPreference::Free,
        PlanPreference::Pro,
        PlanPreference::ProPlus,
        PlanPreference::Elite,
        PlanPreference::NotDecided,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PlanPreference::Free => "free",
            PlanPreference::Pro => "pro",
            PlanPreference::ProPlus => "pro_plus",
            PlanPreference::Elite => "elite",
            PlanPreference::NotDecided => "not_decided",
        }
    }

    pub fn label(self) -> &'static str {
        self.display().label
    }

    pub fn color(self) -> &'static str {
        self.display().color
    }

    pub fn motivation(self) -> &'static str {
        self.display().motivation
    }

    pub fn display(self) -> &'static PlanDisplay {
        match self {
            PlanPreference::Free => &FREE,
            PlanPreference::Pro => &PRO,
            PlanPreference::ProPlus => &PRO_PLUS,
            PlanPreference::Elite => &ELITE,
            PlanPreference::NotDecided => &NOT_DECIDED,
        }
    }
}

impl fmt::Display for PlanPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPlan(pub String);

impl FromStr for PlanPreference {
    type Err = UnknownPlan;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlanPreference::ALL
            .into_iter()
            .find(|plan| plan.as_str() == s)
            .ok_or_else(|| UnknownPlan(s.to_string()))
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct PlanDisplay {
    pub label: &'static str,
    pub color: &'static str,
    pub motivation: &'static str,
}

static FREE: PlanDisplay = PlanDisplay {
    label: "Free",
    color: "text-gray-300",
    motivation: "Great start! Discipline begins with your first step.",
};

static PRO: PlanDisplay = PlanDisplay {
    label: "Pro",
    color: "text-blue-400",
    motivation: "Athlete mode activated. Stay consistent.",
};

static PRO_PLUS: PlanDisplay = PlanDisplay {
    label: "Pro+",
    color: "text-orange-400",
    motivation: "Dominator mindset. You’re built different.",
};

static ELITE: PlanDisplay = PlanDisplay {
    label: "Elite",
    color: "text-yellow-400",
    motivation: "Elite circle. Only discipline survives here.",
};

static NOT_DECIDED: PlanDisplay = PlanDisplay {
    label: "Not Decided Yet",
    color: "text-green-400",
    motivation: "No pressure. Just don’t stop. We’ll help you choose.",
};

/// Founder pricing in rupees, shown on the membership cards only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price {
    pub current: u32,
    pub original: u32,
}

const fn price(current: u32, original: u32) -> Price {
    Price { current, original }
}

const PRO_PRICES: &[(u32, Price)] = &[
    (1, price(699, 999)),
    (3, price(1599, 2499)),
    (6, price(2999, 4499)),
];

const PRO_PLUS_PRICES: &[(u32, Price)] = &[
    (1, price(999, 1499)),
    (3, price(2499, 3999)),
    (6, price(4499, 6999)),
];

const ELITE_PRICES: &[(u32, Price)] = &[
    (3, price(9999, 14999)),
    (6, price(14999, 24999)),
];

/// Durations (in months) a paid plan can be bought for, with their prices.
/// Free and "not decided" have no price table.
pub fn price_table(plan: PlanPreference) -> &'static [(u32, Price)] {
    match plan {
        PlanPreference::Pro => PRO_PRICES,
        PlanPreference::ProPlus => PRO_PLUS_PRICES,
        PlanPreference::Elite => ELITE_PRICES,
        PlanPreference::Free | PlanPreference::NotDecided => &[],
    }
}

pub fn price_for(plan: PlanPreference, months: u32) -> Option<Price> {
    price_table(plan)
        .iter()
        .find(|(m, _)| *m == months)
        .map(|(_, p)| *p)
}

/// Duration selected when the pricing section first renders.
pub fn default_months(plan: PlanPreference) -> u32 {
    match plan {
        PlanPreference::Elite => 3,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_values_parse_to_plans() {
        for plan in PlanPreference::ALL {
            assert_eq!(plan.as_str().parse::<PlanPreference>(), Ok(plan));
        }
        assert_eq!(
            "platinum".parse::<PlanPreference>(),
            Err(UnknownPlan("platinum".to_string()))
        );
        assert!("".parse::<PlanPreference>().is_err());
    }

    #[test]
    fn pro_plus_display() {
        assert_eq!(PlanPreference::ProPlus.label(), "Pro+");
        assert_eq!(PlanPreference::ProPlus.color(), "text-orange-400");
        assert_eq!(
            PlanPreference::Elite.motivation(),
            "Elite circle. Only discipline survives here."
        );
    }

    #[test]
    fn serde_uses_form_identifiers() {
        let json = serde_json::to_string(&PlanPreference::NotDecided).unwrap();
        assert_eq!(json, "\"not_decided\"");
        let plan: PlanPreference = serde_json::from_str("\"pro_plus\"").unwrap();
        assert_eq!(plan, PlanPreference::ProPlus);
    }

    #[test]
    fn prices_by_duration() {
        assert_eq!(price_for(PlanPreference::Pro, 3), Some(price(1599, 2499)));
        assert_eq!(price_for(PlanPreference::ProPlus, 6), Some(price(4499, 6999)));
        assert_eq!(price_for(PlanPreference::Elite, 6), Some(price(14999, 24999)));
        // Elite is not sold monthly
        assert_eq!(price_for(PlanPreference::Elite, 1), None);
        assert_eq!(price_for(PlanPreference::Free, 1), None);
    }

    #[test]
    fn default_durations_are_on_the_table() {
        for plan in [PlanPreference::Pro, PlanPreference::ProPlus, PlanPreference::Elite] {
            assert!(price_for(plan, default_months(plan)).is_some());
        }
    }
}
