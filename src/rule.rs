use std::{fmt, str::FromStr};
use serde::{Serialize, Deserialize};

use super::error::RuleParseError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyRule {
    #[default]
    Monochromatic,
    Analogous,
    Complementary,
    Triadic,
}

pub const HARMONY_RULES: [HarmonyRule; 4] = [
    HarmonyRule::Monochromatic,
    HarmonyRule::Analogous,
    HarmonyRule::Complementary,
    HarmonyRule::Triadic,
];

impl HarmonyRule {
    pub fn name(self) -> &'static str {
        match self {
            HarmonyRule::Monochromatic => "monochromatic",
            HarmonyRule::Analogous => "analogous",
            HarmonyRule::Complementary => "complementary",
            HarmonyRule::Triadic => "triadic",
        }
    }
}

impl fmt::Display for HarmonyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rule names are matched exactly; `"Triadic"` is not a rule.
impl FromStr for HarmonyRule {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<HarmonyRule, RuleParseError> {
        HARMONY_RULES
            .into_iter()
            .find(|rule| rule.name() == s)
            .ok_or_else(|| RuleParseError(s.to_string()))
    }
}
