use rand::{distr::{Distribution, StandardUniform}, seq::IndexedRandom, Rng};

use super::color::Color;
use super::rule::{HarmonyRule, HARMONY_RULES};

impl Distribution<Color> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        Color::rgb(rng.random(), rng.random(), rng.random())
    }
}

impl Distribution<HarmonyRule> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> HarmonyRule {
        *HARMONY_RULES.choose(rng).unwrap()
    }
}

pub fn random_color() -> Color {
    rand::rng().random()
}

pub fn random_rule() -> HarmonyRule {
    rand::rng().random()
}
