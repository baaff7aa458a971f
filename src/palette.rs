use log::warn;
use serde::{Serialize, Deserialize};

use super::{
    color::*,
    rule::*,
};

pub const FALLBACK_HEX: &str = "#000000";

/// Largest palette the request and command-line surfaces accept.
pub const MAX_COLORS: usize = 64;

const MONOCHROMATIC_MIN_LIGHTNESS: f64 = 10.;
const MONOCHROMATIC_SPAN: f64 = 80.;
const ANALOGOUS_STEP: f64 = 30.;
const TRIADIC_LIGHTNESS_STEP: f64 = 15.;

/// Ordered list of hex color strings. Entries are normally canonical
/// `#RRGGBB` colors; the fallback paths of [`generate_palette`] may also
/// produce copies of the caller's raw input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    pub fn new(colors: Vec<String>) -> Palette {
        Palette { colors }
    }

    /// Builds `count` colors from `base` following `rule`. The base color is
    /// always present when `count >= 1`.
    pub fn generate(base: Color, rule: HarmonyRule, count: usize) -> Palette {
        let base_hsl = base.to_hsl();

        let entries = match rule {
            HarmonyRule::Monochromatic => monochromatic(base_hsl, count),
            HarmonyRule::Analogous => analogous(base_hsl, count),
            HarmonyRule::Complementary => complementary(base_hsl, count),
            HarmonyRule::Triadic => triadic(base_hsl, count),
        };

        let mut colors: Vec<String> = entries
            .into_iter()
            .map(|hsl| Color::from_hsl(hsl).to_hex())
            .collect();

        let base_hex = base.to_hex();
        if !colors.contains(&base_hex) {
            warn!("{} palette lost base color {}, placing it at index {}", rule, base_hex, count / 2);
            if let Some(slot) = colors.get_mut(count / 2) {
                *slot = base_hex;
            }
        }

        colors.truncate(count);
        Palette { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.colors.iter()
    }

    /// Entries that are not valid hex colors come out as black.
    pub fn to_colors(&self) -> Vec<Color> {
        self.colors
            .iter()
            .map(|hex| hex.parse().unwrap_or(Color::BLACK))
            .collect()
    }
}

impl From<Vec<String>> for Palette {
    fn from(colors: Vec<String>) -> Palette {
        Palette::new(colors)
    }
}

impl From<Palette> for Vec<String> {
    fn from(p: Palette) -> Vec<String> {
        p.colors
    }
}

impl IntoIterator for Palette {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.into_iter()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

/// String front end to [`Palette::generate`]. Never fails: an unparseable
/// base yields `count` copies of `#000000` and an unknown rule yields
/// `count` copies of `base_color_hex` as given.
pub fn generate_palette(base_color_hex: &str, rule: &str, count: usize) -> Vec<String> {
    let Ok(base) = base_color_hex.parse::<Color>() else {
        warn!("invalid base color '{}', using {}", base_color_hex, FALLBACK_HEX);
        return vec![FALLBACK_HEX.to_string(); count];
    };

    let Ok(rule) = rule.parse::<HarmonyRule>() else {
        warn!("unknown harmony rule '{}', echoing base color", rule);
        return vec![base_color_hex.to_string(); count];
    };

    Palette::generate(base, rule, count).into()
}

fn wrap_hue(hue: f64) -> f64 {
    let h = hue.rem_euclid(360.);
    if h >= 360. { 0. } else { h }
}

fn monochromatic(base: Hsl, count: usize) -> Vec<Hsl> {
    // a single entry has no ramp to spread over
    if count <= 1 {
        return vec![base; count];
    }

    let step = MONOCHROMATIC_SPAN / (count - 1) as f64;
    (0..count)
        .map(|i| Hsl {
            lightness: MONOCHROMATIC_MIN_LIGHTNESS + i as f64 * step,
            ..base
        })
        .collect()
}

fn analogous(base: Hsl, count: usize) -> Vec<Hsl> {
    let start = base.hue - ANALOGOUS_STEP * (count / 2) as f64;
    (0..count)
        .map(|i| Hsl {
            hue: wrap_hue(start + i as f64 * ANALOGOUS_STEP + 360.),
            ..base
        })
        .collect()
}

fn complementary(base: Hsl, count: usize) -> Vec<Hsl> {
    let complement = (base.hue + 180.) % 360.;
    let rest = count.saturating_sub(1);
    let (base_variations, complement_variations) = if count > 2 {
        (rest / 2, rest.div_ceil(2))
    } else {
        (0, rest)
    };

    let mut entries = Vec::with_capacity(count.max(1));
    entries.push(base);

    for i in 1 ..= base_variations {
        let i = i as f64;
        entries.push(Hsl {
            hue: base.hue,
            saturation: (base.saturation - i * 15.).max(0.),
            lightness: (base.lightness + i * 15.).min(100.),
        });
    }

    // left unclamped, the channel formula keeps the result defined
    for i in 0 .. complement_variations {
        let i = i as f64;
        entries.push(Hsl {
            hue: complement,
            saturation: base.saturation - i * 10.,
            lightness: base.lightness - i * 5.,
        });
    }

    entries
}

fn triadic(base: Hsl, count: usize) -> Vec<Hsl> {
    let hues = [base.hue, (base.hue + 120.) % 360., (base.hue + 240.) % 360.];
    (0..count)
        .map(|i| {
            let k = i % 3;
            let sign = if k % 2 == 0 { 1. } else { -1. };
            let adjust = (i / 3) as f64 * TRIADIC_LIGHTNESS_STEP * sign;
            Hsl {
                hue: hues[k],
                saturation: base.saturation,
                lightness: (base.lightness + adjust).clamp(10., 90.),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUE: Color = Color::rgb(0x3B, 0x82, 0xF6);

    #[test]
    fn wrap_hue_stays_in_range() {
        assert_eq!(wrap_hue(360.), 0.);
        assert_eq!(wrap_hue(-30.), 330.);
        assert_eq!(wrap_hue(725.), 5.);
        let h = wrap_hue(-1e-15);
        assert!((0. ..360.).contains(&h));
    }

    #[test]
    fn monochromatic_ramp_spans_10_to_90() {
        let ramp = monochromatic(BLUE.to_hsl(), 5);
        let lightness: Vec<f64> = ramp.iter().map(|hsl| hsl.lightness).collect();
        assert_eq!(lightness, vec![10., 30., 50., 70., 90.]);
    }

    #[test]
    fn monochromatic_single_entry_keeps_base() {
        let base = BLUE.to_hsl();
        assert_eq!(monochromatic(base, 1), vec![base]);
        assert!(monochromatic(base, 0).is_empty());
    }

    #[test]
    fn complementary_splits_variations() {
        let base = BLUE.to_hsl();
        let complement = (base.hue + 180.) % 360.;

        let entries = complementary(base, 2);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].hue, complement);

        let entries = complementary(base, 6);
        let hues: Vec<f64> = entries.iter().map(|hsl| hsl.hue).collect();
        assert_eq!(hues, vec![base.hue, base.hue, base.hue, complement, complement, complement]);
        assert_eq!(entries[5].saturation, base.saturation - 20.);
        assert_eq!(entries[5].lightness, base.lightness - 10.);
    }

    #[test]
    fn complementary_walk_is_unclamped() {
        let base = BLUE.to_hsl();
        let entries = complementary(base, 41);
        let last = entries.last().unwrap();
        assert!(last.saturation < 0.);
        assert!(last.lightness < 0.);
        assert_eq!(Color::from_hsl(*last).to_hex().len(), 7);
    }

    #[test]
    fn triadic_lightness_alternates_and_clamps() {
        let base = Hsl { hue: 0., saturation: 100., lightness: 50. };
        let lightness: Vec<f64> = triadic(base, 9).iter().map(|hsl| hsl.lightness).collect();
        assert_eq!(lightness, vec![50., 50., 50., 65., 35., 65., 80., 20., 80.]);

        let light = Hsl { lightness: 85., ..base };
        assert_eq!(triadic(light, 4)[3].lightness, 90.);
    }
}
