//! Mapping from WMO weather codes to display categories.
//!
//! The table is total: every integer resolves to a category, with
//! unmapped codes falling back to clear sky. See
//! <https://open-meteo.com/en/docs#weathervariables> for the code list.

use serde::{Deserialize, Serialize};

/// Display condition categories derived from WMO weather codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    #[default]
    Clear,
    PartlyCloudy,
    Fog,
    Rain,
    Snow,
    Showers,
    Thunderstorm,
}

/// Icon identifier for a condition category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionIcon {
    Sun,
    SunCloud,
    CloudFog,
    CloudRain,
    Snowflake,
    CloudShowers,
    CloudLightning,
}

impl Condition {
    /// Convert a WMO weather code to a condition category.
    ///
    /// Code ranges are tested in a fixed priority order; the first
    /// matching range wins. Codes outside every range (negative, gaps,
    /// above 99) resolve to `Clear`, same as code 0. Never fails.
    pub fn from_wmo_code(code: i32) -> Self {
        match code {
            0 => Self::Clear,
            1..=3 => Self::PartlyCloudy,
            45..=48 => Self::Fog,
            51..=67 => Self::Rain,
            71..=77 => Self::Snow,
            80..=82 => Self::Showers,
            95..=99 => Self::Thunderstorm,
            _ => Self::Clear,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Clear => "Clear sky",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Fog => "Fog",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Showers => "Showers",
            Self::Thunderstorm => "Thunderstorm",
        }
    }

    pub fn icon(&self) -> ConditionIcon {
        match self {
            Self::Clear => ConditionIcon::Sun,
            Self::PartlyCloudy => ConditionIcon::SunCloud,
            Self::Fog => ConditionIcon::CloudFog,
            Self::Rain => ConditionIcon::CloudRain,
            Self::Snow => ConditionIcon::Snowflake,
            Self::Showers => ConditionIcon::CloudShowers,
            Self::Thunderstorm => ConditionIcon::CloudLightning,
        }
    }

    /// Accent color for the condition, as a hex string.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Clear => "#ffa726",
            Self::PartlyCloudy => "#90a4ae",
            Self::Fog => "#78909c",
            Self::Rain => "#42a5f5",
            Self::Snow => "#81d4fa",
            Self::Showers => "#5c6bc0",
            Self::Thunderstorm => "#7e57c2",
        }
    }
}

impl ConditionIcon {
    /// Terminal glyph for the icon.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Sun => "\u{2600}",
            Self::SunCloud => "\u{26c5}",
            Self::CloudFog => "\u{1f32b}",
            Self::CloudRain => "\u{1f327}",
            Self::Snowflake => "\u{2744}",
            Self::CloudShowers => "\u{1f326}",
            Self::CloudLightning => "\u{26c8}",
        }
    }
}

/// Pure derived view of a weather code: icon, label and accent color.
/// No identity, no mutation; recomputed on demand from a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherPresentation {
    pub icon: ConditionIcon,
    pub label: &'static str,
    pub color: &'static str,
}

/// Resolve a WMO weather code to its presentation. Total and
/// deterministic; see [`Condition::from_wmo_code`] for the range table.
pub fn classify(code: i32) -> WeatherPresentation {
    let condition = Condition::from_wmo_code(code);
    WeatherPresentation {
        icon: condition.icon(),
        label: condition.label(),
        color: condition.color(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_sky() {
        assert_eq!(Condition::from_wmo_code(0), Condition::Clear);
    }

    #[test]
    fn partly_cloudy_range() {
        for code in 1..=3 {
            assert_eq!(Condition::from_wmo_code(code), Condition::PartlyCloudy);
        }
    }

    #[test]
    fn fog_range() {
        for code in 45..=48 {
            assert_eq!(Condition::from_wmo_code(code), Condition::Fog);
        }
    }

    #[test]
    fn rain_range() {
        for code in 51..=67 {
            assert_eq!(Condition::from_wmo_code(code), Condition::Rain);
        }
    }

    #[test]
    fn snow_range() {
        for code in 71..=77 {
            assert_eq!(Condition::from_wmo_code(code), Condition::Snow);
        }
    }

    #[test]
    fn showers_range() {
        for code in 80..=82 {
            assert_eq!(Condition::from_wmo_code(code), Condition::Showers);
        }
    }

    #[test]
    fn thunderstorm_range() {
        for code in 95..=99 {
            assert_eq!(Condition::from_wmo_code(code), Condition::Thunderstorm);
        }
    }

    #[test]
    fn unmapped_codes_fall_back_to_clear() {
        assert_eq!(classify(-5), classify(0));
        assert_eq!(classify(100), classify(0));
        assert_eq!(classify(42), classify(0));
        assert_eq!(Condition::from_wmo_code(i32::MIN), Condition::Clear);
        assert_eq!(Condition::from_wmo_code(i32::MAX), Condition::Clear);
    }

    #[test]
    fn every_code_in_wmo_range_hits_exactly_one_branch() {
        //0..=99 must be covered without overlap: each code lands in one
        // category, and each in-range category matches its table row.
        for code in 0..=99 {
            let condition = Condition::from_wmo_code(code);
            let expected = match code {
                0 => Condition::Clear,
                1..=3 => Condition::PartlyCloudy,
                45..=48 => Condition::Fog,
                51..=67 => Condition::Rain,
                71..=77 => Condition::Snow,
                80..=82 => Condition::Showers,
                95..=99 => Condition::Thunderstorm,
                _ => Condition::Clear,
            };
            assert_eq!(condition, expected, "code {code}");
        }
    }

    #[test]
    fn presentation_is_consistent_with_condition_accessors() {
        let p = classify(3);
        assert_eq!(p.label, "Partly cloudy");
        assert_eq!(p.icon, ConditionIcon::SunCloud);
        assert_eq!(p.color, Condition::PartlyCloudy.color());
    }
}
