//! Length units and conversions between radians and lengths on the earth's surface

use crate::AlongError;
use std::fmt;
use std::str::FromStr;

/// Mean earth radius in meters
pub const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

/// Meters covered by one degree of arc, as used for the `degrees` unit
const METERS_PER_DEGREE: f64 = 111_325.0;

const METERS_PER_MILE: f64 = 1_609.344;
const METERS_PER_NAUTICAL_MILE: f64 = 1_852.0;
const FEET_PER_METER: f64 = 3.280_84;

/// Unit in which distances are expressed
///
/// A distance is only meaningful together with its unit, and every traversal works
/// in a single unit from start to finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Units {
    Degrees,
    Radians,
    Miles,
    #[default]
    Kilometers,
    Meters,
    NauticalMiles,
    Feet,
}

impl Units {
    /// All supported units
    pub const ALL: [Units; 7] = [
        Units::Degrees,
        Units::Radians,
        Units::Miles,
        Units::Kilometers,
        Units::Meters,
        Units::NauticalMiles,
        Units::Feet,
    ];

    /// Length of one radian of arc, expressed in this unit
    #[inline]
    pub fn factor(self) -> f64 {
        match self {
            Units::Degrees => EARTH_RADIUS_METERS / METERS_PER_DEGREE,
            Units::Radians => 1.0,
            Units::Miles => EARTH_RADIUS_METERS / METERS_PER_MILE,
            Units::Kilometers => EARTH_RADIUS_METERS / 1000.0,
            Units::Meters => EARTH_RADIUS_METERS,
            Units::NauticalMiles => EARTH_RADIUS_METERS / METERS_PER_NAUTICAL_MILE,
            Units::Feet => EARTH_RADIUS_METERS * FEET_PER_METER,
        }
    }

    /// Canonical lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            Units::Degrees => "degrees",
            Units::Radians => "radians",
            Units::Miles => "miles",
            Units::Kilometers => "kilometers",
            Units::Meters => "meters",
            Units::NauticalMiles => "nauticalmiles",
            Units::Feet => "feet",
        }
    }
}

/// Convert an arc in radians into a length in `units`
#[inline]
pub fn radians_to_length(radians: f64, units: Units) -> f64 {
    radians * units.factor()
}

/// Convert a length in `units` into an arc in radians
#[inline]
pub fn length_to_radians(length: f64, units: Units) -> f64 {
    length / units.factor()
}

/// Convert a length between two units
#[inline]
pub fn convert_length(length: f64, from: Units, to: Units) -> f64 {
    radians_to_length(length_to_radians(length, from), to)
}

impl FromStr for Units {
    type Err = AlongError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "degrees" => Ok(Units::Degrees),
            "radians" => Ok(Units::Radians),
            "miles" => Ok(Units::Miles),
            "kilometers" | "kilometres" => Ok(Units::Kilometers),
            "meters" | "metres" => Ok(Units::Meters),
            "nauticalmiles" => Ok(Units::NauticalMiles),
            "feet" => Ok(Units::Feet),
            _ => Err(AlongError::UnknownUnits(s.to_string())),
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_kilometers() {
        assert_eq!(Units::default(), Units::Kilometers);
    }

    #[test]
    fn test_radians_to_length() {
        assert!((radians_to_length(1.0, Units::Radians) - 1.0).abs() < f64::EPSILON);
        assert!((radians_to_length(1.0, Units::Kilometers) - 6371.0088).abs() < 1e-9);
        assert!((radians_to_length(1.0, Units::Miles) - 3958.761_3).abs() < 1e-3);
    }

    #[test]
    fn test_length_to_radians_inverts() {
        for units in Units::ALL {
            let radians = length_to_radians(radians_to_length(0.25, units), units);
            assert!((radians - 0.25).abs() < 1e-12, "{units}");
        }
    }

    #[test]
    fn test_convert_length() {
        let km = convert_length(1.0, Units::Miles, Units::Kilometers);
        assert!((km - 1.609_344).abs() < 1e-9);

        let meters = convert_length(1.0, Units::NauticalMiles, Units::Meters);
        assert!((meters - 1852.0).abs() < 1e-6);

        // One "degree" follows the 111325 m convention, not the sphere's arc
        let meters = convert_length(1.0, Units::Degrees, Units::Meters);
        assert!((meters - 111_325.0).abs() < 1e-6);
    }

    #[test]
    fn test_parse_units() {
        assert_eq!("miles".parse::<Units>(), Ok(Units::Miles));
        assert_eq!("Kilometres".parse::<Units>(), Ok(Units::Kilometers));
        assert_eq!(" metres ".parse::<Units>(), Ok(Units::Meters));
        assert_eq!(
            "furlongs".parse::<Units>(),
            Err(AlongError::UnknownUnits("furlongs".to_string()))
        );
    }

    #[test]
    fn test_display_parses_back() {
        for units in Units::ALL {
            assert_eq!(units.to_string().parse::<Units>(), Ok(units));
        }
    }
}
