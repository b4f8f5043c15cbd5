//! Static city registry for both weather regions.
//!
//! The registry maps each selectable city to its IANA timezone identifier and
//! exposes the two disjoint, ordered city lists that populate the selection
//! control: the domestic (Naija) list and the foreign (global) list.

use std::fmt;

use serde::Serialize;

use crate::error::RegionError;

/// A selectable city with the timezone its clock is displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct City {
    pub name: &'static str,
    pub timezone_id: &'static str,
}

impl City {
    const fn new(name: &'static str, timezone_id: &'static str) -> Self {
        Self { name, timezone_id }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Cities shown in the domestic region, in selection order.
pub const DOMESTIC_CITIES: &[City] = &[
    City::new("Lagos", "Africa/Lagos"),
    City::new("Abuja", "Africa/Lagos"),
    City::new("Port Harcourt", "Africa/Lagos"),
];

/// Cities shown in the foreign region, in selection order.
pub const FOREIGN_CITIES: &[City] = &[
    City::new("London", "Europe/London"),
    City::new("New York", "America/New_York"),
    City::new("Tokyo", "Asia/Tokyo"),
    City::new("Berlin", "Europe/Berlin"),
    City::new("San Francisco", "America/Los_Angeles"),
];

/// Which of the two regions a city list belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionKind {
    Domestic,
    Foreign,
}

impl RegionKind {
    /// The ordered city list of this region.
    pub fn cities(self) -> &'static [City] {
        match self {
            RegionKind::Domestic => DOMESTIC_CITIES,
            RegionKind::Foreign => FOREIGN_CITIES,
        }
    }

    /// Find a city by exact name within this region only.
    pub fn find(self, name: &str) -> Option<City> {
        self.cities().iter().copied().find(|city| city.name == name)
    }

    pub fn contains(self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RegionKind::Domestic => "domestic",
            RegionKind::Foreign => "foreign",
        }
    }
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Iterate over every registered city, domestic first.
pub fn all_cities() -> impl Iterator<Item = City> {
    DOMESTIC_CITIES.iter().chain(FOREIGN_CITIES).copied()
}

/// Look up a city in either list.
pub fn lookup(name: &str) -> Result<City, RegionError> {
    all_cities()
        .find(|city| city.name == name)
        .ok_or_else(|| RegionError::UnknownCity(name.to_string()))
}

/// Resolve the timezone identifier of a registered city.
pub fn timezone_of(name: &str) -> Result<&'static str, RegionError> {
    lookup(name).map(|city| city.timezone_id)
}

/// The city `offset` positions away from `current` in the region list, wrapping
/// at both ends. An unknown `current` starts from the head of the list.
pub fn cycle(region: RegionKind, current: &str, offset: isize) -> City {
    let cities = region.cities();
    let len = cities.len() as isize;
    let index = cities
        .iter()
        .position(|city| city.name == current)
        .unwrap_or(0) as isize;
    cities[(index + offset).rem_euclid(len) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timezone_table_matches_expected() {
        let expected = [
            ("Lagos", "Africa/Lagos"),
            ("Abuja", "Africa/Lagos"),
            ("Port Harcourt", "Africa/Lagos"),
            ("London", "Europe/London"),
            ("New York", "America/New_York"),
            ("Tokyo", "Asia/Tokyo"),
            ("Berlin", "Europe/Berlin"),
            ("San Francisco", "America/Los_Angeles"),
        ];
        for (city, tz) in expected {
            assert_eq!(timezone_of(city), Ok(tz), "timezone for {}", city);
        }
    }

    #[test]
    fn test_city_lists_are_disjoint() {
        for city in DOMESTIC_CITIES {
            assert!(!RegionKind::Foreign.contains(city.name));
        }
        for city in FOREIGN_CITIES {
            assert!(!RegionKind::Domestic.contains(city.name));
        }
    }

    #[test]
    fn test_list_order_and_heads() {
        assert_eq!(DOMESTIC_CITIES[0].name, "Lagos");
        assert_eq!(FOREIGN_CITIES[0].name, "London");
        assert_eq!(DOMESTIC_CITIES.len(), 3);
        assert_eq!(FOREIGN_CITIES.len(), 5);
    }

    #[test]
    fn test_unknown_city_is_rejected() {
        assert_eq!(
            timezone_of("Atlantis"),
            Err(RegionError::UnknownCity("Atlantis".to_string()))
        );
        // Lookup is exact, not case-insensitive
        assert!(lookup("lagos").is_err());
    }

    #[test]
    fn test_cycle_wraps_in_both_directions() {
        assert_eq!(cycle(RegionKind::Domestic, "Lagos", 1).name, "Abuja");
        assert_eq!(cycle(RegionKind::Domestic, "Port Harcourt", 1).name, "Lagos");
        assert_eq!(cycle(RegionKind::Foreign, "London", -1).name, "San Francisco");
        assert_eq!(cycle(RegionKind::Foreign, "Tokyo", 0).name, "Tokyo");
    }

    #[test]
    fn test_find_is_region_scoped() {
        assert!(RegionKind::Domestic.find("Abuja").is_some());
        assert!(RegionKind::Domestic.find("Berlin").is_none());
        assert_eq!(RegionKind::Foreign.to_string(), "foreign");
    }
}
