//! Monitoring-location reference table.
//!
//! A process-wide read-only table of named vegetation-monitoring
//! points. Components that need location names take it (or entries
//! from it) as input; nothing mutates it.

use serde::Serialize;

/// A named geographic point of interest for vegetation monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonitoringLocation {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub region: &'static str,
    pub country: &'static str,
}

/// Global locations of interest for vegetation monitoring.
pub const MONITORING_LOCATIONS: &[MonitoringLocation] = &[
    MonitoringLocation {
        name: "Sahel Region",
        lat: 15.5527,
        lon: 18.7324,
        region: "West Africa",
        country: "Chad",
    },
    MonitoringLocation {
        name: "Congo Basin",
        lat: -0.7264,
        lon: 23.6566,
        region: "Central Africa",
        country: "DRC",
    },
    MonitoringLocation {
        name: "Ethiopian Highlands",
        lat: 9.145,
        lon: 40.4897,
        region: "East Africa",
        country: "Ethiopia",
    },
    MonitoringLocation {
        name: "Serengeti Plains",
        lat: -2.3333,
        lon: 34.8333,
        region: "East Africa",
        country: "Tanzania",
    },
    MonitoringLocation {
        name: "Okavango Delta",
        lat: -19.2833,
        lon: 22.7833,
        region: "Southern Africa",
        country: "Botswana",
    },
    MonitoringLocation {
        name: "Nile Delta",
        lat: 31.0,
        lon: 31.2357,
        region: "North Africa",
        country: "Egypt",
    },
    MonitoringLocation {
        name: "Madagascar Rainforest",
        lat: -18.7669,
        lon: 46.8691,
        region: "East Africa",
        country: "Madagascar",
    },
    MonitoringLocation {
        name: "Kruger National Park",
        lat: -23.9884,
        lon: 31.5547,
        region: "Southern Africa",
        country: "South Africa",
    },
    MonitoringLocation {
        name: "Lake Victoria Basin",
        lat: -1.2921,
        lon: 36.8219,
        region: "East Africa",
        country: "Kenya",
    },
    MonitoringLocation {
        name: "Atlas Mountains",
        lat: 31.0522,
        lon: -7.9372,
        region: "North Africa",
        country: "Morocco",
    },
];

impl MonitoringLocation {
    /// Look up a location by exact name.
    pub fn find(name: &str) -> Option<&'static MonitoringLocation> {
        MONITORING_LOCATIONS.iter().find(|l| l.name == name)
    }
}

/// Nearest monitored location to a coordinate, by squared degree
/// distance. Adequate at the table's continental spacing; not a
/// geodesic.
pub fn nearest_location(lat: f64, lon: f64) -> Option<&'static MonitoringLocation> {
    MONITORING_LOCATIONS.iter().min_by(|a, b| {
        let da = (a.lat - lat).powi(2) + (a.lon - lon).powi(2);
        let db = (b.lat - lat).powi(2) + (b.lon - lon).powi(2);
        da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_ten_unique_names() {
        assert_eq!(MONITORING_LOCATIONS.len(), 10);
        let mut names: Vec<_> = MONITORING_LOCATIONS.iter().map(|l| l.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn find_by_name() {
        let loc = MonitoringLocation::find("Okavango Delta").unwrap();
        assert_eq!(loc.country, "Botswana");
        assert!(MonitoringLocation::find("Atlantis").is_none());
    }

    #[test]
    fn nearest_picks_the_closest_entry() {
        // Right on top of the Serengeti entry.
        let loc = nearest_location(-2.3, 34.8).unwrap();
        assert_eq!(loc.name, "Serengeti Plains");
    }
}
