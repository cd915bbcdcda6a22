//! Coordinate order preference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which value of a numeric pair comes first.
///
/// Only consulted for input that is not geometry-tagged; tagged text
/// always reads longitude first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateOrder {
    /// "Lat/Lng": first value is latitude.
    #[default]
    LatLng,
    /// "Lng/Lat": first value is longitude.
    LngLat,
}

impl CoordinateOrder {
    pub fn from_longitude_first(longitude_first: bool) -> Self {
        if longitude_first {
            CoordinateOrder::LngLat
        } else {
            CoordinateOrder::LatLng
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CoordinateOrder::LatLng => "latlng",
            CoordinateOrder::LngLat => "lnglat",
        }
    }
}

impl fmt::Display for CoordinateOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoordinateOrder {
    type Err = OrderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "latlng" | "lat/lng" | "latlon" | "lat/lon" => Ok(CoordinateOrder::LatLng),
            "lnglat" | "lng/lat" | "lonlat" | "lon/lat" => Ok(CoordinateOrder::LngLat),
            _ => Err(OrderParseError::Unknown(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderParseError {
    #[error("Unknown coordinate order: '{0}'. Expected 'latlng' or 'lnglat'")]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lat_first() {
        assert_eq!(CoordinateOrder::default(), CoordinateOrder::LatLng);
    }

    #[test]
    fn test_parse_order_aliases() {
        assert_eq!("Lng/Lat".parse::<CoordinateOrder>(), Ok(CoordinateOrder::LngLat));
        assert_eq!(" latlng ".parse::<CoordinateOrder>(), Ok(CoordinateOrder::LatLng));
        assert_eq!("LONLAT".parse::<CoordinateOrder>(), Ok(CoordinateOrder::LngLat));
        assert!(matches!(
            "xy".parse::<CoordinateOrder>(),
            Err(OrderParseError::Unknown(_))
        ));
    }

    #[test]
    fn test_from_longitude_first() {
        assert_eq!(CoordinateOrder::from_longitude_first(true), CoordinateOrder::LngLat);
        assert_eq!(CoordinateOrder::from_longitude_first(false), CoordinateOrder::LatLng);
        assert_eq!(CoordinateOrder::LngLat.to_string(), "lnglat");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&CoordinateOrder::LngLat).unwrap();
        assert_eq!(json, "\"lnglat\"");
    }
}
