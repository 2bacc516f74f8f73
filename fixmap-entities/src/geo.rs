use thiserror::Error;

/// A geographical point in degrees (WGS84).
///
/// Both coordinates are guaranteed to be finite and within
/// [-90, 90] / [-180, 180] respectively.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Invalid geographical coordinates")]
pub struct MapPointError;

impl MapPoint {
    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Result<Self, MapPointError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(MapPointError);
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(MapPointError);
        }
        Ok(Self { lat, lng })
    }

    pub const fn lat_deg(self) -> f64 {
        self.lat
    }

    pub const fn lng_deg(self) -> f64 {
        self.lng
    }

    /// Great-circle distance in kilometers (haversine).
    pub fn distance_km(self, other: Self) -> f64 {
        const EARTH_RADIUS_KM: f64 = 6_371.0;
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();
        let a = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_out_of_range_coordinates() {
        assert!(MapPoint::try_from_lat_lng_deg(90.1, 0.0).is_err());
        assert!(MapPoint::try_from_lat_lng_deg(-90.1, 0.0).is_err());
        assert!(MapPoint::try_from_lat_lng_deg(0.0, 180.1).is_err());
        assert!(MapPoint::try_from_lat_lng_deg(0.0, -180.1).is_err());
        assert!(MapPoint::try_from_lat_lng_deg(f64::NAN, 0.0).is_err());
        assert!(MapPoint::try_from_lat_lng_deg(0.0, f64::INFINITY).is_err());
        assert!(MapPoint::try_from_lat_lng_deg(90.0, -180.0).is_ok());
    }

    #[test]
    fn haversine_distance() {
        let berlin = MapPoint::try_from_lat_lng_deg(52.52, 13.405).unwrap();
        let hamburg = MapPoint::try_from_lat_lng_deg(53.551, 9.994).unwrap();
        let d = berlin.distance_km(hamburg);
        assert!((d - 255.0).abs() < 5.0);
        assert_eq!(0.0, berlin.distance_km(berlin));
    }
}
