use crate::models::Coordinates;

/// Mean Earth radius used for great-circle distances
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points (haversine formula)
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lon = (to.lon - from.lon).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Axis-aligned search box around a point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub west: f64,
    pub north: f64,
    pub east: f64,
    pub south: f64,
}

impl BoundingBox {
    /// Box extending `radius_deg` degrees in every direction from `center`
    pub fn around(center: Coordinates, radius_deg: f64) -> Self {
        Self {
            west: center.lon - radius_deg,
            north: center.lat + radius_deg,
            east: center.lon + radius_deg,
            south: center.lat - radius_deg,
        }
    }

    /// `west,north,east,south`, the order Nominatim expects for `viewbox`
    pub fn to_viewbox(&self) -> String {
        format!("{},{},{},{}", self.west, self.north, self.east, self.south)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lon: f64) -> Coordinates {
        Coordinates { lat, lon }
    }

    #[test]
    fn test_zero_distance() {
        let santiago = point(-33.4489, -70.6693);
        assert_eq!(haversine_km(santiago, santiago), 0.0);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let d = haversine_km(point(0.0, 0.0), point(1.0, 0.0));
        assert!((d - 111.195).abs() < 0.01, "got {d}");
    }

    #[test]
    fn test_santiago_to_valparaiso() {
        let santiago = point(-33.4489, -70.6693);
        let valparaiso = point(-33.0472, -71.6127);
        let d = haversine_km(santiago, valparaiso);
        assert!((d - 98.0).abs() < 2.0, "got {d}");
        assert!((haversine_km(valparaiso, santiago) - d).abs() < 1e-9);
    }

    #[test]
    fn test_bounding_box() {
        let bbox = BoundingBox::around(point(-33.5, -70.5), 0.25);
        assert_eq!(
            bbox,
            BoundingBox {
                west: -70.75,
                north: -33.25,
                east: -70.25,
                south: -33.75,
            }
        );
        assert_eq!(bbox.to_viewbox(), "-70.75,-33.25,-70.25,-33.75");
    }
}
