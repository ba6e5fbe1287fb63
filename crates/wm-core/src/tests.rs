//! Unit tests for wm-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, VertexId};

    #[test]
    fn ordering() {
        assert!(VertexId(0) < VertexId(1));
        assert!(EdgeId(100) > EdgeId(99));
    }

    #[test]
    fn raw_roundtrip() {
        let id = VertexId::from(53_085_123_u64);
        assert_eq!(id.raw(), 53_085_123);
    }

    #[test]
    fn display() {
        assert_eq!(VertexId(7).to_string(), "VertexId(7)");
        assert_eq!(EdgeId(9).to_string(), "EdgeId(9)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(37.8716, -122.2727);
        assert_eq!(p.distance_miles(p), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPoint::new(37.8716, -122.2727);
        let b = GeoPoint::new(37.8690, -122.2590);
        let ab = a.distance_miles(b);
        let ba = b.distance_miles(a);
        assert!((ab - ba).abs() < 1e-12, "{ab} vs {ba}");
    }

    #[test]
    fn one_degree_of_latitude() {
        // 3963 mi * pi / 180 ≈ 69.17 mi
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_miles(b);
        assert!((d - 69.167).abs() < 0.01, "got {d}");
    }

    #[test]
    fn cardinal_bearings() {
        let origin = GeoPoint::new(0.0, 0.0);
        let north = origin.bearing_deg(GeoPoint::new(1.0, 0.0));
        let east = origin.bearing_deg(GeoPoint::new(0.0, 1.0));
        let west = origin.bearing_deg(GeoPoint::new(0.0, -1.0));
        let south = origin.bearing_deg(GeoPoint::new(-1.0, 0.0));
        assert!(north.abs() < 1e-9, "north = {north}");
        assert!((east - 90.0).abs() < 1e-9, "east = {east}");
        assert!((west + 90.0).abs() < 1e-9, "west = {west}");
        assert!((south.abs() - 180.0).abs() < 1e-9, "south = {south}");
    }

    #[test]
    fn unit_vector_has_unit_length() {
        let v = GeoPoint::new(37.87, -122.27).unit_vector();
        let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        assert!((len - 1.0).abs() < 1e-12);
    }

    #[test]
    fn lon_lat_constructor_order() {
        let p = GeoPoint::from_lon_lat(-122.27, 37.87);
        assert_eq!(p, GeoPoint::new(37.87, -122.27));
    }
}
