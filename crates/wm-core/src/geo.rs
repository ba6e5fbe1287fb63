//! Geographic coordinate type and great-circle geometry.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Route costs are sums of many
//! short haversine legs, and single precision loses enough there to make
//! equal-length alternatives compare unequal.

/// Mean Earth radius in miles used by every distance computation.
pub const EARTH_RADIUS_MILES: f64 = 3963.0;

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Build a point from `(lon, lat)` order, the order query callers use.
    #[inline]
    pub fn from_lon_lat(lon: f64, lat: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in miles.
    pub fn distance_miles(self, other: GeoPoint) -> f64 {
        let phi1 = self.lat.to_radians();
        let phi2 = other.lat.to_radians();
        let d_phi = (other.lat - self.lat).to_radians();
        let d_lambda = (other.lon - self.lon).to_radians();

        let a = (d_phi * 0.5).sin().powi(2)
            + phi1.cos() * phi2.cos() * (d_lambda * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_MILES * c
    }

    /// Initial bearing in degrees from `self` toward `other`, in −180..=180.
    ///
    /// 0 is due north and positive angles run clockwise, so a positive change
    /// in bearing between two legs is a right-hand turn.
    pub fn bearing_deg(self, other: GeoPoint) -> f64 {
        let phi1 = self.lat.to_radians();
        let phi2 = other.lat.to_radians();
        let d_lambda = (other.lon - self.lon).to_radians();

        let y = d_lambda.sin() * phi2.cos();
        let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lambda.cos();
        y.atan2(x).to_degrees()
    }

    /// Position on the unit sphere as `[x, y, z]`.
    ///
    /// Straight-line (chord) distance between two such vectors grows
    /// monotonically with great-circle distance, which lets a Euclidean
    /// spatial index answer exact great-circle nearest-neighbour queries.
    pub fn unit_vector(self) -> [f64; 3] {
        let (phi, lambda) = (self.lat.to_radians(), self.lon.to_radians());
        [phi.cos() * lambda.cos(), phi.cos() * lambda.sin(), phi.sin()]
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
