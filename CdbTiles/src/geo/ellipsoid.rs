//! Reference ellipsoid and geographic to earth-centered conversion.

use glam::DVec3;
use super::Cartographic;

/// A triaxial reference ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    radii: DVec3,
}

impl Ellipsoid {
    /// WGS84, the ellipsoid CDB positions are expressed on.
    pub const WGS84: Self = Self {
        radii: DVec3::new(6378137.0, 6378137.0, 6356752.314245179),
    };

    #[must_use]
    pub const fn new(radii: DVec3) -> Self {
        Self { radii }
    }

    #[must_use]
    pub const fn radii(&self) -> DVec3 {
        self.radii
    }

    /// Convert a geographic position to earth-centered, earth-fixed Cartesian coordinates.
    #[must_use]
    pub fn cartographic_to_cartesian(&self, cartographic: &Cartographic) -> DVec3 {
        let normal = Self::geodetic_surface_normal_cartographic(cartographic);
        let k = self.radii * self.radii * normal;
        let gamma = normal.dot(k).sqrt();
        k / gamma + normal * cartographic.height
    }

    /// Unit normal to the ellipsoid surface at a geographic position.
    #[must_use]
    pub fn geodetic_surface_normal_cartographic(cartographic: &Cartographic) -> DVec3 {
        let (sin_lon, cos_lon) = cartographic.longitude.sin_cos();
        let (sin_lat, cos_lat) = cartographic.latitude.sin_cos();
        DVec3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat).normalize()
    }

    /// Unit normal to the ellipsoid surface through a Cartesian position.
    #[must_use]
    pub fn geodetic_surface_normal(&self, position: DVec3) -> DVec3 {
        (position / (self.radii * self.radii)).normalize()
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}
