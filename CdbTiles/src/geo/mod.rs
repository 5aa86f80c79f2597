//! Minimal geodesy needed by the encoders.
//!
//! Angles are radians, heights are metres above the ellipsoid.

mod ellipsoid;
mod region;

pub use ellipsoid::Ellipsoid;
pub use region::{BoundingRegion, GlobeRectangle};

/// A geographic position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cartographic {
    pub longitude: f64,
    pub latitude: f64,
    pub height: f64,
}

impl Cartographic {
    #[must_use]
    pub const fn new(longitude: f64, latitude: f64, height: f64) -> Self {
        Self {
            longitude,
            latitude,
            height,
        }
    }

    /// Build from longitude/latitude in degrees.
    #[must_use]
    pub fn from_degrees(longitude: f64, latitude: f64, height: f64) -> Self {
        Self::new(longitude.to_radians(), latitude.to_radians(), height)
    }
}
