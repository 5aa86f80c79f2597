//! Encoder configuration.

use crate::error::{Error, Result};
use crate::formats::RefineMode;
use crate::geo::Ellipsoid;

/// Geometric error assigned to the root of every tileset.
pub const MAX_GEOMETRIC_ERROR: f64 = 300_000.0;

/// Settings shared by the tileset writers and the instanced encoder.
#[derive(Debug, Clone, PartialEq)]
pub struct TilesConfig {
    /// Geometric error of the root tile; halved at each level below it.
    pub max_geometric_error: f64,
    /// Refinement written by [`write_tileset_json_file`](crate::formats::write_tileset_json_file).
    pub refine: RefineMode,
    /// Declare `3DTILES_content_gltf` in combined tilesets.
    pub use_3d_tiles_next: bool,
    /// Reference ellipsoid for cartographic positions.
    pub ellipsoid: Ellipsoid,
}

impl Default for TilesConfig {
    fn default() -> Self {
        Self {
            max_geometric_error: MAX_GEOMETRIC_ERROR,
            refine: RefineMode::Replace,
            use_3d_tiles_next: false,
            ellipsoid: Ellipsoid::WGS84,
        }
    }
}

impl TilesConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_geometric_error(mut self, max_geometric_error: f64) -> Self {
        self.max_geometric_error = max_geometric_error;
        self
    }

    #[must_use]
    pub fn with_refine(mut self, refine: RefineMode) -> Self {
        self.refine = refine;
        self
    }

    #[must_use]
    pub fn with_3d_tiles_next(mut self, enabled: bool) -> Self {
        self.use_3d_tiles_next = enabled;
        self
    }

    #[must_use]
    pub fn with_ellipsoid(mut self, ellipsoid: Ellipsoid) -> Self {
        self.ellipsoid = ellipsoid;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.max_geometric_error.is_finite() || self.max_geometric_error <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "max_geometric_error must be positive and finite, got {}",
                self.max_geometric_error
            )));
        }

        let radii = self.ellipsoid.radii();
        if !radii.is_finite() || radii.min_element() <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "ellipsoid radii must be positive and finite, got {radii}"
            )));
        }

        Ok(())
    }
}
