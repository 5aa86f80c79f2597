//! Globe rectangles and bounding regions.
//!
//! CDB geocells never straddle the antimeridian, so unions are plain min/max
//! envelopes. `center` still wraps rectangles with `east < west`.

use std::f64::consts::{PI, TAU};

use super::Cartographic;

/// A longitude/latitude rectangle in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GlobeRectangle {
    west: f64,
    south: f64,
    east: f64,
    north: f64,
}

impl GlobeRectangle {
    #[must_use]
    pub const fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// Build from extents in degrees.
    #[must_use]
    pub fn from_degrees(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self::new(
            west.to_radians(),
            south.to_radians(),
            east.to_radians(),
            north.to_radians(),
        )
    }

    #[must_use]
    pub const fn west(&self) -> f64 {
        self.west
    }

    #[must_use]
    pub const fn south(&self) -> f64 {
        self.south
    }

    #[must_use]
    pub const fn east(&self) -> f64 {
        self.east
    }

    #[must_use]
    pub const fn north(&self) -> f64 {
        self.north
    }

    /// Midpoint of the rectangle at height zero.
    #[must_use]
    pub fn center(&self) -> Cartographic {
        let east = if self.east < self.west {
            self.east + TAU
        } else {
            self.east
        };
        let mut longitude = (self.west + east) * 0.5;
        if longitude > PI {
            longitude -= TAU;
        }
        Cartographic::new(longitude, (self.south + self.north) * 0.5, 0.0)
    }

    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            west: self.west.min(other.west),
            south: self.south.min(other.south),
            east: self.east.max(other.east),
            north: self.north.max(other.north),
        }
    }

    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.west <= other.west
            && self.south <= other.south
            && self.east >= other.east
            && self.north >= other.north
    }
}

/// A globe rectangle extruded between two heights.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingRegion {
    rectangle: GlobeRectangle,
    minimum_height: f64,
    maximum_height: f64,
}

impl BoundingRegion {
    #[must_use]
    pub const fn new(rectangle: GlobeRectangle, minimum_height: f64, maximum_height: f64) -> Self {
        Self {
            rectangle,
            minimum_height,
            maximum_height,
        }
    }

    #[must_use]
    pub const fn rectangle(&self) -> &GlobeRectangle {
        &self.rectangle
    }

    #[must_use]
    pub const fn minimum_height(&self) -> f64 {
        self.minimum_height
    }

    #[must_use]
    pub const fn maximum_height(&self) -> f64 {
        self.maximum_height
    }

    /// Smallest region containing both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            rectangle: self.rectangle.union(&other.rectangle),
            minimum_height: self.minimum_height.min(other.minimum_height),
            maximum_height: self.maximum_height.max(other.maximum_height),
        }
    }

    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.rectangle.contains(&other.rectangle)
            && self.minimum_height <= other.minimum_height
            && self.maximum_height >= other.maximum_height
    }

    /// The 3D Tiles `boundingVolume.region` array:
    /// `[west, south, east, north, minimumHeight, maximumHeight]`.
    #[must_use]
    pub const fn to_region_array(&self) -> [f64; 6] {
        [
            self.rectangle.west,
            self.rectangle.south,
            self.rectangle.east,
            self.rectangle.north,
            self.minimum_height,
            self.maximum_height,
        ]
    }

    /// Inverse of [`Self::to_region_array`].
    #[must_use]
    pub const fn from_region_array(region: [f64; 6]) -> Self {
        Self::new(
            GlobeRectangle::new(region[0], region[1], region[2], region[3]),
            region[4],
            region[5],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(w: f64, s: f64, e: f64, n: f64, min: f64, max: f64) -> BoundingRegion {
        BoundingRegion::new(GlobeRectangle::from_degrees(w, s, e, n), min, max)
    }

    #[test]
    fn test_union_contains_both() {
        let a = region(-76.0, 40.0, -75.0, 41.0, 0.0, 100.0);
        let b = region(10.0, -5.0, 11.0, -4.0, -20.0, 50.0);
        let u = a.union(&b);

        assert!(u.contains(&a));
        assert!(u.contains(&b));
        assert_eq!(u.minimum_height(), -20.0);
        assert_eq!(u.maximum_height(), 100.0);
        assert_eq!(u.rectangle().west(), (-76.0f64).to_radians());
        assert_eq!(u.rectangle().north(), 41.0f64.to_radians());
    }

    #[test]
    fn test_union_commutative_and_associative() {
        let a = region(0.0, 0.0, 1.0, 1.0, 0.0, 10.0);
        let b = region(2.0, -3.0, 4.0, 0.5, 5.0, 7.0);
        let c = region(-1.0, 0.2, 0.5, 6.0, -1.0, 3.0);

        assert_eq!(a.union(&b), b.union(&a));
        assert_eq!(a.union(&b).union(&c), a.union(&b.union(&c)));
    }

    #[test]
    fn test_union_with_self_is_identity() {
        let a = region(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(a.union(&a), a);
    }

    #[test]
    fn test_center() {
        let rect = GlobeRectangle::new(-1.0, -0.5, 1.0, 0.5);
        let center = rect.center();
        assert_eq!(center.longitude, 0.0);
        assert_eq!(center.latitude, 0.0);
        assert_eq!(center.height, 0.0);
    }

    #[test]
    fn test_center_across_antimeridian() {
        let rect = GlobeRectangle::from_degrees(170.0, 0.0, -170.0, 10.0);
        let center = rect.center();
        assert!((center.longitude.abs() - PI).abs() < 1e-12);
        assert!((center.latitude - 5.0f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn test_region_array_round_trip() {
        let a = region(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(BoundingRegion::from_region_array(a.to_region_array()), a);
    }
}
