//! Model orientation at a position on the ellipsoid.

use glam::{DMat4, DQuat, DVec3};

use crate::geo::Ellipsoid;

/// Model orientation in degrees.
///
/// `heading` is measured clockwise from true north about the local up axis
/// (the CDB `AO1` attribute), `pitch` about local east and `roll` about local
/// north.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeadingPitchRoll {
    pub heading: f64,
    pub pitch: f64,
    pub roll: f64,
}

impl HeadingPitchRoll {
    #[must_use]
    pub const fn new(heading: f64, pitch: f64, roll: f64) -> Self {
        Self {
            heading,
            pitch,
            roll,
        }
    }

    /// Orientation with only a heading, as stored by CDB point features.
    #[must_use]
    pub const fn from_heading(heading: f64) -> Self {
        Self::new(heading, 0.0, 0.0)
    }

    /// Model-to-world transform at `world_position`.
    ///
    /// The east-north-up frame at the position is rotated by this orientation.
    /// Column 0 is the model's right axis and column 1 its up axis in the
    /// I3DM sense.
    #[must_use]
    pub fn local_frame(&self, world_position: DVec3, ellipsoid: &Ellipsoid) -> DMat4 {
        let up = ellipsoid.geodetic_surface_normal(world_position);
        // At the poles east is undefined; pick +Y like the usual ENU convention.
        let east = DVec3::Z.cross(up).try_normalize().unwrap_or(DVec3::Y);
        let north = up.cross(east);

        let east_north_up = DMat4::from_cols(
            east.extend(0.0),
            north.extend(0.0),
            up.extend(0.0),
            world_position.extend(1.0),
        );

        let rotation = DQuat::from_rotation_z(-self.heading.to_radians())
            * DQuat::from_rotation_x(self.pitch.to_radians())
            * DQuat::from_rotation_y(self.roll.to_radians());

        east_north_up * DMat4::from_quat(rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Cartographic;

    fn assert_close(a: DVec3, b: DVec3) {
        assert!((a - b).length() < 1e-9, "{a:?} != {b:?}");
    }

    #[test]
    fn test_zero_heading_is_east_north_up() {
        let ellipsoid = Ellipsoid::WGS84;
        let position = ellipsoid.cartographic_to_cartesian(&Cartographic::new(0.0, 0.0, 0.0));
        let frame = HeadingPitchRoll::default().local_frame(position, &ellipsoid);

        assert_close(frame.x_axis.truncate(), DVec3::Y);
        assert_close(frame.y_axis.truncate(), DVec3::Z);
        assert_close(frame.z_axis.truncate(), DVec3::X);
        assert_close(frame.w_axis.truncate(), position);
    }

    #[test]
    fn test_heading_rotates_clockwise_from_north() {
        let ellipsoid = Ellipsoid::WGS84;
        let position = ellipsoid.cartographic_to_cartesian(&Cartographic::new(0.0, 0.0, 0.0));
        let frame = HeadingPitchRoll::from_heading(90.0).local_frame(position, &ellipsoid);

        // Facing east: the model's up (north) axis now points east.
        assert_close(frame.y_axis.truncate(), DVec3::Y);
        assert_close(frame.x_axis.truncate(), -DVec3::Z);
    }

    #[test]
    fn test_pole_frame_is_finite() {
        let ellipsoid = Ellipsoid::WGS84;
        let position =
            ellipsoid.cartographic_to_cartesian(&Cartographic::from_degrees(0.0, 90.0, 0.0));
        let frame = HeadingPitchRoll::default().local_frame(position, &ellipsoid);
        assert!(frame.is_finite());
    }
}
