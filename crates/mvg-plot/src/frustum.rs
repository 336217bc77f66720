use crate::camera::CameraIntrinsics;
use mvg_conversion::rotation::quaternion_to_rotation_matrix;

/// Number of points in the frustum wireframe polyline.
pub const WIREFRAME_LEN: usize = 11;

/// Number of camera axis points (origin plus three axis endpoints).
pub const AXIS_LEN: usize = 4;

/// Draw order over the six frustum base points (apex, four image-plane
/// corners, up-marker) producing a single connected polyline: all four
/// pyramid edges, the base rectangle and the up-marker triangle, with no pen
/// lifts.
pub const FRUSTUM_DRAW_SEQUENCE: [usize; WIREFRAME_LEN] = [3, 4, 1, 2, 0, 1, 5, 4, 0, 3, 2];

/// Position of the camera apex within the wireframe polyline; labels are
/// anchored here.
pub const WIREFRAME_APEX: usize = 4;

/// Pose-independent camera frustum geometry.
///
/// Built once per (scale, orientation, intrinsics) combination and reused
/// across poses; it is plain read-only data.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitCamera {
    /// Frustum wireframe polyline, camera frame
    pub wireframe: [[f64; 3]; WIREFRAME_LEN],
    /// Origin plus the three axis endpoints, camera frame
    pub axis: [[f64; 3]; AXIS_LEN],
}

/// A unit camera transformed by one pose, in world coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PosedCamera {
    /// Frustum wireframe polyline, world frame
    pub wireframe: [[f64; 3]; WIREFRAME_LEN],
    /// Origin plus the three axis endpoints, world frame
    pub axis: [[f64; 3]; AXIS_LEN],
}

/// Build the canonical camera frustum wireframe and axis markers.
///
/// The pyramid apex sits at the origin and the base rectangle at depth
/// `fx`, spanning half the sensor width and height to each side. Using the
/// focal length as the apex-to-base distance is a drawing convention, not a
/// projective back-projection. An extra point at `(0, -2h, fx)` marks the
/// image's up direction.
///
/// # Arguments
///
/// * `scale` - Multiplies all output coordinates.
/// * `orientation` - Elementwise sign flip `(sx, sy, sz)`, each `-1` or `+1`.
/// * `intrinsics` - Sensor/focal geometry shaping the frustum.
///
/// # Returns
///
/// The unit camera geometry.
///
/// Example:
///
/// ```
/// use mvg_plot::camera::CameraIntrinsics;
/// use mvg_plot::frustum::unit_camera;
///
/// let unit = unit_camera(1.0, &[1.0, 1.0, 1.0], &CameraIntrinsics::toy());
/// assert_eq!(unit.wireframe.len(), 11);
/// assert_eq!(unit.axis.len(), 4);
/// ```
pub fn unit_camera(
    scale: f64,
    orientation: &[f64; 3],
    intrinsics: &CameraIntrinsics,
) -> UnitCamera {
    let f = intrinsics.fx;
    let w = intrinsics.width / 2.0;
    let h = intrinsics.height / 2.0;

    let base_points = [
        [0.0, 0.0, 0.0],
        [w, -h, f],
        [w, h, f],
        [-w, h, f],
        [-w, -h, f],
        [0.0, -2.0 * h, f],
    ];

    let mut wireframe = [[0.0; 3]; WIREFRAME_LEN];
    for (dst, &idx) in wireframe.iter_mut().zip(FRUSTUM_DRAW_SEQUENCE.iter()) {
        for i in 0..3 {
            dst[i] = base_points[idx][i] * orientation[i] * scale;
        }
    }

    let axis_points = [
        [0.0, 0.0, 0.0],
        [3.0, 0.0, 0.0],
        [0.0, 3.0, 0.0],
        [0.0, 0.0, 3.0],
    ];

    let mut axis = [[0.0; 3]; AXIS_LEN];
    for (dst, src) in axis.iter_mut().zip(axis_points.iter()) {
        for i in 0..3 {
            dst[i] = src[i] * scale;
        }
    }

    UnitCamera { wireframe, axis }
}

/// Transform the unit camera geometry by one pose.
///
/// Every point `p` maps to `R p + t` where `R` is the rotation matrix of
/// `qvec`. Scale is baked into the unit camera upstream; this is a rigid
/// transform only. A non-unit `qvec` yields geometry of undefined quality,
/// mirroring [`quaternion_to_rotation_matrix`].
///
/// # Arguments
///
/// * `qvec` - Pose rotation as a unit quaternion `[w, x, y, z]`.
/// * `tvec` - Pose translation.
/// * `unit` - Precomputed unit camera geometry.
///
/// # Returns
///
/// The camera geometry in world coordinates.
pub fn camera_at_pose(qvec: &[f64; 4], tvec: &[f64; 3], unit: &UnitCamera) -> PosedCamera {
    let r = quaternion_to_rotation_matrix(qvec);
    PosedCamera {
        wireframe: transform_points(&unit.wireframe, &r, tvec),
        axis: transform_points(&unit.axis, &r, tvec),
    }
}

/// Rigid-body transform `R p + t` over a fixed block of points.
fn transform_points<const N: usize>(
    points: &[[f64; 3]; N],
    r: &[[f64; 3]; 3],
    t: &[f64; 3],
) -> [[f64; 3]; N] {
    let mut out = [[0.0; 3]; N];
    for (dst, p) in out.iter_mut().zip(points.iter()) {
        for i in 0..3 {
            dst[i] = r[i][0] * p[0] + r[i][1] * p[1] + r[i][2] * p[2] + t[i];
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_camera_toy_shape() {
        let unit = unit_camera(1.0, &[1.0, 1.0, 1.0], &CameraIntrinsics::toy());

        // the apex anchors the polyline at draw position 4
        assert_eq!(unit.wireframe[WIREFRAME_APEX], [0.0, 0.0, 0.0]);
        // the up-marker (0, -2h, f) follows right after the second apex visit
        assert_eq!(unit.wireframe[6], [0.0, -4.0, 10.0]);
        // base corners at half sensor extents, depth fx
        assert_eq!(unit.wireframe[0], [-3.0, 2.0, 10.0]);
        assert_eq!(unit.wireframe[1], [-3.0, -2.0, 10.0]);

        assert_eq!(unit.axis[0], [0.0, 0.0, 0.0]);
        assert_eq!(unit.axis[1], [3.0, 0.0, 0.0]);
        assert_eq!(unit.axis[2], [0.0, 3.0, 0.0]);
        assert_eq!(unit.axis[3], [0.0, 0.0, 3.0]);
    }

    #[test]
    fn test_unit_camera_scale() {
        let unit = unit_camera(0.5, &[1.0, 1.0, 1.0], &CameraIntrinsics::toy());
        assert_eq!(unit.wireframe[6], [0.0, -2.0, 5.0]);
        assert_eq!(unit.axis[3], [0.0, 0.0, 1.5]);
    }

    #[test]
    fn test_unit_camera_orientation_flip() {
        let flipped = unit_camera(1.0, &[1.0, -1.0, -1.0], &CameraIntrinsics::toy());
        let plain = unit_camera(1.0, &[1.0, 1.0, 1.0], &CameraIntrinsics::toy());
        for (a, b) in flipped.wireframe.iter().zip(plain.wireframe.iter()) {
            assert_eq!(a[0], b[0]);
            assert_eq!(a[1], -b[1]);
            assert_eq!(a[2], -b[2]);
        }
        // the axis markers are not flipped
        assert_eq!(flipped.axis, plain.axis);
    }

    #[test]
    fn test_camera_at_pose_identity_rotation() {
        let unit = unit_camera(1.0, &[1.0, 1.0, 1.0], &CameraIntrinsics::toy());
        let posed = camera_at_pose(&[1.0, 0.0, 0.0, 0.0], &[1.0, 2.0, 3.0], &unit);
        for (posed_pt, unit_pt) in posed.wireframe.iter().zip(unit.wireframe.iter()) {
            assert_relative_eq!(posed_pt[0], unit_pt[0] + 1.0, epsilon = 1e-12);
            assert_relative_eq!(posed_pt[1], unit_pt[1] + 2.0, epsilon = 1e-12);
            assert_relative_eq!(posed_pt[2], unit_pt[2] + 3.0, epsilon = 1e-12);
        }
        for (posed_pt, unit_pt) in posed.axis.iter().zip(unit.axis.iter()) {
            assert_relative_eq!(posed_pt[0], unit_pt[0] + 1.0, epsilon = 1e-12);
            assert_relative_eq!(posed_pt[1], unit_pt[1] + 2.0, epsilon = 1e-12);
            assert_relative_eq!(posed_pt[2], unit_pt[2] + 3.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_camera_at_pose_half_turn_about_z() {
        let unit = unit_camera(1.0, &[1.0, 1.0, 1.0], &CameraIntrinsics::toy());
        // 180 degrees about z: (x, y, z) -> (-x, -y, z)
        let posed = camera_at_pose(&[0.0, 0.0, 0.0, 1.0], &[0.0, 0.0, 0.0], &unit);
        for (posed_pt, unit_pt) in posed.wireframe.iter().zip(unit.wireframe.iter()) {
            assert_relative_eq!(posed_pt[0], -unit_pt[0], epsilon = 1e-12);
            assert_relative_eq!(posed_pt[1], -unit_pt[1], epsilon = 1e-12);
            assert_relative_eq!(posed_pt[2], unit_pt[2], epsilon = 1e-12);
        }
    }
}
