/// Pinhole camera intrinsics used to shape the frustum drawing.
///
/// Only `width`, `height` and `fx` drive the frustum wireframe; `fy`, `cx`
/// and `cy` are carried along for future true-projective rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraIntrinsics {
    /// Sensor width in pixels
    pub width: f64,
    /// Sensor height in pixels
    pub height: f64,
    /// Focal length in the x direction
    pub fx: f64,
    /// Focal length in the y direction
    pub fy: f64,
    /// The x coordinate of the principal point
    pub cx: f64,
    /// The y coordinate of the principal point
    pub cy: f64,
}

impl CameraIntrinsics {
    /// Creates a new CameraIntrinsics with the given parameters.
    pub fn new(width: f64, height: f64, fx: f64, fy: f64, cx: f64, cy: f64) -> Self {
        Self {
            width,
            height,
            fx,
            fy,
            cx,
            cy,
        }
    }

    /// Toy intrinsics of a 6x4 sensor with focal length 10.
    ///
    /// Handy for tests and for drawing frustums when no real calibration is
    /// at hand; the frustum proportions are what matter, not the values.
    pub fn toy() -> Self {
        Self::new(6.0, 4.0, 10.0, 10.0, 3.0, 2.0)
    }
}

impl Default for CameraIntrinsics {
    fn default() -> Self {
        Self::toy()
    }
}
