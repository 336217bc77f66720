/// Number of values in a flat camera pose: quaternion followed by translation.
pub const POSE_LEN: usize = 7;

/// Error types for the plotting module.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PlotError {
    /// A pose slice did not hold exactly 7 values
    #[error("invalid pose shape: expected {POSE_LEN} values (qw, qx, qy, qz, tx, ty, tz), got {0}")]
    InvalidPoseLength(usize),

    /// A flat pose buffer length was not a multiple of 7
    #[error("invalid poses buffer shape: length {0} is not a multiple of {POSE_LEN}")]
    InvalidPosesLength(usize),
}

/// A camera pose in world coordinates: rotation plus translation.
///
/// The rotation is a unit quaternion `[w, x, y, z]`. Unit norm is the
/// caller's responsibility and is not checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Rotation as a unit quaternion `[w, x, y, z]`
    pub rotation: [f64; 4],
    /// Translation `[x, y, z]`
    pub translation: [f64; 3],
}

impl CameraPose {
    /// Creates a new CameraPose from rotation and translation.
    pub fn new(rotation: [f64; 4], translation: [f64; 3]) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Parse a pose from a flat 7-element slice `(qw, qx, qy, qz, tx, ty, tz)`.
    ///
    /// # Arguments
    ///
    /// * `pose` - A slice holding exactly [`POSE_LEN`] values.
    ///
    /// # Returns
    ///
    /// The parsed pose, or [`PlotError::InvalidPoseLength`] for any other
    /// slice length.
    pub fn from_slice(pose: &[f64]) -> Result<Self, PlotError> {
        if pose.len() != POSE_LEN {
            return Err(PlotError::InvalidPoseLength(pose.len()));
        }
        Ok(Self {
            rotation: [pose[0], pose[1], pose[2], pose[3]],
            translation: [pose[4], pose[5], pose[6]],
        })
    }
}

/// Parse a flat `(N * 7)` buffer of poses, in order.
///
/// # Arguments
///
/// * `data` - Concatenated 7-element poses `(qw, qx, qy, qz, tx, ty, tz)`.
///
/// # Returns
///
/// The parsed poses, or [`PlotError::InvalidPosesLength`] if the buffer
/// length is not a multiple of 7.
///
/// Example:
///
/// ```
/// use mvg_plot::pose::poses_from_slice;
///
/// let data = [1.0, 0.0, 0.0, 0.0, 5.0, 0.0, 0.0];
/// let poses = poses_from_slice(&data).unwrap();
/// assert_eq!(poses.len(), 1);
/// assert_eq!(poses[0].translation, [5.0, 0.0, 0.0]);
/// ```
pub fn poses_from_slice(data: &[f64]) -> Result<Vec<CameraPose>, PlotError> {
    if data.len() % POSE_LEN != 0 {
        return Err(PlotError::InvalidPosesLength(data.len()));
    }
    data.chunks_exact(POSE_LEN)
        .map(CameraPose::from_slice)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_from_slice() {
        let pose = CameraPose::from_slice(&[1.0, 0.0, 0.0, 0.0, 1.0, 2.0, 3.0]).unwrap();
        assert_eq!(pose.rotation, [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(pose.translation, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_pose_from_slice_wrong_length() {
        let result = CameraPose::from_slice(&[1.0, 0.0, 0.0, 0.0]);
        assert_eq!(result, Err(PlotError::InvalidPoseLength(4)));
    }

    #[test]
    fn test_poses_from_slice() {
        let data = [
            1.0, 0.0, 0.0, 0.0, 1.0, 2.0, 3.0, //
            0.0, 1.0, 0.0, 0.0, 4.0, 5.0, 6.0,
        ];
        let poses = poses_from_slice(&data).unwrap();
        assert_eq!(poses.len(), 2);
        assert_eq!(poses[1].rotation, [0.0, 1.0, 0.0, 0.0]);
        assert_eq!(poses[1].translation, [4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_poses_from_slice_ragged() {
        let data = [1.0; 10];
        assert_eq!(poses_from_slice(&data), Err(PlotError::InvalidPosesLength(10)));
    }
}
