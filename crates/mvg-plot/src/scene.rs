use crate::camera::CameraIntrinsics;
use crate::frustum::{camera_at_pose, unit_camera, PosedCamera, WIREFRAME_APEX};
use crate::pose::CameraPose;

/// Wireframe line radius in ui points, matching the original tool's
/// width-7 line styling (a radius is half a width).
pub const WIREFRAME_RADIUS_UI_POINTS: f32 = 3.5;

/// Renderable primitives for one camera pose in an interactive 3D scene.
///
/// Holds a wireframe line primitive and, when requested, a text label
/// anchored at the camera apex. The label text and anchor are kept alongside
/// the rerun primitive so callers can inspect them. Construction needs no
/// live viewer; call [`CameraSceneEntry::log`] to send the entry to a
/// recording stream.
pub struct CameraSceneEntry {
    /// The frustum wireframe as a single line strip
    pub wireframe: rerun::LineStrips3D,
    /// Optional text label anchored at the camera apex
    pub label: Option<rerun::Points3D>,
    /// The text carried by `label`, if any
    pub label_text: Option<String>,
    /// World position of the camera apex, where the label anchors
    pub anchor: [f64; 3],
}

impl CameraSceneEntry {
    /// Log the wireframe and label under `entity_path`.
    pub fn log(
        &self,
        rec: &rerun::RecordingStream,
        entity_path: &str,
    ) -> Result<(), rerun::RecordingStreamError> {
        rec.log(entity_path, &self.wireframe)?;
        if let Some(label) = &self.label {
            rec.log(format!("{entity_path}/label"), label)?;
        }
        Ok(())
    }
}

/// Options controlling [`scene_camera_poses`].
#[derive(Debug, Clone, PartialEq)]
pub struct SceneOptions {
    /// Per-axis sign flip applied to the frustum geometry
    pub orientation: [f64; 3],
    /// Drawing scale of the frustum
    pub scale: f64,
    /// Intrinsics shaping the frustum
    pub intrinsics: CameraIntrinsics,
    /// Wireframe color
    pub color: [u8; 3],
    /// Whether each pose gets a text label (its 0-based input index)
    pub label_poses: bool,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            orientation: [1.0, 1.0, 1.0],
            scale: 0.02,
            intrinsics: CameraIntrinsics::toy(),
            color: [0, 0, 0],
            label_poses: true,
        }
    }
}

/// Build the scene primitives for one posed camera.
///
/// # Arguments
///
/// * `posed` - The camera geometry in world coordinates.
/// * `name` - Optional label text, anchored at the camera apex.
/// * `color` - Wireframe color.
///
/// # Returns
///
/// The scene entry for this camera.
pub fn scene_camera(posed: &PosedCamera, name: Option<&str>, color: [u8; 3]) -> CameraSceneEntry {
    let strip = posed
        .wireframe
        .iter()
        .map(|p| [p[0] as f32, p[1] as f32, p[2] as f32])
        .collect::<Vec<_>>();

    let wireframe = rerun::LineStrips3D::new([strip])
        .with_colors([rerun::Color::from_rgb(color[0], color[1], color[2])])
        .with_radii([rerun::Radius::new_ui_points(WIREFRAME_RADIUS_UI_POINTS)]);

    let anchor = posed.wireframe[WIREFRAME_APEX];
    let label = name.map(|text| {
        rerun::Points3D::new([[anchor[0] as f32, anchor[1] as f32, anchor[2] as f32]])
            .with_labels([text])
    });

    CameraSceneEntry {
        wireframe,
        label,
        label_text: name.map(str::to_owned),
        anchor,
    }
}

/// Build scene primitives for a batch of camera poses, in input order.
///
/// The unit frustum is built once and transformed per pose. With
/// `options.label_poses`, each entry carries its 0-based input index as
/// label text.
///
/// # Arguments
///
/// * `poses` - Camera poses, rendered in order.
/// * `options` - Geometry and styling options.
///
/// # Returns
///
/// One scene entry per pose.
pub fn scene_camera_poses(poses: &[CameraPose], options: &SceneOptions) -> Vec<CameraSceneEntry> {
    let unit = unit_camera(options.scale, &options.orientation, &options.intrinsics);

    log::debug!("building scene entries for {} camera poses", poses.len());

    // TODO: emit the three axis segments like the axes backend does
    poses
        .iter()
        .enumerate()
        .map(|(count, pose)| {
            let posed = camera_at_pose(&pose.rotation, &pose.translation, &unit);
            let name = options.label_poses.then(|| count.to_string());
            scene_camera(&posed, name.as_deref(), options.color)
        })
        .collect()
}
