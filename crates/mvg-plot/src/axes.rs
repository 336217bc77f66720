use crate::camera::CameraIntrinsics;
use crate::frustum::{camera_at_pose, unit_camera};
use crate::pose::CameraPose;

/// Dash pattern of a polyline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinePattern {
    /// Solid line
    #[default]
    Solid,
    /// Dashed line
    Dashed,
    /// Dotted line
    Dotted,
}

/// Style attributes attached to a single polyline draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// RGB color; `None` lets the canvas pick its own color per call
    pub color: Option<[u8; 3]>,
    /// Opacity in `[0, 1]`
    pub alpha: f64,
    /// Dash pattern
    pub pattern: LinePattern,
    /// Line width
    pub width: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: None,
            alpha: 1.0,
            pattern: LinePattern::Solid,
            width: 1.0,
        }
    }
}

/// A drawing surface accepting ordered 3D polyline draw calls.
///
/// Any 3D-axes style plotting object can back this trait; the plot functions
/// require nothing else from the surface.
pub trait PolylineCanvas {
    /// Draw one polyline through `points` with the given style.
    fn draw_polyline3d(&mut self, points: &[[f64; 3]], style: &LineStyle);
}

/// Index pairs of the three axis segments within the four axis points.
pub const AXIS_SEGMENTS: [[usize; 2]; 3] = [[0, 1], [0, 2], [0, 3]];

/// Conventional axis colors: red = X, green = Y, blue = Z.
pub const AXIS_COLORS: [[u8; 3]; 3] = [[255, 0, 0], [0, 255, 0], [0, 0, 255]];

/// Options controlling [`plot_camera_poses`].
///
/// The defaults mirror the usual small-frustum drawing configuration: toy
/// intrinsics, scale 0.02, no axis markers, one auto color per pose.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    /// Per-axis sign flip applied to the frustum geometry
    pub orientation: [f64; 3],
    /// Drawing scale of the frustum
    pub scale: f64,
    /// Intrinsics shaping the frustum
    pub intrinsics: CameraIntrinsics,
    /// Wireframe opacity in `[0, 1]`
    pub alpha: f64,
    /// Wireframe color override; `None` auto-colors per pose
    pub color: Option<[u8; 3]>,
    /// Wireframe dash pattern
    pub pattern: LinePattern,
    /// Wireframe line width
    pub linewidth: f64,
    /// Whether to draw the three camera axis segments
    pub draw_axes: bool,
    /// Axis segment opacity in `[0, 1]`
    pub axis_alpha: f64,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            orientation: [1.0, 1.0, 1.0],
            scale: 0.02,
            intrinsics: CameraIntrinsics::toy(),
            alpha: 1.0,
            color: None,
            pattern: LinePattern::Solid,
            linewidth: 1.0,
            draw_axes: false,
            axis_alpha: 1.0,
        }
    }
}

/// Draw a batch of camera poses onto a polyline canvas.
///
/// The unit frustum is built once and transformed per pose, in input order.
/// Each pose produces one 11-point wireframe polyline; with
/// `options.draw_axes`, three extra origin-to-endpoint segments follow it,
/// colored per [`AXIS_COLORS`] at line width 1.
///
/// # Arguments
///
/// * `poses` - Camera poses, rendered in order.
/// * `canvas` - The drawing surface receiving the polylines.
/// * `options` - Geometry and styling options.
pub fn plot_camera_poses<C>(poses: &[CameraPose], canvas: &mut C, options: &PlotOptions)
where
    C: PolylineCanvas,
{
    let unit = unit_camera(options.scale, &options.orientation, &options.intrinsics);

    log::debug!("drawing {} camera poses", poses.len());

    let wireframe_style = LineStyle {
        color: options.color,
        alpha: options.alpha,
        pattern: options.pattern,
        width: options.linewidth,
    };

    for pose in poses {
        let posed = camera_at_pose(&pose.rotation, &pose.translation, &unit);
        canvas.draw_polyline3d(&posed.wireframe, &wireframe_style);

        if options.draw_axes {
            for (segment, color) in AXIS_SEGMENTS.iter().zip(AXIS_COLORS.iter()) {
                let points = [posed.axis[segment[0]], posed.axis[segment[1]]];
                let style = LineStyle {
                    color: Some(*color),
                    alpha: options.axis_alpha,
                    pattern: LinePattern::Solid,
                    width: 1.0,
                };
                canvas.draw_polyline3d(&points, &style);
            }
        }
    }
}
