use argh::FromArgs;

use mvg_conversion::rotation::rotation_matrix_to_quaternion;
use mvg_plot::pose::CameraPose;
use mvg_plot::scene::{scene_camera_poses, SceneOptions};

#[derive(FromArgs)]
/// Visualize a ring of inward-looking camera poses with Rerun
struct Args {
    /// number of cameras on the ring
    #[argh(option, default = "12")]
    num_cameras: usize,

    /// ring radius in meters
    #[argh(option, default = "2.0")]
    radius: f64,

    /// frustum drawing scale
    #[argh(option, default = "0.1")]
    scale: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    if args.radius <= 0.0 {
        return Err(format!("--radius must be positive, got {}", args.radius).into());
    }

    let poses = ring_poses(args.num_cameras, args.radius);
    log::info!("generated {} poses on a radius {} ring", poses.len(), args.radius);

    // create a Rerun recording stream
    let rec = rerun::RecordingStreamBuilder::new("Camera Poses").spawn()?;
    rec.log("/", &rerun::ViewCoordinates::RIGHT_HAND_Z_UP())?;

    let options = SceneOptions {
        scale: args.scale,
        color: [255, 255, 255],
        ..Default::default()
    };

    for (i, entry) in scene_camera_poses(&poses, &options).iter().enumerate() {
        entry.log(&rec, &format!("cameras/{i}"))?;
    }

    Ok(())
}

/// Poses on a horizontal ring, all looking at the origin.
fn ring_poses(num_cameras: usize, radius: f64) -> Vec<CameraPose> {
    (0..num_cameras)
        .map(|i| {
            let angle = 2.0 * std::f64::consts::PI * i as f64 / num_cameras as f64;
            let position = [radius * angle.cos(), radius * angle.sin(), 0.5 * radius];

            // camera z looks at the origin, x stays horizontal
            let forward = normalize(&[-position[0], -position[1], -position[2]]);
            let right = normalize(&cross(&[0.0, 0.0, 1.0], &forward));
            let down = cross(&forward, &right);

            // columns map camera axes into the world frame
            let rotation = [
                [right[0], down[0], forward[0]],
                [right[1], down[1], forward[1]],
                [right[2], down[2], forward[2]],
            ];

            CameraPose::new(rotation_matrix_to_quaternion(&rotation), position)
        })
        .collect()
}

fn cross(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn normalize(v: &[f64; 3]) -> [f64; 3] {
    let n = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    [v[0] / n, v[1] / n, v[2] / n]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_poses_are_finite_unit_rotations() {
        let poses = ring_poses(8, 2.0);
        assert_eq!(poses.len(), 8);
        for pose in &poses {
            let q = pose.rotation;
            let norm = (q[0] * q[0] + q[1] * q[1] + q[2] * q[2] + q[3] * q[3]).sqrt();
            assert!((norm - 1.0).abs() < 1e-9);
            assert!(pose.translation.iter().all(|v| v.is_finite()));
        }
    }
}

