use nalgebra::Matrix4;

/// Convert a unit quaternion to a 3x3 rotation matrix.
///
/// Uses the scalar-first `[w, x, y, z]` ordering (Hamilton convention), as
/// used by COLMAP. The input is not checked for unit norm; if `q` is not a
/// unit quaternion the result is not a proper rotation matrix.
///
/// # Arguments
///
/// * `q` - A unit quaternion `[w, x, y, z]`.
///
/// # Returns
///
/// A 3x3 row-major rotation matrix.
///
/// Example:
///
/// ```
/// use mvg_conversion::rotation::quaternion_to_rotation_matrix;
///
/// let q = [1.0, 0.0, 0.0, 0.0];
/// let r = quaternion_to_rotation_matrix(&q);
/// assert_eq!(r, [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
/// ```
pub fn quaternion_to_rotation_matrix(q: &[f64; 4]) -> [[f64; 3]; 3] {
    let [w, x, y, z] = *q;
    [
        [
            1.0 - 2.0 * y * y - 2.0 * z * z,
            2.0 * x * y - 2.0 * w * z,
            2.0 * z * x + 2.0 * w * y,
        ],
        [
            2.0 * x * y + 2.0 * w * z,
            1.0 - 2.0 * x * x - 2.0 * z * z,
            2.0 * y * z - 2.0 * w * x,
        ],
        [
            2.0 * z * x - 2.0 * w * y,
            2.0 * y * z + 2.0 * w * x,
            1.0 - 2.0 * x * x - 2.0 * y * y,
        ],
    ]
}

/// Convert a 3x3 rotation matrix to a unit quaternion `[w, x, y, z]`.
///
/// Builds the symmetric 4x4 Shepperd/Markley matrix from the nine entries of
/// `r` and returns the eigenvector of its largest eigenvalue. This stays
/// numerically stable for rotations near ±180 degrees, where trace-based
/// formulas divide by values close to zero. The sign is canonicalized so the
/// scalar component is always non-negative.
///
/// The input is not checked for orthonormality; for a non-rotation matrix the
/// output is mathematically well defined but of undefined quality.
///
/// # Arguments
///
/// * `r` - A 3x3 row-major rotation matrix (orthonormal, det = +1).
///
/// # Returns
///
/// A unit quaternion `[w, x, y, z]` with `w >= 0`.
///
/// Example:
///
/// ```
/// use mvg_conversion::rotation::rotation_matrix_to_quaternion;
///
/// let r = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
/// let q = rotation_matrix_to_quaternion(&r);
/// assert!((q[0] - 1.0).abs() < 1e-6);
/// ```
pub fn rotation_matrix_to_quaternion(r: &[[f64; 3]; 3]) -> [f64; 4] {
    let (rxx, ryx, rzx) = (r[0][0], r[0][1], r[0][2]);
    let (rxy, ryy, rzy) = (r[1][0], r[1][1], r[1][2]);
    let (rxz, ryz, rzz) = (r[2][0], r[2][1], r[2][2]);

    #[rustfmt::skip]
    let k = Matrix4::new(
        rxx - ryy - rzz, ryx + rxy,       rzx + rxz,       ryz - rzy,
        ryx + rxy,       ryy - rxx - rzz, rzy + ryz,       rzx - rxz,
        rzx + rxz,       rzy + ryz,       rzz - rxx - ryy, rxy - ryx,
        ryz - rzy,       rzx - rxz,       rxy - ryx,       rxx + ryy + rzz,
    ) / 3.0;

    // symmetric_eigen does not guarantee an eigenvalue order, so select the
    // largest one explicitly.
    let eig = k.symmetric_eigen();
    let mut max_idx = 0;
    for i in 1..4 {
        if eig.eigenvalues[i] > eig.eigenvalues[max_idx] {
            max_idx = i;
        }
    }
    let v = eig.eigenvectors.column(max_idx);

    // the eigenvector layout is [x, y, z, w]; reorder to scalar-first
    let mut q = [v[3], v[0], v[1], v[2]];
    if q[0] < 0.0 {
        for c in q.iter_mut() {
            *c = -*c;
        }
    }
    q
}
