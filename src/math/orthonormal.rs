use glam::{Mat3, Vec3};

/// Tolerance used when checking that a rotation basis is still orthonormal
pub const ORTHONORMAL_TOLERANCE: f32 = 1e-5;

const MAX_POLAR_ITERATIONS: usize = 16;
const POLAR_CONVERGENCE: f32 = 1e-6;

/// Returns the orthonormal matrix closest to `m`.
///
/// This is the orthogonal factor of the polar decomposition `m = Q * S`,
/// computed with the Newton iteration `X <- (X + X^-T) / 2`. For matrices
/// that are already close to a rotation (the common case, after composing a
/// few small rotations) it converges in two or three steps.
///
/// Singular input has no polar factor, so it falls back to Gram-Schmidt on the
/// columns.
pub fn nearest_orthonormal(m: Mat3) -> Mat3 {
    if !m.is_finite() || m.determinant().abs() <= f32::EPSILON {
        return gram_schmidt(m);
    }

    let mut x = m;
    for _ in 0..MAX_POLAR_ITERATIONS {
        let next = (x + x.inverse().transpose()) * 0.5;
        let delta = max_abs_element(next - x);
        x = next;
        if delta < POLAR_CONVERGENCE {
            break;
        }
    }
    x
}

/// Checks that the columns of `m` are unit length and mutually perpendicular
pub fn is_orthonormal(m: Mat3, tolerance: f32) -> bool {
    let cols = [m.x_axis, m.y_axis, m.z_axis];

    let unit = cols
        .iter()
        .all(|c| (c.length() - 1.0).abs() <= tolerance);
    let perpendicular = cols[0].dot(cols[1]).abs() <= tolerance
        && cols[1].dot(cols[2]).abs() <= tolerance
        && cols[0].dot(cols[2]).abs() <= tolerance;

    unit && perpendicular
}

/// Orthonormalizes the columns in order x, y, z.
/// Degenerate columns are replaced so the result is always a right-handed basis.
fn gram_schmidt(m: Mat3) -> Mat3 {
    let x = m.x_axis.try_normalize().unwrap_or(Vec3::X);

    let y = (m.y_axis - x * m.y_axis.dot(x))
        .try_normalize()
        .unwrap_or_else(|| x.any_orthonormal_vector());

    let z = x.cross(y);

    Mat3::from_cols(x, y, z)
}

fn max_abs_element(m: Mat3) -> f32 {
    m.to_cols_array()
        .iter()
        .fold(0.0_f32, |acc, v| acc.max(v.abs()))
}
