mod orthonormal;

pub use orthonormal::{is_orthonormal, nearest_orthonormal, ORTHONORMAL_TOLERANCE};
