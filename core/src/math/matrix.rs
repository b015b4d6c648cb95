use ndarray::{arr1, arr2, Array1, Array2, ArrayView2};

pub struct MatrixHelper;

impl MatrixHelper {
    /// Multiply two 2D arrays.
    pub fn multiply(lhs: ArrayView2<f64>, rhs: ArrayView2<f64>) -> Array2<f64> {
        lhs.dot(&rhs)
    }

    /// Body rotation for a commanded pose: roll about z, then pitch about y.
    pub fn attitude_rotation(roll_deg: f64, pitch_deg: f64) -> Array2<f64> {
        let (sr, cr) = roll_deg.to_radians().sin_cos();
        let (sp, cp) = pitch_deg.to_radians().sin_cos();
        let roll = arr2(&[[cr, -sr, 0.0], [sr, cr, 0.0], [0.0, 0.0, 1.0]]);
        let pitch = arr2(&[[cp, 0.0, sp], [0.0, 1.0, 0.0], [-sp, 0.0, cp]]);
        Self::multiply(pitch.view(), roll.view())
    }

    /// Nadir-pointing sensor axis after applying the commanded pose.
    pub fn boresight(roll_deg: f64, pitch_deg: f64) -> Array1<f64> {
        Self::attitude_rotation(roll_deg, pitch_deg).dot(&arr1(&[0.0, 0.0, -1.0]))
    }
}
