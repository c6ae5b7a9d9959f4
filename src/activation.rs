//! The activation function of the perceptron.


/// Step function.
/// Maps a real-valued score to the class label `1` if `score >= 0`,
/// and `0` otherwise.
/// A `NaN` score is mapped to `0`.
#[inline(always)]
pub fn step(score: f64) -> i64 {
    if score >= 0.0 { 1 } else { 0 }
}
