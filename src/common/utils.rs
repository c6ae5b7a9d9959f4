//! This file provides some common numeric functions.


/// Compute the inner-product of the given two slices.
/// Terms are summed in index order,
/// so the result is reproducible bit for bit.
#[inline(always)]
pub(crate) fn inner_product(v1: &[f64], v2: &[f64]) -> f64 {
    v1.iter()
        .zip(v2)
        .map(|(a, b)| a * b)
        .sum::<f64>()
}


/// Ratio `numer / denom`, or `0.0` if `denom == 0`.
#[inline(always)]
pub(crate) fn ratio_or_zero(numer: f64, denom: f64) -> f64 {
    if denom == 0.0 { 0.0 } else { numer / denom }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_product_of_slices() {
        assert_eq!(inner_product(&[1.0, 2.0, 3.0], &[4.0, -5.0, 6.0]), 12.0);
    }

    #[test]
    fn zero_denominator() {
        assert_eq!(ratio_or_zero(3.0, 0.0), 0.0);
        assert_eq!(ratio_or_zero(3.0, 4.0), 0.75);
    }
}
