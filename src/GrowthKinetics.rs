/// Monod growth-rate law: empirical rate saturating with substrate concentration,
/// parameterized by a maximum rate and a half-saturation constant.
/// # Examples
/// ```
/// use MonodKin::GrowthKinetics::monod::{MonodParameters, growth_rate};
/// use nalgebra::DVector;
/// let C = DVector::from_vec(vec![0.0, 2.0, 10.0, 100.0]);
/// let r = growth_rate(1.0, 2.0, &C);
/// assert_eq!(r[0], 0.0);
/// // the same model through the typed record
/// let monod = MonodParameters::new(1.0, 2.0);
/// assert_eq!(monod.rate(2.0), 0.5);
/// ```
pub mod monod;
