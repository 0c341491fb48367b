use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker for values greater than zero.
///
/// ```
/// use cryotherm_models::support::constraint::StrictlyPositive;
///
/// assert!(StrictlyPositive::new(0.25).is_ok());
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or `NaN`.
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Length, Power},
        length::millimeter,
        power::watt,
    };

    #[test]
    fn sample_counts() {
        assert!(StrictlyPositive::new(2_usize).is_ok());
        assert_eq!(StrictlyPositive::new(0_usize), Err(ConstraintError::Zero));
    }

    #[test]
    fn lengths() {
        assert!(StrictlyPositive::new(Length::new::<millimeter>(0.5)).is_ok());
        assert_eq!(
            StrictlyPositive::new(Length::new::<millimeter>(-1.0)).unwrap_err(),
            ConstraintError::Negative
        );
    }

    #[test]
    fn heat_loads() {
        assert!(StrictlyPositive::new(Power::new::<watt>(3.5)).is_ok());
        assert_eq!(
            StrictlyPositive::new(Power::new::<watt>(f64::NAN)).unwrap_err(),
            ConstraintError::NotANumber
        );
    }
}
