use crate::support::property::calculator::linspace;

use super::{ConductionError, conductivity::Conductivity};

/// Composite trapezoidal rule over paired samples.
pub(super) fn trapezoid(xs: &[f64], ys: &[f64]) -> f64 {
    xs.windows(2)
        .zip(ys.windows(2))
        .map(|(x, y)| 0.5 * (y[0] + y[1]) * (x[1] - x[0]))
        .sum()
}

/// Running trapezoidal sum, starting at zero.
pub(super) fn cumulative_trapezoid(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let mut total = 0.0;
    let mut out = Vec::with_capacity(xs.len());
    out.push(total);
    for (x, y) in xs.windows(2).zip(ys.windows(2)) {
        total += 0.5 * (y[0] + y[1]) * (x[1] - x[0]);
        out.push(total);
    }
    out
}

pub(super) fn check_samples(
    label: &str,
    samples: usize,
    max: usize,
) -> Result<(), ConductionError> {
    if (2..=max).contains(&samples) {
        Ok(())
    } else {
        Err(ConductionError::invalid_arguments(format!(
            "{label} must be between 2 and {max}, got {samples}"
        )))
    }
}

/// `∫k(T) dT` over `[low, high]` in W/m.
///
/// The span is validated against the fit's range before any sampling.
pub(super) fn conductivity_integral(
    k: &Conductivity<'_>,
    low: f64,
    high: f64,
    samples: usize,
    max_samples: usize,
) -> Result<f64, ConductionError> {
    if low.is_nan() || high.is_nan() || low >= high {
        return Err(ConductionError::invalid_arguments(format!(
            "integration requires low < high, got [{low} K, {high} K]"
        )));
    }
    k.check_span(low, high)?;
    check_samples("integration samples", samples, max_samples)?;

    let temperatures = linspace(low, high, samples);
    let conductivities = temperatures
        .iter()
        .map(|&t| k.at(t))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(trapezoid(&temperatures, &conductivities))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::thermal::conduction::core::test_support::{TestLookup, conductivity};

    #[test]
    fn trapezoid_is_exact_for_lines() {
        let xs = [0.0, 1.0, 3.0];
        let ys = [1.0, 3.0, 7.0];
        assert_relative_eq!(trapezoid(&xs, &ys), 12.0);
        assert_eq!(cumulative_trapezoid(&xs, &ys), vec![0.0, 2.0, 12.0]);
    }

    #[test]
    fn linear_conductivity_integrates_exactly() {
        let lookup = TestLookup::new();
        let k = conductivity(&lookup, "linear");
        // ∫(1 + 0.1·T) dT from 77 to 300
        let expected = 223.0 + 0.05 * (300.0_f64.powi(2) - 77.0_f64.powi(2));
        assert_relative_eq!(
            conductivity_integral(&k, 77.0, 300.0, 100, 1000).unwrap(),
            expected,
            max_relative = 1e-10
        );
    }

    #[test]
    fn widening_the_span_never_shrinks_the_integral() {
        let lookup = TestLookup::new();
        let k = conductivity(&lookup, "linear");
        let base = conductivity_integral(&k, 100.0, 200.0, 50, 1000).unwrap();
        let lower = conductivity_integral(&k, 50.0, 200.0, 50, 1000).unwrap();
        let upper = conductivity_integral(&k, 100.0, 250.0, 50, 1000).unwrap();
        assert!(lower > base);
        assert!(upper > base);
    }

    #[test]
    fn rejects_bad_spans_before_sampling() {
        let lookup = TestLookup::new();
        let k = conductivity(&lookup, "linear");

        assert!(matches!(
            conductivity_integral(&k, 200.0, 100.0, 50, 1000),
            Err(ConductionError::InvalidArguments { .. })
        ));
        assert!(matches!(
            conductivity_integral(&k, 100.0, 100.0, 50, 1000),
            Err(ConductionError::InvalidArguments { .. })
        ));
        assert_eq!(
            conductivity_integral(&k, 2.0, 100.0, 50, 1000),
            Err(ConductionError::OutOfRange {
                low: 2.0,
                high: 100.0,
                min: 4.0,
                max: 300.0
            })
        );
        assert!(matches!(
            conductivity_integral(&k, 10.0, 100.0, 1, 1000),
            Err(ConductionError::InvalidArguments { .. })
        ));
        assert!(matches!(
            conductivity_integral(&k, 10.0, 100.0, 1001, 1000),
            Err(ConductionError::InvalidArguments { .. })
        ));
    }

    #[test]
    fn non_positive_samples_fail() {
        let lookup = TestLookup::new();
        let k = conductivity(&lookup, "sign_change");
        assert!(matches!(
            conductivity_integral(&k, 4.0, 300.0, 100, 1000),
            Err(ConductionError::NonPositiveConductivity { .. })
        ));
    }
}
