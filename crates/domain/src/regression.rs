// crates/domain/src/regression.rs
//! Straight-line fits of yield versus beam current.

use cut_check_shared_kernel::{DomainError, DomainResult};
use serde::Serialize;

/// Ordinary least-squares line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    pub points: usize,
    /// `Σ((y - ŷ) / σ)²` over points with a positive, finite uncertainty.
    pub chi_squared: Option<f64>,
}

impl LinearFit {
    /// Unweighted least-squares fit.
    ///
    /// # Errors
    /// Returns [`DomainError::DegenerateFit`] when the inputs differ in length,
    /// hold fewer than two points, or all `x` values coincide.
    pub fn fit(x: &[f64], y: &[f64]) -> DomainResult<Self> {
        if x.len() != y.len() {
            return Err(degenerate(format!("{} x values but {} y values", x.len(), y.len())));
        }
        if x.len() < 2 {
            return Err(degenerate(format!("need at least 2 points, got {}", x.len())));
        }

        #[allow(clippy::cast_precision_loss)]
        let n = x.len() as f64;
        let mean_x = x.iter().sum::<f64>() / n;
        let mean_y = y.iter().sum::<f64>() / n;

        let (sxx, sxy) = x.iter().zip(y).fold((0.0, 0.0), |(sxx, sxy), (xi, yi)| {
            let dx = xi - mean_x;
            (sxx + dx * dx, sxy + dx * (yi - mean_y))
        });
        if sxx <= f64::EPSILON * n {
            return Err(degenerate("x values have no spread".to_owned()));
        }

        let slope = sxy / sxx;
        Ok(Self { slope, intercept: mean_y - slope * mean_x, points: x.len(), chi_squared: None })
    }

    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Attach the chi-squared of the fit against per-point uncertainties.
    #[must_use]
    pub fn with_uncertainties(mut self, x: &[f64], y: &[f64], sigma: &[f64]) -> Self {
        let terms: Vec<f64> = x
            .iter()
            .zip(y)
            .zip(sigma)
            .filter(|(_, s)| s.is_finite() && **s > 0.0)
            .map(|((xi, yi), s)| ((yi - self.predict(*xi)) / s).powi(2))
            .collect();
        self.chi_squared = (!terms.is_empty()).then(|| terms.iter().sum());
        self
    }
}

fn degenerate(reason: String) -> DomainError {
    DomainError::DegenerateFit { reason }
}

/// Replace NaN entries with the mean of the finite ones; leaves an all-NaN column untouched.
pub fn fill_missing_with_mean(values: &mut [f64]) {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || finite.len() == values.len() {
        return;
    }
    #[allow(clippy::cast_precision_loss)]
    let mean = finite.iter().sum::<f64>() / finite.len() as f64;
    for v in values.iter_mut().filter(|v| v.is_nan()) {
        *v = mean;
    }
}

/// Per-run yields of one spectrometer setting.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct YieldSeries {
    pub current: Vec<f64>,
    pub rel_yield: Vec<f64>,
    pub yield_abs: Vec<f64>,
    pub rel_yield_error: Vec<f64>,
}

impl YieldSeries {
    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Fill NaN cells in every column with that column's mean.
    pub fn fill_missing(&mut self) {
        fill_missing_with_mean(&mut self.current);
        fill_missing_with_mean(&mut self.rel_yield);
        fill_missing_with_mean(&mut self.yield_abs);
        fill_missing_with_mean(&mut self.rel_yield_error);
    }

    /// Relative yield versus current, with chi-squared against the quoted uncertainties.
    ///
    /// # Errors
    /// See [`LinearFit::fit`].
    pub fn fit_relative_yield(&self) -> DomainResult<LinearFit> {
        Ok(LinearFit::fit(&self.current, &self.rel_yield)?.with_uncertainties(
            &self.current,
            &self.rel_yield,
            &self.rel_yield_error,
        ))
    }

    pub fn extend(&mut self, other: &Self) {
        self.current.extend_from_slice(&other.current);
        self.rel_yield.extend_from_slice(&other.rel_yield);
        self.yield_abs.extend_from_slice(&other.yield_abs);
        self.rel_yield_error.extend_from_slice(&other.rel_yield_error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn recovers_exact_line() {
        let x = [10.0, 20.0, 30.0, 40.0];
        let y: Vec<f64> = x.iter().map(|v| 0.5 * v + 2.0).collect();
        let fit = LinearFit::fit(&x, &y).unwrap();
        assert!(close(fit.slope, 0.5));
        assert!(close(fit.intercept, 2.0));
        assert_eq!(fit.points, 4);
        assert!(close(fit.predict(50.0), 27.0));
    }

    #[test]
    fn chi_squared_skips_zero_uncertainties() {
        let x = [0.0, 1.0, 2.0];
        let y = [0.0, 2.0, 2.0];
        let fit = LinearFit::fit(&x, &y).unwrap();
        // slope 1, intercept 1/3; residuals -1/3, 2/3, -1/3
        let chi = fit.with_uncertainties(&x, &y, &[1.0, 0.0, 1.0]).chi_squared.unwrap();
        assert!(close(chi, 2.0 / 9.0));

        let none = fit.with_uncertainties(&x, &y, &[0.0, 0.0, f64::NAN]);
        assert_eq!(none.chi_squared, None);
    }

    #[test]
    fn rejects_degenerate_inputs() {
        assert!(LinearFit::fit(&[1.0], &[2.0]).is_err());
        assert!(LinearFit::fit(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).is_err());
        assert!(LinearFit::fit(&[1.0, 2.0], &[1.0]).is_err());
    }

    #[test]
    fn fills_nan_with_column_mean() {
        let mut v = [1.0, f64::NAN, 3.0];
        fill_missing_with_mean(&mut v);
        assert_eq!(v, [1.0, 2.0, 3.0]);

        let mut all_nan = [f64::NAN, f64::NAN];
        fill_missing_with_mean(&mut all_nan);
        assert!(all_nan.iter().all(|v| v.is_nan()));
    }
}
