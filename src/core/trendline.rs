use serde::{Deserialize, Serialize};

use crate::core::StackedSeries;
use crate::error::{QuakeError, QuakeResult};

/// Ordinary least-squares fit `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
}

impl LinearFit {
    #[must_use]
    pub fn evaluate(self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Two endpoints of a fitted line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Fits `ys` against `xs` by ordinary least squares.
///
/// Zero x-variance (fewer than two distinct x values) is reported as
/// [`QuakeError::DegenerateRegression`]. A flat `ys` series is a perfect fit
/// and reports `r_squared == 1.0`. Sums that overflow `f64` are
/// [`QuakeError::InvalidData`]; the fit never carries NaN or infinity.
pub fn least_squares(xs: &[f64], ys: &[f64]) -> QuakeResult<LinearFit> {
    if xs.len() != ys.len() {
        return Err(QuakeError::InvalidData(format!(
            "regression inputs differ in length: {} x vs {} y",
            xs.len(),
            ys.len()
        )));
    }
    if xs.iter().chain(ys).any(|value| !value.is_finite()) {
        return Err(QuakeError::InvalidData(
            "regression inputs must be finite".to_owned(),
        ));
    }
    if xs.is_empty() {
        return Err(QuakeError::DegenerateRegression { points: 0 });
    }

    let n = xs.len() as f64;
    let x_mean = xs.iter().sum::<f64>() / n;
    let y_mean = ys.iter().sum::<f64>() / n;

    let mut ss_xy = 0.0;
    let mut ss_xx = 0.0;
    let mut ss_yy = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - x_mean;
        let dy = y - y_mean;
        ss_xy += dx * dy;
        ss_xx += dx * dx;
        ss_yy += dy * dy;
    }

    if ![x_mean, y_mean, ss_xy, ss_xx, ss_yy]
        .iter()
        .all(|value| value.is_finite())
    {
        return Err(QuakeError::InvalidData(
            "regression sums overflow f64".to_owned(),
        ));
    }
    if ss_xx == 0.0 {
        return Err(QuakeError::DegenerateRegression { points: xs.len() });
    }

    let slope = ss_xy / ss_xx;
    let intercept = y_mean - x_mean * slope;
    let r_squared = if ss_yy == 0.0 {
        1.0
    } else {
        let r = ss_xy / (ss_xx.sqrt() * ss_yy.sqrt());
        r * r
    };
    if !slope.is_finite() || !intercept.is_finite() || !r_squared.is_finite() {
        return Err(QuakeError::InvalidData(
            "regression result is not finite".to_owned(),
        ));
    }

    Ok(LinearFit {
        slope,
        intercept,
        r_squared,
    })
}

/// Fits the top-of-stack totals against their year index and returns the
/// line spanning the first and last index.
pub fn trend_segment(series: &StackedSeries) -> QuakeResult<(LinearFit, TrendSegment)> {
    let ys = series.totals();
    let xs: Vec<f64> = (0..ys.len()).map(|index| index as f64).collect();
    let fit = least_squares(&xs, &ys)?;

    let x1 = 0.0;
    let x2 = (ys.len() - 1) as f64;
    Ok((
        fit,
        TrendSegment {
            x1,
            y1: fit.evaluate(x1),
            x2,
            y2: fit.evaluate(x2),
        },
    ))
}
