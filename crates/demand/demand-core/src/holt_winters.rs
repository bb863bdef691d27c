//! Additive Holt-Winters state estimation
//!
//! Shared by the smoother (which extrapolates the final state) and the
//! decomposer (which reports the per-step state over the observed span).
//!
//! ```text
//! Level:    L_t = α (x_t - S_s) + (1 - α)(L_{t-1} + T_{t-1})
//! Trend:    T_t = β (L_t - L_{t-1}) + (1 - β) T_{t-1}
//! Season:   S_s = γ (x_t - L_t) + (1 - γ) S_s          s = t mod m
//! Forecast: F_{n-1+h} = L_{n-1} + h T_{n-1} + S_{(n-1+h) mod m}
//! ```
//!
//! The seasonal state holds one index per phase, updated in place, so the
//! phase of step `t` is always `t mod m`. Step 0 carries the initial state
//! unchanged: `F_0 = L_0 + T_0 + S_0`.

use demand_spi::{SeasonalInit, SeriesConfig};

/// Per-step Holt-Winters state over an observed series
#[derive(Debug, Clone, PartialEq)]
pub struct HoltWintersFit {
    /// Level after the update at each step
    pub level: Vec<f64>,
    /// Trend (slope) after the update at each step
    pub slope: Vec<f64>,
    /// Seasonal index of each step's phase after the update at that step
    pub seasonal: Vec<f64>,
    /// `level + slope + seasonal` at each step
    pub fitted: Vec<f64>,
    /// Seasonal indices per phase at the end of the series
    pub indices: Vec<f64>,
}

impl HoltWintersFit {
    /// Run the recursion over `values`
    ///
    /// Returns `None` when the series is shorter than two seasonal periods
    /// (or the period is zero); callers fall back to a mean model.
    pub fn fit(values: &[f64], config: &SeriesConfig) -> Option<Self> {
        let m = config.seasonal_period;
        let n = values.len();
        if m == 0 || n < 2 * m {
            return None;
        }

        let (alpha, beta, gamma) = (config.alpha, config.beta, config.gamma);
        let mut indices = initial_seasonal_indices(values, m, config.seasonal_init);

        let mut level = Vec::with_capacity(n);
        let mut slope = Vec::with_capacity(n);
        let mut seasonal = Vec::with_capacity(n);
        let mut fitted = Vec::with_capacity(n);

        let l0 = initial_level(values, m);
        let t0 = initial_trend(values, m);
        level.push(l0);
        slope.push(t0);
        seasonal.push(indices[0]);
        fitted.push(l0 + t0 + indices[0]);

        for (t, &x) in values.iter().enumerate().skip(1) {
            let s = t % m;
            let prev_level = level[t - 1];
            let prev_slope = slope[t - 1];

            let l = alpha * (x - indices[s]) + (1.0 - alpha) * (prev_level + prev_slope);
            let b = beta * (l - prev_level) + (1.0 - beta) * prev_slope;
            indices[s] = gamma * (x - l) + (1.0 - gamma) * indices[s];

            level.push(l);
            slope.push(b);
            seasonal.push(indices[s]);
            fitted.push(l + b + indices[s]);
        }

        Some(Self {
            level,
            slope,
            seasonal,
            fitted,
            indices,
        })
    }

    /// Number of fitted steps
    pub fn len(&self) -> usize {
        self.level.len()
    }

    pub fn is_empty(&self) -> bool {
        self.level.is_empty()
    }

    /// In-sample residuals `x_t - fitted_t` over the whole fitted history
    pub fn residuals(&self, values: &[f64]) -> Vec<f64> {
        values
            .iter()
            .zip(&self.fitted)
            .map(|(x, f)| x - f)
            .collect()
    }

    /// Extrapolate `horizon` steps past the last observation, clamped at zero
    pub fn project(&self, horizon: usize) -> Vec<f64> {
        let n = self.len();
        let m = self.indices.len();
        let (Some(&last_level), Some(&last_slope)) = (self.level.last(), self.slope.last()) else {
            return vec![0.0; horizon];
        };

        (1..=horizon)
            .map(|h| {
                let s = self.indices[(n + h - 1) % m];
                (last_level + h as f64 * last_slope + s).max(0.0)
            })
            .collect()
    }
}

/// Mean of the first seasonal period
pub fn initial_level(values: &[f64], period: usize) -> f64 {
    values[..period].iter().sum::<f64>() / period as f64
}

/// Mean per-step change between the first two seasonal periods
pub fn initial_trend(values: &[f64], period: usize) -> f64 {
    (0..period)
        .map(|i| (values[i + period] - values[i]) / period as f64)
        .sum::<f64>()
        / period as f64
}

/// Starting index of each phase, averaged over complete periods
///
/// [`SeasonalInit::Ratio`] averages `x / cycle_mean` (dividing by 1 when a
/// cycle's mean is zero); [`SeasonalInit::Additive`] averages `x - cycle_mean`.
pub fn initial_seasonal_indices(values: &[f64], period: usize, init: SeasonalInit) -> Vec<f64> {
    let cycles: Vec<&[f64]> = values.chunks_exact(period).collect();
    if cycles.is_empty() {
        return vec![0.0; period];
    }

    let mut indices = vec![0.0; period];
    for cycle in &cycles {
        let cycle_mean = cycle.iter().sum::<f64>() / period as f64;
        for (index, value) in indices.iter_mut().zip(cycle.iter()) {
            *index += match init {
                SeasonalInit::Ratio => {
                    let divisor = if cycle_mean == 0.0 { 1.0 } else { cycle_mean };
                    value / divisor
                }
                SeasonalInit::Additive => value - cycle_mean,
            };
        }
    }
    for index in &mut indices {
        *index /= cycles.len() as f64;
    }
    indices
}
