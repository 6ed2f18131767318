use tracing::debug;

use crate::math::integration::integrationconfig::IntegrationConfig;
use crate::math::integration::numericalintegration::{
    check_sampled_span,
    sample_points,
    NumericalIntegration
};

// Composite trapezoidal rule:
//
//   I ≈ h · ( f(x_0)/2 + f(x_1) + ... + f(x_{n-1}) + f(x_n)/2 )
//
// 誤差 O(h²)。

pub struct TrapezoidalIntegration {
    config: IntegrationConfig
}

impl TrapezoidalIntegration {
    pub fn new(config: IntegrationConfig) -> TrapezoidalIntegration {
        TrapezoidalIntegration { config }
    }
}

impl NumericalIntegration for TrapezoidalIntegration {
    fn name(&self) -> &'static str {
        "Trapezoidal"
    }

    fn config(&self) -> &IntegrationConfig {
        &self.config
    }

    fn calc(&self, f: &dyn Fn(f64) -> f64, lower_bound: f64, upper_bound: f64) -> f64 {
        let span_consistent = check_sampled_span(self.name(), &self.config, lower_bound, upper_bound);
        let n = self.config.num_points();
        let sum: f64 = sample_points(lower_bound, &self.config)
            .map(|(i, x)| if i == 0 || i == n { f(x) / 2.0 } else { f(x) })
            .sum();
        let integral = sum * self.config.step_size();
        debug!(rule = self.name(), num_points = n, step_size = self.config.step_size(), span_consistent, integral);
        integral
    }
}
