use tracing::{debug, warn};

use crate::math::integration::integrationconfig::IntegrationConfig;
use crate::math::integration::numericalintegration::{
    check_sampled_span,
    sample_points,
    NumericalIntegration
};

// Composite Simpson's 1/3 rule:
//
//   I ≈ h/3 · ( f(x_0) + 4f(x_1) + 2f(x_2) + 4f(x_3) + ... + 4f(x_{n-1}) + f(x_n) )
//
// 誤差 O(h⁴)，前提是 num_points 為偶數。
// 奇數時權重序列在最後一點無法正確收尾，仍照算但記錄 warning。

pub struct SimpsonIntegration {
    config: IntegrationConfig
}

impl SimpsonIntegration {
    pub fn new(config: IntegrationConfig) -> SimpsonIntegration {
        SimpsonIntegration { config }
    }

    fn weight(i: usize, n: usize) -> f64 {
        if i == 0 || i == n {
            1.0
        } else if i % 2 == 0 {
            2.0
        } else {
            4.0
        }
    }
}

impl NumericalIntegration for SimpsonIntegration {
    fn name(&self) -> &'static str {
        "Simpson"
    }

    fn config(&self) -> &IntegrationConfig {
        &self.config
    }

    fn calc(&self, f: &dyn Fn(f64) -> f64, lower_bound: f64, upper_bound: f64) -> f64 {
        let span_consistent = check_sampled_span(self.name(), &self.config, lower_bound, upper_bound);
        let n = self.config.num_points();
        if n % 2 != 0 {
            warn!(rule = self.name(), num_points = n, "odd number of intervals for Simpson's rule");
        }
        let sum: f64 = sample_points(lower_bound, &self.config)
            .map(|(i, x)| Self::weight(i, n) * f(x))
            .sum();
        let integral = sum * self.config.step_size() / 3.0;
        debug!(rule = self.name(), num_points = n, step_size = self.config.step_size(), span_consistent, integral);
        integral
    }
}
