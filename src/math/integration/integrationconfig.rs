use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IntegrationError {
    #[error("integration rule needs at least one sample interval")]
    NoSamplePoints,
    #[error("integration bounds must be finite (got [{0}, {1}])")]
    NonFiniteBounds(f64, f64),
}

/// 積分規則的固定參數。
///
/// `step_size` 與積分區間彼此獨立：規則只從 lower bound 開始、以
/// `step_size` 為間距取 `num_points + 1` 個點，不會依 upper bound 調整。
/// 需要兩者一致時改用 `from_bounds`。
///
/// `precision` 只作為取樣區間與積分區間是否一致的容忍度，不影響數值結果。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationConfig {
    num_points: usize,
    step_size: f64,
    precision: f64,
}

impl IntegrationConfig {
    pub fn new(num_points: usize, step_size: f64, precision: f64) -> Result<IntegrationConfig, IntegrationError> {
        if num_points == 0 {
            return Err(IntegrationError::NoSamplePoints);
        }
        Ok(IntegrationConfig { num_points, step_size, precision })
    }

    /// step_size = (upper_bound - lower_bound) / num_points
    pub fn from_bounds(
        num_points: usize,
        lower_bound: f64,
        upper_bound: f64,
        precision: f64,
    ) -> Result<IntegrationConfig, IntegrationError> {
        if num_points == 0 {
            return Err(IntegrationError::NoSamplePoints);
        }
        if !lower_bound.is_finite() || !upper_bound.is_finite() {
            return Err(IntegrationError::NonFiniteBounds(lower_bound, upper_bound));
        }
        let step_size = (upper_bound - lower_bound) / num_points as f64;
        Ok(IntegrationConfig { num_points, step_size, precision })
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    pub fn precision(&self) -> f64 {
        self.precision
    }

    /// 取樣實際涵蓋的長度 num_points * step_size
    pub fn sampled_span(&self) -> f64 {
        self.num_points as f64 * self.step_size
    }
}
