use tracing::warn;

use crate::math::integration::integrationconfig::IntegrationConfig;

/// 一維數值積分規則。
///
/// 每個規則持有固定的 `IntegrationConfig`，並對呼叫端給定的 integrand 與
/// 區間 `[lower_bound, upper_bound]` 計算近似積分。
///
/// `Send + Sync` 是 supertrait，使 `Arc<dyn NumericalIntegration>` 可放入 manager。
pub trait NumericalIntegration: Send + Sync {
    fn name(&self) -> &'static str;

    fn config(&self) -> &IntegrationConfig;

    fn calc(&self, f: &dyn Fn(f64) -> f64, lower_bound: f64, upper_bound: f64) -> f64;
}

/// 等距取樣點 (i, lower_bound + i * step_size)，i = 0..=num_points
pub fn sample_points(lower_bound: f64, config: &IntegrationConfig) -> impl Iterator<Item = (usize, f64)> {
    let step_size = config.step_size();
    (0..=config.num_points()).map(move |i| (i, lower_bound + i as f64 * step_size))
}

/// 取樣涵蓋的長度與 upper_bound - lower_bound 不一致時回傳 false 並記錄 warning。
///
/// 結果不受影響，規則仍只依 step_size 取樣。
#[must_use]
pub fn check_sampled_span(rule: &str, config: &IntegrationConfig, lower_bound: f64, upper_bound: f64) -> bool {
    let requested = upper_bound - lower_bound;
    let sampled = config.sampled_span();
    // NaN 差值也視為不一致
    let consistent = (sampled - requested).abs() <= config.precision();
    if !consistent {
        warn!(
            rule,
            sampled_span = sampled,
            requested_span = requested,
            precision = config.precision(),
            "sampled span does not match integration bounds"
        );
    }
    consistent
}
