use std::sync::Arc;

use serde::Deserialize;

use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use crate::math::integration::integrationconfig::IntegrationConfig;
use crate::math::integration::numericalintegration::NumericalIntegration;
use crate::math::integration::simpsonintegration::SimpsonIntegration;
use crate::math::integration::trapezoidalintegration::TrapezoidalIntegration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum IntegrationRuleType {
    Trapezoidal,
    Simpson
}

#[derive(Deserialize)]
struct IntegrationRuleJsonProp {
    rule_type: IntegrationRuleType,
    num_points: usize,
    step_size: f64,
    precision: f64
}

pub fn generate_integration_rule(
    rule_type: IntegrationRuleType,
    config: IntegrationConfig,
) -> Arc<dyn NumericalIntegration> {
    match rule_type {
        IntegrationRuleType::Trapezoidal => Arc::new(TrapezoidalIntegration::new(config)),
        IntegrationRuleType::Simpson => Arc::new(SimpsonIntegration::new(config)),
    }
}

fn get_integration_rule_from_json(json_value: serde_json::Value) -> Result<Arc<dyn NumericalIntegration>, ManagerError> {
    let json_prop: IntegrationRuleJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
    let config = IntegrationConfig::new(json_prop.num_points, json_prop.step_size, json_prop.precision)?;
    Ok(generate_integration_rule(json_prop.rule_type, config))
}

pub struct IntegrationRuleManager;

impl IntegrationRuleManager {
    pub fn new() -> Manager<Arc<dyn NumericalIntegration>> {
        Manager::new(get_integration_rule_from_json)
    }
}
