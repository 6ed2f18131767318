use std::cell::{
    RefCell,
    RefMut
};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::math::integration::integrationrulemanager::IntegrationRuleManager;
use crate::math::integration::numericalintegration::NumericalIntegration;

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    integration_rule: Vec<serde_json::Value>
}

pub struct Configuration {
    integration_rule_manager_cell: RefCell<Manager<Arc<dyn NumericalIntegration>>>
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            integration_rule_manager_cell: RefCell::new(IntegrationRuleManager::new())
        }
    }

    pub fn integration_rule_manager(&self) -> RefMut<'_, Manager<Arc<dyn NumericalIntegration>>> {
        self.integration_rule_manager_cell.borrow_mut()
    }

    pub fn from_reader<P: AsRef<Path>>(&self, file_path: P) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        self.insert_json_prop(json_prop)
    }

    pub fn from_str(&self, json: &str) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        self.insert_json_prop(json_prop)
    }

    fn insert_json_prop(&self, json_prop: ConfigurationJsonProp) -> Result<(), ManagerError> {
        let integration_rule_manager = self.integration_rule_manager_cell.borrow_mut();
        integration_rule_manager.insert_obj_from_json_vec(&json_prop.integration_rule)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use super::*;

    const CONFIG_JSON: &str = r#"{
        "integration_rule": [
            {"name": "Coarse", "rule_type": "Trapezoidal", "num_points": 4, "step_size": 0.25, "precision": 1e-6}
        ]
    }"#;

    #[test]
    fn test_from_str() {
        let config = Configuration::new();
        config.from_str(CONFIG_JSON).unwrap();
        let rule = config.integration_rule_manager().get("Coarse").unwrap();
        assert_eq!(rule.config().num_points(), 4);
    }

    #[test]
    fn test_from_reader() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CONFIG_JSON.as_bytes()).unwrap();
        let config = Configuration::new();
        config.from_reader(file.path()).unwrap();
        assert_eq!(config.integration_rule_manager().len(), 1);
    }

    #[test]
    fn test_missing_section_rejected() {
        let config = Configuration::new();
        let result = config.from_str(r#"{"rules": []}"#);
        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
    }
}
