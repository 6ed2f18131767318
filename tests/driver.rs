use std::f64::consts::PI;

use approx::{assert_abs_diff_eq, assert_relative_eq};

use quadrature::configuration::Configuration;
use quadrature::manager::manager::IManager;
use quadrature::math::integration::integrationconfig::IntegrationConfig;
use quadrature::math::integration::integrationrulemanager::{
    generate_integration_rule,
    IntegrationRuleType
};

const CONFIG_JSON: &str = include_str!("../json/config.json");

#[test]
fn test_embedded_config_matches_driver_literals() {
    let config = Configuration::new();
    config.from_str(CONFIG_JSON).unwrap();
    for name in ["Trapezoidal", "Simpson"] {
        let rule = config.integration_rule_manager().get(name).unwrap();
        assert_eq!(rule.name(), name);
        assert_eq!(rule.config().num_points(), 100);
        assert_relative_eq!(rule.config().step_size(), 0.01, max_relative = 1e-12);
        assert_relative_eq!(rule.config().precision(), 1e-6, max_relative = 1e-12);
    }
}

#[test]
fn test_driver_rules_sample_unit_span() {
    // 100 × 0.01 只涵蓋 [0, 1]
    let config = Configuration::new();
    config.from_str(CONFIG_JSON).unwrap();
    let expected = 1.0 - 1.0_f64.cos();
    let trapezoidal = config.integration_rule_manager().get("Trapezoidal").unwrap();
    let simpson = config.integration_rule_manager().get("Simpson").unwrap();
    assert_abs_diff_eq!(trapezoidal.calc(&|x: f64| x.sin(), 0.0, PI), expected, epsilon = 1e-4);
    assert_abs_diff_eq!(simpson.calc(&|x: f64| x.sin(), 0.0, PI), expected, epsilon = 1e-9);
}

#[test]
fn test_consistent_step_size_converges() {
    let config = IntegrationConfig::from_bounds(100, 0.0, PI, 1e-6).unwrap();
    let trapezoidal = generate_integration_rule(IntegrationRuleType::Trapezoidal, config);
    let simpson = generate_integration_rule(IntegrationRuleType::Simpson, config);
    let sine = |x: f64| x.sin();

    let result_trapezoidal = trapezoidal.calc(&sine, 0.0, PI);
    let result_simpson = simpson.calc(&sine, 0.0, PI);
    assert_abs_diff_eq!(result_trapezoidal, 2.0, epsilon = 1e-3);
    assert_abs_diff_eq!(result_simpson, 2.0, epsilon = 1e-6);
    assert!((result_simpson - 2.0).abs() < (result_trapezoidal - 2.0).abs());
}

#[test]
fn test_rules_share_integrand_and_bounds() {
    let config = IntegrationConfig::from_bounds(64, -3.0, 3.0, 1e-9).unwrap();
    let odd = |x: f64| x * (x * x).exp() - x.powi(5);
    for rule_type in [IntegrationRuleType::Trapezoidal, IntegrationRuleType::Simpson] {
        let rule = generate_integration_rule(rule_type, config);
        assert_abs_diff_eq!(rule.calc(&odd, -3.0, 3.0), 0.0, epsilon = 1e-6);
    }
}

#[test]
fn test_driver_output() {
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_quadrature"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    let expected = 1.0 - 1.0_f64.cos();
    let labels = ["Интеграл методом трапеций: ", "Интеграл методом Симпсона: "];
    for (line, label) in lines.iter().zip(labels) {
        let value: f64 = line.strip_prefix(label).unwrap().parse().unwrap();
        assert_abs_diff_eq!(value, expected, epsilon = 1e-4);
    }

    // 100 × 0.01 與 [0, π] 不一致，warning 只能出現在 stderr
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("sampled span does not match integration bounds"));
    assert!(!stderr.contains('\u{1b}'));
    assert!(!stdout.contains("WARN"));
}
