use std::io::IsTerminal;

use quadrature::configuration::Configuration;
use quadrature::manager::manager::IManager;
use quadrature::manager::managererror::ManagerError;

const CONFIG_JSON: &str = include_str!("../json/config.json");

fn main() -> Result<(), ManagerError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();

    let config = Configuration::new();
    config.from_str(CONFIG_JSON)?;
    let trapezoidal = config.integration_rule_manager().get("Trapezoidal")?;
    let simpson = config.integration_rule_manager().get("Simpson")?;

    let function = |x: f64| x.sin();
    let lower_bound = 0.0;
    let upper_bound = std::f64::consts::PI;

    let result_trapezoidal = trapezoidal.calc(&function, lower_bound, upper_bound);
    let result_simpson = simpson.calc(&function, lower_bound, upper_bound);

    println!("Интеграл методом трапеций: {}", result_trapezoidal);
    println!("Интеграл методом Симпсона: {}", result_simpson);
    Ok(())
}
