//! Tests for solver configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        verify_solution = false
        render_grid = true

        [horizon]
        multiplier = 5
    "#;

    let config = SolverConfig::from_toml_str(toml).unwrap();
    assert!(!config.verify_solution);
    assert!(config.render_grid);
    assert_eq!(config.horizon.multiplier, 5);
    assert_eq!(config.horizon_for(4).unwrap(), Horizon::new(20));
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        horizon:
          fixed: 40
        render_grid: true
    "#;

    let config = SolverConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.horizon.fixed, Some(40));
    assert_eq!(config.horizon.multiplier, 3);
    assert!(config.verify_solution);
    assert_eq!(config.horizon_for(4).unwrap(), Horizon::new(40));
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config = SolverConfig::from_toml_str("").unwrap();
    assert_eq!(config, SolverConfig::default());
    assert_eq!(config.horizon_for(3).unwrap().steps(), 9);
}

#[test]
fn test_builder() {
    let config = SolverConfig::new()
        .with_horizon_multiplier(2)
        .with_verify_solution(false)
        .with_render_grid(true);

    assert_eq!(config.horizon_for(6).unwrap().steps(), 12);
    assert!(!config.verify_solution);
    assert!(config.render_grid);

    let fixed = config.with_fixed_horizon(7);
    assert_eq!(fixed.horizon_for(6).unwrap().steps(), 7);
}

#[test]
fn test_zero_multiplier_rejected() {
    let err = SolverConfig::from_toml_str("[horizon]\nmultiplier = 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_zero_fixed_horizon_rejected() {
    let err = SolverConfig::from_yaml_str("horizon:\n  fixed: 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_overflowing_multiplier_rejected() {
    let toml = format!("[horizon]\nmultiplier = {}", i64::MAX);
    let config = SolverConfig::from_toml_str(&toml).unwrap();
    assert!(matches!(
        config.horizon_for(3).unwrap_err(),
        ConfigError::Invalid(_)
    ));

    let config = SolverConfig::new().with_horizon_multiplier(usize::MAX);
    assert!(matches!(
        config.horizon_for(3).unwrap_err(),
        ConfigError::Invalid(_)
    ));
    assert_eq!(config.horizon_for(1).unwrap().steps(), usize::MAX);
}

#[test]
fn test_oversized_fixed_horizon_rejected() {
    let config = SolverConfig::new().with_fixed_horizon(usize::MAX);
    assert!(matches!(
        config.horizon_for(2).unwrap_err(),
        ConfigError::Invalid(_)
    ));
}

#[test]
fn test_missing_file() {
    let err = SolverConfig::load("/nonexistent/blinkpath.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_into_blinkpath_error() {
    let err: BlinkPathError = ConfigError::Invalid("bad".to_string()).into();
    assert_eq!(err.to_string(), "Configuration error: Invalid configuration: bad");
}
