use crate::config::{Config, Mode};
use std::env;
use std::sync::Mutex;
use std::sync::OnceLock;

// Global lock to prevent race conditions when modifying environment variables in tests
static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn get_env_lock() -> &'static Mutex<()> {
    ENV_LOCK.get_or_init(|| Mutex::new(()))
}

#[test]
fn test_config_defaults() {
    let _guard = get_env_lock().lock().unwrap();
    unsafe {
        env::remove_var("MODE");
        env::remove_var("PREDICTION_BASE_URL");
        env::remove_var("DEFAULT_CUSTOMER_ID");
    }

    let config = Config::from_env().unwrap();
    assert_eq!(config.mode, Mode::Live);
    assert_eq!(config.base_url, "http://127.0.0.1:8000");
    assert_eq!(config.default_customer_id, "13085");
}

#[test]
fn test_config_mock_mode_and_trailing_slash() {
    let _guard = get_env_lock().lock().unwrap();
    unsafe {
        env::set_var("MODE", "mock");
        env::set_var("PREDICTION_BASE_URL", "https://predict.example.com/");
    }

    let config = Config::from_env().unwrap();
    assert_eq!(config.mode, Mode::Mock);
    assert_eq!(config.base_url, "https://predict.example.com");

    unsafe {
        env::remove_var("MODE");
        env::remove_var("PREDICTION_BASE_URL");
    }
}

#[test]
fn test_config_rejects_unknown_mode() {
    let _guard = get_env_lock().lock().unwrap();
    unsafe {
        env::set_var("MODE", "sandbox");
    }

    let result = Config::from_env();
    assert!(result.is_err());

    unsafe {
        env::remove_var("MODE");
    }
}
