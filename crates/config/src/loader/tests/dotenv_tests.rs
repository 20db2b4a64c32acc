//! Dotenv gate tests.

use serial_test::serial;

use super::env_lock;
use crate::loader::builder::ConfigLoader;

#[test]
#[serial]
fn test_dotenv_disabled_skips_loading() {
    let _lock = env_lock().lock().unwrap();
    temp_env::with_vars([("DOTENV_DISABLED", Some("1"))], || {
        assert!(ConfigLoader::new().load_dotenv().is_ok());
    });
}

#[test]
#[serial]
fn test_dotenv_disabled_accepts_true() {
    let _lock = env_lock().lock().unwrap();
    temp_env::with_vars([("DOTENV_DISABLED", Some("true"))], || {
        assert!(ConfigLoader::new().load_dotenv().is_ok());
    });
}
