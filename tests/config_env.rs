/// Environment-driven configuration tests.
///
/// These mutate process environment variables, so they run serially.

use serial_test::serial;
use singleton_di::config::{ENV_INIT_DELAY_MS, ENV_UPSTREAM_AVAILABLE, ENV_WORK_DELAY_MS};
use singleton_di::{root, ConfigError, ServiceError, SingletonConfig};
use std::time::Duration;

fn clear_env() {
    for name in [ENV_INIT_DELAY_MS, ENV_WORK_DELAY_MS, ENV_UPSTREAM_AVAILABLE] {
        std::env::remove_var(name);
    }
}

#[test]
#[serial]
fn unset_environment_yields_defaults() {
    clear_env();
    assert_eq!(SingletonConfig::from_env().unwrap(), SingletonConfig::default());
}

#[test]
#[serial]
fn environment_overrides_defaults() {
    clear_env();
    std::env::set_var(ENV_INIT_DELAY_MS, "25");
    std::env::set_var(ENV_WORK_DELAY_MS, " 5 ");
    std::env::set_var(ENV_UPSTREAM_AVAILABLE, "false");

    let config = SingletonConfig::from_env().unwrap();
    clear_env();

    assert_eq!(
        config,
        SingletonConfig {
            init_delay_ms: 25,
            work_delay_ms: 5,
            upstream_available: false,
        }
    );
    let options = config.into_options();
    assert_eq!(options.init_delay(), Duration::from_millis(25));
    assert_eq!(options.work_delay(), Duration::from_millis(5));
}

#[test]
#[serial]
fn unparsable_value_is_rejected() {
    clear_env();
    std::env::set_var(ENV_WORK_DELAY_MS, "soon");

    let err = SingletonConfig::from_env().unwrap_err();
    clear_env();

    match err {
        ConfigError::InvalidValue { name, value } => {
            assert_eq!(name, ENV_WORK_DELAY_MS);
            assert_eq!(value, "soon");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[cfg(unix)]
#[test]
#[serial]
fn non_unicode_value_is_rejected() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    clear_env();
    std::env::set_var(ENV_UPSTREAM_AVAILABLE, OsStr::from_bytes(b"tr\xffue"));

    let result = SingletonConfig::from_env();
    clear_env();

    match result {
        Err(ConfigError::InvalidValue { name, .. }) => assert_eq!(name, ENV_UPSTREAM_AVAILABLE),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(config) => panic!("fell back to {config:?}"),
    }
}

#[tokio::test(start_paused = true)]
#[serial]
async fn unavailable_upstream_from_config_aborts_setup() {
    let config = SingletonConfig {
        init_delay_ms: 10,
        work_delay_ms: 10,
        upstream_available: false,
    };

    let err = root::run(config.into_options()).await.unwrap_err();
    assert!(matches!(err, ServiceError::Initialization(_)));
}
