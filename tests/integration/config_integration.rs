//! Integration tests for configuration and logging setup

use super::test_utils::ENV_MUTEX;
use lazyseq::config::{ConfigLoader, EngineConfig, ProducerConfig};
use lazyseq::logging::{init_logging, LoggingConfig};
use lazyseq::{Generator, Sequence};
use tempfile::TempDir;

#[test]
fn test_loaded_config_drives_producer() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("engine.toml");

    std::fs::write(
        &config_file,
        r#"
[producer]
stack_size = 65536
"#,
    )
    .unwrap();

    let config = {
        let _guard = ENV_MUTEX.lock();
        ConfigLoader::load_from_file(&config_file).unwrap()
    };

    let mut generator: Generator<u64> = Generator::with_config(
        |y| {
            // Deep enough to need more than a minimal stack.
            fn depth(n: u64) -> u64 {
                let pad = [n; 64];
                if n == 0 {
                    pad[0]
                } else {
                    1 + depth(n - 1) + pad[63] - n
                }
            }
            y.emit(depth(200));
            Ok(())
        },
        config.producer,
    );
    assert!(format!("{:?}", generator).contains("stack_size: 65536"));
    assert_eq!(generator.to_vec().unwrap(), vec![200]);
}

#[test]
fn test_environment_overrides_file() {
    let _guard = ENV_MUTEX.lock();

    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("engine.toml");
    std::fs::write(
        &config_file,
        r#"
[producer]
stack_size = 65536

[logging]
level = "warn"
"#,
    )
    .unwrap();

    std::env::set_var("LAZYSEQ__PRODUCER__STACK_SIZE", "32768");
    let loaded = ConfigLoader::load_from_file(&config_file);
    std::env::remove_var("LAZYSEQ__PRODUCER__STACK_SIZE");

    let config = loaded.unwrap();
    assert_eq!(config.producer.stack_size, 32768);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_undersized_stack_in_environment_is_rejected() {
    let _guard = ENV_MUTEX.lock();

    std::env::set_var("LAZYSEQ__PRODUCER__STACK_SIZE", "16");
    let loaded = ConfigLoader::load();
    std::env::remove_var("LAZYSEQ__PRODUCER__STACK_SIZE");

    assert!(loaded.is_err());
}

#[test]
fn test_load_defaults_without_file() {
    let _guard = ENV_MUTEX.lock();
    let config = ConfigLoader::load().unwrap();
    assert_eq!(config.producer, ProducerConfig::default());
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_invalid_config_fails_validation() {
    let mut config = EngineConfig::default();
    config.logging.level = "chatty".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_logging_initializes_once() {
    let _guard = ENV_MUTEX.lock();
    let config = LoggingConfig {
        level: "debug".to_string(),
        ..LoggingConfig::default()
    };
    assert!(init_logging(Some(&config)).is_ok());
    assert!(init_logging(Some(&config)).is_err());

    // Engine events flow through the installed subscriber without disturbing pulls.
    let mut generator: Generator<u8> = Generator::new(|y| {
        y.emit(1);
        Ok(())
    });
    assert_eq!(generator.to_vec().unwrap(), vec![1]);
}
