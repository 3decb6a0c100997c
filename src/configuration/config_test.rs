use std::fs;

use anyhow::Result;
use once_cell::sync::Lazy;
use tempdir::TempDir;
use tokio::sync::Mutex;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

// Config is process-wide, so tests that load it take turns.
static CONFIG_LOCK: Lazy<Mutex<()>> = Lazy::new(|| return Mutex::new(()));

#[test]
fn it_serializes_to_valid_toml() {
    let res = Config::serialize_default(cli::build());
    let doc = res.parse::<toml_edit::Document>();
    assert!(doc.is_ok());

    let doc = doc.unwrap();
    assert_eq!(
        doc.get("api-url").and_then(|e| return e.as_str()),
        Some("http://127.0.0.1:8000")
    );
    assert!(doc.get("storage-file").is_some());
    assert!(doc.get("config-file").is_none());
}

#[test]
fn it_documents_each_key() {
    let res = Config::serialize_default(cli::build());
    assert!(res.contains("# Base URL of the mock interview backend."));
    assert!(res.contains("# Path to the file used as durable client storage."));
}

fn write_config(dir: &TempDir, body: &str) -> Result<String> {
    let path = dir.path().join("config.toml");
    fs::write(&path, body)?;
    return Ok(path.to_string_lossy().to_string());
}

#[tokio::test]
async fn it_loads_config_from_file() -> Result<()> {
    let _lock = CONFIG_LOCK.lock().await;
    let tmp_dir = TempDir::new("config")?;
    let config_file = write_config(
        &tmp_dir,
        "api-url = \"http://interviews.internal:9000\"\nstorage-file = \"/tmp/mockinterview-storage.json\"\n",
    )?;

    let matches = cli::build().try_get_matches_from(vec![
        "mockinterview",
        "whoami",
        "-c",
        config_file.as_str(),
    ])?;
    let (_, subcmd_matches) = matches.subcommand().unwrap();
    Config::load(vec![&matches, subcmd_matches]).await?;

    assert_eq!(Config::get(ConfigKey::ApiURL), "http://interviews.internal:9000");
    assert_eq!(
        Config::get(ConfigKey::StorageFile),
        "/tmp/mockinterview-storage.json"
    );
    return Ok(());
}

#[tokio::test]
async fn it_prefers_flags_over_the_config_file() -> Result<()> {
    let _lock = CONFIG_LOCK.lock().await;
    let tmp_dir = TempDir::new("config")?;
    let config_file = write_config(
        &tmp_dir,
        "api-url = \"http://interviews.internal:9000\"\nstorage-file = \"/tmp/mockinterview-storage.json\"\n",
    )?;

    let matches = cli::build().try_get_matches_from(vec![
        "mockinterview",
        "whoami",
        "-c",
        config_file.as_str(),
        "--api-url",
        "http://localhost:8123",
    ])?;
    let (_, subcmd_matches) = matches.subcommand().unwrap();
    Config::load(vec![&matches, subcmd_matches]).await?;

    assert_eq!(Config::get(ConfigKey::ApiURL), "http://localhost:8123");
    assert_eq!(
        Config::get(ConfigKey::StorageFile),
        "/tmp/mockinterview-storage.json"
    );
    return Ok(());
}

#[tokio::test]
async fn it_loads_the_example_config() -> Result<()> {
    let _lock = CONFIG_LOCK.lock().await;
    let matches =
        cli::build().try_get_matches_from(vec!["mockinterview", "-c", "./config.example.toml"])?;
    Config::load(vec![&matches]).await?;

    assert_eq!(Config::get(ConfigKey::ApiURL), "http://127.0.0.1:8000");
    return Ok(());
}

#[tokio::test]
async fn it_fails_to_loads_config_from_file() -> Result<()> {
    let _lock = CONFIG_LOCK.lock().await;
    let matches =
        cli::build().try_get_matches_from(vec!["mockinterview", "-c", "./test/bad-config.toml"])?;
    let res = Config::load(vec![&matches]).await;
    assert!(res.is_err());
    return Ok(());
}
