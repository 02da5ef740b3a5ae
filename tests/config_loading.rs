use chat_gateway::{
    Error,
    config::{self, DEFAULT_BACKEND_URL},
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  logs:
    level: "debug"
backend:
  base_url: "http://backend.internal:8001/"
"#;

async fn write_config(dir: &TempDir, content: &str) -> String {
    let config_path = dir.path().join("config.yaml");
    tokio::fs::write(&config_path, content).await.unwrap();
    config_path.to_string_lossy().to_string()
}

#[tokio::test]
async fn test_load_full_config_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, SAMPLE_CONFIG_YAML).await;

    let config = config::load_from(&path).await.unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.logs.level, "debug");
    assert_eq!(config.backend.base_url, "http://backend.internal:8001/");
}

#[tokio::test]
async fn test_backend_section_defaults_to_local_origin() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "server:\n  port: 4000\n").await;

    let config = config::load_from(&path).await.unwrap();

    assert_eq!(config.backend.base_url, DEFAULT_BACKEND_URL);
    assert_eq!(config.backend.base_url, "http://localhost:8001");
}

#[tokio::test]
async fn test_missing_explicit_file_is_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.yaml");

    let result = config::load_from(&path.to_string_lossy()).await;

    assert!(matches!(result, Err(Error::Config(_))));
}
