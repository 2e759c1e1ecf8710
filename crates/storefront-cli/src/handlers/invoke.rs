//! `storefront invoke` - resolve one proxy event offline.

use anyhow::{Context, Result};
use serde_json::Value;
use storefront_gateway::{InvocationContext, LambdaHandler};
use tokio::io::AsyncReadExt;

/// Read the raw event text from a file path, or stdin for `-`.
pub async fn read_event(source: &str) -> Result<String> {
    if source == "-" {
        let mut input = String::new();
        tokio::io::stdin()
            .read_to_string(&mut input)
            .await
            .context("failed to read event from stdin")?;
        Ok(input)
    } else {
        tokio::fs::read_to_string(source)
            .await
            .with_context(|| format!("failed to read event file {source}"))
    }
}

/// Parse and resolve an event, returning the proxy response JSON.
pub async fn run(handler: &LambdaHandler, raw_event: &str, request_id: &str) -> Result<Value> {
    let event: Value = serde_json::from_str(raw_event).context("event is not valid JSON")?;
    let context = InvocationContext::local(request_id);
    Ok(handler.handle(event, &context).await?)
}

/// Execute the invoke command, printing the response to stdout.
pub async fn execute(handler: &LambdaHandler, source: &str, request_id: Option<String>) -> Result<()> {
    let raw_event = read_event(source).await?;
    let request_id = request_id.unwrap_or_else(|| "local-invoke".to_string());
    let response = run(handler, &raw_event, &request_id).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::{CliConfig, build_handler};
    use std::io::Write;

    fn handler() -> LambdaHandler {
        build_handler(&CliConfig {
            service_name: "test".to_string(),
            log_event: false,
            strip_prefixes: Vec::new(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_invoke_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"httpMethod": "GET", "path": "/products", "headers": {{}}, "body": null}}"#
        )
        .unwrap();

        let raw = read_event(file.path().to_str().unwrap()).await.unwrap();
        let response = run(&handler(), &raw, "req-1").await.unwrap();
        assert_eq!(response["statusCode"], 200);

        let body: Value = serde_json::from_str(response["body"].as_str().unwrap()).unwrap();
        assert_eq!(body["products"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(read_event(missing.to_str().unwrap()).await.is_err());
    }

    #[tokio::test]
    async fn test_invalid_json_is_an_error() {
        let err = run(&handler(), "not json", "req-2").await.unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[tokio::test]
    async fn test_malformed_event_is_an_error() {
        let err = run(&handler(), r#"{"path": "/products"}"#, "req-3")
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Malformed proxy event"));
    }
}
