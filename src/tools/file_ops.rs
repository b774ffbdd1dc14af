//! File access tools.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use super::Tool;

#[derive(Debug, Deserialize)]
struct ReadFileArgs {
    path: String,
}

/// Read a UTF-8 text file and return its contents.
pub struct ReadFile;

#[async_trait]
impl Tool for ReadFile {
    fn name(&self) -> &str {
        "read_file"
    }

    fn description(&self) -> &str {
        "Read the contents of a text file"
    }

    async fn execute(&self, args: Value) -> anyhow::Result<Value> {
        let args: ReadFileArgs = serde_json::from_value(args)?;
        let contents = tokio::fs::read_to_string(&args.path).await?;
        Ok(Value::String(contents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[tokio::test]
    async fn reads_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "hello from disk").unwrap();
        let out = ReadFile
            .execute(json!({"path": file.path().to_string_lossy()}))
            .await
            .unwrap();
        assert_eq!(out, Value::String("hello from disk".into()));
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let result = ReadFile
            .execute(json!({"path": "/nonexistent/definitely-missing"}))
            .await;
        assert!(result.is_err());
    }
}
