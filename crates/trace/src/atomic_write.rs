//! Write-to-temp-then-rename so a crash or concurrent reader never observes
//! a partially written trace file.

use crate::error::TraceError;
use std::path::Path;

pub async fn write_json_atomic(path: &Path, value: &serde_json::Value) -> Result<(), TraceError> {
    if let Some(dir) = path.parent() {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|source| TraceError::Io { path: dir.display().to_string(), source })?;
    }

    let body = serde_json::to_vec_pretty(value)?;

    let tmp_path = path.with_extension("json.tmp");
    tokio::fs::write(&tmp_path, &body)
        .await
        .map_err(|source| TraceError::Io { path: tmp_path.display().to_string(), source })?;
    tokio::fs::rename(&tmp_path, path)
        .await
        .map_err(|source| TraceError::Io { path: path.display().to_string(), source })?;
    Ok(())
}
