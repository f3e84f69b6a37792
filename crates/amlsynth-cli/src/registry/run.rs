use std::fs::{OpenOptions, create_dir_all};
use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{RegistryError, RegistryResult};

/// Metadata captured before a generating command runs.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub command: &'static str,
    pub data_type: Option<String>,
    pub rule: Option<String>,
    pub count: usize,
    pub seed: u64,
    pub runs_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Running,
    Ok,
    Error,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PoolSizes {
    pub customers: usize,
    pub accounts: usize,
}

/// `run.json`, rewritten when the run finishes.
#[derive(Debug, Clone, Serialize)]
pub struct RunManifest {
    pub run_id: String,
    pub command: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    pub count: usize,
    pub seed: u64,
    pub status: RunStatus,
    pub started_at: String,
    pub finished_at: Option<String>,
    pub record_count: usize,
    pub pool: PoolSizes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub cli_version: &'static str,
    pub git: GitInfo,
}

/// Git metadata for reproducibility.
#[derive(Debug, Clone, Serialize)]
pub struct GitInfo {
    pub commit: Option<String>,
    pub dirty: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct RunPaths {
    pub root: PathBuf,
    pub manifest_path: PathBuf,
    pub records_path: PathBuf,
    pub logs_path: PathBuf,
}

/// Create `{runs_dir}/{timestamp}__run_{id}/` with a `running` manifest and
/// an empty log file.
pub fn start_run(ctx: &RunContext, pool: PoolSizes) -> RegistryResult<(RunPaths, RunManifest)> {
    let timestamp = ctx.started_at.format("%Y-%m-%dT%H-%M-%SZ").to_string();
    let root = ctx
        .runs_dir
        .join(format!("{timestamp}__run_{}", ctx.run_id));
    create_dir_all(&root)?;

    let paths = RunPaths {
        manifest_path: root.join("run.json"),
        records_path: root.join("records.json"),
        logs_path: root.join("logs.ndjson"),
        root,
    };

    let manifest = RunManifest {
        run_id: ctx.run_id.clone(),
        command: ctx.command,
        data_type: ctx.data_type.clone(),
        rule: ctx.rule.clone(),
        count: ctx.count,
        seed: ctx.seed,
        status: RunStatus::Running,
        started_at: ctx.started_at.to_rfc3339(),
        finished_at: None,
        record_count: 0,
        pool,
        error: None,
        cli_version: env!("CARGO_PKG_VERSION"),
        git: collect_git_info(),
    };
    write_json(&paths.manifest_path, &manifest)?;

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&paths.logs_path)?;

    Ok((paths, manifest))
}

pub fn write_records<T: Serialize + ?Sized>(paths: &RunPaths, records: &T) -> RegistryResult<()> {
    write_json(&paths.records_path, records)
}

/// Stamp the outcome onto the manifest and rewrite `run.json`.
pub fn finish_run(
    paths: &RunPaths,
    manifest: &mut RunManifest,
    outcome: Result<usize, String>,
    pool: PoolSizes,
) -> RegistryResult<()> {
    match outcome {
        Ok(record_count) => {
            manifest.status = RunStatus::Ok;
            manifest.record_count = record_count;
        }
        Err(message) => {
            manifest.status = RunStatus::Error;
            manifest.error = Some(message);
        }
    }
    manifest.pool = pool;
    manifest.finished_at = Some(Utc::now().to_rfc3339());
    write_json(&paths.manifest_path, manifest)
}

pub fn collect_git_info() -> GitInfo {
    let commit = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|value| !value.is_empty());

    let dirty = Command::new("git")
        .args(["status", "--porcelain"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| !output.stdout.is_empty());

    GitInfo { commit, dirty }
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> RegistryResult<()> {
    let file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(path)?;
    serde_json::to_writer_pretty(file, value).map_err(RegistryError::from)
}
