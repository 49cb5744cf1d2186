//! `<stem>.provenance.json` sidecars: which input, parameters, and code
//! produced a point cloud or hull artifact, plus a short summary of it.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsStr;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What an artifact holds, as recorded in its sidecar.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Artifact {
    Hull {
        status: String,
        steps: usize,
        vertices: usize,
    },
    Points {
        count: usize,
    },
}

#[derive(Clone, Debug, Serialize)]
struct InputFile {
    path: String,
    bytes: u64,
    points: usize,
}

#[derive(Clone, Debug, Serialize)]
struct OutputFile {
    path: String,
    bytes: u64,
    #[serde(flatten)]
    artifact: Artifact,
}

#[derive(Clone, Debug, Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Debug, Serialize)]
struct Sidecar {
    code_rev: String,
    hullstep_version: &'static str,
    callsite: Callsite,
    tag: Option<String>,
    params: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<InputFile>,
    output: OutputFile,
}

/// Collects the run context, then writes it next to the artifact.
pub struct Provenance {
    tag: Option<String>,
    params: Value,
    input: Option<InputFile>,
}

impl Provenance {
    pub fn new(tag: Option<String>, params: Value) -> Self {
        Self {
            tag,
            params,
            input: None,
        }
    }

    /// Record the point file the artifact was computed from.
    pub fn with_input(mut self, path: &Path, points: usize) -> Result<Self> {
        let bytes = fs::metadata(path)
            .with_context(|| format!("stat {}", path.display()))?
            .len();
        self.input = Some(InputFile {
            path: path.to_string_lossy().into_owned(),
            bytes,
            points,
        });
        Ok(self)
    }

    /// Write `<stem>.provenance.json` beside `artifact`, which must already exist.
    #[track_caller]
    pub fn write_beside(self, artifact: &Path, summary: Artifact) -> Result<PathBuf> {
        let caller = Location::caller();
        let bytes = fs::metadata(artifact)
            .with_context(|| format!("stat {}", artifact.display()))?
            .len();
        let doc = Sidecar {
            code_rev: current_git_rev(),
            hullstep_version: hullstep::VERSION,
            callsite: Callsite {
                file: caller.file(),
                line: caller.line(),
            },
            tag: self.tag,
            params: self.params,
            input: self.input,
            output: OutputFile {
                path: artifact.to_string_lossy().into_owned(),
                bytes,
                artifact: summary,
            },
        };
        let path = sidecar_path(artifact);
        fs::write(&path, serde_json::to_vec_pretty(&doc)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .unwrap_or_else(|| OsStr::new("artifact"))
        .to_os_string();
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// `GIT_COMMIT` (build time, then run time) or `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    let pinned = [
        option_env!("GIT_COMMIT").map(str::to_owned),
        std::env::var("GIT_COMMIT").ok(),
    ];
    if let Some(rev) = pinned.into_iter().flatten().find(|r| !r.is_empty()) {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|rev| rev.trim().to_owned())
        .unwrap_or_else(|| "unknown".to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_beside_artifact() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/runs/hull.json")),
            Path::new("/tmp/runs/hull.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("cloud.csv")),
            Path::new("cloud.provenance.json")
        );
    }

    #[test]
    fn hull_sidecar_records_input_and_summary() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("cloud.csv");
        fs::write(&input, "x,y\n0,0\n4,0\n0,4\n").unwrap();
        let artifact = dir.path().join("hull.json");
        fs::write(&artifact, "{}").unwrap();

        let path = Provenance::new(Some("demo".into()), json!({"delay_ms": 0}))
            .with_input(&input, 3)
            .unwrap()
            .write_beside(
                &artifact,
                Artifact::Hull {
                    status: "Completed".into(),
                    steps: 9,
                    vertices: 3,
                },
            )
            .unwrap();

        let doc: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(doc["tag"], "demo");
        assert_eq!(doc["hullstep_version"], hullstep::VERSION);
        assert_eq!(doc["params"]["delay_ms"], 0);
        assert_eq!(doc["input"]["points"], 3);
        assert_eq!(doc["input"]["bytes"], 16);
        assert_eq!(doc["output"]["kind"], "hull");
        assert_eq!(doc["output"]["vertices"], 3);
        assert_eq!(doc["output"]["bytes"], 2);
        assert_eq!(doc["output"]["path"], artifact.to_string_lossy().as_ref());
        assert!(doc["callsite"]["file"].as_str().unwrap().ends_with("provenance.rs"));
    }

    #[test]
    fn points_sidecar_has_no_input() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("cloud.csv");
        fs::write(&artifact, "x,y\n").unwrap();
        let path = Provenance::new(None, json!({"seed": 4}))
            .write_beside(&artifact, Artifact::Points { count: 0 })
            .unwrap();
        let doc: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert!(doc.get("input").is_none());
        assert!(doc["tag"].is_null());
        assert_eq!(doc["output"]["kind"], "points");
        assert_eq!(doc["output"]["count"], 0);
    }

    #[test]
    fn missing_input_is_an_error() {
        let dir = tempdir().unwrap();
        let res = Provenance::new(None, Value::Null).with_input(&dir.path().join("nope.csv"), 0);
        assert!(res.is_err());
    }
}
