//! Release source backed by the `helm` command-line client.

use std::io;
use std::process::Stdio;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::Command;
use tracing::debug;
use valdiff_loader::{load_bytes, Format};
use valdiff_types::{Node, SourceId};

use crate::error::{ReleaseError, ReleaseResult};
use crate::settings::KubeSettings;
use crate::traits::ReleaseSource;

/// stderr fragments that mean the cluster could not be reached.
const UNREACHABLE_MARKERS: &[&str] = &[
    "connection refused",
    "cluster unreachable",
    "dial tcp",
    "i/o timeout",
    "no such host",
];

/// stderr fragments helm prints for a missing release or revision.
const NOT_FOUND_MARKERS: &[&str] = &["release: not found", "has no deployed releases"];

/// Fetches release history by running `helm status` and `helm get values`.
#[derive(Clone, Debug)]
pub struct HelmCliSource {
    settings: KubeSettings,
}

#[derive(Deserialize)]
struct ReleaseStatus {
    version: u32,
}

impl HelmCliSource {
    pub fn new(settings: KubeSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &KubeSettings {
        &self.settings
    }

    async fn run(&self, args: &[String]) -> ReleaseResult<Vec<u8>> {
        let helm = &self.settings.helm_bin;
        let mut cmd = Command::new(helm);
        cmd.args(args)
            .args(self.settings.helm_flags())
            .stdin(Stdio::null())
            .kill_on_drop(true);
        if let Some(driver) = &self.settings.driver {
            cmd.env("HELM_DRIVER", driver);
        }

        debug!(helm = %helm.display(), ?args, "running helm");
        let output = match tokio::time::timeout(self.settings.timeout, cmd.output()).await {
            Err(_) => {
                return Err(ReleaseError::Connection(format!(
                    "helm did not finish within {:?}",
                    self.settings.timeout
                )))
            }
            Ok(Err(e)) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ReleaseError::Connection(format!(
                    "helm executable {} not found",
                    helm.display()
                )))
            }
            Ok(Err(e)) => return Err(ReleaseError::Connection(e.to_string())),
            Ok(Ok(output)) => output,
        };

        if output.status.success() {
            Ok(output.stdout)
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(classify_failure(&output.status.to_string(), &stderr))
        }
    }
}

fn classify_failure(status: &str, stderr: &str) -> ReleaseError {
    let message = stderr.trim().to_string();
    let lower = message.to_lowercase();
    if UNREACHABLE_MARKERS.iter().any(|m| lower.contains(m)) {
        ReleaseError::Connection(message)
    } else if NOT_FOUND_MARKERS.iter().any(|m| lower.contains(m)) {
        ReleaseError::NotFound(message)
    } else {
        ReleaseError::Command {
            status: status.to_string(),
            stderr: message,
        }
    }
}

#[async_trait]
impl ReleaseSource for HelmCliSource {
    async fn current_version(&self, release: &str) -> ReleaseResult<u32> {
        let args: Vec<String> = vec!["status".into(), release.into(), "-o".into(), "json".into()];
        let stdout = self.run(&args).await?;
        let status: ReleaseStatus =
            serde_json::from_slice(&stdout).map_err(|e| ReleaseError::Malformed(e.to_string()))?;
        debug!(release, version = status.version, "current release version");
        Ok(status.version)
    }

    async fn get_values(&self, release: &str, revision: u32) -> ReleaseResult<Node> {
        let args: Vec<String> = vec![
            "get".into(),
            "values".into(),
            release.into(),
            "--revision".into(),
            revision.to_string(),
            "--all".into(),
            "-o".into(),
            "json".into(),
        ];
        let stdout = self.run(&args).await?;
        let source = SourceId::left(format!("{release}@{revision}"));
        let document = load_bytes(source, &stdout, Format::Json)?;
        Ok(document.into_root())
    }
}
