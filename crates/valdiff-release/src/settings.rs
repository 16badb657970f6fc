use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Cluster access settings for the Helm-backed release source.
///
/// Built once by the caller and handed to the source; nothing here is read
/// from global state after construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KubeSettings {
    /// Path to the kubeconfig file. `None` lets helm apply its own default.
    pub kubeconfig: Option<PathBuf>,
    /// kubeconfig context to use.
    pub context: Option<String>,
    /// Namespace of the release. `None` uses the context's namespace.
    pub namespace: Option<String>,
    /// Helm storage driver, exported to helm as `HELM_DRIVER`.
    pub driver: Option<String>,
    /// The helm executable.
    pub helm_bin: PathBuf,
    /// Upper bound on a single helm invocation.
    pub timeout: Duration,
}

impl Default for KubeSettings {
    fn default() -> Self {
        Self {
            kubeconfig: None,
            context: None,
            namespace: None,
            driver: None,
            helm_bin: PathBuf::from("helm"),
            timeout: Duration::from_secs(60),
        }
    }
}

impl KubeSettings {
    /// Defaults with the kubeconfig resolved from the environment.
    pub fn from_env() -> Self {
        Self {
            kubeconfig: Self::default_kubeconfig(),
            ..Default::default()
        }
    }

    /// `$KUBECONFIG` when set, otherwise `~/.kube/config`.
    pub fn default_kubeconfig() -> Option<PathBuf> {
        if let Some(env) = std::env::var_os("KUBECONFIG").filter(|v| !v.is_empty()) {
            return Some(PathBuf::from(env));
        }
        match dirs::home_dir() {
            Some(home) => Some(home.join(".kube").join("config")),
            None => {
                warn!("unable to determine default kubeconfig path");
                None
            }
        }
    }

    /// Global helm flags derived from these settings.
    pub fn helm_flags(&self) -> Vec<String> {
        let mut flags = Vec::new();
        if let Some(path) = &self.kubeconfig {
            flags.push("--kubeconfig".to_string());
            flags.push(path.display().to_string());
        }
        if let Some(context) = &self.context {
            flags.push("--kube-context".to_string());
            flags.push(context.clone());
        }
        if let Some(namespace) = &self.namespace {
            flags.push("--namespace".to_string());
            flags.push(namespace.clone());
        }
        flags
    }
}
