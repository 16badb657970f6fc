use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "valdiff",
    about = "Compare Helm release values against a values file",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// `yaml` writes the change set to --out-file; anything else prints it
    #[arg(long, global = true, default_value = "stdout")]
    pub output: String,

    /// Destination of the change set in yaml mode
    #[arg(long, global = true, default_value = "generated-values.yaml")]
    pub out_file: PathBuf,

    /// Treat an explicit null and a missing key as equal
    #[arg(long, global = true)]
    pub null_equals_absent: bool,

    /// Report reordered sequences as a single order change
    #[arg(long, global = true)]
    pub detect_order: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare a deployed release revision against a values file
    Release(ReleaseArgs),
    /// Compare two local YAML or JSON documents
    Files(FilesArgs),
}

#[derive(Args)]
pub struct ReleaseArgs {
    /// Release name
    pub name: String,

    /// Values file to compare against the release
    #[arg(long, default_value = "values.yaml")]
    pub values: PathBuf,

    /// Revision to compare; 0 selects the revision before the latest
    #[arg(long, default_value_t = 0)]
    pub revision: u32,

    #[arg(long)]
    pub kubeconfig: Option<PathBuf>,

    #[arg(long)]
    pub kube_context: Option<String>,

    #[arg(short, long)]
    pub namespace: Option<String>,

    #[arg(long, default_value = "helm")]
    pub helm_bin: PathBuf,

    /// Helm storage driver (secret, configmap, sql)
    #[arg(long)]
    pub helm_driver: Option<String>,

    /// Seconds to wait for each helm call
    #[arg(long, default_value_t = 60)]
    pub timeout: u64,

    /// Also write the fetched release values to this file
    #[arg(long)]
    pub save_release: Option<PathBuf>,
}

#[derive(Args)]
pub struct FilesArgs {
    pub left: PathBuf,
    pub right: PathBuf,
}
