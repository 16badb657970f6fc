use std::time::Duration;

use anyhow::Context;
use colored::Colorize;
use tracing::debug;
use valdiff_sdk::{
    compare_files, compare_release, DiffOptions, Difference, DifferenceKind, HelmCliSource,
    KubeSettings, OutputMode, Report, RunConfig,
};

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = run_config(&cli);
    debug!(?config, "run configuration");
    let report = match cli.command {
        Command::Release(args) => cmd_release(args, config).await?,
        Command::Files(args) => cmd_files(args, &config)?,
    };
    print_report(&report);
    Ok(())
}

fn run_config(cli: &Cli) -> RunConfig {
    RunConfig {
        output: OutputMode::parse(&cli.output),
        output_path: cli.out_file.clone(),
        diff: DiffOptions {
            null_equals_absent: cli.null_equals_absent,
            detect_order_changes: cli.detect_order,
        },
        ..Default::default()
    }
}

async fn cmd_release(args: ReleaseArgs, config: RunConfig) -> anyhow::Result<Report> {
    let settings = KubeSettings {
        kubeconfig: args.kubeconfig.or_else(KubeSettings::default_kubeconfig),
        context: args.kube_context,
        namespace: args.namespace,
        driver: args.helm_driver,
        helm_bin: args.helm_bin,
        timeout: Duration::from_secs(args.timeout),
    };
    let config = RunConfig {
        release: args.name,
        revision: args.revision,
        values_file: args.values,
        snapshot_path: args.save_release,
        ..config
    };

    let source = HelmCliSource::new(settings);
    compare_release(&source, &config)
        .await
        .with_context(|| {
            format!(
                "comparing release {} with {}",
                config.release,
                config.values_file.display()
            )
        })
}

fn cmd_files(args: FilesArgs, config: &RunConfig) -> anyhow::Result<Report> {
    compare_files(&args.left, &args.right, config).with_context(|| {
        format!("comparing {} with {}", args.left.display(), args.right.display())
    })
}

fn print_report(report: &Report) {
    if let Some(path) = &report.written_to {
        println!(
            "{} Wrote {} change(s) to {}",
            "✓".green().bold(),
            report.changes.len(),
            path.display().to_string().bold()
        );
        return;
    }

    match report.revision {
        Some(rev) => println!(
            "Comparing {} (revision {}) with {}",
            report.left.name.yellow(),
            rev,
            report.right.name.yellow()
        ),
        None => println!(
            "Comparing {} with {}",
            report.left.name.yellow(),
            report.right.name.yellow()
        ),
    }

    if report.diff.is_empty() {
        println!("{} No differences.", "✓".green().bold());
        return;
    }

    for d in &report.diff {
        println!("  {} {}", marker(d), d.path.to_string().bold());
    }
    println!(
        "\n{} difference(s): {} changed, {} added, {} removed, {} type, {} order",
        report.diff.len(),
        report.diff.modifications(),
        report.diff.additions(),
        report.diff.removals(),
        report.diff.type_changes(),
        report.diff.order_changes(),
    );

    if !report.changes.is_empty() {
        println!("\n{}", "Release values for changed keys:".cyan());
        print!("{}", report.rendered);
    }
}

fn marker(d: &Difference) -> colored::ColoredString {
    match d.kind {
        DifferenceKind::ValueChanged => "~".yellow(),
        DifferenceKind::KeyAdded => "+".green(),
        DifferenceKind::KeyRemoved => "-".red(),
        DifferenceKind::TypeChanged => "!".magenta(),
        DifferenceKind::OrderChanged => "↕".blue(),
    }
}
