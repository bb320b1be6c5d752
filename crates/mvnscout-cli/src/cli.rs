//! CLI surface: flag parsing and the single inspect run.

use anyhow::{Context, Result};
use clap::Parser;
use mvnscout_core::catalog::ArchetypeCatalog;
use mvnscout_core::config;
use mvnscout_core::fetch::{self, CatalogSource};
use mvnscout_core::logging::{self, LogConfig, LogFormat, LogTarget};
use mvnscout_core::repo_layout;
use std::path::PathBuf;
use url::Url;

/// Prototype tool for inspecting the archetype catalog of a Maven repository.
#[derive(Debug, Parser)]
#[command(name = "mvnscout")]
#[command(about = "Inspect a Maven repository's archetype catalog", long_about = None)]
pub struct Cli {
    /// Log level or filter directive (e.g. "debug").
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Log target: "stderr" or "stdout".
    #[arg(long, default_value = "stderr")]
    pub log_target: LogTarget,

    /// Log format: "console" or "json".
    #[arg(long, default_value = "console")]
    pub log_format: LogFormat,

    /// Maven repository to analyze.
    #[arg(long)]
    pub repo: Option<Url>,

    /// Print the derived repository URLs for each catalog entry.
    #[arg(long)]
    pub print_urls: bool,

    /// Optional: file to load the catalog from, skipping the download.
    pub catalog_file: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&LogConfig {
        level: cli.log_level.clone(),
        target: cli.log_target,
        format: cli.log_format,
    })?;
    tracing::debug!("application logging ready");

    let cfg = config::load_or_init().context("could not load configuration")?;
    tracing::debug!("loaded config: {:?}", cfg);

    let repo = match &cli.repo {
        Some(url) => url.clone(),
        None => Url::parse(&cfg.repo_url)
            .with_context(|| format!("config repo_url {:?} is not a valid URL", cfg.repo_url))?,
    };

    let source = match &cli.catalog_file {
        Some(path) => CatalogSource::File(path.clone()),
        None => CatalogSource::Repository(repo.clone()),
    };

    let catalog = fetch::load_catalog(&source, cfg.fetch_options())?;
    tracing::info!("got {} archetypes", catalog.archetypes.len());

    print_catalog(&catalog, &repo, cli.print_urls);
    Ok(())
}

fn print_catalog(catalog: &ArchetypeCatalog, repo: &Url, print_urls: bool) {
    for entry in &catalog.archetypes {
        if entry.description.is_empty() {
            println!("{}:{}:{}", entry.group_id, entry.artifact_id, entry.version);
        } else {
            println!(
                "{}:{}:{} - {}",
                entry.group_id, entry.artifact_id, entry.version, entry.description
            );
        }
        if print_urls {
            println!("  group:    {}", repo_layout::group_url(entry, repo));
            println!("  artifact: {}", repo_layout::artifact_url(entry, repo));
            println!("  metadata: {}", repo_layout::metadata_url(entry, repo));
            println!("  version:  {}", repo_layout::version_url(entry, repo));
            println!("  pom:      {}", repo_layout::pom_url(entry, repo));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn defaults() {
        let cli = parse(&["mvnscout"]);
        assert_eq!(cli.log_level, "info");
        assert_eq!(cli.log_target, LogTarget::Stderr);
        assert_eq!(cli.log_format, LogFormat::Console);
        assert!(cli.repo.is_none());
        assert!(!cli.print_urls);
        assert!(cli.catalog_file.is_none());
    }

    #[test]
    fn log_flags() {
        let cli = parse(&[
            "mvnscout",
            "--log-level",
            "debug",
            "--log-target",
            "stdout",
            "--log-format",
            "json",
        ]);
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.log_target, LogTarget::Stdout);
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn log_target_rejects_unknown_value() {
        assert!(Cli::try_parse_from(["mvnscout", "--log-target", "syslog"]).is_err());
    }

    #[test]
    fn repo_flag_parses_as_url() {
        let cli = parse(&["mvnscout", "--repo", "https://repo.example.org/maven2"]);
        assert_eq!(
            cli.repo.unwrap().as_str(),
            "https://repo.example.org/maven2"
        );
    }

    #[test]
    fn repo_flag_rejects_invalid_url() {
        assert!(Cli::try_parse_from(["mvnscout", "--repo", "not a url"]).is_err());
    }

    #[test]
    fn catalog_file_positional() {
        let cli = parse(&["mvnscout", "archetype-catalog.xml", "--print-urls"]);
        assert_eq!(
            cli.catalog_file.as_deref(),
            Some(std::path::Path::new("archetype-catalog.xml"))
        );
        assert!(cli.print_urls);
    }
}
