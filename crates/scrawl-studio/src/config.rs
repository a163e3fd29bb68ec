use std::path::{Path, PathBuf};

use clap::Parser;

/// Where commands are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    pub fn name(&self) -> String {
        match self {
            Source::Stdin => "-".to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }
}

/// Runs scrawl scene scripts and dumps the resulting definitions
#[derive(Debug, Parser)]
#[command(name = "scrawl")]
#[command(version)]
#[command(about = "Runs scene command scripts", long_about = None)]
pub struct StudioConfig {
    /// Log filter, env_logger syntax (overrides RUST_LOG)
    #[arg(short, long)]
    pub log: Option<String>,

    /// Do not print the definition dump at exit
    #[arg(short, long)]
    pub quiet: bool,

    /// Scripts to run in order; '-' or none reads stdin
    pub sources: Vec<PathBuf>,
}

impl StudioConfig {
    /// Scripts in run order, with `-` and an empty list mapped to stdin.
    pub fn sources(&self) -> Vec<Source> {
        if self.sources.is_empty() {
            return vec![Source::Stdin];
        }
        self.sources
            .iter()
            .map(|p| if p == Path::new("-") { Source::Stdin } else { Source::File(p.clone()) })
            .collect()
    }
}
