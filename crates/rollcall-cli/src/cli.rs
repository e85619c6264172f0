//! Command line interface

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "rollcall")]
#[command(version, about = "Pick 40 VR participants from a roster, one name per line")]
pub struct Cli {
    /// Preload names from a file ("-" reads stdin)
    pub file: Option<PathBuf>,

    /// Print the selection to stdout and exit, without the TUI
    #[arg(long, default_value_t = false)]
    pub plain: bool,

    /// Seed the sampler for reproducible draws
    #[arg(long)]
    pub seed: Option<u64>,

    /// Theme name (rollcall, terminal)
    #[arg(long)]
    pub theme: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log file (defaults to the cache directory)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Read roster text from a file, or stdin for "-"
pub fn read_roster(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read roster from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file {}", path.display()))
}

/// Numbered list, one participant per line
pub fn format_plain(names: &[String]) -> String {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{:>2}. {}\n", i + 1, name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["rollcall", "--plain", "--seed", "7", "names.txt"]);
        assert!(cli.plain);
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.file, Some(PathBuf::from("names.txt")));
        assert!(cli.theme.is_none());
    }

    #[test]
    fn test_format_plain() {
        let names = vec!["Ada".to_string(), "Grace".to_string()];
        assert_eq!(format_plain(&names), " 1. Ada\n 2. Grace\n");
    }

    #[test]
    fn test_read_roster_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("names.txt");
        std::fs::write(&path, "a\nb\n").unwrap();
        assert_eq!(read_roster(&path).unwrap(), "a\nb\n");
    }

    #[test]
    fn test_read_roster_missing_file() {
        let err = read_roster(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read roster file"));
    }
}
