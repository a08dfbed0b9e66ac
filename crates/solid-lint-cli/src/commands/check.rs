//! Check command implementation.

use anyhow::{bail, Context, Result};
use solid_lint_core::{Config, SolidAnalyzer};
use solid_lint_java::JavaExtractor;
use solid_lint_rules::{class_rules_from, method_rules_from};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::OutputFormat;

/// Runs the check command.
pub fn run(path: &Path, format: OutputFormat, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let analyzer = build_analyzer(&config)?;

    tracing::info!("Analyzing {:?} with {} rules", path, analyzer.rule_count());

    let mut any_flagged = false;

    if path.as_os_str() == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read stdin")?;
        any_flagged |= super::output::print("<stdin>", &analyzer.analyze(&source), format)?;
    } else if path.is_dir() {
        let files = discover_sources(path)?;
        if files.is_empty() {
            bail!("no .java files under {}", path.display());
        }
        for file in files {
            let source = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let name = file.display().to_string();
            any_flagged |= super::output::print(&name, &analyzer.analyze(&source), format)?;
        }
    } else {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let name = path.display().to_string();
        any_flagged |= super::output::print(&name, &analyzer.analyze(&source), format)?;
    }

    // Exit with error code if anything was flagged
    if any_flagged {
        std::process::exit(1);
    }

    Ok(())
}

/// Wires the Java front-end and the configured checks into an analyzer.
fn build_analyzer(config: &Config) -> Result<SolidAnalyzer> {
    let mut builder = SolidAnalyzer::builder().parser(JavaExtractor::new());
    for rule in class_rules_from(config) {
        builder = builder.class_rule_box(rule);
    }
    for rule in method_rules_from(config) {
        builder = builder.method_rule_box(rule);
    }
    builder.build().context("Failed to build analyzer")
}

/// Loads the explicit config, or `solid-lint.toml` from the working
/// directory when present, or the defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(p) => Config::from_file(p)
            .with_context(|| format!("Failed to load config: {}", p.display())),
        None => {
            let default = Path::new("solid-lint.toml");
            if default.exists() {
                tracing::debug!("Using config: {}", default.display());
                Config::from_file(default).context("Failed to load solid-lint.toml")
            } else {
                Ok(Config::default())
            }
        }
    }
}

/// Discovers all Java source files under a directory, in stable order.
fn discover_sources(root: &Path) -> Result<Vec<PathBuf>> {
    let pattern = format!("{}/**/*.java", root.display());
    let mut files = Vec::new();

    for entry in glob::glob(&pattern)? {
        files.push(entry?);
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discovers_java_files_recursively() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("pkg");
        std::fs::create_dir(&nested).expect("mkdir");
        std::fs::write(dir.path().join("A.java"), "class A {}").expect("write");
        std::fs::write(nested.join("B.java"), "class B {}").expect("write");
        std::fs::write(dir.path().join("notes.txt"), "skip me").expect("write");

        let files = discover_sources(dir.path()).expect("discover");
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.extension().is_some_and(|e| e == "java")));
    }

    #[test]
    fn missing_default_config_falls_back_to_defaults() {
        let config = load_config(None).expect("defaults");
        assert!(config.is_rule_enabled("fat-interface"));
    }

    #[test]
    fn analyzer_builds_from_default_config() {
        let analyzer = build_analyzer(&Config::default()).expect("analyzer");
        assert_eq!(analyzer.rule_count(), 7);
    }
}
