//! Init command: writes a default configuration file.

use anyhow::{bail, Result};
use std::path::Path;

const CONFIG_FILE: &str = "solid-lint.toml";

const DEFAULT_CONFIG: &str = r#"# solid-lint configuration
#
# Every check is enabled with its default options when left out of this
# file. List a check to disable it or to override an option.

# [rules.fat-interface]
# max_methods = 10

# [rules.direct-instantiation]
# marker = "new "

# [rules.mixed-responsibilities]
# log_method = "logEvent"
# db_method = "connectDB"

# [rules.no-public-surface]
# enabled = false
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let path = Path::new(CONFIG_FILE);

    if path.exists() && !force {
        bail!("{CONFIG_FILE} already exists (use --force to overwrite)");
    }

    std::fs::write(path, DEFAULT_CONFIG)?;
    println!("Wrote {CONFIG_FILE}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use solid_lint_core::Config;

    #[test]
    fn default_config_template_parses() {
        let config = Config::parse(super::DEFAULT_CONFIG).expect("template must stay valid");
        // everything is commented out, so nothing is configured
        assert!(config.rules.is_empty());
    }
}
