//! `config` command: print the effective config or its validation report.

use std::path::Path;

use anyhow::{Context, Result, bail};
use venturemind_config::{ClientConfig, ConfigValidationError, validate};

use crate::terminal_output::{Column, note_error, note_success, note_warn, render_table};

pub fn run(config: &ClientConfig, path: &Path, validate_only: bool) -> Result<()> {
    if !validate_only {
        let yaml = serde_yaml::to_string(config).context("Failed to serialize config")?;
        println!("# {}", path.display());
        print!("{yaml}");
        return Ok(());
    }

    let report = validate(config);
    if !report.warnings.is_empty() {
        note_warn(&format!("{} warning(s)", report.warnings.len()));
        print!("{}", findings_table(&report.warnings));
    }
    if report.is_valid() {
        note_success(&format!("{} is valid", path.display()));
        return Ok(());
    }

    note_error(&format!("{} error(s)", report.errors.len()));
    print!("{}", findings_table(&report.errors));
    bail!("invalid config: {}", path.display())
}

fn findings_table(findings: &[ConfigValidationError]) -> String {
    let rows: Vec<Vec<String>> = findings
        .iter()
        .map(|f| vec![f.path.clone(), f.message.clone()])
        .collect();
    render_table(&[Column::left("Path"), Column::left("Message")], &rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use venturemind_config::{LoggingConfig, apply_all_defaults};

    #[test]
    fn valid_config_passes() {
        let config = apply_all_defaults(ClientConfig::default());
        assert!(run(&config, Path::new("config.yaml"), true).is_ok());
    }

    #[test]
    fn invalid_config_fails() {
        let config = ClientConfig {
            logging: Some(LoggingConfig {
                level: Some("shout".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(run(&config, Path::new("config.yaml"), true).is_err());
    }

    #[test]
    fn findings_table_lists_paths() {
        let findings = vec![ConfigValidationError {
            path: "api.chatUrl".to_string(),
            message: "URL cannot be empty".to_string(),
        }];
        assert!(findings_table(&findings).contains("api.chatUrl"));
    }
}
