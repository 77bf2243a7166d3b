use crate::cli::ValidateArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use residb::core::table::registry::DefinitionTable;
use residb::core::validation::Severity;
use residb::workflows::audit::{AuditSummary, audit_groups, audit_table};
use residb::workflows::progress::ProgressReporter;
use std::io::Write;
use tracing::{info, warn};

pub fn run(
    args: &ValidateArgs,
    table: &DefinitionTable,
    config: &AppConfig,
    show_progress: bool,
    out: &mut impl Write,
) -> Result<()> {
    let strict = args.strict || config.strict;
    let handler = if show_progress {
        CliProgressHandler::new()
    } else {
        CliProgressHandler::hidden()
    };
    let reporter = ProgressReporter::with_callback(handler.get_callback());

    let summary = if args.keys.is_empty() {
        info!("Validating all {} group(s).", table.len());
        audit_table(table, &reporter)
    } else {
        audit_groups(table, &args.keys, &reporter)
    };

    render(&summary, out)?;
    check(&summary, strict)
}

fn check(summary: &AuditSummary, strict: bool) -> Result<()> {
    if summary.is_clean(strict) {
        return Ok(());
    }
    let (errors, warnings) = (summary.error_count(), summary.warning_count());
    if errors == 0 {
        warn!("Strict mode: {} warning(s) are treated as failures.", warnings);
    }
    Err(CliError::ValidationFailed { errors, warnings })
}

fn render(summary: &AuditSummary, out: &mut impl Write) -> Result<()> {
    for audit in &summary.audits {
        let marker = match audit.issues.iter().map(|i| i.severity()).max() {
            None => "✓",
            Some(Severity::Warning) => "⚠",
            Some(Severity::Error) => "✗",
        };
        writeln!(out, "{} {}", marker, audit.name)?;
        for issue in &audit.issues {
            writeln!(out, "    {}: {}", issue.severity(), issue)?;
        }
    }
    for (key, error) in &summary.failures {
        writeln!(out, "✗ {}", key)?;
        writeln!(out, "    error: {}", error)?;
    }
    writeln!(
        out,
        "{} group(s) checked: {} error(s), {} warning(s)",
        summary.audits.len() + summary.failures.len(),
        summary.error_count(),
        summary.warning_count()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(strict: bool) -> AppConfig {
        AppConfig {
            database: None,
            charge_set: "amber_charge".to_string(),
            atom_type_set: "amber91_atom_type".to_string(),
            strict,
        }
    }

    fn validate(keys: &[&str], strict: bool, config_strict: bool) -> (Result<()>, String) {
        let table = DefinitionTable::builtin().unwrap();
        let args = ValidateArgs {
            keys: keys.iter().map(|k| k.to_string()).collect(),
            strict,
        };
        let mut buffer = Vec::new();
        let result = run(&args, table, &config(config_strict), false, &mut buffer);
        (result, String::from_utf8(buffer).unwrap())
    }

    #[test]
    fn builtin_table_passes_without_strict() {
        let (result, text) = validate(&[], false, false);
        assert!(result.is_ok());
        assert!(text.contains("✓ d-thymine\n"));
        assert!(text.contains("⚠ ser_sidechain_uni2\n"));
        assert!(text.contains("    warning: no charge set is declared\n"));
        assert!(text.contains("⚠ phosphate\n"));
        // Component fragments and the sidechain carry no charges of their own.
        assert!(text.contains("9 group(s) checked: 0 error(s), 6 warning(s)"));
    }

    #[test]
    fn strict_flag_turns_warnings_into_failure() {
        let (result, _) = validate(&["ser_sidechain_uni2"], true, false);
        assert!(matches!(
            result,
            Err(CliError::ValidationFailed {
                errors: 0,
                warnings: 1
            })
        ));
    }

    #[test]
    fn strict_from_config_applies_too() {
        let (result, _) = validate(&["ser_sidechain_uni2"], false, true);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_keys_fail_validation() {
        let (result, text) = validate(&["DT", "d-nonexistent"], false, false);
        assert!(matches!(
            result,
            Err(CliError::ValidationFailed { errors: 1, .. })
        ));
        assert!(text.contains("✓ d-thymine\n"));
        assert!(text.contains("✗ d-nonexistent\n"));
        assert!(text.contains("Unknown group 'd-nonexistent'"));
    }
}
