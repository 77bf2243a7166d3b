use super::progress::{Progress, ProgressReporter};
use crate::core::table::error::ResolveError;
use crate::core::table::registry::DefinitionTable;
use crate::core::validation::{Severity, ValidationIssue, validate};
use tracing::{debug, info, warn};

/// Validation findings for one group that resolved successfully.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupAudit {
    pub name: String,
    pub issues: Vec<ValidationIssue>,
}

impl GroupAudit {
    pub fn count(&self, severity: Severity) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity() == severity)
            .count()
    }
}

/// The outcome of auditing a set of groups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditSummary {
    /// Groups that resolved, with their validation issues (possibly none).
    pub audits: Vec<GroupAudit>,
    /// Groups that could not be resolved at all.
    pub failures: Vec<(String, ResolveError)>,
}

impl AuditSummary {
    /// Number of error-level problems. Every resolution failure counts as one error.
    pub fn error_count(&self) -> usize {
        self.failures.len()
            + self
                .audits
                .iter()
                .map(|audit| audit.count(Severity::Error))
                .sum::<usize>()
    }

    pub fn warning_count(&self) -> usize {
        self.audits
            .iter()
            .map(|audit| audit.count(Severity::Warning))
            .sum()
    }

    /// True if nothing was found; with `strict`, warnings count as problems too.
    pub fn is_clean(&self, strict: bool) -> bool {
        self.error_count() == 0 && (!strict || self.warning_count() == 0)
    }
}

/// Resolves and validates every group of `table`, in name order.
pub fn audit_table(table: &DefinitionTable, reporter: &ProgressReporter) -> AuditSummary {
    let names: Vec<String> = table.names().into_iter().map(str::to_string).collect();
    audit_groups(table, &names, reporter)
}

/// Resolves and validates the groups named in `keys`. Each key is looked up as a name
/// first, then as a symbol; keys that match nothing are reported as failures.
pub fn audit_groups(
    table: &DefinitionTable,
    keys: &[String],
    reporter: &ProgressReporter,
) -> AuditSummary {
    reporter.report(Progress::PhaseStart {
        name: "Auditing definitions",
        total: keys.len() as u64,
    });

    let mut summary = AuditSummary::default();
    for key in keys {
        match table.resolve_lookup(key) {
            Ok(resolved) => {
                let issues = validate(&resolved);
                debug!("Group '{}' has {} issue(s)", resolved.name, issues.len());
                reporter.report(Progress::GroupChecked {
                    name: resolved.name.clone(),
                    issues: issues.len(),
                });
                summary.audits.push(GroupAudit {
                    name: resolved.name,
                    issues,
                });
            }
            Err(e) => {
                warn!("Group '{}' cannot be resolved: {}", key, e);
                reporter.report(Progress::GroupFailed {
                    name: key.clone(),
                    reason: e.to_string(),
                });
                summary.failures.push((key.clone(), e));
            }
        }
    }

    reporter.report(Progress::PhaseFinish);
    info!(
        "Audited {} group(s): {} error(s), {} warning(s)",
        keys.len(),
        summary.error_count(),
        summary.warning_count()
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::AtomPath;
    use crate::core::models::group::GroupDefinition;
    use std::sync::{Arc, Mutex};

    fn path(s: &str) -> AtomPath {
        s.parse().unwrap()
    }

    fn table() -> DefinitionTable {
        DefinitionTable::from_definitions([
            GroupDefinition::new("ion")
                .with_symbol("NA")
                .with_atom(path("Na"), "Na")
                .with_charge("amber_charge", path("Na"), 1.0),
            GroupDefinition::new("bare").with_atom(path("C"), "C"),
            GroupDefinition::new("orphan").with_component("part", "missing"),
        ])
        .unwrap()
    }

    #[test]
    fn audit_table_covers_every_group_in_name_order() {
        let summary = audit_table(&table(), &ProgressReporter::new());

        let audited: Vec<_> = summary.audits.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(audited, vec!["bare", "ion"]);
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].0, "orphan");
        assert_eq!(summary.error_count(), 1);
        assert_eq!(summary.warning_count(), 1);
        assert!(!summary.is_clean(false));
    }

    #[test]
    fn audit_groups_accepts_symbols_and_reports_unknown_keys() {
        let keys = vec!["NA".to_string(), "nothing".to_string()];
        let summary = audit_groups(&table(), &keys, &ProgressReporter::new());

        assert_eq!(summary.audits.len(), 1);
        assert_eq!(summary.audits[0].name, "ion");
        assert!(summary.audits[0].issues.is_empty());
        assert!(matches!(
            summary.failures[0].1,
            ResolveError::UnknownGroup { .. }
        ));
    }

    #[test]
    fn strict_mode_treats_warnings_as_problems() {
        let keys = vec!["bare".to_string()];
        let summary = audit_groups(&table(), &keys, &ProgressReporter::new());
        assert!(summary.is_clean(false));
        assert!(!summary.is_clean(true));
    }

    #[test]
    fn progress_events_bracket_the_audit() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let reporter = ProgressReporter::with_callback(Box::new(move |event| {
            sink.lock().unwrap().push(event);
        }));

        audit_table(&table(), &reporter);

        let events = events.lock().unwrap();
        assert_eq!(
            events.first(),
            Some(&Progress::PhaseStart {
                name: "Auditing definitions",
                total: 3
            })
        );
        assert_eq!(
            events[1],
            Progress::GroupChecked {
                name: "bare".to_string(),
                issues: 1
            }
        );
        assert!(matches!(
            &events[3],
            Progress::GroupFailed { name, .. } if name == "orphan"
        ));
        assert_eq!(events.last(), Some(&Progress::PhaseFinish));
        assert_eq!(events.len(), 5);
    }
}
