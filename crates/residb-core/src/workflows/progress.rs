/// Events emitted while a workflow walks over the groups of a table.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    /// A phase starts and will visit `total` groups.
    PhaseStart { name: &'static str, total: u64 },
    /// A group was resolved and checked; `issues` findings were recorded for it.
    GroupChecked { name: String, issues: usize },
    /// A group could not be resolved at all.
    GroupFailed { name: String, reason: String },
    PhaseFinish,
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards [`Progress`] events to an optional callback; without one, events are dropped.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    pub fn is_silent(&self) -> bool {
        self.callback.is_none()
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(callback) = &self.callback {
            callback(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn reporter_without_callback_is_silent() {
        let reporter = ProgressReporter::new();
        assert!(reporter.is_silent());
        reporter.report(Progress::PhaseFinish);
    }

    #[test]
    fn reporter_forwards_events_in_order() {
        let seen = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            seen.lock().unwrap().push(event);
        }));
        assert!(!reporter.is_silent());

        reporter.report(Progress::PhaseStart {
            name: "Auditing definitions",
            total: 1,
        });
        reporter.report(Progress::GroupChecked {
            name: "d-thymine".to_string(),
            issues: 0,
        });
        reporter.report(Progress::PhaseFinish);
        drop(reporter);

        let seen = seen.into_inner().unwrap();
        assert_eq!(seen.len(), 3);
        assert_eq!(
            seen[1],
            Progress::GroupChecked {
                name: "d-thymine".to_string(),
                issues: 0
            }
        );
    }
}
