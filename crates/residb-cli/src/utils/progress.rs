use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use residb::workflows::progress::{Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Drives an `indicatif` bar from library progress events.
///
/// The bar message shows the last group visited; commands print their own report once the
/// phase is over, so the bar is cleared on finish.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    /// A handler that tracks state without drawing anything, for `--quiet` runs.
    pub fn hidden() -> Self {
        Self::with_target(ProgressDrawTarget::hidden())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        let pb = ProgressBar::with_draw_target(Some(0), target).with_style(Self::bar_style());
        pb.finish_and_clear();

        Self {
            pb: Arc::new(Mutex::new(pb)),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb_clone = self.pb.clone();

        Box::new(move |progress: Progress| {
            let Ok(pb) = pb_clone.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::PhaseStart { name, total } => {
                    pb.reset();
                    pb.set_length(total);
                    pb.set_prefix(name);
                    pb.set_message("");
                }
                Progress::GroupChecked { name, issues } => {
                    pb.inc(1);
                    match issues {
                        0 => pb.set_message(name),
                        n => pb.set_message(format!("{} ({} issue(s))", name, n)),
                    }
                }
                Progress::GroupFailed { name, .. } => {
                    pb.inc(1);
                    pb.set_message(format!("{} (unresolved)", name));
                }
                Progress::PhaseFinish => pb.finish_and_clear(),
            }
        })
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{prefix:.bold} [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn handler_initializes_in_a_finished_state() {
        let handler = CliProgressHandler::hidden();
        let pb = handler.pb.lock().unwrap();
        assert_eq!(pb.length(), Some(0));
        assert!(pb.is_finished());
    }

    #[test]
    fn audit_events_drive_the_bar() {
        let handler = CliProgressHandler::hidden();
        let callback = handler.get_callback();

        callback(Progress::PhaseStart {
            name: "Auditing definitions",
            total: 9,
        });
        {
            let pb = handler.pb.lock().unwrap();
            assert_eq!(pb.prefix(), "Auditing definitions");
            assert_eq!(pb.length(), Some(9));
            assert_eq!(pb.position(), 0);
            assert!(!pb.is_finished());
        }

        callback(Progress::GroupChecked {
            name: "d-thymine".to_string(),
            issues: 0,
        });
        assert_eq!(handler.pb.lock().unwrap().message(), "d-thymine");

        callback(Progress::GroupChecked {
            name: "ser_sidechain_uni2".to_string(),
            issues: 1,
        });
        callback(Progress::GroupFailed {
            name: "d-nonexistent".to_string(),
            reason: "Unknown group".to_string(),
        });
        {
            let pb = handler.pb.lock().unwrap();
            assert_eq!(pb.position(), 3);
            assert_eq!(pb.message(), "d-nonexistent (unresolved)");
        }

        callback(Progress::PhaseFinish);
        assert!(handler.pb.lock().unwrap().is_finished());
    }

    #[test]
    fn callback_is_usable_from_other_threads() {
        let handler = CliProgressHandler::hidden();
        let callback = handler.get_callback();

        thread::spawn(move || {
            callback(Progress::PhaseStart {
                name: "Threaded",
                total: 1,
            });
            callback(Progress::GroupChecked {
                name: "phosphate".to_string(),
                issues: 0,
            });
        })
        .join()
        .unwrap();

        let pb = handler.pb.lock().unwrap();
        assert_eq!(pb.position(), 1);
        assert_eq!(pb.message(), "phosphate");
    }
}
