//! Continuous statement monitor: re-runs the validators against the latest
//! in-memory statement for each active statement type and aggregates the
//! findings into a traffic-light status.

use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::statement::{GeneratedStatement, Severity, StatementType, Violation};
use crate::validate::{ArithmeticValidator, SignValidator, TransitionValidator};

const WORKER_SLEEP: Duration = Duration::from_millis(25);

/// Traffic-light status derived from the monitored statement's correction
/// log: a max-reduction over severity tags.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Red,
    Amber,
    Green,
}

/// Bookkeeping for one monitored statement type.
#[derive(Debug, Clone)]
pub struct MonitorEntry {
    pub statement: GeneratedStatement,
    pub last_checked_at: DateTime<Utc>,
    /// Section each item sat in at the previous pass, keyed by derived item
    /// id; moves since then go through the transition validator.
    sections_seen: HashMap<String, String>,
}

#[derive(Debug, Default)]
struct MonitorState {
    entries: HashMap<StatementType, MonitorEntry>,
}

struct PassOutcome {
    violations: Vec<Violation>,
    sections: HashMap<String, String>,
}

/// The shared poll task. Each spawned worker owns its stop flag, so a
/// stop/start race can never leave a stale worker running.
#[derive(Debug)]
struct Worker {
    stop: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

/// Per-session monitoring context. At most one entry per statement type;
/// a second `start_monitoring` for the same type overwrites the first
/// (last writer wins). One shared poll worker serves every entry.
#[derive(Debug)]
pub struct StatementMonitor {
    config: EngineConfig,
    state: Arc<Mutex<MonitorState>>,
    worker: Mutex<Option<Worker>>,
}

impl StatementMonitor {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            state: Arc::new(Mutex::new(MonitorState::default())),
            worker: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Registers (or overwrites) the entry for a statement type and makes
    /// sure the shared poll worker is running. Idempotent with respect to
    /// the worker: a second type reuses the existing task.
    pub fn start_monitoring(&self, statement: GeneratedStatement, statement_type: StatementType) {
        let entry = MonitorEntry {
            sections_seen: snapshot_sections(&statement),
            statement,
            last_checked_at: Utc::now(),
        };
        {
            let mut state = lock_ignore_poison(&self.state);
            state.entries.insert(statement_type, entry);
        }
        tracing::info!(statement_type = %statement_type, "started monitoring statement");
        self.ensure_worker();
    }

    /// Removes the entry for a statement type. Idempotent and safe to call
    /// when nothing is monitored; the poll worker stops once the last
    /// entry is gone.
    pub fn stop_monitoring(&self, statement_type: StatementType) {
        let drained = {
            let mut state = lock_ignore_poison(&self.state);
            state.entries.remove(&statement_type);
            state.entries.is_empty()
        };
        tracing::info!(statement_type = %statement_type, "stopped monitoring statement");
        if drained {
            self.stop_worker();
        }
    }

    /// Replaces the monitored statement after an interactive edit, keeping
    /// the section baseline so the next pass runs moved items through the
    /// transition gate. Returns `false` when the type is not monitored.
    pub fn update_statement(
        &self,
        statement_type: StatementType,
        statement: GeneratedStatement,
    ) -> bool {
        let mut state = lock_ignore_poison(&self.state);
        match state.entries.get_mut(&statement_type) {
            Some(entry) => {
                entry.statement = statement;
                true
            }
            None => false,
        }
    }

    pub fn is_monitoring(&self, statement_type: StatementType) -> bool {
        lock_ignore_poison(&self.state)
            .entries
            .contains_key(&statement_type)
    }

    /// Latest snapshot of the monitored statement, audit trails included.
    pub fn monitored_statement(&self, statement_type: StatementType) -> Option<GeneratedStatement> {
        lock_ignore_poison(&self.state)
            .entries
            .get(&statement_type)
            .map(|entry| entry.statement.clone())
    }

    pub fn status(&self, statement_type: StatementType) -> Status {
        let state = lock_ignore_poison(&self.state);
        let Some(entry) = state.entries.get(&statement_type) else {
            return Status::Red;
        };
        match entry
            .statement
            .corrections
            .iter()
            .map(|violation| violation.severity)
            .max()
        {
            Some(Severity::Error) => Status::Red,
            Some(Severity::Warning) => Status::Amber,
            _ => Status::Green,
        }
    }

    /// Runs a validation pass over every entry immediately, ignoring the
    /// poll interval. Used by interactive edit handlers and tests.
    pub fn tick_now(&self) {
        let mut state = lock_ignore_poison(&self.state);
        Self::sweep(&self.config, &mut state, Utc::now(), true);
    }

    fn ensure_worker(&self) {
        let mut slot = lock_ignore_poison(&self.worker);
        if slot.is_some() {
            return;
        }
        let state = Arc::clone(&self.state);
        let config = self.config.clone();
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let handle = thread::spawn(move || {
            let interval = config.poll_interval();
            let mut since_sweep = Duration::ZERO;
            while !flag.load(Ordering::SeqCst) {
                thread::sleep(WORKER_SLEEP);
                since_sweep += WORKER_SLEEP;
                if since_sweep < interval {
                    continue;
                }
                since_sweep = Duration::ZERO;
                let mut state = lock_ignore_poison(&state);
                Self::sweep(&config, &mut state, Utc::now(), false);
            }
        });
        *slot = Some(Worker { stop, handle });
    }

    fn stop_worker(&self) {
        let worker = lock_ignore_poison(&self.worker).take();
        if let Some(worker) = worker {
            worker.stop.store(true, Ordering::SeqCst);
            let _ = worker.handle.join();
        }
    }

    fn sweep(config: &EngineConfig, state: &mut MonitorState, now: DateTime<Utc>, force: bool) {
        let interval = chrono::Duration::seconds(config.poll_interval_secs as i64);
        for (statement_type, entry) in state.entries.iter_mut() {
            if !force && now.signed_duration_since(entry.last_checked_at) < interval {
                continue;
            }
            let statement_type = *statement_type;
            let pass = catch_unwind(AssertUnwindSafe(|| {
                Self::run_pass(config, statement_type, &entry.statement, &entry.sections_seen)
            }));
            match pass {
                Ok(outcome) => {
                    let fresh: Vec<Violation> = outcome
                        .violations
                        .into_iter()
                        .filter(|violation| !entry.statement.corrections.contains(violation))
                        .collect();
                    if !fresh.is_empty() {
                        tracing::debug!(
                            statement_type = %statement_type,
                            count = fresh.len(),
                            "validation issues found"
                        );
                    }
                    entry.statement.record_validation(format!(
                        "Validation check at {}: {} new finding(s)",
                        now.to_rfc3339(),
                        fresh.len()
                    ));
                    entry.statement.record_corrections(fresh);
                    entry.sections_seen = outcome.sections;
                }
                Err(_) => {
                    // One malformed statement must not stop the other
                    // entries from ticking.
                    tracing::error!(
                        statement_type = %statement_type,
                        "validation pass panicked; entry skipped this tick"
                    );
                }
            }
            entry.last_checked_at = now;
        }
    }

    fn run_pass(
        config: &EngineConfig,
        statement_type: StatementType,
        statement: &GeneratedStatement,
        sections_seen: &HashMap<String, String>,
    ) -> PassOutcome {
        let mut violations = Vec::new();
        for item in &statement.line_items {
            violations.extend(SignValidator::validate_line_item(config, item).into_violations());
        }
        violations.extend(
            ArithmeticValidator::validate_statement(config, statement, statement_type)
                .into_violations(),
        );

        let mut sections = HashMap::new();
        for item in &statement.line_items {
            let id = item.id();
            if let Some(previous) = sections_seen.get(&id) {
                if previous != &item.section {
                    let decision = TransitionValidator::can_move(
                        config,
                        item,
                        previous,
                        &item.section,
                        statement_type,
                    );
                    if !decision.is_valid {
                        let reason = decision
                            .reason
                            .unwrap_or_else(|| "transition rejected".to_string());
                        violations.push(Violation::error(format!(
                            "Illegal move for {}: {}",
                            item.description, reason
                        )));
                    }
                }
            }
            sections.insert(id, item.section.clone());
        }

        PassOutcome {
            violations,
            sections,
        }
    }
}

impl Drop for StatementMonitor {
    fn drop(&mut self) {
        self.stop_worker();
    }
}

fn snapshot_sections(statement: &GeneratedStatement) -> HashMap<String, String> {
    statement
        .line_items
        .iter()
        .map(|item| (item.id(), item.section.clone()))
        .collect()
}

fn lock_ignore_poison<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::AccountCode;
    use crate::statement::LineItem;

    fn item(code: &str, description: &str, amount: f64, section: &str) -> LineItem {
        LineItem::new(
            description,
            AccountCode::new(code).expect("valid code"),
            amount,
            section,
        )
    }

    fn clean_income_statement() -> GeneratedStatement {
        GeneratedStatement::new(
            vec![
                item("4000", "Sales revenue", 100.0, "revenue"),
                item("5000", "Cost of sales", -40.0, "cost_of_sales"),
                item("5100", "Selling expenses", -10.0, "operating_expenses"),
            ],
            Vec::new(),
            50.0,
        )
    }

    #[test]
    fn start_monitoring_twice_keeps_one_entry() {
        let monitor = StatementMonitor::new(EngineConfig::default());
        monitor.start_monitoring(clean_income_statement(), StatementType::Income);
        monitor.start_monitoring(clean_income_statement(), StatementType::Income);
        assert!(monitor.is_monitoring(StatementType::Income));

        monitor.stop_monitoring(StatementType::Income);
        assert!(!monitor.is_monitoring(StatementType::Income));
        // Idempotent: stopping again must not panic.
        monitor.stop_monitoring(StatementType::Income);
    }

    #[test]
    fn status_is_red_without_an_entry() {
        let monitor = StatementMonitor::new(EngineConfig::default());
        assert_eq!(monitor.status(StatementType::Income), Status::Red);
    }

    #[test]
    fn clean_statement_reports_green() {
        let monitor = StatementMonitor::new(EngineConfig::default());
        monitor.start_monitoring(clean_income_statement(), StatementType::Income);
        monitor.tick_now();
        assert_eq!(monitor.status(StatementType::Income), Status::Green);
    }

    #[test]
    fn error_severity_wins_over_warning() {
        let monitor = StatementMonitor::new(EngineConfig::default());
        let mut statement = clean_income_statement();
        statement.record_corrections([
            Violation::warning("check the allowance balance"),
            Violation::error("invalid subtotal"),
        ]);
        monitor.start_monitoring(statement, StatementType::Income);
        assert_eq!(monitor.status(StatementType::Income), Status::Red);
    }

    #[test]
    fn warning_only_statement_reports_amber() {
        let monitor = StatementMonitor::new(EngineConfig::default());
        let mut statement = clean_income_statement();
        statement.record_corrections([Violation::warning("check the allowance balance")]);
        monitor.start_monitoring(statement, StatementType::Income);
        assert_eq!(monitor.status(StatementType::Income), Status::Amber);
    }

    #[test]
    fn ticks_append_audit_lines_and_dedupe_corrections() {
        let monitor = StatementMonitor::new(EngineConfig::default());
        let mut statement = clean_income_statement();
        statement.total = 60.0; // off by ten
        monitor.start_monitoring(statement, StatementType::Income);

        monitor.tick_now();
        monitor.tick_now();

        let monitored = monitor
            .monitored_statement(StatementType::Income)
            .expect("entry exists");
        assert_eq!(monitored.validations.len(), 2, "one audit line per pass");
        let total_mismatches = monitored
            .corrections
            .iter()
            .filter(|violation| violation.message.contains("Total mismatch"))
            .count();
        assert_eq!(total_mismatches, 1, "repeat findings are not re-appended");
        assert_eq!(monitor.status(StatementType::Income), Status::Red);
    }

    #[test]
    fn moved_items_go_through_the_transition_gate() {
        let monitor = StatementMonitor::new(EngineConfig::default());
        monitor.start_monitoring(clean_income_statement(), StatementType::Income);
        monitor.tick_now();

        // Drag the selling-expenses item into the revenue section.
        let mut edited = monitor
            .monitored_statement(StatementType::Income)
            .expect("entry exists");
        edited.line_items[2].section = "revenue".into();
        assert!(monitor.update_statement(StatementType::Income, edited));
        monitor.tick_now();

        let monitored = monitor
            .monitored_statement(StatementType::Income)
            .expect("entry exists");
        assert!(
            monitored
                .corrections
                .iter()
                .any(|violation| violation.message.contains("Illegal move")),
            "corrections: {:?}",
            monitored.corrections
        );
    }

    #[test]
    fn update_statement_requires_an_active_entry() {
        let monitor = StatementMonitor::new(EngineConfig::default());
        assert!(!monitor.update_statement(StatementType::Income, clean_income_statement()));
    }

    #[test]
    fn background_worker_ticks_on_its_own() {
        let config = EngineConfig {
            poll_interval_secs: 0,
            ..EngineConfig::default()
        };
        let monitor = StatementMonitor::new(config);
        monitor.start_monitoring(clean_income_statement(), StatementType::Income);
        thread::sleep(Duration::from_millis(400));
        let monitored = monitor
            .monitored_statement(StatementType::Income)
            .expect("entry exists");
        assert!(
            !monitored.validations.is_empty(),
            "worker should have recorded at least one pass"
        );
        monitor.stop_monitoring(StatementType::Income);
    }
}
