mod common;

use std::thread;
use std::time::Duration;

use statement_core::config::EngineConfig;
use statement_core::monitor::{StatementMonitor, Status};
use statement_core::statement::{StatementType, Violation};

use common::{balance_sheet, income_statement, line_item};

#[test]
fn start_monitoring_is_last_writer_wins_and_stop_is_idempotent() {
    let monitor = StatementMonitor::new(EngineConfig::default());
    monitor.start_monitoring(income_statement(), StatementType::Income);
    monitor.start_monitoring(income_statement(), StatementType::Income);
    assert!(monitor.is_monitoring(StatementType::Income));

    monitor.stop_monitoring(StatementType::Income);
    assert!(!monitor.is_monitoring(StatementType::Income));
    monitor.stop_monitoring(StatementType::Income);
    assert_eq!(monitor.status(StatementType::Income), Status::Red);
}

#[test]
fn one_worker_serves_multiple_statement_types() {
    let monitor = StatementMonitor::new(EngineConfig::default());
    monitor.start_monitoring(income_statement(), StatementType::Income);
    monitor.start_monitoring(balance_sheet(), StatementType::BalanceSheet);
    monitor.tick_now();

    for statement_type in [StatementType::Income, StatementType::BalanceSheet] {
        let monitored = monitor
            .monitored_statement(statement_type)
            .expect("entry exists");
        assert_eq!(monitored.validations.len(), 1, "{statement_type}");
    }
    assert_eq!(monitor.status(StatementType::Income), Status::Green);
    assert_eq!(monitor.status(StatementType::BalanceSheet), Status::Green);
}

#[test]
fn status_aggregates_by_severity_with_error_precedence() {
    let monitor = StatementMonitor::new(EngineConfig::default());

    let mut statement = income_statement();
    statement.record_corrections([Violation::warning("check the allowance balance")]);
    monitor.start_monitoring(statement, StatementType::Income);
    assert_eq!(monitor.status(StatementType::Income), Status::Amber);

    let mut statement = income_statement();
    statement.record_corrections([
        Violation::warning("check the allowance balance"),
        Violation::error("invalid section total"),
    ]);
    monitor.start_monitoring(statement, StatementType::Income);
    assert_eq!(monitor.status(StatementType::Income), Status::Red);

    monitor.start_monitoring(income_statement(), StatementType::Income);
    monitor.tick_now();
    assert_eq!(monitor.status(StatementType::Income), Status::Green);
}

#[test]
fn findings_accumulate_without_duplication_across_ticks() {
    let monitor = StatementMonitor::new(EngineConfig::default());
    let mut statement = income_statement();
    statement.line_items[0].amount = -100.0; // revenue recorded negative
    monitor.start_monitoring(statement, StatementType::Income);

    monitor.tick_now();
    let after_first = monitor
        .monitored_statement(StatementType::Income)
        .expect("entry exists")
        .corrections
        .len();
    monitor.tick_now();
    monitor.tick_now();
    let monitored = monitor
        .monitored_statement(StatementType::Income)
        .expect("entry exists");
    assert_eq!(
        monitored.corrections.len(),
        after_first,
        "repeat passes must not duplicate findings"
    );
    assert_eq!(monitored.validations.len(), 3, "each pass leaves an audit line");
    assert!(monitored
        .validations
        .iter()
        .all(|line| line.starts_with("Validation check at ")));
}

#[test]
fn illegal_interactive_move_is_reported_on_the_next_pass() {
    let monitor = StatementMonitor::new(EngineConfig::default());
    monitor.start_monitoring(income_statement(), StatementType::Income);
    monitor.tick_now();

    let mut edited = monitor
        .monitored_statement(StatementType::Income)
        .expect("entry exists");
    edited.line_items[0].section = "cost_of_sales".into(); // revenue dragged out
    assert!(monitor.update_statement(StatementType::Income, edited));
    monitor.tick_now();

    let monitored = monitor
        .monitored_statement(StatementType::Income)
        .expect("entry exists");
    assert!(monitored
        .corrections
        .iter()
        .any(|violation| violation.message.contains("Illegal move")));
    assert_eq!(monitor.status(StatementType::Income), Status::Red);
}

#[test]
fn background_worker_revalidates_on_its_own_schedule() {
    let config = EngineConfig {
        poll_interval_secs: 0,
        ..EngineConfig::default()
    };
    let monitor = StatementMonitor::new(config);
    let mut broken = income_statement();
    broken.total = 9_999.0;
    monitor.start_monitoring(broken, StatementType::Income);

    thread::sleep(Duration::from_millis(400));

    assert_eq!(monitor.status(StatementType::Income), Status::Red);
    let monitored = monitor
        .monitored_statement(StatementType::Income)
        .expect("entry exists");
    assert!(!monitored.validations.is_empty());
    monitor.stop_monitoring(StatementType::Income);
}

#[test]
fn monitoring_one_broken_type_does_not_poison_the_others() {
    let monitor = StatementMonitor::new(EngineConfig::default());
    let nonsense = statement_core::statement::GeneratedStatement::new(
        vec![line_item("9999", "Unmapped", f64::NAN, "other")],
        Vec::new(),
        f64::NAN,
    );
    monitor.start_monitoring(nonsense, StatementType::CashFlow);
    monitor.start_monitoring(income_statement(), StatementType::Income);
    monitor.tick_now();

    // The healthy entry keeps ticking regardless of what the other one did.
    let monitored = monitor
        .monitored_statement(StatementType::Income)
        .expect("entry exists");
    assert_eq!(monitored.validations.len(), 1);
    assert_eq!(monitor.status(StatementType::Income), Status::Green);
}
