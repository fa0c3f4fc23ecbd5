use shared::models::{BillingMode, NewTableSession, SessionStatus};
use table_billing::{
    Config, SessionError, TableFeeLedger, compute_table_fee, estimate, member_hourly_rate,
    open_session, pause, resume,
};

const T0: i64 = 1_735_000_000_000;
const MINUTE: i64 = 60_000;

fn walk_in(hourly_rate: f64) -> NewTableSession {
    NewTableSession {
        table_id: 7,
        table_name: "Snooker 7".to_string(),
        hourly_rate,
        billing_mode: BillingMode::OpenEnded,
        is_money_game: false,
        bet_amount: None,
        has_prepaid_credit: false,
    }
}

#[test]
fn test_open_pause_release_pay() {
    table_billing::init_logger_with_file(Some("debug"), None);
    let ledger = TableFeeLedger::from_config(&Config::default());

    // Member with 20% off a 150/h table
    let rate = member_hourly_rate(150.0, Some(20.0));
    assert_eq!(rate, 120.0);

    let mut session = open_session(walk_in(rate), T0).unwrap();

    // Live timer ticks
    assert_eq!(estimate(&session, T0 + 4 * MINUTE).table_fee, 0.0);
    assert_eq!(estimate(&session, T0 + 12 * MINUTE).table_fee, 60.0);

    // Break for 10 minutes
    pause(&mut session, T0 + 20 * MINUTE).unwrap();
    assert!(!session.is_running());
    assert!(estimate(&session, T0 + 25 * MINUTE).is_paused);
    resume(&mut session, T0 + 30 * MINUTE).unwrap();
    assert!(session.is_running());

    // 70 minutes wall clock, 60 billable → two blocks
    let reference = T0 + 70 * MINUTE;
    let shown = ledger.estimate(&session, reference);
    let item = ledger.release(&mut session, 9001, reference).unwrap();
    assert_eq!(shown.table_fee, item.amount);
    assert_eq!(item.elapsed_minutes, 60);
    assert_eq!(item.amount, 120.0);
    assert_eq!(session.status, SessionStatus::Released);

    // Customer keeps ordering on the tab, pays much later
    let summary = ledger
        .pay_and_close(&mut session, &[6.5, 6.5, 12.0], T0 + 150 * MINUTE)
        .unwrap();
    assert!(summary.from_release);
    assert_eq!(summary.table_fee, 120.0);
    assert_eq!(summary.items_total, 25.0);
    assert_eq!(summary.amount_due, 145.0);
    assert_eq!(session.status, SessionStatus::Closed);

    assert_eq!(
        ledger.pay_and_close(&mut session, &[], T0 + 151 * MINUTE),
        Err(SessionError::AlreadyClosed(session.id))
    );
}

#[test]
fn test_prepaid_reservation_overrun() {
    let ledger = TableFeeLedger::default();
    let mut session = open_session(
        NewTableSession {
            billing_mode: BillingMode::FixedDuration { target_minutes: 60 },
            has_prepaid_credit: true,
            ..walk_in(120.0)
        },
        T0,
    )
    .unwrap();

    let live = estimate(&session, T0 + 75 * MINUTE);
    assert_eq!(live.table_fee, 150.0);
    assert_eq!(live.net_fee, 30.0);

    let summary = ledger
        .pay_and_close(&mut session, &[], T0 + 75 * MINUTE)
        .unwrap();
    assert_eq!(summary.table_fee, 150.0);
    assert_eq!(summary.prepaid_credit, 120.0);
    assert_eq!(summary.amount_due, 30.0);
}

#[test]
fn test_money_game_cut() {
    let ledger = TableFeeLedger::default();
    let mut session = open_session(
        NewTableSession {
            is_money_game: true,
            bet_amount: Some(1000.0),
            ..walk_in(100.0)
        },
        T0,
    )
    .unwrap();

    assert_eq!(compute_table_fee(&session, T0 + 2 * MINUTE), 100.0);
    let summary = ledger
        .pay_and_close(&mut session, &[], T0 + 20 * MINUTE)
        .unwrap();
    assert_eq!(summary.amount_due, 100.0);
}

#[test]
fn test_checkout_summary_serializes() {
    let ledger = TableFeeLedger::default();
    let mut session = open_session(walk_in(100.0), T0).unwrap();
    let summary = ledger
        .pay_and_close(&mut session, &[3.0], T0 + 35 * MINUTE)
        .unwrap();

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["table_fee"], 100.0);
    assert_eq!(json["amount_due"], 103.0);
    assert_eq!(json["from_release"], false);
}
