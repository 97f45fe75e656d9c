//! End-to-end poll cycle scenarios driven through the port mocks

use std::sync::Arc;
use std::time::Duration;

use homework_bot_core::application::{CycleOutcome, Dispatch, Notifier, PollLoop, PollSettings};
use homework_bot_core::port::homework_api::mocks::MockHomeworkApi;
use homework_bot_core::port::messenger::mocks::RecordingMessenger;
use homework_bot_core::port::time_provider::mocks::FixedTimeProvider;
use homework_bot_core::port::FetchError;
use serde_json::{json, Value};

const START: i64 = 100;

fn poll_loop(
    responses: Vec<Result<Value, FetchError>>,
) -> (PollLoop, Arc<MockHomeworkApi>, Arc<RecordingMessenger>) {
    let api = Arc::new(MockHomeworkApi::new(responses));
    let messenger = Arc::new(RecordingMessenger::new_delivering());
    let poll_loop = PollLoop::new(
        api.clone(),
        Notifier::new(messenger.clone()),
        Arc::new(FixedTimeProvider(START)),
        PollSettings {
            retry_interval: Duration::from_millis(1),
            retry_jitter: Duration::ZERO,
        },
    );
    (poll_loop, api, messenger)
}

/// Scenario A: approved homework is reported and the cursor moves
#[tokio::test]
async fn test_scenario_a_status_change() {
    let (mut poll_loop, api, messenger) = poll_loop(vec![Ok(json!({
        "homeworks": [{"homework_name": "hw1", "status": "approved"}],
        "current_date": 1000
    }))]);

    let outcome = poll_loop.run_cycle().await;

    assert_eq!(outcome, CycleOutcome::StatusChanged(Dispatch::Delivered));
    assert_eq!(
        messenger.delivered(),
        vec![
            "Изменился статус проверки работы \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!"
                .to_string()
        ]
    );
    assert_eq!(poll_loop.cursor(), 1000);

    // Next request starts from the server-reported date
    poll_loop.run_cycle().await;
    assert_eq!(api.requested_cursors(), vec![START, 1000]);
}

/// Scenario B: empty homework list sends nothing
#[tokio::test]
async fn test_scenario_b_no_pending_work() {
    let (mut poll_loop, _, messenger) = poll_loop(vec![Ok(json!({"homeworks": []}))]);

    let outcome = poll_loop.run_cycle().await;

    assert_eq!(outcome, CycleOutcome::NoChange);
    assert!(messenger.delivered().is_empty());
    assert_eq!(messenger.attempts(), 0);
    assert_eq!(poll_loop.cursor(), START);
}

/// Scenario C: transport failure becomes a failure notice, loop keeps going
#[tokio::test]
async fn test_scenario_c_transport_failure() {
    let (mut poll_loop, _, messenger) = poll_loop(vec![
        Err(FetchError::Transport("connection refused".to_string())),
        Ok(json!({
            "homeworks": [{"homework_name": "hw1", "status": "reviewing"}],
            "current_date": 2000
        })),
    ]);

    let outcome = poll_loop.run_cycle().await;
    assert_eq!(outcome, CycleOutcome::Fault(Dispatch::Delivered));

    let delivered = messenger.delivered();
    assert_eq!(delivered.len(), 1);
    assert!(delivered[0].starts_with("Сбой в работе программы: "));
    assert!(delivered[0].contains("connection refused"));
    assert_eq!(poll_loop.cursor(), START);

    // Recovery on the next cycle
    let outcome = poll_loop.run_cycle().await;
    assert_eq!(outcome, CycleOutcome::StatusChanged(Dispatch::Delivered));
    assert_eq!(poll_loop.cursor(), 2000);
}

/// Scenario D: bare list body is a shape error reported through the fault path
#[tokio::test]
async fn test_scenario_d_non_object_body() {
    let (mut poll_loop, _, messenger) =
        poll_loop(vec![Ok(json!([{"homework_name": "hw1", "status": "approved"}]))]);

    let outcome = poll_loop.run_cycle().await;

    assert_eq!(outcome, CycleOutcome::Fault(Dispatch::Delivered));
    let delivered = messenger.delivered();
    assert_eq!(delivered.len(), 1);
    assert!(delivered[0].contains("Unexpected response shape"));
}

#[tokio::test]
async fn test_missing_homeworks_key_is_fault() {
    let (mut poll_loop, _, messenger) = poll_loop(vec![Ok(json!({"current_date": 5}))]);

    assert_eq!(
        poll_loop.run_cycle().await,
        CycleOutcome::Fault(Dispatch::Delivered)
    );
    assert!(messenger.delivered()[0].contains("no 'homeworks' key"));
    assert_eq!(poll_loop.cursor(), START);
}

#[tokio::test]
async fn test_remote_status_error_is_fault() {
    let (mut poll_loop, _, messenger) =
        poll_loop(vec![Err(FetchError::RemoteStatus { status: 401 })]);

    assert_eq!(
        poll_loop.run_cycle().await,
        CycleOutcome::Fault(Dispatch::Delivered)
    );
    assert_eq!(
        messenger.delivered(),
        vec!["Сбой в работе программы: Review API answered with HTTP 401.".to_string()]
    );
}

/// A record re-reported under a newer date is a new change
#[tokio::test]
async fn test_repeated_status_after_resubmission_notified() {
    let (mut poll_loop, api, messenger) = poll_loop(vec![]);
    let record = json!({"homework_name": "hw1", "status": "rejected"});

    api.push(Ok(json!({"homeworks": [record.clone()], "current_date": 900})));
    api.push(Ok(json!({"homeworks": [record], "current_date": 1500})));

    poll_loop.run_cycle().await;
    let outcome = poll_loop.run_cycle().await;

    assert_eq!(outcome, CycleOutcome::StatusChanged(Dispatch::Delivered));
    let delivered = messenger.delivered();
    assert_eq!(delivered.len(), 2);
    assert_eq!(delivered[0], delivered[1]);
    assert_eq!(api.requested_cursors(), vec![START, 900]);
    assert_eq!(poll_loop.cursor(), 1500);
}

#[tokio::test]
async fn test_status_progression_each_notified() {
    let (mut poll_loop, _, messenger) = poll_loop(vec![
        Ok(json!({
            "homeworks": [{"homework_name": "final", "status": "reviewing"}],
            "current_date": 200
        })),
        Ok(json!({"homeworks": [], "current_date": 300})),
        Ok(json!({
            "homeworks": [{"homework_name": "final", "status": "rejected"}],
            "current_date": 400
        })),
        Ok(json!({
            "homeworks": [{"homework_name": "final", "status": "approved"}],
            "current_date": 500
        })),
    ]);

    for _ in 0..4 {
        poll_loop.run_cycle().await;
    }

    let delivered = messenger.delivered();
    assert_eq!(delivered.len(), 3);
    assert!(delivered[0].ends_with("Работа взята на проверку ревьюером."));
    assert!(delivered[1].ends_with("Работа проверена: у ревьюера есть замечания."));
    assert!(delivered[2].ends_with("Работа проверена: ревьюеру всё понравилось. Ура!"));
    assert_eq!(poll_loop.cursor(), 500);
}
