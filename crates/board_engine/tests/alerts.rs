mod common;

use std::sync::Arc;
use std::time::Duration;

use board_core::Severity;
use board_engine::{AlertPresenter, Element, MemoryDocument};
use common::{as_document, full_page, init_logging, ALERTS};

fn presenter(doc: &Arc<MemoryDocument>) -> AlertPresenter {
    AlertPresenter::new(as_document(doc), ALERTS, "body", Duration::from_millis(5_000))
}

#[tokio::test(start_paused = true)]
async fn alert_expires_after_five_seconds() {
    init_logging();
    let doc = full_page();
    let alerts = presenter(&doc);

    let id = alerts.success("Готово");
    assert_eq!(doc.alerts_in(ALERTS).len(), 1);

    tokio::time::sleep(Duration::from_millis(4_999)).await;
    assert!(doc.alerts().iter().any(|alert| alert.id == id));

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert!(doc.alerts().is_empty());
}

#[tokio::test(start_paused = true)]
async fn dismissed_alert_is_gone_immediately() {
    init_logging();
    let doc = full_page();
    let alerts = presenter(&doc);

    let id = alerts.danger("Ошибка");
    tokio::time::sleep(Duration::from_millis(1_000)).await;
    assert!(alerts.dismiss(id));
    assert!(doc.alerts().is_empty());

    // The pending expiry later finds nothing to remove.
    tokio::time::sleep(Duration::from_millis(5_000)).await;
    assert!(!alerts.dismiss(id));
}

#[tokio::test(start_paused = true)]
async fn identical_alerts_are_not_deduplicated() {
    init_logging();
    let doc = full_page();
    let alerts = presenter(&doc);

    let first = alerts.success("Сохранено");
    let second = alerts.success("Сохранено");
    assert_ne!(first, second);
    assert_eq!(doc.alerts().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn missing_container_falls_back_to_body() {
    init_logging();
    let doc = Arc::new(MemoryDocument::new().with_element("body", Element::new("")));
    let alerts = presenter(&doc);

    alerts.show(Severity::Other("info".to_string()), "Привет");
    let in_body = doc.alerts_in("body");
    assert_eq!(in_body.len(), 1);
    assert_eq!(
        in_body[0].class_name(),
        "alert alert-info alert-dismissible fade show"
    );
    assert!(doc.alerts_in(ALERTS).is_empty());
}
