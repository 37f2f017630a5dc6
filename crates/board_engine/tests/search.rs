mod common;

use std::time::Duration;

use board_core::endpoints;
use board_engine::{DebouncedSearch, Document};
use common::{as_document, full_page, init_logging, settings, ScriptedTransport, RESULTS};

fn sleep_ms(ms: u64) -> tokio::time::Sleep {
    tokio::time::sleep(Duration::from_millis(ms))
}

#[tokio::test(start_paused = true)]
async fn burst_of_inputs_sends_only_the_last_query() {
    init_logging();
    let doc = full_page();
    let transport = ScriptedTransport::new();
    transport.respond(&endpoints::search("abc"), 200, "<li>abc</li>");
    let search = DebouncedSearch::new(as_document(&doc), transport.clone(), &settings());

    assert!(!search.input("a"));
    sleep_ms(100).await;
    assert!(search.input("ab"));
    sleep_ms(100).await;
    assert!(search.input("abc"));
    sleep_ms(400).await;

    assert_eq!(transport.paths(), vec![endpoints::search("abc")]);
    assert_eq!(doc.content(RESULTS).as_deref(), Some("<li>abc</li>"));
}

#[tokio::test(start_paused = true)]
async fn single_character_never_hits_the_network() {
    init_logging();
    let doc = full_page();
    let transport = ScriptedTransport::new();
    let search = DebouncedSearch::new(as_document(&doc), transport.clone(), &settings());

    assert!(!search.input("щ"));
    sleep_ms(1_000).await;

    assert!(transport.requests().is_empty());
    assert!(!search.is_pending());
}

#[tokio::test(start_paused = true)]
async fn short_input_cancels_waiting_query() {
    init_logging();
    let doc = full_page();
    let transport = ScriptedTransport::new();
    let search = DebouncedSearch::new(as_document(&doc), transport.clone(), &settings());

    search.input("меч");
    sleep_ms(200).await;
    search.input("м");
    sleep_ms(1_000).await;

    assert!(transport.requests().is_empty());
}

#[tokio::test(start_paused = true)]
async fn query_waits_for_the_quiet_interval() {
    init_logging();
    let doc = full_page();
    let transport = ScriptedTransport::new();
    transport.respond(&endpoints::search("орк"), 200, "<li>орк</li>");
    let search = DebouncedSearch::new(as_document(&doc), transport.clone(), &settings());

    search.input("орк");
    sleep_ms(299).await;
    assert!(transport.requests().is_empty());
    assert!(search.is_pending());

    sleep_ms(5).await;
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn slow_stale_reply_does_not_overwrite_newer_results() {
    init_logging();
    let doc = full_page();
    let transport = ScriptedTransport::new();
    transport.respond_after(
        &endpoints::search("ab"),
        Duration::from_millis(500),
        200,
        "<li>old</li>",
    );
    transport.respond_after(
        &endpoints::search("abc"),
        Duration::from_millis(10),
        200,
        "<li>new</li>",
    );
    let search = DebouncedSearch::new(as_document(&doc), transport.clone(), &settings());

    search.input("ab");
    // "ab" goes out at 300ms and answers at 800ms.
    sleep_ms(350).await;
    search.input("abc");
    // "abc" goes out at 650ms and answers at 660ms.
    sleep_ms(1_000).await;

    assert_eq!(transport.requests().len(), 2);
    assert_eq!(doc.content(RESULTS).as_deref(), Some("<li>new</li>"));
}

#[tokio::test(start_paused = true)]
async fn reset_after_send_does_not_cancel_the_request() {
    init_logging();
    let doc = full_page();
    let transport = ScriptedTransport::new();
    transport.respond_after(
        &endpoints::search("эльф"),
        Duration::from_millis(200),
        200,
        "<li>эльф</li>",
    );
    let search = DebouncedSearch::new(as_document(&doc), transport.clone(), &settings());

    search.input("эльф");
    sleep_ms(350).await;
    search.reset();
    sleep_ms(500).await;

    assert_eq!(doc.content(RESULTS).as_deref(), Some("<li>эльф</li>"));
}

#[tokio::test(start_paused = true)]
async fn failed_search_leaves_results_alone() {
    init_logging();
    let doc = full_page();
    doc.set_content(RESULTS, "<li>before</li>");
    let transport = ScriptedTransport::new();
    let search = DebouncedSearch::new(as_document(&doc), transport.clone(), &settings());

    search.input("гном");
    sleep_ms(400).await;

    assert_eq!(transport.requests().len(), 1);
    assert_eq!(doc.content(RESULTS).as_deref(), Some("<li>before</li>"));
    assert!(doc.alerts().is_empty());
}
