//! Tests for the process-wide default logger
//!
//! All tests here touch shared state and run serially.

use httpmock::prelude::*;
use serde_json::json;
use serial_test::serial;
use std::io::Read;
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use webhook_logger::global;
use webhook_logger::prelude::*;

fn install_memory_default(writer: DestinationSet) -> MemoryTransport {
    let transport = MemoryTransport::new();
    global::set_default(
        Logger::builder()
            .destinations(writer)
            .transport(transport.clone())
            .build()
            .expect("Failed to build logger"),
    );
    transport
}

#[test]
#[serial]
fn test_unconfigured_default_reports_error() {
    global::set_default(Logger::default());

    global::info("nowhere");

    assert!(matches!(global::err(), Some(LoggerError::Transport { .. })));
}

#[test]
#[serial]
fn test_free_functions_post_through_default() {
    let server = MockServer::start();
    let hook = server.mock(|when, then| {
        when.method(POST)
            .path("/webhook")
            .json_body(json!({"text": "INFO: hello"}));
        then.status(200);
    });

    global::set_default(Logger::new(server.url("/webhook")));
    global::info("hello");

    hook.assert();
    assert!(global::err().is_none());
}

#[test]
#[serial]
fn test_free_function_shapes() {
    let transport = install_memory_default(
        DestinationSet::new("https://example/webhook").with_log("https://example/log"),
    );

    global::errorf(format_args!("code={}", 42));
    global::warningln(&[&"a", &"b"]);
    global::debug("d");
    global::trace("t");
    global::print(&[&"p", &1]);
    global::printf(format_args!("{}", "pf"));
    global::println(&[&"pl"]);

    assert_eq!(
        transport.sent_to("https://example/webhook"),
        vec!["ERRO: code=42", "WARN: a b\n", "DEBG: d", "TRCE: t"]
    );
    assert_eq!(
        transport.sent_to("https://example/log"),
        vec!["INFO: p1", "INFO: pf", "INFO: pl\n"]
    );
}

#[test]
#[serial]
fn test_macros_without_logger_use_default() {
    let transport = install_memory_default(DestinationSet::new("https://example/webhook"));

    webhook_logger::warning!("queue depth {}", 812);
    webhook_logger::info!("started");

    assert_eq!(transport.texts(), vec!["WARN: queue depth 812", "INFO: started"]);
}

#[test]
#[serial]
fn test_global_prefix() {
    let transport = install_memory_default(DestinationSet::new("https://example/webhook"));

    global::set_prefix("[worker] ");
    assert_eq!(global::prefix(), "[worker] ");

    global::info("one");
    global::info("two");
    assert_eq!(transport.texts(), vec!["[worker] INFO: one", "[worker] INFO: two"]);

    // Latest configuration wins
    global::set_prefix("");
    global::info("three");
    assert_eq!(transport.texts()[2], "INFO: three");
}

#[test]
#[serial]
fn test_set_default_latest_wins() {
    let first = install_memory_default(DestinationSet::new("https://example/first"));
    global::info("a");

    let second = install_memory_default(DestinationSet::new("https://example/second"));
    global::info("b");

    assert_eq!(first.texts(), vec!["INFO: a"]);
    assert_eq!(second.texts(), vec!["INFO: b"]);
}

#[test]
#[serial]
fn test_with_level_leaves_default_unchanged() {
    let transport = install_memory_default(DestinationSet::new("https://example/webhook"));

    let quiet = global::with_level(LogLevel::Error);
    quiet.info("hidden");
    assert!(transport.is_empty());

    assert_eq!(global::default_logger().level(), LogLevel::Trace);
    global::info("shown");
    assert_eq!(transport.texts(), vec!["INFO: shown"]);
}

#[test]
#[serial]
fn test_with_writer_leaves_default_unchanged() {
    let transport = install_memory_default(DestinationSet::new("https://example/webhook"));

    let routed = global::with_writer(DestinationSet::new("https://example/other"));
    routed.info("elsewhere");

    assert_eq!(transport.sent_to("https://example/other"), vec!["INFO: elsewhere"]);
    assert_eq!(global::default_logger().writer().info, "https://example/webhook");
}

#[test]
#[serial]
fn test_flags_are_stored() {
    global::set_flags(3);
    assert_eq!(global::flags(), 3);
    global::set_flags(0);
    assert_eq!(global::flags(), 0);
}

#[test]
#[serial]
fn test_global_panic_sends_then_panics() {
    let transport = install_memory_default(DestinationSet::new("https://example/webhook"));

    let result = std::panic::catch_unwind(|| {
        global::panicf(format_args!("invariant broken: {}", 3));
    });

    let payload = result.unwrap_err();
    assert_eq!(
        payload.downcast_ref::<String>().map(String::as_str),
        Some("invariant broken: 3")
    );
    assert_eq!(transport.texts(), vec!["ERRO: invariant broken: 3"]);

    // The default logger is still usable afterwards
    global::info("after");
    assert_eq!(transport.len(), 2);
}

#[test]
#[serial]
fn test_global_panic_records_failure() {
    global::set_default(
        Logger::builder()
            .url("https://example/webhook")
            .transport(MemoryTransport::failing())
            .build()
            .expect("Failed to build logger"),
    );

    let result = std::panic::catch_unwind(|| {
        global::panicf(format_args!("lost {}", "quorum"));
    });

    assert!(result.is_err());
    assert!(matches!(global::err(), Some(LoggerError::WriterError(_))));
}

#[test]
#[serial]
fn test_reconfigure_while_send_is_stalled() {
    // Accepts the connection but never answers
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let url = format!("http://{}/hook", listener.local_addr().expect("No local addr"));
    global::set_default(Logger::new(url));

    let sender = thread::spawn(|| global::info("hangs"));
    let (mut stream, _) = listener.accept().expect("Failed to accept");

    let (done, finished) = mpsc::channel();
    thread::spawn(move || {
        global::set_prefix("[x] ");
        let prefix = global::prefix();
        let transport = install_memory_default(DestinationSet::new("https://example/webhook"));
        global::info("fresh");
        let _ = done.send((prefix, transport.texts()));
    });

    let (prefix, texts) = finished
        .recv_timeout(Duration::from_secs(5))
        .expect("Reconfiguration blocked behind an in-flight send");
    assert_eq!(prefix, "[x] ");
    assert_eq!(texts, vec!["INFO: fresh"]);

    // Let the stalled post fail; its error stays with the replaced logger
    let mut request = [0u8; 1024];
    let _ = stream.read(&mut request);
    drop(stream);
    drop(listener);
    sender.join().expect("Sending thread panicked");
    assert!(global::err().is_none());
}
