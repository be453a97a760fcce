//! Property-based tests for webhook_logger using proptest

use proptest::prelude::*;
use webhook_logger::prelude::*;

const URL: &str = "https://example/webhook";

fn level_strategy() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Error),
        Just(LogLevel::Warning),
        Just(LogLevel::Info),
        Just(LogLevel::Debug),
        Just(LogLevel::Trace),
    ]
}

fn memory_logger(writer: DestinationSet) -> (Logger, MemoryTransport) {
    let transport = MemoryTransport::new();
    let logger = Logger::builder()
        .destinations(writer)
        .transport(transport.clone())
        .build()
        .unwrap();
    (logger, transport)
}

proptest! {
    /// A message is sent iff its level is at or above the threshold's priority
    #[test]
    fn test_gate(level in level_strategy(), threshold in level_strategy()) {
        let (logger, transport) = memory_logger(DestinationSet::new(URL).with_level(threshold));

        let written = logger.send(level, "msg").unwrap();

        let expected_sent = (level as u8) <= (threshold as u8);
        prop_assert_eq!(transport.len(), usize::from(expected_sent));
        prop_assert_eq!(written, if expected_sent { 3 } else { 0 });
    }

    /// Every sent message carries exactly its level's tag
    #[test]
    fn test_tag(level in level_strategy(), msg in "[a-zA-Z0-9 ]{0,40}") {
        let (logger, transport) = memory_logger(DestinationSet::new(URL));

        logger.send(level, &msg).unwrap();

        prop_assert_eq!(transport.texts(), vec![format!("{}: {}", level.tag(), msg)]);
    }

    /// The prefix appears once per message however many messages are sent
    #[test]
    fn test_prefix_not_accumulated(
        prefix in "[a-z\\[\\] ]{0,12}",
        msg in "[a-z ]{0,20}",
        repeats in 1usize..5,
    ) {
        let (mut logger, transport) = memory_logger(DestinationSet::new(URL));
        logger.set_prefix(prefix.clone());

        for _ in 0..repeats {
            logger.info(&msg);
        }

        let expected = format!("{}INFO: {}", prefix, msg);
        prop_assert_eq!(transport.texts(), vec![expected; repeats]);
    }

    /// Messages are never routed to another level's destination
    #[test]
    fn test_routing(level in level_strategy()) {
        let writer = DestinationSet::default()
            .with_error("http://h/error")
            .with_warning("http://h/warning")
            .with_info("http://h/info")
            .with_debug("http://h/debug")
            .with_trace("http://h/trace");
        let (logger, transport) = memory_logger(writer);

        logger.send(level, "x").unwrap();

        let messages = transport.messages();
        prop_assert_eq!(messages.len(), 1);
        prop_assert_eq!(
            &messages[0].destination,
            &format!("http://h/{}", level.to_str().to_lowercase())
        );
    }

    /// Level names and tags parse back to the same level
    #[test]
    fn test_level_parse_roundtrip(level in level_strategy(), use_lower in any::<bool>()) {
        for input in [level.to_str(), level.tag()] {
            let input = if use_lower { input.to_lowercase() } else { input.to_string() };
            prop_assert_eq!(input.parse::<LogLevel>(), Ok(level));
        }
    }

    /// Println-style formatting joins with single spaces and ends with a newline
    #[test]
    fn test_println_shape(words in prop::collection::vec("[a-z]{1,8}", 0..6)) {
        let (logger, transport) = memory_logger(DestinationSet::new(URL));
        let args: Vec<&dyn std::fmt::Display> =
            words.iter().map(|w| w as &dyn std::fmt::Display).collect();

        logger.traceln(&args);

        prop_assert_eq!(transport.texts(), vec![format!("TRCE: {}\n", words.join(" "))]);
    }
}
