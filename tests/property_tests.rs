//! Property-based tests for log_manager using proptest

use log_manager::prelude::*;
use parking_lot::Mutex;
use proptest::prelude::*;
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Trace2),
        Just(LogLevel::Trace1),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warning),
        Just(LogLevel::Error),
        Just(LogLevel::None),
    ]
}

fn message_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Trace2),
        Just(LogLevel::Trace1),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warning),
        Just(LogLevel::Error),
    ]
}

type Shared = Arc<Mutex<Vec<(LogLevel, String)>>>;

fn recording_writer(seen: &Shared) -> Arc<dyn LogWriter> {
    let seen = Arc::clone(seen);
    Arc::new(move |level: LogLevel, text: &str| {
        seen.lock().push((level, text.to_string()));
    })
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Canonical names round-trip through parse and display
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let name = level.to_string();
        let parsed: LogLevel = name.parse().unwrap();
        prop_assert_eq!(parsed, level);
        prop_assert_eq!(parsed.to_str(), name.as_str());
    }

    /// Ordering follows the numeric rank
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        prop_assert_eq!(level1 < level2, level1.rank() < level2.rank());
        prop_assert_eq!(level1 >= level2, level1.rank() >= level2.rank());
        prop_assert_eq!(level1.admits(level2), level1.rank() >= level2.rank());
    }

    /// Any rank renders to a canonical name, clamping past NONE
    #[test]
    fn test_from_rank_never_panics(rank in any::<u8>()) {
        let level = LogLevel::from_rank(rank);
        if rank >= LogLevel::None.rank() {
            prop_assert_eq!(level, LogLevel::None);
        } else {
            prop_assert_eq!(level.rank(), rank);
        }
    }

    /// Unrecognized names fail with UnknownLevel
    #[test]
    fn test_unknown_names_rejected(name in "[A-Za-z0-9]{0,10}") {
        let known = LogLevel::ALL.iter().any(|level| level.to_str() == name);
        match name.parse::<LogLevel>() {
            Ok(level) => prop_assert!(known && level.to_str() == name),
            Err(LogManagerError::UnknownLevel { name: reported }) => {
                prop_assert!(!known);
                prop_assert_eq!(reported, name);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}

// ============================================================================
// Manager Delivery Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Exactly the messages at or above the threshold are delivered, in order
    #[test]
    fn test_threshold_filtering(
        threshold in any_level(),
        levels in prop::collection::vec(message_level(), 0..40),
    ) {
        let manager = LogManager::builder().level(threshold).build().unwrap();
        let seen: Shared = Arc::default();
        manager.add_writer(recording_writer(&seen));

        for (i, level) in levels.iter().enumerate() {
            manager.log(*level, format!("{}", i));
        }
        manager.sync();

        let expected: Vec<(LogLevel, String)> = levels
            .iter()
            .enumerate()
            .filter(|(_, level)| **level >= threshold)
            .map(|(i, level)| (*level, format!("{}", i)))
            .collect();
        prop_assert_eq!(&*seen.lock(), &expected);
    }

    /// Every writer sees every accepted entry exactly once, in the same order
    #[test]
    fn test_fan_out_completeness(
        writer_count in 1usize..5,
        capacity in 1usize..8,
        count in 0usize..60,
    ) {
        let manager = LogManager::builder()
            .queue_capacity(capacity)
            .build()
            .unwrap();
        let sinks: Vec<Shared> = (0..writer_count).map(|_| Arc::default()).collect();
        for sink in &sinks {
            manager.add_writer(recording_writer(sink));
        }

        for i in 0..count {
            manager.info(format!("entry {}", i));
        }
        manager.sync();

        let expected: Vec<(LogLevel, String)> =
            (0..count).map(|i| (LogLevel::Info, format!("entry {}", i))).collect();
        for sink in &sinks {
            prop_assert_eq!(&*sink.lock(), &expected);
        }
        prop_assert_eq!(manager.in_flight(), 0);
    }
}
