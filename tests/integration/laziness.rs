//! Demand-driven evaluation: nothing runs ahead of the consumer.

use super::test_utils::{naturals, Recorder};
use lazyseq::{Generator, GeneratorState, Sequence};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[test]
fn test_map_runs_only_for_taken_values() {
    let mut calls = 0;
    let mut generator = naturals();

    let mut pipeline = generator
        .by_ref()
        .map(|x| {
            calls += 1;
            x * 10
        })
        .take(3);
    assert_eq!(pipeline.to_vec().unwrap(), vec![0, 10, 20]);
    drop(pipeline);

    assert_eq!(calls, 3);
    assert_eq!(generator.emitted(), 3);
}

#[test]
fn test_take_zero_never_starts_producer() {
    let started = Arc::new(AtomicBool::new(false));
    let flag = started.clone();
    let generator: Generator<u32> = Generator::new(move |y| {
        flag.store(true, Ordering::SeqCst);
        loop {
            y.emit(1);
        }
    });

    let mut nothing = generator.take(0);
    assert!(nothing.next_value().is_end());
    assert!(nothing.next_value().is_end());
    assert!(!started.load(Ordering::SeqCst));
}

#[test]
fn test_producer_side_effects_track_pulls() {
    let log = Recorder::new();
    let producer_log = log.clone();
    let mut generator: Generator<u32> = Generator::new(move |y| {
        for i in 0.. {
            producer_log.record(format!("before {}", i));
            y.emit(i);
            producer_log.record(format!("after {}", i));
        }
        Ok(())
    });

    assert_eq!(generator.state(), GeneratorState::NotStarted);
    assert_eq!(log.len(), 0);

    generator.next_value();
    assert_eq!(log.events(), vec!["before 0"]);

    generator.next_value();
    assert_eq!(log.events(), vec!["before 0", "after 0", "before 1"]);
}

#[test]
fn test_take_after_map_matches_map_after_take() {
    let mut map_then_take = naturals().map(|x| x + 1).take(5);
    let mut take_then_map = naturals().take(5).map(|x| x + 1);
    assert_eq!(
        map_then_take.to_vec().unwrap(),
        take_then_map.to_vec().unwrap()
    );
}

#[test]
fn test_select_does_not_pull_past_match() {
    let mut generator = naturals();
    let mut multiples_of_seven = generator.by_ref().select(|x| x % 7 == 0 && *x > 0);
    assert_eq!(multiples_of_seven.next_value().value(), Some(7));
    drop(multiples_of_seven);
    assert_eq!(generator.emitted(), 8);
}
