//! End-to-end scenarios for generators driven through pipelines.

use super::test_utils::{fibonacci, naturals};
use lazyseq::{source, Generator, Sequence};

#[test]
fn test_fibonacci_take_ten() {
    let mut fib = fibonacci();
    assert_eq!(
        fib.take_n(10).unwrap(),
        vec![1, 1, 2, 3, 5, 8, 13, 21, 34, 55]
    );
}

#[test]
fn test_filtered_counter() {
    let mut evens = naturals().select(|x| x % 2 == 0).take(4);
    assert_eq!(evens.to_vec().unwrap(), vec![0, 2, 4, 6]);
}

#[test]
fn test_next_by_next() {
    let mut n = naturals();
    assert_eq!(n.next_value().value(), Some(0));
    assert_eq!(n.next_value().value(), Some(1));
    assert_eq!(n.next_value().value(), Some(2));
    n.rewind();
    assert_eq!(n.next_value().value(), Some(0));
}

#[test]
fn test_finite_procedure_then_drop_map_first() {
    let each: Generator<&'static str> = Generator::new(|y| {
        y.emit("x");
        y.emit("y");
        y.emit("z");
        Ok(())
    });
    let mut pipeline = each.skip(2).map(|s| s.to_uppercase());
    assert_eq!(pipeline.first().unwrap().as_deref(), Some("Z"));
}

#[test]
fn test_emit_all_and_each_with_index() {
    let countries: Generator<String> = Generator::new(|y| {
        y.emit_all(
            ["India", "Canada", "America", "Iraq"]
                .iter()
                .map(|c| c.to_string()),
        );
        Ok(())
    });

    let mut even_positions = countries
        .each_with_index()
        .select(|(_, index)| index % 2 == 0)
        .map(|(value, index)| format!("Value is {} and the index is {}", value, index));

    assert_eq!(
        even_positions.to_vec().unwrap(),
        vec![
            "Value is India and the index is 0",
            "Value is America and the index is 2"
        ]
    );
}

#[test]
fn test_inject_sum_of_finite_generator() {
    let mut numbers: Generator<i64> = Generator::new(|y| {
        y.emit_all(1..=5);
        Ok(())
    });
    assert_eq!(numbers.inject(0, |sum, x| sum + x).unwrap(), 15);
}

#[test]
fn test_reduce_without_seed_uses_first_value() {
    let mut numbers: Generator<i64> = Generator::new(|y| {
        y.emit_all(vec![4, 9, 2]);
        Ok(())
    });
    assert_eq!(numbers.reduce(|a, b| a.max(b)).unwrap(), 9);
}

#[test]
fn test_select_integers_from_mixed_collection() {
    #[derive(Debug, Clone, PartialEq)]
    enum Mixed {
        Int(i64),
        Text(&'static str),
    }

    let mut integers = source::iter(vec![
        Mixed::Int(1),
        Mixed::Text("India"),
        Mixed::Int(2),
        Mixed::Text("Canada"),
        Mixed::Text("America"),
        Mixed::Int(4),
    ])
    .select(|v| matches!(v, Mixed::Int(_)));

    assert_eq!(
        integers.to_vec().unwrap(),
        vec![Mixed::Int(1), Mixed::Int(2), Mixed::Int(4)]
    );
}

#[test]
fn test_iterator_bridge_over_generator() {
    let squares: Vec<u64> = naturals()
        .map(|x| x * x)
        .take(5)
        .iter()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(squares, vec![0, 1, 4, 9, 16]);
}
