//! Composition of producers and combinators

use lazyseq::reduce::{count_eq, prod, sum, unique};
use lazyseq::*;
use num_bigint::BigInt;

mod test_helpers;
use test_helpers::*;

#[test]
fn test_factorials_from_counter() {
    let factorials: Vec<u64> = take(cumulative(prod, count_from(1u64, 1)), 6).collect();
    assert_eq!(factorials, vec![1, 2, 6, 24, 120, 720]);
}

#[test]
fn test_big_factorials_do_not_overflow() {
    let factorials: Vec<BigInt> =
        take(cumulative(prod, count_from(BigInt::from(1), BigInt::from(1))), 30).collect();
    let expected: BigInt = "265252859812191058636308480000000".parse().unwrap();
    assert_eq!(factorials[29], expected);
}

#[test]
fn test_digit_sum_of_range() {
    let digit_sums: Vec<u32> = range(95u32, 105, 5)
        .unwrap()
        .map(|n| decimal_digits(n).unwrap().sum())
        .collect();
    assert_eq!(digit_sums, vec![14, 1, 6]);
}

#[test]
fn test_zip_of_materialized_sequences() {
    let squares: Vec<i64> = range(1, 4, 1).unwrap().map(|n: i64| n * n).collect();
    let cubes: Vec<i64> = range(1, 5, 1).unwrap().map(|n: i64| n * n * n).collect();
    let rows: Vec<Vec<i64>> = zip([squares, cubes]).collect();
    assert_eq!(rows, vec![vec![1, 1], vec![4, 8], vec![9, 27], vec![16, 64]]);
}

#[test]
fn test_unique_digits_of_counter() {
    let seen: Vec<u64> = take(
        unique_lazy(count_from(10u64, 1).flat_map(|n| decimal_digits(n).unwrap())),
        10,
    )
    .collect();
    let mut sorted = seen.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..10).collect::<Vec<_>>());
    assert_eq!(&seen[..2], &[0, 1]);
}

#[test]
fn test_number_counter_kinds() {
    let big = count_from_number(Number::Big(BigInt::from(i64::MAX)), Number::Big(BigInt::from(1)))
        .unwrap();
    let values = drain_and_check_exhausted(take(big, 2));
    assert_eq!(values[1].to_big(), BigInt::from(i64::MAX) + 1);

    let fixed = count_from_number(Number::Fixed(i64::MAX), Number::Fixed(1)).unwrap();
    let values = drain_and_check_exhausted(fixed);
    assert_eq!(values, vec![Number::Fixed(i64::MAX)]);

    let mixed = count_from_number(Number::Fixed(0), Number::Big(BigInt::from(1)));
    assert_eq!(
        mixed.unwrap_err(),
        SequenceError::MixedNumericKinds {
            start: NumberKind::Fixed,
            step: NumberKind::Big,
        }
    );
}

#[test]
fn test_reduce_helpers_with_sequences() {
    let total = range(1, 100, 1).unwrap().fold(0, sum);
    assert_eq!(total, 5050);

    let evens = count_eq(range(1, 20, 1).unwrap().map(|n: i32| n % 2), &0);
    assert_eq!(evens, 10);

    assert_eq!(unique(take(count_from(0, 1).map(|n: i32| n % 3), 9)), vec![0, 1, 2]);
}
