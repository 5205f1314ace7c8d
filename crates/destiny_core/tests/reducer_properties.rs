use destiny_core::reduce::{reduce_traced, reduce_with, sum_digits};
use destiny_core::{reduce, ReductionMode, REDUCTION_MODE};

#[test]
fn values_up_to_twenty_two_are_fixed_points() {
    for n in 1..=22_i64 {
        assert_eq!(i64::from(reduce(n).unwrap()), n);
    }
}

#[test]
fn larger_values_converge_within_three_folds() {
    for n in 23..=10_000_i64 {
        let reduction = reduce_traced(ReductionMode::Extended, n).unwrap();
        assert!(
            (1..=22).contains(&reduction.value),
            "{n} reduced to {}",
            reduction.value
        );
        assert!(
            reduction.iterations <= 3,
            "{n} needed {} folds",
            reduction.iterations
        );
        assert!(reduction.iterations >= 1);
    }
}

#[test]
fn one_fold_is_a_digit_sum() {
    for n in 23..=99_u64 {
        let once = u64::from(sum_digits(n));
        if once <= 22 {
            assert_eq!(u64::from(reduce(n as i64).unwrap()), once);
        }
    }
}

#[test]
fn classical_mode_lands_in_its_own_set() {
    for n in 1..=10_000_i64 {
        let value = reduce_with(ReductionMode::Classical, n).unwrap();
        assert!(
            ReductionMode::Classical.accepts(u64::from(value)),
            "{n} reduced to {value}"
        );
    }
}

#[test]
fn builder_mode_is_extended() {
    assert_eq!(REDUCTION_MODE, ReductionMode::Extended);
}
