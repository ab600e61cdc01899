use std::cell::Cell;

use ml_result::{details, ErrorDetails, MlError, MlResult};

#[test]
fn valid_and_fail_are_mutually_exclusive() {
    let valid = MlResult::valid(5);
    assert!(valid.is_valid());
    assert!(!valid.is_fail());

    let failed = MlResult::<i32>::fail(MlError::new("missing"));
    assert!(failed.is_fail());
    assert!(!failed.is_valid());
}

#[test]
fn match_with_runs_exactly_one_branch() {
    let valid_calls = Cell::new(0);
    let fail_calls = Cell::new(0);

    let out = MlResult::valid(2).match_with(
        |v| {
            valid_calls.set(valid_calls.get() + 1);
            v * 10
        },
        |_| {
            fail_calls.set(fail_calls.get() + 1);
            0
        },
    );
    assert_eq!(out, 20);
    assert_eq!((valid_calls.get(), fail_calls.get()), (1, 0));

    let out = MlResult::<i32>::fail(MlError::new("x")).match_with(
        |v| {
            valid_calls.set(valid_calls.get() + 1);
            v
        },
        |d| {
            fail_calls.set(fail_calls.get() + 1);
            d.len() as i32
        },
    );
    assert_eq!(out, 1);
    assert_eq!((valid_calls.get(), fail_calls.get()), (1, 1));
}

#[test]
fn match_with_can_be_used_for_side_effects() {
    let seen = Cell::new(None);
    MlResult::valid(9).match_with(|v| seen.set(Some(v)), |_| ());
    assert_eq!(seen.get(), Some(9));
}

#[test]
fn match_ref_borrows_without_consuming() {
    let result = MlResult::valid(String::from("kept"));
    let len = result.match_ref(|s| s.len(), |d| d.len());

    assert_eq!(len, 4);
    assert_eq!(result.valid_ref().map(String::as_str), Some("kept"));
}

#[test]
fn secure_valid_value_returns_the_value() {
    assert_eq!(MlResult::valid("ok").secure_valid_value(), "ok");
}

#[test]
#[should_panic(expected = "secure_valid_value called on a failed result")]
fn secure_valid_value_panics_on_fail() {
    let _ = MlResult::<i32>::fail(MlError::new("boom")).secure_valid_value();
}

#[test]
#[should_panic(expected = "secure_fail_errors_details called on a valid result")]
fn secure_fail_errors_details_panics_on_valid() {
    let _ = MlResult::valid(1).secure_fail_errors_details();
}

#[test]
#[should_panic(expected = "config must be validated: boom")]
fn expect_valid_includes_message_and_failure() {
    let _ = MlResult::<i32>::fail(MlError::new("boom")).expect_valid("config must be validated");
}

#[test]
#[should_panic(expected = "expected a failure")]
fn expect_fail_panics_with_custom_message() {
    let _ = MlResult::valid(1).expect_fail("expected a failure");
}

#[test]
fn fail_accepts_every_failure_shape() {
    let single = MlResult::<()>::fail(MlError::new("a"));
    let array = MlResult::<()>::fail([MlError::new("a"), MlError::new("b")]);
    let container = MlResult::<()>::fail(ErrorDetails::new(MlError::new("a")));
    let with_bag = MlResult::<()>::fail((MlError::new("a"), details! { "k" => 1 }));

    assert_eq!(single.secure_fail_errors_details().len(), 1);
    assert_eq!(array.secure_fail_errors_details().len(), 2);
    assert_eq!(container.secure_fail_errors_details().len(), 1);
    assert!(with_bag.secure_fail_errors_details().contains_detail("k"));
}

#[test]
fn fail_helpers_seed_errors_and_details() {
    let many = MlResult::<()>::fail_with_errors(MlError::new("a"), vec![MlError::new("b")]);
    assert_eq!(many.secure_fail_errors_details().len(), 2);

    let one = MlResult::<()>::fail_with_detail(MlError::new("timeout"), "elapsed_ms", 1500_u64);
    assert_eq!(one.secure_fail_errors_details().detail_ref::<u64>("elapsed_ms"), Some(&1500));

    let bag = MlResult::<()>::fail_with_details(
        MlError::new("bad"),
        details! { "field" => "email", "len" => 0_usize },
    );
    assert_eq!(bag.secure_fail_errors_details().details().len(), 2);
}

#[test]
fn default_is_a_valid_default_value() {
    assert_eq!(MlResult::<i32>::default(), MlResult::valid(0));
    assert_eq!(MlResult::<String>::default(), MlResult::valid(String::new()));
}

#[test]
fn option_and_result_accessors() {
    assert_eq!(MlResult::valid(3).ok(), Some(3));
    assert!(MlResult::valid(3).err().is_none());
    assert_eq!(MlResult::valid(3).into_result().ok(), Some(3));

    let failed = MlResult::<i32>::fail(MlError::new("x"));
    assert!(failed.valid_ref().is_none());
    assert_eq!(failed.fail_ref().map(ErrorDetails::len), Some(1));
    assert!(failed.clone().ok().is_none());
    assert_eq!(failed.clone().err().map(|d| d.len()), Some(1));
    assert!(failed.into_result().is_err());
}

#[test]
fn display_renders_whichever_side_is_present() {
    assert_eq!(MlResult::valid(42).to_string(), "42");
    assert_eq!(MlResult::<i32>::fail(MlError::new("nope")).to_string(), "nope");
}

#[test]
fn fail_with_error_wraps_a_single_error() {
    let result = MlResult::<()>::fail_with_error(MlError::new("only"));
    assert_eq!(result.secure_fail_errors_details(), ErrorDetails::new(MlError::new("only")));
}

#[test]
fn failures_differing_only_in_detail_values_are_unequal() {
    let timeout = |ms: u64| {
        MlResult::<()>::fail_with_detail(MlError::new("timeout"), "elapsed_ms", ms)
    };

    assert_eq!(timeout(10), timeout(10));
    assert_ne!(timeout(10), timeout(20));
}

#[cfg(feature = "serde")]
#[test]
fn serializes_as_a_tagged_variant() {
    let valid = serde_json::to_value(MlResult::valid(3)).unwrap();
    assert_eq!(valid["Valid"], 3);

    let failed = serde_json::to_value(MlResult::<i32>::fail(MlError::new("boom"))).unwrap();
    assert_eq!(failed["Fail"]["errors"][0]["message"], "boom");
}
