use std::cell::Cell;

use ml_result::{ErrorDetails, MlError, MlResult, VALUE_KEY};

fn failed() -> MlResult<i32> {
    MlResult::fail(MlError::new("boom"))
}

#[test]
fn add_error_detail_if_fail_is_identity_on_valid() {
    let result = MlResult::valid(8).add_error_detail_if_fail("port", 0_u32);
    assert_eq!(result, MlResult::valid(8));
}

#[test]
fn add_error_detail_if_fail_attaches_on_fail() {
    let details = failed().add_error_detail_if_fail("port", 99_u32).secure_fail_errors_details();

    assert_eq!(details.len(), 1);
    assert_eq!(details.detail_ref::<u32>("port"), Some(&99));
}

#[test]
fn add_value_detail_if_fail_uses_the_value_key() {
    let details = failed().add_value_detail_if_fail("raw").secure_fail_errors_details();
    assert_eq!(details.detail_ref::<&str>(VALUE_KEY), Some(&"raw"));

    assert_eq!(MlResult::valid(1).add_value_detail_if_fail("raw"), MlResult::valid(1));
}

#[test]
fn details_accumulate_and_later_keys_win() {
    let details = failed()
        .add_error_detail_if_fail("step", "parse")
        .add_error_detail_if_fail("attempt", 1_u8)
        .add_error_detail_if_fail("step", "validate")
        .secure_fail_errors_details();

    assert_eq!(details.details().len(), 2);
    assert_eq!(details.detail_ref::<&str>("step"), Some(&"validate"));
}

#[test]
fn complete_with_data_value_if_valid_transforms_valid() {
    let result = MlResult::valid(21).complete_with_data_value_if_valid(|x| x.to_string() + "!");
    assert_eq!(result, MlResult::valid("21!".to_string()));
}

#[test]
fn complete_with_data_value_if_valid_never_calls_transform_on_fail() {
    let calls = Cell::new(0);
    let result: MlResult<String> = failed()
        .add_error_detail_if_fail("k", 1)
        .complete_with_data_value_if_valid(|x| {
            calls.set(calls.get() + 1);
            x.to_string()
        });

    assert_eq!(calls.get(), 0);
    let details = result.secure_fail_errors_details();
    assert_eq!(details.first_error(), &MlError::new("boom"));
    assert!(details.contains_detail("k"));
}

#[test]
fn complete_with_details_value_if_fail_records_value() {
    let details = failed().complete_with_details_value_if_fail(5_u8).secure_fail_errors_details();
    assert_eq!(details.get_detail_value::<u8>(), MlResult::valid(5));

    assert_eq!(MlResult::valid(1).complete_with_details_value_if_fail(5_u8), MlResult::valid(1));
}

#[test]
fn complete_with_data_value_covers_both_branches() {
    let valid = MlResult::valid(2).complete_with_data_value("input", |x| x * 3);
    assert_eq!(valid, MlResult::valid(6));

    let calls = Cell::new(0);
    let fail = failed().complete_with_data_value("input", |x| {
        calls.set(calls.get() + 1);
        x * 3
    });
    assert_eq!(calls.get(), 0);
    assert_eq!(
        fail.secure_fail_errors_details().get_detail_value::<&str>(),
        MlResult::valid("input")
    );
}

#[test]
fn add_error_if_fail_appends() {
    let details = failed().add_error_if_fail("while saving").secure_fail_errors_details();
    let messages: Vec<_> = details.errors().iter().map(ToString::to_string).collect();

    assert_eq!(messages, ["boom", "while saving"]);
    assert_eq!(MlResult::valid(1).add_error_if_fail("ignored"), MlResult::valid(1));
}

#[test]
fn merge_errors_if_fail_merges_other_container() {
    let other = ErrorDetails::new(MlError::new("other")).add_detail("k", 2);
    let details = failed().merge_errors_if_fail(&other).secure_fail_errors_details();

    assert_eq!(details.len(), 2);
    assert_eq!(details.errors()[1], MlError::new("other"));
    assert_eq!(details.detail_ref::<i32>("k"), Some(&2));
    assert_eq!(MlResult::valid(1).merge_errors_if_fail(&other), MlResult::valid(1));
}

#[test]
fn and_then_chains_and_short_circuits() {
    let ok = MlResult::valid(4).and_then(|x| MlResult::valid(x + 1));
    assert_eq!(ok, MlResult::valid(5));

    let calls = Cell::new(0);
    let skipped = failed().and_then(|x| {
        calls.set(calls.get() + 1);
        MlResult::valid(x)
    });
    assert!(skipped.is_fail());
    assert_eq!(calls.get(), 0);
}

#[test]
fn or_else_recovers_failures_only() {
    assert_eq!(failed().or_else(|d| MlResult::valid(d.len() as i32)), MlResult::valid(1));
    assert_eq!(MlResult::valid(7).or_else(|_| MlResult::valid(0)), MlResult::valid(7));
}
