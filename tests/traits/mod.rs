use ml_result::traits::{IntoValid, OptionExt, ResultExt};
use ml_result::{MlError, MlResult, EXCEPTION_KEY};

#[test]
fn into_valid_lifts_any_value() {
    assert_eq!(42_i32.into_valid(), MlResult::valid(42));
    assert_eq!("text".into_valid(), MlResult::valid("text"));
    assert_eq!(vec![1, 2].into_valid(), MlResult::valid(vec![1, 2]));
}

#[test]
fn into_ml_result_captures_the_error_payload() {
    let result = "nope".parse::<u16>().into_ml_result();
    let details = result.secure_fail_errors_details();

    assert!(details.first_error().payload().is_some());
    assert!(details.contains_detail(EXCEPTION_KEY));
}

#[test]
fn into_ml_result_with_uses_the_given_message() {
    let result: MlResult<u16> = Err::<u16, _>("not a number").into_ml_result_with("invalid port");
    let details = result.secure_fail_errors_details();

    assert_eq!(details.first_error(), &MlError::new("invalid port"));
    assert_eq!(details.detail_ref::<String>(EXCEPTION_KEY).map(String::as_str), Some("not a number"));
}

#[test]
fn into_ml_result_with_passes_values_through() {
    let result = Ok::<_, String>(8).into_ml_result_with("unused");
    assert_eq!(result, MlResult::valid(8));
}

#[test]
fn valid_or_fail_converts_options() {
    assert_eq!(Some(3).valid_or_fail("absent"), MlResult::valid(3));

    let missing = None::<i32>.valid_or_fail(MlError::new("absent"));
    assert_eq!(missing.secure_fail_errors_details().first_error(), &MlError::new("absent"));
}
