use std::borrow::Cow;

use reason_rail::{Error, IntoErrorReason, IntoSuccessReason, Success};

#[test]
fn strings_become_message_only_errors() {
    assert_eq!("boom".into_error_reason(), Error::new("boom"));
    assert_eq!(String::from("boom").into_error_reason(), Error::new("boom"));
    assert_eq!(
        Cow::<'static, str>::Borrowed("boom").into_error_reason(),
        Error::new("boom")
    );
}

#[test]
fn an_error_converts_to_itself() {
    let error = Error::new("boom").with_code("E_B");
    assert_eq!(error.clone().into_error_reason(), error);
}

#[test]
fn strings_become_message_only_successes() {
    assert_eq!("done".into_success_reason(), Success::new("done"));
    assert_eq!(String::from("done").into_success_reason(), Success::new("done"));
}

#[test]
fn a_success_converts_to_itself() {
    let success = Success::new("done").with_metadata("ms", 12);
    assert_eq!(success.clone().into_success_reason(), success);
}
