use ml_result::MlError;
use std::error::Error as _;

#[test]
fn message_errors_render_their_message() {
    let err = MlError::new("bad input");

    assert_eq!(err.to_string(), "bad input");
    assert_eq!(err.message(), "bad input");
    assert!(err.has_message());
    assert!(err.payload().is_none());
    assert!(err.source().is_none());
}

#[test]
fn captured_errors_render_the_source_description() {
    let source = "x".parse::<i32>().unwrap_err();
    let expected = source.to_string();
    let err = MlError::from_source(source);

    assert!(!err.has_message());
    assert_eq!(err.to_string(), expected);
    assert!(err.downcast_ref::<std::num::ParseIntError>().is_some());
    assert!(err.downcast_ref::<std::io::Error>().is_none());
}

#[test]
fn with_source_keeps_both_message_and_payload() {
    let err = MlError::with_source("config unreadable", std::io::Error::other("disk full"));

    assert_eq!(err.to_string(), "config unreadable");
    assert_eq!(err.payload().map(|p| p.to_string()), Some("disk full".to_string()));
    assert_eq!(err.source().map(|s| s.to_string()), Some("disk full".to_string()));
}

#[test]
fn equality_follows_rendered_content() {
    assert_eq!(MlError::new("a"), MlError::new("a"));
    assert_ne!(MlError::new("a"), MlError::new("b"));
    assert_eq!(
        MlError::from_source(std::io::Error::other("x")),
        MlError::from_source(std::io::Error::other("x"))
    );
    assert_eq!(MlError::new("x"), MlError::from_source(std::io::Error::other("x")));
    assert_ne!(MlError::new("y"), MlError::from_source(std::io::Error::other("x")));
}

#[test]
fn string_conversions_build_message_errors() {
    let from_static: MlError = "static".into();
    let from_owned: MlError = format!("owned {}", 1).into();

    assert_eq!(from_static.to_string(), "static");
    assert_eq!(from_owned.to_string(), "owned 1");
}

#[test]
fn debug_output_names_the_parts() {
    let rendered = format!("{:?}", MlError::with_source("outer", std::io::Error::other("inner")));

    assert!(rendered.starts_with("MlError"));
    assert!(rendered.contains("outer"));
    assert!(rendered.contains("payload"));
}

#[cfg(feature = "serde")]
mod serde_tests {
    use ml_result::MlError;

    #[test]
    fn serializes_message_and_payload_description() {
        let err = MlError::with_source("outer", std::io::Error::other("inner"));
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["message"], "outer");
        assert_eq!(json["payload"], "inner");
    }

    #[test]
    fn deserializes_into_a_message_error() {
        let err: MlError = serde_json::from_str(r#"{"message":"restored","payload":null}"#).unwrap();

        assert_eq!(err, MlError::new("restored"));
        assert!(err.payload().is_none());
    }
}
