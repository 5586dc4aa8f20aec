use std::io;
use crate::Error;

#[test]
fn test_error_display() {
    let err = Error::Argument("bad argument".into());
    assert_eq!(err.to_string(), "bad argument");

    let err = Error::from(io::Error::new(io::ErrorKind::NotFound, "missing"));
    assert_eq!(matches!(err, Error::Io(_)), true);
    assert_eq!(err.to_string(), "IO error: missing");

    let err = Error::from(serde_json::from_str::<Vec<u8>>("[").unwrap_err());
    assert_eq!(matches!(err, Error::Argument(_)), true);

    let err = Error::from(url::Url::parse("no scheme").unwrap_err());
    assert_eq!(matches!(err, Error::Argument(_)), true);
}
