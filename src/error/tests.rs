//! Tests for wordhop error handling

use super::*;

#[test]
fn test_error_kind_display() {
    assert_eq!(format!("{}", ErrorKind::OutOfRange), "OutOfRange");
    assert_eq!(format!("{}", ErrorKind::NoOracleConfigured), "NoOracleConfigured");
    assert_eq!(
        format!("{}", ErrorKind::SegmentationUnavailable),
        "SegmentationUnavailable"
    );
}

#[test]
fn test_nav_error_constructors() {
    let err = NavError::out_of_range("line 9 outside document of 3 lines");
    assert_eq!(err.kind, ErrorKind::OutOfRange);
    assert_eq!(err.message, "line 9 outside document of 3 lines");

    let err = NavError::no_oracle();
    assert_eq!(err.kind, ErrorKind::NoOracleConfigured);

    let err = NavError::segmentation("oracle panicked");
    assert_eq!(err.kind, ErrorKind::SegmentationUnavailable);
    assert_eq!(err.message, "oracle panicked");
}

#[test]
fn test_recoverable_split() {
    // Segmentation failures degrade navigation; bad positions fail loudly
    assert!(NavError::no_oracle().is_recoverable());
    assert!(NavError::segmentation("boom").is_recoverable());
    assert!(!NavError::out_of_range("bad position").is_recoverable());
}

#[test]
fn test_nav_error_display() {
    let err = NavError::out_of_range("column 7 beyond line 0 of length 3");
    assert_eq!(
        format!("{}", err),
        "OutOfRange: column 7 beyond line 0 of length 3"
    );
}

#[test]
fn test_error_trait_object() {
    let err = NavError::no_oracle();
    let std_err: &dyn std::error::Error = &err;
    assert_eq!(
        format!("{}", std_err),
        "NoOracleConfigured: no segmentation oracle configured"
    );
}

#[test]
fn test_result_alias() {
    fn produce_error() -> Result<()> {
        Err(NavError::segmentation("stub failed"))
    }

    let res = produce_error();
    assert!(res.is_err());
    assert_eq!(res.unwrap_err().kind, ErrorKind::SegmentationUnavailable);
}
