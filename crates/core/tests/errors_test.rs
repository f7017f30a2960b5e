use std::error::Error;

use meetsync_core::errors::{MeetError, MeetResult};

#[test]
fn test_meet_error_display() {
    let not_found = MeetError::NotFound("Competition not found".to_string());
    let validation = MeetError::Validation("Invalid input".to_string());
    let load = MeetError::Load(eyre::eyre!("connection refused"));
    let internal = MeetError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    assert_eq!(
        not_found.to_string(),
        "Resource not found: Competition not found"
    );
    assert_eq!(validation.to_string(), "Validation error: Invalid input");
    assert!(load.to_string().contains("Failed to load schedule:"));
    assert!(internal.to_string().contains("Internal error:"));
}

#[test]
fn test_load_error_from_eyre() {
    let report = eyre::eyre!("backend unreachable");
    let error: MeetError = report.into();

    assert!(matches!(error, MeetError::Load(_)));
    assert!(error.to_string().contains("backend unreachable"));
}

#[test]
fn test_meet_result() {
    let result: MeetResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: MeetResult<i32> = Err(MeetError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_box_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let error = MeetError::Internal(Box::new(io_error));

    assert!(error.source().is_some());
}
