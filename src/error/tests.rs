//! Tests for the error taxonomy

use super::*;
use std::io;

#[test]
fn test_error_severity_display() {
    assert_eq!(format!("{}", ErrorSeverity::Info), "INFO");
    assert_eq!(format!("{}", ErrorSeverity::Warning), "WARN");
    assert_eq!(format!("{}", ErrorSeverity::Error), "ERROR");
    assert_eq!(format!("{}", ErrorSeverity::Critical), "CRITICAL");
}

#[test]
fn test_error_severity_ordering() {
    assert!(ErrorSeverity::Info < ErrorSeverity::Warning);
    assert!(ErrorSeverity::Warning < ErrorSeverity::Error);
    assert!(ErrorSeverity::Error < ErrorSeverity::Critical);
}

#[test]
fn test_boundary_messages() {
    assert_eq!(
        EditError::AtBufferStart.to_string(),
        "reached beginning of buffer"
    );
    assert_eq!(EditError::AtBufferEnd.to_string(), "reached end of buffer");
    assert_eq!(EditError::AtBufferEnd.severity(), ErrorSeverity::Info);
}

#[test]
fn test_undefined_chord_message() {
    let err = EditError::UndefinedChord("C-x q".to_string());
    assert_eq!(err.to_string(), "C-x q is undefined");
    assert_eq!(err.severity(), ErrorSeverity::Warning);
}

#[test]
fn test_io_error_keeps_source() {
    let err = EditError::io(
        "notes.txt",
        io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    );
    assert_eq!(err.severity(), ErrorSeverity::Error);
    assert!(err.to_string().contains("notes.txt"));
    assert!(err.to_string().contains("denied"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_terminal_error_from_io() {
    let err: EditError = io::Error::other("tty gone").into();
    assert_eq!(err.severity(), ErrorSeverity::Critical);
    assert!(matches!(err, EditError::Terminal(_)));
}
