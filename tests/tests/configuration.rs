//! Process-wide configuration. Kept in its own test binary because the
//! configuration can only be installed once per process.

use std::thread;

use undo_core::{UndoConfig, UndoError, UNDO_INITIAL_CAPACITY_MAX};
use undo_manager::configure;
use undo_tests::prelude::*;

#[test]
fn test_configure_once() {
    // Invalid values are rejected before anything is installed
    let invalid = UndoConfig::new().with_initial_capacity(UNDO_INITIAL_CAPACITY_MAX + 1);
    assert!(matches!(
        configure(invalid),
        Err(UndoError::InvalidConfiguration { .. })
    ));

    // First valid configuration wins
    assert!(configure(UndoConfig::new().with_initial_capacity(256)).is_ok());
    assert!(matches!(
        configure(UndoConfig::default()),
        Err(UndoError::AlreadyConfigured)
    ));

    // Logs created afterwards behave normally
    thread::spawn(|| {
        let tape = Tape::new();
        tape.push(undo(), "a");
        tape.push(undo(), "b");
        undo().rollback();
        assert_eq!(tape.invoked(), vec!["b", "a"]);
    })
    .join()
    .unwrap();
}
