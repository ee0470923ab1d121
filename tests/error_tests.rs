//! Integration tests for error handling.
//!
//! Tests that unknown ids are reported as errors, not panics, and that
//! failed operations leave the store untouched.

mod common;

use common::TestEnv;

#[test]
fn test_complete_on_fresh_store_fails() {
    let env = TestEnv::new();

    let err = env.store.complete(0).unwrap_err();
    assert_eq!(err.to_string(), "no task with id 0");
}

#[test]
fn test_complete_error_names_the_id() {
    let env = TestEnv::new();

    let err = env.store.complete(12345).unwrap_err();
    assert!(err.to_string().contains("12345"));
}

#[test]
fn test_double_complete_fails() {
    let env = TestEnv::new();

    let id = env.add_task("once only");
    env.complete_task(id);

    let err = env.store.complete(id).unwrap_err();
    assert_eq!(err.to_string(), format!("no task with id {id}"));
}

#[test]
fn test_failed_complete_leaves_store_unchanged() {
    let env = TestEnv::new();

    let id = env.add_task("still here");
    assert!(env.store.complete(id + 1).is_err());

    assert_eq!(env.list_tasks(), vec![(id, "still here".to_string())]);
}
