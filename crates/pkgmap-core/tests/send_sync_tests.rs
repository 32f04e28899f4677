//! Tests to verify that all public types are Send + Sync.

use pkgmap_core::cli::{ExitCode, OutputFormat};
use pkgmap_core::*;

const fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_catalog_types_are_send_sync() {
    assert_send_sync::<ArgumentDescriptor>();
    assert_send_sync::<Direction>();
    assert_send_sync::<RoutineId>();
    assert_send_sync::<Namespace>();
}

#[test]
fn test_config_types_are_send_sync() {
    assert_send_sync::<GenerationConfig>();
    assert_send_sync::<GenerationConfigBuilder>();
    assert_send_sync::<OutputFormat>();
    assert_send_sync::<ExitCode>();
}

#[test]
fn test_error_is_send_sync() {
    assert_send_sync::<Error>();
}
