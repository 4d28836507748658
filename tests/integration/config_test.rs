//! Configuration loaded from the process environment.
//!
//! Kept in its own test binary so the variables it sets do not leak into
//! other tests.

use reponote_core::config::ClientConfig;

#[test]
fn test_environment_variables_override_defaults() {
    // SAFETY: this is the only test in the binary, so nothing reads the
    // environment concurrently.
    unsafe {
        std::env::set_var("REPONOTE__API__AUTH_URL", "http://env.test:1");
        std::env::set_var("REPONOTE__SESSION__PERSIST", "false");
    }

    let config = ClientConfig::load(None).unwrap();

    assert_eq!(config.api.auth_url, "http://env.test:1");
    assert!(!config.session.persist);
    assert_eq!(config.api.request_timeout_seconds, 30);
}
