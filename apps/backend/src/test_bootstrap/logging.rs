//! Unit-test logging bootstrap; delegates to the shared test-support
//! initializer so unit and integration tests behave identically.

pub fn init() {
    backend_test_support::test_logging::init();
}
