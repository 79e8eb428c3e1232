//! REST API endpoint tests

mod health_tests;
mod login_tests;
