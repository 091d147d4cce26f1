//! Tests and examples for the testing utilities
//!
//! This suite shows the assertion macros applied to validation functions a
//! downstream crate would write.

use valid::prelude::*;
use valid::{assert_field_errors, assert_invalid, assert_valid};

#[derive(Debug, Clone, PartialEq)]
struct Config {
    min_age: u32,
    roles: Vec<&'static str>,
}

impl Config {
    fn test_config() -> Self {
        Self {
            min_age: 18,
            roles: vec!["admin", "editor", "viewer"],
        }
    }
}

fn validate_user(config: &Config, email: &str, age: u32, role: &str) -> Validator {
    let mut v = Validator::new();
    v.check(
        "email",
        [
            (not_empty(email), "must not be empty"),
            (email.contains('@'), "must contain @"),
        ],
    );
    v.check(
        "age",
        [(
            min(age, config.min_age),
            format!("must be at least {}", config.min_age),
        )],
    );
    v.check("role", [(is_in(role, &config.roles), "is not a known role")]);
    v
}

#[test]
fn test_assert_valid_with_good_user() {
    let config = Config::test_config();
    assert_valid!(validate_user(&config, "user@example.com", 25, "admin"));
}

#[test]
fn test_assert_invalid_with_bad_email() {
    let config = Config::test_config();
    assert_invalid!(validate_user(&config, "invalid", 25, "admin"));
}

#[test]
fn test_assert_field_errors_reports_first_failure_per_field() {
    let config = Config::test_config();
    let v = validate_user(&config, "", 10, "owner");

    assert_field_errors!(
        v,
        [
            ("email", "must not be empty"),
            ("age", "must be at least 18"),
            ("role", "is not a known role"),
        ]
    );
}

#[test]
fn test_config_changes_message() {
    let config = Config {
        min_age: 21,
        ..Config::test_config()
    };
    let v = validate_user(&config, "user@example.com", 19, "viewer");

    assert_field_errors!(v, [("age", "must be at least 21")]);
}

#[test]
#[should_panic(expected = "Expected valid, got errors: email: must contain @")]
fn test_assert_valid_shows_rendered_errors() {
    let config = Config::test_config();
    assert_valid!(validate_user(&config, "nope", 30, "admin"));
}
