use rediboard::config;
use std::env;
use std::time::Duration;

#[test]
fn test_sanitize_base_url_removes_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("http://monitor.internal:8080/"),
        "http://monitor.internal:8080"
    );
}

#[test]
fn test_sanitize_base_url_multiple_trailing_slashes() {
    assert_eq!(
        config::sanitize_base_url("http://monitor.internal:8080///"),
        "http://monitor.internal:8080"
    );
}

#[test]
fn test_sanitize_base_url_with_whitespace() {
    assert_eq!(
        config::sanitize_base_url("  http://monitor.internal:8080/  "),
        "http://monitor.internal:8080"
    );
}

#[test]
fn test_sanitize_base_url_empty_string() {
    assert_eq!(config::sanitize_base_url(""), "http://localhost:8080");
    assert_eq!(config::sanitize_base_url("   "), "http://localhost:8080");
}

#[test]
fn test_parse_timeout_secs() {
    assert_eq!(config::parse_timeout_secs("5"), Some(Duration::from_secs(5)));
    assert_eq!(config::parse_timeout_secs(" 30 "), Some(Duration::from_secs(30)));
    assert_eq!(config::parse_timeout_secs(""), None);
    assert_eq!(config::parse_timeout_secs("0"), None);
    assert_eq!(config::parse_timeout_secs("soon"), None);
}

#[test]
fn test_get_api_base_url_from_env() {
    // Only this test touches the variable, so set and clear it in sequence
    env::set_var(config::API_URL_VAR, "http://monitor.internal:8080/");
    assert_eq!(config::get_api_base_url(), "http://monitor.internal:8080");

    env::remove_var(config::API_URL_VAR);
    assert_eq!(config::get_api_base_url(), config::DEFAULT_API_BASE_URL);
}
