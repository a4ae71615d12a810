use super::*;

// =============================================================================
// env_parse / env_bool — unique env var names avoid races with parallel tests.
// =============================================================================

#[test]
fn env_parse_missing_returns_default() {
    let val: u16 = env_parse("__TEST_AA_EP_MISSING_5512__", 42);
    assert_eq!(val, 42);
}

#[test]
fn env_parse_present_valid() {
    unsafe { std::env::set_var("__TEST_AA_EP_VALID__", " 8080 ") };
    let val: u16 = env_parse("__TEST_AA_EP_VALID__", 0);
    assert_eq!(val, 8080);
    unsafe { std::env::remove_var("__TEST_AA_EP_VALID__") };
}

#[test]
fn env_parse_invalid_returns_default() {
    unsafe { std::env::set_var("__TEST_AA_EP_INVALID__", "eighty") };
    let val: u64 = env_parse("__TEST_AA_EP_INVALID__", 7);
    assert_eq!(val, 7);
    unsafe { std::env::remove_var("__TEST_AA_EP_INVALID__") };
}

#[test]
fn env_bool_variants() {
    for (i, (raw, expected)) in [("1", true), ("YES", true), (" on ", true), ("0", false), ("Off", false)]
        .iter()
        .enumerate()
    {
        let key = format!("__TEST_AA_EB_{i}__");
        unsafe { std::env::set_var(&key, raw) };
        assert_eq!(env_bool(&key), Some(*expected), "raw {raw:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_invalid_or_unset_is_none() {
    let key = "__TEST_AA_EB_INVALID__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
    assert_eq!(env_bool("__TEST_AA_EB_UNSET_991__"), None);
}

// =============================================================================
// AppConfig
// =============================================================================

#[test]
fn default_matches_constants() {
    let cfg = AppConfig::default();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(cfg.session_idle.as_secs(), DEFAULT_SESSION_IDLE_SECS);
    assert_eq!(cfg.session_sweep.as_secs(), DEFAULT_SESSION_SWEEP_SECS);
    assert!(!cfg.cookie_secure);
}

#[test]
fn listen_addr_joins_host_and_port() {
    let cfg = AppConfig { bind_addr: "127.0.0.1".into(), port: 4000, ..AppConfig::default() };
    assert_eq!(cfg.listen_addr(), "127.0.0.1:4000");
}
