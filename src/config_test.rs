use super::*;

#[test]
fn default_uses_token_key() {
    assert_eq!(StoreConfig::default().token_key, "token");
}

#[test]
fn env_string_falls_back_when_unset() {
    assert_eq!(env_string("TUTORIAL_CLIENT_TEST_UNSET_KEY", "fallback"), "fallback");
}

#[test]
fn from_env_reads_override_and_ignores_blank() {
    unsafe {
        std::env::set_var(TOKEN_KEY_ENV, "  session_token ");
    }
    assert_eq!(StoreConfig::from_env().token_key, "session_token");

    unsafe {
        std::env::set_var(TOKEN_KEY_ENV, "   ");
    }
    assert_eq!(StoreConfig::from_env(), StoreConfig::default());

    unsafe {
        std::env::remove_var(TOKEN_KEY_ENV);
    }
    assert_eq!(StoreConfig::from_env(), StoreConfig::default());
}
