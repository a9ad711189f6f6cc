// Host-side tests for the pure flow logic. The main crate is wasm-only,
// so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod auth {
    include!("../src/auth.rs");
}

use auth::*;

#[test]
fn login_requires_both_fields() {
    assert!(!login_submittable("", ""));
    assert!(!login_submittable("operator", ""));
    assert!(!login_submittable("", "hunter2"));
    assert!(login_submittable("operator", "hunter2"));
}

#[test]
fn login_labels() {
    assert_eq!(LoginPhase::Idle.label(), "Login");
    assert_eq!(LoginPhase::Submitting.label(), "Logging in...");
}

#[test]
fn passkey_allow_list_exact_matches() {
    assert_eq!(verify_passkey("DART2024"), PasskeyPhase::Granted);
    assert_eq!(verify_passkey("admin"), PasskeyPhase::Granted);
    assert_eq!(verify_passkey("superuser"), PasskeyPhase::Granted);
}

#[test]
fn passkey_rejects_everything_else() {
    assert_eq!(verify_passkey("dart2024"), PasskeyPhase::Invalid);
    assert_eq!(verify_passkey("DART2024 "), PasskeyPhase::Invalid);
    assert_eq!(verify_passkey("Admin"), PasskeyPhase::Invalid);
    assert_eq!(verify_passkey("root"), PasskeyPhase::Invalid);
    assert_eq!(verify_passkey(""), PasskeyPhase::Invalid);
}

#[test]
fn passkey_labels_and_tones() {
    assert_eq!(PasskeyPhase::Idle.label(), "Verify");
    assert_eq!(PasskeyPhase::Verifying.label(), "Verifying...");
    assert_eq!(PasskeyPhase::Granted.label(), "Access Granted");
    assert_eq!(PasskeyPhase::Invalid.label(), "Invalid Passkey");

    assert_eq!(PasskeyPhase::Idle.tone(), "primary");
    assert_eq!(PasskeyPhase::Verifying.tone(), "warning");
    assert_eq!(PasskeyPhase::Granted.tone(), "success");
    assert_eq!(PasskeyPhase::Invalid.tone(), "error");
}

#[test]
fn reset_accepts_emails_and_known_users() {
    assert_eq!(verify_reset_target("ops@kluger.example"), ResetPhase::Sent);
    assert_eq!(verify_reset_target("@"), ResetPhase::Sent);
    assert_eq!(verify_reset_target("admin"), ResetPhase::Sent);
    assert_eq!(verify_reset_target("user"), ResetPhase::Sent);
}

#[test]
fn reset_rejects_unknown_users() {
    assert_eq!(verify_reset_target("Admin"), ResetPhase::NotFound);
    assert_eq!(verify_reset_target("operator"), ResetPhase::NotFound);
    assert_eq!(verify_reset_target("user "), ResetPhase::NotFound);
    assert_eq!(verify_reset_target(""), ResetPhase::NotFound);
}

#[test]
fn reset_labels_and_tones() {
    assert_eq!(ResetPhase::Idle.label(), "Send Reset Link");
    assert_eq!(ResetPhase::Sending.label(), "Sending...");
    assert_eq!(ResetPhase::Sent.label(), "Email Sent");
    assert_eq!(ResetPhase::NotFound.label(), "User Not Found");

    assert_eq!(ResetPhase::Idle.tone(), "primary");
    assert_eq!(ResetPhase::Sending.tone(), "warning");
    assert_eq!(ResetPhase::Sent.tone(), "success");
    assert_eq!(ResetPhase::NotFound.tone(), "error");
}

#[test]
fn allow_lists_are_what_the_flows_promise() {
    assert_eq!(constants::SUPER_USER_PASSKEYS.len(), 3);
    assert_eq!(constants::RESET_KNOWN_USERS.len(), 2);
    for key in constants::SUPER_USER_PASSKEYS {
        assert_eq!(verify_passkey(key), PasskeyPhase::Granted);
    }
    for user in constants::RESET_KNOWN_USERS {
        assert_eq!(verify_reset_target(user), ResetPhase::Sent);
    }
}
