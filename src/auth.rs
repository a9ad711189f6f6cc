use crate::constants::{RESET_KNOWN_USERS, SUPER_USER_PASSKEYS};

/// Mock sign-in flows as phase enums over the buttons that display them.
/// The checks are string comparisons against the demo allow-lists; the
/// delays between phases live in `constants` and are applied by the caller.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoginPhase {
    Idle,
    Submitting,
}

impl LoginPhase {
    pub fn label(self) -> &'static str {
        match self {
            LoginPhase::Idle => "Login",
            LoginPhase::Submitting => "Logging in...",
        }
    }
}

/// The login form submits only with both fields filled; there is no
/// failure path after that.
#[inline]
pub fn login_submittable(username: &str, password: &str) -> bool {
    !username.is_empty() && !password.is_empty()
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PasskeyPhase {
    Idle,
    Verifying,
    Granted,
    Invalid,
}

impl PasskeyPhase {
    pub fn label(self) -> &'static str {
        match self {
            PasskeyPhase::Idle => "Verify",
            PasskeyPhase::Verifying => "Verifying...",
            PasskeyPhase::Granted => "Access Granted",
            PasskeyPhase::Invalid => "Invalid Passkey",
        }
    }

    /// Button tone class while in this phase.
    pub fn tone(self) -> &'static str {
        match self {
            PasskeyPhase::Idle => "primary",
            PasskeyPhase::Verifying => "warning",
            PasskeyPhase::Granted => "success",
            PasskeyPhase::Invalid => "error",
        }
    }
}

#[inline]
pub fn verify_passkey(passkey: &str) -> PasskeyPhase {
    if SUPER_USER_PASSKEYS.contains(&passkey) {
        PasskeyPhase::Granted
    } else {
        PasskeyPhase::Invalid
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ResetPhase {
    Idle,
    Sending,
    Sent,
    NotFound,
}

impl ResetPhase {
    pub fn label(self) -> &'static str {
        match self {
            ResetPhase::Idle => "Send Reset Link",
            ResetPhase::Sending => "Sending...",
            ResetPhase::Sent => "Email Sent",
            ResetPhase::NotFound => "User Not Found",
        }
    }

    pub fn tone(self) -> &'static str {
        match self {
            ResetPhase::Idle => "primary",
            ResetPhase::Sending => "warning",
            ResetPhase::Sent => "success",
            ResetPhase::NotFound => "error",
        }
    }
}

/// Anything with an "@" passes for an email; two well-known usernames pass
/// without one.
#[inline]
pub fn verify_reset_target(input: &str) -> ResetPhase {
    if input.contains('@') || RESET_KNOWN_USERS.contains(&input) {
        ResetPhase::Sent
    } else {
        ResetPhase::NotFound
    }
}
