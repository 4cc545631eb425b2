//! Client-side session state machine
//!
//! Tracks the authenticated user together with an idle-activity clock.
//! The expired flag is local to the client and independent of any
//! server-side token expiry. Checks take an explicit `now` so idle
//! behavior is testable without sleeping.

use chrono::{DateTime, Duration, Utc};

use crate::models::User;

/// Default idle timeout before a session is flagged expired
pub const DEFAULT_IDLE_TIMEOUT_MINUTES: i64 = 30;

/// Authentication phase of the client session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    Anonymous,
    Authenticating,
    Authenticated,
    AuthenticationFailed,
    SessionExpired,
}

/// The client session: an optional user plus the activity clock
#[derive(Debug, Clone)]
pub struct Session {
    user: Option<User>,
    phase: AuthPhase,
    last_activity: DateTime<Utc>,
    idle_timeout: Duration,
}

impl Session {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            user: None,
            phase: AuthPhase::Anonymous,
            last_activity: Utc::now(),
            idle_timeout,
        }
    }

    pub fn with_default_timeout() -> Self {
        Self::new(Duration::minutes(DEFAULT_IDLE_TIMEOUT_MINUTES))
    }

    /// Adopt a user restored from durable storage at start-up.
    ///
    /// The stored user is trusted without a remote round-trip; a later
    /// profile fetch refreshes it.
    pub fn restore(&mut self, user: User) {
        self.user = Some(user);
        self.phase = AuthPhase::Authenticated;
        self.last_activity = Utc::now();
    }

    /// Login or register was submitted
    pub fn begin_authentication(&mut self) {
        self.phase = AuthPhase::Authenticating;
    }

    /// Login or register succeeded
    pub fn complete_authentication(&mut self, user: User) {
        self.user = Some(user);
        self.phase = AuthPhase::Authenticated;
        self.last_activity = Utc::now();
    }

    /// Login or register failed. Any previously held user is untouched.
    pub fn fail_authentication(&mut self) {
        self.phase = AuthPhase::AuthenticationFailed;
    }

    /// Explicit logout
    pub fn sign_out(&mut self) {
        self.user = None;
        self.phase = AuthPhase::Anonymous;
    }

    /// Replace the held user after a profile update or reporter-status
    /// change. Counts as a successful auth action, so it also clears an
    /// expired flag.
    pub fn replace_user(&mut self, user: User) {
        self.user = Some(user);
        if self.phase == AuthPhase::SessionExpired {
            self.phase = AuthPhase::Authenticated;
        }
        self.last_activity = Utc::now();
    }

    /// A tracked activity event (mouse/key) occurred
    pub fn mark_activity(&mut self) {
        self.mark_activity_at(Utc::now());
    }

    /// Re-stamps the activity clock. An expired session becomes live again
    /// here without re-authentication — a revival policy carried over from
    /// the platform; see DESIGN.md before tightening it.
    pub fn mark_activity_at(&mut self, now: DateTime<Utc>) {
        self.last_activity = now;
        if self.phase == AuthPhase::SessionExpired {
            self.phase = AuthPhase::Authenticated;
        }
    }

    /// Periodic idle check. Returns true when the session just expired.
    pub fn check_expiration(&mut self) -> bool {
        self.check_expiration_at(Utc::now())
    }

    pub fn check_expiration_at(&mut self, now: DateTime<Utc>) -> bool {
        if self.phase == AuthPhase::Authenticated
            && now.signed_duration_since(self.last_activity) > self.idle_timeout
        {
            self.phase = AuthPhase::SessionExpired;
            return true;
        }
        false
    }

    pub fn phase(&self) -> AuthPhase {
        self.phase
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase == AuthPhase::Authenticated
    }

    pub fn is_expired(&self) -> bool {
        self.phase == AuthPhase::SessionExpired
    }

    pub fn last_activity(&self) -> DateTime<Utc> {
        self.last_activity
    }

    pub fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }
}
