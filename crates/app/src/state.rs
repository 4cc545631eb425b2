//! Session state store
//!
//! The single owner of the authenticated user for the process lifetime.
//! Operations orchestrate the API services, the session machine, and the
//! durable store: each async operation raises its domain's loading flag,
//! clears the matching error slot on start, records a user-facing message
//! on failure, and returns the error so callers can run their own local
//! logic on top.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use tracing::{info, warn};

use newsdesk_api::{ApiClient, Credentials, NewUser, ProfileUpdate};
use newsdesk_core::models::{ReporterStatus, Role, User};
use newsdesk_core::session::{AuthPhase, Session};
use newsdesk_core::storage::Database;
use newsdesk_core::validate;

use crate::error::{Error, Result};

/// Async operation domains with separate loading flags and error slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Auth,
    Profile,
    Reporter,
}

#[derive(Debug, Default)]
struct Flags {
    auth: bool,
    profile: bool,
    reporter: bool,
}

impl Flags {
    fn get(&self, domain: Domain) -> bool {
        match domain {
            Domain::Auth => self.auth,
            Domain::Profile => self.profile,
            Domain::Reporter => self.reporter,
        }
    }

    fn set(&mut self, domain: Domain, value: bool) {
        match domain {
            Domain::Auth => self.auth = value,
            Domain::Profile => self.profile = value,
            Domain::Reporter => self.reporter = value,
        }
    }
}

#[derive(Debug, Default)]
struct Errors {
    auth: Option<String>,
    profile: Option<String>,
    reporter: Option<String>,
}

impl Errors {
    fn get(&self, domain: Domain) -> Option<String> {
        match domain {
            Domain::Auth => self.auth.clone(),
            Domain::Profile => self.profile.clone(),
            Domain::Reporter => self.reporter.clone(),
        }
    }

    fn set(&mut self, domain: Domain, value: Option<String>) {
        match domain {
            Domain::Auth => self.auth = value,
            Domain::Profile => self.profile = value,
            Domain::Reporter => self.reporter = value,
        }
    }
}

struct Inner {
    session: Session,
    loading: Flags,
    errors: Errors,
}

/// Injectable session state container
pub struct SessionStore {
    client: Arc<ApiClient>,
    db: Arc<Mutex<Database>>,
    inner: Mutex<Inner>,
}

impl SessionStore {
    pub fn new(client: Arc<ApiClient>, db: Arc<Mutex<Database>>, idle_timeout: Duration) -> Self {
        Self {
            client,
            db,
            inner: Mutex::new(Inner {
                session: Session::new(idle_timeout),
                loading: Flags::default(),
                errors: Errors::default(),
            }),
        }
    }

    /// Restore the persisted user at start-up, adopting its token.
    /// Returns whether a session was found.
    pub fn restore(&self) -> Result<bool> {
        let user = self.db.lock().unwrap().session().load_user()?;
        match user {
            Some(user) => {
                if let Some(token) = &user.token {
                    self.client.set_token(token.clone());
                }
                self.inner.lock().unwrap().session.restore(user);
                info!("Restored persisted session");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Sign in. On success the user is held, persisted, and its token
    /// attached to the client.
    pub async fn login(&self, credentials: Credentials) -> Result<User> {
        self.begin_auth();
        match self.client.auth().login(&credentials).await {
            Ok(user) => {
                self.complete_auth(user.clone());
                Ok(user)
            }
            Err(err) => {
                self.fail_auth(err.user_message());
                Err(err.into())
            }
        }
    }

    /// Create an account; otherwise identical to [`Self::login`]
    pub async fn register(&self, new_user: NewUser) -> Result<User> {
        self.begin_auth();
        match self.client.auth().register(&new_user).await {
            Ok(user) => {
                self.complete_auth(user.clone());
                Ok(user)
            }
            Err(err) => {
                self.fail_auth(err.user_message());
                Err(err.into())
            }
        }
    }

    /// Explicit logout: clears the token, the durable store, and the
    /// held user.
    pub fn logout(&self) {
        self.client.clear_token();
        if let Err(e) = self.db.lock().unwrap().session().clear() {
            warn!(error = %e, "Failed to clear persisted session");
        }

        let mut inner = self.inner.lock().unwrap();
        inner.session.sign_out();
        inner.errors = Errors::default();
        info!("Signed out");
    }

    /// Update the signed-in profile. Password checks run client-side
    /// first; a failure there never issues a request.
    pub async fn update_profile(
        &self,
        update: ProfileUpdate,
        password_confirmation: Option<String>,
    ) -> Result<User> {
        if let Some(password) = &update.password {
            let confirmation = password_confirmation.as_deref().unwrap_or_default();
            if let Err(err) = validate::validate_password_change(password, confirmation) {
                let message = err.to_string();
                self.inner
                    .lock()
                    .unwrap()
                    .errors
                    .set(Domain::Profile, Some(message));
                return Err(err.into());
            }
        }

        self.begin(Domain::Profile);
        match self.client.auth().update_profile(update).await {
            Ok(user) => Ok(self.adopt_user(Domain::Profile, user)),
            Err(err) => {
                self.fail(Domain::Profile, err.user_message());
                Err(err.into())
            }
        }
    }

    /// Re-fetch the profile to refresh the held user
    pub async fn refresh_profile(&self) -> Result<User> {
        self.begin(Domain::Profile);
        match self.client.auth().profile().await {
            Ok(user) => Ok(self.adopt_user(Domain::Profile, user)),
            Err(err) => {
                self.fail(Domain::Profile, err.user_message());
                Err(err.into())
            }
        }
    }

    /// Apply to become a reporter; the returned user carries the new
    /// application status.
    pub async fn apply_for_reporter(&self, motivation: &str) -> Result<User> {
        self.begin(Domain::Reporter);
        match self.client.auth().apply_reporter(motivation).await {
            Ok(user) => Ok(self.adopt_user(Domain::Reporter, user)),
            Err(err) => {
                self.fail(Domain::Reporter, err.user_message());
                Err(err.into())
            }
        }
    }

    /// A tracked activity event (mouse/key) occurred
    pub fn mark_activity(&self) {
        self.inner.lock().unwrap().session.mark_activity();
    }

    /// Periodic idle check; returns true when the session just expired
    pub fn check_expiration(&self) -> bool {
        self.check_expiration_at(Utc::now())
    }

    pub fn check_expiration_at(&self, now: DateTime<Utc>) -> bool {
        let expired = self.inner.lock().unwrap().session.check_expiration_at(now);
        if expired {
            info!("Session flagged expired after idle timeout");
        }
        expired
    }

    // --- selectors ---

    pub fn phase(&self) -> AuthPhase {
        self.inner.lock().unwrap().session.phase()
    }

    pub fn current_user(&self) -> Option<User> {
        self.inner.lock().unwrap().session.user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase() == AuthPhase::Authenticated
    }

    pub fn is_expired(&self) -> bool {
        self.phase() == AuthPhase::SessionExpired
    }

    pub fn role(&self) -> Option<Role> {
        self.current_user().map(|user| user.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    pub fn is_reporter(&self) -> bool {
        self.role() == Some(Role::Reporter)
    }

    pub fn reporter_status(&self) -> ReporterStatus {
        self.current_user()
            .map(|user| user.reporter_application_status)
            .unwrap_or_default()
    }

    /// Post-login destination; home when anonymous
    pub fn landing_route(&self) -> &'static str {
        self.role().map(|role| role.landing_route()).unwrap_or("/")
    }

    pub fn error(&self, domain: Domain) -> Option<String> {
        self.inner.lock().unwrap().errors.get(domain)
    }

    pub fn is_loading(&self, domain: Domain) -> bool {
        self.inner.lock().unwrap().loading.get(domain)
    }

    // --- internal transitions ---

    fn begin(&self, domain: Domain) {
        let mut inner = self.inner.lock().unwrap();
        inner.loading.set(domain, true);
        inner.errors.set(domain, None);
    }

    fn begin_auth(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.loading.set(Domain::Auth, true);
        inner.errors.set(Domain::Auth, None);
        inner.session.begin_authentication();
    }

    fn complete_auth(&self, user: User) {
        if let Some(token) = &user.token {
            self.client.set_token(token.clone());
        }
        self.persist(&user);

        let mut inner = self.inner.lock().unwrap();
        inner.loading.set(Domain::Auth, false);
        inner.session.complete_authentication(user);
        info!("Authenticated");
    }

    fn fail_auth(&self, message: String) {
        let mut inner = self.inner.lock().unwrap();
        inner.loading.set(Domain::Auth, false);
        inner.errors.set(Domain::Auth, Some(message));
        inner.session.fail_authentication();
    }

    /// Replace the held user after a profile or reporter operation. The
    /// profile endpoints do not echo the token, so the current one is
    /// carried over before persisting.
    fn adopt_user(&self, domain: Domain, mut user: User) -> User {
        if user.token.is_none() {
            user.token = self.client.token();
        }
        self.persist(&user);

        let mut inner = self.inner.lock().unwrap();
        inner.loading.set(domain, false);
        inner.session.replace_user(user.clone());
        user
    }

    fn fail(&self, domain: Domain, message: String) {
        let mut inner = self.inner.lock().unwrap();
        inner.loading.set(domain, false);
        inner.errors.set(domain, Some(message));
    }

    /// Persistence failures degrade to a warning; the in-memory session
    /// is already updated and the next successful operation re-persists.
    fn persist(&self, user: &User) {
        if let Err(e) = self.db.lock().unwrap().session().save_user(user) {
            warn!(error = %e, "Failed to persist session");
        }
    }
}
