//! Authentication service

use newsdesk_core::models::User;
use serde::Serialize;
use tracing::instrument;

use crate::client::ApiClient;
use crate::error::Result;
use crate::multipart::{into_form, FieldValue, FilePart};
use crate::response::Envelope;

/// Login credentials
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration fields
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Profile update. All fields optional; an attached picture switches the
/// request to multipart.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub picture: Option<FilePart>,
}

impl ProfileUpdate {
    fn into_fields(self) -> Vec<(String, FieldValue)> {
        let mut fields = Vec::new();
        if let Some(name) = self.name {
            fields.push(("name".to_string(), FieldValue::Text(name)));
        }
        if let Some(email) = self.email {
            fields.push(("email".to_string(), FieldValue::Text(email)));
        }
        if let Some(password) = self.password {
            fields.push(("password".to_string(), FieldValue::Text(password)));
        }
        if let Some(picture) = self.picture {
            fields.push(("profilePicture".to_string(), FieldValue::File(picture)));
        }
        fields
    }
}

/// Auth endpoint wrappers
pub struct AuthService<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Create an account. The returned user carries the session token.
    #[instrument(skip(self, new_user), fields(email = %new_user.email))]
    pub async fn register(&self, new_user: &NewUser) -> Result<User> {
        let body: Envelope<User> = self.client.post("/auth/register", new_user).await?;
        Ok(body.data)
    }

    /// Sign in. The returned user carries the session token.
    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn login(&self, credentials: &Credentials) -> Result<User> {
        let body: Envelope<User> = self.client.post("/auth/login", credentials).await?;
        Ok(body.data)
    }

    /// Fetch the signed-in profile
    pub async fn profile(&self) -> Result<User> {
        let body: Envelope<User> = self.client.get("/auth/profile").await?;
        Ok(body.data)
    }

    /// Update the signed-in profile. Multipart when a picture is attached,
    /// plain JSON otherwise.
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<User> {
        let body: Envelope<User> = if update.picture.is_some() {
            let form = into_form(update.into_fields())?;
            self.client.put_form("/auth/profile", form).await?
        } else {
            #[derive(Serialize)]
            struct Body {
                #[serde(skip_serializing_if = "Option::is_none")]
                name: Option<String>,
                #[serde(skip_serializing_if = "Option::is_none")]
                email: Option<String>,
                #[serde(skip_serializing_if = "Option::is_none")]
                password: Option<String>,
            }
            self.client
                .put(
                    "/auth/profile",
                    &Body {
                        name: update.name,
                        email: update.email,
                        password: update.password,
                    },
                )
                .await?
        };
        Ok(body.data)
    }

    /// Apply to become a reporter
    #[instrument(skip(self, motivation))]
    pub async fn apply_reporter(&self, motivation: &str) -> Result<User> {
        let body: Envelope<User> = self
            .client
            .post(
                "/auth/apply-reporter",
                &serde_json::json!({ "motivation": motivation }),
            )
            .await?;
        Ok(body.data)
    }
}
