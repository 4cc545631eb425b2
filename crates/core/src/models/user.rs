//! User model and platform roles

use serde::{Deserialize, Serialize};

/// Platform roles, lowercase on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Reporter,
    Admin,
    Moderator,
}

impl Role {
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::User => "Reader",
            Role::Reporter => "Reporter",
            Role::Admin => "Administrator",
            Role::Moderator => "Moderator",
        }
    }

    /// Post-login destination for this role
    pub fn landing_route(&self) -> &'static str {
        match self {
            Role::Reporter => "/reporter/dashboard",
            Role::Admin => "/admin",
            Role::User | Role::Moderator => "/",
        }
    }

    /// Can this role manage news and people records?
    pub fn can_manage_content(&self) -> bool {
        matches!(self, Role::Admin | Role::Moderator)
    }

    /// Can this role author news articles?
    pub fn can_author_news(&self) -> bool {
        matches!(self, Role::Reporter | Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Reporter application workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReporterStatus {
    #[default]
    None,
    Pending,
    Approved,
    Rejected,
}

/// An authenticated platform account
///
/// Created from login/register responses and persisted as-is; the `token`
/// is the opaque bearer credential the API client attaches to requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub reporter_application_status: ReporterStatus,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format_is_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let role: Role = serde_json::from_str("\"reporter\"").unwrap();
        assert_eq!(role, Role::Reporter);
    }

    #[test]
    fn test_landing_route_per_role() {
        assert_eq!(Role::Reporter.landing_route(), "/reporter/dashboard");
        assert_eq!(Role::Admin.landing_route(), "/admin");
        assert_eq!(Role::User.landing_route(), "/");
        assert_eq!(Role::Moderator.landing_route(), "/");
    }

    #[test]
    fn test_user_defaults_for_omitted_fields() {
        let user: User =
            serde_json::from_str(r#"{"id":1,"name":"A","email":"a@b.com","role":"reporter"}"#)
                .unwrap();
        assert_eq!(user.role, Role::Reporter);
        assert_eq!(user.reporter_application_status, ReporterStatus::None);
        assert!(user.token.is_none());
    }
}
