use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::{ROLE_ADMIN, ROLE_CITIZEN, ROLE_WORKER};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Citizen,
    Worker,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Citizen => ROLE_CITIZEN,
            Role::Worker => ROLE_WORKER,
            Role::Admin => ROLE_ADMIN,
        }
    }

    /// Parse a role claim value; unknown roles yield `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            ROLE_CITIZEN => Some(Role::Citizen),
            ROLE_WORKER => Some(Role::Worker),
            ROLE_ADMIN => Some(Role::Admin),
            _ => None,
        }
    }

    /// Landing view of the client application for this role
    pub fn home_view(&self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::Worker => "/worker",
            Role::Citizen => "/assistant",
        }
    }
}

/// Session context of the signed-in user, extracted per request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub roles: Vec<Role>,
}

impl AuthenticatedUser {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    /// Workers and admins can work the resolution queue
    pub fn has_worker_access(&self) -> bool {
        self.is_admin() || self.has_role(Role::Worker)
    }

    /// Highest role held; citizen when none is present
    pub fn primary_role(&self) -> Role {
        self.roles.iter().copied().max().unwrap_or(Role::Citizen)
    }
}

/// Map raw role claims to roles, defaulting to citizen
pub fn roles_from_claims(claims: &[String]) -> Vec<Role> {
    let mut roles: Vec<Role> = claims.iter().filter_map(|r| Role::parse(r)).collect();
    roles.sort();
    roles.dedup();
    if roles.is_empty() {
        roles.push(Role::Citizen);
    }
    roles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{create_admin, create_citizen, create_worker};

    #[test]
    fn test_roles_default_to_citizen() {
        assert_eq!(roles_from_claims(&[]), vec![Role::Citizen]);
        assert_eq!(
            roles_from_claims(&["superhero".to_string()]),
            vec![Role::Citizen]
        );
    }

    #[test]
    fn test_roles_are_parsed_case_insensitively() {
        let roles = roles_from_claims(&[
            "Admin".to_string(),
            "worker".to_string(),
            "admin".to_string(),
        ]);
        assert_eq!(roles, vec![Role::Worker, Role::Admin]);
    }

    #[test]
    fn test_primary_role_and_home_view() {
        assert_eq!(create_citizen().primary_role().home_view(), "/assistant");
        assert_eq!(create_worker().primary_role().home_view(), "/worker");
        assert_eq!(create_admin().primary_role().home_view(), "/admin");
    }

    #[test]
    fn test_worker_access() {
        assert!(!create_citizen().has_worker_access());
        assert!(create_worker().has_worker_access());
        assert!(create_admin().has_worker_access());
    }
}
