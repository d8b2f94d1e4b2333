use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::model::{AuthenticatedUser, Role};

/// DTO for /api/auth/me response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MeResponseDto {
    pub uid: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub role: Role,
    pub roles: Vec<Role>,
    /// Client view this session should land on
    pub home_view: String,
}

impl From<AuthenticatedUser> for MeResponseDto {
    fn from(user: AuthenticatedUser) -> Self {
        let role = user.primary_role();
        Self {
            uid: user.uid,
            email: user.email,
            phone_number: user.phone_number,
            role,
            roles: user.roles,
            home_view: role.home_view().to_string(),
        }
    }
}
