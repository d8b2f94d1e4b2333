use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::features::users::dtos::UserProfileResponseDto;

/// Database model for a user profile
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub uid: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_login_at: DateTime<Utc>,
}

impl From<User> for UserProfileResponseDto {
    fn from(u: User) -> Self {
        Self {
            uid: u.uid,
            email: u.email,
            phone_number: u.phone_number,
            display_name: u.display_name,
            photo_url: u.photo_url,
            created_at: u.created_at,
            last_login_at: u.last_login_at,
        }
    }
}
