use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::validation::PHONE_E164_REGEX;

/// Request DTO sent by the client right after sign-in.
///
/// Email and phone number come from the validated token; `phone_number` here
/// is only used when the token carries none.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecordSessionDto {
    #[validate(regex(path = *PHONE_E164_REGEX, message = "Phone number must be in E.164 format"))]
    pub phone_number: Option<String>,

    #[validate(length(max = 255, message = "Display name must not exceed 255 characters"))]
    pub display_name: Option<String>,

    #[validate(url(message = "Photo URL must be a valid URL"))]
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserProfileResponseDto {
    pub uid: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_login_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_session_validation() {
        assert!(RecordSessionDto::default().validate().is_ok());

        let bad_photo = RecordSessionDto {
            display_name: Some("Asha".to_string()),
            photo_url: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(bad_photo.validate().is_err());

        let long_name = RecordSessionDto {
            display_name: Some("a".repeat(256)),
            ..Default::default()
        };
        assert!(long_name.validate().is_err());

        let local_phone = RecordSessionDto {
            phone_number: Some("98765 43210".to_string()),
            ..Default::default()
        };
        assert!(local_phone.validate().is_err());

        let e164_phone = RecordSessionDto {
            phone_number: Some("+919876543210".to_string()),
            ..Default::default()
        };
        assert!(e164_phone.validate().is_ok());
    }
}
