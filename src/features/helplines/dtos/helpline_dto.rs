use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::helplines::catalogue::Helpline;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HelplineResponseDto {
    pub key: String,
    pub authority: String,
    pub helpline: String,
    pub alternate_helpline: String,
    pub department: String,
    pub grievance_portal: String,
    pub description: String,
}

impl From<Helpline> for HelplineResponseDto {
    fn from(h: Helpline) -> Self {
        Self {
            key: h.key.to_string(),
            authority: h.authority.to_string(),
            helpline: h.helpline.to_string(),
            alternate_helpline: h.alternate_helpline.to_string(),
            department: h.department.to_string(),
            grievance_portal: h.grievance_portal.to_string(),
            description: h.description.to_string(),
        }
    }
}
