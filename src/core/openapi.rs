use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::area_overview::{
    aggregator as area_aggregator, dtos as area_overview_dtos,
    handlers::overview_handler as area_overview_handler,
};
use crate::features::auth;
use crate::features::geocoding::{dtos as geocoding_dtos, handlers::geocoding_handler};
use crate::features::helplines::{dtos as helplines_dtos, handlers::helpline_handler};
use crate::features::issues::{
    dtos as issues_dtos,
    handlers::{issue_handler, photo_handler},
    models as issues_models,
};
use crate::features::users::{dtos as users_dtos, handlers::profile_handler};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth::handler::get_me,
        // Users
        profile_handler::get_profile,
        profile_handler::record_session,
        // Issues
        issue_handler::create_issue,
        issue_handler::list_my_issues,
        issue_handler::get_issue,
        issue_handler::add_issue_update,
        issue_handler::update_issue,
        issue_handler::list_issues,
        issue_handler::get_queue,
        issue_handler::get_stats,
        photo_handler::upload_photo,
        // Geocoding (public)
        geocoding_handler::reverse_geocode,
        geocoding_handler::search,
        // Area overview (public)
        area_overview_handler::get_area_overview,
        // Helplines (public)
        helpline_handler::list_helplines,
        helpline_handler::get_helpline,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth::model::Role,
            auth::model::AuthenticatedUser,
            auth::dto::MeResponseDto,
            ApiResponse<auth::dto::MeResponseDto>,
            // Users
            users_dtos::RecordSessionDto,
            users_dtos::UserProfileResponseDto,
            ApiResponse<users_dtos::UserProfileResponseDto>,
            // Issues
            issues_models::IssueStatus,
            issues_models::IssueCategory,
            issues_dtos::CreateIssueDto,
            issues_dtos::CreateIssueUpdateDto,
            issues_dtos::UpdateIssueDto,
            issues_dtos::IssueMutationResultDto,
            issues_dtos::IssueResponseDto,
            issues_dtos::IssueUpdateResponseDto,
            issues_dtos::IssueDetailResponseDto,
            issues_dtos::IssueStatsDto,
            issues_dtos::UploadPhotoDto,
            issues_dtos::PhotoUploadResponseDto,
            ApiResponse<issues_dtos::IssueMutationResultDto>,
            ApiResponse<issues_dtos::IssueDetailResponseDto>,
            ApiResponse<Vec<issues_dtos::IssueResponseDto>>,
            ApiResponse<issues_dtos::IssueStatsDto>,
            ApiResponse<issues_dtos::PhotoUploadResponseDto>,
            // Geocoding
            geocoding_dtos::ReverseGeocodeResponseDto,
            geocoding_dtos::GeocodeResponseDto,
            ApiResponse<geocoding_dtos::ReverseGeocodeResponseDto>,
            ApiResponse<geocoding_dtos::GeocodeResponseDto>,
            // Area overview
            area_aggregator::TimeWindow,
            area_aggregator::SeverityTier,
            area_overview_dtos::CoordinatesDto,
            area_overview_dtos::CategoryShareDto,
            area_overview_dtos::AreaTileDto,
            area_overview_dtos::MapMarkerDto,
            area_overview_dtos::AreaOverviewDto,
            ApiResponse<area_overview_dtos::AreaOverviewDto>,
            // Helplines
            helplines_dtos::HelplineResponseDto,
            ApiResponse<helplines_dtos::HelplineResponseDto>,
            ApiResponse<Vec<helplines_dtos::HelplineResponseDto>>,
        )
    ),
    tags(
        (name = "auth", description = "Session context from the identity provider"),
        (name = "users", description = "User profiles"),
        (name = "issues", description = "Civic issue reporting, tracking and resolution"),
        (name = "geocoding", description = "Forward and reverse geocoding"),
        (name = "area-overview", description = "Area-level summary of reported issues (public)"),
        (name = "helplines", description = "Delhi civic helplines (public)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Nagrik Seva API",
        version = "0.1.0",
        description = "API documentation for Nagrik Seva",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
