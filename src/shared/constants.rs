/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Citizen role - reports issues and tracks their own reports
pub const ROLE_CITIZEN: &str = "citizen";

/// Field worker role - works the resolution queue and posts progress updates
pub const ROLE_WORKER: &str = "worker";

/// Admin role - oversees every issue and the area overview
pub const ROLE_ADMIN: &str = "admin";

// =============================================================================
// ISSUE CONSTANTS
// =============================================================================

/// Minimum length of an issue description
pub const MIN_DESCRIPTION_LENGTH: u64 = 10;

/// Minimum length of a free-text location
pub const MIN_LOCATION_LENGTH: u64 = 5;

/// Number of recent issues shown on the area overview
pub const RECENT_ISSUES_LIMIT: usize = 10;

/// Days unresolved after which an area is critical
pub const CRITICAL_AGE_DAYS: i64 = 5;

/// Days unresolved from which an area needs attention
pub const WARNING_AGE_DAYS: i64 = 3;
