mod area_overview_service;

pub use area_overview_service::AreaOverviewService;
