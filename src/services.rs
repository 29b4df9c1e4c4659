// src/services.rs

pub mod auth_service;
pub mod event_service;
pub mod export_service;
pub mod join_service;
pub mod kpi;
pub mod kpi_service;
pub mod media_service;
pub mod pdf;
pub mod rbac;
pub mod report_service;
pub mod submission_service;
pub mod university_service;

pub use auth_service::AuthService;
pub use event_service::EventService;
pub use export_service::ExportService;
pub use join_service::JoinService;
pub use kpi_service::KpiService;
pub use media_service::MediaService;
pub use report_service::ReportService;
pub use submission_service::SubmissionService;
pub use university_service::UniversityService;
