// src/db.rs

pub mod audit_repo;
pub mod event_repo;
pub mod join_repo;
pub mod media_repo;
pub mod profile_repo;
pub mod report_repo;
pub mod submission_repo;
pub mod university_repo;

pub use audit_repo::AuditRepository;
pub use event_repo::EventRepository;
pub use join_repo::JoinRequestRepository;
pub use media_repo::MediaRepository;
pub use profile_repo::ProfileRepository;
pub use report_repo::{KpiRepository, ReportRepository};
pub use submission_repo::SubmissionRepository;
pub use university_repo::UniversityRepository;
