// src/services/submission_service.rs

use crate::{
    common::error::AppError,
    db::SubmissionRepository,
    models::auth::Profile,
    models::submission::{Submission, SubmissionPayload},
    services::rbac,
};

#[derive(Clone)]
pub struct SubmissionService {
    submission_repo: SubmissionRepository,
}

impl SubmissionService {
    pub fn new(submission_repo: SubmissionRepository) -> Self {
        Self { submission_repo }
    }

    // Formulário público de contato
    pub async fn create(&self, payload: &SubmissionPayload) -> Result<Submission, AppError> {
        self.submission_repo.create(payload).await
    }

    pub async fn list(&self, actor: &Profile) -> Result<Vec<Submission>, AppError> {
        if !rbac::can_administer(actor) {
            return Err(AppError::Forbidden);
        }
        self.submission_repo.list().await
    }
}
