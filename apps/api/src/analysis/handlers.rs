//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::explanation::{explain_fit, ExplanationOutcome};
use crate::analysis::fit_scoring::FitResult;
use crate::analysis::pipeline::analyze;
use crate::analysis::profile::CandidateProfile;
use crate::analysis::skills::{load_skill_list, load_skill_list_bytes};
use crate::document::extract_resume_text;
use crate::errors::AppError;
use crate::state::AppState;

pub const MISSING_UPLOADS_MESSAGE: &str =
    "Please upload both a resume PDF and a JD skills text file before analyzing.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub resume_text: String,
    /// Raw JD skills file content, one skill per line.
    pub jd_skills_text: String,
    pub target_role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub profile: CandidateProfile,
    pub role_fit: FitResult,
    #[serde(flatten)]
    pub explanation: ExplanationOutcome,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Multipart upload: `resume` (PDF) and `jd_skills` (text, one skill per line),
/// optional `target_role`. Unknown parts are ignored.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut resume_pdf: Option<Bytes> = None;
    let mut jd_file: Option<Bytes> = None;
    let mut target_role: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => resume_pdf = Some(field.bytes().await?),
            Some("jd_skills") => jd_file = Some(field.bytes().await?),
            Some("target_role") => target_role = Some(field.text().await?),
            _ => {}
        }
    }

    let (Some(resume_pdf), Some(jd_file)) = (resume_pdf, jd_file) else {
        return Err(AppError::Validation(MISSING_UPLOADS_MESSAGE.to_string()));
    };

    let resume_text = extract_resume_text(resume_pdf).await;
    let jd_skills = load_skill_list_bytes(&jd_file);

    run_analysis(&state, &resume_text, &jd_skills, target_role).await
}

/// POST /api/v1/analyze/text
///
/// Same analysis for callers that already hold decoded résumé text.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let jd_skills = load_skill_list(&request.jd_skills_text);
    run_analysis(&state, &request.resume_text, &jd_skills, request.target_role).await
}

/// Deterministic core first, then the (fallible, non-fatal) explanation step.
async fn run_analysis(
    state: &AppState,
    resume_text: &str,
    jd_skills: &[String],
    target_role: Option<String>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let analysis_id = Uuid::new_v4();
    let target_role = target_role
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| state.config.target_role.clone());

    info!(
        %analysis_id,
        resume_chars = resume_text.len(),
        jd_skills = jd_skills.len(),
        "Starting resume analysis"
    );

    let core = analyze(resume_text, jd_skills, &target_role).map_err(|e| {
        info!(%analysis_id, "Analysis rejected: {e}");
        AppError::Analysis(e)
    })?;

    info!(
        %analysis_id,
        score = core.role_fit.score,
        level = core.role_fit.tier.label(),
        "Role fit computed"
    );

    let explanation = explain_fit(state.explainer.as_deref(), &core.explanation_prompt).await;

    Ok(Json(AnalyzeResponse {
        analysis_id,
        analyzed_at: Utc::now(),
        profile: core.profile,
        role_fit: core.role_fit,
        explanation,
    }))
}
