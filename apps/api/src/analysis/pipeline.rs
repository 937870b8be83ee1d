//! Analysis pipeline — runs the deterministic core for one résumé / JD pair.
//!
//! Flow: guard inputs → segment → extract skills → build profile → score fit →
//!       render explanation prompt.
//!
//! Pure and synchronous. The explanation call itself is layered on top by the
//! caller (see `analysis::explanation`).

use thiserror::Error;
use tracing::debug;

use crate::analysis::fit_scoring::{compute_role_fit, FitResult};
use crate::analysis::profile::{build_candidate_profile, CandidateProfile};
use crate::analysis::prompts::build_explanation_prompt;
use crate::analysis::sections::{segment, Section};
use crate::analysis::skills::extract_skills;

/// The only two conditions the core reports. Both are returned, never panicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("No text could be extracted from the resume PDF.")]
    EmptyInputText,

    #[error("No skills found in the JD skills file.")]
    EmptySkillList,
}

impl AnalysisError {
    pub fn code(&self) -> &'static str {
        match self {
            AnalysisError::EmptyInputText => "EMPTY_INPUT_TEXT",
            AnalysisError::EmptySkillList => "EMPTY_SKILL_LIST",
        }
    }
}

/// Everything the core derives from one résumé / JD pair.
#[derive(Debug, Clone)]
pub struct CoreAnalysis {
    pub profile: CandidateProfile,
    pub role_fit: FitResult,
    /// Hand-off payload for the explanation generator.
    pub explanation_prompt: String,
}

/// Runs the full deterministic pipeline.
///
/// Skills are searched in the skills section when one was found, otherwise in the
/// whole résumé text.
pub fn analyze(
    resume_text: &str,
    jd_skills: &[String],
    target_role: &str,
) -> Result<CoreAnalysis, AnalysisError> {
    if resume_text.trim().is_empty() {
        return Err(AnalysisError::EmptyInputText);
    }
    if jd_skills.is_empty() {
        return Err(AnalysisError::EmptySkillList);
    }

    let sections = segment(resume_text);

    let skills_section = sections.get(Section::Skills);
    let has_skills_section = !skills_section.is_empty();
    let skills_text = if has_skills_section {
        skills_section
    } else {
        resume_text
    };
    let skills_found = extract_skills(skills_text, jd_skills);

    let profile = build_candidate_profile(resume_text, &sections, &skills_found);
    let role_fit = compute_role_fit(&skills_found, jd_skills);
    let explanation_prompt = build_explanation_prompt(&profile, &role_fit, jd_skills, target_role);

    debug!(
        skills_section_found = has_skills_section,
        skills_found = skills_found.len(),
        jd_skills = jd_skills.len(),
        score = role_fit.score,
        "core analysis complete"
    );

    Ok(CoreAnalysis {
        profile,
        role_fit,
        explanation_prompt,
    })
}
