use serde::{Deserialize, Serialize};

use crate::analysis::sections::SectionMap;
use crate::analysis::text::split_lines;

/// Structured view of a candidate assembled from one résumé.
/// `name` is a heuristic (first non-empty line), not an identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub skills: Vec<String>,
    pub experience_text: String,
    pub education_text: String,
}

/// First non-empty trimmed line of the raw résumé, or "" if there is none.
pub fn extract_name(resume_text: &str) -> String {
    split_lines(resume_text)
        .into_iter()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .to_string()
}

pub fn build_candidate_profile(
    resume_text: &str,
    sections: &SectionMap,
    skills_found: &[String],
) -> CandidateProfile {
    CandidateProfile {
        name: extract_name(resume_text),
        skills: skills_found.to_vec(),
        experience_text: sections.experience.clone(),
        education_text: sections.education.clone(),
    }
}
