// Prompt constants for the fit explanation hand-off.
// The explanation generator receives EXPLANATION_SYSTEM plus the rendered template.

use crate::analysis::fit_scoring::FitResult;
use crate::analysis::profile::CandidateProfile;

/// Role named in the explanation prompt when the caller does not supply one.
pub const DEFAULT_TARGET_ROLE: &str = "Data Engineer";

/// System prompt for the explanation generator.
pub const EXPLANATION_SYSTEM: &str = "You are a precise HR assistant.";

/// Explanation prompt template.
/// Placeholders: {target_role}, {jd_skills}, {candidate_name}, {candidate_skills},
///          {matched_skills}, {missing_skills}, {extra_skills}, {score}, {level}
pub const EXPLANATION_PROMPT_TEMPLATE: &str = r#"You are an HR assistant evaluating a candidate for a {target_role} role.

Job description key skills:
{jd_skills}

Candidate name: {candidate_name}

Candidate skills:
{candidate_skills}

Matched skills:
{matched_skills}

Missing skills:
{missing_skills}

Extra (nice-to-have) skills:
{extra_skills}

Role-fit score: {score} ({level})

Write:
1. A 2–3 line summary of the candidate fit.
2. 3 bullet points for strengths (skills or experience).
3. 3 bullet points for gaps or risks.
4. 3 bullet points with concrete recommendations to improve fit.

Be concise and objective."#;

/// Renders the explanation prompt. Pure formatting, no generation.
pub fn build_explanation_prompt<S: AsRef<str>>(
    profile: &CandidateProfile,
    fit: &FitResult,
    jd_skills: &[S],
    target_role: &str,
) -> String {
    let values = [
        ("target_role", target_role.to_string()),
        ("jd_skills", format_list(jd_skills)),
        ("candidate_name", profile.name.clone()),
        ("candidate_skills", format_list(&profile.skills)),
        ("matched_skills", format_list(&fit.matched)),
        ("missing_skills", format_list(&fit.missing)),
        ("extra_skills", format_list(&fit.extra)),
        ("score", format!("{:.1}", fit.score)),
        ("level", fit.tier.label().to_string()),
    ];
    render_template(EXPLANATION_PROMPT_TEMPLATE, &values)
}

/// Single left-to-right pass over `template`. Substituted values are copied out
/// verbatim and never scanned for placeholders; unknown `{..}` runs are kept as-is.
fn render_template(template: &str, values: &[(&str, String)]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let substituted = after_open.find('}').and_then(|close| {
            let key = &after_open[..close];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (value, close))
        });

        match substituted {
            Some((value, close)) => {
                rendered.push_str(value);
                rest = &after_open[close + 1..];
            }
            None => {
                rendered.push('{');
                rest = after_open;
            }
        }
    }

    rendered.push_str(rest);
    rendered
}

/// `['python', 'sql']`, or `[]` for an empty list.
fn format_list<S: AsRef<str>>(items: &[S]) -> String {
    let quoted: Vec<String> = items
        .iter()
        .map(|item| format!("'{}'", item.as_ref()))
        .collect();
    format!("[{}]", quoted.join(", "))
}
