//! Role-Fit Scoring — set algebra between the candidate's skills and the JD's skills.
//!
//! Deterministic and pure: coverage = |matched| / |jd| as a percentage rounded to one
//! decimal, then bucketed into a tier. An empty JD scores 0.0 instead of dividing by zero.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of the "Strong fit" tier.
pub const STRONG_FIT_THRESHOLD: f64 = 80.0;
/// Lower bound (inclusive) of the "Partial fit" tier.
pub const PARTIAL_FIT_THRESHOLD: f64 = 50.0;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Qualitative bucket derived from the fit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitTier {
    #[serde(rename = "Strong fit")]
    StrongFit,
    #[serde(rename = "Partial fit")]
    PartialFit,
    #[serde(rename = "Weak fit")]
    WeakFit,
}

impl FitTier {
    /// Closed lower bounds: exactly 80.0 is strong, exactly 50.0 is partial.
    pub fn from_score(score: f64) -> Self {
        if score >= STRONG_FIT_THRESHOLD {
            FitTier::StrongFit
        } else if score >= PARTIAL_FIT_THRESHOLD {
            FitTier::PartialFit
        } else {
            FitTier::WeakFit
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FitTier::StrongFit => "Strong fit",
            FitTier::PartialFit => "Partial fit",
            FitTier::WeakFit => "Weak fit",
        }
    }
}

impl fmt::Display for FitTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of comparing a candidate's skills with a JD's skills.
///
/// `matched ∪ missing` is the JD set, `matched ∪ extra` is the candidate set,
/// and `matched` is disjoint from both. All three lists are sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    pub score: f64, // 0.0 – 100.0, one decimal
    #[serde(rename = "level")]
    pub tier: FitTier,
    #[serde(rename = "matched_skills")]
    pub matched: Vec<String>,
    #[serde(rename = "missing_skills")]
    pub missing: Vec<String>,
    #[serde(rename = "extra_skills")]
    pub extra: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Core scoring algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Scores candidate skill coverage of the JD skills.
///
/// Both inputs are lower-cased and deduplicated before comparison.
pub fn compute_role_fit<C, J>(candidate_skills: &[C], jd_skills: &[J]) -> FitResult
where
    C: AsRef<str>,
    J: AsRef<str>,
{
    let candidate = normalize_set(candidate_skills);
    let jd = normalize_set(jd_skills);

    let matched: Vec<String> = candidate.intersection(&jd).cloned().collect();
    let missing: Vec<String> = jd.difference(&candidate).cloned().collect();
    let extra: Vec<String> = candidate.difference(&jd).cloned().collect();

    let score = if jd.is_empty() {
        0.0
    } else {
        round_one_decimal(matched.len() as f64 / jd.len() as f64 * 100.0)
    };

    FitResult {
        score,
        tier: FitTier::from_score(score),
        matched,
        missing,
        extra,
    }
}

fn normalize_set<S: AsRef<str>>(skills: &[S]) -> BTreeSet<String> {
    skills.iter().map(|s| s.as_ref().to_lowercase()).collect()
}

/// Rounds to one decimal from the exact binary value, ties to even, so 81.25 is 81.2.
fn round_one_decimal(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[String]) -> BTreeSet<String> {
        items.iter().cloned().collect()
    }

    fn lower_set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_lowercase()).collect()
    }

    #[test]
    fn test_empty_jd_scores_zero_and_weak() {
        let fit = compute_role_fit(&["python", "sql"], &[] as &[&str]);
        assert_eq!(fit.score, 0.0);
        assert_eq!(fit.tier, FitTier::WeakFit);
        assert!(fit.matched.is_empty());
        assert!(fit.missing.is_empty());
        assert_eq!(fit.extra, vec!["python", "sql"]);
    }

    #[test]
    fn test_empty_jd_and_empty_candidate() {
        let none: [&str; 0] = [];
        let fit = compute_role_fit(&none, &none);
        assert_eq!(fit.score, 0.0);
        assert_eq!(fit.tier, FitTier::WeakFit);
    }

    #[test]
    fn test_exactly_80_percent_is_strong_fit() {
        let fit = compute_role_fit(&["a", "b", "c", "d"], &["a", "b", "c", "d", "e"]);
        assert_eq!(fit.score, 80.0);
        assert_eq!(fit.tier, FitTier::StrongFit);
        assert_eq!(fit.missing, vec!["e"]);
    }

    #[test]
    fn test_exactly_50_percent_is_partial_fit() {
        let fit = compute_role_fit(&["a", "b"], &["a", "b", "c", "d"]);
        assert_eq!(fit.score, 50.0);
        assert_eq!(fit.tier, FitTier::PartialFit);
    }

    #[test]
    fn test_40_percent_is_weak_fit() {
        let fit = compute_role_fit(&["a", "b"], &["a", "b", "c", "d", "e"]);
        assert_eq!(fit.score, 40.0);
        assert_eq!(fit.tier, FitTier::WeakFit);
    }

    #[test]
    fn test_two_of_three_rounds_to_one_decimal() {
        let fit = compute_role_fit(&["python", "sql"], &["python", "sql", "airflow"]);
        assert_eq!(fit.score, 66.7);
        assert_eq!(fit.tier, FitTier::PartialFit);
        assert_eq!(fit.matched, vec!["python", "sql"]);
        assert_eq!(fit.missing, vec!["airflow"]);
        assert!(fit.extra.is_empty());
    }

    #[test]
    fn test_one_of_three_rounds_down() {
        let fit = compute_role_fit(&["python"], &["python", "sql", "airflow"]);
        assert_eq!(fit.score, 33.3);
    }

    #[test]
    fn test_exact_ties_round_to_even() {
        let jd: Vec<String> = (0..16).map(|i| format!("skill{i:02}")).collect();

        assert_eq!(compute_role_fit(&jd[..1], &jd).score, 6.2);
        assert_eq!(compute_role_fit(&jd[..3], &jd).score, 18.8);
        let fit = compute_role_fit(&jd[..13], &jd);
        assert_eq!(fit.score, 81.2);
        assert_eq!(fit.tier, FitTier::StrongFit);
    }

    #[test]
    fn test_round_one_decimal_non_ties() {
        assert_eq!(round_one_decimal(200.0 / 3.0), 66.7);
        assert_eq!(round_one_decimal(12.5), 12.5);
        assert_eq!(round_one_decimal(0.0), 0.0);
        assert_eq!(round_one_decimal(100.0), 100.0);
    }

    #[test]
    fn test_full_coverage_scores_100() {
        let fit = compute_role_fit(&["rust", "go", "sql"], &["rust", "sql"]);
        assert_eq!(fit.score, 100.0);
        assert_eq!(fit.tier, FitTier::StrongFit);
        assert_eq!(fit.extra, vec!["go"]);
    }

    #[test]
    fn test_inputs_are_lowercased_and_deduplicated() {
        let fit = compute_role_fit(&["Python", "PYTHON", "Spark"], &["python", "sql", "SQL"]);
        assert_eq!(fit.matched, vec!["python"]);
        assert_eq!(fit.missing, vec!["sql"]);
        assert_eq!(fit.extra, vec!["spark"]);
        assert_eq!(fit.score, 50.0);
    }

    #[test]
    fn test_set_algebra_invariants_hold() {
        let cases: Vec<(Vec<&str>, Vec<&str>)> = vec![
            (vec![], vec![]),
            (vec!["a"], vec![]),
            (vec![], vec!["a", "b"]),
            (vec!["a", "b", "x"], vec!["a", "b", "c"]),
            (vec!["Kafka", "sql", "dbt"], vec!["SQL", "kafka", "spark", "airflow"]),
        ];

        for (candidate, jd) in cases {
            let fit = compute_role_fit(&candidate, &jd);
            let matched = set(&fit.matched);
            let missing = set(&fit.missing);
            let extra = set(&fit.extra);

            let jd_set: BTreeSet<String> = matched.union(&missing).cloned().collect();
            assert_eq!(jd_set, lower_set(&jd));
            assert!(matched.is_disjoint(&missing));

            let cand_set: BTreeSet<String> = matched.union(&extra).cloned().collect();
            assert_eq!(cand_set, lower_set(&candidate));
            assert!(matched.is_disjoint(&extra));

            assert!((0.0..=100.0).contains(&fit.score));
        }
    }

    #[test]
    fn test_output_lists_are_sorted() {
        let fit = compute_role_fit(&["z", "b", "y", "a"], &["c", "b", "a", "d"]);
        assert_eq!(fit.matched, vec!["a", "b"]);
        assert_eq!(fit.missing, vec!["c", "d"]);
        assert_eq!(fit.extra, vec!["y", "z"]);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(FitTier::from_score(100.0), FitTier::StrongFit);
        assert_eq!(FitTier::from_score(80.0), FitTier::StrongFit);
        assert_eq!(FitTier::from_score(79.9), FitTier::PartialFit);
        assert_eq!(FitTier::from_score(50.0), FitTier::PartialFit);
        assert_eq!(FitTier::from_score(49.9), FitTier::WeakFit);
        assert_eq!(FitTier::from_score(0.0), FitTier::WeakFit);
    }

    #[test]
    fn test_fit_result_serializes_with_level_labels() {
        let fit = compute_role_fit(&["a", "b", "c", "d"], &["a", "b", "c", "d", "e"]);
        let json = serde_json::to_value(&fit).unwrap();
        assert_eq!(json["level"], "Strong fit");
        assert_eq!(json["score"], 80.0);
        assert_eq!(json["missing_skills"][0], "e");
        assert!(json["extra_skills"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_tier_display_matches_label() {
        assert_eq!(FitTier::PartialFit.to_string(), "Partial fit");
        assert_eq!(FitTier::WeakFit.to_string(), "Weak fit");
    }
}
