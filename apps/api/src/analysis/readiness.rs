//! Readiness scoring: a 0–100 heuristic over skill breadth and input completeness,
//! plus the user-driven confidence adjustment applied after creation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::skills::ExtractedSkills;

const BASE_SCORE: i64 = 35;
const PER_CATEGORY_BONUS: i64 = 5;
const MAX_CATEGORY_BONUS: i64 = 30;
const COMPANY_BONUS: i64 = 10;
const ROLE_BONUS: i64 = 10;
const LONG_JD_BONUS: i64 = 10;
/// JD must be strictly longer than this (see `jd_length`) to earn `LONG_JD_BONUS`.
pub const LONG_JD_THRESHOLD: usize = 800;

const KNOW_DELTA: i64 = 2;
const PRACTICE_DELTA: i64 = -2;

/// User-asserted confidence for a single detected skill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillConfidence {
    Know,
    #[default]
    Practice,
}

/// JD length in UTF-16 code units, so characters outside the BMP count twice.
pub fn jd_length(text: &str) -> usize {
    text.encode_utf16().count()
}

/// score = 35 + min(5 × categories, 30) + 10 (company) + 10 (role) + 10 (JD > 800 chars), clamped to 0–100.
pub fn readiness_score(skills: &ExtractedSkills, company: &str, role: &str, jd_text: &str) -> u32 {
    let mut score = BASE_SCORE;

    let categories = i64::try_from(skills.categories.len()).unwrap_or(i64::MAX);
    score += categories.saturating_mul(PER_CATEGORY_BONUS).min(MAX_CATEGORY_BONUS);

    if !company.trim().is_empty() {
        score += COMPANY_BONUS;
    }
    if !role.trim().is_empty() {
        score += ROLE_BONUS;
    }
    if jd_length(jd_text) > LONG_JD_THRESHOLD {
        score += LONG_JD_BONUS;
    }

    clamp_score(score)
}

/// Recomputes the adjusted score from the base: +2 per `know`, -2 per `practice`.
///
/// Always derived from `base`, so reapplying the same map yields the same value.
pub fn adjusted_score(base: u32, confidence: &BTreeMap<String, SkillConfidence>) -> u32 {
    let adjustment: i64 = confidence
        .values()
        .map(|c| match c {
            SkillConfidence::Know => KNOW_DELTA,
            SkillConfidence::Practice => PRACTICE_DELTA,
        })
        .sum();
    clamp_score(i64::from(base) + adjustment)
}

fn clamp_score(score: i64) -> u32 {
    // clamped to 0..=100, always fits
    score.clamp(0, 100) as u32
}
