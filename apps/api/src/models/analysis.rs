use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::checklist::ChecklistRound;
use crate::analysis::company::{CompanyProfile, HiringFocus};
use crate::analysis::plan::PlanDay;
use crate::analysis::questions::InterviewQuestion;
use crate::analysis::readiness::{adjusted_score, SkillConfidence};
use crate::analysis::rounds::InterviewRound;
use crate::analysis::skills::ExtractedSkills;

/// Number of "practice" skills surfaced as weak areas.
const WEAK_AREA_LIMIT: usize = 3;

/// Heuristic company intel nested under an analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyIntel {
    pub company: String,
    pub industry: String,
    pub size: CompanyProfile,
    pub hiring_focus: HiringFocus,
    pub round_mapping: Vec<InterviewRound>,
    pub generated_at: DateTime<Utc>,
    /// Always true: size, industry and rounds are inferred, not verified.
    pub is_heuristic: bool,
}

/// One analyze action's output. Immutable after creation except for the
/// confidence map and the adjusted score derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub company: String,
    pub role: String,
    pub jd_text: String,
    pub extracted_skills: ExtractedSkills,
    pub checklist: Vec<ChecklistRound>,
    pub plan: Vec<PlanDay>,
    pub questions: Vec<InterviewQuestion>,
    pub readiness_score: u32,
    pub company_intel: CompanyIntel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_confidence_map: Option<BTreeMap<String, SkillConfidence>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjusted_readiness_score: Option<u32>,
}

impl Analysis {
    /// Stored confidence for a label; unmarked skills count as `Practice`.
    pub fn confidence_for(&self, skill: &str) -> SkillConfidence {
        self.skill_confidence_map
            .as_ref()
            .and_then(|m| m.get(skill).copied())
            .unwrap_or_default()
    }

    pub fn is_detected_skill(&self, skill: &str) -> bool {
        self.extracted_skills.all_skills().any(|s| s == skill)
    }

    /// Merges `updates` over the current map, fills every other detected skill
    /// with its stored value (default `Practice`), and recomputes the adjusted
    /// score from the base score. Labels that are not detected skills are ignored.
    pub fn apply_confidence(&mut self, updates: &BTreeMap<String, SkillConfidence>) -> u32 {
        let merged: BTreeMap<String, SkillConfidence> = self
            .extracted_skills
            .all_skills()
            .map(|skill| {
                let confidence = updates
                    .get(skill)
                    .copied()
                    .unwrap_or_else(|| self.confidence_for(skill));
                (skill.to_string(), confidence)
            })
            .collect();

        let adjusted = adjusted_score(self.readiness_score, &merged);
        self.skill_confidence_map = Some(merged);
        self.adjusted_readiness_score = Some(adjusted);
        adjusted
    }

    /// Adjusted score when one has been computed, otherwise the base score.
    pub fn effective_score(&self) -> u32 {
        self.adjusted_readiness_score.unwrap_or(self.readiness_score)
    }

    /// First few skills, in extraction order, still marked `Practice`.
    pub fn weak_skills(&self) -> Vec<&str> {
        self.extracted_skills
            .all_skills()
            .filter(|s| self.confidence_for(s) == SkillConfidence::Practice)
            .take(WEAK_AREA_LIMIT)
            .collect()
    }
}
