//! Analysis assembly: the single engine entry point.
//!
//! `analyze` is total over any string input and touches no shared state; the
//! caller owns validation (minimum JD length) and persistence.

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::analysis::checklist::generate_checklist;
use crate::analysis::company::{
    classify_size, hiring_focus, infer_industry, NOT_SPECIFIED,
};
use crate::analysis::plan::generate_seven_day_plan;
use crate::analysis::questions::generate_questions;
use crate::analysis::readiness::readiness_score;
use crate::analysis::rounds::round_mapping;
use crate::analysis::skills::{extract_skills, ExtractedSkills};
use crate::models::analysis::{Analysis, CompanyIntel};

/// Runs the full pipeline: extract → score → profile → generate → assemble.
pub fn analyze(company: &str, role: &str, jd_text: &str) -> Analysis {
    let extracted_skills = extract_skills(jd_text);
    let readiness_score = readiness_score(&extracted_skills, company, role, jd_text);
    let company_intel = company_intel(company, jd_text, &extracted_skills);

    debug!(
        readiness_score,
        size = %company_intel.size.label,
        industry = %company_intel.industry,
        rounds = company_intel.round_mapping.len(),
        "Assembled analysis"
    );

    Analysis {
        // v7 ids are time-ordered and unique within the process
        id: Uuid::now_v7(),
        created_at: Utc::now(),
        company: or_not_specified(company),
        role: or_not_specified(role),
        jd_text: jd_text.to_string(),
        checklist: generate_checklist(&extracted_skills),
        plan: generate_seven_day_plan(&extracted_skills),
        questions: generate_questions(&extracted_skills),
        extracted_skills,
        readiness_score,
        company_intel,
        skill_confidence_map: None,
        adjusted_readiness_score: None,
    }
}

fn company_intel(company: &str, jd_text: &str, skills: &ExtractedSkills) -> CompanyIntel {
    let size = classify_size(company);
    CompanyIntel {
        company: or_not_specified(company),
        industry: infer_industry(company, jd_text),
        hiring_focus: hiring_focus(size.category),
        round_mapping: round_mapping(size.category, skills),
        size,
        generated_at: Utc::now(),
        is_heuristic: true,
    }
}

fn or_not_specified(value: &str) -> String {
    if value.trim().is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        value.to_string()
    }
}
