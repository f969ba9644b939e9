//! Seven-day preparation plan: five fixed day blocks with category-conditioned extras.

use serde::{Deserialize, Serialize};

use crate::analysis::skills::{ExtractedSkills, SkillCategory};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDay {
    pub day: String,
    pub tasks: Vec<String>,
}

const BASE_PLAN: [(&str, &[&str]); 5] = [
    (
        "Day 1-2: Basics + Core CS",
        &[
            "Morning: Review fundamental programming concepts",
            "Afternoon: Study OOP principles with examples",
            "Evening: Practice basic coding problems (arrays, strings)",
            "Review: DBMS fundamentals (ER diagrams, normalization)",
            "Extra: OS concepts overview (process, memory management)",
        ],
    ),
    (
        "Day 3-4: DSA + Coding Practice",
        &[
            "Morning: Study data structures (stacks, queues, trees)",
            "Afternoon: Practice linked list and tree problems",
            "Evening: Dynamic programming introduction",
            "Focus: Time complexity analysis for all solutions",
            "Target: Solve 10-15 medium difficulty problems",
        ],
    ),
    (
        "Day 5: Project + Resume Alignment",
        &[
            "Morning: Document all your projects in detail",
            "Afternoon: Prepare project architecture explanations",
            "Evening: Update resume with relevant keywords",
            "Practice: 5-minute project presentation",
            "Review: Align skills mentioned in resume with JD",
        ],
    ),
    (
        "Day 6: Mock Interview Questions",
        &[
            "Morning: Practice technical interview questions",
            "Afternoon: Behavioral/HR question practice (STAR method)",
            "Evening: Mock interview with peer or online platform",
            "Focus: Communication clarity and confidence",
            "Prepare: Questions to ask the interviewer",
        ],
    ),
    (
        "Day 7: Revision + Weak Areas",
        &[
            "Morning: Revise weak topics identified during practice",
            "Afternoon: Quick review of all concepts",
            "Evening: Light practice - don't overburden",
            "Focus: Rest well and stay confident",
            "Final: Review company research and interview logistics",
        ],
    ),
];

const DAYS_1_2: usize = 0;
const DAYS_3_4: usize = 1;
const DAY_5: usize = 2;

enum PlanTask {
    Literal(&'static str),
    /// "Focus: <first two languages> syntax and features"
    LanguageFocus,
}

/// Applied in order, so Day 1-2 gets the Web item before the language focus.
const PLAN_PATCHES: &[(SkillCategory, usize, PlanTask)] = &[
    (
        SkillCategory::Web,
        DAYS_1_2,
        PlanTask::Literal("Review: Frontend/backend architecture patterns"),
    ),
    (
        SkillCategory::Web,
        DAYS_3_4,
        PlanTask::Literal("Extra: Build a small feature with your stack"),
    ),
    (SkillCategory::Languages, DAYS_1_2, PlanTask::LanguageFocus),
    (
        SkillCategory::Data,
        DAYS_3_4,
        PlanTask::Literal("Practice: Complex SQL queries and optimization"),
    ),
    (
        SkillCategory::CloudDevOps,
        DAY_5,
        PlanTask::Literal("Review: Cloud/DevOps tools you've used"),
    ),
    (
        SkillCategory::Testing,
        DAY_5,
        PlanTask::Literal("Prepare: Testing strategies you've implemented"),
    ),
];

pub fn generate_seven_day_plan(skills: &ExtractedSkills) -> Vec<PlanDay> {
    let mut plan: Vec<PlanDay> = BASE_PLAN
        .iter()
        .map(|(day, tasks)| PlanDay {
            day: day.to_string(),
            tasks: tasks.iter().map(|t| t.to_string()).collect(),
        })
        .collect();

    for (category, day_idx, task) in PLAN_PATCHES {
        if !skills.has(*category) {
            continue;
        }
        let rendered = match task {
            PlanTask::Literal(text) => Some(text.to_string()),
            PlanTask::LanguageFocus => language_focus(skills),
        };
        if let Some(text) = rendered {
            plan[*day_idx].tasks.push(text);
        }
    }

    plan
}

fn language_focus(skills: &ExtractedSkills) -> Option<String> {
    let langs = skills.skills_in(SkillCategory::Languages);
    if langs.is_empty() {
        return None;
    }
    let shown: Vec<&str> = langs.iter().take(2).map(String::as_str).collect();
    Some(format!("Focus: {} syntax and features", shown.join(", ")))
}
