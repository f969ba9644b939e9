//! Round-wise preparation checklist: a fixed four-round base, patched per detected category.

use serde::{Deserialize, Serialize};

use crate::analysis::skills::{ExtractedSkills, SkillCategory};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistRound {
    pub round: String,
    pub tasks: Vec<String>,
}

const BASE_CHECKLIST: [(&str, &[&str]); 4] = [
    (
        "Round 1: Aptitude / Basics",
        &[
            "Practice quantitative aptitude (percentages, ratios, time & work)",
            "Solve logical reasoning puzzles daily",
            "Review verbal ability and reading comprehension",
            "Practice number series and pattern recognition",
            "Take timed aptitude mock tests",
            "Study basic probability and permutations",
        ],
    ),
    (
        "Round 2: DSA + Core CS",
        &[
            "Revise arrays, strings, and linked lists",
            "Practice tree and graph traversals",
            "Master dynamic programming patterns",
            "Study time and space complexity analysis",
            "Review sorting and searching algorithms",
            "Practice 2-3 DSA problems daily on LeetCode/GFG",
        ],
    ),
    (
        "Round 3: Technical Interview",
        &[
            "Prepare project explanations (architecture, challenges, solutions)",
            "Review your resume thoroughly - be ready to explain everything",
            "Practice explaining code you've written",
            "Prepare for live coding on whiteboard/screen share",
            "Study system design basics (for experienced roles)",
        ],
    ),
    (
        "Round 4: Managerial / HR",
        &[
            "Prepare STAR format answers for behavioral questions",
            "Research the company culture and recent news",
            "Prepare questions to ask the interviewer",
            "Practice salary negotiation talking points",
            "Review your career goals and motivations",
            "Prepare for \"Tell me about yourself\" (2-min version)",
        ],
    ),
];

const DSA_CORE_ROUND: usize = 1;
const TECHNICAL_ROUND: usize = 2;

/// Category → (target round index, extra tasks). Each patch applies independently.
const CATEGORY_PATCHES: &[(SkillCategory, usize, &[&str])] = &[
    (
        SkillCategory::CoreCs,
        DSA_CORE_ROUND,
        &[
            "Review OOP concepts (inheritance, polymorphism, encapsulation)",
            "Study DBMS concepts (normalization, ACID, indexing)",
            "Revise OS concepts (processes, threads, deadlocks)",
        ],
    ),
    (
        SkillCategory::Web,
        TECHNICAL_ROUND,
        &[
            "Review frontend frameworks you've used",
            "Understand REST API design principles",
            "Prepare to discuss state management patterns",
        ],
    ),
    (
        SkillCategory::Data,
        TECHNICAL_ROUND,
        &[
            "Practice SQL queries (joins, subqueries, aggregations)",
            "Review database design and normalization",
            "Understand indexing and query optimization",
        ],
    ),
    (
        SkillCategory::CloudDevOps,
        TECHNICAL_ROUND,
        &[
            "Review cloud services architecture",
            "Understand CI/CD pipelines",
            "Prepare to discuss containerization concepts",
        ],
    ),
    (
        SkillCategory::Testing,
        TECHNICAL_ROUND,
        &[
            "Review testing methodologies (unit, integration, e2e)",
            "Understand test automation frameworks",
            "Prepare to discuss test-driven development",
        ],
    ),
];

pub fn generate_checklist(skills: &ExtractedSkills) -> Vec<ChecklistRound> {
    let mut checklist: Vec<ChecklistRound> = BASE_CHECKLIST
        .iter()
        .map(|(round, tasks)| ChecklistRound {
            round: round.to_string(),
            tasks: tasks.iter().map(|t| t.to_string()).collect(),
        })
        .collect();

    for (category, round_idx, extras) in CATEGORY_PATCHES {
        if skills.has(*category) {
            checklist[*round_idx]
                .tasks
                .extend(extras.iter().map(|t| t.to_string()));
        }
    }

    checklist
}
