//! Skill extraction: matches a fixed, ordered keyword catalog against normalized JD text.
//!
//! The catalog is an ordered slice, never a map: category order drives the order of
//! `categories`, the checklist appends and the question bank.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::normalize::normalize_text;

/// Skill category keys. Declaration order is the extraction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    #[serde(rename = "Core CS")]
    CoreCs,
    Languages,
    Web,
    Data,
    #[serde(rename = "Cloud/DevOps")]
    CloudDevOps,
    Testing,
    /// Substituted when nothing in the catalog matched.
    General,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::CoreCs => "Core CS",
            SkillCategory::Languages => "Languages",
            SkillCategory::Web => "Web",
            SkillCategory::Data => "Data",
            SkillCategory::CloudDevOps => "Cloud/DevOps",
            SkillCategory::Testing => "Testing",
            SkillCategory::General => "General",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const SKILL_CATALOG: &[(SkillCategory, &[&str])] = &[
    (
        SkillCategory::CoreCs,
        &[
            "dsa",
            "data structures",
            "algorithms",
            "oop",
            "object oriented",
            "dbms",
            "database management",
            "os",
            "operating system",
            "networks",
            "networking",
            "computer networks",
            "system design",
            "design patterns",
        ],
    ),
    (
        SkillCategory::Languages,
        &[
            "java",
            "python",
            "javascript",
            "typescript",
            "c++",
            "c#",
            "golang",
            "go lang",
            "rust",
            "kotlin",
            "swift",
            "ruby",
            "php",
            "scala",
        ],
    ),
    (
        SkillCategory::Web,
        &[
            "react",
            "reactjs",
            "next.js",
            "nextjs",
            "node.js",
            "nodejs",
            "express",
            "expressjs",
            "rest",
            "restful",
            "graphql",
            "angular",
            "vue",
            "vuejs",
            "html",
            "css",
            "tailwind",
            "bootstrap",
            "webpack",
            "vite",
        ],
    ),
    (
        SkillCategory::Data,
        &[
            "sql",
            "mysql",
            "postgresql",
            "postgres",
            "mongodb",
            "redis",
            "elasticsearch",
            "cassandra",
            "oracle",
            "sqlite",
            "dynamodb",
            "firebase",
        ],
    ),
    (
        SkillCategory::CloudDevOps,
        &[
            "aws",
            "amazon web services",
            "azure",
            "gcp",
            "google cloud",
            "docker",
            "kubernetes",
            "k8s",
            "ci/cd",
            "cicd",
            "jenkins",
            "gitlab",
            "github actions",
            "terraform",
            "ansible",
            "linux",
            "unix",
            "nginx",
            "apache",
        ],
    ),
    (
        SkillCategory::Testing,
        &[
            "selenium",
            "cypress",
            "playwright",
            "junit",
            "pytest",
            "jest",
            "mocha",
            "chai",
            "testing",
            "unit test",
            "integration test",
            "e2e",
            "end to end",
            "tdd",
            "bdd",
        ],
    ),
];

/// Fresher stack returned when the JD matches no catalog keyword.
pub const GENERAL_FALLBACK_SKILLS: [&str; 5] = [
    "Programming Basics",
    "Problem Solving",
    "Communication",
    "Aptitude",
    "Logical Reasoning",
];

/// Skills detected for one category, in catalog keyword order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub skills: Vec<String>,
}

/// Full extraction output. Never empty: `General` stands in when nothing matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedSkills {
    pub skills: Vec<SkillGroup>,
    pub categories: Vec<SkillCategory>,
    pub total_skill_count: usize,
}

impl ExtractedSkills {
    pub fn has(&self, category: SkillCategory) -> bool {
        self.categories.contains(&category)
    }

    /// Labels detected for `category`, or an empty slice.
    pub fn skills_in(&self, category: SkillCategory) -> &[String] {
        self.skills
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.skills.as_slice())
            .unwrap_or(&[])
    }

    /// Every label across all groups, in extraction order.
    pub fn all_skills(&self) -> impl Iterator<Item = &str> {
        self.skills
            .iter()
            .flat_map(|g| g.skills.iter().map(String::as_str))
    }

    fn from_groups(skills: Vec<SkillGroup>) -> Self {
        let categories = skills.iter().map(|g| g.category).collect();
        let total_skill_count = skills.iter().map(|g| g.skills.len()).sum();
        Self {
            skills,
            categories,
            total_skill_count,
        }
    }
}

struct CompiledKeyword {
    keyword: &'static str,
    pattern: Regex,
}

static COMPILED_CATALOG: LazyLock<Vec<(SkillCategory, Vec<CompiledKeyword>)>> =
    LazyLock::new(|| {
        SKILL_CATALOG
            .iter()
            .map(|(category, keywords)| {
                let compiled = keywords
                    .iter()
                    .map(|&keyword| CompiledKeyword {
                        keyword,
                        pattern: keyword_pattern(keyword),
                    })
                    .collect();
                (*category, compiled)
            })
            .collect()
    });

/// Case-insensitive whole-word pattern for a literal keyword.
fn keyword_pattern(keyword: &str) -> Regex {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(keyword)))
        .expect("escaped keyword is always a valid pattern")
}

/// Title-cases each space-separated token: "system design" → "System Design".
pub fn display_label(keyword: &str) -> String {
    keyword
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Extracts categorized skills from a raw job description.
///
/// Dedup is case-insensitive and only within a category; "React" and "Reactjs"
/// are distinct keywords and both appear when both match.
pub fn extract_skills(jd_text: &str) -> ExtractedSkills {
    let normalized = normalize_text(jd_text);
    let mut groups = Vec::new();

    for (category, keywords) in COMPILED_CATALOG.iter() {
        let mut matched: Vec<String> = Vec::new();

        for kw in keywords {
            if !kw.pattern.is_match(&normalized) {
                continue;
            }
            let label = display_label(kw.keyword);
            if !matched.iter().any(|s| s.eq_ignore_ascii_case(&label)) {
                matched.push(label);
            }
        }

        if !matched.is_empty() {
            groups.push(SkillGroup {
                category: *category,
                skills: matched,
            });
        }
    }

    if groups.is_empty() {
        groups.push(SkillGroup {
            category: SkillCategory::General,
            skills: GENERAL_FALLBACK_SKILLS.iter().map(|s| s.to_string()).collect(),
        });
    }

    let extracted = ExtractedSkills::from_groups(groups);
    debug!(
        categories = ?extracted.categories,
        total = extracted.total_skill_count,
        "Extracted skills from JD"
    );
    extracted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_dsa_system_design_example() {
        let result =
            extract_skills("We need a Java developer with strong DSA and System Design skills");
        assert_eq!(
            result.categories,
            vec![SkillCategory::CoreCs, SkillCategory::Languages]
        );
        let core = result.skills_in(SkillCategory::CoreCs);
        assert!(core.contains(&"Dsa".to_string()));
        assert!(core.contains(&"System Design".to_string()));
        assert_eq!(result.skills_in(SkillCategory::Languages), ["Java"]);
        assert_eq!(result.total_skill_count, 3);
    }

    #[test]
    fn test_empty_text_returns_general_fallback() {
        let result = extract_skills("");
        assert_eq!(result.categories, vec![SkillCategory::General]);
        assert_eq!(result.skills_in(SkillCategory::General).len(), 5);
        assert_eq!(result.skills_in(SkillCategory::General)[0], "Programming Basics");
        assert_eq!(result.total_skill_count, 5);
    }

    #[test]
    fn test_unrelated_text_returns_general_fallback() {
        let result = extract_skills("Looking for a cheerful barista who loves mornings.");
        assert_eq!(result.categories, vec![SkillCategory::General]);
        assert!(result.total_skill_count >= 1);
    }

    #[test]
    fn test_categories_follow_catalog_order_not_text_order() {
        let result = extract_skills("Docker, Jest, PostgreSQL, React, Python and OOP");
        assert_eq!(
            result.categories,
            vec![
                SkillCategory::CoreCs,
                SkillCategory::Languages,
                SkillCategory::Web,
                SkillCategory::Data,
                SkillCategory::CloudDevOps,
                SkillCategory::Testing,
            ]
        );
    }

    #[test]
    fn test_skills_follow_keyword_order_within_category() {
        let result = extract_skills("Vue, GraphQL and React");
        assert_eq!(
            result.skills_in(SkillCategory::Web),
            ["React", "Graphql", "Vue"]
        );
    }

    #[test]
    fn test_whole_word_matching() {
        // "java" must not match inside "javascript", "os" not inside "most"
        let result = extract_skills("Most of our code is JavaScript");
        assert_eq!(result.skills_in(SkillCategory::Languages), ["Javascript"]);
        assert!(!result.has(SkillCategory::CoreCs));
    }

    #[test]
    fn test_react_and_reactjs_are_both_kept() {
        let result = extract_skills("React (aka ReactJS) experience");
        assert_eq!(
            result.skills_in(SkillCategory::Web),
            ["React", "Reactjs"]
        );
    }

    #[test]
    fn test_dotted_keyword_matches() {
        let result = extract_skills("Backend in Node.js and Next.js");
        assert_eq!(
            result.skills_in(SkillCategory::Web),
            ["Next.js", "Node.js"]
        );
    }

    #[test]
    fn test_multi_word_keyword_label() {
        let result = extract_skills("We use GitHub Actions and Google Cloud");
        assert_eq!(
            result.skills_in(SkillCategory::CloudDevOps),
            ["Google Cloud", "Github Actions"]
        );
    }

    #[test]
    fn test_slash_keyword_never_survives_normalization() {
        let result = extract_skills("Strong CI/CD background");
        assert!(!result.has(SkillCategory::CloudDevOps));
    }

    #[test]
    fn test_total_skill_count_is_sum_of_groups() {
        let result = extract_skills("Python, Java, SQL, MySQL, AWS");
        let sum: usize = result.skills.iter().map(|g| g.skills.len()).sum();
        assert_eq!(result.total_skill_count, sum);
        assert_eq!(result.total_skill_count, 5);
    }

    #[test]
    fn test_display_label_capitalizes_each_word() {
        assert_eq!(display_label("system design"), "System Design");
        assert_eq!(display_label("c++"), "C++");
        assert_eq!(display_label("k8s"), "K8s");
        assert_eq!(display_label("go lang"), "Go Lang");
    }

    #[test]
    fn test_all_skills_iterates_in_extraction_order() {
        let result = extract_skills("Python with Docker, also DSA");
        let all: Vec<&str> = result.all_skills().collect();
        assert_eq!(all, vec!["Dsa", "Python", "Docker"]);
    }

    #[test]
    fn test_category_serializes_to_display_key() {
        let json = serde_json::to_string(&SkillCategory::CloudDevOps).unwrap();
        assert_eq!(json, r#""Cloud/DevOps""#);
        let back: SkillCategory = serde_json::from_str(r#""Core CS""#).unwrap();
        assert_eq!(back, SkillCategory::CoreCs);
    }
}
