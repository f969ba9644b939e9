//! Question bank: builds an ordered candidate list gated on detected skills, then
//! selects up to ten with a diversify-then-fill rule.
//!
//! Selection is two explicit passes:
//! 1. Walk candidates in order; accept one if its category is unseen, or while
//!    fewer than `UNCONDITIONAL_SLOTS` have been accepted.
//! 2. If still short of `MAX_QUESTIONS`, append the remaining candidates in order.
//!
//! A single sort cannot express this: the threshold depends on how many were
//! accepted so far, not on a property of the candidate.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::analysis::skills::{ExtractedSkills, SkillCategory};

pub const MAX_QUESTIONS: usize = 10;
const UNCONDITIONAL_SLOTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub question: String,
    pub category: String,
    pub tip: String,
}

#[derive(Debug, PartialEq, Eq)]
pub struct QuestionTemplate {
    pub question: &'static str,
    pub category: &'static str,
    pub tip: &'static str,
}

impl QuestionTemplate {
    fn to_question(&self) -> InterviewQuestion {
        InterviewQuestion {
            question: self.question.to_string(),
            category: self.category.to_string(),
            tip: self.tip.to_string(),
        }
    }
}

const fn q(question: &'static str, category: &'static str, tip: &'static str) -> QuestionTemplate {
    QuestionTemplate {
        question,
        category,
        tip,
    }
}

static OPENER: QuestionTemplate = q(
    "Tell me about yourself and your background.",
    "General",
    "Keep it under 2 minutes, focus on relevant experience",
);

static DSA_QUESTIONS: [QuestionTemplate; 2] = [
    q(
        "Explain the difference between BFS and DFS. When would you use each?",
        "DSA",
        "Mention time/space complexity and real-world use cases",
    ),
    q(
        "How would you optimize search in sorted data? What data structures would you consider?",
        "DSA",
        "Discuss binary search, BST, and hash maps",
    ),
];

static OOP_QUESTION: QuestionTemplate = q(
    "Explain the four pillars of OOP with examples from your projects.",
    "OOP",
    "Use concrete examples from your experience",
);

static DBMS_QUESTION: QuestionTemplate = q(
    "What is database normalization? Explain 1NF, 2NF, and 3NF.",
    "DBMS",
    "Use a practical example to illustrate each normal form",
);

static OS_QUESTION: QuestionTemplate = q(
    "Explain the difference between process and thread. What is a deadlock?",
    "OS",
    "Mention synchronization mechanisms and prevention strategies",
);

static JAVA_QUESTION: QuestionTemplate = q(
    "Explain the difference between HashMap and ConcurrentHashMap in Java.",
    "Java",
    "Discuss thread safety and performance implications",
);

static PYTHON_QUESTION: QuestionTemplate = q(
    "What are Python decorators and how have you used them?",
    "Python",
    "Provide a practical example from your experience",
);

static JAVASCRIPT_QUESTION: QuestionTemplate = q(
    "Explain the event loop in JavaScript. How does async/await work?",
    "JavaScript",
    "Discuss call stack, callback queue, and microtasks",
);

static REACT_QUESTIONS: [QuestionTemplate; 2] = [
    q(
        "Explain state management options in React. When would you use Context vs Redux?",
        "React",
        "Discuss trade-offs and your practical experience",
    ),
    q(
        "What are React hooks? Explain useEffect lifecycle behavior.",
        "React",
        "Mention dependency array and cleanup functions",
    ),
];

static NODE_QUESTION: QuestionTemplate = q(
    "How does Node.js handle concurrent requests being single-threaded?",
    "Node.js",
    "Discuss event loop, non-blocking I/O, and worker threads",
);

static REST_QUESTION: QuestionTemplate = q(
    "What are REST API best practices? How do you handle versioning?",
    "REST",
    "Mention HTTP methods, status codes, and idempotency",
);

static SQL_QUESTIONS: [QuestionTemplate; 2] = [
    q(
        "Explain indexing in databases. When does it help and when can it hurt performance?",
        "SQL",
        "Discuss B-tree indexes, composite indexes, and write overhead",
    ),
    q(
        "Write a SQL query to find the second highest salary in an employees table.",
        "SQL",
        "Consider edge cases like duplicates and NULL values",
    ),
];

static MONGO_QUESTION: QuestionTemplate = q(
    "When would you choose MongoDB over a relational database?",
    "MongoDB",
    "Discuss schema flexibility, scalability, and use cases",
);

static DOCKER_QUESTION: QuestionTemplate = q(
    "Explain the difference between Docker images and containers. What is a Dockerfile?",
    "Docker",
    "Discuss layers, caching, and best practices",
);

static KUBERNETES_QUESTION: QuestionTemplate = q(
    "What problems does Kubernetes solve? Explain pods and deployments.",
    "Kubernetes",
    "Discuss orchestration, scaling, and self-healing",
);

static CLOUD_QUESTION: QuestionTemplate = q(
    "Describe your experience with cloud services. How would you design a scalable architecture?",
    "Cloud",
    "Mention specific services you've used and why",
);

static CICD_QUESTION: QuestionTemplate = q(
    "Explain your CI/CD pipeline experience. What tools have you used?",
    "CI/CD",
    "Discuss automation, testing stages, and deployment strategies",
);

static TESTING_QUESTIONS: [QuestionTemplate; 2] = [
    q(
        "What is the testing pyramid? Explain unit, integration, and e2e testing.",
        "Testing",
        "Discuss trade-offs between different testing levels",
    ),
    q(
        "How do you decide what to test? What makes a good test?",
        "Testing",
        "Mention test coverage, maintainability, and edge cases",
    ),
];

static CLOSING_QUESTIONS: [QuestionTemplate; 2] = [
    q(
        "Tell me about a challenging project you worked on. How did you overcome obstacles?",
        "Behavioral",
        "Use STAR method: Situation, Task, Action, Result",
    ),
    q(
        "Where do you see yourself in 5 years?",
        "HR",
        "Show ambition while aligning with company growth",
    ),
];

/// Lowercased labels for one category, for substring gating.
fn lowered(skills: &ExtractedSkills, category: SkillCategory) -> Vec<String> {
    skills
        .skills_in(category)
        .iter()
        .map(|s| s.to_lowercase())
        .collect()
}

fn any_contains(labels: &[String], needles: &[&str]) -> bool {
    labels
        .iter()
        .any(|label| needles.iter().any(|n| label.contains(n)))
}

fn any_equals(labels: &[String], names: &[&str]) -> bool {
    labels.iter().any(|label| names.contains(&label.as_str()))
}

/// Ordered candidate list before selection.
pub fn candidate_questions(skills: &ExtractedSkills) -> Vec<&'static QuestionTemplate> {
    let mut candidates: Vec<&'static QuestionTemplate> = vec![&OPENER];

    if skills.has(SkillCategory::CoreCs) {
        let core = lowered(skills, SkillCategory::CoreCs);
        if any_contains(&core, &["dsa", "algorithm"]) {
            candidates.extend(DSA_QUESTIONS.iter());
        }
        if any_contains(&core, &["oop"]) {
            candidates.push(&OOP_QUESTION);
        }
        if any_contains(&core, &["dbms"]) {
            candidates.push(&DBMS_QUESTION);
        }
        if any_contains(&core, &["os"]) {
            candidates.push(&OS_QUESTION);
        }
    }

    if skills.has(SkillCategory::Languages) {
        let langs = lowered(skills, SkillCategory::Languages);
        if any_equals(&langs, &["java"]) {
            candidates.push(&JAVA_QUESTION);
        }
        if any_equals(&langs, &["python"]) {
            candidates.push(&PYTHON_QUESTION);
        }
        if any_equals(&langs, &["javascript", "typescript"]) {
            candidates.push(&JAVASCRIPT_QUESTION);
        }
    }

    if skills.has(SkillCategory::Web) {
        let web = lowered(skills, SkillCategory::Web);
        if any_contains(&web, &["react"]) {
            candidates.extend(REACT_QUESTIONS.iter());
        }
        if any_contains(&web, &["node"]) {
            candidates.push(&NODE_QUESTION);
        }
        if any_contains(&web, &["rest"]) {
            candidates.push(&REST_QUESTION);
        }
    }

    if skills.has(SkillCategory::Data) {
        let data = lowered(skills, SkillCategory::Data);
        if any_contains(&data, &["sql", "mysql", "postgres"]) {
            candidates.extend(SQL_QUESTIONS.iter());
        }
        if any_contains(&data, &["mongo"]) {
            candidates.push(&MONGO_QUESTION);
        }
    }

    if skills.has(SkillCategory::CloudDevOps) {
        let cloud = lowered(skills, SkillCategory::CloudDevOps);
        if any_contains(&cloud, &["docker"]) {
            candidates.push(&DOCKER_QUESTION);
        }
        if any_contains(&cloud, &["kubernetes", "k8s"]) {
            candidates.push(&KUBERNETES_QUESTION);
        }
        if any_contains(&cloud, &["aws", "azure", "gcp"]) {
            candidates.push(&CLOUD_QUESTION);
        }
        if any_contains(&cloud, &["ci/cd"]) {
            candidates.push(&CICD_QUESTION);
        }
    }

    if skills.has(SkillCategory::Testing) {
        candidates.extend(TESTING_QUESTIONS.iter());
    }

    candidates.extend(CLOSING_QUESTIONS.iter());
    candidates
}

/// Diversify-then-fill selection over an ordered candidate list.
pub fn select_questions(candidates: &[&QuestionTemplate]) -> Vec<InterviewQuestion> {
    let mut taken = vec![false; candidates.len()];
    let mut selected: Vec<usize> = Vec::with_capacity(MAX_QUESTIONS);
    let mut seen_categories: HashSet<&str> = HashSet::new();

    // Pass 1: category diversity, permissive for the first few slots
    for (idx, candidate) in candidates.iter().enumerate() {
        if selected.len() >= MAX_QUESTIONS {
            break;
        }
        if !seen_categories.contains(candidate.category) || selected.len() < UNCONDITIONAL_SLOTS {
            selected.push(idx);
            taken[idx] = true;
            seen_categories.insert(candidate.category);
        }
    }

    // Pass 2: fill from whatever pass 1 skipped
    for idx in 0..candidates.len() {
        if selected.len() >= MAX_QUESTIONS {
            break;
        }
        if !taken[idx] {
            selected.push(idx);
            taken[idx] = true;
        }
    }

    selected
        .into_iter()
        .map(|idx| candidates[idx].to_question())
        .collect()
}

pub fn generate_questions(skills: &ExtractedSkills) -> Vec<InterviewQuestion> {
    select_questions(&candidate_questions(skills))
}
