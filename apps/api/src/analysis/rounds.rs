//! Round mapping: predicts the ordered interview-round sequence for a size tier,
//! specialised by boolean signals derived from the extracted skills.

use serde::{Deserialize, Serialize};

use crate::analysis::company::SizeCategory;
use crate::analysis::skills::{ExtractedSkills, SkillCategory};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewRound {
    pub name: String,
    pub description: String,
    pub focus: Vec<String>,
    pub why: String,
    pub duration: String,
}

struct RoundTemplate {
    name: &'static str,
    description: &'static str,
    focus: &'static [&'static str],
    why: &'static str,
    duration: &'static str,
}

impl RoundTemplate {
    fn build(&self) -> InterviewRound {
        self.build_with_focus(self.focus)
    }

    fn build_with_focus(&self, focus: &[&str]) -> InterviewRound {
        InterviewRound {
            name: self.name.to_string(),
            description: self.description.to_string(),
            focus: focus.iter().map(|f| f.to_string()).collect(),
            why: self.why.to_string(),
            duration: self.duration.to_string(),
        }
    }
}

/// Skill signals consulted by the round builders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundSignals {
    pub has_dsa: bool,
    pub has_web: bool,
    pub has_react: bool,
    pub has_node: bool,
    pub has_cloud: bool,
    /// Computed but not consulted by any size tier.
    #[allow(dead_code)]
    pub has_data: bool,
}

impl RoundSignals {
    pub fn from_skills(skills: &ExtractedSkills) -> Self {
        let web = skills.skills_in(SkillCategory::Web);
        let web_mentions = |needle: &str| web.iter().any(|s| s.to_lowercase().contains(needle));

        Self {
            has_dsa: skills.has(SkillCategory::CoreCs)
                || skills.all_skills().any(|s| {
                    let s = s.to_lowercase();
                    s.contains("dsa") || s.contains("algorithm")
                }),
            has_web: skills.has(SkillCategory::Web),
            has_react: web_mentions("react"),
            has_node: web_mentions("node"),
            has_cloud: skills.has(SkillCategory::CloudDevOps),
            has_data: skills.has(SkillCategory::Data),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Enterprise
// ────────────────────────────────────────────────────────────────────────────

const ENTERPRISE_ONLINE_ASSESSMENT: RoundTemplate = RoundTemplate {
    name: "Round 1: Online Assessment",
    description: "Automated test covering DSA, aptitude, and basic coding",
    focus: &["DSA Problems (2-3)", "Aptitude Questions", "Time-bound Coding"],
    why: "Filters candidates at scale. Companies receive thousands of applications - this ensures only prepared candidates proceed.",
    duration: "60-90 minutes",
};

const ENTERPRISE_DSA_INTERVIEW: RoundTemplate = RoundTemplate {
    name: "Round 2: Technical Interview (DSA)",
    description: "Live coding round focused on data structures and algorithms",
    focus: &["Problem Solving", "Code Optimization", "Time/Space Analysis"],
    why: "Tests your ability to think under pressure and communicate your approach clearly while coding.",
    duration: "45-60 minutes",
};

const ENTERPRISE_CORE_CS: RoundTemplate = RoundTemplate {
    name: "Round 3: Core CS / System Design",
    description: "Deep dive into CS fundamentals or system design",
    focus: &["OS/DBMS/Networks", "System Design (Sr.)", "Architecture Patterns"],
    why: "Evaluates foundational knowledge that helps you understand how systems work at scale.",
    duration: "45-60 minutes",
};

const ENTERPRISE_STACK_DEEP_DIVE: RoundTemplate = RoundTemplate {
    name: "Round 3: Tech Stack Deep Dive",
    description: "Focused discussion on your technical expertise",
    focus: &["Frontend/Backend", "API Design", "Performance"],
    why: "Verifies that you can apply your skills to real-world scenarios the team faces.",
    duration: "45-60 minutes",
};

const ENTERPRISE_STACK_CLOUD_FOCUS: &[&str] =
    &["Cloud Architecture", "DevOps Practices", "Scalability"];

const ENTERPRISE_PROJECT_BEHAVIORAL: RoundTemplate = RoundTemplate {
    name: "Round 4: Project & Behavioral",
    description: "Discussion of past projects and behavioral assessment",
    focus: &["Project Deep Dive", "STAR Method Questions", "Team Collaboration"],
    why: "Assesses how you work in teams, handle challenges, and whether your experience aligns with role requirements.",
    duration: "45-60 minutes",
};

const ENTERPRISE_HR: RoundTemplate = RoundTemplate {
    name: "Round 5: HR / Hiring Manager",
    description: "Final round covering expectations and fit",
    focus: &["Salary Discussion", "Career Goals", "Company Culture Fit"],
    why: "Ensures mutual alignment on expectations, growth path, and cultural compatibility.",
    duration: "30-45 minutes",
};

// ────────────────────────────────────────────────────────────────────────────
// Mid-size
// ────────────────────────────────────────────────────────────────────────────

const MIDSIZE_SCREENING: RoundTemplate = RoundTemplate {
    name: "Round 1: Technical Screening",
    description: "Initial technical assessment - may be online or phone",
    focus: &["DSA Basics", "Tech Stack Questions", "Coding Exercise"],
    why: "Quick filter to assess baseline technical competency before investing more interview time.",
    duration: "45-60 minutes",
};

const MIDSIZE_PRACTICAL_CODING: RoundTemplate = RoundTemplate {
    name: "Round 2: Practical Coding",
    description: "Hands-on coding task or take-home assignment",
    focus: &["API Development", "Database Design", "Code Quality"],
    why: "Tests real-world coding skills - how you structure code, handle edge cases, and write maintainable software.",
    duration: "Take-home: 2-4 hours or Live: 60 minutes",
};

const MIDSIZE_PRACTICAL_REACT_FOCUS: &[&str] = &["React Component", "State Management", "UI/UX"];

const MIDSIZE_PROBLEM_SOLVING: RoundTemplate = RoundTemplate {
    name: "Round 2: Problem Solving",
    description: "Technical problem-solving round",
    focus: &["Algorithm Design", "Code Implementation", "Edge Cases"],
    why: "Evaluates problem-solving approach and ability to write clean, working code.",
    duration: "60 minutes",
};

const MIDSIZE_TECH_DISCUSSION: RoundTemplate = RoundTemplate {
    name: "Round 3: Technical Discussion",
    description: "Architecture and project discussion with team",
    focus: &["System Design", "Project Walkthrough", "Technical Decisions"],
    why: "Assesses depth of understanding and ability to make sound technical decisions.",
    duration: "45-60 minutes",
};

const MIDSIZE_CULTURE_HR: RoundTemplate = RoundTemplate {
    name: "Round 4: Culture Fit & HR",
    description: "Cultural alignment and offer discussion",
    focus: &["Team Dynamics", "Growth Mindset", "Expectations"],
    why: "Mid-size companies value culture highly - they want people who can grow with the company.",
    duration: "30-45 minutes",
};

// ────────────────────────────────────────────────────────────────────────────
// Startup
// ────────────────────────────────────────────────────────────────────────────

const STARTUP_INTRO: RoundTemplate = RoundTemplate {
    name: "Round 1: Intro + Technical Chat",
    description: "Casual technical discussion with founder/lead",
    focus: &["Background", "Tech Interest", "Problem Approach"],
    why: "Startups want to quickly gauge if you are a fit - both technically and personally.",
    duration: "30-45 minutes",
};

const STARTUP_PAIR_PROGRAMMING: RoundTemplate = RoundTemplate {
    name: "Round 2: Live Coding / Pair Programming",
    description: "Build something together with the team",
    focus: &["API Endpoint", "Database Query", "Debug Session"],
    why: "Simulates actual work environment - startups need people who can collaborate and ship fast.",
    duration: "60-90 minutes",
};

const STARTUP_PAIR_REACT_FOCUS: &[&str] =
    &["React Feature", "Component Design", "Real-time Collaboration"];

const STARTUP_PRACTICAL_TASK: RoundTemplate = RoundTemplate {
    name: "Round 2: Practical Coding Task",
    description: "Solve a real problem the company faces",
    focus: &["Practical Solution", "Code Quality", "Quick Iteration"],
    why: "Tests your ability to deliver value quickly - the core skill startups need.",
    duration: "60-90 minutes",
};

const STARTUP_CULTURE_VISION: RoundTemplate = RoundTemplate {
    name: "Round 3: Culture & Vision Fit",
    description: "Discussion with founders about vision alignment",
    focus: &["Startup Mindset", "Ownership", "Long-term Vision"],
    why: "At startups, every hire matters immensely. They need people who believe in the mission.",
    duration: "30-45 minutes",
};

// ────────────────────────────────────────────────────────────────────────────
// Unknown
// ────────────────────────────────────────────────────────────────────────────

const GENERIC_ROUNDS: [RoundTemplate; 3] = [
    RoundTemplate {
        name: "Round 1: Technical Screening",
        description: "Initial technical assessment",
        focus: &["DSA Basics", "Coding", "Tech Knowledge"],
        why: "Standard filter to assess technical baseline.",
        duration: "45-60 minutes",
    },
    RoundTemplate {
        name: "Round 2: Technical Deep Dive",
        description: "Detailed technical discussion",
        focus: &["Problem Solving", "Projects", "System Design"],
        why: "Evaluates depth of technical knowledge and experience.",
        duration: "45-60 minutes",
    },
    RoundTemplate {
        name: "Round 3: HR / Final",
        description: "Behavioral and offer discussion",
        focus: &["Behavioral Questions", "Expectations", "Culture Fit"],
        why: "Final assessment of overall fit and alignment.",
        duration: "30-45 minutes",
    },
];

/// Builds the expected round sequence; index 0 is the first round.
pub fn round_mapping(size: SizeCategory, skills: &ExtractedSkills) -> Vec<InterviewRound> {
    let signals = RoundSignals::from_skills(skills);
    match size {
        SizeCategory::Enterprise => enterprise_rounds(&signals),
        SizeCategory::MidSize => midsize_rounds(&signals),
        SizeCategory::Startup => startup_rounds(&signals),
        SizeCategory::Unknown => GENERIC_ROUNDS.iter().map(RoundTemplate::build).collect(),
    }
}

fn enterprise_rounds(signals: &RoundSignals) -> Vec<InterviewRound> {
    let mut rounds = vec![
        ENTERPRISE_ONLINE_ASSESSMENT.build(),
        ENTERPRISE_DSA_INTERVIEW.build(),
    ];

    // Both third rounds can apply, giving 5 or 6 rounds in total
    if signals.has_dsa || !signals.has_web {
        rounds.push(ENTERPRISE_CORE_CS.build());
    }
    if signals.has_web || signals.has_cloud {
        let round = if signals.has_web {
            ENTERPRISE_STACK_DEEP_DIVE.build()
        } else {
            ENTERPRISE_STACK_DEEP_DIVE.build_with_focus(ENTERPRISE_STACK_CLOUD_FOCUS)
        };
        rounds.push(round);
    }

    rounds.push(ENTERPRISE_PROJECT_BEHAVIORAL.build());
    rounds.push(ENTERPRISE_HR.build());
    rounds
}

fn midsize_rounds(signals: &RoundSignals) -> Vec<InterviewRound> {
    let second = if !signals.has_web {
        MIDSIZE_PROBLEM_SOLVING.build()
    } else if signals.has_react {
        MIDSIZE_PRACTICAL_CODING.build_with_focus(MIDSIZE_PRACTICAL_REACT_FOCUS)
    } else {
        MIDSIZE_PRACTICAL_CODING.build()
    };

    vec![
        MIDSIZE_SCREENING.build(),
        second,
        MIDSIZE_TECH_DISCUSSION.build(),
        MIDSIZE_CULTURE_HR.build(),
    ]
}

fn startup_rounds(signals: &RoundSignals) -> Vec<InterviewRound> {
    let second = if !(signals.has_web && (signals.has_react || signals.has_node)) {
        STARTUP_PRACTICAL_TASK.build()
    } else if signals.has_react {
        STARTUP_PAIR_PROGRAMMING.build_with_focus(STARTUP_PAIR_REACT_FOCUS)
    } else {
        STARTUP_PAIR_PROGRAMMING.build()
    };

    vec![STARTUP_INTRO.build(), second, STARTUP_CULTURE_VISION.build()]
}
