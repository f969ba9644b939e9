//! Plaintext report rendering for an analysis: per-section exports and the full report.

use std::fmt::Write;

use serde::Deserialize;

use crate::analysis::readiness::SkillConfidence;
use crate::models::analysis::Analysis;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportSection {
    #[default]
    Full,
    Plan,
    Checklist,
    Questions,
    Intel,
}

pub fn render(analysis: &Analysis, section: ExportSection) -> String {
    match section {
        ExportSection::Full => full_report(analysis),
        ExportSection::Plan => plan_text(analysis),
        ExportSection::Checklist => checklist_text(analysis),
        ExportSection::Questions => questions_text(analysis),
        ExportSection::Intel => intel_text(analysis),
    }
}

/// `placement-prep-<company slug>-<YYYY-MM-DD>.txt`
pub fn report_filename(analysis: &Analysis, date: chrono::NaiveDate) -> String {
    let slug: String = analysis
        .company
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    format!("placement-prep-{slug}-{}.txt", date.format("%Y-%m-%d"))
}

fn rule(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}

fn header(title: &str, analysis: &Analysis) -> String {
    format!(
        "{title}\n{}\n\nCompany: {}\nRole: {}\n",
        rule('=', 40),
        analysis.company,
        analysis.role
    )
}

// `write!` into a String cannot fail; results are discarded below.

pub fn plan_text(analysis: &Analysis) -> String {
    let mut text = header("7-Day Preparation Plan", analysis);
    let _ = writeln!(
        text,
        "Generated: {}\n",
        analysis.created_at.format("%Y-%m-%d")
    );
    for day in &analysis.plan {
        let _ = writeln!(text, "{}\n{}", day.day, rule('-', 30));
        for task in &day.tasks {
            let _ = writeln!(text, "• {task}");
        }
        text.push('\n');
    }
    text
}

pub fn checklist_text(analysis: &Analysis) -> String {
    let mut text = header("Round-wise Preparation Checklist", analysis);
    text.push('\n');
    for round in &analysis.checklist {
        let _ = writeln!(text, "{}\n{}", round.round, rule('-', 30));
        for task in &round.tasks {
            let _ = writeln!(text, "[ ] {task}");
        }
        text.push('\n');
    }
    text
}

pub fn questions_text(analysis: &Analysis) -> String {
    let mut text = header(
        &format!("{} Likely Interview Questions", analysis.questions.len()),
        analysis,
    );
    text.push('\n');
    for (idx, q) in analysis.questions.iter().enumerate() {
        let _ = writeln!(text, "{}. {}", idx + 1, q.question);
        let _ = writeln!(text, "   Category: {}", q.category);
        let _ = writeln!(text, "   Tip: {}\n", q.tip);
    }
    text
}

pub fn intel_text(analysis: &Analysis) -> String {
    let intel = &analysis.company_intel;
    let mut text = format!("COMPANY INTEL\n{}\n\n", rule('=', 40));
    let _ = writeln!(text, "Company: {}", intel.company);
    let _ = writeln!(text, "Industry: {}", intel.industry);
    let _ = writeln!(
        text,
        "Size Category: {} ({} employees)\n",
        intel.size.label, intel.size.range
    );

    let _ = writeln!(
        text,
        "Typical Hiring Focus: {}\n{}",
        intel.hiring_focus.title,
        rule('-', 30)
    );
    for point in &intel.hiring_focus.points {
        let _ = writeln!(text, "• {point}");
    }
    let _ = writeln!(text, "\nTip: {}\n", intel.hiring_focus.tip);

    let _ = writeln!(text, "EXPECTED INTERVIEW ROUNDS\n{}\n", rule('-', 30));
    for (idx, round) in intel.round_mapping.iter().enumerate() {
        let _ = writeln!(text, "{}. {}", idx + 1, round.name);
        let _ = writeln!(text, "   {}", round.description);
        let _ = writeln!(text, "   Duration: {}", round.duration);
        let _ = writeln!(text, "   Focus: {}", round.focus.join(", "));
        let _ = writeln!(text, "   Why: {}\n", round.why);
    }
    text
}

pub fn full_report(analysis: &Analysis) -> String {
    let mut text = format!("Placement Readiness Analysis Report\n{}\n\n", rule('=', 50));
    let _ = writeln!(text, "Company: {}", analysis.company);
    let _ = writeln!(text, "Role: {}", analysis.role);
    let _ = writeln!(text, "Analyzed: {}", analysis.created_at.format("%Y-%m-%d"));
    let _ = writeln!(text, "Base Readiness Score: {}/100", analysis.readiness_score);
    let _ = writeln!(text, "Adjusted Score: {}/100\n", analysis.effective_score());

    text.push_str(&intel_text(analysis));

    let _ = writeln!(text, "\nKEY SKILLS EXTRACTED\n{}\n", rule('-', 40));
    for group in &analysis.extracted_skills.skills {
        let _ = writeln!(text, "{}:", group.category);
        for skill in &group.skills {
            let status = match analysis.confidence_for(skill) {
                SkillConfidence::Know => "✓ I know",
                SkillConfidence::Practice => "? Need practice",
            };
            let _ = writeln!(text, "  • {skill} [{status}]");
        }
        text.push('\n');
    }

    let weak = analysis.weak_skills();
    if !weak.is_empty() {
        let _ = writeln!(text, "\nTOP WEAK AREAS TO FOCUS\n{}", rule('-', 40));
        for (idx, skill) in weak.iter().enumerate() {
            let _ = writeln!(text, "{}. {skill}", idx + 1);
        }
        text.push('\n');
    }

    text.push('\n');
    text.push_str(&plan_text(analysis));
    text.push('\n');
    text.push_str(&checklist_text(analysis));
    text.push('\n');
    text.push_str(&questions_text(analysis));
    text
}
