use serde::{Deserialize, Serialize};

use crate::advisory::tips::Section;
use crate::models::resume::{PersonalInfo, ResumeDocument};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    Complete,
    Partial,
    Missing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionHealth {
    pub section: Section,
    pub score: f64,
    pub entry_count: usize,
    pub status: SectionStatus,
    pub recommendations: Vec<String>,
}

/// Advisory only; nothing here blocks an edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletenessReport {
    pub overall_score: f64,
    pub sections: Vec<SectionHealth>,
    pub missing_sections: Vec<Section>,
}

const SECTION_WEIGHTS: &[(Section, f64)] = &[
    (Section::PersonalInfo, 0.25),
    (Section::Experience, 0.30),
    (Section::Education, 0.15),
    (Section::Skills, 0.15),
    (Section::Projects, 0.15),
];

/// The summary panel shows a character counter against this length.
pub const SUMMARY_TARGET_CHARS: usize = 500;

pub fn compute_completeness_report(doc: &ResumeDocument) -> CompletenessReport {
    let mut sections = Vec::new();
    let mut weighted_score_sum = 0.0;
    let mut missing_sections = Vec::new();

    for &(section, weight) in SECTION_WEIGHTS {
        let health = match section {
            Section::PersonalInfo => personal_health(&doc.personal_info),
            Section::Experience => entries_health(
                section,
                "Experience",
                doc.experience.iter().map(|e| {
                    missing_fields(&[
                        ("job title", &e.job_title),
                        ("company", &e.company),
                        ("start date", &e.start_date),
                    ])
                }),
            ),
            Section::Education => entries_health(
                section,
                "Education",
                doc.education.iter().map(|e| {
                    let mut missing = Vec::new();
                    if e.degree.is_none() {
                        missing.push("degree type");
                    }
                    missing.extend(missing_fields(&[("institution", &e.institution)]));
                    missing
                }),
            ),
            Section::Skills => {
                let count = doc.skills.technical.len()
                    + doc.skills.soft.len()
                    + doc.skills.languages.len();
                entries_health(section, "Skill", (0..count).map(|_| Vec::new()))
            }
            Section::Projects => entries_health(
                section,
                "Project",
                doc.projects.iter().map(|p| {
                    missing_fields(&[("project name", &p.name), ("description", &p.description)])
                }),
            ),
        };

        if health.status == SectionStatus::Missing {
            missing_sections.push(section);
        }
        weighted_score_sum += health.score * weight;
        sections.push(health);
    }

    let total_weight: f64 = SECTION_WEIGHTS.iter().map(|(_, w)| w).sum();
    let overall_score = if total_weight > 0.0 {
        (weighted_score_sum / total_weight).clamp(0.0, 1.0)
    } else {
        0.0
    };

    CompletenessReport {
        overall_score,
        sections,
        missing_sections,
    }
}

fn personal_health(info: &PersonalInfo) -> SectionHealth {
    let required = [
        ("full name", &info.full_name),
        ("email address", &info.email),
        ("phone number", &info.phone),
        ("location", &info.location),
        ("professional summary", &info.professional_summary),
    ];
    let missing = missing_fields(&required);
    let filled = required.len() - missing.len();
    let score = filled as f64 / required.len() as f64;

    let mut recommendations = Vec::new();
    if !missing.is_empty() {
        recommendations.push(format!("Fill in your {}", missing.join(", ")));
    }
    let summary_chars = info.professional_summary.chars().count();
    if summary_chars > SUMMARY_TARGET_CHARS {
        recommendations.push(format!(
            "Professional summary is {summary_chars}/{SUMMARY_TARGET_CHARS} characters; consider tightening it"
        ));
    }

    SectionHealth {
        section: Section::PersonalInfo,
        score,
        entry_count: filled,
        status: status_for(filled, score),
        recommendations,
    }
}

/// Scores a list section by the share of entries with every required field set.
fn entries_health<'a>(
    section: Section,
    label: &str,
    entries: impl Iterator<Item = Vec<&'a str>>,
) -> SectionHealth {
    let mut entry_count = 0usize;
    let mut complete = 0usize;
    let mut recommendations = Vec::new();

    for (index, missing) in entries.enumerate() {
        entry_count += 1;
        if missing.is_empty() {
            complete += 1;
        } else {
            recommendations.push(format!(
                "{label} #{} is missing: {}",
                index + 1,
                missing.join(", ")
            ));
        }
    }

    if entry_count == 0 {
        recommendations.push(format!(
            "Add at least one {} entry",
            label.to_lowercase()
        ));
        return SectionHealth {
            section,
            score: 0.0,
            entry_count,
            status: SectionStatus::Missing,
            recommendations,
        };
    }

    let score = complete as f64 / entry_count as f64;
    SectionHealth {
        section,
        score,
        entry_count,
        status: status_for(entry_count, score),
        recommendations,
    }
}

fn missing_fields<'a>(fields: &[(&'a str, &String)]) -> Vec<&'a str> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect()
}

fn status_for(count: usize, score: f64) -> SectionStatus {
    match (count, score) {
        (0, _) => SectionStatus::Missing,
        (_, s) if s >= 1.0 => SectionStatus::Complete,
        _ => SectionStatus::Partial,
    }
}
