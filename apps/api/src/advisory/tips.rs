use serde::{Deserialize, Serialize};

/// The five editing panels, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    PersonalInfo,
    Experience,
    Education,
    Skills,
    Projects,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionGuide {
    pub section: Section,
    pub title: &'static str,
    pub description: &'static str,
    pub ats_tip: Option<&'static str>,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::PersonalInfo,
        Section::Experience,
        Section::Education,
        Section::Skills,
        Section::Projects,
    ];
}

pub fn guide_for(section: Section) -> SectionGuide {
    let (title, description, ats_tip) = match section {
        Section::PersonalInfo => (
            "Personal Information",
            "Enter your basic personal details that will appear on your resume",
            Some("Use a plain professional email and include your city so location filters match."),
        ),
        Section::Experience => (
            "Work Experience",
            "Add your professional work experience",
            Some("Start achievements with an action verb and include a number where you can."),
        ),
        Section::Education => (
            "Education",
            "Add your educational background",
            None,
        ),
        Section::Skills => (
            "Skills",
            "Add your technical and soft skills",
            Some("Include skills that match the job description exactly as written. Use industry-standard terms and avoid abbreviations when possible."),
        ),
        Section::Projects => (
            "Projects",
            "Showcase your personal and professional projects",
            None,
        ),
    };
    SectionGuide {
        section,
        title,
        description,
        ats_tip,
    }
}

pub fn all_guides() -> Vec<SectionGuide> {
    Section::ALL.into_iter().map(guide_for).collect()
}
