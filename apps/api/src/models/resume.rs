use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Identifier of an entry inside one of the document's ordered sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The whole resume being edited in one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: SkillSet,
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub linkedin: String,
    pub professional_summary: String,
}

/// A single position. `end_date` is kept while `is_current_job` is set;
/// it is only hidden from editing and from the preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: EntryId,
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub is_current_job: bool,
    pub description: String,
    pub achievements: Vec<String>,
}

/// Degree types offered by the education panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Degree {
    #[serde(rename = "Bachelor's Degree")]
    Bachelor,
    #[serde(rename = "Master's Degree")]
    Master,
    #[serde(rename = "PhD")]
    Doctorate,
    #[serde(rename = "Associate Degree")]
    Associate,
    #[serde(rename = "Certificate")]
    Certificate,
    #[serde(rename = "Diploma")]
    Diploma,
    #[serde(rename = "High School Diploma")]
    HighSchoolDiploma,
}

impl Degree {
    pub const ALL: [Degree; 7] = [
        Degree::Bachelor,
        Degree::Master,
        Degree::Doctorate,
        Degree::Associate,
        Degree::Certificate,
        Degree::Diploma,
        Degree::HighSchoolDiploma,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Degree::Bachelor => "Bachelor's Degree",
            Degree::Master => "Master's Degree",
            Degree::Doctorate => "PhD",
            Degree::Associate => "Associate Degree",
            Degree::Certificate => "Certificate",
            Degree::Diploma => "Diploma",
            Degree::HighSchoolDiploma => "High School Diploma",
        }
    }
}

/// Reads an optional degree label, treating `null`, a missing value and a
/// blank string (the panel's "Select degree type" option) as no choice.
pub fn deserialize_degree<'de, D>(deserializer: D) -> Result<Option<Degree>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(label) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let label = label.trim();
    if label.is_empty() {
        return Ok(None);
    }
    Degree::ALL
        .into_iter()
        .find(|degree| degree.label() == label)
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("unknown degree type `{label}`")))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: EntryId,
    /// `null` on the wire until a degree type is chosen.
    #[serde(default, deserialize_with = "deserialize_degree")]
    pub degree: Option<Degree>,
    pub institution: String,
    pub location: String,
    pub graduation_date: String,
    pub gpa: String,
    pub relevant_coursework: Vec<String>,
    pub honors: String,
}

/// Flat skill lists. Duplicates are allowed and insertion order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub languages: Vec<String>,
}

impl SkillSet {
    pub fn is_empty(&self) -> bool {
        self.technical.is_empty() && self.soft.is_empty() && self.languages.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub id: EntryId,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub live_url: String,
    pub github_url: String,
    pub start_date: String,
    pub end_date: String,
    pub key_features: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_degree_reads_as_unset() {
        let id = EntryId::from_uuid(Uuid::nil());
        let mut json = serde_json::json!({
            "id": id,
            "degree": "",
            "institution": "MIT",
            "location": "",
            "graduationDate": "",
            "gpa": "",
            "relevantCoursework": [],
            "honors": ""
        });
        let entry: EducationEntry = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(entry.degree, None);

        json["degree"] = serde_json::Value::Null;
        let entry: EducationEntry = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(entry.degree, None);

        json["degree"] = serde_json::json!("PhD");
        let entry: EducationEntry = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(entry.degree, Some(Degree::Doctorate));
        assert_eq!(serde_json::to_value(&entry).unwrap()["degree"], "PhD");

        json["degree"] = serde_json::json!("Bootcamp");
        assert!(serde_json::from_value::<EducationEntry>(json).is_err());
    }

    #[test]
    fn test_default_document_is_empty() {
        let doc = ResumeDocument::default();
        assert_eq!(doc.personal_info, PersonalInfo::default());
        assert!(doc.personal_info.full_name.is_empty());
        assert!(doc.experience.is_empty());
        assert!(doc.education.is_empty());
        assert!(doc.skills.is_empty());
        assert!(doc.projects.is_empty());
    }

    #[test]
    fn test_document_serializes_with_section_names() {
        let json = serde_json::to_value(ResumeDocument::default()).unwrap();
        assert!(json.get("personalInfo").is_some());
        assert!(json["personalInfo"].get("professionalSummary").is_some());
        assert!(json["skills"].get("languages").is_some());
        assert!(json["experience"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_degree_uses_panel_labels_on_the_wire() {
        let json = serde_json::to_string(&Degree::Bachelor).unwrap();
        assert_eq!(json, "\"Bachelor's Degree\"");
        let parsed: Degree = serde_json::from_str("\"PhD\"").unwrap();
        assert_eq!(parsed, Degree::Doctorate);
        for degree in Degree::ALL {
            let wire = serde_json::to_string(&degree).unwrap();
            assert_eq!(wire, format!("\"{}\"", degree.label()));
        }
    }

    #[test]
    fn test_entry_id_is_a_plain_string() {
        let uuid = Uuid::new_v4();
        let json = serde_json::to_value(EntryId::from_uuid(uuid)).unwrap();
        assert_eq!(json, serde_json::Value::String(uuid.to_string()));
    }
}
