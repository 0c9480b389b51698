use serde::{Deserialize, Serialize};

use crate::editor::{IdSource, SectionEditor};
use crate::models::resume::PersonalInfo;

/// A single field replacement on the personal info panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum PersonalField {
    FullName(String),
    Email(String),
    Phone(String),
    Location(String),
    Website(String),
    Linkedin(String),
    ProfessionalSummary(String),
}

pub fn update_personal(info: &PersonalInfo, change: PersonalField) -> PersonalInfo {
    let mut next = info.clone();
    match change {
        PersonalField::FullName(v) => next.full_name = v,
        PersonalField::Email(v) => next.email = v,
        PersonalField::Phone(v) => next.phone = v,
        PersonalField::Location(v) => next.location = v,
        PersonalField::Website(v) => next.website = v,
        PersonalField::Linkedin(v) => next.linkedin = v,
        PersonalField::ProfessionalSummary(v) => next.professional_summary = v,
    }
    next
}

impl SectionEditor for PersonalField {
    type Value = PersonalInfo;

    fn apply(self, current: &Self::Value, _ids: &mut dyn IdSource) -> Self::Value {
        update_personal(current, self)
    }
}
