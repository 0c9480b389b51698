use serde::{Deserialize, Serialize};

use crate::editor::{
    add_item, check_item_index, create, remove, remove_item, update, update_item, EditError,
    Entry, FieldUpdate, IdSource, SectionEditor, SubList,
};
use crate::models::resume::{EntryId, ExperienceEntry};

impl Entry for ExperienceEntry {
    fn id(&self) -> EntryId {
        self.id
    }

    fn blank(id: EntryId) -> Self {
        Self {
            id,
            job_title: String::new(),
            company: String::new(),
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            is_current_job: false,
            description: String::new(),
            achievements: vec![String::new()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum ExperienceField {
    JobTitle(String),
    Company(String),
    Location(String),
    StartDate(String),
    EndDate(String),
    /// Hides `end_date` while set; the stored value is kept.
    IsCurrentJob(bool),
    Description(String),
    Achievements(Vec<String>),
}

impl FieldUpdate<ExperienceEntry> for ExperienceField {
    fn apply_to(self, entry: &mut ExperienceEntry) {
        match self {
            ExperienceField::JobTitle(v) => entry.job_title = v,
            ExperienceField::Company(v) => entry.company = v,
            ExperienceField::Location(v) => entry.location = v,
            ExperienceField::StartDate(v) => entry.start_date = v,
            ExperienceField::EndDate(v) => entry.end_date = v,
            ExperienceField::IsCurrentJob(v) => entry.is_current_job = v,
            ExperienceField::Description(v) => entry.description = v,
            ExperienceField::Achievements(v) => entry.achievements = v,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Achievements;

impl SubList<ExperienceEntry> for Achievements {
    fn items<'a>(&self, entry: &'a ExperienceEntry) -> &'a Vec<String> {
        &entry.achievements
    }

    fn items_mut<'a>(&self, entry: &'a mut ExperienceEntry) -> &'a mut Vec<String> {
        &mut entry.achievements
    }
}

/// Whether the end date is offered for editing and shown in the preview.
pub fn shows_end_date(entry: &ExperienceEntry) -> bool {
    !entry.is_current_job
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ExperienceEdit {
    Create,
    Update { id: EntryId, change: ExperienceField },
    Remove { id: EntryId },
    AddAchievement { id: EntryId },
    UpdateAchievement { id: EntryId, index: usize, value: String },
    RemoveAchievement { id: EntryId, index: usize },
}

impl SectionEditor for ExperienceEdit {
    type Value = Vec<ExperienceEntry>;

    fn check(&self, current: &Self::Value) -> Result<(), EditError> {
        match self {
            ExperienceEdit::UpdateAchievement { id, index, .. } => {
                check_item_index(current, *id, Achievements, *index)
            }
            ExperienceEdit::Update {
                id,
                change: ExperienceField::EndDate(_),
            } => match current.iter().find(|e| e.id == *id) {
                Some(entry) if !shows_end_date(entry) => {
                    Err(EditError::EndDateHidden { entry_id: *id })
                }
                _ => Ok(()),
            },
            _ => Ok(()),
        }
    }

    fn apply(self, current: &Self::Value, ids: &mut dyn IdSource) -> Self::Value {
        match self {
            ExperienceEdit::Create => create(current, ids),
            ExperienceEdit::Update { id, change } => update(current, id, change),
            ExperienceEdit::Remove { id } => remove(current, id),
            ExperienceEdit::AddAchievement { id } => add_item(current, id, Achievements),
            ExperienceEdit::UpdateAchievement { id, index, value } => {
                update_item(current, id, Achievements, index, value)
            }
            ExperienceEdit::RemoveAchievement { id, index } => {
                remove_item(current, id, Achievements, index)
            }
        }
    }
}
