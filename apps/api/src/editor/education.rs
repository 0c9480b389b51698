use serde::{Deserialize, Serialize};

use crate::editor::{
    add_item, check_item_index, create, remove, remove_item, update, update_item, EditError,
    Entry, FieldUpdate, IdSource, SectionEditor, SubList,
};
use crate::models::resume::{deserialize_degree, Degree, EducationEntry, EntryId};

impl Entry for EducationEntry {
    fn id(&self) -> EntryId {
        self.id
    }

    fn blank(id: EntryId) -> Self {
        Self {
            id,
            degree: None,
            institution: String::new(),
            location: String::new(),
            graduation_date: String::new(),
            gpa: String::new(),
            relevant_coursework: vec![String::new()],
            honors: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum EducationField {
    Degree(#[serde(deserialize_with = "deserialize_degree")] Option<Degree>),
    Institution(String),
    Location(String),
    GraduationDate(String),
    Gpa(String),
    RelevantCoursework(Vec<String>),
    Honors(String),
}

impl FieldUpdate<EducationEntry> for EducationField {
    fn apply_to(self, entry: &mut EducationEntry) {
        match self {
            EducationField::Degree(v) => entry.degree = v,
            EducationField::Institution(v) => entry.institution = v,
            EducationField::Location(v) => entry.location = v,
            EducationField::GraduationDate(v) => entry.graduation_date = v,
            EducationField::Gpa(v) => entry.gpa = v,
            EducationField::RelevantCoursework(v) => entry.relevant_coursework = v,
            EducationField::Honors(v) => entry.honors = v,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Coursework;

impl SubList<EducationEntry> for Coursework {
    fn items<'a>(&self, entry: &'a EducationEntry) -> &'a Vec<String> {
        &entry.relevant_coursework
    }

    fn items_mut<'a>(&self, entry: &'a mut EducationEntry) -> &'a mut Vec<String> {
        &mut entry.relevant_coursework
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EducationEdit {
    Create,
    Update { id: EntryId, change: EducationField },
    Remove { id: EntryId },
    AddCourse { id: EntryId },
    UpdateCourse { id: EntryId, index: usize, value: String },
    RemoveCourse { id: EntryId, index: usize },
}

impl SectionEditor for EducationEdit {
    type Value = Vec<EducationEntry>;

    fn check(&self, current: &Self::Value) -> Result<(), EditError> {
        match self {
            EducationEdit::UpdateCourse { id, index, .. } => {
                check_item_index(current, *id, Coursework, *index)
            }
            _ => Ok(()),
        }
    }

    fn apply(self, current: &Self::Value, ids: &mut dyn IdSource) -> Self::Value {
        match self {
            EducationEdit::Create => create(current, ids),
            EducationEdit::Update { id, change } => update(current, id, change),
            EducationEdit::Remove { id } => remove(current, id),
            EducationEdit::AddCourse { id } => add_item(current, id, Coursework),
            EducationEdit::UpdateCourse { id, index, value } => {
                update_item(current, id, Coursework, index, value)
            }
            EducationEdit::RemoveCourse { id, index } => {
                remove_item(current, id, Coursework, index)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::SequentialIds;

    #[test]
    fn test_create_then_pick_degree() {
        let mut ids = SequentialIds::default();
        let entries = EducationEdit::Create.apply(&Vec::new(), &mut ids);
        assert_eq!(entries[0].degree, None);
        assert_eq!(entries[0].relevant_coursework, vec![String::new()]);

        let id = entries[0].id;
        let entries = EducationEdit::Update {
            id,
            change: EducationField::Degree(Some(Degree::Master)),
        }
        .apply(&entries, &mut ids);
        assert_eq!(entries[0].degree, Some(Degree::Master));
    }

    #[test]
    fn test_coursework_edits() {
        let mut ids = SequentialIds::default();
        let entries = EducationEdit::Create.apply(&Vec::new(), &mut ids);
        let id = entries[0].id;

        let entries = EducationEdit::UpdateCourse {
            id,
            index: 0,
            value: "Compilers".into(),
        }
        .apply(&entries, &mut ids);
        let entries = EducationEdit::AddCourse { id }.apply(&entries, &mut ids);
        let entries = EducationEdit::UpdateCourse {
            id,
            index: 1,
            value: "Operating Systems".into(),
        }
        .apply(&entries, &mut ids);
        assert_eq!(
            entries[0].relevant_coursework,
            vec!["Compilers", "Operating Systems"]
        );

        let entries = EducationEdit::RemoveCourse { id, index: 0 }.apply(&entries, &mut ids);
        assert_eq!(entries[0].relevant_coursework, vec!["Operating Systems"]);
    }

    #[test]
    fn test_degree_change_deserializes() {
        let mut ids = SequentialIds::default();
        let id = ids.next_id();
        let json = serde_json::json!({
            "op": "update",
            "id": id,
            "change": { "field": "degree", "value": "Associate Degree" }
        });
        let edit: EducationEdit = serde_json::from_value(json).unwrap();
        assert_eq!(
            edit,
            EducationEdit::Update {
                id,
                change: EducationField::Degree(Some(Degree::Associate))
            }
        );
    }

    #[test]
    fn test_blank_degree_change_clears_choice() {
        let mut ids = SequentialIds::default();
        let id = ids.next_id();
        let json = serde_json::json!({
            "op": "update",
            "id": id,
            "change": { "field": "degree", "value": "" }
        });
        let edit: EducationEdit = serde_json::from_value(json).unwrap();
        assert_eq!(
            edit,
            EducationEdit::Update {
                id,
                change: EducationField::Degree(None)
            }
        );
    }
}
