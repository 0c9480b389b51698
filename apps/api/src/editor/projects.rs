use serde::{Deserialize, Serialize};

use crate::editor::{
    add_item, add_trimmed, check_item_index, create, remove, remove_item, update, update_item,
    EditError, Entry, FieldUpdate, IdSource, SectionEditor, SubList,
};
use crate::models::resume::{EntryId, ProjectEntry};

impl Entry for ProjectEntry {
    fn id(&self) -> EntryId {
        self.id
    }

    fn blank(id: EntryId) -> Self {
        Self {
            id,
            name: String::new(),
            description: String::new(),
            technologies: Vec::new(),
            live_url: String::new(),
            github_url: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            key_features: vec![String::new()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum ProjectField {
    Name(String),
    Description(String),
    Technologies(Vec<String>),
    LiveUrl(String),
    GithubUrl(String),
    StartDate(String),
    EndDate(String),
    KeyFeatures(Vec<String>),
}

impl FieldUpdate<ProjectEntry> for ProjectField {
    fn apply_to(self, entry: &mut ProjectEntry) {
        match self {
            ProjectField::Name(v) => entry.name = v,
            ProjectField::Description(v) => entry.description = v,
            ProjectField::Technologies(v) => entry.technologies = v,
            ProjectField::LiveUrl(v) => entry.live_url = v,
            ProjectField::GithubUrl(v) => entry.github_url = v,
            ProjectField::StartDate(v) => entry.start_date = v,
            ProjectField::EndDate(v) => entry.end_date = v,
            ProjectField::KeyFeatures(v) => entry.key_features = v,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Technologies;

impl SubList<ProjectEntry> for Technologies {
    fn items<'a>(&self, entry: &'a ProjectEntry) -> &'a Vec<String> {
        &entry.technologies
    }

    fn items_mut<'a>(&self, entry: &'a mut ProjectEntry) -> &'a mut Vec<String> {
        &mut entry.technologies
    }
}

#[derive(Debug, Clone, Copy)]
pub struct KeyFeatures;

impl SubList<ProjectEntry> for KeyFeatures {
    fn items<'a>(&self, entry: &'a ProjectEntry) -> &'a Vec<String> {
        &entry.key_features
    }

    fn items_mut<'a>(&self, entry: &'a mut ProjectEntry) -> &'a mut Vec<String> {
        &mut entry.key_features
    }
}

/// Same policy as skills: trimmed, blank input ignored.
pub fn add_technology(entries: &[ProjectEntry], id: EntryId, tech: &str) -> Vec<ProjectEntry> {
    add_trimmed(entries, id, Technologies, tech)
}

pub fn remove_technology(entries: &[ProjectEntry], id: EntryId, index: usize) -> Vec<ProjectEntry> {
    remove_item(entries, id, Technologies, index)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ProjectEdit {
    Create,
    Update { id: EntryId, change: ProjectField },
    Remove { id: EntryId },
    AddTechnology { id: EntryId, value: String },
    RemoveTechnology { id: EntryId, index: usize },
    AddFeature { id: EntryId },
    UpdateFeature { id: EntryId, index: usize, value: String },
    RemoveFeature { id: EntryId, index: usize },
}

impl SectionEditor for ProjectEdit {
    type Value = Vec<ProjectEntry>;

    fn check(&self, current: &Self::Value) -> Result<(), EditError> {
        match self {
            ProjectEdit::UpdateFeature { id, index, .. } => {
                check_item_index(current, *id, KeyFeatures, *index)
            }
            _ => Ok(()),
        }
    }

    fn apply(self, current: &Self::Value, ids: &mut dyn IdSource) -> Self::Value {
        match self {
            ProjectEdit::Create => create(current, ids),
            ProjectEdit::Update { id, change } => update(current, id, change),
            ProjectEdit::Remove { id } => remove(current, id),
            ProjectEdit::AddTechnology { id, value } => add_technology(current, id, &value),
            ProjectEdit::RemoveTechnology { id, index } => remove_technology(current, id, index),
            ProjectEdit::AddFeature { id } => add_item(current, id, KeyFeatures),
            ProjectEdit::UpdateFeature { id, index, value } => {
                update_item(current, id, KeyFeatures, index, value)
            }
            ProjectEdit::RemoveFeature { id, index } => {
                remove_item(current, id, KeyFeatures, index)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::SequentialIds;

    fn one_project() -> (Vec<ProjectEntry>, EntryId) {
        let mut ids = SequentialIds::default();
        let entries = ProjectEdit::Create.apply(&Vec::new(), &mut ids);
        let id = entries[0].id;
        (entries, id)
    }

    #[test]
    fn test_blank_project() {
        let (entries, _) = one_project();
        assert!(entries[0].technologies.is_empty());
        assert_eq!(entries[0].key_features, vec![String::new()]);
    }

    #[test]
    fn test_add_technology_trims_and_ignores_blank() {
        let (entries, id) = one_project();
        assert_eq!(add_technology(&entries, id, "  "), entries);
        let entries = add_technology(&entries, id, " React ");
        let entries = add_technology(&entries, id, "Node.js");
        assert_eq!(entries[0].technologies, vec!["React", "Node.js"]);
        let entries = remove_technology(&entries, id, 0);
        assert_eq!(entries[0].technologies, vec!["Node.js"]);
    }

    #[test]
    fn test_feature_edits_follow_position() {
        let (entries, id) = one_project();
        let mut ids = SequentialIds::default();
        let entries = ProjectEdit::AddFeature { id }.apply(&entries, &mut ids);
        let entries = ProjectEdit::UpdateFeature {
            id,
            index: 1,
            value: "Real-time chat".into(),
        }
        .apply(&entries, &mut ids);
        assert_eq!(entries[0].key_features, vec!["", "Real-time chat"]);

        let bad = ProjectEdit::UpdateFeature {
            id,
            index: 2,
            value: "x".into(),
        };
        assert!(bad.check(&entries).is_err());
    }

    #[test]
    fn test_update_url_fields() {
        let (entries, id) = one_project();
        let entries = update(
            &entries,
            id,
            ProjectField::GithubUrl("https://github.com/acme/shop".into()),
        );
        assert_eq!(entries[0].github_url, "https://github.com/acme/shop");
        assert!(entries[0].live_url.is_empty());
    }
}
