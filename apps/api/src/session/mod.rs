//! Resume session: owns the single `ResumeDocument` being edited and merges
//! section edits back into it.
//!
//! Every edit replaces exactly one section; the other four are carried over
//! unchanged. No validation happens here beyond the sub-list index check that
//! `EditCommand` runs before the editor.

pub mod handlers;
pub mod store;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::editor::education::EducationEdit;
use crate::editor::experience::ExperienceEdit;
use crate::editor::personal::PersonalField;
use crate::editor::projects::ProjectEdit;
use crate::editor::skills::SkillsEdit;
use crate::editor::{self, EditError, IdSource};
use crate::models::resume::{
    EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, ResumeDocument, SkillSet,
};

// ────────────────────────────────────────────────────────────────────────────
// Section replacement
// ────────────────────────────────────────────────────────────────────────────

/// A whole new value for one named section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "section", content = "value", rename_all = "camelCase")]
pub enum SectionUpdate {
    PersonalInfo(PersonalInfo),
    Experience(Vec<ExperienceEntry>),
    Education(Vec<EducationEntry>),
    Skills(SkillSet),
    Projects(Vec<ProjectEntry>),
}

impl SectionUpdate {
    pub fn section_name(&self) -> &'static str {
        match self {
            SectionUpdate::PersonalInfo(_) => "personalInfo",
            SectionUpdate::Experience(_) => "experience",
            SectionUpdate::Education(_) => "education",
            SectionUpdate::Skills(_) => "skills",
            SectionUpdate::Projects(_) => "projects",
        }
    }
}

/// Returns `doc` with only the named section replaced.
pub fn update_section(doc: &ResumeDocument, update: SectionUpdate) -> ResumeDocument {
    let mut next = doc.clone();
    match update {
        SectionUpdate::PersonalInfo(v) => next.personal_info = v,
        SectionUpdate::Experience(v) => next.experience = v,
        SectionUpdate::Education(v) => next.education = v,
        SectionUpdate::Skills(v) => next.skills = v,
        SectionUpdate::Projects(v) => next.projects = v,
    }
    next
}

// ────────────────────────────────────────────────────────────────────────────
// Edit commands
// ────────────────────────────────────────────────────────────────────────────

/// One local edit, addressed to the section whose editor handles it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "section", content = "edit", rename_all = "camelCase")]
pub enum EditCommand {
    PersonalInfo(PersonalField),
    Experience(ExperienceEdit),
    Education(EducationEdit),
    Skills(SkillsEdit),
    Projects(ProjectEdit),
}

/// Runs the section editor for `command` and merges its output into `doc`.
pub fn apply_edit(
    doc: &ResumeDocument,
    command: EditCommand,
    ids: &mut dyn IdSource,
) -> Result<ResumeDocument, EditError> {
    let mut merged = None;
    let mut on_update = |update: SectionUpdate| {
        debug!("Merging {} section", update.section_name());
        merged = Some(update_section(doc, update));
    };

    match command {
        EditCommand::PersonalInfo(change) => editor::run(change, &doc.personal_info, ids, |v| {
            on_update(SectionUpdate::PersonalInfo(v))
        })?,
        EditCommand::Experience(edit) => editor::run(edit, &doc.experience, ids, |v| {
            on_update(SectionUpdate::Experience(v))
        })?,
        EditCommand::Education(edit) => editor::run(edit, &doc.education, ids, |v| {
            on_update(SectionUpdate::Education(v))
        })?,
        EditCommand::Skills(edit) => editor::run(edit, &doc.skills, ids, |v| {
            on_update(SectionUpdate::Skills(v))
        })?,
        EditCommand::Projects(edit) => editor::run(edit, &doc.projects, ids, |v| {
            on_update(SectionUpdate::Projects(v))
        })?,
    }

    Ok(merged.unwrap_or_else(|| doc.clone()))
}

// ────────────────────────────────────────────────────────────────────────────
// Session
// ────────────────────────────────────────────────────────────────────────────

/// One editing session. Starts from the empty document; `revision` counts
/// accepted edits.
#[derive(Debug, Clone)]
pub struct ResumeSession {
    id: Uuid,
    document: ResumeDocument,
    revision: u64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    pub id: Uuid,
    pub revision: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub document: ResumeDocument,
}

impl ResumeSession {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            document: ResumeDocument::default(),
            revision: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn document(&self) -> &ResumeDocument {
        &self.document
    }

    pub fn update_section(&mut self, update: SectionUpdate) {
        let next = update_section(&self.document, update);
        self.replace(next);
    }

    pub fn apply(&mut self, command: EditCommand, ids: &mut dyn IdSource) -> Result<(), EditError> {
        let next = apply_edit(&self.document, command, ids)?;
        self.replace(next);
        Ok(())
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            id: self.id,
            revision: self.revision,
            created_at: self.created_at,
            updated_at: self.updated_at,
            document: self.document.clone(),
        }
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn replace(&mut self, next: ResumeDocument) {
        self.document = next;
        self.revision += 1;
        self.updated_at = Utc::now();
    }
}

impl Default for ResumeSession {
    fn default() -> Self {
        Self::new()
    }
}
