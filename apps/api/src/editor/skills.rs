use serde::{Deserialize, Serialize};

use crate::editor::{IdSource, SectionEditor};
use crate::models::resume::SkillSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Technical,
    Soft,
    Languages,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Technical,
        SkillCategory::Soft,
        SkillCategory::Languages,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SkillCategory::Technical => "Technical Skills",
            SkillCategory::Soft => "Soft Skills",
            SkillCategory::Languages => "Languages",
        }
    }

    pub fn list<'a>(&self, skills: &'a SkillSet) -> &'a [String] {
        match self {
            SkillCategory::Technical => &skills.technical,
            SkillCategory::Soft => &skills.soft,
            SkillCategory::Languages => &skills.languages,
        }
    }

    fn list_mut<'a>(&self, skills: &'a mut SkillSet) -> &'a mut Vec<String> {
        match self {
            SkillCategory::Technical => &mut skills.technical,
            SkillCategory::Soft => &mut skills.soft,
            SkillCategory::Languages => &mut skills.languages,
        }
    }
}

/// Appends the trimmed skill. Blank input leaves the set unchanged.
pub fn add_skill(skills: &SkillSet, category: SkillCategory, value: &str) -> SkillSet {
    let mut next = skills.clone();
    let value = value.trim();
    if !value.is_empty() {
        category.list_mut(&mut next).push(value.to_string());
    }
    next
}

/// Drops the skill at `index`; later skills move down by one.
pub fn remove_skill(skills: &SkillSet, category: SkillCategory, index: usize) -> SkillSet {
    let mut next = skills.clone();
    let list = category.list_mut(&mut next);
    if index < list.len() {
        list.remove(index);
    }
    next
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SkillsEdit {
    AddSkill { category: SkillCategory, value: String },
    RemoveSkill { category: SkillCategory, index: usize },
}

impl SectionEditor for SkillsEdit {
    type Value = SkillSet;

    fn apply(self, current: &Self::Value, _ids: &mut dyn IdSource) -> Self::Value {
        match self {
            SkillsEdit::AddSkill { category, value } => add_skill(current, category, &value),
            SkillsEdit::RemoveSkill { category, index } => remove_skill(current, category, index),
        }
    }
}
