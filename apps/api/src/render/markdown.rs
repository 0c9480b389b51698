use crate::render::preview::{EducationItem, ExperienceItem, PreviewBlock, ProjectItem};

pub const LINE_SEPARATOR: &str = " | ";

/// Renders preview blocks as a Markdown document, in block order.
pub fn render_markdown(blocks: &[PreviewBlock]) -> String {
    let mut md = String::new();
    for block in blocks {
        match block {
            PreviewBlock::Name { text } => md.push_str(&format!("# {text}\n\n")),
            PreviewBlock::Contact { items } | PreviewBlock::Links { items } => {
                md.push_str(&items.join(LINE_SEPARATOR));
                md.push_str("\n\n");
            }
            PreviewBlock::Heading { text } => md.push_str(&format!("## {text}\n\n")),
            PreviewBlock::Summary { text } => md.push_str(&format!("{text}\n\n")),
            PreviewBlock::Experience(item) => push_experience(&mut md, item),
            PreviewBlock::Education(item) => push_education(&mut md, item),
            PreviewBlock::SkillLine { label, text } => {
                md.push_str(&format!("**{label}:** {text}\n\n"))
            }
            PreviewBlock::Project(item) => push_project(&mut md, item),
        }
    }
    md
}

fn push_experience(md: &mut String, item: &ExperienceItem) {
    md.push_str(&format!("### {} at {}\n", item.job_title, item.company));
    md.push_str(&format!("_{}_\n", item.date_range));
    if let Some(location) = &item.location {
        md.push_str(&format!("{location}\n"));
    }
    if let Some(description) = &item.description {
        md.push_str(&format!("\n{description}\n"));
    }
    push_bullets(md, &item.achievements);
    md.push('\n');
}

fn push_education(md: &mut String, item: &EducationItem) {
    md.push_str(&format!("### {}\n", item.degree));
    md.push_str(&format!("{}\n", item.institution));
    let details: Vec<String> = [
        item.location.clone(),
        item.graduation_date.clone(),
        item.gpa.as_ref().map(|gpa| format!("GPA: {gpa}")),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !details.is_empty() {
        md.push_str(&format!("{}\n", details.join(LINE_SEPARATOR)));
    }
    if let Some(honors) = &item.honors {
        md.push_str(&format!("{honors}\n"));
    }
    if let Some(coursework) = &item.coursework {
        md.push_str(&format!("**Relevant Coursework:** {coursework}\n"));
    }
    md.push('\n');
}

fn push_project(md: &mut String, item: &ProjectItem) {
    md.push_str(&format!("### {}\n", item.name));
    md.push_str(&format!("_{}_\n", item.date_range));
    if let Some(technologies) = &item.technologies {
        md.push_str(&format!("{technologies}\n"));
    }
    if let Some(description) = &item.description {
        md.push_str(&format!("\n{description}\n"));
    }
    push_bullets(md, &item.key_features);
    if !item.links.is_empty() {
        let links: Vec<String> = item
            .links
            .iter()
            .map(|link| format!("[{}]({})", link.label, link.url))
            .collect();
        md.push_str(&format!("\n{}\n", links.join(LINE_SEPARATOR)));
    }
    md.push('\n');
}

fn push_bullets(md: &mut String, items: &[String]) {
    if items.is_empty() {
        return;
    }
    md.push('\n');
    for item in items {
        md.push_str(&format!("- {item}\n"));
    }
}
