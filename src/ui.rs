//! Human-readable rendering of resumes

use crate::model::{Resume, SectionContent};
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
pub struct ResumeRow {
    #[tabled(rename = "UUID")]
    pub uuid: String,
    #[tabled(rename = "Full name")]
    pub full_name: String,
    #[tabled(rename = "Contacts")]
    pub contacts: usize,
    #[tabled(rename = "Sections")]
    pub sections: usize,
}

impl From<&Resume> for ResumeRow {
    fn from(resume: &Resume) -> Self {
        Self {
            uuid: resume.uuid().to_string(),
            full_name: resume.full_name().to_string(),
            contacts: resume.contacts().len(),
            sections: resume.sections().len(),
        }
    }
}

pub fn resume_table(resumes: &[Resume]) -> String {
    if resumes.is_empty() {
        return String::new();
    }

    let rows: Vec<ResumeRow> = resumes.iter().map(ResumeRow::from).collect();
    Table::new(&rows).with(Style::rounded()).to_string()
}

/// Multi-line description of one resume
pub fn describe(resume: &Resume) -> String {
    let mut out = format!("{} ({})\n", resume.full_name(), resume.uuid());

    for (kind, value) in resume.contacts() {
        out.push_str(&format!("  {}: {}\n", kind, value));
    }

    for (kind, content) in resume.sections() {
        match content {
            SectionContent::Text(text) => out.push_str(&format!("  {}: {}\n", kind, text)),
            SectionContent::List(items) => {
                out.push_str(&format!("  {}:\n", kind));
                for item in items {
                    out.push_str(&format!("    - {}\n", item));
                }
            }
        }
    }

    out
}
