//! Resume model
//!
//! A resume carries a unique identifier, a full name, one value per
//! contact kind and one piece of content per section kind:
//! - `Text`: a single block of text (objective, personal summary)
//! - `List`: an ordered list of items (achievements, qualifications)
//!
//! Every contact and section kind has a persisted tag; [`Category`] is the
//! closed set of those tags.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::str::FromStr;
use uuid::Uuid;

/// Delimiter joining list items when a list section is stored as one value.
/// List items may not contain it.
pub const LIST_DELIMITER: &str = "\n";

/// Kinds of contact a resume can carry, at most one value each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContactType {
    Address,
    Phone,
    Skype,
    Mail,
    Linkedin,
    Github,
    Stackoverflow,
}

impl ContactType {
    /// Get the persisted tag of the contact kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactType::Address => "ADDRESS",
            ContactType::Phone => "PHONE",
            ContactType::Skype => "SKYPE",
            ContactType::Mail => "MAIL",
            ContactType::Linkedin => "LINKEDIN",
            ContactType::Github => "GITHUB",
            ContactType::Stackoverflow => "STACKOVERFLOW",
        }
    }

    /// Get all contact kinds
    pub fn all() -> &'static [ContactType] {
        &[
            ContactType::Address,
            ContactType::Phone,
            ContactType::Skype,
            ContactType::Mail,
            ContactType::Linkedin,
            ContactType::Github,
            ContactType::Stackoverflow,
        ]
    }
}

impl std::fmt::Display for ContactType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shape of the content stored under a section kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentShape {
    Text,
    List,
}

/// Kinds of section a resume can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SectionType {
    /// Desired position
    Objective,
    /// Personal qualities
    Personal,
    /// Achievements, one per item
    Achievement,
    /// Qualifications, one per item
    Qualifications,
}

impl SectionType {
    /// Get the persisted tag of the section kind
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Objective => "OBJECTIVE",
            SectionType::Personal => "PERSONAL",
            SectionType::Achievement => "ACHIEVEMENT",
            SectionType::Qualifications => "QUALIFICATIONS",
        }
    }

    /// Content shape this section kind holds
    pub fn shape(&self) -> ContentShape {
        match self {
            SectionType::Objective | SectionType::Personal => ContentShape::Text,
            SectionType::Achievement | SectionType::Qualifications => ContentShape::List,
        }
    }

    /// Get all section kinds
    pub fn all() -> &'static [SectionType] {
        &[
            SectionType::Objective,
            SectionType::Personal,
            SectionType::Achievement,
            SectionType::Qualifications,
        ]
    }
}

impl std::fmt::Display for SectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Content of a section: a single text block or an ordered list of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionContent {
    Text(String),
    List(Vec<String>),
}

impl SectionContent {
    pub fn shape(&self) -> ContentShape {
        match self {
            SectionContent::Text(_) => ContentShape::Text,
            SectionContent::List(_) => ContentShape::List,
        }
    }

    /// Encode the content as a single stored value
    pub fn encode(&self) -> String {
        match self {
            SectionContent::Text(text) => text.clone(),
            SectionContent::List(items) => items.join(LIST_DELIMITER),
        }
    }

    /// Decode a stored value into content of the given shape
    pub fn decode(shape: ContentShape, value: &str) -> Self {
        match shape {
            ContentShape::Text => SectionContent::Text(value.to_string()),
            ContentShape::List if value.is_empty() => SectionContent::List(Vec::new()),
            ContentShape::List => {
                SectionContent::List(value.split(LIST_DELIMITER).map(str::to_string).collect())
            }
        }
    }
}

/// A persisted type tag: either a contact kind or a section kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Contact(ContactType),
    Section(SectionType),
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Contact(kind) => kind.as_str(),
            Category::Section(kind) => kind.as_str(),
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ADDRESS" => Ok(Category::Contact(ContactType::Address)),
            "PHONE" => Ok(Category::Contact(ContactType::Phone)),
            "SKYPE" => Ok(Category::Contact(ContactType::Skype)),
            "MAIL" => Ok(Category::Contact(ContactType::Mail)),
            "LINKEDIN" => Ok(Category::Contact(ContactType::Linkedin)),
            "GITHUB" => Ok(Category::Contact(ContactType::Github)),
            "STACKOVERFLOW" => Ok(Category::Contact(ContactType::Stackoverflow)),
            "OBJECTIVE" => Ok(Category::Section(SectionType::Objective)),
            "PERSONAL" => Ok(Category::Section(SectionType::Personal)),
            "ACHIEVEMENT" => Ok(Category::Section(SectionType::Achievement)),
            "QUALIFICATIONS" => Ok(Category::Section(SectionType::Qualifications)),
            _ => Err(Error::UnknownCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A resume.
///
/// The identifier is fixed at construction; everything else can change.
/// Two resumes are equal when all of their fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    uuid: String,
    full_name: String,
    #[serde(default)]
    contacts: BTreeMap<ContactType, String>,
    #[serde(default)]
    sections: BTreeMap<SectionType, SectionContent>,
}

impl Resume {
    /// Create a resume with a freshly generated identifier
    pub fn new(full_name: impl Into<String>) -> Self {
        Self::with_uuid(Uuid::new_v4().to_string(), full_name)
    }

    /// Create a resume with a caller-supplied identifier
    pub fn with_uuid(uuid: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            full_name: full_name.into(),
            contacts: BTreeMap::new(),
            sections: BTreeMap::new(),
        }
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn set_full_name(&mut self, full_name: impl Into<String>) {
        self.full_name = full_name.into();
    }

    pub fn contacts(&self) -> &BTreeMap<ContactType, String> {
        &self.contacts
    }

    pub fn contact(&self, kind: ContactType) -> Option<&str> {
        self.contacts.get(&kind).map(String::as_str)
    }

    /// Set a contact, replacing any previous value of the same kind
    pub fn add_contact(&mut self, kind: ContactType, value: impl Into<String>) {
        self.contacts.insert(kind, value.into());
    }

    pub fn remove_contact(&mut self, kind: ContactType) -> Option<String> {
        self.contacts.remove(&kind)
    }

    pub fn sections(&self) -> &BTreeMap<SectionType, SectionContent> {
        &self.sections
    }

    pub fn section(&self, kind: SectionType) -> Option<&SectionContent> {
        self.sections.get(&kind)
    }

    /// Set a section, replacing any previous content of the same kind
    pub fn add_section(&mut self, kind: SectionType, content: SectionContent) {
        self.sections.insert(kind, content);
    }

    pub fn remove_section(&mut self, kind: SectionType) -> Option<SectionContent> {
        self.sections.remove(&kind)
    }

    /// Set a contact (builder style)
    pub fn with_contact(mut self, kind: ContactType, value: impl Into<String>) -> Self {
        self.add_contact(kind, value);
        self
    }

    /// Set a section (builder style)
    pub fn with_section(mut self, kind: SectionType, content: SectionContent) -> Self {
        self.add_section(kind, content);
        self
    }

    /// Store a value read back under a persisted category
    pub fn apply(&mut self, category: Category, value: &str) {
        match category {
            Category::Contact(kind) => self.add_contact(kind, value),
            Category::Section(kind) => {
                self.add_section(kind, SectionContent::decode(kind.shape(), value))
            }
        }
    }

    /// Check that the resume can be persisted and read back unchanged
    pub fn validate(&self) -> Result<()> {
        if self.uuid.is_empty() {
            return Err(Error::InvalidResume("empty uuid".to_string()));
        }

        for (kind, content) in &self.sections {
            if content.shape() != kind.shape() {
                return Err(Error::InvalidResume(format!(
                    "section {} holds {:?} content, expected {:?}",
                    kind,
                    content.shape(),
                    kind.shape()
                )));
            }

            if let SectionContent::List(items) = content {
                if items.iter().any(|item| item.contains(LIST_DELIMITER)) {
                    return Err(Error::InvalidResume(format!(
                        "section {} has an item containing a line break",
                        kind
                    )));
                }
                if items.len() == 1 && items[0].is_empty() {
                    return Err(Error::InvalidResume(format!(
                        "section {} has a single empty item",
                        kind
                    )));
                }
            }
        }

        Ok(())
    }

    /// Ordering used by sorted listings: full name, then identifier
    pub fn cmp_by_name(&self, other: &Self) -> Ordering {
        self.full_name
            .cmp(&other.full_name)
            .then_with(|| self.uuid.cmp(&other.uuid))
    }
}
