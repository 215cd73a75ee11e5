use serde::Serialize;
use serde_json::Value;

use super::fields::RawFields;
use super::{Entity, ValidationError};

/// An open source license.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct License {
    pub name: String,
    pub spdx_id: Option<String>,
}

impl Entity for License {
    const KIND: &'static str = "License";

    fn from_raw(raw: &Value) -> Result<Self, ValidationError> {
        let fields = RawFields::new(Self::KIND, raw)?;
        Ok(Self {
            name: fields.required_str("name")?,
            spdx_id: fields.optional_str("spdx_id")?,
        })
    }
}

/// An organization that maintains software or languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Organization {
    pub name: String,
    pub description: Option<String>,
    pub url: Option<String>,
}

impl Entity for Organization {
    const KIND: &'static str = "Organization";

    fn from_raw(raw: &Value) -> Result<Self, ValidationError> {
        let fields = RawFields::new(Self::KIND, raw)?;
        Ok(Self {
            name: fields.required_str("name")?,
            description: fields.optional_str("description")?,
            url: fields.optional_str("url")?,
        })
    }
}

/// A programming language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgrammingLanguage {
    pub name: String,
    pub url: String,
    /// License identifiers, in the order given.
    pub licenses: Vec<String>,
    pub description: Option<String>,
}

impl Entity for ProgrammingLanguage {
    const KIND: &'static str = "ProgrammingLanguage";

    fn from_raw(raw: &Value) -> Result<Self, ValidationError> {
        let fields = RawFields::new(Self::KIND, raw)?;
        Ok(Self {
            name: fields.required_str("name")?,
            url: fields.required_str("url")?,
            licenses: fields.str_list("licenses")?,
            description: fields.optional_str("description")?,
        })
    }
}

/// A node in the tree of software tool categories.
///
/// Not produced by the ingest pipeline yet; kept so category files can be
/// validated with the same rules as every other entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolCategory {
    pub name: String,
    pub parent: Option<String>,
    pub description: Option<String>,
}

impl Entity for ToolCategory {
    const KIND: &'static str = "ToolCategory";

    fn from_raw(raw: &Value) -> Result<Self, ValidationError> {
        let fields = RawFields::new(Self::KIND, raw)?;
        Ok(Self {
            name: fields.required_str("name")?,
            parent: fields.optional_str("parent")?,
            description: fields.optional_str("description")?,
        })
    }
}

/// A software tool.
///
/// `categories`, `languages`, `organizations` and `licenses` hold
/// identifiers of other entities. They are not checked for existence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SoftwareTool {
    pub name: String,
    pub categories: Vec<String>,
    pub languages: Vec<String>,
    pub organizations: Vec<String>,
    pub licenses: Vec<String>,
    pub description: Option<String>,
    pub url_website: Option<String>,
    pub url_sourcecode: Option<String>,
    pub url_docs: Option<String>,
}

impl Entity for SoftwareTool {
    const KIND: &'static str = "SoftwareTool";

    fn from_raw(raw: &Value) -> Result<Self, ValidationError> {
        let fields = RawFields::new(Self::KIND, raw)?;
        Ok(Self {
            name: fields.required_str("name")?,
            categories: fields.str_list("categories")?,
            languages: fields.str_list("languages")?,
            organizations: fields.str_list("organizations")?,
            licenses: fields.str_list("licenses")?,
            description: fields.optional_str("description")?,
            url_website: fields.optional_str("url_website")?,
            url_sourcecode: fields.optional_str("url_sourcecode")?,
            url_docs: fields.optional_str("url_docs")?,
        })
    }
}
