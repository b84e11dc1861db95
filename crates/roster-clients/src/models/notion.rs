//! Notion API models
//!
//! Read models mirror the database query response for the roster table.
//! Write models mirror the body of `POST /pages`.

use serde::{Deserialize, Serialize};

// ============================================================================
// Read models
// ============================================================================

/// Response of `POST /databases/{id}/query`
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseQueryModel {
    pub results: Vec<PageModel>,
}

/// One page (row) of the database
#[derive(Debug, Clone, Deserialize)]
pub struct PageModel {
    pub id: String,
    pub properties: PagePropertiesModel,
}

/// Columns of the roster table
#[derive(Debug, Clone, Deserialize)]
pub struct PagePropertiesModel {
    #[serde(rename = "Name")]
    pub name: TitlePropertyModel,
    pub id: RichTextPropertyModel,
    #[serde(rename = "Tags")]
    pub tags: MultiSelectPropertyModel,
    #[serde(rename = "JDC")]
    pub status: SelectPropertyModel,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TitlePropertyModel {
    pub title: Vec<RichTextModel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RichTextPropertyModel {
    pub rich_text: Vec<RichTextModel>,
}

/// A rich text fragment
#[derive(Debug, Clone, Deserialize)]
pub struct RichTextModel {
    #[serde(default)]
    pub plain_text: Option<String>,
    #[serde(default)]
    pub text: Option<TextModel>,
}

impl RichTextModel {
    /// Raw text content, falling back to the rendered plain text
    pub fn content(&self) -> Option<&str> {
        self.text
            .as_ref()
            .map(|t| t.content.as_str())
            .or(self.plain_text.as_deref())
    }

    /// Rendered plain text, falling back to the raw content
    pub fn display(&self) -> Option<&str> {
        self.plain_text
            .as_deref()
            .or_else(|| self.text.as_ref().map(|t| t.content.as_str()))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextModel {
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MultiSelectPropertyModel {
    pub multi_select: Vec<SelectOptionModel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectPropertyModel {
    /// `null` when no option is selected
    pub select: Option<SelectOptionModel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectOptionModel {
    pub name: String,
}

// ============================================================================
// Write models
// ============================================================================

/// Body of `POST /pages`
#[derive(Debug, Clone, Serialize)]
pub struct CreatePageRequest<'a> {
    pub parent: ParentModel<'a>,
    pub properties: NewPagePropertiesModel<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParentModel<'a> {
    pub database_id: &'a str,
}

/// Columns set on creation; every other column is left untouched
#[derive(Debug, Clone, Serialize)]
pub struct NewPagePropertiesModel<'a> {
    #[serde(rename = "Name")]
    pub name: NewTitleModel<'a>,
    pub id: NewRichTextModel<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewTitleModel<'a> {
    pub title: Vec<NewTextItem<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewRichTextModel<'a> {
    pub rich_text: Vec<NewTextItem<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewTextItem<'a> {
    pub text: NewTextContent<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewTextContent<'a> {
    pub content: &'a str,
}
