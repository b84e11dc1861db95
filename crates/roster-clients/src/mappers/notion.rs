//! Notion page <-> roster entity mappers

use roster_core::{DomainError, Member, RosterRow, RowSet};
use serde::Deserialize;

use crate::clients::NOTION_SERVICE;
use crate::models::{
    CreatePageRequest, DatabaseQueryModel, NewPagePropertiesModel, NewRichTextModel,
    NewTextContent, NewTextItem, NewTitleModel, PageModel, ParentModel,
};

/// Convert a page to a roster row
///
/// A page with an empty title is rejected: every row needs a display name.
impl TryFrom<PageModel> for RosterRow {
    type Error = DomainError;

    fn try_from(page: PageModel) -> Result<Self, Self::Error> {
        let props = page.properties;

        let name = props
            .name
            .title
            .first()
            .and_then(|fragment| fragment.display())
            .map(str::to_owned)
            .ok_or_else(|| {
                let message = format!("page {} has an empty Name title", page.id);
                DomainError::shape(NOTION_SERVICE, message)
            })?;

        let member_tag = props
            .id
            .rich_text
            .first()
            .and_then(|fragment| fragment.content())
            .map(str::to_owned);

        Ok(RosterRow {
            id: page.id,
            member_tag,
            name,
            tags: props.tags.multi_select.into_iter().map(|o| o.name).collect(),
            status: props.status.select.map(|o| o.name),
        })
    }
}

/// Decode a raw query response into typed rows
pub fn rows_from_query(raw: serde_json::Value) -> Result<RowSet, DomainError> {
    let query = DatabaseQueryModel::deserialize(raw)
        .map_err(|e| DomainError::shape(NOTION_SERVICE, e.to_string()))?;

    let rows = query
        .results
        .into_iter()
        .map(RosterRow::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RowSet::new(rows))
}

impl<'a> CreatePageRequest<'a> {
    /// Build the page body for a new member row
    pub fn for_member(database_id: &'a str, member: &'a Member) -> Self {
        Self {
            parent: ParentModel { database_id },
            properties: NewPagePropertiesModel {
                name: NewTitleModel {
                    title: vec![NewTextItem {
                        text: NewTextContent {
                            content: &member.name,
                        },
                    }],
                },
                id: NewRichTextModel {
                    rich_text: vec![NewTextItem {
                        text: NewTextContent {
                            content: &member.tag,
                        },
                    }],
                },
            },
        }
    }
}
