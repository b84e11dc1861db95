//! Roster row entity - one page of the mirrored database

/// A row of the roster database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow {
    /// Opaque page id, only used for deletion
    pub id: String,
    /// Content of the first fragment of the `id` column; `None` when the column is empty
    pub member_tag: Option<String>,
    /// Display name from the title column
    pub name: String,
    /// Option names of the `Tags` multi-select column
    pub tags: Vec<String>,
    /// Option name of the `JDC` select column
    pub status: Option<String>,
}

impl RosterRow {
    /// Create a row with only an id, tag and name
    pub fn new(id: impl Into<String>, member_tag: Option<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            member_tag,
            name: name.into(),
            tags: Vec::new(),
            status: None,
        }
    }

    /// Set the multi-select tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the status select value
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Recorded member tag, if any
    ///
    /// An empty fragment counts as no tag.
    #[inline]
    pub fn tag(&self) -> Option<&str> {
        self.member_tag.as_deref().filter(|tag| !tag.is_empty())
    }

    /// Fragment content exactly as stored, empty string included
    #[inline]
    pub fn stored_tag(&self) -> Option<&str> {
        self.member_tag.as_deref()
    }
}

/// Result of a full database query
#[derive(Debug, Clone, Default)]
pub struct RowSet {
    /// Decoded rows, in query order
    pub rows: Vec<RosterRow>,
}

impl RowSet {
    pub fn new(rows: Vec<RosterRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
