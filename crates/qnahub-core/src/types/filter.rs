//! Question listing filter and its query-string parsing helper.

use serde::{Deserialize, Serialize};

/// Filter applied when listing questions.
///
/// `category` matches exactly; `tags` matches any question whose tag set
/// intersects the given set. An empty filter matches every question.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionFilter {
    /// Exact category match, if set.
    pub category: Option<String>,
    /// Tags to intersect with; empty means no tag constraint.
    pub tags: Vec<String>,
}

impl QuestionFilter {
    /// Build a filter from raw query-string parts.
    ///
    /// `tags` arrives as a comma-separated list. Segments are trimmed and
    /// empty segments dropped, so `"algebra, ,geometry,"` yields
    /// `["algebra", "geometry"]`. A blank `category` is treated as absent.
    pub fn from_query_parts(category: Option<&str>, tags: Option<&str>) -> Self {
        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(String::from);

        let tags = tags
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Self { category, tags }
    }

    /// Whether this filter constrains the result set at all.
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.tags.is_empty()
    }
}
