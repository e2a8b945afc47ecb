use validator::Validate;

use crate::error::ValidationError;

/// Number of images requested per page
pub const PAGE_SIZE: u32 = 20;

/// Shortest accepted search text, in characters
pub const MIN_QUERY_CHARS: u64 = 2;

/// Longest accepted search text, in characters
pub const MAX_QUERY_CHARS: u64 = 50;

/// Content filter level sent to the image service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SafeSearch {
    /// Minimal filtering (service default)
    #[default]
    Low,
    /// Stricter filtering
    High,
}

impl SafeSearch {
    /// Map the on/off toggle to a filter level
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            SafeSearch::High
        } else {
            SafeSearch::Low
        }
    }

    /// Whether the stricter level is selected
    pub fn is_enabled(&self) -> bool {
        matches!(self, SafeSearch::High)
    }

    /// Value of the `content_filter` request parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            SafeSearch::Low => "low",
            SafeSearch::High => "high",
        }
    }
}

/// Direction of a pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStep {
    Previous,
    Next,
}

impl PageStep {
    pub fn delta(&self) -> i64 {
        match self {
            PageStep::Previous => -1,
            PageStep::Next => 1,
        }
    }
}

/// One request's worth of search parameters.
///
/// A new value is built whenever the text, page or filter level changes;
/// existing values are never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    page: u32,
    page_size: u32,
    safe_search: SafeSearch,
}

impl SearchQuery {
    /// Create a query for the first page
    pub fn new(text: impl Into<String>, safe_search: SafeSearch) -> Self {
        Self {
            text: text.into(),
            page: 1,
            page_size: PAGE_SIZE,
            safe_search,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn safe_search(&self) -> SafeSearch {
        self.safe_search
    }

    /// Same text and filter, different page
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// Same text and page, different filter level
    pub fn with_safe_search(&self, safe_search: SafeSearch) -> Self {
        Self {
            safe_search,
            ..self.clone()
        }
    }
}

#[derive(Debug, Validate)]
struct QueryTextForm {
    #[validate(length(min = MIN_QUERY_CHARS, max = MAX_QUERY_CHARS))]
    text: String,
}

/// Check raw search text against the accepted length bounds.
///
/// Length is counted in characters and the text is taken as-is: no trimming,
/// so surrounding whitespace counts toward both bounds.
pub fn validate_query_text(raw_text: &str) -> Result<(), ValidationError> {
    let form = QueryTextForm {
        text: raw_text.to_string(),
    };

    if form.validate().is_ok() {
        return Ok(());
    }

    let actual = raw_text.chars().count() as u64;
    if actual < MIN_QUERY_CHARS {
        Err(ValidationError::TooShort {
            min: MIN_QUERY_CHARS,
            actual,
        })
    } else {
        Err(ValidationError::TooLong {
            max: MAX_QUERY_CHARS,
            actual,
        })
    }
}
