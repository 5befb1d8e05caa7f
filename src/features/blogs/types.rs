use serde::{Deserialize, Serialize};

/// Listing tabs. The query value doubles as the backend `category` filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlogCategory {
    #[default]
    All,
    Shared,
    Scheduled,
}

impl BlogCategory {
    pub const ALL: [BlogCategory; 3] = [
        BlogCategory::All,
        BlogCategory::Shared,
        BlogCategory::Scheduled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BlogCategory::All => "all",
            BlogCategory::Shared => "shared",
            BlogCategory::Scheduled => "scheduled",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BlogCategory::All => "All Blogs",
            BlogCategory::Shared => "Shared",
            BlogCategory::Scheduled => "Scheduled",
        }
    }

    /// A click on a different tab goes through the URL; the active tab refetches
    /// in place since the query does not change.
    pub fn click(self, clicked: BlogCategory) -> TabClick {
        if self == clicked {
            TabClick::Refresh(clicked)
        } else {
            TabClick::Navigate(clicked)
        }
    }

    /// Parses the `tab` query value; anything unknown falls back to `All`.
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(|tab| tab.trim().to_ascii_lowercase()).as_deref() {
            Some("shared") => BlogCategory::Shared,
            Some("scheduled") => BlogCategory::Scheduled,
            _ => BlogCategory::All,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabClick {
    Navigate(BlogCategory),
    Refresh(BlogCategory),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub brief: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub shared_on_x: bool,
    #[serde(default)]
    pub shared_on_linkedin: bool,
}

impl BlogSummary {
    /// Link target for the card. Post URLs come from third-party metadata, so
    /// anything but `http`/`https` becomes `#`.
    pub fn safe_url(&self) -> &str {
        self.url
            .as_deref()
            .map(str::trim)
            .filter(|url| has_web_scheme(url))
            .unwrap_or("#")
    }
}

fn has_web_scheme(url: &str) -> bool {
    url.split_once(':').is_some_and(|(scheme, rest)| {
        (scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https"))
            && rest.starts_with("//")
    })
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct BlogsResponse {
    #[serde(default)]
    pub blogs: Option<Vec<BlogSummary>>,
}
