use serde::Serialize;

/// A block of page content returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageContent {
    pub content: String,
}

impl PageContent {
    fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }
}

/// Summary of all projects hosted in the portfolio.
///
/// Placeholder content until the portfolio is backed by a database.
pub fn home_page() -> PageContent {
    PageContent::new("Sample content for portfolio home page")
}

/// Detailed info about the site owner's skills, certificates and badges.
///
/// Placeholder content until the portfolio is backed by a database.
pub fn about_page() -> PageContent {
    PageContent::new("Sample content for site owner credentials")
}
