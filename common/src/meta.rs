use serde::Serialize;

pub const APP_TITLE: &str = "Flight CO2 Tracker";
pub const APP_DESCRIPTION: &str = "Interesting data about CO2 emissions caused by flights!";

/// Static document head information for a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: &'static str,
    pub description: &'static str,
}

/// One entry of the document head, in the shape the host framework consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum HeadEntry {
    Title {
        title: &'static str,
    },
    Meta {
        name: &'static str,
        content: &'static str,
    },
}

impl PageMetadata {
    /// Title first, then the description meta tag.
    pub fn head_entries(&self) -> Vec<HeadEntry> {
        vec![
            HeadEntry::Title { title: self.title },
            HeadEntry::Meta {
                name: "description",
                content: self.description,
            },
        ]
    }
}

/// Metadata shared by every page under the app layout.
pub fn app_metadata() -> PageMetadata {
    PageMetadata {
        title: APP_TITLE,
        description: APP_DESCRIPTION,
    }
}
