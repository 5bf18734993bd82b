use serde::{Deserialize, Serialize};

/// A single `<meta name=".." content="..">` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaTag {
    pub name: String,
    pub content: String,
}

impl MetaTag {
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Input for a Twitter App Card
///
/// The four id fields are required; everything else is emitted only when set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppCard {
    /// Twitter handle of the site owner
    #[serde(default)]
    pub site_username: String,

    /// App Store id of the iPhone app
    #[serde(default)]
    pub iphone: String,

    /// App Store id of the iPad app
    #[serde(default)]
    pub ipad: String,

    /// Google Play package id
    #[serde(default)]
    pub google_play: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Two-letter store country code, for apps not in the US store
    #[serde(default)]
    pub country: Option<String>,

    #[serde(default)]
    pub iphone_name: Option<String>,
    #[serde(default)]
    pub iphone_url: Option<String>,
    #[serde(default)]
    pub ipad_name: Option<String>,
    #[serde(default)]
    pub ipad_url: Option<String>,
    #[serde(default)]
    pub google_play_name: Option<String>,
    #[serde(default)]
    pub google_play_url: Option<String>,
}

impl AppCard {
    /// Create a card with the required fields set
    #[must_use]
    pub fn new(
        site_username: impl Into<String>,
        iphone: impl Into<String>,
        ipad: impl Into<String>,
        google_play: impl Into<String>,
    ) -> Self {
        Self {
            site_username: site_username.into(),
            iphone: iphone.into(),
            ipad: ipad.into(),
            google_play: google_play.into(),
            ..Self::default()
        }
    }
}

/// Site-wide values applied to cards that leave them blank
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefaults {
    /// Site username used when a card does not name one
    #[serde(default)]
    pub site_username: Option<String>,

    /// Store country code used when a card does not name one
    #[serde(default)]
    pub country: Option<String>,
}
