use cardmeta_core::AppCard;
use serde::{Deserialize, Serialize};

/// Input schema for `card_render_app` and `card_validate_app` tools
#[derive(Debug, Default, Deserialize, Serialize, schemars::JsonSchema)]
pub struct AppCardInput {
    #[schemars(
        description = "Twitter username of the site, e.g. \"acme\". Falls back to the configured default when omitted."
    )]
    #[serde(default)]
    pub site_username: Option<String>,

    #[schemars(description = "Numeric App Store id of the iPhone app (required)")]
    #[serde(default)]
    pub iphone: Option<String>,

    #[schemars(description = "Numeric App Store id of the iPad app (required)")]
    #[serde(default)]
    pub ipad: Option<String>,

    #[schemars(description = "Google Play package id, e.g. \"com.android.app\" (required)")]
    #[serde(default)]
    pub google_play: Option<String>,

    #[schemars(description = "Optional app description")]
    #[serde(default)]
    pub description: Option<String>,

    #[schemars(
        description = "Two-letter store country code, for apps not available in the US store"
    )]
    #[serde(default)]
    pub country: Option<String>,

    #[schemars(description = "Optional iPhone app name")]
    #[serde(default)]
    pub iphone_name: Option<String>,

    #[schemars(description = "Optional iPhone deep link URL")]
    #[serde(default)]
    pub iphone_url: Option<String>,

    #[schemars(description = "Optional iPad app name")]
    #[serde(default)]
    pub ipad_name: Option<String>,

    #[schemars(description = "Optional iPad deep link URL")]
    #[serde(default)]
    pub ipad_url: Option<String>,

    #[schemars(description = "Optional Google Play app name")]
    #[serde(default)]
    pub google_play_name: Option<String>,

    #[schemars(description = "Optional Google Play deep link URL")]
    #[serde(default)]
    pub google_play_url: Option<String>,
}

impl From<AppCardInput> for AppCard {
    fn from(input: AppCardInput) -> Self {
        Self {
            site_username: input.site_username.unwrap_or_default(),
            iphone: input.iphone.unwrap_or_default(),
            ipad: input.ipad.unwrap_or_default(),
            google_play: input.google_play.unwrap_or_default(),
            description: input.description,
            country: input.country,
            iphone_name: input.iphone_name,
            iphone_url: input.iphone_url,
            ipad_name: input.ipad_name,
            ipad_url: input.ipad_url,
            google_play_name: input.google_play_name,
            google_play_url: input.google_play_url,
        }
    }
}
