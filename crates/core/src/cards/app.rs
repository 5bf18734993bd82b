use crate::error::{is_blank, validate_required, CardField, Result};
use crate::models::{AppCard, MetaTag};
use tracing::debug;

/// Value of `twitter:card` for app cards
pub const CARD_TYPE: &str = "app";

pub const TAG_CARD: &str = "twitter:card";
pub const TAG_SITE: &str = "twitter:site";
pub const TAG_DESCRIPTION: &str = "twitter:description";
pub const TAG_COUNTRY: &str = "twitter:app:country";

/// Store platforms in output order
const PLATFORMS: [&str; 3] = ["iphone", "ipad", "googleplay"];

impl AppCard {
    /// Check the required fields.
    ///
    /// Fields are checked in the order Google Play, iPad, site username,
    /// iPhone; the first blank one is reported.
    pub fn validate(&self) -> Result<()> {
        validate_required(CardField::GooglePlay, &self.google_play)?;
        validate_required(CardField::IPad, &self.ipad)?;
        validate_required(CardField::SiteUsername, &self.site_username)?;
        validate_required(CardField::IPhone, &self.iphone)?;
        Ok(())
    }

    /// Render the card into an ordered list of meta tags
    ///
    /// # Returns
    /// * `Ok(Vec<MetaTag>)` - `twitter:card`, `twitter:site`, optional description
    ///   and country, then name/id/url for iPhone, iPad and Google Play
    /// * `Err(CardError::MissingField)` - A required field is blank; nothing is rendered
    pub fn render(&self) -> Result<Vec<MetaTag>> {
        if let Err(e) = self.validate() {
            debug!("App card rejected: {}", e);
            return Err(e);
        }

        let mut tags = vec![
            MetaTag::new(TAG_CARD, CARD_TYPE),
            MetaTag::new(TAG_SITE, self.site_username.as_str()),
        ];
        push_optional(&mut tags, TAG_DESCRIPTION, self.description.as_deref());
        push_optional(&mut tags, TAG_COUNTRY, self.country.as_deref());

        let listings = [
            (self.iphone_name.as_deref(), &self.iphone, self.iphone_url.as_deref()),
            (self.ipad_name.as_deref(), &self.ipad, self.ipad_url.as_deref()),
            (
                self.google_play_name.as_deref(),
                &self.google_play,
                self.google_play_url.as_deref(),
            ),
        ];
        for (platform, (name, id, url)) in PLATFORMS.iter().zip(listings) {
            push_optional(&mut tags, &format!("twitter:app:name:{platform}"), name);
            tags.push(MetaTag::new(format!("twitter:app:id:{platform}"), id.as_str()));
            push_optional(&mut tags, &format!("twitter:app:url:{platform}"), url);
        }

        debug!("Rendered app card with {} tags", tags.len());
        Ok(tags)
    }
}

fn push_optional(tags: &mut Vec<MetaTag>, name: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !is_blank(v)) {
        tags.push(MetaTag::new(name, value));
    }
}
