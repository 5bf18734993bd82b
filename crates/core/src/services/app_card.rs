use crate::error::{is_blank, Result};
use crate::html::render_meta_tags;
use crate::models::{AppCard, CardDefaults, MetaTag};

/// Service for app card rendering
///
/// This service holds the site-wide defaults and fills them into
/// cards before validation and rendering.
#[derive(Debug, Clone, Default)]
pub struct AppCardService {
    defaults: CardDefaults,
}

impl AppCardService {
    /// Create a new `AppCardService`
    #[must_use]
    pub fn new(defaults: CardDefaults) -> Self {
        Self { defaults }
    }

    /// Configured defaults
    #[must_use]
    pub fn defaults(&self) -> &CardDefaults {
        &self.defaults
    }

    /// Fill blank site username and country from the defaults
    #[must_use]
    pub fn apply_defaults(&self, mut card: AppCard) -> AppCard {
        if is_blank(&card.site_username) {
            if let Some(username) = &self.defaults.site_username {
                card.site_username.clone_from(username);
            }
        }

        if card.country.as_deref().map_or(true, is_blank) {
            if let Some(country) = &self.defaults.country {
                card.country = Some(country.clone());
            }
        }

        card
    }

    /// Validate a card after applying defaults
    pub fn validate(&self, card: AppCard) -> Result<()> {
        self.apply_defaults(card).validate()
    }

    /// Render a card into meta tags
    ///
    /// # Returns
    /// * `Ok(Vec<MetaTag>)` - Tags in output order
    /// * `Err(CardError::MissingField)` - A required field is blank even after defaults
    ///
    /// # Examples
    /// ```ignore
    /// let service = AppCardService::new(defaults);
    /// let tags = service.render(card)?;
    /// println!("Rendered {} tags", tags.len());
    /// ```
    pub fn render(&self, card: AppCard) -> Result<Vec<MetaTag>> {
        self.apply_defaults(card).render()
    }

    /// Render a card straight to `<meta>` elements
    pub fn render_html(&self, card: AppCard) -> Result<String> {
        let tags = self.render(card)?;
        Ok(render_meta_tags(&tags))
    }
}
