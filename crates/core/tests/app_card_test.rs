use cardmeta_core::html::render_meta_tags;
use cardmeta_core::{AppCard, CardError, CardField, MetaTag};

const SITE_USERNAME: &str = "boxed";

fn card(site_username: &str, iphone: &str, ipad: &str, google_play: &str) -> AppCard {
    AppCard::new(site_username, iphone, ipad, google_play)
}

#[test]
fn test_missing_google_play() {
    let result = card(SITE_USERNAME, "307234931", "307234931", "").render();
    assert_eq!(result, Err(CardError::MissingField(CardField::GooglePlay)));
    assert_eq!(result.unwrap_err().field().as_str(), "GooglePlay");
}

#[test]
fn test_missing_ipad() {
    let result = card(SITE_USERNAME, "307234931", "", "com.android.app").render();
    assert_eq!(result, Err(CardError::MissingField(CardField::IPad)));
    assert_eq!(result.unwrap_err().field().as_str(), "IPad");
}

#[test]
fn test_missing_site_username() {
    let result = card("", "307234931", "307234931", "com.android.app").render();
    assert_eq!(result, Err(CardError::MissingField(CardField::SiteUsername)));
    assert_eq!(result.unwrap_err().field().as_str(), "SiteUsername");
}

#[test]
fn test_missing_iphone() {
    let result = card(SITE_USERNAME, "", "307234931", "com.android.app").render();
    assert_eq!(result, Err(CardError::MissingField(CardField::IPhone)));
    assert_eq!(result.unwrap_err().field().as_str(), "IPhone");
}

#[test]
fn test_whitespace_counts_as_missing() {
    let result = card(SITE_USERNAME, "307234931", "  ", "com.android.app").render();
    assert_eq!(result, Err(CardError::MissingField(CardField::IPad)));
}

#[test]
fn test_renders_card_type_tag() -> Result<(), Box<dyn std::error::Error>> {
    let tags = card(SITE_USERNAME, "307234931", "307234931", "com.android.app").render()?;
    assert!(tags.contains(&MetaTag::new("twitter:card", "app")));

    let html = render_meta_tags(&tags);
    assert!(html.contains("name=\"twitter:card\" content=\"app\""));

    Ok(())
}

#[test]
fn test_renders_all_required_tags() -> Result<(), Box<dyn std::error::Error>> {
    let tags = card("acme", "307234931", "307234931", "com.android.app").render()?;

    let pairs: Vec<(&str, &str)> = tags
        .iter()
        .map(|t| (t.name.as_str(), t.content.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("twitter:card", "app"),
            ("twitter:site", "acme"),
            ("twitter:app:id:iphone", "307234931"),
            ("twitter:app:id:ipad", "307234931"),
            ("twitter:app:id:googleplay", "com.android.app"),
        ]
    );

    Ok(())
}

#[test]
fn test_optional_tags_order() -> Result<(), Box<dyn std::error::Error>> {
    let card = AppCard {
        description: Some("Cannonball is the fun way to create and share stories".to_string()),
        country: Some("US".to_string()),
        iphone_name: Some("Cannonball".to_string()),
        iphone_url: Some("cannonball://poem/5149e249222f9e600a7540ef".to_string()),
        google_play_name: Some("Cannonball".to_string()),
        google_play_url: Some("http://cannonball.fabric.io/poem/5149e249222f9e600a7540ef".to_string()),
        ..card("acme", "929750075", "929750075", "io.fabric.samples.cannonball")
    };

    let names: Vec<String> = card.render()?.into_iter().map(|t| t.name).collect();
    assert_eq!(
        names,
        vec![
            "twitter:card",
            "twitter:site",
            "twitter:description",
            "twitter:app:country",
            "twitter:app:name:iphone",
            "twitter:app:id:iphone",
            "twitter:app:url:iphone",
            "twitter:app:id:ipad",
            "twitter:app:name:googleplay",
            "twitter:app:id:googleplay",
            "twitter:app:url:googleplay",
        ]
    );

    Ok(())
}

#[test]
fn test_render_is_deterministic() -> Result<(), Box<dyn std::error::Error>> {
    let input = card("acme", "307234931", "307234931", "com.android.app");

    let first = input.render()?;
    let second = input.render()?;
    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_card_deserializes_with_missing_fields() -> Result<(), Box<dyn std::error::Error>> {
    // Absent fields behave like empty ones
    let input: AppCard = serde_json::from_str(r#"{"site_username": "acme", "iphone": "1"}"#)?;
    assert_eq!(
        input.render(),
        Err(CardError::MissingField(CardField::GooglePlay))
    );

    Ok(())
}
