use super::*;
use serde_json::json;

#[test]
fn ids_parse_back_case_insensitively() {
    for theme in Theme::ALL {
        assert_eq!(theme.id().parse::<Theme>().unwrap(), theme);
        assert_eq!(
            theme.display_name().parse::<Theme>().unwrap(),
            theme,
            "display names differ from ids only by case"
        );
    }
    assert!("neon".parse::<Theme>().is_err());
}

#[test]
fn serde_uses_lowercase_ids() {
    assert_eq!(serde_json::to_value(Theme::Ocean).unwrap(), json!("ocean"));
    let t: Theme = serde_json::from_value(json!("sunset")).unwrap();
    assert_eq!(t, Theme::Sunset);
}

#[test]
fn midnight_is_default_and_matches_catalog() {
    assert_eq!(Theme::default(), Theme::Midnight);
    let p = Theme::Midnight.palette();
    assert_eq!(p.dot_today.to_string(), "#FF6B35");
    assert_eq!(p.bg_gradient[1].to_string(), "#151518");
    assert_eq!(
        Theme::Purple.palette().dot_today,
        "#9b59b6".parse::<Rgba8>().unwrap()
    );
}

#[test]
fn every_palette_is_opaque_and_distinct() {
    let mut todays = Vec::new();
    for theme in Theme::ALL {
        let p = theme.palette();
        for c in [
            p.bg_primary,
            p.dot_completed,
            p.dot_remaining,
            p.dot_today,
            p.text_primary,
            p.text_secondary,
            p.accent,
        ] {
            assert_eq!(c.a, 255, "{theme}");
        }
        assert_eq!(p.bg_primary, p.bg_gradient[0]);
        todays.push(p.dot_today);
    }
    todays.dedup();
    assert_eq!(todays.len(), Theme::ALL.len());
}
