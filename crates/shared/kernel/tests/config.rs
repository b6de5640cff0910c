use hw_kernel::config::{ConfigError, load_embedded, load_embedded_with};
use hw_kernel::domain::config::SiteConfig;

const SITE: &str = r##"
[store]
url = "https://example.supabase.co"
anon_key = "anon"

[behavior]
reveal_delay_ms = 750

[[content.nav]]
label = "Services"
href = "#services"

[[content.faq]]
question = "Do you work remotely?"
answer = "Yes."
"##;

#[test]
fn embedded_toml_fills_defaults() {
    let cfg: SiteConfig = load_embedded(SITE).expect("embedded config");

    assert_eq!(cfg.store.url, "https://example.supabase.co");
    assert_eq!(cfg.store.table, "hw_contact_messages");
    assert_eq!(cfg.behavior.reveal_delay_ms, 750);
    assert_eq!(cfg.behavior.hero_delay_ms, 200);
    assert_eq!(cfg.content.nav[0].anchor(), Some("services"));
    assert_eq!(cfg.content.faq.len(), 1);
}

#[test]
fn explicit_overrides_win_over_embedded_values() {
    let overrides = [
        ("HW__STORE__TABLE".to_owned(), "staging_messages".to_owned()),
        ("HW__BEHAVIOR__HERO_DELAY_MS".to_owned(), "350".to_owned()),
    ];

    let cfg: SiteConfig = load_embedded_with(SITE, overrides).expect("overridden config");

    assert_eq!(cfg.store.table, "staging_messages");
    assert_eq!(cfg.behavior.hero_delay_ms, 350);
    assert_eq!(cfg.store.anon_key, "anon");
}

#[test]
fn numeric_looking_override_fills_a_string_field() {
    let overrides = [
        ("HW__STORE__TABLE".to_owned(), "2024".to_owned()),
        ("HW__CONTACT__RECAPTCHA_SITE_KEY".to_owned(), "6000".to_owned()),
    ];

    let cfg: SiteConfig = load_embedded_with(SITE, overrides).expect("overridden config");

    assert_eq!(cfg.store.table, "2024");
    assert_eq!(cfg.contact.recaptcha_site_key, "6000");
    assert_eq!(cfg.behavior.reveal_delay_ms, 750);
}

#[test]
fn malformed_toml_is_reported_with_context() {
    let err = load_embedded::<SiteConfig>("[store\nurl = ").unwrap_err();

    assert!(matches!(err, ConfigError::Config { .. }));
    assert!(err.to_string().contains("Failed to build config"));
}
