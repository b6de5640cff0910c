use hw_domain::config::{BehaviorConfig, BlockKind, ContactConfig, NavLink, SiteConfig, StoreConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let behavior = BehaviorConfig::default();
    assert!((behavior.scrolled_threshold - 100.0).abs() < f64::EPSILON);
    assert!((behavior.highlight_lookahead - 50.0).abs() < f64::EPSILON);
    assert_eq!(behavior.reveal_delay_ms, 1000);
    assert_eq!(behavior.hero_delay_ms, 200);

    let store = StoreConfig::default();
    assert_eq!(store.table, "hw_contact_messages");
    assert!(store.url.is_empty());

    assert_eq!(ContactConfig::default().fallback_email, "info@haywilson.com");
}

#[test]
fn site_config_deserializes() {
    let raw = json!({
        "store": { "url": "https://example.supabase.co", "anon_key": "k" },
        "behavior": { "scrolled_threshold": 120.0 },
        "content": {
            "nav": [{ "label": "Services", "href": "#services" }],
            "sections": [{
                "id": "services",
                "title": "Services",
                "blocks": [{ "id": "audit", "kind": "service_card", "title": "Audit" }]
            }],
            "reveals": [{ "id": "phone", "teaser": "Show phone" }]
        }
    });

    let cfg: SiteConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.store.url, "https://example.supabase.co");
    assert_eq!(cfg.store.table, "hw_contact_messages");
    assert!((cfg.behavior.scrolled_threshold - 120.0).abs() < f64::EPSILON);
    assert_eq!(cfg.behavior.reveal_delay_ms, 1000);
    assert_eq!(cfg.content.sections[0].blocks[0].kind, BlockKind::ServiceCard);
    assert!(cfg.content.reveals[0].content.is_none());
}

#[test]
fn cloned_config_is_copy_on_write() {
    let original = SiteConfig::default();
    let mut edited = original.clone();
    edited.contact.fallback_email = "desk@example.com".to_owned();

    assert_eq!(original.contact.fallback_email, "info@haywilson.com");
    assert_eq!(edited.contact.fallback_email, "desk@example.com");
}

#[test]
fn nav_link_anchor_strips_hash() {
    let anchor = NavLink { label: "About".to_owned(), href: "#about".to_owned() };
    let external = NavLink { label: "Blog".to_owned(), href: "/blog".to_owned() };
    let bare = NavLink { label: "Top".to_owned(), href: "#".to_owned() };

    assert_eq!(anchor.anchor(), Some("about"));
    assert_eq!(external.anchor(), None);
    assert_eq!(bare.anchor(), None);
    assert_eq!(BlockKind::ContactItem.class(), "contact-item");
}
