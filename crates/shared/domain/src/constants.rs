//! DOM identifiers, class names and colours shared by the controller and the renderer.

// Element ids
pub const NAVBAR_ID: &str = "navbar";
pub const NAV_MENU_ID: &str = "navMenu";
pub const MENU_TOGGLE_ID: &str = "mobileMenuToggle";
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const HOME_SECTION_ID: &str = "home";
pub const FAQ_SECTION_ID: &str = "faq";
pub const GALLERY_SECTION_ID: &str = "gallery";
pub const CONTACT_SECTION_ID: &str = "contact";

/// Ids the page renders itself; content ids must not reuse them. Form field ids live in `hw-page`.
pub const FIXED_IDS: [&str; 8] = [
    NAVBAR_ID,
    NAV_MENU_ID,
    MENU_TOGGLE_ID,
    CONTACT_FORM_ID,
    HOME_SECTION_ID,
    FAQ_SECTION_ID,
    GALLERY_SECTION_ID,
    CONTACT_SECTION_ID,
];

// Classes
pub const ACTIVE_CLASS: &str = "active";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const NAV_LINK_CLASS: &str = "nav-link";
pub const HERO_CONTENT_CLASS: &str = "hero-content";
pub const BLUR_TEXT_CLASS: &str = "blur-text";
pub const REVEALING_CLASS: &str = "revealing";
pub const REVEALED_CLASS: &str = "revealed";
pub const FAQ_ITEM_CLASS: &str = "faq-item";
pub const FAQ_QUESTION_CLASS: &str = "faq-question";

// Inline colours
pub const ERROR_BORDER: &str = "#ef4444";
pub const SUCCESS_BORDER: &str = "#10b981";
pub const DEFAULT_BORDER: &str = "var(--border-color)";
pub const HIGHLIGHT_COLOR: &str = "var(--primary-color)";

// Backend
pub const DEFAULT_MESSAGES_TABLE: &str = "hw_contact_messages";
pub const FALLBACK_EMAIL: &str = "info@haywilson.com";
