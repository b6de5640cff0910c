use chrono::Utc;
use hw_domain::config::{Block, BlockKind, FaqEntry, ImageEntry, RevealEntry, SectionContent, SiteConfig};
use hw_domain::constants::{DEFAULT_BORDER, ERROR_BORDER, HIGHLIGHT_COLOR, SUCCESS_BORDER};
use hw_page::form::Tone;
use hw_page::reveal::{BlockReveal, HeroState, RevealPhase};
use hw_page::{
    AnchorTarget, Effect, Field, MISSING_TOKEN_ALERT, PageController, ScrollSample,
    SectionBounds, UiEvent,
};
use proptest::prelude::*;
use std::time::Duration;

fn site() -> SiteConfig {
    let mut config = SiteConfig::default();
    let content = &mut config.content;
    content.sections.push(SectionContent {
        id: "services".to_owned(),
        title: "Services".to_owned(),
        intro: None,
        blocks: vec![Block {
            id: "bookkeeping".to_owned(),
            kind: BlockKind::ServiceCard,
            title: "Bookkeeping".to_owned(),
            body: String::new(),
        }],
    });
    content.faq = (1..=3)
        .map(|n| FaqEntry { question: format!("Question {n}"), answer: format!("Answer {n}") })
        .collect();
    content.gallery.push(ImageEntry {
        id: "office".to_owned(),
        src: "img/office.jpg".to_owned(),
        alt: "Office".to_owned(),
    });
    content.reveals.push(RevealEntry {
        id: "rates".to_owned(),
        teaser: "Click to see rates".to_owned(),
        content: Some("From $95/hour".to_owned()),
    });
    config
}

fn ready_page() -> PageController {
    let mut page = PageController::new(&site()).expect("valid site");
    page.dispatch(UiEvent::Ready);
    page
}

fn type_into(page: &mut PageController, field: Field, value: &str) {
    page.dispatch(UiEvent::FieldInput { field, value: value.to_owned() });
}

fn tone(page: &PageController, field: Field) -> Tone {
    page.state().form().field(field).tone
}

proptest! {
    #[test]
    fn navbar_is_scrolled_only_past_100(offset in 0.0f64..10_000.0) {
        let mut page = ready_page();
        page.dispatch(UiEvent::Scrolled(ScrollSample::at(offset)));
        prop_assert_eq!(page.state().nav().is_scrolled(), offset > 100.0);
    }
}

#[test]
fn scrolled_boundary() {
    let mut page = ready_page();
    page.dispatch(UiEvent::Scrolled(ScrollSample::at(100.0)));
    assert!(!page.state().nav().is_scrolled());
    page.dispatch(UiEvent::Scrolled(ScrollSample::at(100.5)));
    assert!(page.state().nav().is_scrolled());
    page.dispatch(UiEvent::Scrolled(ScrollSample::at(0.0)));
    assert!(!page.state().nav().is_scrolled());
}

#[test]
fn menu_toggled_twice_is_restored() {
    let mut page = ready_page();
    let closed = page.state().menu().bars();

    page.dispatch(UiEvent::MenuToggled);
    assert!(page.state().menu().is_open());
    assert_ne!(page.state().menu().bars(), closed);

    page.dispatch(UiEvent::MenuToggled);
    assert!(!page.state().menu().is_open());
    assert_eq!(page.state().menu().bars(), closed);
}

#[test]
fn nav_link_always_closes_the_menu() {
    let mut page = ready_page();
    page.dispatch(UiEvent::NavLinkClicked);
    assert!(!page.state().menu().is_open());

    page.dispatch(UiEvent::MenuToggled);
    page.dispatch(UiEvent::NavLinkClicked);
    assert!(!page.state().menu().is_open());
    assert_eq!(page.state().menu().bars()[1].opacity, "1");
}

#[test]
fn anchor_click_scrolls_below_navbar() {
    let mut page = ready_page();
    let effects = page.dispatch(UiEvent::AnchorClicked {
        href: "#contact".to_owned(),
        target: Some(AnchorTarget { top: 2000.0, navbar_height: 80.0 }),
    });
    assert_eq!(effects, vec![Effect::ScrollTo { top: 1920.0 }]);

    let missing =
        page.dispatch(UiEvent::AnchorClicked { href: "#nowhere".to_owned(), target: None });
    assert!(missing.is_empty());
}

#[test]
fn active_section_highlights_its_link() {
    let mut page = ready_page();
    let sample = |offset| ScrollSample {
        offset,
        navbar_height: 70.0,
        sections: vec![
            SectionBounds { id: "home".to_owned(), top: 0.0, height: 700.0 },
            SectionBounds { id: "services".to_owned(), top: 700.0, height: 900.0 },
        ],
    };

    page.dispatch(UiEvent::Scrolled(sample(600.0)));
    let nav = page.state().nav();
    assert_eq!(nav.active_section(), Some("services"));
    assert_eq!(nav.link_color("#services"), Some(HIGHLIGHT_COLOR));
    assert_eq!(nav.link_color("#home"), None);

    page.dispatch(UiEvent::Scrolled(sample(3000.0)));
    assert_eq!(page.state().nav().active_section(), None);
    assert_eq!(page.state().nav().link_color("#services"), None);
}

#[test]
fn required_field_feedback() {
    let mut page = ready_page();

    page.dispatch(UiEvent::FieldBlurred(Field::Name));
    assert_eq!(tone(&page, Field::Name).border_color(), ERROR_BORDER);

    type_into(&mut page, Field::Name, "Ann");
    assert_eq!(tone(&page, Field::Name).border_color(), SUCCESS_BORDER);

    page.dispatch(UiEvent::FieldBlurred(Field::Name));
    assert_eq!(tone(&page, Field::Name).border_color(), DEFAULT_BORDER);

    type_into(&mut page, Field::Name, "   ");
    assert_eq!(tone(&page, Field::Name), Tone::Default);
}

#[test]
fn email_field_feedback() {
    let mut page = ready_page();

    type_into(&mut page, Field::Email, "a@b.co");
    page.dispatch(UiEvent::FieldBlurred(Field::Email));
    assert_eq!(tone(&page, Field::Email), Tone::Success);

    type_into(&mut page, Field::Email, "not-an-email");
    page.dispatch(UiEvent::FieldBlurred(Field::Email));
    assert_eq!(tone(&page, Field::Email), Tone::Error);
}

#[test]
fn submit_without_token_only_alerts() {
    let mut page = ready_page();
    type_into(&mut page, Field::Name, "A");

    for token in [None, Some(String::new())] {
        let effects = page.dispatch(UiEvent::FormSubmitted { token, at: Utc::now() });
        assert_eq!(effects, vec![Effect::Alert(MISSING_TOKEN_ALERT.to_owned())]);
    }
    assert!(!page.state().form().is_busy());
}

#[test]
fn faq_is_an_accordion() {
    let mut page = ready_page();

    page.dispatch(UiEvent::FaqQuestionClicked(0));
    page.dispatch(UiEvent::FaqQuestionClicked(1));
    assert!(!page.state().faq().is_open(0));
    assert!(page.state().faq().is_open(1));

    page.dispatch(UiEvent::FaqQuestionClicked(1));
    assert_eq!(page.state().faq().open_item(), None);
}

#[test]
fn lazy_image_loads_once() {
    let mut page = ready_page();
    let image = |page: &PageController| page.state().image("office").cloned().expect("image");
    assert_eq!(image(&page).data_src(), Some("img/office.jpg"));

    page.dispatch(UiEvent::ImageIntersected("office".to_owned()));
    page.dispatch(UiEvent::ImageIntersected("office".to_owned()));

    assert_eq!(image(&page).src(), Some("img/office.jpg"));
    assert_eq!(image(&page).data_src(), None);
}

#[test]
fn blocks_reveal_once() {
    let mut page = ready_page();
    assert_eq!(page.state().block("bookkeeping"), BlockReveal::Hidden);

    page.dispatch(UiEvent::BlockIntersected("bookkeeping".to_owned()));
    page.dispatch(UiEvent::BlockIntersected("bookkeeping".to_owned()));
    assert_eq!(page.state().block("bookkeeping"), BlockReveal::Visible);
}

#[test]
fn blur_text_reveals_after_delay() {
    let mut page = ready_page();
    let phase = |page: &PageController| page.state().blur_text("rates").expect("reveal").phase();

    let effects = page.dispatch(UiEvent::BlurTextClicked("rates".to_owned()));
    assert_eq!(phase(&page), RevealPhase::Revealing);
    assert_eq!(
        effects,
        vec![Effect::Schedule {
            delay: Duration::from_millis(1000),
            event: UiEvent::BlurTextTimerElapsed("rates".to_owned()),
        }]
    );

    assert!(page.dispatch(UiEvent::BlurTextClicked("rates".to_owned())).is_empty());
    assert_eq!(phase(&page), RevealPhase::Revealing);

    page.dispatch(UiEvent::BlurTextTimerElapsed("rates".to_owned()));
    assert_eq!(phase(&page), RevealPhase::Revealed);
    assert_eq!(page.state().blur_text("rates").expect("reveal").text(), "From $95/hour");

    assert!(page.dispatch(UiEvent::BlurTextClicked("rates".to_owned())).is_empty());
}

#[test]
fn hero_fades_in_after_ready() {
    let mut page = PageController::new(&site()).expect("valid site");
    let effects = page.dispatch(UiEvent::Ready);

    assert_eq!(page.state().hero(), HeroState::Hidden);
    assert_eq!(
        effects,
        vec![Effect::Schedule { delay: Duration::from_millis(200), event: UiEvent::HeroTimerElapsed }]
    );

    page.dispatch(UiEvent::HeroTimerElapsed);
    assert_eq!(page.state().hero(), HeroState::Shown);
}
