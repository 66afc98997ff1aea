//! End-to-end gallery behaviour through the public API.
//!
//! A small in-memory page stands in for the browser: it tracks the overlay's
//! visibility, the body scroll lock, focus, and the queue of pending async
//! callbacks (image loads, animation frames, close timers) so tests can fire
//! them in any order.

use gallery_lightbox::config::{GalleryConfig, NavConfig};
use gallery_lightbox::input::{ClickTarget, InputEvent, Key, Point, Routed};
use gallery_lightbox::nav::MobileMenu;
use gallery_lightbox::surface::{
    CloseToken, ElementId, FocusTarget, ImageRequest, LoadToken, SlideView,
};
use gallery_lightbox::{Gallery, InitStatus, Phase, Surface};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

const PAYLOAD: &str = r#"{
    "title": "Weddings",
    "items": [
        {"full": "a.jpg", "alt": "A"},
        {"full": "b.jpg", "alt": "B"},
        {"src":  "c.jpg", "thumb": "thumbs/c.jpg", "alt": "C"},
        {"alt": "no url"}
    ]
}"#;

#[derive(Default)]
struct Page {
    visible: bool,
    scroll_locked: bool,
    focused: Option<ElementId>,
    close_button_focused: bool,
    detached: Vec<ElementId>,
    caption: String,
    counter: String,
    loads: Vec<ImageRequest>,
    frames: usize,
    timers: Vec<CloseToken>,
    hides: usize,
    restores: usize,
}

impl Surface for Page {
    fn active_element(&self) -> Option<ElementId> {
        self.focused
    }

    fn is_attached(&self, element: ElementId) -> bool {
        !self.detached.contains(&element)
    }

    fn focus(&mut self, target: FocusTarget) {
        match target {
            FocusTarget::CloseButton => self.close_button_focused = true,
            FocusTarget::Element(el) => {
                self.focused = Some(el);
                self.close_button_focused = false;
                self.restores += 1;
            }
        }
    }

    fn set_scroll_lock(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn set_visible(&mut self, visible: bool) {
        if !visible {
            self.hides += 1;
        }
        self.visible = visible;
    }

    fn set_open_class(&mut self, _open: bool) {}

    fn show_slide(&mut self, view: &SlideView<'_>) {
        self.caption = view.caption.to_string();
        self.counter = view.counter();
    }

    fn set_loading(&mut self, _loading: bool) {}

    fn set_portrait(&mut self, _portrait: bool) {}

    fn load_image(&mut self, request: ImageRequest) {
        self.loads.push(request);
    }

    fn preload(&mut self, _url: &str) {}

    fn request_frame(&mut self) {
        self.frames += 1;
    }

    fn schedule_close(&mut self, delay: Duration, token: CloseToken) {
        assert_eq!(delay, Duration::from_millis(170));
        self.timers.push(token);
    }
}

type TestGallery = Gallery<Page, Rc<RefCell<MobileMenu>>>;

fn setup() -> (TestGallery, Rc<RefCell<MobileMenu>>) {
    let menu = Rc::new(RefCell::new(MobileMenu::new(&NavConfig::default(), 800)));
    let mut page = Page::default();
    page.focused = Some(ElementId(1));
    let mut gallery = Gallery::new(GalleryConfig::default(), page, Rc::clone(&menu));
    assert_eq!(gallery.init(PAYLOAD), InitStatus::Ready { count: 3 });
    (gallery, menu)
}

fn click(gallery: &mut TestGallery, target: ClickTarget) -> Option<Routed> {
    gallery.handle(&InputEvent::Click(target))
}

fn page(gallery: &TestGallery) -> &Page {
    gallery.lightbox().surface()
}

fn last_load(gallery: &TestGallery) -> (String, LoadToken) {
    let req = page(gallery).loads.last().unwrap();
    (req.url.clone(), req.token)
}

#[test]
fn open_navigate_close_round_trip() {
    let (mut gallery, _menu) = setup();

    assert_eq!(
        click(&mut gallery, ClickTarget::Thumbnail { index: 2 }),
        Some(Routed::Opened(2))
    );
    assert!(gallery.frame());
    assert_eq!(gallery.lightbox().phase(), Phase::Open);
    assert!(page(&gallery).close_button_focused);
    assert_eq!(page(&gallery).counter, "3 / 3");
    assert_eq!(last_load(&gallery).0, "c.jpg");

    gallery.handle(&InputEvent::KeyDown(Key::ArrowRight));
    assert_eq!(page(&gallery).counter, "1 / 3");
    assert_eq!(page(&gallery).caption, "A");

    gallery.handle(&InputEvent::KeyDown(Key::ArrowLeft));
    assert_eq!(gallery.lightbox().index(), 2);

    assert_eq!(
        gallery.handle(&InputEvent::KeyDown(Key::Escape)),
        Some(Routed::Close)
    );
    assert!(!page(&gallery).scroll_locked);
    let token = *page(&gallery).timers.last().unwrap();
    assert!(gallery.close_elapsed(token));

    let p = page(&gallery);
    assert!(!p.visible);
    assert_eq!(p.focused, Some(ElementId(1)));
    assert_eq!(p.restores, 1);
}

#[test]
fn abc_wraparound() {
    let (mut gallery, _menu) = setup();
    gallery.lightbox_mut().open_at(0);
    assert_eq!(gallery.lightbox_mut().previous(), Some(2));
    gallery.lightbox_mut().open_at(2);
    assert_eq!(gallery.lightbox_mut().next(), Some(0));
}

#[test]
fn double_close_hides_once() {
    let (mut gallery, _menu) = setup();
    click(&mut gallery, ClickTarget::Thumbnail { index: 0 });
    gallery.frame();

    assert_eq!(click(&mut gallery, ClickTarget::CloseButton), Some(Routed::Close));
    assert_eq!(click(&mut gallery, ClickTarget::Backdrop), None);
    assert_eq!(page(&gallery).timers.len(), 1);

    let token = page(&gallery).timers[0];
    gallery.close_elapsed(token);
    gallery.close_elapsed(token);
    assert_eq!(page(&gallery).hides, 1);
    assert_eq!(page(&gallery).restores, 1);
}

#[test]
fn open_menu_keeps_scroll_lock() {
    let (mut gallery, menu) = setup();
    click(&mut gallery, ClickTarget::Thumbnail { index: 1 });
    assert!(page(&gallery).scroll_locked);

    menu.borrow_mut().toggle();
    gallery.handle(&InputEvent::KeyDown(Key::Escape));
    assert!(page(&gallery).scroll_locked);
}

#[test]
fn closed_menu_releases_scroll_lock() {
    let (mut gallery, menu) = setup();
    click(&mut gallery, ClickTarget::Thumbnail { index: 1 });
    menu.borrow_mut().toggle();
    menu.borrow_mut().escape();
    gallery.handle(&InputEvent::KeyDown(Key::Escape));
    assert!(!page(&gallery).scroll_locked);
}

#[test]
fn swipes_need_mostly_horizontal_travel() {
    let (mut gallery, _menu) = setup();
    click(&mut gallery, ClickTarget::Thumbnail { index: 1 });

    let start = Point::new(100.0, 100.0);
    gallery.handle(&InputEvent::TouchStart { touches: 1, position: start });
    let routed = gallery.handle(&InputEvent::TouchEnd {
        position: Some(Point::new(160.0, 110.0)),
    });
    assert_eq!(routed, Some(Routed::Previous));
    assert_eq!(gallery.lightbox().index(), 0);

    gallery.handle(&InputEvent::TouchStart { touches: 1, position: start });
    let routed = gallery.handle(&InputEvent::TouchEnd {
        position: Some(Point::new(160.0, 170.0)),
    });
    assert_eq!(routed, None);
    assert_eq!(gallery.lightbox().index(), 0);
}

#[test]
fn slow_superseded_image_does_not_apply() {
    let (mut gallery, _menu) = setup();
    click(&mut gallery, ClickTarget::Thumbnail { index: 0 });
    let (_, first) = last_load(&gallery);
    click(&mut gallery, ClickTarget::NextButton);
    let (url, second) = last_load(&gallery);
    assert_eq!(url, "b.jpg");

    assert!(!gallery.image_loaded(first, 100, 300));
    assert!(gallery.lightbox().is_loading());
    assert!(gallery.image_loaded(second, 300, 100));
    assert!(!gallery.lightbox().is_portrait());
}

#[test]
fn focus_skipped_when_opener_was_removed() {
    let (mut gallery, _menu) = setup();
    click(&mut gallery, ClickTarget::Thumbnail { index: 0 });
    gallery.lightbox_mut().surface_mut().detached.push(ElementId(1));
    gallery.lightbox_mut().surface_mut().focused = None;
    click(&mut gallery, ClickTarget::CloseButton);
    let token = page(&gallery).timers[0];
    gallery.close_elapsed(token);
    assert_eq!(page(&gallery).restores, 0);
    assert_eq!(page(&gallery).focused, None);
}

#[test]
fn dropped_items_are_not_rendered() {
    let (gallery, _menu) = setup();
    let html = gallery.grid_markup().into_string();
    assert_eq!(html.matches("gallery-item").count(), 3);
    assert!(html.contains(r#"src="thumbs/c.jpg""#));
    assert!(!html.contains("no url"));
}
