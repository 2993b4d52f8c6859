//! Hero and season carousels bound to their markup.

use std::{cell::RefCell, rc::Rc};

use gloo_events::EventListener;
use gloo_timers::callback::Interval;
use log::{info, warn};
use reel_core::{
    carousel::{Carousel, CarouselConfig},
    input::InputEvent,
    messages::OriginAllowList,
    router::SliderScale,
    section::SectionSpec,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, HtmlVideoElement};

use crate::{
    input::{InputQueue, QueuedInput, SectionObserver, listeners, messages},
    media::VideoElement,
    platform::{clock::now_ms, dom},
    render::{CaptionNodes, DomStage, SelectorNodes},
};

pub type WebCarousel = Carousel<VideoElement, DomStage, QueuedInput>;
type Shared = Rc<RefCell<WebCarousel>>;

const TICK_INTERVAL_MS: u32 = 25;
const HERO_VIDEO_CLASS: &str = "hero-video";

/// Keeps a mounted carousel's listeners, observer and tick pump alive.
pub struct MountedCarousel {
    _carousel: Shared,
    _listeners: Vec<EventListener>,
    _observer: Option<SectionObserver>,
    _pump: Interval,
}

/// Mount the full-viewport hero when `#videoContainer` and `.scroll-section`
/// anchors are present. Frame messages are accepted from the page's own
/// origin and `allowed`.
pub fn mount_hero(
    document: &Document,
    config: CarouselConfig,
    allowed: OriginAllowList<'static>,
) -> Result<Option<MountedCarousel>, JsValue> {
    let Some(container) = dom::by_id::<Element>(document, "videoContainer") else {
        return Ok(None);
    };
    let sections = dom::query_all_in(document, ".scroll-section")?;
    if sections.is_empty() {
        return Ok(None);
    }

    let captions = CaptionNodes {
        category: dom::require_id(document, "category")?,
        title: dom::require_id(document, "mainTitle")?,
        description: dom::require_id(document, "description")?,
        slots: ["category", "mainTitle", "description", "continueBtn"]
            .iter()
            .filter_map(|id| dom::by_id::<Element>(document, id))
            .collect(),
    };
    let continue_button = dom::by_id::<Element>(document, "continueBtn");
    let stage = DomStage::new(document.clone())
        .with_captions(captions)
        .with_sections(sections.clone());

    let queue = InputQueue::new();
    let carousel: Shared = Rc::new(RefCell::new(Carousel::new(
        config,
        stage,
        queue.provider(),
    )));

    info!("hero: initializing {} sections", sections.len());
    let mut attached = Vec::new();
    for (index, section) in sections.iter().enumerate() {
        let index = index as u16;
        let source_url = attribute(section, "data-video");
        let category = attribute(section, "data-category");
        let title = attribute(section, "data-title");
        let description = attribute(section, "data-description");
        if source_url.is_empty() {
            warn!("hero: section {} has no data-video", index);
        }

        let video = VideoElement::create(document, index, &source_url, HERO_VIDEO_CLASS)?;
        container.insert_before(video.element(), container.first_child().as_ref())?;
        attached.extend(media_listeners(video.element(), index, &carousel));

        let spec = SectionSpec {
            source_url: &source_url,
            category: &category,
            title: &title,
            description: &description,
        };
        if let Err(err) = carousel.borrow_mut().add_section(spec, video.clone()) {
            warn!("hero: section {} not registered: {:?}", index, err);
            continue;
        }
        video.load();
    }

    let window = dom::window()?;
    if let Some(wheel) = config.router.wheel {
        attached.push(listeners::wheel(&window, queue.clone(), wheel));
    }
    attached.extend(listeners::swipe(&window, queue.clone()));
    attached.push(listeners::keys(document, queue.clone(), config.router.axis));
    if let Some(button) = continue_button {
        attached.push(listeners::click(&button, queue.clone(), InputEvent::Advance));
    }
    attached.push(visibility_listener(document, &carousel));
    attached.push(messages::listen(
        &window,
        queue.clone(),
        allowed,
        window.location().origin()?,
    ));

    let observer = SectionObserver::observe(sections, queue)?;
    Ok(Some(MountedCarousel {
        _pump: pump(&carousel),
        _carousel: carousel,
        _listeners: attached,
        _observer: Some(observer),
    }))
}

/// Mount the season widget when `.season-video` elements are present.
pub fn mount_season(document: &Document) -> Result<Option<MountedCarousel>, JsValue> {
    let videos = dom::query_all_in(document, ".season-video")?;
    if videos.is_empty() {
        return Ok(None);
    }
    let count = videos.len() as u16;

    let slider = dom::by_id::<HtmlInputElement>(document, "season-slider");
    let scale = slider
        .as_ref()
        .map(|slider| slider_scale(slider, count))
        .unwrap_or_else(|| SliderScale::new(0.0, count.saturating_sub(1) as f32));
    let icons = dom::query_all_in(document, ".season-icon")?;

    let config = CarouselConfig::season();
    let config = config.with_router(config.router.with_slider(scale));
    let stage = DomStage::new(document.clone()).with_selector(SelectorNodes {
        slider: slider.clone(),
        scale,
        positions: count,
        fill: document.query_selector(".slider-fill")?,
        icons: icons.clone(),
    });

    let queue = InputQueue::new();
    let carousel: Shared = Rc::new(RefCell::new(Carousel::new(
        config,
        stage,
        queue.provider(),
    )));

    info!("season: initializing {} videos", count);
    let mut attached = Vec::new();
    for (index, element) in videos.into_iter().enumerate() {
        let index = index as u16;
        let Ok(element) = element.dyn_into::<HtmlVideoElement>() else {
            warn!("season: item {} is not a video", index);
            continue;
        };
        let source_url = element.current_src();
        let video = VideoElement::adopt(index, element);
        attached.extend(media_listeners(video.element(), index, &carousel));

        if let Err(err) = carousel
            .borrow_mut()
            .add_section(SectionSpec::media_only(&source_url), video.clone())
        {
            warn!("season: item {} not registered: {:?}", index, err);
            continue;
        }
        video.load();
    }

    if let Some(slider) = &slider {
        attached.push(listeners::slider(slider, queue.clone()));
    }
    for (index, icon) in icons.iter().enumerate() {
        attached.push(listeners::click(
            icon,
            queue.clone(),
            InputEvent::Select(index as u16),
        ));
    }
    attached.push(listeners::keys(document, queue, config.router.axis));
    attached.push(visibility_listener(document, &carousel));

    Ok(Some(MountedCarousel {
        _pump: pump(&carousel),
        _carousel: carousel,
        _listeners: attached,
        _observer: None,
    }))
}

fn attribute(element: &Element, name: &str) -> String {
    element.get_attribute(name).unwrap_or_default()
}

/// Slider range from its `min`/`max` attributes, defaulting to one step
/// per section.
fn slider_scale(slider: &HtmlInputElement, count: u16) -> SliderScale {
    let parse = |value: String| value.trim().parse::<f32>().ok();
    let min = parse(slider.min()).unwrap_or(0.0);
    let max = parse(slider.max()).unwrap_or(count.saturating_sub(1) as f32);
    SliderScale::new(min, max)
}

/// Run `f` unless the carousel is already borrowed further up the stack.
fn with_carousel(carousel: &Shared, event: &str, f: impl FnOnce(&mut WebCarousel)) {
    match carousel.try_borrow_mut() {
        Ok(mut carousel) => f(&mut carousel),
        Err(_) => warn!("carousel: busy, dropped {}", event),
    }
}

fn media_listeners(video: &HtmlVideoElement, index: u16, carousel: &Shared) -> [EventListener; 3] {
    let ready = {
        let carousel = Rc::clone(carousel);
        EventListener::new(video, "loadeddata", move |_| {
            with_carousel(&carousel, "loadeddata", |carousel| {
                carousel.media_ready(index, now_ms());
            });
        })
    };
    let seeking = {
        let carousel = Rc::clone(carousel);
        EventListener::new(video, "seeking", move |_| {
            with_carousel(&carousel, "seeking", |carousel| {
                carousel.media_seeking(index);
            });
        })
    };
    let play = {
        let carousel = Rc::clone(carousel);
        EventListener::new(video, "play", move |_| {
            with_carousel(&carousel, "play", |carousel| {
                carousel.media_played();
            });
        })
    };
    [ready, seeking, play]
}

fn visibility_listener(document: &Document, carousel: &Shared) -> EventListener {
    let carousel = Rc::clone(carousel);
    let target = document.clone();
    EventListener::new(document, "visibilitychange", move |_| {
        let hidden = target.hidden();
        with_carousel(&carousel, "visibilitychange", |carousel| {
            carousel.visibility_changed(hidden);
        });
    })
}

fn pump(carousel: &Shared) -> Interval {
    let carousel = Rc::clone(carousel);
    Interval::new(TICK_INTERVAL_MS, move || {
        if let Ok(mut carousel) = carousel.try_borrow_mut() {
            carousel.tick(now_ms());
        }
    })
}
