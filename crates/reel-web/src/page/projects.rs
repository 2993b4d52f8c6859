//! `card-details` page: fills the project template from the static table.

use log::{info, warn};
use reel_core::{
    chrome::PageChrome,
    projects::{self, Project, ProjectLookup},
};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlImageElement, UrlSearchParams};

use super::chrome::{MountedChrome, mount_chrome};
use crate::platform::dom;

pub struct MountedProjectPage {
    _chrome: MountedChrome,
}

/// Mount when the page has the project template. A redirect away from the
/// page mounts nothing.
pub fn mount_project_details(
    document: &Document,
) -> Result<Option<MountedProjectPage>, JsValue> {
    if dom::by_id::<Element>(document, "detailTitle").is_none() {
        return Ok(None);
    }

    let location = dom::window()?.location();
    let search = location.search()?;
    let id = match UrlSearchParams::new_with_str(&search) {
        Ok(params) => params.get("id"),
        Err(err) => {
            warn!("projects: query not parsed by the browser: {:?}", err);
            projects::id_from_query(&search).map(|id| id.as_str().to_owned())
        }
    };
    match projects::resolve(id.as_deref()) {
        ProjectLookup::Found(project) => render(document, project)?,
        ProjectLookup::Redirect(page) => {
            location.set_href(page)?;
            return Ok(None);
        }
    }

    Ok(Some(MountedProjectPage {
        _chrome: mount_chrome(document, PageChrome::project_details())?,
    }))
}

fn render(document: &Document, project: &Project) -> Result<(), JsValue> {
    document.set_title(&project.page_title());

    if let Some(hero) = dom::by_id::<HtmlImageElement>(document, "heroImage") {
        hero.set_src(project.image);
    }
    for (id, text) in [
        ("detailCategory", project.category),
        ("detailTitle", project.title),
        ("detailOverview", project.overview),
        ("detailChallenge", project.challenge),
        ("detailSolution", project.solution),
        ("detailResults", project.results),
    ] {
        if let Some(element) = dom::by_id::<Element>(document, id) {
            element.set_text_content(Some(text));
        }
    }

    if let Some(list) = dom::by_id::<Element>(document, "detailServices") {
        list.set_text_content(None);
        for service in project.services.iter().copied() {
            let item = dom::element(document, "li", None, Some(service))?;
            list.append_child(&item)?;
        }
    }

    if let Some(gallery) = dom::by_id::<Element>(document, "detailGallery") {
        gallery.set_text_content(None);
        for src in project.gallery {
            let img = image(document, src, project.title)?;
            gallery.append_child(&img)?;
        }
    }

    if let Some(related) = dom::by_id::<Element>(document, "relatedProjects") {
        related.set_text_content(None);
        for other in projects::related(project.id) {
            let card = related_card(document, other)?;
            related.append_child(&card)?;
        }
    }

    info!("projects: rendered {}", project.id);
    Ok(())
}

fn image(document: &Document, src: &str, alt: &str) -> Result<Element, JsValue> {
    let img = document.create_element("img")?;
    img.set_attribute("src", src)?;
    img.set_attribute("alt", alt)?;
    Ok(img)
}

fn related_card(document: &Document, project: &Project) -> Result<Element, JsValue> {
    let card = dom::element(document, "a", Some("related-card"), None)?;
    card.set_attribute("href", &project.detail_href())?;

    let picture = dom::element(document, "div", Some("related-card-image"), None)?;
    let img = image(document, project.image, project.title)?;
    picture.append_child(&img)?;

    let content = dom::element(document, "div", Some("related-card-content"), None)?;
    let category = dom::element(
        document,
        "div",
        Some("related-card-category"),
        Some(project.category),
    )?;
    content.append_child(&category)?;
    let title = dom::element(
        document,
        "h3",
        Some("related-card-title"),
        Some(project.title),
    )?;
    content.append_child(&title)?;

    card.append_child(&picture)?;
    card.append_child(&content)?;
    Ok(card)
}
