use crate::constants::*;
use crate::dom;
use crate::hero::Hero;
use crate::transition::{self, PageTransition};
use web_sys as web;

/// Hovering a call-to-action sends a ripple burst across the hero canvas.
pub fn wire_cta_bursts(document: &web::Document, hero: &Hero) {
    let buttons = dom::query_all(document, CTA_SELECTOR);
    for button in &buttons {
        let hero = hero.clone();
        dom::listen(button, "mouseenter", move |_: web::MouseEvent| hero.burst());
    }
    log::info!("[events] {} cta burst triggers", buttons.len());
}

/// In-page anchors styled as call-to-action run the page transition and
/// scroll to their target at the midpoint.
pub fn wire_cta_transitions(document: &web::Document, page: &PageTransition) {
    let mut wired = 0usize;
    for link in dom::query_all(document, ANCHOR_LINK_SELECTOR) {
        if !link.class_list().contains(CTA_CLASS) {
            continue;
        }
        let page = page.clone();
        let anchor = link.clone();
        dom::listen(&link, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            page.transition(move || transition::scroll_to_anchor(&href));
        });
        wired += 1;
    }
    log::info!("[events] {} cta transition links", wired);
}
