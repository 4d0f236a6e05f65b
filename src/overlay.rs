use crate::constants::{CURSOR_DRAGGING, CURSOR_IDLE, OVERLAY_HINT, OVERLAY_ID, OVERLAY_TITLE};
use anyhow::anyhow;
use web_sys as web;

const OVERLAY_STYLE: &str = "position: fixed; top: 20px; left: 20px; color: white; \
     font-family: monospace; font-size: 14px; text-shadow: 0 0 10px rgba(0,0,0,0.8); \
     pointer-events: none; z-index: 10;";
const HINT_STYLE: &str = "font-size: 12px; margin-top: 10px; opacity: 0.7;";

/// Title + usage hint pinned to the top-left corner. Reuses an existing
/// `#galaxy-overlay` element when the page already provides one.
pub fn show(document: &web::Document) -> anyhow::Result<web::Element> {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        _ = el.set_attribute("style", OVERLAY_STYLE);
        return Ok(el);
    }
    let el = document
        .create_element("div")
        .map_err(|e| anyhow!("{:?}", e))?;
    el.set_id(OVERLAY_ID);
    _ = el.set_attribute("style", OVERLAY_STYLE);
    el.set_inner_html(&format!(
        "<div>{}</div><div style='{}'>{}</div>",
        OVERLAY_TITLE, HINT_STYLE, OVERLAY_HINT
    ));
    let body = document.body().ok_or_else(|| anyhow!("no body"))?;
    body.append_child(&el).map_err(|e| anyhow!("{:?}", e))?;
    Ok(el)
}

#[inline]
pub fn hide(el: &web::Element) {
    _ = el.set_attribute("style", "display:none");
}

#[inline]
pub fn set_cursor(canvas: &web::HtmlCanvasElement, dragging: bool) {
    let cursor = if dragging { CURSOR_DRAGGING } else { CURSOR_IDLE };
    _ = canvas.style().set_property("cursor", cursor);
}
