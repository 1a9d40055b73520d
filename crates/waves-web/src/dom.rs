use waves_core::Bounds;
use web_sys as web;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn page_hidden() -> bool {
    window_document().map(|d| d.hidden()).unwrap_or(false)
}

/// Current window scroll offset; pointer math works in page coordinates.
#[inline]
pub fn scroll_offset() -> (f64, f64) {
    match web::window() {
        Some(w) => (
            w.page_x_offset().unwrap_or(0.0),
            w.page_y_offset().unwrap_or(0.0),
        ),
        None => (0.0, 0.0),
    }
}

/// Container geometry in page coordinates, as the grid expects it.
pub fn container_bounds(el: &web::HtmlElement) -> Bounds {
    let rect = el.get_bounding_client_rect();
    let (sx, sy) = scroll_offset();
    Bounds::new(rect.width(), rect.height(), rect.left() + sx, rect.top() + sy)
}

/// Reuse an `<svg>` already present in the container, else create one.
pub fn find_or_create_svg(
    document: &web::Document,
    container: &web::HtmlElement,
) -> Option<web::Element> {
    if let Ok(Some(existing)) = container.query_selector("svg") {
        return Some(existing);
    }
    let svg = document.create_element_ns(Some(SVG_NS), "svg").ok()?;
    let _ = svg.set_attribute("class", "waves__svg");
    let _ = svg.set_attribute("preserveAspectRatio", "none");
    container.append_child(&svg).ok()?;
    Some(svg)
}

pub fn sync_viewbox(svg: &web::Element, bounds: Bounds) {
    let _ = svg.set_attribute(
        "viewBox",
        &format!("0 0 {:.0} {:.0}", bounds.width.max(1.0), bounds.height.max(1.0)),
    );
}

pub fn create_line_path(document: &web::Document) -> Option<web::Element> {
    let path = document.create_element_ns(Some(SVG_NS), "path").ok()?;
    let _ = path.set_attribute("class", "waves__line");
    Some(path)
}
