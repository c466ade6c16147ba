//! Browser DOM helpers
//!
//! Thin wrappers over `web_sys` for the HTML overlay: screen containers,
//! the love meter, story text, the hidden message and the two answer
//! buttons. Missing elements are logged and skipped.

/// Element ids used by the page
pub mod ids {
    pub const CANVAS: &str = "gameCanvas";
    pub const METER_FILL: &str = "love-fill";
    pub const STORY_TEXT: &str = "story-text";
    pub const HIDDEN_MESSAGE: &str = "hidden-message";
    pub const START_BUTTON: &str = "start-btn";
    pub const YES_BUTTON: &str = "yes-btn";
    pub const NO_BUTTON: &str = "no-btn";
}

/// Format a meter percentage as a CSS width
pub fn meter_width(percent: f32) -> String {
    format!("{}%", percent.clamp(0.0, 100.0))
}

/// Story text with line breaks as HTML
pub fn story_html(text: &str) -> String {
    text.replace('\n', "<br>")
}

#[cfg(target_arch = "wasm32")]
mod dom {
    use glam::Vec2;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlElement};

    use super::ids;
    use crate::scene::Screen;

    const OVERLAYS: [Screen; 3] = [Screen::Start, Screen::Proposal, Screen::Celebration];

    fn html_element(document: &Document, id: &str) -> Option<HtmlElement> {
        let element = document.get_element_by_id(id);
        if element.is_none() {
            log::warn!("Missing element #{}", id);
        }
        element.and_then(|e| e.dyn_into::<HtmlElement>().ok())
    }

    fn set_style(element: &HtmlElement, property: &str, value: &str) {
        if let Err(e) = element.style().set_property(property, value) {
            log::warn!("Failed to set {}: {:?}", property, e);
        }
    }

    /// Show exactly one overlay (or none for gameplay)
    pub fn show_screen(document: &Document, screen: Screen) {
        for overlay in OVERLAYS {
            let Some(id) = overlay.element_id() else {
                continue;
            };
            let Some(el) = document.get_element_by_id(id) else {
                continue;
            };
            let classes = el.class_list();
            let result = if overlay == screen {
                classes
                    .remove_1("hidden")
                    .and_then(|_| classes.add_1("active"))
            } else {
                classes
                    .remove_1("active")
                    .and_then(|_| classes.add_1("hidden"))
            };
            if let Err(e) = result {
                log::warn!("Failed to toggle #{}: {:?}", id, e);
            }
        }
    }

    pub fn set_meter(document: &Document, percent: f32) {
        if let Some(el) = html_element(document, ids::METER_FILL) {
            set_style(&el, "width", &super::meter_width(percent));
        }
    }

    pub fn set_story_text(document: &Document, text: &str) {
        if let Some(el) = document.get_element_by_id(ids::STORY_TEXT) {
            el.set_inner_html(&super::story_html(text));
        }
    }

    pub fn reveal_hidden_message(document: &Document) {
        if let Some(el) = html_element(document, ids::HIDDEN_MESSAGE) {
            set_style(&el, "opacity", "1");
        }
    }

    /// Glow on the yes button as soon as it's pressed
    pub fn highlight_yes(document: &Document) {
        if let Some(el) = html_element(document, ids::YES_BUTTON) {
            set_style(&el, "box-shadow", "0 0 30px rgba(45, 198, 83, 0.9)");
            set_style(&el, "transform", "scale(1.1)");
        }
    }

    /// Rendered size of the no button
    pub fn no_button_size(document: &Document) -> Option<Vec2> {
        let el = html_element(document, ids::NO_BUTTON)?;
        Some(Vec2::new(el.offset_width() as f32, el.offset_height() as f32))
    }

    pub fn place_no_button(document: &Document, pos: Vec2, label: &str) {
        if let Some(el) = html_element(document, ids::NO_BUTTON) {
            set_style(&el, "position", "fixed");
            set_style(&el, "left", &format!("{}px", pos.x));
            set_style(&el, "top", &format!("{}px", pos.y));
            el.set_inner_text(label);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use dom::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_width() {
        assert_eq!(meter_width(40.0), "40%");
        assert_eq!(meter_width(140.0), "100%");
    }

    #[test]
    fn test_story_html_breaks() {
        assert_eq!(story_html("a\n\nb"), "a<br><br>b");
    }
}
