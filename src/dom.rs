use crate::constants::HIDDEN_CLASS;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Show `label` in the caption element, or hide the caption for `None`.
pub fn set_caption(document: &web::Document, caption_id: &str, label: Option<&str>) {
    let Some(el) = document.get_element_by_id(caption_id) else {
        return;
    };
    let cl = el.class_list();
    match label {
        Some(text) => {
            el.set_text_content(Some(text));
            _ = cl.remove_1(HIDDEN_CLASS);
            // fallback for environments without CSS class
            _ = el.set_attribute("style", "");
        }
        None => {
            el.set_text_content(None);
            _ = cl.add_1(HIDDEN_CLASS);
            _ = el.set_attribute("style", "display:none");
        }
    }
}
