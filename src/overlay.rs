use crate::constants::{PARAMS_OVERLAY_ID, START_OVERLAY_ID};
use ripple_core::{ParamId, WaveParameters};
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(START_OVERLAY_ID) {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(START_OVERLAY_ID) {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id(START_OVERLAY_ID) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}

/// Render the current parameter values into the HUD element.
pub fn update_params(document: &web::Document, params: &WaveParameters) {
    if let Some(el) = document.get_element_by_id(PARAMS_OVERLAY_ID) {
        let rows: Vec<String> = ParamId::ALL
            .iter()
            .map(|id| format!("{}: {:.2}", id.label(), id.get(params)))
            .collect();
        let html = format!(
            "<div style='color: #20304a; font: 13px system-ui; background: rgba(250, 250, 252, 0.85); padding: 8px 12px; border-radius: 6px; border: 1px solid rgba(80, 110, 150, 0.35);'>{}</div>",
            rows.join(" • ")
        );
        el.set_inner_html(&html);
        _ = el.set_attribute("style", "");
    }
}
