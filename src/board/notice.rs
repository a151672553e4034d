use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, window};

const HIDDEN: &str = "popup";
const SHOWN: &str = "popup show";

/// The single popup element used for every message.
#[derive(Clone)]
pub struct Notice {
    el: Element,
    dismiss_ms: i32,
}

impl Notice {
    pub fn find(doc: &Document, id: &str, dismiss_ms: i32) -> Result<Self, JsValue> {
        let el = doc
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("missing notice #{}", id)))?;
        Ok(Self { el, dismiss_ms })
    }

    /// Replace the popup text and make it visible until overwritten.
    pub fn show(&self, text: &str) -> Result<(), JsValue> {
        let doc = self
            .el
            .owner_document()
            .ok_or_else(|| JsValue::from_str("notice detached from document"))?;
        let body = doc.create_element("div")?;
        body.set_text_content(Some(text));
        self.el.set_inner_html("");
        self.el.append_child(&body)?;
        self.el.set_class_name(SHOWN);
        Ok(())
    }

    /// Show `text`, then hide the popup after the dismiss delay. The timer is
    /// not cancelled by later messages.
    pub fn flash(&self, text: &str) -> Result<(), JsValue> {
        self.show(text)?;
        let el = self.el.clone();
        let hide = Closure::once_into_js(move || el.set_class_name(HIDDEN));
        window()
            .ok_or_else(|| JsValue::from_str("no window"))?
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                hide.unchecked_ref::<js_sys::Function>(),
                self.dismiss_ms,
            )?;
        Ok(())
    }
}
