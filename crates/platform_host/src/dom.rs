//! DOM side effects executed on behalf of the shell and hosted apps.

use crate::error::HostError;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn document() -> Result<web_sys::Document, HostError> {
    web_sys::window()
        .ok_or(HostError::WindowUnavailable)?
        .document()
        .ok_or(HostError::DocumentUnavailable)
}

/// Moves keyboard focus to the element with the given DOM id.
///
/// The target must be focusable (native form control or `tabindex` carrier).
///
/// # Errors
///
/// Returns a [`HostError`] when the document or the element is unavailable,
/// or when the browser rejects the focus call.
pub fn focus_element_by_id(id: &str) -> Result<(), HostError> {
    #[cfg(target_arch = "wasm32")]
    {
        let element = document()?
            .get_element_by_id(id)
            .ok_or_else(|| HostError::ElementNotFound { id: id.to_string() })?;
        let element: web_sys::HtmlElement = element
            .dyn_into()
            .map_err(|_| HostError::Js(format!("element `{id}` is not focusable")))?;
        element
            .focus()
            .map_err(|err| HostError::Js(format!("{err:?}")))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        Ok(())
    }
}

/// Offers `contents` to the user as a plain-text file download named `file_name`.
///
/// Implemented as the classic object-URL-plus-anchor-click flow; the object
/// URL is revoked immediately after the click is dispatched.
///
/// # Errors
///
/// Returns a [`HostError`] when blob or URL creation fails or the document is
/// unavailable.
pub fn download_text_file(file_name: &str, contents: &str) -> Result<(), HostError> {
    #[cfg(target_arch = "wasm32")]
    {
        let document = document()?;
        let parts = js_sys::Array::new();
        parts.push(&wasm_bindgen::JsValue::from_str(contents));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("text/plain");
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
            .map_err(|err| HostError::Js(format!("{err:?}")))?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)
            .map_err(|err| HostError::Js(format!("{err:?}")))?;
        let anchor = document
            .create_element("a")
            .map_err(|err| HostError::Js(format!("{err:?}")))?;
        let anchor: web_sys::HtmlAnchorElement = anchor
            .dyn_into()
            .map_err(|_| HostError::Js("anchor element cast failed".to_string()))?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();
        let _ = web_sys::Url::revoke_object_url(&url);
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (file_name, contents);
        Ok(())
    }
}
