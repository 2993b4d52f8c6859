use log::{info, warn};
use wasm_bindgen::JsValue;

/// Log the outcome of one feature mount and keep its handle alive for the
/// lifetime of the page.
pub(super) fn keep<T: 'static>(feature: &str, result: Result<Option<T>, JsValue>) -> bool {
    match result {
        Ok(Some(handle)) => {
            info!("mount: {} ready", feature);
            Box::leak(Box::new(handle));
            true
        }
        Ok(None) => false,
        Err(err) => {
            warn!("mount: {} failed: {:?}", feature, err);
            false
        }
    }
}
