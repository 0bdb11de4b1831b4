// Console helpers shared by the components.

use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

pub fn cerr(msg: &str) {
    web_sys::console::error_1(&JsValue::from_str(msg));
}
