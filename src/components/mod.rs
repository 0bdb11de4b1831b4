use web_sys::HtmlInputElement;
use yew::prelude::*;

pub mod app;
pub mod download_panel;
pub mod hyperparams_form;
pub mod maze_view;
pub mod settings_form;
pub mod solve_form;
pub mod status_banners;
pub mod train_form;

/// Controlled text-input callback: mirrors the field into a state handle.
pub(crate) fn text_input(handle: &UseStateHandle<String>) -> Callback<InputEvent> {
    let handle = handle.clone();
    Callback::from(move |e: InputEvent| {
        handle.set(e.target_unchecked_into::<HtmlInputElement>().value());
    })
}
