use web_sys::SubmitEvent;
use yew::prelude::*;

use super::text_input;

pub const DEFAULT_PASSES: u32 = 2000;

#[derive(Properties, PartialEq, Clone)]
pub struct TrainFormProps {
    pub disabled: bool,
    /// True while a training request is in flight; shows the cancel button.
    pub pending: bool,
    pub on_submit: Callback<u32>,
    pub on_cancel: Callback<()>,
}

#[function_component(TrainForm)]
pub fn train_form(props: &TrainFormProps) -> Html {
    let passes = use_state(|| DEFAULT_PASSES.to_string());

    let onsubmit = {
        let passes = passes.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let submitted: u32 = passes.parse().unwrap_or(DEFAULT_PASSES);
            passes.set(submitted.to_string());
            on_submit.emit(submitted);
        })
    };
    let cancel = {
        let cb = props.on_cancel.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <form name="train" {onsubmit} style="display:flex; flex-direction:column; gap:6px;">
            <h3 style="margin:0; font-size:15px;">{"Train"}</h3>
            <label>{"Passes "}
                <input type="number" name="passes" min="1" value={(*passes).clone()} oninput={text_input(&passes)} />
            </label>
            <button type="submit" class="submit-button" disabled={props.disabled}>{"Train"}</button>
            if props.pending {
                <button type="button" onclick={cancel}>{"Cancel"}</button>
            }
        </form>
    }
}
