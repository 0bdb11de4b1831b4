use web_sys::SubmitEvent;
use yew::prelude::*;

use super::text_input;

pub const DEFAULT_START_X: u32 = 0;
pub const DEFAULT_START_Y: u32 = 0;
pub const DEFAULT_LIMIT: u32 = 1000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolveParams {
    pub startx: u32,
    pub starty: u32,
    /// Step budget; a result equal to this value means the solver timed out.
    pub limit: u32,
}

#[derive(Properties, PartialEq, Clone)]
pub struct SolveFormProps {
    pub disabled: bool,
    pub on_submit: Callback<SolveParams>,
}

#[function_component(SolveForm)]
pub fn solve_form(props: &SolveFormProps) -> Html {
    let startx = use_state(|| DEFAULT_START_X.to_string());
    let starty = use_state(|| DEFAULT_START_Y.to_string());
    let limit = use_state(|| DEFAULT_LIMIT.to_string());

    let onsubmit = {
        let startx = startx.clone();
        let starty = starty.clone();
        let limit = limit.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let submitted = SolveParams {
                startx: startx.parse().unwrap_or(DEFAULT_START_X),
                starty: starty.parse().unwrap_or(DEFAULT_START_Y),
                limit: limit.parse().unwrap_or(DEFAULT_LIMIT),
            };
            startx.set(submitted.startx.to_string());
            starty.set(submitted.starty.to_string());
            limit.set(submitted.limit.to_string());
            on_submit.emit(submitted);
        })
    };

    html! {
        <form name="solve" {onsubmit} style="display:flex; flex-direction:column; gap:6px;">
            <h3 style="margin:0; font-size:15px;">{"Solve"}</h3>
            <label>{"Start x "}
                <input type="number" name="startx" min="0" value={(*startx).clone()} oninput={text_input(&startx)} />
            </label>
            <label>{"Start y "}
                <input type="number" name="starty" min="0" value={(*starty).clone()} oninput={text_input(&starty)} />
            </label>
            <label>{"Step limit "}
                <input type="number" name="limit" min="1" value={(*limit).clone()} oninput={text_input(&limit)} />
            </label>
            <button type="submit" class="submit-button" disabled={props.disabled}>{"Solve"}</button>
        </form>
    }
}
