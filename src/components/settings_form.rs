use web_sys::SubmitEvent;
use yew::prelude::*;

use super::text_input;

pub const DEFAULT_GRID_SIZE: u32 = 25;
pub const DEFAULT_DIMENSION: u32 = 30;
/// Default for windows narrower than 900px at startup.
pub const NARROW_DIMENSION: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MazeSettings {
    pub rows: u32,
    pub cols: u32,
    pub grid_size: u32,
}

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsFormProps {
    pub defaults: MazeSettings,
    pub disabled: bool,
    pub on_submit: Callback<MazeSettings>,
}

/// Maze dimensions and display size. Submitting requests a fresh maze; the
/// fields keep the just-submitted values afterwards.
#[function_component(SettingsForm)]
pub fn settings_form(props: &SettingsFormProps) -> Html {
    let defaults = props.defaults;
    let rows = use_state(|| defaults.rows.to_string());
    let cols = use_state(|| defaults.cols.to_string());
    let grid = use_state(|| defaults.grid_size.to_string());

    let onsubmit = {
        let rows = rows.clone();
        let cols = cols.clone();
        let grid = grid.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let submitted = MazeSettings {
                rows: rows.parse().unwrap_or(defaults.rows),
                cols: cols.parse().unwrap_or(defaults.cols),
                grid_size: grid.parse().unwrap_or(defaults.grid_size),
            };
            rows.set(submitted.rows.to_string());
            cols.set(submitted.cols.to_string());
            grid.set(submitted.grid_size.to_string());
            on_submit.emit(submitted);
        })
    };

    html! {
        <form name="settings" {onsubmit} style="display:flex; flex-direction:column; gap:6px;">
            <h3 style="margin:0; font-size:15px;">{"Maze"}</h3>
            <label>{"Rows "}
                <input type="number" name="rows" min="1" value={(*rows).clone()} oninput={text_input(&rows)} />
            </label>
            <label>{"Columns "}
                <input type="number" name="columns" min="1" value={(*cols).clone()} oninput={text_input(&cols)} />
            </label>
            <label>{"Grid size "}
                <input type="number" name="gridSize" min="5" value={(*grid).clone()} oninput={text_input(&grid)} />
            </label>
            <button type="submit" class="submit-button" disabled={props.disabled}>{"Generate maze"}</button>
        </form>
    }
}
