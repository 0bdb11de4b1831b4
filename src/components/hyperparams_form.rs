use web_sys::SubmitEvent;
use yew::prelude::*;

use super::text_input;
use crate::model::RlHyperParams;

#[derive(Properties, PartialEq, Clone)]
pub struct HyperParamsFormProps {
    pub hp: RlHyperParams,
    pub disabled: bool,
    pub on_submit: Callback<RlHyperParams>,
}

fn number_field(label: &'static str, name: &'static str, handle: &UseStateHandle<String>) -> Html {
    html! {
        <label style="display:flex; justify-content:space-between; gap:8px;">
            { label }
            <input
                type="number"
                step="any"
                name={name}
                value={(**handle).clone()}
                oninput={text_input(handle)}
                style="width:90px;"
            />
        </label>
    }
}

/// The nine Q-learning hyperparameters. Values are sent with every train
/// request and bundled into the export file.
#[function_component(HyperParamsForm)]
pub fn hyperparams_form(props: &HyperParamsFormProps) -> Html {
    let hp = props.hp;
    let epsilon = use_state(|| hp.epsilon.to_string());
    let epsilon_decay = use_state(|| hp.epsilon_decay.to_string());
    let min_epsilon = use_state(|| hp.min_epsilon.to_string());
    let alpha = use_state(|| hp.alpha.to_string());
    let gamma = use_state(|| hp.gamma.to_string());
    let r_illegal = use_state(|| hp.r_illegal.to_string());
    let r_legal = use_state(|| hp.r_legal.to_string());
    let r_goal = use_state(|| hp.r_goal.to_string());
    let hidden_size = use_state(|| hp.hidden_size.to_string());

    let onsubmit = {
        let fields = (
            epsilon.clone(),
            epsilon_decay.clone(),
            min_epsilon.clone(),
            alpha.clone(),
            gamma.clone(),
            r_illegal.clone(),
            r_legal.clone(),
            r_goal.clone(),
            hidden_size.clone(),
        );
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (eps, dec, min, al, ga, ril, rle, rgo, hid) = &fields;
            let submitted = RlHyperParams {
                epsilon: eps.parse().unwrap_or(hp.epsilon),
                epsilon_decay: dec.parse().unwrap_or(hp.epsilon_decay),
                min_epsilon: min.parse().unwrap_or(hp.min_epsilon),
                alpha: al.parse().unwrap_or(hp.alpha),
                gamma: ga.parse().unwrap_or(hp.gamma),
                r_illegal: ril.parse().unwrap_or(hp.r_illegal),
                r_legal: rle.parse().unwrap_or(hp.r_legal),
                r_goal: rgo.parse().unwrap_or(hp.r_goal),
                hidden_size: hid.parse().unwrap_or(hp.hidden_size),
            };
            eps.set(submitted.epsilon.to_string());
            dec.set(submitted.epsilon_decay.to_string());
            min.set(submitted.min_epsilon.to_string());
            al.set(submitted.alpha.to_string());
            ga.set(submitted.gamma.to_string());
            ril.set(submitted.r_illegal.to_string());
            rle.set(submitted.r_legal.to_string());
            rgo.set(submitted.r_goal.to_string());
            hid.set(submitted.hidden_size.to_string());
            on_submit.emit(submitted);
        })
    };

    html! {
        <form name="hyperparameters" {onsubmit} style="display:flex; flex-direction:column; gap:4px;">
            <h3 style="margin:0; font-size:15px;">{"Hyperparameters"}</h3>
            { number_field("epsilon", "epsilon", &epsilon) }
            { number_field("epsilon decay", "epsilon_decay", &epsilon_decay) }
            { number_field("min epsilon", "min_epsilon", &min_epsilon) }
            { number_field("alpha", "alpha", &alpha) }
            { number_field("gamma", "gamma", &gamma) }
            { number_field("illegal reward", "rIllegal", &r_illegal) }
            { number_field("legal reward", "rLegal", &r_legal) }
            { number_field("goal reward", "rGoal", &r_goal) }
            { number_field("hidden size", "hiddenSize", &hidden_size) }
            <button type="submit" class="submit-button" disabled={props.disabled}>{"Apply"}</button>
        </form>
    }
}
