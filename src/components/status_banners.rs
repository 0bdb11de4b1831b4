use yew::prelude::*;

use crate::model::{SolveStatus, TaskStatus};

#[derive(Properties, PartialEq, Clone)]
pub struct StatusBannersProps {
    pub create: TaskStatus,
    pub training: TaskStatus,
    pub solve: SolveStatus,
    pub total_passes: u32,
}

fn banner(id: &'static str, background: &str, body: Html) -> Html {
    let style = format!(
        "border:1px solid #30363d; border-radius:8px; padding:6px 10px; background:{background};"
    );
    html! { <div {id} {style}>{ body }</div> }
}

/// Outcome banners for the latest create/train/solve runs. Exactly one of
/// the solve banners is shown at a time; errors win over progress.
#[function_component(StatusBanners)]
pub fn status_banners(props: &StatusBannersProps) -> Html {
    let error = match (&props.create, &props.training) {
        (TaskStatus::Failed(msg), _) | (_, TaskStatus::Failed(msg)) => Some(msg.clone()),
        _ => None,
    };

    html! {
        <div style="display:flex; flex-direction:column; gap:6px;">
            if let Some(msg) = error {
                { banner("error-banner", "#3a1214", html! { <>{"Error: "}{ msg }</> }) }
            }
            if props.create == TaskStatus::Pending {
                { banner("creating-banner", "#1c2128", html! { {"Generating maze…"} }) }
            }
            if props.training == TaskStatus::Pending {
                { banner("training-pending-banner", "#1c2128", html! { {"Training…"} }) }
            }
            if props.training == TaskStatus::Done {
                { banner("training-banner", "#12261a", html! {
                    <>{"Training complete: "}<span id="training-passes">{ props.total_passes }</span>{" passes total."}</>
                }) }
            }
            if let SolveStatus::Complete { steps } = &props.solve {
                { banner("solution-complete", "#12261a", html! {
                    <>{"Solved in "}<span id="solution-steps">{ *steps }</span>{" steps."}</>
                }) }
            }
            if props.solve == SolveStatus::TimedOut {
                { banner("solution-timeout", "#3a2a12", html! {
                    {"Solver hit the step limit before reaching the goal."}
                }) }
            }
        </div>
    }
}
