use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::download_panel::DownloadPanel;
use super::hyperparams_form::HyperParamsForm;
use super::maze_view::MazeView;
use super::settings_form::{
    DEFAULT_DIMENSION, DEFAULT_GRID_SIZE, MazeSettings, NARROW_DIMENSION, SettingsForm,
};
use super::solve_form::{SolveForm, SolveParams};
use super::status_banners::StatusBanners;
use super::train_form::TrainForm;
use crate::api::MazeApi;
use crate::export::{self, ExportUrl};
use crate::model::{AppAction, AppState, RlHyperParams, TaskStatus};
use crate::util::{cerr, clog};

/// Narrow screens start with a small maze so it fits without scrolling.
fn initial_settings() -> MazeSettings {
    let narrow = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|w| w < 900.0)
        .unwrap_or(false);
    let dim = if narrow {
        NARROW_DIMENSION
    } else {
        DEFAULT_DIMENSION
    };
    MazeSettings {
        rows: dim,
        cols: dim,
        grid_size: DEFAULT_GRID_SIZE,
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let defaults = *use_memo((), |_| initial_settings());
    let state = use_reducer(|| AppState::new(defaults.grid_size));
    let api = use_memo((), |_| MazeApi::default());
    let export_url = use_mut_ref(ExportUrl::default);
    let download_href = use_state(|| None::<String>);

    // Refresh the export snapshot whenever maze or hyperparameters change.
    // ExportUrl revokes the previous object URL before minting the new one.
    {
        let export_url = export_url.clone();
        let download_href = download_href.clone();
        use_effect_with((state.maze.clone(), state.hp), move |(maze, hp)| {
            if let Some(maze) = maze {
                match export::snapshot_json(maze, hp) {
                    Ok(json) => match export_url.borrow_mut().refresh(&json) {
                        Ok(url) => download_href.set(Some(url)),
                        Err(err) => cerr(&format!("export URL error: {err:?}")),
                    },
                    Err(err) => cerr(&format!("export encode error: {err}")),
                }
            }
            || ()
        });
    }

    let on_settings = {
        let state = state.clone();
        let api = api.clone();
        Callback::from(move |s: MazeSettings| {
            let token = state.next_token();
            state.dispatch(AppAction::CreateStarted {
                grid_size: s.grid_size,
            });
            clog(&format!("requesting {}x{} maze", s.rows, s.cols));
            let state = state.clone();
            let api = api.clone();
            spawn_local(async move {
                match api.create(s.rows, s.cols).await {
                    Ok(maze) => state.dispatch(AppAction::MazeCreated { token, maze }),
                    Err(err) => {
                        cerr(&format!("maze creation failed: {err}"));
                        state.dispatch(AppAction::CreateFailed {
                            token,
                            message: err.to_string(),
                        });
                    }
                }
            });
        })
    };

    let on_hp = {
        let state = state.clone();
        Callback::from(move |hp: RlHyperParams| {
            state.dispatch(AppAction::SetHyperParams(hp));
        })
    };

    let on_train = {
        let state = state.clone();
        let api = api.clone();
        Callback::from(move |passes: u32| {
            if state.maze.is_none() {
                cerr("train submitted with no maze defined");
                return;
            }
            let token = state.next_token();
            let hp = state.hp;
            state.dispatch(AppAction::TrainStarted);
            clog(&format!("training started: {passes} passes"));
            let state = state.clone();
            let api = api.clone();
            spawn_local(async move {
                match api.train(passes, &hp).await {
                    Ok(maze) => {
                        clog("training complete");
                        state.dispatch(AppAction::TrainFinished {
                            token,
                            passes,
                            maze,
                        });
                    }
                    Err(err) => {
                        cerr(&format!("training failed: {err}"));
                        state.dispatch(AppAction::TrainFailed {
                            token,
                            message: err.to_string(),
                        });
                    }
                }
            });
        })
    };

    let on_cancel = {
        let state = state.clone();
        Callback::from(move |_| {
            clog("training cancelled");
            state.dispatch(AppAction::CancelTraining);
        })
    };

    let on_solve = {
        let state = state.clone();
        let api = api.clone();
        Callback::from(move |p: SolveParams| {
            if state.maze.is_none() {
                cerr("solve submitted with no maze defined");
                return;
            }
            let token = state.run_token;
            let state = state.clone();
            let api = api.clone();
            spawn_local(async move {
                match api.solve(p.startx, p.starty, p.limit).await {
                    Ok(resp) => {
                        clog(&format!("solve finished in {} steps", resp.steps));
                        state.dispatch(AppAction::SolveFinished {
                            token,
                            steps: resp.steps,
                            limit: p.limit,
                            path: resp.path,
                        });
                    }
                    Err(err) => cerr(&format!("solve failed: {err}")),
                }
            });
        })
    };

    let busy = state.busy();
    let pending = state.training == TaskStatus::Pending;

    html! {
        <div id="root" style="display:flex; gap:16px; padding:12px; align-items:flex-start;">
            <div style="display:flex; flex-direction:column; gap:14px; min-width:240px;">
                <SettingsForm defaults={defaults} disabled={busy} on_submit={on_settings} />
                <HyperParamsForm hp={state.hp} disabled={busy} on_submit={on_hp} />
                <TrainForm disabled={busy} {pending} on_submit={on_train} on_cancel={on_cancel} />
                <SolveForm disabled={busy} on_submit={on_solve} />
                <DownloadPanel href={(*download_href).clone()} />
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <StatusBanners
                    create={state.create.clone()}
                    training={state.training.clone()}
                    solve={state.solve.clone()}
                    total_passes={state.total_passes}
                />
                if let Some(maze) = state.maze.clone() {
                    <MazeView {maze} grid_size={state.grid_size} solve_path={state.solve_path.clone()} />
                }
            </div>
        </div>
    }
}
