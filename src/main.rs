mod api;
mod components;
mod export;
mod model;
mod render;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
