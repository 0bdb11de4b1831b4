use yew::prelude::*;

use crate::export::DOWNLOAD_FILENAME;

#[derive(Properties, PartialEq, Clone)]
pub struct DownloadPanelProps {
    /// Object URL of the current snapshot blob, if a maze exists.
    pub href: Option<String>,
}

#[function_component(DownloadPanel)]
pub fn download_panel(props: &DownloadPanelProps) -> Html {
    html! {
        <div id="download-container">
            if let Some(href) = props.href.clone() {
                <a id="download-link" {href} download={DOWNLOAD_FILENAME}>
                    {"Download maze details"}
                </a>
            }
        </div>
    }
}
