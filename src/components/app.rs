use super::stage_view::StageView;
use crate::config::GameConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: GameConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <div id="root" style="display:flex; justify-content:center; align-items:center; min-height:100vh; background:#0e1116;">
            <StageView config={props.config.clone()} />
        </div>
    }
}
