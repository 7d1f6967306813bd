use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MapControlsProps {
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
}

/// Zoom buttons replacing Leaflet's own zoom control.
#[function_component(MapControls)]
pub fn map_controls(props: &MapControlsProps) -> Html {
    let zi = {
        let cb = props.on_zoom_in.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let zo = {
        let cb = props.on_zoom_out.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; right:12px; top:12px; z-index:1000; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:6px; display:flex; flex-direction:column; gap:6px;">
        <button onclick={zi} aria-label="Zoom in"> {"+"} </button>
        <button onclick={zo} aria-label="Zoom out"> {"-"} </button>
    </div>}
}
