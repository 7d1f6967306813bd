use yew::prelude::*;

use crate::model::{Location, LocationId};

#[derive(Properties, PartialEq, Clone)]
pub struct LocationPanelProps {
    pub locations: &'static [Location],
    pub active: Option<LocationId>,
    pub hovered: Option<AttrValue>,
    pub on_select: Callback<Location>,
}

#[function_component]
pub fn LocationPanel(props: &LocationPanelProps) -> Html {
    let buttons = props.locations.iter().map(|loc| {
        let pressed = props.active == Some(loc.id);
        let onclick = {
            let cb = props.on_select.clone();
            let loc = loc.clone();
            Callback::from(move |_| cb.emit(loc.clone()))
        };
        let style = if pressed {
            "background:#f78166; border:1px solid #f78166; color:#0d1117;"
        } else {
            "background:#21262d; border:1px solid #30363d; color:#c9d1d9;"
        };
        html! { <button key={loc.id.as_str()} {onclick} aria-pressed={pressed.to_string()} style={format!("{} padding:4px 10px; border-radius:6px; cursor:pointer;", style)}>{ loc.label }</button> }
    });
    html! {<div style="position:absolute; top:12px; left:12px; z-index:1000; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; flex-direction:column; gap:6px; min-width:140px;">
        <div style="display:flex; flex-wrap:wrap; gap:6px;">{ for buttons }</div>
        { if let Some(name) = &props.hovered {
            html!{ <div style="font-size:12px; opacity:0.8;">{ name.clone() }</div> }
        } else { html!{} } }
    </div>}
}
