use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::{location_panel::LocationPanel, map_controls::MapControls};
use crate::config::WidgetConfig;
use crate::geometry::fetch_boundaries;
use crate::map::{BoundaryLayer, MapHandle, PointerEvent, Session};
use crate::model::{Location, LocationId};
use crate::state::{OverlayState, latest_ratio, observer_thresholds, panel_visible};

#[derive(Properties, PartialEq, Clone)]
pub struct RegionMapProps {
    #[prop_or_default]
    pub config: WidgetConfig,
}

#[function_component(RegionMap)]
pub fn region_map(props: &RegionMapProps) -> Html {
    let widget_ref = use_node_ref();
    let map_ref = use_node_ref();
    let session = use_mut_ref(Session::new);
    let show_panel = use_state_eq(|| false);
    let active = use_state_eq(|| None::<LocationId>);
    let hovered = use_state_eq(|| None::<AttrValue>);

    // Mount: create the map once, then load the boundary overlay in the background
    {
        let map_ref = map_ref.clone();
        let session = session.clone();
        let hovered = hovered.clone();
        let config = props.config.clone();
        use_effect_with((), move |_| {
            match map_ref.cast::<HtmlElement>() {
                Some(container) if !session.borrow().is_mounted() => {
                    match MapHandle::create(&container, &config) {
                        Ok(handle) => {
                            let mounted = session.borrow_mut().mount(handle);
                            if let Ok(generation) = mounted {
                                spawn_overlay_load(
                                    Rc::downgrade(&session),
                                    generation,
                                    config.geometry_url,
                                    hovered,
                                );
                            }
                        }
                        Err(e) => log::error!("map initialization failed: {:#}", e),
                    }
                }
                Some(_) => {}
                None => log::warn!("map container missing at mount"),
            }
            move || session.borrow_mut().unmount()
        });
    }
    // Panel visibility follows how much of the widget is on screen
    {
        let widget_ref = widget_ref.clone();
        let show_panel = show_panel.clone();
        use_effect_with((), move |_| {
            let observer = widget_ref
                .cast::<Element>()
                .and_then(|el| observe_visibility(&el, show_panel));
            move || {
                if let Some((observer, _callback)) = observer {
                    observer.disconnect();
                }
            }
        });
    }

    let on_select = {
        let session = session.clone();
        let active = active.clone();
        let hovered = hovered.clone();
        let duration = props.config.fly_duration_secs;
        Callback::from(move |location: Location| {
            let mut s = session.borrow_mut();
            if s.select_location(&location, duration).is_none() {
                log::debug!("map not ready, ignoring {}", location.id.as_str());
                return;
            }
            if !s.has_overlay() {
                log::debug!("no boundary overlay, {} only moves the view", location.id.as_str());
            }
            drop(s);
            active.set(Some(location.id));
            hovered.set(None);
        })
    };
    let on_zoom_in = {
        let session = session.clone();
        Callback::from(move |_| {
            if let Some(map) = session.borrow().viewport() {
                map.zoom_in();
            }
        })
    };
    let on_zoom_out = {
        let session = session.clone();
        Callback::from(move |_| {
            if let Some(map) = session.borrow().viewport() {
                map.zoom_out();
            }
        })
    };

    html! {<div ref={widget_ref} class="region-map" style="position:relative; width:100%; height:clamp(320px, 60vh, 560px); border:1px solid #30363d; border-radius:12px; overflow:hidden; background:#0d1117;">
        <div ref={map_ref} style="position:absolute; inset:0;"></div>
        { if *show_panel {
            html!{ <>
                <LocationPanel
                    locations={props.config.locations}
                    active={*active}
                    hovered={(*hovered).clone()}
                    on_select={on_select}
                />
                <MapControls on_zoom_in={on_zoom_in} on_zoom_out={on_zoom_out} />
            </> }
        } else { html!{} } }
        <div style="position:absolute; right:6px; bottom:4px; z-index:1000; font-size:10px; opacity:0.6; pointer-events:none;">{ props.config.tile_attribution }</div>
    </div>}
}

/// Fetches the geometry asset and installs the overlay if the mount that
/// started the load is still live when it completes.
fn spawn_overlay_load(
    session: Weak<RefCell<Session>>,
    generation: u32,
    url: &'static str,
    hovered: UseStateHandle<Option<AttrValue>>,
) {
    wasm_bindgen_futures::spawn_local(async move {
        let collection = match fetch_boundaries(url).await {
            Ok(c) => c,
            Err(e) => {
                log::warn!("boundary overlay unavailable ({}): {}", url, e);
                return;
            }
        };
        if collection.is_empty() {
            log::warn!("{} holds no drawable boundaries", url);
        }
        let Some(session_rc) = session.upgrade() else {
            return;
        };
        if !session_rc.borrow().accepts(generation) {
            log::debug!("discarding boundary load from an earlier mount");
            return;
        }
        let built = {
            let s = session_rc.borrow();
            let Some(map) = s.viewport() else {
                return;
            };
            BoundaryLayer::build(map, &collection, pointer_handler(session, hovered))
        };
        match built {
            Ok(layer) => {
                let state = OverlayState::new(&collection.features);
                session_rc.borrow_mut().attach_overlay(generation, layer, state);
            }
            Err(e) => log::warn!("failed to build boundary overlay: {:#}", e),
        }
    });
}

fn pointer_handler(
    session: Weak<RefCell<Session>>,
    hovered: UseStateHandle<Option<AttrValue>>,
) -> Rc<dyn Fn(PointerEvent)> {
    Rc::new(move |event| {
        let Some(session) = session.upgrade() else {
            return;
        };
        let Ok(mut s) = session.try_borrow_mut() else {
            return;
        };
        match event {
            PointerEvent::Enter(index) => s.pointer_enter(index),
            PointerEvent::Leave => s.pointer_leave(),
        }
        hovered.set(s.hovered_name().map(|n| AttrValue::from(n.to_string())));
    })
}

type VisibilityObserver = (IntersectionObserver, Closure<dyn FnMut(js_sys::Array)>);

fn observe_visibility(target: &Element, show_panel: UseStateHandle<bool>) -> Option<VisibilityObserver> {
    let callback = {
        let show_panel = show_panel.clone();
        Closure::wrap(Box::new(move |entries: js_sys::Array| {
            let ratios = entries
                .iter()
                .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|e| e.intersection_ratio());
            if let Some(ratio) = latest_ratio(ratios) {
                show_panel.set(panel_visible(ratio));
            }
        }) as Box<dyn FnMut(js_sys::Array)>)
    };
    let options = IntersectionObserverInit::new();
    let thresholds: js_sys::Array = observer_thresholds().iter().map(|&t| JsValue::from_f64(t)).collect();
    options.set_threshold(&thresholds);
    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(target);
            Some((observer, callback))
        }
        Err(e) => {
            // No observer support: keep the panel usable.
            log::warn!("IntersectionObserver unavailable: {:?}", e);
            show_panel.set(true);
            None
        }
    }
}
