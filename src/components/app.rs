use super::region_map::RegionMap;
use crate::config::{SITE_TAGLINE, SITE_TITLE, WidgetConfig};
use yew::prelude::*;

#[derive(Clone, PartialEq)]
struct Section {
    id: &'static str,
    title: &'static str,
}

const SECTIONS: &[Section] = &[
    Section { id: "about", title: "About" },
    Section { id: "places", title: "Places" },
];

#[function_component(App)]
pub fn app() -> Html {
    let config = WidgetConfig::default();
    let nav = SECTIONS.iter().map(|s| {
        html! { <a key={s.id} href={format!("#{}", s.id)} style="color:#8b949e; text-decoration:none;">{ s.title }</a> }
    });

    html! {
        <div id="root" style="max-width:960px; margin:0 auto; padding:0 20px;">
            <header style="display:flex; justify-content:space-between; align-items:baseline; padding:28px 0 12px 0; border-bottom:1px solid #30363d;">
                <div>
                    <h1 style="margin:0; font-size:28px; color:#58a6ff;">{ SITE_TITLE }</h1>
                    <p style="margin:6px 0 0 0; opacity:0.8;">{ SITE_TAGLINE }</p>
                </div>
                <nav style="display:flex; gap:16px;">{ for nav }</nav>
            </header>
            <main>
                <section id="about" style="padding:32px 0;">
                    <h2 style="font-size:20px;">{"About"}</h2>
                    <p style="line-height:1.6; opacity:0.9;">
                        {"I build fast, reliable software, mostly in Rust, from backend services down to the browser. Scroll down to see where that has taken me."}
                    </p>
                </section>
                <section id="places" style="padding:32px 0;">
                    <h2 style="font-size:20px;">{"Places"}</h2>
                    <p style="line-height:1.6; opacity:0.9;">{"Pick a place to fly there. Regions I have lived in are outlined on the map."}</p>
                    <RegionMap config={config} />
                </section>
            </main>
            <footer style="padding:24px 0 40px 0; border-top:1px solid #30363d; font-size:12px; opacity:0.6;">
                { format!("© {}", SITE_TITLE) }
            </footer>
        </div>
    }
}
