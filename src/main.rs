#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use amis_quiz::UnitApp;
use amis_quiz::model::UnitId;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    let unit = match std::env::args().nth(1).as_deref() {
        Some("34") => UnitId::Unit34,
        _ => UnitId::Unit33,
    };

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        &format!("Amis Quiz - Unit {}", unit.number()),
        options,
        Box::new(move |cc| Ok(Box::new(UnitApp::new(cc, unit)))),
    )
}

// Web entry: the same page logic attached to the host canvas. The unit
// is picked from the query string so one build serves both pages.
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async move {
        let unit = unit_from_query();

        let document = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document");
        let canvas = document
            .get_element_by_id("unit_canvas")
            .expect("failed to find unit_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("unit_canvas was not an HtmlCanvasElement");

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| Ok(Box::new(UnitApp::new(cc, unit)))),
            )
            .await
            .expect("failed to start eframe");
    });
}

#[cfg(target_arch = "wasm32")]
fn unit_from_query() -> UnitId {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    if search.contains("unit=34") {
        UnitId::Unit34
    } else {
        UnitId::Unit33
    }
}
