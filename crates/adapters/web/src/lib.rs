//! # alarmclock-adapter-web
//!
//! Runs the save action inside the device's settings page.
//!
//! The page is served by the alarm clock itself; this crate does not render
//! anything. On start it waits for the document to become interactive, then
//! attaches the save action to the `saveButton` element (once per element,
//! however often binding runs) and exposes `saveAllSettings` to scripts.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use alarmclock_app::action_control::ActionControl;
use alarmclock_app::bindings::TriggerBindings;
use alarmclock_app::services::save_settings_service::SaveSettingsService;
use alarmclock_domain::id::ControlId;
use alarmclock_domain::page::DocumentReadiness;
use wasm_bindgen::prelude::*;
use web_sys::Document;

pub mod config;
mod dom;
pub mod error;
mod sink;
mod timer;

use config::WebConfig;
use dom::{DomPage, DomTriggerControl};
use sink::FetchSink;
use timer::GlooTimer;

type SaveService = SaveSettingsService<FetchSink, GlooTimer>;

thread_local! {
    static BINDINGS: RefCell<TriggerBindings> = RefCell::new(TriggerBindings::new());
    static CONTROLS: RefCell<HashMap<ControlId, Rc<ActionControl<DomTriggerControl>>>> =
        RefCell::new(HashMap::new());
}

/// Entry point: bind now if the page is ready, otherwise on `DOMContentLoaded`.
#[wasm_bindgen(start)]
pub fn start() {
    let Some(document) = document() else {
        return;
    };
    let readiness = document
        .ready_state()
        .parse()
        .unwrap_or(DocumentReadiness::Loading);

    if readiness.is_ready() {
        bind_save_trigger();
        return;
    }

    let on_ready = Closure::<dyn FnMut(web_sys::Event)>::new(|_: web_sys::Event| {
        bind_save_trigger();
    });
    if document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .is_err()
    {
        web_sys::console::warn_1(&"cannot wait for DOMContentLoaded, binding now".into());
        bind_save_trigger();
    }
    on_ready.forget();
}

/// Attach the save action to the trigger control, at most once per element.
///
/// Returns `true` when the control was newly bound.
#[wasm_bindgen(js_name = bindSaveTrigger)]
pub fn bind_save_trigger() -> bool {
    let config = WebConfig::default();
    let Some(document) = document() else {
        return false;
    };
    let Some(control) = action_control(&document, &config) else {
        return false;
    };

    let element = control.control().element();
    let newly_bound = BINDINGS.with(|bindings| {
        bindings.borrow_mut().bind(control.id(), || {
            let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(|_: web_sys::Event| {
                save_all_settings();
            });
            let attached = element
                .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
                .is_ok();
            if attached {
                on_click.forget();
            }
            attached
        })
    });

    if newly_bound {
        web_sys::console::log_1(&"save button bound".into());
    }
    newly_bound
}

/// Run the save action; a no-op when the page has no trigger control.
#[wasm_bindgen(js_name = saveAllSettings)]
pub fn save_all_settings() {
    let config = WebConfig::default();
    let Some(document) = document() else {
        return;
    };
    let control = action_control(&document, &config);
    let service = service(&config);
    let page = DomPage::new(document, config);

    wasm_bindgen_futures::spawn_local(async move {
        service.trigger(control.as_deref(), &page).await;
    });
}

fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

fn service(config: &WebConfig) -> SaveService {
    SaveSettingsService::new(FetchSink::new(config.endpoints.clone()), GlooTimer)
        .with_revert_delay(config.revert_delay())
}

/// Look up the trigger element and return the action control for it,
/// creating one the first time this element is seen.
fn action_control(
    document: &Document,
    config: &WebConfig,
) -> Option<Rc<ActionControl<DomTriggerControl>>> {
    let control = DomTriggerControl::find(document, &config.trigger_id)?;
    let id = control.control_id();

    let action = CONTROLS.with(|controls| {
        Rc::clone(
            controls
                .borrow_mut()
                .entry(id)
                .or_insert_with(|| Rc::new(ActionControl::new(id, control, config.labels.clone()))),
        )
    });
    Some(action)
}
