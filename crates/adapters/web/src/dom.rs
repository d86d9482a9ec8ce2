//! Live-document implementations of the page and control ports.

use alarmclock_app::ports::{SettingsPage, TriggerControl};
use alarmclock_domain::id::ControlId;
use alarmclock_domain::page::{DayToggle, DisplayControls, PageSnapshot, ScheduleEntryGroup};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement};

use crate::config::WebConfig;

/// `data-save-binding-id`, the element's stable identity across lookups.
const BINDING_ID_KEY: &str = "saveBindingId";

/// Reads the settings form straight from the document.
pub struct DomPage {
    document: Document,
    config: WebConfig,
}

impl DomPage {
    pub fn new(document: Document, config: WebConfig) -> Self {
        Self { document, config }
    }

    fn groups(&self) -> Vec<ScheduleEntryGroup> {
        let Ok(nodes) = self.document.query_selector_all(&self.config.groups_selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|index| nodes.get(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|group| read_group(&group))
            .collect()
    }

    fn input_by_id(&self, id: &str) -> Option<HtmlInputElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
    }

    fn display(&self) -> DisplayControls {
        DisplayControls {
            auto: self
                .input_by_id(&self.config.display_auto_id)
                .map(|input| input.checked()),
            on_time: self
                .input_by_id(&self.config.display_on_id)
                .map(|input| input.value()),
            off_time: self
                .input_by_id(&self.config.display_off_id)
                .map(|input| input.value()),
        }
    }
}

impl SettingsPage for DomPage {
    fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            groups: self.groups(),
            display: self.display(),
        }
    }
}

fn first_input(group: &Element, selector: &str) -> Option<HtmlInputElement> {
    group
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
}

fn read_group(group: &Element) -> ScheduleEntryGroup {
    let toggles = group
        .query_selector_all(r#"input[type="checkbox"]"#)
        .map(|nodes| {
            (0..nodes.length())
                .filter_map(|index| nodes.get(index))
                .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
                .map(|checkbox| {
                    let label = checkbox
                        .parent_element()
                        .and_then(|parent| parent.text_content())
                        .unwrap_or_default();
                    DayToggle::new(label, checkbox.checked())
                })
                .collect()
        })
        .unwrap_or_default();

    ScheduleEntryGroup {
        time: first_input(group, r#"input[type="time"]"#).map(|input| input.value()),
        text: first_input(group, r#"input[type="text"]"#).map(|input| input.value()),
        toggles,
    }
}

/// The page's save button.
pub struct DomTriggerControl {
    button: HtmlButtonElement,
}

impl DomTriggerControl {
    /// Look up the button by element id.
    pub fn find(document: &Document, id: &str) -> Option<Self> {
        let button = document
            .get_element_by_id(id)?
            .dyn_into::<HtmlButtonElement>()
            .ok()?;
        Some(Self { button })
    }

    /// Identity stored on the element itself, assigned on first lookup.
    pub fn control_id(&self) -> ControlId {
        let dataset = self.button.dataset();
        if let Some(id) = dataset
            .get(BINDING_ID_KEY)
            .and_then(|raw| raw.parse::<ControlId>().ok())
        {
            return id;
        }

        let id = ControlId::new();
        if dataset.set(BINDING_ID_KEY, &id.to_string()).is_err() {
            web_sys::console::warn_1(&"cannot tag save button with its binding id".into());
        }
        id
    }

    pub fn element(&self) -> &HtmlButtonElement {
        &self.button
    }
}

impl TriggerControl for DomTriggerControl {
    fn set_enabled(&self, enabled: bool) {
        self.button.set_disabled(!enabled);
    }

    fn set_label(&self, label: &str) {
        self.button.set_text_content(Some(label));
    }
}
