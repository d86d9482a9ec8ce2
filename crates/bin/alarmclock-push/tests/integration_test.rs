//! End-to-end tests for the full save pipeline.
//!
//! Each test starts a stub alarm clock (axum on an ephemeral port), wires the
//! real reqwest sink into the real save service, and triggers a save from a
//! TOML page snapshot.

use std::cell::RefCell;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use alarmclock_adapter_http_reqwest::{HttpSink, HttpSinkConfig};
use alarmclock_app::action_control::ActionControl;
use alarmclock_app::ports::{Timer, TriggerControl};
use alarmclock_app::services::save_settings_service::SaveSettingsService;
use alarmclock_domain::control::{ActionControlState, ControlLabels};
use alarmclock_domain::id::ControlId;
use alarmclock_domain::page::PageSnapshot;
use alarmclock_domain::submission::SubmissionOutcome;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;

#[derive(Clone, Default)]
struct Device {
    alarms: Arc<Mutex<Vec<String>>>,
    display: Arc<Mutex<Vec<String>>>,
    display_status: Arc<Mutex<Option<StatusCode>>>,
}

async fn save_alarms(State(device): State<Device>, body: String) -> StatusCode {
    device.alarms.lock().unwrap().push(body);
    StatusCode::OK
}

async fn save_display_settings(State(device): State<Device>, body: String) -> StatusCode {
    device.display.lock().unwrap().push(body);
    device.display_status.lock().unwrap().unwrap_or(StatusCode::OK)
}

async fn start_device(device: Device) -> String {
    let app = Router::new()
        .route("/save_alarms", post(save_alarms))
        .route("/save_display_settings", post(save_display_settings))
        .with_state(device);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port should bind");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[derive(Default)]
struct Labels(RefCell<Vec<String>>);

impl TriggerControl for Labels {
    fn set_enabled(&self, _enabled: bool) {}

    fn set_label(&self, label: &str) {
        self.0.borrow_mut().push(label.to_string());
    }
}

struct NoDelay;

impl Timer for NoDelay {
    fn sleep(&self, _duration: Duration) -> impl Future<Output = ()> {
        async {}
    }
}

fn service(base_url: String) -> SaveSettingsService<HttpSink, NoDelay> {
    let sink = HttpSink::new(HttpSinkConfig {
        base_url,
        ..HttpSinkConfig::default()
    })
    .expect("client should build");
    SaveSettingsService::new(sink, NoDelay)
}

fn control() -> ActionControl<Labels> {
    ActionControl::new(ControlId::new(), Labels::default(), ControlLabels::default())
}

const FULL_PAGE: &str = r#"
    [[groups]]
    time = "07:30"
    text = "Wake up"
    toggles = [
        { label = "Mo", checked = true },
        { label = "Di", checked = true },
        { label = "Mi", checked = true },
        { label = "Do", checked = true },
        { label = "Fr", checked = true },
        { label = "Sa", checked = false },
        { label = "So", checked = false },
    ]

    [[groups]]
    time = "09:00"
    text = ""
    toggles = [{ label = "So", checked = true }, { label = "Feiertag", checked = true }]

    [[groups]]
    time = " "
    text = " "

    [display]
    auto = false
    on_time = "06:00"
    off_time = "22:00"
"#;

#[tokio::test]
async fn should_push_both_payloads_and_report_success() {
    let device = Device::default();
    let service = service(start_device(device.clone()).await);
    let control = control();
    let page: PageSnapshot = toml::from_str(FULL_PAGE).unwrap();

    let outcome = service.trigger(Some(&control), &page).await;

    assert_eq!(outcome, Some(SubmissionOutcome::Succeeded));
    assert_eq!(
        *device.alarms.lock().unwrap(),
        ["07:30,Wake up,Di,Do,Fr,Mi,Mo,Aktiv\n09:00,Kein Text,So,Aktiv"]
    );
    assert_eq!(
        *device.display.lock().unwrap(),
        ["DISPLAY_AUTO=false\nDISPLAY_ON_TIME=06:00\nDISPLAY_OFF_TIME=22:00"]
    );
    assert_eq!(
        *control.control().0.borrow(),
        ["Speichern...", "Gespeichert", "Speichern"]
    );
    assert_eq!(control.state(), ActionControlState::Idle);
}

#[tokio::test]
async fn should_report_error_when_device_rejects_display_settings() {
    let device = Device::default();
    *device.display_status.lock().unwrap() = Some(StatusCode::INTERNAL_SERVER_ERROR);
    let service = service(start_device(device.clone()).await);
    let control = control();
    let page: PageSnapshot = toml::from_str(FULL_PAGE).unwrap();

    let outcome = service.trigger(Some(&control), &page).await;

    assert_eq!(outcome, Some(SubmissionOutcome::Failed));
    assert_eq!(device.alarms.lock().unwrap().len(), 1);
    assert_eq!(
        *control.control().0.borrow(),
        ["Speichern...", "Fehler", "Speichern"]
    );
}

#[tokio::test]
async fn should_send_nothing_for_an_empty_page() {
    let device = Device::default();
    let service = service(start_device(device.clone()).await);
    let control = control();

    let outcome = service
        .trigger(Some(&control), &PageSnapshot::default())
        .await;

    assert_eq!(outcome, Some(SubmissionOutcome::Succeeded));
    assert!(device.alarms.lock().unwrap().is_empty());
    assert!(device.display.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_report_error_when_device_is_unreachable() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let service = service(format!("http://{addr}"));
    let control = control();
    let page: PageSnapshot = toml::from_str(FULL_PAGE).unwrap();

    let outcome = service.trigger(Some(&control), &page).await;

    assert_eq!(outcome, Some(SubmissionOutcome::Failed));
    assert_eq!(control.state(), ActionControlState::Idle);
}
