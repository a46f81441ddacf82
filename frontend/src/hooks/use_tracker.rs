use futures::lock::Mutex;
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::TrackerConfig;
use crate::controller::{BrowserTracker, FollowUp, TrackerAction};
use crate::state::TrackerView;

pub struct UseTrackerResult {
    pub view: TrackerView,
    pub dispatch: Callback<TrackerAction>,
}

struct TrackerHandle {
    controller: Mutex<BrowserTracker>,
    initial_view: TrackerView,
}

/// Own a browser-wired controller for the lifetime of the component
///
/// Actions run one at a time: each takes the controller lock, so a second
/// click waits for the first operation (and its reloads) to finish. The view
/// snapshot is republished after every action.
#[hook]
pub fn use_tracker(config: &TrackerConfig) -> UseTrackerResult {
    let handle = {
        let config = config.clone();
        use_memo((), move |_| {
            let controller = BrowserTracker::for_browser(config);
            let initial_view = controller.view();
            TrackerHandle {
                controller: Mutex::new(controller),
                initial_view,
            }
        })
    };

    let view = {
        let handle = handle.clone();
        use_state(move || handle.initial_view.clone())
    };

    let dispatch = {
        let handle = handle.clone();
        let view = view.clone();
        use_callback((), move |action: TrackerAction, _| {
            let handle = handle.clone();
            let view = view.clone();
            spawn_local(async move {
                run_action(&handle.controller, &view, action).await;
            });
        })
    };

    // Initial load
    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            dispatch.emit(TrackerAction::Init);
            || ()
        });
    }

    UseTrackerResult {
        view: (*view).clone(),
        dispatch,
    }
}

async fn run_action(
    controller: &Mutex<BrowserTracker>,
    view: &UseStateHandle<TrackerView>,
    action: TrackerAction,
) {
    let follow_up = {
        let mut tracker = controller.lock().await;
        let follow_up = tracker.apply(action).await;
        view.set(tracker.view());
        follow_up
    };

    // Let the modal mount its canvas before drawing into it
    if let FollowUp::RedrawChartAfter(delay) = follow_up {
        TimeoutFuture::new(u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)).await;
        let mut tracker = controller.lock().await;
        tracker.redraw_chart_if_open();
        view.set(tracker.view());
    }
}
