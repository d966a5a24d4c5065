use bikeflow::prelude::*;
use std::sync::Arc;
use tokio::{
    sync::{RwLock, watch},
    task::JoinHandle,
};
use tracing::debug;

pub struct AppState {
    pub markers: RwLock<MarkerLayer>,
    pub viewport: RwLock<Viewport>,
    pub layers: Vec<LineLayer>,
    pub style: MarkerStyle,
}

impl AppState {
    /// Builds the marker layer for the initial viewport. The returned
    /// receiver yields the context after every viewport event.
    pub fn new(
        stations: Vec<StationTraffic>,
        layers: Vec<LineLayer>,
        options: MapOptions,
        max_radius: f64,
    ) -> (Self, watch::Receiver<ViewportContext>) {
        let mut viewport = Viewport::new(options);
        let (sender, receiver) = watch::channel(*viewport.context());
        viewport.on_viewport_change(move |context, _| {
            sender.send_replace(*context);
        });

        let mut markers = MarkerLayer::fit(stations, max_radius);
        markers.reposition(viewport.context());

        let state = Self {
            markers: RwLock::new(markers),
            viewport: RwLock::new(viewport),
            layers,
            style: MarkerStyle::default(),
        };
        (state, receiver)
    }
}

/// Reprojects the marker layer whenever the viewport changes. The watch
/// channel only keeps the latest context, so a burst of events collapses
/// into one pass over the newest viewport.
pub fn spawn_reprojection(
    state: Arc<AppState>,
    mut receiver: watch::Receiver<ViewportContext>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while receiver.changed().await.is_ok() {
            let context = *receiver.borrow_and_update();
            if !state.markers.write().await.reposition(&context) {
                debug!("Dropped stale viewport revision {}", context.revision);
            }
        }
    })
}
