use crate::shared::Coordinate;
use serde::{Deserialize, Serialize};

/// Initial camera and zoom limits for a new map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapOptions {
    pub center: Coordinate,
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            center: Coordinate::new(-71.09415, 42.36027),
            zoom: 12.0,
            min_zoom: 5.0,
            max_zoom: 18.0,
            width: 1024.0,
            height: 768.0,
        }
    }
}

/// Snapshot of the camera that every projection is computed against.
///
/// `revision` increases with every applied [`ViewportEvent`], which lets
/// consumers tell a stale snapshot from a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportContext {
    pub center: Coordinate,
    pub zoom: f64,
    pub width: f64,
    pub height: f64,
    pub revision: u64,
}

impl ViewportContext {
    pub fn new(center: Coordinate, zoom: f64, width: f64, height: f64) -> Self {
        Self {
            center,
            zoom,
            width,
            height,
            revision: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ViewportEvent {
    Move { center: Coordinate },
    Zoom { zoom: f64 },
    Resize { width: f64, height: f64 },
    MoveEnd,
}

impl ViewportEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            ViewportEvent::Move { .. } => "move",
            ViewportEvent::Zoom { .. } => "zoom",
            ViewportEvent::Resize { .. } => "resize",
            ViewportEvent::MoveEnd => "move-end",
        }
    }
}

pub type ViewportHandler = Box<dyn FnMut(&ViewportContext, &ViewportEvent) + Send + Sync>;

/// Owns the live [`ViewportContext`] and tells subscribers about changes.
pub struct Viewport {
    context: ViewportContext,
    min_zoom: f64,
    max_zoom: f64,
    handlers: Vec<ViewportHandler>,
}

impl Viewport {
    /// Called once the map is ready.
    pub fn new(options: MapOptions) -> Self {
        let min_zoom = options.min_zoom.min(options.max_zoom);
        let max_zoom = options.max_zoom.max(options.min_zoom);
        let context = ViewportContext::new(
            options.center.wrapped(),
            options.zoom.clamp(min_zoom, max_zoom),
            options.width.max(0.0),
            options.height.max(0.0),
        );
        Self {
            context,
            min_zoom,
            max_zoom,
            handlers: Vec::new(),
        }
    }

    pub fn context(&self) -> &ViewportContext {
        &self.context
    }

    pub fn zoom_limits(&self) -> (f64, f64) {
        (self.min_zoom, self.max_zoom)
    }

    pub fn on_viewport_change<F>(&mut self, handler: F)
    where
        F: FnMut(&ViewportContext, &ViewportEvent) + Send + Sync + 'static,
    {
        self.handlers.push(Box::new(handler));
    }

    /// Updates the context and notifies every handler, in registration order.
    /// A non-finite center or zoom leaves the context as it was, but the
    /// revision is still bumped.
    pub fn apply(&mut self, event: ViewportEvent) -> ViewportContext {
        match event {
            ViewportEvent::Move { center } if center.is_finite() => {
                self.context.center = center.wrapped()
            }
            ViewportEvent::Move { .. } => (),
            ViewportEvent::Zoom { zoom } if zoom.is_finite() => {
                self.context.zoom = zoom.clamp(self.min_zoom, self.max_zoom)
            }
            ViewportEvent::Zoom { .. } => (),
            ViewportEvent::Resize { width, height } => {
                self.context.width = width.max(0.0);
                self.context.height = height.max(0.0);
            }
            ViewportEvent::MoveEnd => (),
        }
        self.context.revision += 1;

        let context = self.context;
        self.handlers
            .iter_mut()
            .for_each(|handler| handler(&context, &event));
        context
    }
}
