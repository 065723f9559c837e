//! Host collaborators injected into the demo controller

use std::sync::Arc;

use parking_lot::RwLock;

/// Plain-text display (e.g. an on-screen label or a window title)
pub trait TextSink {
    fn set_text(&mut self, text: &str);
}

impl TextSink for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// Text shared between the controller and whatever displays it
#[derive(Debug, Clone, Default)]
pub struct SharedText(Arc<RwLock<String>>);

impl SharedText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> String {
        self.0.read().clone()
    }
}

impl TextSink for SharedText {
    fn set_text(&mut self, text: &str) {
        self.0.write().set_text(text);
    }
}

/// Process-wide render settings owned by the host application
pub trait RenderSettings {
    /// Vertical blanks to wait per presented frame (0 = vsync off)
    fn vsync_count(&self) -> u32;

    fn set_vsync_count(&mut self, count: u32);

    /// Switch vsync off if it is on, otherwise on
    fn toggle_vsync(&mut self) {
        let next = if self.vsync_count() == 0 { 1 } else { 0 };
        self.set_vsync_count(next);
    }
}

/// In-memory [`RenderSettings`] shared with the host
#[derive(Debug, Clone)]
pub struct SharedRenderSettings(Arc<RwLock<u32>>);

impl SharedRenderSettings {
    pub fn new(vsync: bool) -> Self {
        Self(Arc::new(RwLock::new(u32::from(vsync))))
    }

    pub fn vsync(&self) -> bool {
        *self.0.read() != 0
    }
}

impl Default for SharedRenderSettings {
    fn default() -> Self {
        Self::new(true)
    }
}

impl RenderSettings for SharedRenderSettings {
    fn vsync_count(&self) -> u32 {
        *self.0.read()
    }

    fn set_vsync_count(&mut self, count: u32) {
        *self.0.write() = count;
    }
}
