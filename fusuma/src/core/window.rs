use super::{ApplicationDescriptor, Point, Rect, Size, Viewport};
use fusuma_ipc::{AppContext, AppId, WindowId};

#[derive(Debug, Clone, PartialEq)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app_id: AppId,
    pub title: String,
    pub position: Point,
    pub size: Size,
    pub stack_order: u64,
    pub is_minimized: bool,
    pub context: Option<AppContext>,
    // Present exactly while the window is maximized.
    restore_geometry: Option<Rect>,
}

impl WindowRecord {
    pub fn new(
        id: WindowId,
        descriptor: &ApplicationDescriptor,
        position: Point,
        stack_order: u64,
        context: Option<AppContext>,
    ) -> Self {
        Self {
            id,
            app_id: descriptor.app_id,
            title: descriptor.title.clone(),
            position,
            size: descriptor.default_size,
            stack_order,
            is_minimized: false,
            context,
            restore_geometry: None,
        }
    }

    pub fn is_maximized(&self) -> bool {
        self.restore_geometry.is_some()
    }

    #[cfg(test)]
    pub fn restore_geometry(&self) -> Option<Rect> {
        self.restore_geometry
    }

    pub fn frame(&self) -> Rect {
        Rect::from_parts(self.position, self.size)
    }

    /// Where the window is actually drawn.
    pub fn display_frame(&self, viewport: &Viewport) -> Rect {
        if self.is_maximized() {
            viewport.maximized_frame()
        } else {
            self.frame()
        }
    }

    pub fn maximize(&mut self) {
        if self.restore_geometry.is_none() {
            self.restore_geometry = Some(self.frame());
        }
    }

    pub fn restore(&mut self) {
        if let Some(saved) = self.restore_geometry.take() {
            self.position = saved.position();
            self.size = saved.size();
        }
    }

    /// Flips between maximized and restored. Returns the new maximized state.
    pub fn toggle_maximize(&mut self) -> bool {
        if self.is_maximized() {
            self.restore();
        } else {
            self.maximize();
        }
        self.is_maximized()
    }
}
