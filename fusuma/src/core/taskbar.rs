use super::{compute_focused, Catalog, WindowRecord, WindowRegistry};
use fusuma_ipc::{TabInfo, WindowId};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabAction {
    Restore,
    Minimize,
    Focus,
}

/// Decides what a click on the taskbar tab of `id` does.
pub fn tab_action(registry: &WindowRegistry, id: &WindowId) -> Option<TabAction> {
    let window = registry.get(id)?;
    if window.is_minimized {
        return Some(TabAction::Restore);
    }
    if compute_focused(registry.iter()).as_ref() == Some(id) {
        Some(TabAction::Minimize)
    } else {
        Some(TabAction::Focus)
    }
}

/// One tab per window, in the order the windows were opened.
pub fn tabs(
    records: &[Arc<WindowRecord>],
    focused: Option<&WindowId>,
    catalog: &Catalog,
) -> Vec<TabInfo> {
    records
        .iter()
        .map(|w| TabInfo {
            id: w.id.clone(),
            app: w.app_id,
            title: w.title.clone(),
            color: catalog.title_bar_color(w.app_id).to_string(),
            focused: !w.is_minimized && focused == Some(&w.id),
            minimized: w.is_minimized,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StartMenu {
    open: bool,
}

impl StartMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns whether the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::take(&mut self.open)
    }
}
