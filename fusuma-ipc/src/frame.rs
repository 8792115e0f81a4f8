use serde::{Deserialize, Serialize};

use crate::{AppId, WindowId};

/// Everything a presentation layer needs to draw one pass of the desktop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub taskbar_height: u32,
    /// Non-minimized windows, back to front.
    pub windows: Vec<WindowInfo>,
    /// Taskbar tabs in the order the windows were opened.
    pub tabs: Vec<TabInfo>,
    pub focused: Option<WindowId>,
    pub start_menu_open: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowInfo {
    pub id: WindowId,
    pub app: AppId,
    pub title: String,
    pub geometry: WindowGeometry,
    pub stack_order: u64,
    pub maximized: bool,
    pub title_bar_color: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: WindowId,
    pub app: AppId,
    pub title: String,
    pub color: String,
    pub focused: bool,
    pub minimized: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}
