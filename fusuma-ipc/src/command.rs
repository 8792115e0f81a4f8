use serde::{Deserialize, Serialize};

use crate::{AppContext, AppId, Frame, WindowId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    OpenApp {
        app: AppId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        context: Option<AppContext>,
    },
    CloseWindow {
        window: WindowId,
    },
    MinimizeWindow {
        window: WindowId,
    },
    FocusWindow {
        window: WindowId,
    },
    ToggleMaximize {
        window: WindowId,
    },
    DoubleClickTitle {
        window: WindowId,
    },
    PointerDown {
        window: WindowId,
        target: PointerTarget,
        x: i32,
        y: i32,
    },
    PointerMove {
        x: i32,
        y: i32,
    },
    PointerUp,
    PointerCancel,
    TaskbarClick {
        window: WindowId,
    },
    ToggleStartMenu,
    CloseStartMenu,
    ClickDesktop,
    /// User activated an item inside a hosted window. The item is only
    /// meaningful to the application in that window.
    Activate {
        window: WindowId,
        item: String,
    },
    SetTitle {
        window: WindowId,
        title: String,
    },
    SetViewport {
        width: u32,
        height: u32,
    },
    GetFrame,
    Quit,
}

/// Which part of a window received a pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerTarget {
    TitleBar,
    ResizeHandle,
    Body,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    Ok,
    Error { message: String },
    Frame { frame: Frame },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_app_without_context() {
        let cmd: Command =
            serde_json::from_str(r#"{"type":"open_app","app":"calculator"}"#).unwrap();
        assert_eq!(
            cmd,
            Command::OpenApp {
                app: AppId::Calculator,
                context: None
            }
        );
    }

    #[test]
    fn test_pointer_down_wire_format() {
        let cmd = Command::PointerDown {
            window: WindowId::new("win-1"),
            target: PointerTarget::ResizeHandle,
            x: 10,
            y: -4,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert_eq!(
            json,
            r#"{"type":"pointer_down","window":"win-1","target":"resize_handle","x":10,"y":-4}"#
        );
    }

    #[test]
    fn test_unit_variants() {
        let cmd: Command = serde_json::from_str(r#"{"type":"toggle_start_menu"}"#).unwrap();
        assert_eq!(cmd, Command::ToggleStartMenu);

        let json = serde_json::to_string(&Response::Ok).unwrap();
        assert_eq!(json, r#"{"type":"ok"}"#);
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        let result: Result<Command, _> = serde_json::from_str(r#"{"type":"reboot"}"#);
        assert!(result.is_err());
    }
}
