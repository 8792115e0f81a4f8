use fusuma_ipc::{AppId, Response, WindowId};

/// Work for the hosted applications, produced by state changes and carried
/// out by the runtime after the state update completes.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Mount(WindowId),
    ContextChanged(WindowId),
    Unmount { window_id: WindowId, app_id: AppId },
    Activate { window_id: WindowId, item: String },
}

/// Outcome of one command: the protocol reply plus whatever the hosted
/// applications must do about it.
#[derive(Debug)]
pub struct CommandResult {
    pub response: Response,
    pub effects: Vec<Effect>,
}

impl CommandResult {
    pub fn ok(effects: Vec<Effect>) -> Self {
        Self {
            response: Response::Ok,
            effects,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Response::Error {
            message: message.into(),
        }
        .into()
    }
}

impl From<Response> for CommandResult {
    fn from(response: Response) -> Self {
        Self {
            response,
            effects: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_carries_message_and_no_effects() {
        let result = CommandResult::error("bad line");
        assert_eq!(
            result.response,
            Response::Error {
                message: "bad line".into()
            }
        );
        assert!(result.effects.is_empty());
    }
}
