pub mod app;
pub mod command;
pub mod frame;

pub use app::{AppContext, AppId, WindowId};
pub use command::{Command, PointerTarget, Response};
pub use frame::{Frame, TabInfo, WindowGeometry, WindowInfo};
