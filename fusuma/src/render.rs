use crate::content::ContentRegistry;
use crate::core::{tabs, Catalog, Snapshot};
use fusuma_ipc::{Frame, WindowInfo};

/// Builds one frame from a single snapshot, so nothing in it can reflect a
/// half-applied update.
pub fn compose(snapshot: &Snapshot, catalog: &Catalog, content: &ContentRegistry) -> Frame {
    let windows = snapshot
        .visible()
        .into_iter()
        .map(|w| WindowInfo {
            id: w.id.clone(),
            app: w.app_id,
            title: w.title.clone(),
            geometry: w.display_frame(&snapshot.viewport).to_geometry(),
            stack_order: w.stack_order,
            maximized: w.is_maximized(),
            title_bar_color: catalog.title_bar_color(w.app_id).to_string(),
            content: content.render(w),
        })
        .collect();

    Frame {
        width: snapshot.viewport.width,
        height: snapshot.viewport.height,
        taskbar_height: snapshot.viewport.taskbar_height,
        windows,
        tabs: tabs(&snapshot.windows, snapshot.focused.as_ref(), catalog),
        focused: snapshot.focused.clone(),
        start_menu_open: snapshot.start_menu_open,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::HostHandle;
    use crate::core::State;
    use fusuma_ipc::{AppId, WindowGeometry};
    use tokio::sync::mpsc;

    #[test]
    fn test_frame_layers_and_tabs() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut state = State::default();
        let content = ContentRegistry::with_builtin(HostHandle::new(tx), state.catalog());

        state.open_app(AppId::Weather, None);
        let weather = state.focused().unwrap();
        state.open_app(AppId::Tasks, None);
        let tasks = state.focused().unwrap();
        state.open_app(AppId::Calculator, None);
        let calculator = state.focused().unwrap();

        state.focus_window(&weather);
        state.toggle_maximize(&weather);
        state.minimize_window(&tasks);

        let frame = compose(&state.snapshot(), state.catalog(), &content);

        let layered: Vec<_> = frame.windows.iter().map(|w| w.id.clone()).collect();
        assert_eq!(layered, vec![calculator, weather.clone()]);
        assert_eq!(
            frame.windows[1].geometry,
            WindowGeometry {
                x: 0,
                y: 0,
                width: 1920,
                height: 1080 - 48
            }
        );
        assert!(frame.windows[1].maximized);

        let tab_ids: Vec<_> = frame.tabs.iter().map(|t| t.id.clone()).collect();
        assert_eq!(tab_ids.len(), 3);
        assert!(frame.tabs[1].minimized);
        assert!(frame.tabs[0].focused);
        assert_eq!(frame.focused, Some(weather));
    }

    #[test]
    fn test_snapshot_outlives_later_updates() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut state = State::default();
        let content = ContentRegistry::with_builtin(HostHandle::new(tx), state.catalog());
        state.open_app(AppId::Weather, None);
        let id = state.focused().unwrap();

        let snapshot = state.snapshot();
        state.set_title(&id, "Forecast");
        state.close_window(&id);

        let frame = compose(&snapshot, state.catalog(), &content);
        assert_eq!(frame.windows.len(), 1);
        assert_eq!(frame.windows[0].title, "Weather");
    }
}
