use super::{
    compute_focused, interaction, launch, tab_action, Catalog, Interactions, LaunchDecision, Point,
    Stacking, StartMenu, TabAction, Viewport, WindowRecord, WindowRegistry,
};
use crate::effect::{CommandResult, Effect};
use fusuma_ipc::{AppContext, AppId, Command, PointerTarget, WindowId};
use std::sync::Arc;

/// Single writer for all window-management state.
pub struct State {
    pub registry: WindowRegistry,
    pub start_menu: StartMenu,
    pub viewport: Viewport,
    stacking: Stacking,
    interactions: Interactions,
    catalog: Catalog,
}

/// A consistent read-only view for one render pass.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub windows: Vec<Arc<WindowRecord>>,
    pub focused: Option<WindowId>,
    pub viewport: Viewport,
    pub start_menu_open: bool,
}

impl Snapshot {
    /// Non-minimized windows, back to front.
    pub fn visible(&self) -> Vec<&Arc<WindowRecord>> {
        let mut visible: Vec<_> = self.windows.iter().filter(|w| !w.is_minimized).collect();
        visible.sort_by_key(|w| w.stack_order);
        visible
    }
}

impl State {
    pub fn new(catalog: Catalog, viewport: Viewport) -> Self {
        Self {
            registry: WindowRegistry::new(),
            start_menu: StartMenu::default(),
            viewport,
            stacking: Stacking::new(),
            interactions: Interactions::new(),
            catalog,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[cfg(test)]
    pub fn interactions(&self) -> &Interactions {
        &self.interactions
    }

    pub fn focused(&self) -> Option<WindowId> {
        compute_focused(self.registry.iter())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            windows: self.registry.snapshot(),
            focused: self.focused(),
            viewport: self.viewport,
            start_menu_open: self.start_menu.is_open(),
        }
    }

    pub fn handle_command(&mut self, command: &Command) -> CommandResult {
        let focused_before = self.focused();

        let effects = match command {
            Command::OpenApp { app, context } => self.open_app(*app, context.clone()),
            Command::CloseWindow { window } => self.close_window(window),
            Command::MinimizeWindow { window } => {
                self.minimize_window(window);
                vec![]
            }
            Command::FocusWindow { window } => {
                self.focus_window(window);
                vec![]
            }
            Command::ToggleMaximize { window } | Command::DoubleClickTitle { window } => {
                self.toggle_maximize(window);
                vec![]
            }
            Command::PointerDown {
                window,
                target,
                x,
                y,
            } => {
                self.pointer_down(window, *target, Point::new(*x, *y));
                vec![]
            }
            Command::PointerMove { x, y } => {
                self.pointer_move(Point::new(*x, *y));
                vec![]
            }
            Command::PointerUp | Command::PointerCancel => {
                self.interactions.release();
                vec![]
            }
            Command::TaskbarClick { window } => {
                self.taskbar_click(window);
                vec![]
            }
            Command::ToggleStartMenu => {
                let open = self.start_menu.toggle();
                tracing::debug!("Start menu open: {}", open);
                vec![]
            }
            Command::CloseStartMenu | Command::ClickDesktop => {
                self.start_menu.close();
                vec![]
            }
            Command::Activate { window, item } => {
                if self.registry.contains(window) {
                    vec![Effect::Activate {
                        window_id: window.clone(),
                        item: item.clone(),
                    }]
                } else {
                    tracing::debug!("Activate for unknown window {}", window);
                    vec![]
                }
            }
            Command::SetTitle { window, title } => {
                self.set_title(window, title);
                vec![]
            }
            Command::SetViewport { width, height } => {
                self.viewport.width = *width;
                self.viewport.height = *height;
                tracing::info!("Viewport resized to {}x{}", width, height);
                vec![]
            }
            // Answered by the runtime, which owns the hosted applications.
            Command::GetFrame | Command::Quit => vec![],
        };

        let focused_after = self.focused();
        if focused_before != focused_after {
            tracing::info!("Focus changed: {:?} -> {:?}", focused_before, focused_after);
        }

        CommandResult::ok(effects)
    }

    pub fn open_app(&mut self, app_id: AppId, context: Option<AppContext>) -> Vec<Effect> {
        let effects = match launch::route(&self.catalog, &self.registry, app_id, context) {
            LaunchDecision::Unknown(app_id) => {
                tracing::warn!("No descriptor for application {}", app_id);
                return vec![];
            }
            LaunchDecision::Reuse { id, context } => {
                let mut navigated = false;
                self.registry.update(&id, |w| {
                    w.is_minimized = false;
                    if let Some(context) = context {
                        navigated = w.context.as_ref() != Some(&context);
                        w.context = Some(context);
                    }
                });
                self.stacking.bring_to_front(&mut self.registry, &id);
                if navigated {
                    vec![Effect::ContextChanged(id)]
                } else {
                    vec![]
                }
            }
            LaunchDecision::Create { app_id, context } => {
                let Some(descriptor) = self.catalog.descriptor(app_id) else {
                    return vec![];
                };
                let token = self.stacking.next_token();
                let window = self.registry.create(descriptor, context, token);
                vec![Effect::Mount(window.id.clone())]
            }
        };

        self.start_menu.close();
        effects
    }

    pub fn close_window(&mut self, id: &WindowId) -> Vec<Effect> {
        self.interactions.cancel(id);
        match self.registry.remove(id) {
            Some(window) => vec![Effect::Unmount {
                window_id: window.id.clone(),
                app_id: window.app_id,
            }],
            None => {
                tracing::debug!("Close for unknown window {}", id);
                vec![]
            }
        }
    }

    pub fn minimize_window(&mut self, id: &WindowId) {
        self.interactions.cancel(id);
        self.registry.update(id, |w| w.is_minimized = true);
    }

    pub fn focus_window(&mut self, id: &WindowId) {
        if self.registry.contains(id) {
            self.stacking.bring_to_front(&mut self.registry, id);
        }
    }

    pub fn toggle_maximize(&mut self, id: &WindowId) {
        if let Some(maximized) = interaction::toggle_maximize(&mut self.registry, id) {
            tracing::debug!("Window {} maximized: {}", id, maximized);
        }
    }

    /// Any pointer-down on a window raises it; the title bar and the resize
    /// handle additionally start a gesture when the window is not maximized.
    pub fn pointer_down(&mut self, id: &WindowId, target: PointerTarget, pointer: Point) {
        if !self.registry.contains(id) {
            tracing::debug!("Pointer down on unknown window {}", id);
            return;
        }
        self.stacking.bring_to_front(&mut self.registry, id);
        match target {
            PointerTarget::TitleBar => {
                self.interactions.begin_drag(&self.registry, id, pointer);
            }
            PointerTarget::ResizeHandle => {
                self.interactions.begin_resize(&self.registry, id, pointer);
            }
            PointerTarget::Body => {}
        }
    }

    pub fn pointer_move(&mut self, pointer: Point) {
        self.interactions
            .pointer_move(&mut self.registry, pointer, &self.viewport);
    }

    pub fn taskbar_click(&mut self, id: &WindowId) {
        match tab_action(&self.registry, id) {
            Some(TabAction::Restore) => {
                self.registry.update(id, |w| w.is_minimized = false);
                self.stacking.bring_to_front(&mut self.registry, id);
            }
            Some(TabAction::Minimize) => self.minimize_window(id),
            Some(TabAction::Focus) => {
                self.stacking.bring_to_front(&mut self.registry, id);
            }
            None => tracing::debug!("Taskbar click for unknown window {}", id),
        }
    }

    pub fn set_title(&mut self, id: &WindowId, title: &str) {
        self.registry.update(id, |w| {
            if w.title != title {
                tracing::debug!("Window {} retitled: {} -> {}", w.id, w.title, title);
                w.title = title.to_string();
            }
        });
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(Catalog::builtin(), Viewport::default())
    }
}
