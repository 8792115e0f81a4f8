use crate::core::{Catalog, WindowRecord, WindowRegistry, ROOT_FOLDER};
use crate::effect::Effect;
use fusuma_ipc::{AppContext, AppId, WindowId};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;

const REPLY_DELAY: Duration = Duration::from_millis(800);

/// A request a hosted application makes of the window manager.
#[derive(Debug, Clone, PartialEq)]
pub enum AppRequest {
    SetTitle {
        window: WindowId,
        title: String,
    },
    Open {
        app: AppId,
        context: Option<AppContext>,
    },
    /// Result of background work, handed back to the application that
    /// started it.
    Reply {
        window: WindowId,
        text: String,
    },
}

/// The only way back into the window manager from a hosted application.
/// Requests are queued, so calling these never blocks and never re-enters
/// the state that is currently being updated.
#[derive(Debug, Clone)]
pub struct HostHandle {
    tx: mpsc::UnboundedSender<AppRequest>,
}

impl HostHandle {
    pub fn new(tx: mpsc::UnboundedSender<AppRequest>) -> Self {
        Self { tx }
    }

    pub fn set_title(&self, window: &WindowId, title: impl Into<String>) {
        self.send(AppRequest::SetTitle {
            window: window.clone(),
            title: title.into(),
        });
    }

    pub fn open_app(&self, app: AppId) {
        self.send(AppRequest::Open { app, context: None });
    }

    pub fn open_with_context(&self, app: AppId, context: AppContext) {
        self.send(AppRequest::Open {
            app,
            context: Some(context),
        });
    }

    pub fn reply(&self, window: &WindowId, text: impl Into<String>) {
        self.send(AppRequest::Reply {
            window: window.clone(),
            text: text.into(),
        });
    }

    fn send(&self, request: AppRequest) {
        if self.tx.send(request).is_err() {
            tracing::warn!("Window manager stopped; dropping application request");
        }
    }
}

/// Content of one application's windows. Only `render` is required.
pub trait AppContent: Send {
    fn render(&self, window: &WindowRecord) -> String;

    fn mounted(&mut self, _window: &WindowRecord, _host: &HostHandle) {}

    fn context_changed(&mut self, _window: &WindowRecord, _host: &HostHandle) {}

    fn activated(&mut self, _window: &WindowRecord, _item: &str, _host: &HostHandle) {}

    fn delivered(&mut self, _window: &WindowRecord, _text: &str, _host: &HostHandle) {}

    fn unmounted(&mut self, _window_id: &WindowId) {}
}

/// Dispatch table from application id to its content, built once.
pub struct ContentRegistry {
    handlers: HashMap<AppId, Box<dyn AppContent>>,
    host: HostHandle,
}

impl ContentRegistry {
    pub fn new(host: HostHandle) -> Self {
        Self {
            handlers: HashMap::new(),
            host,
        }
    }

    pub fn with_builtin(host: HostHandle, catalog: &Catalog) -> Self {
        let mut registry = Self::new(host);
        registry.register(AppId::FileExplorer, FolderView);
        registry.register(AppId::TvRetro, Player);
        registry.register(AppId::MyApps, Launcher::from_catalog(catalog));
        registry.register(AppId::Brain, Assistant::new(REPLY_DELAY));
        for descriptor in catalog.descriptors() {
            if !registry.handlers.contains_key(&descriptor.app_id) {
                registry.register(descriptor.app_id, Placeholder);
            }
        }
        registry
    }

    pub fn register(&mut self, app_id: AppId, content: impl AppContent + 'static) {
        self.handlers.insert(app_id, Box::new(content));
    }

    pub fn render(&self, window: &WindowRecord) -> String {
        match self.handlers.get(&window.app_id) {
            Some(handler) => handler.render(window),
            None => String::new(),
        }
    }

    pub fn apply(&mut self, effect: &Effect, windows: &WindowRegistry) {
        match effect {
            Effect::Mount(id) => {
                if let Some((window, handler)) = lookup(&mut self.handlers, windows, id) {
                    handler.mounted(window, &self.host);
                }
            }
            Effect::ContextChanged(id) => {
                if let Some((window, handler)) = lookup(&mut self.handlers, windows, id) {
                    handler.context_changed(window, &self.host);
                }
            }
            Effect::Activate { window_id, item } => {
                if let Some((window, handler)) = lookup(&mut self.handlers, windows, window_id) {
                    handler.activated(window, item, &self.host);
                }
            }
            Effect::Unmount { window_id, app_id } => {
                if let Some(handler) = self.handlers.get_mut(app_id) {
                    handler.unmounted(window_id);
                }
            }
        }
    }
}

impl ContentRegistry {
    /// Hands a background reply to the window that asked for it. Replies for
    /// windows closed in the meantime are dropped.
    pub fn deliver(&mut self, window_id: &WindowId, text: &str, windows: &WindowRegistry) {
        match lookup(&mut self.handlers, windows, window_id) {
            Some((window, handler)) => handler.delivered(window, text, &self.host),
            None => tracing::debug!("Dropping reply for closed window {}", window_id),
        }
    }
}

fn lookup<'a>(
    handlers: &'a mut HashMap<AppId, Box<dyn AppContent>>,
    windows: &'a WindowRegistry,
    id: &WindowId,
) -> Option<(&'a WindowRecord, &'a mut Box<dyn AppContent>)> {
    let window = windows.get(id)?;
    let handler = handlers.get_mut(&window.app_id)?;
    Some((window.as_ref(), handler))
}

const FOLDERS: &[(&str, &str)] = &[
    (ROOT_FOLDER, "My Computer"),
    ("folder-my-documents", "My Documents"),
    ("folder-my-recent-docs", "My Recent Documents"),
    ("folder-my-pictures", "My Pictures"),
    ("folder-my-music", "My Music"),
    ("folder-my-videos", "My Videos"),
    ("folder-my-games", "My Games"),
    ("folder-my-projects", "My Projects"),
];

const CHANNELS: &[(&str, &str)] = &[
    ("video-lofi-girl", "Lofi Girl Radio"),
    ("video-synthwave", "Synthwave Retro Mix"),
    ("video-fireplace", "Cozy Fireplace"),
    ("video-jazz", "Late Night Jazz"),
];

fn folder_name(context: Option<&AppContext>) -> &'static str {
    let id = context.map(|c| c.as_str()).unwrap_or(ROOT_FOLDER);
    FOLDERS
        .iter()
        .find(|(folder, _)| *folder == id)
        .map(|(_, name)| *name)
        .unwrap_or("My Computer")
}

/// File explorer. Names its window after the folder it shows; activating a
/// folder navigates, activating a video hands it to the TV player.
struct FolderView;

impl AppContent for FolderView {
    fn render(&self, window: &WindowRecord) -> String {
        format!("[{}]", folder_name(window.context.as_ref()))
    }

    fn mounted(&mut self, window: &WindowRecord, host: &HostHandle) {
        host.set_title(&window.id, folder_name(window.context.as_ref()));
    }

    fn context_changed(&mut self, window: &WindowRecord, host: &HostHandle) {
        host.set_title(&window.id, folder_name(window.context.as_ref()));
    }

    fn activated(&mut self, _window: &WindowRecord, item: &str, host: &HostHandle) {
        if FOLDERS.iter().any(|(folder, _)| *folder == item) {
            host.open_with_context(AppId::FileExplorer, AppContext::new(item));
        } else if CHANNELS.iter().any(|(video, _)| *video == item) {
            host.open_with_context(AppId::TvRetro, AppContext::new(item));
        }
    }
}

struct Player;

impl AppContent for Player {
    fn render(&self, window: &WindowRecord) -> String {
        let id = window.context.as_ref().map(|c| c.as_str());
        let channel = CHANNELS
            .iter()
            .find(|(video, _)| Some(*video) == id)
            .unwrap_or(&CHANNELS[0]);
        format!("Now playing: {}", channel.1)
    }
}

/// Lists host applications and opens whichever one is activated.
struct Launcher {
    entries: Vec<(AppId, String)>,
}

impl Launcher {
    fn from_catalog(catalog: &Catalog) -> Self {
        let entries = catalog
            .descriptors()
            .into_iter()
            .filter(|d| d.app_id != AppId::MyApps)
            .map(|d| (d.app_id, d.title.clone()))
            .collect();
        Self { entries }
    }
}

impl AppContent for Launcher {
    fn render(&self, _window: &WindowRecord) -> String {
        self.entries
            .iter()
            .map(|(_, title)| title.as_str())
            .collect::<Vec<_>>()
            .join(" | ")
    }

    fn activated(&mut self, _window: &WindowRecord, item: &str, host: &HostHandle) {
        match self.entries.iter().find(|(app, _)| app.as_str() == item) {
            Some((app, _)) => host.open_app(*app),
            None => tracing::debug!("Launcher has no entry {}", item),
        }
    }
}

#[derive(Debug, Default)]
struct Conversation {
    lines: Vec<String>,
    waiting: bool,
}

/// Chat-style assistant. Each question is answered by a spawned task that
/// reports back through the host, so the window manager keeps running while
/// an answer is pending. One question per window at a time.
struct Assistant {
    delay: Duration,
    conversations: HashMap<WindowId, Conversation>,
}

impl Assistant {
    fn new(delay: Duration) -> Self {
        Self {
            delay,
            conversations: HashMap::new(),
        }
    }
}

async fn answer(question: String, delay: Duration) -> String {
    tokio::time::sleep(delay).await;
    format!("Noted: {}. Keep it bold.", question)
}

impl AppContent for Assistant {
    fn render(&self, window: &WindowRecord) -> String {
        match self.conversations.get(&window.id) {
            Some(conversation) if !conversation.lines.is_empty() => {
                let mut body = conversation.lines.join("\n");
                if conversation.waiting {
                    body.push_str("\n...");
                }
                body
            }
            _ => "Ask me anything.".to_string(),
        }
    }

    fn activated(&mut self, window: &WindowRecord, item: &str, host: &HostHandle) {
        let question = item.trim();
        let conversation = self.conversations.entry(window.id.clone()).or_default();
        if question.is_empty() || conversation.waiting {
            return;
        }
        conversation.lines.push(format!("> {}", question));
        conversation.waiting = true;
        host.set_title(&window.id, "Brain (thinking...)");

        let host = host.clone();
        let window_id = window.id.clone();
        let question = question.to_string();
        let delay = self.delay;
        tokio::spawn(async move {
            let text = answer(question, delay).await;
            host.reply(&window_id, text);
        });
    }

    fn delivered(&mut self, window: &WindowRecord, text: &str, host: &HostHandle) {
        let Some(conversation) = self.conversations.get_mut(&window.id) else {
            return;
        };
        conversation.lines.push(text.to_string());
        conversation.waiting = false;
        host.set_title(&window.id, "Brain");
    }

    fn unmounted(&mut self, window_id: &WindowId) {
        self.conversations.remove(window_id);
    }
}

struct Placeholder;

impl AppContent for Placeholder {
    fn render(&self, window: &WindowRecord) -> String {
        window.title.clone()
    }
}
