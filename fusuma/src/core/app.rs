use super::Size;
use fusuma_ipc::{AppContext, AppId};
use std::collections::HashMap;

pub const ROOT_FOLDER: &str = "my-computer-root";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Instancing {
    /// Re-opening focuses the existing window.
    #[default]
    Single,
    /// Every open request gets a fresh window.
    Multi,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationDescriptor {
    pub app_id: AppId,
    pub title: String,
    pub default_size: Size,
    pub title_bar_color: String,
    pub icon: String,
    pub instancing: Instancing,
}

/// A shortcut identifier that opens `target` with a fixed context.
#[derive(Debug, Clone, PartialEq)]
pub struct Alias {
    pub target: AppId,
    pub context: AppContext,
}

/// Static presentation table: descriptors for host applications plus the
/// alias table. Built once at startup and only read afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    descriptors: HashMap<AppId, ApplicationDescriptor>,
    aliases: HashMap<AppId, Alias>,
}

impl Catalog {
    pub fn builtin() -> Self {
        let mut catalog = Self {
            descriptors: HashMap::new(),
            aliases: HashMap::new(),
        };

        catalog.add(AppId::Projects, "Projects", (900, 640), "#f2cc8f", "briefcase");
        catalog.add(AppId::Tasks, "Tasks", (520, 600), "#81b29a", "checklist");
        catalog.add(AppId::Calculator, "Calculator", (420, 560), "#e07a5f", "calculator");
        catalog.add(
            AppId::CurrencyConverter,
            "Currency Converter",
            (480, 520),
            "#f2cc8f",
            "currency",
        );
        catalog.add(AppId::WorldClock, "World Clock", (560, 480), "#81b29a", "clock");
        catalog.add(AppId::Weather, "Weather", (520, 540), "#81b29a", "cloud");
        catalog.add(AppId::Games, "Snake", (560, 600), "#e07a5f", "gamepad");
        catalog.add(AppId::TvRetro, "Retro TV", (720, 560), "#e07a5f", "tv");
        catalog.add(AppId::FileExplorer, "My Computer", (760, 520), "#f2cc8f", "folder");
        catalog.add(AppId::Browser, "Browser", (900, 640), "#fdf6e3", "globe");
        catalog.add(AppId::MyApps, "My Apps", (560, 440), "#f2cc8f", "grid");
        catalog.add(AppId::Brain, "Brain", (560, 620), "#e07a5f", "brain");

        if let Some(tv) = catalog.descriptors.get_mut(&AppId::TvRetro) {
            tv.instancing = Instancing::Multi;
        }

        catalog.alias(AppId::MyDocuments, AppId::FileExplorer, "folder-my-documents");
        catalog.alias(AppId::MyRecentDocs, AppId::FileExplorer, "folder-my-recent-docs");
        catalog.alias(AppId::MyPictures, AppId::FileExplorer, "folder-my-pictures");
        catalog.alias(AppId::MyMusic, AppId::FileExplorer, "folder-my-music");
        catalog.alias(AppId::MyVideos, AppId::FileExplorer, "folder-my-videos");
        catalog.alias(AppId::MyComputer, AppId::FileExplorer, ROOT_FOLDER);
        catalog.alias(AppId::MyGames, AppId::FileExplorer, "folder-my-games");
        catalog.alias(AppId::MyProjects, AppId::FileExplorer, "folder-my-projects");

        catalog
    }

    fn add(&mut self, app_id: AppId, title: &str, size: (u32, u32), color: &str, icon: &str) {
        self.descriptors.insert(
            app_id,
            ApplicationDescriptor {
                app_id,
                title: title.to_string(),
                default_size: Size::new(size.0, size.1),
                title_bar_color: color.to_string(),
                icon: icon.to_string(),
                instancing: Instancing::default(),
            },
        );
    }

    fn alias(&mut self, app_id: AppId, target: AppId, context: &str) {
        self.aliases.insert(
            app_id,
            Alias {
                target,
                context: AppContext::new(context),
            },
        );
    }

    pub fn descriptor(&self, app_id: AppId) -> Option<&ApplicationDescriptor> {
        self.descriptors.get(&app_id)
    }

    pub fn descriptor_mut(&mut self, app_id: AppId) -> Option<&mut ApplicationDescriptor> {
        self.descriptors.get_mut(&app_id)
    }

    pub fn resolve_alias(&self, app_id: AppId) -> Option<&Alias> {
        self.aliases.get(&app_id)
    }

    /// Host applications in a stable order, for launcher listings.
    pub fn descriptors(&self) -> Vec<&ApplicationDescriptor> {
        let mut list: Vec<_> = self.descriptors.values().collect();
        list.sort_by_key(|d| d.app_id);
        list
    }

    pub fn title_bar_color(&self, app_id: AppId) -> &str {
        self.descriptor(app_id)
            .map(|d| d.title_bar_color.as_str())
            .unwrap_or("#f2cc8f")
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
