use serde::{Deserialize, Serialize};
use std::fmt;

/// Every application identifier the shell knows about, including the
/// shortcut identifiers that redirect to a host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppId {
    Projects,
    Tasks,
    Calculator,
    CurrencyConverter,
    WorldClock,
    Weather,
    Games,
    TvRetro,
    FileExplorer,
    Browser,
    MyApps,
    Brain,
    MyDocuments,
    MyRecentDocs,
    MyPictures,
    MyMusic,
    MyVideos,
    MyComputer,
    MyGames,
    MyProjects,
}

impl AppId {
    pub const ALL: [AppId; 20] = [
        AppId::Projects,
        AppId::Tasks,
        AppId::Calculator,
        AppId::CurrencyConverter,
        AppId::WorldClock,
        AppId::Weather,
        AppId::Games,
        AppId::TvRetro,
        AppId::FileExplorer,
        AppId::Browser,
        AppId::MyApps,
        AppId::Brain,
        AppId::MyDocuments,
        AppId::MyRecentDocs,
        AppId::MyPictures,
        AppId::MyMusic,
        AppId::MyVideos,
        AppId::MyComputer,
        AppId::MyGames,
        AppId::MyProjects,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AppId::Projects => "projects",
            AppId::Tasks => "tasks",
            AppId::Calculator => "calculator",
            AppId::CurrencyConverter => "currency_converter",
            AppId::WorldClock => "world_clock",
            AppId::Weather => "weather",
            AppId::Games => "games",
            AppId::TvRetro => "tv_retro",
            AppId::FileExplorer => "file_explorer",
            AppId::Browser => "browser",
            AppId::MyApps => "my_apps",
            AppId::Brain => "brain",
            AppId::MyDocuments => "my_documents",
            AppId::MyRecentDocs => "my_recent_docs",
            AppId::MyPictures => "my_pictures",
            AppId::MyMusic => "my_music",
            AppId::MyVideos => "my_videos",
            AppId::MyComputer => "my_computer",
            AppId::MyGames => "my_games",
            AppId::MyProjects => "my_projects",
        }
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque payload handed to a hosted application, e.g. a folder id or a
/// media id. The window manager never looks inside.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppContext(String);

impl AppContext {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(String);

impl WindowId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_id_as_str_matches_serde() {
        for app in AppId::ALL {
            let json = serde_json::to_string(&app).unwrap();
            assert_eq!(json, format!("\"{}\"", app.as_str()));
        }
    }

    #[test]
    fn test_context_is_transparent() {
        let ctx: AppContext = serde_json::from_str("\"folder-my-pictures\"").unwrap();
        assert_eq!(ctx.as_str(), "folder-my-pictures");
    }
}
