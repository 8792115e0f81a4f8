use super::{cascade_position, ApplicationDescriptor, WindowRecord};
use fusuma_ipc::{AppContext, AppId, WindowId};
use std::sync::Arc;

/// Owns every open window, in the order the windows were opened.
///
/// Records are shared copy-on-write: a snapshot handed to a render pass keeps
/// seeing the records as they were, even if the registry is updated later.
#[derive(Debug, Clone, Default)]
pub struct WindowRegistry {
    windows: Vec<Arc<WindowRecord>>,
    // Windows created over the registry's lifetime. Drives ids and cascade.
    created: u64,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(
        &mut self,
        descriptor: &ApplicationDescriptor,
        context: Option<AppContext>,
        stack_order: u64,
    ) -> Arc<WindowRecord> {
        let position = cascade_position(self.created);
        self.created += 1;
        let id = WindowId::new(format!("win-{}", self.created));

        let window = Arc::new(WindowRecord::new(
            id,
            descriptor,
            position,
            stack_order,
            context,
        ));
        tracing::info!(
            "Window added: [{}] {} ({})",
            window.id,
            window.title,
            window.app_id
        );
        self.windows.push(Arc::clone(&window));
        window
    }

    pub fn remove(&mut self, id: &WindowId) -> Option<Arc<WindowRecord>> {
        let index = self.windows.iter().position(|w| &w.id == id)?;
        let window = self.windows.remove(index);
        tracing::info!(
            "Window removed: [{}] {} ({})",
            window.id,
            window.title,
            window.app_id
        );
        Some(window)
    }

    /// Applies `patch` to the record with `id`. Returns false, touching
    /// nothing, when no such window exists.
    pub fn update<F>(&mut self, id: &WindowId, patch: F) -> bool
    where
        F: FnOnce(&mut WindowRecord),
    {
        match self.windows.iter_mut().find(|w| &w.id == id) {
            Some(window) => {
                patch(Arc::make_mut(window));
                true
            }
            None => {
                tracing::debug!("Ignoring update for unknown window {}", id);
                false
            }
        }
    }

    pub fn get(&self, id: &WindowId) -> Option<&Arc<WindowRecord>> {
        self.windows.iter().find(|w| &w.id == id)
    }

    pub fn contains(&self, id: &WindowId) -> bool {
        self.get(id).is_some()
    }

    pub fn find_by_application(&self, app_id: AppId) -> Option<&Arc<WindowRecord>> {
        self.windows.iter().find(|w| w.app_id == app_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.iter().map(|w| w.as_ref())
    }

    pub fn snapshot(&self) -> Vec<Arc<WindowRecord>> {
        self.windows.clone()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Catalog, Point, CASCADE_ANCHOR};
    use std::collections::HashSet;

    fn descriptor(app: AppId) -> ApplicationDescriptor {
        Catalog::builtin().descriptor(app).unwrap().clone()
    }

    #[test]
    fn test_ids_are_unique() {
        let mut registry = WindowRegistry::new();
        let calc = descriptor(AppId::Calculator);
        let ids: HashSet<WindowId> = (0..20)
            .map(|n| registry.create(&calc, None, n).id.clone())
            .collect();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut registry = WindowRegistry::new();
        let calc = descriptor(AppId::Calculator);
        let first = registry.create(&calc, None, 1).id.clone();
        registry.remove(&first);
        let second = registry.create(&calc, None, 2).id.clone();
        assert_ne!(first, second);
    }

    #[test]
    fn test_cascade_across_applications() {
        let mut registry = WindowRegistry::new();
        let apps = [AppId::Calculator, AppId::Weather, AppId::Tasks, AppId::Games];
        let positions: Vec<Point> = (0..8)
            .map(|n| {
                let d = descriptor(apps[n % apps.len()]);
                registry.create(&d, None, n as u64).position
            })
            .collect();

        for (n, position) in positions.iter().enumerate() {
            let offset = (n as i32 % 6) * 30;
            assert_eq!(position.x, CASCADE_ANCHOR.x + offset);
            assert_eq!(position.y, CASCADE_ANCHOR.y + offset);
        }
    }

    #[test]
    fn test_create_uses_descriptor_defaults() {
        let mut registry = WindowRegistry::new();
        let weather = descriptor(AppId::Weather);
        let window = registry.create(&weather, None, 7);
        assert_eq!(window.size, weather.default_size);
        assert_eq!(window.title, weather.title);
        assert_eq!(window.stack_order, 7);
        assert!(!window.is_minimized);
        assert!(!window.is_maximized());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut registry = WindowRegistry::new();
        let id = registry
            .create(&descriptor(AppId::Tasks), None, 1)
            .id
            .clone();
        assert!(registry.remove(&id).is_some());
        assert!(registry.remove(&id).is_none());
        assert!(!registry.contains(&id));
    }

    #[test]
    fn test_update_absent_is_noop() {
        let mut registry = WindowRegistry::new();
        registry.create(&descriptor(AppId::Tasks), None, 1);
        let touched = registry.update(&WindowId::new("win-404"), |w| w.title = "x".into());
        assert!(!touched);
        assert_eq!(registry.iter().next().unwrap().title, "Tasks");
    }

    #[test]
    fn test_snapshot_is_not_mutated_by_update() {
        let mut registry = WindowRegistry::new();
        let id = registry
            .create(&descriptor(AppId::Tasks), None, 1)
            .id
            .clone();
        let snapshot = registry.snapshot();

        registry.update(&id, |w| w.title = "Groceries".into());

        assert_eq!(snapshot[0].title, "Tasks");
        assert_eq!(registry.get(&id).unwrap().title, "Groceries");
    }

    #[test]
    fn test_find_by_application_returns_first_in_insertion_order() {
        let mut registry = WindowRegistry::new();
        let tv = descriptor(AppId::TvRetro);
        let first = registry.create(&tv, None, 5).id.clone();
        registry.create(&tv, None, 9);
        assert_eq!(registry.find_by_application(AppId::TvRetro).unwrap().id, first);
        assert!(registry.find_by_application(AppId::Weather).is_none());
    }
}
