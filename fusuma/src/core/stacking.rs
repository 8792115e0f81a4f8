use super::{WindowRecord, WindowRegistry};
use fusuma_ipc::WindowId;

/// Hands out stacking tokens. Bringing a window to front is a single counter
/// bump; layering is recovered at render time by sorting on the token.
#[derive(Debug, Clone, Default)]
pub struct Stacking {
    counter: u64,
}

impl Stacking {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_token(&mut self) -> u64 {
        self.counter += 1;
        self.counter
    }

    /// Assigns a fresh token to `id` and returns it. The counter advances
    /// even if the window no longer exists.
    pub fn bring_to_front(&mut self, registry: &mut WindowRegistry, id: &WindowId) -> u64 {
        let token = self.next_token();
        if registry.update(id, |w| w.stack_order = token) {
            tracing::debug!("Raised {} to {}", id, token);
        }
        token
    }
}

/// The focused window: the topmost one that is not minimized.
pub fn compute_focused<'a, I>(records: I) -> Option<WindowId>
where
    I: IntoIterator<Item = &'a WindowRecord>,
{
    records
        .into_iter()
        .filter(|w| !w.is_minimized)
        .max_by_key(|w| w.stack_order)
        .map(|w| w.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Catalog;
    use fusuma_ipc::AppId;
    use std::collections::HashSet;

    fn open(registry: &mut WindowRegistry, stacking: &mut Stacking, app: AppId) -> WindowId {
        let catalog = Catalog::builtin();
        let descriptor = catalog.descriptor(app).unwrap();
        registry
            .create(descriptor, None, stacking.next_token())
            .id
            .clone()
    }

    #[test]
    fn test_empty_has_no_focus() {
        let registry = WindowRegistry::new();
        assert_eq!(compute_focused(registry.iter()), None);
    }

    #[test]
    fn test_latest_window_is_focused() {
        let mut registry = WindowRegistry::new();
        let mut stacking = Stacking::new();
        open(&mut registry, &mut stacking, AppId::Calculator);
        let second = open(&mut registry, &mut stacking, AppId::Weather);
        assert_eq!(compute_focused(registry.iter()), Some(second));
    }

    #[test]
    fn test_bring_to_front_changes_focus() {
        let mut registry = WindowRegistry::new();
        let mut stacking = Stacking::new();
        let first = open(&mut registry, &mut stacking, AppId::Calculator);
        open(&mut registry, &mut stacking, AppId::Weather);

        let token = stacking.bring_to_front(&mut registry, &first);
        assert_eq!(registry.get(&first).unwrap().stack_order, token);
        assert_eq!(compute_focused(registry.iter()), Some(first));
    }

    #[test]
    fn test_minimized_windows_are_skipped() {
        let mut registry = WindowRegistry::new();
        let mut stacking = Stacking::new();
        let first = open(&mut registry, &mut stacking, AppId::Calculator);
        let second = open(&mut registry, &mut stacking, AppId::Weather);

        registry.update(&second, |w| w.is_minimized = true);
        assert_eq!(compute_focused(registry.iter()), Some(first.clone()));

        registry.update(&first, |w| w.is_minimized = true);
        assert_eq!(compute_focused(registry.iter()), None);
    }

    #[test]
    fn test_tokens_stay_unique() {
        let mut registry = WindowRegistry::new();
        let mut stacking = Stacking::new();
        let ids: Vec<WindowId> = [AppId::Calculator, AppId::Weather, AppId::Tasks]
            .into_iter()
            .map(|app| open(&mut registry, &mut stacking, app))
            .collect();
        for id in ids.iter().chain(ids.iter().rev()) {
            stacking.bring_to_front(&mut registry, id);
        }
        stacking.bring_to_front(&mut registry, &WindowId::new("gone"));

        let orders: HashSet<u64> = registry.iter().map(|w| w.stack_order).collect();
        assert_eq!(orders.len(), registry.len());
    }
}
