use super::{clamp_drag, clamp_resize, Point, Size, Viewport, WindowRegistry};
use fusuma_ipc::WindowId;
use std::collections::HashMap;

/// An in-progress pointer gesture on one window. Every move is computed from
/// the values captured here plus the total pointer delta, never from the
/// previous move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Dragging { pointer: Point, origin: Point },
    Resizing { pointer: Point, origin: Size },
}

/// Gesture state per window. A window without an entry is idle.
#[derive(Debug, Clone, Default)]
pub struct Interactions {
    active: HashMap<WindowId, Gesture>,
}

impl Interactions {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn gesture(&self, id: &WindowId) -> Option<Gesture> {
        self.active.get(id).copied()
    }

    #[cfg(test)]
    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    /// Starts dragging from the title bar. Maximized or unknown windows do
    /// not start a gesture.
    pub fn begin_drag(&mut self, registry: &WindowRegistry, id: &WindowId, pointer: Point) -> bool {
        let Some(window) = registry.get(id) else {
            return false;
        };
        if window.is_maximized() {
            return false;
        }
        tracing::debug!("Drag start: {} at {:?}", id, window.position);
        self.active.insert(
            id.clone(),
            Gesture::Dragging {
                pointer,
                origin: window.position,
            },
        );
        true
    }

    /// Starts resizing from the bottom-right handle.
    pub fn begin_resize(
        &mut self,
        registry: &WindowRegistry,
        id: &WindowId,
        pointer: Point,
    ) -> bool {
        let Some(window) = registry.get(id) else {
            return false;
        };
        if window.is_maximized() {
            return false;
        }
        tracing::debug!("Resize start: {} at {:?}", id, window.size);
        self.active.insert(
            id.clone(),
            Gesture::Resizing {
                pointer,
                origin: window.size,
            },
        );
        true
    }

    pub fn pointer_move(
        &mut self,
        registry: &mut WindowRegistry,
        pointer: Point,
        viewport: &Viewport,
    ) {
        let mut stale = Vec::new();

        for (id, gesture) in &self.active {
            let applied = match *gesture {
                Gesture::Dragging { pointer: start, origin } => {
                    let delta = start.delta_to(pointer);
                    registry.update(id, |w| {
                        w.position = clamp_drag(origin, delta, w.size.width, viewport);
                    })
                }
                Gesture::Resizing { pointer: start, origin } => {
                    let delta = start.delta_to(pointer);
                    registry.update(id, |w| w.size = clamp_resize(origin, delta))
                }
            };
            if !applied {
                stale.push(id.clone());
            }
        }

        for id in stale {
            tracing::debug!("Dropping gesture for closed window {}", id);
            self.active.remove(&id);
        }
    }

    /// Pointer up or cancel: every gesture ends where it is.
    pub fn release(&mut self) {
        for id in self.active.keys() {
            tracing::debug!("Gesture end: {}", id);
        }
        self.active.clear();
    }

    pub fn cancel(&mut self, id: &WindowId) {
        self.active.remove(id);
    }
}

/// Flips maximize on `id`. Returns the new state, or None for an unknown
/// window.
pub fn toggle_maximize(registry: &mut WindowRegistry, id: &WindowId) -> Option<bool> {
    let mut maximized = None;
    registry.update(id, |w| maximized = Some(w.toggle_maximize()));
    maximized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Catalog, MIN_HEIGHT, MIN_WIDTH};
    use fusuma_ipc::AppId;

    fn setup(position: Point, size: Size) -> (WindowRegistry, WindowId) {
        let mut registry = WindowRegistry::new();
        let catalog = Catalog::builtin();
        let id = registry
            .create(catalog.descriptor(AppId::Calculator).unwrap(), None, 1)
            .id
            .clone();
        registry.update(&id, |w| {
            w.position = position;
            w.size = size;
        });
        (registry, id)
    }

    #[test]
    fn test_drag_moves_by_total_delta() {
        let viewport = Viewport::new(1920, 1080);
        let (mut registry, id) = setup(Point::new(100, 100), Size::new(500, 400));
        let mut interactions = Interactions::new();

        assert!(interactions.begin_drag(&registry, &id, Point::new(300, 110)));
        interactions.pointer_move(&mut registry, Point::new(310, 130), &viewport);
        interactions.pointer_move(&mut registry, Point::new(350, 150), &viewport);

        let window = registry.get(&id).unwrap();
        assert_eq!(window.position, Point::new(150, 140));
        assert_eq!(window.size, Size::new(500, 400));
    }

    #[test]
    fn test_drag_clamp_then_return_is_not_lossy() {
        let viewport = Viewport::new(1920, 1080);
        let (mut registry, id) = setup(Point::new(100, 100), Size::new(500, 400));
        let mut interactions = Interactions::new();

        interactions.begin_drag(&registry, &id, Point::new(0, 0));
        interactions.pointer_move(&mut registry, Point::new(-9999 - 100, 0), &viewport);
        assert_eq!(registry.get(&id).unwrap().position.x, -400);

        interactions.pointer_move(&mut registry, Point::new(10, 0), &viewport);
        assert_eq!(registry.get(&id).unwrap().position.x, 110);

        interactions.pointer_move(&mut registry, Point::new(99999 - 100, 0), &viewport);
        assert_eq!(registry.get(&id).unwrap().position.x, 1820);
    }

    #[test]
    fn test_resize_floor_and_anchor() {
        let viewport = Viewport::new(1920, 1080);
        let (mut registry, id) = setup(Point::new(100, 100), Size::new(600, 400));
        let mut interactions = Interactions::new();

        assert!(interactions.begin_resize(&registry, &id, Point::new(700, 500)));
        interactions.pointer_move(&mut registry, Point::new(700 - 9999, 500), &viewport);

        let window = registry.get(&id).unwrap();
        assert_eq!(window.size, Size::new(MIN_WIDTH, 400));
        assert_eq!(window.position, Point::new(100, 100));

        interactions.pointer_move(&mut registry, Point::new(800, 100), &viewport);
        assert_eq!(registry.get(&id).unwrap().size, Size::new(700, MIN_HEIGHT));
    }

    #[test]
    fn test_release_keeps_last_position() {
        let viewport = Viewport::new(1920, 1080);
        let (mut registry, id) = setup(Point::new(100, 100), Size::new(500, 400));
        let mut interactions = Interactions::new();

        interactions.begin_drag(&registry, &id, Point::new(0, 0));
        interactions.pointer_move(&mut registry, Point::new(40, 40), &viewport);
        interactions.release();
        interactions.pointer_move(&mut registry, Point::new(400, 400), &viewport);

        assert!(interactions.is_idle());
        assert_eq!(registry.get(&id).unwrap().position, Point::new(140, 140));
    }

    #[test]
    fn test_no_gesture_while_maximized() {
        let (mut registry, id) = setup(Point::new(100, 100), Size::new(500, 400));
        let mut interactions = Interactions::new();
        toggle_maximize(&mut registry, &id);

        assert!(!interactions.begin_drag(&registry, &id, Point::new(0, 0)));
        assert!(!interactions.begin_resize(&registry, &id, Point::new(0, 0)));
        assert!(interactions.is_idle());
    }

    #[test]
    fn test_close_mid_drag() {
        let viewport = Viewport::new(1920, 1080);
        let (mut registry, id) = setup(Point::new(100, 100), Size::new(500, 400));
        let mut interactions = Interactions::new();

        interactions.begin_drag(&registry, &id, Point::new(0, 0));
        registry.remove(&id);
        interactions.pointer_move(&mut registry, Point::new(50, 50), &viewport);

        assert!(registry.is_empty());
        assert!(interactions.gesture(&id).is_none());
    }

    #[test]
    fn test_toggle_maximize_unknown_window() {
        let mut registry = WindowRegistry::new();
        assert_eq!(toggle_maximize(&mut registry, &WindowId::new("win-1")), None);
    }
}
