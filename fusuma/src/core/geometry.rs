use fusuma_ipc::WindowGeometry;

pub const TASKBAR_HEIGHT: u32 = 48;
pub const MIN_WIDTH: u32 = 400;
pub const MIN_HEIGHT: u32 = 300;

/// Horizontal strip of a window that must stay on screen while dragging.
const REACHABLE_MARGIN: i64 = 100;
/// Gap kept above the taskbar so a title bar can always be grabbed.
const BOTTOM_MARGIN: i64 = 40;

const CASCADE_STEP: i32 = 30;
const CASCADE_WRAP: u64 = 6;
pub const CASCADE_ANCHOR: Point = Point { x: 80, y: 40 };

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn delta_to(self, other: Point) -> Point {
        Point {
            x: other.x.saturating_sub(self.x),
            y: other.y.saturating_sub(self.y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn from_parts(position: Point, size: Size) -> Self {
        Self {
            x: position.x,
            y: position.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn to_geometry(self) -> WindowGeometry {
        WindowGeometry {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub taskbar_height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            taskbar_height: TASKBAR_HEIGHT,
        }
    }

    /// The area a maximized window covers: everything above the taskbar.
    pub fn maximized_frame(&self) -> Rect {
        Rect {
            x: 0,
            y: 0,
            width: self.width,
            height: self.height.saturating_sub(self.taskbar_height),
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1920, 1080)
    }
}

/// Default position for the `counter`-th window ever created.
pub fn cascade_position(counter: u64) -> Point {
    let offset = (counter % CASCADE_WRAP) as i32 * CASCADE_STEP;
    Point {
        x: CASCADE_ANCHOR.x + offset,
        y: CASCADE_ANCHOR.y + offset,
    }
}

/// Position of a dragged window given where the drag started and the total
/// pointer delta since then.
///
/// The lower bounds are applied last, so on a viewport too small for both
/// constraints the window stays reachable from the left/top.
pub fn clamp_drag(start: Point, delta: Point, width: u32, viewport: &Viewport) -> Point {
    let x = start.x as i64 + delta.x as i64;
    let y = start.y as i64 + delta.y as i64;

    let min_x = -(width as i64 - REACHABLE_MARGIN);
    let max_x = viewport.width as i64 - REACHABLE_MARGIN;
    let max_y = viewport.height as i64 - viewport.taskbar_height as i64 - BOTTOM_MARGIN;

    Point {
        x: saturate(x.min(max_x).max(min_x)),
        y: saturate(y.min(max_y).max(0)),
    }
}

fn saturate(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Size of a window being resized from its bottom-right corner. There is a
/// floor but no ceiling.
pub fn clamp_resize(start: Size, delta: Point) -> Size {
    let width = (start.width as i64 + delta.x as i64).max(MIN_WIDTH as i64);
    let height = (start.height as i64 + delta.y as i64).max(MIN_HEIGHT as i64);
    Size {
        width: width.min(u32::MAX as i64) as u32,
        height: height.min(u32::MAX as i64) as u32,
    }
}
