pub const MIN_PANEL_HEIGHT: i32 = 120;
pub const MAX_PANEL_HEIGHT: i32 = 600;
pub const DEFAULT_PANEL_HEIGHT: i32 = 240;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DragOrigin {
    pointer_y: i32,
    height: i32,
}

/// Pointer-drag resize of the scrollable preset panel.
///
/// Height stays within `[MIN_PANEL_HEIGHT, MAX_PANEL_HEIGHT]` after every update, including
/// the intermediate ones of a drag.
#[derive(Debug, Clone)]
pub struct ResizeController {
    height: i32,
    drag: Option<DragOrigin>,
}

impl Default for ResizeController {
    fn default() -> Self {
        Self::new(DEFAULT_PANEL_HEIGHT)
    }
}

impl ResizeController {
    pub fn new(height: i32) -> Self {
        Self {
            height: clamp_height(height),
            drag: None,
        }
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn is_resizing(&self) -> bool {
        self.drag.is_some()
    }

    pub fn start_resize(&mut self, pointer_y: i32) {
        self.drag = Some(DragOrigin {
            pointer_y,
            height: self.height,
        });
    }

    /// Ignored unless a drag is active.
    pub fn on_pointer_move(&mut self, pointer_y: i32) {
        let Some(origin) = self.drag else {
            return;
        };
        let delta = i64::from(pointer_y) - i64::from(origin.pointer_y);
        let target = i64::from(origin.height) + delta;
        self.height = target.clamp(i64::from(MIN_PANEL_HEIGHT), i64::from(MAX_PANEL_HEIGHT)) as i32;
    }

    pub fn end_resize(&mut self) {
        self.drag = None;
    }

    /// Begin a drag gesture that ends when the returned guard is dropped.
    pub fn drag(&mut self, pointer_y: i32) -> DragGesture<'_> {
        self.start_resize(pointer_y);
        DragGesture { controller: self }
    }
}

/// One pointer-drag gesture. Holding it is the move/up subscription; dropping it releases
/// both, whichever way the gesture ends.
#[derive(Debug)]
pub struct DragGesture<'a> {
    controller: &'a mut ResizeController,
}

impl DragGesture<'_> {
    pub fn move_to(&mut self, pointer_y: i32) -> i32 {
        self.controller.on_pointer_move(pointer_y);
        self.controller.height
    }

    pub fn height(&self) -> i32 {
        self.controller.height
    }

    /// Pointer released.
    pub fn release(self) -> i32 {
        self.controller.height
    }
}

impl Drop for DragGesture<'_> {
    fn drop(&mut self) {
        self.controller.end_resize();
    }
}

pub fn clamp_height(height: i32) -> i32 {
    height.clamp(MIN_PANEL_HEIGHT, MAX_PANEL_HEIGHT)
}
