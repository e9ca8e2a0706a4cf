#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub enum DragState {
    #[default]
    Idle,          // Strip rests on a slide boundary
    Dragging {
        start_x: f32,  // Pointer position when the drag began
        baseline: f32, // Strip offset when the drag began
        last_x: f32,   // Most recent pointer position
    },             // Strip follows the pointer, no easing
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}
