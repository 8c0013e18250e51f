//! UI state types for the selection prompt.

/// Direction to cycle through entries in the selection UI.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Up,
    Down,
}

/// The visible portion of the entry list when it does not fit on screen.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ViewportState {
    pub offset: usize,
    pub height: u16,
    pub width: u16,
}

/// Complete UI state for one selection prompt.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct UiState {
    /// Currently highlighted position within the visible entries
    pub selected_index: usize,
    /// Viewport state for scrolling
    pub viewport: ViewportState,
    /// Whether the operator is currently filtering
    pub is_filtering: bool,
    /// Current filter text
    pub filter_text: String,
}

impl UiState {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            selected_index: 0,
            viewport: ViewportState {
                offset: 0,
                // Header and filter line
                height: height.saturating_sub(2),
                width,
            },
            is_filtering: false,
            filter_text: String::new(),
        }
    }
}
