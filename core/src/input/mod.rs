//! Pointer Input Module
//!
//! Pointer button and modifier state tracking, decoupled from any windowing
//! system. The shell translates its native events into these types before
//! handing them to the editor session.

/// Pointer button identifiers, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary (left) button - tool actions.
    Primary,
    /// Middle button - camera navigation.
    Middle,
    /// Secondary (right) button.
    Secondary,
    /// Additional buttons (button 4, 5, etc.)
    Other(u16),
}

/// State of all pointer buttons.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonState {
    pub primary: bool,
    pub middle: bool,
    pub secondary: bool,
}

impl ButtonState {
    /// Create a new button state with all buttons released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update button state for a specific button.
    pub fn set(&mut self, button: PointerButton, pressed: bool) {
        match button {
            PointerButton::Primary => self.primary = pressed,
            PointerButton::Middle => self.middle = pressed,
            PointerButton::Secondary => self.secondary = pressed,
            PointerButton::Other(_) => {} // Ignore extra buttons for now
        }
    }

    /// Check if a specific button is pressed.
    pub fn is_pressed(&self, button: PointerButton) -> bool {
        match button {
            PointerButton::Primary => self.primary,
            PointerButton::Middle => self.middle,
            PointerButton::Secondary => self.secondary,
            PointerButton::Other(_) => false,
        }
    }

    /// Check if any button is pressed.
    pub fn any_pressed(&self) -> bool {
        self.primary || self.middle || self.secondary
    }
}

/// Keyboard modifier state accompanying pointer events.
///
/// Conventions wired up by the shell:
/// - `shift` + middle drag pans instead of orbiting
/// - `ctrl` + primary click in Place mode erases the picked brick
///   (the "erase override")
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierState {
    pub shift: bool,
    pub ctrl: bool,
}

impl ModifierState {
    pub fn new() -> Self {
        Self::default()
    }
}
