use tracing::error;

use crate::infra::browser::Fullscreen;

/// A key press as reported by the embedder's input layer.
#[derive(Debug, Clone, Copy)]
pub struct KeyEvent {
    pub key: char,
    /// Focus is inside a text input or content-editable element; global
    /// shortcuts must not fire there.
    pub in_text_field: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    OverlayToggled { open: bool },
    FullscreenToggled { active: bool },
}

/// Global keyboard shortcut layer: `s` toggles the help overlay, `f`
/// toggles fullscreen through the injected collaborator.
pub struct Shortcuts {
    fullscreen: Box<dyn Fullscreen>,
    overlay_open: bool,
}

impl Shortcuts {
    pub fn new(fullscreen: Box<dyn Fullscreen>) -> Self {
        Self {
            fullscreen,
            overlay_open: false,
        }
    }

    pub fn overlay_open(&self) -> bool {
        self.overlay_open
    }

    pub fn fullscreen_active(&self) -> bool {
        self.fullscreen.is_active()
    }

    /// Dispatches one key event. Returns what happened, or None when the
    /// key is not a shortcut or shortcuts are suppressed.
    pub fn handle(&mut self, event: KeyEvent) -> Option<ShortcutAction> {
        if event.in_text_field {
            return None;
        }

        match event.key.to_ascii_lowercase() {
            's' => {
                self.overlay_open = !self.overlay_open;
                Some(ShortcutAction::OverlayToggled {
                    open: self.overlay_open,
                })
            }
            'f' => {
                // Fullscreen requests can be rejected by the platform;
                // log and carry on without changing state.
                let result = if self.fullscreen.is_active() {
                    self.fullscreen.exit()
                } else {
                    self.fullscreen.enter()
                };
                if let Err(err) = result {
                    error!(error = %err, "fullscreen toggle failed");
                    return None;
                }
                Some(ShortcutAction::FullscreenToggled {
                    active: self.fullscreen.is_active(),
                })
            }
            _ => None,
        }
    }
}
