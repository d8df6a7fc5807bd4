use anyhow::{anyhow, Result};

/// Clipboard surface. The real binding is asynchronous and may reject;
/// callers treat a failure as fire-and-forget (log + toast).
pub trait Clipboard: Send {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Fullscreen surface toggled by the `f` shortcut.
pub trait Fullscreen: Send {
    fn is_active(&self) -> bool;
    fn enter(&mut self) -> Result<()>;
    fn exit(&mut self) -> Result<()>;
}

/// In-memory clipboard for the demo binary and tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    /// When set, every write rejects. Models a denied clipboard permission.
    pub fail_writes: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if self.fail_writes {
            return Err(anyhow!("clipboard write rejected"));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryFullscreen {
    active: bool,
}

impl MemoryFullscreen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Fullscreen for MemoryFullscreen {
    fn is_active(&self) -> bool {
        self.active
    }

    fn enter(&mut self) -> Result<()> {
        self.active = true;
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.active = false;
        Ok(())
    }
}
