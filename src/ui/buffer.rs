use crate::core::render::{Container, View};
use crate::errors::AppResult;

/// In-memory container: keeps only the most recent view.
#[derive(Debug, Default)]
pub struct BufferContainer {
    view: Option<View>,
    renders: usize,
}

impl BufferContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content; `None` before the first render.
    pub fn view(&self) -> Option<&View> {
        self.view.as_ref()
    }

    pub fn renders(&self) -> usize {
        self.renders
    }

    pub fn into_view(self) -> Option<View> {
        self.view
    }
}

impl Container for BufferContainer {
    fn replace(&mut self, view: &View) -> AppResult<()> {
        self.view = Some(view.clone());
        self.renders += 1;
        Ok(())
    }
}
