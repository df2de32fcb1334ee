use crate::areas::workspace::Workspace;
use std::cell::{RefCell, RefMut};

/// Coordinates a single comparison run and owns the output writer.
///
/// All user-visible text flows through `writer`, so tests can substitute
/// a buffer and the engine itself never touches stdout directly.
pub struct Comparison {
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
}

impl Comparison {
    pub fn new(writer: Box<dyn std::io::Write>) -> Self {
        Comparison {
            writer: RefCell::new(writer),
            workspace: Workspace::new(),
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub(crate) fn workspace(&self) -> &Workspace {
        &self.workspace
    }
}
