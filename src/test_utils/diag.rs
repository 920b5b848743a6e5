use std::{cell::RefCell, rc::Rc};

use crate::diagnostic::{Diagnostic, Diagnostics};

/// Collects diagnostics so tests can check what was reported
#[derive(Clone, Default)]
pub struct Recorder(Rc<RefCell<Vec<Diagnostic>>>);

impl Recorder {
    pub fn take(&self) -> Vec<Diagnostic> {
        self.0.take()
    }
}

impl Diagnostics for Recorder {
    fn report(&self, diagnostic: Diagnostic) {
        self.0.borrow_mut().push(diagnostic);
    }
}
