use crate::areas::options::DiffOptions;
use std::cell::{RefCell, RefMut};
use std::io::Write;

/// One diff invocation: the resolved options and where output goes
pub struct Session {
    writer: RefCell<Box<dyn Write>>,
    options: DiffOptions,
}

impl Session {
    pub fn new(options: DiffOptions, writer: Box<dyn Write>) -> Self {
        Session {
            writer: RefCell::new(writer),
            options,
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    pub fn options(&self) -> &DiffOptions {
        &self.options
    }
}
