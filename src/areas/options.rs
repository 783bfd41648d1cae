use crate::artifacts::diff::algorithm::Algorithm;
use crate::artifacts::diff::context::ContextWindow;
use clap::ValueEnum;
use derive_new::new;

/// Unified diffs show three lines around every change by default
pub const DEFAULT_CONTEXT_LINES: isize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(&self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct DiffOptions {
    pub algorithm: Algorithm,
    pub context: ContextWindow,
    pub color: ColorChoice,
    pub paging: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            context: ContextWindow::from(DEFAULT_CONTEXT_LINES),
            color: ColorChoice::default(),
            paging: false,
        }
    }
}
