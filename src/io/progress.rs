//! Batch progress display for multi-image conversions

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{prefix}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Stage of a single conversion shown beside the bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Resampling and block matching
    Matching,
    /// Stitching the texture preview
    Stitching,
    /// Writing tables and preview
    Saving,
}

impl Stage {
    /// Short label for display
    pub const fn label(self) -> &'static str {
        match self {
            Self::Matching => "matching blocks",
            Self::Stitching => "stitching preview",
            Self::Saving => "saving",
        }
    }
}

/// One bar over all inputs, labelled with the current file and stage
pub struct ProgressManager {
    bar: ProgressBar,
    completed: usize,
    failed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a hidden bar; call [`ProgressManager::initialize`] to show it
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            completed: 0,
            failed: 0,
        }
    }

    /// Show a bar sized for `file_count` inputs
    pub fn initialize(&mut self, file_count: usize) {
        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(200));
        self.bar = bar;
    }

    /// Label the bar with the file now being converted
    pub fn start_file(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_prefix(display_name);
        self.bar.set_message(String::new());
    }

    /// Show the current stage of the active file
    pub fn set_stage(&self, stage: Stage) {
        self.bar.set_message(stage.label());
    }

    /// Advance past a finished file
    pub fn complete_file(&mut self, succeeded: bool) {
        if succeeded {
            self.completed += 1;
        } else {
            self.failed += 1;
        }
        self.bar.inc(1);
    }

    /// Files converted successfully so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Files that failed so far
    pub const fn failed(&self) -> usize {
        self.failed
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
