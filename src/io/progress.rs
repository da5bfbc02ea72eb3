//! Progress display for batch operations

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks items processed by a batch run
///
/// Unknown-length sources (animation frames) grow the bar as items arrive.
pub struct ProgressManager {
    bar: ProgressBar,
    failed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a hidden progress manager; call [`Self::initialize`] to show it
    pub fn new() -> Self {
        let bar = ProgressBar::hidden();
        bar.set_style(BATCH_STYLE.clone());
        Self { bar, failed: 0 }
    }

    /// Show the bar for a batch of `item_count` items, 0 if unknown
    pub fn initialize(&mut self, label: &str, item_count: usize) {
        self.bar = ProgressBar::new(item_count as u64);
        self.bar.set_style(BATCH_STYLE.clone());
        self.bar.set_prefix(label.to_string());
        self.failed = 0;
    }

    /// Show the name of the item being processed
    pub fn start_item(&self, name: &str) {
        if self.bar.length().is_some_and(|len| self.bar.position() >= len) {
            self.bar.inc_length(1);
        }
        self.bar.set_message(name.to_string());
    }

    /// Advance past the current item
    pub fn complete_item(&mut self, succeeded: bool) {
        if !succeeded {
            self.failed += 1;
        }
        self.bar.inc(1);
    }

    /// Items reported as failed since initialization
    pub const fn failed(&self) -> usize {
        self.failed
    }

    /// Finish the bar with a summary message
    pub fn finish(&self) {
        let message = if self.failed == 0 {
            "done".to_string()
        } else {
            format!("done ({} skipped)", self.failed)
        };
        self.bar.finish_with_message(message);
    }
}
