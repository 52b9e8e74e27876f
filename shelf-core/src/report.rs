//! Reading goal tracking and the exported progress report

use crate::query;
use crate::types::{Book, ReadingStatus};
use serde::{Deserialize, Serialize};

/// File name suggested for downloaded reports
pub const REPORT_FILE_NAME: &str = "ReadingGoal_Report.txt";

/// A yearly (or any period) target of finished books
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingGoal {
    pub target: u32,
    pub completed: u32,
}

impl Default for ReadingGoal {
    fn default() -> Self {
        Self {
            target: 10,
            completed: 0,
        }
    }
}

impl ReadingGoal {
    pub fn new(target: u32, completed: u32) -> Self {
        Self { target, completed }
    }

    /// Goal progress as a percentage in `0.0..=100.0`
    pub fn progress_percent(&self) -> f64 {
        if self.target == 0 {
            return 0.0;
        }
        (f64::from(self.completed) / f64::from(self.target) * 100.0).min(100.0)
    }

    /// Clear both target and count
    pub fn reset(&mut self) {
        self.target = 0;
        self.completed = 0;
    }
}

/// Render the plain-text goal report.
///
/// Only books currently being read are listed; `books` may be the whole
/// collection.
pub fn render_report(goal: &ReadingGoal, books: &[Book]) -> String {
    let mut lines = vec![
        "Reading Goal Report".to_string(),
        String::new(),
        format!("Target: {}", goal.target),
        format!("Completed: {}", goal.completed),
        format!("Progress: {:.1}%", goal.progress_percent()),
        String::new(),
        "Currently Reading:".to_string(),
    ];

    let reading = query::by_status(books, ReadingStatus::Reading);
    if reading.is_empty() {
        lines.push("No books are currently being read.".to_string());
    }
    for (i, book) in reading.iter().enumerate() {
        lines.push(format!("{}. {} by {}", i + 1, book.title, book.author));
        lines.push(format!("   {}/{} pages", book.pages_read, book.pages));
    }

    let mut report = lines.join("\n");
    report.push('\n');
    report
}
