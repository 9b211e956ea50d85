//! Run reports.

use crate::api::Course;
use crate::download::Summary;

/// What happened to one course.
#[derive(Debug, Clone)]
pub struct CourseReport {
    /// The course.
    pub course: Course,
    /// Number of files listed.
    pub catalogued: usize,
    /// Number of files passing the extension filter.
    pub selected: usize,
    /// One summary per selected file, in catalog order.
    pub summaries: Vec<Summary>,
}

impl CourseReport {
    /// Number of files written completely.
    pub fn succeeded(&self) -> usize {
        self.summaries.iter().filter(|s| s.is_success()).count()
    }

    /// Number of files that failed.
    pub fn failed(&self) -> usize {
        self.summaries.len() - self.succeeded()
    }
}

/// What happened during a run.
#[derive(Debug, Clone, Default)]
pub struct ArchiveReport {
    /// Per-course reports, in processing order.
    pub courses: Vec<CourseReport>,
}

impl ArchiveReport {
    /// Number of files written completely across every course.
    pub fn succeeded(&self) -> usize {
        self.courses.iter().map(CourseReport::succeeded).sum()
    }

    /// Number of failed files across every course.
    pub fn failed(&self) -> usize {
        self.courses.iter().map(CourseReport::failed).sum()
    }
}
