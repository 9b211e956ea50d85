//! Course by course archiving.

use super::config::ArchiverConfig;
use super::report::{ArchiveReport, CourseReport};
use crate::api::{CanvasApi, Course};
use crate::catalog::CatalogBuilder;
use crate::download::DownloadTask;
use crate::downloader::Downloader;
use crate::error::Result;
use crate::utils::sanitize_file_name;

use console::style;
use std::path::PathBuf;
use tracing::{info, warn};

/// Mirrors the selected files of every course of an account.
#[derive(Debug, Clone)]
pub struct Archiver {
    config: ArchiverConfig,
    api: CanvasApi,
    downloader: Downloader,
}

impl Archiver {
    pub(crate) fn new(config: ArchiverConfig, api: CanvasApi, downloader: Downloader) -> Self {
        Self {
            config,
            api,
            downloader,
        }
    }

    /// Gets the configuration.
    pub fn config(&self) -> &ArchiverConfig {
        &self.config
    }

    /// Gets the API accessor.
    pub fn api(&self) -> &CanvasApi {
        &self.api
    }

    /// Gets the downloader.
    pub fn downloader(&self) -> &Downloader {
        &self.downloader
    }

    /// Process every course, one after the other.
    ///
    /// Listing and download failures are logged and reported, never fatal; a
    /// course only starts once every download of the previous one ended.
    pub async fn run(&self) -> Result<ArchiveReport> {
        let courses = self.api.courses().await;
        if let Some(ref e) = courses.error {
            warn!(listed = courses.items.len(), "Course listing truncated: {}", e);
            self.say(&style("Error retrieving course data.").red().to_string());
        }
        info!(courses = courses.items.len(), "Listed courses");

        let mut report = ArchiveReport::default();
        for course in &courses.items {
            report.courses.push(self.archive_course(course).await);
        }

        Ok(report)
    }

    /// List, filter and download the files of one course.
    pub async fn archive_course(&self, course: &Course) -> CourseReport {
        self.say(
            &style(format!(
                "Downloading files for course: {} (ID: {})",
                course.name, course.id
            ))
            .bold()
            .to_string(),
        );

        let files = CatalogBuilder::new(&self.api).build(course.id).await;
        let catalogued = files.len();
        let selected = self.config.filter.apply(files);
        info!(
            course_id = course.id,
            catalogued,
            selected = selected.len(),
            "Built course catalog"
        );

        let mut report = CourseReport {
            course: course.clone(),
            catalogued,
            selected: selected.len(),
            summaries: Vec::new(),
        };

        if selected.is_empty() {
            self.say("No files available for download.\n");
            return report;
        }

        let course_dir = self.course_directory(course);
        let tasks: Vec<DownloadTask> = selected
            .into_iter()
            .map(|file| DownloadTask::plan(file, &course_dir, self.config.sanitize_file_names))
            .collect();

        self.say(&format!("Downloading {} files...", tasks.len()));
        report.summaries = self.downloader.download(&tasks).await;
        info!(
            course_id = course.id,
            succeeded = report.succeeded(),
            failed = report.failed(),
            "Course done"
        );
        self.say(&style("\nDownload complete!\n").green().to_string());

        report
    }

    /// Local directory of a course, `course-{id}` when the course has no name.
    pub fn course_directory(&self, course: &Course) -> PathBuf {
        let name = sanitize_file_name(course.name.trim());
        if matches!(name.as_str(), "" | "." | "..") {
            self.config.directory.join(format!("course-{}", course.id))
        } else {
            self.config.directory.join(name)
        }
    }

    fn say(&self, text: &str) {
        if self.config.style_options.is_enabled() {
            println!("{}", text);
        }
    }
}
