//! Test helpers for writing weather datasets into scratch directories.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// Craiova in May 2026, plus rows the planner must ignore.
///
/// Picnic scores: 05-01 = 94 (wind 6), 05-02 = 100, 05-03 = 88 (wind 8).
pub(super) const SAMPLE_DATASET: &str = "\
date,lat,lon,afternoon_temp,precip,wind_max_speed,humidity_afternoon,cloud_cover_afternoon
2026-05-01,44.31667,23.8,295.15,0.0,6.0,50.0,20.0
2026-05-02,44.31667,23.8,295.15,0.123,2.0,65.25,33.33
2026-05-03T12:00:00,44.31667,23.8,295.15,0.0,8.0,50.0,20.0
2026-05-04,45.8,24.15,295.15,0.0,1.0,50.0,20.0
2026-06-05,44.31667,23.8,295.15,0.0,1.0,50.0,20.0
";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write test file");
}

/// A scratch directory with a path reserved for the dataset.
pub(super) struct Workspace {
    _dir: TempDir,
    pub(super) root: Utf8PathBuf,
    pub(super) dataset: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let dataset = root.join("weather_data.csv");
        Self {
            _dir: dir,
            root,
            dataset,
        }
    }

    pub(super) fn with_sample_dataset() -> Self {
        let workspace = Self::new();
        workspace.write_dataset(SAMPLE_DATASET);
        workspace
    }

    pub(super) fn write_dataset(&self, contents: &str) {
        write_utf8(&self.dataset, contents.as_bytes());
    }
}
