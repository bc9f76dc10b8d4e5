//! CSV output backend.
//!
//! Creates five files in the configured output directory:
//! `routes.csv`, `bases.csv`, `obstacles.csv`, `urgencies.csv` and
//! `progress.csv`.

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{BaseRow, CellRow, OutputResult, ProgressRow, RouteRow, UrgencyRow};

pub const ROUTES_FILE:    &str = "routes.csv";
pub const BASES_FILE:     &str = "bases.csv";
pub const OBSTACLES_FILE: &str = "obstacles.csv";
pub const URGENCIES_FILE: &str = "urgencies.csv";
pub const PROGRESS_FILE:  &str = "progress.csv";

/// Writes planner output to five CSV files.
pub struct CsvWriter {
    routes:    Writer<File>,
    bases:     Writer<File>,
    obstacles: Writer<File>,
    urgencies: Writer<File>,
    progress:  Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) the five CSV files in it
    /// and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;
        let open = |name: &str, header: &[&str]| -> OutputResult<Writer<File>> {
            let mut w = Writer::from_path(dir.join(name))?;
            w.write_record(header)?;
            Ok(w)
        };

        let writer = Self {
            routes:    open(ROUTES_FILE, &["tick", "agent", "row", "col"])?,
            bases:     open(BASES_FILE, &["index", "id", "row", "col"])?,
            obstacles: open(OBSTACLES_FILE, &["row", "col"])?,
            urgencies: open(URGENCIES_FILE, &["row", "col", "weight"])?,
            progress:  open(PROGRESS_FILE, &["iteration", "score", "collisions", "temperature"])?,
            finished:  false,
        };
        tracing::debug!(dir = %dir.display(), "csv output opened");
        Ok(writer)
    }
}

impl OutputWriter for CsvWriter {
    fn write_routes(&mut self, rows: &[RouteRow]) -> OutputResult<()> {
        for row in rows {
            self.routes.write_record(&[
                row.tick.to_string(),
                row.agent.to_string(),
                row.row.to_string(),
                row.col.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_bases(&mut self, rows: &[BaseRow]) -> OutputResult<()> {
        for row in rows {
            self.bases.write_record(&[
                row.index.to_string(),
                row.id.to_string(),
                row.row.to_string(),
                row.col.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_obstacles(&mut self, rows: &[CellRow]) -> OutputResult<()> {
        for row in rows {
            self.obstacles.write_record(&[row.row.to_string(), row.col.to_string()])?;
        }
        Ok(())
    }

    fn write_urgencies(&mut self, rows: &[UrgencyRow]) -> OutputResult<()> {
        for row in rows {
            self.urgencies.write_record(&[
                row.row.to_string(),
                row.col.to_string(),
                row.weight.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_progress(&mut self, row: &ProgressRow) -> OutputResult<()> {
        self.progress.write_record(&[
            row.iteration.to_string(),
            row.score.to_string(),
            row.collisions.to_string(),
            row.temperature.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        for w in [
            &mut self.routes,
            &mut self.bases,
            &mut self.obstacles,
            &mut self.urgencies,
            &mut self.progress,
        ] {
            w.flush()?;
        }
        Ok(())
    }
}
