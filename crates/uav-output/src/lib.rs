//! `uav-output`: CSV export for the patrol planner.
//!
//! | File             | Columns                                   | Written by                 |
//! |------------------|-------------------------------------------|----------------------------|
//! | `routes.csv`     | `tick,agent,row,col`                      | [`export_solution`]        |
//! | `bases.csv`      | `index,id,row,col`                        | [`export_solution`]        |
//! | `obstacles.csv`  | `row,col`                                 | [`export_solution`]        |
//! | `urgencies.csv`  | `row,col,weight`                          | [`export_solution`]        |
//! | `progress.csv`   | `iteration,score,collisions,temperature`  | [`ProgressObserver`]       |
//!
//! All files are produced by an [`OutputWriter`]; [`CsvWriter`] is the only
//! backend.
//!
//! # Usage
//!
//! ```rust,ignore
//! use uav_output::{CsvWriter, ProgressObserver, export_solution};
//!
//! let mut obs = ProgressObserver::new(CsvWriter::new(Path::new("./out"))?);
//! let outcome = search.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("progress not written: {e}");
//! }
//! let mut writer = obs.into_writer();
//! export_solution(&mut writer, &grid, &table)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod export;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use export::export_solution;
pub use observer::ProgressObserver;
pub use row::{BaseRow, CellRow, ProgressRow, RouteRow, UrgencyRow};
pub use writer::OutputWriter;
