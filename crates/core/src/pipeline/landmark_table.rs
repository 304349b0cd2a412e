//! Delimited on-disk format for sampled pose landmarks.
//!
//! One row per landmark per sampled frame:
//! `frame_index,landmark_index,x,y,z,visibility` under a fixed header.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::pose::domain::landmarks::{Landmark, PoseLandmarks};

pub const HEADER: &str = "Frame,Landmark,X,Y,Z,Visibility";

#[derive(Error, Debug)]
pub enum TableError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },
    #[error("missing header, found {found:?}")]
    MissingHeader { found: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct LandmarkRow {
    pub frame: usize,
    pub landmark: usize,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub visibility: f64,
}

impl LandmarkRow {
    pub fn position(&self) -> Landmark {
        Landmark {
            x: self.x,
            y: self.y,
            z: self.z,
            visibility: self.visibility,
        }
    }
}

/// Streaming writer; the header goes out at creation.
pub struct LandmarkTableWriter {
    out: BufWriter<File>,
    path: PathBuf,
}

impl LandmarkTableWriter {
    pub fn create(path: &Path) -> Result<Self, TableError> {
        let file = File::create(path).map_err(|e| TableError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut out = BufWriter::new(file);
        writeln!(out, "{HEADER}").map_err(|e| TableError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self {
            out,
            path: path.to_path_buf(),
        })
    }

    /// Appends one row per landmark of a sampled frame.
    pub fn write_pose(&mut self, frame_index: usize, pose: &PoseLandmarks) -> Result<(), TableError> {
        for (landmark_index, lm) in pose.landmarks().iter().enumerate() {
            writeln!(
                self.out,
                "{},{},{},{},{},{}",
                frame_index, landmark_index, lm.x, lm.y, lm.z, lm.visibility
            )
            .map_err(|e| TableError::Io {
                path: self.path.clone(),
                source: e,
            })?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), TableError> {
        self.out.flush().map_err(|e| TableError::Io {
            path: self.path.clone(),
            source: e,
        })
    }
}

/// Reads a table back, grouping rows by frame index in row order.
///
/// A malformed row is a hard error, not skipped — the table is machine
/// written, so damage means the whole file is suspect.
pub fn read_grouped(path: &Path) -> Result<BTreeMap<usize, Vec<LandmarkRow>>, TableError> {
    let file = File::open(path).map_err(|e| TableError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let reader = BufReader::new(file);

    let mut grouped: BTreeMap<usize, Vec<LandmarkRow>> = BTreeMap::new();
    let mut lines = reader.lines().enumerate();

    let Some((_, header)) = lines.next() else {
        return Ok(grouped); // empty file: no comparable data
    };
    let header = header.map_err(|e| TableError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    if header.trim() != HEADER {
        return Err(TableError::MissingHeader { found: header });
    }

    for (i, line) in lines {
        let line = line.map_err(|e| TableError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let row = parse_row(&line).map_err(|reason| TableError::MalformedRow {
            line: i + 1,
            reason,
        })?;
        grouped.entry(row.frame).or_default().push(row);
    }

    Ok(grouped)
}

fn parse_row(line: &str) -> Result<LandmarkRow, String> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 6 {
        return Err(format!("expected 6 fields, found {}", fields.len()));
    }
    Ok(LandmarkRow {
        frame: fields[0]
            .trim()
            .parse()
            .map_err(|e| format!("frame index: {e}"))?,
        landmark: fields[1]
            .trim()
            .parse()
            .map_err(|e| format!("landmark index: {e}"))?,
        x: fields[2].trim().parse().map_err(|e| format!("x: {e}"))?,
        y: fields[3].trim().parse().map_err(|e| format!("y: {e}"))?,
        z: fields[4].trim().parse().map_err(|e| format!("z: {e}"))?,
        visibility: fields[5]
            .trim()
            .parse()
            .map_err(|e| format!("visibility: {e}"))?,
    })
}
