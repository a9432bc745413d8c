//! Loading, saving and building headers for the CLI commands.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use pdb_header::{
    HeaderOptions, PdbHeader, parse_pdb_date, read_binary_header_file, read_pdb_header,
    write_binary_header_file, write_pdb_header,
};

/// On-disk form of a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderFormat {
    Text,
    Binary,
}

impl HeaderFormat {
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Text => Self::Binary,
            Self::Binary => Self::Text,
        }
    }
}

impl fmt::Display for HeaderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Binary => f.write_str("binary"),
        }
    }
}

/// Read a header from `path` in the given form.
pub fn load_header(path: &Path, format: HeaderFormat) -> Result<PdbHeader> {
    let header = match format {
        HeaderFormat::Text => read_pdb_header(path),
        HeaderFormat::Binary => read_binary_header_file(path),
    }
    .with_context(|| format!("read {format} header from {}", path.display()))?;

    info!(path = %path.display(), %format, "read header");
    check_date(&header);
    Ok(header)
}

/// Write `header` to `path` in the given form.
pub fn save_header(path: &Path, header: &PdbHeader, format: HeaderFormat) -> Result<()> {
    let written = match format {
        HeaderFormat::Text => write_pdb_header(path, header),
        HeaderFormat::Binary => {
            if !header.remarks().is_empty() {
                warn!(
                    remarks = header.remarks().len(),
                    "remarks are dropped in the binary form"
                );
            }
            write_binary_header_file(path, header)
        }
    };
    written.with_context(|| format!("write {format} header to {}", path.display()))?;

    info!(path = %path.display(), %format, "wrote header");
    Ok(())
}

fn check_date(header: &PdbHeader) {
    let date = header.date().trim();
    if !date.is_empty() && parse_pdb_date(date).is_none() {
        warn!(date, "header date is not a valid DD-MON-YYYY date");
    }
}

/// Field values for a freshly stamped header.
#[derive(Debug, Clone, Default)]
pub struct StampFields {
    pub classification: Option<String>,
    pub pdb_id: Option<String>,
    pub title: Option<String>,
    pub authors: Vec<String>,
    /// `NAME` or `NAME, COMMENT`.
    pub methods: Vec<String>,
    pub resolution: Option<f32>,
}

/// Build a reset-mode header and apply `fields` over it.
#[must_use]
pub fn stamp_header(fields: &StampFields, options: &HeaderOptions) -> PdbHeader {
    let mut header = PdbHeader::reset_with(options);
    if let Some(classification) = &fields.classification {
        header.set_classification(classification);
    }
    if let Some(pdb_id) = &fields.pdb_id {
        header.set_pdb_id(pdb_id);
    }
    if let Some(title) = &fields.title {
        header.set_title(title.as_str());
    }
    for author in &fields.authors {
        header.add_author(author.as_str());
    }
    for method in &fields.methods {
        let (name, comment) = split_method(method);
        header.add_method(name, comment);
    }
    if let Some(resolution) = fields.resolution {
        header.set_resolution(resolution);
    }
    header
}

/// Split a method argument at its first comma.
#[must_use]
pub fn split_method(arg: &str) -> (&str, &str) {
    match arg.split_once(',') {
        Some((name, comment)) => (name, comment.trim()),
        None => (arg, ""),
    }
}
