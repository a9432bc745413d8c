//! Header model and its supporting pieces.
//!
//! - [`PdbHeader`]: the metadata block itself
//! - [`date`]: `DD-MON-YYYY` rendering and parsing
//! - [`provenance`]: identity providers for the note stamped on fresh headers

pub mod date;
mod model;
pub mod provenance;

pub use date::{MONTHS, format_pdb_date, parse_pdb_date};
pub use model::{
    CLASSIFICATION_LEN, ClearMode, ELECTRON_DIFFRACTION, FIBER_DIFFRACTION,
    FLUORESCENCE_TRANSFER, MAX_RESOLUTION, NEUTRON_DIFFRACTION, NMR, NO_RESOLUTION, PDB_ID_LEN,
    PdbHeader, RESOLUTION_REMARK, THEORETICAL_MODEL, UNCLASSIFIED_REMARK, X_RAY_DIFFRACTION,
};
pub(crate) use model::comment_separator;
pub use provenance::{AnonymousIdentity, EnvIdentity, Identity, StaticIdentity};
