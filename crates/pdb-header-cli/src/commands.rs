use anyhow::Result;
use tracing::{debug, info_span};

use pdb_header::{EnvIdentity, HeaderOptions};
use pdb_header_cli::convert::{HeaderFormat, StampFields, load_header, save_header, stamp_header};

use crate::cli::{ConvertArgs, ShowArgs, StampArgs};

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let format = if args.binary {
        HeaderFormat::Binary
    } else {
        HeaderFormat::Text
    };
    let span = info_span!("show", input = %args.input.display());
    let _guard = span.enter();

    let header = load_header(&args.input, format)?;
    print!("{header}");
    Ok(())
}

pub fn run_convert(args: &ConvertArgs) -> Result<()> {
    let (from, to) = args.formats();
    let span = info_span!("convert", %from, %to);
    let _guard = span.enter();

    let header = load_header(&args.input, from)?;
    save_header(&args.output, &header, to)
}

pub fn run_stamp(args: &StampArgs) -> Result<()> {
    let span = info_span!("stamp", output = %args.output.display());
    let _guard = span.enter();

    let options = HeaderOptions::new()
        .with_program("pdbhead")
        .with_identity(&EnvIdentity);
    debug!(note = %options.provenance(), "stamping header");

    let fields = StampFields {
        classification: args.classification.clone(),
        pdb_id: args.pdb_id.clone(),
        title: args.title.clone(),
        authors: args.authors.clone(),
        methods: args.methods.clone(),
        resolution: args.resolution,
    };
    let header = stamp_header(&fields, &options);
    save_header(&args.output, &header, args.format.into())
}
