//! Translate parsed arguments into a reconciliation request

use recon_content::{Format, Mapping};
use recon_core::{NormalizedPath, ReconcileOptions, ReconcileRequest, State};
use recon_fs::io;

use crate::cli::Cli;
use crate::error::{CliError, Result};

/// Parse inline or file input as a mapping, detecting JSON or YAML.
///
/// Blank input is an empty mapping.
pub fn parse_input(text: &str) -> Result<Mapping> {
    match Format::from_content(text) {
        Some(format) => Ok(format.parse(text)?),
        None => Ok(Mapping::new()),
    }
}

fn load_input(cli: &Cli) -> Result<Option<Mapping>> {
    if let Some(inline) = &cli.input {
        return parse_input(inline).map(Some);
    }
    if let Some(file) = &cli.input_file {
        let text = io::read_text(&NormalizedPath::expand(&file.to_string_lossy()))?;
        return parse_input(&text).map(Some);
    }
    Ok(None)
}

/// Build the request described by `cli`.
pub fn build_request(cli: &Cli) -> Result<ReconcileRequest> {
    let state: State = cli.state.parse()?;
    let format_hint: Format = cli.format.parse()?;
    let input = load_input(cli)?;

    let input = match (state, input) {
        (State::Empty, input) => input.unwrap_or_default(),
        (_, Some(input)) => input,
        (_, None) => {
            return Err(CliError::user(format!(
                "--input or --input-file is required for state {state}"
            )));
        }
    };

    let path = NormalizedPath::expand(&cli.path);
    tracing::debug!(%path, %state, format = %format_hint, "Built request");

    Ok(ReconcileRequest::new(path, state)
        .with_desired(input.clone())
        .with_removal(input)
        .with_format_hint(Some(format_hint))
        .with_options(ReconcileOptions {
            backup: cli.backup,
            create_dirs: !cli.no_create_path,
            dry_run: cli.check,
            diff: cli.diff,
        }))
}
