use crate::config::ExtractConfig;
use crate::error::ExtractError;
use crate::filter::LinkFilter;
use crate::parsers;
use crate::results::LinkRecord;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io;
use std::path::Path;

/// Reads saved page markup from `input_path` and writes every set link it
/// contains to `output_path` as a JSON array of absolute URLs.
///
/// Finding no links is not an error; `[]` is written.
pub fn extract(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
) -> Result<Vec<LinkRecord>, ExtractError> {
    extract_with_config(input_path, output_path, &ExtractConfig::default())
}

/// Same as [`extract`] with origin and marker taken from `config`
pub fn extract_with_config(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &ExtractConfig,
) -> Result<Vec<LinkRecord>, ExtractError> {
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();
    let filter = LinkFilter::from_config(config)?;

    let markup = fs::read_to_string(input_path).map_err(|source| ExtractError::ReadFailed {
        path: input_path.to_path_buf(),
        source,
    })?;

    let links = parsers::parse_set_links(&markup, &filter);
    ::log::info!("Found {} set links in {}", links.len(), input_path.display());

    write_links(output_path, &links)?;
    ::log::info!("Links saved to {}", output_path.display());

    Ok(links)
}

/// Serializes links as a 4-space indented JSON array, replacing any
/// existing file
pub fn write_links(output_path: &Path, links: &[LinkRecord]) -> Result<(), ExtractError> {
    let write_failed = |source: io::Error| ExtractError::WriteFailed {
        path: output_path.to_path_buf(),
        source,
    };

    let json = to_indented_json(links).map_err(|e| write_failed(e.into()))?;
    fs::write(output_path, json).map_err(write_failed)
}

fn to_indented_json(links: &[LinkRecord]) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    links.serialize(&mut serializer)?;
    Ok(buf)
}
