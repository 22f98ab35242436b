//! Blueprint tables and preview image written to disk

use crate::io::configuration::{
    BLUEPRINT_FILE, LOCALIZED_BLUEPRINT_FILE, OUTPUT_SUFFIX, PREVIEW_FILE,
};
use crate::io::error::{MapArtError, Result};
use crate::io::translation::{SuffixDescriptors, TranslationTable};
use crate::matching::blueprint::Blueprint;
use crate::pipeline::converter::Conversion;
use image::RgbaImage;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Files written for one conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedOutputs {
    /// Table with canonical names
    pub blueprint: PathBuf,
    /// Table with localized names, when translations were available
    pub localized_blueprint: Option<PathBuf>,
    /// Stitched preview
    pub preview: PathBuf,
}

/// Output folder for `input`: `<stem>_mapart_output` under `root`,
/// or beside the input when no root is given
pub fn output_dir_for(input: &Path, root: Option<&Path>) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    let folder = format!("{}{OUTPUT_SUFFIX}", stem.to_string_lossy());

    root.or_else(|| input.parent())
        .map_or_else(|| PathBuf::from(&folder), |parent| parent.join(&folder))
}

/// Quote a table field when it contains a separator, quote or line break
fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn write_record<W, I, S>(out: &mut W, fields: I) -> std::io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let line = fields
        .into_iter()
        .map(|field| escape_field(field.as_ref()).into_owned())
        .collect::<Vec<_>>()
        .join(",");
    writeln!(out, "{line}")
}

/// Write the blueprint as a grid table with `Y/X`, `X1..` headers
///
/// `label` maps each canonical name to the text written in its cell.
/// With `bom` set the file starts with a UTF-8 byte order mark so
/// spreadsheet tools detect the encoding.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written
pub fn write_blueprint_csv<F>(blueprint: &Blueprint, path: &Path, bom: bool, label: F) -> Result<()>
where
    F: Fn(&str) -> String,
{
    let write_error = |e| MapArtError::FileSystem {
        path: path.to_path_buf(),
        operation: "write blueprint table",
        source: e,
    };

    let mut out = BufWriter::new(File::create(path).map_err(write_error)?);
    if bom {
        out.write_all(UTF8_BOM).map_err(write_error)?;
    }

    let header = std::iter::once("Y/X".to_string())
        .chain((1..=blueprint.width()).map(|x| format!("X{x}")));
    write_record(&mut out, header).map_err(write_error)?;

    for (y, row) in blueprint.rows().enumerate() {
        let record = std::iter::once(format!("Y{}", y + 1))
            .chain(row.iter().map(|name| label(name.as_str())));
        write_record(&mut out, record).map_err(write_error)?;
    }

    out.flush().map_err(write_error)
}

/// Encode the preview as PNG
///
/// # Errors
///
/// Returns `ImageExport` if encoding or writing fails
pub fn save_preview(preview: &RgbaImage, path: &Path) -> Result<()> {
    preview.save(path).map_err(|e| MapArtError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write every artifact of `conversion` into `dir`
///
/// The localized table is only written when `translations` is non-empty.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or any file
/// cannot be written
pub fn save_outputs(
    conversion: &Conversion,
    dir: &Path,
    translations: &TranslationTable,
    suffixes: &SuffixDescriptors,
) -> Result<SavedOutputs> {
    std::fs::create_dir_all(dir).map_err(|e| MapArtError::FileSystem {
        path: dir.to_path_buf(),
        operation: "create directory",
        source: e,
    })?;

    let blueprint = dir.join(BLUEPRINT_FILE);
    write_blueprint_csv(&conversion.blueprint, &blueprint, false, ToString::to_string)?;
    tracing::info!(path = %blueprint.display(), "blueprint saved");

    let localized_blueprint = if translations.is_empty() {
        None
    } else {
        let path = dir.join(LOCALIZED_BLUEPRINT_FILE);
        write_blueprint_csv(&conversion.blueprint, &path, true, |name| {
            translations.translate(name, suffixes)
        })?;
        tracing::info!(path = %path.display(), "localized blueprint saved");
        Some(path)
    };

    let preview = dir.join(PREVIEW_FILE);
    save_preview(&conversion.preview, &preview)?;
    tracing::info!(path = %preview.display(), "preview saved");

    Ok(SavedOutputs {
        blueprint,
        localized_blueprint,
        preview,
    })
}
