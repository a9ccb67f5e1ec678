//! Word template filling.
//!
//! A `.docx` file is a ZIP archive whose body text (every paragraph and
//! table cell) lives in `word/document.xml`. Filling is a literal,
//! case-sensitive, non-regex substring replacement of each known token
//! across that XML; all other archive entries are copied through untouched.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use quick_xml::escape::escape;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

use super::DocumentError;

const DOCUMENT_XML: &str = "word/document.xml";

/// Fixed entry timestamp so identical inputs produce identical bytes.
fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default().last_modified_time(zip::DateTime::default())
}

/// Replace every known token in the body XML with its XML-escaped value.
///
/// Tokens absent from the text are no-ops; tokens present in the text but
/// missing from the map are left visible in the output.
pub fn substitute_tokens(xml: &str, placeholders: &[(String, String)]) -> String {
    let mut text = xml.to_string();
    for (token, value) in placeholders {
        text = text.replace(token.as_str(), &escape(value.as_str()));
    }
    text
}

/// Fill `template` with `placeholders` and write the result to `output`,
/// overwriting any previous run.
pub fn fill_word_template(
    template: &Path,
    output: &Path,
    placeholders: &[(String, String)],
) -> Result<(), DocumentError> {
    let mut archive = ZipArchive::new(File::open(template)?)?;
    let mut writer = ZipWriter::new(File::create(output)?);

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if entry.name() == DOCUMENT_XML {
            let mut xml = String::new();
            entry.read_to_string(&mut xml)?;
            let filled = substitute_tokens(&xml, placeholders);
            writer.start_file(DOCUMENT_XML, entry_options())?;
            writer.write_all(filled.as_bytes())?;
        } else {
            writer.raw_copy_file(entry)?;
        }
    }

    writer.finish()?;
    Ok(())
}
