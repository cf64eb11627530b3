use thiserror::Error;

use crate::state::data_model::{Document, Row};
use crate::state::delimiter::Delimiter;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV writer error: {0}")]
    Flush(String),
    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Parses delimited text. The first non-blank record becomes the header.
pub fn parse_document(content: &str, delimiter: Delimiter) -> Result<Document, CodecError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.iter().all(str::is_empty) && record.len() <= 1 {
            continue;
        }
        records.push(record.iter().map(str::to_string).collect::<Row>());
    }

    let mut records = records.into_iter();
    let Some(headers) = records.next() else {
        return Ok(Document::new());
    };
    Ok(Document::from_parts(headers, records.collect()))
}

/// Writes the header and every row with all fields quoted. Records are joined
/// by `\n` without a trailing newline.
pub fn serialize_document(document: &Document, delimiter: Delimiter) -> Result<String, CodecError> {
    if document.column_count() == 0 {
        return Ok(String::new());
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter.as_byte())
        .quote_style(csv::QuoteStyle::Always)
        .double_quote(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(document.headers())?;
    for row in document.rows() {
        writer.write_record(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| CodecError::Flush(err.error().to_string()))?;
    let mut text = String::from_utf8(bytes)?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}
