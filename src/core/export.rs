//! CSV export of translation records.
//!
//! The file starts with a UTF-8 byte order mark so spreadsheet applications
//! detect the encoding of the Korean text.

use crate::{
    errors::{Error, Result},
    models::TranslationRecord,
};
use chrono::{NaiveDate, SecondsFormat};

const HEADER: [&str; 6] = ["ID", "생성일", "한국어", "영어(원본)", "영어(편집)", "편집여부"];

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>> {
    writer.into_inner().map_err(|e| Error::Export {
        message: e.to_string(),
    })
}

/// Renders `records` as CSV, one line per record in the given order.
///
/// The header is written bare; every field of a data row is quoted.
pub fn to_csv(records: &[TranslationRecord]) -> Result<String> {
    let mut header = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    header.write_record(HEADER)?;

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(finish(header)?);
    for record in records {
        writer.write_record([
            record.id.to_string().as_str(),
            record
                .created_at
                .to_rfc3339_opts(SecondsFormat::Secs, true)
                .as_str(),
            record.korean_text.as_str(),
            record.english_text.as_str(),
            record.edited_english_text.as_deref().unwrap_or_default(),
            if record.is_edited() { "TRUE" } else { "FALSE" },
        ])?;
    }

    let body = String::from_utf8(finish(writer)?).map_err(|e| Error::Export {
        message: e.to_string(),
    })?;

    Ok(format!("\u{FEFF}{body}"))
}

/// Download file name for an export made on `date`.
#[must_use]
pub fn file_name(date: NaiveDate) -> String {
    format!("translations-{}.csv", date.format("%Y-%m-%d"))
}
