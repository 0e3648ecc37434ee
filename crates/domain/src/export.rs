use chrono::SecondsFormat;
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::{ReadError, TrainingSet, rounding::round1};

pub const CSV_HEADER: &str = "date,exercise,weight,reps,rpe,unit,e1rm";

#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to finish CSV: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Write the sets as CSV, one quoted row per set below an unquoted header.
///
/// Sets whose e1RM cannot be estimated get an empty `e1rm` cell.
pub fn export_csv<'a>(
    sets: impl IntoIterator<Item = &'a TrainingSet>,
) -> Result<String, ExportError> {
    let mut buffer = format!("{CSV_HEADER}\n").into_bytes();
    {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(&mut buffer);

        for set in sets {
            writer.write_record([
                set.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
                set.exercise.to_string(),
                set.weight.to_string(),
                set.reps.to_string(),
                set.rpe.map(|rpe| rpe.to_string()).unwrap_or_default(),
                set.unit.to_string(),
                set.e1rm()
                    .map(|e1rm| round1(e1rm).to_string())
                    .unwrap_or_default(),
            ])?;
        }

        writer.flush()?;
    }

    Ok(String::from_utf8(buffer)?)
}
