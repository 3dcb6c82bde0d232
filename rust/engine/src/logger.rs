use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::{Hand, HandCategory};

/// Outcome of classifying one hand, written as a single JSONL line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    /// Unique identifier for this record (format: YYYYMMDD-NNNNNN)
    pub id: String,
    /// The five cards in the order they were given
    pub hand: Vec<Card>,
    /// Category the hand was classified into
    pub category: HandCategory,
    /// Ordinal strength of the category (0..=9)
    pub strength: u8,
    /// Tie-break key used when two hands share a category
    pub kickers: [u8; 5],
    /// Timestamp when the record was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl EvaluationRecord {
    pub fn from_hand(id: String, hand: &Hand) -> Self {
        let strength = hand.strength();
        Self {
            id,
            hand: hand.cards().to_vec(),
            category: strength.category,
            strength: strength.category.strength(),
            kickers: strength.kickers,
            ts: None,
        }
    }
}

pub fn format_record_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{File, create_dir_all};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes evaluation records as JSON lines.
///
/// The sink is any writer; [`RecordLogger::create`] opens a file and
/// [`RecordLogger::in_memory`] discards output while still handing out ids.
pub struct RecordLogger {
    writer: Option<Box<dyn Write>>,
    date: String,
    seq: u32,
}

impl std::fmt::Debug for RecordLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordLogger")
            .field("has_writer", &self.writer.is_some())
            .field("date", &self.date)
            .field("seq", &self.seq)
            .finish()
    }
}

impl RecordLogger {
    pub fn create<P: AsRef<Path>>(path: P, date: &str) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self::with_writer(BufWriter::new(f), date))
    }

    pub fn with_writer<W: Write + 'static>(writer: W, date: &str) -> Self {
        Self {
            writer: Some(Box::new(writer)),
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn in_memory(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_record_id(&self.date, self.seq)
    }

    /// Builds a record for `hand` with the next id, writes it and returns it.
    pub fn log_hand(&mut self, hand: &Hand) -> std::io::Result<EvaluationRecord> {
        let id = self.next_id();
        let mut rec = EvaluationRecord::from_hand(id, hand);
        self.write(&mut rec)?;
        Ok(rec)
    }

    pub fn write(&mut self, record: &mut EvaluationRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        if record.ts.is_none() {
            record.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(record).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
