//! Record sinks
//!
//! Generators push records into a [`RecordSink`]. Files are created (and
//! truncated) when the sink is opened; nothing is cleaned up on failure.

use crate::error::GenerateResult;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Destination for generated records
pub trait RecordSink<T> {
    fn write_record(&mut self, record: &T) -> GenerateResult<()>;

    /// Flush buffered output. Sinks that only write on finish (JSON) do so
    /// here.
    fn finish(&mut self) -> GenerateResult<()> {
        Ok(())
    }
}

/// In-memory sink, used by tests and by callers that post-process records
impl<T: Clone> RecordSink<T> for Vec<T> {
    fn write_record(&mut self, record: &T) -> GenerateResult<()> {
        self.push(record.clone());
        Ok(())
    }
}

/// CSV file whose header row is written as soon as the sink is opened
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl CsvSink<BufWriter<File>> {
    pub fn create(path: impl AsRef<Path>, headers: &[&str]) -> GenerateResult<Self> {
        let path = path.as_ref();
        debug!("Opening CSV output {:?}", path);
        let file = File::create(path)?;
        Self::from_writer(BufWriter::new(file), headers)
    }
}

impl<W: Write> CsvSink<W> {
    pub fn from_writer(writer: W, headers: &[&str]) -> GenerateResult<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        writer.write_record(headers)?;
        Ok(Self { writer, rows: 0 })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn into_inner(self) -> GenerateResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| crate::error::GenerateError::Io(e.into_error()))
    }
}

impl<T: Serialize, W: Write> RecordSink<T> for CsvSink<W> {
    fn write_record(&mut self, record: &T) -> GenerateResult<()> {
        self.writer.serialize(record)?;
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> GenerateResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Pretty-printed JSON array, written in one piece on [`RecordSink::finish`]
pub struct JsonArraySink<W: Write> {
    writer: Option<W>,
    records: Vec<serde_json::Value>,
}

impl JsonArraySink<BufWriter<File>> {
    pub fn create(path: impl AsRef<Path>) -> GenerateResult<Self> {
        let path = path.as_ref();
        debug!("Opening JSON output {:?}", path);
        let file = File::create(path)?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }
}

impl<W: Write> JsonArraySink<W> {
    pub fn from_writer(writer: W) -> Self {
        Self {
            writer: Some(writer),
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Serialize, W: Write> RecordSink<T> for JsonArraySink<W> {
    fn write_record(&mut self, record: &T) -> GenerateResult<()> {
        self.records.push(serde_json::to_value(record)?);
        Ok(())
    }

    fn finish(&mut self) -> GenerateResult<()> {
        // A second finish is a no-op
        if let Some(mut writer) = self.writer.take() {
            serde_json::to_writer_pretty(&mut writer, &self.records)?;
            writer.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize, Clone)]
    struct Row {
        id: String,
        value: u32,
        note: Option<String>,
    }

    const HEADERS: &[&str] = &["id", "value", "note"];

    fn rows() -> Vec<Row> {
        vec![
            Row { id: "A-1".to_string(), value: 1, note: Some("x, y".to_string()) },
            Row { id: "A-2".to_string(), value: 2, note: None },
        ]
    }

    #[test]
    fn test_csv_sink_writes_header_once() {
        let mut sink = CsvSink::from_writer(Vec::new(), HEADERS).unwrap();
        for row in rows() {
            sink.write_record(&row).unwrap();
        }
        RecordSink::<Row>::finish(&mut sink).unwrap();
        assert_eq!(sink.rows(), 2);
        let text = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        assert_eq!(text, "id,value,note\nA-1,1,\"x, y\"\nA-2,2,\n");
    }

    #[test]
    fn test_csv_sink_without_rows_keeps_header() {
        let mut sink = CsvSink::from_writer(Vec::new(), HEADERS).unwrap();
        RecordSink::<Row>::finish(&mut sink).unwrap();
        assert_eq!(sink.rows(), 0);
        let text = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        assert_eq!(text, "id,value,note\n");
    }

    #[test]
    fn test_json_sink_writes_array_on_finish() {
        let mut buf = Vec::new();
        {
            let mut sink = JsonArraySink::from_writer(&mut buf);
            for row in rows() {
                sink.write_record(&row).unwrap();
            }
            assert_eq!(sink.len(), 2);
            RecordSink::<Row>::finish(&mut sink).unwrap();
            RecordSink::<Row>::finish(&mut sink).unwrap();
        }
        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let array = parsed.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["id"], "A-1");
        assert!(array[1]["note"].is_null());
    }

    #[test]
    fn test_vec_sink_collects() {
        let mut sink: Vec<Row> = Vec::new();
        for row in rows() {
            sink.write_record(&row).unwrap();
        }
        assert_eq!(sink.len(), 2);
    }
}
