use crate::core::Pipeline;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub records: usize,
    pub bytes_written: usize,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load, then writes the finished document
    /// to `sink` in one write. Nothing reaches `sink` if any step fails.
    pub fn run<W: Write>(&self, sink: &mut W) -> Result<RunSummary> {
        tracing::debug!("Extracting data...");
        let raw_data = self.pipeline.extract()?;
        tracing::debug!("Extracted {} records", raw_data.len());

        tracing::debug!("Transforming data...");
        let records = self.pipeline.transform(raw_data)?;
        tracing::debug!("Transformed {} records", records.len());

        tracing::debug!("Serializing data...");
        let document = self.pipeline.load(&records)?;

        sink.write_all(document.as_bytes())?;
        sink.flush()?;

        let summary = RunSummary {
            records: records.len(),
            bytes_written: document.len(),
        };
        tracing::info!(
            "Converted {} records ({} bytes)",
            summary.records,
            summary.bytes_written
        );
        Ok(summary)
    }
}
