use std::fmt::Debug;
use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Destination for calculated reports, keyed so one run can write several.
pub trait Output: Debug {
    fn writer_for_report_key(&self, report_key: &str) -> anyhow::Result<impl Write>;
    /// Whether writes to this output go nowhere, so report serialization can
    /// be skipped altogether.
    fn is_noop(&self) -> bool {
        false
    }
}

/// Writes each report to `<file_stem>_<report_key>.json` in one directory.
#[derive(Debug)]
pub struct FileOutput {
    directory_path: PathBuf,
    file_stem: String,
}

impl FileOutput {
    pub fn new(directory_path: PathBuf, file_stem: String) -> Self {
        Self {
            directory_path,
            file_stem,
        }
    }
}

impl Output for FileOutput {
    fn writer_for_report_key(&self, report_key: &str) -> anyhow::Result<impl Write> {
        let file_name = format!("{}_{}.json", self.file_stem, report_key);
        Ok(BufWriter::new(File::create(
            self.directory_path.join(file_name),
        )?))
    }
}

/// An output that swallows everything written to it.
#[derive(Debug, Default)]
pub struct SinkOutput;

impl Output for SinkOutput {
    fn writer_for_report_key(&self, _report_key: &str) -> anyhow::Result<impl Write> {
        Ok(io::sink())
    }

    fn is_noop(&self) -> bool {
        true
    }
}
