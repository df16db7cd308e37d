//! # Document Writer
//!
//! Append-only sink for one generated document, either a plain file or a
//! gzip stream.
//!
//! ## Example
//!
//! ```no_run
//! use std::io::Write;
//! use std::path::Path;
//! use genppd::writer::DocumentWriter;
//!
//! let mut writer = DocumentWriter::create(Path::new("/tmp/stp-test.5.2.ppd.gz"), true)?;
//! writer.write_all(b"*PPD-Adobe: \"4.3\"\n")?;
//! writer.finish()?;
//! # Ok::<(), genppd::GenppdError>(())
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::config::GeneratorConfig;
use crate::error::{GenppdError, Result};
use crate::ir::Program;
use crate::ppd::Variant;

enum Sink {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

/// An open output document.
pub struct DocumentWriter {
    path: PathBuf,
    sink: Sink,
}

impl DocumentWriter {
    /// Create (or truncate) the file at `path`.
    pub fn create(path: &Path, compress: bool) -> Result<Self> {
        let file = File::create(path).map_err(|source| GenppdError::Sink {
            path: path.to_path_buf(),
            source,
        })?;
        let buffered = BufWriter::new(file);
        let sink = if compress {
            Sink::Gzip(GzEncoder::new(buffered, Compression::default()))
        } else {
            Sink::Plain(buffered)
        };
        Ok(Self {
            path: path.to_path_buf(),
            sink,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush everything and close the file.
    pub fn finish(self) -> Result<()> {
        let path = self.path;
        let sink_error = |source| GenppdError::Sink {
            path: path.clone(),
            source,
        };
        match self.sink {
            Sink::Plain(mut out) => out.flush().map_err(sink_error),
            Sink::Gzip(encoder) => encoder.finish().and_then(|mut out| out.flush()).map_err(sink_error),
        }
    }
}

impl Write for DocumentWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.sink {
            Sink::Plain(out) => out.write(buf),
            Sink::Gzip(out) => out.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.sink {
            Sink::Plain(out) => out.flush(),
            Sink::Gzip(out) => out.flush(),
        }
    }
}

/// `<prefix>-<driver>.<release>[.sim|.nc]<ext>`, the name a document
/// gives itself in its footer.
pub fn document_basename(config: &GeneratorConfig, driver: &str, variant: Variant) -> String {
    format!(
        "{}-{}.{}{}{}",
        config.file_prefix,
        driver,
        config.release_version,
        variant.file_infix(),
        config.extension
    )
}

/// Suffix added to compressed documents.
pub fn compression_suffix(config: &GeneratorConfig) -> &'static str {
    if config.compress { ".gz" } else { "" }
}

/// `<prefix>-<driver>.<release>[.sim|.nc]<ext>[.gz]`
pub fn document_filename(config: &GeneratorConfig, driver: &str, variant: Variant) -> String {
    format!(
        "{}{}",
        document_basename(config, driver, variant),
        compression_suffix(config)
    )
}

/// Install path of a document: `<model_dir>/<lang|C>/<tail>`.
pub fn install_location(config: &GeneratorConfig, language: Option<&str>, tail: &str) -> String {
    let separator = if config.model_dir.ends_with('/') { "" } else { "/" };
    format!(
        "{}{}{}/{}",
        config.model_dir,
        separator,
        language.unwrap_or("C"),
        tail
    )
}

/// Write a compiled document to `path`.
pub fn write_document(program: &Program, path: &Path, compress: bool) -> Result<()> {
    let mut writer = DocumentWriter::create(path, compress)?;
    program.write_to(&mut writer).map_err(|source| GenppdError::Sink {
        path: path.to_path_buf(),
        source,
    })?;
    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Op;
    use flate2::read::GzDecoder;
    use std::io::Read;

    fn program() -> Program {
        vec![Op::quoted("PPD-Adobe", "4.3"), Op::comment(" End of test.ppd")]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_document_filename() {
        let mut config = GeneratorConfig::default();
        assert_eq!(
            document_filename(&config, "escp2-c88", Variant::Standard),
            "stp-escp2-c88.5.2.ppd.gz"
        );
        config.compress = false;
        assert_eq!(
            document_filename(&config, "pcl-ljet4", Variant::Simplified),
            "stp-pcl-ljet4.5.2.sim.ppd"
        );
        assert_eq!(
            document_filename(&config, "pcl-ljet4", Variant::NoColorOpts),
            "stp-pcl-ljet4.5.2.nc.ppd"
        );
    }

    #[test]
    fn test_install_location() {
        let mut config = GeneratorConfig::default();
        assert_eq!(
            install_location(&config, None, "stp-pcl-ljet4.5.2.ppd.gz"),
            "/usr/share/cups/model/C/stp-pcl-ljet4.5.2.ppd.gz"
        );
        config.model_dir = "/opt/model/".into();
        assert_eq!(install_location(&config, Some("fr"), "ppd/x.ppd"), "/opt/model/fr/ppd/x.ppd");
    }

    #[test]
    fn test_write_plain() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.ppd");
        write_document(&program(), &path, false).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "*PPD-Adobe: \"4.3\"\n*% End of test.ppd\n");
    }

    #[test]
    fn test_write_gzip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.ppd.gz");
        write_document(&program(), &path, true).unwrap();

        let mut text = String::new();
        GzDecoder::new(File::open(&path).unwrap())
            .read_to_string(&mut text)
            .unwrap();
        assert_eq!(text, program().to_text());
    }

    #[test]
    fn test_create_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("test.ppd");
        let err = DocumentWriter::create(&path, false).err().unwrap();
        assert!(matches!(err, GenppdError::Sink { .. }));
    }
}
