use crate::grid::Rota;
use crate::io;
use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub trait RotaSink {
    /// Publie un planning déjà entièrement calculé. L'ancien contenu n'est
    /// remplacé qu'une fois le nouveau écrit.
    fn publish(&self, rota: &Rota, marker: &str) -> anyhow::Result<()>;
}

/// Grille CSV telle qu'affichée dans le tableur
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RotaSink for CsvSink {
    fn publish(&self, rota: &Rota, marker: &str) -> anyhow::Result<()> {
        let bytes = io::grid_to_csv(&rota.rows(marker))?;
        write_atomic(&self.path, &bytes)
    }
}

/// Planning complet en JSON (métadonnées du run incluses)
pub struct JsonSink {
    path: PathBuf,
}

impl JsonSink {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RotaSink for JsonSink {
    fn publish(&self, rota: &Rota, _marker: &str) -> anyhow::Result<()> {
        let bytes = io::rota_to_json(rota)?;
        write_atomic(&self.path, &bytes)
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).with_context(|| "atomic rename")?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "rota written");
    Ok(())
}
