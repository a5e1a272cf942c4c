use crate::error::RotaError;
use crate::grid::Rota;
use crate::model::{Employee, EmployeeDirectory};
use anyhow::Context;
use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Position (0-based) des colonnes utiles dans l'export des réponses au formulaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseColumns {
    #[serde(default = "default_name_column")]
    pub name: usize,
    #[serde(default = "default_manager_column")]
    pub manager: usize,
}

fn default_name_column() -> usize {
    1
}
fn default_manager_column() -> usize {
    6
}

impl Default for ResponseColumns {
    fn default() -> Self {
        Self {
            name: default_name_column(),
            manager: default_manager_column(),
        }
    }
}

/// Import de l'annuaire depuis le CSV des réponses (première ligne = en-tête).
pub fn import_directory_csv<P: AsRef<Path>>(
    path: P,
    columns: ResponseColumns,
) -> Result<EmployeeDirectory, RotaError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| RotaError::MissingData(format!("responses {}: {e}", path.display())))?;
    read_directory(file, columns)
}

pub fn read_directory<R: Read>(
    reader: R,
    columns: ResponseColumns,
) -> Result<EmployeeDirectory, RotaError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let mut dir = EmployeeDirectory::new();
    let mut rows = 0usize;

    for rec in rdr.records() {
        let rec = rec?;
        let line = rec.position().map_or(0, |p| p.line());
        rows += 1;

        let name = rec
            .get(columns.name)
            .map(str::trim)
            .ok_or_else(|| malformed(line, "missing employee name"))?;
        if name.is_empty() {
            return Err(malformed(line, "empty employee name"));
        }
        let flag = rec
            .get(columns.manager)
            .ok_or_else(|| malformed(line, "missing manager flag"))?;

        if !dir.push(Employee::new(name, is_true(flag))) {
            tracing::debug!(name, line, "duplicate response, keeping first");
        }
    }

    if rows == 0 {
        return Err(RotaError::MissingData("no responses found".into()));
    }
    tracing::info!(employees = dir.len(), responses = rows, "directory loaded");
    Ok(dir)
}

fn malformed(line: u64, reason: &str) -> RotaError {
    RotaError::MalformedRecord {
        line,
        reason: reason.to_string(),
    }
}

// Seul "true" compte ; les tableurs l'exportent parfois en "TRUE".
fn is_true(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("true")
}

/// Sérialise les lignes de la grille (en-têtes compris) en CSV.
pub fn grid_to_csv(rows: &[Vec<String>]) -> anyhow::Result<Vec<u8>> {
    let mut w = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_writer(Vec::new());
    for row in rows {
        w.write_record(row)?;
    }
    w.flush()?;
    w.into_inner()
        .map_err(|e| anyhow::anyhow!("flushing csv buffer: {}", e.error()))
}

/// Export JSON du planning (jolie mise en forme)
pub fn rota_to_json(rota: &Rota) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(rota).context("serializing rota")
}
