use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use super::model::{Category, Collection, Dataset, Point, Region};

// ---------------------------------------------------------------------------
// Input manifest
// ---------------------------------------------------------------------------

/// The fixed set of input files. Region identifiers come from here, never
/// from file content.
pub const MANIFEST: [(Category, Region, &str); 7] = [
    (Category::HahmScouting, Region::literal(1), "gr_1em3_part1.txt"),
    (Category::HahmScouting, Region::literal(2), "gr_1em3_part2.txt"),
    (Category::HahmScouting, Region::literal(3), "gr_1em3_part3.txt"),
    (Category::HahmScouting, Region::literal(4), "gr_1em3_part4.txt"),
    (Category::HahmScouting, Region::literal(5), "gr_1em3_part5.txt"),
    (
        Category::DarkSusy,
        Region::literal(1),
        "Limit_epsvsmass_BrHtoGamD_1_2018.dat",
    ),
    (Category::Hahm, Region::literal(1), "exo21006.txt"),
];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised while reading the input tables.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("input file not found: {path}")]
    MissingFile { path: PathBuf },

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{file}, line {line}: {reason}")]
    Malformed {
        file: String,
        line: usize,
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load every manifest file from `directory` (current working directory
/// when `None`) into a [`Collection`].
pub fn load_collection(directory: Option<&Path>) -> Result<Collection, LoadError> {
    let mut collection = Collection::new();

    for (category, region, name) in MANIFEST {
        let path = match directory {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        };
        let dataset = load_table(&path)?;
        debug!("loaded {} ({} points) as {category} region {region}", path.display(), dataset.len());
        collection.insert(category, region, dataset);
    }

    Ok(collection)
}

// ---------------------------------------------------------------------------
// Whitespace-table parser
// ---------------------------------------------------------------------------

/// Parse one whitespace-delimited two-column table.
///
/// Blank lines and `#` comment lines are skipped, matching the tolerance
/// of the tools that produced these files. Every other line must hold
/// exactly two numeric tokens.
fn load_table(path: &Path) -> Result<Dataset, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            LoadError::MissingFile {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let file = path.display().to_string();
    let mut points = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err(LoadError::Malformed {
                file: file.clone(),
                line: idx + 1,
                reason: format!("expected 2 columns, found {}", tokens.len()),
            });
        }

        let x = parse_number(tokens[0], &file, idx + 1)?;
        let y = parse_number(tokens[1], &file, idx + 1)?;
        points.push(Point { x, y });
    }

    Ok(Dataset::new(points))
}

fn parse_number(token: &str, file: &str, line: usize) -> Result<f64, LoadError> {
    token.parse::<f64>().map_err(|_| LoadError::Malformed {
        file: file.to_string(),
        line,
        reason: format!("'{token}' is not a number"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) {
        std::fs::write(dir.path().join(name), content).unwrap();
    }

    /// Write all seven manifest files with the given content.
    fn write_manifest(dir: &TempDir, content: &str) {
        for (_, _, name) in MANIFEST {
            write_file(dir, name, content);
        }
    }

    #[test]
    fn round_trips_written_values() {
        let dir = TempDir::new().unwrap();
        write_manifest(&dir, "0.25 1.5e-7\n10.0 -3.25\n");

        let coll = load_collection(Some(dir.path())).unwrap();
        assert_eq!(coll.len(), 7);

        let ds = coll.get(Category::Hahm, Region::literal(1)).unwrap();
        assert_eq!(ds.len(), 2);
        assert!((ds.points()[0].x - 0.25).abs() < 1e-12);
        assert!((ds.points()[0].y - 1.5e-7).abs() < 1e-18);
        assert!((ds.points()[1].y - (-3.25)).abs() < 1e-12);
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let dir = TempDir::new().unwrap();
        write_manifest(&dir, "# mass  epsilon\n\n1.0 2.0\n\n# trailing comment\n");

        let coll = load_collection(Some(dir.path())).unwrap();
        let ds = coll.get(Category::DarkSusy, Region::literal(1)).unwrap();
        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = TempDir::new().unwrap();
        write_manifest(&dir, "1.0 2.0\n");
        std::fs::remove_file(dir.path().join("exo21006.txt")).unwrap();

        let err = load_collection(Some(dir.path())).unwrap_err();
        match err {
            LoadError::MissingFile { path } => {
                assert!(path.to_string_lossy().ends_with("exo21006.txt"));
            }
            other => panic!("expected MissingFile, got {other:?}"),
        }
    }

    #[test]
    fn wrong_column_count_is_malformed() {
        let dir = TempDir::new().unwrap();
        write_manifest(&dir, "1.0 2.0\n3.0 4.0 5.0\n");

        let err = load_collection(Some(dir.path())).unwrap_err();
        match err {
            LoadError::Malformed { line, reason, .. } => {
                assert_eq!(line, 2);
                assert!(reason.contains("found 3"));
            }
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_token_is_malformed() {
        let dir = TempDir::new().unwrap();
        write_manifest(&dir, "1.0 abc\n");

        let err = load_collection(Some(dir.path())).unwrap_err();
        match err {
            LoadError::Malformed { line, reason, file } => {
                assert_eq!(line, 1);
                assert!(reason.contains("'abc'"));
                assert!(!file.is_empty());
            }
            other => panic!("expected Malformed, got {other:?}"),
        }
    }
}
