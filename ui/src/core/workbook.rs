//! Spreadsheet workbook referenced at startup.
//!
//! The dashboard tables are not read from it; it is only opened as an
//! `.xlsx` archive and checked for the configured sheet, so a missing or wrong
//! file stops startup.

use std::fs::File;
use std::io::{self, Read, Seek};
use std::path::{Path, PathBuf};

use zip::result::ZipError;
use zip::ZipArchive;

use super::error::{DashboardError, DashboardResult};

/// Workbook part listing the sheets.
const WORKBOOK_PART: &str = "xl/workbook.xml";
/// `xl/workbook.xml` is a small index; anything larger is not a real workbook.
const MAX_WORKBOOK_PART: u64 = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkbookSource {
    pub path: PathBuf,
    pub sheet: String,
    pub size_bytes: u64,
}

impl WorkbookSource {
    pub fn open(path: &Path, sheet: &str) -> DashboardResult<Self> {
        let io_error = |source: io::Error| match source.kind() {
            io::ErrorKind::NotFound => DashboardError::WorkbookMissing(path.to_path_buf()),
            _ => DashboardError::Io {
                path: path.to_path_buf(),
                source,
            },
        };

        let file = File::open(path).map_err(io_error)?;
        let size_bytes = file.metadata().map_err(io_error)?.len();

        let sheets = read_sheet_names(file).map_err(|err| match err {
            ZipError::FileNotFound => DashboardError::WorkbookInvalid {
                path: path.to_path_buf(),
                reason: "no xl/workbook.xml part",
            },
            ZipError::Io(source) => DashboardError::Io {
                path: path.to_path_buf(),
                source,
            },
            source => DashboardError::WorkbookArchive {
                path: path.to_path_buf(),
                source,
            },
        })?;

        if !sheets.iter().any(|name| name == sheet) {
            return Err(DashboardError::SheetMissing {
                path: path.to_path_buf(),
                sheet: sheet.to_string(),
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            sheet: sheet.to_string(),
            size_bytes,
        })
    }
}

fn read_sheet_names<R: Read + Seek>(reader: R) -> Result<Vec<String>, ZipError> {
    let mut archive = ZipArchive::new(reader)?;
    let part = archive.by_name(WORKBOOK_PART)?;
    if part.size() > MAX_WORKBOOK_PART {
        return Err(ZipError::InvalidArchive("xl/workbook.xml is oversized".into()));
    }

    let mut xml = String::new();
    part.take(MAX_WORKBOOK_PART).read_to_string(&mut xml)?;
    Ok(sheet_names(&xml))
}

/// `name` attributes of the `<sheet>` elements in `xl/workbook.xml`.
fn sheet_names(xml: &str) -> Vec<String> {
    xml.split("<sheet ")
        .skip(1)
        .filter_map(|element| {
            let attrs = &element[..element.find('>').unwrap_or(element.len())];
            let start = attrs.find("name=\"")? + "name=\"".len();
            let len = attrs[start..].find('"')?;
            Some(attrs[start..start + len].to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use zip::write::SimpleFileOptions;
    use zip::{CompressionMethod, ZipWriter};

    const BUNDLED: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/data.xlsx");

    /// Writes a zip archive with the given parts to a temp file.
    fn archive(parts: &[(&str, &str)]) -> NamedTempFile {
        let temp = NamedTempFile::new().unwrap();
        let mut writer = ZipWriter::new(temp.reopen().unwrap());
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        for (name, body) in parts {
            writer.start_file(*name, options).unwrap();
            writer.write_all(body.as_bytes()).unwrap();
        }
        writer.finish().unwrap();
        temp
    }

    fn workbook_xml(sheets: &[&str]) -> String {
        let entries: String = sheets
            .iter()
            .enumerate()
            .map(|(i, name)| format!(r#"<sheet name="{name}" sheetId="{}" r:id="rId{}"/>"#, i + 1, i + 1))
            .collect();
        format!(r#"<?xml version="1.0"?><workbook><sheets>{entries}</sheets></workbook>"#)
    }

    #[test]
    fn bundled_workbook_is_accepted() {
        let source = WorkbookSource::open(Path::new(BUNDLED), "Sheet1").unwrap();
        assert_eq!(source.sheet, "Sheet1");
        assert!(source.size_bytes > 0);
    }

    #[test]
    fn bundled_workbook_lacks_other_sheets() {
        let err = WorkbookSource::open(Path::new(BUNDLED), "Sheet2").unwrap_err();
        assert!(matches!(err, DashboardError::SheetMissing { sheet, .. } if sheet == "Sheet2"));
    }

    #[test]
    fn missing_workbook_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.xlsx");
        let err = WorkbookSource::open(&path, "Sheet1").unwrap_err();
        assert!(matches!(err, DashboardError::WorkbookMissing(p) if p == path));
    }

    #[test]
    fn plain_text_is_not_a_workbook() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"Metric,Value\nEvent count,1326\n").unwrap();
        let err = WorkbookSource::open(temp.path(), "Sheet1").unwrap_err();
        assert!(matches!(err, DashboardError::WorkbookArchive { .. }));
    }

    #[test]
    fn zip_signature_alone_is_not_an_archive() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"PK\x03\x04 this is not a zip archive, it only mentions xl/workbook.xml")
            .unwrap();
        let err = WorkbookSource::open(temp.path(), "Sheet1").unwrap_err();
        assert!(matches!(err, DashboardError::WorkbookArchive { .. }));
    }

    #[test]
    fn zip_without_workbook_part_is_rejected() {
        let temp = archive(&[("word/document.xml", "<document/>")]);
        let err = WorkbookSource::open(temp.path(), "Sheet1").unwrap_err();
        assert!(matches!(
            err,
            DashboardError::WorkbookInvalid {
                reason: "no xl/workbook.xml part",
                ..
            }
        ));
    }

    #[test]
    fn configured_sheet_must_exist() {
        let temp = archive(&[(WORKBOOK_PART, workbook_xml(&["Summary", "Events"]).as_str())]);
        let err = WorkbookSource::open(temp.path(), "Sheet1").unwrap_err();
        assert!(matches!(err, DashboardError::SheetMissing { sheet, .. } if sheet == "Sheet1"));

        let source = WorkbookSource::open(temp.path(), "Events").unwrap();
        assert_eq!(source.sheet, "Events");
    }

    #[test]
    fn sheet_names_are_read_in_order() {
        assert_eq!(sheet_names(&workbook_xml(&["A", "B c"])), ["A", "B c"]);
        assert!(sheet_names("<workbook><sheets/></workbook>").is_empty());
    }
}
