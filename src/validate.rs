//! Client-side form validation
//!
//! These checks run before any payload is built; a failed check means no
//! network call is made. The rules mirror what the registry backend
//! enforces: required fields, email shape, a 9-digit phone minimum,
//! 13-digit JMBG national ids, and a PDF/JPEG/PNG allow-list for uploads.

use std::path::Path;

use chrono::NaiveDate;

use crate::error::{Result, ValidationError};

/// Minimum number of digits in a phone number
pub const PHONE_MIN_DIGITS: usize = 9;

/// JMBG is always exactly 13 digits
pub const JMBG_LEN: usize = 13;

/// Reject empty or whitespace-only values
pub fn required(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field).into());
    }
    Ok(())
}

/// Minimal email shape check: one `@`, non-empty local part, dotted domain
pub fn email(field: &'static str, value: &str) -> Result<()> {
    required(field, value)?;
    let value = value.trim();
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        return Err(ValidationError::Email {
            field,
            value: value.to_string(),
        }
        .into());
    }
    Ok(())
}

/// Phone numbers must carry at least [`PHONE_MIN_DIGITS`] digits.
/// Separators and a leading `+` are ignored.
pub fn phone(field: &'static str, value: &str) -> Result<()> {
    required(field, value)?;
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    if digits < PHONE_MIN_DIGITS {
        return Err(ValidationError::PhoneTooShort {
            field,
            min: PHONE_MIN_DIGITS,
        }
        .into());
    }
    Ok(())
}

/// JMBG: exactly 13 ASCII digits
pub fn jmbg(field: &'static str, value: &str) -> Result<()> {
    let value = value.trim();
    if value.len() != JMBG_LEN || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::Jmbg(field).into());
    }
    Ok(())
}

/// Parse a date argument as the operators type it: `YYYY-MM-DD` or `DD.MM.YYYY`
pub fn date(field: &'static str, value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%d.%m.%Y"))
        .map_err(|_| {
            ValidationError::Date {
                field,
                value: value.to_string(),
            }
            .into()
        })
}

/// File-type allow-list for uploads: PDF, JPEG, PNG.
///
/// Checks the extension first, then the magic bytes when the file is
/// readable, so a renamed `.pdf` that is really a GIF is still rejected.
pub fn upload_file(path: &Path) -> Result<()> {
    let display = path.display().to_string();

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("pdf") | Some("jpg") | Some("jpeg") | Some("png") => {}
        _ => return Err(ValidationError::FileType { path: display }.into()),
    }

    let bytes = std::fs::read(path).map_err(|e| ValidationError::FileUnreadable {
        path: display.clone(),
        reason: e.to_string(),
    })?;
    if !matches_allowed_magic(&bytes) {
        return Err(ValidationError::FileType { path: display }.into());
    }
    Ok(())
}

/// Validate a whole set of upload paths; the first offender fails the batch
pub fn upload_files(paths: &[impl AsRef<Path>]) -> Result<()> {
    for p in paths {
        upload_file(p.as_ref())?;
    }
    Ok(())
}

fn matches_allowed_magic(bytes: &[u8]) -> bool {
    bytes.starts_with(b"%PDF")
        || bytes.starts_with(&[0xFF, 0xD8, 0xFF])
        || bytes.starts_with(&[0x89, b'P', b'N', b'G'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_required_rejects_blank() {
        assert!(required("name", "").is_err());
        assert!(required("name", "   ").is_err());
        assert!(required("name", "Ana").is_ok());
    }

    #[test]
    fn test_email_shapes() {
        assert!(email("email", "ana@komora.me").is_ok());
        assert!(email("email", "a.b@sub.domain.org").is_ok());
        assert!(email("email", "no-at-sign").is_err());
        assert!(email("email", "@missing-local.me").is_err());
        assert!(email("email", "ana@nodot").is_err());
        assert!(email("email", "ana@.starts-with-dot").is_err());
    }

    #[test]
    fn test_phone_minimum_digits() {
        assert!(phone("phone", "067111222").is_ok());
        assert!(phone("phone", "+382 67 111 222").is_ok());
        assert!(phone("phone", "06711122").is_err());
        assert!(phone("phone", "").is_err());
    }

    #[test]
    fn test_jmbg_exact_thirteen_digits() {
        assert!(jmbg("jmbg", "1234567890123").is_ok());
        assert!(jmbg("jmbg", "123456789012").is_err());
        assert!(jmbg("jmbg", "12345678901234").is_err());
        assert!(jmbg("jmbg", "123456789012x").is_err());
    }

    #[test]
    fn test_date_both_input_formats() {
        let iso = date("date", "2025-03-14").unwrap();
        let local = date("date", "14.03.2025").unwrap();
        assert_eq!(iso, local);
        assert!(date("date", "14/03/2025").is_err());
    }

    #[test]
    fn test_upload_file_accepts_real_pdf() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contract.pdf");
        fs::write(&path, b"%PDF-1.7 rest").unwrap();
        assert!(upload_file(&path).is_ok());
    }

    #[test]
    fn test_upload_file_accepts_png_and_jpeg() {
        let dir = tempdir().unwrap();

        let png = dir.path().join("id.png");
        fs::write(&png, [0x89, b'P', b'N', b'G', 0x0D, 0x0A]).unwrap();
        assert!(upload_file(&png).is_ok());

        let jpg = dir.path().join("id.jpg");
        fs::write(&jpg, [0xFF, 0xD8, 0xFF, 0xE0]).unwrap();
        assert!(upload_file(&jpg).is_ok());
    }

    #[test]
    fn test_upload_file_rejects_disallowed_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scan.gif");
        fs::write(&path, b"GIF89a").unwrap();
        assert!(upload_file(&path).is_err());
    }

    #[test]
    fn test_upload_file_rejects_mismatched_magic() {
        // Extension says PDF, content says GIF
        let dir = tempdir().unwrap();
        let path = dir.path().join("fake.pdf");
        fs::write(&path, b"GIF89a").unwrap();
        assert!(upload_file(&path).is_err());
    }

    #[test]
    fn test_upload_files_batch_first_offender() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("a.pdf");
        fs::write(&good, b"%PDF-1.4").unwrap();
        let bad = dir.path().join("b.bmp");
        fs::write(&bad, b"BM").unwrap();

        assert!(upload_files(&[good.clone()]).is_ok());
        assert!(upload_files(&[good, bad]).is_err());
    }
}
