use std::fmt;

// Hard cap on accepted scans. Anything over this is rejected before any
// other state changes.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

// A user-selected scan as seen by the validation gate: just the metadata
// the browser hands us, no contents.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanFile {
  pub name: String,
  pub size: u64,
  pub content_type: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadError {
  InvalidFileType(String),
  FileTooLarge(u64),
}

impl fmt::Display for UploadError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      UploadError::InvalidFileType(content_type) => {
        if content_type.is_empty() {
          write!(f, "Invalid file type: no content type reported")
        } else {
          write!(f, "Invalid file type: {}", content_type)
        }
      }
      UploadError::FileTooLarge(size) => {
        write!(f, "File too large: {} exceeds the 10MB limit", format_file_size(*size))
      }
    }
  }
}

impl std::error::Error for UploadError {}

// The gate runs in a fixed order: content type first, size second. The
// picker's accept filter also lists .dcm, but DICOM files report a
// non-image content type and are rejected here.
pub fn validate_scan(file: &ScanFile) -> Result<(), UploadError> {
  if !file.content_type.starts_with("image/") {
    return Err(UploadError::InvalidFileType(file.content_type.clone()));
  }
  if file.size > MAX_UPLOAD_BYTES {
    return Err(UploadError::FileTooLarge(file.size));
  }
  Ok(())
}

pub fn format_file_size(bytes: u64) -> String {
  if bytes >= 1024 * 1024 {
    let mb = bytes as f64 / (1024.0 * 1024.0);
    format!("{:.2} MB", mb)
  } else if bytes >= 1024 {
    let kb = bytes as f64 / 1024.0;
    format!("{:.1} KB", kb)
  } else {
    format!("{} B", bytes)
  }
}
