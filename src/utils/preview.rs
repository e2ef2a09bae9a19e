use dioxus::logger::tracing::error;
use web_sys::{File, Url};

// The preview is an object URL pointing at the selected file's blob.
// Every URL handed out here must come back through revoke_preview_url,
// otherwise the blob stays reachable for the rest of the page's lifetime.
pub fn create_preview_url(file: &File) -> Option<String> {
  match Url::create_object_url_with_blob(file) {
    Ok(url) => Some(url),
    Err(e) => {
      error!("failed to create preview url: {:?}", e);
      None
    }
  }
}

pub fn revoke_preview_url(url: &str) {
  if let Err(e) = Url::revoke_object_url(url) {
    error!("failed to revoke preview url: {:?}", e);
  }
}
