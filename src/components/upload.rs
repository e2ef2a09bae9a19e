#![allow(non_snake_case)]

use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use dioxus::web::WebEventExt;
use web_sys::{wasm_bindgen::JsCast, HtmlInputElement};

use crate::components::toast::flash;
use crate::utils::analysis::DetectionFlow;
use crate::utils::preview::{create_preview_url, revoke_preview_url};
use crate::utils::upload::{format_file_size, ScanFile, UploadError};

// Drops the whole session: preview URL, selected file, any pending or
// finished analysis. Shared by the Remove button and the result card's
// "Try Another Image".
pub fn clear_upload(mut flow: Signal<DetectionFlow>, mut preview: Signal<Option<String>>) {
  if let Some(old) = preview() {
    revoke_preview_url(&old);
  }
  preview.set(None);
  flow.write().reset();
  info!("upload cleared");
}

#[component]
pub fn UploadPanel(mut flow: Signal<DetectionFlow>, mut preview: Signal<Option<String>>) -> Element {

  let mut accept_file = move |file: web_sys::File| {
    let scan = ScanFile {
      name: file.name(),
      size: file.size() as u64,
      content_type: file.type_(),
    };
    let submitted = flow.write().submit_file(scan);
    match submitted {
      Ok(()) => {
        info!("accepted scan: {}", file.name());
        if let Some(old) = preview() {
          revoke_preview_url(&old);
        }
        preview.set(create_preview_url(&file));
      }
      Err(err @ UploadError::InvalidFileType(_)) => {
        warn!("rejected upload: {}", err);
        flash("invalid-type-toast");
      }
      Err(err @ UploadError::FileTooLarge(_)) => {
        warn!("rejected upload: {}", err);
        flash("file-size-toast");
      }
    }
  };

  let select_files = move |evt: FormEvent| {
    if let Some(web_evt) = evt.try_as_web_event() {
      if let Some(tar) = web_evt.target() {
        if let Ok(input_element) = tar.dyn_into::<HtmlInputElement>() {
          if let Some(file) = input_element.files().and_then(|list| list.get(0)) {
            accept_file(file);
          }
          // clear the input to enable reupload of the same file
          input_element.set_value("");
        }
      }
    }
  };

  let drop_files = move |evt: Event<DragData>| {
    evt.prevent_default();
    if let Some(drag_evt) = evt.try_as_web_event() {
      let dropped = drag_evt
        .data_transfer()
        .and_then(|dt| dt.files())
        .and_then(|list| list.get(0));
      if let Some(file) = dropped {
        accept_file(file);
      }
    }
  };

  let file_meta = flow.read().file().map(|f| (f.name.clone(), format_file_size(f.size)));

  rsx! {
    div {
      class: "upload-section",
      h2 { class: "panel-title upload-title", "Upload Medical Image" }
      if preview().is_none() {
        div {
          class: "upload-area",
          id: "dropzone",
          onmounted: move |_evt| {
            document::eval(r#"
              var millis = 150;
              setTimeout(function() {{
                 const dropZone = document.getElementById('dropzone');
                 if (!dropZone) {console.warn('no drop zone found!');}
                 dropZone.addEventListener('dragover', (e) => {
                    e.preventDefault();
                    dropZone.classList.add('dragover');
                 });
                 dropZone.addEventListener('dragleave', (e) => {
                    dropZone.classList.remove('dragover');
                 });
                 dropZone.addEventListener('drop', (e) => {
                    e.preventDefault();
                    dropZone.classList.remove('dragover');
                 });
              }}, millis);
            "#);
          },
          ondragover: move |evt| evt.prevent_default(),
          ondrop: drop_files,
          div { class: "upload-icon", "📁" }
          p { class: "upload-text", "Drag & drop your medical image here" }
          p { "or" }
          button {
            r#type: "button",
            id: "browse-button",
            onclick: move |evt| {
              evt.prevent_default();
              document::eval(r#"
                const fileInput = document.getElementById('scan-upload');
                fileInput.click();
              "#);
            },
            ondragover: move |evt| evt.prevent_default(),
            ondrop: move |evt| evt.prevent_default(),
            "Click to browse your files"
          }
          input {
            r#type: "file",
            id: "scan-upload",
            class: "file-input",
            accept: "image/*,.dcm",
            onchange: select_files
          }
          div {
            class: "upload-hint",
            "Supports: JPEG, PNG, DICOM • Max size: 10MB"
          }
        }
      }
      if let Some(url) = preview() {
        div {
          class: "preview-card",
          div {
            class: "preview-frame",
            img {
              class: "preview-image",
              src: "{url}",
              alt: "Uploaded medical scan"
            }
          }
          div {
            class: "preview-meta",
            if let Some((name, size)) = file_meta {
              div {
                class: "preview-file",
                p { class: "preview-file-name", "{name}" }
                p { class: "preview-file-size", "{size}" }
              }
            }
            button {
              class: "remove-button",
              onclick: move |_evt| clear_upload(flow, preview),
              "Remove"
            }
          }
        }
      }
    }
  }
}
