use std::time::Duration;
use dioxus::{logger::tracing::{info, warn}, prelude::*};
use futures_util::StreamExt;

use crate::components::{
  backdrop::FloatingBubbles,
  results::{AnalysisPlaceholder, AnalyzingCard, ResultCard},
  toast::ErrorToast,
  upload::{clear_upload, UploadPanel},
};
use crate::utils::analysis::{DetectionFlow, UiState, ANALYSIS_DELAY_MS};

enum Action {
  Analyze,
  Report,
}

#[component]
pub fn Detect() -> Element {
  static CSS: Asset = asset!("assets/detect.css");

  let mut flow: Signal<DetectionFlow> = use_signal(DetectionFlow::new);
  let preview: Signal<Option<String>> = use_signal(|| None);

  let analyzer = use_coroutine(move |mut rx| async move {
    while let Some(action) = rx.next().await {
      match action {
        Action::Analyze => {
          let Some(ticket) = flow.write().begin_analysis() else {
            warn!("analysis requested without a selected scan");
            continue;
          };
          info!("analysis started");
          // The wait runs in its own task so a reset or a new file can
          // land while it sleeps; the ticket decides whether the
          // completion still applies.
          spawn(async move {
            async_std::task::sleep(Duration::from_millis(ANALYSIS_DELAY_MS)).await;
            if flow.write().complete_analysis(ticket) {
              info!("analysis complete");
            } else {
              info!("discarding superseded analysis");
            }
          });
        }
        Action::Report => {
          // No report format is defined for the demo build.
          info!("report download requested; nothing to generate");
        }
      }
    }
  });

  let state = flow.read().state();
  let outcome = flow.read().outcome();

  rsx! {
    document::Stylesheet { href: CSS },
    div {
      class: "detect-page",
      FloatingBubbles { count: 5 }
      div {
        class: "page-title",
        h1 { "Try AI Detection" }
        p { "Upload a lung scan image and let our AI analyze it for potential cancer detection. Get instant results with confidence scores and recommendations." }
      }
      div {
        class: "detect-grid",
        div {
          class: "upload-column",
          UploadPanel { flow, preview }
          if state == UiState::FileSelected {
            button {
              class: "button analyze-button",
              onclick: move |_evt| analyzer.send(Action::Analyze),
              "🔬 Analyze with AI"
            }
          }
          if state == UiState::Analyzing {
            AnalyzingCard { }
          }
        }
        div {
          class: "results-column",
          h2 { class: "panel-title results-title", "Analysis Results" }
          if let Some(outcome) = outcome {
            ResultCard {
              outcome,
              on_reset: move |_evt| clear_upload(flow, preview),
              on_report: move |_evt| analyzer.send(Action::Report),
            }
          }
          if outcome.is_none() && state != UiState::Analyzing {
            AnalysisPlaceholder { }
          }
        }
      }
      Disclaimer { }
      ErrorToast { id: "invalid-type-toast", content: "Please upload an image file (JPEG, PNG, etc.)" }
      ErrorToast { id: "file-size-toast", content: "File size must be less than 10MB" }
    }
  }
}

#[component]
fn Disclaimer() -> Element {
  rsx! {
    div {
      class: "disclaimer",
      div { class: "disclaimer-icon", "⚠️" }
      h3 { "Medical Disclaimer" }
      p { "This AI tool is for educational and demonstration purposes only. Results should not be used for actual medical diagnosis. Always consult with qualified healthcare professionals for proper medical evaluation and treatment decisions." }
    }
  }
}
