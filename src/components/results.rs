#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::utils::analysis::Outcome;

#[component]
pub fn AnalysisPlaceholder() -> Element {
  rsx! {
    div {
      class: "placeholder-card",
      div { class: "placeholder-icon", "🔍" }
      p { "Upload an image to see AI analysis results here" }
    }
  }
}

// Shown for the full length of the simulated inference. The step list is
// fixed; only the spinner actually moves.
#[component]
pub fn AnalyzingCard() -> Element {
  rsx! {
    div {
      class: "analyzing-card",
      div { class: "spinner" }
      h3 { "Analyzing Image..." }
      p { class: "analyzing-subtitle", "Our AI is processing your medical scan" }
      div {
        class: "analyzing-steps",
        div {
          class: "analyzing-step",
          span { "Preprocessing..." }
          span { class: "step-done", "✓" }
        }
        div {
          class: "analyzing-step",
          span { "Feature extraction..." }
          span { class: "step-running", "⟳" }
        }
        div {
          class: "analyzing-step",
          span { "Classification..." }
          span { class: "step-pending", "○" }
        }
      }
    }
  }
}

#[component]
pub fn ResultCard(
  outcome: &'static Outcome,
  on_reset: EventHandler<MouseEvent>,
  on_report: EventHandler<MouseEvent>,
) -> Element {

  let card_class = format!("result-card {}", outcome.tone);
  let severity_class = format!("result-severity {}", outcome.severity.class_name());

  rsx! {
    div {
      class: "{card_class}",
      div {
        class: "result-header",
        div {
          class: "result-identity",
          span { class: "result-icon", "{outcome.icon}" }
          div {
            h3 { class: "result-label", "{outcome.label}" }
            p { class: "{severity_class}", "{outcome.severity}" }
          }
        }
        div {
          class: "result-confidence",
          div { class: "confidence-value", "{outcome.confidence}%" }
          div { class: "confidence-caption", "Confidence" }
        }
      }
      div {
        class: "confidence-meter",
        div {
          class: "confidence-meter-labels",
          span { "Confidence Level" }
          span { "{outcome.confidence}%" }
        }
        div {
          class: "confidence-track",
          div {
            class: "confidence-fill",
            style: "width: {outcome.confidence}%"
          }
        }
      }
      div {
        class: "result-note recommendation",
        h4 { "🏥 Medical Recommendation" }
        p { "{outcome.recommendation}" }
      }
      div {
        class: "result-note clinical",
        h4 { "📋 Clinical Details" }
        p { "{outcome.details}" }
      }
      div {
        class: "result-actions",
        button {
          class: "button button-secondary",
          onclick: move |evt| on_reset.call(evt),
          "🔄 Try Another Image"
        }
        button {
          class: "button button-primary",
          onclick: move |evt| on_report.call(evt),
          "📄 Download Report"
        }
      }
    }
  }
}
