use std::time::Duration;
use dioxus::prelude::*;

use crate::components::backdrop::FloatingBubbles;
use crate::Route;

const STAT_ROTATE_MS: u64 = 3_000;

const STATS: [(&str, &str); 4] = [
  ("1.8M+", "Annual Deaths Globally"),
  ("#1", "Cancer-Related Deaths"),
  ("95%", "AI Accuracy Rate"),
  ("Early", "Detection Saves Lives"),
];

const RESULT_TYPES: [(&str, &str, &str); 3] = [
  (
    "🔴",
    "NSCLC (Non-Small Cell)",
    "Non-Small Cell Lung Carcinoma - The most common type of lung cancer, accounting for about 85% of all cases.",
  ),
  (
    "🟡",
    "SCLC (Small Cell)",
    "Small Cell Lung Carcinoma - A more aggressive form that spreads quickly. Represents about 15% of lung cancers.",
  ),
  (
    "🟢",
    "Benign Tissue",
    "Non-cancerous tissue that appears normal. Our AI can accurately distinguish between malignant and benign tissues.",
  ),
];

#[component]
pub fn Home() -> Element {
  static CSS: Asset = asset!("assets/home.css");

  let mut current_stat = use_signal(|| 0usize);

  // Rotates the highlighted stat card. The loop lives and dies with this
  // page, so navigating away stops the ticker.
  use_future(move || async move {
    loop {
      async_std::task::sleep(Duration::from_millis(STAT_ROTATE_MS)).await;
      let next = (current_stat() + 1) % STATS.len();
      current_stat.set(next);
    }
  });

  rsx! {
    document::Stylesheet { href: CSS },
    div {
      class: "home-page",
      FloatingBubbles { count: 6 }
      section {
        class: "hero",
        h1 { "AI-Powered Lung Cancer Detection" }
        p { "Revolutionary deep learning technology for early lung cancer detection and classification" }
        Link {
          class: "cta-button",
          to: Route::Detect { },
          "Explore Technology"
        }
      }
      section {
        class: "stats",
        for (idx, (number, label)) in STATS.iter().enumerate() {
          div {
            key: "{idx}",
            class: if current_stat() == idx { "stat-card stat-active" } else { "stat-card" },
            div { class: "stat-number", "{number}" }
            div { class: "stat-label", "{label}" }
          }
        }
      }
      section {
        id: "about",
        class: "about",
        h2 { "Understanding Lung Cancer" }
        div {
          class: "about-grid",
          div {
            class: "about-card",
            div { class: "about-icon", "🔬" }
            h3 { "What is Cancer?" }
            p { "Cancer is the uncontrolled growth and spread of abnormal cells in the body. It can invade nearby tissues and spread (metastasize) to other parts of the body. Early detection is crucial for effective treatment." }
          }
          div {
            class: "about-card",
            div { class: "about-icon", "🩺" }
            h3 { "Why Focus on Lung Cancer?" }
            p { "Lung cancer is the #1 cause of cancer-related deaths globally, responsible for over 1.8 million deaths per year. It's often diagnosed late with poor survival rates." }
          }
          div {
            class: "about-card",
            div { class: "about-icon", "🧠" }
            h3 { "AI-Powered Solution" }
            p { "Complex lung tissue structure makes it ideal for AI-based image analysis. Our deep learning model can detect and classify different types of lung cancer with remarkable accuracy." }
          }
        }
      }
      section {
        id: "architecture",
        class: "architecture",
        h2 { "System Architecture" }
        div {
          class: "pipeline",
          for (idx, step) in ["📊 Preprocessing", "🧠 AI Model", "🧪 Testing", "📋 Results"].iter().enumerate() {
            div { key: "{idx}", class: "pipeline-step", "{step}" }
            if idx < 3 {
              div { class: "pipeline-arrow", "→" }
            }
          }
        }
        p {
          class: "architecture-blurb",
          "Our advanced pipeline processes medical images through sophisticated preprocessing, deep learning analysis, comprehensive testing, and delivers accurate classification results."
        }
      }
      section {
        id: "results",
        class: "detection-results",
        h2 { "Detection Results" }
        div {
          class: "results-grid",
          for (idx, (icon, title, description)) in RESULT_TYPES.iter().enumerate() {
            div {
              key: "{idx}",
              class: "result-type-card",
              div { class: "result-type-icon", "{icon}" }
              h3 { "{title}" }
              p { "{description}" }
            }
          }
        }
      }
    }
  }
}
