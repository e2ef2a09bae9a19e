use dioxus::prelude::*;

// Decorative floating orbs drifting behind the page content. Purely
// cosmetic, sized and staggered per index.
#[component]
pub fn FloatingBubbles(count: usize) -> Element {
  let bubbles = (0..count).map(|i| {
    format!(
      "width: {}px; height: {}px; left: {}%; animation-delay: {}s; animation-duration: {}s;",
      60 + i * 20,
      60 + i * 20,
      10 + i * 15,
      i * 2,
      8 + i
    )
  });

  rsx! {
    div {
      class: "bubbles",
      for (i, style) in bubbles.enumerate() {
        div { key: "{i}", class: "bubble", style: "{style}" }
      }
    }
  }
}
