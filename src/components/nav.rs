use dioxus::prelude::*;
use crate::Route;

#[component]
pub fn NavBar() -> Element {
  static CSS: Asset = asset!("assets/main.css");

  rsx! {
    document::Stylesheet { href: CSS },
    Header { }
    Outlet::<Route> {}
    Footer { }
  }
}

#[component]
fn Header() -> Element {
  rsx! {
    nav {
      div {
        class: "nav-container",
        Link {
          class: "logo",
          active_class: "nav-active",
          to: Route::Home { },
          "🫁 AI Cancer Detect"
        }
        div {
          class: "nav-links",
          Link {
            active_class: "nav-active",
            to: Route::Home { },
            "Home"
          },
          Link {
            active_class: "nav-active",
            to: Route::Detect { },
            "Try Detection"
          }
        }
      }
    }
  }
}

#[component]
fn Footer() -> Element {
  rsx! {
    footer {
      class: "site-footer",
      p { "© 2025 AI Lung Cancer Detection | Graduation Project | Saving Lives Through Technology" }
      p {
        class: "footer-tagline",
        "Early detection saves lives. Technology makes it possible."
      }
    }
  }
}
