use dioxus::prelude::*;

// Briefly toggles the "show" class on a toast so the CSS transition runs,
// then hides it again after 2 seconds.
pub fn flash(id: &str) {
  document::eval(&format!(
    r#"
    var x = document.getElementById("{id}");
    x.classList.add("show");
    setTimeout(function(){{x.classList.remove("show");}}, 2000);
    "#
  ));
}

#[component]
pub fn ErrorToast(id: String, content: String) -> Element {
  rsx! {
    div {
      id: "{id}",
      class: "toast toast-error",
      "{content}"
    }
  }
}
