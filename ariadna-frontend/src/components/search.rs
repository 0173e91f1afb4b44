use leptos::*;

#[component]
pub fn SearchForm(on_search: Callback<String, ()>) -> impl IntoView {
    let input = create_node_ref::<html::Input>();

    view! {
      <form
        class="search-form"
        on:submit=move |ev| {
          ev.prevent_default();
          let Some(input) = input.get() else {
            log::warn!("Search input not mounted");
            return;
          };
          on_search.call(input.value());
        }
      >
        <input
          type="search"
          placeholder="Address"
          node_ref=input
          on:keyup=move |ev| {
            if ev.key() == "Escape" {
              event_target::<web_sys::HtmlInputElement>(&ev).set_value("");
            }
          }
        />
        <button type="submit">"Search"</button>
      </form>
    }
}
