// src/main.rs — Instant Website (Rust + Yew + WASM)
// Title, subtitle, description and images all live in the URL query string,
// so any customized page can be shared by copying its link.

mod form_card;
mod images;
mod main_page;
mod page;
mod query;

use gloo::console::{log, warn};
use gloo::events::EventListener;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::prelude::*;

use form_card::FormCard;
use main_page::MainPage;
use page::PageConfig;
use query::Param;

async fn copy_to_clipboard(text: String) -> Result<(), String> {
    let w = window().ok_or("No window".to_string())?;
    let cb = w.navigator().clipboard();
    wasm_bindgen_futures::JsFuture::from(cb.write_text(&text))
        .await
        .map_err(|_| {
            "Clipboard write failed (HTTPS + user gesture required in some browsers)".to_string()
        })?;
    Ok(())
}

// The URL is the source of truth: state only moves once the write landed.
fn apply_search(
    next: &str,
    write: impl FnOnce(&str) -> Result<(), String>,
) -> Result<PageConfig, String> {
    write(next)?;
    Ok(query::decode_query(next))
}

fn commit_search(next: String, config: &UseStateHandle<PageConfig>) {
    match apply_search(&next, query::replace_search) {
        Ok(cfg) => {
            log!(format!("query -> {next:?}"));
            config.set(cfg);
        }
        Err(e) => warn!(format!("URL not updated, keeping current page: {e}")),
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_state(|| query::decode_query(&query::current_search()));
    let share_status = use_state(String::new);

    // Log what we loaded with, once.
    {
        let config = config.clone();
        use_effect_with((), move |_| {
            log!(format!("instant-website: loaded {:?}", *config));
            || ()
        });
    }

    // Back/forward re-reads the URL.
    {
        let config = config.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|w| {
                EventListener::new(&w, "popstate", move |_| {
                    config.set(query::decode_query(&query::current_search()));
                })
            });
            move || drop(listener)
        });
    }

    let on_change = |param: Param| {
        let config = config.clone();
        Callback::from(move |value: String| {
            let next = query::replace_in(&query::current_search(), param, &value);
            commit_search(next, &config);
        })
    };

    let on_reset = {
        let config = config.clone();
        let share_status = share_status.clone();
        Callback::from(move |_: ()| {
            commit_search(query::clear_all(&query::current_search()), &config);
            share_status.set("Reset to defaults.".to_string());
        })
    };

    let on_copy_link = {
        let share_status = share_status.clone();
        Callback::from(move |_: ()| {
            let share_status = share_status.clone();
            let href = match query::current_href() {
                Ok(h) => h,
                Err(e) => {
                    warn!(e.clone());
                    share_status.set(e);
                    return;
                }
            };
            spawn_local(async move {
                match copy_to_clipboard(href).await {
                    Ok(()) => share_status.set("Link copied ✅".to_string()),
                    Err(e) => {
                        warn!(e.clone());
                        share_status.set(e);
                    }
                }
            });
        })
    };

    html! {
      <MainPage config={(*config).clone()}>
        <FormCard
          config={(*config).clone()}
          on_change_title={on_change(Param::Title)}
          on_change_subtitle={on_change(Param::Subtitle)}
          on_change_description={on_change(Param::Description)}
          on_change_main_image={on_change(Param::MainImage)}
          on_change_bg_image={on_change(Param::BgImage)}
          on_copy_link={on_copy_link}
          on_reset={on_reset}
          share_status={(*share_status).clone()}
        />
      </MainPage>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
