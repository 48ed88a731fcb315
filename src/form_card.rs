use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::page::{PageConfig, DEFAULT_BG_IMAGE, DEFAULT_MAIN_IMAGE};

pub const TITLE_MAX_CHARS: usize = 22;
pub const SUBTITLE_MAX_CHARS: usize = 35;

pub const IMAGE_SEARCH_OPTIONS: [&str; 12] = [
    "nature",
    "city",
    "mountains",
    "ocean",
    "forest",
    "desert",
    "space",
    "architecture",
    "abstract",
    "animals",
    "food",
    "travel",
];

/// Cut to `max` characters (not bytes).
pub fn clamp_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Keywords the select should show: absence means the page's default, not "(random)".
pub fn selected_keywords<'a>(value: Option<&'a str>, default: &'static str) -> &'a str {
    value.unwrap_or(default)
}

/// (value, label) pairs for an image select, "(random)" first.
pub fn keyword_options(choices: &[&'static str]) -> Vec<(&'static str, &'static str)> {
    std::iter::once(("", "(random)"))
        .chain(choices.iter().map(|c| (*c, *c)))
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct FormCardProps {
    pub config: PageConfig,
    pub on_change_title: Callback<String>,
    pub on_change_subtitle: Callback<String>,
    pub on_change_description: Callback<String>,
    pub on_change_main_image: Callback<String>,
    pub on_change_bg_image: Callback<String>,
    pub on_copy_link: Callback<()>,
    pub on_reset: Callback<()>,
    #[prop_or_default]
    pub share_status: String,
}

fn keyword_select(id: &'static str, current: &str, on_change: &Callback<String>) -> Html {
    let onchange = {
        let on_change = on_change.clone();
        Callback::from(move |e: Event| {
            let v = e.target_unchecked_into::<HtmlSelectElement>().value();
            on_change.emit(v);
        })
    };

    html! {
        <select {id} name={id} {onchange}>
          { for keyword_options(&IMAGE_SEARCH_OPTIONS).into_iter().map(|(value, label)| html!{
              <option value={value} selected={value == current}>{ label }</option>
          })}
        </select>
    }
}

#[function_component(FormCard)]
pub fn form_card(props: &FormCardProps) -> Html {
    let cfg = &props.config;

    let on_title = {
        let cb = props.on_change_title.clone();
        Callback::from(move |e: InputEvent| {
            let v = e.target_unchecked_into::<HtmlInputElement>().value();
            cb.emit(clamp_chars(&v, TITLE_MAX_CHARS));
        })
    };

    let on_subtitle = {
        let cb = props.on_change_subtitle.clone();
        Callback::from(move |e: InputEvent| {
            let v = e.target_unchecked_into::<HtmlInputElement>().value();
            cb.emit(clamp_chars(&v, SUBTITLE_MAX_CHARS));
        })
    };

    let on_description = {
        let cb = props.on_change_description.clone();
        Callback::from(move |e: InputEvent| {
            let v = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            cb.emit(v);
        })
    };

    let on_copy = {
        let cb = props.on_copy_link.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };

    let on_reset = {
        let cb = props.on_reset.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };

    let main_image = selected_keywords(cfg.main_image.as_deref(), DEFAULT_MAIN_IMAGE);
    let bg_image = selected_keywords(cfg.bg_image.as_deref(), DEFAULT_BG_IMAGE);

    html! {
      <div class="card">
        <div class="card-content">
          <div id="controls">
            <h3 class="subtitle is-3">{ "Customize this page" }</h3>

            <h4 class="subtitle is-4">{ "Choose text" }</h4>

            <p class="help">
              { "An empty field will revert to a default value, however a single empty space is allowed to make it appear empty in the display." }
            </p>
            <br />

            <div class="field">
              <label class="label" for="title-input">{ "Title" }</label>
              <div class="control">
                <input
                  class="input"
                  type="text"
                  id="title-input"
                  name="title-input"
                  placeholder="Your title"
                  size={TITLE_MAX_CHARS.to_string()}
                  maxlength={TITLE_MAX_CHARS.to_string()}
                  value={cfg.title.clone().unwrap_or_default()}
                  oninput={on_title}
                />
              </div>
            </div>

            <div class="field">
              <label class="label" for="subtitle-input">{ "Subtitle" }</label>
              <div class="control">
                <input
                  class="input"
                  type="text"
                  id="subtitle-input"
                  name="subtitle-input"
                  placeholder="Your subtitle"
                  size={SUBTITLE_MAX_CHARS.to_string()}
                  maxlength={SUBTITLE_MAX_CHARS.to_string()}
                  value={cfg.subtitle.clone().unwrap_or_default()}
                  oninput={on_subtitle}
                />
              </div>
            </div>

            <div class="field">
              <label class="label" for="description-input">{ "Description" }</label>
              <div class="control">
                <textarea
                  class="textarea"
                  id="description-input"
                  name="description-input"
                  placeholder="Enter your longer description"
                  rows="3"
                  cols="50"
                  value={cfg.description.clone().unwrap_or_default()}
                  oninput={on_description}
                />
              </div>
            </div>

            <br />

            <h4 class="subtitle is-4">{ "Choose images" }</h4>

            <div class="field">
              <label class="label" for="main-image-input">{ "Main image" }</label>
              <div class="control">
                <div class="select">
                  { keyword_select("main-image-input", main_image, &props.on_change_main_image) }
                </div>
                <p class="help">{ "Used for the profile image." }</p>
              </div>
            </div>

            <div class="field">
              <label class="label" for="bg-image-input">{ "Background image" }</label>
              <div class="control">
                <div class="select">
                  { keyword_select("bg-image-input", bg_image, &props.on_change_bg_image) }
                </div>
              </div>
            </div>

            <br />

            <h4 class="subtitle is-4">{ "Share" }</h4>

            <div class="share-row">
              <button class="button is-link" onclick={on_copy}>{ "Copy link" }</button>
              <button class="button" onclick={on_reset}>{ "Reset" }</button>
              if !props.share_status.is_empty() {
                <span class="help">{ props.share_status.clone() }</span>
              }
            </div>
          </div>
        </div>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_counts_chars_not_bytes() {
        assert_eq!(clamp_chars("short", TITLE_MAX_CHARS), "short");
        assert_eq!(clamp_chars(&"x".repeat(30), TITLE_MAX_CHARS).len(), 22);

        let accented = "é".repeat(40);
        let clamped = clamp_chars(&accented, SUBTITLE_MAX_CHARS);
        assert_eq!(clamped.chars().count(), 35);
    }

    #[test]
    fn clamp_keeps_single_space() {
        assert_eq!(clamp_chars(" ", TITLE_MAX_CHARS), " ");
    }

    #[test]
    fn select_follows_page_defaults() {
        assert_eq!(selected_keywords(None, DEFAULT_BG_IMAGE), "nature");
        assert_eq!(selected_keywords(Some(""), DEFAULT_BG_IMAGE), "");
        assert_eq!(selected_keywords(Some("ocean"), DEFAULT_BG_IMAGE), "ocean");
        assert_eq!(selected_keywords(None, DEFAULT_MAIN_IMAGE), "");
    }

    fn render_form(config: PageConfig) -> String {
        let noop = || Callback::from(|_: String| ());
        let props = FormCardProps {
            config,
            on_change_title: noop(),
            on_change_subtitle: noop(),
            on_change_description: noop(),
            on_change_main_image: noop(),
            on_change_bg_image: noop(),
            on_copy_link: Callback::from(|_: ()| ()),
            on_reset: Callback::from(|_: ()| ()),
            share_status: String::new(),
        };
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("runtime");
        tokio::task::LocalSet::new()
            .block_on(&rt, yew::LocalServerRenderer::<FormCard>::with_props(props).render())
    }

    #[test]
    fn renders_length_limits() {
        let html = render_form(PageConfig::default());
        assert!(html.contains(r#"maxlength="22""#));
        assert!(html.contains(r#"size="22""#));
        assert!(html.contains(r#"maxlength="35""#));
        assert!(html.contains(r#"size="35""#));
    }

    #[test]
    fn renders_labels_bound_to_controls() {
        let html = render_form(PageConfig::default());
        for id in [
            "title-input",
            "subtitle-input",
            "description-input",
            "main-image-input",
            "bg-image-input",
        ] {
            assert!(html.contains(&format!(r#"for="{id}""#)), "label for {id}");
            assert!(html.contains(&format!(r#"id="{id}""#)), "control {id}");
        }
    }

    #[test]
    fn absent_background_selects_default_keyword() {
        let html = render_form(PageConfig::default());
        // Only the main image select has "(random)" selected.
        assert_eq!(html.matches(r#"<option value="" selected"#).count(), 1);
        assert_eq!(html.matches(r#"<option value="nature" selected"#).count(), 1);
    }

    #[test]
    fn explicit_keywords_are_selected() {
        let html = render_form(PageConfig {
            main_image: Some("city".into()),
            bg_image: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(html.matches(r#"<option value="" selected"#).count(), 1);
        assert_eq!(html.matches(r#"<option value="city" selected"#).count(), 1);
        assert!(!html.contains(r#"<option value="nature" selected"#));
    }

    #[test]
    fn random_option_comes_first() {
        let opts = keyword_options(&IMAGE_SEARCH_OPTIONS);
        assert_eq!(opts.len(), IMAGE_SEARCH_OPTIONS.len() + 1);
        assert_eq!(opts[0], ("", "(random)"));
        assert_eq!(opts[1], ("nature", "nature"));
    }
}
