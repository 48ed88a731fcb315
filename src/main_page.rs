use yew::prelude::*;

use crate::images::background_css;
use crate::page::{PageConfig, PageContent};

// Keep this link pointing at the upstream project, even in forks.
pub const REPO_URL: &str = "https://github.com/MichaelCurrin/instant-website";
pub const PROJECT_TITLE: &str = "Instant Website";

// Every image comes from keyword search, so a refresh always shuffles them.
const RANDOM_IMAGES: bool = true;

pub fn refresh_message(random_images: bool) -> &'static str {
    if random_images {
        " - Refresh this page to pick random images."
    } else {
        ""
    }
}

/// Inline style for the full-page background element.
pub fn background_style(content: &PageContent) -> String {
    format!(
        "background-image: {};",
        background_css(content.background.as_ref())
    )
}

fn main_card(content: &PageContent) -> Html {
    let img = &content.main_image;

    html! {
      <div class="card is-wide">
        <div class="card-content">
          <div class="media">
            <div class="media-left">
              <figure class={img.figure_class()}>
                <img class="is-rounded" src={img.url.clone()} alt="Small profile" />
              </figure>
            </div>

            <div class="media-content">
              <p class="title is-4">{ content.title.clone() }</p>
              <p class="subtitle is-6">{ content.subtitle.clone() }</p>
            </div>
          </div>

          <p class="content">{ content.description.clone() }</p>

          <footer class="card-footer">
            <p class="card-footer-item">
              <span>
                { "Made with " }<a href={REPO_URL}>{ PROJECT_TITLE }</a>
                { refresh_message(RANDOM_IMAGES) }
              </span>
            </p>
          </footer>
        </div>
      </div>
    }
}

fn modal(card_body: Html, footer: Html) -> Html {
    html! {
      <div class="modal is-active">
        <div class="modal-card">
          <header class="modal-card-head" />
          <section class="modal-card-body">{ card_body }</section>
          <footer class="modal-card-foot">{ footer }</footer>
        </div>
      </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MainPageProps {
    pub config: PageConfig,
    /// Rendered in the modal footer (the customize form).
    #[prop_or_default]
    pub children: Html,
}

#[function_component(MainPage)]
pub fn main_page(props: &MainPageProps) -> Html {
    let content = props.config.resolve();

    html! {
      <div>
        { modal(main_card(&content), props.children.clone()) }
        <section
          id="bg"
          class="hero is-fullheight"
          style={background_style(&content)}
          role="img"
          aria-label="Random background"
        />
      </div>
    }
}
