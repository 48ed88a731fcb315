use std::borrow::Cow;

use urlencoding::{decode, encode};
use wasm_bindgen::JsValue;
use web_sys::window;

use crate::page::PageConfig;

/* -----------------------------
   Query params <-> page fields
----------------------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Param {
    Title,
    Subtitle,
    Description,
    MainImage,
    BgImage,
}

impl Param {
    pub const ALL: [Param; 5] = [
        Param::Title,
        Param::Subtitle,
        Param::Description,
        Param::MainImage,
        Param::BgImage,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Param::Title => "title",
            Param::Subtitle => "subtitle",
            Param::Description => "description",
            Param::MainImage => "mainImage",
            Param::BgImage => "bgImage",
        }
    }

    pub fn from_name(name: &str) -> Option<Param> {
        Param::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Keyword params keep `key=` in the URL, since empty means "(random)" rather than "default".
    pub fn keeps_empty(self) -> bool {
        matches!(self, Param::MainImage | Param::BgImage)
    }

    fn slot(self, config: &mut PageConfig) -> &mut Option<String> {
        match self {
            Param::Title => &mut config.title,
            Param::Subtitle => &mut config.subtitle,
            Param::Description => &mut config.description,
            Param::MainImage => &mut config.main_image,
            Param::BgImage => &mut config.bg_image,
        }
    }
}

// Form-style: '+' is a space. Bad escapes are left as typed.
fn decode_component(s: &str) -> String {
    let spaced = s.replace('+', " ");
    decode(&spaced)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| spaced.clone())
}

fn segments(search: &str) -> impl Iterator<Item = &str> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|seg| !seg.is_empty())
}

fn segment_key(seg: &str) -> String {
    let raw = seg.split_once('=').map(|(k, _)| k).unwrap_or(seg);
    decode_component(raw)
}

fn segment_value(seg: &str) -> String {
    seg.split_once('=')
        .map(|(_, v)| decode_component(v))
        .unwrap_or_default()
}

/// Decode a `location.search` string. Unknown keys are ignored and the first occurrence wins.
pub fn decode_query(search: &str) -> PageConfig {
    let mut config = PageConfig::default();
    for seg in segments(search) {
        let Some(param) = Param::from_name(&segment_key(seg)) else {
            continue;
        };
        let slot = param.slot(&mut config);
        if slot.is_none() {
            *slot = Some(segment_value(seg));
        }
    }
    config
}

fn encode_pair(param: Param, value: Option<&str>) -> Option<String> {
    match value {
        Some(v) if !v.is_empty() || param.keeps_empty() => {
            Some(format!("{}={}", param.name(), encode(v)))
        }
        _ => None,
    }
}

/// Apply several changes at once. `None` removes the param; other pairs keep their order.
pub fn replace_many(search: &str, changes: &[(Param, Option<&str>)]) -> String {
    let mut out: Vec<String> = segments(search).map(str::to_string).collect();

    for &(param, value) in changes {
        let pair = encode_pair(param, value);
        let mut placed = false;
        let mut next = Vec::with_capacity(out.len() + 1);

        for seg in out {
            if segment_key(&seg) != param.name() {
                next.push(seg);
                continue;
            }
            // First match is replaced in place, later duplicates are dropped.
            if !placed {
                placed = true;
                if let Some(p) = &pair {
                    next.push(p.clone());
                }
            }
        }
        if !placed {
            if let Some(p) = pair {
                next.push(p);
            }
        }
        out = next;
    }

    if out.is_empty() {
        String::new()
    } else {
        format!("?{}", out.join("&"))
    }
}

/// Re-encode a single field, leaving every other param untouched.
pub fn replace_in(search: &str, param: Param, value: &str) -> String {
    replace_many(search, &[(param, Some(value))])
}

/// Drop all recognized params (back to defaults).
pub fn clear_all(search: &str) -> String {
    let changes: Vec<(Param, Option<&str>)> = Param::ALL.iter().map(|&p| (p, None)).collect();
    replace_many(search, &changes)
}

/* -----------------------------
   Browser location / history
----------------------------- */

pub fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn current_href() -> Result<String, String> {
    let w = window().ok_or("No window".to_string())?;
    w.location()
        .href()
        .map_err(|_| "Could not read page URL".to_string())
}

/// Swap the query string in place (no new history entry), keeping path and hash.
pub fn replace_search(search: &str) -> Result<(), String> {
    let w = window().ok_or("No window".to_string())?;
    let loc = w.location();
    let path = loc
        .pathname()
        .map_err(|_| "Could not read location path".to_string())?;
    let hash = loc.hash().unwrap_or_default();
    let url = format!("{path}{search}{hash}");

    w.history()
        .map_err(|_| "History API unavailable".to_string())?
        .replace_state_with_url(&JsValue::NULL, "", Some(&url))
        .map_err(|_| format!("history.replaceState rejected {url}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for p in Param::ALL {
            assert_eq!(Param::from_name(p.name()), Some(p));
        }
        assert_eq!(Param::from_name("mainimage"), None);
    }

    #[test]
    fn empty_query_is_all_absent() {
        assert_eq!(decode_query(""), PageConfig::default());
        assert_eq!(decode_query("?"), PageConfig::default());
    }

    #[test]
    fn decodes_known_params() {
        let cfg = decode_query("?title=Hello%20there&subtitle=a+b&mainImage=cat%2Cdog&bgImage=&utm=x");
        assert_eq!(cfg.title.as_deref(), Some("Hello there"));
        assert_eq!(cfg.subtitle.as_deref(), Some("a b"));
        assert_eq!(cfg.description, None);
        assert_eq!(cfg.main_image.as_deref(), Some("cat,dog"));
        assert_eq!(cfg.bg_image.as_deref(), Some(""));
    }

    #[test]
    fn first_occurrence_wins() {
        let cfg = decode_query("?title=one&title=two");
        assert_eq!(cfg.title.as_deref(), Some("one"));
    }

    #[test]
    fn single_space_survives() {
        let cfg = decode_query("?title=%20");
        assert_eq!(cfg.title.as_deref(), Some(" "));
        assert_eq!(replace_in("", Param::Title, " "), "?title=%20");
    }

    #[test]
    fn malformed_escape_kept_raw() {
        let cfg = decode_query("?title=100%zz");
        assert_eq!(cfg.title.as_deref(), Some("100%zz"));
    }

    #[test]
    fn replace_touches_only_one_param() {
        let before = "?title=Old&utm_source=x&bgImage=ocean";
        let after = replace_in(before, Param::Title, "New title");
        assert_eq!(after, "?title=New%20title&utm_source=x&bgImage=ocean");

        let cfg = decode_query(&after);
        assert_eq!(cfg.title.as_deref(), Some("New title"));
        assert_eq!(cfg.bg_image.as_deref(), Some("ocean"));
    }

    #[test]
    fn replace_appends_new_param() {
        assert_eq!(
            replace_in("?title=A", Param::Description, "x&y"),
            "?title=A&description=x%26y"
        );
    }

    #[test]
    fn empty_text_removes_param() {
        assert_eq!(replace_in("?title=A&subtitle=B", Param::Title, ""), "?subtitle=B");
        assert_eq!(replace_in("?title=A", Param::Title, ""), "");
    }

    #[test]
    fn empty_keyword_is_kept() {
        assert_eq!(replace_in("?bgImage=nature", Param::BgImage, ""), "?bgImage=");
        assert_eq!(decode_query("?bgImage=").bg_image.as_deref(), Some(""));
    }

    #[test]
    fn duplicates_collapse_on_replace() {
        assert_eq!(
            replace_in("?title=a&x=1&title=b", Param::Title, "c"),
            "?title=c&x=1"
        );
    }

    #[test]
    fn replace_many_applies_in_one_pass() {
        let out = replace_many(
            "?title=A&keep=1",
            &[(Param::Subtitle, Some("S")), (Param::Title, None)],
        );
        assert_eq!(out, "?keep=1&subtitle=S");
    }

    #[test]
    fn clear_all_keeps_foreign_params() {
        let out = clear_all("?title=A&ref=abc&bgImage=&mainImage=cat");
        assert_eq!(out, "?ref=abc");
    }
}
