use crate::i18n;
use crate::t;
use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

/// Brand bar with the locale switcher.
///
/// The platform crate provides a `Signal<String>` language code through
/// context and keys its tree on it, so switching language here remounts the
/// page with fresh strings. Without that context the switch still applies to
/// later renders but nothing forces a refresh.
#[component]
pub fn AppHeader() -> Element {
    i18n::init();

    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let current_lang = lang_code_ctx
        .as_ref()
        .map(|code| code())
        .unwrap_or_else(i18n::current_language);

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                debug!(lang = %val, "language switched");
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => warn!(lang = %val, "language switch failed: {err}"),
        }
    };

    rsx! {
        header { id: "header", class: "app-header",
            div { class: "app-header__inner",
                div { class: "app-header__brand",
                    span { class: "app-header__brand-spark", aria_hidden: "true" }
                    span { class: "app-header__brand-mark", {t!("brand")} }
                    span { class: "app-header__brand-subtitle", {t!("tagline")} }
                }

                if show_switcher {
                    div { class: "app-header__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang}",
                            oninput: on_change,
                            for code in langs() {
                                option {
                                    key: "{code}",
                                    value: "{code}",
                                    selected: code == current_lang,
                                    "{code}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
