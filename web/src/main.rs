use dioxus::logger::tracing::{error, info, Level};
use dioxus::prelude::*;

use ui::components::AppHeader;
use ui::core::{config::DashboardConfig, DashboardContext};
use ui::i18n;
use ui::views::DashboardPage;

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Shared theme from ui/assets/theme/main.css, inlined so there is no separate asset route.

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }

    // Startup data is loaded exactly once; if any of it is missing the
    // dashboard does not launch.
    let config = DashboardConfig::resolve();
    let context = match DashboardContext::load(&config) {
        Ok(context) => context,
        Err(err) => {
            error!("dashboard failed to initialise: {err}");
            return;
        }
    };
    info!("starting dashboard");

    LaunchBuilder::new().with_context(context).launch(App);
}

#[component]
fn App() -> Element {
    i18n::init();

    // Global language code, seeded with the negotiated locale; AppHeader
    // updates it when the locale changes.
    let lang_code = use_signal(i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed on the language so a switch remounts the page with fresh strings.
        div {
            key: "{lang_code()}",
            class: "app",
            AppHeader {}
            main { class: "app__main",
                DashboardPage {}
            }
        }
    }
}
