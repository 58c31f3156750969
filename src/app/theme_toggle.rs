use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
use crate::theme::THEME_STORAGE_KEY;
use crate::theme::Theme;

#[derive(Debug, Clone, Copy)]
struct ThemeContext {
    theme: Signal<Theme>,
    set_theme: WriteSignal<Theme>,
}

/// Shared theme state, persisted to local storage in the browser.
pub fn provide_theme() {
    #[cfg(feature = "hydrate")]
    let (theme, set_theme, _) = use_local_storage::<Theme, JsonSerdeWasmCodec>(THEME_STORAGE_KEY);
    #[cfg(not(feature = "hydrate"))]
    let (theme, set_theme) = {
        let (theme, set_theme) = signal(Theme::default());
        (Signal::from(theme), set_theme)
    };

    Effect::new(move |_| apply_theme(theme.get()));
    provide_context(ThemeContext { theme, set_theme });
}

fn apply_theme(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };
    let classes = root.class_list();
    for other in Theme::ALL {
        let _ = classes.remove_1(other.as_str());
    }
    let _ = classes.add_1(theme.as_str());
    log::debug!("theme set to {theme}");
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ThemeContext { theme, set_theme } = expect_context();

    // the server always renders the light icon; switch once hydrated
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));
    let icon = move || {
        let shown = if mounted.get() {
            theme.get()
        } else {
            Theme::default()
        };
        format!("{} text-xl", shown.toggle_icon())
    };

    view! {
        <button
            type="button"
            class="min-w-11 min-h-11 inline-flex items-center justify-center rounded-lg border-2 border-foreground bg-card shadow-brutal-sm hover:translate-x-0.5 hover:translate-y-0.5 hover:shadow-none transition-all"
            aria-label="Toggle theme"
            on:click=move |_| set_theme.set(theme.get_untracked().toggled())
        >
            <i class=icon aria-hidden="true" />
        </button>
    }
}
