use leptos::{ev, prelude::*};

use super::theme_toggle::ThemeToggle;

/// Pixels scrolled before the bar turns opaque.
pub const SCROLL_THRESHOLD: f64 = 50.0;

const SECTIONS: [(&str, &str); 5] = [
    ("about", "Journey"),
    ("now", "Now"),
    ("projects", "Projects"),
    ("blog", "Blog"),
    ("contact", "Contact"),
];

/// Scroll to the section with `id` and record it in the URL fragment.
pub fn scroll_to_section(id: &str) {
    let Some(el) = document().get_element_by_id(id) else {
        log::warn!("no section with id {id}");
        return;
    };
    el.scroll_into_view();
    if let Err(err) = window().location().set_hash(id) {
        log::warn!("could not set fragment to {id}: {err:?}");
    }
}

fn nav_class(scrolled: bool) -> &'static str {
    if scrolled {
        "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-background/90 backdrop-blur-lg border-b-2 border-foreground"
    } else {
        "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent"
    }
}

#[component]
pub fn Navigation() -> impl IntoView {
    let (is_scrolled, set_is_scrolled) = signal(false);

    Effect::new(move |_| {
        let handle = window_event_listener(ev::scroll, move |_| {
            let y = window().scroll_y().unwrap_or_default();
            set_is_scrolled.set(y > SCROLL_THRESHOLD);
        });
        on_cleanup(move || handle.remove());
    });

    view! {
        <nav class=move || nav_class(is_scrolled.get()) aria-label="Main">
            <div class="container mx-auto px-6 py-4">
                <div class="flex items-center justify-between">
                    <a
                        href="#home"
                        class="text-2xl font-bold font-mono hover:text-primary transition-colors"
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to_section("home");
                        }
                    >
                        "CL"
                    </a>
                    <div class="hidden md:flex items-center gap-8">
                        {SECTIONS
                            .into_iter()
                            .map(|(id, label)| {
                                view! {
                                    <a
                                        href=format!("#{id}")
                                        class="font-mono text-sm uppercase tracking-wide hover:text-primary transition-colors"
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            scroll_to_section(id);
                                        }
                                    >
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <ThemeToggle />
                    </div>
                    <div class="md:hidden">
                        <ThemeToggle />
                    </div>
                </div>
            </div>
        </nav>
    }
}
