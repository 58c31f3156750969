use leptos::prelude::*;

use super::navigation::scroll_to_section;

/// Placeholder until posts exist. "Notify Me" leads to the contact section.
#[component]
pub fn BlogSection() -> impl IntoView {
    view! {
        <section id="blog" class="py-24 bg-primary/5">
            <div class="container mx-auto px-6">
                <div class="max-w-4xl mx-auto">
                    <div class="border-brutal border-foreground bg-background p-12 shadow-brutal text-center">
                        <div class="w-16 h-16 border-brutal border-foreground bg-background flex items-center justify-center mx-auto mb-6 shadow-brutal">
                            <i class="icon-pen-tool text-3xl" aria-hidden="true" />
                        </div>
                        <h2 class="text-4xl font-bold mb-4 uppercase tracking-tight">"Blog"</h2>
                        <p class="text-xl text-muted-foreground mb-8 font-mono">"Coming Soon"</p>
                        <p class="text-muted-foreground mb-8 max-w-2xl mx-auto">
                            "I'm planning to write about AI development, React patterns, and lessons learned from 10+ years of building web applications. Subscribe to get notified when I publish."
                        </p>
                        <button
                            type="button"
                            class="btn-brutal uppercase tracking-wide"
                            on:click=move |_| scroll_to_section("contact")
                        >
                            "Notify Me"
                            <i class="icon-arrow-right ml-2" aria-hidden="true" />
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
