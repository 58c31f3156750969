use leptos::prelude::*;

use super::{
    hooks::use_interests_data,
    ui::{IconGlyph, Loading},
};

/// Personal interests. Renders nothing when the document fails to load.
#[component]
pub fn BeyondCode() -> impl IntoView {
    let interests = use_interests_data();

    view! {
        <Suspense fallback=|| {
            view! {
                <section class="py-24 bg-background">
                    <Loading />
                </section>
            }
        }>
            {move || Suspend::new(async move {
                let Ok(interests) = interests.await else {
                    return None;
                };
                Some(view! {
                    <section class="py-24 bg-background">
                        <div class="container mx-auto px-6">
                            <div class="max-w-4xl mx-auto">
                                <h2 class="text-4xl md:text-5xl font-bold mb-4 uppercase tracking-tight">
                                    "Beyond Code"
                                </h2>
                                <p class="text-lg text-muted-foreground mb-12 font-mono">
                                    "What makes me tick outside of development"
                                </p>
                                <div class="grid md:grid-cols-3 gap-6">
                                    {interests
                                        .into_iter()
                                        .map(|interest| {
                                            let icon = interest.icon();
                                            view! {
                                                <div class="border-brutal border-foreground bg-background p-6 shadow-brutal hover:shadow-brutal-hover transition-all">
                                                    <div class="w-12 h-12 border-brutal border-foreground bg-primary/10 flex items-center justify-center mb-4">
                                                        <IconGlyph icon class="text-2xl" />
                                                    </div>
                                                    <h3 class="font-bold text-xl mb-2 uppercase tracking-tight">
                                                        {interest.title}
                                                    </h3>
                                                    <p class="text-muted-foreground">{interest.description}</p>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                    </section>
                })
            })}
        </Suspense>
    }
}
