use leptos::{either::Either, prelude::*};

use super::{
    hooks::use_now_data,
    ui::{LoadError, Loading},
};
use crate::content::NowData;

#[component]
pub fn NowSection() -> impl IntoView {
    let now = use_now_data();

    view! {
        <section id="now" class="py-24 bg-primary/5">
            <div class="container mx-auto px-6">
                <div class="max-w-4xl mx-auto">
                    <Suspense fallback=Loading>
                        {move || Suspend::new(async move {
                            match now.await {
                                Ok(now) => Either::Left(view! { <NowCard now /> }),
                                Err(_) => Either::Right(view! { <LoadError what="recent updates" /> }),
                            }
                        })}
                    </Suspense>
                </div>
            </div>
        </section>
    }
}

#[component]
fn NowCard(now: NowData) -> impl IntoView {
    view! {
        <div class="border-brutal border-foreground bg-background p-8 shadow-brutal">
            <div class="flex items-start justify-between mb-6">
                <h2 class="text-4xl font-bold uppercase tracking-tight flex items-center gap-3">
                    <i class="icon-sparkles" aria-hidden="true" />
                    "Now"
                </h2>
                <div class="font-mono text-sm text-muted-foreground flex items-center gap-2">
                    <i class="icon-calendar" aria-hidden="true" />
                    {now.last_updated}
                </div>
            </div>
            <div class="space-y-6">
                <div>
                    <h3 class="font-bold text-xl mb-2 uppercase tracking-tight">"Currently Working On"</h3>
                    <p class="text-muted-foreground">{now.current_work}</p>
                </div>
                <div>
                    <h3 class="font-bold text-xl mb-2 uppercase tracking-tight">"Learning"</h3>
                    <div class="flex flex-wrap gap-2">
                        {now
                            .learning
                            .into_iter()
                            .map(|topic| {
                                view! {
                                    <span class="px-3 py-1 border-brutal border-foreground bg-background font-mono text-sm">
                                        {topic}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div>
                    <h3 class="font-bold text-xl mb-2 uppercase tracking-tight flex items-center gap-2">
                        <i class="icon-map-pin" aria-hidden="true" />
                        "Status"
                    </h3>
                    <p class="text-muted-foreground">{now.status}</p>
                </div>
            </div>
        </div>
    }
}
