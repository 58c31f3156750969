use leptos::{either::Either, prelude::*};

use super::{
    hooks::use_milestones_data,
    ui::{IconGlyph, LoadError, Loading},
};
use crate::content::Milestone;

#[component]
pub fn JourneyTimeline() -> impl IntoView {
    let milestones = use_milestones_data();

    view! {
        <section id="about" class="py-24 bg-background">
            <div class="container mx-auto px-6">
                <div class="max-w-4xl mx-auto">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4 uppercase tracking-tight">
                        "Journey"
                    </h2>
                    <p class="text-lg text-muted-foreground mb-16 font-mono">
                        "10+ years of building things that matter"
                    </p>
                    <Suspense fallback=Loading>
                        {move || Suspend::new(async move {
                            match milestones.await {
                                Ok(milestones) => {
                                    let last = milestones.len().saturating_sub(1);
                                    Either::Left(view! {
                                        <ol class="space-y-12">
                                            {milestones
                                                .into_iter()
                                                .enumerate()
                                                .map(|(i, milestone)| {
                                                    view! { <MilestoneRow milestone connected={i < last} /> }
                                                })
                                                .collect_view()}
                                        </ol>
                                    })
                                }
                                Err(_) => Either::Right(view! { <LoadError what="milestones" /> }),
                            }
                        })}
                    </Suspense>
                </div>
            </div>
        </section>
    }
}

#[component]
fn MilestoneRow(milestone: Milestone, connected: bool) -> impl IntoView {
    let icon = milestone.icon();
    view! {
        <li class="flex gap-6 group">
            <div class="flex flex-col items-center">
                <div class="w-16 h-16 border-brutal border-foreground bg-background flex items-center justify-center shadow-brutal group-hover:shadow-brutal-hover transition-all">
                    <IconGlyph icon class="text-3xl" />
                </div>
                {connected.then(|| view! { <div class="w-0.5 h-full bg-border mt-4" /> })}
            </div>
            <div class="flex-1 pb-12">
                <div class="font-mono text-sm text-muted-foreground mb-2">{milestone.year}</div>
                <h3 class="text-2xl font-bold mb-2 uppercase tracking-tight">{milestone.title}</h3>
                <p class="text-muted-foreground">{milestone.description}</p>
            </div>
        </li>
    }
}
