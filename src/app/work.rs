use leptos::{either::Either, prelude::*};

use super::{
    hooks::use_work_experience_data,
    ui::{ExternalLink, LoadError, Loading},
};
use crate::content::WorkExperienceItem;

#[component]
pub fn WorkExperience() -> impl IntoView {
    let work = use_work_experience_data();

    view! {
        <section id="work" class="py-24 bg-muted/30">
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4 uppercase tracking-tight">
                        "Work Experience"
                    </h2>
                    <p class="text-lg text-muted-foreground mb-12 font-mono">
                        "Professional roles & achievements"
                    </p>
                    <Suspense fallback=Loading>
                        {move || Suspend::new(async move {
                            match work.await {
                                Ok(work) => Either::Left(view! {
                                    <div class="space-y-12">
                                        {work
                                            .experiences
                                            .into_iter()
                                            .map(|item| view! { <ExperienceCard item /> })
                                            .collect_view()}
                                    </div>
                                }),
                                Err(_) => Either::Right(view! { <LoadError what="work experience" /> }),
                            }
                        })}
                    </Suspense>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExperienceCard(item: WorkExperienceItem) -> impl IntoView {
    let achievements = item.achievements().to_vec();
    let alt = format!("{} project", item.company);

    view! {
        <article class="border-brutal border-foreground bg-card overflow-hidden group">
            <div class="grid md:grid-cols-[300px_1fr]">
                <div class="relative h-64 md:h-full overflow-hidden">
                    <img
                        src=item.image
                        alt=alt
                        loading="lazy"
                        class="w-full h-full object-cover transition-transform duration-300 group-hover:scale-105"
                    />
                </div>
                <div class="p-8">
                    <div class="flex items-start justify-between gap-4 mb-4">
                        <div>
                            <h3 class="text-2xl md:text-3xl font-bold mb-2 uppercase tracking-tight">
                                {item.role}
                            </h3>
                            <div class="flex items-center gap-2 text-muted-foreground font-mono mb-2">
                                <i class="icon-briefcase" aria-hidden="true" />
                                <span class="font-semibold">{item.company}</span>
                                <span>"•"</span>
                                <span>{item.period}</span>
                            </div>
                        </div>
                        {item
                            .link
                            .map(|link| {
                                view! {
                                    <ExternalLink href=link class="btn-brutal-sm shrink-0">
                                        <i class="icon-external-link mr-2" aria-hidden="true" />
                                        "Visit"
                                    </ExternalLink>
                                }
                            })}
                    </div>
                    <p class="text-muted-foreground mb-6 leading-relaxed">{item.description}</p>
                    {(!achievements.is_empty())
                        .then(|| {
                            view! {
                                <div class="mb-6">
                                    <h4 class="font-semibold mb-3 uppercase tracking-wide text-sm">
                                        "Key Achievements"
                                    </h4>
                                    <ul class="space-y-2">
                                        {achievements
                                            .into_iter()
                                            .map(|achievement| {
                                                view! {
                                                    <li class="flex items-start gap-2">
                                                        <i
                                                            class="icon-circle-check text-primary shrink-0 mt-0.5"
                                                            aria-hidden="true"
                                                        />
                                                        <span class="text-sm text-muted-foreground">
                                                            {achievement}
                                                        </span>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })}
                    <div class="flex flex-wrap gap-2">
                        {item
                            .tech
                            .into_iter()
                            .map(|tech| {
                                view! {
                                    <span class="px-3 py-1 border-brutal border-foreground bg-background font-mono text-xs uppercase tracking-wide">
                                        {tech}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </article>
    }
}
