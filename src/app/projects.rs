use leptos::{either::Either, prelude::*};

use super::{
    hooks::use_projects_data,
    ui::{ExternalLink, LoadError, Loading, TechTags},
};
use crate::content::{CaseStudy, Project};

const ACTION_CLASS: &str =
    "btn-brutal-sm flex items-center gap-2 uppercase tracking-wide text-xs";

#[component]
pub fn Projects() -> impl IntoView {
    let projects = use_projects_data();

    view! {
        <section id="projects" class="py-24">
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    <h2 class="text-4xl md:text-5xl font-bold mb-12 text-center">
                        "Featured Projects"
                    </h2>
                    <Suspense fallback=Loading>
                        {move || Suspend::new(async move {
                            match projects.await {
                                Ok(data) => Either::Left(view! {
                                    <FeaturedProject project=data.featured_project />
                                    <div class="grid md:grid-cols-2 gap-8">
                                        {data
                                            .projects
                                            .into_iter()
                                            .map(|project| view! { <ProjectCard project /> })
                                            .collect_view()}
                                    </div>
                                }),
                                Err(_) => Either::Right(view! { <LoadError what="projects" /> }),
                            }
                        })}
                    </Suspense>
                </div>
            </div>
        </section>
    }
}

/// Highlighted project with its case study. Renders nothing without one.
#[component]
fn FeaturedProject(project: Project) -> impl IntoView {
    let Some(case_study) = project.case_study else {
        return None;
    };
    let alt = format!("{} screenshot", project.name);

    Some(view! {
        <article class="bg-background border-brutal border-foreground shadow-brutal p-8 mb-16">
            <div class="inline-block px-3 py-1 bg-primary text-primary-foreground font-mono text-xs uppercase tracking-wide mb-6">
                "Featured Case Study"
            </div>
            <div class="grid md:grid-cols-2 gap-8">
                <div>
                    <div class="aspect-video overflow-hidden border-brutal border-foreground mb-6">
                        <img src=project.image alt=alt class="w-full h-full object-cover" />
                    </div>
                    <h3 class="text-3xl font-bold mb-4 uppercase tracking-tight">{project.name}</h3>
                    <div class="mb-6">
                        <TechTags tech=project.tech />
                    </div>
                    {project
                        .link
                        .map(|link| {
                            view! {
                                <ExternalLink href=link class="btn-brutal flex items-center gap-2 uppercase tracking-wide w-fit">
                                    <i class="icon-external-link" aria-hidden="true" />
                                    "Visit Project"
                                </ExternalLink>
                            }
                        })}
                </div>
                <CaseStudyBody case_study />
            </div>
        </article>
    })
}

#[component]
fn CaseStudyBody(case_study: CaseStudy) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div>
                <h4 class="font-bold text-lg mb-2 uppercase tracking-tight">"Problem"</h4>
                <p class="text-muted-foreground">{case_study.problem}</p>
            </div>
            <div>
                <h4 class="font-bold text-lg mb-2 uppercase tracking-tight">"Solution"</h4>
                <p class="text-muted-foreground">{case_study.solution}</p>
            </div>
            <div>
                <h4 class="font-bold text-lg mb-3 uppercase tracking-tight">"Impact"</h4>
                <ul class="space-y-2">
                    {case_study
                        .impact
                        .into_iter()
                        .map(|point| {
                            view! {
                                <li class="flex items-start gap-2">
                                    <i class="icon-circle-check text-primary shrink-0 mt-0.5" aria-hidden="true" />
                                    <span class="text-muted-foreground">{point}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let alt = format!("{} screenshot", project.name);

    view! {
        <article class="project-card group bg-background border-brutal border-foreground shadow-brutal hover:shadow-brutal-hover transition-all overflow-hidden">
            <div class="aspect-video overflow-hidden border-b-2 border-foreground">
                <img
                    src=project.image
                    alt=alt
                    loading="lazy"
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-105"
                />
            </div>
            <div class="p-6">
                <h3 class="text-2xl font-bold mb-3 uppercase tracking-tight">{project.name}</h3>
                <p class="text-muted-foreground mb-4">{project.description}</p>
                <div class="mb-6">
                    <TechTags tech=project.tech />
                </div>
                {project
                    .case_study
                    .map(|case_study| {
                        view! {
                            <details class="mb-6">
                                <summary class="cursor-pointer font-mono uppercase text-sm flex items-center gap-2">
                                    <i class="icon-file-text" aria-hidden="true" />
                                    "View Case Study"
                                </summary>
                                <div class="pt-4">
                                    <CaseStudyBody case_study />
                                </div>
                            </details>
                        }
                    })}
                <div class="flex gap-3">
                    {project
                        .link
                        .map(|link| {
                            view! {
                                <ExternalLink href=link class=ACTION_CLASS>
                                    <i class="icon-external-link" aria-hidden="true" />
                                    "Visit"
                                </ExternalLink>
                            }
                        })}
                    {project
                        .github
                        .map(|github| {
                            view! {
                                <ExternalLink href=github class=ACTION_CLASS>
                                    <i class="icon-github" aria-hidden="true" />
                                    "Code"
                                </ExternalLink>
                            }
                        })}
                </div>
            </div>
        </article>
    }
}
