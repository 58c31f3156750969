mod contact_form;
mod gallery;

use std::time::Duration;

use leptos::{either::Either, ev, html, prelude::*};
use leptos_meta::Title;

use super::{hooks::use_site_data, ui::Loading};
use crate::spotlight::{
    inline_style, BeamGeometry, Choreography, ContainerBox, Cue, ElementBox, Page, Sequencer,
    SpotlightGeometry, Stage, Step,
};
use contact_form::ContactForm;
use gallery::Gallery;

fn schedule(after: Duration, fire: Box<dyn FnOnce()>) {
    set_timeout(fire, after);
}

fn spotlight_class(stage: &Stage) -> String {
    let mut class = String::from("spotlight");
    if stage.spotlight_animating {
        class.push_str(" animation");
    }
    if stage.spotlight_hidden {
        class.push_str(" hide");
    }
    class
}

/// The older single-screen layout: a spotlight sweeps onto the menu and
/// panels slide in and out as the visitor picks a page.
#[component]
pub fn ClassicPage() -> impl IntoView {
    let choreography = Choreography::default();
    let sequencer = StoredValue::new(Sequencer::default());
    let stage = RwSignal::new(Stage::default());
    let page = RwSignal::new(Page::DEFAULT);
    let spotlight_style = RwSignal::new(String::new());
    let container_ref = NodeRef::<html::Div>::new();
    let buttons: [NodeRef<html::Li>; 3] = [NodeRef::new(), NodeRef::new(), NodeRef::new()];

    // Missing elements leave the previous geometry in place.
    let aim = move |target: Page| {
        let Some(button) = buttons[target.index()].get_untracked() else {
            return;
        };
        let button = ElementBox {
            offset_top: f64::from(button.offset_top()),
            offset_left: f64::from(button.offset_left()),
            client_width: f64::from(button.client_width()),
            client_height: f64::from(button.client_height()),
        };
        let container = container_ref
            .get_untracked()
            .map(|c| ContainerBox {
                width: f64::from(c.client_width()),
                height: f64::from(c.client_height()),
            })
            .unwrap_or_default();
        let mut vars = SpotlightGeometry::aimed_at(&button).css_vars();
        vars.extend(BeamGeometry::aimed_at(&button, &container).css_vars());
        spotlight_style.set(inline_style(&vars));
    };

    let apply = move |step: &Step| {
        if let Cue::Aim(target) = step.cue {
            aim(target);
        }
        stage.update(|stage| stage.apply(step));
        log::debug!("classic layout: {:?} at {:?}", step.cue, step.at);
    };

    let go_to = move |target: Page| {
        if page.get_untracked() == target && stage.with_untracked(|s| s.visible_pages() == [target]) {
            return;
        }
        page.set(target);
        if let Err(err) = window().location().set_hash(target.as_str()) {
            log::warn!("could not set fragment to {target}: {err:?}");
        }
        sequencer.with_value(|s| {
            s.run(choreography.transition(target), schedule, apply);
        });
    };

    Effect::new(move |_| {
        let hash = window().location().hash().unwrap_or_default();
        let start = Page::from_fragment(&hash);
        page.set(start);
        sequencer.with_value(|s| {
            s.run(choreography.opening(start), schedule, apply);
        });

        let resize = window_event_listener(ev::resize, move |_| aim(page.get_untracked()));
        let hashchange = window_event_listener(ev::hashchange, move |_| aim(page.get_untracked()));
        let token = sequencer.get_value();
        on_cleanup(move || {
            resize.remove();
            hashchange.remove();
            token.cancel();
        });
    });

    view! {
        <Title text="Classic" />
        <div
            node_ref=container_ref
            class="classic-layout relative min-h-screen overflow-hidden"
            data-phase=move || stage.with(|s| s.phase.as_str())
        >
            <div
                class=move || stage.with(spotlight_class)
                style=move || spotlight_style.get()
                aria-hidden="true"
            />
            <nav class="menu relative z-10" aria-label="Classic">
                <ul class="flex gap-6 justify-center pt-8">
                    {Page::ALL
                        .into_iter()
                        .map(|target| {
                            view! {
                                <li node_ref=buttons[target.index()] class=format!("{target}-button menu-item")>
                                    <button
                                        type="button"
                                        class="px-4 py-2 font-mono uppercase tracking-wide"
                                        aria-current=move || (page.get() == target).then_some("page")
                                        on:click=move |_| go_to(target)
                                    >
                                        {target.title()}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
            <div class=move || {
                if stage.with(|s| s.content_hidden) { "content hide" } else { "content" }
            }>
                <StagePanel page=Page::About stage>
                    <AboutPanel />
                </StagePanel>
                <StagePanel page=Page::Gallery stage>
                    <Gallery />
                </StagePanel>
                <StagePanel page=Page::Contact stage>
                    <ContactForm />
                </StagePanel>
            </div>
        </div>
    }
}

#[component]
fn StagePanel(page: Page, stage: RwSignal<Stage>, children: Children) -> impl IntoView {
    let panel = move || stage.with(|s| s.panel(page));
    view! {
        <section
            id=format!("{page}-page")
            class=move || {
                if panel().outside {
                    format!("{page}-page page-panel outside")
                } else {
                    format!("{page}-page page-panel")
                }
            }
            hidden=move || panel().hidden
        >
            <h2 class="text-3xl font-bold uppercase tracking-tight mb-6">{page.title()}</h2>
            {children()}
        </section>
    }
}

#[component]
fn AboutPanel() -> impl IntoView {
    let site = use_site_data();
    view! {
        <Suspense fallback=Loading>
            {move || Suspend::new(async move {
                match site.await {
                    Ok(site) => Either::Left(view! {
                        <p class="text-lg mb-4">{format!("{}, {}", site.hero.name, site.hero.title)}</p>
                        <p class="text-muted-foreground mb-6">{site.hero.description}</p>
                        <ul class="space-y-2">
                            {site
                                .interests
                                .into_iter()
                                .map(|interest| {
                                    view! {
                                        <li>
                                            <strong>{interest.title}</strong>
                                            ": "
                                            {interest.description}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }),
                    Err(_) => Either::Right(view! { <p>"Unable to load profile."</p> }),
                }
            })}
        </Suspense>
    }
}
