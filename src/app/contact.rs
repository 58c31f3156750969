use leptos::{either::Either, prelude::*};

use super::{hooks::use_social, ui::EXTERNAL_REL};
use crate::content::{SocialKind, SocialLink};

#[component]
pub fn Contact() -> impl IntoView {
    let social = use_social();

    view! {
        <section id="contact" class="py-24 bg-primary/5">
            <div class="container mx-auto px-6">
                <div class="max-w-3xl mx-auto">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4 uppercase tracking-tight">
                        "Let's Work Together"
                    </h2>
                    <p class="text-lg text-muted-foreground mb-12 font-mono">
                        "Open to opportunities in AI, education, or health sectors"
                    </p>
                    <Suspense>
                        {move || Suspend::new(async move {
                            let links = social.await;
                            let mailto = links
                                .iter()
                                .find(|link| link.kind == SocialKind::Email)
                                .map(|link| link.href.clone());
                            view! {
                                <div class="grid md:grid-cols-3 gap-6 mb-12">
                                    {links.into_iter().map(|link| view! { <ContactCard link /> }).collect_view()}
                                </div>
                                {mailto
                                    .map(|href| {
                                        view! {
                                            <a
                                                href=href
                                                class="btn-brutal inline-block text-center uppercase tracking-wide w-full md:w-auto"
                                            >
                                                "Send Me a Message"
                                            </a>
                                        }
                                    })}
                            }
                        })}
                    </Suspense>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactCard(link: SocialLink) -> impl IntoView {
    let class = "contact-card block bg-background border-brutal border-foreground p-6 shadow-brutal hover:shadow-brutal-hover transition-all group";
    let body = view! {
        <div class="w-12 h-12 border-brutal border-foreground bg-background flex items-center justify-center mb-4 mx-auto group-hover:bg-primary/10 transition-colors">
            <i class=format!("{} text-2xl", link.kind.icon_class()) aria-hidden="true" />
        </div>
        <h3 class="font-bold mb-2 uppercase tracking-tight">{link.kind.label()}</h3>
        <p class="text-sm text-muted-foreground font-mono">{link.value.clone()}</p>
    };
    if link.is_external() {
        Either::Left(view! {
            <a href=link.href target="_blank" rel=EXTERNAL_REL class=class>
                {body}
            </a>
        })
    } else {
        Either::Right(view! {
            <a href=link.href class=class>
                {body}
            </a>
        })
    }
}
