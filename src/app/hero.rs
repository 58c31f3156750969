use leptos::{either::Either, prelude::*};

use super::{
    hooks::use_hero_data,
    navigation::scroll_to_section,
    ui::{ExternalLink, LoadError, Loading},
};
use crate::content::{HeroData, SocialLink};

#[component]
pub fn Hero() -> impl IntoView {
    let hero = use_hero_data();

    view! {
        <section
            id="home"
            class="min-h-screen flex items-center justify-center relative overflow-hidden hero-backdrop"
        >
            <div class="absolute inset-0 bg-background/90" />
            <div class="container mx-auto px-6 relative z-10">
                <Suspense fallback=Loading>
                    {move || Suspend::new(async move {
                        match hero.await {
                            Ok(hero) => Either::Left(view! { <HeroContent hero /> }),
                            Err(_) => Either::Right(view! { <LoadError what="profile" /> }),
                        }
                    })}
                </Suspense>
            </div>
        </section>
    }
}

#[component]
fn HeroContent(hero: HeroData) -> impl IntoView {
    let links = hero.social.links();
    view! {
        <div class="max-w-3xl mx-auto text-center">
            <h1 class="text-5xl md:text-7xl font-bold mb-6">
                "Hi, I'm " <span class="text-primary">{hero.name}</span>
            </h1>
            <p class="text-xl md:text-2xl text-muted-foreground mb-8">
                {format!("{} {}", hero.title, hero.skills)}
            </p>
            <p class="text-lg text-muted-foreground mb-12 max-w-2xl mx-auto">{hero.description}</p>
            <div class="flex flex-wrap items-center justify-center gap-4 mb-12">
                <button
                    type="button"
                    class="btn-brutal bg-primary text-primary-foreground"
                    on:click=move |_| scroll_to_section("projects")
                >
                    "View My Work"
                </button>
                <button
                    type="button"
                    class="btn-brutal bg-background"
                    on:click=move |_| scroll_to_section("contact")
                >
                    "Get In Touch"
                </button>
            </div>
            <div class="flex items-center justify-center gap-6">
                {links.into_iter().map(social_icon).collect_view()}
            </div>
        </div>
    }
}

/// Icon-only link to one of the social profiles.
pub fn social_icon(link: SocialLink) -> impl IntoView {
    let class = "text-foreground/60 hover:text-primary transition-colors";
    let label = link.kind.label();
    let icon = view! { <i class=format!("{} text-2xl", link.kind.icon_class()) aria-hidden="true" /> };
    if link.is_external() {
        Either::Left(view! {
            <ExternalLink href=link.href class=class label=label>
                {icon}
            </ExternalLink>
        })
    } else {
        Either::Right(view! {
            <a href=link.href class=class aria-label=label>
                {icon}
            </a>
        })
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::Social;

    #[test]
    fn test_social_icons_isolate_only_web_links() {
        let social = Social {
            github: "https://github.com/chiptus".to_string(),
            linkedin: "http://linkedin.com/in/chiptus".to_string(),
            email: "chiptus@gmail.com".to_string(),
        };
        let mut links = social.links().into_iter();

        let email = links.next().map(social_icon).unwrap().to_html();
        assert!(email.contains(r#"href="mailto:chiptus@gmail.com""#));
        assert!(email.contains(r#"aria-label="Email""#));
        assert!(!email.contains("target="));

        for link in links {
            let html = social_icon(link).to_html();
            assert!(html.contains(r#"target="_blank""#));
            assert!(html.contains(r#"rel="noopener noreferrer""#));
        }
    }
}
