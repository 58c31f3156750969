use leptos::prelude::*;

use crate::content::Icon;

pub const EXTERNAL_REL: &str = "noopener noreferrer";

/// Link that opens in a new tab without handing the opener to the target.
#[component]
pub fn ExternalLink(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href target="_blank" rel=EXTERNAL_REL class=class aria-label=label>
            {children()}
        </a>
    }
}

#[component]
pub fn TechTags(tech: Vec<String>) -> impl IntoView {
    view! {
        <ul class="flex flex-wrap gap-2" aria-label="Technologies">
            {tech
                .into_iter()
                .map(|t| {
                    view! {
                        <li class="px-3 py-1 text-sm font-mono border-2 border-foreground bg-secondary">
                            {t}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
pub fn IconGlyph(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <i class=format!("{} {class}", icon.class()) aria-hidden="true" /> }
}

#[component]
pub fn Loading() -> impl IntoView {
    view! { <p class="text-center font-mono text-muted-foreground py-8">"Loading..."</p> }
}

#[component]
pub fn LoadError(what: &'static str) -> impl IntoView {
    view! {
        <p class="text-center font-mono text-muted-foreground py-8" role="alert">
            {format!("Unable to load {what}.")}
        </p>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_external_link_is_isolated() {
        let html = view! { <ExternalLink href="https://example.com">"site"</ExternalLink> }
            .to_html();
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        assert!(html.contains("site"));
    }

    #[test]
    fn test_load_error_message() {
        let html = view! { <LoadError what="projects" /> }.to_html();
        assert!(html.contains("Unable to load projects."));
    }
}
