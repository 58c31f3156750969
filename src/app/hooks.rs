use leptos::{prelude::*, server_fn::codec::GetUrl};
use serde::{de::DeserializeOwned, Serialize};

use crate::content::{
    Content, Document, HeroData, Interest, Milestone, NowData, ProjectsData, Section, SiteData,
    SocialLink, WorkExperienceData, GLOBAL_CONTENT_CACHE,
};

pub type SectionResource<T> = Resource<Result<T, ServerFnError>>;

#[server(input = GetUrl)]
pub async fn get_content(document: Document) -> Result<Content, ServerFnError> {
    crate::content::load(document).map_err(|e| {
        tracing::error!(%document, "{e}");
        ServerFnError::new(e.to_string())
    })
}

#[server(input = GetUrl)]
pub async fn get_site_data() -> Result<SiteData, ServerFnError> {
    crate::content::load_site_data().map_err(|e| {
        tracing::error!("{e}");
        ServerFnError::new(e.to_string())
    })
}

async fn fetch_content(document: Document) -> Result<Content, ServerFnError> {
    let cache = &*GLOBAL_CONTENT_CACHE;
    let cached = cache.get(&document).map(|c| c.clone());
    if let Some(content) = cached {
        return Ok(content);
    }
    let content = get_content(document).await?;
    // the server loader fills its own cache; only the browser stores here
    #[cfg(feature = "hydrate")]
    cache.insert(document, content.clone());
    Ok(content)
}

fn use_section<T>() -> SectionResource<T>
where
    T: Section + Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    Resource::new(
        || T::DOCUMENT,
        |document| async move {
            T::from_content(fetch_content(document).await?)
                .ok_or_else(|| ServerFnError::new(format!("unexpected content in {document}")))
        },
    )
}

/// Every document in one request.
pub fn use_site_data() -> Resource<Result<SiteData, ServerFnError>> {
    Resource::new(|| (), |_| get_site_data())
}

pub fn use_hero_data() -> SectionResource<HeroData> {
    use_section()
}

pub fn use_projects_data() -> SectionResource<ProjectsData> {
    use_section()
}

pub fn use_work_experience_data() -> SectionResource<WorkExperienceData> {
    use_section()
}

pub fn use_milestones_data() -> SectionResource<Vec<Milestone>> {
    use_section()
}

pub fn use_interests_data() -> SectionResource<Vec<Interest>> {
    use_section()
}

pub fn use_now_data() -> SectionResource<NowData> {
    use_section()
}

/// Contact links from the hero document; empty while loading or on error.
pub fn use_social() -> Resource<Vec<SocialLink>> {
    let hero = use_hero_data();
    Resource::new(
        || (),
        move |_| async move {
            hero.await
                .map(|hero| hero.social.links())
                .unwrap_or_default()
        },
    )
}
