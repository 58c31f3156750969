use chrono::{DateTime, Datelike};
use leptos::prelude::*;

use super::{hero::social_icon, hooks::use_hero_data};

/// Copyright year, taken from the build stamp so server and browser agree.
pub fn copyright_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|built| built.year())
}

#[component]
pub fn Footer() -> impl IntoView {
    let hero = use_hero_data();
    let year = copyright_year().map(|year| format!("{year} ")).unwrap_or_default();

    view! {
        <footer class="py-12 border-t-2 border-foreground">
            <div class="container mx-auto px-6">
                <Suspense>
                    {move || {
                        let year = year.clone();
                        Suspend::new(async move {
                            let Ok(hero) = hero.await else {
                                return None;
                            };
                            Some(view! {
                                <div class="flex flex-col md:flex-row items-center justify-between gap-6">
                                    <p class="text-muted-foreground">
                                        {format!("© {year}{}. All rights reserved.", hero.name)}
                                    </p>
                                    <div class="flex items-center gap-6">
                                        {hero.social.links().into_iter().map(social_icon).collect_view()}
                                    </div>
                                </div>
                            })
                        })
                    }}
                </Suspense>
            </div>
        </footer>
    }
}
