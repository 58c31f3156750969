use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    beyond_code::BeyondCode, blog::BlogSection, contact::Contact, footer::Footer, hero::Hero,
    journey::JourneyTimeline, navigation::Navigation, now::NowSection, projects::Projects,
    work::WorkExperience,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Full-Stack Developer" />
        <div class="min-h-screen">
            <Navigation />
            <main>
                <Hero />
                <WorkExperience />
                <JourneyTimeline />
                <NowSection />
                <BeyondCode />
                <Projects />
                <BlogSection />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
