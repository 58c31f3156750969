mod beyond_code;
mod blog;
mod classic;
mod contact;
mod footer;
mod hero;
mod homepage;
mod hooks;
mod journey;
mod navigation;
mod now;
mod projects;
mod theme_toggle;
mod ui;
mod work;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::theme::THEME_BOOT_SCRIPT;
use classic::ClassicPage;
use homepage::HomePage;
use theme_toggle::provide_theme;

pub use hooks::*;

const DESCRIPTION: &str = "Full-Stack Developer specializing in React, TypeScript, and modern web technologies. Building user-focused applications with clean code and thoughtful design.";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth light">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                // runs before first paint so a stored dark theme never flashes light
                <script inner_html=THEME_BOOT_SCRIPT></script>
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link rel="stylesheet" href="https://unpkg.com/lucide-static@0.460.0/font/lucide.css" />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&family=JetBrains+Mono:wght@400;500&display=swap"
                />
                <MetaTags />
            </head>
            <body class="font-sans bg-background text-foreground antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_theme();

    view! {
        <Title formatter=|title| format!("Chaim Lev-Ari | {title}") />
        <Meta name="description" content=DESCRIPTION />
        <Meta name="author" content="Chaim Lev-Ari" />
        <Meta
            name="keywords"
            content="Full-Stack Developer, React, TypeScript, Web Development, Frontend, Backend"
        />
        <Meta property="og:title" content="Chaim Lev-Ari | Full-Stack Developer" />
        <Meta property="og:description" content=DESCRIPTION />
        <Meta property="og:type" content="website" />
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:creator" content="@chiptus" />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/classic") view=ClassicPage />
            </Routes>
        </Router>
    }
}
