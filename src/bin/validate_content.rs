use portfolio_site::{
    content::{load, Content, Document},
    gallery::{get_item, GALLERY},
    logger::init_server_logger,
};
use std::process::ExitCode;

fn describe(content: &Content) -> String {
    match content {
        Content::Hero(hero) => format!("hero for {}", hero.name),
        Content::Projects(projects) => format!(
            "{} projects, featured: {}",
            projects.projects.len(),
            projects.featured_project.name
        ),
        Content::WorkExperience(work) => format!("{} roles", work.experiences.len()),
        Content::Milestones(milestones) => format!("{} milestones", milestones.len()),
        Content::Interests(interests) => format!("{} interests", interests.len()),
        Content::Now(now) => format!("now page updated {}", now.last_updated),
    }
}

fn main() -> ExitCode {
    init_server_logger();

    let mut failures = 0;
    for document in Document::ALL {
        match load(document) {
            Ok(content) => tracing::info!("{document}: {}", describe(&content)),
            Err(e) => {
                tracing::error!("{e}");
                failures += 1;
            }
        }
    }
    for entry in GALLERY {
        if let Err(e) = get_item(entry.id) {
            tracing::error!("{e}");
            failures += 1;
        }
    }

    if failures > 0 {
        tracing::error!("{failures} content file(s) failed validation");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
