mod experience;
mod home;
mod menu;
mod story;
mod visit;

pub use experience::ExperiencePage;
pub use home::HomePage;
pub use menu::MenuPage;
pub use story::StoryPage;
pub use visit::VisitPage;

/// Number of `<h1>` elements in rendered markup.
#[cfg(test)]
pub(crate) fn h1_count(html: &str) -> usize {
    html.matches("<h1").count()
}
