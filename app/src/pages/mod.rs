mod library;
mod story;

pub use library::LibraryPage;
pub use story::StoryPage;
