//! Client route paths.

use crate::{
    error::{ClientError, Result},
    model::StoryId,
};

/// Path of the library view.
pub const LIBRARY_PATH: &str = "/";

/// Static segment of the story viewer route.
pub const STORY_SEGMENT: &str = "story";

/// Name of the story viewer's identifier parameter.
pub const STORY_PARAM: &str = "id";

/// Path of the viewer for one story.
pub fn story_path(id: StoryId) -> String {
    format!("/{STORY_SEGMENT}/{id}")
}

/// Parse the `id` route parameter of the viewer.
pub fn parse_story_param(raw: Option<&str>) -> Result<StoryId> {
    let raw = raw.unwrap_or_default();
    raw.parse()
        .map_err(|_| ClientError::InvalidStoryId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_path() {
        assert_eq!(story_path(StoryId(12)), "/story/12");
    }

    #[test]
    fn test_parse_story_param() {
        assert_eq!(parse_story_param(Some("12")), Ok(StoryId(12)));
        assert_eq!(
            parse_story_param(Some("twelve")),
            Err(ClientError::InvalidStoryId("twelve".to_string()))
        );
        assert_eq!(
            parse_story_param(None),
            Err(ClientError::InvalidStoryId(String::new()))
        );
    }
}
