//! Dashboard panels: store queries shaped into chart-ready tables and summaries.

pub mod headline;
pub mod service;
pub mod types;
pub mod view;

pub use headline::{clean_title, extract_story_title};
pub use service::PanelService;
pub use types::{
    ArticleRow, MediaSourceCount, ProjectStats, ScoreBin, StoryHeadline, TotalCount,
    above_threshold_pct,
};
pub use view::{NO_DATA_MESSAGE, PanelView};
