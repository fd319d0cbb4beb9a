use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::assets::ImagePolicy;
use crate::consts::{
    DEFAULT_CMAP_DIR, DEFAULT_DOCUMENT_PATH, DEFAULT_REVEAL_DELAY_MS, DEFAULT_STANDARD_FONT_DIR,
    MAX_PAGE_WIDTH, MAX_REVEAL_DELAY_MS,
};
use crate::error::{FolioError, Result};
use crate::render::RenderLayers;
use crate::source::DocumentSource;
use crate::viewer::WidthTracker;

/// Everything the viewer needs, built once at start-up and passed down.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// PDF shown by the viewer.
    pub document: PathBuf,
    /// Cap on the rendered page width, in points.
    pub max_page_width: f32,
    /// Delay before hiding the loading placeholder once the page count is known.
    pub reveal_delay_ms: u64,
    /// Follow the container width. When false the page is always `max_page_width` wide.
    pub track_container_width: bool,
    pub render: RenderOptions,
    pub hero: HeroContent,
    pub images: ImagePolicy,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            document: PathBuf::from(DEFAULT_DOCUMENT_PATH),
            max_page_width: MAX_PAGE_WIDTH,
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            track_container_width: true,
            render: RenderOptions::default(),
            hero: HeroContent::default(),
            images: ImagePolicy::default(),
        }
    }
}

impl ViewerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validated()
    }

    /// Reject values the viewer cannot work with.
    pub fn validated(self) -> Result<Self> {
        if !self.max_page_width.is_finite() || self.max_page_width <= 0.0 {
            return Err(FolioError::ConfigValue {
                field: "max_page_width",
                message: format!("must be a positive number, got {}", self.max_page_width),
            });
        }

        if self.reveal_delay_ms > MAX_REVEAL_DELAY_MS {
            return Err(FolioError::ConfigValue {
                field: "reveal_delay_ms",
                message: format!(
                    "must be at most {MAX_REVEAL_DELAY_MS}, got {}",
                    self.reveal_delay_ms
                ),
            });
        }

        Ok(self)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn document_source(&self) -> DocumentSource {
        DocumentSource::Path(self.document.clone())
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    pub fn width_tracker(&self) -> WidthTracker {
        if self.track_container_width {
            WidthTracker::observing(self.max_page_width)
        } else {
            WidthTracker::fixed(self.max_page_width)
        }
    }
}

/// Resource locations and layer flags handed to the renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Directory holding the pdfium shared library. Searched before the defaults.
    pub library_dir: Option<PathBuf>,
    pub cmap_dir: PathBuf,
    pub standard_font_dir: PathBuf,
    pub text_layer: bool,
    pub annotation_layer: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            library_dir: None,
            cmap_dir: PathBuf::from(DEFAULT_CMAP_DIR),
            standard_font_dir: PathBuf::from(DEFAULT_STANDARD_FONT_DIR),
            text_layer: false,
            annotation_layer: false,
        }
    }
}

impl RenderOptions {
    pub fn layers(&self) -> RenderLayers {
        RenderLayers {
            text: self.text_layer,
            annotations: self.annotation_layer,
        }
    }
}

/// Static copy for the hero section and footer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroContent {
    pub greeting: String,
    pub name: String,
    pub bio: String,
    pub question_prompt: String,
    pub links: Vec<HeroLink>,
    /// Local path or http(s) URL.
    pub image: Option<String>,
    pub image_alt: String,
    pub footer_name: String,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            greeting: "Hey 👋 I am".into(),
            name: "Your Name".into(),
            bio: "A short introduction: what you do, who you do it for, and why the \
                  portfolio below is worth a look."
                .into(),
            question_prompt: "Have a question?".into(),
            links: vec![
                HeroLink {
                    label: "Twitter".into(),
                    url: "https://twitter.com/".into(),
                },
                HeroLink {
                    label: "LinkedIn".into(),
                    url: "https://www.linkedin.com/".into(),
                },
            ],
            image: None,
            image_alt: "Portrait".into(),
            footer_name: "Your Name".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeroLink {
    pub label: String,
    pub url: String,
}
