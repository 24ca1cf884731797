use serde::{Deserialize, Serialize};

use crate::ui::slider::{
    SliderConfig, SliderTarget, DEFAULT_INTERVAL_MS, DEFAULT_TRANSITION_MS,
};

/// Delay between start-up and the slider binding to the banner.
pub const DEFAULT_INIT_DELAY_MS: u64 = 800;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub slider: SliderSettings,
    #[serde(default)]
    pub content: ContentConfig,
}

/// Slider timing and accessibility settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderSettings {
    /// Time between automatic advances in milliseconds (default: 3500).
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Exit and entry animation length in milliseconds (default: 400).
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    /// Pause while the pointer hovers the banner (default: true).
    #[serde(default = "default_pause_on_hover")]
    pub pause_on_hover: bool,
    /// Prefer reduced motion: cycles at 5000 ms regardless of `interval_ms`.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Delay before the slider initialises after start-up.
    #[serde(default = "default_init_delay_ms")]
    pub init_delay_ms: u64,
}

/// Banner content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Banner title shown in the header.
    #[serde(default = "default_title")]
    pub title: String,
    /// Slider texts, in display order.
    #[serde(default = "default_items")]
    pub items: Vec<String>,
}

fn default_interval_ms() -> u64 {
    DEFAULT_INTERVAL_MS
}

fn default_transition_ms() -> u64 {
    DEFAULT_TRANSITION_MS
}

fn default_pause_on_hover() -> bool {
    true
}

fn default_init_delay_ms() -> u64 {
    DEFAULT_INIT_DELAY_MS
}

fn default_title() -> String {
    "hero".to_string()
}

fn default_items() -> Vec<String> {
    vec![
        "Design that speaks for you".to_string(),
        "Code that scales with you".to_string(),
        "Results you can measure".to_string(),
    ]
}

impl Default for SliderSettings {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            transition_ms: default_transition_ms(),
            pause_on_hover: default_pause_on_hover(),
            reduced_motion: false,
            init_delay_ms: default_init_delay_ms(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            items: default_items(),
        }
    }
}

impl SliderSettings {
    pub fn slider_config(&self) -> SliderConfig {
        SliderConfig {
            interval_ms: self.interval_ms,
            transition_ms: self.transition_ms,
            pause_on_hover: self.pause_on_hover,
        }
    }
}

impl ContentConfig {
    pub fn target(&self) -> SliderTarget {
        SliderTarget::new(self.title.clone(), self.items.iter().cloned())
    }
}
