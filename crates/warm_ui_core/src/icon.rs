//! Icon configuration and class resolution.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    classes::ClassList,
    config::{ConfigError, IconRef, Variant},
};

/// Class family for icon tokens.
pub const ICON_FAMILY: &str = "warm-icon";

/// Configuration of one rendered icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconConfig {
    /// Icon reference, rendered as a Font Awesome glyph name.
    pub icon: IconRef,
    /// Color tone.
    pub tone: Variant,
    /// Continuous rotation.
    pub spin: bool,
    /// Explicit CSS color, overriding the tone.
    pub color: Option<String>,
}

impl IconConfig {
    /// Untoned, static icon.
    pub fn new(icon: impl Into<IconRef>) -> Self {
        Self {
            icon: icon.into(),
            tone: Variant::None,
            spin: false,
            color: None,
        }
    }

    /// Inline style for the explicit color, if any.
    pub fn style(&self) -> Option<String> {
        self.color
            .as_deref()
            .filter(|color| !color.trim().is_empty())
            .map(|color| format!("color: {color}"))
    }
}

/// Resolves icon class tokens: family, tone, glyph, spin.
pub fn resolve_icon_classes(config: &IconConfig) -> ClassList {
    let mut classes = ClassList::new(ICON_FAMILY);
    if let Some(tone) = config.tone.token() {
        classes.push(format!("{ICON_FAMILY}--{tone}"));
    }
    classes.push("fa-solid");
    classes.push(format!("fa-{}", config.icon.as_str().trim()));
    if config.spin {
        classes.push("fa-spin");
    }
    classes
}

/// Raw icon arguments from registry callers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconArgs {
    /// Glyph name.
    pub icon: String,
    /// Tone name.
    #[serde(rename = "type")]
    pub tone: Option<String>,
    /// Rotation flag.
    pub spin: bool,
    /// CSS color.
    pub color: Option<String>,
}

impl IconArgs {
    /// Decodes arguments from a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidArgs`] when the payload does not have the argument shape.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        serde_json::from_value(value).map_err(|err| ConfigError::InvalidArgs(err.to_string()))
    }

    /// Validates the arguments into an [`IconConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidArgs`] for an empty glyph name and
    /// [`ConfigError::UnknownVariant`] for an unknown tone.
    pub fn to_config(&self) -> Result<IconConfig, ConfigError> {
        if self.icon.trim().is_empty() {
            return Err(ConfigError::InvalidArgs("icon name is empty".to_string()));
        }
        let tone = match self.tone.as_deref() {
            Some(raw) => raw.parse::<Variant>()?,
            None => Variant::None,
        };
        Ok(IconConfig {
            icon: IconRef::new(self.icon.trim()),
            tone,
            spin: self.spin,
            color: self.color.clone(),
        })
    }
}
