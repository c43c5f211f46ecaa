//! Declarative button configuration and the validation boundary for raw property bags.
//!
//! [`ControlConfig`] is the only shape the resolver and the gate accept. Raw story or registry
//! arguments arrive as [`ButtonArgs`] and are validated into a config by
//! [`ButtonArgs::to_config`], which is where closed-enumeration violations surface.

use std::{convert::Infallible, str::FromStr, time::Duration};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Throttle window applied when a caller does not supply one.
pub const DEFAULT_THROTTLE_DURATION: Duration = Duration::from_millis(500);

/// Icon shown while a control is loading when no explicit loading icon is configured.
pub const DEFAULT_LOADING_ICON: &str = "spinner";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Caller contract violations detected while validating raw component arguments.
pub enum ConfigError {
    /// The variant is not one of the supported visual variants.
    #[error("unknown button variant `{0}`")]
    UnknownVariant(String),
    /// The size is not one of the supported sizes.
    #[error("unknown button size `{0}`")]
    UnknownSize(String),
    /// The native type is not one of `button`, `submit`, `reset`.
    #[error("unknown native button type `{0}`")]
    UnknownNativeType(String),
    /// The argument payload could not be decoded.
    #[error("invalid component arguments: {0}")]
    InvalidArgs(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Visual variant of a control.
pub enum Variant {
    /// Primary emphasized action.
    Primary,
    /// Positive outcome action.
    Success,
    /// Cautionary action.
    Warning,
    /// Destructive action.
    Danger,
    /// Neutral informational action.
    Info,
    /// Unmarked baseline variant.
    None,
}

impl Default for Variant {
    fn default() -> Self {
        Self::None
    }
}

impl Variant {
    /// Every variant, in declaration order.
    pub const ALL: [Variant; 6] = [
        Self::Primary,
        Self::Success,
        Self::Warning,
        Self::Danger,
        Self::Info,
        Self::None,
    ];

    /// Returns the class-token suffix, or `None` for the unmarked variant.
    pub fn token(self) -> Option<&'static str> {
        match self {
            Self::Primary => Some("primary"),
            Self::Success => Some("success"),
            Self::Warning => Some("warning"),
            Self::Danger => Some("danger"),
            Self::Info => Some("info"),
            Self::None => None,
        }
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "" | "none" => Ok(Self::None),
            "primary" => Ok(Self::Primary),
            "success" => Ok(Self::Success),
            "warning" => Ok(Self::Warning),
            "danger" => Ok(Self::Danger),
            "info" => Ok(Self::Info),
            other => Err(ConfigError::UnknownVariant(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Control size.
pub enum Size {
    /// Large control.
    Large,
    /// Unmarked baseline size.
    Default,
    /// Compact control.
    Small,
}

impl Default for Size {
    fn default() -> Self {
        Self::Default
    }
}

impl Size {
    /// Every size, in declaration order.
    pub const ALL: [Size; 3] = [Self::Large, Self::Default, Self::Small];

    /// Returns the class-token suffix, or `None` for the baseline size.
    pub fn token(self) -> Option<&'static str> {
        match self {
            Self::Large => Some("large"),
            Self::Default => None,
            Self::Small => Some("small"),
        }
    }
}

impl FromStr for Size {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "" | "default" => Ok(Self::Default),
            "large" => Ok(Self::Large),
            "small" => Ok(Self::Small),
            other => Err(ConfigError::UnknownSize(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// `type` attribute of a native pressable element.
pub enum NativeType {
    /// Plain button.
    Button,
    /// Form submission.
    Submit,
    /// Form reset.
    Reset,
    /// No explicit type attribute.
    None,
}

impl Default for NativeType {
    fn default() -> Self {
        Self::Button
    }
}

impl NativeType {
    /// Returns the attribute value, or `None` when no attribute should be emitted.
    pub fn token(self) -> Option<&'static str> {
        match self {
            Self::Button => Some("button"),
            Self::Submit => Some("submit"),
            Self::Reset => Some("reset"),
            Self::None => None,
        }
    }
}

impl FromStr for NativeType {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "" | "none" => Ok(Self::None),
            "button" => Ok(Self::Button),
            "submit" => Ok(Self::Submit),
            "reset" => Ok(Self::Reset),
            other => Err(ConfigError::UnknownNativeType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Element kind a control renders as.
pub enum ElementKind {
    /// Native pressable `<button>` element.
    Button,
    /// Hyperlink `<a>` element.
    Link,
    /// Generic `<div>` container.
    Container,
}

impl Default for ElementKind {
    fn default() -> Self {
        Self::Button
    }
}

impl ElementKind {
    /// Returns the HTML tag name.
    pub fn tag_name(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Link => "a",
            Self::Container => "div",
        }
    }
}

impl FromStr for ElementKind {
    type Err = Infallible;

    /// Unknown tags fall back to the native pressable element.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(match raw.trim().to_ascii_lowercase().as_str() {
            "a" => Self::Link,
            "div" => Self::Container,
            _ => Self::Button,
        })
    }
}

/// Opaque icon reference handed through to the icon renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconRef(String);

impl IconRef {
    /// Wraps an icon name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the icon name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IconRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for IconRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Converts a raw millisecond count into a throttle window, clamping negatives to zero.
pub fn throttle_from_millis(raw: i64) -> Duration {
    Duration::from_millis(u64::try_from(raw).unwrap_or(0))
}

/// Fully enumerated configuration of one button render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlConfig {
    /// Visual variant.
    pub variant: Variant,
    /// Control size.
    pub size: Size,
    /// Outline-only shape.
    pub plain: bool,
    /// Pill shape.
    pub round: bool,
    /// Circular shape.
    pub circle: bool,
    /// Hard gate: no activation passes while set.
    pub disabled: bool,
    /// Hard gate: no activation passes while set.
    pub loading: bool,
    /// Enables the throttle window between accepted activations.
    pub use_throttle: bool,
    /// Minimum spacing between accepted activations when throttling.
    pub throttle_duration: Duration,
    /// Native `type` attribute, honored only for [`ElementKind::Button`].
    pub native_type: NativeType,
    /// Element kind to render as.
    pub tag: ElementKind,
    /// Requests focus on mount.
    pub autofocus: bool,
    /// Leading icon shown when not loading.
    pub icon: Option<IconRef>,
    /// Icon shown while loading.
    pub loading_icon: IconRef,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            size: Size::default(),
            plain: false,
            round: false,
            circle: false,
            disabled: false,
            loading: false,
            use_throttle: true,
            throttle_duration: DEFAULT_THROTTLE_DURATION,
            native_type: NativeType::default(),
            tag: ElementKind::default(),
            autofocus: false,
            icon: None,
            loading_icon: IconRef::new(DEFAULT_LOADING_ICON),
        }
    }
}

impl ControlConfig {
    /// Returns a copy with throttling switched off.
    pub fn unthrottled(self) -> Self {
        Self {
            use_throttle: false,
            ..self
        }
    }

    /// Returns a copy with throttling enabled for `raw_millis` (negative values clamp to zero).
    pub fn throttled_for_millis(self, raw_millis: i64) -> Self {
        Self {
            use_throttle: true,
            throttle_duration: throttle_from_millis(raw_millis),
            ..self
        }
    }
}

/// Defaults a surrounding button group pushes onto its members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroupDefaults {
    /// Size applied to every member when set.
    pub size: Option<Size>,
    /// Variant applied to every member when set.
    pub variant: Option<Variant>,
    /// Disables every member when true.
    pub disabled: bool,
}

impl GroupDefaults {
    /// Merges group values over a member configuration.
    pub fn apply(&self, config: ControlConfig) -> ControlConfig {
        ControlConfig {
            size: self.size.unwrap_or(config.size),
            variant: self.variant.unwrap_or(config.variant),
            disabled: config.disabled || self.disabled,
            ..config
        }
    }
}

/// Raw, loosely typed button arguments as supplied by stories and registry callers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonArgs {
    /// Variant name (`primary`, `success`, ...; empty for none).
    #[serde(rename = "type")]
    pub variant: Option<String>,
    /// Size name (`large`, `default`, `small`; empty for default).
    pub size: Option<String>,
    /// Outline-only shape.
    pub plain: bool,
    /// Pill shape.
    pub round: bool,
    /// Circular shape.
    pub circle: bool,
    /// Disabled state.
    pub disabled: bool,
    /// Loading state.
    pub loading: bool,
    /// Throttle switch; defaults on.
    pub use_throttle: Option<bool>,
    /// Throttle window in milliseconds.
    pub throttle_duration: Option<i64>,
    /// Native type name (`button`, `submit`, `reset`; empty for none).
    pub native_type: Option<String>,
    /// Tag name (`button`, `a`, `div`).
    pub tag: Option<String>,
    /// Autofocus flag.
    pub autofocus: bool,
    /// Leading icon name.
    pub icon: Option<String>,
    /// Loading icon name.
    pub loading_icon: Option<String>,
    /// Text content rendered inside the control.
    pub content: Option<String>,
}

impl ButtonArgs {
    /// Decodes arguments from a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidArgs`] when the payload does not have the argument shape.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(value).map_err(|err| ConfigError::InvalidArgs(err.to_string()))
    }

    /// Validates the arguments into a [`ControlConfig`].
    ///
    /// # Errors
    ///
    /// Returns the matching [`ConfigError`] when a variant, size, or native type falls outside
    /// its closed enumeration.
    pub fn to_config(&self) -> Result<ControlConfig, ConfigError> {
        let defaults = ControlConfig::default();
        let variant = parse_or(self.variant.as_deref(), defaults.variant)?;
        let size = parse_or(self.size.as_deref(), defaults.size)?;
        let native_type = parse_or(self.native_type.as_deref(), defaults.native_type)?;
        let tag = match self.tag.as_deref() {
            Some(raw) => match raw.parse::<ElementKind>() {
                Ok(kind) => kind,
                Err(never) => match never {},
            },
            None => defaults.tag,
        };

        Ok(ControlConfig {
            variant,
            size,
            plain: self.plain,
            round: self.round,
            circle: self.circle,
            disabled: self.disabled,
            loading: self.loading,
            use_throttle: self.use_throttle.unwrap_or(defaults.use_throttle),
            throttle_duration: self
                .throttle_duration
                .map(throttle_from_millis)
                .unwrap_or(defaults.throttle_duration),
            native_type,
            tag,
            autofocus: self.autofocus,
            icon: self
                .icon
                .as_deref()
                .filter(|name| !name.trim().is_empty())
                .map(IconRef::from),
            loading_icon: self
                .loading_icon
                .as_deref()
                .filter(|name| !name.trim().is_empty())
                .map(IconRef::from)
                .unwrap_or(defaults.loading_icon),
        })
    }
}

fn parse_or<T>(raw: Option<&str>, fallback: T) -> Result<T, ConfigError>
where
    T: FromStr<Err = ConfigError>,
{
    raw.map_or(Ok(fallback), str::parse)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_strings_mean_unmarked_values() {
        let args = ButtonArgs {
            variant: Some(String::new()),
            size: Some(String::new()),
            native_type: Some(String::new()),
            ..ButtonArgs::default()
        };
        let config = args.to_config().expect("config");
        assert_eq!(config.variant, Variant::None);
        assert_eq!(config.size, Size::Default);
        assert_eq!(config.native_type, NativeType::None);
    }

    #[test]
    fn out_of_range_enumerations_are_rejected_at_the_boundary() {
        let bad_variant = ButtonArgs {
            variant: Some("fuchsia".to_string()),
            ..ButtonArgs::default()
        };
        assert_eq!(
            bad_variant.to_config(),
            Err(ConfigError::UnknownVariant("fuchsia".to_string()))
        );

        let bad_size = ButtonArgs {
            size: Some("huge".to_string()),
            ..ButtonArgs::default()
        };
        assert_eq!(
            bad_size.to_config(),
            Err(ConfigError::UnknownSize("huge".to_string()))
        );

        let bad_type = ButtonArgs {
            native_type: Some("menu".to_string()),
            ..ButtonArgs::default()
        };
        assert_eq!(
            bad_type.to_config(),
            Err(ConfigError::UnknownNativeType("menu".to_string()))
        );
    }

    #[test]
    fn unknown_tags_and_negative_throttles_are_normalized() {
        let args = ButtonArgs::from_value(json!({
            "tag": "section",
            "throttleDuration": -250,
        }))
        .expect("args");
        let config = args.to_config().expect("config");
        assert_eq!(config.tag, ElementKind::Button);
        assert_eq!(config.throttle_duration, Duration::ZERO);
        assert!(config.use_throttle);
    }

    #[test]
    fn camel_case_payload_decodes_every_field() {
        let args = ButtonArgs::from_value(json!({
            "type": "primary",
            "size": "small",
            "round": true,
            "useThrottle": false,
            "throttleDuration": 1200,
            "nativeType": "submit",
            "tag": "A",
            "icon": "search",
            "loadingIcon": "circle-notch",
            "content": "Go",
        }))
        .expect("args");
        let config = args.to_config().expect("config");

        assert_eq!(config.variant, Variant::Primary);
        assert_eq!(config.size, Size::Small);
        assert!(config.round);
        assert!(!config.use_throttle);
        assert_eq!(config.throttle_duration, Duration::from_millis(1200));
        assert_eq!(config.native_type, NativeType::Submit);
        assert_eq!(config.tag, ElementKind::Link);
        assert_eq!(config.icon, Some(IconRef::new("search")));
        assert_eq!(config.loading_icon, IconRef::new("circle-notch"));
        assert_eq!(args.content.as_deref(), Some("Go"));
    }

    #[test]
    fn malformed_payload_reports_invalid_args() {
        let err = ButtonArgs::from_value(json!({ "round": "yes" })).expect_err("bad payload");
        assert!(matches!(err, ConfigError::InvalidArgs(_)));
        assert_eq!(
            ButtonArgs::from_value(Value::Null).expect("null payload"),
            ButtonArgs::default()
        );
    }

    #[test]
    fn defaults_follow_library_conventions() {
        let config = ControlConfig::default();
        assert_eq!(config.tag, ElementKind::Button);
        assert_eq!(config.native_type, NativeType::Button);
        assert!(config.use_throttle);
        assert_eq!(config.throttle_duration, DEFAULT_THROTTLE_DURATION);
        assert_eq!(config.loading_icon.as_str(), DEFAULT_LOADING_ICON);
        assert_eq!(ButtonArgs::default().to_config(), Ok(config));
    }

    #[test]
    fn group_values_override_member_values() {
        let member = ControlConfig {
            size: Size::Small,
            variant: Variant::Info,
            ..ControlConfig::default()
        };
        let group = GroupDefaults {
            size: Some(Size::Large),
            variant: None,
            disabled: true,
        };
        let merged = group.apply(member);
        assert_eq!(merged.size, Size::Large);
        assert_eq!(merged.variant, Variant::Info);
        assert!(merged.disabled);

        let enabled_member = GroupDefaults::default().apply(ControlConfig {
            disabled: true,
            ..ControlConfig::default()
        });
        assert!(enabled_member.disabled);
    }
}
