//! Class-token resolution for controls.

use std::fmt;

use crate::config::ControlConfig;

/// Class family shared by every button token.
pub const BUTTON_FAMILY: &str = "warm-button";

/// Ordered, duplicate-free list of class tokens.
///
/// Order only aids debugging; consumers should treat the list as a set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassList(Vec<String>);

impl ClassList {
    /// Creates a list holding only `base`.
    pub fn new(base: impl Into<String>) -> Self {
        Self(vec![base.into()])
    }

    /// Appends `token` unless already present.
    pub fn push(&mut self, token: impl Into<String>) {
        let token = token.into();
        if !token.is_empty() && !self.contains(&token) {
            self.0.push(token);
        }
    }

    /// Returns whether `token` is present.
    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|existing| existing == token)
    }

    /// Iterates tokens in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the list holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// Resolves the button class tokens for `config`.
pub fn resolve_classes(config: &ControlConfig) -> ClassList {
    resolve_family_classes(BUTTON_FAMILY, config)
}

/// Resolves class tokens for `config` under an arbitrary class `family`.
///
/// Token order: base, variant, size, shape flags (plain, round, circle), state flags
/// (disabled, loading). Unmarked variant and size contribute nothing.
pub fn resolve_family_classes(family: &str, config: &ControlConfig) -> ClassList {
    let mut classes = ClassList::new(family);
    if let Some(variant) = config.variant.token() {
        classes.push(format!("{family}--{variant}"));
    }
    if let Some(size) = config.size.token() {
        classes.push(format!("{family}--{size}"));
    }

    let flags = [
        ("plain", config.plain),
        ("round", config.round),
        ("circle", config.circle),
        ("disabled", config.disabled),
        ("loading", config.loading),
    ];
    for (flag, _) in flags.into_iter().filter(|(_, set)| *set) {
        classes.push(format!("is-{flag}"));
    }
    classes
}
