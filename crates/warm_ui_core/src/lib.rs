//! Headless engine behind the Warm UI button and the library installer.
//!
//! The crate turns declarative [`ControlConfig`] values into class tokens and native attributes,
//! gates activations through a per-control [`InteractionGate`], and installs named components
//! onto host application contexts exactly once. Rendering lives in the `warm_ui` crate; nothing
//! here touches the DOM.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod classes;
mod clock;
mod config;
mod control;
mod gate;
mod icon;
mod installer;

pub use classes::{resolve_classes, resolve_family_classes, ClassList, BUTTON_FAMILY};
#[cfg(not(target_arch = "wasm32"))]
pub use clock::MonotonicClock;
pub use clock::{Clock, ManualClock, SharedClock};
pub use config::{
    throttle_from_millis, ButtonArgs, ConfigError, ControlConfig, ElementKind, GroupDefaults,
    IconRef, NativeType, Size, Variant, DEFAULT_LOADING_ICON, DEFAULT_THROTTLE_DURATION,
};
pub use control::{
    ActivationEvent, ActivationSource, Control, ControlIdentity, Delivery, Listener,
    NativeAttributes, RenderedControl, BUTTON_IDENTITY,
};
pub use gate::{GateDecision, GatePolicy, InteractionGate};
pub use icon::{resolve_icon_classes, IconArgs, IconConfig, ICON_FAMILY};
pub use installer::{
    install, install_one, make_installer, ComponentDefinition, ComponentHost, InstallOutcome,
    InstallRegistry, InstallReport, Installer,
};
