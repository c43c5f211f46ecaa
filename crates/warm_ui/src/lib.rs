//! Warm UI component library for Leptos.
//!
//! The crate renders the headless [`warm_ui_core`] engine as Leptos components (`Button`,
//! `ButtonGroup`, `Icon`) and exposes the library bundle that installs them onto a
//! [`WarmUiHost`]. Class tokens follow the `warm-<component>` family contract consumed by the
//! theme stylesheet; shared `data-ui-*` attributes mark every primitive root.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod button;
mod clock;
mod host;
mod icon;

pub use button::{Button, ButtonGroup, ButtonGroupContext};
pub use clock::PerformanceClock;
pub use host::{
    installer, provide_warm_ui, use_warm_ui, warm_button, warm_icon, ComponentFactory,
    ComponentProps, WarmUiHost, BUTTON_COMPONENT, ICON_COMPONENT,
};
pub use icon::Icon;

/// Convenience imports for applications consuming the component set.
pub mod prelude {
    pub use crate::{
        installer, provide_warm_ui, use_warm_ui, Button, ButtonGroup, ComponentProps, Icon,
        WarmUiHost,
    };
    pub use warm_ui_core::{
        ActivationEvent, ActivationSource, ElementKind, IconRef, NativeType, Size, Variant,
    };
}
