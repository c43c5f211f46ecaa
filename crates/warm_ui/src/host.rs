//! Leptos host application context and the Warm UI component bundle.
//!
//! [`WarmUiHost`] owns the per-application install registry and the component factories it
//! hands out by name. Provide it once near the root with [`provide_warm_ui`] after installing
//! the bundle returned by [`installer`].

use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use leptos::*;
use serde_json::Value;
use warm_ui_core::{
    make_installer, ActivationEvent, ButtonArgs, ComponentDefinition, ComponentHost, ConfigError,
    ControlConfig, IconArgs, IconConfig, InstallRegistry, InstallReport, Installer,
};

use crate::{button::render_button, icon::render_icon, PerformanceClock};

/// Registry name of the button component.
pub const BUTTON_COMPONENT: &str = "WarmButton";
/// Registry name of the icon component.
pub const ICON_COMPONENT: &str = "WarmIcon";

/// Props handed to a registered component factory.
#[derive(Clone, Default)]
pub struct ComponentProps {
    /// Loosely typed argument bag, validated by the factory.
    pub args: Value,
    /// Receives accepted activations from interactive components.
    pub on_activate: Option<Callback<ActivationEvent>>,
}

impl ComponentProps {
    /// Props carrying only `args`.
    pub fn args(args: Value) -> Self {
        Self {
            args,
            on_activate: None,
        }
    }
}

/// Host-side component value: builds a view from props.
pub type ComponentFactory = Rc<dyn Fn(ComponentProps) -> View>;

#[derive(Default)]
struct HostState {
    registry: InstallRegistry,
    factories: RefCell<BTreeMap<String, ComponentFactory>>,
}

/// Leptos host application context.
#[derive(Clone, Default)]
pub struct WarmUiHost {
    state: Rc<HostState>,
}

impl ComponentHost for WarmUiHost {
    type Component = ComponentFactory;

    fn install_registry(&self) -> &InstallRegistry {
        &self.state.registry
    }

    fn register_component(&self, name: &str, component: ComponentFactory) {
        self.state
            .factories
            .borrow_mut()
            .insert(name.to_string(), component);
    }
}

impl WarmUiHost {
    /// Creates a host with nothing installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a component bundle onto this host.
    pub fn use_installer(&self, installer: &Installer<ComponentFactory>) -> InstallReport {
        installer.install(self)
    }

    /// Returns the factory registered under `name`.
    pub fn component(&self, name: &str) -> Option<ComponentFactory> {
        self.state.factories.borrow().get(name).cloned()
    }

    /// Installed component names in installation order.
    pub fn installed(&self) -> Vec<String> {
        self.state.registry.registered()
    }

    /// Builds the component registered under `name`, or an empty view when none is.
    pub fn render(&self, name: &str, props: ComponentProps) -> View {
        match self.installed_component(name) {
            Some(factory) => factory(props),
            None => ().into_view(),
        }
    }

    fn installed_component(&self, name: &str) -> Option<ComponentFactory> {
        let factory = self.component(name);
        if factory.is_none() {
            logging::warn!("component `{name}` is not installed on this host");
        }
        factory
    }
}

/// Makes `host` available to descendant components.
pub fn provide_warm_ui(host: WarmUiHost) {
    provide_context(host);
}

/// Returns the host provided by an ancestor, if any.
pub fn use_warm_ui() -> Option<WarmUiHost> {
    use_context::<WarmUiHost>()
}

fn button_config(args: Value) -> Result<(ControlConfig, Option<String>), ConfigError> {
    let args = ButtonArgs::from_value(args)?;
    let config = args.to_config()?;
    Ok((config, args.content))
}

fn icon_config(args: Value) -> Result<IconConfig, ConfigError> {
    IconArgs::from_value(args)?.to_config()
}

fn button_factory(props: ComponentProps) -> View {
    match button_config(props.args) {
        Ok((config, content)) => render_button(
            Signal::derive(move || config.clone()),
            props.on_activate,
            Rc::new(PerformanceClock::new()),
            content.map(IntoView::into_view),
            None,
        ),
        Err(err) => {
            logging::warn!("{BUTTON_COMPONENT} rejected its arguments: {err}");
            ().into_view()
        }
    }
}

fn icon_factory(props: ComponentProps) -> View {
    match icon_config(props.args) {
        Ok(config) => render_icon(&config, None),
        Err(err) => {
            logging::warn!("{ICON_COMPONENT} rejected its arguments: {err}");
            ().into_view()
        }
    }
}

/// Button definition for per-component installation.
pub fn warm_button() -> ComponentDefinition<ComponentFactory> {
    ComponentDefinition::new(BUTTON_COMPONENT, Rc::new(button_factory) as ComponentFactory)
}

/// Icon definition for per-component installation.
pub fn warm_icon() -> ComponentDefinition<ComponentFactory> {
    ComponentDefinition::new(ICON_COMPONENT, Rc::new(icon_factory) as ComponentFactory)
}

/// Bundle installer covering every Warm UI component.
pub fn installer() -> Installer<ComponentFactory> {
    make_installer([warm_button(), warm_icon()])
}
