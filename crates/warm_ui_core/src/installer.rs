//! Idempotent component installation onto host application contexts.
//!
//! Each host context owns an [`InstallRegistry`]. Installing a component whose identifier is
//! already recorded is a silent no-op, whether it arrives through a bundle ([`Installer`]) or
//! on its own ([`ComponentDefinition::install`]).

use std::{borrow::Cow, cell::RefCell};

use leptos::logging;

/// Set of component identifiers already attached to one host context.
///
/// Entries are added exactly once and never removed.
#[derive(Debug, Default)]
pub struct InstallRegistry {
    registered: RefCell<Vec<String>>,
}

impl InstallRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether `name` has been installed.
    pub fn is_registered(&self, name: &str) -> bool {
        self.registered.borrow().iter().any(|entry| entry == name)
    }

    /// Installed identifiers in installation order.
    pub fn registered(&self) -> Vec<String> {
        self.registered.borrow().clone()
    }

    /// Number of installed identifiers.
    pub fn len(&self) -> usize {
        self.registered.borrow().len()
    }

    /// Returns whether nothing has been installed.
    pub fn is_empty(&self) -> bool {
        self.registered.borrow().is_empty()
    }

    /// Runs `register` and records `name` unless `name` is already present; returns whether
    /// `register` ran.
    ///
    /// The check, the registration and the insert happen under one exclusive borrow, and
    /// `name` is recorded only after `register` returns. A panicking `register` leaves the
    /// registry untouched.
    fn claim_with(&self, name: &str, register: impl FnOnce()) -> bool {
        let mut registered = self.registered.borrow_mut();
        if registered.iter().any(|entry| entry == name) {
            return false;
        }
        register();
        registered.push(name.to_string());
        true
    }
}

/// Host application context components are registered onto.
pub trait ComponentHost {
    /// Host-specific component value.
    type Component: Clone;

    /// Registry owned by this host context.
    fn install_registry(&self) -> &InstallRegistry;

    /// Host registration primitive. Called at most once per identifier.
    ///
    /// Runs while the install registry is exclusively borrowed, so it must not read the
    /// registry or install onto the same host.
    fn register_component(&self, name: &str, component: Self::Component);
}

/// Named component ready for installation.
#[derive(Debug, Clone)]
pub struct ComponentDefinition<C> {
    name: Cow<'static, str>,
    component: C,
}

impl<C> ComponentDefinition<C> {
    /// Pairs a component identifier with its host value.
    pub fn new(name: impl Into<Cow<'static, str>>, component: C) -> Self {
        Self {
            name: name.into(),
            component,
        }
    }

    /// Component identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Host value.
    pub fn component(&self) -> &C {
        &self.component
    }
}

impl<C: Clone> ComponentDefinition<C> {
    /// Installs this component alone onto `host`.
    pub fn install<H>(&self, host: &H) -> InstallOutcome
    where
        H: ComponentHost<Component = C> + ?Sized,
    {
        install_one(host, self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Result of installing one component.
pub enum InstallOutcome {
    /// The host registration primitive was called.
    Registered,
    /// The identifier was already installed on this host; nothing happened.
    AlreadyRegistered,
}

/// Per-bundle installation summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    /// Identifiers registered by this call, in bundle order.
    pub registered: Vec<String>,
    /// Identifiers skipped because they were already installed.
    pub skipped: Vec<String>,
}

/// Installs one component onto `host` unless its identifier is already registered there.
pub fn install_one<H>(host: &H, definition: &ComponentDefinition<H::Component>) -> InstallOutcome
where
    H: ComponentHost + ?Sized,
{
    let registered = host.install_registry().claim_with(definition.name(), || {
        host.register_component(definition.name(), definition.component().clone())
    });
    if !registered {
        logging::debug_warn!(
            "component `{}` already installed on this host; skipping",
            definition.name()
        );
        return InstallOutcome::AlreadyRegistered;
    }
    InstallOutcome::Registered
}

/// Installs `definitions` onto `host` in order, skipping already-installed identifiers.
pub fn install<H>(host: &H, definitions: &[ComponentDefinition<H::Component>]) -> InstallReport
where
    H: ComponentHost + ?Sized,
{
    let mut report = InstallReport::default();
    for definition in definitions {
        let name = definition.name().to_string();
        match install_one(host, definition) {
            InstallOutcome::Registered => report.registered.push(name),
            InstallOutcome::AlreadyRegistered => report.skipped.push(name),
        }
    }
    report
}

/// Bundle installer for a whole component library.
#[derive(Debug, Clone)]
pub struct Installer<C> {
    components: Vec<ComponentDefinition<C>>,
}

/// Builds a bundle installer over `components`, preserving their order.
pub fn make_installer<C>(
    components: impl IntoIterator<Item = ComponentDefinition<C>>,
) -> Installer<C> {
    Installer {
        components: components.into_iter().collect(),
    }
}

impl<C: Clone> Installer<C> {
    /// Installs every bundled component onto `host`.
    pub fn install<H>(&self, host: &H) -> InstallReport
    where
        H: ComponentHost<Component = C> + ?Sized,
    {
        install(host, &self.components)
    }

    /// Bundled definitions.
    pub fn components(&self) -> &[ComponentDefinition<C>] {
        &self.components
    }

    /// Looks up one bundled definition for per-component installation.
    pub fn component(&self, name: &str) -> Option<&ComponentDefinition<C>> {
        self.components.iter().find(|definition| definition.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct RecordingHost {
        registry: InstallRegistry,
        calls: RefCell<Vec<(String, u8)>>,
    }

    impl ComponentHost for RecordingHost {
        type Component = u8;

        fn install_registry(&self) -> &InstallRegistry {
            &self.registry
        }

        fn register_component(&self, name: &str, component: u8) {
            self.calls.borrow_mut().push((name.to_string(), component));
        }
    }

    fn calls(host: &RecordingHost) -> Vec<(String, u8)> {
        host.calls.borrow().clone()
    }

    #[test]
    fn installing_twice_registers_once_without_error() {
        let host = RecordingHost::default();
        let button = ComponentDefinition::new("WarmButton", 1);

        assert_eq!(button.install(&host), InstallOutcome::Registered);
        assert_eq!(button.install(&host), InstallOutcome::AlreadyRegistered);

        assert_eq!(calls(&host), vec![("WarmButton".to_string(), 1)]);
        assert_eq!(host.registry.registered(), vec!["WarmButton"]);
    }

    #[test]
    fn bundle_installs_in_insertion_order_and_reports_skips() {
        let host = RecordingHost::default();
        ComponentDefinition::new("WarmIcon", 2).install(&host);

        let installer = make_installer([
            ComponentDefinition::new("WarmButton", 1),
            ComponentDefinition::new("WarmIcon", 2),
            ComponentDefinition::new("WarmButtonGroup", 3),
        ]);
        let report = installer.install(&host);

        assert_eq!(report.registered, vec!["WarmButton", "WarmButtonGroup"]);
        assert_eq!(report.skipped, vec!["WarmIcon"]);
        assert_eq!(
            host.registry.registered(),
            vec!["WarmIcon", "WarmButton", "WarmButtonGroup"]
        );

        let again = installer.install(&host);
        assert!(again.registered.is_empty());
        assert_eq!(again.skipped.len(), 3);
        assert_eq!(calls(&host).len(), 3);
    }

    #[test]
    fn registries_are_scoped_to_their_host() {
        let first = RecordingHost::default();
        let second = RecordingHost::default();
        let installer = make_installer([ComponentDefinition::new("WarmButton", 1)]);

        installer.install(&first);
        installer.install(&second);

        assert_eq!(calls(&first).len(), 1);
        assert_eq!(calls(&second).len(), 1);
    }

    #[test]
    fn duplicate_names_inside_one_bundle_register_once() {
        let host = RecordingHost::default();
        let report = install(
            &host,
            &[
                ComponentDefinition::new("WarmButton", 1),
                ComponentDefinition::new("WarmButton", 9),
            ],
        );
        assert_eq!(report.registered, vec!["WarmButton"]);
        assert_eq!(report.skipped, vec!["WarmButton"]);
        assert_eq!(calls(&host), vec![("WarmButton".to_string(), 1)]);
    }

    struct FailingHost {
        registry: InstallRegistry,
        fail: std::cell::Cell<bool>,
    }

    impl ComponentHost for FailingHost {
        type Component = u8;

        fn install_registry(&self) -> &InstallRegistry {
            &self.registry
        }

        fn register_component(&self, name: &str, _component: u8) {
            if self.fail.get() {
                panic!("cannot register {name}");
            }
        }
    }

    #[test]
    fn failed_registration_leaves_the_name_installable() {
        let host = FailingHost {
            registry: InstallRegistry::new(),
            fail: std::cell::Cell::new(true),
        };
        let button = ComponentDefinition::new("WarmButton", 1);

        let attempt =
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| button.install(&host)));
        assert!(attempt.is_err());
        assert!(!host.registry.is_registered("WarmButton"));

        host.fail.set(false);
        assert_eq!(button.install(&host), InstallOutcome::Registered);
        assert_eq!(host.registry.registered(), vec!["WarmButton"]);
    }

    #[test]
    fn bundle_lookup_supports_single_component_install() {
        let host = RecordingHost::default();
        let installer = make_installer([
            ComponentDefinition::new("WarmButton", 1),
            ComponentDefinition::new("WarmIcon", 2),
        ]);
        let icon = installer.component("WarmIcon").expect("icon definition");
        assert_eq!(icon.install(&host), InstallOutcome::Registered);
        assert_eq!(host.registry.len(), 1);
        assert!(installer.component("WarmTable").is_none());
    }
}
