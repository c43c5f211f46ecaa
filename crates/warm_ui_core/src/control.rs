//! Addressable control: class resolution, native attributes, gating, and listener fan-out.

use std::{fmt, rc::Rc, time::Duration};

use crate::{
    classes::{resolve_family_classes, ClassList, BUTTON_FAMILY},
    config::{ControlConfig, ElementKind, NativeType},
    gate::{GateDecision, InteractionGate},
};

/// Listener notified once per accepted activation.
pub type Listener = Rc<dyn Fn(&ActivationEvent)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Input channel an activation arrived through.
pub enum ActivationSource {
    /// Mouse, touch, or pen click.
    Pointer,
    /// Keyboard activation (Enter/Space).
    Keyboard,
    /// Activation raised by code rather than a user gesture.
    Programmatic,
}

/// Normalized event delivered to listeners for an accepted activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationEvent {
    /// Clock time of the accepted activation.
    pub at: Duration,
    /// Input channel.
    pub source: ActivationSource,
    /// Element kind the control was rendered as.
    pub tag: ElementKind,
}

/// Static identity of a control family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlIdentity {
    /// Class family prefix.
    pub family: &'static str,
    /// Element kind that carries native pressable attributes.
    pub native_kind: ElementKind,
    /// Native type used when the config does not pick one.
    pub default_native_type: NativeType,
}

/// Identity of the Warm UI button.
pub const BUTTON_IDENTITY: ControlIdentity = ControlIdentity {
    family: BUTTON_FAMILY,
    native_kind: ElementKind::Button,
    default_native_type: NativeType::Button,
};

impl ControlIdentity {
    /// Baseline configuration for this identity.
    pub fn default_config(&self) -> ControlConfig {
        ControlConfig {
            tag: self.native_kind,
            native_type: self.default_native_type,
            ..ControlConfig::default()
        }
    }

    /// Render output for `config` under this identity.
    pub fn render(&self, config: &ControlConfig) -> RenderedControl {
        let native = if config.tag == self.native_kind {
            NativeAttributes {
                native_type: Some(config.native_type),
                disabled: config.disabled || config.loading,
                autofocus: config.autofocus,
            }
        } else {
            NativeAttributes::default()
        };
        RenderedControl {
            tag: config.tag,
            classes: resolve_family_classes(self.family, config),
            native,
        }
    }
}

/// Attributes only a native pressable element understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NativeAttributes {
    /// `type` attribute.
    pub native_type: Option<NativeType>,
    /// `disabled` attribute, set while disabled or loading.
    pub disabled: bool,
    /// `autofocus` attribute.
    pub autofocus: bool,
}

impl NativeAttributes {
    /// Returns whether no attribute would be emitted.
    pub fn is_empty(&self) -> bool {
        self.type_attribute().is_none() && !self.disabled && !self.autofocus
    }

    /// Value of the `type` attribute, if any.
    pub fn type_attribute(&self) -> Option<&'static str> {
        self.native_type.and_then(NativeType::token)
    }

    /// Attribute name/value pairs in emission order; boolean attributes carry an empty value.
    pub fn pairs(&self) -> Vec<(&'static str, &'static str)> {
        let mut pairs = Vec::new();
        if let Some(value) = self.type_attribute() {
            pairs.push(("type", value));
        }
        if self.disabled {
            pairs.push(("disabled", ""));
        }
        if self.autofocus {
            pairs.push(("autofocus", ""));
        }
        pairs
    }
}

/// Render output consumed by the markup layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedControl {
    /// Element kind of the root element.
    pub tag: ElementKind,
    /// Class list of the root element.
    pub classes: ClassList,
    /// Native attributes; empty unless `tag` is the native pressable kind.
    pub native: NativeAttributes,
}

/// Accepted activation waiting to be handed to listeners.
pub struct Delivery {
    event: ActivationEvent,
    listeners: Vec<Listener>,
}

impl fmt::Debug for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Delivery")
            .field("event", &self.event)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Delivery {
    /// Event every listener receives.
    pub fn event(&self) -> &ActivationEvent {
        &self.event
    }

    /// Notifies the snapshotted listeners in registration order.
    pub fn notify(&self) {
        for listener in &self.listeners {
            listener(&self.event);
        }
    }
}

/// One control instance. Owns its gate state and listener list.
pub struct Control {
    identity: ControlIdentity,
    config: ControlConfig,
    gate: InteractionGate,
    listeners: Vec<Listener>,
}

impl fmt::Debug for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Control")
            .field("identity", &self.identity)
            .field("config", &self.config)
            .field("gate", &self.gate)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Control {
    /// Creates a control with the identity's baseline configuration.
    pub fn new(identity: ControlIdentity) -> Self {
        Self {
            config: identity.default_config(),
            identity,
            gate: InteractionGate::new(),
            listeners: Vec::new(),
        }
    }

    /// Creates a Warm UI button control.
    pub fn button() -> Self {
        Self::new(BUTTON_IDENTITY)
    }

    /// Identity of this control.
    pub fn identity(&self) -> ControlIdentity {
        self.identity
    }

    /// Configuration of the most recent render.
    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    /// Time of the last accepted activation.
    pub fn last_fired_at(&self) -> Option<Duration> {
        self.gate.last_fired_at()
    }

    /// Adopts `config` for subsequent activations and returns the render output.
    pub fn render(&mut self, config: ControlConfig) -> RenderedControl {
        self.config = config;
        self.rendered()
    }

    /// Render output for the current configuration.
    pub fn rendered(&self) -> RenderedControl {
        self.identity.render(&self.config)
    }

    /// Registers `listener`; returns `false` when the same listener is already registered.
    pub fn add_listener(&mut self, listener: Listener) -> bool {
        if self.position_of(&listener).is_some() {
            return false;
        }
        self.listeners.push(listener);
        true
    }

    /// Removes `listener`; returns `false` when it was not registered.
    pub fn remove_listener(&mut self, listener: &Listener) -> bool {
        match self.position_of(listener) {
            Some(index) => {
                self.listeners.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Runs the gate for an activation at `now` and notifies listeners in registration order
    /// when it is allowed. Dropped activations are neither queued nor retried.
    pub fn on_user_activate(&mut self, now: Duration, source: ActivationSource) -> GateDecision {
        let (decision, delivery) = self.admit(now, source);
        if let Some(delivery) = delivery {
            delivery.notify();
        }
        decision
    }

    /// Runs the gate without notifying anyone.
    ///
    /// An allowed activation yields a [`Delivery`] holding the event and a snapshot of the
    /// listeners, so callers that keep the control behind a `RefCell` can release the borrow
    /// before listeners run.
    pub fn admit(
        &mut self,
        now: Duration,
        source: ActivationSource,
    ) -> (GateDecision, Option<Delivery>) {
        let decision = self.gate.attempt_activate(&self.config, now);
        if !decision.is_allowed() {
            return (decision, None);
        }
        let delivery = Delivery {
            event: ActivationEvent {
                at: now,
                source,
                tag: self.config.tag,
            },
            listeners: self.listeners.clone(),
        };
        (decision, Some(delivery))
    }

    fn position_of(&self, listener: &Listener) -> Option<usize> {
        let target = Rc::as_ptr(listener) as *const ();
        self.listeners
            .iter()
            .position(|existing| Rc::as_ptr(existing) as *const () == target)
    }
}
