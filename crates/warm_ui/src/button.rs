use std::{cell::RefCell, rc::Rc, time::Duration};

use leptos::ev::MouseEvent;
use leptos::*;
use warm_ui_core::{
    ActivationEvent, ActivationSource, Clock, Control, ControlConfig, ElementKind, GateDecision,
    GroupDefaults, IconConfig, IconRef, Listener, NativeType, SharedClock, Size, Variant,
    BUTTON_IDENTITY, DEFAULT_LOADING_ICON, DEFAULT_THROTTLE_DURATION,
};

use crate::{
    icon::{merge_layout_class, render_icon},
    PerformanceClock,
};

/// Defaults a [`ButtonGroup`] pushes onto nested [`Button`]s through context.
#[derive(Debug, Clone, Copy)]
pub struct ButtonGroupContext {
    /// Size forced onto members.
    pub size: Option<Size>,
    /// Variant forced onto members.
    pub variant: Option<Variant>,
    /// Disables every member while true.
    pub disabled: Signal<bool>,
}

impl ButtonGroupContext {
    /// Snapshot of the group values, tracked when read inside a reactive scope.
    pub fn defaults(&self) -> GroupDefaults {
        GroupDefaults {
            size: self.size,
            variant: self.variant,
            disabled: self.disabled.get(),
        }
    }
}

fn leading_icon(config: &ControlConfig) -> Option<View> {
    if config.loading {
        let spinner = IconConfig {
            spin: true,
            ..IconConfig::new(config.loading_icon.clone())
        };
        return Some(render_icon(&spinner, Some("loading-icon")));
    }
    config
        .icon
        .as_ref()
        .map(|icon| render_icon(&IconConfig::new(icon.clone()), None))
}

/// Gates one click against the latest `config`, then notifies listeners once `control` is no
/// longer borrowed, so a listener may activate the same control again.
fn activate(
    control: &RefCell<Control>,
    config: ControlConfig,
    now: Duration,
    source: ActivationSource,
) -> GateDecision {
    let (decision, delivery) = {
        let mut control = control.borrow_mut();
        control.render(config);
        control.admit(now, source)
    };
    if let Some(delivery) = delivery {
        delivery.notify();
    }
    decision
}

/// Returns whether a click should cancel the element's default action. Links and containers
/// have no native `disabled`, so refused clicks must not navigate.
fn cancels_default(tag: ElementKind, decision: GateDecision) -> bool {
    !decision.is_allowed() && tag != ElementKind::Button
}

/// Renders one gated control around `config`.
///
/// The root tag is fixed at creation; every other config field stays reactive. The gate sees
/// the latest config on each click, and only allowed clicks reach `on_click`.
pub(crate) fn render_button(
    config: Signal<ControlConfig>,
    on_click: Option<Callback<ActivationEvent>>,
    clock: SharedClock,
    content: Option<View>,
    layout_class: Option<&'static str>,
) -> View {
    let control = Rc::new(RefCell::new(Control::button()));
    if let Some(on_click) = on_click {
        let listener: Listener =
            Rc::new(move |event: &ActivationEvent| on_click.call(event.clone()));
        control.borrow_mut().add_listener(listener);
    }

    // Never borrows `control`: listeners may write to `config` while being notified.
    let rendered = create_memo(move |_| config.with(|config| BUTTON_IDENTITY.render(config)));
    let tag = config.with_untracked(|config| config.tag);

    let handle_click = move |ev: MouseEvent| {
        let source = if ev.detail() == 0 {
            ActivationSource::Keyboard
        } else {
            ActivationSource::Pointer
        };
        let decision = activate(&control, config.get_untracked(), clock.now(), source);
        if cancels_default(tag, decision) {
            ev.prevent_default();
        }
    };

    let class = move || {
        merge_layout_class(rendered.with(|rendered| rendered.classes.to_string()), layout_class)
    };
    let body = view! {
        {move || config.with(leading_icon)}
        {content.map(|content| view! { <span>{content}</span> })}
    };

    match tag {
        ElementKind::Button => view! {
            <button
                class=class
                type=move || rendered.with(|rendered| rendered.native.type_attribute())
                disabled=move || rendered.with(|rendered| rendered.native.disabled)
                autofocus=move || rendered.with(|rendered| rendered.native.autofocus)
                data-ui-primitive="true"
                data-ui-kind="button"
                on:click=handle_click
            >
                {body}
            </button>
        }
        .into_view(),
        ElementKind::Link => view! {
            <a class=class data-ui-primitive="true" data-ui-kind="button" on:click=handle_click>
                {body}
            </a>
        }
        .into_view(),
        ElementKind::Container => view! {
            <div class=class data-ui-primitive="true" data-ui-kind="button" on:click=handle_click>
                {body}
            </div>
        }
        .into_view(),
    }
}

#[component]
/// Warm UI button: declarative variant, size, and shape props with gated click emission.
///
/// `on_click` fires only for clicks that pass the disabled, loading, and throttle gates.
/// Inside a [`ButtonGroup`], the group's size, variant, and disabled values take precedence.
pub fn Button(
    #[prop(optional)] variant: Variant,
    #[prop(optional)] size: Size,
    #[prop(optional)] plain: bool,
    #[prop(optional)] round: bool,
    #[prop(optional)] circle: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(default = true)] use_throttle: bool,
    #[prop(default = DEFAULT_THROTTLE_DURATION)] throttle_duration: Duration,
    #[prop(default = NativeType::Button)] native_type: NativeType,
    #[prop(optional)] tag: ElementKind,
    #[prop(optional)] autofocus: bool,
    #[prop(optional, into)] icon: Option<IconRef>,
    #[prop(optional, into)] loading_icon: Option<IconRef>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] clock: Option<SharedClock>,
    #[prop(optional)] on_click: Option<Callback<ActivationEvent>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let group = use_context::<ButtonGroupContext>();
    let base = ControlConfig {
        variant,
        size,
        plain,
        round,
        circle,
        disabled: false,
        loading: false,
        use_throttle,
        throttle_duration,
        native_type,
        tag,
        autofocus,
        icon,
        loading_icon: loading_icon.unwrap_or_else(|| IconRef::new(DEFAULT_LOADING_ICON)),
    };
    let config = Signal::derive(move || {
        let config = ControlConfig {
            disabled: disabled.get(),
            loading: loading.get(),
            ..base.clone()
        };
        match group {
            Some(group) => group.defaults().apply(config),
            None => config,
        }
    });
    let clock = clock.unwrap_or_else(|| Rc::new(PerformanceClock::new()));
    render_button(
        config,
        on_click,
        clock,
        children.map(|children| children().into_view()),
        layout_class,
    )
}

#[component]
/// Horizontal group sharing size, variant, and disabled state with nested buttons.
pub fn ButtonGroup(
    #[prop(optional)] size: Option<Size>,
    #[prop(optional)] variant: Option<Variant>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    provide_context(ButtonGroupContext {
        size,
        variant,
        disabled: Signal::derive(move || disabled.get()),
    });
    view! {
        <div
            class=merge_layout_class("warm-button-group".to_string(), layout_class)
            role="group"
            data-ui-primitive="true"
            data-ui-kind="button-group"
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use warm_ui_core::ManualClock;

    use super::*;

    #[test]
    fn group_context_reads_the_live_disabled_signal() {
        let runtime = create_runtime();
        let disabled = create_rw_signal(false);
        let group = ButtonGroupContext {
            size: Some(Size::Small),
            variant: None,
            disabled: disabled.into(),
        };

        let member = ControlConfig {
            variant: Variant::Warning,
            ..ControlConfig::default()
        };
        let merged = group.defaults().apply(member.clone());
        assert_eq!(merged.size, Size::Small);
        assert_eq!(merged.variant, Variant::Warning);
        assert!(!merged.disabled);

        disabled.set(true);
        assert!(group.defaults().apply(member).disabled);
        runtime.dispose();
    }

    fn callback_control(accepted: RwSignal<Vec<u128>>) -> Rc<RefCell<Control>> {
        let on_click = Callback::new(move |event: ActivationEvent| {
            accepted.update(|log| log.push(event.at.as_millis()));
        });
        let control = Rc::new(RefCell::new(Control::button()));
        let listener: Listener =
            Rc::new(move |event: &ActivationEvent| on_click.call(event.clone()));
        control.borrow_mut().add_listener(listener);
        control
    }

    #[test]
    fn clicks_gate_against_the_config_current_at_click_time() {
        let runtime = create_runtime();
        let accepted = create_rw_signal(Vec::new());
        let control = callback_control(accepted);
        let clock = ManualClock::new();
        let config = create_rw_signal(ControlConfig::default().throttled_for_millis(1_000));

        let click = |clock: &ManualClock| {
            activate(&control, config.get_untracked(), clock.now(), ActivationSource::Pointer)
        };

        assert_eq!(click(&clock), GateDecision::Allowed);
        clock.set(Duration::from_millis(300));
        assert_eq!(click(&clock), GateDecision::DroppedThrottled);

        config.update(|config| config.use_throttle = false);
        assert_eq!(click(&clock), GateDecision::Allowed);

        config.update(|config| config.disabled = true);
        clock.advance(Duration::from_secs(5));
        assert_eq!(click(&clock), GateDecision::DroppedDisabled);

        assert_eq!(accepted.get_untracked(), vec![0, 300]);
        runtime.dispose();
    }

    #[test]
    fn refused_link_clicks_cancel_navigation() {
        let runtime = create_runtime();
        let accepted = create_rw_signal(Vec::new());
        let control = callback_control(accepted);
        let link = ControlConfig {
            tag: ElementKind::Link,
            loading: true,
            ..ControlConfig::default()
        };

        let decision = activate(&control, link.clone(), Duration::ZERO, ActivationSource::Pointer);
        assert_eq!(decision, GateDecision::DroppedLoading);
        assert!(cancels_default(ElementKind::Link, decision));
        assert!(accepted.get_untracked().is_empty());

        let ready = ControlConfig {
            loading: false,
            ..link
        };
        let decision = activate(&control, ready, Duration::ZERO, ActivationSource::Keyboard);
        assert!(!cancels_default(ElementKind::Link, decision));
        assert!(!cancels_default(ElementKind::Button, GateDecision::DroppedDisabled));
        assert_eq!(accepted.get_untracked(), vec![0]);
        runtime.dispose();
    }

    #[test]
    fn listeners_may_click_the_same_control_again() {
        let runtime = create_runtime();
        let control = Rc::new(RefCell::new(Control::button()));
        let nested = create_rw_signal(None);
        let weak = Rc::downgrade(&control);
        let listener: Listener = Rc::new(move |event: &ActivationEvent| {
            if let Some(control) = weak.upgrade() {
                let decision = activate(
                    &control,
                    ControlConfig::default(),
                    event.at + Duration::from_millis(10),
                    ActivationSource::Programmatic,
                );
                nested.set(Some(decision));
            }
        });
        control.borrow_mut().add_listener(listener);

        let decision = activate(
            &control,
            ControlConfig::default(),
            Duration::ZERO,
            ActivationSource::Pointer,
        );

        assert_eq!(decision, GateDecision::Allowed);
        assert_eq!(nested.get_untracked(), Some(GateDecision::DroppedThrottled));
        runtime.dispose();
    }
}
