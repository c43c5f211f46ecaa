use leptos::*;
use warm_ui_core::{resolve_icon_classes, IconConfig, IconRef, Variant};

pub(crate) fn merge_layout_class(base: String, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base,
    }
}

pub(crate) fn render_icon(config: &IconConfig, layout_class: Option<&'static str>) -> View {
    let class = merge_layout_class(resolve_icon_classes(config).to_string(), layout_class);
    view! {
        <i
            class=class
            style=config.style()
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=config.icon.as_str().to_string()
        ></i>
    }
    .into_view()
}

#[component]
/// Font Awesome glyph with Warm UI tone and spin tokens.
pub fn Icon(
    #[prop(into)] icon: IconRef,
    #[prop(optional)] tone: Variant,
    #[prop(optional)] spin: bool,
    #[prop(optional, into)] color: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let config = IconConfig {
        icon,
        tone,
        spin,
        color,
    };
    render_icon(&config, layout_class)
}
