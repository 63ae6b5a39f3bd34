//! Lifetime-free Dioxus wrappers for the Pico.css elements the dashboard uses.
//! Pico itself is linked once from `App`.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container, `<main class="container">`.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A responsive grid, `<div class="grid">`.
#[component]
pub fn Grid(children: Element) -> Element {
    rsx! { div { class: "grid", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content, rendered as `<article>`.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Copy, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
}

impl ButtonType {
    fn class(&self, outline: bool) -> &'static str {
        match (self, outline) {
            (ButtonType::Primary, false) => "",
            (ButtonType::Primary, true) => "outline",
            (ButtonType::Secondary, false) => "secondary",
            (ButtonType::Secondary, true) => "secondary outline",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
    #[props(optional)]
    title: Option<String>,
}

pub fn Button(props: ButtonProps) -> Element {
    let class_str = props.button_type.class(props.outline);
    rsx! {
        button {
            class: "{class_str}",
            disabled: props.disabled,
            title: props.title.clone(),
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct SwitchProps {
    label: String,
    checked: bool,
    on_change: EventHandler<bool>,
}

/// A labeled on/off toggle (`<input type="checkbox" role="switch">`).
pub fn Switch(props: SwitchProps) -> Element {
    rsx! {
        label {
            input {
                r#type: "checkbox",
                role: "switch",
                checked: props.checked,
                onchange: move |evt| props.on_change.call(evt.checked()),
            }
            "{props.label}"
        }
    }
}
