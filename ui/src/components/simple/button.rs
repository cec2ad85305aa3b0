use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    fn get_classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "cta-button cta-primary",
            ButtonVariant::Secondary => "cta-button cta-secondary",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct Props {
    children: Element,
    #[props(optional, default)]
    variant: ButtonVariant,
    /// Render as a form submit button.
    #[props(optional, default)]
    submit: bool,
    #[props(optional, into)]
    class: String,
}

#[component]
pub fn Button(props: Props) -> Element {
    let variant_classes = props.variant.get_classes();
    let additional_classes = props.class;
    let kind = if props.submit { "submit" } else { "button" };

    rsx! {
        button {
            class: "{variant_classes} hover-grow press-shrink {additional_classes}",
            "type": kind,
            {props.children}
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct CtaLinkProps {
    children: Element,
    #[props(into)]
    href: String,
    #[props(optional, default)]
    variant: ButtonVariant,
    #[props(optional, into)]
    class: String,
}

/// Button-styled anchor for outbound links (ordering, directions, socials).
#[component]
pub fn CtaLink(props: CtaLinkProps) -> Element {
    let variant_classes = props.variant.get_classes();
    let additional_classes = props.class;
    let external = props.href.starts_with("http");

    rsx! {
        a {
            class: "{variant_classes} hover-grow press-shrink {additional_classes}",
            href: "{props.href}",
            target: if external { "_blank" },
            rel: if external { "noopener noreferrer" },
            {props.children}
        }
    }
}
