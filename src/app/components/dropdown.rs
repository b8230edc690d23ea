//! Click-to-open dropdown button.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DropdownButtonProps {
    /// Text on the trigger button
    pub label: String,
    /// Option labels, in display order
    pub options: Vec<String>,
    /// Called with the index of the chosen option
    pub on_select: EventHandler<usize>,
    /// Render with the menu already expanded
    #[props(default = false)]
    pub initially_open: bool,
}

/// Trigger button that reveals a list of options. Choosing an option closes
/// the menu before `on_select` fires.
#[component]
pub fn DropdownButton(props: DropdownButtonProps) -> Element {
    let mut open = use_signal(|| props.initially_open);
    let on_select = props.on_select;

    rsx! {
        div { class: "dropdown relative",
            button {
                r#type: "button",
                class: "dropdown-trigger uppercase font-medium text-slate-100 p-4",
                "aria-haspopup": "menu",
                "aria-expanded": if open() { "true" } else { "false" },
                onclick: move |_| open.set(!open()),
                "{props.label}"
            }
            if open() {
                ul { class: "dropdown-menu absolute right-0 bg-white shadow-lg rounded", role: "menu",
                    for (index, option) in props.options.iter().enumerate() {
                        li { key: "{index}",
                            button {
                                r#type: "button",
                                role: "menuitem",
                                class: "block w-full text-left px-4 py-2 text-slate-700 hover:bg-slate-100",
                                onclick: move |_| {
                                    open.set(false);
                                    on_select.call(index);
                                },
                                "{option}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn Harness(initially_open: bool) -> Element {
        rsx! {
            DropdownButton {
                label: "Account",
                options: vec!["Profile".to_string(), "Logout".to_string()],
                on_select: move |_| {},
                initially_open,
            }
        }
    }

    fn render(initially_open: bool) -> String {
        dioxus::ssr::render_element(rsx! { Harness { initially_open } })
    }

    #[test]
    fn closed_dropdown_renders_trigger_only() {
        let html = render(false);
        assert!(html.contains("Account"));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(!html.contains("Profile"));
        assert!(!html.contains("Logout"));
    }

    #[test]
    fn open_dropdown_lists_options_in_order() {
        let html = render(true);
        let profile = html.find("Profile").expect("Profile rendered");
        let logout = html.find("Logout").expect("Logout rendered");
        assert!(profile < logout);
        assert_eq!(html.matches(r#"role="menuitem""#).count(), 2);
    }
}
