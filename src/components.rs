//! Server-rendered view components.

use dioxus::prelude::*;

pub const ERROR_LABEL: &str = "Error";

// Utility classes referenced by the components; theme.rs emits rules for each.
pub const CONTAINER_CLASSES: &str = "flex flex-col items-center justify-center min-h-64 text-center";
pub const LABEL_CLASSES: &str = "text-lg font-medium";
pub const MESSAGE_CLASSES: &str = "text-gray-600";

/// Centered block with an "Error" label above the message.
#[component]
pub fn ErrorDisplay(message: String) -> Element {
    rsx! {
        div { class: CONTAINER_CLASSES,
            p { class: LABEL_CLASSES, "Error" }
            p { class: MESSAGE_CLASSES, "{message}" }
        }
    }
}

/// Renders [`ErrorDisplay`] to an HTML fragment. Message text is escaped.
pub fn render_error(message: &str) -> String {
    dioxus_ssr::render_element(rsx! {
        ErrorDisplay { message: message.to_string() }
    })
}

/// Full HTML document around [`render_error`], linking the theme stylesheet.
pub fn render_error_page(message: &str, stylesheet_href: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{ERROR_LABEL}</title>\n<link rel=\"stylesheet\" href=\"{stylesheet_href}\">\n\
         </head>\n<body>\n{}\n</body>\n</html>\n",
        render_error(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_label_and_message() {
        let html = render_error("Network unreachable");
        assert!(html.contains("Error"));
        assert!(html.contains("Network unreachable"));
    }

    #[test]
    fn label_precedes_message() {
        let html = render_error("disk full");
        let label = html.find("Error").unwrap();
        let message = html.find("disk full").unwrap();
        assert!(label < message);
    }

    #[test]
    fn empty_message_still_renders_label() {
        let html = render_error("");
        assert!(html.contains("Error"));
        assert!(html.contains(MESSAGE_CLASSES));
    }

    #[test]
    fn container_is_centered_with_min_height() {
        let html = render_error("x");
        assert!(html.contains("justify-center"));
        assert!(html.contains("items-center"));
        assert!(html.contains("min-h-64"));
        assert!(html.contains("font-medium"));
    }

    #[test]
    fn message_markup_is_escaped() {
        let html = render_error("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script"));
    }

    #[test]
    fn page_links_stylesheet() {
        let page = render_error_page("gone", "/assets/theme.css");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("href=\"/assets/theme.css\""));
        assert!(page.contains("gone"));
    }
}
