//! Markdown rendering of parsed example sources.

use crate::extract::ExampleSource;

/// Render the Markdown page for the example named `name`.
///
/// With a description the page carries the heading (title plus a " (C)"
/// suffix marking the language), the prose paragraphs, the remaining source
/// in a fenced code block, and the directory trailer. Without one, only the
/// trailer is emitted.
pub fn render_page(name: &str, source: &ExampleSource) -> String {
    let mut page = String::new();

    if let Some(desc) = &source.description {
        page.push_str(&format!("# {} (C)\n", desc.title));
        for paragraph in &desc.paragraphs {
            page.push('\n');
            page.push_str(paragraph);
            page.push('\n');
        }

        page.push_str("\n```c\n");
        page.push_str(&source.code);
        if !source.code.ends_with('\n') {
            page.push('\n');
        }
        page.push_str("```\n\n");
    }

    page.push_str(&trailer(name));
    page.push('\n');
    page
}

/// The fixed trailer naming the example's directory.
fn trailer(name: &str) -> String {
    format!("This example is located in the directory `examples/{name}`")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{Description, ExampleSource};

    #[test]
    fn test_render_full_page() {
        let source = ExampleSource {
            description: Some(Description {
                title: "Restarting simulations".into(),
                paragraphs: vec!["How to restart from a binary file.".into()],
            }),
            code: "int main(void) { return 0; }".into(),
        };
        let page = render_page("restarting_simulation", &source);

        assert!(page.starts_with("# Restarting simulations (C)\n"));
        assert!(page.contains("\nHow to restart from a binary file.\n"));
        assert!(page.contains("```c\nint main(void) { return 0; }\n```"));
        assert!(page.ends_with(
            "This example is located in the directory `examples/restarting_simulation`\n"
        ));
    }

    #[test]
    fn test_render_without_description_is_trailer_only() {
        let source = ExampleSource {
            description: None,
            code: String::new(),
        };
        let page = render_page("mystery", &source);
        assert_eq!(
            page,
            "This example is located in the directory `examples/mystery`\n"
        );
    }
}
