//! Page shell that wraps the rendered section regions.

use minijinja::{context, Environment};

/// One section's slice of the page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Region {
    /// Custom element tag name
    pub tag: String,
    /// Rendered markup
    pub html: String,
}

/// Context for rendering the page shell.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PageContext {
    /// Document title
    pub title: String,
    /// Section regions in page order
    pub regions: Vec<Region>,
    /// Paths to CSS stylesheets to include
    pub styles: Vec<String>,
    /// Inline scripts appended to the body
    pub scripts: Vec<String>,
}

/// Renders the page shell with minijinja.
pub struct PageTemplate {
    env: Environment<'static>,
}

impl PageTemplate {
    /// Create the page template.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        env.add_template("page.html", PAGE_TEMPLATE)
            .expect("Failed to add page template");

        Self { env }
    }

    /// Render the full document.
    pub fn render(&self, page: &PageContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("page.html")?;

        tmpl.render(context! {
            title => &page.title,
            regions => &page.regions,
            styles => &page.styles,
            scripts => &page.scripts,
        })
    }
}

impl Default for PageTemplate {
    fn default() -> Self {
        Self::new()
    }
}

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }}</title>
  {% for style in styles %}
  <link rel="stylesheet" href="{{ style }}">
  {% endfor %}
</head>
<body>
  {% for region in regions %}
  <{{ region.tag }}>
{{ region.html | safe }}
  </{{ region.tag }}>
  {% endfor %}
  {% for script in scripts %}
  <script>{{ script | safe }}</script>
  {% endfor %}
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_regions_in_their_tags() {
        let page = PageContext {
            title: "Tetrad AI".to_string(),
            regions: vec![
                Region {
                    tag: "hero-section".to_string(),
                    html: "<section class=\"hero\"></section>".to_string(),
                },
                Region {
                    tag: "footer-section".to_string(),
                    html: "<footer></footer>".to_string(),
                },
            ],
            styles: vec![],
            scripts: vec![],
        };

        let html = PageTemplate::new().render(&page).unwrap();

        assert!(html.contains("<title>Tetrad AI</title>"));
        assert!(html.contains("<hero-section>\n<section class=\"hero\"></section>"));
        assert!(html.find("hero-section").unwrap() < html.find("footer-section").unwrap());
    }

    #[test]
    fn includes_styles_and_scripts() {
        let page = PageContext {
            title: "T".to_string(),
            regions: vec![],
            styles: vec!["css/main.css".to_string()],
            scripts: vec!["console.log(1)".to_string()],
        };

        let html = PageTemplate::new().render(&page).unwrap();

        assert!(html.contains("main.css"));
        assert!(html.contains("<script>console.log(1)</script>"));
    }
}
