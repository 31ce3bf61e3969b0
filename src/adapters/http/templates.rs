use std::sync::Arc;
use tera::Tera;

// Compiled into the binary so the server does not depend on its working
// directory.
const TEMPLATES: &[(&str, &str)] = &[
  (
    "base.html.tera",
    include_str!("../../../templates/base.html.tera"),
  ),
  (
    "pages/home.html.tera",
    include_str!("../../../templates/pages/home.html.tera"),
  ),
  (
    "pages/invoice.html.tera",
    include_str!("../../../templates/pages/invoice.html.tera"),
  ),
  (
    "pages/not_found.html.tera",
    include_str!("../../../templates/pages/not_found.html.tera"),
  ),
];

/// Template engine wrapper for rendering HTML templates
#[derive(Clone)]
pub struct TemplateEngine {
  tera: Arc<Tera>,
}

impl TemplateEngine {
  /// Create a new template engine instance
  pub fn new() -> Result<Self, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TEMPLATES.iter().copied())?;
    tera.autoescape_on(vec![".html.tera", ".html"]);

    Ok(Self {
      tera: Arc::new(tera),
    })
  }

  /// Render a template with the given context
  pub fn render(&self, template: &str, context: &tera::Context) -> Result<String, tera::Error> {
    self.tera.render(template, context)
  }
}
