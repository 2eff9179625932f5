//! HTML rendering of the link list.
//!
//! The template set is embedded in the binary and parsed once at startup,
//! so a broken template is a startup failure rather than a per-request
//! surprise. Rendering itself can still fail at request time (tera treats
//! undefined variables as errors); that failure stays local to the request.

use tera::Tera;
use thiserror::Error;

use crate::config::schema::LinksConfig;

/// Name of the page template inside the template set.
pub const LINKS_TEMPLATE: &str = "links.html";

const LINKS_TEMPLATE_SOURCE: &str = include_str!("../../templates/links.html");

/// Error type for template parsing and rendering.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to parse template set: {0}")]
    Parse(#[source] tera::Error),

    #[error("failed to render template '{name}': {source}")]
    Render {
        name: &'static str,
        #[source]
        source: tera::Error,
    },
}

/// Parse the embedded template set.
pub fn build_templates() -> Result<Tera, TemplateError> {
    let mut tera = Tera::default();
    tera.add_raw_template(LINKS_TEMPLATE, LINKS_TEMPLATE_SOURCE)
        .map_err(TemplateError::Parse)?;
    Ok(tera)
}

/// Render the link page from a configuration snapshot.
pub fn render_links(tera: &Tera, config: &LinksConfig) -> Result<String, TemplateError> {
    let context = tera::Context::from_serialize(config).map_err(|source| {
        TemplateError::Render {
            name: LINKS_TEMPLATE,
            source,
        }
    })?;

    tera.render(LINKS_TEMPLATE, &context)
        .map_err(|source| TemplateError::Render {
            name: LINKS_TEMPLATE,
            source,
        })
}
