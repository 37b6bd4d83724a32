//! Section templates, compiled once per process.

use std::sync::OnceLock;

use minijinja::Environment;
use serde::Serialize;

use crate::sections::{blog, contact, culture, footer, hero, navbar, portfolio, solutions, team};
use crate::traits::RenderError;

const TEMPLATES: &[(&str, &str)] = &[
    ("navbar.html", navbar::TEMPLATE),
    ("hero.html", hero::TEMPLATE),
    ("solutions.html", solutions::TEMPLATE),
    ("team.html", team::TEMPLATE),
    ("portfolio.html", portfolio::TEMPLATE),
    ("culture.html", culture::TEMPLATE),
    ("blog.html", blog::TEMPLATE),
    ("contact.html", contact::TEMPLATE),
    ("footer.html", footer::TEMPLATE),
];

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn environment() -> &'static Environment<'static> {
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        for (name, source) in TEMPLATES {
            env.add_template(name, source)
                .expect("Failed to add section template");
        }

        env
    })
}

/// Render a section template. Names ending in `.html` are autoescaped.
pub fn render_template<S: Serialize>(name: &str, view: &S) -> Result<String, RenderError> {
    let tmpl = environment().get_template(name)?;
    Ok(tmpl.render(view)?)
}
