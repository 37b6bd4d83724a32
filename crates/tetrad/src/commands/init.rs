//! Scaffold a site: config plus one sample document per section.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command in the current directory.
pub async fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing tetrad site...");

    scaffold(Path::new("."), yes)?;

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'tetrad serve' to preview the page.");

    Ok(())
}

/// Write `site.toml` and the sample documents. Existing files are kept
/// unless `yes` is set.
fn scaffold(root: &Path, yes: bool) -> Result<()> {
    let contents_dir = root.join("contents");
    fs::create_dir_all(&contents_dir).context("Failed to create contents directory")?;

    write_file(&root.join("site.toml"), "site.toml", DEFAULT_CONFIG, yes)?;

    for (name, body) in SAMPLES {
        let display = format!("contents/{}", name);
        write_file(&contents_dir.join(name), &display, body, yes)?;
    }

    Ok(())
}

fn write_file(path: &Path, label: &str, body: &str, yes: bool) -> Result<()> {
    if path.exists() && !yes {
        tracing::warn!("{} already exists. Use --yes to overwrite.", label);
        return Ok(());
    }
    fs::write(path, body).with_context(|| format!("Failed to write {}", label))?;
    tracing::info!("Created {}", label);
    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Tetrad site configuration

[site]
# Document title
title = "Tetrad AI"

# Directory holding one JSON document per section
contents = "contents"

# Fetch documents from a deployed site instead, e.g. "https://tetradai.com"
# remote = "https://tetradai.com"

# Images and stylesheets served by the preview server
assets = "public"

# Where `tetrad render` writes index.html
output = "dist"

# styles = ["/css/main.css"]

[contact]
# Endpoint the contact form posts to when scripts are unavailable
relay_endpoint = "https://formspree.io/f/mqalbbek"

[server]
port = 4000
"#;

const SAMPLES: [(&str, &str); 8] = [
    ("hero.json", HERO),
    ("solutions.json", SOLUTIONS),
    ("team.json", TEAM),
    ("portfolio.json", PORTFOLIO),
    ("culture.json", CULTURE),
    ("blog.json", BLOG),
    ("contact.json", CONTACT),
    ("footer.json", FOOTER),
];

const HERO: &str = r##"{
  "logo": "/images/logo.png",
  "tagline": "Four Dimensions of Data Excellence",
  "description": "We combine data engineering, analytics, machine learning and strategy to turn your data into decisions.",
  "cta_text": "Explore Our Solutions",
  "cta_link": "#solutions"
}
"##;

const SOLUTIONS: &str = r##"{
  "title": "Our Solutions",
  "description": "End-to-end services across the data lifecycle.",
  "solutions": [
    {
      "icon": "fas fa-database",
      "title": "Data Engineering",
      "subtitle": "Foundations that scale",
      "services": [
        { "name": "Pipelines", "description": "Batch and streaming ingestion." },
        { "name": "Warehousing", "description": "Modern lakehouse design." }
      ],
      "technologies": ["Spark", "Kafka", "dbt"]
    }
  ]
}
"##;

const TEAM: &str = r##"{
  "title": "Who We Are",
  "description": "A small team of engineers and scientists.",
  "members": [
    {
      "name": "Ada Lovelace",
      "avatar": "/images/team/ada.jpg",
      "position": "Founder",
      "specialization": "Analytical Engines",
      "bio": "Writes the first algorithms.",
      "linkedin": "https://www.linkedin.com/in/ada"
    }
  ]
}
"##;

const PORTFOLIO: &str = r##"{
  "title": "Our Portfolio",
  "description": "Selected work across industries.",
  "categories": [
    {
      "icon": "fas fa-chart-line",
      "title": "Analytics",
      "projects": [
        {
          "name": "Orbit",
          "tagline": "Realtime demand forecasting",
          "description": "Forecasts for a regional retailer.",
          "technologies": ["Python", "Prophet"]
        }
      ]
    }
  ]
}
"##;

const CULTURE: &str = r##"{
  "title": "Tetrad Family Culture",
  "subtitle": "Our Constellation of Values",
  "description": "How we work together.",
  "teamPhoto": "/images/team/team.jpg",
  "values": [
    { "icon": "fas fa-star", "title": "Curiosity", "description": "Ask better questions." }
  ]
}
"##;

const BLOG: &str = r##"{
  "title": "Our Blog",
  "subtitle": "Exploring the Data Cosmos",
  "description": "Notes from the field.",
  "stayTuned": "Stay tuned for our first posts!"
}
"##;

const CONTACT: &str = r##"{
  "title": "Connect With Us",
  "description": "Tell us about your data challenges.",
  "email": "hello@tetradai.com"
}
"##;

const FOOTER: &str = r##"{
  "description": "Transforming businesses through cutting-edge AI solutions and data engineering excellence."
}
"##;
