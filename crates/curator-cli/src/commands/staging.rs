use anyhow::Result;
use curator_application::CuratorApp;
use curator_core::decision::DecisionStore;
use curator_core::photo::StagingPage;

/// One line per staged photo, preceded by a summary.
pub fn format_listing(store: &DecisionStore) -> String {
    if store.is_empty() {
        return "No photos in staging".to_string();
    }

    let mut lines = vec![format!(
        "{} staged photo(s), {} total remaining",
        store.len(),
        store.total_remaining()
    )];
    lines.extend(store.photos().iter().enumerate().map(|(i, photo)| {
        format!(
            "  [{}] {}  {:.2} MB  {}",
            i + 1,
            photo.filename,
            photo.size_megabytes(),
            photo.ulid
        )
    }));
    lines.join("\n")
}

/// The loaded page in the same shape the staging endpoint returns.
pub fn page_json(store: &DecisionStore) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&StagingPage {
        photos: store.photos().to_vec(),
        total_remaining: store.total_remaining(),
    })
}

pub async fn list(app: &CuratorApp, json: bool) -> Result<()> {
    app.auth().hydrate().await?;
    app.auth().require_authenticated()?;

    app.review().refresh().await?;
    let store = app.review().snapshot();

    if json {
        println!("{}", page_json(&store)?);
    } else {
        println!("{}", format_listing(&store));
    }
    Ok(())
}
