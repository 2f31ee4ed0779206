use std::fs;

use botlist::api::ApiDoc;
use utoipa::OpenApi;

fn main() -> anyhow::Result<()> {
    let doc = ApiDoc::openapi();
    fs::write("./auto-openapi.json", doc.to_pretty_json()?)?;
    fs::write("./auto-openapi.yml", doc.to_yaml()?)?;
    Ok(())
}
