use anyhow::{Context, Result};
use folio::{Config, log};

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let site = config.site();
    log!("build"; "rendering site for {} into {}", site.brand, config.output.display());

    let report = folio::build(&site, &config.output, &config.posts, &config.projects)
        .context("Failed to build site")?;

    for page in &report.pages {
        log!("build"; "generated {}", page.display());
    }
    log!("build"; "{} pages written", report.pages.len());

    if !config.no_open {
        let index = config.output.join("index.html");
        log!("open"; "{}", index.display());
        if let Err(e) = open::that(&index) {
            log!("warn"; "failed to open browser: {:#}", e);
        }
    }

    Ok(())
}
