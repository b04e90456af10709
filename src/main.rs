use anyhow::Result;
use clap::Parser;

use auto_version::cli::run_auto_version;
use auto_version::config;
use auto_version::git::Git2TagSource;
use auto_version::logging;
use auto_version::manifest::JsonManifest;
use auto_version::resolver::VersionResolver;
use auto_version::ui;

#[derive(clap::Parser)]
#[command(
    name = "auto-version",
    version,
    about = "Write the next unused patch version to package.json and tag it"
)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();
    logging::init();

    // The working directory is the project; everything below takes it explicitly
    let project_dir = std::env::current_dir()?;

    let config = match config::load_config(&project_dir) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };
    let pattern = match config.tag_pattern() {
        Ok(pattern) => pattern,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let manifest = JsonManifest::new(config.manifest_path(&project_dir));
    let tags = Git2TagSource::new(&project_dir);
    let resolver = VersionResolver::new(pattern);

    match run_auto_version(&manifest, &tags, &resolver) {
        Ok(result) => {
            ui::display_result(&result, &config.manifest.display().to_string());
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
