use console::style;

use crate::cli::WorkflowResult;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Summary printed after a successful run
pub fn display_result(result: &WorkflowResult, manifest: &str) {
    match result.previous {
        Some(previous) => display_status(&format!(
            "Latest release on {}.x: {}",
            result.baseline,
            style(previous).dim()
        )),
        None => display_status(&format!("First release on {}.x", result.baseline)),
    }
    display_success(&format!(
        "Set {} version to {}",
        manifest,
        style(result.version).bold()
    ));
    display_success(&format!("Created tag: {}", style(&result.tag).green()));
}
