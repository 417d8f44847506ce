use tracing::{debug, error};

use purchase_analytics::config::JobPaths;
use purchase_analytics::pipeline;

fn main() {
    // Fixed verbosity; the run takes no flags, env vars, or config files.
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_target(false)
        .init();

    let paths = JobPaths::from_working_dir();
    debug!(
        "reading {} and {}",
        paths.order_products.display(),
        paths.products.display()
    );

    match pipeline::run(&paths) {
        Ok(summary) => {
            println!(
                "report written | order_lines={} products={} departments={} output={}",
                summary.order_lines,
                summary.products,
                summary.departments,
                paths.report.display()
            );
        }
        Err(e) => {
            error!("Fatal error: {}", e);
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
