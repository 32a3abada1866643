//! Basic example demonstrating the ReportPortal API client.
//!
//! Run with:
//! ```
//! RP_UUID=your-token RP_ENDPOINT=https://rp.example.com/api/v1 RP_PROJECT=your-project \
//!     cargo run --example basic
//! ```

use reportportal_client::{
    get_launch, get_launches, FilterOption, Paging, ReportPortalClient,
};

#[tokio::main]
async fn main() -> reportportal_client::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating ReportPortal client...");
    let client = ReportPortalClient::from_env()?;
    println!("Connected to: {}", client.base_url());
    println!("Project: {}", client.project());

    // List first page of launches
    println!("\n--- Listing Launches (first page) ---");
    let filter = FilterOption::new().with_paging(Paging::new(1, 10));
    let page = get_launches(&client, Some(&filter), false).await?;
    println!(
        "Found {} launches (total: {})",
        page.len(),
        page.page.total_elements
    );

    for launch in &page {
        let status = if launch.is_finished() {
            "finished"
        } else {
            "in progress"
        };
        println!("  - {} #{} ({})", launch.name, launch.number, status);
    }

    // Get a specific launch (using the first one from the list)
    if let Some(first) = page.content.first() {
        println!("\n--- Getting Launch Details ---");
        let launch = get_launch(&client, &first.id).await?;
        println!("Launch: {} #{}", launch.name, launch.number);
        println!("  ID: {}", launch.id);
        println!("  Mode: {}", launch.mode);
        println!("  Started: {}", launch.start_time);
        if let Some(end_time) = launch.end_time {
            println!("  Ended: {}", end_time);
        }
        if !launch.tags.is_empty() {
            println!("  Tags: {}", launch.tags.join(", "));
        }

        if let Some(statistics) = &launch.statistics {
            println!("\n--- Statistics ---");
            println!("  Total:   {}", statistics.executions.total);
            println!("  Passed:  {}", statistics.executions.passed);
            println!("  Failed:  {}", statistics.executions.failed);
            println!("  Skipped: {}", statistics.executions.skipped);
            println!("  Defects: {}", statistics.defects.total());
            println!(
                "    To investigate:  {}",
                statistics.defects.to_investigate.total
            );
            println!(
                "    Product bugs:    {}",
                statistics.defects.product_bugs.total
            );
            println!(
                "    Automation bugs: {}",
                statistics.defects.automation_bugs.total
            );
            println!(
                "    System issues:   {}",
                statistics.defects.system_issue.total
            );
        }
    }

    println!("\nDone!");
    Ok(())
}
