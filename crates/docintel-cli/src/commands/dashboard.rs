use super::{Output, ago, short_id};
use anyhow::Result;
use colored::Colorize;
use docintel_application::{ActivityKind, AppServices};

pub async fn handle(app: &AppServices, output: &Output) -> Result<()> {
    let overview = app.dashboard.overview().await?;

    output.emit(&overview, |overview| {
        println!("{}", "Dashboard".bold());
        println!(
            "  Documents   {} ({} processed, {} processing, {} failed)",
            overview.total_documents,
            overview.documents_by_status.processed,
            overview.documents_by_status.processing,
            overview.documents_by_status.failed
        );
        println!(
            "  Workflows   {} active of {}",
            overview.active_workflows, overview.total_workflows
        );
        println!("  Insights    {}", overview.insight_count);
        println!("  Chats       {}", overview.chat_session_count);

        println!("\n{}", "Recent activity".bold());
        for item in &overview.recent_activity {
            let verb = match item.kind {
                ActivityKind::DocumentUploaded => "uploaded",
                ActivityKind::WorkflowRun => "ran",
            };
            println!(
                "  {:<8} {} {} {}",
                short_id(&item.subject_id).cyan(),
                item.title,
                verb,
                ago(item.at).dimmed()
            );
        }
    })
}
