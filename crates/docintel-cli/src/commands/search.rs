use super::{Output, short_id};
use anyhow::Result;
use colored::Colorize;
use docintel_application::AppServices;

pub async fn handle(app: &AppServices, query: &str, output: &Output) -> Result<()> {
    let results = app.search.search(query).await?;

    output.emit(&results, |results| {
        if results.is_empty() {
            println!("{}", format!("No results for \"{}\".", query).yellow());
            return;
        }

        println!("{} result(s) for \"{}\"", results.total(), query);
        if !results.documents.is_empty() {
            println!("\n{}", "Documents".bold());
            for doc in &results.documents {
                println!("  {:<8} {} ({})", short_id(&doc.id).cyan(), doc.name, doc.doc_type);
            }
        }
        if !results.workflows.is_empty() {
            println!("\n{}", "Workflows".bold());
            for workflow in &results.workflows {
                println!(
                    "  {:<8} {} [{}]",
                    short_id(&workflow.id).cyan(),
                    workflow.title,
                    workflow.department
                );
            }
        }
        if !results.insights.is_empty() {
            println!("\n{}", "Insights".bold());
            for insight in &results.insights {
                println!(
                    "  {:<8} {} [{}]",
                    short_id(&insight.id).cyan(),
                    insight.title,
                    insight.category
                );
            }
        }
    })
}
