use super::{Output, short_id};
use anyhow::{Context, Result, bail};
use clap::Subcommand;
use colored::Colorize;
use docintel_application::AppServices;
use docintel_core::workflow::{NewWorkflow, Workflow, WorkflowPatch, WorkflowStatus};

#[derive(Subcommand, Debug)]
pub enum WorkflowAction {
    /// List every workflow
    List,
    /// Show the template gallery
    Templates,
    /// Run a workflow now
    Run { id: String },
    /// Create a workflow
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        department: String,
        /// active, paused or archived
        #[arg(long, default_value = "active")]
        status: String,
        #[arg(long, default_value_t = 0)]
        automations: u32,
    },
    /// Create a workflow from a gallery template
    FromTemplate { template_id: String },
    /// Change a workflow's status (active, paused, archived)
    SetStatus { id: String, status: String },
    /// Delete a workflow
    Delete { id: String },
}

fn parse_status(status: &str) -> Result<WorkflowStatus> {
    status
        .parse()
        .with_context(|| format!("Unknown workflow status '{}'", status))
}

pub async fn handle(app: &AppServices, action: WorkflowAction, output: &Output) -> Result<()> {
    match action {
        WorkflowAction::List => {
            let workflows = app.workflows.list_workflows().await?;
            output.emit(&workflows, |workflows| print_workflows(workflows))
        }
        WorkflowAction::Templates => {
            let templates = app.workflows.list_templates().await?;
            output.emit(&templates, |templates| {
                for template in templates {
                    println!(
                        "{:<4} {} [{}]",
                        template.id.cyan(),
                        template.title.bold(),
                        template.department
                    );
                    println!("     {}", template.description);
                    println!(
                        "     complexity: {}  popularity: {}",
                        template.complexity, template.popularity
                    );
                }
            })
        }
        WorkflowAction::Run { id } => {
            if app.workflows.get_workflow(&id).await?.is_none() {
                bail!("Workflow '{}' not found", id);
            }
            app.workflows.run_workflow(&id).await?;
            let workflow = app.workflows.get_workflow(&id).await?;
            output.emit(&workflow, |workflow| {
                if let Some(workflow) = workflow {
                    println!("{}", format!("Ran {}", workflow.title).green());
                }
            })
        }
        WorkflowAction::Create {
            title,
            description,
            department,
            status,
            automations,
        } => {
            let workflow = app
                .workflows
                .create_workflow(NewWorkflow {
                    title,
                    description,
                    department,
                    status: parse_status(&status)?,
                    automations,
                })
                .await?;
            output.emit(&workflow, print_created)
        }
        WorkflowAction::FromTemplate { template_id } => {
            let workflow = app.workflows.create_from_template(&template_id).await?;
            output.emit(&workflow, print_created)
        }
        WorkflowAction::SetStatus { id, status } => {
            let patch = WorkflowPatch {
                status: Some(parse_status(&status)?),
                ..Default::default()
            };
            let workflow = app.workflows.update_workflow(&id, patch).await?;
            output.emit(&workflow, |workflow| {
                println!(
                    "{}",
                    format!("{} is now {}", workflow.title, workflow.status).green()
                );
            })
        }
        WorkflowAction::Delete { id } => {
            if app.workflows.get_workflow(&id).await?.is_none() {
                bail!("Workflow '{}' not found", id);
            }
            app.workflows.delete_workflow(&id).await?;
            println!("{}", format!("Deleted workflow {}", id).green());
            Ok(())
        }
    }
}

fn print_created(workflow: &Workflow) {
    println!("{}", format!("Created workflow {}", workflow.title).green());
    println!("  id: {}", workflow.id);
}

fn print_workflows(workflows: &[Workflow]) {
    if workflows.is_empty() {
        println!("{}", "No workflows.".yellow());
        return;
    }

    let now = chrono::Utc::now();
    for workflow in workflows {
        let status = match workflow.status {
            WorkflowStatus::Active => workflow.status.to_string().green(),
            WorkflowStatus::Paused => workflow.status.to_string().yellow(),
            WorkflowStatus::Archived => workflow.status.to_string().dimmed(),
        };
        println!(
            "{:<8} {} [{}] {}",
            short_id(&workflow.id).cyan(),
            workflow.title.bold(),
            workflow.department,
            status
        );
        println!(
            "         {} documents, {} automations, last run {}",
            workflow.documents,
            workflow.automations,
            workflow.last_run_label(now)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status() {
        assert_eq!(parse_status("Paused").unwrap(), WorkflowStatus::Paused);
        assert!(parse_status("running").is_err());
    }
}
