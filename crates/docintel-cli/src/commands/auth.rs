use super::Output;
use anyhow::Result;
use colored::Colorize;
use docintel_application::AppServices;

pub async fn login(app: &AppServices, email: &str, password: &str, output: &Output) -> Result<()> {
    app.auth.login(email, password).await?;

    output.emit(&app.auth.view(), |view| {
        if let Some(user) = &view.user {
            println!(
                "{}",
                format!("Signed in as {} <{}> ({})", user.name, user.email, user.role).green()
            );
        }
    })
}
