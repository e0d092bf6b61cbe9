//! Console loop: reads commands, drives the controller, prints the table

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use student_accounts_app::AppState;
use student_accounts_core::error::CoreError;
use student_accounts_core::form::{AccountForm, FormField};
use student_accounts_core::services::{AccountListController, SubmitOutcome};

use crate::command::{self, Command, HELP};

/// Lines produced by one command
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Reply {
    /// For stdout
    pub output: Vec<String>,
    /// For stderr
    pub errors: Vec<String>,
}

/// Run until `quit` or end of input
pub async fn run(app: &AppState) -> Result<()> {
    let controller = &app.controller;
    let mut form = AccountForm::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    for line in table_lines(controller) {
        println!("{line}");
    }
    while let Some(line) = lines.next_line().await? {
        let command = match command::parse(&line) {
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        let reply = execute(controller, &mut form, command).await;
        for line in &reply.errors {
            eprintln!("{line}");
        }
        for line in &reply.output {
            println!("{line}");
        }
    }
    Ok(())
}

/// Apply one command to the controller. `Quit` is left to the caller.
pub async fn execute(
    controller: &AccountListController,
    form: &mut AccountForm,
    command: Command,
) -> Reply {
    let mut reply = Reply::default();
    match command {
        Command::List => {
            controller.refresh().await;
        }
        Command::Add {
            student_id,
            password,
            name,
        } => {
            controller.open_add();
            form.sync(&controller.state().modal);
            form.set(FormField::Name, name);
            form.set(FormField::StudentId, student_id);
            form.set(FormField::Password, password);
            submit(controller, form, &mut reply).await;
        }
        Command::Edit { id, changes } => {
            let Some(account) = controller.state().account(&id).cloned() else {
                reply.errors.push(format!("no account with id {id}"));
                return reply;
            };
            controller.open_edit(&account);
            form.sync(&controller.state().modal);
            for (field, value) in changes {
                form.set(field, value);
            }
            submit(controller, form, &mut reply).await;
        }
        Command::Delete { id } => {
            let Some(account) = controller.state().account(&id).cloned() else {
                reply.errors.push(format!("no account with id {id}"));
                return reply;
            };
            controller.delete(&account).await;
        }
        Command::Toggle { id } => {
            controller.toggle_password_visibility(&id);
        }
        Command::Help => {
            reply.output.push(HELP.to_string());
            return reply;
        }
        Command::Quit => return reply,
    }
    reply.output = table_lines(controller);
    reply
}

async fn submit(controller: &AccountListController, form: &mut AccountForm, reply: &mut Reply) {
    match controller.submit_form(form).await {
        Ok(SubmitOutcome::Failed(_) | SubmitOutcome::NoChanges) => {}
        Ok(SubmitOutcome::Created(account) | SubmitOutcome::Updated(account)) => {
            tracing::debug!("Submitted account {}", account.id);
        }
        Err(CoreError::Validation(errors)) => {
            reply
                .errors
                .extend(errors.iter().map(|error| format!("  {error}")));
            controller.close_modal();
        }
        Err(e) => {
            if e.is_expected() {
                tracing::warn!("{e}");
            } else {
                tracing::error!("{e}");
            }
            reply.errors.push(e.to_string());
        }
    }
}

fn table_lines(controller: &AccountListController) -> Vec<String> {
    let state = controller.state();
    let mut lines = Vec::new();
    if state.loading {
        lines.push("(loading)".to_string());
    }
    if state.accounts.is_empty() {
        lines.push("No accounts.".to_string());
        return lines;
    }
    lines.push(format!(
        "{:<38} {:<24} {:<10} PASSWORD",
        "ID", "NAME", "STUDENT ID"
    ));
    for account in &state.accounts {
        lines.push(format!(
            "{:<38} {:<24} {:<10} {}",
            account.id,
            account.name,
            account.student_id,
            controller.display_password(account)
        ));
    }
    lines
}
