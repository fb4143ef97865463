//! Command handlers shared by the interactive session and the `history`
//! subcommands.
//!
//! Each handler turns one command into session actions and renders the
//! resulting view as markdown.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use jinn_core::display::{
    resolve_step_path, OperationStatus, PlanExport, PlanView, ResourceList, SavedProcesses,
    Strategies, DEFAULT_EXPORT_FILE,
};
use jinn_core::models::{ProcessId, StepId};
use jinn_core::{Action, Session, Stage};

use crate::args::HistoryCommands;
use crate::renderer::TerminalRenderer;
use crate::repl::{ReplCommand, HELP};

/// Whether the interactive loop keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Cli {
    session: Session,
    renderer: TerminalRenderer,
    user: String,
}

impl Cli {
    pub fn new(session: Session, renderer: TerminalRenderer, user: String) -> Self {
        Self {
            session,
            renderer,
            user,
        }
    }

    pub fn prompt(&self, text: &str) -> Result<()> {
        self.renderer.prompt(text)
    }

    pub fn report_failure(&self, message: &str) -> Result<()> {
        self.renderer
            .render(&OperationStatus::failed(message).to_string())
    }

    fn report_done(&self, message: &str) -> Result<()> {
        self.renderer.render(&OperationStatus::done(message).to_string())
    }

    /// Shows the pending session error once, then dismisses it. Returns
    /// true if there was one.
    async fn flush_error(&mut self) -> Result<bool> {
        let Some(error) = self.session.state().error.clone() else {
            return Ok(false);
        };
        self.report_failure(&error)?;
        self.session.dispatch(Action::DismissError).await;
        Ok(true)
    }

    /// Runs an action and shows the error it produced or the current screen.
    async fn dispatch_and_show(&mut self, action: Action) -> Result<()> {
        self.session.dispatch(action).await;
        if !self.flush_error().await? {
            self.show()?;
        }
        Ok(())
    }

    pub async fn handle_history_command(&mut self, command: HistoryCommands) -> Result<()> {
        match command {
            HistoryCommands::List => self.list_history().await,
            HistoryCommands::Show { id } => self.show_process(&ProcessId::from(id)).await,
            HistoryCommands::Delete { id } => self.delete_process(&ProcessId::from(id)).await,
        }
    }

    pub async fn execute(&mut self, command: ReplCommand) -> Result<Flow> {
        match command {
            ReplCommand::Goal(description) => {
                let state = self.session.state();
                let action = Action::set_goal(
                    description,
                    state.quantification.clone(),
                    state.environment.clone(),
                );
                self.session.apply(action);
                self.report_done("Goal set")?;
            }
            ReplCommand::Specifics(quantification) => {
                let state = self.session.state();
                let action = Action::set_goal(
                    state.description.clone(),
                    quantification,
                    state.environment.clone(),
                );
                self.session.apply(action);
                self.report_done("Specifics updated")?;
            }
            ReplCommand::Environment(environment) => {
                let state = self.session.state();
                let action = Action::set_goal(
                    state.description.clone(),
                    state.quantification.clone(),
                    environment,
                );
                self.session.apply(action);
                self.report_done("Environment updated")?;
            }
            ReplCommand::Generate => {
                if self.session.state().description.is_empty() {
                    self.report_failure("Set a goal first with `goal <text>`")?;
                } else {
                    self.dispatch_and_show(Action::GenerateStrategies).await?;
                }
            }
            ReplCommand::Strategies => self.render_strategies()?,
            ReplCommand::Select(number) => match self.session.state().strategies.get(number - 1) {
                Some(strategy) => {
                    let id = strategy.id.clone();
                    self.dispatch_and_show(Action::SelectStrategy(id)).await?;
                }
                None => self.report_failure(&format!("No strategy {number}"))?,
            },
            ReplCommand::Back => self.dispatch_and_show(Action::BackToSelection).await?,
            ReplCommand::Show => self.show()?,
            ReplCommand::Toggle(path) => self.step_action(&path, Action::ToggleStepComplete).await?,
            ReplCommand::Expand(path) => self.step_action(&path, Action::ExpandStep).await?,
            ReplCommand::Regenerate(path) => self.step_action(&path, Action::RegenerateStep).await?,
            ReplCommand::Edit { path, mode, text } => {
                self.step_action(&path, |step_id| Action::EditStep {
                    step_id,
                    text,
                    mode,
                })
                .await?;
            }
            ReplCommand::Resource(name) => {
                self.session.dispatch(Action::ClickResource(name)).await;
                if !self.flush_error().await? {
                    self.render_selected_resource()?;
                }
            }
            ReplCommand::Resources => self
                .renderer
                .render(&ResourceList(&self.session.state().resources).to_string())?,
            ReplCommand::Check { resource, step } => self.check_resource_step(&resource, step).await?,
            ReplCommand::Fold(name) => match self.session.state().resources.find_by_name(&name) {
                Some(resource) => {
                    let id = resource.id.clone();
                    self.session.dispatch(Action::ToggleResourceExpanded(id)).await;
                    self.render_selected_resource()?;
                }
                None => self.report_failure(&format!("Unknown resource: {name}"))?,
            },
            ReplCommand::Close => {
                self.session.dispatch(Action::CloseResource).await;
                self.report_done("Resource closed")?;
            }
            ReplCommand::Language(language) => {
                let action = match language {
                    Some(language) => Action::SetLanguage(language),
                    None => Action::ToggleLanguage,
                };
                self.session.dispatch(action).await;
                self.report_done(&format!("Language is now {}", self.session.state().language))?;
            }
            ReplCommand::Export(target) => self.export(target.as_deref())?,
            ReplCommand::Save => self.save_process().await?,
            ReplCommand::Update(id) => self.update_process(&id).await?,
            ReplCommand::History => self.list_history().await?,
            ReplCommand::Load(id) => self.load_process(&id).await?,
            ReplCommand::Delete(id) => self.delete_process(&id).await?,
            ReplCommand::Reset => {
                self.session.dispatch(Action::Reset).await;
                self.report_done("Session cleared")?;
            }
            ReplCommand::Help => self.renderer.render(HELP)?,
            ReplCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Renders the screen for the current stage.
    fn show(&self) -> Result<()> {
        let state = self.session.state();
        match state.stage {
            Stage::Input | Stage::Processing => self.renderer.render(&state.to_string()),
            Stage::Selection => self.render_strategies(),
            Stage::Process => {
                if let Some(strategy) = state.active_strategy() {
                    self.renderer.render(&PlanView(strategy).to_string())?;
                }
                self.render_selected_resource()
            }
        }
    }

    fn render_strategies(&self) -> Result<()> {
        self.renderer
            .render(&Strategies(&self.session.state().strategies).to_string())
    }

    fn render_selected_resource(&self) -> Result<()> {
        match self.session.state().selected_resource() {
            Some(resource) => self.renderer.render(&resource.to_string()),
            None => Ok(()),
        }
    }

    /// Resolves a step path in the active plan and dispatches the action
    /// built from the step's id.
    async fn step_action<F>(&mut self, path: &str, action: F) -> Result<()>
    where
        F: FnOnce(StepId) -> Action,
    {
        let step_id = self
            .session
            .state()
            .active_strategy()
            .and_then(|strategy| strategy.plan.as_deref())
            .and_then(|plan| resolve_step_path(plan, path))
            .map(|step| step.id.clone());

        match step_id {
            Some(step_id) => self.dispatch_and_show(action(step_id)).await,
            None => self.report_failure(&format!("No step at {path} in the current plan")),
        }
    }

    async fn check_resource_step(&mut self, name: &str, number: usize) -> Result<()> {
        let Some(resource) = self.session.state().resources.find_by_name(name) else {
            return self.report_failure(&format!("Unknown resource: {name}"));
        };
        let resource_id = resource.id.clone();
        let step_id = resource
            .acquisition_steps
            .as_ref()
            .and_then(|steps| steps.get(number - 1))
            .map(|step| step.id.clone());

        match step_id {
            Some(step_id) => {
                self.session
                    .dispatch(Action::ToggleResourceStepComplete {
                        resource_id,
                        step_id,
                    })
                    .await;
                if let Some(resource) = self.session.state().resources.find_by_name(name) {
                    self.renderer.render(&resource.to_string())?;
                }
                Ok(())
            }
            None => self.report_failure(&format!("{name} has no acquisition step {number}")),
        }
    }

    fn export(&self, target: Option<&Path>) -> Result<()> {
        let text = PlanExport(self.session.state()).to_string();
        let path = target.unwrap_or_else(|| Path::new(DEFAULT_EXPORT_FILE));

        if path == Path::new("-") {
            print!("{text}");
            return Ok(());
        }
        fs::write(path, text)
            .with_context(|| format!("Failed to write export to {}", path.display()))?;
        self.report_done(&format!("Plan exported to {}", path.display()))
    }

    async fn save_process(&mut self) -> Result<()> {
        match self.session.save_process(&self.user).await {
            Ok(saved) => self.report_done(&format!("Saved process {}", saved.id)),
            Err(error) => {
                if !self.flush_error().await? {
                    self.report_failure(&error.to_string())?;
                }
                Ok(())
            }
        }
    }

    async fn update_process(&mut self, id: &ProcessId) -> Result<()> {
        match self.session.update_process(&self.user, id).await {
            Ok(saved) => self.report_done(&format!("Updated process {}", saved.id)),
            Err(error) => {
                self.session.dispatch(Action::DismissError).await;
                self.report_failure(&error.to_string())
            }
        }
    }

    async fn list_history(&self) -> Result<()> {
        let processes = self
            .session
            .list_processes(&self.user)
            .await
            .context("Failed to list saved processes")?;
        self.renderer
            .render(&SavedProcesses(processes).to_string())
    }

    async fn show_process(&self, id: &ProcessId) -> Result<()> {
        let Some(saved) = self
            .session
            .get_process(&self.user, id)
            .await
            .context("Failed to get saved process")?
        else {
            return self.report_failure(&format!("Process {id} not found"));
        };

        self.renderer.render(&saved.to_string())?;
        let selected = saved
            .snapshot
            .selected_strategy_id
            .as_ref()
            .and_then(|selected| {
                saved
                    .snapshot
                    .strategies
                    .iter()
                    .find(|strategy| &strategy.id == selected)
            });
        match selected {
            Some(strategy) => self.renderer.render(&PlanView(strategy).to_string()),
            None => self
                .renderer
                .render(&Strategies(&saved.snapshot.strategies).to_string()),
        }
    }

    async fn load_process(&mut self, id: &ProcessId) -> Result<()> {
        match self.session.load_process(&self.user, id).await {
            Ok(()) => {
                self.report_done(&format!("Loaded process {id}"))?;
                self.show()
            }
            Err(error) => self.report_failure(&error.to_string()),
        }
    }

    async fn delete_process(&self, id: &ProcessId) -> Result<()> {
        match self.session.delete_process(&self.user, id).await {
            Ok(()) => self.report_done(&format!("Deleted process {id}")),
            Err(error) => self.report_failure(&error.to_string()),
        }
    }
}
