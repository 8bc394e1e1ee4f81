//! Wizard state machine
//!
//! `WizardState` owns every answer the user gives and the step they are on.
//! The driver translates keys into [`Control`]s and calls [`WizardState::handle`];
//! a `Handled::No` reply means the control has no meaning on this step and the
//! raw key should go to the focused text field via [`WizardState::forward_key`].

use super::catalog::{required_env_vars, Choice, ConfirmAction, Framework, Module, PackageManager};
use super::field::TextField;
use super::record::ConfigRecord;
use super::selection::OptionList;
use crate::tui::traits::{Handled, Interactive};
use crossterm::event::KeyEvent;
use std::collections::HashMap;

pub const NAME_REQUIRED: &str = "App name is required.";

/// Label of the last review row, the first to go when space is short
pub const ENV_VARS_LABEL: &str = "Env vars";

/// Prompt steps, in forward order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Directory,
    Name,
    Domain,
    Framework,
    Modules,
    Confirm,
    PackageManager,
}

impl Step {
    /// Prompt line rendered above the step's input
    pub fn title(self) -> &'static str {
        match self {
            Step::Directory => "Directory (default: .)",
            Step::Name => "App name",
            Step::Domain => "Domain (optional)",
            Step::Framework => "Framework",
            Step::Modules => "Modules",
            Step::Confirm => "Review",
            Step::PackageManager => "Package manager",
        }
    }
}

/// Abstract inputs the state machine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Advance,
    MoveUp,
    MoveDown,
    Toggle,
    Cancel,
}

/// How a finished session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed(ConfigRecord),
    Cancelled,
}

/// Read-only view of the answers for the review step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub directory: String,
    pub app_name: String,
    pub domain: String,
    pub framework: &'static str,
    pub modules: Vec<&'static str>,
    pub env_vars: Vec<&'static str>,
}

impl Summary {
    /// Label/value rows, with `None` standing in for empty values
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        fn or_none(value: String) -> String {
            if value.is_empty() {
                "None".to_string()
            } else {
                value
            }
        }

        vec![
            ("Directory", self.directory.clone()),
            ("App name", self.app_name.clone()),
            ("Domain", or_none(self.domain.clone())),
            ("Framework", self.framework.to_string()),
            ("Modules", or_none(self.modules.join(", "))),
            (ENV_VARS_LABEL, or_none(self.env_vars.join(", "))),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct WizardState {
    step: Step,
    directory: TextField,
    name: TextField,
    domain: TextField,
    framework: OptionList<Framework>,
    modules: OptionList<Module>,
    module_selection: HashMap<Module, bool>,
    confirm: OptionList<ConfirmAction>,
    package_manager: OptionList<PackageManager>,
    validation_error: Option<String>,
    cancelled: bool,
    result: Option<ConfigRecord>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    pub fn new() -> Self {
        let mut directory = TextField::new(".", 120).with_value(".");
        directory.focus();

        Self {
            step: Step::Directory,
            directory,
            name: TextField::new("my-app", 80),
            domain: TextField::new("example.com", 120),
            framework: OptionList::new(),
            modules: OptionList::new(),
            module_selection: HashMap::new(),
            confirm: OptionList::new(),
            package_manager: OptionList::new(),
            validation_error: None,
            cancelled: false,
            result: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn directory(&self) -> &TextField {
        &self.directory
    }

    pub fn name(&self) -> &TextField {
        &self.name
    }

    pub fn framework(&self) -> &OptionList<Framework> {
        &self.framework
    }

    pub fn modules(&self) -> &OptionList<Module> {
        &self.modules
    }

    pub fn confirm(&self) -> &OptionList<ConfirmAction> {
        &self.confirm
    }

    pub fn package_manager(&self) -> &OptionList<PackageManager> {
        &self.package_manager
    }

    pub fn validation_error(&self) -> Option<&str> {
        self.validation_error.as_deref()
    }

    pub fn is_selected(&self, module: Module) -> bool {
        self.module_selection.get(&module).copied().unwrap_or(false)
    }

    /// Selected modules, in catalog order
    pub fn selected_modules(&self) -> Vec<Module> {
        Module::ALL
            .iter()
            .copied()
            .filter(|m| self.is_selected(*m))
            .collect()
    }

    /// Text field for the current step, if it has one
    pub fn active_field(&self) -> Option<&TextField> {
        match self.step {
            Step::Directory => Some(&self.directory),
            Step::Name => Some(&self.name),
            Step::Domain => Some(&self.domain),
            _ => None,
        }
    }

    fn active_field_mut(&mut self) -> Option<&mut TextField> {
        match self.step {
            Step::Directory => Some(&mut self.directory),
            Step::Name => Some(&mut self.name),
            Step::Domain => Some(&mut self.domain),
            _ => None,
        }
    }

    pub fn summary(&self) -> Summary {
        let framework = self.framework.current();
        let modules = self.selected_modules();
        Summary {
            directory: self.directory.value().trim().to_string(),
            app_name: self.name.value().trim().to_string(),
            domain: self.domain.value().trim().to_string(),
            framework: framework.label(),
            modules: modules.iter().map(|m| m.label()).collect(),
            env_vars: required_env_vars(framework, &modules),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.cancelled || self.result.is_some()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        if self.cancelled {
            Some(Outcome::Cancelled)
        } else {
            self.result.clone().map(Outcome::Completed)
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────────

    pub fn handle(&mut self, control: Control) -> Handled {
        if self.is_finished() {
            return Handled::No;
        }

        match control {
            Control::Advance => {
                self.advance();
                Handled::Yes
            }
            Control::MoveUp => self.move_cursor(true),
            Control::MoveDown => self.move_cursor(false),
            Control::Toggle => self.toggle(),
            Control::Cancel => {
                tracing::info!(step = ?self.step, "Wizard cancelled");
                self.cancelled = true;
                Handled::Yes
            }
        }
    }

    /// Offer a raw key to the current step's text field
    pub fn forward_key(&mut self, key: KeyEvent) -> Handled {
        if self.is_finished() {
            return Handled::No;
        }
        match self.active_field_mut() {
            Some(field) => field.handle_key(key),
            None => Handled::No,
        }
    }

    fn advance(&mut self) {
        self.validation_error = None;

        match self.step {
            Step::Directory => {
                let value = self.directory.value().trim();
                let value = if value.is_empty() { "." } else { value }.to_string();
                self.directory.set(value);
                self.go_to(Step::Name);
            }
            Step::Name => {
                if self.name.value().trim().is_empty() {
                    tracing::debug!("Rejected empty app name");
                    self.validation_error = Some(NAME_REQUIRED.to_string());
                    return;
                }
                self.go_to(Step::Domain);
            }
            Step::Domain => self.go_to(Step::Framework),
            Step::Framework => self.go_to(Step::Modules),
            Step::Modules => self.go_to(Step::Confirm),
            Step::Confirm => match self.confirm.current() {
                ConfirmAction::Continue => self.go_to(Step::PackageManager),
                ConfirmAction::EditDirectory => self.go_to(Step::Directory),
                ConfirmAction::EditName => self.go_to(Step::Name),
                ConfirmAction::EditDomain => self.go_to(Step::Domain),
                ConfirmAction::EditFramework => self.go_to(Step::Framework),
                ConfirmAction::EditModules => self.go_to(Step::Modules),
                ConfirmAction::Cancel => {
                    tracing::info!("Wizard cancelled from review");
                    self.cancelled = true;
                }
            },
            Step::PackageManager => {
                let record = self.build_record();
                tracing::info!(
                    framework = record.framework.id(),
                    modules = record.modules.len(),
                    package_manager = record.package_manager.id(),
                    "Wizard completed"
                );
                self.result = Some(record);
            }
        }
    }

    fn move_cursor(&mut self, up: bool) -> Handled {
        fn step<T: Choice>(list: &mut OptionList<T>, up: bool) {
            if up {
                list.move_up();
            } else {
                list.move_down();
            }
        }

        match self.step {
            Step::Framework => step(&mut self.framework, up),
            Step::Modules => step(&mut self.modules, up),
            Step::Confirm => step(&mut self.confirm, up),
            Step::PackageManager => step(&mut self.package_manager, up),
            Step::Directory | Step::Name | Step::Domain => return Handled::No,
        }
        Handled::Yes
    }

    fn toggle(&mut self) -> Handled {
        match self.step {
            Step::Modules => {
                let module = self.modules.current();
                let entry = self.module_selection.entry(module).or_insert(false);
                *entry = !*entry;
                tracing::debug!(module = module.id(), selected = *entry, "Toggled module");
                Handled::Yes
            }
            Step::Framework | Step::Confirm | Step::PackageManager => {
                self.advance();
                Handled::Yes
            }
            Step::Directory | Step::Name | Step::Domain => Handled::No,
        }
    }

    fn go_to(&mut self, next: Step) {
        tracing::debug!(from = ?self.step, to = ?next, "Step transition");
        if let Some(field) = self.active_field_mut() {
            field.blur();
        }
        self.step = next;
        if let Some(field) = self.active_field_mut() {
            field.focus();
        }
    }

    fn build_record(&self) -> ConfigRecord {
        let directory = self.directory.value().trim();
        ConfigRecord {
            directory: if directory.is_empty() { "." } else { directory }.to_string(),
            app_name: self.name.value().trim().to_string(),
            domain: self.domain.value().trim().to_string(),
            framework: self.framework.current(),
            modules: self.selected_modules(),
            package_manager: self.package_manager.current(),
        }
    }
}
