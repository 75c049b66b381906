//! Interactive collection of the project request
//!
//! Asks, in order, for the project name, an optional description and the
//! libraries to include. Answers already given on the command line are not
//! asked again.

use std::collections::HashSet;

use dialoguer::{Input, MultiSelect};
use opus_create_core::{validate_project_name, LibraryCatalog, ProjectRequest};
use thiserror::Error;

use crate::cli::ProjectArgs;

/// Why collecting the request stopped
#[derive(Error, Debug)]
pub enum PromptError {
    /// The user backed out of a prompt
    #[error("Cancelled, no project was created")]
    Cancelled,

    /// The terminal session failed or was interrupted
    #[error("Prompt aborted, no project was created: {0}")]
    Terminal(#[from] dialoguer::Error),

    /// A command-line answer was rejected
    #[error(transparent)]
    Invalid(#[from] opus_create_core::Error),
}

/// Source of answers for the collector
pub trait Prompter {
    /// Ask for a name until `validate_project_name` accepts it
    fn project_name(&mut self) -> Result<String, PromptError>;

    /// Ask for an optional description; empty is allowed
    fn project_description(&mut self) -> Result<String, PromptError>;

    /// Ask which catalog entries to include; returns identifiers in catalog order
    fn libraries(&mut self, catalog: &LibraryCatalog) -> Result<Vec<String>, PromptError>;
}

/// Prompter backed by dialoguer on the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn project_name(&mut self) -> Result<String, PromptError> {
        let name: String = Input::new()
            .with_prompt("Enter the project name")
            .validate_with(|input: &String| -> Result<(), String> {
                validate_project_name(input).map_err(|e| e.to_string())
            })
            .interact_text()?;
        Ok(name)
    }

    fn project_description(&mut self) -> Result<String, PromptError> {
        let description: String = Input::new()
            .with_prompt("Enter the project description (optional)")
            .allow_empty(true)
            .interact_text()?;
        Ok(description)
    }

    fn libraries(&mut self, catalog: &LibraryCatalog) -> Result<Vec<String>, PromptError> {
        if catalog.is_empty() {
            return Ok(Vec::new());
        }

        let selection = MultiSelect::new()
            .with_prompt("Which Opus UI libraries would you like to include? (space to toggle)")
            .items(catalog.libraries())
            .interact_opt()?
            .ok_or(PromptError::Cancelled)?;

        Ok(catalog.select(&selection))
    }
}

/// Build the request from command-line answers, prompting for the rest
pub fn collect_request(
    args: &ProjectArgs,
    catalog: &LibraryCatalog,
    prompter: &mut dyn Prompter,
) -> Result<ProjectRequest, PromptError> {
    let name = match &args.name {
        Some(name) => {
            validate_project_name(name)?;
            name.clone()
        }
        None => prompter.project_name()?,
    };

    let description = match &args.description {
        Some(description) => description.clone(),
        None if args.yes => String::new(),
        None => prompter.project_description()?,
    };

    let libraries = if !args.libraries.is_empty() {
        catalog.ensure_known(&args.libraries)?;
        first_occurrences(&args.libraries)
    } else if args.yes {
        Vec::new()
    } else {
        prompter.libraries(catalog)?
    };

    Ok(ProjectRequest::new(name, description, libraries)?)
}

/// Drop repeated identifiers, keeping the first-seen order
fn first_occurrences(libraries: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    libraries
        .iter()
        .filter(|library| seen.insert(library.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays canned answers and records which prompts were shown
    #[derive(Default)]
    struct ScriptedPrompter {
        name: Option<String>,
        description: Option<String>,
        selection: Option<Vec<usize>>,
        asked: Vec<&'static str>,
    }

    impl Prompter for ScriptedPrompter {
        fn project_name(&mut self) -> Result<String, PromptError> {
            self.asked.push("name");
            self.name.clone().ok_or(PromptError::Cancelled)
        }

        fn project_description(&mut self) -> Result<String, PromptError> {
            self.asked.push("description");
            self.description.clone().ok_or(PromptError::Cancelled)
        }

        fn libraries(&mut self, catalog: &LibraryCatalog) -> Result<Vec<String>, PromptError> {
            self.asked.push("libraries");
            self.selection
                .as_ref()
                .map(|indices| catalog.select(indices))
                .ok_or(PromptError::Cancelled)
        }
    }

    #[test]
    fn test_prompts_in_order() {
        let mut prompter = ScriptedPrompter {
            name: Some("my-app".into()),
            description: Some(String::new()),
            selection: Some(vec![0, 2]),
            ..Default::default()
        };

        let request =
            collect_request(&ProjectArgs::default(), &LibraryCatalog::default(), &mut prompter)
                .unwrap();

        assert_eq!(prompter.asked, vec!["name", "description", "libraries"]);
        assert_eq!(request.project_name(), "my-app");
        assert_eq!(request.project_description(), "");
        assert_eq!(
            request.libraries(),
            ["@intenda/opus-ui-components", "@intenda/opus-ui-grid"]
        );
    }

    #[test]
    fn test_cancel_stops_collection() {
        let mut prompter = ScriptedPrompter {
            name: Some("my-app".into()),
            ..Default::default()
        };

        let err = collect_request(&ProjectArgs::default(), &LibraryCatalog::default(), &mut prompter)
            .unwrap_err();

        assert!(matches!(err, PromptError::Cancelled));
        assert_eq!(prompter.asked, vec!["name", "description"]);
    }

    #[test]
    fn test_flags_skip_prompts() {
        let args = ProjectArgs {
            name: Some("flagged".into()),
            description: Some("From flags".into()),
            libraries: vec!["@intenda/opus-ui-svg".into()],
            ..Default::default()
        };
        let mut prompter = ScriptedPrompter::default();

        let request = collect_request(&args, &LibraryCatalog::default(), &mut prompter).unwrap();

        assert!(prompter.asked.is_empty());
        assert_eq!(request.project_description(), "From flags");
        assert_eq!(request.libraries(), ["@intenda/opus-ui-svg"]);
    }

    #[test]
    fn test_yes_accepts_optional_defaults() {
        let args = ProjectArgs {
            name: Some("quick".into()),
            yes: true,
            ..Default::default()
        };
        let mut prompter = ScriptedPrompter::default();

        let request = collect_request(&args, &LibraryCatalog::default(), &mut prompter).unwrap();

        assert!(prompter.asked.is_empty());
        assert_eq!(request.project_description(), "");
        assert!(!request.has_libraries());
    }

    #[test]
    fn test_blank_name_flag_is_rejected() {
        let args = ProjectArgs {
            name: Some("   ".into()),
            yes: true,
            ..Default::default()
        };
        let err = collect_request(&args, &LibraryCatalog::default(), &mut ScriptedPrompter::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "Project name cannot be empty");
    }

    #[test]
    fn test_repeated_library_flags_collapse() {
        let args = ProjectArgs {
            name: Some("app".into()),
            yes: true,
            libraries: vec![
                "@intenda/opus-ui-grid".into(),
                "@intenda/opus-ui-svg".into(),
                "@intenda/opus-ui-grid".into(),
            ],
            ..Default::default()
        };

        let request =
            collect_request(&args, &LibraryCatalog::default(), &mut ScriptedPrompter::default())
                .unwrap();

        assert_eq!(
            request.libraries(),
            ["@intenda/opus-ui-grid", "@intenda/opus-ui-svg"]
        );
    }

    #[test]
    fn test_unknown_library_flag_is_rejected() {
        let args = ProjectArgs {
            name: Some("app".into()),
            libraries: vec!["left-pad".into()],
            ..Default::default()
        };
        let err = collect_request(&args, &LibraryCatalog::default(), &mut ScriptedPrompter::default())
            .unwrap_err();
        assert!(matches!(
            err,
            PromptError::Invalid(opus_create_core::Error::UnknownLibrary { .. })
        ));
    }
}
