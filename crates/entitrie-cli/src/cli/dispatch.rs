//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;
use entitrie_compiler::BranchForm;

use super::ColorChoice;
use crate::commands::compile::CompileArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::resolve::ResolveArgs;

pub struct CompileParams {
    pub graph_path: PathBuf,
    pub output: Option<PathBuf>,
    pub form: Option<BranchForm>,
}

impl CompileParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            graph_path: required_path(m, "graph_path"),
            output: m.get_one::<PathBuf>("output").cloned(),
            form: parse_form(m),
        }
    }
}

impl From<CompileParams> for CompileArgs {
    fn from(p: CompileParams) -> Self {
        Self {
            graph_path: p.graph_path,
            output: p.output,
            form: p.form,
        }
    }
}

pub struct DumpParams {
    pub input_path: PathBuf,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: required_path(m, "input_path"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            input_path: p.input_path,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ResolveParams {
    pub input_path: PathBuf,
    pub text: String,
    pub strict: bool,
    pub verbose: bool,
    pub color: ColorChoice,
}

impl ResolveParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: required_path(m, "input_path"),
            text: m.get_one::<String>("text").cloned().unwrap_or_default(),
            strict: m.get_flag("strict"),
            verbose: m.get_flag("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<ResolveParams> for ResolveArgs {
    fn from(p: ResolveParams) -> Self {
        Self {
            input_path: p.input_path,
            text: p.text,
            strict: p.strict,
            verbose: p.verbose,
            color: p.color.should_colorize(),
        }
    }
}

/// Positionals marked `required(true)` are always present after clap validation.
fn required_path(m: &ArgMatches, id: &str) -> PathBuf {
    m.get_one::<PathBuf>(id).cloned().unwrap_or_default()
}

fn parse_form(m: &ArgMatches) -> Option<BranchForm> {
    match m.get_one::<String>("form").map(|s| s.as_str()) {
        Some("jump") => Some(BranchForm::JumpTable),
        Some("dict") => Some(BranchForm::Dictionary),
        _ => None,
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
