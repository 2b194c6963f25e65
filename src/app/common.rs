use super::{
    app_helper::AppHelper, command::Command,
    AuthorsCommand, CheckCommand, ExtensionsCommand, ProblemsCommand, SolveCommand,
};
use anyhow::{Context, Result};
use bruteaf::{
    aa::{AAFramework, LabelType},
    io::InstanceReader,
};
use clap::Arg;
use log::{info, warn};
use std::{
    ffi::OsString,
    fs::{self, File},
    io::BufReader,
    path::PathBuf,
};

pub(crate) fn create_app_helper() -> AppHelper<'static> {
    let app_name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name");
    let app_version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version");
    let authors = option_env!("CARGO_PKG_AUTHORS").unwrap_or("unknown authors");
    let mut app = AppHelper::new(
        app_name,
        app_version,
        authors,
        "Bruteaf, an exhaustive abstract argumentation reasoner.",
    );
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(AuthorsCommand::new(app_name, app_version, authors)),
        Box::new(CheckCommand::new()),
        Box::new(ExtensionsCommand::new()),
        Box::new(ProblemsCommand::new()),
        Box::new(SolveCommand::new()),
    ];
    for c in commands {
        app.add_command(c);
    }
    app
}

pub(crate) const ARG_INPUT: &str = "INPUT";

pub(crate) fn input_args() -> Arg<'static, 'static> {
    Arg::with_name(ARG_INPUT)
        .short("f")
        .empty_values(false)
        .multiple(false)
        .help("the input file that contains the AF")
        .required(true)
}

pub(crate) const ARG_PROBLEM: &str = "PROBLEM";
pub(crate) const ARG_ARG: &str = "ARG";

pub(crate) fn problem_args() -> Vec<Arg<'static, 'static>> {
    vec![
        Arg::with_name(ARG_PROBLEM)
            .short("p")
            .empty_values(false)
            .multiple(false)
            .help("the problem to solve (e.g. DC-PR)")
            .required(true),
        Arg::with_name(ARG_ARG)
            .short("a")
            .empty_values(false)
            .multiple(false)
            .help("the comma-separated candidate set (for VE queries) or the argument (for DC/DS queries)")
            .required(true),
    ]
}

pub(crate) fn read_file_path<T>(
    file_path: &str,
    reader: &mut dyn InstanceReader<T>,
) -> Result<AAFramework<T>>
where
    T: LabelType,
{
    reader.add_warning_handler(Box::new(|line, msg| warn!("at line {}: {}", line, msg)));
    let canonicalized = canonicalize_file_path(file_path)?;
    info!("reading input file {:?}", canonicalized);
    let file = File::open(&canonicalized)
        .with_context(|| format!(r#"while opening file "{}""#, file_path))?;
    let af = reader
        .read(&mut BufReader::new(file))
        .with_context(|| format!(r#"while reading file "{}""#, file_path))?;
    info!(
        "the argumentation framework has {} argument(s) and {} attack(s)",
        af.n_arguments(),
        af.n_attacks(),
    );
    Ok(af)
}

/// Canonicalize a path given by the user.
pub(crate) fn canonicalize_file_path(file_path: &str) -> Result<PathBuf> {
    fs::canonicalize(PathBuf::from(file_path))
        .with_context(|| format!(r#"while opening file "{}""#, file_path))
}

const QUERY_LOGGING_LEVEL: &str = "error";

/// Translates the arguments of the flat query interface into the ones of the subcommand interface.
///
/// No argument at all leads to the `authors` command, a single `--problems` leads to the `problems` command,
/// and any other set of arguments is given to the `solve` command.
/// The logging level is set to `error` unless it is explicitly given.
#[allow(dead_code)]
pub(crate) fn translate_query_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let program = args
        .next()
        .unwrap_or_else(|| OsString::from("bruteaf_query"));
    let real_args = args.collect::<Vec<OsString>>();
    let command = if real_args.is_empty() {
        "authors"
    } else if real_args == [OsString::from("--problems")] {
        "problems"
    } else {
        "solve"
    };
    let mut new_args = vec![program, OsString::from(command)];
    if command == "solve" {
        new_args.extend(real_args.iter().cloned());
    }
    let has_logging_level = real_args.iter().any(|a| {
        a.to_str()
            .map_or(false, |s| s == "--logging-level" || s.starts_with("--logging-level="))
    });
    if !has_logging_level {
        new_args.push(OsString::from("--logging-level"));
        new_args.push(OsString::from(QUERY_LOGGING_LEVEL));
    }
    new_args
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translate(args: &[&str]) -> Vec<String> {
        translate_query_args(args.iter().map(OsString::from))
            .into_iter()
            .map(|a| a.to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_translate_no_args() {
        assert_eq!(
            vec!["q", "authors", "--logging-level", "error"],
            translate(&["q"])
        );
    }

    #[test]
    fn test_translate_problems() {
        assert_eq!(
            vec!["q", "problems", "--logging-level", "error"],
            translate(&["q", "--problems"])
        );
    }

    #[test]
    fn test_translate_query() {
        assert_eq!(
            vec!["q", "solve", "-p", "DC-PR", "-f", "af.apx", "-a", "a", "--logging-level", "error"],
            translate(&["q", "-p", "DC-PR", "-f", "af.apx", "-a", "a"])
        );
    }

    #[test]
    fn test_translate_query_with_logging_level() {
        assert_eq!(
            vec!["q", "solve", "-p", "VE-ST", "--logging-level=info"],
            translate(&["q", "-p", "VE-ST", "--logging-level=info"])
        );
    }
}
