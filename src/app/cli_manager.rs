use super::{
    app_helper::{init_logger, init_logger_with_level},
    command::Command,
    writable_string::WritableString,
};
use anyhow::{anyhow, Result};
use clap::{App, AppSettings, Arg};
use log::info;
use std::{ffi::OsString, str::FromStr};
use sysinfo::System;

pub(crate) const APP_HELPER_LOGGING_LEVEL_ARG: &str = "APP_HELPER_LOGGING_LEVEL_ARG";

const LOGGING_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// The `--logging-level` argument, with `info` as default value.
pub(crate) fn logging_level_cli_arg<'a>() -> Arg<'a, 'a> {
    logging_level_cli_arg_with_default_value("info")
}

pub(crate) fn logging_level_cli_arg_with_default_value<'a>(default_value: &'a str) -> Arg<'a, 'a> {
    Arg::with_name(APP_HELPER_LOGGING_LEVEL_ARG)
        .long("logging-level")
        .multiple(false)
        .default_value(default_value)
        .possible_values(&LOGGING_LEVELS)
        .help("set the minimal logging level")
}

/// Handles the set of commands and processes the CLI arguments against them.
pub(crate) struct CliManager<'a> {
    app_name: &'a str,
    version: &'a str,
    authors: &'a str,
    about: &'a str,
    commands: Vec<Box<dyn Command<'a> + 'a>>,
}

impl<'a> CliManager<'a> {
    pub(crate) fn new(app_name: &'a str, version: &'a str, authors: &'a str, about: &'a str) -> Self {
        CliManager {
            app_name,
            version,
            authors,
            about,
            commands: vec![],
        }
    }

    pub(crate) fn add_command(&mut self, command: Box<dyn Command<'a> + 'a>) {
        self.commands.push(command);
    }

    pub(crate) fn parse_cli<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<T> = args.into_iter().collect();
        let mut app = App::new(self.app_name)
            .global_setting(AppSettings::DisableVersion)
            .global_setting(AppSettings::VersionlessSubcommands)
            .setting(AppSettings::SubcommandRequired)
            .version(self.version)
            .author(self.authors)
            .about(self.about);
        for c in self.commands.iter() {
            app = app.subcommand(c.clap_subcommand());
        }
        match app.clone().get_matches_from_safe(args.clone()) {
            Ok(matches) => {
                let (name, sub_matches) = matches.subcommand();
                let command = self.commands.iter().find(|c| c.name() == name);
                match (command, sub_matches) {
                    (Some(c), Some(sub_matches)) => {
                        let log_level = sub_matches
                            .value_of(APP_HELPER_LOGGING_LEVEL_ARG)
                            .and_then(|l| log::LevelFilter::from_str(l).ok())
                            .unwrap_or(log::LevelFilter::Info);
                        init_logger_with_level(log_level);
                        info!("{} {}", self.app_name, self.version);
                        sys_info();
                        c.execute(sub_matches)
                    }
                    _ => Err(anyhow!("no command was selected")),
                }
            }
            Err(clap::Error {
                kind: clap::ErrorKind::HelpDisplayed,
                ..
            }) => {
                init_logger();
                self.print_help(&mut app, &args);
                Ok(())
            }
            Err(e) => {
                init_logger();
                info!("{} {}", self.app_name, self.version);
                Err(anyhow!("{}", e))
            }
        }
    }

    fn print_help<T>(&self, app: &mut App, args: &[T])
    where
        T: Into<OsString> + Clone,
    {
        const HELP_STRINGS: [&str; 3] = ["help", "-h", "--help"];
        let str_args = args
            .iter()
            .skip(1)
            .map(|a| Into::<OsString>::into(a.clone()).to_string_lossy().to_string())
            .collect::<Vec<String>>();
        let subcommand_name = match str_args.as_slice() {
            [help, name, ..] if HELP_STRINGS.contains(&help.as_str()) => Some(name),
            [name, ..] if !HELP_STRINGS.contains(&name.as_str()) => Some(name),
            _ => None,
        };
        let mut message = WritableString::default();
        let command = subcommand_name
            .and_then(|n| self.commands.iter().find(|c| c.name() == n.as_str()));
        let written = match command {
            Some(c) => c.clap_subcommand().write_long_help(&mut message),
            None => app.write_long_help(&mut message),
        };
        if written.is_ok() {
            message.to_string().split('\n').for_each(|s| info!("{}", s));
            info!("");
        }
    }
}

fn sys_info() {
    info!("----------------------------------------");
    let sys = System::new_all();
    let unknown = || "[unknown]".to_string();
    info!("running on {}", System::host_name().unwrap_or_else(unknown));
    info!(
        "OS is {} {} with kernel {}",
        System::name().unwrap_or_else(unknown),
        System::os_version().unwrap_or_else(unknown),
        System::kernel_version().unwrap_or_else(unknown)
    );
    let mut cpu_kinds: Vec<&str> = sys.cpus().iter().map(|p| p.brand()).collect();
    cpu_kinds.sort_unstable();
    cpu_kinds.dedup();
    info!(
        "physical core count: {} {:?}",
        sys.physical_core_count()
            .map(|n| n.to_string())
            .unwrap_or_else(unknown),
        cpu_kinds
    );
    info!("total memory: {} KB", sys.total_memory() / 1024);
    info!("----------------------------------------");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{ArgMatches, SubCommand};
    use std::{cell::RefCell, rc::Rc};

    struct LocalCommand {
        command_involved: Rc<RefCell<bool>>,
        argument_set: Rc<RefCell<bool>>,
    }

    impl<'a> Command<'a> for LocalCommand {
        fn name(&self) -> &str {
            "local_command_name"
        }

        fn clap_subcommand(&self) -> App<'a, 'a> {
            SubCommand::with_name("local_command_name")
                .about("local_command_about")
                .arg(Arg::with_name("arg_name").short("a"))
                .arg(logging_level_cli_arg())
        }

        fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
            *self.command_involved.borrow_mut() = true;
            if arg_matches.is_present("arg_name") {
                *self.argument_set.borrow_mut() = true;
            }
            Ok(())
        }
    }

    fn run(args: Vec<&'static str>) -> Result<(bool, bool)> {
        let mut manager = CliManager::new("app_name", "app_version", "author", "about");
        let command_involved = Rc::new(RefCell::new(false));
        let argument_set = Rc::new(RefCell::new(false));
        manager.add_command(Box::new(LocalCommand {
            command_involved: Rc::clone(&command_involved),
            argument_set: Rc::clone(&argument_set),
        }));
        manager.parse_cli(args)?;
        let involved = *command_involved.borrow();
        let set = *argument_set.borrow();
        Ok((involved, set))
    }

    #[test]
    fn test_command_involved() {
        assert_eq!((true, false), run(vec!["app_name", "local_command_name"]).unwrap());
    }

    #[test]
    fn test_command_and_arg_involved() {
        assert_eq!(
            (true, true),
            run(vec!["app_name", "local_command_name", "-a"]).unwrap()
        );
    }

    #[test]
    fn test_logging_level() {
        assert_eq!(
            (true, false),
            run(vec!["app_name", "local_command_name", "--logging-level", "off"]).unwrap()
        );
        assert!(run(vec!["app_name", "local_command_name", "--logging-level", "loud"]).is_err());
    }

    #[test]
    fn test_wrong_usage() {
        assert!(run(vec!["app_name"]).is_err());
        assert!(run(vec!["app_name", "foo"]).is_err());
        assert!(run(vec!["app_name", "local_command_name", "-b"]).is_err());
    }

    #[test]
    fn test_help() {
        assert_eq!((false, false), run(vec!["app_name", "-h"]).unwrap());
        assert_eq!((false, false), run(vec!["app_name", "help"]).unwrap());
        assert_eq!(
            (false, false),
            run(vec!["app_name", "help", "local_command_name"]).unwrap()
        );
        assert_eq!(
            (false, false),
            run(vec!["app_name", "local_command_name", "-h"]).unwrap()
        );
    }
}
