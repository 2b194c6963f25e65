use super::{cli_manager, command::Command, common};
use anyhow::{Context, Result};
use bruteaf::{
    aa::read_problem_string,
    io::{read_query_argument, AspartixReader, AspartixWriter, ResponseWriter},
    solvers::QueryResolver,
};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::info;

const CMD_NAME: &str = "solve";

const ARG_WITH_CERTIFICATE: &str = "WITH_CERTIFICATE";

pub(crate) struct SolveCommand;

impl SolveCommand {
    pub(crate) fn new() -> Self {
        SolveCommand
    }
}

impl<'a> Command<'a> for SolveCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Solves an argumentation framework problem")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .args(&common::problem_args())
            .arg(
                Arg::with_name(ARG_WITH_CERTIFICATE)
                    .long("with-certificate")
                    .takes_value(false)
                    .help("prints an extension justifying the answer, when relevant")
                    .required(false),
            )
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let problem = arg_matches.value_of(common::ARG_PROBLEM).unwrap();
        let (query, _) = read_problem_string(problem)?;
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        let af = common::read_file_path(file, &mut AspartixReader::default())?;
        let query_argument = read_query_argument(query, arg_matches.value_of(common::ARG_ARG).unwrap())
            .context("while parsing the argument passed to the command line")?;
        info!("solving {} for {:?}", problem, query_argument);
        let mut resolver = QueryResolver::new(&af);
        let (status, certificate) = resolver.solve_with_certificate(problem, &query_argument)?;
        let writer = AspartixWriter;
        let mut out = std::io::stdout();
        writer.write_acceptance_status(&mut out, status)?;
        match certificate {
            Some(extension) if arg_matches.is_present(ARG_WITH_CERTIFICATE) => {
                writer.write_single_extension(&mut out, &extension)
            }
            _ => Ok(()),
        }
    }
}
