use super::{cli_manager, command::Command, common};
use anyhow::Result;
use bruteaf::{
    aa::Semantics,
    io::{AspartixReader, AspartixWriter, ResponseWriter},
    solvers::{ExtensionEnumerator, QueryResolver},
};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::info;

const CMD_NAME: &str = "extensions";

const ARG_SEMANTICS: &str = "SEMANTICS";

pub(crate) struct ExtensionsCommand;

impl ExtensionsCommand {
    pub(crate) fn new() -> Self {
        ExtensionsCommand
    }
}

impl<'a> Command<'a> for ExtensionsCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Lists all the extensions of an argumentation framework")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(
                Arg::with_name(ARG_SEMANTICS)
                    .short("s")
                    .empty_values(false)
                    .multiple(false)
                    .possible_values(&["PR", "ST"])
                    .case_insensitive(true)
                    .help("the semantics")
                    .required(true),
            )
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let semantics = Semantics::try_from(arg_matches.value_of(ARG_SEMANTICS).unwrap())?;
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        let af = common::read_file_path(file, &mut AspartixReader::default())?;
        let mut resolver = QueryResolver::new(&af);
        let extensions = resolver.solver_for(semantics).enumerate_extensions();
        info!(
            "writing {} {} extension(s)",
            extensions.len(),
            semantics.as_ref()
        );
        let writer = AspartixWriter;
        let mut out = std::io::stdout();
        if extensions.is_empty() {
            return writer.write_no_extension(&mut out);
        }
        extensions
            .iter()
            .try_for_each(|ext| writer.write_single_extension(&mut out, &af.subset_to_arguments(ext)))
    }
}
