use anyhow::Result;
use clap::{App, ArgMatches};

/// A trait for the subcommands of the app.
///
/// Commands provide their own CLI arguments (using clap)
/// and execute themselves given the values of these arguments.
///
/// Each command must have a unique name.
pub(crate) trait Command<'a> {
    /// Returns the name of the command.
    fn name(&self) -> &str;

    /// Returns the clap subcommand describing the available CLI arguments for this command.
    fn clap_subcommand(&self) -> App<'a, 'a>;

    /// Executes the command given its arguments.
    ///
    /// The function returns `Ok(())` iff the app should exit with a success status code.
    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()>;
}
