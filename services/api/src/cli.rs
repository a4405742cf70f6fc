use crate::demo::{
    run_analytics_show, run_analytics_skills, run_candidate_export, run_candidate_list, run_demo,
    AnalyticsShowArgs, AnalyticsSkillsArgs, CandidateExportArgs, CandidateListArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use starsyn::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Starsyn Candidate Dashboard",
    about = "Serve and explore the Starsyn candidate dashboard from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Filter, sort and export candidates without starting the server
    Candidates {
        #[command(subcommand)]
        command: CandidatesCommand,
    },
    /// Inspect saved analytics panels and candidate skill assessments
    Analytics {
        #[command(subcommand)]
        command: AnalyticsCommand,
    },
    /// Walk through a scripted dashboard session on the demo data
    Demo,
}

#[derive(Subcommand, Debug)]
enum CandidatesCommand {
    /// Print the derived candidate table
    List(CandidateListArgs),
    /// Write the derived candidate list as CSV
    Export(CandidateExportArgs),
}

#[derive(Subcommand, Debug)]
enum AnalyticsCommand {
    /// Show the selected metrics, charts and heatmaps for a program
    Show(AnalyticsShowArgs),
    /// Show a candidate's skill assessment and radial chart points
    Skills(AnalyticsSkillsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Serve candidates from a JSON file instead of the demo data
    #[arg(long, value_name = "PATH")]
    pub(crate) candidates: Option<PathBuf>,
    /// Override where program preferences are stored
    #[arg(long, value_name = "PATH")]
    pub(crate) preferences: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Candidates {
            command: CandidatesCommand::List(args),
        } => run_candidate_list(args),
        Command::Candidates {
            command: CandidatesCommand::Export(args),
        } => run_candidate_export(args),
        Command::Analytics {
            command: AnalyticsCommand::Show(args),
        } => run_analytics_show(args),
        Command::Analytics {
            command: AnalyticsCommand::Skills(args),
        } => run_analytics_skills(args),
        Command::Demo => run_demo(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn analytics_skills_requires_a_candidate() {
        assert!(Cli::try_parse_from(["starsyn-api", "analytics", "skills"]).is_err());

        let cli = Cli::try_parse_from([
            "starsyn-api",
            "analytics",
            "skills",
            "--candidate",
            "c-9",
        ])
        .expect("arguments parse");
        let Some(Command::Analytics {
            command: AnalyticsCommand::Skills(args),
        }) = cli.command
        else {
            panic!("expected analytics skills");
        };
        assert_eq!(args.candidate, "c-9");
    }

    #[test]
    fn list_accepts_repeated_filters() {
        let cli = Cli::try_parse_from([
            "starsyn-api",
            "candidates",
            "list",
            "--intent",
            "high",
            "--intent",
            "very-high",
            "--sort",
            "activity",
        ])
        .expect("arguments parse");

        let Some(Command::Candidates {
            command: CandidatesCommand::List(args),
        }) = cli.command
        else {
            panic!("expected candidates list");
        };
        assert_eq!(args.view.intent, vec!["high", "very-high"]);
    }
}
