//! CLI argument parsing

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "seqlab")]
#[command(author, version, about = "A guided walkthrough of list and tuple operations", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<SubCommand>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Answer for the word-search prompt instead of reading stdin
    #[arg(long, global = true, env = "SEQLAB_WORD")]
    pub word: Option<String>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum SubCommand {
    /// Run every lesson in order (the default)
    Run,

    /// Run a single lesson
    Lesson {
        /// Lesson name, as shown by `seqlab lessons`
        name: String,
    },

    /// List the available lessons
    Lessons,

    /// Count, min, max, sum and average of the given numbers
    Stats {
        /// Integers or decimals, e.g. 22.5 10 -5
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_subcommand() {
        let args = Args::try_parse_from(["seqlab"]).unwrap();
        assert!(args.command.is_none());
        assert!(!args.json);
    }

    #[test]
    fn test_lesson_with_global_flags() {
        let args = Args::try_parse_from(["seqlab", "lesson", "slicing", "--json", "-v"]).unwrap();
        assert_eq!(
            args.command,
            Some(SubCommand::Lesson {
                name: "slicing".to_string()
            })
        );
        assert!(args.json);
        assert!(args.verbose);
    }

    #[test]
    fn test_stats_accepts_negative_numbers() {
        let args = Args::try_parse_from(["seqlab", "stats", "22.5", "-5", "33"]).unwrap();
        match args.command {
            Some(SubCommand::Stats { numbers }) => assert_eq!(numbers, vec!["22.5", "-5", "33"]),
            _ => panic!("Expected Stats command"),
        }
    }

    #[test]
    fn test_stats_requires_numbers() {
        assert!(Args::try_parse_from(["seqlab", "stats"]).is_err());
    }
}
