use std::path::PathBuf;

use clap::{crate_authors, crate_description, crate_name, crate_version, Parser};

#[derive(Debug, Parser)]
#[command(name = crate_name!())]
#[command(author = crate_authors!())]
#[command(version = crate_version!())]
#[command(about = crate_description!(), long_about = None)]
pub struct Cli {
    /// CSV file to read, first row is the header
    #[arg(value_name = "INPUT.CSV")]
    pub input: PathBuf,

    /// Parquet file to write
    #[arg(value_name = "OUTPUT.PARQUET")]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use rstest::rstest;

    #[test]
    fn test_two_positionals() {
        let cli = Cli::try_parse_from(["csv-to-parquet", "a.csv", "a.parquet"]).unwrap();
        assert_eq!(PathBuf::from("a.csv"), cli.input);
        assert_eq!(PathBuf::from("a.parquet"), cli.output);
    }

    #[rstest]
    #[case(&["csv-to-parquet"])]
    #[case(&["csv-to-parquet", "a.csv"])]
    fn test_missing_arguments(#[case] args: &[&str]) {
        let err = Cli::try_parse_from(args).unwrap_err();
        assert_eq!(ErrorKind::MissingRequiredArgument, err.kind());
    }

    #[test]
    fn test_extra_argument() {
        let err = Cli::try_parse_from(["csv-to-parquet", "a.csv", "a.parquet", "b"]).unwrap_err();
        assert_eq!(ErrorKind::UnknownArgument, err.kind());
    }
}
