use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bookshelf", version)]
#[command(about = "Terminal catalog for a home library", long_about = None)]
pub struct Cli {
    /// Catalog CSV file (default: library_information.csv)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Books shown per page (default: 5)
    #[arg(short = 'n', long)]
    pub page_size: Option<usize>,

    /// JSON config file providing store_path and page_size
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_uses_fixed_defaults() {
        let cli = Cli::try_parse_from(["bookshelf"]).unwrap();
        assert!(cli.file.is_none());
        assert!(cli.page_size.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn overrides_parse() {
        let cli = Cli::try_parse_from(["bookshelf", "-f", "books.csv", "-n", "10", "-v"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("books.csv")));
        assert_eq!(cli.page_size, Some(10));
        assert!(cli.verbose);
    }

    #[test]
    fn page_size_must_be_a_number() {
        assert!(Cli::try_parse_from(["bookshelf", "--page-size", "many"]).is_err());
    }
}
