use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "slip39-dots",
    about = "Convert SLIP39 words to 12-dot metal backup patterns",
    version
)]
pub struct Cli {
    /// Wordlist JSON file (overrides the config file)
    #[arg(long, global = true)]
    pub wordlist: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert every word of a mnemonic, reporting all unknown words
    Convert {
        /// Mnemonic words (quoted text or separate arguments)
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Render a single word index (1-1024)
    Index {
        index: u32,
    },

    /// Decode a 12-dot pattern (● and ○, groups may be space separated)
    Decode {
        dots: String,
    },

    /// Validate a 12-character binary string
    Validate {
        binary: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_convert() {
        let cli = Cli::parse_from(["slip39-dots", "convert", "academic", "acid"]);
        assert!(!cli.json);
        assert!(matches!(cli.command, Commands::Convert { ref words } if words.len() == 2));
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::parse_from([
            "slip39-dots",
            "index",
            "754",
            "--json",
            "--wordlist",
            "words.json",
        ]);
        assert!(cli.json);
        assert_eq!(cli.wordlist.as_deref(), Some("words.json"));
        assert!(matches!(cli.command, Commands::Index { index: 754 }));
    }

    #[test]
    fn test_convert_requires_words() {
        assert!(Cli::try_parse_from(["slip39-dots", "convert"]).is_err());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
