use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "image-searcher")]
#[command(about = "Search a photo service and browse the results page by page")]
#[command(version)]
pub struct Args {
    /// Search text; runs a single search and exits. Omit to start an interactive prompt
    pub query: Option<String>,

    /// Enable the stricter content filter
    #[arg(short, long)]
    pub safe_search: bool,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the search endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Print results as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Keep previous results on screen while a new page loads
    #[arg(long)]
    pub keep_results: bool,
}

/// One line typed at the interactive prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Next,
    Previous,
    SafeSearch(bool),
    Show,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    /// Parse a prompt line; blank lines yield `None`
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return None;
        }

        let (word, rest) = match line.trim_start().split_once(' ') {
            Some((word, rest)) => (word, rest),
            None => (line.trim_start(), ""),
        };

        Some(match word {
            "search" | "s" => Command::Search(rest.to_string()),
            "next" | "n" => Command::Next,
            "prev" | "p" => Command::Previous,
            "safe" => match rest.trim() {
                "on" => Command::SafeSearch(true),
                "off" => Command::SafeSearch(false),
                _ => Command::Unknown(line.to_string()),
            },
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("search cat"), Some(Command::Search("cat".into())));
        assert_eq!(
            Command::parse("s black cats\n"),
            Some(Command::Search("black cats".into()))
        );
        assert_eq!(Command::parse("next"), Some(Command::Next));
        assert_eq!(Command::parse("p"), Some(Command::Previous));
        assert_eq!(Command::parse("safe on"), Some(Command::SafeSearch(true)));
        assert_eq!(Command::parse("safe off"), Some(Command::SafeSearch(false)));
        assert_eq!(Command::parse("quit"), Some(Command::Quit));
        assert_eq!(Command::parse("   "), None);
    }

    #[test]
    fn test_search_text_is_not_trimmed() {
        // Validation sees exactly what was typed after the command word
        assert_eq!(Command::parse("search  a"), Some(Command::Search(" a".into())));
        assert_eq!(Command::parse("search"), Some(Command::Search(String::new())));
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(Command::parse("safe maybe"), Some(Command::Unknown(_))));
        assert!(matches!(Command::parse("download 3"), Some(Command::Unknown(_))));
    }

    #[test]
    fn test_cli_args() {
        let args = Args::parse_from(["image-searcher", "cat", "--safe-search", "--json"]);
        assert_eq!(args.query.as_deref(), Some("cat"));
        assert!(args.safe_search);
        assert!(args.json);
        assert!(args.config.is_none());

        let args = Args::parse_from(["image-searcher"]);
        assert!(args.query.is_none());
    }
}
