use std::env;

/// Outcome of command line parsing
#[derive(Debug, PartialEq, Eq)]
pub enum ParsedArgs {
    Run(Args),
    /// Help or version was printed
    Exit,
    /// Unknown or malformed argument, help already printed
    Invalid,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Args {
    /// Open a blank Chrome tab and move it and Vortex into place before scanning
    pub chrome: bool,
    /// Click the Vortex button before each website button
    pub vortex: bool,
    /// Log at info level with module names
    pub verbose: bool,
}

impl Args {
    pub fn parse() -> ParsedArgs {
        Self::parse_from(env::args().skip(1))
    }

    pub fn parse_from<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Args::default();

        for arg in args {
            match arg.as_ref() {
                "--help" | "-h" => {
                    print_help();
                    return ParsedArgs::Exit;
                }
                "--version" | "-v" => {
                    println!("{}", version_line());
                    return ParsedArgs::Exit;
                }
                "--chrome" => parsed.chrome = true,
                "--vortex" => parsed.vortex = true,
                "--verbose" => parsed.verbose = true,
                other => {
                    eprintln!("❌ Unknown argument: {}", other);
                    print_help();
                    return ParsedArgs::Invalid;
                }
            }
        }

        ParsedArgs::Run(parsed)
    }
}

pub fn version_line() -> String {
    format!(
        "Vortex Autoclick v{} ({})",
        env!("AUTOCLICK_VERSION_DISPLAY"),
        env!("AUTOCLICK_BUILD_YEAR")
    )
}

fn print_help() {
    println!("🖱️ Vortex Autoclick");
    println!();
    println!("USAGE:");
    println!("    vortex-autoclick [FLAGS]");
    println!();
    println!("FLAGS:");
    println!("    --chrome            Automatically move and size chrome and vortex windows");
    println!("    --vortex            Enables vortex mode (click the Vortex button first)");
    println!("    --verbose           Enables verbose logging");
    println!("    --help, -h          Show this help message");
    println!("    --version, -v       Show version information");
    println!();
    println!("Templates are read from assets/VortexDownloadButton.png and");
    println!("assets/WebsiteDownloadButton.png. Logs go to stderr and log.log.");
    println!("The scan runs until the process is stopped.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_runs_with_defaults() {
        let parsed = Args::parse_from(Vec::<String>::new());
        assert_eq!(parsed, ParsedArgs::Run(Args::default()));
    }

    #[test]
    fn test_all_flags() {
        let parsed = Args::parse_from(["--vortex", "--chrome", "--verbose"]);
        assert_eq!(
            parsed,
            ParsedArgs::Run(Args {
                chrome: true,
                vortex: true,
                verbose: true,
            })
        );
    }

    #[test]
    fn test_unknown_flag_is_invalid() {
        assert_eq!(Args::parse_from(["--fast"]), ParsedArgs::Invalid);
        assert_eq!(Args::parse_from(["assets"]), ParsedArgs::Invalid);
    }

    #[test]
    fn test_version_line_uses_build_stamps() {
        let line = version_line();
        assert!(line.starts_with(&format!("Vortex Autoclick v{}", env!("CARGO_PKG_VERSION"))));
        assert!(line.ends_with(&format!("({})", env!("AUTOCLICK_BUILD_YEAR"))));
    }

    #[test]
    fn test_help_and_version_exit() {
        assert_eq!(Args::parse_from(["--help"]), ParsedArgs::Exit);
        assert_eq!(Args::parse_from(["-v"]), ParsedArgs::Exit);
    }
}
