use super::CliFlags;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidNumber(String),
    MissingValue(&'static str),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::MissingValue(flag) => write!(f, "Missing value for {}", flag),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "--no-symbols" => flags.no_symbols = true,
            "--no-digits" => flags.no_digits = true,
            "-l" | "--length" => {
                i += 1;
                match args.get(i) {
                    Some(v) => {
                        flags.length = Some(
                            v.parse()
                                .map_err(|_| ParseError::InvalidNumber(v.clone()))?,
                        );
                    }
                    None => return Err(ParseError::MissingValue("--length")),
                }
            }
            "-n" | "--number" => {
                i += 1;
                match args.get(i) {
                    Some(v) => {
                        flags.number = Some(
                            v.parse()
                                .map_err(|_| ParseError::InvalidNumber(v.clone()))?,
                        );
                    }
                    None => return Err(ParseError::MissingValue("--number")),
                }
            }
            "--check" => {
                i += 1;
                match args.get(i) {
                    Some(v) => flags.check = Some(v.clone()),
                    None => return Err(ParseError::MissingValue("--check")),
                }
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("passforge")
            .chain(args.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parse_generation_flags() {
        let flags = parse(&argv(&["-l", "16", "-n", "3", "--no-symbols"])).unwrap();
        assert_eq!(flags.length, Some(16));
        assert_eq!(flags.number, Some(3));
        assert!(flags.no_symbols);
        assert!(!flags.no_digits);
        assert!(!flags.clipboard);
    }

    #[test]
    fn parse_long_and_short_forms() {
        let short = parse(&argv(&["-l", "8", "-b", "-q"])).unwrap();
        let long = parse(&argv(&["--length", "8", "--board", "--quiet"])).unwrap();
        assert_eq!(short, long);
    }

    #[test]
    fn parse_check() {
        let flags = parse(&argv(&["--check", "Abcdefgh1234"])).unwrap();
        assert_eq!(flags.check.as_deref(), Some("Abcdefgh1234"));
    }

    #[test]
    fn invalid_number() {
        assert_eq!(
            parse(&argv(&["-l", "abc"])),
            Err(ParseError::InvalidNumber("abc".to_string()))
        );
    }

    #[test]
    fn missing_value() {
        assert_eq!(
            parse(&argv(&["-l"])),
            Err(ParseError::MissingValue("--length"))
        );
        assert_eq!(
            parse(&argv(&["--check"])),
            Err(ParseError::MissingValue("--check"))
        );
    }

    #[test]
    fn unknown_argument() {
        assert_eq!(
            parse(&argv(&["--wat"])),
            Err(ParseError::UnknownArg("--wat".to_string()))
        );
    }

    #[test]
    fn no_args_is_default() {
        assert_eq!(parse(&argv(&[])).unwrap(), CliFlags::default());
    }
}
