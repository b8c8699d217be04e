#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub no_symbols: bool,
    pub no_digits: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub check: Option<String>,
}
