pub const INPUT_FLAG: &str = "--input";

/// Returns the token after the first `--input` that has one.
///
/// Anything else on the command line is ignored. An empty value is treated
/// the same as no value.
pub fn find_input(args: &[String]) -> Option<&str> {
    args.windows(2)
        .find(|pair| pair[0] == INPUT_FLAG)
        .map(|pair| pair[1].as_str())
        .filter(|value| !value.is_empty())
}
