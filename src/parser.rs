use crate::validator::{self, digits_to_u32, Reasons, ValidatedText};
use crate::IntegerList;

/// Keyword that switches a line to random generation: `random <count>`.
pub const RANDOM_KEYWORD: &str = "random";

/// What the user asked to sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Literal(IntegerList),
    Random(usize),
}

/// Convert validated text into integers, in input order.
pub fn parse(text: &ValidatedText<'_>) -> IntegerList {
    text.tokens().iter().map(|token| digits_to_u32(token)).collect()
}

/// Classify a line as `random <count>` or a literal list and check it.
///
/// The random form needs exactly two tokens, the keyword and an all-digit
/// count. Anything else, including `random` with a non-numeric count, is
/// validated as a literal list.
pub fn parse_request(line: &str) -> Result<Request, Reasons> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    if let [keyword, count] = tokens.as_slice() {
        if *keyword == RANDOM_KEYWORD && count.chars().all(|c| c.is_ascii_digit()) {
            return validator::check_count(count).map(Request::Random);
        }
    }

    let validated = validator::check(line)?;
    Ok(Request::Literal(parse(&validated)))
}
