use nom::{
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{alpha1, alphanumeric1},
    combinator::{all_consuming, recognize},
    multi::many0,
    sequence::{pair, preceded},
    IResult,
};

use crate::token::SpecialChar;

/// A leading letter followed by any letters, digits, underscores or hyphens.
pub fn rule_name(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alpha1,
        many0(alt((alphanumeric1, tag("_"), tag("-")))),
    ))(input)
}

/// Check that the whole of `name` is a valid rule name.
pub fn is_rule_name(name: &str) -> bool {
    all_consuming(rule_name)(name).is_ok()
}

/// Match the assignment marker, allowing leading whitespace of any kind the
/// reader would also trim. The remaining input is the rule body.
pub fn assignment(input: &str) -> IResult<&str, &str> {
    preceded(
        take_while(char::is_whitespace),
        tag(SpecialChar::Assignment.as_str()),
    )(input)
}
