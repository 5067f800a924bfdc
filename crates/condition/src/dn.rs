//! Distinguished-name fragment parsing.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DnParseError {
    #[error("no '=' separator")]
    MissingEquals,

    #[error("no ',' separator")]
    MissingComma,

    #[error("',' precedes the first '='")]
    CommaBeforeEquals,
}

/// Extract the value of the leading RDN of a `<attr>=<value>,<rest>` name.
///
/// The value is everything strictly between the first `=` and the first
/// `,`; it may be empty. No escaping rules are applied.
pub fn extract_name(dn: &str) -> Result<&str, DnParseError> {
    let start = dn.find('=').ok_or(DnParseError::MissingEquals)?;
    let end = dn.find(',').ok_or(DnParseError::MissingComma)?;
    if end <= start {
        return Err(DnParseError::CommaBeforeEquals);
    }
    Ok(&dn[start + 1..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_leading_rdn_value() {
        assert_eq!(extract_name("dn=1234,our=people,dc=darkedges,dc=com"), Ok("1234"));
        assert_eq!(extract_name("uid=alice,ou=people"), Ok("alice"));
    }

    #[test]
    fn only_first_separators_count() {
        assert_eq!(extract_name("cn=a=b,c,d"), Ok("a=b"));
    }

    #[test]
    fn empty_value_is_allowed() {
        assert_eq!(extract_name("cn=,ou=people"), Ok(""));
    }

    #[test]
    fn missing_equals_is_rejected() {
        assert_eq!(extract_name("12345"), Err(DnParseError::MissingEquals));
        assert_eq!(extract_name("alice,ou,people"), Err(DnParseError::MissingEquals));
    }

    #[test]
    fn missing_comma_is_rejected() {
        assert_eq!(extract_name("uid=alice"), Err(DnParseError::MissingComma));
    }

    #[test]
    fn comma_before_equals_is_rejected() {
        assert_eq!(extract_name("alice,uid=bob"), Err(DnParseError::CommaBeforeEquals));
    }

    #[test]
    fn multibyte_values_are_sliced_on_char_boundaries() {
        assert_eq!(extract_name("cn=Jürgen,o=example"), Ok("Jürgen"));
    }
}
