//! Syntactic checks for pasted listing links.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Accepted marketplace hosts. Only the start of the input is constrained;
/// path and query are free-form.
const LISTING_PATTERN: &str = r"(?i)^https?://(www\.)?ebay\.(com|co\.uk|de|fr|it|es|ca|au)";

static LISTING_RE: OnceLock<Regex> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum UrlValidationError {
    #[error("Please enter an eBay product URL")]
    Empty,
    #[error("Please enter a valid eBay product URL")]
    Invalid,
}

fn listing_regex() -> &'static Regex {
    LISTING_RE.get_or_init(|| {
        Regex::new(LISTING_PATTERN)
            .unwrap_or_else(|err| panic!("listing pattern failed to compile: {err}"))
    })
}

/// True when `input` starts with an allow-listed marketplace URL.
pub fn is_listing_url(input: &str) -> bool {
    listing_regex().is_match(input)
}

/// Checks a raw form value. Blank input gets its own message so the form can
/// tell "nothing pasted" apart from "wrong link".
pub fn validate_listing_url(input: &str) -> Result<(), UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }
    if !is_listing_url(input) {
        return Err(UrlValidationError::Invalid);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_reports_empty() {
        for input in ["", " ", "\t", "\n  \r\n"] {
            assert_eq!(validate_listing_url(input), Err(UrlValidationError::Empty), "{input:?}");
        }
    }

    #[test]
    fn non_matching_input_reports_invalid() {
        for input in [
            "ebay.com/itm/1",
            "ftp://ebay.com/itm/1",
            "https://amazon.com/dp/1",
            "https://www.ebay.nl/itm/1",
            "https://shop.ebay.com/itm/1",
            " https://www.ebay.com/itm/1",
            "hello",
        ] {
            assert_eq!(
                validate_listing_url(input),
                Err(UrlValidationError::Invalid),
                "{input:?}"
            );
        }
    }

    #[test]
    fn allow_listed_hosts_are_accepted() {
        for input in [
            "https://www.ebay.com/itm/12345",
            "http://ebay.co.uk/itm/1?hash=abc",
            "HTTPS://WWW.EBAY.DE",
            "https://ebay.fr",
            "https://www.ebay.it/sch/i.html",
            "https://ebay.es/itm/9",
            "https://www.eBay.ca/itm/9",
            "https://ebay.au/x",
        ] {
            assert_eq!(validate_listing_url(input), Ok(()), "{input:?}");
        }
    }

    #[test]
    fn only_the_prefix_is_constrained() {
        // Trailing whitespace and anything after the TLD are left alone.
        assert!(is_listing_url("https://ebay.com "));
        assert!(is_listing_url("https://ebay.community/whatever"));
    }

    #[test]
    fn messages_match_form_copy() {
        assert_eq!(UrlValidationError::Empty.to_string(), "Please enter an eBay product URL");
        assert_eq!(
            UrlValidationError::Invalid.to_string(),
            "Please enter a valid eBay product URL"
        );
    }
}
