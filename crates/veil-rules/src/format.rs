//! Format-preserving maskers for `preserve_format` rules
//!
//! Maskers replace digits/letters with `*` in place, leaving separators and
//! grouping untouched so the masked span has the same shape as the match.

const MASK: char = '*';

/// How a matched span is masked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formatter {
    /// Keep the first `leading` and last `trailing` digits
    Digits { leading: usize, trailing: usize },
    /// Keep the last `trailing` alphanumeric characters
    Alphanumeric { trailing: usize },
}

/// Formatter used for a rule, chosen by rule name
pub fn formatter_for(rule_name: &str) -> Formatter {
    if rule_name.contains("credit_card") {
        Formatter::Digits {
            leading: 1,
            trailing: 4,
        }
    } else if ["phone", "account", "routing", "ssn"]
        .iter()
        .any(|category| rule_name.contains(category))
    {
        Formatter::Digits {
            leading: 0,
            trailing: 4,
        }
    } else {
        Formatter::Alphanumeric { trailing: 4 }
    }
}

/// Mask `matched` with the formatter registered for `rule_name`
pub fn mask(rule_name: &str, matched: &str) -> String {
    formatter_for(rule_name).apply(matched)
}

impl Formatter {
    pub fn apply(&self, matched: &str) -> String {
        match *self {
            Formatter::Digits { leading, trailing } => {
                mask_where(matched, |c| c.is_ascii_digit(), leading, trailing)
            }
            Formatter::Alphanumeric { trailing } => {
                mask_where(matched, char::is_alphanumeric, 0, trailing)
            }
        }
    }
}

fn mask_where(
    matched: &str,
    maskable: impl Fn(char) -> bool,
    leading: usize,
    trailing: usize,
) -> String {
    let total = matched.chars().filter(|&c| maskable(c)).count();
    // Too short to hide anything: mask the whole span
    let (leading, trailing) = if leading + trailing >= total {
        (0, 0)
    } else {
        (leading, trailing)
    };

    let mut seen = 0;
    matched
        .chars()
        .map(|c| {
            if !maskable(c) {
                return c;
            }
            let index = seen;
            seen += 1;
            if index < leading || index >= total - trailing {
                c
            } else {
                MASK
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_mask_keeps_grouping() {
        assert_eq!(mask("credit_card_full", "4532-1234-5678-9012"), "4***-****-****-9012");
        assert_eq!(mask("credit_card_full", "4532 1234 5678 9012"), "4*** **** **** 9012");
        assert_eq!(mask("credit_card_full", "4532123456789012"), "4***********9012");
    }

    #[test]
    fn test_trailing_digits() {
        assert_eq!(mask("phone_number", "(555) 123-4567"), "(***) ***-4567");
        assert_eq!(mask("bank_account_number", "acct 12345678"), "acct ****5678");
    }

    #[test]
    fn test_generic_mask() {
        assert_eq!(mask("employee_id", "EMP-AB12345"), "***-***2345");
    }

    #[test]
    fn test_short_match_fully_masked() {
        assert_eq!(mask("credit_card_full", "1234"), "****");
        assert_eq!(mask("employee_id", "A1"), "**");
    }
}
