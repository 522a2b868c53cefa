use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Real-number literal: sign, `_` digit grouping, fraction, exponent, inf and nan.
    static ref REAL_LITERAL: Regex = Regex::new(
        r"(?i)^[+-]?(?:(?:(?:\d(?:_?\d)*)?\.\d(?:_?\d)*|\d(?:_?\d)*\.?)(?:e[+-]?\d(?:_?\d)*)?|inf(?:inity)?|nan)$"
    )
    .unwrap();
    // Any character with a numeric value: category N plus the Han numerals (Lo).
    static ref NUMERIC_CHARACTER: Regex = Regex::new(concat!(
        r"^[\p{N}",
        r"\x{3405}\x{3483}\x{382A}\x{3B4D}\x{4E00}\x{4E03}\x{4E07}\x{4E09}",
        r"\x{4E5D}\x{4E8C}\x{4E94}\x{4E96}\x{4EBF}\x{4EC0}\x{4EDF}\x{4EE8}",
        r"\x{4F0D}\x{4F70}\x{5104}\x{5146}\x{5169}\x{516B}\x{516D}\x{5341}",
        r"\x{5343}\x{5344}\x{5345}\x{534C}\x{53C1}\x{53C2}\x{53C3}\x{53C4}",
        r"\x{56DB}\x{58F1}\x{58F9}\x{5E7A}\x{5EFE}\x{5EFF}\x{5F0C}\x{5F0D}",
        r"\x{5F0E}\x{5F10}\x{62FE}\x{634C}\x{67D2}\x{6F06}\x{7396}\x{767E}",
        r"\x{8086}\x{842C}\x{8CAE}\x{8CB3}\x{8D30}\x{9621}\x{9646}\x{964C}",
        r"\x{9678}\x{96F6}\x{F96B}\x{F973}\x{F978}\x{F9B2}\x{F9D1}\x{F9D3}",
        r"\x{F9FD}\x{20001}\x{20064}\x{200E2}\x{20121}\x{2092A}\x{20983}\x{2098C}",
        r"\x{2099C}\x{20AEA}\x{20AFD}\x{20B19}\x{22390}\x{22998}\x{23B1B}\x{2626D}",
        r"\x{2F890}",
        r"]$",
    ))
    .unwrap();
}

/// Decides whether a token that is not an operator is a legal operand.
pub trait OperandRecognizer: Send + Sync {
    fn is_operand(&self, token: &str) -> bool;
}

impl<F> OperandRecognizer for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_operand(&self, token: &str) -> bool {
        self(token)
    }
}

/// Accepts real-number literals and single characters with a Unicode
/// numeric value such as `½`, `Ⅻ` or `五`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericOperand;

impl OperandRecognizer for NumericOperand {
    fn is_operand(&self, token: &str) -> bool {
        REAL_LITERAL.is_match(token) || NUMERIC_CHARACTER.is_match(token)
    }
}
