use crate::error::AmountError;

/// A wager or transfer amount as the user wrote it: a literal value, or a
/// shorthand resolved against a balance at the point of use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Amount {
    Exact(i64),
    /// The entire source balance.
    All,
    /// Half the source balance, rounded down.
    Half,
}

impl Amount {
    /// Parse the amount grammar: `all`, `half`, a decimal with a `k`/`m`/`b`
    /// magnitude suffix (`2.5k` = 2500), or a literal integer. Parsing never
    /// caps against a balance; callers validate the resolved value.
    pub fn parse(input: &str) -> Result<Self, AmountError> {
        let normalized = input.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "all" => return Ok(Self::All),
            "half" => return Ok(Self::Half),
            _ => {}
        }

        let multiplier = match normalized.as_bytes().last().copied() {
            Some(b'k') => Some(1_000_i64),
            Some(b'm') => Some(1_000_000),
            Some(b'b') => Some(1_000_000_000),
            _ => None,
        };
        if let Some(multiplier) = multiplier {
            let prefix = &normalized[..normalized.len() - 1];
            let value = prefix
                .parse::<f64>()
                .map_err(|_| AmountError::Unparseable(input.to_string()))?;
            let scaled = value * multiplier as f64;
            if !scaled.is_finite() || scaled < i64::MIN as f64 || scaled > i64::MAX as f64 {
                return Err(AmountError::OutOfRange(input.to_string()));
            }
            return Ok(Self::Exact(scaled.trunc() as i64));
        }

        normalized
            .parse::<i64>()
            .map(Self::Exact)
            .map_err(|_| AmountError::Unparseable(input.to_string()))
    }

    /// Resolve against the balance the amount is drawn from.
    pub fn resolve(&self, balance: i64) -> i64 {
        match self {
            Self::Exact(value) => *value,
            Self::All => balance,
            Self::Half => balance / 2,
        }
    }
}

/// Parse and resolve in one step.
pub fn parse_amount(input: &str, balance: i64) -> Result<i64, AmountError> {
    Amount::parse(input).map(|amount| amount.resolve(balance))
}
