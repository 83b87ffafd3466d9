/// Display bucket for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreClass {
    Good,
    Average,
    Poor,
}

/// Colour and label treatment for one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTokens {
    pub label: &'static str,
    /// Accent colour as `#rrggbb`.
    pub accent: &'static str,
    /// Darker end of the accent gradient.
    pub accent_dark: &'static str,
    pub rgb: (u8, u8, u8),
}

const GOOD: StyleTokens = StyleTokens {
    label: "good",
    accent: "#84994F",
    accent_dark: "#6a7a3f",
    rgb: (132, 153, 79),
};

const AVERAGE: StyleTokens = StyleTokens {
    label: "average",
    accent: "#FCB53B",
    accent_dark: "#d99a2b",
    rgb: (252, 181, 59),
};

const POOR: StyleTokens = StyleTokens {
    label: "poor",
    accent: "#A72703",
    accent_dark: "#861f02",
    rgb: (167, 39, 3),
};

impl ScoreClass {
    pub fn tokens(self) -> &'static StyleTokens {
        match self {
            ScoreClass::Good => &GOOD,
            ScoreClass::Average => &AVERAGE,
            ScoreClass::Poor => &POOR,
        }
    }

    pub fn label(self) -> &'static str {
        self.tokens().label
    }
}

/// Buckets a 0..=100 percentage: `>= 80` good, `>= 60` average, else poor.
pub fn classify(percentage: f64) -> ScoreClass {
    if percentage >= 80.0 {
        ScoreClass::Good
    } else if percentage >= 60.0 {
        ScoreClass::Average
    } else {
        ScoreClass::Poor
    }
}

/// Rules are binary: only the `pass` status is good.
pub fn classify_rule(status: &str) -> ScoreClass {
    if status == crate::RULE_STATUS_PASS {
        ScoreClass::Good
    } else {
        ScoreClass::Poor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_exact() {
        assert_eq!(classify(80.0), ScoreClass::Good);
        assert_eq!(classify(79.0), ScoreClass::Average);
        assert_eq!(classify(60.0), ScoreClass::Average);
        assert_eq!(classify(59.0), ScoreClass::Poor);
    }

    #[test]
    fn extremes_and_fractions() {
        assert_eq!(classify(100.0), ScoreClass::Good);
        assert_eq!(classify(0.0), ScoreClass::Poor);
        assert_eq!(classify(79.9), ScoreClass::Average);
        assert_eq!(classify(59.99), ScoreClass::Poor);
    }

    #[test]
    fn rule_status_is_binary() {
        assert_eq!(classify_rule("pass"), ScoreClass::Good);
        assert_eq!(classify_rule("fail"), ScoreClass::Poor);
        assert_eq!(classify_rule("warning"), ScoreClass::Poor);
        assert_eq!(classify_rule("PASS"), ScoreClass::Poor);
    }

    #[test]
    fn every_bucket_has_tokens() {
        assert_eq!(ScoreClass::Good.label(), "good");
        assert_eq!(ScoreClass::Average.tokens().accent, "#FCB53B");
        assert_eq!(ScoreClass::Poor.tokens().rgb, (167, 39, 3));
    }
}
