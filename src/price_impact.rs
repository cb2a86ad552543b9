/// Broad category of a pool's fee tier, used to select how much price
/// impact is tolerable before warning the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeeCategory {
    Stable,
    Correlated,
    Common,
    Exotic,
}

/// Severity of a computed price impact, ordered from benign to blocking.
///
/// `VeryHigh` and `Invalid` are the two states that should block the action;
/// `Invalid` specifically means the impact could not be computed at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ImpactLevel {
    Normal,
    High,
    VeryHigh,
    Invalid,
}

impl ImpactLevel {
    /// Whether the UI should block the action at this severity.
    pub fn blocks_action(&self) -> bool {
        matches!(self, ImpactLevel::VeryHigh | ImpactLevel::Invalid)
    }
}

/// Warning threshold per fee category, in percentage points.
///
/// This is retunable policy, not algorithm: construct your own values or take
/// `Default` for the shipped table (stable 0.1, correlated 0.25, 1.0 for
/// everything else).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpactThresholds {
    pub stable: f64,
    pub correlated: f64,
    pub default: f64,
}

impl Default for ImpactThresholds {
    fn default() -> Self {
        Self {
            stable: 0.1,
            correlated: 0.25,
            default: 1.0,
        }
    }
}

impl ImpactThresholds {
    pub fn threshold_for(&self, category: FeeCategory) -> f64 {
        match category {
            FeeCategory::Stable => self.stable,
            FeeCategory::Correlated => self.correlated,
            FeeCategory::Common | FeeCategory::Exotic => self.default,
        }
    }
}

pub const INVALID_IMPACT_MESSAGE: &str = "unable to calculate price impact";
pub const HIGH_IMPACT_MESSAGE: &str = "price impact is high";
pub const VERY_HIGH_IMPACT_MESSAGE: &str = "price impact is very high";

/// A classified price impact: severity, formatted display string, and the
/// warning copy to show (if any).
#[derive(Clone, Debug, PartialEq)]
pub struct ImpactVerdict {
    pub level: ImpactLevel,
    pub display: String,
    pub message: Option<&'static str>,
}

/// Classifies a signed price-impact percentage against a warning threshold.
///
/// `None` or NaN input means the impact could not be computed; that is a
/// first-class `Invalid` verdict rendered as `"--"`, not an error. The level
/// is `VeryHigh` above ten times the threshold, `High` above the threshold,
/// `Normal` otherwise (favorable negative impact is always `Normal`).
pub fn classify(price_impact: Option<f64>, threshold: f64) -> ImpactVerdict {
    let Some(pi) = price_impact.filter(|v| !v.is_nan()) else {
        return ImpactVerdict {
            level: ImpactLevel::Invalid,
            display: "--".to_string(),
            message: Some(INVALID_IMPACT_MESSAGE),
        };
    };

    let display = if pi.abs() < 0.01 {
        "<0.01%".to_string()
    } else {
        format!("{pi:.2}%")
    };

    let (level, message) = if pi > threshold * 10.0 {
        (ImpactLevel::VeryHigh, Some(VERY_HIGH_IMPACT_MESSAGE))
    } else if pi > threshold {
        (ImpactLevel::High, Some(HIGH_IMPACT_MESSAGE))
    } else {
        (ImpactLevel::Normal, None)
    };

    ImpactVerdict {
        level,
        display,
        message,
    }
}

/// Like [`classify`], but looks the threshold up from the pool's fee
/// category.
pub fn classify_for_category(
    price_impact: Option<f64>,
    category: FeeCategory,
    thresholds: &ImpactThresholds,
) -> ImpactVerdict {
    classify(price_impact, thresholds.threshold_for(category))
}
