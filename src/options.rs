use std::fmt;

pub const DEFAULT_STEP: u32 = 5;
pub const DEFAULT_THRESHOLD: u8 = 100;

/// Search parameters for the boundary detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Sampling stride in pixels, in `1..=100`.
    pub step: u32,
    /// Alpha value below which a pixel counts as transparent, in `1..=255`.
    pub threshold: u8,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            step: DEFAULT_STEP,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Emitted when a user supplied value falls outside its accepted range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeWarning {
    pub name: &'static str,
    pub given: i64,
    pub min: i64,
    pub max: i64,
    pub default: i64,
}

impl fmt::Display for RangeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} must be between {} and {} (got {}). Setting to default={}",
            self.name, self.min, self.max, self.given, self.default
        )
    }
}

impl Options {
    /// Builds options from optional raw values, replacing anything out of
    /// range with its default. Never fails; each replacement is reported.
    pub fn resolve(step: Option<i64>, threshold: Option<i64>) -> (Self, Vec<RangeWarning>) {
        let mut warnings = vec![];

        let step = verify("step", step, 1, 100, DEFAULT_STEP as i64, &mut warnings);
        let threshold = verify(
            "threshold",
            threshold,
            1,
            255,
            DEFAULT_THRESHOLD as i64,
            &mut warnings,
        );

        let options = Options {
            step: step as u32,
            threshold: threshold as u8,
        };
        (options, warnings)
    }
}

fn verify(
    name: &'static str,
    value: Option<i64>,
    min: i64,
    max: i64,
    default: i64,
    warnings: &mut Vec<RangeWarning>,
) -> i64 {
    match value {
        None => default,
        Some(v) if (min..=max).contains(&v) => v,
        Some(given) => {
            warnings.push(RangeWarning {
                name,
                given,
                min,
                max,
                default,
            });
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_absent() {
        let (options, warnings) = Options::resolve(None, None);
        assert_eq!(options, Options::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_in_range_values_kept() {
        let (options, warnings) = Options::resolve(Some(1), Some(255));
        assert_eq!(options.step, 1);
        assert_eq!(options.threshold, 255);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_step_out_of_range_falls_back() {
        let (options, warnings) = Options::resolve(Some(500), None);
        assert_eq!(options.step, 5);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].name, "step");
        assert_eq!(warnings[0].given, 500);
    }

    #[test]
    fn test_threshold_zero_and_negative_step() {
        let (options, warnings) = Options::resolve(Some(-3), Some(0));
        assert_eq!(options, Options::default());
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[1].name, "threshold");
    }

    #[test]
    fn test_warning_message() {
        let (_, warnings) = Options::resolve(None, Some(300));
        assert_eq!(
            warnings[0].to_string(),
            "threshold must be between 1 and 255 (got 300). Setting to default=100"
        );
    }
}
