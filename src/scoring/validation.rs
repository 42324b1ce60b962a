use super::config::{Cutoffs, ScoringConfig};

// NaN is outside every range, so it is rejected here too.
fn check_unit(errors: &mut Vec<String>, field: &str, value: f64) {
    if !(0.0..=1.0).contains(&value) {
        errors.push(format!("{}: must be between 0 and 1, got {}", field, value));
    }
}

fn check_cutoffs(errors: &mut Vec<String>, field: &str, cutoffs: &Cutoffs) {
    check_unit(errors, &format!("{}.strength", field), cutoffs.strength);
    check_unit(errors, &format!("{}.improvement", field), cutoffs.improvement);
    if cutoffs.improvement > cutoffs.strength {
        errors.push(format!(
            "{}: improvement cutoff {} is above strength cutoff {}",
            field, cutoffs.improvement, cutoffs.strength
        ));
    }
}

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    check_unit(&mut errors, "scoring.relevance_floor", config.relevance_floor);
    check_unit(&mut errors, "scoring.flag_threshold", config.flag_threshold);

    let c = &config.cutoffs;
    check_cutoffs(&mut errors, "scoring.cutoffs.skills", &c.skills);
    check_cutoffs(&mut errors, "scoring.cutoffs.experience", &c.experience);
    check_cutoffs(&mut errors, "scoring.cutoffs.salary", &c.salary);
    check_cutoffs(&mut errors, "scoring.cutoffs.location", &c.location);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_scoring(&ScoringConfig::default()).is_ok());
    }

    #[test]
    fn test_floor_out_of_range() {
        let mut config = ScoringConfig::default();
        config.relevance_floor = 1.5;
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.relevance_floor"));
    }

    #[test]
    fn test_nan_floor_rejected() {
        let config: ScoringConfig = serde_saphyr::from_str("relevance_floor: .nan\n").unwrap();
        assert!(config.relevance_floor.is_nan());
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("scoring.relevance_floor"));
    }

    #[test]
    fn test_nan_cutoff_rejected() {
        let yaml = "cutoffs:\n  location: { strength: .nan, improvement: 0.5 }\n";
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("scoring.cutoffs.location.strength"));
    }

    #[test]
    fn test_inverted_cutoffs() {
        let mut config = ScoringConfig::default();
        config.cutoffs.salary = Cutoffs::new(0.4, 0.6);
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("scoring.cutoffs.salary"));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ScoringConfig::default();
        config.relevance_floor = 2.0; // Error 1
        config.flag_threshold = -0.1; // Error 2
        config.cutoffs.skills = Cutoffs::new(1.2, 0.3); // Error 3
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
