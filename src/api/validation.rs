use crate::error::{ChartError, ChartResult};

use super::DashboardConfig;

const MAX_SCORE_DECIMALS: u8 = 6;

pub(super) fn validate_dashboard_config(config: &DashboardConfig) -> ChartResult<()> {
    if config.top_k == 0 {
        return Err(ChartError::InvalidData(
            "leaderboard top_k must be >= 1".to_owned(),
        ));
    }
    if !config.bar_opacity.is_finite() || !(0.0..=1.0).contains(&config.bar_opacity) {
        return Err(ChartError::InvalidData(
            "bar opacity must be finite and in [0, 1]".to_owned(),
        ));
    }
    if config.score_decimals > MAX_SCORE_DECIMALS {
        return Err(ChartError::InvalidData(format!(
            "tooltip score decimals must be <= {MAX_SCORE_DECIMALS}"
        )));
    }
    if config.diverging_evaluations.iter().any(String::is_empty) {
        return Err(ChartError::InvalidData(
            "diverging evaluation ids must not be empty".to_owned(),
        ));
    }
    config.progressive_color.validate()?;
    config.conservative_color.validate()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_dashboard_config;
    use crate::api::DashboardConfig;
    use crate::error::ChartError;

    #[test]
    fn default_config_is_valid() {
        validate_dashboard_config(&DashboardConfig::default()).expect("default config");
    }

    #[test]
    fn zero_top_k_is_rejected() {
        let err = validate_dashboard_config(&DashboardConfig::new().with_top_k(0))
            .expect_err("top_k 0 must fail");
        assert!(matches!(err, ChartError::InvalidData(_)));
    }

    #[test]
    fn opacity_outside_unit_range_is_rejected() {
        for opacity in [-0.1, 1.5, f64::NAN] {
            let config = DashboardConfig::new().with_bar_opacity(opacity);
            assert!(validate_dashboard_config(&config).is_err());
        }
    }

    #[test]
    fn empty_diverging_id_is_rejected() {
        let config = DashboardConfig::new().with_diverging_evaluations([""]);
        assert!(validate_dashboard_config(&config).is_err());
    }
}
