use crate::config::Config;
use crate::stats::compute_mean;
use crate::time::{format_time, parse_time};
use anyhow::{Context, Result};
use std::fmt;

/// Average of the configured times, in seconds and in display form.
#[derive(Debug, PartialEq, Clone)]
pub struct Report {
    pub avg_secs: f64,
    pub avg_time: String,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Average execution time (seconds): {}", self.avg_secs)?;
        write!(f, "Average execution time: {}", self.avg_time)
    }
}

pub struct Manager {
    cfg: Config,
}

impl Manager {
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }

    pub fn compute_report(&self) -> Result<Report> {
        let secs_vec = self
            .cfg
            .times
            .iter()
            .enumerate()
            .map(|(i_time, time)| {
                parse_time(time)
                    .with_context(|| format!("failed to parse time {i_time} ({time:?})"))
            })
            .collect::<Result<Vec<_>>>()?;
        log::debug!("{secs_vec:?}");

        let avg_secs = compute_mean(&secs_vec);
        let avg_time = format_time(avg_secs).context("failed to format average")?;

        Ok(Report { avg_secs, avg_time })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_report() {
        let report = Manager::new(Config::default()).compute_report().unwrap();
        assert_eq!(report.avg_secs, (4.701 + 4.644 + 4.630) / 3.0);
        assert_eq!(report.avg_time, "0:04.66");
        assert_eq!(
            report.to_string(),
            format!(
                "Average execution time (seconds): {}\nAverage execution time: 0:04.66",
                report.avg_secs
            )
        );
    }

    #[test]
    fn mixed_forms_are_averaged() {
        let cfg = Config::from_times(vec!["4:41.67".to_string(), "281,67".to_string()]).unwrap();
        let report = Manager::new(cfg).compute_report().unwrap();
        assert!((report.avg_secs - 281.67).abs() < 1e-9);
        assert_eq!(report.avg_time, "4:41.67");
    }

    #[test]
    fn malformed_time_aborts() {
        let cfg = Config::from_times(vec!["4,701".to_string(), "abc".to_string()]).unwrap();
        let error = Manager::new(cfg).compute_report().unwrap_err();
        assert!(error.downcast_ref::<crate::time::TimeError>().is_some());
        assert!(format!("{error:#}").contains("failed to parse time 1"));
    }
}
